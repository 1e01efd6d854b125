//! 按键结果（应答或推送）
//!
//! 桥边界格式：`{"key": <子类型>, "tag": <u64>, "error": <int>, "value": <值>}`。
//! `value` 按按键注册的原型解码。

use crate::ProtocolError;
use crate::key::Key;
use crate::value::Value;
use serde::Deserialize;
use serde_json::json;
use std::fmt;

/// 解码失败时使用的错误码
pub const DECODE_ERROR_CODE: i32 = -1;

const EMPTY_DATA_DESC: &str = "empty or nil json data";

#[derive(Deserialize)]
struct RawResult {
    key: u32,
    #[serde(default)]
    tag: u64,
    #[serde(default)]
    error: i32,
    #[serde(default)]
    value: serde_json::Value,
}

/// 解码后的按键结果（构造后不可变）
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResult {
    key: Option<&'static Key>,
    tag: u64,
    error_code: i32,
    error_desc: String,
    value: Option<Value>,
}

impl KeyResult {
    pub fn new(key: &'static Key, tag: u64, error_code: i32, value: Option<Value>) -> Self {
        Self {
            key: Some(key),
            tag,
            error_code,
            error_desc: describe(error_code),
            value,
        }
    }

    /// 成功结果
    pub fn success(key: &'static Key, tag: u64, value: Value) -> Self {
        Self::new(key, tag, 0, Some(value))
    }

    /// 解码失败结果（错误码 -1）
    pub fn failure(key: Option<&'static Key>, tag: u64, desc: impl Into<String>) -> Self {
        Self {
            key,
            tag,
            error_code: DECODE_ERROR_CODE,
            error_desc: desc.into(),
            value: None,
        }
    }

    /// 严格解码
    pub fn parse(data: &[u8]) -> Result<Self, ProtocolError> {
        if data.is_empty() {
            return Err(ProtocolError::invalid("result", EMPTY_DATA_DESC));
        }
        let raw: RawResult = serde_json::from_slice(data)?;
        let key = Key::from_sub_type(raw.key)?;
        let value = decode_value(key, &raw.value)?;
        Ok(Self::new(key, raw.tag, raw.error, value))
    }

    /// 宽松解码：错误记录在结果里（错误码 -1），从不失败
    pub fn from_json(data: &[u8]) -> Self {
        if data.is_empty() {
            return Self::failure(None, 0, EMPTY_DATA_DESC);
        }
        match Self::parse(data) {
            Ok(result) => result,
            Err(err) => Self::failure(None, 0, format!("error decoding json data: {err}")),
        }
    }

    /// 编码为桥边界 JSON
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "key": self.key.map(|k| k.sub_type()).unwrap_or_default(),
            "tag": self.tag,
            "error": self.error_code,
            "value": self.value.as_ref().map(Value::to_json).unwrap_or(serde_json::Value::Null),
        })
    }

    pub fn key(&self) -> Option<&'static Key> {
        self.key
    }

    pub fn tag(&self) -> u64 {
        self.tag
    }

    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    pub fn error_desc(&self) -> &str {
        &self.error_desc
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    pub fn succeeded(&self) -> bool {
        self.error_code == 0
    }

    /// 成功且带值
    pub fn has_value(&self) -> bool {
        self.succeeded() && self.value.is_some()
    }
}

impl fmt::Display for KeyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result{{key: ")?;
        match self.key {
            Some(key) => write!(f, "{key}")?,
            None => f.write_str("none")?,
        }
        write!(f, ", tag: {}, error: {}", self.tag, self.error_code)?;
        if !self.error_desc.is_empty() {
            write!(f, " ({})", self.error_desc)?;
        }
        match &self.value {
            Some(value) => write!(f, ", value: {value}}}"),
            None => f.write_str(", value: none}"),
        }
    }
}

fn describe(error_code: i32) -> String {
    if error_code == 0 {
        String::new()
    } else {
        format!("error {error_code}")
    }
}

/// 缺失、`null`、`""` 视为无值；`{}` 无法按原型解码时也视为无值（设置应答常见）
fn decode_value(key: &'static Key, json: &serde_json::Value) -> Result<Option<Value>, ProtocolError> {
    match json {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.is_empty() => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => {
            Ok(Value::from_json(key.kind(), json).ok())
        }
        _ => Value::from_json(key.kind(), json).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_parse_cached_value() {
        let data = br#"{"key":117440514,"tag":0,"error":0,"value":{"value":42}}"#;
        let result = KeyResult::from_json(data);
        assert!(result.succeeded());
        assert_eq!(result.key(), Some(&keys::AIR_LINK_SIGNAL_QUALITY));
        assert_eq!(result.value(), Some(&Value::Uint64(42)));
    }

    /// 设置应答中的空对象不算解码错误
    #[test]
    fn test_set_reply_with_empty_object() {
        let data = br#"{"key":16777226,"tag":77,"error":0,"value":{}}"#;
        let result = KeyResult::parse(data).unwrap();
        assert!(result.succeeded());
        assert_eq!(result.tag(), 77);
        assert!(result.value().is_none());
        assert!(!result.has_value());
    }

    #[test]
    fn test_empty_and_malformed() {
        let result = KeyResult::from_json(b"");
        assert_eq!(result.error_code(), DECODE_ERROR_CODE);
        assert_eq!(result.error_desc(), "empty or nil json data");

        let result = KeyResult::from_json(b"{not json");
        assert_eq!(result.error_code(), DECODE_ERROR_CODE);
        assert!(!result.error_desc().is_empty());

        let result = KeyResult::from_json(br#"{"key":1,"tag":0,"error":0}"#);
        assert_eq!(result.error_code(), DECODE_ERROR_CODE);
        assert!(result.key().is_none());
    }

    #[test]
    fn test_error_code_description() {
        let data = br#"{"key":16777226,"tag":5,"error":3,"value":null}"#;
        let result = KeyResult::parse(data).unwrap();
        assert!(!result.succeeded());
        assert_eq!(result.error_desc(), "error 3");
    }

    #[test]
    fn test_to_json_round_trip() {
        let result = KeyResult::success(&keys::GIMBAL_CONNECTION, 9, Value::Bool(true));
        let encoded = result.to_json().to_string();
        assert_eq!(KeyResult::parse(encoded.as_bytes()).unwrap(), result);
        assert!(result.to_string().contains("KeyGimbalConnection"));
    }

    #[test]
    fn test_push_shape_mismatch_is_error() {
        let data = br#"{"key":67108878,"tag":0,"error":0,"value":{"pitch":"high"}}"#;
        assert!(KeyResult::parse(data).is_err());
    }
}
