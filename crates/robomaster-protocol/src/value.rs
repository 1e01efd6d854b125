//! 按键值形状
//!
//! 原生桥边界使用 JSON：标量包装为 `{"value": x}`，结构体是扁平对象，
//! 列表是 `{"list": [...]}`。没有注册原型的按键以不透明 JSON
//! （[`Value::Raw`]）传递。

use crate::ProtocolError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// 值原型（形状标签），用于深度类型比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 无负载动作
    Void,
    Bool,
    Uint64,
    Float64,
    String,
    ChassisPosition,
    GimbalAttitude,
    GimbalAngleRotation,
    GimbalSpeedRotation,
    TaskStatus,
    GamePadActivationSettings,
    FunctionEnable,
    /// `List<u16>`（工作中的设备）
    WorkingDevices,
    /// 未注册原型：不透明 JSON
    Raw,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// 底盘位置任务
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChassisPosition {
    #[serde(rename = "taskId")]
    pub task_id: u8,
    #[serde(rename = "isCancel")]
    pub is_cancel: u8,
    #[serde(rename = "controlMode")]
    pub control_mode: u8,
    #[serde(rename = "positionX")]
    pub x: f32,
    #[serde(rename = "positionY")]
    pub y: f32,
    #[serde(rename = "positionYaw")]
    pub yaw: f32,
}

/// 云台姿态推送
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GimbalAttitude {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub yaw_opposite: f32,
    pub pitch_speed: f32,
    pub yaw_speed: f32,
    pub roll_speed: f32,
}

/// 云台角度旋转（单位 0.1°，时间单位毫秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GimbalAngleRotation {
    pub pitch: i16,
    pub yaw: i16,
    pub time: i16,
}

/// 云台速度旋转（单位 0.1°/s）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GimbalSpeedRotation {
    pub pitch: i16,
    pub yaw: i16,
    pub roll: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskStatus {
    #[serde(rename = "taskId")]
    pub task_id: u8,
    pub percent: f64,
    pub status: u8,
}

/// 手柄激活信息
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePadActivationSettings {
    pub is_activated: bool,
    pub activate_time: i64,
    pub serial_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEnableInfo {
    pub id: u8,
    pub enable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionEnable {
    pub list: Vec<FunctionEnableInfo>,
}

#[derive(Serialize, Deserialize)]
struct Wrapped<T> {
    value: T,
}

#[derive(Serialize, Deserialize)]
struct Listed<T> {
    list: Vec<T>,
}

/// 按键值
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Void,
    Bool(bool),
    Uint64(u64),
    Float64(f64),
    String(String),
    ChassisPosition(ChassisPosition),
    GimbalAttitude(GimbalAttitude),
    GimbalAngleRotation(GimbalAngleRotation),
    GimbalSpeedRotation(GimbalSpeedRotation),
    TaskStatus(TaskStatus),
    GamePadActivationSettings(GamePadActivationSettings),
    FunctionEnable(FunctionEnable),
    WorkingDevices(Vec<u16>),
    Raw(serde_json::Value),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Void => ValueKind::Void,
            Value::Bool(_) => ValueKind::Bool,
            Value::Uint64(_) => ValueKind::Uint64,
            Value::Float64(_) => ValueKind::Float64,
            Value::String(_) => ValueKind::String,
            Value::ChassisPosition(_) => ValueKind::ChassisPosition,
            Value::GimbalAttitude(_) => ValueKind::GimbalAttitude,
            Value::GimbalAngleRotation(_) => ValueKind::GimbalAngleRotation,
            Value::GimbalSpeedRotation(_) => ValueKind::GimbalSpeedRotation,
            Value::TaskStatus(_) => ValueKind::TaskStatus,
            Value::GamePadActivationSettings(_) => ValueKind::GamePadActivationSettings,
            Value::FunctionEnable(_) => ValueKind::FunctionEnable,
            Value::WorkingDevices(_) => ValueKind::WorkingDevices,
            Value::Raw(_) => ValueKind::Raw,
        }
    }

    /// 编码为桥边界 JSON（`Void` 编码为 `null`）
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Void => serde_json::Value::Null,
            Value::Bool(v) => json!({ "value": v }),
            Value::Uint64(v) => json!({ "value": v }),
            Value::Float64(v) => json!({ "value": v }),
            Value::String(v) => json!({ "value": v }),
            Value::ChassisPosition(v) => json!(v),
            Value::GimbalAttitude(v) => json!(v),
            Value::GimbalAngleRotation(v) => json!(v),
            Value::GimbalSpeedRotation(v) => json!(v),
            Value::TaskStatus(v) => json!(v),
            Value::GamePadActivationSettings(v) => json!(v),
            Value::FunctionEnable(v) => json!(v),
            Value::WorkingDevices(list) => json!({ "list": list }),
            Value::Raw(v) => v.clone(),
        }
    }

    /// 按原型从桥边界 JSON 解码
    pub fn from_json(kind: ValueKind, json: &serde_json::Value) -> Result<Value, ProtocolError> {
        Ok(match kind {
            ValueKind::Void => Value::Void,
            ValueKind::Bool => Value::Bool(unwrap_value::<bool>(json)?),
            ValueKind::Uint64 => Value::Uint64(unwrap_u64(json)?),
            ValueKind::Float64 => Value::Float64(unwrap_value::<f64>(json)?),
            ValueKind::String => Value::String(unwrap_value::<String>(json)?),
            ValueKind::ChassisPosition => Value::ChassisPosition(decode(json)?),
            ValueKind::GimbalAttitude => Value::GimbalAttitude(decode(json)?),
            ValueKind::GimbalAngleRotation => Value::GimbalAngleRotation(decode(json)?),
            ValueKind::GimbalSpeedRotation => Value::GimbalSpeedRotation(decode(json)?),
            ValueKind::TaskStatus => Value::TaskStatus(decode(json)?),
            ValueKind::GamePadActivationSettings => Value::GamePadActivationSettings(decode(json)?),
            ValueKind::FunctionEnable => Value::FunctionEnable(decode(json)?),
            ValueKind::WorkingDevices => Value::WorkingDevices(decode::<Listed<u16>>(json)?.list),
            ValueKind::Raw => Value::Raw(json.clone()),
        })
    }

    /// 布尔读取；未注册原型的按键（例如手柄按钮）接受裸布尔或包装布尔
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            Value::Raw(raw) => raw.as_bool().or_else(|| raw.get("value")?.as_bool()),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint64(v) => Some(*v),
            Value::Raw(raw) => raw.as_u64().or_else(|| raw.get("value")?.as_u64()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            Value::Uint64(v) => Some(*v as f64),
            Value::Raw(raw) => raw.as_f64().or_else(|| raw.get("value")?.as_f64()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            Value::Raw(raw) => raw.as_str().or_else(|| raw.get("value")?.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => f.write_str("void"),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

fn decode<T: DeserializeOwned>(json: &serde_json::Value) -> Result<T, ProtocolError> {
    Ok(T::deserialize(json)?)
}

fn unwrap_value<T: DeserializeOwned>(json: &serde_json::Value) -> Result<T, ProtocolError> {
    Ok(decode::<Wrapped<T>>(json)?.value)
}

/// 固件偶尔以整数值浮点数（`1.0`）上报整型按键
fn unwrap_u64(json: &serde_json::Value) -> Result<u64, ProtocolError> {
    let inner = json
        .get("value")
        .ok_or_else(|| ProtocolError::invalid("value", format!("missing in {json}")))?;
    if let Some(v) = inner.as_u64() {
        return Ok(v);
    }
    match inner.as_f64() {
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => Ok(v as u64),
        _ => Err(ProtocolError::invalid("value", format!("not an unsigned integer: {inner}"))),
    }
}
