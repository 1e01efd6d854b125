//! 请求关联标签
//!
//! 高 8 位是应答数据类型提示，低 56 位是请求编号；0 表示不关联。

use crate::ProtocolError;
use std::fmt;

const REQUEST_ID_MASK: u64 = 0x00FF_FFFF_FFFF_FFFF;

/// 事件负载的数据类型提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    #[default]
    String,
    Number,
    Unknown(u8),
}

impl DataType {
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            0 => DataType::String,
            1 => DataType::Number,
            other => DataType::Unknown(other),
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            DataType::String => 0,
            DataType::Number => 1,
            DataType::Unknown(bits) => bits,
        }
    }

    /// 按类型提示解释原始负载
    ///
    /// 数字负载固定为 8 字节小端 `u64`。
    pub fn parse(self, data: &[u8]) -> Result<EventData, ProtocolError> {
        match self {
            DataType::String => Ok(EventData::String(String::from_utf8_lossy(data).into_owned())),
            DataType::Number => {
                let bytes: [u8; 8] = data.try_into().map_err(|_| ProtocolError::InvalidLength {
                    expected: 8,
                    actual: data.len(),
                })?;
                Ok(EventData::Number(u64::from_le_bytes(bytes)))
            }
            DataType::Unknown(_) => Ok(EventData::Raw(data.to_vec())),
        }
    }
}

/// 解析后的事件负载
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventData {
    String(String),
    Number(u64),
    Raw(Vec<u8>),
}

/// 64 位标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tag(u64);

impl Tag {
    /// 不关联任何请求
    pub const NONE: Tag = Tag(0);

    pub fn new(data_type: DataType, request_id: u64) -> Self {
        Tag((u64::from(data_type.bits()) << 56) | (request_id & REQUEST_ID_MASK))
    }

    pub fn from_raw(raw: u64) -> Self {
        Tag(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn data_type(self) -> DataType {
        DataType::from_bits((self.0 >> 56) as u8)
    }

    pub fn request_id(self) -> u64 {
        self.0 & REQUEST_ID_MASK
    }

    /// 拆分为（类型提示，请求编号）
    pub fn split(self) -> (DataType, u64) {
        (self.data_type(), self.request_id())
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
