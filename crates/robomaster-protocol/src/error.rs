//! 协议层错误类型定义

use crate::value::ValueKind;
use thiserror::Error;

/// 协议解析错误类型
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Truncated payload: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("Invalid broadcast header: {0:02X?}")]
    InvalidHeader([u8; 2]),

    #[error("Unknown event type: {0}")]
    UnknownEventType(u32),

    #[error("Unknown key sub-type: {0}")]
    UnknownKey(u32),

    #[error("Value shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: ValueKind, actual: ValueKind },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid value for field {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ProtocolError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProtocolError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
