//! 原生桥层错误类型定义

use thiserror::Error;

/// 原生桥错误类型
///
/// [`NativeBridge`](crate::NativeBridge) 的方法本身不返回错误；这些错误出现在
/// 管道编解码、宿主进程管理和回调注册表中。
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Pipe I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown function code: {0:#04x}")]
    UnknownFunction(u8),

    #[error("Unexpected reply function: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedReply { expected: u8, actual: u8 },

    #[error("Truncated frame: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("Frame too large: {0} bytes")]
    FrameTooLarge(usize),

    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),

    #[error("Callback for event type {0:#018x} already set")]
    CallbackAlreadySet(u64),

    #[error("No callback for event type {0:#018x}")]
    CallbackNotSet(u64),

    #[error("Bridge host error: {0}")]
    Host(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试错误信息格式
    #[test]
    fn test_bridge_error_display() {
        let err = BridgeError::UnexpectedReply {
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected reply function: expected 0x04, got 0x02"
        );

        let err = BridgeError::CallbackAlreadySet(300u64 << 32);
        assert!(err.to_string().contains("0x0000012c00000000"));

        let err = BridgeError::Truncated {
            needed: 20,
            available: 3,
        };
        assert!(err.to_string().contains("20"));
    }
}
