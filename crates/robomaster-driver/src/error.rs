//! 驱动层错误类型定义

use robomaster_protocol::{AccessType, ProtocolError, ValueKind};
use std::time::Duration;
use thiserror::Error;

/// 驱动层错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 调度器未启动
    #[error("Dispatcher not started")]
    NotStarted,

    /// 调度器已启动（进程内只允许一个）
    #[error("Dispatcher already started")]
    AlreadyStarted,

    /// 原生库初始化失败
    #[error("Native bridge initialization failed")]
    InitializeFailed,

    /// 按键不具备所需的访问权限
    #[error("Key {key} does not allow {required} access")]
    WrongAccess {
        key: &'static str,
        required: AccessType,
    },

    /// 值形状与按键原型不符
    #[error("Wrong value shape for key {key}: expected {expected}, got {actual}")]
    WrongValueShape {
        key: &'static str,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// 令牌为 0 或未注册
    #[error("Invalid token: {0}")]
    TokenInvalid(u64),

    /// 同步调用未在时限内收到应答
    #[error("Request for key {key} timed out after {timeout:?}")]
    RequestTimeout {
        key: &'static str,
        timeout: Duration,
    },

    /// 应答携带非零错误码
    #[error("Request for key {key} failed with code {code}: {desc}")]
    RequestFailed {
        key: &'static str,
        code: i32,
        desc: String,
    },

    /// 等待期间调度器或监听器已停止
    #[error("Terminated while waiting")]
    Terminated,

    /// 协议解析错误
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}
