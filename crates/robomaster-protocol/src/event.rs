//! 事件编码
//!
//! 64 位事件码 = 高 32 位类型 + 低 32 位子类型。
//!
//! # 两类事件
//!
//! - **自有类型**（`SetValue`..`StopListening`）：调度器用来实现按键操作，
//!   子类型是按键子类型。
//! - **数据流类型**（`Connection`、`VideoDataRecv` 等）：把异步数据送给订阅者。

use crate::ProtocolError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// 事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum EventType {
    SetValue = 0,
    GetValue = 1,
    /// 读取原生库缓存的值（同步，通过输出缓冲区返回）
    GetAvailableValue = 2,
    PerformAction = 3,
    StartListening = 4,
    StopListening = 5,
    Activation = 6,
    LocalAlbum = 7,
    FirmwareUpgrade = 8,
    /// 连接配置（子类型作为操作码，见会话握手）
    Connection = 100,
    Security = 101,
    PrintLog = 200,
    StartVideo = 300,
    StopVideo = 301,
    Render = 302,
    GetNativeTexture = 303,
    VideoTransferSpeed = 304,
    AudioDataRecv = 305,
    VideoDataRecv = 306,
    NativeFunctions = 500,
}

impl EventType {
    /// 全部已知事件类型（调度器为每个类型安装一个原生回调）
    pub const ALL: [EventType; 20] = [
        EventType::SetValue,
        EventType::GetValue,
        EventType::GetAvailableValue,
        EventType::PerformAction,
        EventType::StartListening,
        EventType::StopListening,
        EventType::Activation,
        EventType::LocalAlbum,
        EventType::FirmwareUpgrade,
        EventType::Connection,
        EventType::Security,
        EventType::PrintLog,
        EventType::StartVideo,
        EventType::StopVideo,
        EventType::Render,
        EventType::GetNativeTexture,
        EventType::VideoTransferSpeed,
        EventType::AudioDataRecv,
        EventType::VideoDataRecv,
        EventType::NativeFunctions,
    ];

    /// 调度器自己使用的类型
    pub fn is_owned(self) -> bool {
        matches!(
            self,
            EventType::SetValue
                | EventType::GetValue
                | EventType::GetAvailableValue
                | EventType::PerformAction
                | EventType::StartListening
                | EventType::StopListening
        )
    }

    /// 仅含类型、子类型为 0 的事件码（原生回调按此码注册）
    pub fn code(self) -> u64 {
        Event::from_type(self).code()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// 类型 + 子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    event_type: EventType,
    sub_type: u32,
}

impl Event {
    pub fn new(event_type: EventType, sub_type: u32) -> Self {
        Self {
            event_type,
            sub_type,
        }
    }

    pub fn from_type(event_type: EventType) -> Self {
        Self::new(event_type, 0)
    }

    /// 从 64 位事件码解析；未知类型返回错误
    pub fn from_code(code: u64) -> Result<Self, ProtocolError> {
        let raw_type = (code >> 32) as u32;
        let event_type =
            EventType::try_from(raw_type).map_err(|_| ProtocolError::UnknownEventType(raw_type))?;
        Ok(Self::new(event_type, code as u32))
    }

    pub fn code(&self) -> u64 {
        (u64::from(u32::from(self.event_type)) << 32) | u64::from(self.sub_type)
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn sub_type(&self) -> u32 {
        self.sub_type
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.event_type, self.sub_type)
    }
}

/// 会话握手中 `Connection` 事件的子类型操作码
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum ConnectionOp {
    Open = 0,
    Close = 1,
    SetIp = 2,
    SetPort = 3,
}

impl ConnectionOp {
    pub fn event(self) -> Event {
        Event::new(EventType::Connection, self.into())
    }
}
