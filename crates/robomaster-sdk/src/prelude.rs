//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use robomaster_sdk::prelude::*;
//! ```

// 客户端层
pub use crate::client::modules::{
    Camera, CameraMode, Chassis, ChassisMode, Connection, Controller, ControllerMode, DeviceType,
    GamePad, Gimbal, GimbalControlMode, Gun, GunType, Robot, StickPosition, VideoFormat,
    VideoFrame, VideoQuality,
};
pub use crate::client::{Client, ClientConfig, Module, Modules, Transport};

// 原生桥
pub use crate::bridge::NativeBridge;

// 驱动层（直接读写按键时使用）
pub use crate::driver::{Dispatcher, ResultListener};
pub use crate::protocol::{Value, keys};

// 错误类型
pub use crate::bridge::BridgeError;
pub use crate::client::ClientError;
pub use crate::driver::DriverError;
pub use crate::protocol::ProtocolError;
