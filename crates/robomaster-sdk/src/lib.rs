//! RoboMaster SDK - RoboMaster S1 Rust SDK
//!
//! 通过厂商原生库（"原生桥"）控制 RoboMaster S1：把单回调、C ABI 的原生库
//! 变成线程安全、多订阅者、带类型与请求应答的运行时。
//!
//! # 架构设计
//!
//! 本 SDK 采用分层架构，从底层到高层：
//!
//! - **协议层** (`protocol`): 按键注册表、事件码、标签、值与结果的编解码
//! - **原生桥层** (`bridge`): 原生库抽象（直接链接、进程外管道、Mock）
//! - **驱动层** (`driver`): 调度器与结果监听器
//! - **客户端层** (`client`): 功能模块与连接生命周期
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use robomaster_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! # fn run(bridge: Arc<dyn NativeBridge>) -> Result<(), ClientError> {
//! let config = ClientConfig::from_file("robomaster.toml")?;
//! robomaster_sdk::init_logging(config.log_level);
//!
//! let client = Client::new(bridge, config)?;
//! client.start()?;
//! if let Some(chassis) = client.chassis() {
//!     chassis.set_speed(ChassisMode::YawFollow, 0.5, 0.0, 0.0)?;
//! }
//! client.stop()?;
//! # Ok(())
//! # }
//! ```

mod logging;
pub mod prelude;

pub use robomaster_bridge as bridge;
pub use robomaster_client as client;
pub use robomaster_driver as driver;
pub use robomaster_protocol as protocol;

pub use logging::{env_filter, init_logging};

// 协议层常用类型
pub use protocol::{Event, EventType, Key, KeyResult, ProtocolError, Value, keys};

// 原生桥
pub use bridge::{BridgeError, NativeBridge, PipeBridge};

// 驱动层（高级用户使用）
pub use driver::{Dispatcher, DispatcherConfig, DriverError, ResultListener};

// 客户端层（推荐的入口点）
pub use client::{Client, ClientConfig, ClientError, Finder, LogLevel, Modules, Transport};
