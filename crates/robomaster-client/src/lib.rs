//! # RoboMaster Client
//!
//! 客户端层：连接生命周期与功能模块。
//!
//! - [`Client`]：按依赖顺序启动和停止全部已启用模块
//! - [`Module`] / [`BaseModule`]：以连接按键为门控的模块框架
//! - [`modules`]：连接、机器人、主控、相机、底盘、云台、发射器、手柄
//! - [`Finder`]：局域网 UDP 广播发现
//! - [`ClientConfig`]：TOML 配置
//!
//! # 使用场景
//!
//! 这是大多数用户应该使用的层。需要直接读写按键或订阅原始事件时，
//! 通过 [`Client::dispatcher`] 访问驱动层。

pub mod client;
pub mod config;
mod error;
pub mod finder;
pub mod module;
pub mod modules;

// 重新导出常用类型
pub use client::Client;
pub use config::{ClientConfig, LogLevel, ModuleKind, Modules, Transport};
pub use error::ClientError;
pub use finder::Finder;
pub use module::{BaseModule, ConnectionCallback, Module};
pub use modules::*;
