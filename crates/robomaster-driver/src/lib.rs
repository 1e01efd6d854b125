//! # RoboMaster Driver
//!
//! 驱动层：进程级调度器与结果监听器。
//!
//! - [`Dispatcher`]：为每个事件类型安装唯一的原生回调，把按键读写、动作、
//!   值推送和数据流事件多路复用给任意多个订阅者
//! - [`ResultListener`]：“某按键的最新值”加上限时等待
//!
//! # 使用场景
//!
//! 大多数用户应该使用 `robomaster-client` 提供的功能模块；
//! 需要直接读写按键或订阅原始事件时使用本层。

pub mod dispatcher;
mod error;
pub mod listener;
mod token;

pub use dispatcher::{
    DEFAULT_REQUEST_TIMEOUT, Dispatcher, DispatcherConfig, EventTypeCallback, KeyCallback,
    ResultCallback,
};
pub use error::DriverError;
pub use listener::ResultListener;
pub use token::TokenGenerator;
