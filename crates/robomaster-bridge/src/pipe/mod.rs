//! 进程外原生桥
//!
//! 原生库无法在本进程加载时（例如需要在 Wine 中运行），由宿主进程加载它，
//! 本进程通过三条管道转发调用。语义与直接链接完全相同。

mod client;
pub mod protocol;
mod server;

pub use client::PipeBridge;
pub use protocol::{Call, EventFrame, Function};
pub use server::serve;
