//! # RoboMaster Bridge
//!
//! 原生桥抽象层：对厂商原生库（C ABI、回调驱动）的可移植封装。
//!
//! ## 实现
//!
//! - `link`（feature `link`）：直接链接原生库
//! - `pipe`：进程外宿主，通过三条管道（请求、应答、事件）转发调用
//! - `mock`（feature `mock`）：记录发出的事件、可注入入站事件，用于测试
//!
//! 所有实现语义一致，上层只依赖 [`NativeBridge`]。
//!
//! ## 失败策略
//!
//! [`NativeBridge`] 的方法不返回错误。原生库缺失符号、管道断开等都是
//! 启动期致命错误（panic）；`create`/`initialize` 成功后原生桥在进程
//! 生命周期内被视为可靠。

use std::sync::Arc;

pub mod error;
#[cfg(feature = "link")]
pub mod link;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod pipe;
pub mod registry;

pub use error::BridgeError;
#[cfg(feature = "link")]
pub use link::LinkBridge;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBridge, Payload, SentEvent};
pub use pipe::PipeBridge;
pub use registry::CallbackRegistry;

/// 原生事件回调：`(事件码, 负载, 标签)`
///
/// 负载只在回调期间有效，需要保留时必须复制。
pub type EventCallback = Arc<dyn Fn(u64, &[u8], u64) + Send + Sync>;

/// 同步读取缓存值时使用的输出缓冲区大小
pub const OUTPUT_BUFFER_SIZE: usize = 2048;

/// 原生桥契约
pub trait NativeBridge: Send + Sync {
    /// 进程级一次性初始化；`name` 必须是 `"Robomaster"`
    fn create(&self, name: &str, debuggable: bool, log_path: &str);

    fn destroy(&self);

    /// 进入运行状态（只调用一次）
    fn initialize(&self) -> bool;

    fn uninitialize(&self);

    /// 安装（`Some`）或移除（`None`）某事件类型的唯一回调
    fn set_event_callback(&self, event_type_code: u64, callback: Option<EventCallback>);

    /// 发送事件；`output` 非空时原生库可同步写入应答（以 0 结尾）
    fn send_event(&self, event_code: u64, output: &mut [u8], tag: u64);

    fn send_event_with_string(&self, event_code: u64, data: &str, tag: u64);

    fn send_event_with_number(&self, event_code: u64, data: u64, tag: u64);

    fn get_security_key_by_keychain_index(&self, index: i32) -> String;
}

impl<T: NativeBridge + ?Sized> NativeBridge for Arc<T> {
    fn create(&self, name: &str, debuggable: bool, log_path: &str) {
        (**self).create(name, debuggable, log_path)
    }

    fn destroy(&self) {
        (**self).destroy()
    }

    fn initialize(&self) -> bool {
        (**self).initialize()
    }

    fn uninitialize(&self) {
        (**self).uninitialize()
    }

    fn set_event_callback(&self, event_type_code: u64, callback: Option<EventCallback>) {
        (**self).set_event_callback(event_type_code, callback)
    }

    fn send_event(&self, event_code: u64, output: &mut [u8], tag: u64) {
        (**self).send_event(event_code, output, tag)
    }

    fn send_event_with_string(&self, event_code: u64, data: &str, tag: u64) {
        (**self).send_event_with_string(event_code, data, tag)
    }

    fn send_event_with_number(&self, event_code: u64, data: u64, tag: u64) {
        (**self).send_event_with_number(event_code, data, tag)
    }

    fn get_security_key_by_keychain_index(&self, index: i32) -> String {
        (**self).get_security_key_by_keychain_index(index)
    }
}

/// 读取输出缓冲区中以 0 结尾的内容
pub fn output_bytes(output: &[u8]) -> &[u8] {
    let end = output.iter().position(|b| *b == 0).unwrap_or(output.len());
    &output[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_bytes() {
        let mut buf = [0u8; 8];
        assert!(output_bytes(&buf).is_empty());
        buf[..3].copy_from_slice(b"abc");
        assert_eq!(output_bytes(&buf), b"abc");
        assert_eq!(output_bytes(b"full"), b"full");
    }
}
