//! 按事件类型的回调注册表
//!
//! 原生库每个事件类型只保留一个回调槽。所有原生桥实现都用这张表
//! 把入站事件（完整事件码）路由到对应类型的回调。

use crate::{BridgeError, EventCallback};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::warn;

const TYPE_MASK: u64 = 0xFFFF_FFFF_0000_0000;

/// 事件码中的类型部分（子类型清零）
pub fn type_code(event_code: u64) -> u64 {
    event_code & TYPE_MASK
}

#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: RwLock<HashMap<u64, EventCallback>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 安装或移除回调
    ///
    /// 同一类型重复安装、移除未安装的类型都会返回错误。
    pub fn set(&self, event_type_code: u64, callback: Option<EventCallback>) -> Result<(), BridgeError> {
        let code = type_code(event_type_code);
        let mut callbacks = self.callbacks.write();
        match callback {
            Some(callback) => {
                if callbacks.contains_key(&code) {
                    return Err(BridgeError::CallbackAlreadySet(code));
                }
                callbacks.insert(code, callback);
            }
            None => {
                if callbacks.remove(&code).is_none() {
                    return Err(BridgeError::CallbackNotSet(code));
                }
            }
        }
        Ok(())
    }

    pub fn contains(&self, event_type_code: u64) -> bool {
        self.callbacks.read().contains_key(&type_code(event_type_code))
    }

    pub fn len(&self) -> usize {
        self.callbacks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.read().is_empty()
    }

    pub fn clear(&self) {
        self.callbacks.write().clear();
    }

    /// 在调用者线程上同步调用对应类型的回调（锁外调用）
    ///
    /// 返回是否找到回调。
    pub fn dispatch(&self, event_code: u64, data: &[u8], tag: u64) -> bool {
        let callback = self.callbacks.read().get(&type_code(event_code)).cloned();
        match callback {
            Some(callback) => {
                callback(event_code, data, tag);
                true
            }
            None => {
                warn!(event_code, "no callback installed for event type");
                false
            }
        }
    }
}
