//! 模块生命周期框架
//!
//! 每个功能模块实现 [`Module`]。[`BaseModule`] 负责公共部分：
//! 对模块连接按键的结果监听、依赖模块（弱引用）以及连接状态回调。
//!
//! "已连接"的定义：连接按键的最新结果成功且值为 `true`，并且所有依赖模块
//! 都已连接。没有连接按键的模块在 `start`/`stop` 时以 `true`/`false`
//! 调用连接回调。

use crate::error::ClientError;
use robomaster_driver::{Dispatcher, ResultListener};
use robomaster_protocol::{Key, KeyResult, Value};
use std::sync::Weak;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// 连接状态等待的轮询粒度
const WAIT_SLICE: Duration = Duration::from_millis(100);

/// 功能模块
pub trait Module: Send + Sync {
    fn name(&self) -> &'static str;

    /// 启动模块（不等待连接）
    fn start(&self) -> Result<(), ClientError>;

    fn stop(&self) -> Result<(), ClientError>;

    /// 模块及其依赖当前是否已连接
    fn connected(&self) -> bool;

    /// 等待模块连接
    ///
    /// # 返回
    /// 时限内连接成功返回 `true`
    fn wait_for_connection(&self, timeout: Duration) -> bool;
}

/// 连接状态回调（参数为新的连接状态）
pub type ConnectionCallback = Box<dyn Fn(bool) + Send + Sync>;

/// 模块的公共实现
pub struct BaseModule {
    name: &'static str,
    dispatcher: Dispatcher,
    listener: Option<ResultListener>,
    deps: Vec<Weak<dyn Module>>,
    /// 没有连接按键时使用
    callback: Option<ConnectionCallback>,
    started: AtomicBool,
}

impl BaseModule {
    /// # 参数
    /// - `key`: 连接按键；为 `None` 时模块本身总是视为已连接
    /// - `callback`: 每个成功的连接结果（或无按键时的启停）触发一次
    /// - `deps`: 依赖模块
    pub fn new(
        dispatcher: Dispatcher,
        name: &'static str,
        key: Option<&'static Key>,
        callback: Option<ConnectionCallback>,
        deps: Vec<Weak<dyn Module>>,
    ) -> Self {
        let (listener, callback) = match (key, callback) {
            (Some(key), Some(callback)) => {
                let listener = ResultListener::with_callback(dispatcher.clone(), key, move |result| {
                    callback(is_true(result));
                });
                (Some(listener), None)
            }
            (Some(key), None) => (Some(ResultListener::new(dispatcher.clone(), key)), None),
            (None, callback) => (None, callback),
        };

        Self {
            name,
            dispatcher,
            listener,
            deps,
            callback,
            started: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn start(&self) -> Result<(), ClientError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(ClientError::AlreadyStarted);
        }
        debug!(module = self.name, "Module starting");
        match &self.listener {
            Some(listener) => {
                if let Err(e) = listener.start() {
                    self.started.store(false, Ordering::SeqCst);
                    return Err(e.into());
                }
            }
            None => {
                if let Some(callback) = &self.callback {
                    callback(true);
                }
            }
        }
        Ok(())
    }

    pub fn stop(&self) -> Result<(), ClientError> {
        if !self.started.swap(false, Ordering::SeqCst) {
            return Err(ClientError::NotStarted);
        }
        debug!(module = self.name, "Module stopping");
        match &self.listener {
            Some(listener) => listener.stop()?,
            None => {
                if let Some(callback) = &self.callback {
                    callback(false);
                }
            }
        }
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// 自身连接按键的状态（不检查依赖）
    fn self_connected(&self) -> bool {
        match &self.listener {
            Some(listener) => listener.result().is_some_and(|r| is_true(&r)),
            None => self.is_started(),
        }
    }

    pub fn deps_connected(&self) -> bool {
        self.deps
            .iter()
            .all(|dep| dep.upgrade().is_some_and(|dep| dep.connected()))
    }

    pub fn connected(&self) -> bool {
        self.self_connected() && self.deps_connected()
    }

    /// 先等待自身连接按键变为 `true`，再用剩余时间依次等待依赖
    pub fn wait_for_connection(&self, timeout: Duration) -> bool {
        if self.connected() {
            return true;
        }

        let deadline = Instant::now() + timeout;
        if let Some(listener) = &self.listener {
            while !self.self_connected() {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() || !self.is_started() {
                    trace!(module = self.name, "Connection wait expired");
                    return false;
                }
                listener.wait_for_new_result(remaining.min(WAIT_SLICE));
            }
        }

        for dep in &self.deps {
            let Some(dep) = dep.upgrade() else {
                return false;
            };
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !dep.wait_for_connection(remaining) {
                return false;
            }
        }

        self.connected()
    }
}

impl std::fmt::Debug for BaseModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseModule")
            .field("name", &self.name)
            .field("started", &self.is_started())
            .field("connected", &self.connected())
            .finish()
    }
}

fn is_true(result: &KeyResult) -> bool {
    result.succeeded() && result.value().and_then(Value::as_bool) == Some(true)
}

/// 实现 [`Module`]，全部委托给 `self.base`
macro_rules! delegate_module {
    ($ty:ty) => {
        impl $crate::module::Module for $ty {
            fn name(&self) -> &'static str {
                self.base.name()
            }

            fn start(&self) -> Result<(), $crate::error::ClientError> {
                self.base.start()
            }

            fn stop(&self) -> Result<(), $crate::error::ClientError> {
                self.base.stop()
            }

            fn connected(&self) -> bool {
                self.base.connected()
            }

            fn wait_for_connection(&self, timeout: std::time::Duration) -> bool {
                self.base.wait_for_connection(timeout)
            }
        }
    };
}

pub(crate) use delegate_module;


#[cfg(test)]
mod tests {
    use super::testing::{push_bool, start};
    use super::*;
    use robomaster_protocol::keys;
    use serial_test::serial;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    struct Plain {
        base: BaseModule,
    }

    delegate_module!(Plain);

    #[test]
    #[serial]
    fn test_connection_follows_key() {
        let (bridge, dispatcher) = start();
        let module = Plain {
            base: BaseModule::new(dispatcher.clone(), "Plain", Some(&keys::AIR_LINK_CONNECTION), None, vec![]),
        };
        assert!(!module.connected());
        module.start().unwrap();
        assert!(matches!(module.start(), Err(ClientError::AlreadyStarted)));

        let pusher = {
            let bridge = bridge.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                push_bool(&bridge, &keys::AIR_LINK_CONNECTION, false);
                thread::sleep(Duration::from_millis(50));
                push_bool(&bridge, &keys::AIR_LINK_CONNECTION, true);
            })
        };
        // 中间的 false 不会让等待提前结束
        assert!(module.wait_for_connection(Duration::from_secs(2)));
        assert!(module.connected());
        pusher.join().unwrap();

        push_bool(&bridge, &keys::AIR_LINK_CONNECTION, false);
        thread::sleep(Duration::from_millis(100));
        assert!(!module.connected());

        module.stop().unwrap();
        assert!(matches!(module.stop(), Err(ClientError::NotStarted)));
        dispatcher.stop().unwrap();
    }

    /// 测试依赖未连接时模块不算连接
    #[test]
    #[serial]
    fn test_dependency_gates_connection() {
        let (bridge, dispatcher) = start();
        let parent: Arc<dyn Module> = Arc::new(Plain {
            base: BaseModule::new(dispatcher.clone(), "Parent", Some(&keys::AIR_LINK_CONNECTION), None, vec![]),
        });
        let child = Plain {
            base: BaseModule::new(
                dispatcher.clone(),
                "Child",
                Some(&keys::ROBOMASTER_SYSTEM_CONNECTION),
                None,
                vec![Arc::downgrade(&parent)],
            ),
        };
        parent.start().unwrap();
        child.start().unwrap();

        push_bool(&bridge, &keys::ROBOMASTER_SYSTEM_CONNECTION, true);
        assert!(!child.wait_for_connection(Duration::from_millis(300)));

        push_bool(&bridge, &keys::AIR_LINK_CONNECTION, true);
        assert!(child.wait_for_connection(Duration::from_secs(2)));

        // 依赖被释放后不再视为已连接
        parent.stop().unwrap();
        drop(parent);
        assert!(!child.connected());
        child.stop().unwrap();
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_keyless_module_callback() {
        let (_bridge, dispatcher) = start();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let module = Plain {
            base: BaseModule::new(
                dispatcher.clone(),
                "Keyless",
                None,
                Some(Box::new(move |connected| {
                    if connected {
                        calls_clone.fetch_add(1, Ordering::SeqCst);
                    } else {
                        calls_clone.fetch_sub(1, Ordering::SeqCst);
                    }
                })),
                vec![],
            ),
        };
        assert!(!module.connected());
        module.start().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(module.wait_for_connection(Duration::from_millis(10)));
        module.stop().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        dispatcher.stop().unwrap();
    }
}
