//! 结果监听器
//!
//! 跟踪“按键 K 的最新值”：持有一个按键订阅、一份受锁保护的最新结果，
//! 以及一个信号量，调用者可以限时等待当前值或下一次更新。
//!
//! # 示例
//!
//! ```no_run
//! # use robomaster_driver::{Dispatcher, ResultListener};
//! # use robomaster_protocol::keys;
//! # use std::time::Duration;
//! # fn demo(dispatcher: Dispatcher) -> Result<(), robomaster_driver::DriverError> {
//! let listener = ResultListener::new(dispatcher, &keys::ROBOMASTER_BATTERY_POWER_PERCENT);
//! listener.start()?;
//! if let Some(result) = listener.wait_for_any_result(Duration::from_secs(1)) {
//!     println!("battery: {result}");
//! }
//! listener.stop()?;
//! # Ok(())
//! # }
//! ```

use crate::dispatcher::{Dispatcher, KeyCallback};
use crate::error::DriverError;
use parking_lot::{Condvar, Mutex};
use robomaster_protocol::{Key, KeyResult};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Default)]
struct State {
    active: bool,
    result: Option<Arc<KeyResult>>,
    /// 每次更新（包括停止时清空）递增
    generation: u64,
}

#[derive(Default)]
struct Shared {
    state: Mutex<State>,
    signal: Condvar,
}

impl Shared {
    fn publish(&self, result: &KeyResult, callback: Option<&KeyCallback>) {
        if !self.state.lock().active {
            return;
        }
        // 先更新模块状态，再让其他线程看到“新结果”
        if result.succeeded() {
            if let Some(callback) = callback {
                callback(result);
            }
        }
        let mut state = self.state.lock();
        if !state.active {
            return;
        }
        state.result = Some(Arc::new(result.clone()));
        state.generation = state.generation.wrapping_add(1);
        self.signal.notify_all();
    }
}

/// 按键最新值监听器
pub struct ResultListener {
    dispatcher: Dispatcher,
    key: &'static Key,
    callback: Option<KeyCallback>,
    shared: Arc<Shared>,
    token: Mutex<Option<u64>>,
}

impl ResultListener {
    pub fn new(dispatcher: Dispatcher, key: &'static Key) -> Self {
        Self {
            dispatcher,
            key,
            callback: None,
            shared: Arc::new(Shared::default()),
            token: Mutex::new(None),
        }
    }

    /// 带前置回调：每个成功结果在通知等待者之前同步调用
    pub fn with_callback<F>(dispatcher: Dispatcher, key: &'static Key, callback: F) -> Self
    where
        F: Fn(&KeyResult) + Send + Sync + 'static,
    {
        let mut listener = Self::new(dispatcher, key);
        listener.callback = Some(Arc::new(callback));
        listener
    }

    pub fn key(&self) -> &'static Key {
        self.key
    }

    pub fn is_started(&self) -> bool {
        self.token.lock().is_some()
    }

    /// 订阅按键（立即投递缓存值）
    pub fn start(&self) -> Result<(), DriverError> {
        let mut token = self.token.lock();
        if token.is_some() {
            return Err(DriverError::AlreadyStarted);
        }

        self.shared.state.lock().active = true;
        let shared = self.shared.clone();
        let callback = self.callback.clone();
        let registered = self.dispatcher.add_key_listener(
            self.key,
            move |result| shared.publish(result, callback.as_ref()),
            true,
        );
        match registered {
            Ok(registered) => {
                *token = Some(registered);
                trace!(key = %self.key, token = registered, "Result listener started");
                Ok(())
            }
            Err(e) => {
                self.shared.state.lock().active = false;
                Err(e)
            }
        }
    }

    /// 取消订阅并清空最新结果；等待者被唤醒并看到空结果
    pub fn stop(&self) -> Result<(), DriverError> {
        let Some(token) = self.token.lock().take() else {
            return Err(DriverError::NotStarted);
        };
        let removed = self.dispatcher.remove_key_listener(self.key, token);

        let mut state = self.shared.state.lock();
        state.active = false;
        state.result = None;
        state.generation = state.generation.wrapping_add(1);
        self.shared.signal.notify_all();
        drop(state);

        trace!(key = %self.key, token, "Result listener stopped");
        // 调度器已停止时订阅已随之失效
        match removed {
            Err(DriverError::TokenInvalid(_)) if !self.dispatcher.is_started() => Ok(()),
            other => other,
        }
    }

    /// 最新结果
    pub fn result(&self) -> Option<Arc<KeyResult>> {
        self.shared.state.lock().result.clone()
    }

    /// 已有带值的结果时立即返回，否则等待下一次更新
    pub fn wait_for_any_result(&self, timeout: Duration) -> Option<Arc<KeyResult>> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock();
        if let Some(result) = state.result.as_ref().filter(|r| r.has_value()) {
            return Some(result.clone());
        }
        let generation = state.generation;
        while state.generation == generation {
            if self.shared.signal.wait_until(&mut state, deadline).timed_out() {
                return None;
            }
        }
        state.result.clone()
    }

    /// 总是等待下一次更新；超时或监听器停止时返回 `None`
    pub fn wait_for_new_result(&self, timeout: Duration) -> Option<Arc<KeyResult>> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock();
        let generation = state.generation;
        while state.generation == generation {
            if self.shared.signal.wait_until(&mut state, deadline).timed_out() {
                return None;
            }
        }
        state.result.clone()
    }

    /// 在同一按键上追加订阅（立即投递缓存值）
    pub fn add_callback<F>(&self, callback: F) -> Result<u64, DriverError>
    where
        F: Fn(&KeyResult) + Send + Sync + 'static,
    {
        self.dispatcher.add_key_listener(self.key, callback, true)
    }

    pub fn remove_callback(&self, token: u64) -> Result<(), DriverError> {
        self.dispatcher.remove_key_listener(self.key, token)
    }
}

impl Drop for ResultListener {
    fn drop(&mut self) {
        if let Some(token) = self.token.get_mut().take() {
            let _ = self.dispatcher.remove_key_listener(self.key, token);
        }
    }
}

impl std::fmt::Debug for ResultListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultListener")
            .field("key", &self.key.name())
            .field("started", &self.is_started())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DispatcherConfig;
    use robomaster_bridge::MockBridge;
    use robomaster_protocol::{Event, EventType, Value, keys};
    use serial_test::serial;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::thread;

    fn start() -> (Arc<MockBridge>, Dispatcher) {
        let bridge = Arc::new(MockBridge::new());
        let dispatcher = Dispatcher::new(bridge.clone(), DispatcherConfig::default());
        dispatcher.start().unwrap();
        (bridge, dispatcher)
    }

    fn push(bridge: &MockBridge, key: &Key, value: u64) {
        let code = Event::new(EventType::StartListening, key.sub_type()).code();
        let json = format!(
            r#"{{"key":{},"tag":0,"error":0,"value":{{"value":{}}}}}"#,
            key.sub_type(),
            value
        );
        bridge.emit(code, json.as_bytes(), 0);
    }

    #[test]
    #[serial]
    fn test_wait_for_new_result() {
        let (bridge, dispatcher) = start();
        let key = &keys::ROBOMASTER_BATTERY_POWER_PERCENT;
        let listener = ResultListener::new(dispatcher.clone(), key);
        listener.start().unwrap();
        assert!(matches!(listener.start(), Err(DriverError::AlreadyStarted)));
        assert!(listener.result().is_none());

        let pusher = {
            let bridge = bridge.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                push(&bridge, key, 55);
            })
        };
        let result = listener.wait_for_new_result(Duration::from_secs(2)).unwrap();
        assert_eq!(result.value(), Some(&Value::Uint64(55)));
        pusher.join().unwrap();

        // 已有值时 wait_for_any 立即返回，wait_for_new 继续等待
        assert!(listener.wait_for_any_result(Duration::from_millis(10)).is_some());
        assert!(listener.wait_for_new_result(Duration::from_millis(50)).is_none());

        listener.stop().unwrap();
        assert!(listener.result().is_none());
        assert!(matches!(listener.stop(), Err(DriverError::NotStarted)));
        dispatcher.stop().unwrap();
    }

    /// 测试 start 时立即拿到缓存值
    #[test]
    #[serial]
    fn test_cached_value_on_start() {
        let (bridge, dispatcher) = start();
        let key = &keys::ROBOMASTER_BATTERY_POWER_PERCENT;
        bridge.set_cached_value(
            key.sub_type(),
            format!(r#"{{"key":{},"tag":0,"error":0,"value":{{"value":90}}}}"#, key.sub_type()),
        );

        let listener = ResultListener::new(dispatcher.clone(), key);
        listener.start().unwrap();
        let result = listener.wait_for_any_result(Duration::from_secs(2)).unwrap();
        assert_eq!(result.value().and_then(Value::as_u64), Some(90));
        dispatcher.stop().unwrap();
    }

    /// 测试前置回调先于等待者被唤醒
    #[test]
    #[serial]
    fn test_callback_runs_before_waiters() {
        let (bridge, dispatcher) = start();
        let key = &keys::ROBOMASTER_BATTERY_POWER_PERCENT;
        let seen = Arc::new(AtomicU64::new(0));
        let seen_clone = seen.clone();
        let listener = ResultListener::with_callback(dispatcher.clone(), key, move |r| {
            if let Some(v) = r.value().and_then(Value::as_u64) {
                seen_clone.store(v, Ordering::SeqCst);
            }
        });
        listener.start().unwrap();

        let pusher = {
            let bridge = bridge.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                push(&bridge, key, 33);
            })
        };
        listener.wait_for_new_result(Duration::from_secs(2)).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 33);
        pusher.join().unwrap();
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_stop_wakes_waiters() {
        let (_bridge, dispatcher) = start();
        let listener = Arc::new(ResultListener::new(dispatcher.clone(), &keys::ROBOMASTER_BATTERY_POWER_PERCENT));
        listener.start().unwrap();

        let waiter = {
            let listener = listener.clone();
            thread::spawn(move || listener.wait_for_new_result(Duration::from_secs(5)))
        };
        thread::sleep(Duration::from_millis(50));
        listener.stop().unwrap();
        assert!(waiter.join().unwrap().is_none());
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_extra_callbacks() {
        let (bridge, dispatcher) = start();
        let key = &keys::ROBOMASTER_BATTERY_POWER_PERCENT;
        let listener = ResultListener::new(dispatcher.clone(), key);
        listener.start().unwrap();

        let (tx, rx) = crossbeam_channel::unbounded();
        let token = listener
            .add_callback(move |r| {
                let _ = tx.send(r.value().and_then(Value::as_u64));
            })
            .unwrap();
        push(&bridge, key, 12);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), Some(12));

        listener.remove_callback(token).unwrap();
        // 监听器本身仍在订阅，没有发出 StopListening
        let stops = bridge
            .take_sent()
            .iter()
            .filter(|s| s.is(EventType::StopListening, key.sub_type()))
            .count();
        assert_eq!(stops, 0);
        dispatcher.stop().unwrap();
    }
}
