//! 调度器
//!
//! 应用代码与原生桥之间唯一的进程级多路复用器。
//!
//! # 回调路由
//!
//! 原生库每个事件类型只接受一个回调。[`Dispatcher::start`] 为每个已知事件类型
//! 安装一个回调，入站事件按类型分流：
//!
//! - `GetValue` / `SetValue` / `PerformAction`：按标签中的请求编号找到一次性回调
//! - `StartListening`：解码为按键结果，分发给该按键的全部监听器
//! - 数据流类型（视频、连接等）：分发给该事件类型的全部监听器
//!
//! 负载在入口处复制一次，之后所有分发使用这份拷贝。
//!
//! # 线程模型
//!
//! 每个订阅拥有一个投递线程（无界通道驱动），慢订阅者不会阻塞原生回调线程，
//! 同一订阅者按原生库的投递顺序收到事件。一次性回调在新线程上执行。

use crate::error::DriverError;
use crate::token::TokenGenerator;
use bytes::Bytes;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded, unbounded};
use parking_lot::{Mutex, RwLock};
use robomaster_bridge::{EventCallback, NativeBridge, OUTPUT_BUFFER_SIZE, output_bytes};
use robomaster_protocol::{
    AccessType, BRIDGE_NAME, ConnectionOp, DataType, Event, EventType, Key, KeyResult, ROBOT_PORT,
    Tag, Value,
};
use serde_json::json;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// 按键监听回调
pub type KeyCallback = Arc<dyn Fn(&KeyResult) + Send + Sync>;

/// 事件类型监听回调：`(事件, 负载拷贝, 数据类型提示)`
pub type EventTypeCallback = Arc<dyn Fn(Event, Bytes, DataType) + Send + Sync>;

/// 一次性应答回调
pub type ResultCallback = Box<dyn FnOnce(KeyResult) + Send>;

/// 同步调用的默认超时
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// 调试模式下原生库的日志目录
const DEBUG_LOG_PATH: &str = "./log";

/// 进程内是否已有调度器处于运行状态
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// 调度器配置
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// 原生库调试模式（日志写入 `./log`）
    pub debuggable: bool,
    /// `*_sync` 调用等待应答的时限
    pub request_timeout: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            debuggable: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

type FeedItem = (Event, Bytes, DataType);

/// 单个按键监听器的投递端
struct KeySink {
    tx: Sender<Arc<KeyResult>>,
    /// 是否已投递过推送值；之后不再投递缓存值
    pushed: Mutex<bool>,
}

impl KeySink {
    fn new(tx: Sender<Arc<KeyResult>>) -> Self {
        Self {
            tx,
            pushed: Mutex::new(false),
        }
    }

    fn push(&self, result: Arc<KeyResult>) {
        let mut pushed = self.pushed.lock();
        *pushed = true;
        let _ = self.tx.send(result);
    }

    /// 投递缓存值；已有更新的推送时丢弃
    fn prime(&self, result: Arc<KeyResult>) -> bool {
        let pushed = self.pushed.lock();
        if *pushed {
            return false;
        }
        let _ = self.tx.send(result);
        true
    }
}

#[derive(Default)]
struct Subscriptions {
    /// 按键子类型 → 令牌 → 投递端
    keys: HashMap<u32, HashMap<u64, Arc<KeySink>>>,
    /// 事件类型 → 令牌 → 投递通道
    event_types: HashMap<EventType, HashMap<u64, Sender<FeedItem>>>,
}

struct Inner {
    bridge: Arc<dyn NativeBridge>,
    config: DispatcherConfig,
    started: AtomicBool,
    subs: RwLock<Subscriptions>,
    /// 请求编号 → 一次性回调
    pending: Mutex<HashMap<u64, ResultCallback>>,
    /// 串行化按键监听器的增删（StartListening/StopListening 在订阅锁外发送）
    listen_lock: Mutex<()>,
    request_ids: TokenGenerator,
    tokens: TokenGenerator,
}

/// 进程级调度器（克隆共享同一实例）
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("started", &self.is_started())
            .field("config", &self.inner.config)
            .finish()
    }
}

impl Dispatcher {
    pub fn new(bridge: Arc<dyn NativeBridge>, config: DispatcherConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                bridge,
                config,
                started: AtomicBool::new(false),
                subs: RwLock::new(Subscriptions::default()),
                pending: Mutex::new(HashMap::new()),
                listen_lock: Mutex::new(()),
                request_ids: TokenGenerator::request_ids(),
                tokens: TokenGenerator::new(),
            }),
        }
    }

    /// 创建并初始化原生库，为每个事件类型安装回调
    ///
    /// # 错误
    /// - `AlreadyStarted`: 进程内已有调度器在运行
    /// - `InitializeFailed`: 原生库初始化失败（已销毁，可重试）
    pub fn start(&self) -> Result<(), DriverError> {
        if ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DriverError::AlreadyStarted);
        }

        let inner = &self.inner;
        let debuggable = inner.config.debuggable;
        let log_path = if debuggable { DEBUG_LOG_PATH } else { "" };
        inner.bridge.create(BRIDGE_NAME, debuggable, log_path);
        if !inner.bridge.initialize() {
            inner.bridge.destroy();
            ACTIVE.store(false, Ordering::SeqCst);
            return Err(DriverError::InitializeFailed);
        }

        for event_type in EventType::ALL {
            let weak = Arc::downgrade(inner);
            let callback: EventCallback = Arc::new(move |code: u64, data: &[u8], tag: u64| {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_event(code, data, tag);
                }
            });
            inner.bridge.set_event_callback(event_type.code(), Some(callback));
        }

        inner.started.store(true, Ordering::SeqCst);
        info!(debuggable, "Dispatcher started");
        Ok(())
    }

    /// 移除全部回调并关闭原生库
    ///
    /// 等待中的同步调用收到 `Terminated`，所有订阅失效。
    pub fn stop(&self) -> Result<(), DriverError> {
        if !self.inner.started.swap(false, Ordering::SeqCst) {
            return Err(DriverError::NotStarted);
        }
        self.inner.shutdown();
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.inner.started.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.inner.config
    }

    /// 原生桥句柄
    pub fn bridge(&self) -> &Arc<dyn NativeBridge> {
        &self.inner.bridge
    }

    fn ensure_started(&self) -> Result<(), DriverError> {
        if self.is_started() {
            Ok(())
        } else {
            Err(DriverError::NotStarted)
        }
    }

    // ========================================================================
    // 按键监听
    // ========================================================================

    /// 订阅按键的值推送
    ///
    /// 第一个监听器注册时发出 `StartListening`。`immediate` 为真时，注册之后
    /// 若原生库已缓存该按键的值且本监听器尚未收到推送，向其投递一次缓存值。
    ///
    /// # 返回
    /// 用于取消订阅的令牌（非 0）
    pub fn add_key_listener<F>(
        &self,
        key: &'static Key,
        callback: F,
        immediate: bool,
    ) -> Result<u64, DriverError>
    where
        F: Fn(&KeyResult) + Send + Sync + 'static,
    {
        check_access(key, AccessType::READ)?;
        self.ensure_started()?;

        let _guard = self.inner.listen_lock.lock();
        let token = self.inner.tokens.next();
        let (tx, rx) = unbounded::<Arc<KeyResult>>();
        thread::spawn(move || {
            for result in rx {
                callback(&result);
            }
        });

        let sink = Arc::new(KeySink::new(tx));
        let first = {
            let mut subs = self.inner.subs.write();
            let listeners = subs.keys.entry(key.sub_type()).or_default();
            listeners.insert(token, sink.clone());
            listeners.len() == 1
        };
        if first {
            let event = Event::new(EventType::StartListening, key.sub_type());
            self.inner.bridge.send_event(event.code(), &mut [], 0);
        }

        // 先注册再读缓存，读缓存期间到达的推送不会丢失
        if immediate {
            let cached = self.get_cached_key_value(key)?;
            if cached.has_value() && !sink.prime(Arc::new(cached)) {
                trace!(key = %key, token, "Cached value superseded by push");
            }
        }
        debug!(key = %key, token, first, "Key listener added");
        Ok(token)
    }

    /// 取消按键订阅；最后一个监听器移除时发出 `StopListening`
    pub fn remove_key_listener(&self, key: &'static Key, token: u64) -> Result<(), DriverError> {
        if token == 0 {
            return Err(DriverError::TokenInvalid(token));
        }

        let _guard = self.inner.listen_lock.lock();
        let last = {
            let mut subs = self.inner.subs.write();
            let Some(listeners) = subs.keys.get_mut(&key.sub_type()) else {
                return Err(DriverError::TokenInvalid(token));
            };
            if listeners.remove(&token).is_none() {
                return Err(DriverError::TokenInvalid(token));
            }
            let last = listeners.is_empty();
            if last {
                subs.keys.remove(&key.sub_type());
            }
            last
        };
        if last {
            let event = Event::new(EventType::StopListening, key.sub_type());
            self.inner.bridge.send_event(event.code(), &mut [], 0);
        }
        debug!(key = %key, token, last, "Key listener removed");
        Ok(())
    }

    // ========================================================================
    // 读
    // ========================================================================

    /// 异步读取；应答交给 `callback`（在新线程上执行）
    pub fn get_key_value<F>(&self, key: &'static Key, callback: F) -> Result<(), DriverError>
    where
        F: FnOnce(KeyResult) + Send + 'static,
    {
        self.send_get(key, Box::new(callback)).map(|_| ())
    }

    /// 同步读取
    ///
    /// `use_cache` 为真且原生库有缓存值时直接返回，不发出请求。
    pub fn get_key_value_sync(
        &self,
        key: &'static Key,
        use_cache: bool,
    ) -> Result<KeyResult, DriverError> {
        if use_cache {
            let cached = self.get_cached_key_value(key)?;
            if cached.has_value() {
                return Ok(cached);
            }
        }
        let (tx, rx) = bounded(1);
        let tag = self.send_get(
            key,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        )?;
        self.wait_for_reply(key, tag, rx)
    }

    /// 读取原生库缓存的值（同步，不经过标签关联）
    ///
    /// 无缓存时返回成功但不带值的结果；缓存内容无法解码时返回错误码 -1 的结果。
    pub fn get_cached_key_value(&self, key: &'static Key) -> Result<KeyResult, DriverError> {
        check_access(key, AccessType::READ)?;
        self.ensure_started()?;

        let mut output = vec![0u8; OUTPUT_BUFFER_SIZE];
        let event = Event::new(EventType::GetAvailableValue, key.sub_type());
        self.inner.bridge.send_event(event.code(), &mut output, 0);

        let data = output_bytes(&output);
        if data.is_empty() {
            return Ok(KeyResult::new(key, 0, 0, None));
        }
        match KeyResult::parse(data) {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!(key = %key, "Failed to decode cached value: {}", e);
                Ok(KeyResult::failure(Some(key), 0, e.to_string()))
            }
        }
    }

    fn send_get(&self, key: &'static Key, callback: ResultCallback) -> Result<Tag, DriverError> {
        check_access(key, AccessType::READ)?;
        self.ensure_started()?;

        let tag = self.inner.register_request(callback)?;
        let event = Event::new(EventType::GetValue, key.sub_type());
        trace!(key = %key, tag = tag.raw(), "GetValue");
        self.inner.bridge.send_event(event.code(), &mut [], tag.raw());
        Ok(tag)
    }

    // ========================================================================
    // 写
    // ========================================================================

    /// 异步写入，负载为 `{"value": <值>}`
    ///
    /// # 错误
    /// - `WrongAccess`: 按键不可写
    /// - `WrongValueShape`: 值形状与按键原型不符（不会发出任何事件）
    pub fn set_key_value<F>(
        &self,
        key: &'static Key,
        value: Value,
        callback: F,
    ) -> Result<(), DriverError>
    where
        F: FnOnce(KeyResult) + Send + 'static,
    {
        self.send_set(key, &value, Box::new(callback)).map(|_| ())
    }

    pub fn set_key_value_sync(&self, key: &'static Key, value: Value) -> Result<KeyResult, DriverError> {
        let (tx, rx) = bounded(1);
        let tag = self.send_set(
            key,
            &value,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        )?;
        self.wait_for_reply(key, tag, rx)
    }

    fn send_set(
        &self,
        key: &'static Key,
        value: &Value,
        callback: ResultCallback,
    ) -> Result<Tag, DriverError> {
        check_access(key, AccessType::WRITE)?;
        check_shape(key, value)?;
        self.ensure_started()?;

        let body = json!({ "value": value.to_json() }).to_string();
        let tag = self.inner.register_request(callback)?;
        let event = Event::new(EventType::SetValue, key.sub_type());
        trace!(key = %key, tag = tag.raw(), body = %body, "SetValue");
        self.inner
            .bridge
            .send_event_with_string(event.code(), &body, tag.raw());
        Ok(tag)
    }

    // ========================================================================
    // 动作
    // ========================================================================

    /// 异步执行动作
    ///
    /// 负载是裸值 JSON；`Void`（以及 `Raw(null)`）不带负载。
    pub fn perform_action_for_key<F>(
        &self,
        key: &'static Key,
        value: Value,
        callback: F,
    ) -> Result<(), DriverError>
    where
        F: FnOnce(KeyResult) + Send + 'static,
    {
        self.send_action(key, &value, Box::new(callback)).map(|_| ())
    }

    pub fn perform_action_for_key_sync(
        &self,
        key: &'static Key,
        value: Value,
    ) -> Result<KeyResult, DriverError> {
        let (tx, rx) = bounded(1);
        let tag = self.send_action(
            key,
            &value,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        )?;
        self.wait_for_reply(key, tag, rx)
    }

    fn send_action(
        &self,
        key: &'static Key,
        value: &Value,
        callback: ResultCallback,
    ) -> Result<Tag, DriverError> {
        check_access(key, AccessType::ACTION)?;
        check_shape(key, value)?;
        self.ensure_started()?;

        let tag = self.inner.register_request(callback)?;
        let code = Event::new(EventType::PerformAction, key.sub_type()).code();
        match value {
            Value::Void | Value::Raw(serde_json::Value::Null) => {
                trace!(key = %key, tag = tag.raw(), "PerformAction");
                self.inner.bridge.send_event(code, &mut [], tag.raw());
            }
            _ => {
                let body = value.to_json().to_string();
                trace!(key = %key, tag = tag.raw(), body = %body, "PerformAction");
                self.inner
                    .bridge
                    .send_event_with_string(code, &body, tag.raw());
            }
        }
        Ok(tag)
    }

    /// 直接发送数字动作（不检查权限，不关联应答）
    pub fn direct_send_key_value(&self, key: &'static Key, value: u64) -> Result<(), DriverError> {
        self.ensure_started()?;
        let event = Event::new(EventType::PerformAction, key.sub_type());
        self.inner
            .bridge
            .send_event_with_number(event.code(), value, 0);
        Ok(())
    }

    // ========================================================================
    // 原样转发
    // ========================================================================

    pub fn send_event(&self, event: Event) -> Result<(), DriverError> {
        self.ensure_started()?;
        self.inner.bridge.send_event(event.code(), &mut [], 0);
        Ok(())
    }

    pub fn send_event_with_string(&self, event: Event, data: &str) -> Result<(), DriverError> {
        self.ensure_started()?;
        self.inner
            .bridge
            .send_event_with_string(event.code(), data, 0);
        Ok(())
    }

    pub fn send_event_with_uint64(&self, event: Event, data: u64) -> Result<(), DriverError> {
        self.ensure_started()?;
        self.inner
            .bridge
            .send_event_with_number(event.code(), data, 0);
        Ok(())
    }

    // ========================================================================
    // 事件类型监听
    // ========================================================================

    /// 订阅某事件类型的全部入站事件（不与原生桥交互）
    pub fn add_event_type_listener<F>(&self, event_type: EventType, callback: F) -> u64
    where
        F: Fn(Event, Bytes, DataType) + Send + Sync + 'static,
    {
        let token = self.inner.tokens.next();
        let (tx, rx) = unbounded::<FeedItem>();
        thread::spawn(move || {
            for (event, data, data_type) in rx {
                callback(event, data, data_type);
            }
        });
        self.inner
            .subs
            .write()
            .event_types
            .entry(event_type)
            .or_default()
            .insert(token, tx);
        debug!(event_type = %event_type, token, "Event type listener added");
        token
    }

    pub fn remove_event_type_listener(
        &self,
        event_type: EventType,
        token: u64,
    ) -> Result<(), DriverError> {
        if token == 0 {
            return Err(DriverError::TokenInvalid(token));
        }
        let mut subs = self.inner.subs.write();
        let Some(listeners) = subs.event_types.get_mut(&event_type) else {
            return Err(DriverError::TokenInvalid(token));
        };
        if listeners.remove(&token).is_none() {
            return Err(DriverError::TokenInvalid(token));
        }
        if listeners.is_empty() {
            subs.event_types.remove(&event_type);
        }
        debug!(event_type = %event_type, token, "Event type listener removed");
        Ok(())
    }

    // ========================================================================
    // 会话
    // ========================================================================

    /// 把原生库绑定到机器人：close → set_ip → set_port → open
    pub fn connect(&self, ip: Ipv4Addr) -> Result<(), DriverError> {
        self.ensure_started()?;
        let bridge = &self.inner.bridge;
        bridge.send_event(ConnectionOp::Close.event().code(), &mut [], 0);
        bridge.send_event_with_string(ConnectionOp::SetIp.event().code(), &ip.to_string(), 0);
        bridge.send_event_with_number(ConnectionOp::SetPort.event().code(), ROBOT_PORT, 0);
        bridge.send_event(ConnectionOp::Open.event().code(), &mut [], 0);
        info!(%ip, port = ROBOT_PORT, "Connection opened");
        Ok(())
    }

    pub fn disconnect(&self) -> Result<(), DriverError> {
        self.ensure_started()?;
        self.inner
            .bridge
            .send_event(ConnectionOp::Close.event().code(), &mut [], 0);
        info!("Connection closed");
        Ok(())
    }

    fn wait_for_reply(
        &self,
        key: &'static Key,
        tag: Tag,
        rx: Receiver<KeyResult>,
    ) -> Result<KeyResult, DriverError> {
        let timeout = self.inner.config.request_timeout;
        match rx.recv_timeout(timeout) {
            Ok(result) if !result.succeeded() => Err(DriverError::RequestFailed {
                key: key.name(),
                code: result.error_code(),
                desc: result.error_desc().to_string(),
            }),
            Ok(result) => Ok(result),
            Err(RecvTimeoutError::Timeout) => {
                self.inner.pending.lock().remove(&tag.request_id());
                warn!(key = %key, tag = tag.raw(), "Request timed out after {:?}", timeout);
                Err(DriverError::RequestTimeout {
                    key: key.name(),
                    timeout,
                })
            }
            Err(RecvTimeoutError::Disconnected) => Err(DriverError::Terminated),
        }
    }
}

impl Inner {
    /// 登记一次性回调；调度器已停止时返回 `Terminated`
    ///
    /// 运行状态在 `pending` 锁内检查，与 `shutdown` 清空 `pending` 互斥。
    fn register_request(&self, callback: ResultCallback) -> Result<Tag, DriverError> {
        let mut pending = self.pending.lock();
        if !self.started.load(Ordering::SeqCst) {
            return Err(DriverError::Terminated);
        }
        let request_id = self.request_ids.next();
        pending.insert(request_id, callback);
        Ok(Tag::new(DataType::String, request_id))
    }

    fn handle_event(&self, code: u64, data: &[u8], tag: u64) {
        let data = Bytes::copy_from_slice(data);
        let (data_type, request_id) = Tag::from_raw(tag).split();
        let event = match Event::from_code(code) {
            Ok(event) => event,
            Err(e) => {
                warn!(code, "Dropping inbound event: {}", e);
                return;
            }
        };
        trace!(event = %event, tag, len = data.len(), "Inbound event");

        match event.event_type() {
            EventType::GetValue | EventType::SetValue | EventType::PerformAction => {
                self.complete_request(event, request_id, &data);
            }
            EventType::StartListening => self.notify_key_listeners(event, &data),
            EventType::GetAvailableValue | EventType::StopListening => {}
            _ => self.notify_event_type_listeners(event, data, data_type),
        }
    }

    fn complete_request(&self, event: Event, request_id: u64, data: &[u8]) {
        let Some(callback) = self.pending.lock().remove(&request_id) else {
            warn!(event = %event, request_id, "No pending request for reply");
            return;
        };
        let result = KeyResult::from_json(data);
        if result.key().is_none() {
            warn!(event = %event, request_id, "Failed to decode reply: {}", result.error_desc());
        }
        thread::spawn(move || callback(result));
    }

    fn notify_key_listeners(&self, event: Event, data: &[u8]) {
        let result = match KeyResult::parse(data) {
            Ok(result) => Arc::new(result),
            Err(e) => {
                warn!(event = %event, "Failed to decode pushed value: {}", e);
                return;
            }
        };
        let subs = self.subs.read();
        match subs.keys.get(&event.sub_type()) {
            Some(listeners) if !listeners.is_empty() => {
                for sink in listeners.values() {
                    sink.push(result.clone());
                }
            }
            _ => warn!(event = %event, "No key listeners for pushed value"),
        }
    }

    fn notify_event_type_listeners(&self, event: Event, data: Bytes, data_type: DataType) {
        let subs = self.subs.read();
        match subs.event_types.get(&event.event_type()) {
            Some(listeners) if !listeners.is_empty() => {
                for tx in listeners.values() {
                    let _ = tx.send((event, data.clone(), data_type));
                }
            }
            _ => warn!(event = %event, "No event type listeners"),
        }
    }

    fn shutdown(&self) {
        for event_type in EventType::ALL {
            self.bridge.set_event_callback(event_type.code(), None);
        }
        self.bridge.uninitialize();
        self.bridge.destroy();

        // 丢弃一次性回调即释放同步等待者（通道断开 → Terminated）
        let pending = std::mem::take(&mut *self.pending.lock());
        let subs = std::mem::take(&mut *self.subs.write());
        drop(pending);
        drop(subs);

        ACTIVE.store(false, Ordering::SeqCst);
        info!("Dispatcher stopped");
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if self.started.swap(false, Ordering::SeqCst) {
            self.shutdown();
        }
    }
}

fn check_access(key: &'static Key, required: AccessType) -> Result<(), DriverError> {
    if key.access().contains(required) {
        Ok(())
    } else {
        Err(DriverError::WrongAccess {
            key: key.name(),
            required,
        })
    }
}

fn check_shape(key: &'static Key, value: &Value) -> Result<(), DriverError> {
    if value.kind() == key.kind() {
        Ok(())
    } else {
        Err(DriverError::WrongValueShape {
            key: key.name(),
            expected: key.kind(),
            actual: value.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robomaster_bridge::{MockBridge, Payload};
    use robomaster_protocol::keys;
    use serial_test::serial;
    use std::sync::atomic::AtomicUsize;

    const WAIT: Duration = Duration::from_secs(2);

    fn start_with(config: DispatcherConfig) -> (Arc<MockBridge>, Dispatcher) {
        let bridge = Arc::new(MockBridge::new());
        let dispatcher = Dispatcher::new(bridge.clone(), config);
        dispatcher.start().unwrap();
        (bridge, dispatcher)
    }

    fn start() -> (Arc<MockBridge>, Dispatcher) {
        start_with(DispatcherConfig::default())
    }

    fn push_json(key: &Key, value: serde_json::Value) -> Vec<u8> {
        json!({ "key": key.sub_type(), "tag": 0, "error": 0, "value": value })
            .to_string()
            .into_bytes()
    }

    #[test]
    #[serial]
    fn test_start_stop_lifecycle() {
        let (bridge, dispatcher) = start();
        assert!(dispatcher.is_started());
        assert!(bridge.is_initialized());
        assert_eq!(
            bridge.created_with(),
            Some(("Robomaster".to_string(), false, String::new()))
        );
        assert_eq!(bridge.callback_count(), EventType::ALL.len());

        // 进程内只能有一个运行中的调度器
        let other = Dispatcher::new(Arc::new(MockBridge::new()), DispatcherConfig::default());
        assert!(matches!(other.start(), Err(DriverError::AlreadyStarted)));
        assert!(matches!(dispatcher.start(), Err(DriverError::AlreadyStarted)));

        dispatcher.stop().unwrap();
        assert_eq!(bridge.callback_count(), 0);
        assert!(!bridge.is_initialized());
        assert!(!bridge.is_created());
        assert!(matches!(dispatcher.stop(), Err(DriverError::NotStarted)));

        // 停止后可以再次启动
        other.start().unwrap();
        other.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_debuggable_log_path() {
        let (bridge, dispatcher) = start_with(DispatcherConfig {
            debuggable: true,
            ..Default::default()
        });
        assert_eq!(
            bridge.created_with(),
            Some(("Robomaster".to_string(), true, "./log".to_string()))
        );
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_initialize_failure() {
        let bridge = Arc::new(MockBridge::new());
        bridge.set_initialize_result(false);
        let dispatcher = Dispatcher::new(bridge.clone(), DispatcherConfig::default());
        assert!(matches!(dispatcher.start(), Err(DriverError::InitializeFailed)));
        assert!(!bridge.is_created());
        assert_eq!(bridge.callback_count(), 0);

        bridge.set_initialize_result(true);
        dispatcher.start().unwrap();
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_operations_require_start() {
        let dispatcher = Dispatcher::new(Arc::new(MockBridge::new()), DispatcherConfig::default());
        assert!(matches!(
            dispatcher.get_key_value_sync(&keys::AIR_LINK_SIGNAL_QUALITY, false),
            Err(DriverError::NotStarted)
        ));
        assert!(matches!(
            dispatcher.connect(Ipv4Addr::LOCALHOST),
            Err(DriverError::NotStarted)
        ));
    }

    /// 测试访问权限检查（不发出任何事件）
    #[test]
    #[serial]
    fn test_access_enforcement() {
        let (bridge, dispatcher) = start();
        let write_only = &keys::CAMERA_VIDEO_TRANS_RATE;
        assert!(!write_only.is_readable());

        assert!(matches!(
            dispatcher.add_key_listener(write_only, |_| {}, false),
            Err(DriverError::WrongAccess { .. })
        ));
        assert!(matches!(
            dispatcher.get_key_value(write_only, |_| {}),
            Err(DriverError::WrongAccess { .. })
        ));
        assert!(matches!(
            dispatcher.get_cached_key_value(write_only),
            Err(DriverError::WrongAccess { .. })
        ));

        let read_only = &keys::AIR_LINK_SIGNAL_QUALITY;
        assert!(matches!(
            dispatcher.set_key_value_sync(read_only, Value::Uint64(1)),
            Err(DriverError::WrongAccess { .. })
        ));
        assert!(matches!(
            dispatcher.perform_action_for_key_sync(&keys::CAMERA_MODE, Value::Uint64(1)),
            Err(DriverError::WrongAccess { .. })
        ));

        assert!(bridge.take_sent().is_empty());
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_wrong_value_shape() {
        let (bridge, dispatcher) = start();
        let err = dispatcher
            .set_key_value_sync(&keys::CAMERA_MODE, Value::Bool(true))
            .unwrap_err();
        assert!(matches!(
            err,
            DriverError::WrongValueShape {
                expected: robomaster_protocol::ValueKind::Uint64,
                actual: robomaster_protocol::ValueKind::Bool,
                ..
            }
        ));
        // Void 动作不接受任何值
        assert!(matches!(
            dispatcher.perform_action_for_key_sync(&keys::GIMBAL_RESET_POSITION, Value::Uint64(0)),
            Err(DriverError::WrongValueShape { .. })
        ));
        assert!(bridge.take_sent().is_empty());
        dispatcher.stop().unwrap();
    }

    /// 测试 N 次订阅 + N 次取消只产生一次 Start/StopListening
    #[test]
    #[serial]
    fn test_listener_lifecycle_events() {
        let (bridge, dispatcher) = start();
        let key = &keys::GIMBAL_ATTITUDE;

        let tokens: Vec<u64> = (0..3)
            .map(|_| dispatcher.add_key_listener(key, |_| {}, false).unwrap())
            .collect();
        for token in &tokens {
            dispatcher.remove_key_listener(key, *token).unwrap();
        }

        let sent = bridge.take_sent();
        let starts = sent
            .iter()
            .filter(|s| s.is(EventType::StartListening, key.sub_type()))
            .count();
        let stops = sent
            .iter()
            .filter(|s| s.is(EventType::StopListening, key.sub_type()))
            .count();
        assert_eq!((starts, stops), (1, 1));

        assert!(matches!(
            dispatcher.remove_key_listener(key, 0),
            Err(DriverError::TokenInvalid(0))
        ));
        assert!(matches!(
            dispatcher.remove_key_listener(key, tokens[0]),
            Err(DriverError::TokenInvalid(_))
        ));
        dispatcher.stop().unwrap();
    }

    /// 测试 immediate 只投递给新监听器
    #[test]
    #[serial]
    fn test_immediate_delivery_of_cached_value() {
        let (bridge, dispatcher) = start();
        let key = &keys::ROBOMASTER_BATTERY_POWER_PERCENT;
        bridge.set_cached_value(key.sub_type(), push_json(key, json!({ "value": 80 })));

        let (tx, rx) = unbounded();
        let first_count = Arc::new(AtomicUsize::new(0));
        let first_count_clone = first_count.clone();
        dispatcher
            .add_key_listener(key, move |_| {
                first_count_clone.fetch_add(1, Ordering::SeqCst);
            }, false)
            .unwrap();
        dispatcher
            .add_key_listener(key, move |r: &KeyResult| {
                let _ = tx.send(r.clone());
            }, true)
            .unwrap();

        let result = rx.recv_timeout(WAIT).unwrap();
        assert_eq!(result.value(), Some(&Value::Uint64(80)));
        thread::sleep(Duration::from_millis(50));
        assert_eq!(first_count.load(Ordering::SeqCst), 0);
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_cached_value_absent_or_corrupt() {
        let (bridge, dispatcher) = start();
        let key = &keys::AIR_LINK_SIGNAL_QUALITY;

        let empty = dispatcher.get_cached_key_value(key).unwrap();
        assert!(empty.succeeded());
        assert!(!empty.has_value());

        bridge.set_cached_value(key.sub_type(), &b"{not json"[..]);
        let corrupt = dispatcher.get_cached_key_value(key).unwrap();
        assert!(!corrupt.succeeded());
        assert_eq!(corrupt.key(), Some(key));
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_set_sync_with_auto_reply() {
        let (bridge, dispatcher) = start();
        bridge.enable_auto_reply();

        let result = dispatcher
            .set_key_value_sync(&keys::CAMERA_MODE, Value::Uint64(1))
            .unwrap();
        assert!(result.succeeded());

        let sent = bridge.take_sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].is(EventType::SetValue, keys::CAMERA_MODE.sub_type()));
        assert_eq!(sent[0].string(), Some(r#"{"value":{"value":1}}"#));
        assert_ne!(sent[0].tag, 0);
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_failed_reply_surfaces_error_code() {
        let (bridge, dispatcher) = start();
        bridge.set_responder(|sent| {
            let key = sent.event().map(|e| e.sub_type()).unwrap_or_default();
            let body = json!({ "key": key, "tag": sent.tag, "error": 5, "value": null });
            vec![(sent.code, body.to_string().into_bytes(), sent.tag)]
        });

        let err = dispatcher
            .set_key_value_sync(&keys::CAMERA_MODE, Value::Uint64(1))
            .unwrap_err();
        match err {
            DriverError::RequestFailed { code, desc, .. } => {
                assert_eq!(code, 5);
                assert_eq!(desc, "error 5");
            }
            other => panic!("unexpected error: {other}"),
        }
        dispatcher.stop().unwrap();
    }

    /// 测试超时后迟到的应答被丢弃
    #[test]
    #[serial]
    fn test_timeout_and_late_reply() {
        let (bridge, dispatcher) = start_with(DispatcherConfig {
            request_timeout: Duration::from_millis(100),
            ..Default::default()
        });
        let key = &keys::AIR_LINK_SIGNAL_QUALITY;

        let err = dispatcher.get_key_value_sync(key, false).unwrap_err();
        assert!(matches!(err, DriverError::RequestTimeout { .. }));

        let sent = bridge.take_sent();
        let get = sent
            .iter()
            .find(|s| s.is(EventType::GetValue, key.sub_type()))
            .unwrap();
        let late = push_json(key, json!({ "value": 3 }));
        assert!(bridge.emit(get.code, &late, get.tag));
        assert!(dispatcher.inner.pending.lock().is_empty());
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_async_get_and_unregistered_tag() {
        let (bridge, dispatcher) = start();
        let key = &keys::AIR_LINK_SIGNAL_QUALITY;
        let (tx, rx) = unbounded();
        dispatcher
            .get_key_value(key, move |result| {
                let _ = tx.send(result);
            })
            .unwrap();
        let get = bridge.recv_sent(WAIT).unwrap();

        // 未注册的标签不触发任何回调
        let reply = push_json(key, json!({ "value": 7 }));
        bridge.emit(get.code, &reply, get.tag.wrapping_add(1000));
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

        bridge.emit(get.code, &reply, get.tag);
        let result = rx.recv_timeout(WAIT).unwrap();
        assert_eq!(result.value().and_then(Value::as_u64), Some(7));

        // 同一标签只投递一次
        bridge.emit(get.code, &reply, get.tag);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_stop_releases_waiters() {
        let (bridge, dispatcher) = start_with(DispatcherConfig {
            request_timeout: Duration::from_secs(30),
            ..Default::default()
        });
        let waiter = {
            let dispatcher = dispatcher.clone();
            thread::spawn(move || dispatcher.get_key_value_sync(&keys::AIR_LINK_SIGNAL_QUALITY, false))
        };
        bridge
            .wait_for_sent(WAIT, |s| s.event().map(|e| e.event_type()) == Some(EventType::GetValue))
            .unwrap();

        dispatcher.stop().unwrap();
        assert!(matches!(waiter.join().unwrap(), Err(DriverError::Terminated)));
    }

    #[test]
    #[serial]
    fn test_void_action_has_no_body() {
        let (bridge, dispatcher) = start();
        bridge.enable_auto_reply();
        dispatcher
            .perform_action_for_key_sync(&keys::GIMBAL_RESET_POSITION, Value::Void)
            .unwrap();
        let sent = bridge.take_sent();
        assert!(sent[0].is(EventType::PerformAction, keys::GIMBAL_RESET_POSITION.sub_type()));
        assert_eq!(sent[0].payload, Payload::None { output_len: 0 });
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_direct_send_and_passthrough() {
        let (bridge, dispatcher) = start();
        dispatcher
            .direct_send_key_value(&keys::MAIN_CONTROLLER_VIRTUAL_STICK, 0x1234)
            .unwrap();
        dispatcher
            .send_event(Event::from_type(EventType::GetNativeTexture))
            .unwrap();

        let sent = bridge.take_sent();
        assert!(sent[0].is(
            EventType::PerformAction,
            keys::MAIN_CONTROLLER_VIRTUAL_STICK.sub_type()
        ));
        assert_eq!(sent[0].number(), Some(0x1234));
        assert_eq!(sent[0].tag, 0);
        assert!(sent[1].is(EventType::GetNativeTexture, 0));
        dispatcher.stop().unwrap();
    }

    /// 测试会话握手的事件顺序
    #[test]
    #[serial]
    fn test_connect_handshake_order() {
        let (bridge, dispatcher) = start();
        dispatcher.connect(Ipv4Addr::new(192, 168, 1, 42)).unwrap();

        let sent = bridge.take_sent();
        assert_eq!(sent.len(), 4);
        assert!(sent[0].is(EventType::Connection, 1));
        assert!(sent[1].is(EventType::Connection, 2));
        assert_eq!(sent[1].string(), Some("192.168.1.42"));
        assert!(sent[2].is(EventType::Connection, 3));
        assert_eq!(sent[2].number(), Some(10607));
        assert!(sent[3].is(EventType::Connection, 0));
        dispatcher.stop().unwrap();
    }

    /// 测试推送按投递顺序到达
    #[test]
    #[serial]
    fn test_push_order_preserved() {
        let (bridge, dispatcher) = start();
        let key = &keys::ROBOMASTER_BATTERY_POWER_PERCENT;
        let (tx, rx) = unbounded();
        dispatcher
            .add_key_listener(key, move |r: &KeyResult| {
                let _ = tx.send(r.value().and_then(Value::as_u64));
            }, false)
            .unwrap();

        let code = Event::new(EventType::StartListening, key.sub_type()).code();
        for i in 0..50u64 {
            bridge.emit(code, &push_json(key, json!({ "value": i })), 0);
        }
        let received: Vec<_> = (0..50).map(|_| rx.recv_timeout(WAIT).unwrap()).collect();
        let expected: Vec<_> = (0..50u64).map(Some).collect();
        assert_eq!(received, expected);
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_event_type_listener_receives_copy() {
        let (bridge, dispatcher) = start();
        let (tx, rx) = unbounded();
        let token = dispatcher.add_event_type_listener(EventType::VideoDataRecv, move |event, data, data_type| {
            let _ = tx.send((event, data, data_type));
        });

        let tag = Tag::new(DataType::Number, 0).raw();
        bridge.emit(EventType::VideoDataRecv.code() | 9, &[1, 2, 3], tag);
        let (event, data, data_type) = rx.recv_timeout(WAIT).unwrap();
        assert_eq!(event, Event::new(EventType::VideoDataRecv, 9));
        assert_eq!(&data[..], &[1, 2, 3]);
        assert_eq!(data_type, DataType::Number);

        dispatcher
            .remove_event_type_listener(EventType::VideoDataRecv, token)
            .unwrap();
        assert!(matches!(
            dispatcher.remove_event_type_listener(EventType::VideoDataRecv, token),
            Err(DriverError::TokenInvalid(_))
        ));
        dispatcher.stop().unwrap();
    }

    /// 读缓存时插入一次推送：输出仍是旧的缓存值，推送携带新值
    struct PushDuringCacheRead {
        mock: Arc<MockBridge>,
        newer: Vec<u8>,
        armed: AtomicBool,
    }

    impl NativeBridge for PushDuringCacheRead {
        fn create(&self, name: &str, debuggable: bool, log_path: &str) {
            self.mock.create(name, debuggable, log_path)
        }

        fn destroy(&self) {
            self.mock.destroy()
        }

        fn initialize(&self) -> bool {
            self.mock.initialize()
        }

        fn uninitialize(&self) {
            self.mock.uninitialize()
        }

        fn set_event_callback(&self, event_type_code: u64, callback: Option<EventCallback>) {
            self.mock.set_event_callback(event_type_code, callback)
        }

        fn send_event(&self, event_code: u64, output: &mut [u8], tag: u64) {
            self.mock.send_event(event_code, output, tag);
            let Ok(event) = Event::from_code(event_code) else {
                return;
            };
            if event.event_type() == EventType::GetAvailableValue && self.armed.swap(false, Ordering::SeqCst) {
                let push = Event::new(EventType::StartListening, event.sub_type());
                self.mock.set_cached_value(event.sub_type(), self.newer.clone());
                self.mock.emit(push.code(), &self.newer, 0);
            }
        }

        fn send_event_with_string(&self, event_code: u64, data: &str, tag: u64) {
            self.mock.send_event_with_string(event_code, data, tag)
        }

        fn send_event_with_number(&self, event_code: u64, data: u64, tag: u64) {
            self.mock.send_event_with_number(event_code, data, tag)
        }

        fn get_security_key_by_keychain_index(&self, index: i32) -> String {
            self.mock.get_security_key_by_keychain_index(index)
        }
    }

    /// 测试订阅期间到达的推送不会被旧缓存值覆盖
    #[test]
    #[serial]
    fn test_push_during_cached_read_reaches_new_listener() {
        let key = &keys::ROBOMASTER_BATTERY_POWER_PERCENT;
        let mock = Arc::new(MockBridge::new());
        mock.set_cached_value(key.sub_type(), push_json(key, json!({ "value": 80 })));
        let bridge = Arc::new(PushDuringCacheRead {
            mock,
            newer: push_json(key, json!({ "value": 90 })),
            armed: AtomicBool::new(false),
        });
        let dispatcher = Dispatcher::new(bridge.clone(), DispatcherConfig::default());
        dispatcher.start().unwrap();

        let (first_tx, first_rx) = unbounded();
        dispatcher
            .add_key_listener(key, move |r: &KeyResult| {
                let _ = first_tx.send(r.value().and_then(Value::as_u64));
            }, false)
            .unwrap();

        bridge.armed.store(true, Ordering::SeqCst);
        let (tx, rx) = unbounded();
        dispatcher
            .add_key_listener(key, move |r: &KeyResult| {
                let _ = tx.send(r.value().and_then(Value::as_u64));
            }, true)
            .unwrap();

        assert_eq!(rx.recv_timeout(WAIT).unwrap(), Some(90));
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
        assert_eq!(first_rx.recv_timeout(WAIT).unwrap(), Some(90));
        dispatcher.stop().unwrap();
    }

    /// 测试停止后的请求登记直接失败
    #[test]
    #[serial]
    fn test_register_after_stop_is_terminated() {
        let (_bridge, dispatcher) = start();
        let inner = dispatcher.inner.clone();
        dispatcher.stop().unwrap();

        let registered = inner.register_request(Box::new(|_| {}));
        assert!(matches!(registered, Err(DriverError::Terminated)));
        assert!(inner.pending.lock().is_empty());
    }
}
