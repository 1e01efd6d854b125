//! Mock 原生桥
//!
//! 记录所有发出的事件，支持预置缓存值（`GetAvailableValue` 的同步应答）
//! 以及从测试代码注入入站事件。可选的应答器在独立线程上回送应答，
//! 模拟原生库的异步回调。

use crate::registry::CallbackRegistry;
use crate::{EventCallback, NativeBridge};
use crossbeam_channel::{Receiver, Sender, unbounded};
use parking_lot::{Mutex, RwLock};
use robomaster_protocol::{Event, EventType};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};

/// 发出事件的负载
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// `send_event`（输出缓冲区长度）
    None { output_len: usize },
    String(String),
    Number(u64),
}

/// 一次发出的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEvent {
    pub code: u64,
    pub tag: u64,
    pub payload: Payload,
}

impl SentEvent {
    pub fn event(&self) -> Option<Event> {
        Event::from_code(self.code).ok()
    }

    pub fn is(&self, event_type: EventType, sub_type: u32) -> bool {
        self.event() == Some(Event::new(event_type, sub_type))
    }

    pub fn string(&self) -> Option<&str> {
        match &self.payload {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<u64> {
        match self.payload {
            Payload::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// 入站事件：`(事件码, 负载, 标签)`
pub type Reply = (u64, Vec<u8>, u64);

type Responder = Arc<dyn Fn(&SentEvent) -> Vec<Reply> + Send + Sync>;

#[derive(Default)]
struct Lifecycle {
    created: Option<(String, bool, String)>,
    initialized: bool,
    create_count: usize,
    initialize_count: usize,
}

pub struct MockBridge {
    callbacks: Arc<CallbackRegistry>,
    lifecycle: Mutex<Lifecycle>,
    cached: RwLock<HashMap<u32, Vec<u8>>>,
    responder: RwLock<Option<Responder>>,
    initialize_result: AtomicBool,
    sent_tx: Sender<SentEvent>,
    sent_rx: Receiver<SentEvent>,
}

impl Default for MockBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBridge {
    pub fn new() -> Self {
        let (sent_tx, sent_rx) = unbounded();
        Self {
            callbacks: Arc::new(CallbackRegistry::new()),
            lifecycle: Mutex::new(Lifecycle::default()),
            cached: RwLock::new(HashMap::new()),
            responder: RwLock::new(None),
            initialize_result: AtomicBool::new(true),
            sent_tx,
            sent_rx,
        }
    }

    /// 预置按键缓存值（按键结果 JSON），供 `GetAvailableValue` 同步返回
    pub fn set_cached_value(&self, sub_type: u32, json: impl Into<Vec<u8>>) {
        self.cached.write().insert(sub_type, json.into());
    }

    pub fn clear_cached_value(&self, sub_type: u32) {
        self.cached.write().remove(&sub_type);
    }

    pub fn cached_value(&self, sub_type: u32) -> Option<Vec<u8>> {
        self.cached.read().get(&sub_type).cloned()
    }

    /// `initialize` 的返回值
    pub fn set_initialize_result(&self, ok: bool) {
        self.initialize_result.store(ok, Ordering::SeqCst);
    }

    /// 设置应答器：每个发出的事件都交给它，返回的入站事件在独立线程上按序注入
    pub fn set_responder<F>(&self, responder: F)
    where
        F: Fn(&SentEvent) -> Vec<Reply> + Send + Sync + 'static,
    {
        *self.responder.write() = Some(Arc::new(responder));
    }

    pub fn clear_responder(&self) {
        *self.responder.write() = None;
    }

    /// 自动应答：带标签的读/写/动作请求回送成功结果，读请求的值取自缓存；
    /// `StartListening` 时若有缓存值则立即推送一次
    pub fn enable_auto_reply(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        self.set_responder(move |sent| {
            let Some(bridge) = weak.upgrade() else {
                return Vec::new();
            };
            bridge.auto_reply(sent)
        });
    }

    fn auto_reply(&self, sent: &SentEvent) -> Vec<Reply> {
        let Some(event) = sent.event() else {
            return Vec::new();
        };
        let sub_type = event.sub_type();
        match event.event_type() {
            EventType::GetValue if sent.tag != 0 => {
                let value = self
                    .cached_value(sub_type)
                    .and_then(|json| serde_json::from_slice::<serde_json::Value>(&json).ok())
                    .and_then(|json| json.get("value").cloned())
                    .unwrap_or(serde_json::Value::Null);
                vec![(sent.code, reply_json(sub_type, sent.tag, value), sent.tag)]
            }
            EventType::SetValue | EventType::PerformAction if sent.tag != 0 => {
                let value = serde_json::json!({});
                vec![(sent.code, reply_json(sub_type, sent.tag, value), sent.tag)]
            }
            EventType::StartListening => match self.cached_value(sub_type) {
                Some(json) => vec![(sent.code, json, 0)],
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// 注入入站事件（在调用者线程上同步分发）；返回是否有回调接收
    pub fn emit(&self, event_code: u64, data: &[u8], tag: u64) -> bool {
        self.callbacks.dispatch(event_code, data, tag)
    }

    /// 取出目前为止发出的全部事件
    pub fn take_sent(&self) -> Vec<SentEvent> {
        self.sent_rx.try_iter().collect()
    }

    /// 等待下一个发出的事件
    pub fn recv_sent(&self, timeout: Duration) -> Option<SentEvent> {
        self.sent_rx.recv_timeout(timeout).ok()
    }

    /// 等待满足条件的发出事件（丢弃途经的其他事件）
    pub fn wait_for_sent<F>(&self, timeout: Duration, mut predicate: F) -> Option<SentEvent>
    where
        F: FnMut(&SentEvent) -> bool,
    {
        let deadline = std::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            let sent = self.sent_rx.recv_timeout(remaining).ok()?;
            if predicate(&sent) {
                return Some(sent);
            }
        }
    }

    pub fn has_callback(&self, event_type: EventType) -> bool {
        self.callbacks.contains(event_type.code())
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_created(&self) -> bool {
        self.lifecycle.lock().created.is_some()
    }

    pub fn created_with(&self) -> Option<(String, bool, String)> {
        self.lifecycle.lock().created.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle.lock().initialized
    }

    /// `(create 次数, initialize 次数)`
    pub fn call_counts(&self) -> (usize, usize) {
        let lifecycle = self.lifecycle.lock();
        (lifecycle.create_count, lifecycle.initialize_count)
    }

    fn record(&self, sent: SentEvent) {
        trace!(code = sent.code, tag = sent.tag, "mock bridge event");
        let responder = self.responder.read().clone();
        let _ = self.sent_tx.send(sent.clone());

        let Some(responder) = responder else {
            return;
        };
        let replies = responder(&sent);
        if replies.is_empty() {
            return;
        }

        // 应答不能在发送者线程上同步回调
        let callbacks = self.callbacks.clone();
        thread::spawn(move || {
            for (code, data, tag) in replies {
                if !callbacks.dispatch(code, &data, tag) {
                    debug!(code, "mock reply dropped, no callback");
                }
            }
        });
    }
}

fn reply_json(sub_type: u32, tag: u64, value: serde_json::Value) -> Vec<u8> {
    serde_json::json!({ "key": sub_type, "tag": tag, "error": 0, "value": value })
        .to_string()
        .into_bytes()
}

impl NativeBridge for MockBridge {
    fn create(&self, name: &str, debuggable: bool, log_path: &str) {
        let mut lifecycle = self.lifecycle.lock();
        lifecycle.created = Some((name.to_string(), debuggable, log_path.to_string()));
        lifecycle.create_count += 1;
    }

    fn destroy(&self) {
        self.lifecycle.lock().created = None;
    }

    fn initialize(&self) -> bool {
        let mut lifecycle = self.lifecycle.lock();
        lifecycle.initialize_count += 1;
        let ok = self.initialize_result.load(Ordering::SeqCst);
        lifecycle.initialized = ok;
        ok
    }

    fn uninitialize(&self) {
        self.lifecycle.lock().initialized = false;
    }

    fn set_event_callback(&self, event_type_code: u64, callback: Option<EventCallback>) {
        if let Err(e) = self.callbacks.set(event_type_code, callback) {
            debug!("mock bridge: {}", e);
        }
    }

    fn send_event(&self, event_code: u64, output: &mut [u8], tag: u64) {
        if !output.is_empty() {
            output.fill(0);
            if let Ok(event) = Event::from_code(event_code) {
                if event.event_type() == EventType::GetAvailableValue {
                    if let Some(json) = self.cached_value(event.sub_type()) {
                        // 保留结尾的 0
                        let len = json.len().min(output.len() - 1);
                        output[..len].copy_from_slice(&json[..len]);
                    }
                }
            }
        }
        self.record(SentEvent {
            code: event_code,
            tag,
            payload: Payload::None {
                output_len: output.len(),
            },
        });
    }

    fn send_event_with_string(&self, event_code: u64, data: &str, tag: u64) {
        self.record(SentEvent {
            code: event_code,
            tag,
            payload: Payload::String(data.to_string()),
        });
    }

    fn send_event_with_number(&self, event_code: u64, data: u64, tag: u64) {
        self.record(SentEvent {
            code: event_code,
            tag,
            payload: Payload::Number(data),
        });
    }

    fn get_security_key_by_keychain_index(&self, index: i32) -> String {
        format!("mock-security-key-{index}")
    }
}
