//! 直接链接的原生桥
//!
//! 原生库的每个事件类型只接受一个 C 函数指针。所有类型共用同一个
//! 蹦床函数，由进程级注册表按事件类型找到对应的 Rust 回调。

use crate::registry::CallbackRegistry;
use crate::{EventCallback, NativeBridge};
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::sync::LazyLock;
use tracing::warn;

type RawEventCallback = unsafe extern "C" fn(event_code: u64, data: usize, length: c_int, tag: u64);

#[link(name = "unitybridge")]
unsafe extern "C" {
    fn CreateUnityBridge(name: *const c_char, debuggable: bool, log_path: *const c_char);
    fn UnityBridgeInitialize() -> bool;
    fn UnitySendEvent(event_code: u64, data: isize, tag: u64);
    fn UnitySendEventWithString(event_code: u64, data: *const c_char, tag: u64);
    fn UnitySendEventWithNumber(event_code: u64, data: u64, tag: u64);
    fn UnitySetEventCallback(event_code: u64, callback: Option<RawEventCallback>);
    fn UnityGetSecurityKeyByKeyChainIndex(index: c_int) -> isize;
    fn UnityBridgeUninitialze();
    fn DestroyUnityBridge();
}

static CALLBACKS: LazyLock<CallbackRegistry> = LazyLock::new(CallbackRegistry::new);

unsafe extern "C" fn trampoline(event_code: u64, data: usize, length: c_int, tag: u64) {
    let bytes: &[u8] = if data == 0 || length <= 0 {
        &[]
    } else {
        // SAFETY: 原生库保证回调期间 data 指向 length 字节的有效内存
        unsafe { std::slice::from_raw_parts(data as *const u8, length as usize) }
    };
    CALLBACKS.dispatch(event_code, bytes, tag);
}

/// 内部 NUL 会被截断，与 C 字符串语义一致
fn c_string(s: &str) -> CString {
    let end = s.find('\0').unwrap_or(s.len());
    CString::new(&s[..end]).unwrap_or_default()
}

/// 直接链接的原生桥（进程内只有一个原生库实例）
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkBridge;

impl LinkBridge {
    pub fn new() -> Self {
        Self
    }
}

impl NativeBridge for LinkBridge {
    fn create(&self, name: &str, debuggable: bool, log_path: &str) {
        let name = c_string(name);
        let log_path = c_string(log_path);
        // SAFETY: 两个指针在调用期间有效
        unsafe { CreateUnityBridge(name.as_ptr(), debuggable, log_path.as_ptr()) }
    }

    fn destroy(&self) {
        unsafe { DestroyUnityBridge() }
    }

    fn initialize(&self) -> bool {
        unsafe { UnityBridgeInitialize() }
    }

    fn uninitialize(&self) {
        unsafe { UnityBridgeUninitialze() }
    }

    fn set_event_callback(&self, event_type_code: u64, callback: Option<EventCallback>) {
        let raw: Option<RawEventCallback> = callback.as_ref().map(|_| trampoline as RawEventCallback);
        if let Err(e) = CALLBACKS.set(event_type_code, callback) {
            warn!("Link bridge callback registry: {}", e);
            return;
        }
        unsafe { UnitySetEventCallback(event_type_code, raw) }
    }

    fn send_event(&self, event_code: u64, output: &mut [u8], tag: u64) {
        let data = if output.is_empty() {
            0
        } else {
            output.as_mut_ptr() as isize
        };
        // SAFETY: 原生库只在本次调用内写入 output（不超过其长度）
        unsafe { UnitySendEvent(event_code, data, tag) }
    }

    fn send_event_with_string(&self, event_code: u64, data: &str, tag: u64) {
        let data = c_string(data);
        unsafe { UnitySendEventWithString(event_code, data.as_ptr(), tag) }
    }

    fn send_event_with_number(&self, event_code: u64, data: u64, tag: u64) {
        unsafe { UnitySendEventWithNumber(event_code, data, tag) }
    }

    fn get_security_key_by_keychain_index(&self, index: i32) -> String {
        let ptr = unsafe { UnityGetSecurityKeyByKeyChainIndex(index) } as *mut c_char;
        if ptr.is_null() {
            return String::new();
        }
        // SAFETY: 返回值是原生库 malloc 的 C 字符串，由调用者释放
        unsafe {
            let key = CStr::from_ptr(ptr).to_string_lossy().into_owned();
            libc::free(ptr.cast());
            key
        }
    }
}
