//! 管道原生桥宿主端
//!
//! 从请求管道逐个读取调用，转发给本进程内的原生桥，在应答管道上回送结果。
//! 客户端安装回调时，宿主在原生桥上安装一个把事件写入事件管道的回调。

use super::protocol::{Call, EventFrame, MAX_FRAME_LEN, read_frame, write_frame};
use crate::{BridgeError, EventCallback, NativeBridge};
use parking_lot::Mutex;
use std::io::{Read, Write};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 处理请求直到请求管道关闭
///
/// 返回时已移除所有由客户端安装的回调。
pub fn serve<B, R, W, E>(bridge: &B, mut request: R, mut reply: W, events: E) -> Result<(), BridgeError>
where
    B: NativeBridge + ?Sized,
    R: Read,
    W: Write,
    E: Write + Send + 'static,
{
    let events = Arc::new(Mutex::new(events));
    let mut installed: Vec<u64> = Vec::new();

    let result = loop {
        let (function, payload) = match read_frame(&mut request) {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                info!("Request pipe closed, bridge host stopping");
                break Ok(());
            }
            Err(e) => break Err(e),
        };

        let call = match Call::decode(function, &payload) {
            Ok(call) => call,
            Err(e) => break Err(e),
        };
        debug!("Bridge host call {:?}", call.function());

        let response = handle(bridge, call, &events, &mut installed);
        if let Err(e) = write_frame(&mut reply, function, &response) {
            break Err(e);
        }
    };

    for type_code in installed {
        bridge.set_event_callback(type_code, None);
    }
    result
}

fn handle<B, E>(bridge: &B, call: Call, events: &Arc<Mutex<E>>, installed: &mut Vec<u64>) -> Vec<u8>
where
    B: NativeBridge + ?Sized,
    E: Write + Send + 'static,
{
    match call {
        Call::Create {
            name,
            debuggable,
            log_path,
        } => {
            bridge.create(&name, debuggable, &log_path);
            Vec::new()
        }
        Call::Destroy => {
            bridge.destroy();
            Vec::new()
        }
        Call::Initialize => vec![u8::from(bridge.initialize())],
        Call::Uninitialize => {
            bridge.uninitialize();
            Vec::new()
        }
        Call::SendEvent {
            code,
            tag,
            output_len,
        } => {
            // 应答同样受帧长上限约束
            let len = (output_len as usize).min(MAX_FRAME_LEN);
            if len < output_len as usize {
                warn!(code, output_len, "Output buffer clamped to {} bytes", MAX_FRAME_LEN);
            }
            let mut output = vec![0u8; len];
            bridge.send_event(code, &mut output, tag);
            let end = crate::output_bytes(&output).len();
            output.truncate(end);
            output
        }
        Call::SendEventWithString { code, tag, data } => {
            bridge.send_event_with_string(code, &data, tag);
            Vec::new()
        }
        Call::SendEventWithNumber { code, tag, data } => {
            bridge.send_event_with_number(code, data, tag);
            Vec::new()
        }
        Call::SetEventCallback { type_code, add } => {
            if add {
                bridge.set_event_callback(type_code, Some(forwarder(events.clone())));
                installed.push(type_code);
            } else {
                bridge.set_event_callback(type_code, None);
                installed.retain(|code| *code != type_code);
            }
            Vec::new()
        }
        Call::GetSecurityKey { index } => bridge
            .get_security_key_by_keychain_index(index as i32)
            .into_bytes(),
    }
}

/// 把原生事件写入事件管道的回调
fn forwarder<E>(events: Arc<Mutex<E>>) -> EventCallback
where
    E: Write + Send + 'static,
{
    Arc::new(move |code: u64, data: &[u8], tag: u64| {
        let frame = EventFrame {
            code,
            tag,
            data: data.to_vec(),
        };
        if let Err(e) = frame.write_to(&mut *events.lock()) {
            warn!("Failed to forward event {:#x}: {}", code, e);
        }
    })
}
