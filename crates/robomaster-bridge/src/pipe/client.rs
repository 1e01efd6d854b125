//! 管道原生桥客户端
//!
//! 请求/应答是严格的一问一答（请求管道与应答管道在同一把锁下使用）。
//! 事件管道由后台线程读取，通过本地回调注册表分发。

use super::protocol::{Call, EventFrame, read_reply, write_frame};
use crate::registry::CallbackRegistry;
use crate::{BridgeError, EventCallback, NativeBridge};
use parking_lot::Mutex;
use std::io::{Read, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, warn};

struct Channel {
    request: Box<dyn Write + Send>,
    reply: Box<dyn Read + Send>,
}

/// 通过管道访问进程外宿主的原生桥
pub struct PipeBridge {
    channel: Mutex<Channel>,
    callbacks: Arc<CallbackRegistry>,
    event_thread: Mutex<Option<JoinHandle<()>>>,
    #[cfg(unix)]
    host: Mutex<Option<launch::HostProcess>>,
}

impl PipeBridge {
    /// 在已打开的三条管道上创建客户端，并启动事件读取线程
    pub fn new<W, R, E>(request: W, reply: R, events: E) -> Self
    where
        W: Write + Send + 'static,
        R: Read + Send + 'static,
        E: Read + Send + 'static,
    {
        let callbacks = Arc::new(CallbackRegistry::new());
        let event_thread = spawn_event_reader(events, callbacks.clone());
        Self {
            channel: Mutex::new(Channel {
                request: Box::new(request),
                reply: Box::new(reply),
            }),
            callbacks,
            event_thread: Mutex::new(Some(event_thread)),
            #[cfg(unix)]
            host: Mutex::new(None),
        }
    }

    /// 执行一次调用并返回应答负载
    pub fn call(&self, call: &Call) -> Result<Vec<u8>, BridgeError> {
        let function = call.function();
        let mut channel = self.channel.lock();
        write_frame(&mut channel.request, function, &call.encode_payload())?;
        read_reply(&mut channel.reply, function)
    }

    fn call_or_die(&self, call: &Call) -> Vec<u8> {
        match self.call(call) {
            Ok(reply) => reply,
            Err(e) => {
                error!("Pipe bridge call {:?} failed: {}", call.function(), e);
                panic!("pipe bridge call {:?} failed: {e}", call.function());
            }
        }
    }
}

impl Drop for PipeBridge {
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Some(mut host) = self.host.lock().take() {
            host.terminate();
        }
        // 宿主退出后事件管道关闭，读取线程随之结束
        if let Some(handle) = self.event_thread.lock().take() {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }
}

fn spawn_event_reader<E>(mut events: E, callbacks: Arc<CallbackRegistry>) -> JoinHandle<()>
where
    E: Read + Send + 'static,
{
    thread::Builder::new()
        .name("robomaster-pipe-events".into())
        .spawn(move || {
            loop {
                match EventFrame::read_from(&mut events) {
                    Ok(Some(frame)) => {
                        callbacks.dispatch(frame.code, &frame.data, frame.tag);
                    }
                    Ok(None) => {
                        debug!("Event pipe closed");
                        break;
                    }
                    Err(e) => {
                        warn!("Event pipe read failed: {}", e);
                        break;
                    }
                }
            }
        })
        .unwrap_or_else(|e| panic!("failed to spawn pipe event thread: {e}"))
}

impl NativeBridge for PipeBridge {
    fn create(&self, name: &str, debuggable: bool, log_path: &str) {
        self.call_or_die(&Call::Create {
            name: name.to_string(),
            debuggable,
            log_path: log_path.to_string(),
        });
    }

    fn destroy(&self) {
        self.call_or_die(&Call::Destroy);
    }

    fn initialize(&self) -> bool {
        let reply = self.call_or_die(&Call::Initialize);
        reply.first().is_some_and(|b| *b != 0)
    }

    fn uninitialize(&self) {
        self.call_or_die(&Call::Uninitialize);
    }

    fn set_event_callback(&self, event_type_code: u64, callback: Option<EventCallback>) {
        self.call_or_die(&Call::SetEventCallback {
            type_code: event_type_code,
            add: callback.is_some(),
        });
        if let Err(e) = self.callbacks.set(event_type_code, callback) {
            warn!("Pipe bridge callback registry: {}", e);
        }
    }

    fn send_event(&self, event_code: u64, output: &mut [u8], tag: u64) {
        let reply = self.call_or_die(&Call::SendEvent {
            code: event_code,
            tag,
            output_len: output.len() as u32,
        });
        output.fill(0);
        let len = reply.len().min(output.len());
        output[..len].copy_from_slice(&reply[..len]);
    }

    fn send_event_with_string(&self, event_code: u64, data: &str, tag: u64) {
        self.call_or_die(&Call::SendEventWithString {
            code: event_code,
            tag,
            data: data.to_string(),
        });
    }

    fn send_event_with_number(&self, event_code: u64, data: u64, tag: u64) {
        self.call_or_die(&Call::SendEventWithNumber {
            code: event_code,
            tag,
            data,
        });
    }

    fn get_security_key_by_keychain_index(&self, index: i32) -> String {
        let reply = self.call_or_die(&Call::GetSecurityKey { index: index as u64 });
        String::from_utf8_lossy(&reply).into_owned()
    }
}

// ============================================================================
// Host process (unix)
// ============================================================================

#[cfg(unix)]
mod launch {
    use super::PipeBridge;
    use crate::BridgeError;
    use nix::sys::stat::Mode;
    use nix::unistd::mkfifo;
    use std::ffi::OsStr;
    use std::fs::OpenOptions;
    use std::path::Path;
    use std::process::{Child, Command};
    use tempfile::TempDir;
    use tracing::{info, warn};

    /// 宿主子进程及其 FIFO 所在的临时目录
    pub(super) struct HostProcess {
        child: Child,
        _dir: TempDir,
    }

    impl HostProcess {
        pub(super) fn terminate(&mut self) {
            match self.child.try_wait() {
                Ok(Some(status)) => info!("Bridge host exited: {}", status),
                _ => {
                    if let Err(e) = self.child.kill() {
                        warn!("Failed to kill bridge host: {}", e);
                    }
                    let _ = self.child.wait();
                }
            }
        }
    }

    fn make_fifo(path: &Path) -> Result<(), BridgeError> {
        mkfifo(path, Mode::S_IRUSR | Mode::S_IWUSR)
            .map_err(|e| BridgeError::Host(format!("mkfifo {}: {}", path.display(), e)))
    }

    impl PipeBridge {
        /// 创建三个 FIFO，启动宿主进程并连接
        ///
        /// 宿主收到 `--request <path> --reply <path> --event <path>` 参数，
        /// 必须按 请求（读）→ 应答（写）→ 事件（写）的顺序打开。
        pub fn launch<I, S>(program: impl AsRef<OsStr>, args: I) -> Result<Self, BridgeError>
        where
            I: IntoIterator<Item = S>,
            S: AsRef<OsStr>,
        {
            let dir = tempfile::Builder::new().prefix("robomaster-bridge").tempdir()?;
            let request_path = dir.path().join("request");
            let reply_path = dir.path().join("reply");
            let event_path = dir.path().join("event");
            for path in [&request_path, &reply_path, &event_path] {
                make_fifo(path)?;
            }

            let mut child = Command::new(program.as_ref())
                .args(args)
                .arg("--request")
                .arg(&request_path)
                .arg("--reply")
                .arg(&reply_path)
                .arg("--event")
                .arg(&event_path)
                .spawn()?;
            info!("Bridge host started (pid {})", child.id());

            // FIFO 的 open 会阻塞到对端打开
            let opened = (|| -> Result<_, BridgeError> {
                let request = OpenOptions::new().write(true).open(&request_path)?;
                let reply = OpenOptions::new().read(true).open(&reply_path)?;
                let events = OpenOptions::new().read(true).open(&event_path)?;
                Ok((request, reply, events))
            })();
            let (request, reply, events) = match opened {
                Ok(files) => files,
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e);
                }
            };

            let bridge = PipeBridge::new(request, reply, events);
            *bridge.host.lock() = Some(HostProcess { child, _dir: dir });
            Ok(bridge)
        }
    }
}
