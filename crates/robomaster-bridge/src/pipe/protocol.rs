//! 进程外原生桥的管道协议
//!
//! 三条单向管道：请求（客户端 → 宿主）、应答（宿主 → 客户端）、
//! 事件（宿主 → 客户端）。所有整数都是大端。
//!
//! ```text
//! 请求：fn u8 | len u32 | payload
//! 应答：fn u8 | len u32 | payload     （fn 回显请求的功能码）
//! 事件：code u64 | tag u64 | len u32 | data
//! ```

use crate::BridgeError;
use bytes::{Buf, BufMut, BytesMut};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::io::{ErrorKind, Read, Write};

/// 单帧负载上限
pub const MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

// ============================================================================
// Function Codes
// ============================================================================

/// 功能码
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Function {
    Create = 0x00,
    Destroy = 0x01,
    Initialize = 0x02,
    Uninitialize = 0x03,
    SendEvent = 0x04,
    SendEventWithString = 0x05,
    SendEventWithNumber = 0x06,
    SetEventCallback = 0x07,
    GetSecurityKey = 0x08,
}

// ============================================================================
// Calls
// ============================================================================

/// 一次原生桥调用（请求负载的结构化形式）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// debuggable u8 | name_len u32 | name | log_len u32 | log_path
    Create {
        name: String,
        debuggable: bool,
        log_path: String,
    },
    Destroy,
    /// 应答：1 字节（非 0 表示成功）
    Initialize,
    Uninitialize,
    /// code u64 | tag u64 | output_len u32；应答为输出缓冲区内容
    SendEvent { code: u64, tag: u64, output_len: u32 },
    /// code u64 | tag u64 | len u32 | data
    SendEventWithString { code: u64, tag: u64, data: String },
    /// code u64 | tag u64 | data u64
    SendEventWithNumber { code: u64, tag: u64, data: u64 },
    /// type_code u64 | add u8
    SetEventCallback { type_code: u64, add: bool },
    /// index u64；应答为密钥字符串
    GetSecurityKey { index: u64 },
}

impl Call {
    pub fn function(&self) -> Function {
        match self {
            Call::Create { .. } => Function::Create,
            Call::Destroy => Function::Destroy,
            Call::Initialize => Function::Initialize,
            Call::Uninitialize => Function::Uninitialize,
            Call::SendEvent { .. } => Function::SendEvent,
            Call::SendEventWithString { .. } => Function::SendEventWithString,
            Call::SendEventWithNumber { .. } => Function::SendEventWithNumber,
            Call::SetEventCallback { .. } => Function::SetEventCallback,
            Call::GetSecurityKey { .. } => Function::GetSecurityKey,
        }
    }

    /// 编码请求负载（不含帧头）
    pub fn encode_payload(&self) -> BytesMut {
        let mut buf = BytesMut::new();
        match self {
            Call::Create {
                name,
                debuggable,
                log_path,
            } => {
                buf.put_u8(u8::from(*debuggable));
                put_string(&mut buf, name);
                put_string(&mut buf, log_path);
            }
            Call::Destroy | Call::Initialize | Call::Uninitialize => {}
            Call::SendEvent {
                code,
                tag,
                output_len,
            } => {
                buf.put_u64(*code);
                buf.put_u64(*tag);
                buf.put_u32(*output_len);
            }
            Call::SendEventWithString { code, tag, data } => {
                buf.put_u64(*code);
                buf.put_u64(*tag);
                put_string(&mut buf, data);
            }
            Call::SendEventWithNumber { code, tag, data } => {
                buf.put_u64(*code);
                buf.put_u64(*tag);
                buf.put_u64(*data);
            }
            Call::SetEventCallback { type_code, add } => {
                buf.put_u64(*type_code);
                buf.put_u8(u8::from(*add));
            }
            Call::GetSecurityKey { index } => buf.put_u64(*index),
        }
        buf
    }

    /// 从功能码与负载解码
    pub fn decode(function: Function, mut payload: &[u8]) -> Result<Self, BridgeError> {
        let buf = &mut payload;
        Ok(match function {
            Function::Create => {
                let debuggable = get_u8(buf)? != 0;
                let name = get_string(buf, "name")?;
                let log_path = get_string(buf, "log_path")?;
                Call::Create {
                    name,
                    debuggable,
                    log_path,
                }
            }
            Function::Destroy => Call::Destroy,
            Function::Initialize => Call::Initialize,
            Function::Uninitialize => Call::Uninitialize,
            Function::SendEvent => Call::SendEvent {
                code: get_u64(buf)?,
                tag: get_u64(buf)?,
                output_len: get_u32(buf)?,
            },
            Function::SendEventWithString => Call::SendEventWithString {
                code: get_u64(buf)?,
                tag: get_u64(buf)?,
                data: get_string(buf, "event data")?,
            },
            Function::SendEventWithNumber => Call::SendEventWithNumber {
                code: get_u64(buf)?,
                tag: get_u64(buf)?,
                data: get_u64(buf)?,
            },
            Function::SetEventCallback => Call::SetEventCallback {
                type_code: get_u64(buf)?,
                add: get_u8(buf)? != 0,
            },
            Function::GetSecurityKey => Call::GetSecurityKey {
                index: get_u64(buf)?,
            },
        })
    }
}

// ============================================================================
// Framing
// ============================================================================

/// 写请求或应答帧
pub fn write_frame<W: Write>(w: &mut W, function: Function, payload: &[u8]) -> Result<(), BridgeError> {
    if payload.len() > MAX_FRAME_LEN {
        return Err(BridgeError::FrameTooLarge(payload.len()));
    }
    let mut buf = BytesMut::with_capacity(5 + payload.len());
    buf.put_u8(function.into());
    buf.put_u32(payload.len() as u32);
    buf.put_slice(payload);
    w.write_all(&buf)?;
    w.flush()?;
    Ok(())
}

/// 读请求或应答帧；对端正常关闭时返回 `Ok(None)`
pub fn read_frame<R: Read>(r: &mut R) -> Result<Option<(Function, Vec<u8>)>, BridgeError> {
    let mut header = [0u8; 5];
    if !read_exact_or_eof(r, &mut header)? {
        return Ok(None);
    }
    let function = Function::try_from(header[0]).map_err(|_| BridgeError::UnknownFunction(header[0]))?;
    let payload = read_payload(r, u32::from_be_bytes([header[1], header[2], header[3], header[4]]))?;
    Ok(Some((function, payload)))
}

/// 读应答并校验功能码回显
pub fn read_reply<R: Read>(r: &mut R, expected: Function) -> Result<Vec<u8>, BridgeError> {
    match read_frame(r)? {
        Some((function, payload)) if function == expected => Ok(payload),
        Some((function, _)) => Err(BridgeError::UnexpectedReply {
            expected: expected.into(),
            actual: function.into(),
        }),
        None => Err(BridgeError::Io(ErrorKind::UnexpectedEof.into())),
    }
}

/// 事件帧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFrame {
    pub code: u64,
    pub tag: u64,
    pub data: Vec<u8>,
}

impl EventFrame {
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), BridgeError> {
        if self.data.len() > MAX_FRAME_LEN {
            return Err(BridgeError::FrameTooLarge(self.data.len()));
        }
        let mut buf = BytesMut::with_capacity(20 + self.data.len());
        buf.put_u64(self.code);
        buf.put_u64(self.tag);
        buf.put_u32(self.data.len() as u32);
        buf.put_slice(&self.data);
        w.write_all(&buf)?;
        w.flush()?;
        Ok(())
    }

    /// 对端正常关闭时返回 `Ok(None)`
    pub fn read_from<R: Read>(r: &mut R) -> Result<Option<Self>, BridgeError> {
        let mut header = [0u8; 20];
        if !read_exact_or_eof(r, &mut header)? {
            return Ok(None);
        }
        let mut buf = &header[..];
        let code = buf.get_u64();
        let tag = buf.get_u64();
        let data = read_payload(r, buf.get_u32())?;
        Ok(Some(Self { code, tag, data }))
    }
}

fn read_payload<R: Read>(r: &mut R, len: u32) -> Result<Vec<u8>, BridgeError> {
    let len = len as usize;
    if len > MAX_FRAME_LEN {
        return Err(BridgeError::FrameTooLarge(len));
    }
    let mut payload = vec![0u8; len];
    r.read_exact(&mut payload)?;
    Ok(payload)
}

/// 帧边界上的 EOF 返回 `false`；帧中间的 EOF 是错误
fn read_exact_or_eof<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<bool, BridgeError> {
    let mut read = 0;
    while read < buf.len() {
        match r.read(&mut buf[read..]) {
            Ok(0) if read == 0 => return Ok(false),
            Ok(0) => {
                return Err(BridgeError::Truncated {
                    needed: buf.len(),
                    available: read,
                });
            }
            Ok(n) => read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(true)
}

// ============================================================================
// Payload helpers
// ============================================================================

fn put_string(buf: &mut BytesMut, s: &str) {
    buf.put_u32(s.len() as u32);
    buf.put_slice(s.as_bytes());
}

fn ensure(buf: &[u8], needed: usize) -> Result<(), BridgeError> {
    if buf.remaining() < needed {
        return Err(BridgeError::Truncated {
            needed,
            available: buf.remaining(),
        });
    }
    Ok(())
}

fn get_u8(buf: &mut &[u8]) -> Result<u8, BridgeError> {
    ensure(buf, 1)?;
    Ok(buf.get_u8())
}

fn get_u32(buf: &mut &[u8]) -> Result<u32, BridgeError> {
    ensure(buf, 4)?;
    Ok(buf.get_u32())
}

fn get_u64(buf: &mut &[u8]) -> Result<u64, BridgeError> {
    ensure(buf, 8)?;
    Ok(buf.get_u64())
}

fn get_string(buf: &mut &[u8], field: &'static str) -> Result<String, BridgeError> {
    let len = get_u32(buf)? as usize;
    ensure(buf, len)?;
    let bytes = buf.copy_to_bytes(len);
    String::from_utf8(bytes.to_vec()).map_err(|_| BridgeError::InvalidUtf8(field))
}
