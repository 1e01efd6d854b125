//! 配对二维码负载
//!
//! 二维码文本是 Base64（标准字母表）编码的加密缓冲区：
//!
//! ```text
//! [0..2)   metadata u16 LE   bit0-5 = len(ssid)，bit6-10 = len(password)，bit11 = 有 BSSID
//! [2..10)  app_id   u64 LE
//! [10..12) 国家码（2 个 ASCII 字符）
//! ...      ssid，password，可选 12 个十六进制字符的 BSSID
//! ```
//!
//! 只处理负载，不渲染图像。

use crate::ProtocolError;
use crate::cipher;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::{BufMut, BytesMut};
use std::fmt;

const SSID_MASK: u16 = 0x003F;
const PASSWORD_SHIFT: u16 = 6;
const PASSWORD_MASK: u16 = 0x1F;
const BSSID_BIT: u16 = 1 << 11;

/// ssid 最大字节数
pub const MAX_SSID_LEN: usize = SSID_MASK as usize;

/// 密码最大字节数
pub const MAX_PASSWORD_LEN: usize = PASSWORD_MASK as usize;

const HEADER_LEN: usize = 12;
const BSSID_HEX_LEN: usize = 12;

/// 配对二维码内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    app_id: u64,
    country_code: String,
    ssid: String,
    password: String,
    bssid: Option<[u8; 6]>,
}

impl QrCode {
    /// 创建并校验
    ///
    /// `bssid` 可为空串；否则必须是 6 个八位组（`aa:bb:cc:dd:ee:ff`、
    /// `aa-bb-...` 或 12 个十六进制字符）。
    pub fn new(
        app_id: u64,
        country_code: &str,
        ssid: &str,
        password: &str,
        bssid: &str,
    ) -> Result<Self, ProtocolError> {
        let country_code = country_code.trim();
        if country_code.len() != 2 || !country_code.is_ascii() {
            return Err(ProtocolError::invalid(
                "country_code",
                "must be 2 characters",
            ));
        }

        let ssid = ssid.trim();
        if ssid.is_empty() {
            return Err(ProtocolError::invalid("ssid", "must be non-empty"));
        }
        if ssid.len() > MAX_SSID_LEN {
            return Err(ProtocolError::invalid(
                "ssid",
                format!("longer than {MAX_SSID_LEN} bytes"),
            ));
        }

        let password = password.trim();
        if password.is_empty() {
            return Err(ProtocolError::invalid("password", "must be non-empty"));
        }
        if password.len() > MAX_PASSWORD_LEN {
            return Err(ProtocolError::invalid(
                "password",
                format!("longer than {MAX_PASSWORD_LEN} bytes"),
            ));
        }

        let bssid = match bssid.trim() {
            "" => None,
            text => Some(parse_bssid(text)?),
        };

        Ok(Self {
            app_id,
            country_code: country_code.to_string(),
            ssid: ssid.to_string(),
            password: password.to_string(),
            bssid,
        })
    }

    /// 从二维码文本解码
    pub fn decode(message: &str) -> Result<Self, ProtocolError> {
        let mut data = STANDARD.decode(message.trim())?;
        cipher::apply(&mut data);

        if data.len() < HEADER_LEN {
            return Err(ProtocolError::Truncated {
                needed: HEADER_LEN,
                available: data.len(),
            });
        }

        let metadata = u16::from_le_bytes([data[0], data[1]]);
        let ssid_len = usize::from(metadata & SSID_MASK);
        let password_len = usize::from((metadata >> PASSWORD_SHIFT) & PASSWORD_MASK);
        let has_bssid = metadata & BSSID_BIT != 0;

        let needed = HEADER_LEN
            + ssid_len
            + password_len
            + if has_bssid { BSSID_HEX_LEN } else { 0 };
        if data.len() < needed {
            return Err(ProtocolError::Truncated {
                needed,
                available: data.len(),
            });
        }

        let mut app_id = [0u8; 8];
        app_id.copy_from_slice(&data[2..10]);

        let country_code = text_field("country_code", &data[10..12])?;
        let ssid_end = HEADER_LEN + ssid_len;
        let ssid = text_field("ssid", &data[HEADER_LEN..ssid_end])?;
        let password_end = ssid_end + password_len;
        let password = text_field("password", &data[ssid_end..password_end])?;

        let bssid = if has_bssid {
            let text = text_field("bssid", &data[password_end..password_end + BSSID_HEX_LEN])?;
            Some(parse_bssid(&text)?)
        } else {
            None
        };

        Ok(Self {
            app_id: u64::from_le_bytes(app_id),
            country_code,
            ssid,
            password,
            bssid,
        })
    }

    /// 编码为二维码文本
    pub fn message(&self) -> String {
        let mut metadata = (self.ssid.len() as u16 & SSID_MASK)
            | ((self.password.len() as u16 & PASSWORD_MASK) << PASSWORD_SHIFT);
        if self.bssid.is_some() {
            metadata |= BSSID_BIT;
        }

        let mut buf = BytesMut::with_capacity(HEADER_LEN + 64 + 32 + BSSID_HEX_LEN);
        buf.put_u16_le(metadata);
        buf.put_u64_le(self.app_id);
        buf.put_slice(self.country_code.as_bytes());
        buf.put_slice(self.ssid.as_bytes());
        buf.put_slice(self.password.as_bytes());
        if let Some(bssid) = &self.bssid {
            buf.put_slice(hex::encode(bssid).as_bytes());
        }

        let mut data = buf.to_vec();
        cipher::apply(&mut data);
        STANDARD.encode(data)
    }

    pub fn app_id(&self) -> u64 {
        self.app_id
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn bssid(&self) -> Option<[u8; 6]> {
        self.bssid
    }
}

impl fmt::Display for QrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "app_id={} country={:?} ssid={:?} password={:?}",
            self.app_id, self.country_code, self.ssid, self.password
        )?;
        if let Some(bssid) = &self.bssid {
            write!(f, " bssid={}", hex::encode(bssid))?;
        }
        Ok(())
    }
}

fn text_field(field: &'static str, bytes: &[u8]) -> Result<String, ProtocolError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ProtocolError::invalid(field, e.to_string()))
}

fn parse_bssid(text: &str) -> Result<[u8; 6], ProtocolError> {
    let digits: String = text.chars().filter(|c| *c != ':' && *c != '-').collect();
    let bytes = hex::decode(&digits).map_err(|e| ProtocolError::invalid("bssid", e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| ProtocolError::invalid("bssid", "must have exactly 6 octets"))
}
