//! 机器人发现广播
//!
//! 机器人向 `0.0.0.0:45678` 周期性发送 24 字节的加密数据报；
//! 应用收到后向 `ip:56789` 回送 8 字节小端应用 ID 作为确认。
//!
//! # 解密后的布局
//!
//! ```text
//! [0..2)   0x5A 0x5B   魔数
//! [2]      flags       bit0 = 配对模式
//! [3..6)   保留
//! [6..10)  IPv4        大端
//! [10..16) MAC
//! [16..24) app_id      小端
//! ```

use crate::ProtocolError;
use crate::cipher;
use bytes::{BufMut, BytesMut};
use std::fmt;
use std::net::Ipv4Addr;

/// 广播数据报长度
pub const BROADCAST_LEN: usize = 24;

/// 解密后的魔数
pub const BROADCAST_HEADER: [u8; 2] = [0x5A, 0x5B];

/// 机器人广播端口（应用监听）
pub const BROADCAST_PORT: u16 = 45678;

/// 确认端口（机器人监听）
pub const ACK_PORT: u16 = 56789;

const FLAG_PAIRING: u8 = 0x01;

/// 解析后的广播
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broadcast {
    pub is_pairing: bool,
    pub source_ip: Ipv4Addr,
    pub mac: [u8; 6],
    pub app_id: u64,
}

impl Broadcast {
    /// 从加密数据报解析（不修改输入）
    pub fn parse(datagram: &[u8]) -> Result<Self, ProtocolError> {
        if datagram.len() != BROADCAST_LEN {
            return Err(ProtocolError::InvalidLength {
                expected: BROADCAST_LEN,
                actual: datagram.len(),
            });
        }

        let data = cipher::ciphered(datagram);
        if data[..2] != BROADCAST_HEADER {
            return Err(ProtocolError::InvalidHeader([data[0], data[1]]));
        }

        let mut mac = [0u8; 6];
        mac.copy_from_slice(&data[10..16]);
        let mut app_id = [0u8; 8];
        app_id.copy_from_slice(&data[16..24]);

        Ok(Self {
            is_pairing: data[2] & FLAG_PAIRING != 0,
            source_ip: Ipv4Addr::new(data[6], data[7], data[8], data[9]),
            mac,
            app_id: u64::from_le_bytes(app_id),
        })
    }

    /// 编码为加密数据报（模拟机器人使用）
    pub fn encode(&self) -> [u8; BROADCAST_LEN] {
        let mut buf = BytesMut::with_capacity(BROADCAST_LEN);
        buf.put_slice(&BROADCAST_HEADER);
        buf.put_u8(if self.is_pairing { FLAG_PAIRING } else { 0 });
        buf.put_bytes(0, 3);
        buf.put_slice(&self.source_ip.octets());
        buf.put_slice(&self.mac);
        buf.put_u64_le(self.app_id);

        let mut out = [0u8; BROADCAST_LEN];
        out.copy_from_slice(&buf);
        cipher::apply(&mut out);
        out
    }

    /// MAC 地址文本（`aa:bb:cc:dd:ee:ff`）
    pub fn mac_string(&self) -> String {
        self.mac
            .iter()
            .map(|b| hex::encode([*b]))
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl fmt::Display for Broadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pairing={} ip={} mac={} app_id={:#018x}",
            self.is_pairing,
            self.source_ip,
            self.mac_string(),
            self.app_id
        )
    }
}

/// 确认负载：8 字节小端应用 ID（不加密）
pub fn ack_payload(app_id: u64) -> [u8; 8] {
    app_id.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Broadcast {
        Broadcast {
            is_pairing: false,
            source_ip: Ipv4Addr::new(192, 168, 1, 42),
            mac: [0x60, 0x60, 0x1f, 0x00, 0x11, 0x22],
            app_id: 0x1122_3344_5566_7788,
        }
    }

    #[test]
    fn test_parse_encoded() {
        let datagram = sample().encode();
        // 线上数据是加密的
        assert_ne!(datagram[..2], BROADCAST_HEADER);

        let parsed = Broadcast::parse(&datagram).unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.mac_string(), "60:60:1f:00:11:22");
    }

    #[test]
    fn test_pairing_flag() {
        let broadcast = Broadcast {
            is_pairing: true,
            ..sample()
        };
        assert!(Broadcast::parse(&broadcast.encode()).unwrap().is_pairing);
    }

    #[test]
    fn test_reject_bad_length() {
        let datagram = sample().encode();
        assert!(matches!(
            Broadcast::parse(&datagram[..23]),
            Err(ProtocolError::InvalidLength {
                expected: 24,
                actual: 23
            })
        ));
    }

    #[test]
    fn test_reject_bad_header() {
        let mut plain = [0u8; BROADCAST_LEN];
        plain[0] = 0x12;
        plain[1] = 0x34;
        cipher::apply(&mut plain);
        assert!(matches!(
            Broadcast::parse(&plain),
            Err(ProtocolError::InvalidHeader([0x12, 0x34]))
        ));
    }

    #[test]
    fn test_ack_payload() {
        assert_eq!(
            ack_payload(0x1122_3344_5566_7788),
            [0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]
        );
    }
}
