//! 机器人发现
//!
//! 在 `0.0.0.0:45678` 上监听机器人广播（`SO_REUSEADDR`，可与其他进程共享端口），
//! 校验后返回第一个被接受的广播；随后向 `ip:56789` 回送应用 ID 作为确认。

use crate::error::ClientError;
use parking_lot::Mutex;
use robomaster_protocol::broadcast::ack_payload;
use robomaster_protocol::{ACK_PORT, ANY_APP_ID, BROADCAST_PORT, Broadcast};
use socket2::{Domain, Protocol, Socket, Type};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// 单次读取时限的上限（到期后检查总时限）
const READ_TIMEOUT: Duration = Duration::from_secs(1);

const RECV_BUFFER_SIZE: usize = 1024;

/// UDP 广播监听器
#[derive(Debug)]
pub struct Finder {
    socket: UdpSocket,
    app_id: u64,
    /// 本轮查找中已接受过的来源地址
    seen: Mutex<HashSet<Ipv4Addr>>,
}

impl Finder {
    /// 在标准广播端口上监听
    ///
    /// `app_id` 为 0 时接受任意机器人，否则只接受应用 ID 相同的广播。
    pub fn new(app_id: u64) -> Result<Self, ClientError> {
        Self::bind(app_id, BROADCAST_PORT)
    }

    /// 在指定端口上监听（0 = 系统分配）
    pub fn bind(app_id: u64, port: u16) -> Result<Self, ClientError> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_reuse_address(true)?;
        let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port));
        socket.bind(&addr.into())?;

        let socket: UdpSocket = socket.into();
        socket.set_read_timeout(Some(READ_TIMEOUT))?;
        debug!("Finder listening on {}", socket.local_addr()?);

        Ok(Self {
            socket,
            app_id,
            seen: Mutex::new(HashSet::new()),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ClientError> {
        Ok(self.socket.local_addr()?)
    }

    pub fn app_id(&self) -> u64 {
        self.app_id
    }

    /// 校验一个数据报
    ///
    /// 依次要求：长度与魔数正确、声明的 IPv4 等于 UDP 来源地址、应用 ID 匹配
    /// （目标为 0 时不检查）、该来源此前未被接受。
    pub fn accept(&self, datagram: &[u8], source: IpAddr) -> Option<Broadcast> {
        let broadcast = match Broadcast::parse(datagram) {
            Ok(broadcast) => broadcast,
            Err(e) => {
                warn!(%source, "Discarding broadcast: {}", e);
                return None;
            }
        };

        if IpAddr::V4(broadcast.source_ip) != source {
            warn!(
                %source,
                declared = %broadcast.source_ip,
                "Discarding broadcast with mismatched source address"
            );
            return None;
        }

        if self.app_id != ANY_APP_ID && broadcast.app_id != self.app_id {
            debug!(
                %source,
                app_id = broadcast.app_id,
                "Ignoring broadcast for another app"
            );
            return None;
        }

        if !self.seen.lock().insert(broadcast.source_ip) {
            return None;
        }
        Some(broadcast)
    }

    /// 等待第一个被接受的广播
    ///
    /// 每次调用开始新一轮查找，之前接受过的来源可以再次被接受。
    ///
    /// # 错误
    /// - `DiscoveryTimeout`: 时限内没有被接受的广播
    /// - `Io`: 套接字错误
    pub fn find(&self, timeout: Duration) -> Result<Broadcast, ClientError> {
        let deadline = Instant::now() + timeout;
        let mut buf = [0u8; RECV_BUFFER_SIZE];

        self.seen.lock().clear();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            self.socket.set_read_timeout(Some(remaining.min(READ_TIMEOUT)))?;
            match self.socket.recv_from(&mut buf) {
                Ok((len, source)) => {
                    if let Some(broadcast) = self.accept(&buf[..len], source.ip()) {
                        info!("Robot found: {}", broadcast);
                        return Ok(broadcast);
                    }
                }
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Err(ClientError::DiscoveryTimeout(timeout))
    }

    /// 向机器人的确认端口发送应用 ID（错误被忽略）
    pub fn send_ack(ip: Ipv4Addr, app_id: u64) {
        Self::send_ack_to(SocketAddr::V4(SocketAddrV4::new(ip, ACK_PORT)), app_id);
    }

    pub fn send_ack_to(addr: SocketAddr, app_id: u64) {
        let result = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .and_then(|socket| socket.send_to(&ack_payload(app_id), addr));
        match result {
            Ok(_) => debug!(%addr, app_id, "Ack sent"),
            Err(e) => debug!(%addr, "Ack not sent: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broadcast(ip: Ipv4Addr, app_id: u64) -> Broadcast {
        Broadcast {
            is_pairing: false,
            source_ip: ip,
            mac: [0x60, 0x60, 0x1f, 0x00, 0x11, 0x22],
            app_id,
        }
    }

    const ROBOT: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 42);

    #[test]
    fn test_accept_valid_once() {
        let finder = Finder::bind(0, 0).unwrap();
        let datagram = broadcast(ROBOT, 0x1122_3344_5566_7788).encode();

        let accepted = finder.accept(&datagram, IpAddr::V4(ROBOT)).unwrap();
        assert_eq!(accepted.source_ip, ROBOT);
        assert_eq!(accepted.app_id, 0x1122_3344_5566_7788);
        // 同一来源只接受一次
        assert!(finder.accept(&datagram, IpAddr::V4(ROBOT)).is_none());
    }

    #[test]
    fn test_reject_invalid() {
        let finder = Finder::bind(0, 0).unwrap();
        let datagram = broadcast(ROBOT, 1).encode();

        // 声明地址与来源不一致
        assert!(
            finder
                .accept(&datagram, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)))
                .is_none()
        );
        // 长度不对
        assert!(finder.accept(&datagram[..23], IpAddr::V4(ROBOT)).is_none());
        // 魔数被破坏
        let mut corrupted = datagram;
        corrupted[0] ^= 0xFF;
        assert!(finder.accept(&corrupted, IpAddr::V4(ROBOT)).is_none());
    }

    #[test]
    fn test_app_id_filter() {
        let finder = Finder::bind(42, 0).unwrap();
        let other = broadcast(ROBOT, 7).encode();
        assert!(finder.accept(&other, IpAddr::V4(ROBOT)).is_none());

        let mine = broadcast(ROBOT, 42).encode();
        assert!(finder.accept(&mine, IpAddr::V4(ROBOT)).is_some());
    }

    #[test]
    fn test_find_over_loopback() {
        let finder = Finder::bind(0, 0).unwrap();
        let port = finder.local_addr().unwrap().port();

        let sender = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let datagram = broadcast(Ipv4Addr::LOCALHOST, 99).encode();
        sender.send_to(&datagram, (Ipv4Addr::LOCALHOST, port)).unwrap();

        let found = finder.find(Duration::from_secs(5)).unwrap();
        assert_eq!(found.source_ip, Ipv4Addr::LOCALHOST);
        assert_eq!(found.app_id, 99);
    }

    #[test]
    fn test_find_timeout() {
        let finder = Finder::bind(0, 0).unwrap();
        let started = Instant::now();
        let err = finder.find(Duration::from_millis(100)).unwrap_err();
        assert!(matches!(err, ClientError::DiscoveryTimeout(_)));
        // 单次读取不会越过总时限
        assert!(started.elapsed() < Duration::from_millis(600));
    }

    /// 测试同一来源在新一轮查找中可以再次被接受
    #[test]
    fn test_find_again_accepts_same_robot() {
        let finder = Finder::bind(0, 0).unwrap();
        let port = finder.local_addr().unwrap().port();
        let sender = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let datagram = broadcast(Ipv4Addr::LOCALHOST, 99).encode();

        for _ in 0..2 {
            sender.send_to(&datagram, (Ipv4Addr::LOCALHOST, port)).unwrap();
            let found = finder.find(Duration::from_secs(5)).unwrap();
            assert_eq!(found.source_ip, Ipv4Addr::LOCALHOST);
        }
    }

    #[test]
    fn test_send_ack() {
        let robot = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        robot.set_read_timeout(Some(Duration::from_secs(2))).unwrap();

        Finder::send_ack_to(robot.local_addr().unwrap(), 0x1122_3344_5566_7788);

        let mut buf = [0u8; 16];
        let (len, _) = robot.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], &[0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    }
}
