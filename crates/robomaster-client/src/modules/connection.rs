//! 连接模块
//!
//! 负责发现机器人并建立会话，连接后跟踪空中链路信号质量。

use crate::config::Transport;
use crate::error::ClientError;
use crate::finder::Finder;
use crate::module::{BaseModule, Module};
use robomaster_driver::{Dispatcher, ResultListener};
use robomaster_protocol::{Value, WIFI_DIRECT_ROBOT_IP, keys};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 连接模块
pub struct Connection {
    base: BaseModule,
    transport: Transport,
    app_id: u64,
    discovery_timeout: Duration,
    signal_quality: Arc<ResultListener>,
}

impl Connection {
    pub fn new(
        dispatcher: Dispatcher,
        transport: Transport,
        app_id: u64,
        discovery_timeout: Duration,
    ) -> Arc<Self> {
        let signal_quality = Arc::new(ResultListener::new(
            dispatcher.clone(),
            &keys::AIR_LINK_SIGNAL_QUALITY,
        ));

        let listener = signal_quality.clone();
        let on_connection = move |connected: bool| {
            let result = if connected {
                listener.start()
            } else {
                listener.stop()
            };
            // 重复的连接状态推送会重复启停，忽略这些错误
            if let Err(e) = result {
                tracing::trace!("Signal quality listener: {}", e);
            }
        };

        Arc::new(Self {
            base: BaseModule::new(
                dispatcher,
                "Connection",
                Some(&keys::AIR_LINK_CONNECTION),
                Some(Box::new(on_connection)),
                Vec::new(),
            ),
            transport,
            app_id,
            discovery_timeout,
            signal_quality,
        })
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// 原始信号质量（0-100）；尚无数据时为 `None`
    pub fn signal_quality_level(&self) -> Option<u64> {
        self.signal_quality
            .result()
            .and_then(|r| r.value().and_then(Value::as_u64))
    }

    /// 信号格数（1-4）
    pub fn signal_quality_bars(&self) -> Option<u8> {
        self.signal_quality_level().map(signal_bars)
    }

    /// 定位机器人地址：WiFi 直连使用固定地址，否则进行 UDP 发现并回送确认
    fn locate(&self) -> Result<Ipv4Addr, ClientError> {
        match self.transport {
            Transport::WifiDirect => Ok(WIFI_DIRECT_ROBOT_IP),
            Transport::Router => {
                let finder = Finder::new(self.app_id)?;
                let broadcast = finder.find(self.discovery_timeout)?;
                Finder::send_ack(broadcast.source_ip, broadcast.app_id);
                Ok(broadcast.source_ip)
            }
        }
    }
}

/// 信号质量到格数的映射
pub fn signal_bars(level: u64) -> u8 {
    match level {
        0..10 => 1,
        10..25 => 2,
        25..45 => 3,
        _ => 4,
    }
}

impl Module for Connection {
    fn name(&self) -> &'static str {
        self.base.name()
    }

    fn start(&self) -> Result<(), ClientError> {
        self.base.start()?;
        let ip = match self.locate() {
            Ok(ip) => ip,
            Err(e) => {
                let _ = self.base.stop();
                return Err(e);
            }
        };
        info!(%ip, transport = ?self.transport, "Connecting to robot");
        self.base.dispatcher().connect(ip)?;
        Ok(())
    }

    fn stop(&self) -> Result<(), ClientError> {
        if let Err(e) = self.base.dispatcher().disconnect() {
            warn!("Connection close not sent: {}", e);
        }
        if self.signal_quality.is_started() {
            let _ = self.signal_quality.stop();
        }
        self.base.stop()
    }

    fn connected(&self) -> bool {
        self.base.connected()
    }

    fn wait_for_connection(&self, timeout: Duration) -> bool {
        self.base.wait_for_connection(timeout)
    }
}
