//! 发现命令
//!
//! 监听机器人广播，打印第一个被接受的广播，可选回送确认。

use super::parse_app_id;
use anyhow::Result;
use clap::Args;
use robomaster_sdk::Finder;
use robomaster_sdk::protocol::{BROADCAST_PORT, Broadcast};
use serde_json::json;
use std::time::Duration;
use tracing::info;

/// 发现命令参数
#[derive(Args, Debug)]
pub struct DiscoverCommand {
    /// 只接受该应用 ID 的机器人（0 = 任意）
    #[arg(long, default_value = "0", value_parser = parse_app_id)]
    pub app_id: u64,

    /// 等待时限（毫秒）
    #[arg(long, default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// 监听端口
    #[arg(long, default_value_t = BROADCAST_PORT)]
    pub port: u16,

    /// 收到广播后向机器人回送确认
    #[arg(long)]
    pub ack: bool,

    /// 以 JSON 输出
    #[arg(long)]
    pub json: bool,
}

impl DiscoverCommand {
    pub fn execute(&self) -> Result<()> {
        let finder = Finder::bind(self.app_id, self.port)?;
        info!(
            "Waiting for robot broadcast on {} ({} ms)",
            finder.local_addr()?,
            self.timeout_ms
        );

        let broadcast = finder.find(Duration::from_millis(self.timeout_ms))?;
        println!("{}", render(&broadcast, self.json));

        if self.ack {
            Finder::send_ack(broadcast.source_ip, broadcast.app_id);
        }
        Ok(())
    }
}

fn render(broadcast: &Broadcast, as_json: bool) -> String {
    if as_json {
        json!({
            "ip": broadcast.source_ip.to_string(),
            "mac": broadcast.mac_string(),
            "app_id": broadcast.app_id,
            "pairing": broadcast.is_pairing,
        })
        .to_string()
    } else {
        broadcast.to_string()
    }
}
