//! 冒烟命令
//!
//! 用 Mock 原生桥模拟一台已连接的机器人，按配置启动并停止客户端，
//! 检查模块启动顺序与依赖等待是否正常。

use anyhow::{Context, Result};
use clap::Args;
use robomaster_sdk::bridge::MockBridge;
use robomaster_sdk::client::DeviceType;
use robomaster_sdk::{Client, ClientConfig, Key, Modules, Transport, keys};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// 模拟机器人报告的工作设备
const DEVICES: [DeviceType; 4] = [
    DeviceType::Chassis,
    DeviceType::Gimbal,
    DeviceType::Camera,
    DeviceType::WaterGun,
];

/// 冒烟命令参数
#[derive(Args, Debug)]
pub struct SmokeCommand {
    /// 客户端配置文件（缺省时启用全部模块）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 单个模块的连接时限（毫秒）
    #[arg(long, default_value_t = 2_000)]
    pub timeout_ms: u64,

    /// 模拟机器人不在线（启动会超时）
    #[arg(long)]
    pub offline: bool,
}

impl SmokeCommand {
    pub fn execute(&self) -> Result<()> {
        let config = self.client_config()?;
        let bridge = simulated_robot(!self.offline);

        let client = Client::new(bridge.clone(), config)?;
        let started = Instant::now();
        let result = client.start();
        if result.is_ok() {
            info!("Client started in {:?}", started.elapsed());
            println!("{}", report(&client));
        }

        if client.is_started() {
            client.stop().context("stopping client")?;
        }
        result?;

        let sent = bridge.take_sent().len();
        println!("✅ smoke run finished ({sent} events sent)");
        Ok(())
    }

    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                ClientConfig::from_file(path).with_context(|| format!("loading {}", path.display()))?
            },
            None => ClientConfig {
                modules: Modules::ALL,
                ..ClientConfig::default()
            },
        };
        // Mock 原生桥没有广播来源
        config.transport = Transport::WifiDirect;
        config.module_start_timeout = Duration::from_millis(self.timeout_ms);
        config.module_stop_timeout = Duration::from_millis(self.timeout_ms);
        Ok(config)
    }
}

fn cache(bridge: &MockBridge, key: &Key, value: &str) {
    bridge.set_cached_value(
        key.sub_type(),
        format!(
            r#"{{"key":{},"tag":0,"error":0,"value":{value}}}"#,
            key.sub_type()
        ),
    );
}

/// 构造一个自动应答的 Mock 原生桥
///
/// `online` 为真时缓存中已有全部连接状态与工作设备列表，
/// 模块启动时的立即回放即可完成连接。
fn simulated_robot(online: bool) -> Arc<MockBridge> {
    let bridge = Arc::new(MockBridge::new());
    bridge.enable_auto_reply();

    let connections = [
        &keys::AIR_LINK_CONNECTION,
        &keys::ROBOMASTER_SYSTEM_CONNECTION,
        &keys::MAIN_CONTROLLER_CONNECTION,
        &keys::CAMERA_CONNECTION,
        &keys::GIMBAL_CONNECTION,
        &keys::ROBOMASTER_GAME_PAD_CONNECTION,
    ];
    for key in connections {
        cache(&bridge, key, &format!(r#"{{"value":{online}}}"#));
    }

    if online {
        let devices: Vec<String> = DEVICES.iter().map(|d| u16::from(*d).to_string()).collect();
        cache(
            &bridge,
            &keys::ROBOMASTER_SYSTEM_WORKING_DEVICES,
            &format!(r#"{{"list":[{}]}}"#, devices.join(",")),
        );
        cache(
            &bridge,
            &keys::ROBOMASTER_GAME_PAD_FIRMWARE_VERSION,
            r#"{"value":"00.00.0000"}"#,
        );
    }
    bridge
}

fn report(client: &Client) -> String {
    use robomaster_sdk::client::Module;

    let mut lines = vec![
        format!("connection: {}", client.connection().connected()),
        format!("robot:      {}", client.robot().connected()),
    ];
    let optional: [(&str, Option<bool>); 6] = [
        ("controller", client.controller().map(|m| m.connected())),
        ("camera", client.camera().map(|m| m.connected())),
        ("chassis", client.chassis().map(|m| m.connected())),
        ("gimbal", client.gimbal().map(|m| m.connected())),
        ("gun", client.gun().map(|m| m.connected())),
        ("gamepad", client.gamepad().map(|m| m.connected())),
    ];
    for (name, connected) in optional {
        if let Some(connected) = connected {
            lines.push(format!("{:<11} {connected}", format!("{name}:")));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试缓存中包含工作设备列表与全部连接状态
    #[test]
    fn test_simulated_robot_cache() {
        let bridge = simulated_robot(true);
        let devices = bridge
            .cached_value(keys::ROBOMASTER_SYSTEM_WORKING_DEVICES.sub_type())
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&devices).unwrap();
        assert_eq!(body["value"]["list"], serde_json::json!([768, 1024, 260, 5888]));

        let camera = bridge.cached_value(keys::CAMERA_CONNECTION.sub_type()).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&camera).unwrap();
        assert_eq!(body["value"]["value"], true);
    }

    #[test]
    fn test_offline_robot_has_no_devices() {
        let bridge = simulated_robot(false);
        assert!(
            bridge
                .cached_value(keys::ROBOMASTER_SYSTEM_WORKING_DEVICES.sub_type())
                .is_none()
        );
    }

    #[test]
    fn test_client_config_forces_wifi_direct() {
        let cmd = SmokeCommand {
            config: None,
            timeout_ms: 300,
            offline: false,
        };
        let config = cmd.client_config().unwrap();
        assert_eq!(config.transport, Transport::WifiDirect);
        assert_eq!(config.modules, Modules::ALL);
        assert_eq!(config.module_start_timeout, Duration::from_millis(300));
    }
}
