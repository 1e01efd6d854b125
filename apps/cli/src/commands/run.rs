//! 运行命令
//!
//! 启动原生桥宿主进程，按配置启动客户端，直到 Ctrl+C 或到达运行时长后停止。

use anyhow::{Context, Result};
use clap::Args;
use crossbeam_channel::{RecvTimeoutError, bounded};
use robomaster_sdk::{Client, ClientConfig, PipeBridge};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 运行命令参数
#[derive(Args, Debug)]
pub struct RunCommand {
    /// 原生桥宿主程序（如 robomaster-bridge-host）
    #[arg(long, default_value = "robomaster-bridge-host")]
    pub host: PathBuf,

    /// 传给宿主程序的额外参数
    #[arg(long = "host-arg", allow_hyphen_values = true)]
    pub host_args: Vec<String>,

    /// 客户端配置文件
    #[arg(short, long, default_value = super::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// 运行时长（秒，缺省时运行到 Ctrl+C）
    #[arg(long)]
    pub duration_secs: Option<u64>,
}

impl RunCommand {
    pub fn execute(&self) -> Result<()> {
        let config = ClientConfig::from_file(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?;

        let bridge = PipeBridge::launch(&self.host, &self.host_args)
            .with_context(|| format!("launching {}", self.host.display()))?;
        let client = Client::new(Arc::new(bridge), config)?;

        let (stop_tx, stop_rx) = bounded(1);
        ctrlc::set_handler(move || {
            eprintln!("\nReceived interrupt signal. Shutting down...");
            let _ = stop_tx.try_send(());
        })
        .context("installing signal handler")?;

        let started = client.start();
        if let Err(e) = &started {
            warn!("Client start failed: {}", e);
        } else {
            println!("✅ 已连接，按 Ctrl+C 停止");
            match self.duration_secs {
                Some(secs) => match stop_rx.recv_timeout(Duration::from_secs(secs)) {
                    Ok(()) | Err(RecvTimeoutError::Timeout) => {},
                    Err(RecvTimeoutError::Disconnected) => warn!("Signal handler dropped"),
                },
                None => {
                    let _ = stop_rx.recv();
                },
            }
        }

        if client.is_started() {
            client.stop().context("stopping client")?;
            info!("Client stopped");
        }
        started?;
        Ok(())
    }
}
