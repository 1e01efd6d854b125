//! # RoboMaster CLI
//!
//! RoboMaster S1 SDK 的命令行工具。
//!
//! ```bash
//! # 监听机器人广播并回送确认
//! robomaster-cli discover --timeout-ms 10000 --ack
//!
//! # 生成配对二维码负载
//! robomaster-cli qr encode --ssid MyWifi --password secret
//!
//! # 列出按键注册表
//! robomaster-cli keys gimbal --json
//!
//! # 用 Mock 原生桥跑一遍完整的启动与停止
//! robomaster-cli smoke
//! ```
//!
//! 退出码：配置错误 2，发现超时 3，模块连接超时 4，其他错误 1。
//!
//! 日志级别：`RUST_LOG` 优先；其次 `--log-level`；再次 `--config` 指定的配置文件中的
//! `log_level`；都没有时为 `warn`。

use anyhow::Result;
use clap::{Parser, Subcommand};
use robomaster_sdk::{ClientConfig, ClientError, LogLevel};
use std::path::Path;
use std::process::ExitCode;

mod commands;

#[cfg(unix)]
use commands::RunCommand;
use commands::{ConfigCommand, DiscoverCommand, KeysCommand, QrCommand, SmokeCommand};

/// RoboMaster CLI - RoboMaster S1 命令行工具
#[derive(Parser, Debug)]
#[command(name = "robomaster-cli")]
#[command(about = "Command-line tools for the RoboMaster S1 SDK", long_about = None)]
#[command(version)]
struct Cli {
    /// 日志级别（设置了 RUST_LOG 时以其为准；缺省时取配置文件中的 log_level）
    #[arg(long, global = true, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 监听机器人 UDP 广播
    Discover {
        #[command(flatten)]
        args: DiscoverCommand,
    },

    /// 配对二维码负载编解码
    #[command(subcommand)]
    Qr(QrCommand),

    /// 列出按键注册表
    Keys {
        #[command(flatten)]
        args: KeysCommand,
    },

    /// 客户端配置文件
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 使用 Mock 原生桥启动并停止客户端
    Smoke {
        #[command(flatten)]
        args: SmokeCommand,
    },

    /// 通过宿主进程连接真实机器人
    #[cfg(unix)]
    Run {
        #[command(flatten)]
        args: RunCommand,
    },
}

impl Commands {
    /// 命令使用的客户端配置文件
    fn config_path(&self) -> Option<&Path> {
        match self {
            Commands::Smoke { args } => args.config.as_deref(),
            #[cfg(unix)]
            Commands::Run { args } => Some(args.config.as_path()),
            _ => None,
        }
    }
}

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;

/// 命令行参数优先，其次是配置文件；配置文件无法读取时由命令本身报告
fn log_level(cli: &Cli) -> LogLevel {
    cli.log_level
        .or_else(|| {
            let path = cli.command.config_path()?;
            ClientConfig::from_file(path).ok().map(|config| config.log_level)
        })
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        other => Err(format!("unknown log level '{other}'")),
    }
}

/// 按错误链中第一个客户端错误决定退出码
fn exit_code(error: &anyhow::Error) -> u8 {
    let client_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ClientError>());
    match client_error {
        Some(ClientError::Config(_)) => 2,
        Some(ClientError::DiscoveryTimeout(_)) => 3,
        Some(ClientError::ConnectionTimeout { .. }) => 4,
        _ => 1,
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Discover { args } => args.execute(),
        Commands::Qr(cmd) => cmd.execute(),
        Commands::Keys { args } => args.execute(),
        Commands::Config(cmd) => cmd.execute(),
        Commands::Smoke { args } => args.execute(),
        #[cfg(unix)]
        Commands::Run { args } => args.execute(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    robomaster_sdk::init_logging(log_level(&cli));

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        },
    }
}
