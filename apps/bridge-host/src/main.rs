//! RoboMaster 原生桥宿主进程
//!
//! 在本进程中加载原生库（或 Mock），通过三条命名管道为 `PipeBridge` 提供服务。
//! 通常由 `PipeBridge::launch` 启动，管道路径由启动方创建并传入。

use anyhow::{Context, Result};
use clap::Parser;
use robomaster_sdk::LogLevel;
use robomaster_sdk::bridge::pipe::serve;
use robomaster_sdk::bridge::{MockBridge, NativeBridge};
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

/// RoboMaster 原生桥宿主
#[derive(Parser, Debug)]
#[command(name = "robomaster-bridge-host")]
#[command(about = "RoboMaster bridge host - serves the native bridge over named pipes", long_about = None)]
struct Args {
    /// 请求管道（本进程读取）
    #[arg(long)]
    request: PathBuf,

    /// 应答管道（本进程写入）
    #[arg(long)]
    reply: PathBuf,

    /// 事件管道（本进程写入）
    #[arg(long)]
    event: PathBuf,

    /// 使用自动应答的 Mock 原生桥
    #[arg(long)]
    mock: bool,

    /// 预置 Mock 缓存值，格式 `<sub_type>=<json>`（可重复）
    #[arg(long = "cache", requires = "mock", value_parser = parse_cache_entry)]
    cache: Vec<(u32, String)>,

    /// 日志级别（设置了 RUST_LOG 时以其为准）
    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    log_level: LogLevel,
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

fn parse_cache_entry(s: &str) -> Result<(u32, String), String> {
    let (sub_type, json) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <sub_type>=<json>, got '{s}'"))?;
    let sub_type = sub_type
        .trim()
        .parse()
        .map_err(|e| format!("invalid sub type '{sub_type}': {e}"))?;
    Ok((sub_type, json.to_string()))
}

fn make_bridge(args: &Args) -> Result<Arc<dyn NativeBridge>> {
    if args.mock {
        let bridge = Arc::new(MockBridge::new());
        bridge.enable_auto_reply();
        for (sub_type, json) in &args.cache {
            bridge.set_cached_value(*sub_type, json.as_bytes());
        }
        info!(cached = args.cache.len(), "Serving mock bridge");
        return Ok(bridge);
    }
    link_bridge()
}

#[cfg(feature = "link")]
fn link_bridge() -> Result<Arc<dyn NativeBridge>> {
    info!("Serving linked native library");
    Ok(Arc::new(robomaster_sdk::bridge::LinkBridge::new()))
}

#[cfg(not(feature = "link"))]
fn link_bridge() -> Result<Arc<dyn NativeBridge>> {
    anyhow::bail!("built without the `link` feature; pass --mock to serve a mock bridge")
}

/// 按 请求 → 应答 → 事件 的顺序打开管道（与客户端的打开顺序对应）
fn open_pipes(args: &Args) -> Result<(File, File, File)> {
    let request = File::open(&args.request).with_context(|| format!("opening {}", args.request.display()))?;
    let reply = OpenOptions::new()
        .write(true)
        .open(&args.reply)
        .with_context(|| format!("opening {}", args.reply.display()))?;
    let event = OpenOptions::new()
        .write(true)
        .open(&args.event)
        .with_context(|| format!("opening {}", args.event.display()))?;
    Ok((request, reply, event))
}

fn run(args: Args) -> Result<()> {
    let bridge = make_bridge(&args)?;
    let (request, reply, event) = open_pipes(&args)?;
    info!("Bridge host connected");

    serve(&*bridge, request, reply, event).context("serving bridge")?;
    info!("Bridge host finished");
    Ok(())
}

fn main() {
    let args = Args::parse();
    robomaster_sdk::init_logging(args.log_level);

    // 请求管道关闭即正常退出；信号只需结束进程
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nReceived interrupt signal. Shutting down...");
        process::exit(0);
    }) {
        eprintln!("Failed to set signal handler: {}", e);
    }

    if let Err(e) = run(args) {
        eprintln!("Bridge host error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cache_entry() {
        let (sub_type, json) = parse_cache_entry(r#"117440514={"value":{"value":1}}"#).unwrap();
        assert_eq!(sub_type, 117440514);
        assert_eq!(json, r#"{"value":{"value":1}}"#);

        assert!(parse_cache_entry("no-separator").is_err());
        assert!(parse_cache_entry("abc={}").is_err());
    }

    #[test]
    fn test_cache_requires_mock() {
        let result = Args::try_parse_from([
            "robomaster-bridge-host",
            "--request",
            "r",
            "--reply",
            "p",
            "--event",
            "e",
            "--cache",
            "1={}",
        ]);
        assert!(result.is_err());
    }

    #[cfg(not(feature = "link"))]
    #[test]
    fn test_link_requires_feature() {
        let args = Args::try_parse_from([
            "robomaster-bridge-host",
            "--request",
            "r",
            "--reply",
            "p",
            "--event",
            "e",
        ])
        .unwrap();
        let err = make_bridge(&args).err().unwrap();
        assert!(err.to_string().contains("--mock"));
    }
}
