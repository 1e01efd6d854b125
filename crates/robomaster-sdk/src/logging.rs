//! 日志初始化

use robomaster_client::LogLevel;
use tracing_subscriber::EnvFilter;

/// 受配置日志级别控制的目标
const TARGETS: [&str; 7] = [
    "robomaster_protocol",
    "robomaster_bridge",
    "robomaster_driver",
    "robomaster_client",
    "robomaster_sdk",
    "robomaster_cli",
    "robomaster_bridge_host",
];

/// 构造日志过滤器
///
/// 设置了 `RUST_LOG` 时以其为准；否则其他目标为 `warn`，
/// `robomaster_*` 目标使用 `level`。
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: LogLevel) -> String {
    let mut directives = String::from("warn");
    for target in TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

/// 安装全局 fmt 订阅者（输出到标准错误）
///
/// 可重复调用；已有全局订阅者时不做任何事。
///
/// # 返回
/// 本次调用是否安装了订阅者
pub fn init_logging(level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let directives = default_directives(LogLevel::Debug);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("robomaster_driver=debug"));
        assert!(directives.contains("robomaster_cli=debug"));
        assert!(directives.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(LogLevel::Info);
        assert!(!init_logging(LogLevel::Trace));
    }
}
