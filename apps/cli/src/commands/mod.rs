//! 命令定义和实现

pub mod config;
pub mod discover;
pub mod keys;
pub mod qr;
#[cfg(unix)]
pub mod run;
pub mod smoke;

pub use config::ConfigCommand;
pub use discover::DiscoverCommand;
pub use keys::KeysCommand;
pub use qr::QrCommand;
#[cfg(unix)]
pub use run::RunCommand;
pub use smoke::SmokeCommand;

/// 解析应用 ID（十进制或 `0x` 前缀的十六进制）
pub(crate) fn parse_app_id(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid app id '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_id() {
        assert_eq!(parse_app_id("4660"), Ok(4660));
        assert_eq!(parse_app_id("0x1234"), Ok(0x1234));
        assert_eq!(parse_app_id(" 0XFF "), Ok(255));
        assert!(parse_app_id("0xZZ").is_err());
        assert!(parse_app_id("-1").is_err());
    }
}
