//! 按键注册表查询命令

use anyhow::Result;
use clap::{Args, ValueEnum};
use robomaster_sdk::Key;
use robomaster_sdk::protocol::AccessType;
use serde_json::json;

/// 按访问类型过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccessFilter {
    Read,
    Write,
    Action,
}

impl AccessFilter {
    fn matches(self, key: &Key) -> bool {
        let access = match self {
            AccessFilter::Read => AccessType::READ,
            AccessFilter::Write => AccessType::WRITE,
            AccessFilter::Action => AccessType::ACTION,
        };
        key.access().contains(access)
    }
}

/// 按键查询参数
#[derive(Args, Debug)]
pub struct KeysCommand {
    /// 名称过滤（不区分大小写的子串）
    pub filter: Option<String>,

    /// 只列出具有该访问权限的按键
    #[arg(long, value_enum)]
    pub access: Option<AccessFilter>,

    /// 以 JSON 输出
    #[arg(long)]
    pub json: bool,
}

impl KeysCommand {
    pub fn execute(&self) -> Result<()> {
        let keys = self.select();
        if self.json {
            let entries: Vec<_> = keys
                .iter()
                .map(|key| {
                    json!({
                        "name": key.name(),
                        "sub_type": key.sub_type(),
                        "access": key.access().to_string(),
                        "kind": key.kind().to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for key in &keys {
                println!(
                    "{:<10} {:<48} {:<18} {}",
                    key.sub_type(),
                    key.name(),
                    key.access(),
                    key.kind()
                );
            }
        }
        Ok(())
    }

    fn select(&self) -> Vec<&'static Key> {
        let filter = self.filter.as_deref().map(str::to_ascii_lowercase);
        Key::all()
            .iter()
            .filter(|key| {
                filter
                    .as_deref()
                    .is_none_or(|f| key.name().to_ascii_lowercase().contains(f))
            })
            .filter(|key| self.access.is_none_or(|access| access.matches(key)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robomaster_sdk::protocol::KEY_COUNT;

    fn command(filter: Option<&str>, access: Option<AccessFilter>) -> KeysCommand {
        KeysCommand {
            filter: filter.map(String::from),
            access,
            json: false,
        }
    }

    #[test]
    fn test_select_all() {
        assert_eq!(command(None, None).select().len(), KEY_COUNT);
    }

    #[test]
    fn test_select_by_name_and_access() {
        let gimbal = command(Some("GIMBAL"), None).select();
        assert!(!gimbal.is_empty());
        assert!(gimbal.iter().all(|k| k.name().to_ascii_lowercase().contains("gimbal")));

        let actions = command(Some("gimbal"), Some(AccessFilter::Action)).select();
        assert!(!actions.is_empty());
        assert!(actions.len() < gimbal.len());
        assert!(actions.iter().all(|k| k.is_action()));
    }
}
