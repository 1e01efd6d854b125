//! 配置管理命令
//!
//! 生成和校验客户端配置文件（TOML）。

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use robomaster_sdk::ClientConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "robomaster.toml";

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 写出默认配置
    Init {
        /// 输出路径
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// 覆盖已存在的文件
        #[arg(long)]
        force: bool,
    },

    /// 检查配置
    Check {
        /// 配置文件路径
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

impl ConfigCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            ConfigCommand::Init { output, force } => Self::init_(&output, force),

            ConfigCommand::Check { path } => Self::check_(&path),
        }
    }

    fn init_(output: &Path, force: bool) -> Result<()> {
        if output.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", output.display());
        }
        let content = ClientConfig::default().to_toml_string()?;
        fs::write(output, content).with_context(|| format!("writing {}", output.display()))?;
        println!("✅ 已写入 {}", output.display());
        Ok(())
    }

    fn check_(path: &Path) -> Result<()> {
        let config = ClientConfig::from_file(path).with_context(|| format!("loading {}", path.display()))?;

        println!("配置文件: {}", path.display());
        println!("  app_id: {:#018x}", config.app_id);
        println!("  transport: {:?}", config.transport);
        println!("  modules: {:?}", config.modules);
        println!("  log_level: {}", config.log_level);
        println!("  module_start_timeout: {:?}", config.module_start_timeout);
        println!("  module_stop_timeout: {:?}", config.module_stop_timeout);
        println!("  discovery_timeout: {:?}", config.discovery_timeout);
        Ok(())
    }
}
