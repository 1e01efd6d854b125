//! 配对二维码命令
//!
//! 只处理二维码中的文本负载，不生成图片。

use super::parse_app_id;
use anyhow::{Context, Result};
use clap::Subcommand;
use robomaster_sdk::ClientConfig;
use robomaster_sdk::protocol::{QrCode, generate_app_id};

/// 二维码命令
#[derive(Subcommand, Debug)]
pub enum QrCommand {
    /// 生成配对负载
    Encode {
        /// 应用 ID（缺省时随机生成）
        #[arg(long, value_parser = parse_app_id)]
        app_id: Option<u64>,

        /// 两位国家码
        #[arg(long, default_value = "CN")]
        country: String,

        /// 路由器 SSID
        #[arg(long)]
        ssid: String,

        /// 路由器密码
        #[arg(long)]
        password: String,

        /// 路由器 BSSID（可选）
        #[arg(long, default_value = "")]
        bssid: String,
    },

    /// 解码配对负载
    Decode {
        /// Base64 负载
        message: String,

        /// 输出以该应用 ID 为准的客户端配置（TOML）
        #[arg(long)]
        config: bool,
    },
}

impl QrCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            QrCommand::Encode {
                app_id,
                country,
                ssid,
                password,
                bssid,
            } => {
                let app_id = app_id.unwrap_or_else(generate_app_id);
                let qr = QrCode::new(app_id, &country, &ssid, &password, &bssid)?;
                println!("{}", qr.message());
                eprintln!("app_id: {app_id:#018x}");
                Ok(())
            },

            QrCommand::Decode { message, config } => {
                if config {
                    let config = ClientConfig::from_qr_code(&message)?;
                    print!("{}", config.to_toml_string()?);
                } else {
                    let qr = QrCode::decode(&message).context("decoding QR payload")?;
                    println!("{}", describe(&qr));
                }
                Ok(())
            },
        }
    }
}

fn describe(qr: &QrCode) -> String {
    let mut lines = vec![
        format!("app_id:   {:#018x}", qr.app_id()),
        format!("country:  {}", qr.country_code()),
        format!("ssid:     {}", qr.ssid()),
        format!("password: {}", qr.password()),
    ];
    if let Some(bssid) = qr.bssid() {
        let octets: Vec<String> = bssid.iter().map(|b| format!("{b:02x}")).collect();
        lines.push(format!("bssid:    {}", octets.join(":")));
    }
    lines.join("\n")
}
