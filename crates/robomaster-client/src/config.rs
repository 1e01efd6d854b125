//! 客户端配置
//!
//! 配置可以直接构造，也可以从 TOML 加载：
//!
//! ```toml
//! app_id = 0                      # 0 = 接受任意机器人
//! transport = "router"            # 或 "wifi_direct"
//! modules = ["connection", "robot", "chassis", "gimbal"]
//! log_level = "info"
//! unity_bridge_debug = false
//! module_start_timeout_ms = 10000
//! module_stop_timeout_ms = 5000
//! discovery_timeout_ms = 30000
//! ```
//!
//! 也可以从配对二维码负载中取得 `app_id`（[`ClientConfig::from_qr_code`]）。

use crate::error::ClientError;
use robomaster_driver::DispatcherConfig;
use robomaster_protocol::QrCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::path::Path;
use std::time::Duration;

/// 与机器人的连接方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// 经由路由器（需要 UDP 发现）
    #[default]
    Router,
    /// 直连机器人热点（固定地址 192.168.2.1）
    WifiDirect,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// 单个功能模块（配置文件中的名称）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Connection,
    Robot,
    Controller,
    Chassis,
    Gimbal,
    Camera,
    Gun,
    #[serde(rename = "gamepad")]
    GamePad,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 8] = [
        ModuleKind::Connection,
        ModuleKind::Robot,
        ModuleKind::Controller,
        ModuleKind::Chassis,
        ModuleKind::Gimbal,
        ModuleKind::Camera,
        ModuleKind::Gun,
        ModuleKind::GamePad,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// 启用的模块集合（位集）
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ModuleKind>", into = "Vec<ModuleKind>")]
pub struct Modules(u8);

impl Modules {
    pub const NONE: Modules = Modules(0);
    pub const CONNECTION: Modules = Modules(1 << ModuleKind::Connection as u8);
    pub const ROBOT: Modules = Modules(1 << ModuleKind::Robot as u8);
    pub const CONTROLLER: Modules = Modules(1 << ModuleKind::Controller as u8);
    pub const CHASSIS: Modules = Modules(1 << ModuleKind::Chassis as u8);
    pub const GIMBAL: Modules = Modules(1 << ModuleKind::Gimbal as u8);
    pub const CAMERA: Modules = Modules(1 << ModuleKind::Camera as u8);
    pub const GUN: Modules = Modules(1 << ModuleKind::Gun as u8);
    pub const GAMEPAD: Modules = Modules(1 << ModuleKind::GamePad as u8);
    pub const ALL: Modules = Modules(0xFF);
    /// 必选模块
    pub const DEFAULT: Modules = Modules(Self::CONNECTION.0 | Self::ROBOT.0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Modules) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn has(self, kind: ModuleKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = ModuleKind> {
        ModuleKind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }
}

impl Default for Modules {
    fn default() -> Self {
        Modules::ALL
    }
}

impl BitOr for Modules {
    type Output = Modules;

    fn bitor(self, rhs: Modules) -> Modules {
        Modules(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modules {
    fn bitor_assign(&mut self, rhs: Modules) {
        self.0 |= rhs.0;
    }
}

impl From<ModuleKind> for Modules {
    fn from(kind: ModuleKind) -> Self {
        Modules(kind.bit())
    }
}

impl From<Vec<ModuleKind>> for Modules {
    fn from(kinds: Vec<ModuleKind>) -> Self {
        kinds.into_iter().fold(Modules::NONE, |acc, kind| acc | kind.into())
    }
}

impl From<Modules> for Vec<ModuleKind> {
    fn from(modules: Modules) -> Self {
        modules.iter().collect()
    }
}

impl fmt::Debug for Modules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// 客户端配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// 目标机器人的应用 ID（0 = 任意）
    pub app_id: u64,
    pub transport: Transport,
    pub modules: Modules,
    pub log_level: LogLevel,
    /// 原生库调试模式（日志写入 `./log`）
    pub unity_bridge_debug: bool,
    /// 单个模块启动后等待连接的时限
    #[serde(rename = "module_start_timeout_ms", with = "duration_ms")]
    pub module_start_timeout: Duration,
    /// 停止时等待 GamePad 后台启动结束的时限（其余模块的停止不等待连接）
    #[serde(rename = "module_stop_timeout_ms", with = "duration_ms")]
    pub module_stop_timeout: Duration,
    /// UDP 发现的时限
    #[serde(rename = "discovery_timeout_ms", with = "duration_ms")]
    pub discovery_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_id: 0,
            transport: Transport::Router,
            modules: Modules::ALL,
            log_level: LogLevel::Info,
            unity_bridge_debug: false,
            module_start_timeout: Duration::from_secs(10),
            module_stop_timeout: Duration::from_secs(5),
            discovery_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// 解析 TOML 并校验
    pub fn from_toml_str(content: &str) -> Result<Self, ClientError> {
        let config: ClientConfig =
            toml::from_str(content).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载
    ///
    /// # 错误
    /// - `Io`: 文件无法读取
    /// - `Config`: 内容无法解析或必选模块缺失
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 以配对二维码负载中的应用 ID 构造默认配置
    pub fn from_qr_code(message: &str) -> Result<Self, ClientError> {
        let qr = QrCode::decode(message).map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self {
            app_id: qr.app_id(),
            ..Self::default()
        })
    }

    pub fn to_toml_string(&self) -> Result<String, ClientError> {
        toml::to_string(self).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// 连接与机器人模块是必选的
    pub fn validate(&self) -> Result<(), ClientError> {
        if !self.modules.contains(Modules::DEFAULT) {
            return Err(ClientError::Config(format!(
                "connection and robot modules are required (got {:?})",
                self.modules
            )));
        }
        if self.module_start_timeout.is_zero() {
            return Err(ClientError::Config("module_start_timeout_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            debuggable: self.unity_bridge_debug,
            ..DispatcherConfig::default()
        }
    }
}
