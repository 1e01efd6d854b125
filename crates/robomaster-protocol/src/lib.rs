//! # RoboMaster Protocol
//!
//! 原生桥边界的数据定义（无 I/O、无线程）
//!
//! ## 模块
//!
//! - `key` / `keys`: 按键描述符与封闭注册表
//! - `event`: 64 位事件码（类型 + 子类型）
//! - `tag`: 请求关联标签（数据类型提示 + 请求编号）
//! - `value` / `result`: 值形状与按键结果的 JSON 编解码
//! - `cipher`: 自反流密码
//! - `broadcast`: UDP 发现广播
//! - `qrcode`: 配对二维码负载
//! - `app_id`: 应用 ID 生成
//!
//! ## 字节序
//!
//! 广播中的 IPv4 是大端，其余整数（app_id、二维码元数据、数字事件负载）是小端。

pub mod app_id;
pub mod broadcast;
pub mod cipher;
pub mod error;
pub mod event;
pub mod key;
#[rustfmt::skip]
pub mod keys;
pub mod qrcode;
pub mod result;
pub mod tag;
pub mod value;

// 重新导出常用类型
pub use app_id::{ANY_APP_ID, generate_app_id};
pub use broadcast::{ACK_PORT, BROADCAST_PORT, Broadcast};
pub use error::ProtocolError;
pub use event::{ConnectionOp, Event, EventType};
pub use key::{AccessType, KEY_COUNT, Key};
pub use qrcode::QrCode;
pub use result::KeyResult;
pub use tag::{DataType, EventData, Tag};
pub use value::{
    ChassisPosition, FunctionEnable, FunctionEnableInfo, GamePadActivationSettings,
    GimbalAngleRotation, GimbalAttitude, GimbalSpeedRotation, TaskStatus, Value, ValueKind,
};

/// 原生库要求的实例名（其他名称会静默禁用原生库）
pub const BRIDGE_NAME: &str = "Robomaster";

/// 机器人会话端口
pub const ROBOT_PORT: u64 = 10607;

/// WiFi 直连模式下机器人的固定地址
pub const WIFI_DIRECT_ROBOT_IP: std::net::Ipv4Addr = std::net::Ipv4Addr::new(192, 168, 2, 1);
