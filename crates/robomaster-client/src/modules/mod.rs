//! 功能模块

pub mod camera;
pub mod chassis;
pub mod connection;
pub mod controller;
pub mod gamepad;
pub mod gimbal;
pub mod gun;
pub mod robot;

pub use camera::{Camera, CameraMode, VideoCallback, VideoFormat, VideoFrame, VideoQuality};
pub use chassis::{Chassis, ChassisMode};
pub use connection::Connection;
pub use controller::{Controller, ControllerMode, StickPosition};
pub use gamepad::{Button, GamePad};
pub use gimbal::{Axis, Gimbal, GimbalControlMode};
pub use gun::{Gun, GunType};
pub use robot::{ChassisSpeedLevel, DeviceType, FunctionType, Robot};
