//! 底盘模块：速度与位置控制
//!
//! 速度控制字的布局（各分量先乘 10 再加偏移）：
//!
//! ```text
//! bit 0      使能
//! bit 2..9   x * 10 + 35       （±3.5 m/s）
//! bit 9..16  y * 10 + 35       （±3.5 m/s）
//! bit 16..   z * 10 + 3600     （±360 °/s）
//! ```

use crate::error::ClientError;
use crate::module::{BaseModule, Module, delegate_module};
use crate::modules::connection::Connection;
use crate::modules::robot::Robot;
use num_enum::IntoPrimitive;
use robomaster_driver::Dispatcher;
use robomaster_protocol::{ChassisPosition, Key, Value, keys};
use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;
use tracing::debug;

pub const MAX_LINEAR_SPEED: f64 = 3.5;
pub const MAX_ANGULAR_SPEED: f64 = 360.0;

/// 所有分量为 0 时的偏移部分
const NEUTRAL: u64 = 140 | 17920 | 235_929_600;

/// 切换模式后自动停车前的等待
const MODE_SWITCH_SETTLE: Duration = Duration::from_millis(333);

/// 位置任务的任务编号
const POSITION_TASK_ID: u8 = 0;

/// 底盘控制模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive)]
#[repr(u8)]
pub enum ChassisMode {
    /// 底盘跟随云台朝向
    #[default]
    YawFollow = 0,
    Tank = 1,
    Fpv = 2,
    AngularVelocity = 3,
    WayPoint = 4,
    None = 5,
}

impl ChassisMode {
    fn control_key(self) -> &'static Key {
        match self {
            ChassisMode::YawFollow => &keys::MAIN_CONTROLLER_CHASSIS_FOLLOW_MODE,
            _ => &keys::MAIN_CONTROLLER_CHASSIS_SPEED_MODE,
        }
    }
}

/// 打包速度控制字
///
/// # 错误
/// 线速度超出 ±3.5 或角速度超出 ±360 时返回 `InvalidArgument`
pub fn speed_word(x: f64, y: f64, z: f64) -> Result<u64, ClientError> {
    let linear = -MAX_LINEAR_SPEED..=MAX_LINEAR_SPEED;
    let angular = -MAX_ANGULAR_SPEED..=MAX_ANGULAR_SPEED;
    if !linear.contains(&x) || !linear.contains(&y) || !angular.contains(&z) {
        return Err(ClientError::invalid_argument(format!(
            "invalid speed values: x={x}, y={y}, z={z}"
        )));
    }

    let x = ((x * 10.0) as i64 + 35) << 2;
    let y = ((y * 10.0) as i64 + 35) << 9;
    let z = ((z * 10.0) as i64 + 3600) << 16;
    Ok((1 | x | y | z) as u64)
}

/// 底盘模块
pub struct Chassis {
    base: BaseModule,
}

delegate_module!(Chassis);

impl Chassis {
    pub fn new(dispatcher: Dispatcher, connection: &Arc<Connection>, robot: &Arc<Robot>) -> Arc<Self> {
        let deps: Vec<Weak<dyn Module>> = vec![
            Arc::downgrade(connection) as Weak<dyn Module>,
            Arc::downgrade(robot) as Weak<dyn Module>,
        ];
        Arc::new(Self {
            base: BaseModule::new(
                dispatcher,
                "Chassis",
                Some(&keys::MAIN_CONTROLLER_CONNECTION),
                Some(Box::new(|connected| debug!(connected, "Chassis connection changed"))),
                deps,
            ),
        })
    }

    /// 切换控制模式：以使能状态发送零速度，稍后停车
    pub fn set_mode(&self, mode: ChassisMode) -> Result<(), ClientError> {
        let result = self.control(mode, 1 | NEUTRAL);
        thread::sleep(MODE_SWITCH_SETTLE);
        self.stop_movement(mode)?;
        result
    }

    pub fn stop_movement(&self, mode: ChassisMode) -> Result<(), ClientError> {
        self.control(mode, NEUTRAL)
    }

    /// 设置速度（x/y 单位 m/s，z 单位 °/s）
    pub fn set_speed(&self, mode: ChassisMode, x: f64, y: f64, z: f64) -> Result<(), ClientError> {
        let word = speed_word(x, y, z)?;
        self.control(mode, word)
    }

    /// 相对位移（x/y 单位 m，yaw 单位 °），等待机器人确认
    pub fn set_position(&self, mode: ChassisMode, x: f64, y: f64, yaw: f64) -> Result<(), ClientError> {
        let position = ChassisPosition {
            task_id: POSITION_TASK_ID,
            is_cancel: 0,
            control_mode: u8::from(mode == ChassisMode::YawFollow),
            x: x as f32,
            y: y as f32,
            yaw: yaw as f32,
        };
        self.base.dispatcher().perform_action_for_key_sync(
            &keys::MAIN_CONTROLLER_CHASSIS_POSITION,
            Value::ChassisPosition(position),
        )?;
        Ok(())
    }

    fn control(&self, mode: ChassisMode, word: u64) -> Result<(), ClientError> {
        self.base
            .dispatcher()
            .direct_send_key_value(mode.control_key(), word)?;
        Ok(())
    }
}
