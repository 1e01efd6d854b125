//! 主控模块：控制模式与虚拟摇杆

use crate::error::ClientError;
use crate::module::{BaseModule, Module, delegate_module};
use crate::modules::connection::Connection;
use num_enum::IntoPrimitive;
use robomaster_driver::Dispatcher;
use robomaster_protocol::{Value, keys};
use std::sync::{Arc, Weak};
use tracing::debug;

const STICK_MIN: f64 = -660.0;
const STICK_MAX: f64 = 660.0;
const STICK_OFFSET: f64 = 1024.0;

/// 控制模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive)]
#[repr(u8)]
pub enum ControllerMode {
    #[default]
    Fpv = 0,
    Sdk = 1,
}

/// 摇杆位置，两个轴的取值范围都是 `[-1, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickPosition {
    pub x: f64,
    pub y: f64,
}

impl StickPosition {
    pub fn new(x: f64, y: f64) -> Result<Self, ClientError> {
        for (axis, v) in [("x", x), ("y", y)] {
            if !(-1.0..=1.0).contains(&v) {
                return Err(ClientError::invalid_argument(format!(
                    "stick {axis} must be within [-1, 1], got {v}"
                )));
            }
        }
        Ok(Self { x, y })
    }

    /// 线上值（364-1684）
    pub fn interpolated_x(&self) -> u64 {
        interpolate(self.x)
    }

    pub fn interpolated_y(&self) -> u64 {
        interpolate(self.y)
    }
}

fn interpolate(v: f64) -> u64 {
    let t = (v + 1.0) * 0.5;
    (STICK_MIN + (STICK_MAX - STICK_MIN) * t + STICK_OFFSET) as u64
}

/// 打包双摇杆控制字；缺省的摇杆编码为 0 且使能位为 0
pub fn stick_word(
    chassis: Option<StickPosition>,
    gimbal: Option<StickPosition>,
    mode: ControllerMode,
) -> u64 {
    let (cx, cy) = chassis.map_or((0, 0), |s| (s.interpolated_x(), s.interpolated_y()));
    let (gx, gy) = gimbal.map_or((0, 0), |s| (s.interpolated_x(), s.interpolated_y()));

    cy | cx << 11
        | gy << 22
        | gx << 33
        | u64::from(chassis.is_some()) << 44
        | u64::from(gimbal.is_some()) << 45
        | u64::from(u8::from(mode)) << 46
}

/// 主控模块
pub struct Controller {
    base: BaseModule,
}

delegate_module!(Controller);

impl Controller {
    pub fn new(dispatcher: Dispatcher, connection: &Arc<Connection>) -> Arc<Self> {
        let connection: Weak<dyn Module> = Arc::downgrade(connection) as Weak<dyn Module>;
        Arc::new(Self {
            base: BaseModule::new(
                dispatcher,
                "Controller",
                Some(&keys::MAIN_CONTROLLER_CONNECTION),
                Some(Box::new(|connected| debug!(connected, "Controller connection changed"))),
                vec![connection],
            ),
        })
    }

    pub fn set_mode(&self, mode: ControllerMode) -> Result<(), ClientError> {
        self.base.dispatcher().set_key_value_sync(
            &keys::MAIN_CONTROLLER_CHASSIS_CAR_CONTROL_MODE,
            Value::Uint64(u64::from(u8::from(mode))),
        )?;
        Ok(())
    }

    /// 发送虚拟摇杆（不等待应答）
    pub fn move_sticks(
        &self,
        chassis: Option<StickPosition>,
        gimbal: Option<StickPosition>,
        mode: ControllerMode,
    ) -> Result<(), ClientError> {
        self.base.dispatcher().direct_send_key_value(
            &keys::MAIN_CONTROLLER_VIRTUAL_STICK,
            stick_word(chassis, gimbal, mode),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Transport;
    use crate::module::testing::start;
    use robomaster_protocol::EventType;
    use serial_test::serial;
    use std::time::Duration;

    #[test]
    fn test_interpolation_bounds() {
        assert_eq!(StickPosition::new(-1.0, 1.0).unwrap().interpolated_x(), 364);
        assert_eq!(StickPosition::new(-1.0, 1.0).unwrap().interpolated_y(), 1684);
        assert_eq!(StickPosition::default().interpolated_x(), 1024);
        assert!(StickPosition::new(1.5, 0.0).is_err());
        assert!(StickPosition::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_stick_word_layout() {
        let centered = StickPosition::default();
        let word = stick_word(Some(centered), None, ControllerMode::Sdk);
        assert_eq!(word, 1024 | 1024 << 11 | 1 << 44 | 1 << 46);

        let word = stick_word(None, Some(StickPosition::new(1.0, -1.0).unwrap()), ControllerMode::Fpv);
        assert_eq!(word, 364 << 22 | 1684 << 33 | 1 << 45);

        assert_eq!(stick_word(None, None, ControllerMode::Fpv), 0);
    }

    #[test]
    #[serial]
    fn test_move_and_mode() {
        let (bridge, dispatcher) = start();
        let connection = Connection::new(dispatcher.clone(), Transport::WifiDirect, 0, Duration::from_secs(1));
        let controller = Controller::new(dispatcher.clone(), &connection);
        bridge.take_sent();

        controller
            .move_sticks(Some(StickPosition::default()), None, ControllerMode::Sdk)
            .unwrap();
        let sent = bridge.recv_sent(Duration::from_secs(1)).unwrap();
        assert!(sent.is(EventType::PerformAction, keys::MAIN_CONTROLLER_VIRTUAL_STICK.sub_type()));
        assert_eq!(sent.tag, 0);
        assert_eq!(sent.number(), Some(1024 | 1024 << 11 | 1 << 44 | 1 << 46));

        controller.set_mode(ControllerMode::Sdk).unwrap();
        let set = bridge
            .take_sent()
            .into_iter()
            .find(|s| s.is(EventType::SetValue, keys::MAIN_CONTROLLER_CHASSIS_CAR_CONTROL_MODE.sub_type()))
            .unwrap();
        assert_eq!(set.string(), Some(r#"{"value":{"value":1}}"#));
        dispatcher.stop().unwrap();
    }
}
