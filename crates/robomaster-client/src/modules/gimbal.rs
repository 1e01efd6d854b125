//! 云台模块
//!
//! 连接后打开姿态推送，断开时关闭。角度单位为度，线上值为 0.1°。

use crate::error::ClientError;
use crate::module::{BaseModule, Module};
use crate::modules::connection::Connection;
use crossbeam_channel::{RecvTimeoutError, unbounded};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use robomaster_driver::{Dispatcher, DriverError, ResultListener};
use robomaster_protocol::{
    GimbalAngleRotation, GimbalAttitude, GimbalSpeedRotation, Key, Value, keys,
};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// 等待回中完成的时限
const RESET_TIMEOUT: Duration = Duration::from_secs(10);

/// 云台控制模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum GimbalControlMode {
    #[default]
    Mode1 = 0,
    Mode2 = 1,
    /// 机器人上等同于 `Mode1`
    Mode3 = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Pitch,
    Yaw,
}

/// 云台模块
pub struct Gimbal {
    base: BaseModule,
    attitude: ResultListener,
    control_mode: AtomicU8,
}

impl Gimbal {
    pub fn new(dispatcher: Dispatcher, connection: &Arc<Connection>) -> Arc<Self> {
        let connection: Weak<dyn Module> = Arc::downgrade(connection) as Weak<dyn Module>;

        let updates = dispatcher.clone();
        let on_connection = move |connected: bool| {
            let key = if connected {
                &keys::GIMBAL_OPEN_ATTITUDE_UPDATES
            } else {
                &keys::GIMBAL_CLOSE_ATTITUDE_UPDATES
            };
            if let Err(e) = updates.perform_action_for_key_sync(key, Value::Void) {
                error!(key = %key, "Attitude updates not toggled: {}", e);
            }
        };

        Arc::new(Self {
            base: BaseModule::new(
                dispatcher.clone(),
                "Gimbal",
                Some(&keys::GIMBAL_CONNECTION),
                Some(Box::new(on_connection)),
                vec![connection],
            ),
            attitude: ResultListener::new(dispatcher, &keys::GIMBAL_ATTITUDE),
            control_mode: AtomicU8::new(GimbalControlMode::Mode1.into()),
        })
    }

    /// 最新姿态推送
    pub fn attitude(&self) -> Option<GimbalAttitude> {
        match self.attitude.result()?.value() {
            Some(Value::GimbalAttitude(attitude)) => Some(*attitude),
            _ => None,
        }
    }

    /// 按速度旋转（°/s，范围 ±360）
    pub fn set_rotation_speed(&self, pitch: i16, yaw: i16) -> Result<(), ClientError> {
        for (axis, v) in [("pitch", pitch), ("yaw", yaw)] {
            if !(-360..=360).contains(&v) {
                return Err(ClientError::invalid_argument(format!("invalid {axis} speed {v}")));
            }
        }
        let dispatcher = self.base.dispatcher();
        dispatcher.perform_action_for_key(
            &keys::GIMBAL_SPEED_ROTATION_ENABLED,
            Value::Uint64(1),
            |_| {},
        )?;
        dispatcher.perform_action_for_key(
            &keys::GIMBAL_SPEED_ROTATION,
            Value::GimbalSpeedRotation(GimbalSpeedRotation {
                pitch: pitch * 10,
                yaw: yaw * 10,
                roll: 0,
            }),
            |_| {},
        )?;
        Ok(())
    }

    /// 相对当前位置旋转；俯仰范围 ±60°
    pub fn set_relative_angle_rotation(
        &self,
        angle: i16,
        axis: Axis,
        duration: Duration,
    ) -> Result<(), ClientError> {
        if axis == Axis::Pitch && !(-60..=60).contains(&angle) {
            return Err(ClientError::invalid_argument(format!("invalid pitch angle {angle}")));
        }
        let rotation = angle_rotation(angle, axis, duration)?;
        self.base.dispatcher().perform_action_for_key_sync(
            &keys::GIMBAL_ANGLE_INCREMENT_ROTATION,
            Value::GimbalAngleRotation(rotation),
        )?;
        Ok(())
    }

    /// 相对底盘正前方旋转到指定角度；俯仰范围 -25°..=35°
    pub fn set_absolute_angle_rotation(
        &self,
        angle: i16,
        axis: Axis,
        duration: Duration,
    ) -> Result<(), ClientError> {
        let key: &'static Key = match axis {
            Axis::Pitch => {
                if !(-25..=35).contains(&angle) {
                    return Err(ClientError::invalid_argument(format!("invalid pitch angle {angle}")));
                }
                &keys::GIMBAL_ANGLE_FRONT_PITCH_ROTATION
            }
            Axis::Yaw => &keys::GIMBAL_ANGLE_FRONT_YAW_ROTATION,
        };
        let rotation = angle_rotation(angle, axis, duration)?;
        self.base
            .dispatcher()
            .perform_action_for_key_sync(key, Value::GimbalAngleRotation(rotation))?;
        Ok(())
    }

    pub fn stop_rotation(&self) -> Result<(), ClientError> {
        self.set_rotation_speed(0, 0)?;
        self.base.dispatcher().perform_action_for_key(
            &keys::GIMBAL_SPEED_ROTATION_ENABLED,
            Value::Uint64(0),
            |_| {},
        )?;
        Ok(())
    }

    /// 回中并等待完成（复位状态先变为 1 再回到 0）
    pub fn reset_position(&self) -> Result<(), ClientError> {
        let dispatcher = self.base.dispatcher();
        dispatcher.perform_action_for_key_sync(&keys::GIMBAL_RESET_POSITION, Value::Void)?;

        let key = &keys::GIMBAL_RESET_POSITION_STATE;
        let (tx, rx) = unbounded();
        let token = dispatcher.add_key_listener(
            key,
            move |result| {
                if let Some(state) = result.value().and_then(Value::as_u64) {
                    let _ = tx.send(state);
                }
            },
            true,
        )?;

        let deadline = Instant::now() + RESET_TIMEOUT;
        let mut resetting = false;
        let outcome = loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok(state) => {
                    debug!(state, "Reset position state");
                    if state == 0 && resetting {
                        break Ok(());
                    }
                    resetting = state == 1;
                }
                Err(RecvTimeoutError::Timeout) => {
                    break Err(DriverError::RequestTimeout {
                        key: key.name(),
                        timeout: RESET_TIMEOUT,
                    }
                    .into());
                }
                Err(RecvTimeoutError::Disconnected) => break Err(DriverError::Terminated.into()),
            }
        };

        if let Err(e) = dispatcher.remove_key_listener(key, token) {
            warn!("Reset state listener not removed: {}", e);
        }
        outcome
    }

    pub fn control_mode(&self) -> GimbalControlMode {
        GimbalControlMode::try_from(self.control_mode.load(Ordering::SeqCst)).unwrap_or_default()
    }

    pub fn set_control_mode(&self, mode: GimbalControlMode) -> Result<(), ClientError> {
        let mode = match mode {
            GimbalControlMode::Mode3 => GimbalControlMode::Mode1,
            other => other,
        };
        self.base
            .dispatcher()
            .direct_send_key_value(&keys::GIMBAL_CONTROL_MODE, u64::from(u8::from(mode)))?;
        self.control_mode.store(mode.into(), Ordering::SeqCst);
        Ok(())
    }

    pub fn work_mode(&self) -> Result<u64, ClientError> {
        let result = self
            .base
            .dispatcher()
            .get_key_value_sync(&keys::GIMBAL_WORK_MODE, true)?;
        result
            .value()
            .and_then(Value::as_u64)
            .ok_or_else(|| ClientError::invalid_argument("work mode reply without value"))
    }

    pub fn set_work_mode(&self, mode: u64) -> Result<(), ClientError> {
        self.base
            .dispatcher()
            .set_key_value_sync(&keys::GIMBAL_WORK_MODE, Value::Uint64(mode))?;
        Ok(())
    }
}

fn angle_rotation(angle: i16, axis: Axis, duration: Duration) -> Result<GimbalAngleRotation, ClientError> {
    let tenths = angle
        .checked_mul(10)
        .ok_or_else(|| ClientError::invalid_argument(format!("angle {angle} out of range")))?;
    let time = i16::try_from(duration.as_millis())
        .map_err(|_| ClientError::invalid_argument(format!("duration {duration:?} too long")))?;
    let (pitch, yaw) = match axis {
        Axis::Pitch => (tenths, 0),
        Axis::Yaw => (0, tenths),
    };
    Ok(GimbalAngleRotation { pitch, yaw, time })
}

impl Module for Gimbal {
    fn name(&self) -> &'static str {
        self.base.name()
    }

    fn start(&self) -> Result<(), ClientError> {
        self.attitude.start()?;
        if let Err(e) = self.base.start() {
            let _ = self.attitude.stop();
            return Err(e);
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), ClientError> {
        let rotation = self.stop_rotation();
        if let Err(e) = &rotation {
            warn!("Rotation stop not sent: {}", e);
        }
        let attitude = self.attitude.stop().map_err(ClientError::from);
        let stopped = self.base.stop();
        rotation.and(attitude).and(stopped)
    }

    fn connected(&self) -> bool {
        self.base.connected()
    }

    fn wait_for_connection(&self, timeout: Duration) -> bool {
        self.base.wait_for_connection(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Transport;
    use crate::module::testing::{push, push_bool, start};
    use robomaster_protocol::EventType;
    use serial_test::serial;
    use std::thread;

    use serde_json::json;

    /// 某个按键上发出的动作负载
    fn actions(sent: &[robomaster_bridge::SentEvent], key: &Key) -> Vec<serde_json::Value> {
        sent.iter()
            .filter(|s| s.is(EventType::PerformAction, key.sub_type()))
            .filter_map(|s| s.string().and_then(|body| serde_json::from_str(body).ok()))
            .collect()
    }

    #[test]
    fn test_angle_rotation_values() {
        let r = angle_rotation(-15, Axis::Pitch, Duration::from_secs(1)).unwrap();
        assert_eq!(r, GimbalAngleRotation { pitch: -150, yaw: 0, time: 1000 });
        let r = angle_rotation(90, Axis::Yaw, Duration::from_millis(500)).unwrap();
        assert_eq!(r, GimbalAngleRotation { pitch: 0, yaw: 900, time: 500 });
        assert!(angle_rotation(4000, Axis::Yaw, Duration::ZERO).is_err());
        assert!(angle_rotation(10, Axis::Yaw, Duration::from_secs(60)).is_err());
    }

    /// 测试连接时打开姿态推送，并跟踪最新姿态
    #[test]
    #[serial]
    fn test_attitude_updates() {
        let (bridge, dispatcher) = start();
        let connection = Connection::new(dispatcher.clone(), Transport::WifiDirect, 0, Duration::from_secs(1));
        let gimbal = Gimbal::new(dispatcher.clone(), &connection);
        connection.start().unwrap();
        gimbal.start().unwrap();

        push_bool(&bridge, &keys::AIR_LINK_CONNECTION, true);
        push_bool(&bridge, &keys::GIMBAL_CONNECTION, true);
        assert!(gimbal.wait_for_connection(Duration::from_secs(2)));
        let open = bridge.wait_for_sent(Duration::from_secs(2), |s| {
            s.is(EventType::PerformAction, keys::GIMBAL_OPEN_ATTITUDE_UPDATES.sub_type())
        });
        assert!(open.is_some());

        push(&bridge, &keys::GIMBAL_ATTITUDE, r#"{"pitch":1.0,"yaw":2.0,"roll":3.0}"#);
        for _ in 0..50 {
            if gimbal.attitude().is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }
        let attitude = gimbal.attitude().unwrap();
        assert_eq!((attitude.pitch, attitude.yaw, attitude.roll), (1.0, 2.0, 3.0));

        bridge.take_sent();
        gimbal.stop().unwrap();
        let sent = bridge.take_sent();
        assert_eq!(
            actions(&sent, &keys::GIMBAL_SPEED_ROTATION),
            vec![json!({"pitch": 0, "yaw": 0, "roll": 0})]
        );
        assert!(gimbal.attitude().is_none());
        connection.stop().unwrap();
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_rotation_commands() {
        let (bridge, dispatcher) = start();
        let connection = Connection::new(dispatcher.clone(), Transport::WifiDirect, 0, Duration::from_secs(1));
        let gimbal = Gimbal::new(dispatcher.clone(), &connection);
        bridge.take_sent();

        assert!(gimbal.set_rotation_speed(400, 0).is_err());
        gimbal.set_rotation_speed(30, -45).unwrap();
        let sent = bridge.take_sent();
        assert_eq!(actions(&sent, &keys::GIMBAL_SPEED_ROTATION_ENABLED), vec![json!({"value": 1})]);
        assert_eq!(
            actions(&sent, &keys::GIMBAL_SPEED_ROTATION),
            vec![json!({"pitch": 300, "yaw": -450, "roll": 0})]
        );

        assert!(gimbal.set_absolute_angle_rotation(40, Axis::Pitch, Duration::from_secs(1)).is_err());
        gimbal
            .set_absolute_angle_rotation(20, Axis::Yaw, Duration::from_secs(1))
            .unwrap();
        let sent = bridge.take_sent();
        assert_eq!(
            actions(&sent, &keys::GIMBAL_ANGLE_FRONT_YAW_ROTATION),
            vec![json!({"pitch": 0, "yaw": 200, "time": 1000})]
        );

        gimbal.set_control_mode(GimbalControlMode::Mode3).unwrap();
        assert_eq!(gimbal.control_mode(), GimbalControlMode::Mode1);
        let sent = bridge.recv_sent(Duration::from_secs(1)).unwrap();
        assert!(sent.is(EventType::PerformAction, keys::GIMBAL_CONTROL_MODE.sub_type()));
        assert_eq!(sent.number(), Some(0));
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_reset_position_waits_for_state() {
        let (bridge, dispatcher) = start();
        let connection = Connection::new(dispatcher.clone(), Transport::WifiDirect, 0, Duration::from_secs(1));
        let gimbal = Gimbal::new(dispatcher.clone(), &connection);

        let pusher = {
            let bridge = bridge.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(100));
                for state in [1, 1, 0] {
                    push(&bridge, &keys::GIMBAL_RESET_POSITION_STATE, &format!(r#"{{"value":{state}}}"#));
                    thread::sleep(Duration::from_millis(20));
                }
            })
        };
        gimbal.reset_position().unwrap();
        pusher.join().unwrap();

        let stop = bridge.wait_for_sent(Duration::from_secs(2), |s| {
            s.is(EventType::StopListening, keys::GIMBAL_RESET_POSITION_STATE.sub_type())
        });
        assert!(stop.is_some());
        dispatcher.stop().unwrap();
    }
}
