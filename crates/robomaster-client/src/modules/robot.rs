//! 机器人系统模块
//!
//! 跟踪工作中的设备、电量与任务状态，并提供功能开关、音量和底盘速度档位。

use crate::error::ClientError;
use crate::module::{BaseModule, Module};
use crate::modules::connection::Connection;
use arc_swap::ArcSwap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use parking_lot::Mutex;
use robomaster_driver::{Dispatcher, ResultListener};
use robomaster_protocol::{FunctionEnable, FunctionEnableInfo, KeyResult, Value, keys};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, error, warn};

/// 可开关的系统功能
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoPrimitive)]
#[repr(u8)]
pub enum FunctionType {
    /// 受击扣血
    Blooded = 2,
    MovementControl = 3,
    GunControl = 4,
    OffControlFunction = 5,
}

/// 设备类型（工作设备列表中的编码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum DeviceType {
    ImageTransmission = 256,
    Camera = 260,
    Chassis = 768,
    Battery = 778,
    Esc0 = 788,
    Esc1 = 789,
    Esc2 = 790,
    Esc3 = 791,
    Servo1 = 792,
    Servo2 = 793,
    Servo3 = 794,
    Servo4 = 795,
    Arm = 798,
    Gimbal = 1024,
    Tof1 = 4609,
    Tof2 = 4610,
    Tof3 = 4611,
    Tof4 = 4612,
    SensorAdapter1 = 5633,
    SensorAdapter2 = 5634,
    SensorAdapter3 = 5635,
    SensorAdapter4 = 5636,
    SensorAdapter5 = 5637,
    SensorAdapter6 = 5638,
    WaterGun = 5888,
    InfraredGun = 5889,
    BackArmor = 6145,
    FrontArmor = 6146,
    LeftArmor = 6147,
    RightArmor = 6148,
    LeftHeadArmor = 6149,
    RightHeadArmor = 6150,
}

/// 底盘速度档位（线上值为档位 + 1）
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ChassisSpeedLevel {
    Fast = 0,
    Medium = 1,
    Slow = 2,
    /// 各轴单独设置速度
    Custom = 3,
}

impl ChassisSpeedLevel {
    fn to_wire(self) -> u64 {
        u64::from(u8::from(self)) + 1
    }

    fn from_wire(value: u64) -> Result<Self, ClientError> {
        value
            .checked_sub(1)
            .and_then(|level| u8::try_from(level).ok())
            .and_then(|level| Self::try_from(level).ok())
            .ok_or_else(|| ClientError::invalid_argument(format!("chassis speed level {value}")))
    }
}

/// 机器人系统模块
pub struct Robot {
    base: BaseModule,
    functions: Mutex<BTreeMap<FunctionType, bool>>,
    /// 工作中的设备编码（包括未知编码），无锁读取
    devices: ArcSwap<BTreeSet<u16>>,
    battery_power_percent: AtomicU8,

    working_devices: ResultListener,
    battery: ResultListener,
    task_status: ResultListener,
}

impl Robot {
    pub fn new(dispatcher: Dispatcher, connection: &Arc<Connection>) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<Robot>| {
            let on_connection = {
                let weak = weak.clone();
                move |connected: bool| {
                    if let Some(robot) = weak.upgrade() {
                        robot.on_connection(connected);
                    }
                }
            };
            let on_devices = {
                let weak = weak.clone();
                move |result: &KeyResult| {
                    if let Some(robot) = weak.upgrade() {
                        robot.on_working_devices(result);
                    }
                }
            };
            let on_battery = {
                let weak = weak.clone();
                move |result: &KeyResult| {
                    if let Some(robot) = weak.upgrade() {
                        robot.on_battery(result);
                    }
                }
            };
            let connection: Weak<dyn Module> = Arc::downgrade(connection) as Weak<dyn Module>;

            Self {
                base: BaseModule::new(
                    dispatcher.clone(),
                    "Robot",
                    Some(&keys::ROBOMASTER_SYSTEM_CONNECTION),
                    Some(Box::new(on_connection)),
                    vec![connection],
                ),
                functions: Mutex::new(BTreeMap::new()),
                devices: ArcSwap::from_pointee(BTreeSet::new()),
                battery_power_percent: AtomicU8::new(0),
                working_devices: ResultListener::with_callback(
                    dispatcher.clone(),
                    &keys::ROBOMASTER_SYSTEM_WORKING_DEVICES,
                    on_devices,
                ),
                battery: ResultListener::with_callback(
                    dispatcher.clone(),
                    &keys::ROBOMASTER_BATTERY_POWER_PERCENT,
                    on_battery,
                ),
                task_status: ResultListener::with_callback(
                    dispatcher,
                    &keys::ROBOMASTER_SYSTEM_TASK_STATUS,
                    |result| debug!("Task status: {}", result),
                ),
            }
        })
    }

    fn listeners(&self) -> [&ResultListener; 3] {
        [&self.working_devices, &self.battery, &self.task_status]
    }

    fn on_connection(&self, connected: bool) {
        for listener in self.listeners() {
            if connected == listener.is_started() {
                continue;
            }
            let result = if connected {
                listener.start()
            } else {
                listener.stop()
            };
            if let Err(e) = result {
                error!(key = %listener.key(), "Robot listener: {}", e);
            }
        }
    }

    fn on_working_devices(&self, result: &KeyResult) {
        let Some(Value::WorkingDevices(list)) = result.value() else {
            return;
        };
        let updated: Arc<BTreeSet<u16>> = Arc::new(list.iter().copied().collect());
        let previous = self.devices.swap(updated.clone());

        for code in previous.difference(&updated) {
            warn!(device = %device_name(*code), "Device removed");
        }
        for code in updated.difference(&previous) {
            warn!(device = %device_name(*code), "Device added");
        }
    }

    fn on_battery(&self, result: &KeyResult) {
        match result.value().and_then(Value::as_u64) {
            Some(percent) => self
                .battery_power_percent
                .store(percent.min(100) as u8, Ordering::SeqCst),
            None => error!("Unexpected battery power percent result: {}", result),
        }
    }

    /// 打开或关闭一项系统功能
    ///
    /// 每次调用都会把目前记录的全部功能状态一起发送。
    pub fn enable_function(&self, function: FunctionType, enable: bool) -> Result<(), ClientError> {
        let list = {
            let mut functions = self.functions.lock();
            functions.insert(function, enable);
            functions
                .iter()
                .map(|(id, enable)| FunctionEnableInfo {
                    id: u8::from(*id),
                    enable: *enable,
                })
                .collect()
        };
        self.base.dispatcher().perform_action_for_key_sync(
            &keys::ROBOMASTER_SYSTEM_FUNCTION_ENABLE,
            Value::FunctionEnable(FunctionEnable { list }),
        )?;
        Ok(())
    }

    /// 等待第一份工作设备列表
    pub fn wait_for_devices(&self, timeout: Duration) -> bool {
        self.working_devices.wait_for_any_result(timeout).is_some()
    }

    pub fn has_device(&self, device: DeviceType) -> bool {
        self.devices.load().contains(&u16::from(device))
    }

    /// 工作中的已知设备（按编码排序）
    pub fn devices(&self) -> Vec<DeviceType> {
        self.devices
            .load()
            .iter()
            .filter_map(|code| DeviceType::try_from(*code).ok())
            .collect()
    }

    pub fn battery_power_percent(&self) -> u8 {
        self.battery_power_percent.load(Ordering::SeqCst)
    }

    pub fn speaker_volume(&self) -> Result<u8, ClientError> {
        let result = self
            .base
            .dispatcher()
            .get_key_value_sync(&keys::ROBOMASTER_SYSTEM_SPEAKER_VOLUMN, true)?;
        let volume = result
            .value()
            .and_then(Value::as_u64)
            .ok_or_else(|| ClientError::invalid_argument("speaker volume reply without value"))?;
        Ok(volume.min(u64::from(u8::MAX)) as u8)
    }

    pub fn set_speaker_volume(&self, volume: u8) -> Result<(), ClientError> {
        self.base.dispatcher().set_key_value_sync(
            &keys::ROBOMASTER_SYSTEM_SPEAKER_VOLUMN,
            Value::Uint64(u64::from(volume)),
        )?;
        Ok(())
    }

    pub fn chassis_speed_level(&self) -> Result<ChassisSpeedLevel, ClientError> {
        let result = self
            .base
            .dispatcher()
            .get_key_value_sync(&keys::ROBOMASTER_SYSTEM_CHASSIS_SPEED_LEVEL, true)?;
        let wire = result
            .value()
            .and_then(Value::as_u64)
            .ok_or_else(|| ClientError::invalid_argument("speed level reply without value"))?;
        ChassisSpeedLevel::from_wire(wire)
    }

    pub fn set_chassis_speed_level(&self, level: ChassisSpeedLevel) -> Result<(), ClientError> {
        self.base.dispatcher().set_key_value_sync(
            &keys::ROBOMASTER_SYSTEM_CHASSIS_SPEED_LEVEL,
            Value::Uint64(level.to_wire()),
        )?;
        Ok(())
    }
}

fn device_name(code: u16) -> String {
    match DeviceType::try_from(code) {
        Ok(device) => format!("{device:?}"),
        Err(_) => format!("Unknown({code})"),
    }
}

impl Module for Robot {
    fn name(&self) -> &'static str {
        self.base.name()
    }

    fn start(&self) -> Result<(), ClientError> {
        self.base.start()
    }

    /// 停止全部监听器与连接监听；单个失败不中断后续步骤，返回第一个错误
    fn stop(&self) -> Result<(), ClientError> {
        let mut first_error: Option<ClientError> = None;
        for listener in self.listeners().into_iter().rev() {
            if listener.is_started() {
                if let Err(e) = listener.stop() {
                    warn!(key = %listener.key(), "Listener not stopped: {}", e);
                    first_error.get_or_insert(e.into());
                }
            }
        }
        let stopped = self.base.stop();
        match first_error {
            Some(e) => Err(e),
            None => stopped,
        }
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
    use crate::module::testing::{connected_robot, push, start};
    use robomaster_driver::DriverError;
    use robomaster_protocol::EventType;
    use serial_test::serial;

    #[test]
    fn test_speed_level_wire_value() {
        assert_eq!(ChassisSpeedLevel::Fast.to_wire(), 1);
        assert_eq!(ChassisSpeedLevel::Custom.to_wire(), 4);
        assert_eq!(ChassisSpeedLevel::from_wire(3).unwrap(), ChassisSpeedLevel::Slow);
        assert!(ChassisSpeedLevel::from_wire(0).is_err());
        assert!(ChassisSpeedLevel::from_wire(5).is_err());
    }

    /// 测试连接后开始跟踪设备与电量
    #[test]
    #[serial]
    fn test_devices_and_battery() {
        let (bridge, dispatcher) = start();
        let (connection, robot) = connected_robot(&bridge, &dispatcher);

        let listening = bridge.wait_for_sent(Duration::from_secs(2), |s| {
            s.is(EventType::StartListening, keys::ROBOMASTER_SYSTEM_TASK_STATUS.sub_type())
        });
        assert!(listening.is_some());

        push(&bridge, &keys::ROBOMASTER_SYSTEM_WORKING_DEVICES, r#"{"list":[5888,1024,768,9999]}"#);
        assert!(robot.wait_for_devices(Duration::from_secs(2)));
        assert!(robot.has_device(DeviceType::WaterGun));
        assert!(!robot.has_device(DeviceType::InfraredGun));
        // 未知编码不出现在列表中，列表按编码排序
        assert_eq!(
            robot.devices(),
            vec![DeviceType::Chassis, DeviceType::Gimbal, DeviceType::WaterGun]
        );

        push(&bridge, &keys::ROBOMASTER_BATTERY_POWER_PERCENT, r#"{"value":87}"#);
        for _ in 0..50 {
            if robot.battery_power_percent() == 87 {
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(robot.battery_power_percent(), 87);

        robot.stop().unwrap();
        connection.stop().unwrap();
        dispatcher.stop().unwrap();
    }

    /// 测试监听器停止失败时其余监听器与连接监听仍被停止
    #[test]
    #[serial]
    fn test_stop_continues_after_listener_error() {
        let (bridge, dispatcher) = start();
        let (connection, robot) = connected_robot(&bridge, &dispatcher);
        for _ in 0..100 {
            if robot.listeners().iter().all(|l| l.is_started()) {
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        assert!(robot.listeners().iter().all(|l| l.is_started()));

        // 重启调度器：已有订阅全部失效，监听器的令牌都无法移除
        dispatcher.stop().unwrap();
        dispatcher.start().unwrap();

        assert!(matches!(
            robot.stop(),
            Err(ClientError::Driver(DriverError::TokenInvalid(_)))
        ));
        assert!(robot.listeners().iter().all(|l| !l.is_started()));
        assert!(matches!(robot.stop(), Err(ClientError::NotStarted)));

        let _ = connection.stop();
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_enable_function_sends_full_list() {
        let (bridge, dispatcher) = start();
        let (connection, robot) = connected_robot(&bridge, &dispatcher);
        bridge.take_sent();

        robot.enable_function(FunctionType::GunControl, true).unwrap();
        robot.enable_function(FunctionType::MovementControl, false).unwrap();

        let actions: Vec<_> = bridge
            .take_sent()
            .into_iter()
            .filter(|s| s.is(EventType::PerformAction, keys::ROBOMASTER_SYSTEM_FUNCTION_ENABLE.sub_type()))
            .collect();
        assert_eq!(actions.len(), 2);
        let last: serde_json::Value = serde_json::from_str(actions[1].string().unwrap()).unwrap();
        assert_eq!(
            last,
            serde_json::json!({"list": [{"id": 3, "enable": false}, {"id": 4, "enable": true}]})
        );

        robot.stop().unwrap();
        connection.stop().unwrap();
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_speed_level_and_volume() {
        let (bridge, dispatcher) = start();
        let (connection, robot) = connected_robot(&bridge, &dispatcher);

        let key = &keys::ROBOMASTER_SYSTEM_CHASSIS_SPEED_LEVEL;
        bridge.set_cached_value(
            key.sub_type(),
            format!(r#"{{"key":{},"tag":0,"error":0,"value":{{"value":2}}}}"#, key.sub_type()),
        );
        assert_eq!(robot.chassis_speed_level().unwrap(), ChassisSpeedLevel::Medium);

        bridge.take_sent();
        robot.set_chassis_speed_level(ChassisSpeedLevel::Slow).unwrap();
        let set = bridge
            .take_sent()
            .into_iter()
            .find(|s| s.is(EventType::SetValue, key.sub_type()))
            .unwrap();
        assert_eq!(set.string(), Some(r#"{"value":{"value":3}}"#));

        let key = &keys::ROBOMASTER_SYSTEM_SPEAKER_VOLUMN;
        bridge.set_cached_value(
            key.sub_type(),
            format!(r#"{{"key":{},"tag":0,"error":0,"value":{{"value":40}}}}"#, key.sub_type()),
        );
        assert_eq!(robot.speaker_volume().unwrap(), 40);
        robot.set_speaker_volume(70).unwrap();

        robot.stop().unwrap();
        connection.stop().unwrap();
        dispatcher.stop().unwrap();
    }
}
