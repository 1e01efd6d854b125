//! 发射器模块（水弹枪 / 红外枪）

use crate::error::ClientError;
use crate::module::{BaseModule, Module};
use crate::modules::connection::Connection;
use crate::modules::robot::{DeviceType, FunctionType, Robot};
use robomaster_driver::Dispatcher;
use robomaster_protocol::{Value, keys};
use serde_json::json;
use std::sync::{Arc, Weak};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// 红外发射的持续时间
const INFRARED_PULSE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GunType {
    Bead,
    Infrared,
}

/// 发射器模块
///
/// 没有自己的连接按键：连接状态由连接模块以及机器人的工作设备列表
/// 中是否包含水弹枪决定。
pub struct Gun {
    base: BaseModule,
    robot: Arc<Robot>,
}

impl Gun {
    pub fn new(dispatcher: Dispatcher, connection: &Arc<Connection>, robot: &Arc<Robot>) -> Arc<Self> {
        let deps: Vec<Weak<dyn Module>> = vec![
            Arc::downgrade(connection) as Weak<dyn Module>,
            Arc::downgrade(robot) as Weak<dyn Module>,
        ];
        Arc::new(Self {
            base: BaseModule::new(dispatcher, "Gun", None, None, deps),
            robot: robot.clone(),
        })
    }

    /// 发射一次
    ///
    /// 水弹为异步动作，不等待应答；红外先发送 1，200 ms 后在后台线程发送 0。
    pub fn fire(&self, gun_type: GunType) -> Result<(), ClientError> {
        let dispatcher = self.base.dispatcher();
        match gun_type {
            GunType::Bead => {
                dispatcher.perform_action_for_key(
                    &keys::ROBOMASTER_WATER_GUN_WATER_GUN_FIRE_WITH_TIMES,
                    Value::Raw(json!({"value": 1})),
                    |result| {
                        if !result.succeeded() {
                            warn!("Bead fire rejected: {}", result.error_desc());
                        }
                    },
                )?;
            }
            GunType::Infrared => {
                dispatcher.direct_send_key_value(&keys::ROBOMASTER_WATER_GUN_WATER_GUN_FIRE, 1)?;
                let dispatcher = dispatcher.clone();
                thread::spawn(move || {
                    thread::sleep(INFRARED_PULSE);
                    if let Err(e) =
                        dispatcher.direct_send_key_value(&keys::ROBOMASTER_WATER_GUN_WATER_GUN_FIRE, 0)
                    {
                        warn!("Infrared fire release not sent: {}", e);
                    }
                });
            }
        }
        Ok(())
    }
}

impl Module for Gun {
    fn name(&self) -> &'static str {
        self.base.name()
    }

    fn start(&self) -> Result<(), ClientError> {
        self.base.start()?;
        if let Err(e) = self.robot.enable_function(FunctionType::GunControl, true) {
            let _ = self.base.stop();
            return Err(e);
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), ClientError> {
        let result = self.robot.enable_function(FunctionType::GunControl, false);
        self.base.stop()?;
        result
    }

    fn connected(&self) -> bool {
        self.base.connected() && self.robot.has_device(DeviceType::WaterGun)
    }

    fn wait_for_connection(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        if !self.base.wait_for_connection(timeout) {
            return false;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !self.robot.wait_for_devices(remaining) {
            trace!("Working devices not reported in time");
            return false;
        }
        self.robot.has_device(DeviceType::WaterGun)
    }
}
