//! 客户端：按依赖顺序启动和停止功能模块
//!
//! 启动顺序：Connection → Robot →（等待工作设备列表）→ Controller → Camera →
//! Chassis → Gimbal → Gun，每一步在 `module_start_timeout` 内等待连接。
//! GamePad 是可选硬件，在后台线程启动，超时只记录警告。
//!
//! 停止顺序与启动相反，最后停止调度器。启动中途失败时调度器保持运行，
//! 已启动的模块由 [`Client::stop`] 负责清理。

use crate::config::{ClientConfig, ModuleKind};
use crate::error::ClientError;
use crate::module::Module;
use crate::modules::{Camera, Chassis, Connection, Controller, GamePad, Gimbal, Gun, Robot};
use crossbeam_channel::{Receiver, bounded};
use parking_lot::Mutex;
use robomaster_bridge::NativeBridge;
use robomaster_driver::Dispatcher;
use std::sync::Arc;
use std::thread;
use tracing::{info, warn};

#[derive(Default)]
struct ClientState {
    /// `start` 已调用且尚未 `stop`
    started: bool,
    /// 已启动的模块（按启动顺序）
    running: Vec<Arc<dyn Module>>,
    /// 后台 GamePad 启动完成信号
    gamepad_start: Option<Receiver<()>>,
}

/// RoboMaster 客户端
pub struct Client {
    config: ClientConfig,
    dispatcher: Dispatcher,
    connection: Arc<Connection>,
    robot: Arc<Robot>,
    controller: Option<Arc<Controller>>,
    camera: Option<Arc<Camera>>,
    chassis: Option<Arc<Chassis>>,
    gimbal: Option<Arc<Gimbal>>,
    gun: Option<Arc<Gun>>,
    gamepad: Option<Arc<GamePad>>,
    state: Mutex<ClientState>,
}

impl Client {
    /// 创建客户端（不启动）
    ///
    /// # 错误
    /// 配置未启用连接或机器人模块时返回 `Config`
    pub fn new(bridge: Arc<dyn NativeBridge>, config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let dispatcher = Dispatcher::new(bridge, config.dispatcher_config());
        let modules = config.modules;

        let connection = Connection::new(
            dispatcher.clone(),
            config.transport,
            config.app_id,
            config.discovery_timeout,
        );
        let robot = Robot::new(dispatcher.clone(), &connection);

        let controller = modules
            .has(ModuleKind::Controller)
            .then(|| Controller::new(dispatcher.clone(), &connection));
        let camera = modules
            .has(ModuleKind::Camera)
            .then(|| Camera::new(dispatcher.clone(), &connection));
        let chassis = modules
            .has(ModuleKind::Chassis)
            .then(|| Chassis::new(dispatcher.clone(), &connection, &robot));
        let gimbal = modules
            .has(ModuleKind::Gimbal)
            .then(|| Gimbal::new(dispatcher.clone(), &connection));
        let gun = modules
            .has(ModuleKind::Gun)
            .then(|| Gun::new(dispatcher.clone(), &connection, &robot));
        let gamepad = modules
            .has(ModuleKind::GamePad)
            .then(|| GamePad::new(dispatcher.clone(), &connection));

        Ok(Self {
            config,
            dispatcher,
            connection,
            robot,
            controller,
            camera,
            chassis,
            gimbal,
            gun,
            gamepad,
            state: Mutex::new(ClientState::default()),
        })
    }

    /// 启动调度器与全部已启用模块
    ///
    /// # 错误
    /// - `AlreadyStarted`: 已经启动（包括上次启动失败但未 `stop`）
    /// - `DiscoveryTimeout`: 路由器模式下未收到机器人广播
    /// - `ConnectionTimeout`: 某模块未在时限内连接，`module` 为模块名
    pub fn start(&self) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        if state.started {
            return Err(ClientError::AlreadyStarted);
        }
        if !self.dispatcher.is_started() {
            self.dispatcher.start()?;
        }
        state.started = true;
        info!(transport = ?self.config.transport, modules = ?self.config.modules, "Client starting");

        self.start_module(&mut state, self.connection.clone())?;
        self.start_module(&mut state, self.robot.clone())?;
        if !self.robot.wait_for_devices(self.config.module_start_timeout) {
            return Err(ClientError::ConnectionTimeout {
                module: "WorkingDevices",
            });
        }

        let optional: [Option<Arc<dyn Module>>; 5] = [
            self.controller.clone().map(|m| m as Arc<dyn Module>),
            self.camera.clone().map(|m| m as Arc<dyn Module>),
            self.chassis.clone().map(|m| m as Arc<dyn Module>),
            self.gimbal.clone().map(|m| m as Arc<dyn Module>),
            self.gun.clone().map(|m| m as Arc<dyn Module>),
        ];
        for module in optional.into_iter().flatten() {
            self.start_module(&mut state, module)?;
        }

        if let Some(gamepad) = &self.gamepad {
            state.gamepad_start = Some(self.start_gamepad(gamepad.clone())?);
        }

        info!("Client started");
        Ok(())
    }

    fn start_module(&self, state: &mut ClientState, module: Arc<dyn Module>) -> Result<(), ClientError> {
        module.start()?;
        state.running.push(module.clone());
        if !module.wait_for_connection(self.config.module_start_timeout) {
            return Err(ClientError::ConnectionTimeout {
                module: module.name(),
            });
        }
        info!(module = module.name(), "Module connected");
        Ok(())
    }

    fn start_gamepad(&self, gamepad: Arc<GamePad>) -> Result<Receiver<()>, ClientError> {
        let (done_tx, done_rx) = bounded(1);
        let timeout = self.config.module_start_timeout;
        thread::Builder::new()
            .name("gamepad-start".into())
            .spawn(move || {
                match gamepad.start() {
                    Ok(()) => {
                        if gamepad.wait_for_connection(timeout) {
                            info!("GamePad connected");
                        } else {
                            warn!("GamePad connection not established");
                        }
                    }
                    Err(e) => warn!("GamePad start failed: {}", e),
                }
                let _ = done_tx.send(());
            })?;
        Ok(done_rx)
    }

    /// 按启动的相反顺序停止模块，最后停止调度器
    ///
    /// GamePad 的后台启动最多等待 `module_stop_timeout`，其余模块直接停止。
    /// 单个模块停止失败不会中断后续步骤；返回第一个错误。
    pub fn stop(&self) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        if !state.started {
            return Err(ClientError::NotStarted);
        }
        info!("Client stopping");
        let mut first_error: Option<ClientError> = None;

        if let (Some(done), Some(gamepad)) = (state.gamepad_start.take(), &self.gamepad) {
            if done.recv_timeout(self.config.module_stop_timeout).is_err() {
                warn!("GamePad start still pending at stop");
            }
            match gamepad.stop() {
                Ok(()) | Err(ClientError::NotStarted) => {}
                Err(e) => {
                    warn!(module = gamepad.name(), "Module stop failed: {}", e);
                    first_error.get_or_insert(e);
                }
            }
        }

        while let Some(module) = state.running.pop() {
            if let Err(e) = module.stop() {
                warn!(module = module.name(), "Module stop failed: {}", e);
                first_error.get_or_insert(e);
            }
        }

        if let Err(e) = self.dispatcher.stop() {
            first_error.get_or_insert(e.into());
        }
        state.started = false;
        info!("Client stopped");

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn is_started(&self) -> bool {
        self.state.lock().started
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 底层调度器（直接读写按键时使用）
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn connection(&self) -> &Arc<Connection> {
        &self.connection
    }

    pub fn robot(&self) -> &Arc<Robot> {
        &self.robot
    }

    pub fn controller(&self) -> Option<&Arc<Controller>> {
        self.controller.as_ref()
    }

    pub fn camera(&self) -> Option<&Arc<Camera>> {
        self.camera.as_ref()
    }

    pub fn chassis(&self) -> Option<&Arc<Chassis>> {
        self.chassis.as_ref()
    }

    pub fn gimbal(&self) -> Option<&Arc<Gimbal>> {
        self.gimbal.as_ref()
    }

    pub fn gun(&self) -> Option<&Arc<Gun>> {
        self.gun.as_ref()
    }

    pub fn gamepad(&self) -> Option<&Arc<GamePad>> {
        self.gamepad.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Modules, Transport};
    use crate::module::testing::cache_bool;
    use robomaster_bridge::MockBridge;
    use robomaster_protocol::keys;
    use serial_test::serial;
    use std::time::Duration;

    fn config(modules: Modules) -> ClientConfig {
        ClientConfig {
            transport: Transport::WifiDirect,
            modules,
            module_start_timeout: Duration::from_millis(500),
            module_stop_timeout: Duration::from_millis(500),
            ..ClientConfig::default()
        }
    }

    fn mock_bridge() -> Arc<MockBridge> {
        let bridge = Arc::new(MockBridge::new());
        bridge.enable_auto_reply();
        bridge
    }

    #[test]
    fn test_new_requires_mandatory_modules() {
        let result = Client::new(mock_bridge(), config(Modules::CONNECTION | Modules::CAMERA));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_optional_modules_follow_config() {
        let client = Client::new(mock_bridge(), config(Modules::DEFAULT | Modules::GIMBAL)).unwrap();
        assert!(client.gimbal().is_some());
        assert!(client.camera().is_none());
        assert!(client.gamepad().is_none());
        assert!(!client.is_started());
        assert!(matches!(client.stop(), Err(ClientError::NotStarted)));
    }

    /// 测试缓存中已有连接状态时的最小启动与停止
    #[test]
    #[serial]
    fn test_start_stop_default_modules() {
        let bridge = mock_bridge();
        cache_bool(&bridge, &keys::AIR_LINK_CONNECTION, true);
        cache_bool(&bridge, &keys::ROBOMASTER_SYSTEM_CONNECTION, true);
        let devices = keys::ROBOMASTER_SYSTEM_WORKING_DEVICES.sub_type();
        bridge.set_cached_value(
            devices,
            format!(r#"{{"key":{devices},"tag":0,"error":0,"value":{{"list":[768]}}}}"#),
        );

        let client = Client::new(bridge.clone(), config(Modules::DEFAULT)).unwrap();
        client.start().unwrap();
        assert!(client.is_started());
        assert!(client.connection().connected());
        assert!(matches!(client.start(), Err(ClientError::AlreadyStarted)));

        client.stop().unwrap();
        assert!(!client.is_started());
        assert!(!client.dispatcher().is_started());
    }

    /// 测试工作设备列表缺失时报告超时且仍可停止
    /// 测试停止只按 module_stop_timeout 等待 GamePad 的后台启动
    #[test]
    #[serial]
    fn test_stop_bounded_by_stop_timeout() {
        let bridge = mock_bridge();
        cache_bool(&bridge, &keys::AIR_LINK_CONNECTION, true);
        cache_bool(&bridge, &keys::ROBOMASTER_SYSTEM_CONNECTION, true);
        let devices = keys::ROBOMASTER_SYSTEM_WORKING_DEVICES.sub_type();
        bridge.set_cached_value(
            devices,
            format!(r#"{{"key":{devices},"tag":0,"error":0,"value":{{"list":[768]}}}}"#),
        );

        let client = Client::new(
            bridge.clone(),
            ClientConfig {
                module_start_timeout: Duration::from_secs(5),
                module_stop_timeout: Duration::from_millis(100),
                ..config(Modules::DEFAULT | Modules::GAMEPAD)
            },
        )
        .unwrap();
        client.start().unwrap();

        // GamePad 从未连接，后台启动仍在等待
        let started = std::time::Instant::now();
        client.stop().unwrap();
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(!client.dispatcher().is_started());
    }

    #[test]
    #[serial]
    fn test_missing_working_devices() {
        let bridge = mock_bridge();
        cache_bool(&bridge, &keys::AIR_LINK_CONNECTION, true);
        cache_bool(&bridge, &keys::ROBOMASTER_SYSTEM_CONNECTION, true);

        let client = Client::new(bridge, config(Modules::DEFAULT)).unwrap();
        let err = client.start().unwrap_err();
        assert!(matches!(err, ClientError::ConnectionTimeout { module: "WorkingDevices" }));
        assert!(client.dispatcher().is_started());
        client.stop().unwrap();
        assert!(!client.dispatcher().is_started());
    }
}
