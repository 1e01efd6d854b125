//! 手柄模块
//!
//! 手柄首次连接时直接写入激活信息（序列号取固件版本），跳过厂商的在线激活流程。

use crate::error::ClientError;
use crate::module::{BaseModule, Module};
use crate::modules::connection::Connection;
use parking_lot::Mutex;
use robomaster_driver::Dispatcher;
use robomaster_protocol::{GamePadActivationSettings, Key, KeyResult, Value, keys};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{error, info, warn};

/// 手柄按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    C1,
    C2,
    Fire,
    Fn,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::C1, Button::C2, Button::Fire, Button::Fn];

    fn key(self) -> &'static Key {
        match self {
            Button::C1 => &keys::ROBOMASTER_GAME_PAD_C1,
            Button::C2 => &keys::ROBOMASTER_GAME_PAD_C2,
            Button::Fire => &keys::ROBOMASTER_GAME_PAD_FIRE,
            Button::Fn => &keys::ROBOMASTER_GAME_PAD_FN,
        }
    }
}

#[derive(Default)]
struct ButtonState {
    c1: AtomicBool,
    c2: AtomicBool,
    fire: AtomicBool,
    func: AtomicBool,
}

impl ButtonState {
    fn slot(&self, button: Button) -> &AtomicBool {
        match button {
            Button::C1 => &self.c1,
            Button::C2 => &self.c2,
            Button::Fire => &self.fire,
            Button::Fn => &self.func,
        }
    }
}

/// 手柄模块
pub struct GamePad {
    base: BaseModule,
    buttons: Arc<ButtonState>,
    /// 按钮监听令牌
    tokens: Mutex<Vec<(Button, u64)>>,
}

impl GamePad {
    pub fn new(dispatcher: Dispatcher, connection: &Arc<Connection>) -> Arc<Self> {
        let connection: Weak<dyn Module> = Arc::downgrade(connection) as Weak<dyn Module>;
        let activation = {
            let dispatcher = dispatcher.clone();
            move |connected: bool| {
                if connected {
                    info!("GamePad connected");
                    if let Err(e) = activate(&dispatcher) {
                        error!("GamePad activation failed: {}", e);
                    }
                } else {
                    warn!("GamePad disconnected");
                }
            }
        };

        Arc::new(Self {
            base: BaseModule::new(
                dispatcher,
                "GamePad",
                Some(&keys::ROBOMASTER_GAME_PAD_CONNECTION),
                Some(Box::new(activation)),
                vec![connection],
            ),
            buttons: Arc::new(ButtonState::default()),
            tokens: Mutex::new(Vec::new()),
        })
    }

    pub fn pressed(&self, button: Button) -> bool {
        self.buttons.slot(button).load(Ordering::SeqCst)
    }

    pub fn c1_pressed(&self) -> bool {
        self.pressed(Button::C1)
    }

    pub fn c2_pressed(&self) -> bool {
        self.pressed(Button::C2)
    }

    pub fn fire_pressed(&self) -> bool {
        self.pressed(Button::Fire)
    }

    pub fn fn_pressed(&self) -> bool {
        self.pressed(Button::Fn)
    }

    fn remove_button_listeners(&self) -> Result<(), ClientError> {
        let tokens = std::mem::take(&mut *self.tokens.lock());
        let mut first_error = None;
        for (button, token) in tokens {
            if let Err(e) = self.base.dispatcher().remove_key_listener(button.key(), token) {
                warn!(?button, "Button listener not removed: {}", e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

/// 读取固件版本并写入激活信息
fn activate(dispatcher: &Dispatcher) -> Result<(), ClientError> {
    let firmware = dispatcher.get_key_value_sync(&keys::ROBOMASTER_GAME_PAD_FIRMWARE_VERSION, true)?;
    let serial_number = firmware
        .value()
        .and_then(Value::as_str)
        .ok_or_else(|| ClientError::invalid_argument("gamepad firmware version without value"))?
        .to_string();
    let activate_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();

    dispatcher.set_key_value_sync(
        &keys::ROBOMASTER_GAME_PAD_ACTIVATION_SETTINGS,
        Value::GamePadActivationSettings(GamePadActivationSettings {
            is_activated: true,
            activate_time,
            serial_number,
        }),
    )?;
    Ok(())
}

impl Module for GamePad {
    fn name(&self) -> &'static str {
        self.base.name()
    }

    fn start(&self) -> Result<(), ClientError> {
        if !self.tokens.lock().is_empty() {
            return Err(ClientError::AlreadyStarted);
        }
        for button in Button::ALL {
            let buttons = self.buttons.clone();
            let added = self.base.dispatcher().add_key_listener(
                button.key(),
                move |result: &KeyResult| {
                    if let Some(pressed) = result.value().and_then(Value::as_bool) {
                        buttons.slot(button).store(pressed, Ordering::SeqCst);
                    }
                },
                false,
            );
            match added {
                Ok(token) => self.tokens.lock().push((button, token)),
                Err(e) => {
                    let _ = self.remove_button_listeners();
                    return Err(e.into());
                }
            }
        }

        if let Err(e) = self.base.start() {
            let _ = self.remove_button_listeners();
            return Err(e);
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), ClientError> {
        let removed = self.remove_button_listeners();
        self.base.stop()?;
        removed
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

    fn wait_until(cond: impl Fn() -> bool) -> bool {
        for _ in 0..50 {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(20));
        }
        cond()
    }

    /// 测试连接后写入以固件版本为序列号的激活信息
    #[test]
    #[serial]
    fn test_activation_on_connect() {
        let (bridge, dispatcher) = start();
        let connection = Connection::new(dispatcher.clone(), Transport::WifiDirect, 0, Duration::from_secs(1));
        let gamepad = GamePad::new(dispatcher.clone(), &connection);
        connection.start().unwrap();
        gamepad.start().unwrap();

        let firmware = &keys::ROBOMASTER_GAME_PAD_FIRMWARE_VERSION;
        bridge.set_cached_value(
            firmware.sub_type(),
            format!(r#"{{"key":{},"tag":0,"error":0,"value":{{"value":"01.02.0300"}}}}"#, firmware.sub_type()),
        );
        push_bool(&bridge, &keys::AIR_LINK_CONNECTION, true);
        push_bool(&bridge, &keys::ROBOMASTER_GAME_PAD_CONNECTION, true);
        assert!(gamepad.wait_for_connection(Duration::from_secs(2)));

        let settings = bridge
            .wait_for_sent(Duration::from_secs(2), |s| {
                s.is(EventType::SetValue, keys::ROBOMASTER_GAME_PAD_ACTIVATION_SETTINGS.sub_type())
            })
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(settings.string().unwrap()).unwrap();
        assert_eq!(body["value"]["isActivated"], true);
        assert_eq!(body["value"]["serialNumber"], "01.02.0300");
        assert!(body["value"]["activateTime"].as_i64().unwrap() > 0);

        gamepad.stop().unwrap();
        connection.stop().unwrap();
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_button_state() {
        let (bridge, dispatcher) = start();
        let connection = Connection::new(dispatcher.clone(), Transport::WifiDirect, 0, Duration::from_secs(1));
        let gamepad = GamePad::new(dispatcher.clone(), &connection);
        gamepad.start().unwrap();
        assert!(matches!(gamepad.start(), Err(ClientError::AlreadyStarted)));
        assert!(!gamepad.c1_pressed());

        // 按钮值既可能是裸布尔也可能是包装布尔
        push(&bridge, &keys::ROBOMASTER_GAME_PAD_C1, "true");
        push(&bridge, &keys::ROBOMASTER_GAME_PAD_FIRE, r#"{"value":true}"#);
        assert!(wait_until(|| gamepad.c1_pressed() && gamepad.fire_pressed()));
        assert!(!gamepad.c2_pressed());
        assert!(!gamepad.fn_pressed());

        push(&bridge, &keys::ROBOMASTER_GAME_PAD_C1, "false");
        assert!(wait_until(|| !gamepad.c1_pressed()));

        gamepad.stop().unwrap();
        assert!(matches!(gamepad.stop(), Err(ClientError::NotStarted)));
        dispatcher.stop().unwrap();
    }
}
