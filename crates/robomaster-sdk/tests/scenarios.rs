//! 端到端场景测试
//!
//! 使用 MockBridge 模拟原生库，验证发现、按键读写、监听扇出与模块启动超时。

use crossbeam_channel::unbounded;
use robomaster_sdk::bridge::{MockBridge, SentEvent};
use robomaster_sdk::protocol::broadcast::ack_payload;
use robomaster_sdk::protocol::{Broadcast, ConnectionOp, GimbalAttitude};
use robomaster_sdk::{
    Client, ClientConfig, ClientError, Dispatcher, DispatcherConfig, DriverError, Event, EventType,
    Finder, KeyResult, Modules, Transport, Value, keys,
};
use serial_test::serial;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const ROBOT_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 42);

fn started_dispatcher(bridge: &Arc<MockBridge>) -> Dispatcher {
    let dispatcher = Dispatcher::new(
        bridge.clone(),
        DispatcherConfig {
            request_timeout: Duration::from_secs(2),
            ..DispatcherConfig::default()
        },
    );
    dispatcher.start().unwrap();
    bridge.take_sent();
    dispatcher
}

fn connection_ops(sent: &[SentEvent]) -> Vec<&SentEvent> {
    sent.iter()
        .filter(|s| s.event().is_some_and(|e| e.event_type() == EventType::Connection))
        .collect()
}

/// 发现：校验广播、回送确认，然后按顺序完成会话握手
#[test]
#[serial]
fn test_discovery_happy_path() {
    let app_id = 0x1122_3344_5566_7788;
    let datagram = Broadcast {
        is_pairing: false,
        source_ip: ROBOT_IP,
        mac: [0x60, 0x60, 0x1f, 0xaa, 0xbb, 0xcc],
        app_id,
    }
    .encode();
    assert_eq!(datagram.len(), 24);

    let finder = Finder::bind(0, 0).unwrap();
    let found = finder.accept(&datagram, IpAddr::V4(ROBOT_IP)).unwrap();
    assert_eq!(found.source_ip, ROBOT_IP);
    assert_eq!(found.app_id, app_id);
    assert!(!found.is_pairing);

    // 确认负载为小端 app_id
    assert_eq!(ack_payload(app_id), [0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    let robot = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    robot.set_read_timeout(Some(Duration::from_secs(2))).unwrap();
    Finder::send_ack_to(robot.local_addr().unwrap(), found.app_id);
    let mut buf = [0u8; 16];
    let (len, _) = robot.recv_from(&mut buf).unwrap();
    assert_eq!(&buf[..len], &ack_payload(app_id));

    let bridge = Arc::new(MockBridge::new());
    let dispatcher = started_dispatcher(&bridge);
    dispatcher.connect(found.source_ip).unwrap();

    let sent = bridge.take_sent();
    let ops = connection_ops(&sent);
    assert_eq!(ops.len(), 4);
    assert_eq!(ops[0].code, ConnectionOp::Close.event().code());
    assert_eq!(ops[1].code, ConnectionOp::SetIp.event().code());
    assert_eq!(ops[1].string(), Some("192.168.1.42"));
    assert_eq!(ops[2].code, ConnectionOp::SetPort.event().code());
    assert_eq!(ops[2].number(), Some(10607));
    assert_eq!(ops[3].code, ConnectionOp::Open.event().code());
    dispatcher.stop().unwrap();
}

/// 带缓存的同步读取不发出请求
#[test]
#[serial]
fn test_sync_get_with_cached_value() {
    let bridge = Arc::new(MockBridge::new());
    bridge.set_cached_value(
        117440514,
        r#"{"key":117440514,"tag":0,"error":0,"value":{"value":42}}"#,
    );
    let dispatcher = started_dispatcher(&bridge);

    let result = dispatcher
        .get_key_value_sync(&keys::AIR_LINK_SIGNAL_QUALITY, true)
        .unwrap();
    assert_eq!(result.value(), Some(&Value::Uint64(42)));
    assert!(
        bridge
            .take_sent()
            .iter()
            .all(|s| !s.is(EventType::GetValue, keys::AIR_LINK_SIGNAL_QUALITY.sub_type()))
    );
    dispatcher.stop().unwrap();
}

/// 同步写入在收到同标签应答后返回
#[test]
#[serial]
fn test_sync_set_with_matching_reply() {
    let bridge = Arc::new(MockBridge::new());
    let dispatcher = started_dispatcher(&bridge);

    let caller = {
        let dispatcher = dispatcher.clone();
        thread::spawn(move || {
            dispatcher.set_key_value_sync(&keys::CAMERA_VIDEO_FORMAT, Value::Uint64(1))
        })
    };

    let set = bridge
        .wait_for_sent(Duration::from_secs(2), |s| {
            s.is(EventType::SetValue, 16777226)
        })
        .unwrap();
    assert_eq!(set.string(), Some(r#"{"value":{"value":1}}"#));
    assert_ne!(set.tag, 0);

    // 不匹配的标签被忽略
    let unrelated = set.tag.wrapping_add(1000);
    bridge.emit(
        set.code,
        format!(r#"{{"key":16777226,"tag":{unrelated},"error":0,"value":{{}}}}"#).as_bytes(),
        unrelated,
    );
    bridge.emit(
        set.code,
        format!(r#"{{"key":16777226,"tag":{},"error":0,"value":{{}}}}"#, set.tag).as_bytes(),
        set.tag,
    );

    let result = caller.join().unwrap().unwrap();
    assert!(result.succeeded());
    let others: Vec<_> = bridge
        .take_sent()
        .into_iter()
        .filter(|s| s.is(EventType::SetValue, 16777226))
        .collect();
    assert!(others.is_empty());
    dispatcher.stop().unwrap();
}

/// 形状不符的值在发出事件前被拒绝
#[test]
#[serial]
fn test_wrong_shape_rejection() {
    let bridge = Arc::new(MockBridge::new());
    let dispatcher = started_dispatcher(&bridge);

    let err = dispatcher
        .set_key_value_sync(&keys::CAMERA_MODE, Value::Bool(true))
        .unwrap_err();
    assert!(matches!(err, DriverError::WrongValueShape { .. }));
    assert!(bridge.take_sent().is_empty());
    dispatcher.stop().unwrap();
}

/// 一次推送扇出到全部监听器，且只发送一次开始监听
#[test]
#[serial]
fn test_listener_fan_out() {
    let bridge = Arc::new(MockBridge::new());
    let dispatcher = started_dispatcher(&bridge);
    let key = &keys::GIMBAL_ATTITUDE;

    let (tx, rx) = unbounded();
    let mut tokens = Vec::new();
    for _ in 0..3 {
        let tx = tx.clone();
        let token = dispatcher
            .add_key_listener(
                key,
                move |result: &KeyResult| {
                    let _ = tx.send(result.value().cloned());
                },
                false,
            )
            .unwrap();
        tokens.push(token);
    }

    let listening: Vec<_> = bridge
        .take_sent()
        .into_iter()
        .filter(|s| s.is(EventType::StartListening, key.sub_type()))
        .collect();
    assert_eq!(listening.len(), 1);

    let push = format!(
        r#"{{"key":{},"tag":0,"error":0,"value":{{"pitch":1.0,"yaw":2.0,"roll":3.0,"yawOpposite":0.0,"pitchSpeed":0.0,"yawSpeed":0.0,"rollSpeed":0.0}}}}"#,
        key.sub_type()
    );
    bridge.emit(
        Event::new(EventType::StartListening, key.sub_type()).code(),
        push.as_bytes(),
        0,
    );

    let expected = GimbalAttitude {
        pitch: 1.0,
        yaw: 2.0,
        roll: 3.0,
        ..GimbalAttitude::default()
    };
    for _ in 0..3 {
        let value = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(value, Some(Value::GimbalAttitude(expected)));
    }
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());

    for token in tokens {
        dispatcher.remove_key_listener(key, token).unwrap();
    }
    let stopped: Vec<_> = bridge
        .take_sent()
        .into_iter()
        .filter(|s| s.is(EventType::StopListening, key.sub_type()))
        .collect();
    assert_eq!(stopped.len(), 1);
    dispatcher.stop().unwrap();
}

/// 机器人连接按键始终不为真：启动超时、后续模块不启动、调度器保持运行
#[test]
#[serial]
fn test_module_start_dependency_timeout() {
    let bridge = Arc::new(MockBridge::new());
    bridge.enable_auto_reply();
    let link = keys::AIR_LINK_CONNECTION.sub_type();
    bridge.set_cached_value(
        link,
        format!(r#"{{"key":{link},"tag":0,"error":0,"value":{{"value":true}}}}"#),
    );

    let config = ClientConfig {
        transport: Transport::WifiDirect,
        modules: Modules::DEFAULT | Modules::CAMERA,
        module_start_timeout: Duration::from_millis(500),
        ..ClientConfig::default()
    };
    let client = Client::new(bridge.clone(), config).unwrap();

    let err = client.start().unwrap_err();
    assert!(matches!(err, ClientError::ConnectionTimeout { module: "Robot" }));
    assert!(client.dispatcher().is_started());
    assert!(
        bridge
            .take_sent()
            .iter()
            .all(|s| !s.is(EventType::StartListening, keys::CAMERA_CONNECTION.sub_type()))
    );

    client.stop().unwrap();
    assert!(!client.dispatcher().is_started());
    assert!(!client.is_started());
}
