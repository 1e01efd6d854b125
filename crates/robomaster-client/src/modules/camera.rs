//! 相机模块：视频流订阅、拍摄参数与录像

use crate::error::ClientError;
use crate::module::{BaseModule, Module};
use crate::modules::connection::Connection;
use bytes::Bytes;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use parking_lot::Mutex;
use robomaster_driver::{Dispatcher, TokenGenerator};
use robomaster_protocol::{DataType, Event, EventType, Key, KeyResult, Value, keys};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, error, warn};

/// 视频帧宽度（像素）
pub const FRAME_WIDTH: u32 = 1280;
/// 视频帧高度（像素）
pub const FRAME_HEIGHT: u32 = 720;

/// 视频格式（线上值为 `Uint64`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u64)]
pub enum VideoFormat {
    Res720p30 = 0,
    Res1080p30 = 1,
    Res720p60 = 2,
    Res1080p60 = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u64)]
pub enum CameraMode {
    Photo = 0,
    Video = 1,
}

/// 图传码率档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoQuality {
    Normal,
    Good,
    Best,
}

impl VideoQuality {
    /// 码率（Mbps）
    pub fn bitrate(self) -> f64 {
        match self {
            VideoQuality::Normal => 2.4,
            VideoQuality::Good => 3.4,
            VideoQuality::Best => 6.0,
        }
    }
}

/// 一帧视频，按原样转交（RGB 24 位，不做解码）
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    pub data: Bytes,
}

/// 视频帧回调
pub type VideoCallback = Arc<dyn Fn(&VideoFrame) + Send + Sync>;

struct VideoState {
    tokens: TokenGenerator,
    callbacks: Mutex<BTreeMap<u64, VideoCallback>>,
}

impl VideoState {
    fn dispatch(&self, data: Bytes) {
        let frame = VideoFrame {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            data,
        };
        let callbacks: Vec<VideoCallback> = self.callbacks.lock().values().cloned().collect();
        for callback in callbacks {
            callback(&frame);
        }
    }
}

/// 相机模块
pub struct Camera {
    base: BaseModule,
    video: Arc<VideoState>,
    /// 事件类型监听令牌
    feeds: Mutex<Vec<(EventType, u64)>>,
    /// 录像时长监听令牌
    recording_token: Mutex<Option<u64>>,
    recording_seconds: Arc<AtomicU64>,
}

impl Camera {
    pub fn new(dispatcher: Dispatcher, connection: &Arc<Connection>) -> Arc<Self> {
        let connection: Weak<dyn Module> = Arc::downgrade(connection) as Weak<dyn Module>;
        let on_connection = {
            let dispatcher = dispatcher.clone();
            move |connected: bool| {
                if connected {
                    debug!("Camera connected");
                    if let Err(e) = dispatcher.send_event(Event::from_type(EventType::GetNativeTexture)) {
                        error!("GetNativeTexture not sent: {}", e);
                    }
                } else {
                    debug!("Camera disconnected");
                }
            }
        };

        Arc::new(Self {
            base: BaseModule::new(
                dispatcher,
                "Camera",
                Some(&keys::CAMERA_CONNECTION),
                Some(Box::new(on_connection)),
                vec![connection],
            ),
            video: Arc::new(VideoState {
                tokens: TokenGenerator::new(),
                callbacks: Mutex::new(BTreeMap::new()),
            }),
            feeds: Mutex::new(Vec::new()),
            recording_token: Mutex::new(None),
            recording_seconds: Arc::new(AtomicU64::new(0)),
        })
    }

    // ========================================================================
    // 视频流
    // ========================================================================

    /// 注册视频帧回调；第一个回调会开启视频流
    ///
    /// # 返回
    /// 用于 [`Camera::remove_video_callback`] 的令牌
    pub fn add_video_callback<F>(&self, callback: F) -> Result<u64, ClientError>
    where
        F: Fn(&VideoFrame) + Send + Sync + 'static,
    {
        let mut callbacks = self.video.callbacks.lock();
        let token = self.video.tokens.next();
        callbacks.insert(token, Arc::new(callback));
        if callbacks.len() == 1 {
            if let Err(e) = self.base.dispatcher().send_event(Event::from_type(EventType::StartVideo)) {
                callbacks.remove(&token);
                return Err(e.into());
            }
        }
        Ok(token)
    }

    /// 移除视频帧回调；最后一个回调移除后关闭视频流
    pub fn remove_video_callback(&self, token: u64) -> Result<(), ClientError> {
        let mut callbacks = self.video.callbacks.lock();
        if callbacks.remove(&token).is_none() {
            return Err(ClientError::invalid_argument(format!(
                "no video callback for token {token}"
            )));
        }
        if callbacks.is_empty() {
            self.base
                .dispatcher()
                .send_event(Event::from_type(EventType::StopVideo))?;
        }
        Ok(())
    }

    // ========================================================================
    // 参数
    // ========================================================================

    pub fn video_format(&self) -> Result<VideoFormat, ClientError> {
        let wire = self.read_u64(&keys::CAMERA_VIDEO_FORMAT)?;
        VideoFormat::try_from(wire)
            .map_err(|_| ClientError::invalid_argument(format!("unknown video format {wire}")))
    }

    /// 设置视频格式（只保证发出请求；视频流是否切换由机器人决定）
    pub fn set_video_format(&self, format: VideoFormat) -> Result<(), ClientError> {
        self.base
            .dispatcher()
            .set_key_value_sync(&keys::CAMERA_VIDEO_FORMAT, Value::Uint64(format.into()))?;
        Ok(())
    }

    pub fn set_video_quality(&self, quality: VideoQuality) -> Result<(), ClientError> {
        self.base.dispatcher().set_key_value_sync(
            &keys::CAMERA_VIDEO_TRANS_RATE,
            Value::Float64(quality.bitrate()),
        )?;
        Ok(())
    }

    pub fn mode(&self) -> Result<CameraMode, ClientError> {
        let wire = self.read_u64(&keys::CAMERA_MODE)?;
        CameraMode::try_from(wire)
            .map_err(|_| ClientError::invalid_argument(format!("unknown camera mode {wire}")))
    }

    pub fn set_mode(&self, mode: CameraMode) -> Result<(), ClientError> {
        self.base
            .dispatcher()
            .set_key_value_sync(&keys::CAMERA_MODE, Value::Uint64(mode.into()))?;
        Ok(())
    }

    pub fn digital_zoom_factor(&self) -> Result<u64, ClientError> {
        self.read_u64(&keys::CAMERA_DIGITAL_ZOOM_FACTOR)
    }

    pub fn set_digital_zoom_factor(&self, factor: u64) -> Result<(), ClientError> {
        self.base
            .dispatcher()
            .set_key_value_sync(&keys::CAMERA_DIGITAL_ZOOM_FACTOR, Value::Raw(json!(factor)))?;
        Ok(())
    }

    fn read_u64(&self, key: &'static Key) -> Result<u64, ClientError> {
        let result = self.base.dispatcher().get_key_value_sync(key, true)?;
        result
            .value()
            .and_then(Value::as_u64)
            .ok_or_else(|| ClientError::invalid_argument(format!("{key} reply without value")))
    }

    // ========================================================================
    // 录像
    // ========================================================================

    /// 开始录像（必要时先切换到录像模式），并跟踪已录制时长
    pub fn start_recording_video(&self) -> Result<(), ClientError> {
        let mut recording_token = self.recording_token.lock();
        if recording_token.is_some() {
            return Err(ClientError::AlreadyStarted);
        }

        if self.mode()? != CameraMode::Video {
            self.set_mode(CameraMode::Video)?;
        }
        let dispatcher = self.base.dispatcher();
        dispatcher.perform_action_for_key_sync(&keys::CAMERA_START_RECORD_VIDEO, Value::Void)?;

        self.recording_seconds.store(0, Ordering::SeqCst);
        let seconds = self.recording_seconds.clone();
        let token = dispatcher.add_key_listener(
            &keys::CAMERA_CURRENT_RECORDING_TIME_IN_SECONDS,
            move |result: &KeyResult| {
                if !result.succeeded() {
                    warn!("Recording time update failed: {}", result.error_desc());
                    return;
                }
                if let Some(value) = result.value().and_then(Value::as_u64) {
                    seconds.store(value, Ordering::SeqCst);
                }
            },
            true,
        )?;
        *recording_token = Some(token);
        Ok(())
    }

    pub fn stop_recording_video(&self) -> Result<(), ClientError> {
        let dispatcher = self.base.dispatcher();
        dispatcher.perform_action_for_key_sync(&keys::CAMERA_STOP_RECORD_VIDEO, Value::Void)?;
        if let Some(token) = self.recording_token.lock().take() {
            dispatcher.remove_key_listener(&keys::CAMERA_CURRENT_RECORDING_TIME_IN_SECONDS, token)?;
        }
        Ok(())
    }

    pub fn is_recording(&self) -> Result<bool, ClientError> {
        let result = self
            .base
            .dispatcher()
            .get_key_value_sync(&keys::CAMERA_IS_RECORDING, true)?;
        Ok(result.value().and_then(Value::as_bool).unwrap_or(false))
    }

    /// 当前录像的已录制时长
    pub fn recording_time(&self) -> Duration {
        Duration::from_secs(self.recording_seconds.load(Ordering::SeqCst))
    }

    fn remove_feeds(&self) -> Result<(), ClientError> {
        let feeds = std::mem::take(&mut *self.feeds.lock());
        let mut first_error = None;
        for (event_type, token) in feeds {
            if let Err(e) = self
                .base
                .dispatcher()
                .remove_event_type_listener(event_type, token)
            {
                warn!(%event_type, "Feed listener not removed: {}", e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl Module for Camera {
    fn name(&self) -> &'static str {
        self.base.name()
    }

    fn start(&self) -> Result<(), ClientError> {
        let dispatcher = self.base.dispatcher();
        {
            let mut feeds = self.feeds.lock();
            if !feeds.is_empty() {
                return Err(ClientError::AlreadyStarted);
            }
            let texture = dispatcher.add_event_type_listener(
                EventType::GetNativeTexture,
                |_event: Event, data: Bytes, data_type: DataType| {
                    debug!(len = data.len(), ?data_type, "Native texture");
                },
            );
            let speed = dispatcher.add_event_type_listener(
                EventType::VideoTransferSpeed,
                |_event: Event, data: Bytes, data_type: DataType| {
                    debug!(len = data.len(), ?data_type, "Video transfer speed");
                },
            );
            let video = self.video.clone();
            let frames = dispatcher.add_event_type_listener(
                EventType::VideoDataRecv,
                move |_event: Event, data: Bytes, _data_type: DataType| video.dispatch(data),
            );
            feeds.extend([
                (EventType::GetNativeTexture, texture),
                (EventType::VideoTransferSpeed, speed),
                (EventType::VideoDataRecv, frames),
            ]);
        }

        if let Err(e) = self.base.start() {
            let _ = self.remove_feeds();
            return Err(e);
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), ClientError> {
        let had_callbacks = {
            let mut callbacks = self.video.callbacks.lock();
            let had = !callbacks.is_empty();
            callbacks.clear();
            had
        };
        let mut first_error: Option<ClientError> = None;
        if had_callbacks {
            if let Err(e) = self
                .base
                .dispatcher()
                .send_event(Event::from_type(EventType::StopVideo))
            {
                warn!("StopVideo not sent: {}", e);
                first_error.get_or_insert(e.into());
            }
        }
        if let Some(token) = self.recording_token.lock().take() {
            let _ = self
                .base
                .dispatcher()
                .remove_key_listener(&keys::CAMERA_CURRENT_RECORDING_TIME_IN_SECONDS, token);
        }
        if let Err(e) = self.remove_feeds() {
            first_error.get_or_insert(e);
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
    use crate::config::Transport;
    use crate::module::testing::{push, push_bool, start};
    use crossbeam_channel::unbounded;
    use serial_test::serial;

    fn camera() -> (Arc<robomaster_bridge::MockBridge>, Dispatcher, Arc<Connection>, Arc<Camera>) {
        let (bridge, dispatcher) = start();
        let connection = Connection::new(dispatcher.clone(), Transport::WifiDirect, 0, Duration::from_secs(1));
        let camera = Camera::new(dispatcher.clone(), &connection);
        (bridge, dispatcher, connection, camera)
    }

    fn set_cached(bridge: &robomaster_bridge::MockBridge, key: &Key, value: &str) {
        bridge.set_cached_value(
            key.sub_type(),
            format!(r#"{{"key":{},"tag":0,"error":0,"value":{value}}}"#, key.sub_type()),
        );
    }

    #[test]
    fn test_quality_bitrates() {
        assert_eq!(VideoQuality::Normal.bitrate(), 2.4);
        assert_eq!(VideoQuality::Good.bitrate(), 3.4);
        assert_eq!(VideoQuality::Best.bitrate(), 6.0);
        assert_eq!(u64::from(VideoFormat::Res1080p30), 1);
        assert_eq!(VideoFormat::try_from(3).unwrap(), VideoFormat::Res1080p60);
    }

    /// 测试连接后请求原生纹理
    #[test]
    #[serial]
    fn test_native_texture_on_connect() {
        let (bridge, dispatcher, connection, camera) = camera();
        connection.start().unwrap();
        camera.start().unwrap();

        push_bool(&bridge, &keys::AIR_LINK_CONNECTION, true);
        push_bool(&bridge, &keys::CAMERA_CONNECTION, true);
        assert!(camera.wait_for_connection(Duration::from_secs(2)));
        let texture = bridge.wait_for_sent(Duration::from_secs(2), |s| {
            s.code == Event::from_type(EventType::GetNativeTexture).code()
        });
        assert!(texture.is_some());

        camera.stop().unwrap();
        connection.stop().unwrap();
        dispatcher.stop().unwrap();
    }

    /// 测试视频流只在第一个回调加入、最后一个回调移除时开关
    #[test]
    #[serial]
    fn test_video_callbacks() {
        let (bridge, dispatcher, _connection, camera) = camera();
        camera.start().unwrap();
        bridge.take_sent();

        let (tx, rx) = unbounded();
        let first = camera
            .add_video_callback(move |frame: &VideoFrame| {
                let _ = tx.send((frame.width, frame.height, frame.data.clone()));
            })
            .unwrap();
        let second = camera.add_video_callback(|_frame: &VideoFrame| {}).unwrap();
        let start_video = Event::from_type(EventType::StartVideo).code();
        let stop_video = Event::from_type(EventType::StopVideo).code();
        let codes: Vec<_> = bridge.take_sent().iter().map(|s| s.code).collect();
        assert_eq!(codes, vec![start_video]);

        bridge.emit(Event::from_type(EventType::VideoDataRecv).code(), &[1, 2, 3], 0);
        let (width, height, data) = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!((width, height), (FRAME_WIDTH, FRAME_HEIGHT));
        assert_eq!(&data[..], &[1, 2, 3]);

        camera.remove_video_callback(first).unwrap();
        assert!(bridge.take_sent().is_empty());
        assert!(camera.remove_video_callback(first).is_err());
        camera.remove_video_callback(second).unwrap();
        let codes: Vec<_> = bridge.take_sent().iter().map(|s| s.code).collect();
        assert_eq!(codes, vec![stop_video]);

        // 停止时仍有回调则关闭视频流
        camera.add_video_callback(|_frame: &VideoFrame| {}).unwrap();
        bridge.take_sent();
        camera.stop().unwrap();
        let codes: Vec<_> = bridge.take_sent().iter().map(|s| s.code).collect();
        assert!(codes.contains(&stop_video));
        dispatcher.stop().unwrap();
    }

    #[test]
    #[serial]
    fn test_format_and_quality() {
        let (bridge, dispatcher, _connection, camera) = camera();
        set_cached(&bridge, &keys::CAMERA_VIDEO_FORMAT, r#"{"value":2}"#);
        assert_eq!(camera.video_format().unwrap(), VideoFormat::Res720p60);

        bridge.take_sent();
        camera.set_video_format(VideoFormat::Res1080p30).unwrap();
        camera.set_video_quality(VideoQuality::Good).unwrap();
        let sent = bridge.take_sent();
        let format = sent
            .iter()
            .find(|s| s.is(EventType::SetValue, keys::CAMERA_VIDEO_FORMAT.sub_type()))
            .unwrap();
        assert_eq!(format.string(), Some(r#"{"value":{"value":1}}"#));
        let rate = sent
            .iter()
            .find(|s| s.is(EventType::SetValue, keys::CAMERA_VIDEO_TRANS_RATE.sub_type()))
            .unwrap();
        assert_eq!(rate.string(), Some(r#"{"value":{"value":3.4}}"#));
        dispatcher.stop().unwrap();
    }

    /// 测试录像前切换模式并跟踪录制时长
    #[test]
    #[serial]
    fn test_recording() {
        let (bridge, dispatcher, _connection, camera) = camera();
        set_cached(&bridge, &keys::CAMERA_MODE, r#"{"value":0}"#);
        bridge.take_sent();

        camera.start_recording_video().unwrap();
        assert!(matches!(camera.start_recording_video(), Err(ClientError::AlreadyStarted)));
        let sent = bridge.take_sent();
        let mode = sent
            .iter()
            .position(|s| s.is(EventType::SetValue, keys::CAMERA_MODE.sub_type()))
            .unwrap();
        let record = sent
            .iter()
            .position(|s| s.is(EventType::PerformAction, keys::CAMERA_START_RECORD_VIDEO.sub_type()))
            .unwrap();
        assert!(mode < record);
        assert_eq!(sent[mode].string(), Some(r#"{"value":{"value":1}}"#));

        push(&bridge, &keys::CAMERA_CURRENT_RECORDING_TIME_IN_SECONDS, r#"{"value":12}"#);
        for _ in 0..50 {
            if camera.recording_time() == Duration::from_secs(12) {
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(camera.recording_time(), Duration::from_secs(12));

        set_cached(&bridge, &keys::CAMERA_IS_RECORDING, r#"{"value":true}"#);
        assert!(camera.is_recording().unwrap());

        camera.stop_recording_video().unwrap();
        let stop = bridge.wait_for_sent(Duration::from_secs(1), |s| {
            s.is(EventType::PerformAction, keys::CAMERA_STOP_RECORD_VIDEO.sub_type())
        });
        assert!(stop.is_some());
        dispatcher.stop().unwrap();
    }
}
