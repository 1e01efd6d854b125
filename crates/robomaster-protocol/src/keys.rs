//! 按键注册表
//!
//! 全部 343 个已知按键，按子类型编号分组排列。
//! 常量名去掉了 `Key` 前缀；`Key::name()` 保留原始名称，便于与抓包日志对照。

use crate::key::{AccessType, Key};
use crate::value::ValueKind;

pub const PRODUCT_TEST: Key = Key::new("KeyProductTest", 1, AccessType::WRITE, ValueKind::Raw);
pub const PRODUCT_TYPE: Key = Key::new("KeyProductType", 2, AccessType::READ, ValueKind::Raw);
pub const CAMERA_CONNECTION: Key = Key::new("KeyCameraConnection", 16777217, AccessType::READ, ValueKind::Bool);
pub const CAMERA_FIRMWARE_VERSION: Key = Key::new("KeyCameraFirmwareVersion", 16777218, AccessType::READ, ValueKind::Raw);
pub const CAMERA_START_SHOOT_PHOTO: Key = Key::new("KeyCameraStartShootPhoto", 16777219, AccessType::ACTION, ValueKind::Raw);
pub const CAMERA_IS_SHOOTING_PHOTO: Key = Key::new("KeyCameraIsShootingPhoto", 16777220, AccessType::READ, ValueKind::Raw);
pub const CAMERA_PHOTO_SIZE: Key = Key::new("KeyCameraPhotoSize", 16777221, AccessType::READ_WRITE, ValueKind::Raw);
pub const CAMERA_START_RECORD_VIDEO: Key = Key::new("KeyCameraStartRecordVideo", 16777222, AccessType::ACTION, ValueKind::Void);
pub const CAMERA_STOP_RECORD_VIDEO: Key = Key::new("KeyCameraStopRecordVideo", 16777223, AccessType::ACTION, ValueKind::Void);
pub const CAMERA_IS_RECORDING: Key = Key::new("KeyCameraIsRecording", 16777224, AccessType::READ, ValueKind::Bool);
pub const CAMERA_CURRENT_RECORDING_TIME_IN_SECONDS: Key = Key::new("KeyCameraCurrentRecordingTimeInSeconds", 16777225, AccessType::READ, ValueKind::Uint64);
pub const CAMERA_VIDEO_FORMAT: Key = Key::new("KeyCameraVideoFormat", 16777226, AccessType::READ_WRITE, ValueKind::Uint64);
pub const CAMERA_MODE: Key = Key::new("KeyCameraMode", 16777227, AccessType::READ_WRITE, ValueKind::Uint64);
pub const CAMERA_DIGITAL_ZOOM_FACTOR: Key = Key::new("KeyCameraDigitalZoomFactor", 16777228, AccessType::READ_WRITE, ValueKind::Raw);
pub const CAMERA_ANTI_FLICKER: Key = Key::new("KeyCameraAntiFlicker", 16777229, AccessType::READ_WRITE, ValueKind::Raw);
pub const CAMERA_SWITCH: Key = Key::new("KeyCameraSwitch", 16777230, AccessType::ACTION, ValueKind::Raw);
pub const CAMERA_CURRENT_CAMERA_INDEX: Key = Key::new("KeyCameraCurrentCameraIndex", 16777231, AccessType::READ, ValueKind::Raw);
pub const CAMERA_HAS_MAIN_CAMERA: Key = Key::new("KeyCameraHasMainCamera", 16777232, AccessType::READ, ValueKind::Raw);
pub const CAMERA_HAS_SECONDARY_CAMERA: Key = Key::new("KeyCameraHasSecondaryCamera", 16777233, AccessType::READ, ValueKind::Raw);
pub const CAMERA_IS_TIME_SYNCED: Key = Key::new("KeyCameraIsTimeSynced", 16777243, AccessType::READ, ValueKind::Raw);
pub const CAMERA_DATE: Key = Key::new("KeyCameraDate", 16777244, AccessType::READ_WRITE, ValueKind::Raw);
pub const CAMERA_VIDEO_TRANS_RATE: Key = Key::new("KeyCameraVideoTransRate", 16777245, AccessType::WRITE, ValueKind::Float64);
pub const CAMERA_REQUEST_I_FRAME: Key = Key::new("KeyCameraRequestIFrame", 16777246, AccessType::ACTION, ValueKind::Raw);
pub const CAMERA_ANTI_LARSEN_ALGORITHM_ENABLE: Key = Key::new("KeyCameraAntiLarsenAlgorithmEnable", 16777247, AccessType::WRITE, ValueKind::Raw);
pub const CAMERA_FORMAT_SD_CARD: Key = Key::new("KeyCameraFormatSDCard", 16777234, AccessType::ACTION, ValueKind::Bool);
pub const CAMERA_SD_CARD_IS_FORMATTING: Key = Key::new("KeyCameraSDCardIsFormatting", 16777235, AccessType::READ, ValueKind::Bool);
pub const CAMERA_SD_CARD_IS_FULL: Key = Key::new("KeyCameraSDCardIsFull", 16777236, AccessType::READ, ValueKind::Bool);
pub const CAMERA_SD_CARD_HAS_ERROR: Key = Key::new("KeyCameraSDCardHasError", 16777237, AccessType::READ, ValueKind::Bool);
pub const CAMERA_SD_CARD_IS_INSERTED: Key = Key::new("KeyCameraSDCardIsInserted", 16777238, AccessType::READ, ValueKind::Bool);
pub const CAMERA_SD_CARD_TOTAL_SPACE_IN_MB: Key = Key::new("KeyCameraSDCardTotalSpaceInMB", 16777239, AccessType::READ, ValueKind::Uint64);
pub const CAMERA_SD_CARD_REMAINING_SPACE_IN_MB: Key = Key::new("KeyCameraSDCardRemaingSpaceInMB", 16777240, AccessType::READ, ValueKind::Uint64);
pub const CAMERA_SD_CARD_AVAILABLE_PHOTO_COUNT: Key = Key::new("KeyCameraSDCardAvailablePhotoCount", 16777241, AccessType::READ, ValueKind::Uint64);
pub const CAMERA_SD_CARD_AVAILABLE_RECORDING_TIME_IN_SECONDS: Key = Key::new("KeyCameraSDCardAvailableRecordingTimeInSeconds", 16777242, AccessType::READ, ValueKind::Uint64);
pub const MAIN_CONTROLLER_CONNECTION: Key = Key::new("KeyMainControllerConnection", 33554433, AccessType::READ, ValueKind::Bool);
pub const MAIN_CONTROLLER_FIRMWARE_VERSION: Key = Key::new("KeyMainControllerFirmwareVersion", 33554434, AccessType::READ, ValueKind::Raw);
pub const MAIN_CONTROLLER_LOADER_VERSION: Key = Key::new("KeyMainControllerLoaderVersion", 33554435, AccessType::READ, ValueKind::Raw);
pub const MAIN_CONTROLLER_VIRTUAL_STICK: Key = Key::new("KeyMainControllerVirtualStick", 33554436, AccessType::ACTION, ValueKind::Raw);
/// 固件中已知不可用
pub const MAIN_CONTROLLER_VIRTUAL_STICK_ENABLED: Key = Key::new("KeyMainControllerVirtualStickEnabled", 33554437, AccessType::READ_WRITE, ValueKind::Uint64);
pub const MAIN_CONTROLLER_CHASSIS_SPEED_MODE: Key = Key::new("KeyMainControllerChassisSpeedMode", 33554438, AccessType::WRITE, ValueKind::Uint64);
pub const MAIN_CONTROLLER_CHASSIS_FOLLOW_MODE: Key = Key::new("KeyMainControllerChassisFollowMode", 33554439, AccessType::WRITE, ValueKind::Uint64);
pub const MAIN_CONTROLLER_CHASSIS_CAR_CONTROL_MODE: Key = Key::new("KeyMainControllerChassisCarControlMode", 33554440, AccessType::WRITE, ValueKind::Uint64);
pub const MAIN_CONTROLLER_RECORD_STATE: Key = Key::new("KeyMainControllerRecordState", 33554441, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_GET_RECORD_SETTING: Key = Key::new("KeyMainControllerGetRecordSetting", 33554442, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SET_RECORD_SETTING: Key = Key::new("KeyMainControllerSetRecordSetting", 33554443, AccessType::READ, ValueKind::Raw);
pub const MAIN_CONTROLLER_PLAY_RECORD_ATTR: Key = Key::new("KeyMainControllerPlayRecordAttr", 33554444, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_GET_PLAY_RECORD_SETTING: Key = Key::new("KeyMainControllerGetPlayRecordSetting", 33554445, AccessType::READ, ValueKind::Raw);
pub const MAIN_CONTROLLER_SET_PLAY_RECORD_SETTING: Key = Key::new("KeyMainControllerSetPlayRecordSetting", 33554446, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_MAX_SPEED_FORWARD: Key = Key::new("KeyMainControllerMaxSpeedForward", 33554447, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_MAX_SPEED_BACKWARD: Key = Key::new("KeyMainControllerMaxSpeedBackward", 33554448, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_MAX_SPEED_LATERAL: Key = Key::new("KeyMainControllerMaxSpeedLateral", 33554449, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SLOPE_Y: Key = Key::new("KeyMainControllerSlopeY", 33554450, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SLOPE_X: Key = Key::new("KeyMainControllerSlopeX", 33554451, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SLOPE_BREAK_Y: Key = Key::new("KeyMainControllerSlopeBreakY", 33554452, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SLOPE_BREAK_X: Key = Key::new("KeyMainControllerSlopeBreakX", 33554453, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_MAX_SPEED_FORWARD_CONFIG: Key = Key::new("KeyMainControllerMaxSpeedForwardConfig", 33554454, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_MAX_SPEED_BACKWARD_CONFIG: Key = Key::new("KeyMainControllerMaxSpeedBackwardConfig", 33554455, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_MAX_SPEED_LATERAL_CONFIG: Key = Key::new("KeyMainControllerMaxSpeedLateralConfig", 33554456, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SLOP_SPEED_Y_CONFIG: Key = Key::new("KeyMainControllerSlopSpeedYConfig", 33554457, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SLOP_SPEED_X_CONFIG: Key = Key::new("KeyMainControllerSlopSpeedXConfig", 33554458, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SLOP_BREAK_Y_CONFIG: Key = Key::new("KeyMainControllerSlopBreakYConfig", 33554459, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SLOP_BREAK_X_CONFIG: Key = Key::new("KeyMainControllerSlopBreakXConfig", 33554460, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_CHASSIS_POSITION: Key = Key::new("KeyMainControllerChassisPosition", 33554461, AccessType::ACTION, ValueKind::ChassisPosition);
pub const MAIN_CONTROLLER_WHEEL_SPEED: Key = Key::new("KeyMainControllerWheelSpeed", 33554462, AccessType::WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_ARM_SERVO_ID: Key = Key::new("KeyMainControllerArmServoID", 33554477, AccessType::READ_WRITE, ValueKind::Raw);
pub const MAIN_CONTROLLER_SERVO_ADDRESSING: Key = Key::new("KeyMainControllerServoAddressing", 33554478, AccessType::ACTION, ValueKind::Raw);
pub const MAIN_CONTROLLER_GET_LINK_ACK: Key = Key::new("KeyMainControllerGetLinkAck", 83886091, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_ESC_ENCODING_STATUS: Key = Key::new("KeyRobomasterMainControllerEscEncodingStatus", 33554463, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_ESC_ENCODE_FLAG: Key = Key::new("KeyRobomasterMainControllerEscEncodeFlag", 33554464, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_START_IMU_CALIBRATION: Key = Key::new("KeyRobomasterMainControllerStartIMUCalibration", 33554465, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_STATE: Key = Key::new("KeyRobomasterMainControllerIMUCalibrationState", 33554466, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_CURR_SIDE: Key = Key::new("KeyRobomasterMainControllerIMUCalibrationCurrSide", 33554467, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_PROGRESS: Key = Key::new("KeyRobomasterMainControllerIMUCalibrationProgress", 33554468, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_FAIL_CODE: Key = Key::new("KeyRobomasterMainControllerIMUCalibrationFailCode", 33554469, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_FINISH_FLAG: Key = Key::new("KeyRobomasterMainControllerIMUCalibrationFinishFlag", 33554470, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_STOP_IMU_CALIBRATION: Key = Key::new("KeyRobomasterMainControllerStopIMUCalibration", 33554471, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_MAIN_CONTROLLER_RELATIVE_POSITION: Key = Key::new("KeyRobomasterMainControllerRelativePosition", 33554476, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_CHASSIS_MODE: Key = Key::new("KeyRobomasterChassisMode", 33554472, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_CHASSIS_SPEED: Key = Key::new("KeyRobomasterChassisSpeed", 33554473, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_OPEN_CHASSIS_SPEED_UPDATES: Key = Key::new("KeyRobomasterOpenChassisSpeedUpdates", 33554474, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_CLOSE_CHASSIS_SPEED_UPDATES: Key = Key::new("KeyRobomasterCloseChassisSpeedUpdates", 33554475, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CONNECTION: Key = Key::new("KeyRobomasterSystemConnection", 83886081, AccessType::READ, ValueKind::Bool);
pub const ROBOMASTER_SYSTEM_FIRMWARE_VERSION: Key = Key::new("KeyRobomasterSystemFirmwareVersion", 83886082, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CAN_FIRMWARE_VERSION: Key = Key::new("KeyRobomasterSystemCANFirmwareVersion", 83886083, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SCRATCH_FIRMWARE_VERSION: Key = Key::new("KeyRobomasterSystemScratchFirmwareVersion", 83886084, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SERIAL_NUMBER: Key = Key::new("KeyRobomasterSystemSerialNumber", 83886085, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_ABILITIES_ATTACK: Key = Key::new("KeyRobomasterSystemAbilitiesAttack", 83886086, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_UNDER_ABILITIES_ATTACK: Key = Key::new("KeyRobomasterSystemUnderAbilitiesAttack", 83886087, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_KILL: Key = Key::new("KeyRobomasterSystemKill", 83886088, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_REVIVE: Key = Key::new("KeyRobomasterSystemRevive", 83886089, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_GET1860_LINK_ACK: Key = Key::new("KeyRobomasterSystemGet1860LinkAck", 83886090, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_GAME_ROLE_CONFIG: Key = Key::new("KeyRobomasterSystemGameRoleConfig", 83886093, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_GAME_COLOR_CONFIG: Key = Key::new("KeyRobomasterSystemGameColorConfig", 83886094, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_GAME_START: Key = Key::new("KeyRobomasterSystemGameStart", 83886095, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_GAME_END: Key = Key::new("KeyRobomasterSystemGameEnd", 83886096, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_DEBUG_LOG: Key = Key::new("KeyRobomasterSystemDebugLog", 83886097, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SOUND_ENABLED: Key = Key::new("KeyRobomasterSystemSoundEnabled", 83886098, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_LEFT_HEADLIGHT_BRIGHTNESS: Key = Key::new("KeyRobomasterSystemLeftHeadlightBrightness", 83886099, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_RIGHT_HEADLIGHT_BRIGHTNESS: Key = Key::new("KeyRobomasterSystemRightHeadlightBrightness", 83886100, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_LED_COLOR: Key = Key::new("KeyRobomasterSystemLEDColor", 83886101, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_UPLOAD_SCRATCH: Key = Key::new("KeyRobomasterSystemUploadScratch", 83886102, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_UPLOAD_SCRATCH_BY_FTP: Key = Key::new("KeyRobomasterSystemUploadScratchByFTP", 83886103, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_UNINSTALL_SCRATCH_SKILL: Key = Key::new("KeyRobomasterSystemUninstallScratchSkill", 83886104, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_INSTALL_SCRATCH_SKILL: Key = Key::new("KeyRobomasterSystemInstallScratchSkill", 83886105, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_INQUIRY_DSP_MD5: Key = Key::new("KeyRobomasterSystemInquiryDspMd5", 83886106, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_INQUIRY_DSP_MD5_ACK: Key = Key::new("KeyRobomasterSystemInquiryDspMd5Ack", 83886107, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_INQUIRY_DSP_RESOURCE_MD5: Key = Key::new("KeyRobomasterSystemInquiryDspResourceMd5", 83886108, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_INQUIRY_DSP_RESOURCE_MD5_ACK: Key = Key::new("KeyRobomasterSystemInquiryDspResourceMd5Ack", 83886109, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_LAUNCH_SINGLE_PLAYER_CUSTOM_SKILL: Key = Key::new("KeyRobomasterSystemLaunchSinglePlayerCustomSkill", 83886110, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_STOP_SINGLE_PLAYER_CUSTOM_SKILL: Key = Key::new("KeyRobomasterSystemStopSinglePlayerCustomSkill", 83886111, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CONTROL_SCRATCH: Key = Key::new("KeyRobomasterSystemControlScratch", 83886112, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SCRATCH_STATE: Key = Key::new("KeyRobomasterSystemScratchState", 83886113, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SCRATCH_CALLBACK: Key = Key::new("KeyRobomasterSystemScratchCallback", 83886114, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_FORESIGHT_POSITION: Key = Key::new("KeyRobomasterSystemForesightPosition", 83886115, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_PULL_LOG_FILES: Key = Key::new("KeyRobomasterSystemPullLogFiles", 83886116, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CURRENT_HP: Key = Key::new("KeyRobomasterSystemCurrentHP", 83886117, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_TOTAL_HP: Key = Key::new("KeyRobomasterSystemTotalHP", 83886118, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CURRENT_BULLETS: Key = Key::new("KeyRobomasterSystemCurrentBullets", 83886119, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_TOTAL_BULLETS: Key = Key::new("KeyRobomasterSystemTotalBullets", 83886120, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_EQUIPMENTS: Key = Key::new("KeyRobomasterSystemEquipments", 83886121, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_BUFFS: Key = Key::new("KeyRobomasterSystemBuffs", 83886122, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SKILL_STATUS: Key = Key::new("KeyRobomasterSystemSkillStatus", 83886123, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_GUN_COOL_DOWN: Key = Key::new("KeyRobomasterSystemGunCoolDown", 83886124, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_GAME_CONFIG_LIST: Key = Key::new("KeyRobomasterSystemGameConfigList", 83886125, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CAR_AND_SKILL_ID: Key = Key::new("KeyRobomasterSystemCarAndSkillID", 83886126, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_APP_STATUS: Key = Key::new("KeyRobomasterSystemAppStatus", 83886127, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_LAUNCH_MULTI_PLAYER_SKILL: Key = Key::new("KeyRobomasterSystemLaunchMultiPlayerSkill", 83886128, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_STOP_MULTI_PLAYER_SKILL: Key = Key::new("KeyRobomasterSystemStopMultiPlayerSkill", 83886129, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CONFIG_SKILL_TABLE: Key = Key::new("KeyRobomasterSystemConfigSkillTable", 83886130, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_WORKING_DEVICES: Key = Key::new("KeyRobomasterSystemWorkingDevices", 83886131, AccessType::READ, ValueKind::WorkingDevices);
pub const ROBOMASTER_SYSTEM_EXCEPTIONS: Key = Key::new("KeyRobomasterSystemExceptions", 83886132, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_TASK_STATUS: Key = Key::new("KeyRobomasterSystemTaskStatus", 83886133, AccessType::READ, ValueKind::TaskStatus);
pub const ROBOMASTER_SYSTEM_RETURN_ENABLED: Key = Key::new("KeyRobomasterSystemReturnEnabled", 83886134, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SAFE_MODE: Key = Key::new("KeyRobomasterSystemSafeMode", 83886135, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SCRATCH_EXECUTE_STATE: Key = Key::new("KeyRobomasterSystemScratchExecuteState", 83886136, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_ATTITUDE_INFO: Key = Key::new("KeyRobomasterSystemAttitudeInfo", 83886137, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SIGHT_BEAD_POSITION: Key = Key::new("KeyRobomasterSystemSightBeadPosition", 83886138, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SPEAKER_LANGUAGE: Key = Key::new("KeyRobomasterSystemSpeakerLanguage", 83886139, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SPEAKER_VOLUMN: Key = Key::new("KeyRobomasterSystemSpeakerVolumn", 83886140, AccessType::READ_WRITE, ValueKind::Uint64);
pub const ROBOMASTER_SYSTEM_CHASSIS_SPEED_LEVEL: Key = Key::new("KeyRobomasterSystemChassisSpeedLevel", 83886141, AccessType::READ_WRITE, ValueKind::Uint64);
pub const ROBOMASTER_SYSTEM_IS_ENCRYPTED_FIRMWARE: Key = Key::new("KeyRobomasterSystemIsEncryptedFirmware", 83886142, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SCRATCH_ERROR_INFO: Key = Key::new("KeyRobomasterSystemScratchErrorInfo", 83886143, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SCRATCH_OUTPUT_INFO: Key = Key::new("KeyRobomasterSystemScratchOutputInfo", 83886144, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_BARREL_COOL_DOWN: Key = Key::new("KeyRobomasterSystemBarrelCoolDown", 83886145, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_RESET_BARREL_OVERHEAT: Key = Key::new("KeyRobomasterSystemResetBarrelOverheat", 83886146, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_MOBILE_ACCELER_INFO: Key = Key::new("KeyRobomasterSystemMobileAccelerInfo", 83886147, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_MOBILE_GYRO_ATTITUDE_ANGLE_INFO: Key = Key::new("KeyRobomasterSystemMobileGyroAttitudeAngleInfo", 83886148, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_MOBILE_GYRO_ROTATION_RATE_INFO: Key = Key::new("KeyRobomasterSystemMobileGyroRotationRateInfo", 83886149, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_ENABLE_ACCELERATOR_SUBSCRIBE: Key = Key::new("KeyRobomasterSystemEnableAcceleratorSubscribe", 83886150, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_ENABLE_GYRO_ROTATION_RATE_SUBSCRIBE: Key = Key::new("KeyRobomasterSystemEnableGyroRotationRateSubscribe", 83886151, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_ENABLE_GYRO_ATTITUDE_ANGLE_SUBSCRIBE: Key = Key::new("KeyRobomasterSystemEnableGyroAttitudeAngleSubscribe", 83886152, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_DEACTIVATE: Key = Key::new("KeyRobomasterSystemDeactivate", 83886153, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_FUNCTION_ENABLE: Key = Key::new("KeyRobomasterSystemFunctionEnable", 83886154, AccessType::ACTION, ValueKind::FunctionEnable);
pub const ROBOMASTER_SYSTEM_IS_GAME_RUNNING: Key = Key::new("KeyRobomasterSystemIsGameRunning", 83886155, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_IS_ACTIVATED: Key = Key::new("KeyRobomasterSystemIsActivated", 83886156, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_LOW_POWER_CONSUMPTION: Key = Key::new("KeyRobomasterSystemLowPowerConsumption", 83886157, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_ENTER_LOW_POWER_CONSUMPTION: Key = Key::new("KeyRobomasterSystemEnterLowPowerConsumption", 83886158, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_EXIT_LOW_POWER_CONSUMPTION: Key = Key::new("KeyRobomasterSystemExitLowPowerConsumption", 83886159, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_IS_LOW_POWER_CONSUMPTION: Key = Key::new("KeyRobomasterSystemIsLowPowerConsumption", 83886160, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_PUSH_FILE: Key = Key::new("KeyRobomasterSystemPushFile", 83886161, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_PLAY_SOUND: Key = Key::new("KeyRobomasterSystemPlaySound", 83886162, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_PLAY_SOUND_STATUS: Key = Key::new("KeyRobomasterSystemPlaySoundStatus", 83886163, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CUSTOM_UI_ATTRIBUTE: Key = Key::new("KeyRobomasterSystemCustomUIAttribute", 83886164, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CUSTOM_UI_FUNCTION_EVENT: Key = Key::new("KeyRobomasterSystemCustomUIFunctionEvent", 83886165, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_TOTAL_MILEAGE: Key = Key::new("KeyRobomasterSystemTotalMileage", 83886166, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_TOTAL_DRIVING_TIME: Key = Key::new("KeyRobomasterSystemTotalDrivingTime", 83886167, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_SET_PLAY_MODE: Key = Key::new("KeyRobomasterSystemSetPlayMode", 83886168, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CUSTOM_SKILL_INFO: Key = Key::new("KeyRobomasterSystemCustomSkillInfo", 83886169, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_ADDRESSING: Key = Key::new("KeyRobomasterSystemAddressing", 83886170, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_LED_LIGHT_EFFECT: Key = Key::new("KeyRobomasterSystemLEDLightEffect", 83886171, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_OPEN_IMAGE_TRANSMISSION: Key = Key::new("KeyRobomasterSystemOpenImageTransmission", 83886172, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SYSTEM_CLOSE_IMAGE_TRANSMISSION: Key = Key::new("KeyRobomasterSystemCloseImageTransmission", 83886173, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_WATER_GUN_FIRMWARE_VERSION: Key = Key::new("KeyRobomasterWaterGunFirmwareVersion", 167772161, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_WATER_GUN_WATER_GUN_FIRE: Key = Key::new("KeyRobomasterWaterGunWaterGunFire", 167772162, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_WATER_GUN_WATER_GUN_FIRE_WITH_TIMES: Key = Key::new("KeyRobomasterWaterGunWaterGunFireWithTimes", 167772163, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_WATER_GUN_SHOOT_SPEED: Key = Key::new("KeyRobomasterWaterGunShootSpeed", 167772164, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_WATER_GUN_SHOOT_FREQUENCY: Key = Key::new("KeyRobomasterWaterGunShootFrequency", 167772165, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_INFRARED_GUN_CONNECTION: Key = Key::new("KeyRobomasterInfraredGunConnection", 301989889, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_INFRARED_GUN_FIRMWARE_VERSION: Key = Key::new("KeyRobomasterInfraredGunFirmwareVersion", 301989890, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_INFRARED_GUN_INFRARED_GUN_FIRE: Key = Key::new("KeyRobomasterInfraredGunInfraredGunFire", 301989891, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_INFRARED_GUN_SHOOT_FREQUENCY: Key = Key::new("KeyRobomasterInfraredGunShootFrequency", 301989892, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_BATTERY_FIRMWARE_VERSION: Key = Key::new("KeyRobomasterBatteryFirmwareVersion", 218103809, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_BATTERY_POWER_PERCENT: Key = Key::new("KeyRobomasterBatteryPowerPercent", 218103810, AccessType::READ, ValueKind::Uint64);
pub const ROBOMASTER_BATTERY_VOLTAGE: Key = Key::new("KeyRobomasterBatteryVoltage", 218103811, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_BATTERY_TEMPERATURE: Key = Key::new("KeyRobomasterBatteryTemperature", 218103812, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_BATTERY_CURRENT: Key = Key::new("KeyRobomasterBatteryCurrent", 218103813, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_BATTERY_SHUTDOWN: Key = Key::new("KeyRobomasterBatteryShutdown", 218103814, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_BATTERY_REBOOT: Key = Key::new("KeyRobomasterBatteryReboot", 218103815, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CONNECTION: Key = Key::new("KeyRobomasterGamePadConnection", 234881025, AccessType::READ, ValueKind::Bool);
pub const ROBOMASTER_GAME_PAD_FIRMWARE_VERSION: Key = Key::new("KeyRobomasterGamePadFirmwareVersion", 234881026, AccessType::READ, ValueKind::String);
pub const ROBOMASTER_GAME_PAD_HAS_MOUSE: Key = Key::new("KeyRobomasterGamePadHasMouse", 234881027, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_HAS_KEYBOARD: Key = Key::new("KeyRobomasterGamePadHasKeyboard", 234881028, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_X: Key = Key::new("KeyRobomasterGamePadCtrlSensitivityX", 234881029, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_Y: Key = Key::new("KeyRobomasterGamePadCtrlSensitivityY", 234881030, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_YAW: Key = Key::new("KeyRobomasterGamePadCtrlSensitivityYaw", 234881031, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_YAW_SLOP: Key = Key::new("KeyRobomasterGamePadCtrlSensitivityYawSlop", 234881032, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_YAW_DEAD_ZONE: Key = Key::new("KeyRobomasterGamePadCtrlSensitivityYawDeadZone", 234881033, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_PITCH: Key = Key::new("KeyRobomasterGamePadCtrlSensitivityPitch", 234881034, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_PITCH_SLOP: Key = Key::new("KeyRobomasterGamePadCtrlSensitivityPitchSlop", 234881035, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_PITCH_DEAD_ZONE: Key = Key::new("KeyRobomasterGamePadCtrlSensitivityPitchDeadZone", 234881036, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_MOUSE_LEFT_BUTTON: Key = Key::new("KeyRobomasterGamePadMouseLeftButton", 234881037, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_MOUSE_RIGHT_BUTTON: Key = Key::new("KeyRobomasterGamePadMouseRightButton", 234881038, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_C1: Key = Key::new("KeyRobomasterGamePadC1", 234881039, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_C2: Key = Key::new("KeyRobomasterGamePadC2", 234881040, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_FIRE: Key = Key::new("KeyRobomasterGamePadFire", 234881041, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_FN: Key = Key::new("KeyRobomasterGamePadFn", 234881042, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_NO_CALIBRATE: Key = Key::new("KeyRobomasterGamePadNoCalibrate", 234881043, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_NOT_AT_MIDDLE: Key = Key::new("KeyRobomasterGamePadNotAtMiddle", 234881044, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_BATTERY_WARNING: Key = Key::new("KeyRobomasterGamePadBatteryWarning", 234881045, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_BATTERY_PERCENT: Key = Key::new("KeyRobomasterGamePadBatteryPercent", 234881046, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_GAME_PAD_ACTIVATION_SETTINGS: Key = Key::new("KeyRobomasterGamePadActivationSettings", 234881047, AccessType::READ_WRITE, ValueKind::GamePadActivationSettings);
pub const ROBOMASTER_GAME_PAD_CONTROL_ENABLED: Key = Key::new("KeyRobomasterGamePadControlEnabled", 234881048, AccessType::WRITE, ValueKind::Bool);
pub const ROBOMASTER_CLAW_CONNECTION: Key = Key::new("KeyRobomasterClawConnection", 251658241, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_CLAW_FIRMWARE_VERSION: Key = Key::new("KeyRobomasterClawFirmwareVersion", 251658242, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_CLAW_CTRL: Key = Key::new("KeyRobomasterClawCtrl", 251658243, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_CLAW_STATUS: Key = Key::new("KeyRobomasterClawStatus", 251658244, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_CLAW_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterClawInfoSubscribe", 251658245, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ENABLE_CLAW_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterEnableClawInfoSubscribe", 251658246, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_ARM_CONNECTION: Key = Key::new("KeyRobomasterArmConnection", 285212673, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ARM_CTRL: Key = Key::new("KeyRobomasterArmCtrl", 285212674, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_ARM_CTRL_MODE: Key = Key::new("KeyRobomasterArmCtrlMode", 285212675, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_ARM_CALIBRATION: Key = Key::new("KeyRobomasterArmCalibration", 285212676, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_ARM_BLOCKED_FLAG: Key = Key::new("KeyRobomasterArmBlockedFlag", 285212677, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ARM_POSITION_SUBSCRIBE: Key = Key::new("KeyRobomasterArmPositionSubscribe", 285212678, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ARM_REACH_LIMIT_X: Key = Key::new("KeyRobomasterArmReachLimitX", 285212679, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ARM_REACH_LIMIT_Y: Key = Key::new("KeyRobomasterArmReachLimitY", 285212680, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ENABLE_ARM_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterEnableArmInfoSubscribe", 285212681, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_ARM_CONTROL_MODE: Key = Key::new("KeyRobomasterArmControlMode", 285212682, AccessType::READ_WRITE, ValueKind::Raw);
pub const ROBOMASTER_TOF_CONNECTION: Key = Key::new("KeyRobomasterTOFConnection", 318767105, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_TOFLED_COLOR: Key = Key::new("KeyRobomasterTOFLEDColor", 318767106, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_TOF_ONLINE_MODULES: Key = Key::new("KeyRobomasterTOFOnlineModules", 318767107, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_TOF_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterTOFInfoSubscribe", 318767108, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ENABLE_TOF_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterEnableTOFInfoSubscribe", 318767109, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_TOF_FIRMWARE_VERSION1: Key = Key::new("KeyRobomasterTOFFirmwareVersion1", 318767110, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_TOF_FIRMWARE_VERSION2: Key = Key::new("KeyRobomasterTOFFirmwareVersion2", 318767111, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_TOF_FIRMWARE_VERSION3: Key = Key::new("KeyRobomasterTOFFirmwareVersion3", 318767112, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_TOF_FIRMWARE_VERSION4: Key = Key::new("KeyRobomasterTOFFirmwareVersion4", 318767113, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SERVO_CONNECTION: Key = Key::new("KeyRobomasterServoConnection", 335544321, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SERVO_LED_COLOR: Key = Key::new("KeyRobomasterServoLEDColor", 335544322, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SERVO_SPEED: Key = Key::new("KeyRobomasterServoSpeed", 335544323, AccessType::WRITE, ValueKind::Raw);
pub const ROBOMASTER_SERVO_ONLINE_MODULES: Key = Key::new("KeyRobomasterServoOnlineModules", 335544324, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SERVO_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterServoInfoSubscribe", 335544325, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ENABLE_SERVO_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterEnableServoInfoSubscribe", 335544326, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SERVO_FIRMWARE_VERSION1: Key = Key::new("KeyRobomasterServoFirmwareVersion1", 335544327, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SERVO_FIRMWARE_VERSION2: Key = Key::new("KeyRobomasterServoFirmwareVersion2", 335544328, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SERVO_FIRMWARE_VERSION3: Key = Key::new("KeyRobomasterServoFirmwareVersion3", 335544329, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SERVO_FIRMWARE_VERSION4: Key = Key::new("KeyRobomasterServoFirmwareVersion4", 335544330, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_CONNECTION: Key = Key::new("KeyRobomasterSensorAdapterConnection", 352321537, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_ONLINE_MODULES: Key = Key::new("KeyRobomasterSensorAdapterOnlineModules", 352321538, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterSensorAdapterInfoSubscribe", 352321539, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_ENABLE_SENSOR_ADAPTER_INFO_SUBSCRIBE: Key = Key::new("KeyRobomasterEnableSensorAdapterInfoSubscribe", 352321540, AccessType::ACTION, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION1: Key = Key::new("KeyRobomasterSensorAdapterFirmwareVersion1", 352321541, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION2: Key = Key::new("KeyRobomasterSensorAdapterFirmwareVersion2", 352321542, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION3: Key = Key::new("KeyRobomasterSensorAdapterFirmwareVersion3", 352321543, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION4: Key = Key::new("KeyRobomasterSensorAdapterFirmwareVersion4", 352321544, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION5: Key = Key::new("KeyRobomasterSensorAdapterFirmwareVersion5", 352321545, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION6: Key = Key::new("KeyRobomasterSensorAdapterFirmwareVersion6", 352321546, AccessType::READ, ValueKind::Raw);
pub const ROBOMASTER_SENSOR_ADAPTER_LED_COLOR: Key = Key::new("KeyRobomasterSensorAdapterLEDColor", 352321547, AccessType::WRITE, ValueKind::Raw);
pub const REMOTE_CONTROLLER_CONNECTION: Key = Key::new("KeyRemoteControllerConnection", 50331649, AccessType::READ, ValueKind::Raw);
pub const GIMBAL_CONNECTION: Key = Key::new("KeyGimbalConnection", 67108865, AccessType::READ, ValueKind::Bool);
pub const GIMBAL_ESC_FIRMWARE_VERSION: Key = Key::new("KeyGimbalESCFirmwareVersion", 67108866, AccessType::READ, ValueKind::Raw);
pub const GIMBAL_FIRMWARE_VERSION: Key = Key::new("KeyGimbalFirmwareVersion", 67108867, AccessType::READ, ValueKind::Raw);
pub const GIMBAL_WORK_MODE: Key = Key::new("KeyGimbalWorkMode", 67108868, AccessType::READ_WRITE, ValueKind::Uint64);
pub const GIMBAL_CONTROL_MODE: Key = Key::new("KeyGimbalControlMode", 67108869, AccessType::READ_WRITE, ValueKind::Uint64);
pub const GIMBAL_RESET_POSITION: Key = Key::new("KeyGimbalResetPosition", 67108870, AccessType::ACTION, ValueKind::Void);
pub const GIMBAL_RESET_POSITION_STATE: Key = Key::new("KeyGimbalResetPositionState", 67108871, AccessType::READ, ValueKind::Uint64);
pub const GIMBAL_CALIBRATION: Key = Key::new("KeyGimbalCalibration", 67108872, AccessType::ACTION, ValueKind::Raw);
pub const GIMBAL_SPEED_ROTATION: Key = Key::new("KeyGimbalSpeedRotation", 67108873, AccessType::ACTION, ValueKind::GimbalSpeedRotation);
pub const GIMBAL_SPEED_ROTATION_ENABLED: Key = Key::new("KeyGimbalSpeedRotationEnabled", 67108874, AccessType::WRITE_ACTION, ValueKind::Uint64);
pub const GIMBAL_ANGLE_INCREMENT_ROTATION: Key = Key::new("KeyGimbalAngleIncrementRotation", 67108875, AccessType::ACTION, ValueKind::GimbalAngleRotation);
pub const GIMBAL_ANGLE_FRONT_YAW_ROTATION: Key = Key::new("KeyGimbalAngleFrontYawRotation", 67108876, AccessType::ACTION, ValueKind::GimbalAngleRotation);
pub const GIMBAL_ANGLE_FRONT_PITCH_ROTATION: Key = Key::new("KeyGimbalAngleFrontPitchRotation", 67108877, AccessType::ACTION, ValueKind::GimbalAngleRotation);
pub const GIMBAL_ATTITUDE: Key = Key::new("KeyGimbalAttitude", 67108878, AccessType::READ, ValueKind::GimbalAttitude);
pub const GIMBAL_AUTO_CALIBRATE: Key = Key::new("KeyGimbalAutoCalibrate", 67108879, AccessType::ACTION, ValueKind::Raw);
pub const GIMBAL_CALIBRATION_STATUS: Key = Key::new("KeyGimbalCalibrationStatus", 67108880, AccessType::READ, ValueKind::Raw);
pub const GIMBAL_CALIBRATION_PROGRESS: Key = Key::new("KeyGimbalCalibrationProgress", 67108881, AccessType::READ, ValueKind::Raw);
pub const GIMBAL_OPEN_ATTITUDE_UPDATES: Key = Key::new("KeyGimbalOpenAttitudeUpdates", 67108882, AccessType::ACTION, ValueKind::Void);
pub const GIMBAL_CLOSE_ATTITUDE_UPDATES: Key = Key::new("KeyGimbalCloseAttitudeUpdates", 67108883, AccessType::ACTION, ValueKind::Void);
pub const GIMBAL_GET_LINK_ACK: Key = Key::new("KeyGimbalGetLinkAck", 83886092, AccessType::READ, ValueKind::Raw);
pub const VISION_FIRMWARE_VERSION: Key = Key::new("KeyVisionFirmwareVersion", 100663297, AccessType::READ, ValueKind::Raw);
pub const VISION_TRACKING_AUTO_LOCK_TARGET: Key = Key::new("KeyVisionTrackingAutoLockTarget", 100663298, AccessType::READ_WRITE, ValueKind::Raw);
pub const VISION_AR_PARAMETERS: Key = Key::new("KeyVisionARParameters", 100663299, AccessType::READ, ValueKind::Raw);
pub const VISION_AR_TAG_ENABLED: Key = Key::new("KeyVisionARTagEnabled", 100663300, AccessType::READ, ValueKind::Raw);
pub const VISION_DEBUG_RECT: Key = Key::new("KeyVisionDebugRect", 100663301, AccessType::READ, ValueKind::Raw);
pub const VISION_LASER_POSITION: Key = Key::new("KeyVisionLaserPosition", 100663302, AccessType::READ, ValueKind::Raw);
pub const VISION_DETECTION_ENABLE: Key = Key::new("KeyVisionDetectionEnable", 100663303, AccessType::READ_WRITE, ValueKind::Raw);
pub const VISION_MARKER_RUNNING_STATUS: Key = Key::new("KeyVisionMarkerRunningStatus", 100663304, AccessType::READ, ValueKind::Raw);
pub const VISION_TRACKING_RUNNING_STATUS: Key = Key::new("KeyVisionTrackingRunningStatus", 100663305, AccessType::READ, ValueKind::Raw);
pub const VISION_AIMBOT_RUNNING_STATUS: Key = Key::new("KeyVisionAimbotRunningStatus", 100663306, AccessType::READ, ValueKind::Raw);
pub const VISION_HEAD_AND_SHOULDER_STATUS: Key = Key::new("KeyVisionHeadAndShoulderStatus", 100663307, AccessType::READ, ValueKind::Raw);
pub const VISION_HUMAN_DETECTION_RUNNING_STATUS: Key = Key::new("KeyVisionHumanDetectionRunningStatus", 100663308, AccessType::READ, ValueKind::Raw);
pub const VISION_USER_CONFIRM: Key = Key::new("KeyVisionUserConfirm", 100663309, AccessType::ACTION, ValueKind::Raw);
pub const VISION_USER_CANCEL: Key = Key::new("KeyVisionUserCancel", 100663310, AccessType::ACTION, ValueKind::Raw);
pub const VISION_USER_TRACKING_RECT: Key = Key::new("KeyVisionUserTrackingRect", 100663311, AccessType::WRITE, ValueKind::Raw);
pub const VISION_TRACKING_DISTANCE: Key = Key::new("KeyVisionTrackingDistance", 100663312, AccessType::WRITE, ValueKind::Raw);
pub const VISION_LINE_COLOR: Key = Key::new("KeyVisionLineColor", 100663313, AccessType::WRITE, ValueKind::Raw);
pub const VISION_MARKER_COLOR: Key = Key::new("KeyVisionMarkerColor", 100663314, AccessType::WRITE, ValueKind::Raw);
pub const VISION_MARKER_ADVANCE_STATUS: Key = Key::new("KeyVisionMarkerAdvanceStatus", 100663315, AccessType::READ, ValueKind::Raw);
pub const PERCEPTION_FIRMWARE_VERSION: Key = Key::new("KeyPerceptionFirmwareVersion", 184549377, AccessType::READ, ValueKind::Raw);
pub const PERCEPTION_MARKER_ENABLE: Key = Key::new("KeyPerceptionMarkerEnable", 184549378, AccessType::READ_WRITE, ValueKind::Raw);
pub const PERCEPTION_MARKER_RESULT: Key = Key::new("KeyPerceptionMarkerResult", 184549379, AccessType::READ, ValueKind::Raw);
pub const ESC_FIRMWARE_VERSION1: Key = Key::new("KeyESCFirmwareVersion1", 201326593, AccessType::READ, ValueKind::Raw);
pub const ESC_FIRMWARE_VERSION2: Key = Key::new("KeyESCFirmwareVersion2", 201326594, AccessType::READ, ValueKind::Raw);
pub const ESC_FIRMWARE_VERSION3: Key = Key::new("KeyESCFirmwareVersion3", 201326595, AccessType::READ, ValueKind::Raw);
pub const ESC_FIRMWARE_VERSION4: Key = Key::new("KeyESCFirmwareVersion4", 201326596, AccessType::READ, ValueKind::Raw);
pub const ESC_MOTOR_INFOMATION1: Key = Key::new("KeyESCMotorInfomation1", 201326597, AccessType::READ, ValueKind::Raw);
pub const ESC_MOTOR_INFOMATION2: Key = Key::new("KeyESCMotorInfomation2", 201326598, AccessType::READ, ValueKind::Raw);
pub const ESC_MOTOR_INFOMATION3: Key = Key::new("KeyESCMotorInfomation3", 201326599, AccessType::READ, ValueKind::Raw);
pub const ESC_MOTOR_INFOMATION4: Key = Key::new("KeyESCMotorInfomation4", 201326600, AccessType::READ, ValueKind::Raw);
pub const WI_FI_LINK_FIRMWARE_VERSION: Key = Key::new("KeyWiFiLinkFirmwareVersion", 134217729, AccessType::READ, ValueKind::Raw);
pub const WI_FI_LINK_DEBUG_INFO: Key = Key::new("KeyWiFiLinkDebugInfo", 134217730, AccessType::READ, ValueKind::Raw);
pub const WI_FI_LINK_MODE: Key = Key::new("KeyWiFiLinkMode", 134217731, AccessType::READ, ValueKind::Raw);
pub const WI_FI_LINK_SSID: Key = Key::new("KeyWiFiLinkSSID", 134217732, AccessType::READ_WRITE, ValueKind::Raw);
pub const WI_FI_LINK_PASSWORD: Key = Key::new("KeyWiFiLinkPassword", 134217733, AccessType::READ_WRITE, ValueKind::Raw);
pub const WI_FI_LINK_AVAILABLE_CHANNEL_NUMBERS: Key = Key::new("KeyWiFiLinkAvailableChannelNumbers", 134217734, AccessType::READ, ValueKind::Raw);
pub const WI_FI_LINK_CURRENT_CHANNEL_NUMBER: Key = Key::new("KeyWiFiLinkCurrentChannelNumber", 134217735, AccessType::READ_WRITE, ValueKind::Raw);
pub const WI_FI_LINK_SNR: Key = Key::new("KeyWiFiLinkSNR", 134217736, AccessType::READ, ValueKind::Raw);
pub const WI_FI_LINK_SNR_PUSH_ENABLED: Key = Key::new("KeyWiFiLinkSNRPushEnabled", 134217737, AccessType::WRITE, ValueKind::Raw);
pub const WI_FI_LINK_REBOOT: Key = Key::new("KeyWiFiLinkReboot", 134217738, AccessType::ACTION, ValueKind::Raw);
pub const WI_FI_LINK_CHANNEL_SELECTION_MODE: Key = Key::new("KeyWiFiLinkChannelSelectionMode", 134217739, AccessType::READ_WRITE, ValueKind::Raw);
pub const WI_FI_LINK_INTERFERENCE: Key = Key::new("KeyWiFiLinkInterference", 134217740, AccessType::READ, ValueKind::Raw);
pub const WI_FI_LINK_DELETE_NETWORK_CONFIG: Key = Key::new("KeyWiFiLinkDeleteNetworkConfig", 134217741, AccessType::ACTION, ValueKind::Raw);
pub const SDR_LINK_SNR: Key = Key::new("KeySDRLinkSNR", 268435457, AccessType::READ, ValueKind::Raw);
pub const SDR_LINK_BANDWIDTH: Key = Key::new("KeySDRLinkBandwidth", 268435458, AccessType::READ_WRITE, ValueKind::Raw);
pub const SDR_LINK_CHANNEL_SELECTION_MODE: Key = Key::new("KeySDRLinkChannelSelectionMode", 268435459, AccessType::READ_WRITE, ValueKind::Raw);
pub const SDR_LINK_CURRENT_FREQ_POINT: Key = Key::new("KeySDRLinkCurrentFreqPoint", 268435460, AccessType::READ_WRITE, ValueKind::Raw);
pub const SDR_LINK_CURRENT_FREQ_BAND: Key = Key::new("KeySDRLinkCurrentFreqBand", 268435461, AccessType::READ_WRITE, ValueKind::Raw);
pub const SDR_LINK_IS_DUAL_FREQ_SUPPORTED: Key = Key::new("KeySDRLinkIsDualFreqSupported", 268435462, AccessType::READ, ValueKind::Raw);
pub const SDR_LINK_UPDATE_CONFIGS: Key = Key::new("KeySDRLinkUpdateConfigs", 268435463, AccessType::ACTION, ValueKind::Raw);
pub const AIR_LINK_CONNECTION: Key = Key::new("KeyAirLinkConnection", 117440513, AccessType::READ, ValueKind::Bool);
pub const AIR_LINK_SIGNAL_QUALITY: Key = Key::new("KeyAirLinkSignalQuality", 117440514, AccessType::READ, ValueKind::Uint64);
pub const AIR_LINK_COUNTRY_CODE: Key = Key::new("KeyAirLinkCountryCode", 117440515, AccessType::WRITE, ValueKind::Raw);
pub const AIR_LINK_COUNTRY_CODE_UPDATED: Key = Key::new("KeyAirLinkCountryCodeUpdated", 117440516, AccessType::READ, ValueKind::Raw);
pub const ARMOR_FIRMWARE_VERSION1: Key = Key::new("KeyArmorFirmwareVersion1", 150994945, AccessType::READ, ValueKind::Raw);
pub const ARMOR_FIRMWARE_VERSION2: Key = Key::new("KeyArmorFirmwareVersion2", 150994946, AccessType::READ, ValueKind::Raw);
pub const ARMOR_FIRMWARE_VERSION3: Key = Key::new("KeyArmorFirmwareVersion3", 150994947, AccessType::READ, ValueKind::Raw);
pub const ARMOR_FIRMWARE_VERSION4: Key = Key::new("KeyArmorFirmwareVersion4", 150994948, AccessType::READ, ValueKind::Raw);
pub const ARMOR_FIRMWARE_VERSION5: Key = Key::new("KeyArmorFirmwareVersion5", 150994949, AccessType::READ, ValueKind::Raw);
pub const ARMOR_FIRMWARE_VERSION6: Key = Key::new("KeyArmorFirmwareVersion6", 150994950, AccessType::READ, ValueKind::Raw);
pub const ARMOR_UNDER_ATTACK: Key = Key::new("KeyArmorUnderAttack", 150994951, AccessType::READ, ValueKind::Raw);
pub const ARMOR_ENTER_RESET_ID: Key = Key::new("KeyArmorEnterResetID", 150994952, AccessType::ACTION, ValueKind::Raw);
pub const ARMOR_CANCEL_RESET_ID: Key = Key::new("KeyArmorCancelResetID", 150994953, AccessType::ACTION, ValueKind::Raw);
pub const ARMOR_SKIP_CURRENT_ID: Key = Key::new("KeyArmorSkipCurrentID", 150994954, AccessType::ACTION, ValueKind::Raw);
pub const ARMOR_RESET_STATUS: Key = Key::new("KeyArmorResetStatus", 150994955, AccessType::READ, ValueKind::Raw);

/// 注册表中的全部按键（数组长度即注册表基数，编译期检查）
pub static ALL: [Key; crate::key::KEY_COUNT] = [
    PRODUCT_TEST,
    PRODUCT_TYPE,
    CAMERA_CONNECTION,
    CAMERA_FIRMWARE_VERSION,
    CAMERA_START_SHOOT_PHOTO,
    CAMERA_IS_SHOOTING_PHOTO,
    CAMERA_PHOTO_SIZE,
    CAMERA_START_RECORD_VIDEO,
    CAMERA_STOP_RECORD_VIDEO,
    CAMERA_IS_RECORDING,
    CAMERA_CURRENT_RECORDING_TIME_IN_SECONDS,
    CAMERA_VIDEO_FORMAT,
    CAMERA_MODE,
    CAMERA_DIGITAL_ZOOM_FACTOR,
    CAMERA_ANTI_FLICKER,
    CAMERA_SWITCH,
    CAMERA_CURRENT_CAMERA_INDEX,
    CAMERA_HAS_MAIN_CAMERA,
    CAMERA_HAS_SECONDARY_CAMERA,
    CAMERA_IS_TIME_SYNCED,
    CAMERA_DATE,
    CAMERA_VIDEO_TRANS_RATE,
    CAMERA_REQUEST_I_FRAME,
    CAMERA_ANTI_LARSEN_ALGORITHM_ENABLE,
    CAMERA_FORMAT_SD_CARD,
    CAMERA_SD_CARD_IS_FORMATTING,
    CAMERA_SD_CARD_IS_FULL,
    CAMERA_SD_CARD_HAS_ERROR,
    CAMERA_SD_CARD_IS_INSERTED,
    CAMERA_SD_CARD_TOTAL_SPACE_IN_MB,
    CAMERA_SD_CARD_REMAINING_SPACE_IN_MB,
    CAMERA_SD_CARD_AVAILABLE_PHOTO_COUNT,
    CAMERA_SD_CARD_AVAILABLE_RECORDING_TIME_IN_SECONDS,
    MAIN_CONTROLLER_CONNECTION,
    MAIN_CONTROLLER_FIRMWARE_VERSION,
    MAIN_CONTROLLER_LOADER_VERSION,
    MAIN_CONTROLLER_VIRTUAL_STICK,
    MAIN_CONTROLLER_VIRTUAL_STICK_ENABLED,
    MAIN_CONTROLLER_CHASSIS_SPEED_MODE,
    MAIN_CONTROLLER_CHASSIS_FOLLOW_MODE,
    MAIN_CONTROLLER_CHASSIS_CAR_CONTROL_MODE,
    MAIN_CONTROLLER_RECORD_STATE,
    MAIN_CONTROLLER_GET_RECORD_SETTING,
    MAIN_CONTROLLER_SET_RECORD_SETTING,
    MAIN_CONTROLLER_PLAY_RECORD_ATTR,
    MAIN_CONTROLLER_GET_PLAY_RECORD_SETTING,
    MAIN_CONTROLLER_SET_PLAY_RECORD_SETTING,
    MAIN_CONTROLLER_MAX_SPEED_FORWARD,
    MAIN_CONTROLLER_MAX_SPEED_BACKWARD,
    MAIN_CONTROLLER_MAX_SPEED_LATERAL,
    MAIN_CONTROLLER_SLOPE_Y,
    MAIN_CONTROLLER_SLOPE_X,
    MAIN_CONTROLLER_SLOPE_BREAK_Y,
    MAIN_CONTROLLER_SLOPE_BREAK_X,
    MAIN_CONTROLLER_MAX_SPEED_FORWARD_CONFIG,
    MAIN_CONTROLLER_MAX_SPEED_BACKWARD_CONFIG,
    MAIN_CONTROLLER_MAX_SPEED_LATERAL_CONFIG,
    MAIN_CONTROLLER_SLOP_SPEED_Y_CONFIG,
    MAIN_CONTROLLER_SLOP_SPEED_X_CONFIG,
    MAIN_CONTROLLER_SLOP_BREAK_Y_CONFIG,
    MAIN_CONTROLLER_SLOP_BREAK_X_CONFIG,
    MAIN_CONTROLLER_CHASSIS_POSITION,
    MAIN_CONTROLLER_WHEEL_SPEED,
    MAIN_CONTROLLER_ARM_SERVO_ID,
    MAIN_CONTROLLER_SERVO_ADDRESSING,
    MAIN_CONTROLLER_GET_LINK_ACK,
    ROBOMASTER_MAIN_CONTROLLER_ESC_ENCODING_STATUS,
    ROBOMASTER_MAIN_CONTROLLER_ESC_ENCODE_FLAG,
    ROBOMASTER_MAIN_CONTROLLER_START_IMU_CALIBRATION,
    ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_STATE,
    ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_CURR_SIDE,
    ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_PROGRESS,
    ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_FAIL_CODE,
    ROBOMASTER_MAIN_CONTROLLER_IMU_CALIBRATION_FINISH_FLAG,
    ROBOMASTER_MAIN_CONTROLLER_STOP_IMU_CALIBRATION,
    ROBOMASTER_MAIN_CONTROLLER_RELATIVE_POSITION,
    ROBOMASTER_CHASSIS_MODE,
    ROBOMASTER_CHASSIS_SPEED,
    ROBOMASTER_OPEN_CHASSIS_SPEED_UPDATES,
    ROBOMASTER_CLOSE_CHASSIS_SPEED_UPDATES,
    ROBOMASTER_SYSTEM_CONNECTION,
    ROBOMASTER_SYSTEM_FIRMWARE_VERSION,
    ROBOMASTER_SYSTEM_CAN_FIRMWARE_VERSION,
    ROBOMASTER_SYSTEM_SCRATCH_FIRMWARE_VERSION,
    ROBOMASTER_SYSTEM_SERIAL_NUMBER,
    ROBOMASTER_SYSTEM_ABILITIES_ATTACK,
    ROBOMASTER_SYSTEM_UNDER_ABILITIES_ATTACK,
    ROBOMASTER_SYSTEM_KILL,
    ROBOMASTER_SYSTEM_REVIVE,
    ROBOMASTER_SYSTEM_GET1860_LINK_ACK,
    ROBOMASTER_SYSTEM_GAME_ROLE_CONFIG,
    ROBOMASTER_SYSTEM_GAME_COLOR_CONFIG,
    ROBOMASTER_SYSTEM_GAME_START,
    ROBOMASTER_SYSTEM_GAME_END,
    ROBOMASTER_SYSTEM_DEBUG_LOG,
    ROBOMASTER_SYSTEM_SOUND_ENABLED,
    ROBOMASTER_SYSTEM_LEFT_HEADLIGHT_BRIGHTNESS,
    ROBOMASTER_SYSTEM_RIGHT_HEADLIGHT_BRIGHTNESS,
    ROBOMASTER_SYSTEM_LED_COLOR,
    ROBOMASTER_SYSTEM_UPLOAD_SCRATCH,
    ROBOMASTER_SYSTEM_UPLOAD_SCRATCH_BY_FTP,
    ROBOMASTER_SYSTEM_UNINSTALL_SCRATCH_SKILL,
    ROBOMASTER_SYSTEM_INSTALL_SCRATCH_SKILL,
    ROBOMASTER_SYSTEM_INQUIRY_DSP_MD5,
    ROBOMASTER_SYSTEM_INQUIRY_DSP_MD5_ACK,
    ROBOMASTER_SYSTEM_INQUIRY_DSP_RESOURCE_MD5,
    ROBOMASTER_SYSTEM_INQUIRY_DSP_RESOURCE_MD5_ACK,
    ROBOMASTER_SYSTEM_LAUNCH_SINGLE_PLAYER_CUSTOM_SKILL,
    ROBOMASTER_SYSTEM_STOP_SINGLE_PLAYER_CUSTOM_SKILL,
    ROBOMASTER_SYSTEM_CONTROL_SCRATCH,
    ROBOMASTER_SYSTEM_SCRATCH_STATE,
    ROBOMASTER_SYSTEM_SCRATCH_CALLBACK,
    ROBOMASTER_SYSTEM_FORESIGHT_POSITION,
    ROBOMASTER_SYSTEM_PULL_LOG_FILES,
    ROBOMASTER_SYSTEM_CURRENT_HP,
    ROBOMASTER_SYSTEM_TOTAL_HP,
    ROBOMASTER_SYSTEM_CURRENT_BULLETS,
    ROBOMASTER_SYSTEM_TOTAL_BULLETS,
    ROBOMASTER_SYSTEM_EQUIPMENTS,
    ROBOMASTER_SYSTEM_BUFFS,
    ROBOMASTER_SYSTEM_SKILL_STATUS,
    ROBOMASTER_SYSTEM_GUN_COOL_DOWN,
    ROBOMASTER_SYSTEM_GAME_CONFIG_LIST,
    ROBOMASTER_SYSTEM_CAR_AND_SKILL_ID,
    ROBOMASTER_SYSTEM_APP_STATUS,
    ROBOMASTER_SYSTEM_LAUNCH_MULTI_PLAYER_SKILL,
    ROBOMASTER_SYSTEM_STOP_MULTI_PLAYER_SKILL,
    ROBOMASTER_SYSTEM_CONFIG_SKILL_TABLE,
    ROBOMASTER_SYSTEM_WORKING_DEVICES,
    ROBOMASTER_SYSTEM_EXCEPTIONS,
    ROBOMASTER_SYSTEM_TASK_STATUS,
    ROBOMASTER_SYSTEM_RETURN_ENABLED,
    ROBOMASTER_SYSTEM_SAFE_MODE,
    ROBOMASTER_SYSTEM_SCRATCH_EXECUTE_STATE,
    ROBOMASTER_SYSTEM_ATTITUDE_INFO,
    ROBOMASTER_SYSTEM_SIGHT_BEAD_POSITION,
    ROBOMASTER_SYSTEM_SPEAKER_LANGUAGE,
    ROBOMASTER_SYSTEM_SPEAKER_VOLUMN,
    ROBOMASTER_SYSTEM_CHASSIS_SPEED_LEVEL,
    ROBOMASTER_SYSTEM_IS_ENCRYPTED_FIRMWARE,
    ROBOMASTER_SYSTEM_SCRATCH_ERROR_INFO,
    ROBOMASTER_SYSTEM_SCRATCH_OUTPUT_INFO,
    ROBOMASTER_SYSTEM_BARREL_COOL_DOWN,
    ROBOMASTER_SYSTEM_RESET_BARREL_OVERHEAT,
    ROBOMASTER_SYSTEM_MOBILE_ACCELER_INFO,
    ROBOMASTER_SYSTEM_MOBILE_GYRO_ATTITUDE_ANGLE_INFO,
    ROBOMASTER_SYSTEM_MOBILE_GYRO_ROTATION_RATE_INFO,
    ROBOMASTER_SYSTEM_ENABLE_ACCELERATOR_SUBSCRIBE,
    ROBOMASTER_SYSTEM_ENABLE_GYRO_ROTATION_RATE_SUBSCRIBE,
    ROBOMASTER_SYSTEM_ENABLE_GYRO_ATTITUDE_ANGLE_SUBSCRIBE,
    ROBOMASTER_SYSTEM_DEACTIVATE,
    ROBOMASTER_SYSTEM_FUNCTION_ENABLE,
    ROBOMASTER_SYSTEM_IS_GAME_RUNNING,
    ROBOMASTER_SYSTEM_IS_ACTIVATED,
    ROBOMASTER_SYSTEM_LOW_POWER_CONSUMPTION,
    ROBOMASTER_SYSTEM_ENTER_LOW_POWER_CONSUMPTION,
    ROBOMASTER_SYSTEM_EXIT_LOW_POWER_CONSUMPTION,
    ROBOMASTER_SYSTEM_IS_LOW_POWER_CONSUMPTION,
    ROBOMASTER_SYSTEM_PUSH_FILE,
    ROBOMASTER_SYSTEM_PLAY_SOUND,
    ROBOMASTER_SYSTEM_PLAY_SOUND_STATUS,
    ROBOMASTER_SYSTEM_CUSTOM_UI_ATTRIBUTE,
    ROBOMASTER_SYSTEM_CUSTOM_UI_FUNCTION_EVENT,
    ROBOMASTER_SYSTEM_TOTAL_MILEAGE,
    ROBOMASTER_SYSTEM_TOTAL_DRIVING_TIME,
    ROBOMASTER_SYSTEM_SET_PLAY_MODE,
    ROBOMASTER_SYSTEM_CUSTOM_SKILL_INFO,
    ROBOMASTER_SYSTEM_ADDRESSING,
    ROBOMASTER_SYSTEM_LED_LIGHT_EFFECT,
    ROBOMASTER_SYSTEM_OPEN_IMAGE_TRANSMISSION,
    ROBOMASTER_SYSTEM_CLOSE_IMAGE_TRANSMISSION,
    ROBOMASTER_WATER_GUN_FIRMWARE_VERSION,
    ROBOMASTER_WATER_GUN_WATER_GUN_FIRE,
    ROBOMASTER_WATER_GUN_WATER_GUN_FIRE_WITH_TIMES,
    ROBOMASTER_WATER_GUN_SHOOT_SPEED,
    ROBOMASTER_WATER_GUN_SHOOT_FREQUENCY,
    ROBOMASTER_INFRARED_GUN_CONNECTION,
    ROBOMASTER_INFRARED_GUN_FIRMWARE_VERSION,
    ROBOMASTER_INFRARED_GUN_INFRARED_GUN_FIRE,
    ROBOMASTER_INFRARED_GUN_SHOOT_FREQUENCY,
    ROBOMASTER_BATTERY_FIRMWARE_VERSION,
    ROBOMASTER_BATTERY_POWER_PERCENT,
    ROBOMASTER_BATTERY_VOLTAGE,
    ROBOMASTER_BATTERY_TEMPERATURE,
    ROBOMASTER_BATTERY_CURRENT,
    ROBOMASTER_BATTERY_SHUTDOWN,
    ROBOMASTER_BATTERY_REBOOT,
    ROBOMASTER_GAME_PAD_CONNECTION,
    ROBOMASTER_GAME_PAD_FIRMWARE_VERSION,
    ROBOMASTER_GAME_PAD_HAS_MOUSE,
    ROBOMASTER_GAME_PAD_HAS_KEYBOARD,
    ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_X,
    ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_Y,
    ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_YAW,
    ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_YAW_SLOP,
    ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_YAW_DEAD_ZONE,
    ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_PITCH,
    ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_PITCH_SLOP,
    ROBOMASTER_GAME_PAD_CTRL_SENSITIVITY_PITCH_DEAD_ZONE,
    ROBOMASTER_GAME_PAD_MOUSE_LEFT_BUTTON,
    ROBOMASTER_GAME_PAD_MOUSE_RIGHT_BUTTON,
    ROBOMASTER_GAME_PAD_C1,
    ROBOMASTER_GAME_PAD_C2,
    ROBOMASTER_GAME_PAD_FIRE,
    ROBOMASTER_GAME_PAD_FN,
    ROBOMASTER_GAME_PAD_NO_CALIBRATE,
    ROBOMASTER_GAME_PAD_NOT_AT_MIDDLE,
    ROBOMASTER_GAME_PAD_BATTERY_WARNING,
    ROBOMASTER_GAME_PAD_BATTERY_PERCENT,
    ROBOMASTER_GAME_PAD_ACTIVATION_SETTINGS,
    ROBOMASTER_GAME_PAD_CONTROL_ENABLED,
    ROBOMASTER_CLAW_CONNECTION,
    ROBOMASTER_CLAW_FIRMWARE_VERSION,
    ROBOMASTER_CLAW_CTRL,
    ROBOMASTER_CLAW_STATUS,
    ROBOMASTER_CLAW_INFO_SUBSCRIBE,
    ROBOMASTER_ENABLE_CLAW_INFO_SUBSCRIBE,
    ROBOMASTER_ARM_CONNECTION,
    ROBOMASTER_ARM_CTRL,
    ROBOMASTER_ARM_CTRL_MODE,
    ROBOMASTER_ARM_CALIBRATION,
    ROBOMASTER_ARM_BLOCKED_FLAG,
    ROBOMASTER_ARM_POSITION_SUBSCRIBE,
    ROBOMASTER_ARM_REACH_LIMIT_X,
    ROBOMASTER_ARM_REACH_LIMIT_Y,
    ROBOMASTER_ENABLE_ARM_INFO_SUBSCRIBE,
    ROBOMASTER_ARM_CONTROL_MODE,
    ROBOMASTER_TOF_CONNECTION,
    ROBOMASTER_TOFLED_COLOR,
    ROBOMASTER_TOF_ONLINE_MODULES,
    ROBOMASTER_TOF_INFO_SUBSCRIBE,
    ROBOMASTER_ENABLE_TOF_INFO_SUBSCRIBE,
    ROBOMASTER_TOF_FIRMWARE_VERSION1,
    ROBOMASTER_TOF_FIRMWARE_VERSION2,
    ROBOMASTER_TOF_FIRMWARE_VERSION3,
    ROBOMASTER_TOF_FIRMWARE_VERSION4,
    ROBOMASTER_SERVO_CONNECTION,
    ROBOMASTER_SERVO_LED_COLOR,
    ROBOMASTER_SERVO_SPEED,
    ROBOMASTER_SERVO_ONLINE_MODULES,
    ROBOMASTER_SERVO_INFO_SUBSCRIBE,
    ROBOMASTER_ENABLE_SERVO_INFO_SUBSCRIBE,
    ROBOMASTER_SERVO_FIRMWARE_VERSION1,
    ROBOMASTER_SERVO_FIRMWARE_VERSION2,
    ROBOMASTER_SERVO_FIRMWARE_VERSION3,
    ROBOMASTER_SERVO_FIRMWARE_VERSION4,
    ROBOMASTER_SENSOR_ADAPTER_CONNECTION,
    ROBOMASTER_SENSOR_ADAPTER_ONLINE_MODULES,
    ROBOMASTER_SENSOR_ADAPTER_INFO_SUBSCRIBE,
    ROBOMASTER_ENABLE_SENSOR_ADAPTER_INFO_SUBSCRIBE,
    ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION1,
    ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION2,
    ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION3,
    ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION4,
    ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION5,
    ROBOMASTER_SENSOR_ADAPTER_FIRMWARE_VERSION6,
    ROBOMASTER_SENSOR_ADAPTER_LED_COLOR,
    REMOTE_CONTROLLER_CONNECTION,
    GIMBAL_CONNECTION,
    GIMBAL_ESC_FIRMWARE_VERSION,
    GIMBAL_FIRMWARE_VERSION,
    GIMBAL_WORK_MODE,
    GIMBAL_CONTROL_MODE,
    GIMBAL_RESET_POSITION,
    GIMBAL_RESET_POSITION_STATE,
    GIMBAL_CALIBRATION,
    GIMBAL_SPEED_ROTATION,
    GIMBAL_SPEED_ROTATION_ENABLED,
    GIMBAL_ANGLE_INCREMENT_ROTATION,
    GIMBAL_ANGLE_FRONT_YAW_ROTATION,
    GIMBAL_ANGLE_FRONT_PITCH_ROTATION,
    GIMBAL_ATTITUDE,
    GIMBAL_AUTO_CALIBRATE,
    GIMBAL_CALIBRATION_STATUS,
    GIMBAL_CALIBRATION_PROGRESS,
    GIMBAL_OPEN_ATTITUDE_UPDATES,
    GIMBAL_CLOSE_ATTITUDE_UPDATES,
    GIMBAL_GET_LINK_ACK,
    VISION_FIRMWARE_VERSION,
    VISION_TRACKING_AUTO_LOCK_TARGET,
    VISION_AR_PARAMETERS,
    VISION_AR_TAG_ENABLED,
    VISION_DEBUG_RECT,
    VISION_LASER_POSITION,
    VISION_DETECTION_ENABLE,
    VISION_MARKER_RUNNING_STATUS,
    VISION_TRACKING_RUNNING_STATUS,
    VISION_AIMBOT_RUNNING_STATUS,
    VISION_HEAD_AND_SHOULDER_STATUS,
    VISION_HUMAN_DETECTION_RUNNING_STATUS,
    VISION_USER_CONFIRM,
    VISION_USER_CANCEL,
    VISION_USER_TRACKING_RECT,
    VISION_TRACKING_DISTANCE,
    VISION_LINE_COLOR,
    VISION_MARKER_COLOR,
    VISION_MARKER_ADVANCE_STATUS,
    PERCEPTION_FIRMWARE_VERSION,
    PERCEPTION_MARKER_ENABLE,
    PERCEPTION_MARKER_RESULT,
    ESC_FIRMWARE_VERSION1,
    ESC_FIRMWARE_VERSION2,
    ESC_FIRMWARE_VERSION3,
    ESC_FIRMWARE_VERSION4,
    ESC_MOTOR_INFOMATION1,
    ESC_MOTOR_INFOMATION2,
    ESC_MOTOR_INFOMATION3,
    ESC_MOTOR_INFOMATION4,
    WI_FI_LINK_FIRMWARE_VERSION,
    WI_FI_LINK_DEBUG_INFO,
    WI_FI_LINK_MODE,
    WI_FI_LINK_SSID,
    WI_FI_LINK_PASSWORD,
    WI_FI_LINK_AVAILABLE_CHANNEL_NUMBERS,
    WI_FI_LINK_CURRENT_CHANNEL_NUMBER,
    WI_FI_LINK_SNR,
    WI_FI_LINK_SNR_PUSH_ENABLED,
    WI_FI_LINK_REBOOT,
    WI_FI_LINK_CHANNEL_SELECTION_MODE,
    WI_FI_LINK_INTERFERENCE,
    WI_FI_LINK_DELETE_NETWORK_CONFIG,
    SDR_LINK_SNR,
    SDR_LINK_BANDWIDTH,
    SDR_LINK_CHANNEL_SELECTION_MODE,
    SDR_LINK_CURRENT_FREQ_POINT,
    SDR_LINK_CURRENT_FREQ_BAND,
    SDR_LINK_IS_DUAL_FREQ_SUPPORTED,
    SDR_LINK_UPDATE_CONFIGS,
    AIR_LINK_CONNECTION,
    AIR_LINK_SIGNAL_QUALITY,
    AIR_LINK_COUNTRY_CODE,
    AIR_LINK_COUNTRY_CODE_UPDATED,
    ARMOR_FIRMWARE_VERSION1,
    ARMOR_FIRMWARE_VERSION2,
    ARMOR_FIRMWARE_VERSION3,
    ARMOR_FIRMWARE_VERSION4,
    ARMOR_FIRMWARE_VERSION5,
    ARMOR_FIRMWARE_VERSION6,
    ARMOR_UNDER_ATTACK,
    ARMOR_ENTER_RESET_ID,
    ARMOR_CANCEL_RESET_ID,
    ARMOR_SKIP_CURRENT_ID,
    ARMOR_RESET_STATUS,
];
