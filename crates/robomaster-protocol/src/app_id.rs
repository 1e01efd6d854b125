//! 应用 ID
//!
//! 机器人通过二维码与应用 ID 配对；广播中回显该 ID，发现端据此过滤。

use rand::Rng;

/// 接受任意应用 ID
pub const ANY_APP_ID: u64 = 0;

/// 生成随机的非零应用 ID
pub fn generate_app_id() -> u64 {
    let mut rng = rand::thread_rng();
    loop {
        let id: u64 = rng.r#gen();
        if id != ANY_APP_ID {
            return id;
        }
    }
}
