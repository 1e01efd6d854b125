//! 广播与二维码负载使用的自反流密码
//!
//! 密钥字节从 7 开始，每个字节异或后更新：`b = (b + 7) ^ 178`。
//! 加密与解密是同一个操作。

const INITIAL_KEY: u8 = 7;

/// 原地加密/解密
pub fn apply(data: &mut [u8]) {
    let mut b = INITIAL_KEY;
    for d in data.iter_mut() {
        *d ^= b;
        b = b.wrapping_add(7) ^ 178;
    }
}

/// 返回加密/解密后的副本
pub fn ciphered(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    apply(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_key_stream_prefix() {
        // 全零输入直接暴露密钥流
        let stream = ciphered(&[0u8; 4]);
        assert_eq!(stream[0], 7);
        assert_eq!(stream[1], 14 ^ 178);
        assert_eq!(stream[2], (stream[1].wrapping_add(7)) ^ 178);
    }

    #[test]
    fn test_empty_input() {
        assert!(ciphered(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_cipher_is_involution(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(ciphered(&ciphered(&data)), data);
        }
    }
}
