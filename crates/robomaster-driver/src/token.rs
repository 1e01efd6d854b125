//! 令牌与请求编号生成

use std::sync::atomic::{AtomicU64, Ordering};

/// 单调递增、永不返回 0 的编号生成器
///
/// 编号落在 `mask` 范围内，回绕时跳过 0。
#[derive(Debug)]
pub struct TokenGenerator {
    next: AtomicU64,
    mask: u64,
}

impl TokenGenerator {
    /// 完整 64 位（订阅令牌）
    pub const fn new() -> Self {
        Self::with_mask(u64::MAX)
    }

    /// 56 位（请求编号，与标签的数据类型提示共用 64 位）
    pub const fn request_ids() -> Self {
        Self::with_mask(0x00FF_FFFF_FFFF_FFFF)
    }

    pub const fn with_mask(mask: u64) -> Self {
        Self {
            next: AtomicU64::new(1),
            mask,
        }
    }

    pub fn next(&self) -> u64 {
        loop {
            let id = self.next.fetch_add(1, Ordering::Relaxed) & self.mask;
            if id != 0 {
                return id;
            }
        }
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_and_non_zero() {
        let generator = TokenGenerator::new();
        let ids: HashSet<_> = (0..1000).map(|_| generator.next()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(!ids.contains(&0));
    }

    #[test]
    fn test_wraparound_skips_zero() {
        let generator = TokenGenerator::with_mask(0x3);
        let ids: Vec<_> = (0..6).map(|_| generator.next()).collect();
        assert_eq!(ids, vec![1, 2, 3, 1, 2, 3]);
    }

    proptest! {
        /// 任意起点附近都不会产生 0
        #[test]
        fn prop_never_zero(start in any::<u64>(), count in 1usize..64) {
            let generator = TokenGenerator {
                next: AtomicU64::new(start),
                mask: 0x00FF_FFFF_FFFF_FFFF,
            };
            for _ in 0..count {
                prop_assert_ne!(generator.next(), 0);
            }
        }
    }
}
