//! 随机数来源 - 基础设施层
//!
//! 抽题时注入使用，测试中可替换为固定种子

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// 随机下标来源
pub trait RandomSource: Send + Sync {
    /// 返回 `[0, len)` 内的下标，调用方保证 `len > 0`
    fn pick_index(&self, len: usize) -> usize;
}

/// 基于线程本地 RNG 的随机来源
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// 固定种子的随机来源，结果可复现
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            // 锁中毒时 RNG 状态仍然可用
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let left: Vec<usize> = (0..20).map(|_| a.pick_index(10)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.pick_index(10)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn indices_stay_in_range() {
        let source = ThreadRandom;
        for len in 1..50 {
            assert!(source.pick_index(len) < len);
        }
    }
}
