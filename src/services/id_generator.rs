//! 记录 ID 生成
//!
//! 抽取器不直接调用随机数，而是由调用方注入生成器，
//! 测试中使用 [`SequentialIdGenerator`] 得到确定的 ID。

use uuid::Uuid;

/// 记录 ID 生成能力
pub trait IdGenerator {
    fn next_id(&mut self) -> u64;
}

/// 随机 ID：取 UUID v4 的高 32 位
///
/// 同一进程内重复概率可以忽略，但跨进程不保证唯一
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> u64 {
        (Uuid::new_v4().as_u128() >> 96) as u64
    }
}

/// 顺序 ID：从给定值开始逐个加一
#[derive(Debug, Clone, Copy)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdGenerator::starting_at(10);
        assert_eq!(ids.next_id(), 10);
        assert_eq!(ids.next_id(), 11);
    }

    #[test]
    fn test_random_ids_fit_in_32_bits() {
        let mut ids = RandomIdGenerator;
        for _ in 0..100 {
            assert!(ids.next_id() <= u32::MAX as u64);
        }
    }
}
