//! Identifier generation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh entity identifiers.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Produce an identifier that has never been returned before.
    fn next_id(&self) -> Uuid;
}

/// Random (version 4) UUIDs. Used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator counting up from a seed.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Start counting from `seed + 1`.
    pub fn starting_at(seed: u64) -> Self {
        Self {
            counter: AtomicU64::new(seed),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(u128::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_are_v4_and_distinct() {
        let generator = RandomIdGenerator;
        let a = generator.next_id();
        let b = generator.next_id();
        assert_ne!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let generator = SequentialIdGenerator::starting_at(41);
        assert_eq!(generator.next_id(), Uuid::from_u128(42));
        assert_eq!(generator.next_id(), Uuid::from_u128(43));
    }
}
