//! Random key generation for fill mode.

use std::ops::Range;

pub trait Random: Send + Sync {
    fn u32(&self, range: Range<u32>) -> u32;
}

/// `Random` backed by the thread-local `fastrand` generator.
pub struct FastrandRandom;

impl Random for FastrandRandom {
    fn u32(&self, range: Range<u32>) -> u32 {
        fastrand::u32(range)
    }
}

/// One key/value pair written by fill mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    /// The entry for key number `n`: `key-<n>` mapped to `value-<n>`.
    pub fn numbered(n: u32) -> Self {
        Self {
            key: format!("key-{}", n),
            value: format!("value-{}", n),
        }
    }

    /// Draw a fresh entry with its number in `[0, key_space)`.
    pub fn random(random: &dyn Random, key_space: u32) -> Self {
        Self::numbered(random.u32(0..key_space))
    }
}
