use crate::rand::Rng32;
use std::time::{SystemTime, UNIX_EPOCH};

/// Used when the clock happens to hash to zero, which xorshift can't escape
const FALLBACK_SEED: u32 = 0x9E37_79B9;

#[derive(Debug, Copy, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn from_seed(seed: u32) -> Self {
        assert!(seed != 0, "XorShift32 cannot be seeded with zero.");
        Self { state: seed }
    }

    /// Seed from the wall clock. Not reproducible across runs and not fit for cryptography.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seed = (nanos as u32) ^ ((nanos >> 32) as u32);
        log::trace!("seeding xorshift32 from clock: {seed:#010x}");

        Self::from_seed(if seed == 0 { FALLBACK_SEED } else { seed })
    }
}

impl Rng32 for XorShift32 {
    fn gen(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.state
    }
}
