//! Randomness for round selection, doom rolls and enhance delays.

/// Source of uniform floats in `[0, 1)`. The helpers mirror `Math.random()`
/// idioms: `floor(r * len)` and `r * span + min`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}

const LCG_MUL: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

fn lcg_step(state: u64) -> u64 {
    state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC)
}

// Top 53 bits -> [0, 1)
fn unit_from_bits(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Browser entropy via `getrandom` (feature `rng`), falling back to an LCG
/// seeded from `performance.now()`.
pub struct BrowserRng {
    state: u64,
}

impl BrowserRng {
    pub fn new() -> Self {
        let now = crate::performance_now();
        Self {
            state: lcg_step(now.to_bits()),
        }
    }
}

impl Default for BrowserRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for BrowserRng {
    fn next_f64(&mut self) -> f64 {
        #[cfg(feature = "rng")]
        {
            let mut buf = [0u8; 8];
            if getrandom::getrandom(&mut buf).is_ok() {
                return unit_from_bits(u64::from_le_bytes(buf));
            }
        }
        self.state = lcg_step(self.state);
        unit_from_bits(self.state)
    }
}

/// Deterministic generator for tests and reproducible sessions.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        self.state = lcg_step(self.state);
        unit_from_bits(self.state)
    }
}
