// lcg.rs - Linear congruential generator behind every seeded shuffle

use rand::{Error, RngCore, SeedableRng};

/// Modulus, 2^31.
pub const M: u64 = 0x8000_0000;
/// Multiplier.
pub const A: u64 = 1_103_515_245;
/// Increment.
pub const C: u64 = 12_345;

/// Raw state transition `(A * seed + C) mod M`.
///
/// The product is formed in `u64`; `A * u32::MAX` stays below `2^63`, so no
/// low-order bits are lost before the modulo.
#[inline(always)]
pub fn step(seed: u32) -> u32 {
    ((A * seed as u64 + C) % M) as u32
}

/// One draw: returns `(value, new_seed)` with `value = new_seed / M` in [0, 1).
#[inline]
pub fn next(seed: u32) -> (f64, u32) {
    let new_seed = step(seed);
    (new_seed as f64 / M as f64, new_seed)
}

/// Stateful wrapper around [`next`].
///
/// Only 31 bits of state are ever produced after the first draw, so this is
/// strictly a reproducibility tool, never a source of unpredictable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current seed; feeding it to `Lcg::new` resumes the stream.
    #[inline(always)]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        let (value, seed) = next(self.state);
        self.state = seed;
        value
    }

    /// Advance and return `floor(value * bound)`, i.e. an index in `0..bound`.
    ///
    /// Computed as `(new_seed * bound) >> 31` which is the exact floor of the
    /// real product, identical to the float form wherever that one is exact.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "gen_index needs a non-empty range");
        self.state = step(self.state);
        ((self.state as u128 * bound as u128) >> 31) as usize
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = step(self.state);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Keeps the low 32 bits, so `seed_from_u64(s as u64)` equals `Lcg::new(s)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_draw_from_seed_one() {
        let (value, seed) = next(1);
        assert_eq!(seed, 1_103_527_590);
        assert_eq!(value, 1_103_527_590.0 / 2_147_483_648.0);
    }

    #[test]
    fn large_seeds_keep_low_bits() {
        // 1103515245 * (2^32 - 1) + 12345, reduced mod 2^31
        assert_eq!(step(u32::MAX), 1_043_980_748);
        assert!(step(u32::MAX) < M as u32);
    }

    #[test]
    fn stream_matches_pure_function() {
        let mut rng = Lcg::new(1);
        let mut seed = 1;
        for _ in 0..16 {
            let (value, next_seed) = next(seed);
            assert_eq!(rng.next_f64(), value);
            assert_eq!(rng.state(), next_seed);
            seed = next_seed;
        }
        assert_eq!(Lcg::new(1).next_u32(), 1_103_527_590);
    }

    #[test]
    fn gen_index_stays_in_range() {
        let mut rng = Lcg::new(0xDEAD_BEEF);
        for bound in 1..200 {
            assert!(rng.gen_index(bound) < bound);
        }
    }

    #[test]
    fn seedable_round_trip() {
        let a = Lcg::from_seed(42u32.to_le_bytes());
        let b = Lcg::seed_from_u64(42);
        assert_eq!(a, b);
        assert_eq!(Lcg::seed_from_u64((7u64 << 32) | 42), b);
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut rng = Lcg::new(1);
        let mut buf = [0u8; 6];
        rng.fill_bytes(&mut buf);
        assert_eq!(&buf[..4], &1_103_527_590u32.to_le_bytes());
        assert_eq!(&buf[4..], &377_401_575u32.to_le_bytes()[..2]);
    }
}
