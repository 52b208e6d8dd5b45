//! A small, explicitly documented seeded PRNG used by the generator.
//!
//! spec.md §4.9/§9 requires determinism across replays of a fixed
//! `(spec, config, seed)` triple and explicitly asks for "a small
//! explicitly documented PRNG (mulberry32-equivalent)" rather than the
//! system clock or a cryptographic source, so that the exact bit
//! stream an implementation produces is a stable, auditable contract
//! rather than an incidental property of whichever general-purpose
//! algorithm a dependency happens to ship this month. `Mulberry32` is
//! implemented in full below (32-bit state, single `u64` multiply-xor
//! step) and exposed through the standard `rand_core::RngCore` trait
//! so it composes with the usual `rand::Rng` extension methods
//! (`gen_range`, `shuffle`, ...) the same way any other `rand`-family
//! source generator would.

use rand_core::RngCore;

/// Mulberry32: a 32-bit state, 32-bit output PRNG.
///
/// Not cryptographically secure; chosen purely for its tiny, fully
/// specified step function, which keeps generator output reproducible
/// byte-for-byte across toolchains and rand-crate versions.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Seeds the generator. Two instances created with the same seed
    /// produce an identical output stream.
    pub fn new(seed: u64) -> Self {
        Mulberry32 {
            state: seed as u32 ^ (seed >> 32) as u32,
        }
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut z = self.state;
        z = (z ^ (z >> 15)).wrapping_mul(z | 1);
        z ^= z.wrapping_add((z ^ (z >> 7)).wrapping_mul(z | 61));
        z ^ (z >> 14)
    }

    /// Returns a uniform `f64` in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / f64::from(u32::MAX)
    }

    /// Returns a uniform integer in `[low, high)`. Panics if `high <= low`.
    pub fn gen_range_usize(&mut self, low: usize, high: usize) -> usize {
        assert!(high > low, "gen_range_usize: empty range");
        let span = (high - low) as u64;
        low + (self.next_u32() as u64 % span) as usize
    }

    /// Returns a uniform `f64` in `[low, high)`.
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Fisher-Yates shuffle, in place.
    pub fn shuffle<E>(&mut self, items: &mut [E]) {
        let len = items.len();
        for i in (1..len).rev() {
            let j = self.gen_range_usize(0, i + 1);
            items.swap(i, j);
        }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.step() as u64;
        let lo = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(2);
        let seq_a: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = Mulberry32::new(7);
        for _ in 0..1000 {
            let v = rng.gen_range_usize(3, 9);
            assert!((3..9).contains(&v));
        }
    }
}
