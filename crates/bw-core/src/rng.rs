//! Deterministic RNG wrapper and seed-derivation helpers.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic RNG handle owned by a single sampler.
///
/// The handle is a thin wrapper around `StdRng`. Two handles built from the same
/// seed yield the same stream, which is all the generator promises: streams are
/// not meant to match any other implementation. Independent samplers that share
/// a master seed derive their own seeds with [`derive_substream_seed`].
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a handle from a signed seed, reinterpreting its bits.
    pub fn from_signed_seed(seed: i64) -> Self {
        Self::from_seed(seed as u64)
    }

    /// Draws a uniform value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
///
/// Hashes `(master_seed, substream)` with SipHash-1-3 under fixed zero keys, so
/// the derivation is stable across platforms.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
