//! Randomness source for spins and shuffles.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// A generator seeded from the browser's entropy.
///
/// Native builds get a fixed seed so behavior is reproducible.
pub fn seeded() -> StdRng {
    #[cfg(feature = "csr")]
    {
        let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits().rotate_left(17);
        StdRng::seed_from_u64(seed)
    }
    #[cfg(not(feature = "csr"))]
    {
        StdRng::seed_from_u64(0x5EED)
    }
}
