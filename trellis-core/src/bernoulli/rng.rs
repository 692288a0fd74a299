//! Random sources for the generators.

use std::sync::{Mutex, OnceLock, PoisonError};

use rand::{RngCore, SeedableRng, rngs::SmallRng};

static SHARED: OnceLock<Mutex<SmallRng>> = OnceLock::new();

/// Handle to the process-wide generator, seeded from OS entropy on first use.
///
/// Every handle draws from the same stream, so two generators built on
/// [`DefaultRng`] never replay each other's choices.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRng;

impl DefaultRng {
    fn with<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
        let shared = SHARED.get_or_init(|| Mutex::new(SmallRng::from_entropy()));
        // A panic mid-draw cannot leave the generator in an invalid state.
        let mut rng = shared.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl RngCore for DefaultRng {
    fn next_u32(&mut self) -> u32 {
        Self::with(|rng| rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        Self::with(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Self::with(|rng| rng.fill_bytes(dest));
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        Self::with(|rng| rng.try_fill_bytes(dest))
    }
}

/// Random source chosen by [`crate::BernoulliParams::build`]: a private
/// seeded stream when a seed was configured, the shared stream otherwise.
#[derive(Clone, Debug)]
pub enum GeneratorRng {
    /// Deterministic stream owned by one generator.
    Seeded(SmallRng),
    /// The process-wide stream.
    Shared(DefaultRng),
}

impl GeneratorRng {
    /// Picks a seeded stream for `Some(seed)` and the shared one for `None`.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Shared(DefaultRng), |seed| {
            Self::Seeded(SmallRng::seed_from_u64(seed))
        })
    }
}

impl RngCore for GeneratorRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Seeded(rng) => rng.next_u32(),
            Self::Shared(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Seeded(rng) => rng.next_u64(),
            Self::Shared(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Seeded(rng) => rng.fill_bytes(dest),
            Self::Shared(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Self::Seeded(rng) => rng.try_fill_bytes(dest),
            Self::Shared(rng) => rng.try_fill_bytes(dest),
        }
    }
}
