//! Sources of randomness for the samplers.

use std::time::{SystemTime, UNIX_EPOCH};

use tinyrand::{Rand, Seeded, Wyrand};

/// A uniformly distributed value in `[0, 1]`.
#[inline]
pub fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}

/// Where the seed of a [`Wyrand`] comes from. Production runs are seeded from the clock; tests and
/// reproducible runs supply their own seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RandomSource {
    #[default]
    Clock,
    Seeded(u64),
}
impl RandomSource {
    pub fn seed(&self) -> u64 {
        match self {
            RandomSource::Clock => clock_seed(),
            RandomSource::Seeded(seed) => *seed,
        }
    }

    pub fn into_rand(self) -> Wyrand {
        Wyrand::seed(self.seed())
    }
}

impl From<Option<u64>> for RandomSource {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            None => RandomSource::Clock,
            Some(seed) => RandomSource::Seeded(seed),
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_f64_in_unit_interval() {
        let mut rand = RandomSource::Seeded(7).into_rand();
        for _ in 0..10_000 {
            let random = random_f64(&mut rand);
            assert!((0.0..=1.0).contains(&random), "{random}");
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut first = RandomSource::Seeded(42).into_rand();
        let mut second = RandomSource::Seeded(42).into_rand();
        for _ in 0..100 {
            assert_eq!(first.next_u64(), second.next_u64());
        }
    }

    #[test]
    fn from_option() {
        assert_eq!(RandomSource::Clock, RandomSource::from(None));
        assert_eq!(RandomSource::Seeded(3), RandomSource::from(Some(3)));
        assert_eq!(3, RandomSource::Seeded(3).seed());
    }
}
