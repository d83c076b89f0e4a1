//! The Poisson distribution: its probability mass function and an inversion sampler.

use thiserror::Error;
use tinyrand::Rand;

use crate::random::random_f64;

/// Largest rate sampled in a single inversion. Larger rates are split into chunks and their draws
/// summed, keeping `e^-λ` well clear of underflow.
const MAX_CHUNK_LAMBDA: f64 = 30.0;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("rate {0} must be a finite, non-negative number")]
pub struct InvalidRate(pub f64);

pub fn validate_rate(lambda: f64) -> Result<(), InvalidRate> {
    if lambda.is_finite() && lambda >= 0.0 {
        Ok(())
    } else {
        Err(InvalidRate(lambda))
    }
}

/// Probability of exactly `k` events when `lambda` events are expected.
#[inline]
pub fn univariate(k: u32, lambda: f64) -> f64 {
    if lambda == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    let ln_factorial = (2..=k).map(|i| f64::ln(i as f64)).sum::<f64>();
    f64::exp(k as f64 * lambda.ln() - lambda - ln_factorial)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}
impl Poisson {
    pub fn new(lambda: f64) -> Result<Self, InvalidRate> {
        validate_rate(lambda)?;
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Draws a single variate. A zero rate always yields zero without consuming randomness.
    pub fn sample(&self, rand: &mut impl Rand) -> u32 {
        let mut remaining = self.lambda;
        let mut events = 0;
        while remaining > 0.0 {
            let chunk = f64::min(remaining, MAX_CHUNK_LAMBDA);
            events += invert(chunk, rand);
            remaining -= chunk;
        }
        events
    }

    /// Draws `n` independent variates.
    pub fn sample_n(&self, n: usize, rand: &mut impl Rand) -> Vec<u32> {
        (0..n).map(|_| self.sample(rand)).collect()
    }
}

/// Sequential search of the cumulative distribution for the first `k` whose mass covers a uniform
/// draw, stepping the mass function with `p(k + 1) = p(k) λ / (k + 1)`.
fn invert(lambda: f64, rand: &mut impl Rand) -> u32 {
    let random = random_f64(rand);
    let mut k = 0;
    let mut prob = f64::exp(-lambda);
    let mut cumulative = prob;
    while cumulative < random && prob > 0.0 {
        k += 1;
        prob *= lambda / k as f64;
        cumulative += prob;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomSource;
    use assert_float_eq::*;
    use scoreline_testing::assert_slice_f64_relative;

    #[test]
    fn univariate_known_values() {
        assert_float_relative_eq!(0.36787944117144233, univariate(0, 1.0), 1e-12);
        assert_float_relative_eq!(0.36787944117144233, univariate(1, 1.0), 1e-12);
        assert_float_relative_eq!(0.18393972058572117, univariate(2, 1.0), 1e-12);
        assert_slice_f64_relative(
            &[0.0820849986238988, 0.205212496559747, 0.25651562069968376],
            &[univariate(0, 2.5), univariate(1, 2.5), univariate(2, 2.5)],
            1e-12,
        );
    }

    #[test]
    fn univariate_zero_rate() {
        assert_eq!(1.0, univariate(0, 0.0));
        assert_eq!(0.0, univariate(1, 0.0));
        assert_eq!(0.0, univariate(7, 0.0));
    }

    #[test]
    fn univariate_sums_to_one() {
        for lambda in [0.3, 1.5, 4.2, 60.0] {
            let sum = (0..400).map(|k| univariate(k, lambda)).sum::<f64>();
            assert_float_absolute_eq!(1.0, sum, 1e-9);
        }
    }

    #[test]
    fn new_rejects_invalid_rates() {
        assert_eq!(Err(InvalidRate(-1.0)), Poisson::new(-1.0));
        assert!(Poisson::new(f64::NAN).is_err());
        assert_eq!(Err(InvalidRate(f64::INFINITY)), Poisson::new(f64::INFINITY));
        assert_eq!(1.5, Poisson::new(1.5).unwrap().lambda());
    }

    #[test]
    fn sample_zero_rate() {
        let mut rand = RandomSource::Seeded(1).into_rand();
        let poisson = Poisson::new(0.0).unwrap();
        assert!(poisson.sample_n(1_000, &mut rand).iter().all(|&k| k == 0));
    }

    fn mean_and_variance(samples: &[u32]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().map(|&k| k as f64).sum::<f64>() / n;
        let variance = samples.iter().map(|&k| (k as f64 - mean).powi(2)).sum::<f64>() / n;
        (mean, variance)
    }

    #[test]
    fn sample_moments_converge() {
        let mut rand = RandomSource::Seeded(11).into_rand();
        let poisson = Poisson::new(1.3).unwrap();
        let (mean, variance) = mean_and_variance(&poisson.sample_n(50_000, &mut rand));
        assert_float_absolute_eq!(1.3, mean, 0.05);
        assert_float_absolute_eq!(1.3, variance, 0.1);
    }

    #[test]
    fn sample_chunked_rate() {
        let mut rand = RandomSource::Seeded(13).into_rand();
        let poisson = Poisson::new(75.0).unwrap();
        let (mean, variance) = mean_and_variance(&poisson.sample_n(20_000, &mut rand));
        assert_float_absolute_eq!(75.0, mean, 0.5);
        assert_float_absolute_eq!(75.0, variance, 5.0);
    }

    #[test]
    fn sample_frequencies_match_mass() {
        let mut rand = RandomSource::Seeded(17).into_rand();
        let poisson = Poisson::new(2.5).unwrap();
        let samples = poisson.sample_n(50_000, &mut rand);
        for k in 0..5 {
            let frequency = samples.iter().filter(|&&sample| sample == k).count() as f64 / 50_000.0;
            assert_float_absolute_eq!(univariate(k, 2.5), frequency, 0.01);
        }
    }
}
