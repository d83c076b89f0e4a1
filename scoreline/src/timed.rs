//! Timing of computations.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Timed<V> {
    pub value: V,
    pub elapsed: Duration,
}
impl<V> Timed<V> {
    pub fn measure(f: impl FnOnce() -> V) -> Timed<V> {
        let start_time = Instant::now();
        let value = f();
        Timed {
            value,
            elapsed: start_time.elapsed(),
        }
    }

    /// Times a fallible computation, discarding the timing if it fails.
    pub fn try_measure<E>(f: impl FnOnce() -> Result<V, E>) -> Result<Timed<V>, E> {
        let Timed { value, elapsed } = Timed::measure(f);
        value.map(|value| Timed { value, elapsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure() {
        let timed = Timed::measure(|| 6 * 7);
        assert_eq!(42, timed.value);
    }

    #[test]
    fn try_measure() {
        assert_eq!(3, Timed::try_measure(|| Ok::<_, ()>(3)).unwrap().value);
        assert_eq!(Err("boom"), Timed::<u32>::try_measure(|| Err("boom")));
    }
}
