//! Sport-agnostic building blocks for Poisson scoring models: the probability mass function, an
//! inversion sampler driven by a seedable [`tinyrand`] source, and tabulation of sampled counts.

pub mod histogram;
pub mod poisson;
pub mod random;
pub mod timed;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
