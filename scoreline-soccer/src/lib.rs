//! Estimates football match outcomes from historical home and away scoring averages, simulating
//! each side's goals as independent Poisson draws.

pub mod data;
pub mod domain;
pub mod error;
pub mod print;
pub mod scoregrid;
pub mod session;
pub mod sim;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
