use std::io;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::domain::Side;

/// Malformed or missing historical data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column {0}")]
    MissingColumn(&'static str),

    #[error("line {line}: {column} must not be blank")]
    BlankTeam { line: u64, column: &'static str },

    #[error("line {line}: {column} must be a non-negative goal count, got {value}")]
    InvalidGoals {
        line: u64,
        column: &'static str,
        value: i64,
    },

    #[error("dataset has no fixtures")]
    Empty,

    #[error("{team} has no {side} fixtures")]
    NoFixtures { team: String, side: Side },
}

/// A request that cannot be simulated as given.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("{side} rate {rate} must be a finite, non-negative number")]
    Rate { side: Side, rate: f64 },

    #[error("trial count must be positive")]
    NoTrials,

    #[error("trial count {trials} outside {bounds:?}")]
    TrialsOutOfBounds {
        trials: usize,
        bounds: RangeInclusive<usize>,
    },

    #[error("{side} rate {rate} outside {bounds:?}")]
    RateOutOfBounds {
        side: Side,
        rate: f64,
        bounds: RangeInclusive<f64>,
    },

    #[error("{0} cannot play itself")]
    SameTeam(String),

    #[error("at least two teams are needed to pick a fixture")]
    TooFewTeams,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("{0}")]
    Data(#[from] DataError),

    #[error("{0}")]
    InvalidArgument(#[from] InvalidArgument),
}
