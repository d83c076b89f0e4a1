//! Monte Carlo simulation of a single match under independent Poisson goal counts.

use ordinalizer::Ordinal;
use serde::Serialize;
use strum::EnumCount;
use tinyrand::Rand;
use tracing::debug;

use scoreline::histogram;
use scoreline::histogram::{AlignedRow, Histogram};
use scoreline::poisson::Poisson;

use crate::domain::{Outcome, Score, Side};
use crate::error::InvalidArgument;


/// Probabilities of the three outcome classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OutcomeProbs {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}
impl OutcomeProbs {
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::HomeWin => self.home_win,
            Outcome::Draw => self.draw,
            Outcome::AwayWin => self.away_win,
        }
    }

    pub fn sum(&self) -> f64 {
        self.home_win + self.draw + self.away_win
    }

    pub fn to_array(&self) -> [f64; Outcome::COUNT] {
        [self.home_win, self.draw, self.away_win]
    }
}

impl From<[f64; Outcome::COUNT]> for OutcomeProbs {
    fn from(probs: [f64; Outcome::COUNT]) -> Self {
        Self {
            home_win: probs[Outcome::HomeWin.ordinal()],
            draw: probs[Outcome::Draw.ordinal()],
            away_win: probs[Outcome::AwayWin.ordinal()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub home_wins: usize,
    pub draws: usize,
    pub away_wins: usize,
    pub home_goals: Vec<u32>,
    pub away_goals: Vec<u32>,
}
impl SimulationResult {
    pub fn trials(&self) -> usize {
        self.home_goals.len()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::HomeWin => self.home_wins,
            Outcome::Draw => self.draws,
            Outcome::AwayWin => self.away_wins,
        }
    }

    /// Share of trials in each outcome class.
    pub fn probs(&self) -> OutcomeProbs {
        let trials = self.trials() as f64;
        OutcomeProbs {
            home_win: self.home_wins as f64 / trials,
            draw: self.draws as f64 / trials,
            away_win: self.away_wins as f64 / trials,
        }
    }

    pub fn scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.home_goals
            .iter()
            .zip(&self.away_goals)
            .map(|(&home, &away)| Score::new(home, away))
    }

    pub fn goals(&self, side: Side) -> &[u32] {
        match side {
            Side::Home => &self.home_goals,
            Side::Away => &self.away_goals,
        }
    }

    pub fn goal_distribution(&self, side: Side) -> Histogram {
        Histogram::tabulate(self.goals(side))
    }

    /// Both goal distributions over the same ascending goal values, home on the left.
    pub fn aligned_goal_distributions(&self) -> Vec<AlignedRow> {
        histogram::align(
            &self.goal_distribution(Side::Home),
            &self.goal_distribution(Side::Away),
        )
    }
}

pub(crate) fn validate_rate(side: Side, rate: f64) -> Result<Poisson, InvalidArgument> {
    Poisson::new(rate).map_err(|err| InvalidArgument::Rate { side, rate: err.0 })
}

/// Simulates `trials` matches, drawing each side's goals independently from a Poisson
/// distribution with the given mean.
pub fn simulate(
    rate_home: f64,
    rate_away: f64,
    trials: usize,
    rand: &mut impl Rand,
) -> Result<SimulationResult, InvalidArgument> {
    let home = validate_rate(Side::Home, rate_home)?;
    let away = validate_rate(Side::Away, rate_away)?;
    if trials == 0 {
        return Err(InvalidArgument::NoTrials);
    }

    let home_goals = home.sample_n(trials, rand);
    let away_goals = away.sample_n(trials, rand);
    let mut counts = [0usize; Outcome::COUNT];
    for (&home, &away) in home_goals.iter().zip(&away_goals) {
        counts[Outcome::of(home, away).ordinal()] += 1;
    }
    debug!("simulated {trials} trials at rates {rate_home:.3}:{rate_away:.3}: {counts:?}");

    Ok(SimulationResult {
        home_wins: counts[Outcome::HomeWin.ordinal()],
        draws: counts[Outcome::Draw.ordinal()],
        away_wins: counts[Outcome::AwayWin.ordinal()],
        home_goals,
        away_goals,
    })
}
