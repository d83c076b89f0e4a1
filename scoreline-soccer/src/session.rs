//! Caller-owned application state: which teams are selected, what the user has dialled in, and the
//! bounds those controls must respect. Nothing here is global; front ends hold these values and
//! pass them in.

use std::ops::RangeInclusive;

use serde::Serialize;
use thiserror::Error;
use tinyrand::Rand;
use tracing::debug;

use crate::data::Dataset;
use crate::domain::Side;
use crate::error::{FixtureError, InvalidArgument};
use crate::scoregrid::exact_outcome_probs;
use crate::sim::{simulate, OutcomeProbs, SimulationResult};

pub const DEFAULT_TRIALS: usize = 10_000;
pub const TRIAL_BOUNDS: RangeInclusive<usize> = 100..=50_000;
pub const RATE_BOUNDS: RangeInclusive<f64> = 0.0..=5.0;

/// Unvalidated bounds on the user's controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub trials: RangeInclusive<usize>,
    pub rates: RangeInclusive<f64>,
    pub allow_same_team: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            trials: TRIAL_BOUNDS,
            rates: RATE_BOUNDS,
            allow_same_team: false,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid config: {0}")]
pub struct InvalidConfig(String);

/// Bounds that have been checked for consistency. Obtained from a [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    trials: RangeInclusive<usize>,
    rates: RangeInclusive<f64>,
    allow_same_team: bool,
}
impl Bounds {
    pub fn trials(&self) -> &RangeInclusive<usize> {
        &self.trials
    }

    pub fn rates(&self) -> &RangeInclusive<f64> {
        &self.rates
    }

    pub fn allow_same_team(&self) -> bool {
        self.allow_same_team
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            trials: TRIAL_BOUNDS,
            rates: RATE_BOUNDS,
            allow_same_team: false,
        }
    }
}

impl TryFrom<Config> for Bounds {
    type Error = InvalidConfig;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let Config {
            trials,
            rates,
            allow_same_team,
        } = config;
        if *trials.start() == 0 || trials.is_empty() {
            return Err(InvalidConfig(format!("trial bounds {trials:?} must be a non-empty range of positive counts")));
        }
        if !rates.start().is_finite() || !rates.end().is_finite() || *rates.start() < 0.0 || rates.is_empty() {
            return Err(InvalidConfig(format!("rate bounds {rates:?} must be a non-empty, finite, non-negative range")));
        }
        Ok(Self {
            trials,
            rates,
            allow_same_team,
        })
    }
}

/// The selected pair of teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub home: String,
    pub away: String,
}
impl Selection {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    /// Two distinct teams drawn at random.
    pub fn random(teams: &[&str], rand: &mut impl Rand) -> Result<Self, InvalidArgument> {
        if teams.len() < 2 {
            return Err(InvalidArgument::TooFewTeams);
        }
        let home = rand.next_lim_usize(teams.len());
        let mut away = rand.next_lim_usize(teams.len() - 1);
        if away >= home {
            away += 1;
        }
        Ok(Self::new(teams[home], teams[away]))
    }

    /// Fills in whichever side was not chosen with a random team other than the chosen one.
    pub fn complete(
        home: Option<String>,
        away: Option<String>,
        teams: &[&str],
        rand: &mut impl Rand,
    ) -> Result<Self, InvalidArgument> {
        match (home, away) {
            (Some(home), Some(away)) => Ok(Self::new(home, away)),
            (Some(home), None) => {
                let away = pick_other(teams, &home, rand)?;
                Ok(Self::new(home, away))
            }
            (None, Some(away)) => {
                let home = pick_other(teams, &away, rand)?;
                Ok(Self::new(home, away))
            }
            (None, None) => Self::random(teams, rand),
        }
    }

    pub fn with_team(mut self, side: Side, team: impl Into<String>) -> Self {
        match side {
            Side::Home => self.home = team.into(),
            Side::Away => self.away = team.into(),
        }
        self
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

fn pick_other(teams: &[&str], excluded: &str, rand: &mut impl Rand) -> Result<String, InvalidArgument> {
    let candidates = teams
        .iter()
        .filter(|&&team| team != excluded)
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        return Err(InvalidArgument::TooFewTeams);
    }
    Ok(candidates[rand.next_lim_usize(candidates.len())].to_string())
}

/// What the user has dialled in. A rate left as `None` falls back to the historical average.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub trials: usize,
    pub home_rate: Option<f64>,
    pub away_rate: Option<f64>,
}
impl Default for Controls {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            home_rate: None,
            away_rate: None,
        }
    }
}
impl Controls {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_home_rate(mut self, rate: Option<f64>) -> Self {
        self.home_rate = rate;
        self
    }

    pub fn with_away_rate(mut self, rate: Option<f64>) -> Self {
        self.away_rate = rate;
        self
    }

    pub fn rate(&self, side: Side) -> Option<f64> {
        match side {
            Side::Home => self.home_rate,
            Side::Away => self.away_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rates {
    pub home: f64,
    pub away: f64,
}
impl Rates {
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

/// A fully validated match ready to simulate: the selection, the historical rates of the home
/// team at home and the away team away, and the rates actually simulated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub selection: Selection,
    pub historical: Rates,
    pub rates: Rates,
    pub trials: usize,
}
impl Fixture {
    pub fn prepare(
        dataset: &Dataset,
        selection: &Selection,
        controls: &Controls,
        bounds: &Bounds,
    ) -> Result<Self, FixtureError> {
        if !bounds.allow_same_team && selection.home == selection.away {
            return Err(InvalidArgument::SameTeam(selection.home.clone()).into());
        }
        if !bounds.trials.contains(&controls.trials) {
            return Err(InvalidArgument::TrialsOutOfBounds {
                trials: controls.trials,
                bounds: bounds.trials.clone(),
            }
            .into());
        }

        let historical = Rates {
            home: dataset.average_goals(&selection.home, Side::Home)?,
            away: dataset.average_goals(&selection.away, Side::Away)?,
        };
        let rates = Rates {
            home: effective_rate(Side::Home, controls, &historical, bounds)?,
            away: effective_rate(Side::Away, controls, &historical, bounds)?,
        };
        debug!("prepared {selection:?}: historical {historical:?}, simulated {rates:?}");
        Ok(Self {
            selection: selection.clone(),
            historical,
            rates,
            trials: controls.trials,
        })
    }

    pub fn simulate(&self, rand: &mut impl Rand) -> Result<SimulationResult, InvalidArgument> {
        simulate(self.rates.home, self.rates.away, self.trials, rand)
    }

    pub fn exact_probs(&self) -> Result<OutcomeProbs, InvalidArgument> {
        exact_outcome_probs(self.rates.home, self.rates.away)
    }
}

fn effective_rate(side: Side, controls: &Controls, historical: &Rates, bounds: &Bounds) -> Result<f64, InvalidArgument> {
    match controls.rate(side) {
        None => Ok(historical.get(side)),
        Some(rate) if bounds.rates.contains(&rate) => Ok(rate),
        Some(rate) => Err(InvalidArgument::RateOutOfBounds {
            side,
            rate,
            bounds: bounds.rates.clone(),
        }),
    }
}
