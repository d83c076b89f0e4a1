use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter};

#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Ordinal, EnumCount, EnumIter,
)]
pub enum Side {
    Home,
    Away,
}
impl Side {
    pub fn flip(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}
impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn nil_all() -> Self {
        Self { home: 0, away: 0 }
    }

    pub fn goals(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub fn total(&self) -> u32 {
        self.home + self.away
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::of(self.home, self.away)
    }
}

/// The class of a match result, from the home team's perspective.
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Ordinal, EnumCount, EnumIter,
)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}
impl Outcome {
    #[inline]
    pub fn of(home_goals: u32, away_goals: u32) -> Outcome {
        match home_goals.cmp(&away_goals) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::AwayWin,
        }
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::HomeWin => Some(Side::Home),
            Outcome::Draw => None,
            Outcome::AwayWin => Some(Side::Away),
        }
    }
}

/// One historical fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u16,
    pub away_goals: u16,
}
impl MatchRecord {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>, home_goals: u16, away_goals: u16) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals,
            away_goals,
        }
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    /// Goals scored by the team playing on `side`.
    pub fn goals(&self, side: Side) -> u16 {
        match side {
            Side::Home => self.home_goals,
            Side::Away => self.away_goals,
        }
    }
}
