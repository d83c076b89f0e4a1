//! Loading of historical fixtures and the scoring averages derived from them.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{MatchRecord, Side};
use crate::error::DataError;

/// Required columns, each with the alternative header it may appear under.
const COLUMNS: [(&str, &str); 4] = [
    ("home_team", "nome_mandante"),
    ("away_team", "nome_visitante"),
    ("home_goals", "gols_mandante"),
    ("away_goals", "gols_visitante"),
];

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(alias = "nome_mandante")]
    home_team: String,

    #[serde(alias = "nome_visitante")]
    away_team: String,

    #[serde(alias = "gols_mandante")]
    home_goals: i64,

    #[serde(alias = "gols_visitante")]
    away_goals: i64,
}
impl Row {
    fn validate(self, line: u64) -> Result<MatchRecord, DataError> {
        fn team(name: String, line: u64, column: &'static str) -> Result<String, DataError> {
            if name.is_empty() {
                Err(DataError::BlankTeam { line, column })
            } else {
                Ok(name)
            }
        }
        fn goals(value: i64, line: u64, column: &'static str) -> Result<u16, DataError> {
            u16::try_from(value).map_err(|_| DataError::InvalidGoals {
                line,
                column,
                value,
            })
        }

        Ok(MatchRecord {
            home_team: team(self.home_team, line, "home_team")?,
            away_team: team(self.away_team, line, "away_team")?,
            home_goals: goals(self.home_goals, line, "home_goals")?,
            away_goals: goals(self.away_goals, line, "away_goals")?,
        })
    }
}

fn check_columns(headers: &StringRecord) -> Result<(), DataError> {
    for (column, alias) in COLUMNS {
        if !headers.iter().any(|header| header == column || header == alias) {
            return Err(DataError::MissingColumn(column));
        }
    }
    Ok(())
}

/// Arithmetic mean of the goals scored by `team` when playing on `side`.
pub fn average_goals(records: &[MatchRecord], team: &str, side: Side) -> Result<f64, DataError> {
    let (fixtures, goals) = records
        .iter()
        .filter(|record| record.team(side) == team)
        .fold((0usize, 0u64), |(fixtures, goals), record| {
            (fixtures + 1, goals + record.goals(side) as u64)
        });
    if fixtures == 0 {
        return Err(DataError::NoFixtures {
            team: team.into(),
            side,
        });
    }
    Ok(goals as f64 / fixtures as f64)
}

/// A team's scoring averages in either role; `None` where it has no fixtures in that role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamProfile {
    pub home: Option<f64>,
    pub away: Option<f64>,
}
impl TeamProfile {
    pub fn get(&self, side: Side) -> Option<f64> {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

/// The historical fixtures, loaded once and read thereafter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<MatchRecord>,
}
impl Dataset {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses CSV with a header row. Columns may be named in English or after the Brasileirão
    /// export (`nome_mandante`, `gols_visitante`, ...). Unrecognised columns are ignored.
    pub fn from_reader(reader: impl Read) -> Result<Self, DataError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        check_columns(&headers)?;

        let mut records = vec![];
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|position| position.line()).unwrap_or_default();
            let row: Row = record.deserialize(Some(&headers))?;
            records.push(row.validate(line)?);
        }
        if records.is_empty() {
            return Err(DataError::Empty);
        }
        debug!("loaded {} fixtures", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The selectable teams: distinct home-team names in order of first appearance.
    pub fn teams(&self) -> Vec<&str> {
        let mut teams: Vec<&str> = vec![];
        for record in &self.records {
            if !teams.contains(&record.home_team.as_str()) {
                teams.push(&record.home_team);
            }
        }
        teams
    }

    pub fn average_goals(&self, team: &str, side: Side) -> Result<f64, DataError> {
        average_goals(&self.records, team, side)
    }

    pub fn profile(&self, team: &str) -> TeamProfile {
        TeamProfile {
            home: self.average_goals(team, Side::Home).ok(),
            away: self.average_goals(team, Side::Away).ok(),
        }
    }
}
