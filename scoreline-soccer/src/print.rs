use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use scoreline::histogram::AlignedRow;

use crate::domain::{Outcome, Side};
use crate::session::{Fixture, Selection};
use crate::sim::{OutcomeProbs, SimulationResult};

const BAR_WIDTH: usize = 30;

fn outcome_label(outcome: Outcome, selection: &Selection) -> String {
    match outcome {
        Outcome::HomeWin => format!("{} win", selection.home),
        Outcome::Draw => "Draw".into(),
        Outcome::AwayWin => format!("{} win", selection.away),
    }
}

fn bar(count: usize, max_count: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    "#".repeat((count * BAR_WIDTH).div_ceil(max_count))
}

pub fn tabulate_teams(teams: &[&str]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(3)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["#".into(), "Team".into()],
        ));
    for (index, team) in teams.iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![format!("{}", index + 1).into(), team.to_string().into()],
        ));
    }
    table
}

pub fn tabulate_rates(fixture: &Fixture) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Team".into(),
                "Role".into(),
                "Avg goals".into(),
                "Simulated".into(),
            ],
        ));
    for side in Side::iter() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                fixture.selection.team(side).to_string().into(),
                side.to_string().into(),
                format!("{:.2}", fixture.historical.get(side)).into(),
                format!("{:.2}", fixture.rates.get(side)).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_outcomes(selection: &Selection, result: &SimulationResult, exact: &OutcomeProbs) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Outcome".into(),
                "Count".into(),
                "Simulated".into(),
                "Exact".into(),
            ],
        ));
    let simulated = result.probs();
    for outcome in Outcome::iter() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                outcome_label(outcome, selection).into(),
                format!("{}", result.count(outcome)).into(),
                format!("{:.2}%", simulated.get(outcome) * 100.0).into(),
                format!("{:.2}%", exact.get(outcome) * 100.0).into(),
            ],
        ));
    }
    table
}

/// Side-by-side goal distributions, each with a bar scaled to the largest count on either side.
pub fn tabulate_goal_distribution(selection: &Selection, rows: &[AlignedRow]) -> Table {
    let max_count = rows
        .iter()
        .map(|row| usize::max(row.left, row.right))
        .max()
        .unwrap_or_default();
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Centred)),
            Col::new(Styles::default().with(Separator(true)).with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(BAR_WIDTH)).with(Left)),
            Col::new(Styles::default().with(Separator(true)).with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(BAR_WIDTH)).with(Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Goals".into(),
                format!("{} (home)", selection.home).into(),
                "".into(),
                format!("{} (away)", selection.away).into(),
                "".into(),
            ],
        ));
    for row in rows {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", row.value).into(),
                format!("{}", row.left).into(),
                bar(row.left, max_count).into(),
                format!("{}", row.right).into(),
                bar(row.right, max_count).into(),
            ],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Rates;
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    fn create_test_result() -> SimulationResult {
        SimulationResult {
            home_wins: 2,
            draws: 1,
            away_wins: 1,
            home_goals: vec![1, 2, 0, 0],
            away_goals: vec![0, 0, 0, 2],
        }
    }

    #[test]
    fn bar_scaling() {
        assert_eq!("", bar(0, 0));
        assert_eq!("", bar(0, 10));
        assert_eq!("#".repeat(BAR_WIDTH), bar(10, 10));
        assert_eq!("#".repeat(BAR_WIDTH / 2), bar(5, 10));
        assert_eq!("#", bar(1, 1_000));
    }

    #[test]
    fn render_outcomes() {
        let selection = Selection::new("Alpha", "Bravo");
        let exact = OutcomeProbs {
            home_win: 0.45,
            draw: 0.3,
            away_win: 0.25,
        };
        let table = tabulate_outcomes(&selection, &create_test_result(), &exact);
        assert_eq!(4, table.num_rows());
        let rendered = Console::default().render(&table);
        assert!(rendered.contains("Alpha win"), "{rendered}");
        assert!(rendered.contains("Bravo win"), "{rendered}");
        assert!(rendered.contains("50.00%"), "{rendered}");
        assert!(rendered.contains("45.00%"), "{rendered}");
    }

    #[test]
    fn render_goal_distribution() {
        let selection = Selection::new("Alpha", "Bravo");
        let rows = create_test_result().aligned_goal_distributions();
        let table = tabulate_goal_distribution(&selection, &rows);
        assert_eq!(4, table.num_rows());
        let rendered = Console::default().render(&table);
        assert!(rendered.contains("Alpha (home)"), "{rendered}");
        assert!(rendered.contains(&"#".repeat(BAR_WIDTH)), "{rendered}");
    }

    #[test]
    fn render_rates_and_teams() {
        let fixture = Fixture {
            selection: Selection::new("Alpha", "Bravo"),
            historical: Rates { home: 1.456, away: 0.9 },
            rates: Rates { home: 2.0, away: 0.9 },
            trials: 100,
        };
        let rendered = Console::default().render(&tabulate_rates(&fixture));
        assert!(rendered.contains("1.46"), "{rendered}");
        assert!(rendered.contains("2.00"), "{rendered}");

        let table = tabulate_teams(&["Alpha", "Bravo", "Charlie"]);
        assert_eq!(4, table.num_rows());
    }
}
