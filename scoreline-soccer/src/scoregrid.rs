//! Exact outcome probabilities of the independent Poisson model, summed over a truncated score grid.

use ordinalizer::Ordinal;
use strum::EnumCount;

use scoreline::poisson;

use crate::domain::{Outcome, Side};
use crate::error::InvalidArgument;
use crate::sim::{validate_rate, OutcomeProbs};

/// Probability mass left outside the grid along each axis.
const TAIL_EPSILON: f64 = 1e-12;

/// Probabilities of scoring `0, 1, 2, ...` goals, up to where the remaining tail is negligible.
pub fn goal_probs(lambda: f64) -> Vec<f64> {
    let mut probs = vec![];
    let mut cumulative = 0.0;
    let mut goals = 0;
    loop {
        let prob = poisson::univariate(goals, lambda);
        probs.push(prob);
        cumulative += prob;
        if cumulative >= 1.0 - TAIL_EPSILON || (goals as f64 > lambda && prob < TAIL_EPSILON) {
            return probs;
        }
        goals += 1;
    }
}

/// Win/draw/loss probabilities of a match where each side's goals are independently Poisson
/// distributed with the given means.
pub fn exact_outcome_probs(rate_home: f64, rate_away: f64) -> Result<OutcomeProbs, InvalidArgument> {
    validate_rate(Side::Home, rate_home)?;
    validate_rate(Side::Away, rate_away)?;

    let home_probs = goal_probs(rate_home);
    let away_probs = goal_probs(rate_away);
    let mut probs = [0.0; Outcome::COUNT];
    for (home_goals, home_prob) in home_probs.iter().enumerate() {
        for (away_goals, away_prob) in away_probs.iter().enumerate() {
            let outcome = Outcome::of(home_goals as u32, away_goals as u32);
            probs[outcome.ordinal()] += home_prob * away_prob;
        }
    }
    Ok(OutcomeProbs::from(probs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;
    use scoreline_testing::assert_slice_f64_absolute;

    #[test]
    fn goal_probs_zero_rate() {
        assert_eq!(vec![1.0], goal_probs(0.0));
    }

    #[test]
    fn goal_probs_cover_mass() {
        for lambda in [0.4, 1.5, 5.0, 40.0] {
            let probs = goal_probs(lambda);
            assert_float_absolute_eq!(1.0, probs.iter().sum::<f64>(), 1e-9);
            assert!(probs.len() as f64 > lambda, "{lambda}: {}", probs.len());
        }
    }

    #[test]
    fn exact_nil_all() {
        let probs = exact_outcome_probs(0.0, 0.0).unwrap();
        assert_eq!(OutcomeProbs { home_win: 0.0, draw: 1.0, away_win: 0.0 }, probs);
    }

    #[test]
    fn exact_one_sided() {
        let probs = exact_outcome_probs(1.0, 0.0).unwrap();
        assert_slice_f64_absolute(
            &[1.0 - f64::exp(-1.0), f64::exp(-1.0), 0.0],
            &probs.to_array(),
            1e-9,
        );
    }

    #[test]
    fn exact_symmetric() {
        let probs = exact_outcome_probs(1.5, 1.5).unwrap();
        assert_float_absolute_eq!(1.0, probs.sum(), 1e-9);
        assert_float_absolute_eq!(probs.home_win, probs.away_win, 1e-12);
        assert!(probs.home_win > probs.draw, "{probs:?}");

        let flipped = exact_outcome_probs(2.1, 0.8).unwrap();
        let flopped = exact_outcome_probs(0.8, 2.1).unwrap();
        assert_float_absolute_eq!(flipped.home_win, flopped.away_win, 1e-12);
        assert_float_absolute_eq!(flipped.draw, flopped.draw, 1e-12);
    }

    #[test]
    fn exact_invalid_rates() {
        assert_eq!(
            Err(InvalidArgument::Rate { side: Side::Home, rate: -1.0 }),
            exact_outcome_probs(-1.0, 1.0)
        );
        assert!(matches!(
            exact_outcome_probs(1.0, f64::NAN),
            Err(InvalidArgument::Rate { side: Side::Away, .. })
        ));
    }
}
