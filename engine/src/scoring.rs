//! Move scoring

use champ_protocol::{MoveOption, SidePokemon};

pub const BASE_SCORE: f64 = 50.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

const MAX_POWER_BONUS: f64 = 25.0;
const ACCURACY_PENALTY_PER_POINT: f64 = 0.3;
const HEAL_BONUS: f64 = 20.0;
const BOOST_BONUS: f64 = 15.0;

/// Score a move slot in `[0, 100]`
///
/// The score only looks at the move itself. `opponent` is accepted so callers
/// can pass the target along, but it does not affect the result.
pub fn evaluate_move(option: &MoveOption, opponent: Option<&SidePokemon>) -> f64 {
    let _ = opponent;

    if option.is_disabled() {
        return MIN_SCORE;
    }

    let mut score = BASE_SCORE;

    if let Some(power) = option.base_power() {
        score += (power / 2.0).min(MAX_POWER_BONUS);
    }

    if let Some(accuracy) = option.accuracy_percent()
        && accuracy < 100.0
    {
        score -= (100.0 - accuracy) * ACCURACY_PENALTY_PER_POINT;
    }

    if option.heal.is_set() {
        score += HEAL_BONUS;
    }

    if option.boosts.is_set() {
        score += BOOST_BONUS;
    }

    score.clamp(MIN_SCORE, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use champ_protocol::{Accuracy, Flag};

    fn option(power: Option<f64>, accuracy: Option<f64>) -> MoveOption {
        MoveOption {
            power,
            accuracy: accuracy.map(Accuracy::Percent),
            ..Default::default()
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_base_score() {
        assert_eq!(evaluate_move(&MoveOption::default(), None), 50.0);
    }

    #[test]
    fn test_power_bonus_caps_at_25() {
        assert_eq!(evaluate_move(&option(Some(100.0), Some(100.0)), None), 75.0);
        assert_eq!(evaluate_move(&option(Some(250.0), None), None), 75.0);
        assert_eq!(evaluate_move(&option(Some(40.0), None), None), 70.0);
    }

    #[test]
    fn test_zero_power_gives_no_bonus() {
        assert_eq!(evaluate_move(&option(Some(0.0), None), None), 50.0);
    }

    #[test]
    fn test_accuracy_penalty() {
        assert!(approx(evaluate_move(&option(None, Some(50.0)), None), 35.0));
        assert!(approx(
            evaluate_move(&option(Some(120.0), Some(70.0)), None),
            66.0
        ));
    }

    #[test]
    fn test_zero_accuracy_has_no_penalty() {
        assert_eq!(evaluate_move(&option(None, Some(0.0)), None), 50.0);

        let unchecked = MoveOption {
            power: Some(60.0),
            accuracy: Some(Accuracy::Bool(false)),
            ..Default::default()
        };
        assert_eq!(evaluate_move(&unchecked, None), 75.0);
    }

    #[test]
    fn test_true_accuracy_counts_as_one() {
        let swift = MoveOption {
            power: Some(60.0),
            accuracy: Some(Accuracy::Bool(true)),
            ..Default::default()
        };
        assert!(approx(evaluate_move(&swift, None), 45.3));
    }

    #[test]
    fn test_utility_bonuses() {
        let heal = MoveOption {
            heal: Flag(true),
            ..Default::default()
        };
        assert_eq!(evaluate_move(&heal, None), 70.0);

        let both = MoveOption {
            heal: Flag(true),
            boosts: Flag(true),
            ..Default::default()
        };
        assert_eq!(evaluate_move(&both, None), 85.0);
    }

    #[test]
    fn test_clamped_to_100() {
        let strong = MoveOption {
            power: Some(150.0),
            heal: Flag(true),
            boosts: Flag(true),
            ..Default::default()
        };
        assert_eq!(evaluate_move(&strong, None), 100.0);
    }

    #[test]
    fn test_disabled_scores_zero() {
        let disabled = MoveOption {
            power: Some(150.0),
            heal: Flag(true),
            disabled: Flag(true),
            ..Default::default()
        };
        assert_eq!(evaluate_move(&disabled, None), 0.0);
    }

    #[test]
    fn test_opponent_is_ignored() {
        let target = SidePokemon {
            condition: "100/100".to_string(),
        };
        let thunderbolt = option(Some(90.0), Some(100.0));
        assert_eq!(
            evaluate_move(&thunderbolt, Some(&target)),
            evaluate_move(&thunderbolt, None)
        );
    }

    #[test]
    fn test_score_stays_in_range() {
        for power in [None, Some(0.0), Some(10.0), Some(60.0), Some(500.0)] {
            for accuracy in [None, Some(1.0), Some(30.0), Some(85.0), Some(100.0)] {
                for heal in [false, true] {
                    for boosts in [false, true] {
                        let move_option = MoveOption {
                            power,
                            accuracy: accuracy.map(Accuracy::Percent),
                            heal: Flag(heal),
                            boosts: Flag(boosts),
                            ..Default::default()
                        };
                        let score = evaluate_move(&move_option, None);
                        assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
                    }
                }
            }
        }
    }
}
