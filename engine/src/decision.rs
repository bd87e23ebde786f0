//! Move, switch and team preview decisions

use champ_protocol::{BattleRequest, Choice, RequestKind, Response};
use thiserror::Error;

use crate::scoring::evaluate_move;

/// Score reported when no move could be scored (every slot disabled)
pub const UNSCORED: f64 = -1.0;

const MOVE_REASONING: &str = "Strategic move selection based on power, accuracy, and effects";
const SWITCH_REASONING: &str = "Switched to available benched pokemon";
const PASS_REASONING: &str = "No valid switch targets available";
const TEAM_PREVIEW_REASONING: &str = "Team preview order selected using strategic analysis";

/// A chosen action and why
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub choice: Choice,
    pub score: Option<f64>,
    pub reasoning: &'static str,
}

impl From<Decision> for Response {
    fn from(decision: Decision) -> Self {
        Response::decision(decision.choice, decision.score, decision.reasoning)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecisionError {
    #[error("No active pokemon data")]
    NoActivePokemon,

    #[error("No moves available")]
    NoMoves,

    #[error("No pokemon data")]
    NoPokemon,

    /// The request payload did not decode
    #[error("{} selection error: {detail}", .operation.label())]
    Malformed {
        operation: RequestKind,
        detail: String,
    },
}

/// Pick the highest scoring move of the first active pokemon
///
/// Disabled moves are skipped. Ties go to the earliest slot. If every move is
/// disabled the first slot is returned anyway with an [`UNSCORED`] score.
pub fn choose_move(request: &BattleRequest) -> Result<Decision, DecisionError> {
    let active = request
        .first_active()
        .ok_or(DecisionError::NoActivePokemon)?;

    if active.moves.is_empty() {
        return Err(DecisionError::NoMoves);
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, option) in active.moves.iter().enumerate() {
        if option.is_disabled() {
            continue;
        }

        let score = evaluate_move(option, None);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((i + 1, score));
        }
    }

    let (slot, score) = best.unwrap_or_else(|| {
        let slot = active
            .moves
            .iter()
            .position(|m| !m.is_disabled())
            .map_or(1, |i| i + 1);
        (slot, UNSCORED)
    });

    Ok(Decision {
        choice: Choice::Move(slot),
        score: Some(score),
        reasoning: MOVE_REASONING,
    })
}

/// 1-based roster positions that may be switched in
///
/// The first `forceSwitch.len()` roster entries are taken to be the active
/// slots and are never candidates, whatever their `active` flag says.
/// Fainted entries are never candidates.
pub fn switch_candidates(request: &BattleRequest) -> Vec<usize> {
    request
        .roster()
        .iter()
        .enumerate()
        .skip(request.force_switch_len())
        .filter(|(_, p)| !p.is_fainted())
        .map(|(i, _)| i + 1)
        .collect()
}

/// Switch to the first eligible benched pokemon, or pass if there is none
pub fn choose_switch(request: &BattleRequest) -> Result<Decision, DecisionError> {
    if request.roster().is_empty() {
        return Err(DecisionError::NoPokemon);
    }

    let decision = match switch_candidates(request).first() {
        Some(&slot) => Decision {
            choice: Choice::Switch(slot),
            score: None,
            reasoning: SWITCH_REASONING,
        },
        None => Decision {
            choice: Choice::Pass,
            score: None,
            reasoning: PASS_REASONING,
        },
    };

    Ok(decision)
}

/// Keep the team in its submitted order
pub fn choose_team_preview(request: &BattleRequest) -> Result<Decision, DecisionError> {
    if request.roster().is_empty() {
        return Err(DecisionError::NoPokemon);
    }

    Ok(Decision {
        choice: Choice::Default,
        score: None,
        reasoning: TEAM_PREVIEW_REASONING,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn request(value: Value) -> BattleRequest {
        BattleRequest::from_value(&value).unwrap()
    }

    fn moves(moves: Value) -> BattleRequest {
        request(json!({"active": [{"moves": moves}]}))
    }

    fn roster(conditions: &[&str], force_switch: Value) -> BattleRequest {
        let pokemon: Vec<Value> = conditions
            .iter()
            .map(|c| json!({"condition": c}))
            .collect();
        request(json!({"side": {"pokemon": pokemon}, "forceSwitch": force_switch}))
    }

    #[test]
    fn test_choose_move_skips_disabled() {
        let decision = choose_move(&moves(json!([
            {"power": 90, "accuracy": 100},
            {"power": 40, "accuracy": 100, "disabled": true}
        ])))
        .unwrap();

        assert_eq!(decision.choice, Choice::Move(1));
        assert_eq!(decision.score, Some(75.0));
        assert_eq!(decision.reasoning, MOVE_REASONING);
    }

    #[test]
    fn test_choose_move_never_picks_disabled_when_alternative_exists() {
        let decision = choose_move(&moves(json!([
            {"power": 150, "heal": true, "disabled": true},
            {"power": 10, "accuracy": 50}
        ])))
        .unwrap();

        assert_eq!(decision.choice, Choice::Move(2));
    }

    #[test]
    fn test_choose_move_picks_highest_score() {
        let decision = choose_move(&moves(json!([
            {"power": 40},
            {"power": 80, "accuracy": 90},
            {"heal": true, "boosts": true}
        ])))
        .unwrap();

        assert_eq!(decision.choice, Choice::Move(3));
        assert_eq!(decision.score, Some(85.0));
    }

    #[test]
    fn test_choose_move_ties_go_to_earliest() {
        let decision = choose_move(&moves(json!([
            {"power": 40},
            {"power": 60},
            {"power": 100}
        ])))
        .unwrap();

        assert_eq!(decision.choice, Choice::Move(2));
    }

    #[test]
    fn test_choose_move_all_disabled_falls_back_to_first() {
        let decision = choose_move(&moves(json!([
            {"power": 90, "disabled": true},
            {"power": 40, "disabled": "Taunt"}
        ])))
        .unwrap();

        assert_eq!(decision.choice, Choice::Move(1));
        assert_eq!(decision.score, Some(UNSCORED));
    }

    #[test]
    fn test_choose_move_missing_active() {
        assert_eq!(
            choose_move(&request(json!({}))),
            Err(DecisionError::NoActivePokemon)
        );
        assert_eq!(
            choose_move(&request(json!({"active": []}))),
            Err(DecisionError::NoActivePokemon)
        );
        assert_eq!(
            choose_move(&request(json!({"active": [null]}))),
            Err(DecisionError::NoActivePokemon)
        );
    }

    #[test]
    fn test_choose_move_unset_active_slot() {
        for slot in [json!({}), json!(false), json!(0), json!(""), json!([])] {
            assert_eq!(
                choose_move(&request(json!({"active": [slot]}))),
                Err(DecisionError::NoActivePokemon)
            );
        }
    }

    #[test]
    fn test_choose_move_no_moves() {
        assert_eq!(choose_move(&moves(json!([]))), Err(DecisionError::NoMoves));
        assert_eq!(
            choose_move(&request(json!({"active": [{"moves": null}]}))),
            Err(DecisionError::NoMoves)
        );
    }

    #[test]
    fn test_choose_switch_first_alive_bench() {
        let request = roster(&["0 fnt", "100/100", "0 fnt", "50/100", "30/100 brn"], json!([true]));

        assert_eq!(switch_candidates(&request), vec![2, 4, 5]);
        let decision = choose_switch(&request).unwrap();
        assert_eq!(decision.choice, Choice::Switch(2));
        assert_eq!(decision.reasoning, SWITCH_REASONING);
    }

    #[test]
    fn test_choose_switch_skips_fainted() {
        let request = roster(&["0 fnt", "0 fnt", "0 fnt", "80/100"], json!([true]));
        assert_eq!(choose_switch(&request).unwrap().choice, Choice::Switch(4));
    }

    #[test]
    fn test_choose_switch_cutoff_is_force_switch_length() {
        // Two forced slots: positions 1 and 2 are never targets, even if alive
        let request = roster(&["100/100", "100/100", "100/100"], json!([true, false]));
        assert_eq!(choose_switch(&request).unwrap().choice, Choice::Switch(3));

        // No forceSwitch: position 1 is eligible even though it is active
        let request = roster(&["100/100", "100/100"], Value::Null);
        assert_eq!(choose_switch(&request).unwrap().choice, Choice::Switch(1));
    }

    #[test]
    fn test_choose_switch_ignores_active_flag_past_cutoff() {
        // The positional cutoff decides, not the roster's own `active` marker
        let request = request(json!({
            "forceSwitch": [true],
            "side": {"pokemon": [
                {"condition": "0 fnt", "active": true},
                {"condition": "100/100", "active": true},
                {"condition": "100/100"}
            ]}
        }));
        assert_eq!(choose_switch(&request).unwrap().choice, Choice::Switch(2));
    }

    #[test]
    fn test_choose_switch_pass_when_no_candidates() {
        let request = roster(&["0 fnt", "0 fnt", "0 fnt"], json!([true]));
        let decision = choose_switch(&request).unwrap();
        assert_eq!(decision.choice, Choice::Pass);
        assert_eq!(decision.reasoning, PASS_REASONING);

        let request = roster(&["100/100"], json!([true]));
        assert_eq!(choose_switch(&request).unwrap().choice, Choice::Pass);
    }

    #[test]
    fn test_choose_switch_no_pokemon() {
        assert_eq!(
            choose_switch(&request(json!({"forceSwitch": [true]}))),
            Err(DecisionError::NoPokemon)
        );
        assert_eq!(
            choose_switch(&request(json!({"side": {"pokemon": []}}))),
            Err(DecisionError::NoPokemon)
        );
    }

    #[test]
    fn test_choose_team_preview() {
        let request = roster(&["100/100", "0 fnt"], Value::Null);
        let decision = choose_team_preview(&request).unwrap();
        assert_eq!(decision.choice, Choice::Default);
        assert_eq!(decision.score, None);

        assert_eq!(
            choose_team_preview(&BattleRequest::default()),
            Err(DecisionError::NoPokemon)
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = DecisionError::Malformed {
            operation: RequestKind::TeamPreview,
            detail: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Team preview selection error: bad");
    }

    #[test]
    fn test_decision_into_response() {
        let response: Response = Decision {
            choice: Choice::Switch(2),
            score: None,
            reasoning: SWITCH_REASONING,
        }
        .into();

        assert!(response.is_ok());
        assert_eq!(response.choice, Some(Choice::Switch(2)));
        assert_eq!(response.reasoning.as_deref(), Some(SWITCH_REASONING));
    }
}
