//! The seam between the session and whatever makes decisions

use champ_protocol::{BattleRequest, RequestKind, Response};
use serde_json::Value;

use crate::decision::{self, Decision, DecisionError};

/// Something that can answer the three decision requests.
///
/// The session talks to decision makers only through this trait. The three
/// `choose_*` methods receive an already decoded request; [`decide`] and
/// [`respond`] handle decoding the raw payload and shaping the reply, so an
/// implementation normally only provides the `choose_*` methods and [`name`].
///
/// [`decide`]: DecisionProvider::decide
/// [`respond`]: DecisionProvider::respond
/// [`name`]: DecisionProvider::name
pub trait DecisionProvider {
    /// Short name used in logs
    fn name(&self) -> &str;

    fn choose_move(&self, request: &BattleRequest) -> Result<Decision, DecisionError>;

    fn choose_switch(&self, request: &BattleRequest) -> Result<Decision, DecisionError>;

    fn choose_team_preview(&self, request: &BattleRequest) -> Result<Decision, DecisionError>;

    /// Decode the parts of a raw payload `kind` reads and dispatch it.
    fn decide(&self, kind: RequestKind, payload: &Value) -> Result<Decision, DecisionError> {
        let request =
            BattleRequest::decode(kind, payload).map_err(|e| DecisionError::Malformed {
                operation: kind,
                detail: e.to_string(),
            })?;

        match kind {
            RequestKind::Move => self.choose_move(&request),
            RequestKind::Switch => self.choose_switch(&request),
            RequestKind::TeamPreview => self.choose_team_preview(&request),
        }
    }

    /// Like [`decide`](DecisionProvider::decide), but always produces a response.
    fn respond(&self, kind: RequestKind, payload: &Value) -> Response {
        match self.decide(kind, payload) {
            Ok(decision) => decision.into(),
            Err(e) => Response::error(e.to_string()),
        }
    }
}

/// The built-in scoring heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl DecisionProvider for Heuristic {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn choose_move(&self, request: &BattleRequest) -> Result<Decision, DecisionError> {
        decision::choose_move(request)
    }

    fn choose_switch(&self, request: &BattleRequest) -> Result<Decision, DecisionError> {
        decision::choose_switch(request)
    }

    fn choose_team_preview(&self, request: &BattleRequest) -> Result<Decision, DecisionError> {
        decision::choose_team_preview(request)
    }
}
