//! Heuristic decisions for Pokemon Showdown battle requests.
//!
//! # Overview
//!
//! `champ-engine` turns a decoded [`BattleRequest`] into one [`Choice`]:
//!
//! ```text
//! champ-protocol (wire format)
//!        │
//!        ▼
//! champ-engine (scoring + decisions) ← THIS CRATE
//!        │
//!        ▼
//! champ-service (line loop over stdin/stdout)
//! ```
//!
//! Every decision is a pure function of the request. Nothing here performs I/O
//! or keeps state between calls.
//!
//! # Main Types
//!
//! - [`evaluate_move`] - context-free 0-100 score for one move slot
//! - [`choose_move`], [`choose_switch`], [`choose_team_preview`] - the three decisions
//! - [`Decision`] / [`DecisionError`] - outcome of a decision
//! - [`DecisionProvider`] - where alternate decision makers plug in
//! - [`Heuristic`] - the built-in provider
//!
//! # Example Usage
//!
//! ```ignore
//! use champ_engine::{DecisionProvider, Heuristic};
//! use champ_protocol::RequestKind;
//!
//! let response = Heuristic.respond(RequestKind::Move, &payload);
//! println!("{}", response.to_line()?);
//! ```

mod decision;
mod provider;
mod scoring;

pub use decision::{
    choose_move, choose_switch, choose_team_preview, switch_candidates, Decision, DecisionError,
    UNSCORED,
};
pub use provider::{DecisionProvider, Heuristic};
pub use scoring::{evaluate_move, BASE_SCORE, MAX_SCORE, MIN_SCORE};

pub use champ_protocol::{BattleRequest, Choice, MoveOption, RequestKind, SidePokemon};
