//! Wire types for the decision service protocol

use thiserror::Error;

pub mod choice;
pub mod command;
pub mod request;
pub mod response;

pub use choice::Choice;
pub use command::{Command, RequestKind};
pub use request::{
    Accuracy, ActivePokemon, BattleRequest, Flag, MoveOption, SideInfo, SidePokemon,
};
pub use response::{Response, Status};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid field `{field}`: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid choice string: {0}")]
    InvalidChoice(String),

    #[error("Empty message")]
    EmptyMessage,
}
