//! Response records written back to the host, one per input line

use serde::{Deserialize, Serialize};

use crate::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<Choice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    /// A successful response carrying only a message
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            choice: None,
            score: None,
            reasoning: None,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            choice: None,
            score: None,
            reasoning: None,
            message: Some(message.into()),
        }
    }

    /// A successful decision
    pub fn decision(choice: Choice, score: Option<f64>, reasoning: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            choice: Some(choice),
            score,
            reasoning: Some(reasoning.into()),
            message: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Serialize to a single wire line (no trailing newline)
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
