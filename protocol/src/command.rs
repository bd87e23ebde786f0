//! Commands the host sends, one JSON object per line
//!
//! `{"action": "init", "backend": "gpt-4o", "api_key": "..."}`
//! `{"action": "choose_move", "request": {...}}`
//! `{"action": "quit"}`

use serde_json::{Map, Value};

use crate::ParseError;

/// Which decision a `choose_*` command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Move,
    Switch,
    TeamPreview,
}

impl RequestKind {
    /// The `action` value that selects this kind
    pub fn action(&self) -> &'static str {
        match self {
            RequestKind::Move => "choose_move",
            RequestKind::Switch => "choose_switch",
            RequestKind::TeamPreview => "choose_team_preview",
        }
    }

    /// Display label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::Move => "Move",
            RequestKind::Switch => "Switch",
            RequestKind::TeamPreview => "Team preview",
        }
    }
}

/// A command resolved from its `action` field
///
/// Request payloads stay raw JSON here. Decoding them into a
/// [`BattleRequest`](crate::BattleRequest) is part of answering the command, so a
/// malformed payload is reported by the decision it was meant for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Check credentials for a decision backend
    Init {
        backend: Option<String>,
        api_key: Option<String>,
    },

    ChooseMove(Value),

    ChooseSwitch(Value),

    ChooseTeamPreview(Value),

    /// End the session
    Quit,

    /// Any other `action`; holds the action as it appeared on the wire
    Unknown(String),
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::EmptyMessage);
        }

        let value: Value =
            serde_json::from_str(line).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

        let Value::Object(mut fields) = value else {
            return Err(ParseError::InvalidJson(
                "expected a command object".to_string(),
            ));
        };

        let action = fields.remove("action").unwrap_or(Value::Null);

        let command = match action.as_str() {
            Some("init") => Command::Init {
                backend: optional_string(&mut fields, "backend")?,
                api_key: optional_string(&mut fields, "api_key")?.filter(|k| !k.is_empty()),
            },
            Some("choose_move") => Command::ChooseMove(take_request(&mut fields)),
            Some("choose_switch") => Command::ChooseSwitch(take_request(&mut fields)),
            Some("choose_team_preview") => Command::ChooseTeamPreview(take_request(&mut fields)),
            Some("quit") => Command::Quit,
            Some(other) => Command::Unknown(other.to_string()),
            None => Command::Unknown(action.to_string()),
        };

        Ok(command)
    }

    /// The action name, for logging
    pub fn action(&self) -> &str {
        match self {
            Command::Init { .. } => "init",
            Command::ChooseMove(_) => RequestKind::Move.action(),
            Command::ChooseSwitch(_) => RequestKind::Switch.action(),
            Command::ChooseTeamPreview(_) => RequestKind::TeamPreview.action(),
            Command::Quit => "quit",
            Command::Unknown(action) => action,
        }
    }
}

fn take_request(fields: &mut Map<String, Value>) -> Value {
    match fields.remove("request") {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(request) => request,
    }
}

fn optional_string(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ParseError> {
    match fields.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ParseError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}
