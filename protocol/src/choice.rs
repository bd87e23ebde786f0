//! Choice strings returned to the host
//!
//! The host expects one of `move N`, `switch N`, `pass` or `default`, with
//! 1-based slot indices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// Use the move in this 1-based slot
    Move(usize),

    /// Switch to the roster entry at this 1-based position
    Switch(usize),

    /// Take no action
    Pass,

    /// Let the host pick (team preview)
    Default,
}

impl Choice {
    /// Serialize choice to protocol format
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::Move(slot) => format!("move {}", slot),
            Self::Switch(slot) => format!("switch {}", slot),
            Self::Pass => "pass".to_string(),
            Self::Default => "default".to_string(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_protocol_string())
    }
}

impl FromStr for Choice {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidChoice(s.to_string());

        match s.trim().split_once(' ') {
            Some((kind, slot)) => {
                let slot: usize = slot.trim().parse().map_err(|_| invalid())?;
                if slot == 0 {
                    return Err(invalid());
                }
                match kind {
                    "move" => Ok(Self::Move(slot)),
                    "switch" => Ok(Self::Switch(slot)),
                    _ => Err(invalid()),
                }
            }
            None => match s.trim() {
                "pass" => Ok(Self::Pass),
                "default" => Ok(Self::Default),
                _ => Err(invalid()),
            },
        }
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
