//! Battle request types
//!
//! These types represent the parts of the `request` payload that decisions
//! read. Decoding is lenient: unknown keys are ignored, `null` is treated like
//! a missing key, and the loosely typed flags the host sends (`disabled`,
//! `heal`, `boosts`, `forceSwitch`, the `active` slots themselves) are read by
//! truthiness.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::RequestKind;

/// A battle request asking the player to make a decision
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRequest {
    /// Active slots; unset entries (`null`, `false`, `{}`, ...) are `None`
    #[serde(default, deserialize_with = "active_slots")]
    pub active: Option<Vec<Option<ActivePokemon>>>,

    /// Information about the player's side/team
    #[serde(default)]
    pub side: Option<SideInfo>,

    /// Which slots need to switch (for doubles/triples)
    #[serde(default)]
    pub force_switch: Option<Vec<Flag>>,
}

impl BattleRequest {
    /// Decode a whole request from a raw JSON payload
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// Decode only the keys the `kind` decision reads
    ///
    /// A malformed `side` cannot fail a move decision, and a malformed
    /// `active` cannot fail a switch.
    pub fn decode(kind: RequestKind, payload: &Value) -> Result<Self, serde_json::Error> {
        let Value::Object(fields) = payload else {
            return Err(serde_json::Error::custom("expected a request object"));
        };

        let keys: &[&str] = match kind {
            RequestKind::Move => &["active"],
            RequestKind::Switch => &["side", "forceSwitch"],
            RequestKind::TeamPreview => &["side"],
        };

        let read: Map<String, Value> = keys
            .iter()
            .filter_map(|key| fields.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect();

        Self::from_value(&Value::Object(read))
    }

    /// Number of slots named by `forceSwitch`, set or not
    pub fn force_switch_len(&self) -> usize {
        self.force_switch.as_ref().map_or(0, Vec::len)
    }

    /// The pokemon in the first active slot, if the host sent one
    pub fn first_active(&self) -> Option<&ActivePokemon> {
        self.active.as_ref()?.first()?.as_ref()
    }

    /// The player's full roster in side order
    pub fn roster(&self) -> &[SidePokemon] {
        self.side
            .as_ref()
            .map(|s| s.pokemon.as_slice())
            .unwrap_or_default()
    }
}

/// Information about an active pokemon in battle
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ActivePokemon {
    /// Available moves
    #[serde(default, deserialize_with = "null_as_default")]
    pub moves: Vec<MoveOption>,
}

/// A move slot on an active pokemon
///
/// The slot's position in [`ActivePokemon::moves`] is its identity: the
/// 1-based index is what goes into a `move N` choice.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MoveOption {
    /// Base power
    #[serde(default)]
    pub power: Option<f64>,

    /// Accuracy percentage, or a boolean
    #[serde(default)]
    pub accuracy: Option<Accuracy>,

    /// Whether the move restores HP
    #[serde(default)]
    pub heal: Flag,

    /// Whether the move changes stat stages
    #[serde(default)]
    pub boosts: Flag,

    /// Whether the move is disabled
    #[serde(default)]
    pub disabled: Flag,
}

impl MoveOption {
    pub fn is_disabled(&self) -> bool {
        self.disabled.is_set()
    }

    /// Base power, if present and non-zero
    pub fn base_power(&self) -> Option<f64> {
        self.power.filter(|p| *p != 0.0)
    }

    /// Accuracy as a number, if present and non-zero
    pub fn accuracy_percent(&self) -> Option<f64> {
        self.accuracy.as_ref().and_then(Accuracy::percent)
    }
}

/// Move accuracy as sent by the host
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Accuracy {
    /// Hit chance in percent (0-100)
    Percent(f64),

    /// `true` for moves that skip the accuracy check
    Bool(bool),
}

impl Accuracy {
    /// Numeric value; `true` counts as 1, `false` and 0 as absent
    pub fn percent(&self) -> Option<f64> {
        match *self {
            Accuracy::Percent(p) if p != 0.0 => Some(p),
            Accuracy::Bool(true) => Some(1.0),
            _ => None,
        }
    }
}

/// Information about the player's side
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SideInfo {
    /// Pokemon on this side
    #[serde(default, deserialize_with = "null_as_default")]
    pub pokemon: Vec<SidePokemon>,
}

/// A pokemon on the player's side
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SidePokemon {
    /// Current condition (`"HP/MaxHP status"`, or `"0 fnt"`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition: String,
}

impl SidePokemon {
    pub fn is_fainted(&self) -> bool {
        self.condition.ends_with(" fnt")
    }
}

/// A loosely typed boolean
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` read as unset; any other value
/// reads as set. The host sends things like `"disabled": "Taunt"` or
/// `"boosts": {"atk": 1}` where only presence matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flag(pub bool);

impl Flag {
    pub fn is_set(self) -> bool {
        self.0
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag(value)
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Flag(is_truthy(&value)))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn active_slots<'de, D>(deserializer: D) -> Result<Option<Vec<Option<ActivePokemon>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(slots) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    slots
        .into_iter()
        .map(|slot| {
            if is_truthy(&slot) {
                ActivePokemon::deserialize(slot)
                    .map(Some)
                    .map_err(D::Error::custom)
            } else {
                Ok(None)
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
