//! Intent - what the caller wants done.
//!
//! An `Intent` is drawn from a closed set of known kinds, but any other
//! numeric value is still representable as `Intent::Unrecognized`. Dispatch
//! never assumes every intent has a handler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Intent is the classification used to pick a strategy.
///
/// # Canonical text
/// - known kinds: the variant name (`"Delay"`, `"Available"`, ...)
/// - unrecognized values: the decimal number (`"42"`)
///
/// The canonical text is the lookup key used by `StrategyFactory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Intent {
    Delay,
    Available,
    Average,
    Other,
    /// A value outside the known set. Only `Intent::from_value` builds one.
    Unrecognized(UnknownValue),
}

/// UnknownValue is a numeric intent value outside `0..=3`.
///
/// The field is private so a known value can never hide behind
/// `Intent::Unrecognized`; every intent has exactly one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownValue(i32);

impl UnknownValue {
    pub fn get(self) -> i32 {
        self.0
    }
}

/// ParseIntentError is returned when text is neither a known name nor a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid intent name or value")]
pub struct ParseIntentError(pub String);

impl Intent {
    /// Every known kind, in declaration order.
    pub const KNOWN: [Intent; 4] = [
        Intent::Delay,
        Intent::Available,
        Intent::Average,
        Intent::Other,
    ];

    /// Build an intent from its numeric value.
    ///
    /// Known values fold to their variant; everything else is `Unrecognized`.
    pub const fn from_value(value: i32) -> Self {
        match value {
            0 => Intent::Delay,
            1 => Intent::Available,
            2 => Intent::Average,
            3 => Intent::Other,
            other => Intent::Unrecognized(UnknownValue(other)),
        }
    }

    pub fn value(&self) -> i32 {
        match self {
            Intent::Delay => 0,
            Intent::Available => 1,
            Intent::Average => 2,
            Intent::Other => 3,
            Intent::Unrecognized(value) => value.get(),
        }
    }

    /// Name of a known kind, `None` for unrecognized values.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Intent::Delay => Some("Delay"),
            Intent::Available => Some("Available"),
            Intent::Average => Some("Average"),
            Intent::Other => Some("Other"),
            Intent::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.name().is_some()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.value()),
        }
    }
}

/// Names match case-insensitively; numbers map through `from_value`.
impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(known) = Self::KNOWN
            .iter()
            .find(|intent| intent.name().is_some_and(|n| n.eq_ignore_ascii_case(trimmed)))
        {
            return Ok(*known);
        }
        trimmed
            .parse::<i32>()
            .map(Intent::from_value)
            .map_err(|_| ParseIntentError(s.to_string()))
    }
}

impl From<Intent> for String {
    fn from(intent: Intent) -> Self {
        intent.to_string()
    }
}

impl TryFrom<String> for Intent {
    type Error = ParseIntentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// UserIntent wraps one `Intent` as it travels through dispatch.
///
/// Payload data would live here; this core carries only the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIntent {
    pub intent: Intent,
}

impl UserIntent {
    pub fn new(intent: Intent) -> Self {
        Self { intent }
    }

    /// The registry key this intent resolves through.
    pub fn lookup_key(&self) -> String {
        self.intent.to_string()
    }
}

impl From<Intent> for UserIntent {
    fn from(intent: Intent) -> Self {
        Self::new(intent)
    }
}
