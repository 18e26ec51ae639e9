//! Stored state values and definition metadata.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque key/value bag attached to events and transitions by the definer.
///
/// The engine carries metadata around but never interprets it.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// The externally stored representation of a state.
///
/// This is what ends up in the record's state column. It defaults to the
/// state's name, but a state may override it (for example `"NEEDS_ATTENTION"`
/// for a state named `needs_attention`).
///
/// # Example
///
/// ```rust
/// use statewise::StateValue;
///
/// let value = StateValue::new("read");
/// assert_eq!(value.as_str(), "read");
/// assert_eq!(value, "read");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateValue(String);

impl StateValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Parse the stored value back into a symbolic state type.
    pub fn parse<T: FromStr>(&self) -> Result<T, T::Err> {
        self.0.parse()
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StateValue {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StateValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for StateValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&StateValue> for StateValue {
    fn from(value: &StateValue) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for StateValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A stored value that does not name any variant of a symbolic state type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a known state")]
pub struct UnknownState(pub String);
