//! Greeting identifier type
//!
//! Identifiers are assigned by the store on insert and never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Greeting identifier newtype wrapper
///
/// Serializes as a bare JSON number.
///
/// # Examples
///
/// ```
/// use greetings::domain::ids::GreetingId;
/// use std::str::FromStr;
///
/// let id = GreetingId::from_str("7").unwrap();
/// assert_eq!(id.value(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GreetingId(i64);

impl GreetingId {
    /// Wraps a raw store identifier
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GreetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GreetingId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| format!("Invalid greeting id: '{s}'"))
    }
}

impl From<i64> for GreetingId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
