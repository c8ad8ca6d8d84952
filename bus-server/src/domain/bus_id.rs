//! Bus identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid bus identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bus id: {reason}")]
pub struct InvalidBusId {
    reason: &'static str,
}

/// A bus identifier such as `bus001`.
///
/// Identifiers are opaque strings, stable across telemetry reports. The only
/// requirement is that they are non-empty once surrounding whitespace is
/// removed, which this type guarantees by construction.
///
/// # Examples
///
/// ```
/// use bus_server::domain::BusId;
///
/// let id = BusId::parse(" bus001 ").unwrap();
/// assert_eq!(id.as_str(), "bus001");
///
/// assert!(BusId::parse("").is_err());
/// assert!(BusId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BusId(String);

impl BusId {
    /// Parse a bus identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidBusId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidBusId {
                reason: "must not be empty",
            });
        }
        Ok(BusId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BusId {
    type Error = InvalidBusId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BusId::parse(&value)
    }
}

impl From<BusId> for String {
    fn from(id: BusId) -> Self {
        id.0
    }
}

impl fmt::Debug for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusId({})", self.0)
    }
}

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
