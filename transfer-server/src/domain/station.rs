//! Station and stop identifier types.

use std::fmt;

/// Error returned when parsing an invalid station or stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: {reason}")]
pub struct InvalidId {
    reason: &'static str,
}

/// Maximum identifier length accepted from the upstream provider.
const MAX_ID_LEN: usize = 12;

fn validate_id(s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            reason: "must not be empty",
        });
    }
    if s.len() > MAX_ID_LEN {
        return Err(InvalidId {
            reason: "must be at most 12 characters",
        });
    }
    for b in s.bytes() {
        if !b.is_ascii_alphanumeric() {
            return Err(InvalidId {
                reason: "must be ASCII letters or digits",
            });
        }
    }
    Ok(())
}

/// A validated rail station identifier.
///
/// Station identifiers are short alphanumeric codes assigned by the
/// transit provider (e.g. "K137"). This type guarantees that any
/// `StationId` value is valid by construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    ///
    /// The input must be 1-12 ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        validate_id(s)?;
        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated bus stop identifier.
///
/// Bus stops are identified separately from rail stations by the
/// provider; a rail station may have several bus stops outside it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier from a string.
    ///
    /// The input must be 1-12 ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        validate_id(s)?;
        Ok(StopId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
