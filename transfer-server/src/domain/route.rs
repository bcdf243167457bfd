//! Bus route identifier type.

use std::fmt;

/// Error returned when parsing an invalid route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route: {reason}")]
pub struct InvalidRoute {
    reason: &'static str,
}

/// A validated bus route number.
///
/// Route numbers are short alphanumeric strings (e.g. "143", "M40").
/// The provider treats them as opaque identifiers, not numbers, so
/// "05" and "5" are distinct routes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    /// Parse a route number from a string.
    ///
    /// The input must be 1-8 ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidRoute> {
        if s.is_empty() {
            return Err(InvalidRoute {
                reason: "must not be empty",
            });
        }
        if s.len() > 8 {
            return Err(InvalidRoute {
                reason: "must be at most 8 characters",
            });
        }
        for b in s.bytes() {
            if !b.is_ascii_alphanumeric() {
                return Err(InvalidRoute {
                    reason: "must be ASCII letters or digits",
                });
            }
        }
        Ok(RouteId(s.to_string()))
    }

    /// Returns the route number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
