//! Opaque principal identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The identity of a party (vault owner, beneficiary, buyer).
///
/// Principals are opaque text issued by the identity provider; the client
/// never derives or validates their internal structure. The only check is
/// non-emptiness when one is constructed from user input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePrincipalError {
    #[error("principal must not be empty")]
    Empty,
}

impl Principal {
    /// Parse a principal from user input.
    pub fn parse(text: &str) -> Result<Self, ParsePrincipalError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParsePrincipalError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let p = Principal::parse("  abc-def  ").unwrap();
        assert_eq!(p.as_str(), "abc-def");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Principal::parse("   "), Err(ParsePrincipalError::Empty));
    }

    #[test]
    fn serde_is_transparent() {
        let p = Principal::parse("owner-1").unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"owner-1\"");
    }
}
