// ABOUTME: Validated RFC 1123 hostname newtype.
// ABOUTME: Construction only succeeds for lexically well-formed names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::chars;
use crate::label::labels;

/// Hostnames (and each label within them) must be strictly shorter than this.
const MAX_HOSTNAME_LEN: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostnameError {
    #[error("hostname cannot be empty")]
    Empty,

    #[error("hostname exceeds maximum length of 254 characters")]
    TooLong,

    #[error("hostname label cannot be empty")]
    EmptyLabel,

    #[error("hostname label exceeds maximum length")]
    LabelTooLong,

    #[error("hostname label cannot start with a hyphen")]
    LeadingHyphen,

    #[error("invalid character in hostname: '{0}'")]
    InvalidChar(char),
}

/// A lexically valid RFC 1123 hostname.
///
/// Obtainable only through validation: a held value consists of dot-separated
/// non-empty labels of alphanumeric and interior-hyphen characters, with a
/// total length of at most 254 bytes. Validation is purely structural; no
/// case folding or normalization is performed, so equality is byte-for-byte
/// on the original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    pub fn new(value: &str) -> Result<Self, HostnameError> {
        if value.is_empty() {
            return Err(HostnameError::Empty);
        }

        if value.len() >= MAX_HOSTNAME_LEN {
            return Err(HostnameError::TooLong);
        }

        for label in labels(value, '.') {
            validate_label(label)?;
        }

        Ok(Self(value.to_string()))
    }

    /// Presence-or-absence entry point: `Some` for a well-formed hostname,
    /// `None` otherwise. Malformed input is an expected outcome, not a fault.
    pub fn try_parse(value: &str) -> Option<Self> {
        Self::new(value).ok()
    }

    /// Validation as a plain predicate, constructing nothing.
    pub fn is_valid(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_label(label: &str) -> Result<(), HostnameError> {
    // Subsumed by the whole-hostname bound when reached through `new`.
    if label.len() >= MAX_HOSTNAME_LEN {
        return Err(HostnameError::LabelTooLong);
    }

    let mut rest = label.chars();
    match rest.next() {
        None => return Err(HostnameError::EmptyLabel),
        Some(first) if chars::is_delimiter(first) => {
            return Err(HostnameError::LeadingHyphen);
        }
        Some(first) if !chars::is_label_start(first) => {
            return Err(HostnameError::InvalidChar(first));
        }
        Some(_) => {}
    }

    for c in rest {
        if !chars::is_label_char(c) {
            return Err(HostnameError::InvalidChar(c));
        }
    }

    Ok(())
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Hostname {
    type Err = HostnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Hostname {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hostname {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(&value).map_err(serde::de::Error::custom)
    }
}
