//! `#id` and `.class` selectors.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::BinderError;

/// The two selector forms the page widgets use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    pub fn id(name: &str) -> Self {
        Selector::Id(name.to_string())
    }

    pub fn class(name: &str) -> Self {
        Selector::Class(name.to_string())
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FromStr for Selector {
    type Err = BinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let selector = if let Some(name) = s.strip_prefix('#') {
            Selector::Id(name.to_string())
        } else if let Some(name) = s.strip_prefix('.') {
            Selector::Class(name.to_string())
        } else {
            return Err(BinderError::InvalidSelector(s.to_string()));
        };

        match &selector {
            Selector::Id(name) | Selector::Class(name) if is_valid_name(name) => Ok(selector),
            _ => Err(BinderError::InvalidSelector(s.to_string())),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Class(name) => write!(f, ".{name}"),
        }
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
