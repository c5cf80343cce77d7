use serde::Deserialize;
use serde_json::Value;

use crate::core::errors::{AccordError, Result};

const SHAPE_ERROR: &str = "agreements must be a string or an array";

/// Agreements named by a caller: a single identifier or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Agreements {
    One(String),
    Many(Vec<String>),
}

impl Agreements {
    /// Interpret an untyped JSON payload.
    ///
    /// Only a string or an array of strings is accepted; `null`, numbers,
    /// booleans, objects and arrays holding anything but strings are
    /// rejected with a `Validation` error.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self::One(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(AccordError::validation(SHAPE_ERROR)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Many),
            _ => Err(AccordError::validation(SHAPE_ERROR)),
        }
    }

    /// Normalize into the sequence stored as an event's `resource`.
    ///
    /// Order and duplicates are kept verbatim. The sequence must be
    /// non-empty and hold no empty identifiers.
    pub fn into_resource(self) -> Result<Vec<String>> {
        let resource = match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        };

        if resource.is_empty() {
            return Err(AccordError::validation(
                "agreements must name at least one agreement",
            ));
        }
        if resource.iter().any(|a| a.is_empty()) {
            return Err(AccordError::validation(
                "agreement identifiers must be non-empty strings",
            ));
        }

        Ok(resource)
    }
}

impl From<&str> for Agreements {
    fn from(s: &str) -> Self {
        Self::One(s.to_string())
    }
}

impl From<String> for Agreements {
    fn from(s: String) -> Self {
        Self::One(s)
    }
}

impl From<Vec<String>> for Agreements {
    fn from(v: Vec<String>) -> Self {
        Self::Many(v)
    }
}

impl From<Vec<&str>> for Agreements {
    fn from(v: Vec<&str>) -> Self {
        Self::Many(v.into_iter().map(String::from).collect())
    }
}
