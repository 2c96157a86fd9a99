//! Shape identity within a collection
//!
//! ID Format: `s-{sequence}` (e.g., `s-1`, `s-42`)
//!
//! Shapes are plain values, so two shapes with identical fields compare
//! equal. The collection hands out a [`ShapeId`] on insertion so that one
//! particular entry can be addressed even when duplicates exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid shape ID format: expected 's-{{number}}', got '{0}'")]
    InvalidShapeId(String),
}

/// Shape ID in the format `s-{sequence}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    sequence: u64,
}

impl ShapeId {
    /// Creates an ID from its sequence number
    pub fn new(sequence: u64) -> Self {
        Self { sequence }
    }

    /// Returns the sequence portion of the ID
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the ID that follows this one
    pub fn next(&self) -> Self {
        Self {
            sequence: self.sequence + 1,
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s-{}", self.sequence)
    }
}

impl FromStr for ShapeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("s-")
            .ok_or_else(|| IdError::InvalidShapeId(s.to_string()))?;

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::InvalidShapeId(s.to_string()));
        }

        let sequence = digits
            .parse()
            .map_err(|_| IdError::InvalidShapeId(s.to_string()))?;

        Ok(Self { sequence })
    }
}

impl TryFrom<String> for ShapeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}
