//! Shape descriptions typed by the user
//!
//! Syntax: `kind`, `kind:dims` or `kind:name:dims`, where dims is `R` for a
//! circle, `S` for a square and `BxH` for a triangle.
//!
//! ```text
//! circle                 # default name and radius
//! square:60              # default name, side 60
//! triangle:Roof:80x50    # named triangle
//! circle::12             # empty name, falls back to "Circle"
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::config::DefaultDimensions;
use crate::domain::{Shape, ShapeError, ShapeKind};

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Empty shape description")]
    Empty,

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("A {kind} takes {expected} dimension(s), got {found}")]
    DimensionCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },

    #[error("Too many ':'-separated parts in '{0}': expected kind[:name]:dims")]
    TooManyParts(String),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// A parsed, not yet validated, shape description
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub name: Option<String>,
    pub dims: Option<Vec<f64>>,
}

impl ShapeSpec {
    /// Builds the shape, filling omitted dimensions from `defaults`
    pub fn build(&self, defaults: &DefaultDimensions) -> Result<Shape, InputError> {
        let dims = match &self.dims {
            Some(dims) => dims.clone(),
            None => defaults.for_kind(self.kind),
        };

        let expected = self.kind.dimension_count();
        if dims.len() != expected {
            return Err(InputError::DimensionCount {
                kind: self.kind,
                expected,
                found: dims.len(),
            });
        }

        let name = self.name.clone().unwrap_or_default();
        let shape = match self.kind {
            ShapeKind::Circle => Shape::circle(name, dims[0])?,
            ShapeKind::Square => Shape::square(name, dims[0])?,
            ShapeKind::Triangle => Shape::triangle(name, dims[0], dims[1])?,
        };
        Ok(shape)
    }
}

fn parse_number(s: &str) -> Result<f64, InputError> {
    s.trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber(s.trim().to_string()))
}

fn parse_dims(s: &str) -> Result<Vec<f64>, InputError> {
    s.split(['x', 'X']).map(parse_number).collect()
}

impl FromStr for ShapeSpec {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InputError::Empty);
        }

        let parts: Vec<&str> = s.split(':').collect();
        let kind: ShapeKind = parts[0].parse()?;

        let (name, dims) = match parts.as_slice() {
            [_] => (None, None),
            [_, dims] => (None, Some(parse_dims(dims)?)),
            [_, name, dims] => (Some(name.to_string()), Some(parse_dims(dims)?)),
            _ => return Err(InputError::TooManyParts(s.to_string())),
        };

        Ok(Self { kind, name, dims })
    }
}
