//! Shape domain model
//!
//! Shapes are immutable values with a display name and kind-specific
//! dimensions. Every dimension is validated at construction, so any `Shape`
//! that exists has strictly positive, finite dimensions and a non-empty name.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::area::AreaVisitor;
use super::visitor::ShapeVisitor;

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("Invalid {kind} {dimension}: expected a positive number with a finite area, got {value}")]
    InvalidDimension {
        kind: ShapeKind,
        dimension: &'static str,
        value: f64,
    },

    #[error("Unknown shape kind '{0}': expected circle, square or triangle")]
    UnknownKind(String),
}

/// The closed set of shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// All kinds, in declaration order
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    /// Returns the lowercase label used in input and JSON
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Returns the name given to a shape whose supplied name is blank
    pub fn default_name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// Number of dimensions a shape of this kind carries
    pub fn dimension_count(&self) -> usize {
        match self {
            ShapeKind::Circle | ShapeKind::Square => 1,
            ShapeKind::Triangle => 2,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShapeError::UnknownKind(s.to_string()))
    }
}

/// Trims `name`, falling back to the kind's default when nothing is left
fn display_name(kind: ShapeKind, name: impl Into<String>) -> String {
    let name = name.into();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        kind.default_name().to_string()
    } else if trimmed.len() == name.len() {
        name
    } else {
        trimmed.to_string()
    }
}

/// Rejects zero, negative, NaN and infinite dimensions
fn positive(kind: ShapeKind, dimension: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension {
            kind,
            dimension,
            value,
        })
    }
}

/// Rejects dimensions whose area overflows `f64`
fn finite_area(
    kind: ShapeKind,
    dimension: &'static str,
    value: f64,
    area: f64,
) -> Result<(), ShapeError> {
    if area.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::InvalidDimension {
            kind,
            dimension,
            value,
        })
    }
}

/// A circle described by its radius
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    name: String,
    radius: f64,
}

impl Circle {
    pub fn new(name: impl Into<String>, radius: f64) -> Result<Self, ShapeError> {
        let circle = Self {
            radius: positive(ShapeKind::Circle, "radius", radius)?,
            name: display_name(ShapeKind::Circle, name),
        };
        finite_area(ShapeKind::Circle, "radius", radius, AreaVisitor.visit_circle(&circle))?;
        Ok(circle)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// A square described by its side length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Square {
    name: String,
    side: f64,
}

impl Square {
    pub fn new(name: impl Into<String>, side: f64) -> Result<Self, ShapeError> {
        let square = Self {
            side: positive(ShapeKind::Square, "side", side)?,
            name: display_name(ShapeKind::Square, name),
        };
        finite_area(ShapeKind::Square, "side", side, AreaVisitor.visit_square(&square))?;
        Ok(square)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

/// A triangle described by its base and perpendicular height
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triangle {
    name: String,
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(name: impl Into<String>, base: f64, height: f64) -> Result<Self, ShapeError> {
        let triangle = Self {
            base: positive(ShapeKind::Triangle, "base", base)?,
            height: positive(ShapeKind::Triangle, "height", height)?,
            name: display_name(ShapeKind::Triangle, name),
        };
        // report the larger of the two
        let (dimension, value) = if base >= height {
            ("base", base)
        } else {
            ("height", height)
        };
        finite_area(
            ShapeKind::Triangle,
            dimension,
            value,
            AreaVisitor.visit_triangle(&triangle),
        )?;
        Ok(triangle)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Any shape
///
/// Operations over shapes are written as [`ShapeVisitor`](super::ShapeVisitor)
/// implementations and invoked through [`Shape::accept`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle(Circle),
    Square(Square),
    Triangle(Triangle),
}

impl Shape {
    /// Creates a circle shape
    pub fn circle(name: impl Into<String>, radius: f64) -> Result<Self, ShapeError> {
        Circle::new(name, radius).map(Shape::from)
    }

    /// Creates a square shape
    pub fn square(name: impl Into<String>, side: f64) -> Result<Self, ShapeError> {
        Square::new(name, side).map(Shape::from)
    }

    /// Creates a triangle shape
    pub fn triangle(name: impl Into<String>, base: f64, height: f64) -> Result<Self, ShapeError> {
        Triangle::new(name, base, height).map(Shape::from)
    }

    /// Returns the kind tag of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Returns the display name of this shape
    pub fn name(&self) -> &str {
        match self {
            Shape::Circle(c) => c.name(),
            Shape::Square(s) => s.name(),
            Shape::Triangle(t) => t.name(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Shape::Square(square)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_keep_dimensions() {
        let c = Circle::new("Wheel", 2.5).unwrap();
        assert_eq!(c.name(), "Wheel");
        assert_eq!(c.radius(), 2.5);

        let t = Triangle::new("Roof", 8.0, 3.0).unwrap();
        assert_eq!(t.base(), 8.0);
        assert_eq!(t.height(), 3.0);
    }

    #[test]
    fn zero_and_negative_dimensions_are_rejected() {
        assert_eq!(
            Circle::new("c", 0.0),
            Err(ShapeError::InvalidDimension {
                kind: ShapeKind::Circle,
                dimension: "radius",
                value: 0.0,
            })
        );
        assert!(Square::new("s", -1.0).is_err());
        assert!(Triangle::new("t", 3.0, -0.5).is_err());
        assert!(Triangle::new("t", -3.0, 0.5).is_err());
    }

    #[test]
    fn non_finite_dimensions_are_rejected() {
        assert!(Circle::new("c", f64::NAN).is_err());
        assert!(Square::new("s", f64::INFINITY).is_err());
        assert!(Triangle::new("t", 1.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn triangle_reports_the_offending_dimension() {
        let err = Triangle::new("t", 4.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid triangle height: expected a positive number with a finite area, got 0"
        );
    }

    #[test]
    fn dimensions_with_overflowing_area_are_rejected() {
        assert_eq!(
            Square::new("big", 1e200),
            Err(ShapeError::InvalidDimension {
                kind: ShapeKind::Square,
                dimension: "side",
                value: 1e200,
            })
        );
        assert!(Circle::new("big", 1e160).is_err());
        assert!(matches!(
            Triangle::new("big", 3.0, f64::MAX),
            Err(ShapeError::InvalidDimension { dimension: "height", .. })
        ));
        assert!(matches!(
            Triangle::new("big", 1e300, 1e10),
            Err(ShapeError::InvalidDimension { dimension: "base", .. })
        ));
    }

    #[test]
    fn largest_representable_areas_are_accepted() {
        assert!(Square::new("edge", 1e154).is_ok());
        assert!(Triangle::new("thin", f64::MAX, 1.0).is_ok());
    }

    #[test]
    fn variant_structs_convert_into_shape() {
        let circle = Circle::new("Wheel", 2.0).unwrap();
        let shape: Shape = circle.clone().into();

        assert_eq!(shape, Shape::Circle(circle));
        assert_eq!(Shape::from(Square::new("s", 1.0).unwrap()).kind(), ShapeKind::Square);
    }

    #[test]
    fn blank_names_fall_back_to_kind_default() {
        assert_eq!(Shape::circle("", 1.0).unwrap().name(), "Circle");
        assert_eq!(Shape::square("   ", 1.0).unwrap().name(), "Square");
        assert_eq!(Shape::triangle("\t", 1.0, 1.0).unwrap().name(), "Triangle");
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(Shape::square("  Tile ", 1.0).unwrap().name(), "Tile");
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Shape::circle("a", 1.0).unwrap().kind(), ShapeKind::Circle);
        assert_eq!(Shape::square("a", 1.0).unwrap().kind(), ShapeKind::Square);
        assert_eq!(
            Shape::triangle("a", 1.0, 1.0).unwrap().kind(),
            ShapeKind::Triangle
        );
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
        assert_eq!(" SQUARE ".parse::<ShapeKind>().unwrap(), ShapeKind::Square);
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(ShapeError::UnknownKind("hexagon".to_string()))
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let shape = Shape::triangle("Roof", 8.0, 3.0).unwrap();
        let json = serde_json::to_value(&shape).unwrap();

        assert_eq!(json["kind"], "triangle");
        assert_eq!(json["name"], "Roof");
        assert_eq!(json["base"], 8.0);
        assert_eq!(json["height"], 3.0);
    }
}
