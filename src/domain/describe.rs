//! Human-readable shape descriptions
//!
//! Format: `Circle('Circle A', r=40.00)`, `Square('Tile', s=60.00)`,
//! `Triangle('Roof', b=80.00, h=50.00)`.

use std::fmt;

use super::shape::{Circle, Shape, Square, Triangle};
use super::visitor::ShapeVisitor;

/// Renders the kind, name and dimensions of the visited shape
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeVisitor;

impl ShapeVisitor for DescribeVisitor {
    type Output = String;

    fn visit_circle(&mut self, circle: &Circle) -> String {
        format!("Circle('{}', r={:.2})", circle.name(), circle.radius())
    }

    fn visit_square(&mut self, square: &Square) -> String {
        format!("Square('{}', s={:.2})", square.name(), square.side())
    }

    fn visit_triangle(&mut self, triangle: &Triangle) -> String {
        format!(
            "Triangle('{}', b={:.2}, h={:.2})",
            triangle.name(),
            triangle.base(),
            triangle.height()
        )
    }
}

/// Returns the description of `shape`
pub fn describe(shape: &Shape) -> String {
    shape.accept(&mut DescribeVisitor)
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}
