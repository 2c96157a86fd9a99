//! Area operation
//!
//! Closed-form areas, in the squared units of the input dimensions:
//!
//! | Shape | Area |
//! |-------|------|
//! | Circle | `π × radius²` |
//! | Square | `side²` |
//! | Triangle | `0.5 × base × height` |

use std::f64::consts::PI;

use super::shape::{Circle, Shape, Square, Triangle};
use super::visitor::ShapeVisitor;

/// Computes the area of the visited shape
///
/// Stateless: the area is the return value of each visit, so one instance
/// can be reused across any number of shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaVisitor;

impl ShapeVisitor for AreaVisitor {
    type Output = f64;

    fn visit_circle(&mut self, circle: &Circle) -> f64 {
        PI * circle.radius() * circle.radius()
    }

    fn visit_square(&mut self, square: &Square) -> f64 {
        square.side() * square.side()
    }

    fn visit_triangle(&mut self, triangle: &Triangle) -> f64 {
        0.5 * triangle.base() * triangle.height()
    }
}

/// Returns the area of `shape`
pub fn compute_area(shape: &Shape) -> f64 {
    shape.accept(&mut AreaVisitor)
}
