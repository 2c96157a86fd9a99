//! Operation dispatch over shapes
//!
//! An operation implements [`ShapeVisitor`], with one method per shape
//! variant. [`Shape::accept`] selects the method matching the shape's
//! variant, so a single call site works for every shape.
//!
//! The trait has no default methods and `accept` matches without a wildcard
//! arm: adding a variant to [`Shape`] fails to compile until every operation
//! handles it.

use super::shape::{Circle, Shape, Square, Triangle};

/// An operation over the closed set of shape variants
pub trait ShapeVisitor {
    /// Value produced for each visited shape
    type Output;

    fn visit_circle(&mut self, circle: &Circle) -> Self::Output;
    fn visit_square(&mut self, square: &Square) -> Self::Output;
    fn visit_triangle(&mut self, triangle: &Triangle) -> Self::Output;
}

impl Shape {
    /// Dispatches to the visitor method for this shape's variant
    pub fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: ShapeVisitor + ?Sized,
    {
        match self {
            Shape::Circle(circle) => visitor.visit_circle(circle),
            Shape::Square(square) => visitor.visit_square(square),
            Shape::Triangle(triangle) => visitor.visit_triangle(triangle),
        }
    }
}
