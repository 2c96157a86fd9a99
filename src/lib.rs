//! visitor-shapes - shape areas through the Visitor pattern
//!
//! Shapes form a closed sum type ([`Shape`]); operations over them implement
//! [`ShapeVisitor`] and are dispatched with [`Shape::accept`]. The area
//! operation and an ordered [`ShapeCollection`] with totals sit on top, and a
//! small CLI drives them.

pub mod domain;
pub mod config;
pub mod cli;

pub use domain::{
    compute_area, describe, AreaReport, Circle, Shape, ShapeCollection, ShapeError, ShapeId,
    ShapeKind, ShapeVisitor, Square, Triangle,
};
