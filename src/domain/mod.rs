//! Domain models for visitor-shapes
//!
//! Contains the shape model and the operations over it, without any I/O
//! concerns.

mod id;
mod shape;
mod visitor;
mod area;
mod describe;
mod collection;

pub use id::{IdError, ShapeId};
pub use shape::{Circle, Shape, ShapeError, ShapeKind, Square, Triangle};
pub use visitor::ShapeVisitor;
pub use area::{compute_area, AreaVisitor};
pub use describe::{describe, DescribeVisitor};
pub use collection::{AreaEntry, AreaReport, ShapeCollection, ShapeEntry};
