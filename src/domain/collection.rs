//! Ordered shape collection
//!
//! Entries keep insertion order and duplicates are allowed. Each entry gets a
//! [`ShapeId`] when added; removal is by that ID, so of two equal shapes only
//! the addressed one is removed. IDs are never reused within a collection,
//! not even after [`ShapeCollection::clear`].

use serde::Serialize;

use super::area::AreaVisitor;
use super::describe::describe;
use super::id::ShapeId;
use super::shape::{Shape, ShapeError};
use super::visitor::ShapeVisitor;

/// A shape together with the ID it was added under
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeEntry {
    pub id: ShapeId,
    pub shape: Shape,
}

/// Area of one shape within an [`AreaReport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaEntry {
    pub id: ShapeId,
    pub description: String,
    pub area: f64,
}

/// Per-shape areas and their sum, in collection order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaReport {
    pub entries: Vec<AreaEntry>,
    pub total: f64,
}

/// An ordered collection of shapes
#[derive(Debug, Clone)]
pub struct ShapeCollection {
    entries: Vec<ShapeEntry>,
    next_id: ShapeId,
}

impl Default for ShapeCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: ShapeId::new(1),
        }
    }

    /// Creates a collection preloaded with one shape of each kind
    pub fn demo() -> Result<Self, ShapeError> {
        let mut collection = Self::new();
        collection.add(Shape::circle("Circle A", 40.0)?);
        collection.add(Shape::square("Square A", 60.0)?);
        collection.add(Shape::triangle("Triangle A", 80.0, 50.0)?);
        Ok(collection)
    }

    /// Appends a shape and returns the ID it can be addressed by
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = self.next_id;
        self.next_id = id.next();
        self.entries.push(ShapeEntry { id, shape });
        id
    }

    /// Removes the entry with the given ID, keeping the order of the rest
    ///
    /// Returns `None` and leaves the collection untouched if no entry has
    /// that ID.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).shape)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the shape with the given ID
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.shape)
    }

    /// Returns the number of shapes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ShapeEntry> {
        self.entries.iter()
    }

    /// Iterates over shapes in insertion order
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.entries.iter().map(|e| &e.shape)
    }

    /// Applies `visitor` to every shape in insertion order
    pub fn visit_all<V>(&self, visitor: &mut V) -> Vec<(ShapeId, V::Output)>
    where
        V: ShapeVisitor + ?Sized,
    {
        self.entries
            .iter()
            .map(|e| (e.id, e.shape.accept(visitor)))
            .collect()
    }

    /// Computes every shape's area and the running total
    pub fn total_area(&self) -> AreaReport {
        let mut visitor = AreaVisitor;
        let mut total = 0.0;
        let mut entries = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let area = entry.shape.accept(&mut visitor);
            total += area;
            entries.push(AreaEntry {
                id: entry.id,
                description: describe(&entry.shape),
                area,
            });
        }

        AreaReport { entries, total }
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a ShapeEntry;
    type IntoIter = std::slice::Iter<'a, ShapeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Shape> for ShapeCollection {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let mut collection = Self::new();
        for shape in iter {
            collection.add(shape);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compute_area;

    fn scenario() -> ShapeCollection {
        [
            Shape::circle("A", 40.0).unwrap(),
            Shape::square("B", 60.0).unwrap(),
            Shape::triangle("C", 80.0, 50.0).unwrap(),
        ]
        .into_iter()
        .collect()
    }

    fn names(collection: &ShapeCollection) -> Vec<&str> {
        collection.shapes().map(|s| s.name()).collect()
    }

    #[test]
    fn empty_collection() {
        let collection = ShapeCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert_eq!(collection.total_area().total, 0.0);
        assert!(collection.total_area().entries.is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let collection = scenario();
        assert_eq!(names(&collection), vec!["A", "B", "C"]);

        let ids: Vec<_> = collection.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["s-1", "s-2", "s-3"]);
    }

    #[test]
    fn remove_deletes_one_entry_without_reordering() {
        let mut collection = scenario();
        let removed = collection.remove(ShapeId::new(2)).unwrap();

        assert_eq!(removed.name(), "B");
        assert_eq!(names(&collection), vec!["A", "C"]);
    }

    #[test]
    fn remove_targets_one_of_two_equal_shapes() {
        let mut collection = ShapeCollection::new();
        let twin = Shape::square("Twin", 2.0).unwrap();
        let first = collection.add(twin.clone());
        let second = collection.add(twin.clone());

        assert_eq!(collection.remove(second), Some(twin));
        assert_eq!(collection.len(), 1);
        assert!(collection.get(first).is_some());
        assert!(collection.get(second).is_none());
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let mut collection = scenario();
        assert_eq!(collection.remove(ShapeId::new(99)), None);
        assert_eq!(collection.len(), 3);

        collection.remove(ShapeId::new(1));
        assert_eq!(collection.remove(ShapeId::new(1)), None);
        assert_eq!(names(&collection), vec!["B", "C"]);
    }

    #[test]
    fn clear_empties_and_ids_are_not_reused() {
        let mut collection = scenario();
        collection.clear();
        assert_eq!(collection.len(), 0);

        let id = collection.add(Shape::circle("D", 1.0).unwrap());
        assert_eq!(id, ShapeId::new(4));
    }

    #[test]
    fn total_area_of_scenario() {
        let report = scenario().total_area();

        let areas: Vec<_> = report.entries.iter().map(|e| e.area).collect();
        assert!((areas[0] - 5026.548245743669).abs() < 1e-9);
        assert_eq!(areas[1], 3600.0);
        assert_eq!(areas[2], 2000.0);
        assert!((report.total - 10626.548245743669).abs() < 1e-9);
        assert_eq!(report.entries[1].description, "Square('B', s=60.00)");
    }

    #[test]
    fn total_matches_individual_areas() {
        let collection = scenario();
        let expected: f64 = collection.shapes().map(compute_area).sum();
        assert_eq!(collection.total_area().total, expected);
    }

    #[test]
    fn visit_all_pairs_results_with_ids() {
        let collection = scenario();
        let results = collection.visit_all(&mut AreaVisitor);

        assert_eq!(results.len(), 3);
        assert_eq!(results[2], (ShapeId::new(3), 2000.0));
    }

    #[test]
    fn demo_has_one_shape_per_kind() {
        let demo = ShapeCollection::demo().unwrap();
        assert_eq!(names(&demo), vec!["Circle A", "Square A", "Triangle A"]);
    }

    #[test]
    fn borrowed_collection_is_iterable() {
        let collection = scenario();
        let mut count = 0;
        for entry in &collection {
            assert!(collection.get(entry.id).is_some());
            count += 1;
        }
        assert_eq!(count, 3);
    }
}
