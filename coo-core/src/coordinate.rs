//! Coordinate map: the output of an extraction
//!
//! A `CoordinateMap` maps unique `(row, col)` positions to values. Entries
//! are kept in insertion order, which for an extraction is the column-major
//! scan order, and indexed by position for O(1) lookup. Equality ignores
//! order.

use alloc::vec::Vec;
use hashbrown::HashMap;

/// Position of an entry as `(row, col)`
pub type Position = (usize, usize);

/// A single `(row, col, value)` entry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triplet<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Triplet<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    pub const fn position(&self) -> Position {
        (self.row, self.col)
    }

    pub fn into_pair(self) -> (Position, T) {
        ((self.row, self.col), self.value)
    }
}

/// Insertion-ordered map from position to value
#[derive(Debug, Clone)]
pub struct CoordinateMap<T> {
    entries: Vec<Triplet<T>>,
    index: HashMap<Position, usize>,
}

impl<T> Default for CoordinateMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CoordinateMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the previous value at that position
    ///
    /// Replacing keeps the original insertion slot.
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Option<T> {
        match self.index.get(&(row, col)) {
            Some(&slot) => Some(core::mem::replace(&mut self.entries[slot].value, value)),
            None => {
                self.index.insert((row, col), self.entries.len());
                self.entries.push(Triplet::new(row, col, value));
                None
            }
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.index
            .get(&(row, col))
            .map(|&slot| &self.entries[slot].value)
    }

    pub fn contains_key(&self, row: usize, col: usize) -> bool {
        self.index.contains_key(&(row, col))
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of non-zero entries; same as `len`
    pub fn nnz(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Position, &T)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.position(), &entry.value))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.entries.iter().map(Triplet::position)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Entries as a slice of triplets in insertion order
    pub fn as_triplets(&self) -> &[Triplet<T>] {
        &self.entries
    }

    /// Consume into `(row, col, value)` tuples in insertion order
    pub fn into_triplets(self) -> Vec<(usize, usize, T)> {
        self.entries
            .into_iter()
            .map(|entry| (entry.row, entry.col, entry.value))
            .collect()
    }

    /// Consume into parallel `(rows, cols, values)` arrays
    pub fn into_arrays(self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        let nnz = self.entries.len();
        let mut rows = Vec::with_capacity(nnz);
        let mut cols = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);
        for entry in self.entries {
            rows.push(entry.row);
            cols.push(entry.col);
            values.push(entry.value);
        }
        (rows, cols, values)
    }
}

impl<T: PartialEq> PartialEq for CoordinateMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|entry| other.get(entry.row, entry.col) == Some(&entry.value))
    }
}

impl<T> Extend<(Position, T)> for CoordinateMap<T> {
    fn extend<I: IntoIterator<Item = (Position, T)>>(&mut self, iter: I) {
        for ((row, col), value) in iter {
            self.insert(row, col, value);
        }
    }
}

impl<T> Extend<Triplet<T>> for CoordinateMap<T> {
    fn extend<I: IntoIterator<Item = Triplet<T>>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry.row, entry.col, entry.value);
        }
    }
}

impl<T> FromIterator<(Position, T)> for CoordinateMap<T> {
    fn from_iter<I: IntoIterator<Item = (Position, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<T> FromIterator<Triplet<T>> for CoordinateMap<T> {
    fn from_iter<I: IntoIterator<Item = Triplet<T>>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<T> IntoIterator for CoordinateMap<T> {
    type Item = (Position, T);
    type IntoIter = core::iter::Map<alloc::vec::IntoIter<Triplet<T>>, fn(Triplet<T>) -> (Position, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map(Triplet::into_pair as fn(Triplet<T>) -> (Position, T))
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CoordinateMap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for CoordinateMap<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Triplet<T>>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_insert_and_lookup() {
        let mut map = CoordinateMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert(1, 0, 3), None);
        assert_eq!(map.insert(0, 1, 2), None);

        assert_eq!(map.len(), 2);
        assert_eq!(map.nnz(), 2);
        assert_eq!(map.get(1, 0), Some(&3));
        assert_eq!(map.get(0, 0), None);
        assert!(map.contains_key(0, 1));
        assert!(!map.contains_key(1, 1));
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut map = CoordinateMap::new();
        map.insert(0, 0, 1.0);
        map.insert(2, 2, 2.0);
        assert_eq!(map.insert(0, 0, 5.0), Some(1.0));

        assert_eq!(map.len(), 2);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec![(0, 0), (2, 2)]);
        assert_eq!(map.get(0, 0), Some(&5.0));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: CoordinateMap<i32> = [((0, 1), 2), ((1, 0), 3)].into_iter().collect();
        let b: CoordinateMap<i32> = [((1, 0), 3), ((0, 1), 2)].into_iter().collect();
        let c: CoordinateMap<i32> = [((1, 0), 3), ((0, 1), 4)].into_iter().collect();
        let d: CoordinateMap<i32> = [((1, 0), 3)].into_iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(d, a);
    }

    #[test]
    fn test_conversions() {
        let map: CoordinateMap<u8> = [Triplet::new(2, 0, 7), Triplet::new(0, 1, 9)]
            .into_iter()
            .collect();

        assert_eq!(map.as_triplets()[0].position(), (2, 0));
        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, vec![7, 9]);

        assert_eq!(map.clone().into_triplets(), vec![(2, 0, 7), (0, 1, 9)]);
        assert_eq!(
            map.clone().into_arrays(),
            (vec![2, 0], vec![0, 1], vec![7, 9])
        );

        let pairs: Vec<_> = map.into_iter().collect();
        assert_eq!(pairs, vec![((2, 0), 7), ((0, 1), 9)]);
    }
}
