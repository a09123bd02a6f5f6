use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The ordered set of 0-based input column indices that survive
/// header projection into the output.
///
/// Iteration is always strictly ascending and duplicates are
/// impossible; the type exists so that ordering is a contract of the
/// value rather than an ambient property of whichever container holds
/// the indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainedColumns {
    indices: BTreeSet<usize>,
}

impl RetainedColumns {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize) {
        self.indices.insert(index);
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Ascending iteration over the retained indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// The largest retained index, if any. A row must carry at least
    /// `max_index() + 1` fields to be translatable.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl FromIterator<usize> for RetainedColumns {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_is_ascending_regardless_of_insert_order() {
        let mut retained = RetainedColumns::new();
        retained.insert(4);
        retained.insert(0);
        retained.insert(2);
        retained.insert(4);
        let indices: Vec<usize> = retained.iter().collect();
        assert_eq!(indices, vec![0, 2, 4]);
        assert_eq!(retained.len(), 3);
        assert_eq!(retained.max_index(), Some(4));
    }

    #[test]
    fn empty_set_has_no_max() {
        let retained = RetainedColumns::new();
        assert!(retained.is_empty());
        assert_eq!(retained.max_index(), None);
    }
}
