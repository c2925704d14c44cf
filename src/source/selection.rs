//! Row selection state for a column data source.

use crate::config::SelectionMode;

/// Sorted, duplicate-free set of selected row indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Builds a selection from arbitrary indices (sorted and deduplicated).
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Combines a fresh hit with the current selection.
    pub fn update(&mut self, hit: &[usize], mode: SelectionMode) {
        let hit = Selection::from_indices(hit.iter().copied());
        self.indices = match mode {
            SelectionMode::Replace => hit.indices,
            SelectionMode::Append => {
                let mut merged = std::mem::take(&mut self.indices);
                merged.extend(hit.indices);
                Selection::from_indices(merged).indices
            }
            SelectionMode::Intersect => self
                .indices
                .iter()
                .copied()
                .filter(|index| hit.contains(*index))
                .collect(),
            SelectionMode::Subtract => self
                .indices
                .iter()
                .copied()
                .filter(|index| !hit.contains(*index))
                .collect(),
        };
    }

    /// Adjusts the selection after the first `count` rows were removed.
    pub fn shift_after_eviction(&mut self, count: usize) {
        self.indices = self
            .indices
            .iter()
            .filter(|&&index| index >= count)
            .map(|index| index - count)
            .collect();
    }

    /// Adjusts the selection after the `removed` rows were deleted.
    ///
    /// Removed rows leave the selection; the others shift down by the number
    /// of removed rows before them.
    pub fn remove_rows(&mut self, removed: &Selection) {
        self.indices = self
            .indices
            .iter()
            .filter(|&&index| !removed.contains(index))
            .map(|&index| index - removed.indices.partition_point(|&r| r < index))
            .collect();
    }
}
