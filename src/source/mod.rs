//! Column-oriented data source backing the edited glyphs.
//!
//! A [`ColumnDataSource`] maps column names to equally long value sequences;
//! row `i` across the columns describes one box. Besides the data it owns the
//! row [`Selection`] and a change log the host drains after each event, in the
//! same spirit as a dirty-region tracker: mutations record [`SourceChange::Redraw`]
//! for live preview, and gesture boundaries record [`SourceChange::Committed`].

pub mod selection;

pub use selection::Selection;

use crate::config::SelectionMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One cell of a column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Value {
    /// Missing value (also the default padding placeholder)
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

/// Notifications recorded by a source, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceChange {
    /// Values changed; views should repaint (live preview)
    Redraw,
    /// The selection was cleared by the edit tool
    SelectionCleared,
    /// A gesture finished; downstream observers should pick up the data
    Committed,
}

/// In-memory column data source.
#[derive(Debug, Clone, Default)]
pub struct ColumnDataSource {
    columns: BTreeMap<String, Vec<Value>>,
    selected: Selection,
    changes: Vec<SourceChange>,
}

impl ColumnDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from named columns.
    pub fn from_columns<I, K>(columns: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<Value>)>,
        K: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Self::default()
        }
    }

    pub fn columns(&self) -> &BTreeMap<String, Vec<Value>> {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Returns the column, creating it (padded with nulls to the current row count) if absent.
    pub fn get_or_create_column(&mut self, name: &str) -> &mut Vec<Value> {
        let rows = self.len();
        self.columns
            .entry(name.to_string())
            .or_insert_with(|| vec![Value::Null; rows])
    }

    /// Number of rows (length of the longest column).
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every column has the same length.
    pub fn is_consistent(&self) -> bool {
        let mut lengths = self.columns.values().map(Vec::len);
        match lengths.next() {
            Some(first) => lengths.all(|len| len == first),
            None => true,
        }
    }

    /// Numeric value at `row` of `column`, if present and numeric.
    pub fn number(&self, column: &str, row: usize) -> Option<f64> {
        self.columns.get(column)?.get(row)?.as_f64()
    }

    /// Overwrites one cell. Returns `false` if the column or row does not exist.
    pub fn set_value(&mut self, column: &str, row: usize, value: Value) -> bool {
        match self.columns.get_mut(column).and_then(|c| c.get_mut(row)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Adds `delta` to a numeric cell. Non-numeric or missing cells are left alone.
    pub fn add_to(&mut self, column: &str, row: usize, delta: f64) -> bool {
        match self.columns.get_mut(column).and_then(|c| c.get_mut(row)) {
            Some(Value::Number(n)) => {
                *n += delta;
                true
            }
            _ => false,
        }
    }

    /// Pads every column shorter than `rows` with `placeholder`.
    pub fn pad_columns(&mut self, rows: usize, placeholder: &Value) {
        for values in self.columns.values_mut() {
            if values.len() < rows {
                values.resize(rows, placeholder.clone());
            }
        }
    }

    /// Drops the oldest rows so that one more row fits under `max_rows`.
    ///
    /// `max_rows == 0` means unlimited. Returns the number of rows removed.
    pub fn evict_for_append(&mut self, max_rows: usize) -> usize {
        if max_rows == 0 {
            return 0;
        }
        let drop = (self.len() + 1).saturating_sub(max_rows);
        if drop == 0 {
            return 0;
        }
        for values in self.columns.values_mut() {
            let n = drop.min(values.len());
            values.drain(..n);
        }
        self.selected.shift_after_eviction(drop);
        drop
    }

    /// Removes the given rows from every column.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        let doomed = Selection::from_indices(rows.iter().copied());
        if doomed.is_empty() {
            return;
        }
        for values in self.columns.values_mut() {
            let mut row = 0;
            values.retain(|_| {
                let keep = !doomed.contains(row);
                row += 1;
                keep
            });
        }
        self.selected.remove_rows(&doomed);
    }

    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    /// Combines `hit` with the current selection.
    pub fn select(&mut self, hit: &[usize], mode: SelectionMode) {
        self.selected.update(hit, mode);
    }

    /// Clears the selection and records it.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.changes.push(SourceChange::SelectionCleared);
    }

    /// Records a repaint request after a value change.
    pub fn touch(&mut self) {
        self.changes.push(SourceChange::Redraw);
    }

    /// Records the end of a gesture.
    pub fn commit(&mut self) {
        self.changes.push(SourceChange::Committed);
    }

    /// Returns the changes recorded since the last call.
    pub fn take_changes(&mut self) -> Vec<SourceChange> {
        std::mem::take(&mut self.changes)
    }

    /// Changes recorded so far, without draining them.
    pub fn pending_changes(&self) -> &[SourceChange] {
        &self.changes
    }
}
