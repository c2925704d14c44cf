//! Writing box extents and translations into a data source.

use super::BoxGlyph;
use crate::config::Dimensions;
use crate::source::{ColumnDataSource, Value};

/// Parameters of an append that are owned by the tool configuration.
#[derive(Debug, Clone, Copy)]
pub struct ExtentOptions<'a> {
    /// Maximum number of rows kept in the source (0 = unlimited)
    pub num_objects: usize,
    /// Placeholder for columns that received no value
    pub empty_value: &'a Value,
}

impl BoxGlyph {
    /// Field values for the data-space box spanning `(x0, y0)` to `(x1, y1)`.
    ///
    /// Neither form normalizes the interval order, so an inverted drag yields a
    /// negative width/height or `right < left`.
    fn extent_fields(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> [(Option<&str>, f64); 4] {
        match self {
            BoxGlyph::Rect {
                x,
                y,
                width,
                height,
            } => [
                (x.as_deref(), (x0 + x1) / 2.0),
                (y.as_deref(), (y0 + y1) / 2.0),
                (width.as_deref(), x1 - x0),
                (height.as_deref(), y1 - y0),
            ],
            BoxGlyph::Quad {
                left,
                bottom,
                right,
                top,
            } => [
                (left.as_deref(), x0),
                (bottom.as_deref(), y0),
                (right.as_deref(), x1),
                (top.as_deref(), y1),
            ],
        }
    }

    /// Appends a new box row built from the data-space intervals.
    ///
    /// Evicts the oldest rows first when `num_objects` would be exceeded, then
    /// pads every column left short so all columns end up the same length.
    pub fn append_extent(
        &self,
        source: &mut ColumnDataSource,
        (x0, x1): (f64, f64),
        (y0, y1): (f64, f64),
        options: ExtentOptions<'_>,
    ) {
        let evicted = source.evict_for_append(options.num_objects);
        if evicted > 0 {
            log::debug!(
                "Evicted {evicted} row(s) to honor num_objects = {}",
                options.num_objects
            );
        }

        let rows = source.len() + 1;
        for (column, value) in self.extent_fields(x0, y0, x1, y1) {
            if let Some(column) = column {
                source.get_or_create_column(column).push(Value::Number(value));
            }
        }
        source.pad_columns(rows, options.empty_value);
    }

    /// Overwrites the last row with the box built from the data-space intervals.
    ///
    /// Returns `false` when the source has no rows to update.
    pub fn update_last_extent(
        &self,
        source: &mut ColumnDataSource,
        (x0, x1): (f64, f64),
        (y0, y1): (f64, f64),
    ) -> bool {
        let Some(row) = source.len().checked_sub(1) else {
            return false;
        };
        for (column, value) in self.extent_fields(x0, y0, x1, y1) {
            if let Some(column) = column {
                source.set_value(column, row, Value::Number(value));
            }
        }
        true
    }

    /// Translates every selected row by a data-space delta.
    ///
    /// Rect moves its center; Quad moves both edges of an axis together, and
    /// only when both edges of that axis are bound.
    pub fn drag_selected(
        &self,
        source: &mut ColumnDataSource,
        dx: f64,
        dy: f64,
        dims: Dimensions,
    ) {
        let (x_columns, y_columns): (Vec<&str>, Vec<&str>) = match self {
            BoxGlyph::Rect { x, y, .. } => (
                x.as_deref().into_iter().collect(),
                y.as_deref().into_iter().collect(),
            ),
            BoxGlyph::Quad {
                left,
                bottom,
                right,
                top,
            } => (
                edge_pair(left.as_deref(), right.as_deref()),
                edge_pair(bottom.as_deref(), top.as_deref()),
            ),
        };

        let rows = source.selected().indices().to_vec();
        for row in rows {
            if dims.edits_width() {
                for column in &x_columns {
                    source.add_to(column, row, dx);
                }
            }
            if dims.edits_height() {
                for column in &y_columns {
                    source.add_to(column, row, dy);
                }
            }
        }
    }
}

fn edge_pair<'a>(low: Option<&'a str>, high: Option<&'a str>) -> Vec<&'a str> {
    match (low, high) {
        (Some(low), Some(high)) => vec![low, high],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionMode;

    static NULL: Value = Value::Null;

    fn options(num_objects: usize) -> ExtentOptions<'static> {
        ExtentOptions {
            num_objects,
            empty_value: &NULL,
        }
    }

    #[test]
    fn rect_append_computes_center_and_size() {
        let mut source = ColumnDataSource::new();
        BoxGlyph::rect().append_extent(&mut source, (10.0, 50.0), (10.0, 40.0), options(0));

        assert_eq!(source.number("x", 0), Some(30.0));
        assert_eq!(source.number("y", 0), Some(25.0));
        assert_eq!(source.number("width", 0), Some(40.0));
        assert_eq!(source.number("height", 0), Some(30.0));
    }

    #[test]
    fn inverted_intervals_are_not_normalized() {
        let mut source = ColumnDataSource::new();
        BoxGlyph::rect().append_extent(&mut source, (50.0, 10.0), (40.0, 10.0), options(0));
        assert_eq!(source.number("width", 0), Some(-40.0));
        assert_eq!(source.number("height", 0), Some(-30.0));

        BoxGlyph::quad().append_extent(&mut source, (50.0, 10.0), (40.0, 10.0), options(0));
        assert_eq!(source.number("left", 1), Some(50.0));
        assert_eq!(source.number("right", 1), Some(10.0));
        assert_eq!(source.number("top", 1), Some(10.0));
    }

    #[test]
    fn quad_top_uses_second_y_bound() {
        let mut source = ColumnDataSource::new();
        BoxGlyph::quad().append_extent(&mut source, (1.0, 2.0), (3.0, 4.0), options(0));
        assert_eq!(source.number("left", 0), Some(1.0));
        assert_eq!(source.number("bottom", 0), Some(3.0));
        assert_eq!(source.number("right", 0), Some(2.0));
        assert_eq!(source.number("top", 0), Some(4.0));
    }

    #[test]
    fn append_pads_unbound_and_extra_columns() {
        let mut source = ColumnDataSource::from_columns([
            ("x", vec![Value::from(0.0)]),
            ("width", vec![Value::from(1.0)]),
            ("color", vec![Value::from("red")]),
        ]);
        let glyph = BoxGlyph::Rect {
            x: Some("x".into()),
            y: None,
            width: Some("width".into()),
            height: None,
        };
        let empty = Value::from("grey");
        glyph.append_extent(
            &mut source,
            (0.0, 4.0),
            (0.0, 2.0),
            ExtentOptions {
                num_objects: 0,
                empty_value: &empty,
            },
        );

        assert!(source.is_consistent());
        assert_eq!(source.len(), 2);
        assert_eq!(source.column("color").unwrap()[1], Value::from("grey"));
        assert!(source.column("y").is_none());
    }

    #[test]
    fn append_evicts_oldest_rows_over_cap() {
        let mut source = ColumnDataSource::new();
        for i in 0..4 {
            let v = i as f64;
            BoxGlyph::quad().append_extent(&mut source, (v, v), (v, v), options(2));
        }
        assert_eq!(source.len(), 2);
        assert_eq!(source.number("left", 0), Some(2.0));
        assert_eq!(source.number("left", 1), Some(3.0));
    }

    #[test]
    fn update_last_row_in_place() {
        let mut source = ColumnDataSource::new();
        let glyph = BoxGlyph::rect();
        assert!(!glyph.update_last_extent(&mut source, (0.0, 1.0), (0.0, 1.0)));

        glyph.append_extent(&mut source, (0.0, 0.0), (0.0, 0.0), options(0));
        glyph.append_extent(&mut source, (5.0, 5.0), (5.0, 5.0), options(0));
        assert!(glyph.update_last_extent(&mut source, (5.0, 9.0), (5.0, 7.0)));

        assert_eq!(source.len(), 2);
        assert_eq!(source.number("x", 0), Some(0.0));
        assert_eq!(source.number("x", 1), Some(7.0));
        assert_eq!(source.number("height", 1), Some(2.0));
    }

    #[test]
    fn quad_drag_translates_both_edges() {
        let mut source = ColumnDataSource::new();
        let glyph = BoxGlyph::quad();
        glyph.append_extent(&mut source, (5.0, 5.0), (5.0, 5.0), options(0));
        source.select(&[0], SelectionMode::Replace);

        glyph.drag_selected(&mut source, 3.0, -2.0, Dimensions::Both);

        assert_eq!(source.number("left", 0), Some(8.0));
        assert_eq!(source.number("right", 0), Some(8.0));
        assert_eq!(source.number("top", 0), Some(3.0));
        assert_eq!(source.number("bottom", 0), Some(3.0));
    }

    #[test]
    fn quad_drag_skips_half_bound_axis() {
        let mut source = ColumnDataSource::from_columns([
            ("l", vec![Value::from(1.0)]),
            ("b", vec![Value::from(1.0)]),
            ("t", vec![Value::from(2.0)]),
        ]);
        source.select(&[0], SelectionMode::Replace);
        let glyph = BoxGlyph::Quad {
            left: Some("l".into()),
            bottom: Some("b".into()),
            right: None,
            top: Some("t".into()),
        };

        glyph.drag_selected(&mut source, 10.0, 10.0, Dimensions::Both);

        assert_eq!(source.number("l", 0), Some(1.0));
        assert_eq!(source.number("b", 0), Some(11.0));
        assert_eq!(source.number("t", 0), Some(12.0));
    }

    #[test]
    fn rect_drag_respects_dimension_filter() {
        let mut source = ColumnDataSource::new();
        let glyph = BoxGlyph::rect();
        glyph.append_extent(&mut source, (0.0, 2.0), (0.0, 2.0), options(0));
        glyph.append_extent(&mut source, (4.0, 6.0), (4.0, 6.0), options(0));
        source.select(&[1], SelectionMode::Replace);

        glyph.drag_selected(&mut source, 1.0, 1.0, Dimensions::Width);

        assert_eq!(source.number("x", 0), Some(1.0));
        assert_eq!(source.number("x", 1), Some(6.0));
        assert_eq!(source.number("y", 1), Some(5.0));
        assert_eq!(source.number("width", 1), Some(2.0));
    }
}
