//! Point hit-testing against box rows.

use super::BoxGlyph;
use crate::source::ColumnDataSource;

impl BoxGlyph {
    /// Rows whose box contains the data-space point `(x, y)`.
    ///
    /// Boxes of either orientation are hit; rows with a missing or non-numeric
    /// field, or glyphs with an unbound field, never hit.
    pub fn hit_point(&self, source: &ColumnDataSource, x: f64, y: f64) -> Vec<usize> {
        (0..source.len())
            .filter(|&row| {
                self.bounds(source, row)
                    .is_some_and(|(x0, x1, y0, y1)| x0 <= x && x <= x1 && y0 <= y && y <= y1)
            })
            .collect()
    }

    /// Normalized `(min_x, max_x, min_y, max_y)` of one row.
    fn bounds(&self, source: &ColumnDataSource, row: usize) -> Option<(f64, f64, f64, f64)> {
        let get = |column: &Option<String>| source.number(column.as_deref()?, row);
        match self {
            BoxGlyph::Rect {
                x,
                y,
                width,
                height,
            } => {
                let (cx, cy) = (get(x)?, get(y)?);
                let (hw, hh) = (get(width)?.abs() / 2.0, get(height)?.abs() / 2.0);
                Some((cx - hw, cx + hw, cy - hh, cy + hh))
            }
            BoxGlyph::Quad {
                left,
                bottom,
                right,
                top,
            } => {
                let (l, r) = (get(left)?, get(right)?);
                let (b, t) = (get(bottom)?, get(top)?);
                Some((l.min(r), l.max(r), b.min(t), b.max(t)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Value;

    fn column(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn rect_hit_uses_absolute_extent() {
        let source = ColumnDataSource::from_columns([
            ("x", column(&[0.0, 10.0])),
            ("y", column(&[0.0, 10.0])),
            ("width", column(&[2.0, -4.0])),
            ("height", column(&[2.0, -4.0])),
        ]);
        let glyph = BoxGlyph::rect();
        assert_eq!(glyph.hit_point(&source, 0.5, -1.0), vec![0]);
        assert_eq!(glyph.hit_point(&source, 8.5, 11.5), vec![1]);
        assert!(glyph.hit_point(&source, 5.0, 5.0).is_empty());
    }

    #[test]
    fn quad_hit_handles_inverted_edges() {
        let source = ColumnDataSource::from_columns([
            ("left", column(&[4.0])),
            ("right", column(&[0.0])),
            ("bottom", column(&[0.0])),
            ("top", column(&[4.0])),
        ]);
        assert_eq!(BoxGlyph::quad().hit_point(&source, 2.0, 2.0), vec![0]);
    }

    #[test]
    fn unbound_field_never_hits() {
        let source =
            ColumnDataSource::from_columns([("x", column(&[0.0])), ("y", column(&[0.0]))]);
        let glyph = BoxGlyph::Rect {
            x: Some("x".into()),
            y: Some("y".into()),
            width: None,
            height: None,
        };
        assert!(glyph.hit_point(&source, 0.0, 0.0).is_empty());
    }
}
