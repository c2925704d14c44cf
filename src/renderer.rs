//! Glyph renderers: a box glyph bound to one data source.

use crate::config::{Dimensions, SelectionMode};
use crate::glyph::{BoxGlyph, ExtentOptions};
use crate::scale::{CoordinateMapping, PlotFrame};
use crate::source::ColumnDataSource;
use log::debug;

/// A renderer draws one [`BoxGlyph`] from one [`ColumnDataSource`].
///
/// `coordinates` is `None` until the renderer's view is attached to the plot;
/// every operation that needs to map screen points is a no-op before that.
#[derive(Debug)]
pub struct GlyphRenderer {
    pub name: String,
    pub glyph: BoxGlyph,
    pub source: ColumnDataSource,
    pub coordinates: Option<CoordinateMapping>,
}

impl GlyphRenderer {
    pub fn new(name: impl Into<String>, glyph: BoxGlyph, source: ColumnDataSource) -> Self {
        Self {
            name: name.into(),
            glyph,
            source,
            coordinates: None,
        }
    }

    /// Attaches the coordinate mapping of the renderer's view.
    pub fn with_coordinates(mut self, coordinates: CoordinateMapping) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn is_attached(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Writes the box spanning the screen intervals `sx` and `sy`.
    ///
    /// Appends a new row or overwrites the last one. Returns `false` when the
    /// renderer is not attached or there was no row to overwrite.
    pub fn set_extent(
        &mut self,
        (sx0, sx1): (f64, f64),
        (sy0, sy1): (f64, f64),
        append: bool,
        options: ExtentOptions<'_>,
    ) -> bool {
        let Some(coordinates) = &self.coordinates else {
            debug!("Renderer '{}' has no view yet; skipping extent", self.name);
            return false;
        };
        let xs = coordinates.x_scale.r_invert(sx0, sx1);
        let ys = coordinates.y_scale.r_invert(sy0, sy1);

        let written = if append {
            self.glyph.append_extent(&mut self.source, xs, ys, options);
            true
        } else {
            self.glyph.update_last_extent(&mut self.source, xs, ys)
        };
        if written {
            self.source.touch();
        }
        written
    }

    /// Maps a screen point to data space, if it is inside the frame and the view is attached.
    pub fn map_point(&self, frame: &PlotFrame, sx: f64, sy: f64) -> Option<(f64, f64)> {
        let coordinates = self.coordinates.as_ref()?;
        if !frame.contains(sx, sy) {
            return None;
        }
        Some(coordinates.invert_point(sx, sy))
    }

    /// Translates the selected rows by the data-space difference of two screen points.
    ///
    /// Returns `false` when either point cannot be mapped.
    pub fn drag_selected(
        &mut self,
        frame: &PlotFrame,
        from: (f64, f64),
        to: (f64, f64),
        dims: Dimensions,
    ) -> bool {
        let (Some((px, py)), Some((x, y))) = (
            self.map_point(frame, from.0, from.1),
            self.map_point(frame, to.0, to.1),
        ) else {
            return false;
        };
        self.glyph.drag_selected(&mut self.source, x - px, y - py, dims);
        self.source.touch();
        true
    }

    /// Hit-tests the screen point and updates the selection with `mode`.
    ///
    /// Returns whether any row was hit.
    pub fn select_point(
        &mut self,
        frame: &PlotFrame,
        sx: f64,
        sy: f64,
        mode: SelectionMode,
    ) -> bool {
        let Some((x, y)) = self.map_point(frame, sx, sy) else {
            return false;
        };
        let hit = self.glyph.hit_point(&self.source, x, y);
        debug!("Renderer '{}': hit {:?} ({:?})", self.name, hit, mode);
        self.source.select(&hit, mode);
        !hit.is_empty()
    }

    /// Removes every selected row, clears the selection and commits.
    pub fn delete_selected(&mut self) {
        let rows = self.source.selected().indices().to_vec();
        if !rows.is_empty() {
            debug!("Renderer '{}': deleting rows {:?}", self.name, rows);
        }
        self.source.remove_rows(&rows);
        self.source.clear_selection();
        self.source.touch();
        self.source.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LinearScale;
    use crate::source::{SourceChange, Value};

    static NULL: Value = Value::Null;

    fn options() -> ExtentOptions<'static> {
        ExtentOptions {
            num_objects: 0,
            empty_value: &NULL,
        }
    }

    fn frame() -> PlotFrame {
        PlotFrame::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn detached_renderer_is_a_no_op() {
        let mut renderer = GlyphRenderer::new("r", BoxGlyph::rect(), ColumnDataSource::new());
        assert!(!renderer.set_extent((0.0, 1.0), (0.0, 1.0), true, options()));
        assert!(renderer.source.is_empty());
        assert!(renderer.source.pending_changes().is_empty());
        assert!(!renderer.select_point(&frame(), 1.0, 1.0, SelectionMode::Replace));
    }

    #[test]
    fn set_extent_inverts_through_scales() {
        // x: data 0..10 over pixels 0..100; y: data 0..10 over pixels 100..0.
        let mapping = CoordinateMapping::new(
            LinearScale::new((0.0, 10.0), (0.0, 100.0)).unwrap(),
            LinearScale::new((0.0, 10.0), (100.0, 0.0)).unwrap(),
        );
        let mut renderer = GlyphRenderer::new("r", BoxGlyph::quad(), ColumnDataSource::new())
            .with_coordinates(mapping);

        assert!(renderer.set_extent((20.0, 60.0), (30.0, 90.0), true, options()));

        let source = &renderer.source;
        assert_eq!(source.number("left", 0), Some(2.0));
        assert_eq!(source.number("right", 0), Some(6.0));
        assert_eq!(source.number("bottom", 0), Some(7.0));
        assert!((source.number("top", 0).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(source.pending_changes(), &[SourceChange::Redraw]);
    }

    #[test]
    fn drag_outside_frame_is_skipped() {
        let mut renderer = GlyphRenderer::new("r", BoxGlyph::rect(), ColumnDataSource::new())
            .with_coordinates(CoordinateMapping::identity());
        renderer.set_extent((10.0, 20.0), (10.0, 20.0), true, options());
        renderer.source.select(&[0], SelectionMode::Replace);

        assert!(!renderer.drag_selected(&frame(), (15.0, 15.0), (150.0, 15.0), Dimensions::Both));
        assert_eq!(renderer.source.number("x", 0), Some(15.0));

        assert!(renderer.drag_selected(&frame(), (15.0, 15.0), (25.0, 10.0), Dimensions::Both));
        assert_eq!(renderer.source.number("x", 0), Some(25.0));
        assert_eq!(renderer.source.number("y", 0), Some(10.0));
    }

    #[test]
    fn delete_selected_removes_rows_and_commits() {
        let mut renderer = GlyphRenderer::new("r", BoxGlyph::rect(), ColumnDataSource::new())
            .with_coordinates(CoordinateMapping::identity());
        renderer.set_extent((0.0, 10.0), (0.0, 10.0), true, options());
        renderer.set_extent((50.0, 60.0), (50.0, 60.0), true, options());
        assert!(renderer.select_point(&frame(), 55.0, 55.0, SelectionMode::Replace));
        renderer.source.take_changes();

        renderer.delete_selected();

        assert_eq!(renderer.source.len(), 1);
        assert_eq!(renderer.source.number("x", 0), Some(5.0));
        assert!(renderer.source.selected().is_empty());
        assert_eq!(
            renderer.source.take_changes(),
            vec![
                SourceChange::SelectionCleared,
                SourceChange::Redraw,
                SourceChange::Committed
            ]
        );
    }
}
