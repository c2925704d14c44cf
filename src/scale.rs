//! Screen/data coordinate mapping.
//!
//! A [`Scale`] maps one data axis onto one screen axis. The edit tool only ever
//! needs the inverse direction (screen pixels back into data units), so that is
//! the whole contract. [`CoordinateMapping`] pairs an x and a y scale for one
//! renderer, and [`PlotFrame`] is the screen-space box the plot draws into.

use std::fmt;

/// Inverse transform of one plot axis.
pub trait Scale: fmt::Debug {
    /// Maps a single screen coordinate to data space.
    fn invert(&self, screen: f64) -> f64;

    /// Maps a screen interval to data space, preserving the interval's order.
    fn r_invert(&self, s0: f64, s1: f64) -> (f64, f64) {
        (self.invert(s0), self.invert(s1))
    }
}

/// Affine scale: `screen = data * factor + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    factor: f64,
    offset: f64,
}

impl LinearScale {
    /// Builds a scale mapping the data range `[d0, d1]` onto the screen range `[s0, s1]`.
    ///
    /// Returns `None` when the data range is empty, since the mapping would not be invertible.
    pub fn new(data: (f64, f64), screen: (f64, f64)) -> Option<Self> {
        let span = data.1 - data.0;
        if span == 0.0 || !span.is_finite() {
            return None;
        }
        let factor = (screen.1 - screen.0) / span;
        if factor == 0.0 || !factor.is_finite() {
            return None;
        }
        Some(Self {
            factor,
            offset: screen.0 - factor * data.0,
        })
    }

    /// Screen pixels equal data units.
    pub fn identity() -> Self {
        Self {
            factor: 1.0,
            offset: 0.0,
        }
    }

    /// Forward transform, used by hosts that draw the glyphs.
    pub fn compute(&self, data: f64) -> f64 {
        data * self.factor + self.offset
    }
}

impl Scale for LinearScale {
    fn invert(&self, screen: f64) -> f64 {
        (screen - self.offset) / self.factor
    }
}

/// Logarithmic scale over a strictly positive data range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    inner: LinearScale,
}

impl LogScale {
    /// Builds a log scale mapping `[d0, d1]` (both > 0) onto `[s0, s1]`.
    pub fn new(data: (f64, f64), screen: (f64, f64)) -> Option<Self> {
        if data.0 <= 0.0 || data.1 <= 0.0 {
            return None;
        }
        LinearScale::new((data.0.ln(), data.1.ln()), screen).map(|inner| Self { inner })
    }

    /// Forward transform.
    pub fn compute(&self, data: f64) -> f64 {
        self.inner.compute(data.ln())
    }
}

impl Scale for LogScale {
    fn invert(&self, screen: f64) -> f64 {
        self.inner.invert(screen).exp()
    }
}

/// The pair of scales a renderer's view is attached with.
#[derive(Debug)]
pub struct CoordinateMapping {
    pub x_scale: Box<dyn Scale>,
    pub y_scale: Box<dyn Scale>,
}

impl CoordinateMapping {
    pub fn new(x_scale: impl Scale + 'static, y_scale: impl Scale + 'static) -> Self {
        Self {
            x_scale: Box::new(x_scale),
            y_scale: Box::new(y_scale),
        }
    }

    /// Screen equals data on both axes.
    pub fn identity() -> Self {
        Self::new(LinearScale::identity(), LinearScale::identity())
    }

    /// Maps a screen point to data space.
    pub fn invert_point(&self, sx: f64, sy: f64) -> (f64, f64) {
        (self.x_scale.invert(sx), self.y_scale.invert(sy))
    }
}

/// Screen-space bounding box of the plot's drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotFrame {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal screen range `(start, end)`.
    pub fn h_range(&self) -> (f64, f64) {
        (self.left, self.right())
    }

    /// Vertical screen range `(start, end)`.
    pub fn v_range(&self) -> (f64, f64) {
        (self.top, self.bottom())
    }

    /// Whether the screen point lies inside the frame (edges inclusive).
    pub fn contains(&self, sx: f64, sy: f64) -> bool {
        sx >= self.left && sx <= self.right() && sy >= self.top && sy <= self.bottom()
    }
}
