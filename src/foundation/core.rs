use crate::foundation::error::{GridError, GridResult};

/// Smallest accepted canvas extent on either axis.
pub const MIN_CANVAS_EXTENT: u32 = 3;

/// Integer grid position. Serialized as an `[x, y]` pair.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Point {
    /// Column, growing to the right.
    pub x: u32,
    /// Row, growing downwards.
    pub y: u32,
}

impl Point {
    /// Point at column `x`, row `y`.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (u32, u32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(f64::from(p.x), f64::from(p.y))
    }
}

/// Drawing area. Valid coordinates are `[0, width-1] x [0, height-1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting anything smaller than 3x3.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check the 3x3 minimum; canvases built as struct literals skip [`Canvas::new`].
    pub fn validate(&self) -> GridResult<()> {
        if self.width < MIN_CANVAS_EXTENT || self.height < MIN_CANVAS_EXTENT {
            return Err(GridError::invalid_canvas_size(format!(
                "canvas must be at least {MIN_CANVAS_EXTENT}x{MIN_CANVAS_EXTENT}, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Number of cells the canvas holds (`width * height`).
    pub fn cell_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Extent along the axis a segment of `orientation` is fixed on.
    pub fn fixed_extent(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }

    /// Extent along the axis a segment of `orientation` runs along.
    pub fn span_extent(self, orientation: Orientation) -> u32 {
        self.fixed_extent(orientation.perpendicular())
    }

    /// Last valid coordinate on both axes.
    pub fn bottom_right(self) -> Point {
        Point::new(self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    /// True when `p` lies on the canvas, border included.
    pub fn contains(self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }
}

/// Which axis a segment runs along.
///
/// A vertical segment has a constant x and varies in y; a horizontal one has a
/// constant y and varies in x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Constant x.
    Vertical,
    /// Constant y.
    Horizontal,
}

impl Orientation {
    /// Both orientations, in the order placement draws from.
    pub const ALL: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    /// The other orientation.
    pub fn perpendicular(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// Closed integer interval `[start, end]` with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// First point, inclusive.
    pub start: u32,
    /// Last point, inclusive.
    pub end: u32,
}

impl Span {
    /// Build a span, rejecting `start > end`.
    pub fn new(start: u32, end: u32) -> GridResult<Self> {
        if start > end {
            return Err(GridError::invalid_span(format!(
                "start {start} must be <= end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// True when `v` lies in `[start, end]`.
    pub fn contains(self, v: u32) -> bool {
        self.start <= v && v <= self.end
    }

    /// Inclusive overlap: touching at a single endpoint counts.
    pub fn overlaps(self, other: Span) -> bool {
        self.contains(other.start)
            || self.contains(other.end)
            || other.contains(self.start)
            || other.contains(self.end)
    }

    /// Points strictly between the endpoints, if any.
    pub fn interior(self) -> Option<Span> {
        let start = self.start.checked_add(1)?;
        let end = self.end.checked_sub(1)?;
        (start <= end).then_some(Span { start, end })
    }

    /// Common part of both spans, if they share a point.
    pub fn intersect(self, other: Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Span { start, end })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
