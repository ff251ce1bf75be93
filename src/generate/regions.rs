use crate::{
    foundation::core::{Canvas, Orientation, Point},
    generate::segments::Segment,
};

/// Axis-aligned tile given by inclusive corners, `top_left <= bottom_right`.
///
/// Neighbouring tiles share the line between them, so widths and areas are
/// measured between corner coordinates rather than by counting cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "(Point, Point)", into = "(Point, Point)")]
pub struct Rectangle {
    /// Smallest x and y of the tile.
    pub top_left: Point,
    /// Largest x and y of the tile.
    pub bottom_right: Point,
}

impl From<(Point, Point)> for Rectangle {
    fn from((top_left, bottom_right): (Point, Point)) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

impl From<Rectangle> for (Point, Point) {
    fn from(r: Rectangle) -> Self {
        r.corners()
    }
}

impl Rectangle {
    /// The tile covering the whole canvas.
    pub fn whole(canvas: Canvas) -> Self {
        Self {
            top_left: Point::new(0, 0),
            bottom_right: canvas.bottom_right(),
        }
    }

    /// `(top_left, bottom_right)`.
    pub fn corners(&self) -> (Point, Point) {
        (self.top_left, self.bottom_right)
    }

    /// Horizontal distance between the corners; 0 for inverted corners.
    pub fn width(&self) -> u32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    /// Vertical distance between the corners; 0 for inverted corners.
    pub fn height(&self) -> u32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }

    /// `width * height`.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// True when the open interiors of the two tiles intersect.
    pub fn interiors_overlap(&self, other: &Rectangle) -> bool {
        self.top_left.x < other.bottom_right.x
            && other.top_left.x < self.bottom_right.x
            && self.top_left.y < other.bottom_right.y
            && other.top_left.y < self.bottom_right.y
    }

    /// The same tile as a `kurbo::Rect`, for renderers.
    pub fn to_kurbo_rect(&self) -> kurbo::Rect {
        kurbo::Rect::from_points(
            kurbo::Point::from(self.top_left),
            kurbo::Point::from(self.bottom_right),
        )
    }

    /// Cut the tile in two if `segment` runs strictly through its interior from
    /// one side to the opposite one.
    pub fn split_by(&self, segment: &Segment) -> Option<(Rectangle, Rectangle)> {
        let (tl, br) = (self.top_left, self.bottom_right);
        let at = segment.fixed;
        match segment.orientation {
            Orientation::Vertical => {
                let crosses = tl.x < at
                    && at < br.x
                    && segment.span.start <= tl.y
                    && segment.span.end >= br.y;
                crosses.then(|| {
                    (
                        Rectangle::from((tl, Point::new(at, br.y))),
                        Rectangle::from((Point::new(at, tl.y), br)),
                    )
                })
            }
            Orientation::Horizontal => {
                let crosses = tl.y < at
                    && at < br.y
                    && segment.span.start <= tl.x
                    && segment.span.end >= br.x;
                crosses.then(|| {
                    (
                        Rectangle::from((tl, Point::new(br.x, at))),
                        Rectangle::from((Point::new(tl.x, at), br)),
                    )
                })
            }
        }
    }
}

/// Replay `segments` in order against a growing set of tiles seeded with the
/// whole canvas.
///
/// Each pass builds the next tile list: a tile crossed by the segment is
/// replaced in place by its two halves, every other tile carries over. The
/// result only depends on the inputs.
pub fn extract_regions(canvas: Canvas, segments: &[Segment]) -> Vec<Rectangle> {
    let mut tiles = vec![Rectangle::whole(canvas)];
    for segment in segments {
        let mut next = Vec::with_capacity(tiles.len() + 2);
        for tile in tiles {
            match tile.split_by(segment) {
                Some((first, second)) => {
                    next.push(first);
                    next.push(second);
                }
                None => next.push(tile),
            }
        }
        tiles = next;
    }

    tracing::debug!(
        segments = segments.len(),
        rectangles = tiles.len(),
        "region extraction finished"
    );
    tiles
}

#[cfg(test)]
#[path = "../../tests/unit/generate/regions.rs"]
mod tests;
