//! Incremental placement of axis-aligned segments.
//!
//! Each attempt picks an orientation, an optional perpendicular segment to start
//! on and an optional perpendicular segment to end on, then places the new
//! segment at a free coordinate where it can touch both. Attempts with no legal
//! placement are dropped.

use crate::{
    foundation::core::{Canvas, Orientation, Point, Span},
    generate::chooser::{Chooser, choose_or_none},
};

/// An accepted line, fixed on one axis and spanning a closed range on the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Axis the segment runs along.
    pub orientation: Orientation,
    /// x for vertical segments, y for horizontal ones.
    pub fixed: u32,
    /// Extent along the running axis.
    pub span: Span,
}

impl Segment {
    /// Endpoints in canvas coordinates, start first.
    pub fn endpoints(&self) -> (Point, Point) {
        match self.orientation {
            Orientation::Vertical => (
                Point::new(self.fixed, self.span.start),
                Point::new(self.fixed, self.span.end),
            ),
            Orientation::Horizontal => (
                Point::new(self.span.start, self.fixed),
                Point::new(self.span.end, self.fixed),
            ),
        }
    }

    /// True when `other` is parallel, at most one unit away and overlapping in span.
    ///
    /// Two such segments leave no area between them, so placement never accepts
    /// a segment that crowds an existing one.
    pub fn crowds(&self, other: &Segment) -> bool {
        self.orientation == other.orientation
            && self.fixed.abs_diff(other.fixed) <= 1
            && self.span.overlaps(other.span)
    }
}

/// Counters describing one placement run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlacementStats {
    /// Attempts the run was given.
    pub target_attempts: usize,
    /// Attempts that added a segment.
    pub accepted: usize,
    /// Attempts that found no legal placement.
    pub abandoned: usize,
}

/// What a new segment's span is anchored to at one end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bound {
    /// The canvas border.
    Edge,
    /// A perpendicular segment the new one must touch.
    Segment(Segment),
}

impl Bound {
    fn from_choice(choice: Option<&Segment>) -> Self {
        choice.map_or(Self::Edge, |s| Self::Segment(*s))
    }

    /// Restrict the new segment's fixed coordinate to the bound's open span.
    fn narrow(self, domain: Span) -> Option<Span> {
        match self {
            Self::Edge => Some(domain),
            Self::Segment(s) => s.span.interior()?.intersect(domain),
        }
    }

    fn anchor_or(self, edge: u32) -> u32 {
        match self {
            Self::Edge => edge,
            Self::Segment(s) => s.fixed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Abandoned {
    EmptyDomain,
    NoFreeCoordinate,
}

impl Abandoned {
    fn as_str(self) -> &'static str {
        match self {
            Self::EmptyDomain => "empty_domain",
            Self::NoFreeCoordinate => "no_free_coordinate",
        }
    }
}

/// Upper limit on placement attempts, per canvas cell.
///
/// No canvas holds more segments than it has cells, so this many attempts per
/// cell is far past the point where every further attempt is abandoned.
pub const MAX_ATTEMPTS_PER_CELL: u64 = 8;

/// Number of placement attempts for a density: `ceil((width * height) ^ density)`,
/// capped at [`MAX_ATTEMPTS_PER_CELL`] times the cell count.
///
/// `density` must be finite and non-negative; callers validate it first. A
/// density whose attempt count overflows gets the cap, so very dense requests
/// produce a packed grid and still finish.
pub fn target_attempts(canvas: Canvas, density: f64) -> usize {
    let cap = canvas.cell_count().saturating_mul(MAX_ATTEMPTS_PER_CELL);
    let raw = (canvas.cell_count() as f64).powf(density).ceil();
    let attempts = if raw.is_nan() {
        0
    } else if raw >= cap as f64 {
        cap
    } else {
        raw as u64
    };
    usize::try_from(attempts).unwrap_or(usize::MAX)
}

/// Run `attempts` placement attempts and return the accepted segments in order.
///
/// Every accepted segment lies strictly inside the canvas on its fixed axis and
/// never crowds an earlier one (see [`Segment::crowds`]).
pub fn place_segments<C: Chooser + ?Sized>(
    canvas: Canvas,
    attempts: usize,
    chooser: &mut C,
) -> (Vec<Segment>, PlacementStats) {
    let mut segments = Vec::<Segment>::new();
    let mut stats = PlacementStats {
        target_attempts: attempts,
        ..PlacementStats::default()
    };

    for attempt in 0..attempts {
        match try_place(canvas, &segments, chooser) {
            Ok(segment) => {
                segments.push(segment);
                stats.accepted += 1;
            }
            Err(reason) => {
                stats.abandoned += 1;
                tracing::trace!(attempt, reason = reason.as_str(), "placement abandoned");
            }
        }
    }

    tracing::debug!(
        target_attempts = stats.target_attempts,
        accepted = stats.accepted,
        abandoned = stats.abandoned,
        "segment placement finished"
    );
    (segments, stats)
}

fn try_place<C: Chooser + ?Sized>(
    canvas: Canvas,
    segments: &[Segment],
    chooser: &mut C,
) -> Result<Segment, Abandoned> {
    let orientation = Orientation::ALL[chooser.choose_index(Orientation::ALL.len())];
    let across = orientation.perpendicular();

    let starts: Vec<Segment> = segments
        .iter()
        .filter(|s| s.orientation == across)
        .copied()
        .collect();
    let start = Bound::from_choice(choose_or_none(chooser, &starts));

    let ends: Vec<Segment> = starts
        .iter()
        .filter(|s| match start {
            Bound::Edge => true,
            Bound::Segment(b) => s.fixed > b.fixed && s.span.overlaps(b.span),
        })
        .copied()
        .collect();
    let end = Bound::from_choice(choose_or_none(chooser, &ends));

    let fixed_extent = canvas.fixed_extent(orientation);
    let interior = Span {
        start: 1,
        end: fixed_extent.saturating_sub(2),
    };
    let domain = (interior.start <= interior.end)
        .then_some(interior)
        .and_then(|d| start.narrow(d))
        .and_then(|d| end.narrow(d))
        .ok_or(Abandoned::EmptyDomain)?;

    let span = Span {
        start: start.anchor_or(0),
        end: end.anchor_or(canvas.span_extent(orientation).saturating_sub(1)),
    };

    let candidates: Vec<Segment> = (domain.start..=domain.end)
        .map(|fixed| Segment {
            orientation,
            fixed,
            span,
        })
        .filter(|candidate| !segments.iter().any(|s| s.crowds(candidate)))
        .collect();
    if candidates.is_empty() {
        return Err(Abandoned::NoFreeCoordinate);
    }

    Ok(candidates[chooser.choose_index(candidates.len())])
}

#[cfg(test)]
#[path = "../../tests/unit/generate/segments.rs"]
mod tests;
