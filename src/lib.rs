//! Mondrian-style grid generation.
//!
//! A grid is a set of horizontal and vertical line segments that end on the
//! canvas border or on other segments, together with the rectangles those
//! segments cut the canvas into. Colouring and drawing are left to the caller.
//!
//! # Pipeline overview
//!
//! 1. **Place**: `Canvas + density -> Vec<Segment>`. Segments are proposed one
//!    at a time and kept only when they fit between two perpendicular segments
//!    (or the border) without crowding a parallel one.
//! 2. **Extract**: `Vec<Segment> -> Vec<Rectangle>`. The flat segment list is
//!    replayed against a growing tile list seeded with the whole canvas.
//!
//! This is not recursive subdivision: a late segment can cut tiles produced by
//! any earlier one, and tiles no segment crosses are final.
//!
//! Randomness is always explicit. Pass any [`Chooser`] (every `rand` RNG is
//! one) to [`generate_with`], or a seed to [`generate_seeded`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod generate;
mod pipeline;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;

pub use foundation::core::{Canvas, MIN_CANVAS_EXTENT, Orientation, Point, Span};
pub use foundation::error::{GridError, GridResult};
pub use generate::chooser::Chooser;
pub use generate::regions::{Rectangle, extract_regions};
pub use generate::segments::{
    MAX_ATTEMPTS_PER_CELL, PlacementStats, Segment, place_segments, target_attempts,
};
pub use pipeline::{
    DEFAULT_DENSITY, Grid, GridSettings, generate, generate_seeded, generate_with,
};
