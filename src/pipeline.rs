use rand::{SeedableRng, rngs::StdRng};

use crate::{
    foundation::core::{Canvas, Point},
    foundation::error::{GridError, GridResult},
    generate::chooser::Chooser,
    generate::regions::{Rectangle, extract_regions},
    generate::segments::{PlacementStats, Segment, place_segments, target_attempts},
};

/// Density used when none is given.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Generation knobs. Deserializes from JSON with every field optional.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Exponent applied to the cell count to get the number of placement
    /// attempts. Around `0.5` gives a handful of lines, `1.0` packs the canvas.
    pub density: f64,
    /// Seed for a reproducible grid; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

impl GridSettings {
    /// Reject densities that cannot produce an attempt count.
    pub fn validate(&self) -> GridResult<()> {
        validate_density(self.density)
    }

    /// Parse and validate a JSON settings document.
    pub fn from_json_str(s: &str) -> GridResult<Self> {
        let settings: Self =
            serde_json::from_str(s).map_err(|e| GridError::serde(format!("settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Generate a grid for `canvas` with these settings.
    pub fn generate(&self, canvas: Canvas) -> GridResult<Grid> {
        self.validate()?;
        match self.seed {
            Some(seed) => generate_seeded(canvas, self.density, seed),
            None => generate(canvas, self.density),
        }
    }
}

/// Result of one generation run.
///
/// `lines` and `rectangles` are the caller-facing geometry; `segments` keeps
/// the accepted segments with their orientation, in placement order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    /// Canvas the grid was generated for.
    pub canvas: Canvas,
    /// Segment endpoints, one pair per accepted segment.
    pub lines: Vec<(Point, Point)>,
    /// Tiles the segments cut the canvas into.
    pub rectangles: Vec<Rectangle>,
    /// Accepted segments in placement order.
    pub segments: Vec<Segment>,
    /// Placement counters.
    pub stats: PlacementStats,
}

impl Grid {
    /// Rectangles as `(top_left, bottom_right)` corner pairs.
    pub fn rectangle_corners(&self) -> Vec<(Point, Point)> {
        self.rectangles.iter().map(Rectangle::corners).collect()
    }

    /// Sum of rectangle areas; equals `(width - 1) * (height - 1)` for any grid.
    pub fn covered_area(&self) -> u64 {
        self.rectangles.iter().map(Rectangle::area).sum()
    }

    /// Lines as `kurbo::Line`s.
    pub fn kurbo_lines(&self) -> Vec<kurbo::Line> {
        self.lines
            .iter()
            .map(|&(a, b)| kurbo::Line::new(kurbo::Point::from(a), kurbo::Point::from(b)))
            .collect()
    }

    /// Rectangles as `kurbo::Rect`s.
    pub fn kurbo_rects(&self) -> Vec<kurbo::Rect> {
        self.rectangles.iter().map(Rectangle::to_kurbo_rect).collect()
    }

    /// Serialize as `{"lines": [...], "rectangles": [...]}` with `[x, y]` points.
    pub fn to_json(&self) -> GridResult<String> {
        let doc = serde_json::json!({
            "lines": self.lines,
            "rectangles": self.rectangles,
        });
        serde_json::to_string(&doc).map_err(|e| GridError::serde(format!("grid: {e}")))
    }
}

/// Generate a grid using a generator seeded from OS entropy.
pub fn generate(canvas: Canvas, density: f64) -> GridResult<Grid> {
    let mut rng = StdRng::from_os_rng();
    generate_with(canvas, density, &mut rng)
}

/// Generate a reproducible grid: the same inputs always give the same output.
pub fn generate_seeded(canvas: Canvas, density: f64, seed: u64) -> GridResult<Grid> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with(canvas, density, &mut rng)
}

/// Place segments, then cut the canvas along them.
///
/// Fails only on a canvas smaller than 3x3 or a density that is not a finite,
/// non-negative number. Attempts that find no legal placement are skipped, so
/// the number of lines varies with the random choices.
#[tracing::instrument(skip(chooser), fields(width = canvas.width, height = canvas.height))]
pub fn generate_with<C: Chooser + ?Sized>(
    canvas: Canvas,
    density: f64,
    chooser: &mut C,
) -> GridResult<Grid> {
    canvas.validate()?;
    validate_density(density)?;

    let attempts = target_attempts(canvas, density);
    let (segments, stats) = place_segments(canvas, attempts, chooser);
    let rectangles = extract_regions(canvas, &segments);
    let lines = segments.iter().map(Segment::endpoints).collect();

    tracing::debug!(
        lines = segments.len(),
        rectangles = rectangles.len(),
        "grid generated"
    );
    Ok(Grid {
        canvas,
        lines,
        rectangles,
        segments,
        stats,
    })
}

fn validate_density(density: f64) -> GridResult<()> {
    if !density.is_finite() || density < 0.0 {
        return Err(GridError::invalid_density(format!(
            "density must be finite and >= 0, got {density}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
