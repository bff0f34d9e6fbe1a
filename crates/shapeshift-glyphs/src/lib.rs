//! Glyph rasterizer for shapeshift.
//!
//! Paints a label into an offscreen alpha bitmap with the built-in block
//! font, then samples the bitmap on a fixed grid to produce the
//! [`PointCloud`] the flock morphs onto.

mod bitmap;
pub mod font;

use shapeshift_core::{Area, PointCloud, Position};
use tracing::{debug, trace};

pub use bitmap::AlphaBitmap;

/// Grid step between sampled pixels.
pub const SAMPLE_GAP: usize = 10;

/// Font size tried first before fitting the label to the canvas.
pub const BASE_FONT_SIZE: f32 = 145.0;

/// Share of the canvas width a label may cover.
const WIDTH_FILL: f32 = 0.8;

/// Share of the canvas height a numeric label may cover.
const NUMERIC_HEIGHT_FILL: f32 = 1.0;

/// Share of the canvas height any other label may cover.
const TEXT_HEIGHT_FILL: f32 = 0.45;

/// Turns labels into grid-sampled point clouds.
#[derive(Debug, Clone)]
pub struct GlyphRasterizer {
    gap: usize,
    bitmap: AlphaBitmap,
}

impl GlyphRasterizer {
    /// Create a rasterizer fitted to `viewport`.
    pub fn new(viewport: Area) -> Self {
        let mut rasterizer = Self {
            gap: SAMPLE_GAP,
            bitmap: AlphaBitmap::default(),
        };
        rasterizer.fit(viewport);
        rasterizer
    }

    /// Resize the offscreen canvas to the viewport, floored to the grid.
    pub fn fit(&mut self, viewport: Area) {
        let width = floor_to_grid(viewport.width, self.gap);
        let height = floor_to_grid(viewport.height, self.gap);
        self.bitmap.resize(width, height);
        debug!(width, height, "fitted glyph canvas");
    }

    /// Offscreen canvas size in pixels.
    pub fn canvas_size(&self) -> (usize, usize) {
        (self.bitmap.width(), self.bitmap.height())
    }

    /// Rasterize `label` and sample it into a point cloud.
    ///
    /// Empty labels and labels made only of unsupported characters produce
    /// an empty cloud.
    pub fn render(&mut self, label: &str) -> PointCloud {
        let size = self.font_size_for(label);
        self.bitmap.clear();
        self.paint(label, size);
        let cloud = self.sample();
        trace!(label, size, points = cloud.len(), "rasterized label");
        cloud
    }

    /// Font size at which `label` fits the canvas.
    pub fn font_size_for(&self, label: &str) -> f32 {
        let (width, height) = self.canvas_size();
        let measured = measure(label, BASE_FONT_SIZE);
        let height_fill = if is_numeric(label) {
            NUMERIC_HEIGHT_FILL
        } else {
            TEXT_HEIGHT_FILL
        };

        let width_fit = (width as f32 / measured) * WIDTH_FILL * BASE_FONT_SIZE;
        let height_fit = (height as f32 / BASE_FONT_SIZE) * height_fill * BASE_FONT_SIZE;

        BASE_FONT_SIZE.min(width_fit).min(height_fit)
    }

    /// Paint `label` centered on the canvas.
    fn paint(&mut self, label: &str, size: f32) {
        let (width, height) = self.canvas_size();
        let cell = size / font::CELLS_PER_EM;
        let left = width as f32 / 2.0 - measure(label, size) / 2.0;
        let top = height as f32 / 2.0 - font::GLYPH_HEIGHT as f32 * cell / 2.0;

        for (index, ch) in label.chars().enumerate() {
            let Some(rows) = font::glyph(ch) else {
                continue;
            };
            // Spacing is split evenly on both sides of the glyph.
            let origin = left + (index * font::ADVANCE) as f32 * cell + cell / 2.0;
            for (col, row) in font::ink_cells(rows) {
                let x = origin + col as f32 * cell;
                let y = top + row as f32 * cell;
                self.bitmap.fill_rect(x, y, x + cell, y + cell);
            }
        }
    }

    /// Sample the canvas alpha on the grid.
    ///
    /// After each sampled row the walk skips `gap` more pixel rows, so grid
    /// row `k` reads pixel row `k * (gap + 1)` while its points are labelled
    /// `y = k * gap`. The reported extents are `max + min` on each axis; an
    /// empty canvas reports the canvas size.
    fn sample(&self) -> PointCloud {
        let (width, height) = self.canvas_size();
        let mut points = Vec::new();
        let (mut max_x, mut max_y) = (0, 0);
        let (mut min_x, mut min_y) = (width, height);

        for (grid_row, pixel_row) in (0..height).step_by(self.gap + 1).enumerate() {
            let y = grid_row * self.gap;
            for x in (0..width).step_by(self.gap) {
                if self.bitmap.alpha(x, pixel_row) == 0 {
                    continue;
                }
                points.push(Position::new(x as f32, y as f32));
                max_x = max_x.max(x);
                max_y = max_y.max(y);
                min_x = min_x.min(x);
                min_y = min_y.min(y);
            }
        }

        PointCloud {
            points,
            width: (max_x + min_x) as f32,
            height: (max_y + min_y) as f32,
        }
    }
}

/// Width of `label` at `size`.
pub fn measure(label: &str, size: f32) -> f32 {
    let cell = size / font::CELLS_PER_EM;
    (label.chars().count() * font::ADVANCE) as f32 * cell
}

/// Whether the label reads as a finite number.
///
/// Numerals are taller than mixed text, so numeric labels may fill more of
/// the canvas height.
pub fn is_numeric(label: &str) -> bool {
    label
        .trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite())
}

fn floor_to_grid(length: f32, gap: usize) -> usize {
    let cells = (length.max(0.0) / gap as f32).floor() as usize;
    cells * gap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rasterizer() -> GlyphRasterizer {
        GlyphRasterizer::new(Area::new(1000.0, 600.0))
    }

    #[test]
    fn test_fit_floors_to_grid() {
        let mut r = GlyphRasterizer::new(Area::new(1005.0, 607.0));
        assert_eq!(r.canvas_size(), (1000, 600));
        r.fit(Area::new(9.0, 25.0));
        assert_eq!(r.canvas_size(), (0, 20));
    }

    #[test]
    fn test_numeric_detection() {
        assert!(is_numeric("42"));
        assert!(is_numeric(" 3.5 "));
        assert!(!is_numeric("4A"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("inf"));
    }

    #[test]
    fn test_font_size_height_constraint() {
        let r = GlyphRasterizer::new(Area::new(400.0, 200.0));
        // Numerals may use the full height, text only 45% of it.
        assert_eq!(r.font_size_for("8"), BASE_FONT_SIZE);
        assert!((r.font_size_for("A") - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_font_size_width_constraint() {
        let r = rasterizer();
        let label = "ABCDEFGHIJKLMNOPQRST";
        let expected = (1000.0 / measure(label, BASE_FONT_SIZE)) * WIDTH_FILL * BASE_FONT_SIZE;
        assert!((r.font_size_for(label) - expected).abs() < 1e-3);
        assert!(r.font_size_for(label) < BASE_FONT_SIZE);
    }

    #[test]
    fn test_empty_label_is_empty_cloud() {
        let mut r = rasterizer();
        let cloud = r.render("");
        assert!(cloud.is_empty());
        assert_eq!(cloud.width, 1000.0);
        assert_eq!(cloud.height, 600.0);
    }

    #[test]
    fn test_unsupported_characters_degrade_to_empty() {
        let mut r = rasterizer();
        assert!(r.render("ééé").is_empty());
    }

    #[test]
    fn test_points_lie_on_grid() {
        let mut r = rasterizer();
        let cloud = r.render("HI");
        assert!(!cloud.is_empty());
        for p in &cloud.points {
            assert_eq!(p.x as usize % SAMPLE_GAP, 0);
            assert_eq!(p.y as usize % SAMPLE_GAP, 0);
            assert!(p.x < 1000.0 && p.y < 600.0);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut r = rasterizer();
        let first = r.render("BOOKWORM");
        let second = r.render("BOOKWORM");
        assert_eq!(first, second);
    }

    #[test]
    fn test_previous_label_is_cleared() {
        let mut r = rasterizer();
        let wide = r.render("WWWWWW");
        let narrow = r.render("I");
        assert!(narrow.len() < wide.len());
    }

    #[test]
    fn test_sample_row_stride_and_extents() {
        let mut r = GlyphRasterizer::new(Area::new(100.0, 100.0));
        r.bitmap.fill_rect(0.0, 0.0, 100.0, 100.0);
        let cloud = r.sample();
        // Pixel rows 0, 11, ..., 99 are read: ten grid rows of ten columns.
        assert_eq!(cloud.len(), 100);
        assert_eq!(cloud.points.last(), Some(&Position::new(90.0, 90.0)));
        assert_eq!(cloud.width, 90.0);
        assert_eq!(cloud.height, 90.0);
    }

    #[test]
    fn test_extents_add_min_and_max() {
        let mut r = GlyphRasterizer::new(Area::new(100.0, 100.0));
        // A single block covering grid column 30..=50 on pixel row 22 (grid row 2).
        r.bitmap.fill_rect(30.0, 22.0, 51.0, 23.0);
        let cloud = r.sample();
        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.width, 50.0 + 30.0);
        assert_eq!(cloud.height, 20.0 + 20.0);
    }
}
