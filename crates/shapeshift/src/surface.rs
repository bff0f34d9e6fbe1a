//! Terminal drawing surface backed by a ratatui braille canvas.

use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Painter, Shape},
};
use shapeshift_core::{Area, Position, Rgba, Surface, Theme};

/// Braille dots per terminal cell.
const DOTS_PER_CELL_X: f32 = 2.0;
const DOTS_PER_CELL_Y: f32 = 4.0;

/// A filled circle waiting to be painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Position,
    pub radius: f32,
    pub color: Rgba,
}

/// Maps terminal cells to virtual pixels and collects one frame of discs.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    area: Area,
    cell_width: f32,
    cell_height: f32,
    theme: Theme,
    discs: Vec<Disc>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32, theme: Theme) -> Self {
        Self {
            area: Self::viewport(cols, rows, cell_width, cell_height),
            cell_width,
            cell_height,
            theme,
            discs: Vec::new(),
        }
    }

    /// Virtual pixel area covered by `cols` x `rows` cells.
    pub fn viewport(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Area {
        Area::new(cols as f32 * cell_width, rows as f32 * cell_height)
    }

    /// Viewport for a terminal of this surface's cell size.
    pub fn viewport_for(&self, cols: u16, rows: u16) -> Area {
        Self::viewport(cols, rows, self.cell_width, self.cell_height)
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Paint the collected discs into `area` of the frame.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = self.area.width as f64;
        let height = self.area.height as f64;
        let step_x = (self.cell_width / DOTS_PER_CELL_X) as f64;
        let step_y = (self.cell_height / DOTS_PER_CELL_Y) as f64;
        let theme = self.theme;

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(theme.background_color())
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                for disc in &self.discs {
                    ctx.draw(&FilledCircle {
                        x: disc.center.x as f64,
                        // Canvas y grows upward.
                        y: height - disc.center.y as f64,
                        radius: disc.radius as f64,
                        step_x,
                        step_y,
                        color: theme.ink(disc.color),
                    });
                }
            });
        frame.render_widget(canvas, area);
    }
}

impl Surface for TerminalSurface {
    fn area(&self) -> Area {
        self.area
    }

    fn draw_circle(&mut self, center: Position, radius: f32, color: Rgba) {
        self.discs.push(Disc {
            center,
            radius,
            color,
        });
    }

    fn clear(&mut self) {
        self.discs.clear();
    }

    fn adjust(&mut self, area: Area) {
        self.area = area;
    }
}

/// Disc painted by sampling the canvas dot grid inside the radius.
struct FilledCircle {
    x: f64,
    y: f64,
    radius: f64,
    step_x: f64,
    step_y: f64,
    color: Color,
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        if let Some((x, y)) = painter.get_point(self.x, self.y) {
            painter.paint(x, y, self.color);
        }
        if self.step_x <= 0.0 || self.step_y <= 0.0 {
            return;
        }

        let r2 = self.radius * self.radius;
        let mut dy = -self.radius;
        while dy <= self.radius {
            let mut dx = -self.radius;
            while dx <= self.radius {
                if dx * dx + dy * dy <= r2
                    && let Some((x, y)) = painter.get_point(self.x + dx, self.y + dy)
                {
                    painter.paint(x, y, self.color);
                }
                dx += self.step_x;
            }
            dy += self.step_y;
        }
    }
}
