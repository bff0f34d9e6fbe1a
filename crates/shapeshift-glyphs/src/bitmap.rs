//! Offscreen alpha bitmap.

/// A single-channel bitmap holding only coverage (alpha).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlphaBitmap {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl AlphaBitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize the bitmap, discarding its content.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.alpha.clear();
        self.alpha.resize(width * height, 0);
    }

    pub fn clear(&mut self) {
        self.alpha.fill(0);
    }

    /// Alpha at a pixel, zero outside the bitmap.
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[y * self.width + x]
    }

    /// Fill every pixel whose center falls inside the rectangle.
    pub fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        let x0 = pixel_start(left).min(self.width);
        let x1 = pixel_start(right).min(self.width);
        let y0 = pixel_start(top).min(self.height);
        let y1 = pixel_start(bottom).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let row = y * self.width;
            self.alpha[row + x0..row + x1].fill(u8::MAX);
        }
    }
}

/// First pixel index whose center lies at or past `edge`.
fn pixel_start(edge: f32) -> usize {
    (edge - 0.5).ceil().max(0.0) as usize
}
