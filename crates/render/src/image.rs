use raycam_common::{Color, ColorGrid};

/// Pixel buffer with bottom-up row addressing, as display sinks expect.
///
/// `pixel(x, 0)` is the bottom row of the displayed image. Grid row 0 (the
/// top sampled row) lands at `y = height - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

/// Lay out a color grid in image-buffer coordinates: image row
/// `height - 1 - i`, image column `j`. No color processing happens here.
pub fn to_image_buffer(grid: &ColorGrid) -> ImageBuffer {
    let width = grid.cols();
    let height = grid.rows();
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        if let Some(row) = grid.row(height - 1 - y) {
            pixels.extend_from_slice(row);
        }
    }
    ImageBuffer {
        width,
        height,
        pixels,
    }
}

impl ImageBuffer {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y` counted from the bottom.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Undo the row flip, recovering the grid this buffer was built from.
    pub fn to_color_grid(&self) -> ColorGrid {
        ColorGrid::from_fn(self.height, self.width, |i, j| {
            self.pixels[(self.height - 1 - i) * self.width + j]
        })
    }

    /// 8-bit RGBA bytes with the top row first, for file encoders.
    pub fn to_rgba8_top_down(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width * self.height * 4);
        for y in (0..self.height).rev() {
            for pixel in &self.pixels[y * self.width..(y + 1) * self.width] {
                bytes.extend_from_slice(&pixel.to_rgba8());
            }
        }
        bytes
    }
}
