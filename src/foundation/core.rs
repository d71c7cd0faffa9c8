/// Edge length of the square launcher icon canvas, in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Fraction of the canvas width the scaled source occupies (1.0 = full bleed).
pub const TARGET_SCALE: f64 = 1.0;

/// Straight RGBA the canvas is cleared to before the paste: white, fully transparent.
pub const CLEAR_RGBA: [u8; 4] = [255, 255, 255, 0];

/// Largest width or height a resampled source may have.
pub const MAX_TARGET_EXTENT: u32 = 1 << 16;

/// Source image path, relative to the working directory.
pub const DEFAULT_INPUT: &str = "app_icon.png";

/// Directory the icon is written into, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/icons";

/// File name of the written icon inside [`DEFAULT_OUTPUT_DIR`].
pub const DEFAULT_OUTPUT_FILE: &str = "app_icon.png";

/// Pixel dimensions of an output raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The 1024x1024 launcher icon canvas.
    pub const ICON: Canvas = Canvas::square(CANVAS_SIZE);

    /// A `size` x `size` canvas.
    pub const fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Allocate a raster of this size filled with [`CLEAR_RGBA`].
    pub fn blank(self) -> image::RgbaImage {
        image::RgbaImage::from_pixel(self.width, self.height, image::Rgba(CLEAR_RGBA))
    }

    /// Center point in pixel units.
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
