use crate::foundation::core::{Canvas, MAX_TARGET_EXTENT};
use crate::foundation::error::{IconError, IconResult};
use crate::foundation::math::floor_half;

/// Size of the resampled source and where it lands on the canvas.
///
/// Offsets are signed: a source taller than it is wide scales past the canvas height and
/// starts above the canvas origin. The paste clips whatever falls outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconGeometry {
    /// Width of the resampled source.
    pub target_width: u32,
    /// Height of the resampled source.
    pub target_height: u32,
    /// Left edge of the resampled source in canvas pixels.
    pub offset_x: i64,
    /// Top edge of the resampled source in canvas pixels.
    pub offset_y: i64,
}

impl IconGeometry {
    /// Scale a `src_width` x `src_height` source to `scale` times the canvas width, keep its
    /// aspect ratio, and center it.
    pub fn fit_width(
        canvas: Canvas,
        src_width: u32,
        src_height: u32,
        scale: f64,
    ) -> IconResult<Self> {
        if src_width == 0 || src_height == 0 {
            return Err(IconError::geometry(format!(
                "source image has zero extent ({src_width}x{src_height})"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(IconError::geometry(format!(
                "scale factor must be finite and > 0, got {scale}"
            )));
        }

        let target_width = extent(f64::from(canvas.width) * scale, "width")?;
        let aspect = f64::from(src_height) / f64::from(src_width);
        let target_height = extent(f64::from(target_width) * aspect, "height")?;

        Ok(Self {
            target_width,
            target_height,
            offset_x: floor_half(i64::from(canvas.width) - i64::from(target_width)),
            offset_y: floor_half(i64::from(canvas.height) - i64::from(target_height)),
        })
    }

    /// `true` when part of the resampled source falls outside the canvas.
    pub fn overflows(&self, canvas: Canvas) -> bool {
        self.offset_x < 0
            || self.offset_y < 0
            || self.offset_x + i64::from(self.target_width) > i64::from(canvas.width)
            || self.offset_y + i64::from(self.target_height) > i64::from(canvas.height)
    }
}

fn extent(v: f64, axis: &str) -> IconResult<u32> {
    let floored = v.floor();
    if floored < 1.0 {
        return Err(IconError::geometry(format!(
            "target {axis} rounds down to zero ({v})"
        )));
    }
    if floored > f64::from(MAX_TARGET_EXTENT) {
        return Err(IconError::geometry(format!(
            "target {axis} {floored} exceeds {MAX_TARGET_EXTENT}px"
        )));
    }
    Ok(floored as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
