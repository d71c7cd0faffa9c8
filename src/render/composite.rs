use crate::foundation::math::mul_div255_u8;

pub type StraightRgba8 = [u8; 4];

/// Source-over for straight (non-premultiplied) RGBA8.
///
/// Source alpha 0 returns `dst` unchanged, source alpha 255 returns `src`.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    // Destination coverage left visible under the source.
    let dw = mul_div255_u8(u16::from(dst[3]), inv);
    let out_a = u32::from(sa) + u32::from(dw);

    let mut out = [0u8; 4];
    out[3] = out_a as u8;
    for i in 0..3 {
        let num = u32::from(src[i]) * u32::from(sa) + u32::from(dst[i]) * u32::from(dw);
        out[i] = ((num + out_a / 2) / out_a) as u8;
    }
    out
}

/// Paste `src` onto `canvas` with its top-left corner at (`x`, `y`), blending with
/// [`over`]. Offsets may be negative; source pixels outside the canvas are dropped.
pub fn paste_over(canvas: &mut image::RgbaImage, src: &image::RgbaImage, x: i64, y: i64) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();

    let Some((x0, x1)) = clip_span(x, sw, cw) else {
        return;
    };
    let Some((y0, y1)) = clip_span(y, sh, ch) else {
        return;
    };

    for cy in y0..y1 {
        let sy = (i64::from(cy) - y) as u32;
        for cx in x0..x1 {
            let sx = (i64::from(cx) - x) as u32;
            let s = src.get_pixel(sx, sy).0;
            let d = canvas.get_pixel_mut(cx, cy);
            d.0 = over(d.0, s);
        }
    }
}

/// Canvas-space `[start, end)` covered by a span of `len` starting at `origin`.
fn clip_span(origin: i64, len: u32, bound: u32) -> Option<(u32, u32)> {
    let start = origin.max(0);
    let end = (origin + i64::from(len)).min(i64::from(bound));
    if start >= end {
        return None;
    }
    Some((start as u32, end as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
