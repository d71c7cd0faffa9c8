use image::imageops::{self, FilterType};

use crate::foundation::math::mul_div255_u8;

/// Resample `src` to `width` x `height` with a Lanczos3 filter.
///
/// Filtering runs on premultiplied pixels so fully transparent texels carry no color
/// into the edges of opaque regions. Input and output are straight alpha.
pub fn resample_lanczos(src: &image::RgbaImage, width: u32, height: u32) -> image::RgbaImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }

    let mut premul = src.clone();
    premultiply_rgba8_in_place(&mut premul);

    let mut out = imageops::resize(&premul, width, height, FilterType::Lanczos3);
    unpremultiply_rgba8_in_place(&mut out);
    out
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/resample.rs"]
mod tests;
