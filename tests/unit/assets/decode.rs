use std::io::Cursor;

use super::*;

fn encode(img: image::DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn decode_rgba_png_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100, 50, 200, 128]).unwrap();
    let bytes = encode(image::DynamicImage::ImageRgba8(img), image::ImageFormat::Png);

    let src = decode_image(&bytes).unwrap();
    assert_eq!((src.width, src.height), (1, 1));
    assert_eq!(src.pixels.get_pixel(0, 0).0, [100, 50, 200, 128]);
}

#[test]
fn decode_rgb_source_gains_opaque_alpha() {
    let img = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
    let bytes = encode(image::DynamicImage::ImageRgb8(img), image::ImageFormat::Png);

    let src = decode_image(&bytes).unwrap();
    assert_eq!((src.width, src.height), (3, 2));
    assert!(src.pixels.pixels().all(|p| p.0 == [10, 20, 30, 255]));
}

#[test]
fn decode_grayscale_source_expands_to_rgba() {
    let img = image::GrayImage::from_pixel(2, 2, image::Luma([77]));
    let bytes = encode(image::DynamicImage::ImageLuma8(img), image::ImageFormat::Png);

    let src = decode_image(&bytes).unwrap();
    assert!(src.pixels.pixels().all(|p| p.0 == [77, 77, 77, 255]));
}

#[test]
fn decode_garbage_is_image_load_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, IconError::ImageLoad(_)));
}

#[test]
fn load_missing_file_names_the_path() {
    let path = std::path::Path::new("target/decode_unit/does_not_exist.png");
    let err = load_source(path).unwrap_err();
    assert!(matches!(err, IconError::ImageLoad(_)));
    assert!(err.to_string().contains("does_not_exist.png"));
}

#[test]
fn load_undecodable_file_names_the_path() {
    let dir = std::path::PathBuf::from("target").join("decode_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("garbage.png");
    std::fs::write(&path, b"\x89PNG but not really").unwrap();

    let err = load_source(&path).unwrap_err();
    assert!(err.to_string().starts_with("image load error:"));
    assert!(err.to_string().contains("garbage.png"));
}
