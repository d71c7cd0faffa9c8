use std::path::PathBuf;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("png_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn ensure_dir_is_idempotent_and_recursive() {
    let dir = scratch("ensure").join("a").join("b");
    ensure_dir(&dir).unwrap();
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn ensure_dir_fails_when_a_file_is_in_the_way() {
    let root = scratch("blocked");
    std::fs::create_dir_all(&root).unwrap();
    let file = root.join("not_a_dir");
    std::fs::write(&file, b"x").unwrap();

    let err = ensure_dir(&file.join("child")).unwrap_err();
    assert!(err.to_string().contains("create output directory"));
}

#[test]
fn encode_png_has_signature_and_decodes_back() {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
    let bytes = encode_png(&img).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let back = image::load_from_memory(&bytes).unwrap();
    assert_eq!(back.color(), image::ColorType::Rgba8);
    assert_eq!(back.to_rgba8(), img);
}

#[test]
fn write_png_overwrites_and_leaves_no_temp_file() {
    let dir = scratch("write");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("icon.png");
    std::fs::write(&path, b"stale").unwrap();

    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]));
    write_png(&path, &img).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, encode_png(&img).unwrap());
    assert!(!tmp_sibling(&path).exists());
}

#[test]
fn write_png_into_missing_dir_fails() {
    let path = scratch("missing").join("nope").join("icon.png");
    let img = image::RgbaImage::new(1, 1);
    assert!(write_png(&path, &img).is_err());
    assert!(!path.exists());
}

#[test]
fn tmp_sibling_appends_suffix() {
    assert_eq!(
        tmp_sibling(std::path::Path::new("assets/icons/app_icon.png")),
        PathBuf::from("assets/icons/app_icon.png.tmp")
    );
}
