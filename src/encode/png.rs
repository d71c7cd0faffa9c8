use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{IconError, IconResult};

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> IconResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output directory '{}'", dir.display()))?;
    Ok(())
}

/// Encode an RGBA8 raster as PNG bytes.
pub fn encode_png(img: &image::RgbaImage) -> IconResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| IconError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Encode `img` as PNG and write it to `path`, replacing any existing file.
///
/// The bytes go to a sibling temporary file first and are renamed into place, so readers
/// never observe a half-written icon.
pub fn write_png(path: &Path, img: &image::RgbaImage) -> IconResult<()> {
    let bytes = encode_png(img)?;

    let tmp = tmp_sibling(path);
    std::fs::write(&tmp, &bytes)
        .with_context(|| format!("write png '{}'", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(anyhow::Error::new(e)
            .context(format!("replace '{}'", path.display()))
            .into());
    }

    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
