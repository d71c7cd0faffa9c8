use std::path::{Path, PathBuf};

use crate::{
    assets::decode::{SourceImage, load_source},
    encode::png::{ensure_dir, write_png},
    foundation::core::{
        Canvas, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE, TARGET_SCALE,
    },
    foundation::error::IconResult,
    layout::geometry::IconGeometry,
    render::{composite::paste_over, resample::resample_lanczos},
};

/// Where to read the source image and where to write the icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconJob {
    /// Source image path.
    pub input: PathBuf,
    /// Directory created before writing.
    pub output_dir: PathBuf,
    /// Output PNG path.
    pub output: PathBuf,
}

impl Default for IconJob {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output: Path::new(DEFAULT_OUTPUT_DIR).join(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl IconJob {
    /// Resolve every path of this job against `root`.
    pub fn rooted_at(self, root: &Path) -> Self {
        Self {
            input: root.join(self.input),
            output_dir: root.join(self.output_dir),
            output: root.join(self.output),
        }
    }
}

/// Outcome of a successful [`process_icon`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconReport {
    /// Path the icon was written to.
    pub output: PathBuf,
    /// Output raster size.
    pub canvas: Canvas,
    /// Size and placement of the scaled source.
    pub geometry: IconGeometry,
}

impl IconReport {
    /// Operator-facing success lines.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!(
                "Success: Icon processed and saved to {}",
                self.output.display()
            ),
            format!(
                "Dimensions: {}, Logo Size: {}x{} (centered)",
                self.canvas, self.geometry.target_width, self.geometry.target_height
            ),
        ]
    }
}

/// Scale `src` to the canvas width, center it, and paste it onto a cleared canvas.
///
/// Pure: no filesystem access.
pub fn compose_icon(
    src: &SourceImage,
    canvas: Canvas,
) -> IconResult<(image::RgbaImage, IconGeometry)> {
    let geometry = IconGeometry::fit_width(canvas, src.width, src.height, TARGET_SCALE)?;
    if geometry.overflows(canvas) {
        tracing::debug!(?geometry, "scaled source overflows canvas; paste will clip");
    }

    let scaled = resample_lanczos(&src.pixels, geometry.target_width, geometry.target_height);
    let mut out = canvas.blank();
    paste_over(&mut out, &scaled, geometry.offset_x, geometry.offset_y);
    Ok((out, geometry))
}

/// Load `job.input`, compose the launcher icon, and write it to `job.output`.
///
/// The output directory is created first. Nothing is written to `job.output` unless
/// loading and composing succeed.
#[tracing::instrument(skip(job), fields(input = %job.input.display(), output = %job.output.display()))]
pub fn process_icon(job: &IconJob) -> IconResult<IconReport> {
    ensure_dir(&job.output_dir)?;

    let src = load_source(&job.input)?;
    let canvas = Canvas::ICON;
    let (icon, geometry) = compose_icon(&src, canvas)?;
    tracing::debug!(?geometry, src_width = src.width, src_height = src.height, "composed icon");

    write_png(&job.output, &icon)?;

    Ok(IconReport {
        output: job.output.clone(),
        canvas,
        geometry,
    })
}
