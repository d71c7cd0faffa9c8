//! `appicon` turns one source image into a full-bleed application launcher icon.
//!
//! # Pipeline overview
//!
//! 1. **Load**: decode the source and convert it to straight RGBA8 ([`load_source`])
//! 2. **Fit**: scale to the canvas width, keep the aspect ratio, center ([`IconGeometry`])
//! 3. **Resample**: Lanczos3 in premultiplied space ([`resample_lanczos`])
//! 4. **Composite**: source-over paste onto a transparent 1024x1024 canvas ([`paste_over`])
//! 5. **Write**: PNG encode and replace the output file ([`write_png`])
//!
//! [`process_icon`] runs all five against an [`IconJob`]; [`compose_icon`] runs steps 2-4
//! without touching the filesystem.
//!
//! Sources taller than they are wide scale past the canvas height and are cropped top
//! and bottom by the paste.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod foundation;
mod layout;
mod pipeline;
mod render;

pub use assets::decode::{SourceImage, decode_image, load_source};
pub use encode::png::{encode_png, ensure_dir, write_png};
pub use foundation::core::{
    CANVAS_SIZE, CLEAR_RGBA, Canvas, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE,
    MAX_TARGET_EXTENT, TARGET_SCALE,
};
pub use foundation::error::{IconError, IconResult};
pub use layout::geometry::IconGeometry;
pub use pipeline::{IconJob, IconReport, compose_icon, process_icon};
pub use render::composite::paste_over;
pub use render::resample::resample_lanczos;
