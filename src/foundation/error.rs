/// Result alias used across the crate.
pub type IconResult<T> = Result<T, IconError>;

/// Errors produced while building a launcher icon.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Source image is missing, unreadable, or not a decodable raster.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// Source dimensions cannot be mapped onto the canvas.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Canvas could not be encoded as PNG.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem or other underlying failure, with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build an [`IconError::ImageLoad`] value.
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build an [`IconError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build an [`IconError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
