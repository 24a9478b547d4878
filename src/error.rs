//! Error types for every stage of the conversion.
//!
//! Only [`PipelineError`] ends a run. Everything else describes a single
//! icon and is reported, then skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid icon-set configuration, detected before any rendering.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("icon `{destination}` has a zero target size ({width}x{height})")]
    ZeroSize {
        destination: String,
        width: u32,
        height: u32,
    },

    #[error("icon entry `{0}` is missing a source or destination name")]
    MissingName(String),

    #[error("render size must be greater than zero")]
    ZeroRenderSize,

    #[error("render size {size} exceeds the maximum of {max}")]
    RenderSizeTooLarge { size: u32, max: u32 },

    #[error("invalid icon set JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read icon set {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure to obtain the SVG bytes for one icon.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no downloaded file for `{0}`")]
    NotFound(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[cfg(feature = "download")]
    #[error("icon set `{0}` has no base URL to download from")]
    NoBaseUrl(String),

    #[cfg(feature = "download")]
    #[error("cannot download {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[cfg(feature = "download")]
    #[error("cannot save {path}: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure to turn SVG bytes into a raster buffer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot parse SVG: {0}")]
    Parse(#[from] resvg::usvg::Error),

    #[error("cannot allocate a {0}x{0} working pixmap")]
    Pixmap(u32),

    #[error("icon is empty or fully transparent")]
    EmptyIcon,

    #[error("target size {0}x{1} has no pixels")]
    ZeroTarget(u32, u32),
}

/// Failure to serialize a raster buffer.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cannot encode PNG preview: {0}")]
    Preview(#[from] image::ImageError),
}

/// Everything that can go wrong while converting a single icon.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Returns true when the icon rendered but had no visible content.
    pub fn is_empty_icon(&self) -> bool {
        matches!(self, Self::Render(RenderError::EmptyIcon))
    }
}

/// A failure that stops the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write header {path}: {source}")]
    Header {
        path: PathBuf,
        source: std::io::Error,
    },
}
