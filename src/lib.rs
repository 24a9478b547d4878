//! lvgl-icon-renderer: SVG icons to LVGL C image sources
//!
//! This crate turns vector icons into `ARGB8888` byte arrays with matching
//! `lv_image_dsc_t` descriptors that can be compiled straight into firmware.
//! Each icon is rendered large, cropped to its visible content, shrunk into
//! its target footprint and centered on a transparent canvas.
//!
//! # Example
//!
//! ```
//! use lvgl_icon_renderer::{IconPipeline, IconSetConfig, IconSpec};
//!
//! let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
//!     <circle cx="5" cy="5" r="4" fill="#ffaa00"/></svg>"##;
//!
//! let config = IconSetConfig::new("demo")
//!     .with_prefix("demo_")
//!     .with_icon(IconSpec::new("sun.svg", "sun.svg", 60, 60));
//! let pipeline = IconPipeline::new(config.clone()).unwrap();
//!
//! let rendered = pipeline.process(&config.icons[0], svg.as_bytes()).unwrap();
//! assert_eq!(rendered.identifier(), "demo_sun");
//! assert_eq!(rendered.output.icon.data_size(), 60 * 60 * 4);
//! assert!(rendered.output.c_source.contains("const lv_image_dsc_t demo_sun"));
//! ```
//!
//! # Batch Runs
//!
//! [`IconPipeline::run`] reads every icon through an [`IconSource`], writes
//! one `.c` file and one PNG preview per icon, and finishes with a header
//! declaring all generated images. Icons that fail are logged and left out
//! of the header; the rest of the batch continues.
//!
//! ```no_run
//! use std::path::Path;
//! use lvgl_icon_renderer::{DirectorySource, IconPipeline, IconSetConfig};
//!
//! let pipeline = IconPipeline::new(IconSetConfig::weather()).unwrap();
//! let report = pipeline.run(&DirectorySource::new("images"), Path::new("images")).unwrap();
//! println!("{} icons generated", report.succeeded());
//! ```

#[cfg(feature = "download")]
mod download;
pub mod encode;
mod error;
mod icon;
mod manifest;
mod pipeline;
mod profile;
pub mod raster;
mod source;

#[cfg(feature = "download")]
pub use download::{DOWNLOAD_TIMEOUT, HttpSource};
pub use encode::{EncodedIcon, EncodedOutput, LvglVersion, PixelEncoder, derive_identifier};
pub use error::{ConfigError, EncodeError, PipelineError, ProcessError, RenderError, SourceError};
pub use icon::{IconSpec, RasterBuffer, RectPx, SizePx};
pub use manifest::Manifest;
pub use pipeline::{IconFailure, IconPipeline, RenderedIcon, RunReport};
pub use profile::{IconSetConfig, OutputLayout, INFO_ICON_SIZE, WEATHER_BASE_URL, WEATHER_ICON_SIZE};
pub use raster::IconRasterizer;
pub use source::{DirectorySource, IconSource, MemorySource};
