//! Batch driver: one icon set in, C sources, previews and a header out.
//!
//! Per-icon failures are logged and skipped. Only problems with the output
//! tree itself end a run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::encode::{EncodedOutput, PixelEncoder};
use crate::error::{PipelineError, ProcessError};
use crate::icon::{IconSpec, RasterBuffer};
use crate::manifest::Manifest;
use crate::profile::IconSetConfig;
use crate::raster::IconRasterizer;
use crate::source::IconSource;

/// The in-memory result of converting one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub raster: RasterBuffer,
    pub output: EncodedOutput,
}

impl RenderedIcon {
    pub fn identifier(&self) -> &str {
        &self.output.icon.identifier
    }
}

/// An icon that did not make it into the manifest.
#[derive(Debug)]
pub struct IconFailure {
    pub destination: String,
    pub error: ProcessError,
}

/// Summary of a finished run.
#[derive(Debug)]
pub struct RunReport {
    pub manifest: Manifest,
    pub failures: Vec<IconFailure>,
    pub header_path: PathBuf,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.manifest.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

// ============================================================================
// IconPipeline
// ============================================================================

/// Converts every icon of an [`IconSetConfig`].
#[derive(Debug, Clone)]
pub struct IconPipeline {
    config: IconSetConfig,
    rasterizer: IconRasterizer,
    encoder: PixelEncoder,
}

impl IconPipeline {
    /// Builds a pipeline, rejecting invalid entries before any work starts.
    pub fn new(config: IconSetConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            rasterizer: IconRasterizer::new(config.render_size),
            encoder: PixelEncoder::new(config.identifier_prefix.clone(), config.lvgl_version),
            config,
        })
    }

    pub fn config(&self) -> &IconSetConfig {
        &self.config
    }

    /// Converts one icon without touching the filesystem.
    pub fn process(&self, spec: &IconSpec, svg_data: &[u8]) -> Result<RenderedIcon, ProcessError> {
        let raster = self.rasterizer.rasterize(svg_data, spec.target())?;
        let output = self.encoder.encode(&spec.destination, &raster)?;
        Ok(RenderedIcon { raster, output })
    }

    /// Runs the whole set: load, convert and write each icon, then the header.
    ///
    /// Outputs are placed below `out_root` following the config's
    /// [`OutputLayout`](crate::OutputLayout).
    pub fn run(&self, source: &dyn IconSource, out_root: &Path) -> Result<RunReport, PipelineError> {
        let layout = &self.config.output;
        let source_dir = layout.source_dir_in(out_root);
        let preview_dir = layout.preview_dir_in(out_root);
        create_dir(&source_dir)?;
        create_dir(&preview_dir)?;

        log::info!("Processing {} icons of set '{}'...", self.config.icons.len(), self.config.name);

        let mut manifest = Manifest::new();
        let mut failures = Vec::new();

        for spec in &self.config.icons {
            match self.convert(spec, source, &source_dir, &preview_dir) {
                Ok(identifier) => {
                    log::info!("[OK] {} -> {identifier}", spec.destination);
                    if !manifest.push(identifier.clone()) {
                        log::warn!("{identifier} generated twice, later icon overwrote the earlier one");
                    }
                }
                Err(error) => {
                    if error.is_empty_icon() {
                        log::warn!("{} is empty, skipped", spec.destination);
                    } else {
                        log::error!("Error processing {}: {error}", spec.destination);
                    }
                    failures.push(IconFailure {
                        destination: spec.destination.clone(),
                        error,
                    });
                }
            }
        }

        let header_path = layout.header_path_in(out_root);
        manifest
            .write_header(&header_path)
            .map_err(|source| PipelineError::Header {
                path: header_path.clone(),
                source,
            })?;

        if !failures.is_empty() {
            log::warn!("{} of {} icons failed", failures.len(), self.config.icons.len());
        }

        Ok(RunReport {
            manifest,
            failures,
            header_path,
        })
    }

    /// Loads, converts and writes one icon. Returns its identifier.
    fn convert(
        &self,
        spec: &IconSpec,
        source: &dyn IconSource,
        source_dir: &Path,
        preview_dir: &Path,
    ) -> Result<String, ProcessError> {
        let svg_data = source.load(spec)?;
        let rendered = self.process(spec, &svg_data)?;
        let identifier = rendered.identifier();

        write_file(&preview_dir.join(format!("{identifier}.png")), &rendered.output.preview_png)?;
        write_file(&source_dir.join(format!("{identifier}.c")), rendered.output.c_source.as_bytes())?;

        Ok(rendered.output.icon.identifier)
    }
}

fn create_dir(path: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(path).map_err(|source| PipelineError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ProcessError> {
    fs::write(path, contents).map_err(|source| ProcessError::Write {
        path: path.to_path_buf(),
        source,
    })
}
