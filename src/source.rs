//! Where SVG bytes come from.
//!
//! [`DirectorySource`] reads files that were already downloaded and
//! [`MemorySource`] serves embedded documents. With the `download` feature,
//! `HttpSource` fetches them from the icon set's base URL.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::icon::IconSpec;

/// Provides the SVG bytes for an icon entry.
pub trait IconSource {
    fn load(&self, spec: &IconSpec) -> Result<Vec<u8>, SourceError>;
}

// ============================================================================
// DirectorySource
// ============================================================================

/// Reads SVG files from a local directory.
///
/// Files are looked up under their destination name first (the name a
/// download step stores them as), then under the remote source name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl IconSource for DirectorySource {
    fn load(&self, spec: &IconSpec) -> Result<Vec<u8>, SourceError> {
        for name in [&spec.destination, &spec.source] {
            let path = self.root.join(name);
            match fs::read(&path) {
                Ok(bytes) => return Ok(bytes),
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => return Err(SourceError::Io { path, source }),
            }
        }
        Err(SourceError::NotFound(spec.destination.clone()))
    }
}

// ============================================================================
// MemorySource
// ============================================================================

/// SVG documents held in memory, keyed by source or destination name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document under `name`.
    pub fn insert(&mut self, name: impl Into<String>, svg: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), svg.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, svg: impl Into<Vec<u8>>) -> Self {
        self.insert(name, svg);
        self
    }
}

impl IconSource for MemorySource {
    fn load(&self, spec: &IconSpec) -> Result<Vec<u8>, SourceError> {
        self.files
            .get(&spec.destination)
            .or_else(|| self.files.get(&spec.source))
            .cloned()
            .ok_or_else(|| SourceError::NotFound(spec.destination.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_prefers_destination_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("weather_01d.svg"), b"dest").unwrap();
        fs::write(dir.path().join("clear-day.svg"), b"source").unwrap();

        let source = DirectorySource::new(dir.path());
        let spec = IconSpec::new("clear-day.svg", "weather_01d.svg", 60, 60);
        assert_eq!(source.load(&spec).unwrap(), b"dest");
    }

    #[test]
    fn directory_falls_back_to_source_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wind.svg"), b"wind").unwrap();

        let source = DirectorySource::new(dir.path());
        let spec = IconSpec::new("wind.svg", "wind_speed_icon.svg", 16, 16);
        assert_eq!(source.load(&spec).unwrap(), b"wind");
    }

    #[test]
    fn directory_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        let spec = IconSpec::new("mist.svg", "weather_50.svg", 60, 60);
        assert!(matches!(source.load(&spec), Err(SourceError::NotFound(name)) if name == "weather_50.svg"));
    }

    #[test]
    fn memory_lookup() {
        let source = MemorySource::new().with("snow.svg", "<svg/>");
        let spec = IconSpec::new("snow.svg", "weather_13.svg", 60, 60);
        assert_eq!(source.load(&spec).unwrap(), b"<svg/>");

        let missing = IconSpec::new("rain.svg", "weather_09.svg", 60, 60);
        assert!(source.load(&missing).is_err());
    }
}
