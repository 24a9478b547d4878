//! Fetching SVG files over HTTP.
//!
//! [`HttpSource`] downloads each icon from the icon set's base URL with one
//! blocking request, without retries. A failed request surfaces as
//! [`SourceError::Http`], so the pipeline logs it and skips that icon.
//! Downloaded files can be kept on disk under their destination name, where
//! a later [`DirectorySource`](crate::DirectorySource) finds them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::error::SourceError;
use crate::icon::IconSpec;
use crate::profile::{IconSetConfig, raw_url};
use crate::source::IconSource;

/// Whole-request timeout for one icon.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads icons from `<base_url><source>?raw=true`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    save_dir: Option<PathBuf>,
}

impl HttpSource {
    /// Creates a source with the default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|source| SourceError::Http {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self::with_client(base_url, client))
    }

    /// Uses a preconfigured client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            save_dir: None,
        }
    }

    /// Creates a source for the set's `base_url`.
    pub fn for_config(config: &IconSetConfig) -> Result<Self, SourceError> {
        match &config.base_url {
            Some(base) => Self::new(base.as_str()),
            None => Err(SourceError::NoBaseUrl(config.name.clone())),
        }
    }

    /// Also writes every downloaded file to `dir/<destination>`.
    pub fn saving_to(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, spec: &IconSpec) -> String {
        raw_url(&self.base_url, spec)
    }

    /// Performs the request for one icon.
    pub fn fetch(&self, spec: &IconSpec) -> Result<Vec<u8>, SourceError> {
        let url = self.url_for(spec);
        log::debug!("GET {url}");

        let body = self
            .client
            .get(&url)
            .send()
            .and_then(Response::error_for_status)
            .and_then(Response::bytes);

        match body {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(source) => Err(SourceError::Http { url, source }),
        }
    }

    fn save(dir: &Path, spec: &IconSpec, bytes: &[u8]) -> Result<(), SourceError> {
        let path = dir.join(&spec.destination);
        let written = fs::create_dir_all(dir).and_then(|()| fs::write(&path, bytes));
        match written {
            Ok(()) => {
                log::info!("[DOWNLOAD] {} -> {}", spec.source, path.display());
                Ok(())
            }
            Err(source) => Err(SourceError::Save { path, source }),
        }
    }
}

impl IconSource for HttpSource {
    fn load(&self, spec: &IconSpec) -> Result<Vec<u8>, SourceError> {
        let bytes = self.fetch(spec)?;
        if let Some(dir) = &self.save_dir {
            Self::save(dir, spec, &bytes)?;
        }
        Ok(bytes)
    }
}
