//! Listing of every image produced in a run.

use std::fs;
use std::path::Path;

use crate::encode::render_header;

/// Identifiers of successfully encoded icons, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    identifiers: Vec<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an identifier. Duplicates are kept out so every image is
    /// declared once.
    ///
    /// Returns false if the identifier was already listed.
    pub fn push(&mut self, identifier: impl Into<String>) -> bool {
        let identifier = identifier.into();
        if self.contains(&identifier) {
            return false;
        }
        self.identifiers.push(identifier);
        true
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.iter().any(|i| i == identifier)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    /// Renders the header declaring each image with `LV_IMG_DECLARE`.
    pub fn to_header(&self) -> String {
        render_header(self.identifiers.as_slice())
    }

    /// Writes the header, replacing any previous file at `path`.
    pub fn write_header(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.to_header())?;
        log::info!("[HEADER] Generated '{}' with {} icons.", path.display(), self.len());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.iter()
    }
}
