use crate::error::{LoadError, LoadResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_RESOURCE: &str = "keyboards";
pub const ASSET_EXTENSION: &str = "json";
pub const VECTOR_SUBDIRECTORY: &str = "SVG";
pub const VECTOR_EXTENSION: &str = "svg";

/// A directory of resources shipped alongside the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str, extension: &str, subdirectory: Option<&str>) -> PathBuf {
        let mut path = self.root.clone();
        if let Some(sub) = subdirectory {
            path.push(sub);
        }
        path.push(format!("{}.{}", name, extension));
        path
    }

    pub fn locate(&self, name: &str, extension: &str, subdirectory: Option<&str>) -> Option<PathBuf> {
        let path = self.path_for(name, extension, subdirectory);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    pub fn read(&self, name: &str, extension: &str) -> LoadResult<Vec<u8>> {
        let path = self
            .locate(name, extension, None)
            .ok_or_else(|| LoadError::ResourceNotFound {
                name: format!("{}.{}", name, extension),
                searched: self.root.clone(),
            })?;

        debug!("Reading resource {}", path.display());
        Ok(fs::read(path)?)
    }

    /// Path of a bundled vector glyph. A missing glyph is not an error; the
    /// key simply renders without an image.
    pub fn vector_glyph(&self, name: &str) -> Option<PathBuf> {
        let found = self.locate(name, VECTOR_EXTENSION, Some(VECTOR_SUBDIRECTORY));
        if found.is_none() {
            debug!("Vector glyph '{}' not bundled, rendering placeholder", name);
        }
        found
    }
}
