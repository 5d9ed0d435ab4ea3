//! Package reading functionality

use crate::error::{Error, Result};
use super::{MODEL_PATH, MODEL_PATH_ALT};
use std::io::{Read, Seek};
use zip::ZipArchive;

/// An opened 3MF package
///
/// Only the model part is required; packages from other writers that add
/// thumbnails, metadata or extra relationships are accepted as they are.
pub struct Package<R: Read> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> Package<R> {
    /// Open a 3MF package from a reader
    ///
    /// Fails with a ZIP error if `reader` does not hold a ZIP archive.
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Check if a file exists in the package
    pub fn has_file(&mut self, name: &str) -> bool {
        self.archive.by_name(name).is_ok()
    }

    /// Path of the model part, if the package has one
    pub fn model_path(&mut self) -> Option<&'static str> {
        [MODEL_PATH, MODEL_PATH_ALT]
            .into_iter()
            .find(|path| self.has_file(path))
    }

    /// Get the main 3D model file content
    ///
    /// The part must be UTF-8; anything else is reported as invalid XML.
    pub fn get_model(&mut self) -> Result<String> {
        let Some(path) = self.model_path() else {
            return Err(Error::MissingFile(format!(
                "{} (the archive has no 3D model part; found {:?})",
                MODEL_PATH,
                self.file_names()
            )));
        };
        let bytes = self.get_file_binary(path)?;
        String::from_utf8(bytes).map_err(|e| {
            Error::InvalidXml(format!("Model part '{}' is not valid UTF-8: {}", path, e))
        })
    }

    /// Get a file as binary data
    pub fn get_file_binary(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(name)
            .map_err(|_| Error::MissingFile(name.to_string()))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(|e| {
            Error::invalid_format_context(&format!("Part '{}'", name), &e.to_string())
        })?;
        Ok(content)
    }

    /// Get a list of all file names in the package, in archive order
    pub fn file_names(&mut self) -> Vec<String> {
        (0..self.archive.len())
            .filter_map(|i| {
                self.archive
                    .by_index(i)
                    .ok()
                    .map(|f| f.name().to_string())
            })
            .collect()
    }
}
