//! Package writing functionality for creating 3MF files

use crate::error::{Error, Result};
use super::{CONTENT_TYPES_PATH, CONTENT_TYPES_XML, MODEL_PATH, RELS_PATH, RELS_XML};
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Create a 3MF package (ZIP archive) from model data
///
/// This function creates a complete 3MF file including:
/// - `[Content_Types].xml`
/// - `_rels/.rels`
/// - `3D/3dmodel.model`
///
/// All entries are deflated and stamped with the ZIP epoch, so the same
/// model XML always produces the same bytes.
///
/// # Returns
///
/// Returns the writer after finishing the ZIP archive
pub fn create_package<W: Write + Seek>(writer: W, model_xml: &str) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    write_part(&mut zip, options, CONTENT_TYPES_PATH, CONTENT_TYPES_XML.as_bytes())?;
    write_part(&mut zip, options, RELS_PATH, RELS_XML.as_bytes())?;
    write_part(&mut zip, options, MODEL_PATH, model_xml.as_bytes())?;

    let writer = zip
        .finish()
        .map_err(|e| Error::package_write("ZIP central directory", e))?;

    Ok(writer)
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
    name: &str,
    data: &[u8],
) -> Result<()> {
    zip.start_file(name, options)
        .map_err(|e| Error::package_write(name, e))?;
    zip.write_all(data)
        .map_err(|e| Error::package_write(name, e))?;
    Ok(())
}
