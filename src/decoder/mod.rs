//! 3MF decoding pipeline
//!
//! Opens the package, parses the model document and turns every object with
//! a mesh into an [`ImportedObject`]. Colors and materials in the file are
//! not carried over: the read path is deliberately geometry-only, so an
//! export/import round trip loses the material split. Every partition comes
//! back as its own object.

mod config;

pub use config::{ImportConfig, IndexPolicy};

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::{ImportedObject, Mesh};
use crate::opc::Package;
use crate::parser::{ModelDocument, parse_model_xml};

/// Prefix of generated object names
pub const IMPORTED_NAME_PREFIX: &str = "Imported_3MF_";

/// Decode a 3MF package with the default configuration
pub fn import_from_reader<R: Read + Seek>(reader: R) -> Result<Vec<ImportedObject>> {
    import_from_reader_with_config(reader, &ImportConfig::default())
}

/// Decode a 3MF package
pub fn import_from_reader_with_config<R: Read + Seek>(
    reader: R,
    config: &ImportConfig,
) -> Result<Vec<ImportedObject>> {
    let mut package = Package::open(reader)?;
    let model_xml = package.get_model()?;
    let document = parse_model_xml(&model_xml)?;
    materialize(document, config)
}

/// Decode the 3MF file at `path` with the default configuration
pub fn import_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedObject>> {
    import_from_file_with_config(path, &ImportConfig::default())
}

/// Decode the 3MF file at `path`
pub fn import_from_file_with_config<P: AsRef<Path>>(
    path: P,
    config: &ImportConfig,
) -> Result<Vec<ImportedObject>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let objects = import_from_reader_with_config(BufReader::new(file), config)?;

    info!("Loaded {} objects from {:?} (3MF)", objects.len(), path);
    Ok(objects)
}

/// Turn parsed objects into host-ready meshes
///
/// Objects without a mesh are skipped; the rest are named after their
/// position among all objects in the document.
pub fn materialize(document: ModelDocument, config: &ImportConfig) -> Result<Vec<ImportedObject>> {
    let mut imported = Vec::new();

    for object in document.objects {
        let Some(mesh) = object.mesh else {
            continue;
        };
        let name = format!("{}{}", IMPORTED_NAME_PREFIX, object.index);
        let mesh = apply_index_policy(&name, mesh, config.index_policy())?;
        imported.push(ImportedObject { name, mesh });
    }

    Ok(imported)
}

fn apply_index_policy(name: &str, mut mesh: Mesh, policy: IndexPolicy) -> Result<Mesh> {
    let vertex_count = mesh.vertices.len();
    let in_range = |indices: [usize; 3]| indices.iter().all(|&i| i < vertex_count);

    match policy {
        IndexPolicy::PassThrough => {}
        IndexPolicy::Reject => {
            if let Some((position, triangle)) = mesh
                .triangles
                .iter()
                .enumerate()
                .find(|(_, t)| !in_range(t.indices()))
            {
                return Err(Error::InvalidModel(format!(
                    "Object '{}': triangle {} references vertices {:?} but only {} vertices exist",
                    name,
                    position,
                    triangle.indices(),
                    vertex_count
                )));
            }
        }
        IndexPolicy::SkipInvalid => {
            let before = mesh.triangles.len();
            mesh.triangles.retain(|t| in_range(t.indices()));
            let skipped = before - mesh.triangles.len();
            if skipped > 0 {
                warn!(
                    object = %name,
                    skipped,
                    "Dropped triangles with out-of-range vertex indices"
                );
            }
        }
    }

    Ok(mesh)
}
