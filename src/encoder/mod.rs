//! 3MF encoding pipeline
//!
//! Export runs in four steps, all driven by one [`ExportContext`]:
//!
//! 1. pick the mesh objects out of the scene snapshot,
//! 2. register every material they use,
//! 3. split each mesh into one part per material and give every part a
//!    resource id,
//! 4. write the model XML and package it.
//!
//! The context owns the registry and the id counter, so nothing leaks from
//! one export into the next.

mod collector;
mod partition;
mod registry;

pub use collector::{CollectedMesh, collect_mesh_objects};
pub use partition::{MeshPartition, partition_mesh};
pub use registry::{DEFAULT_MATERIAL_NAME, MaterialRegistry, RegisteredMaterial, color_to_hex};

use std::io::{Seek, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{PartitionedObject, ResourceId, SceneObject};
use crate::{opc, writer};

/// State of one export call
#[derive(Debug, Clone)]
pub struct ExportContext {
    registry: MaterialRegistry,
    next_id: ResourceId,
    objects: Vec<PartitionedObject>,
}

impl ExportContext {
    /// Create an empty context; the first object gets id 1
    pub fn new() -> Self {
        Self {
            registry: MaterialRegistry::new(),
            next_id: ResourceId::FIRST,
            objects: Vec::new(),
        }
    }

    /// Register the materials of `collected` and append its partitions
    pub fn add_mesh(&mut self, collected: CollectedMesh<'_>) -> Result<()> {
        let CollectedMesh { object, mesh } = collected;

        // Declared materials are registered in slot order, even unused ones
        let slot_index: Vec<Option<usize>> = object
            .materials
            .iter()
            .map(|slot| slot.as_ref().map(|m| self.registry.register(Some(m))))
            .collect();

        let material_of: Vec<usize> = (0..mesh.triangles.len())
            .map(|triangle| {
                mesh.material_slot(triangle)
                    .and_then(|slot| slot_index.get(slot).copied().flatten())
                    .unwrap_or_else(|| self.registry.register(None))
            })
            .collect();

        for part in partition_mesh(mesh, &material_of)? {
            let material_name = self
                .registry
                .get(part.material_index)
                .map(|m| m.name.as_str())
                .unwrap_or(DEFAULT_MATERIAL_NAME);
            let name = format!("{}_{}", object.name, material_name);
            let id = self.allocate_id();

            debug!(
                id = id.get(),
                name = %name,
                vertices = part.mesh.vertices.len(),
                triangles = part.mesh.triangles.len(),
                "Partitioned object"
            );

            self.objects.push(PartitionedObject {
                id,
                name,
                material_index: part.material_index,
                mesh: part.mesh,
            });
        }

        Ok(())
    }

    /// Registry built so far
    pub fn registry(&self) -> &MaterialRegistry {
        &self.registry
    }

    /// Partitioned objects in id order
    pub fn objects(&self) -> &[PartitionedObject] {
        &self.objects
    }

    /// Serialize the collected resources to model XML
    pub fn to_model_xml(&mut self) -> Result<String> {
        self.registry.ensure_not_empty();

        let mut xml_buffer = Vec::new();
        writer::write_model_xml(&self.registry, &self.objects, &mut xml_buffer)?;
        String::from_utf8(xml_buffer)
            .map_err(|e| Error::xml_write(format!("Failed to convert XML to UTF-8: {}", e)))
    }

    fn allocate_id(&mut self) -> ResourceId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

impl Default for ExportContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the `3D/3dmodel.model` document for `objects`
pub fn build_model_xml(objects: &[SceneObject]) -> Result<String> {
    let collected = collect_mesh_objects(objects)?;

    let mut context = ExportContext::new();
    for mesh in collected {
        context.add_mesh(mesh)?;
    }

    let xml = context.to_model_xml()?;
    info!(
        objects = context.objects().len(),
        materials = context.registry().len(),
        "Built 3MF model document"
    );
    Ok(xml)
}

/// Encode `objects` as a 3MF package into `writer`
///
/// Returns the writer after the archive is finished.
pub fn export_to_writer<W: Write + Seek>(objects: &[SceneObject], writer: W) -> Result<W> {
    let model_xml = build_model_xml(objects)?;
    opc::create_package(writer, &model_xml)
}

/// Encode `objects` as a 3MF package in memory
pub fn export_to_vec(objects: &[SceneObject]) -> Result<Vec<u8>> {
    let cursor = export_to_writer(objects, std::io::Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Encode `objects` as a 3MF file at `path`
///
/// The archive is written to a temporary file next to `path` and renamed
/// over it only once complete. On failure the destination is left as it
/// was and the temporary file is removed.
pub fn export_to_file<P: AsRef<Path>>(objects: &[SceneObject], path: P) -> Result<()> {
    let path = path.as_ref();
    let model_xml = build_model_xml(objects)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(directory)?;
    let temp = opc::create_package(temp, &model_xml)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    info!("Saved 3MF package to {:?}", path);
    Ok(())
}
