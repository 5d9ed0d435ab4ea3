//! # threemf-codec
//!
//! A pure Rust converter between triangulated scene meshes and 3MF
//! (3D Manufacturing Format) packages.
//!
//! 3MF files are ZIP containers following the Open Packaging Conventions
//! (OPC) with an XML model document inside. This crate writes and reads that
//! structure directly.
//!
//! ## Export
//!
//! Each mesh is split into one 3MF object per material, with its own
//! compact vertex list. Materials become entries of a single base material
//! group; every object is placed at the origin through one component and
//! one build item.
//!
//! ## Import
//!
//! Every object with a mesh becomes one [`ImportedObject`] named
//! `Imported_3MF_<n>`. Materials and colors in the file are not read back.
//!
//! ## Example
//!
//! ```no_run
//! use threemf_codec::{Material, Mesh, Rgba, SceneObject, Triangle, Vertex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mesh = Mesh::from_parts(
//!     vec![
//!         Vertex::new(0.0, 0.0, 0.0),
//!         Vertex::new(10.0, 0.0, 0.0),
//!         Vertex::new(0.0, 10.0, 0.0),
//!     ],
//!     vec![Triangle::new(0, 1, 2)],
//! )
//! .with_material_indices(vec![0]);
//!
//! let object = SceneObject::new("Wedge", mesh)
//!     .with_material(Material::new("Red", Rgba::rgb(1.0, 0.0, 0.0)));
//!
//! threemf_codec::export_to_file(&[object], "wedge.3mf")?;
//!
//! let imported = threemf_codec::import_from_file("wedge.3mf")?;
//! println!("Imported {} objects", imported.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod model;
pub mod opc;
pub mod parser;
mod writer;

pub use decoder::{
    ImportConfig, IndexPolicy, import_from_file, import_from_file_with_config,
    import_from_reader, import_from_reader_with_config,
};
pub use encoder::{
    ExportContext, MaterialRegistry, build_model_xml, color_to_hex, export_to_file,
    export_to_vec, export_to_writer,
};
pub use error::{Error, ErrorCategory, Result};
pub use model::{
    ColorSource, ImportedObject, Material, Mesh, PartitionedObject, ResourceId, Rgba,
    SceneObject, Triangle, Vertex,
};
