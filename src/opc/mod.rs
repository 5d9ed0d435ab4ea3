//! OPC (Open Packaging Conventions) handling for 3MF files
//!
//! 3MF files are ZIP archives following the OPC standard. The packages this
//! crate writes contain exactly three parts: the content type map, the
//! package relationships and the model document.

mod content_types;
mod reader;
mod relationships;
mod writer;

pub use content_types::{CONTENT_TYPES_XML, MODEL_CONTENT_TYPE};
pub use reader::Package;
pub use relationships::{MODEL_REL_TYPE, RELS_XML};
pub use writer::create_package;

/// Main 3D model file path within the 3MF archive
pub const MODEL_PATH: &str = "3D/3dmodel.model";

/// Alternative model path (some implementations use this)
pub const MODEL_PATH_ALT: &str = "/3D/3dmodel.model";

/// Content types file path
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";

/// Relationships file path
pub const RELS_PATH: &str = "_rels/.rels";

/// 3MF core namespace, the default namespace of the model document
pub const CORE_NAMESPACE: &str = "http://schemas.microsoft.com/3dmanufacturing/core/2015/02";

/// Unit written on the `<model>` element
pub const MODEL_UNIT: &str = "millimeter";
