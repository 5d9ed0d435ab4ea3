//! Resources emitted into the model document

use std::fmt;

use super::core::Mesh;

/// Identifier of an `<object>` resource within one model document
///
/// Ids start at 1 and are handed out in increasing order by the export
/// context; an id is never reused within one archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(u32);

impl ResourceId {
    /// The first id of every export
    pub const FIRST: ResourceId = ResourceId(1);

    /// Wrap a raw id
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }

    /// The id following this one
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The part of one source mesh that uses a single material
///
/// `mesh` is locally renumbered: it holds only the vertices its own
/// triangles reference, indexed from 0 in first-use order.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedObject {
    /// Resource id of the `<object>` element
    pub id: ResourceId,
    /// `<source object name>_<material name>`
    pub name: String,
    /// Index of the material in the base material group (`pindex`)
    pub material_index: usize,
    /// Local geometry; `material_indices` is always `None`
    pub mesh: Mesh,
}
