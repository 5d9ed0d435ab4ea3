//! Core mesh types

use super::material::Material;

/// A 3D vertex with x, y, z coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// Index of first vertex
    pub v1: usize,
    /// Index of second vertex
    pub v2: usize,
    /// Index of third vertex
    pub v3: usize,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(v1: usize, v2: usize, v3: usize) -> Self {
        Self { v1, v2, v3 }
    }

    /// The three vertex indices in winding order
    pub fn indices(&self) -> [usize; 3] {
        [self.v1, self.v2, self.v3]
    }
}

/// A triangulated mesh
///
/// `material_indices`, when present, holds one material slot index per
/// triangle. Slots index into [`SceneObject::materials`]. When absent every
/// triangle uses the implicit default material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// List of vertices
    pub vertices: Vec<Vertex>,
    /// List of triangles
    pub triangles: Vec<Triangle>,
    /// Optional per-triangle material slot index
    pub material_indices: Option<Vec<usize>>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from raw position and index data
    pub fn from_parts(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
            material_indices: None,
        }
    }

    /// Attach a per-triangle material slot index list
    pub fn with_material_indices(mut self, indices: Vec<usize>) -> Self {
        self.material_indices = Some(indices);
        self
    }

    /// Material slot of the triangle at `triangle`, if one is assigned
    pub fn material_slot(&self, triangle: usize) -> Option<usize> {
        self.material_indices
            .as_ref()
            .and_then(|indices| indices.get(triangle).copied())
    }
}

/// One object of the host scene, as handed to the encoder
///
/// `mesh` is `None` for scene objects that carry no geometry (cameras,
/// lights, empties); the encoder skips those. Material slots may be empty,
/// matching hosts that allow unassigned slots.
#[derive(Debug, Clone, Default)]
pub struct SceneObject {
    /// Display name, used as the prefix of every exported object name
    pub name: String,
    /// Triangulated geometry, if this is a mesh object
    pub mesh: Option<Mesh>,
    /// Material slots referenced by `Mesh::material_indices`
    pub materials: Vec<Option<Material>>,
}

impl SceneObject {
    /// Create a mesh object without materials
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh: Some(mesh),
            materials: Vec::new(),
        }
    }

    /// Create a scene object without geometry
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
            materials: Vec::new(),
        }
    }

    /// Append a material slot
    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(Some(material));
        self
    }

    /// Append an empty material slot
    pub fn with_empty_slot(mut self) -> Self {
        self.materials.push(None);
        self
    }
}

/// A mesh recovered from a 3MF package
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedObject {
    /// Generated name (`Imported_3MF_<n>`)
    pub name: String,
    /// Positions and triangles; `material_indices` is always `None`
    pub mesh: Mesh,
}
