//! Splitting a mesh into one part per material
//!
//! Every part gets its own compact vertex list. Buckets, vertices and
//! triangles all come out in input order; hash maps are only used for
//! lookups, never iterated.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Mesh, Triangle, Vertex};

/// Triangles of one mesh that share a material, renumbered locally
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPartition {
    /// Registry index of the shared material
    pub material_index: usize,
    /// Local geometry
    pub mesh: Mesh,
}

/// Split `mesh` by the registry index of each triangle's material
///
/// `material_of[i]` is the material of triangle `i`. Partitions appear in
/// the order their first triangle appears. Materials without triangles
/// produce nothing.
pub fn partition_mesh(mesh: &Mesh, material_of: &[usize]) -> Result<Vec<MeshPartition>> {
    if material_of.len() != mesh.triangles.len() {
        return Err(Error::InvalidInput(format!(
            "Material assignment covers {} triangles but the mesh has {}",
            material_of.len(),
            mesh.triangles.len()
        )));
    }

    let mut bucket_of: HashMap<usize, usize> = HashMap::new();
    let mut buckets: Vec<(usize, Vec<&Triangle>)> = Vec::new();

    for (triangle, &material_index) in mesh.triangles.iter().zip(material_of) {
        let position = *bucket_of.entry(material_index).or_insert_with(|| {
            buckets.push((material_index, Vec::new()));
            buckets.len() - 1
        });
        buckets[position].1.push(triangle);
    }

    buckets
        .into_iter()
        .map(|(material_index, triangles)| -> Result<MeshPartition> {
            let mut local = LocalVertices::new(&mesh.vertices);
            let mut rewritten = Vec::with_capacity(triangles.len());
            for triangle in triangles {
                rewritten.push(Triangle::new(
                    local.index_of(triangle.v1)?,
                    local.index_of(triangle.v2)?,
                    local.index_of(triangle.v3)?,
                ));
            }
            Ok(MeshPartition {
                material_index,
                mesh: Mesh::from_parts(local.into_vertices(), rewritten),
            })
        })
        .collect()
}

/// First-seen renumbering of source vertices
struct LocalVertices<'a> {
    source: &'a [Vertex],
    lookup: HashMap<usize, usize>,
    vertices: Vec<Vertex>,
}

impl<'a> LocalVertices<'a> {
    fn new(source: &'a [Vertex]) -> Self {
        Self {
            source,
            lookup: HashMap::new(),
            vertices: Vec::new(),
        }
    }

    fn index_of(&mut self, original: usize) -> Result<usize> {
        if let Some(&local) = self.lookup.get(&original) {
            return Ok(local);
        }
        let vertex = self.source.get(original).ok_or_else(|| {
            Error::InvalidInput(format!(
                "Triangle references vertex {} but the mesh has {} vertices",
                original,
                self.source.len()
            ))
        })?;
        let local = self.vertices.len();
        self.vertices.push(*vertex);
        self.lookup.insert(original, local);
        Ok(local)
    }

    fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two quads sharing an edge, four triangles
    fn strip() -> Mesh {
        Mesh::from_parts(
            vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
                Vertex::new(2.0, 0.0, 0.0),
                Vertex::new(2.0, 1.0, 0.0),
            ],
            vec![
                Triangle::new(0, 1, 2),
                Triangle::new(0, 2, 3),
                Triangle::new(1, 4, 5),
                Triangle::new(1, 5, 2),
            ],
        )
    }

    #[test]
    fn test_single_material_keeps_topology() {
        let mesh = strip();
        let parts = partition_mesh(&mesh, &[0, 0, 0, 0]).unwrap();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].material_index, 0);
        assert_eq!(parts[0].mesh.vertices.len(), 6);
        // First-use order: 0 1 2 3 4 5 happens to be the source order here
        assert_eq!(parts[0].mesh.triangles, mesh.triangles);
    }

    #[test]
    fn test_split_by_material_renumbers_locally() {
        let mesh = strip();
        let parts = partition_mesh(&mesh, &[3, 3, 1, 1]).unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].material_index, 3);
        assert_eq!(parts[1].material_index, 1);

        assert_eq!(parts[0].mesh.vertices.len(), 4);
        assert_eq!(
            parts[0].mesh.triangles,
            vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)]
        );

        // Source vertices 1, 4, 5, 2 become 0, 1, 2, 3
        assert_eq!(
            parts[1].mesh.vertices,
            vec![
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(2.0, 0.0, 0.0),
                Vertex::new(2.0, 1.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
            ]
        );
        assert_eq!(
            parts[1].mesh.triangles,
            vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)]
        );
    }

    #[test]
    fn test_interleaved_materials_follow_first_triangle() {
        let mesh = strip();
        let parts = partition_mesh(&mesh, &[5, 2, 5, 2]).unwrap();

        let order: Vec<usize> = parts.iter().map(|p| p.material_index).collect();
        assert_eq!(order, vec![5, 2]);
        assert_eq!(parts[0].mesh.triangles.len(), 2);
        assert_eq!(parts[1].mesh.triangles.len(), 2);
    }

    #[test]
    fn test_empty_mesh_has_no_partitions() {
        let parts = partition_mesh(&Mesh::new(), &[]).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn test_assignment_length_mismatch() {
        let err = partition_mesh(&strip(), &[0, 0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_dangling_vertex_reference() {
        let mesh = Mesh::from_parts(
            vec![Vertex::new(0.0, 0.0, 0.0); 3],
            vec![Triangle::new(0, 1, 9)],
        );
        let err = partition_mesh(&mesh, &[0]).unwrap_err();
        assert!(err.to_string().contains("vertex 9"));
    }
}
