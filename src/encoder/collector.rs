//! Selection of exportable scene objects

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Mesh, SceneObject};

/// A scene object that passed the export checks
#[derive(Debug, Clone, Copy)]
pub struct CollectedMesh<'a> {
    /// The source scene object
    pub object: &'a SceneObject,
    /// Its geometry
    pub mesh: &'a Mesh,
}

/// Keep the mesh objects of `objects`, in order
///
/// Objects without geometry are dropped. Fails when nothing is left, when a
/// mesh's material list does not have one entry per triangle, or when a
/// vertex coordinate is not finite.
pub fn collect_mesh_objects(objects: &[SceneObject]) -> Result<Vec<CollectedMesh<'_>>> {
    let mut collected = Vec::with_capacity(objects.len());

    for object in objects {
        let Some(mesh) = object.mesh.as_ref() else {
            debug!(object = %object.name, "Skipping scene object without mesh data");
            continue;
        };
        check_mesh(&object.name, mesh)?;
        collected.push(CollectedMesh { object, mesh });
    }

    if collected.is_empty() {
        return Err(Error::InvalidInput(
            "No mesh objects selected for export. Select at least one mesh object.".to_string(),
        ));
    }

    Ok(collected)
}

fn check_mesh(name: &str, mesh: &Mesh) -> Result<()> {
    if let Some(ref indices) = mesh.material_indices
        && indices.len() != mesh.triangles.len()
    {
        return Err(Error::InvalidInput(format!(
            "Object '{}' has {} material indices for {} triangles",
            name,
            indices.len(),
            mesh.triangles.len()
        )));
    }

    if let Some(position) = mesh
        .vertices
        .iter()
        .position(|v| !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()))
    {
        return Err(Error::InvalidInput(format!(
            "Object '{}' has a non-finite coordinate at vertex {}",
            name, position
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use crate::model::{Triangle, Vertex};

    fn triangle_mesh() -> Mesh {
        Mesh::from_parts(
            vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
            ],
            vec![Triangle::new(0, 1, 2)],
        )
    }

    #[test]
    fn test_skips_non_mesh_objects() {
        let objects = vec![
            SceneObject::empty("Camera"),
            SceneObject::new("Tri", triangle_mesh()),
            SceneObject::empty("Light"),
        ];
        let collected = collect_mesh_objects(&objects).unwrap();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].object.name, "Tri");
    }

    #[test]
    fn test_empty_selection_is_input_error() {
        let err = collect_mesh_objects(&[]).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Input);

        let err = collect_mesh_objects(&[SceneObject::empty("Camera")]).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_material_index_count_must_match() {
        let mesh = triangle_mesh().with_material_indices(vec![0, 0]);
        let err = collect_mesh_objects(&[SceneObject::new("Tri", mesh)]).unwrap_err();
        assert!(err.to_string().contains("2 material indices for 1 triangles"));
    }

    #[test]
    fn test_rejects_non_finite_coordinates() {
        let mut mesh = triangle_mesh();
        mesh.vertices[2].z = f64::INFINITY;
        let err = collect_mesh_objects(&[SceneObject::new("Tri", mesh)]).unwrap_err();
        assert!(err.to_string().contains("vertex 2"));
    }
}
