//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::io::{Cursor, Write};
use threemf_codec::{Material, Mesh, Rgba, SceneObject, Triangle, Vertex};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Unit cube, 8 vertices and 12 triangles, all vertices referenced
pub fn cube(size: f64) -> Mesh {
    let s = size;
    let vertices = vec![
        Vertex::new(0.0, 0.0, 0.0),
        Vertex::new(s, 0.0, 0.0),
        Vertex::new(s, s, 0.0),
        Vertex::new(0.0, s, 0.0),
        Vertex::new(0.0, 0.0, s),
        Vertex::new(s, 0.0, s),
        Vertex::new(s, s, s),
        Vertex::new(0.0, s, s),
    ];
    let triangles = vec![
        Triangle::new(0, 2, 1),
        Triangle::new(0, 3, 2),
        Triangle::new(4, 5, 6),
        Triangle::new(4, 6, 7),
        Triangle::new(0, 1, 5),
        Triangle::new(0, 5, 4),
        Triangle::new(1, 2, 6),
        Triangle::new(1, 6, 5),
        Triangle::new(2, 3, 7),
        Triangle::new(2, 7, 6),
        Triangle::new(3, 0, 4),
        Triangle::new(3, 4, 7),
    ];
    Mesh::from_parts(vertices, triangles)
}

/// Cube whose bottom and top faces are red, the sides blue
pub fn two_tone_cube() -> SceneObject {
    let mesh = cube(10.0).with_material_indices(vec![0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1]);
    SceneObject::new("Cube", mesh)
        .with_material(Material::new("Red", Rgba::rgb(1.0, 0.0, 0.0)))
        .with_material(Material::new("Blue", Rgba::new(0.0, 0.0, 1.0, 0.5)))
}

/// Build a ZIP archive from `(name, content)` pairs
pub fn zip_with(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Triangles expressed as vertex positions, sorted, for topology comparison
pub fn triangle_positions(mesh: &Mesh) -> Vec<[[u64; 3]; 3]> {
    let key = |i: usize| {
        let v = mesh.vertices[i];
        [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
    };
    let mut triangles: Vec<[[u64; 3]; 3]> = mesh
        .triangles
        .iter()
        .map(|t| [key(t.v1), key(t.v2), key(t.v3)])
        .collect();
    triangles.sort();
    triangles
}
