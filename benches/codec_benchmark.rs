use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Cursor;
use threemf_codec::{
    Material, Mesh, Rgba, SceneObject, Triangle, Vertex, export_to_vec, import_from_reader,
};

/// Generate a flat `side` x `side` vertex grid, two triangles per cell
///
/// Rows alternate between two materials so every export produces two parts.
fn generate_grid(side: usize) -> SceneObject {
    let mut vertices = Vec::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            vertices.push(Vertex::new(x as f64, y as f64, 0.0));
        }
    }

    let mut triangles = Vec::new();
    let mut materials = Vec::new();
    for y in 0..side - 1 {
        for x in 0..side - 1 {
            let i = y * side + x;
            triangles.push(Triangle::new(i, i + 1, i + side));
            triangles.push(Triangle::new(i + 1, i + side + 1, i + side));
            materials.push(y % 2);
            materials.push(y % 2);
        }
    }

    let mesh = Mesh::from_parts(vertices, triangles).with_material_indices(materials);
    SceneObject::new("Grid", mesh)
        .with_material(Material::new("Red", Rgba::rgb(1.0, 0.0, 0.0)))
        .with_material(Material::new("Blue", Rgba::rgb(0.0, 0.0, 1.0)))
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for side in [10, 100, 300] {
        let scene = vec![generate_grid(side)];
        group.throughput(Throughput::Elements((2 * (side - 1) * (side - 1)) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &scene, |b, scene| {
            b.iter(|| export_to_vec(black_box(scene)).unwrap());
        });
    }

    group.finish();
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");

    for side in [10, 100, 300] {
        let bytes = export_to_vec(&[generate_grid(side)]).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &bytes, |b, bytes| {
            b.iter(|| import_from_reader(Cursor::new(black_box(bytes.as_slice()))).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_export, bench_import);
criterion_main!(benches);
