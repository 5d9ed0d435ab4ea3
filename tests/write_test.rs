//! Tests for 3MF export

mod common;

use common::{cube, two_tone_cube};
use std::io::{Cursor, Read};
use threemf_codec::{ErrorCategory, Material, Rgba, SceneObject, export_to_file, export_to_vec};
use zip::ZipArchive;

fn model_xml(archive: &[u8]) -> String {
    let mut zip = ZipArchive::new(Cursor::new(archive)).unwrap();
    let mut xml = String::new();
    zip.by_name("3D/3dmodel.model")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn test_archive_has_exactly_three_parts() {
    let bytes = export_to_vec(&[SceneObject::new("Cube", cube(1.0))]).unwrap();
    let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();

    let mut names: Vec<String> = zip.file_names().map(String::from).collect();
    names.sort();
    assert_eq!(
        names,
        vec!["3D/3dmodel.model", "[Content_Types].xml", "_rels/.rels"]
    );

    for i in 0..zip.len() {
        let entry = zip.by_index(i).unwrap();
        assert_eq!(entry.compression(), zip::CompressionMethod::Deflated);
    }
}

#[test]
fn test_export_is_deterministic() {
    let scene = vec![two_tone_cube(), SceneObject::new("Plain", cube(2.5))];
    let first = export_to_vec(&scene).unwrap();
    let second = export_to_vec(&scene).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_vertex_formatting() {
    let xml = model_xml(&export_to_vec(&[SceneObject::new("Cube", cube(1.0))]).unwrap());

    assert!(xml.contains("<vertex x=\"1.000000\" y=\"0.000000\" z=\"0.000000\"/>"));
    assert!(!xml.contains("x=\"1.0\""));
    assert!(!xml.contains("e+"));
}

#[test]
fn test_material_partitions() {
    let xml = model_xml(&export_to_vec(&[two_tone_cube()]).unwrap());

    assert!(xml.contains("<basematerials id=\"1\">"));
    assert!(xml.contains("<base name=\"Red\" displaycolor=\"#FF0000FF\"/>"));
    assert!(xml.contains("<base name=\"Blue\" displaycolor=\"#0000FF7F\"/>"));
    assert!(!xml.contains("DefaultWhite"));

    assert!(xml.contains(
        "<object id=\"1\" type=\"model\" name=\"Cube_Red\" pid=\"1\" pindex=\"0\">"
    ));
    assert!(xml.contains(
        "<object id=\"2\" type=\"model\" name=\"Cube_Blue\" pid=\"1\" pindex=\"1\">"
    ));
    assert_eq!(xml.matches("<component ").count(), 2);
    assert!(xml.contains("<item objectid=\"1\" componentid=\"1\"/>"));
    assert!(xml.contains("<item objectid=\"2\" componentid=\"2\"/>"));

    // Red covers bottom and top: all 8 corners. Blue covers the 8 side triangles.
    assert_eq!(xml.matches("<vertex ").count(), 16);
    assert_eq!(xml.matches("<triangle ").count(), 12);
}

#[test]
fn test_materials_shared_across_objects() {
    let red = Material::new("Red", Rgba::rgb(1.0, 0.0, 0.0));
    let first = SceneObject::new("A", cube(1.0).with_material_indices(vec![0; 12]))
        .with_material(red.clone());
    let second = SceneObject::new("B", cube(1.0).with_material_indices(vec![0; 12]))
        .with_material(red);

    let xml = model_xml(&export_to_vec(&[first, second]).unwrap());
    assert_eq!(xml.matches("<base ").count(), 1);
    assert!(xml.contains("name=\"A_Red\" pid=\"1\" pindex=\"0\""));
    assert!(xml.contains("<object id=\"2\" type=\"model\" name=\"B_Red\" pid=\"1\" pindex=\"0\">"));
}

#[test]
fn test_empty_selection_is_input_error() {
    let err = export_to_vec(&[]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Input);

    let err = export_to_vec(&[SceneObject::empty("Camera")]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Input);
}

#[test]
fn test_empty_selection_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nothing.3mf");

    let err = export_to_file(&[SceneObject::empty("Light")], &path).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Input);
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_to_file_replaces_destination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.3mf");
    std::fs::write(&path, b"old contents").unwrap();

    export_to_file(&[SceneObject::new("Cube", cube(1.0))], &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, export_to_vec(&[SceneObject::new("Cube", cube(1.0))]).unwrap());
    // Only the destination is left behind
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_failed_export_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.3mf");
    std::fs::write(&path, b"old contents").unwrap();

    assert!(export_to_file(&[], &path).is_err());
    assert_eq!(std::fs::read(&path).unwrap(), b"old contents");
}

#[test]
fn test_export_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("cube.3mf");

    let err = export_to_file(&[SceneObject::new("Cube", cube(1.0))], &path).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);
    assert!(!path.exists());
}
