//! Object, component and build item writing

use crate::error::{Error, Result};
use crate::model::{Mesh, PartitionedObject};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::io::Write as IoWrite;

use super::BASE_MATERIALS_ID;

/// Identity transform, row-major 3x4 with zero translation
pub(super) const IDENTITY_TRANSFORM: &str = "1 0 0 0 1 0 0 0 1 0 0 0";

/// Write an object
pub(super) fn write_object<W: IoWrite>(
    writer: &mut Writer<W>,
    object: &PartitionedObject,
) -> Result<()> {
    let mut elem = BytesStart::new("object");
    elem.push_attribute(("id", object.id.to_string().as_str()));
    elem.push_attribute(("type", "model"));
    elem.push_attribute(("name", object.name.as_str()));
    elem.push_attribute(("pid", BASE_MATERIALS_ID.to_string().as_str()));
    elem.push_attribute(("pindex", object.material_index.to_string().as_str()));

    writer
        .write_event(Event::Start(elem))
        .map_err(|e| Error::xml_write(format!("Failed to write object element: {}", e)))?;

    write_mesh(writer, &object.mesh)?;

    writer
        .write_event(Event::End(BytesEnd::new("object")))
        .map_err(|e| Error::xml_write(format!("Failed to close object element: {}", e)))?;

    Ok(())
}

/// Write a mesh
fn write_mesh<W: IoWrite>(writer: &mut Writer<W>, mesh: &Mesh) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("mesh")))
        .map_err(|e| Error::xml_write(format!("Failed to write mesh element: {}", e)))?;

    writer
        .write_event(Event::Start(BytesStart::new("vertices")))
        .map_err(|e| Error::xml_write(format!("Failed to write vertices element: {}", e)))?;

    for vertex in &mesh.vertices {
        let mut v_elem = BytesStart::new("vertex");
        v_elem.push_attribute(("x", format_coordinate(vertex.x).as_str()));
        v_elem.push_attribute(("y", format_coordinate(vertex.y).as_str()));
        v_elem.push_attribute(("z", format_coordinate(vertex.z).as_str()));

        writer
            .write_event(Event::Empty(v_elem))
            .map_err(|e| Error::xml_write(format!("Failed to write vertex: {}", e)))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("vertices")))
        .map_err(|e| Error::xml_write(format!("Failed to close vertices element: {}", e)))?;

    writer
        .write_event(Event::Start(BytesStart::new("triangles")))
        .map_err(|e| Error::xml_write(format!("Failed to write triangles element: {}", e)))?;

    for triangle in &mesh.triangles {
        let mut t_elem = BytesStart::new("triangle");
        t_elem.push_attribute(("v1", triangle.v1.to_string().as_str()));
        t_elem.push_attribute(("v2", triangle.v2.to_string().as_str()));
        t_elem.push_attribute(("v3", triangle.v3.to_string().as_str()));

        writer
            .write_event(Event::Empty(t_elem))
            .map_err(|e| Error::xml_write(format!("Failed to write triangle: {}", e)))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("triangles")))
        .map_err(|e| Error::xml_write(format!("Failed to close triangles element: {}", e)))?;

    writer
        .write_event(Event::End(BytesEnd::new("mesh")))
        .map_err(|e| Error::xml_write(format!("Failed to close mesh element: {}", e)))?;

    Ok(())
}

/// Write the flat component list, one identity component per object
pub(super) fn write_components<W: IoWrite>(
    writer: &mut Writer<W>,
    objects: &[PartitionedObject],
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("components")))
        .map_err(|e| Error::xml_write(format!("Failed to write components element: {}", e)))?;

    for object in objects {
        let mut elem = BytesStart::new("component");
        elem.push_attribute(("objectid", object.id.to_string().as_str()));
        elem.push_attribute(("transform", IDENTITY_TRANSFORM));

        writer
            .write_event(Event::Empty(elem))
            .map_err(|e| Error::xml_write(format!("Failed to write component: {}", e)))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("components")))
        .map_err(|e| Error::xml_write(format!("Failed to close components element: {}", e)))?;

    Ok(())
}

/// Write the build section, one item per object
pub(super) fn write_build<W: IoWrite>(
    writer: &mut Writer<W>,
    objects: &[PartitionedObject],
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("build")))
        .map_err(|e| Error::xml_write(format!("Failed to write build element: {}", e)))?;

    for object in objects {
        let id = object.id.to_string();
        let mut elem = BytesStart::new("item");
        elem.push_attribute(("objectid", id.as_str()));
        elem.push_attribute(("componentid", id.as_str()));

        writer
            .write_event(Event::Empty(elem))
            .map_err(|e| Error::xml_write(format!("Failed to write build item: {}", e)))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("build")))
        .map_err(|e| Error::xml_write(format!("Failed to close build element: {}", e)))?;

    Ok(())
}

/// Six fractional digits, never scientific notation
fn format_coordinate(value: f64) -> String {
    format!("{:.6}", value)
}
