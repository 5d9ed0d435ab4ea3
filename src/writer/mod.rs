//! XML writing for 3MF model files
//!
//! Serializes the material registry and the partitioned objects into the
//! `3D/3dmodel.model` document. Output is fully deterministic: element order
//! follows resource id order and all numbers use fixed formatting.

mod core;
mod material;

use crate::encoder::MaterialRegistry;
use crate::error::{Error, Result};
use crate::model::PartitionedObject;
use crate::opc::{CORE_NAMESPACE, MODEL_UNIT};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::io::Write as IoWrite;

/// Resource id of the single base material group
pub(crate) const BASE_MATERIALS_ID: u32 = 1;

/// Write the model document
///
/// Layout: `<resources>` (base materials, then objects), then the flat
/// `<components>` list, then `<build>`. Every object is referenced exactly
/// once by a component and once by a build item.
pub fn write_model_xml<W: IoWrite>(
    registry: &MaterialRegistry,
    objects: &[PartitionedObject],
    writer: W,
) -> Result<()> {
    let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);

    xml_writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| Error::xml_write(format!("Failed to write XML declaration: {}", e)))?;

    let mut model_elem = BytesStart::new("model");
    model_elem.push_attribute(("unit", MODEL_UNIT));
    model_elem.push_attribute(("xmlns", CORE_NAMESPACE));

    xml_writer
        .write_event(Event::Start(model_elem))
        .map_err(|e| Error::xml_write(format!("Failed to write model element: {}", e)))?;

    write_resources(&mut xml_writer, registry, objects)?;
    core::write_components(&mut xml_writer, objects)?;
    core::write_build(&mut xml_writer, objects)?;

    xml_writer
        .write_event(Event::End(BytesEnd::new("model")))
        .map_err(|e| Error::xml_write(format!("Failed to close model element: {}", e)))?;

    Ok(())
}

/// Write resources section
fn write_resources<W: IoWrite>(
    writer: &mut Writer<W>,
    registry: &MaterialRegistry,
    objects: &[PartitionedObject],
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("resources")))
        .map_err(|e| Error::xml_write(format!("Failed to write resources element: {}", e)))?;

    material::write_base_materials(writer, registry)?;

    for object in objects {
        core::write_object(writer, object)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("resources")))
        .map_err(|e| Error::xml_write(format!("Failed to close resources element: {}", e)))?;

    Ok(())
}
