//! Base material group writing

use crate::encoder::MaterialRegistry;
use crate::error::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::io::Write as IoWrite;

use super::BASE_MATERIALS_ID;

/// Write the base material group holding every registered material
pub(super) fn write_base_materials<W: IoWrite>(
    writer: &mut Writer<W>,
    registry: &MaterialRegistry,
) -> Result<()> {
    let mut elem = BytesStart::new("basematerials");
    elem.push_attribute(("id", BASE_MATERIALS_ID.to_string().as_str()));

    writer
        .write_event(Event::Start(elem))
        .map_err(|e| Error::xml_write(format!("Failed to write basematerials element: {}", e)))?;

    for material in registry.materials() {
        let mut mat_elem = BytesStart::new("base");
        mat_elem.push_attribute(("name", material.name.as_str()));
        mat_elem.push_attribute(("displaycolor", material.display_color().as_str()));

        writer
            .write_event(Event::Empty(mat_elem))
            .map_err(|e| Error::xml_write(format!("Failed to write base material: {}", e)))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("basematerials")))
        .map_err(|e| Error::xml_write(format!("Failed to close basematerials element: {}", e)))?;

    Ok(())
}
