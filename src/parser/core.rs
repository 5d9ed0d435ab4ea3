//! Core element parsing
//!
//! Attribute handling follows the lenient read path: a missing coordinate
//! or index reads as zero, but a value that is present must parse.

use crate::error::{Error, Result};
use crate::model::{Triangle, Vertex};
use std::borrow::Cow;

use quick_xml::events::BytesStart;
use quick_xml::events::attributes::Attribute;

use super::ParsedObject;

/// Parse object element attributes
pub(super) fn parse_object(e: &BytesStart, index: usize) -> Result<ParsedObject> {
    let mut id = None;
    let mut name = None;

    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"id" => id = Some(attr_value(&attr)?.into_owned()),
            b"name" => name = Some(attr_value(&attr)?.into_owned()),
            _ => {}
        }
    }

    Ok(ParsedObject {
        index,
        id,
        name,
        mesh: None,
    })
}

/// Parse vertex element attributes
pub fn parse_vertex(e: &BytesStart) -> Result<Vertex> {
    let mut vertex = Vertex::new(0.0, 0.0, 0.0);

    for attr in e.attributes() {
        let attr = attr?;
        let (slot, field) = match attr.key.as_ref() {
            b"x" => (&mut vertex.x, "vertex x coordinate"),
            b"y" => (&mut vertex.y, "vertex y coordinate"),
            b"z" => (&mut vertex.z, "vertex z coordinate"),
            _ => continue,
        };
        let value = attr_value(&attr)?;
        *slot = value
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::parse_error_with_context(field, &value, "floating-point number"))?;
    }

    Ok(vertex)
}

/// Parse triangle element attributes
///
/// Indices are not checked against the vertex count here.
pub fn parse_triangle(e: &BytesStart) -> Result<Triangle> {
    let mut triangle = Triangle::new(0, 0, 0);

    for attr in e.attributes() {
        let attr = attr?;
        let (slot, field) = match attr.key.as_ref() {
            b"v1" => (&mut triangle.v1, "triangle v1 index"),
            b"v2" => (&mut triangle.v2, "triangle v2 index"),
            b"v3" => (&mut triangle.v3, "triangle v3 index"),
            _ => continue,
        };
        let value = attr_value(&attr)?;
        *slot = value
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::parse_error_with_context(field, &value, "non-negative integer"))?;
    }

    Ok(triangle)
}

/// Attribute value with entity and character references resolved
fn attr_value<'a>(attr: &Attribute<'a>) -> Result<Cow<'a, str>> {
    attr.unescape_value()
        .map_err(|e| Error::XmlAttr(format!("Invalid attribute value: {}", e)))
}
