//! XML parsing for 3MF model files
//!
//! Only the geometry of core-namespace `<object>` elements is read. Element
//! names are matched by resolved namespace, not by prefix, so documents that
//! bind the core namespace to a prefix parse the same as those that use it
//! as the default namespace. Elements from any other namespace are skipped
//! together with their content.

mod core;

use crate::error::{Error, Result};
use crate::model::Mesh;
use crate::opc::CORE_NAMESPACE;
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use tracing::{debug, warn};

pub use core::{parse_triangle, parse_vertex};

/// An `<object>` element as found in the model document
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedObject {
    /// 0-based position among all `<object>` elements, meshless ones included
    pub index: usize,
    /// Raw `id` attribute
    pub id: Option<String>,
    /// Raw `name` attribute
    pub name: Option<String>,
    /// Geometry of the first `<mesh>` child, if there is one
    pub mesh: Option<Mesh>,
}

/// Geometry content of a model document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDocument {
    /// Objects in document order
    pub objects: Vec<ParsedObject>,
}

impl ModelDocument {
    /// Objects that carry a mesh
    pub fn mesh_objects(&self) -> impl Iterator<Item = &ParsedObject> {
        self.objects.iter().filter(|o| o.mesh.is_some())
    }
}

/// Role of an open element, as far as geometry extraction cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Object,
    Mesh,
    Vertices,
    Triangles,
    Other,
}

/// Parse the 3D model XML content
pub fn parse_model_xml(xml: &str) -> Result<ModelDocument> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document = ModelDocument::default();
    let mut stack: Vec<(Frame, String)> = Vec::new();
    let mut current: Option<ParsedObject> = None;
    let mut object_count = 0usize;
    let mut seen_root = false;

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        let is_core = matches!(
            resolved,
            ResolveResult::Bound(Namespace(ns)) if ns == CORE_NAMESPACE.as_bytes()
        );

        match event {
            // DTD declarations can lead to XXE (XML External Entity) attacks
            Event::DocType(_) => {
                return Err(Error::InvalidXml(
                    "DTD declarations are not allowed in 3MF files for security reasons"
                        .to_string(),
                ));
            }
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let raw_name = std::str::from_utf8(e.name().as_ref())
                    .map_err(|e| Error::InvalidXml(e.to_string()))?
                    .to_string();
                let local = e.local_name();
                let local_name = if is_core { local.as_ref() } else { b"" as &[u8] };

                if !seen_root {
                    seen_root = true;
                    if local_name != b"model" {
                        warn!(root = %raw_name, "Root element is not a 3MF core <model>");
                    }
                }

                let parent = stack.last().map(|(frame, _)| *frame);
                let frame = match (local_name, parent) {
                    (b"object", Some(Frame::Object)) => Frame::Other,
                    (b"object", _) => {
                        current = Some(core::parse_object(e, object_count)?);
                        object_count += 1;
                        Frame::Object
                    }
                    (b"mesh", Some(Frame::Object)) => match current.as_mut() {
                        Some(object) if object.mesh.is_none() => {
                            object.mesh = Some(Mesh::new());
                            Frame::Mesh
                        }
                        _ => Frame::Other,
                    },
                    (b"vertices", Some(Frame::Mesh)) => Frame::Vertices,
                    (b"triangles", Some(Frame::Mesh)) => Frame::Triangles,
                    (b"vertex", Some(Frame::Vertices)) => {
                        if let Some(mesh) = current_mesh(&mut current) {
                            mesh.vertices.push(parse_vertex(e)?);
                        }
                        Frame::Other
                    }
                    (b"triangle", Some(Frame::Triangles)) => {
                        if let Some(mesh) = current_mesh(&mut current) {
                            mesh.triangles.push(parse_triangle(e)?);
                        }
                        Frame::Other
                    }
                    _ => Frame::Other,
                };

                if is_empty {
                    if frame == Frame::Object {
                        finish_object(&mut document, &mut current);
                    }
                } else {
                    stack.push((frame, raw_name));
                }
            }
            Event::End(_) => {
                if let Some((Frame::Object, _)) = stack.pop() {
                    finish_object(&mut document, &mut current);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some((_, name)) = stack.last() {
        return Err(Error::InvalidXml(format!(
            "Unexpected end of document: element <{}> is never closed",
            name
        )));
    }
    if !seen_root {
        return Err(Error::InvalidXml(
            "Model document contains no root element".to_string(),
        ));
    }

    Ok(document)
}

fn current_mesh(current: &mut Option<ParsedObject>) -> Option<&mut Mesh> {
    current.as_mut().and_then(|object| object.mesh.as_mut())
}

fn finish_object(document: &mut ModelDocument, current: &mut Option<ParsedObject>) {
    if let Some(object) = current.take() {
        debug!(
            index = object.index,
            id = ?object.id,
            vertices = object.mesh.as_ref().map_or(0, |m| m.vertices.len()),
            triangles = object.mesh.as_ref().map_or(0, |m| m.triangles.len()),
            "Parsed object"
        );
        document.objects.push(object);
    }
}
