//! Material registry and color conversion

use std::collections::HashMap;

use crate::model::{Material, Rgba};

/// Base material name used for triangles without a material
pub const DEFAULT_MATERIAL_NAME: &str = "DefaultWhite";

/// A material as it will appear in the `<basematerials>` group
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredMaterial {
    /// Name written to `<base name=...>`
    pub name: String,
    /// Resolved base color
    pub color: Rgba,
}

impl RegisteredMaterial {
    /// `#RRGGBBAA` form of the base color
    pub fn display_color(&self) -> String {
        color_to_hex(self.color)
    }
}

/// Append-only list of the materials used by one export
///
/// Materials are keyed by name. The missing material is its own key, so a
/// user material that happens to be called `DefaultWhite` still gets a
/// separate entry.
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    materials: Vec<RegisteredMaterial>,
    by_name: HashMap<String, usize>,
    unassigned: Option<usize>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `material`, registering it on first sight
    ///
    /// `None` stands for "no material" and maps to the opaque white default.
    /// The first registration of a name fixes its color.
    pub fn register(&mut self, material: Option<&Material>) -> usize {
        match material {
            Some(material) => {
                if let Some(&index) = self.by_name.get(material.name.as_str()) {
                    return index;
                }
                let index = self.push(material.name.clone(), material.base_color());
                self.by_name.insert(material.name.clone(), index);
                index
            }
            None => match self.unassigned {
                Some(index) => index,
                None => {
                    let index = self.push(DEFAULT_MATERIAL_NAME.to_string(), Rgba::WHITE);
                    self.unassigned = Some(index);
                    index
                }
            },
        }
    }

    /// Register the default material if nothing else was registered
    ///
    /// A base material group must not be empty.
    pub fn ensure_not_empty(&mut self) {
        if self.materials.is_empty() {
            self.register(None);
        }
    }

    /// Registered material at `index`
    pub fn get(&self, index: usize) -> Option<&RegisteredMaterial> {
        self.materials.get(index)
    }

    /// All materials in index order
    pub fn materials(&self) -> &[RegisteredMaterial] {
        &self.materials
    }

    /// Number of registered materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    fn push(&mut self, name: String, color: Rgba) -> usize {
        self.materials.push(RegisteredMaterial { name, color });
        self.materials.len() - 1
    }
}

/// Convert a color to the `#RRGGBBAA` form used by `displaycolor`
///
/// Each channel is clamped to `[0, 1]` and scaled to a byte. Exact halves
/// round down, so `0.5` becomes `7F`. NaN channels count as 0.
///
/// ```
/// use threemf_codec::{Rgba, color_to_hex};
///
/// assert_eq!(color_to_hex(Rgba::new(1.0, 0.0, 0.0, 1.0)), "#FF0000FF");
/// ```
pub fn color_to_hex(color: Rgba) -> String {
    let [r, g, b, a] = color.channels().map(channel_to_byte);
    format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
}

fn channel_to_byte(value: f64) -> u8 {
    let clamped = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    (clamped * 255.0 - 0.5).ceil().clamp(0.0, 255.0) as u8
}
