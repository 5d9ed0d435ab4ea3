//! Material and color types

/// An RGBA color with components nominally in `[0, 1]`
///
/// Values outside that range are allowed here and clamped when the color is
/// written out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Rgba {
    /// Opaque white, the color of the default material
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Components in RGBA order
    pub fn channels(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f64; 4]> for Rgba {
    fn from(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// Where a material's base color comes from
///
/// Hosts resolve this once per material before export. A node-graph base
/// color wins over the flat diffuse attribute; with neither the material is
/// opaque white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSource {
    /// Base color input of a shader node graph
    ShaderGraph(Rgba),
    /// Flat diffuse color attribute
    FlatDiffuse(Rgba),
    /// No usable color information
    DefaultWhite,
}

impl ColorSource {
    /// Pick the color source from whatever the host could read
    pub fn from_candidates(shader_graph: Option<Rgba>, flat_diffuse: Option<Rgba>) -> Self {
        match (shader_graph, flat_diffuse) {
            (Some(color), _) => ColorSource::ShaderGraph(color),
            (None, Some(color)) => ColorSource::FlatDiffuse(color),
            (None, None) => ColorSource::DefaultWhite,
        }
    }

    /// The base color this source yields
    pub fn resolve(&self) -> Rgba {
        match *self {
            ColorSource::ShaderGraph(color) | ColorSource::FlatDiffuse(color) => color,
            ColorSource::DefaultWhite => Rgba::WHITE,
        }
    }
}

/// A named material
///
/// The name is the identity key during one export: two materials with the
/// same name are the same material, whatever their colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name
    pub name: String,
    /// Base color source
    pub color: ColorSource,
}

impl Material {
    /// Create a material with a flat diffuse color
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self::with_source(name, ColorSource::FlatDiffuse(color))
    }

    /// Create a material with an explicit color source
    pub fn with_source(name: impl Into<String>, color: ColorSource) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Resolved base color
    pub fn base_color(&self) -> Rgba {
        self.color.resolve()
    }
}
