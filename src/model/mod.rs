//! Data structures shared by the encoder and the decoder
//!
//! Everything here is a plain snapshot: the codec never talks to a live
//! scene graph, it only sees the values the host copied into these types.

mod core;
mod material;
mod resource;

pub use core::{ImportedObject, Mesh, SceneObject, Triangle, Vertex};
pub use material::{ColorSource, Material, Rgba};
pub use resource::{PartitionedObject, ResourceId};
