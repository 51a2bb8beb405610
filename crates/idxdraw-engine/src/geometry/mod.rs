//! CPU-side geometry: vertex format, the sample triangles and their index list.
//!
//! Positions are already in clip space (`w = 1`), so the vertex shader passes
//! them through unchanged.

mod error;
mod mesh;
mod vertex;

pub use error::GeometryError;
pub use mesh::{IndexedGeometry, SAMPLE_INDICES, SAMPLE_VERTICES};
pub use vertex::{Vertex, POSITION_LOCATION};
