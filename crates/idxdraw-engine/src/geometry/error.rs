use std::fmt;

/// Rejected geometry. Drawing it would read outside the vertex buffer or
/// leave a dangling partial triangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// No vertices or no indices.
    Empty,
    /// Triangle lists consume indices in groups of three.
    IndexCountNotMultipleOfThree { len: usize },
    /// `indices[position]` points past the last vertex.
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
    /// More vertices than a `u32` index can address.
    TooManyVertices { vertex_count: usize },
    /// More indices than a single `draw_indexed` range can cover.
    TooManyIndices { index_count: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Empty => write!(f, "geometry has no vertices or no indices"),
            GeometryError::IndexCountNotMultipleOfThree { len } => {
                write!(f, "index count {len} is not a multiple of 3")
            }
            GeometryError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            } => write!(
                f,
                "index {index} at position {position} is out of range for {vertex_count} vertices"
            ),
            GeometryError::TooManyVertices { vertex_count } => {
                write!(f, "{vertex_count} vertices cannot be addressed by 32-bit indices")
            }
            GeometryError::TooManyIndices { index_count } => {
                write!(f, "{index_count} indices exceed a 32-bit draw range")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
