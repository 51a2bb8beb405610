//! Indexed-draw engine crate.
//!
//! Owns the GPU, window and frame-loop pieces behind the indexed triangle sample.

pub mod device;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;
