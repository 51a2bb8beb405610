//! Window + frame loop.
//!
//! Owns the `winit` EventLoop and Window, and drives one `RendererSession`
//! frame per display refresh until the run flag is cleared.

mod run_flag;
mod runtime;

pub use run_flag::RunFlag;
pub use runtime::{Runtime, RuntimeConfig};
