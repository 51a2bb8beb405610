//! Shader source loading and compilation.
//!
//! Sources are WGSL text files read at startup and compiled by the device into
//! one module per pipeline stage.

mod compile;
mod loader;

pub use compile::{compile, CompiledShader, ENTRY_POINT};
pub use loader::{load_text, ShaderSet, ShaderSource};

/// Pipeline stage a shader module is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
