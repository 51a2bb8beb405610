use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::ShaderStage;

/// Reads a shader source file verbatim.
///
/// Blank files are rejected; an empty module would only fail later, inside
/// pipeline creation, with a far less useful message.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shader source {}", path.display()))?;

    anyhow::ensure!(
        !text.trim().is_empty(),
        "shader source {} is empty",
        path.display()
    );

    log::debug!("loaded shader source {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// Raw shader text tagged with the stage it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    /// Debug label; the file path when loaded from disk.
    pub label: String,
    pub stage: ShaderStage,
    pub text: String,
}

impl ShaderSource {
    pub fn new(label: impl Into<String>, stage: ShaderStage, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            stage,
            text: text.into(),
        }
    }

    pub fn load(path: impl AsRef<Path>, stage: ShaderStage) -> Result<Self> {
        let path = path.as_ref();
        let text = load_text(path)?;
        Ok(Self::new(path.display().to_string(), stage, text))
    }
}

/// The vertex + fragment pair a render pipeline is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSet {
    pub vertex: ShaderSource,
    pub fragment: ShaderSource,
}

impl ShaderSet {
    /// Loads both stages, vertex first.
    pub fn load(vertex_path: impl Into<PathBuf>, fragment_path: impl Into<PathBuf>) -> Result<Self> {
        let vertex = ShaderSource::load(vertex_path.into(), ShaderStage::Vertex)?;
        let fragment = ShaderSource::load(fragment_path.into(), ShaderStage::Fragment)?;
        Ok(Self { vertex, fragment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("idxdraw-shader-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_text_returns_contents_verbatim() {
        let src = "@vertex\nfn main() {}\n";
        let path = temp_file("verbatim.wgsl", src);
        assert_eq!(load_text(&path).unwrap(), src);
    }

    #[test]
    fn load_text_missing_file_names_path() {
        let err = load_text("/definitely/not/here.wgsl").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.wgsl"));
    }

    #[test]
    fn load_text_rejects_blank_source() {
        let path = temp_file("blank.wgsl", "  \n\t\n");
        let err = load_text(&path).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn shader_set_tags_stages() {
        let vert = temp_file("set.vert.wgsl", "// vertex");
        let frag = temp_file("set.frag.wgsl", "// fragment");

        let set = ShaderSet::load(&vert, &frag).unwrap();
        assert_eq!(set.vertex.stage, ShaderStage::Vertex);
        assert_eq!(set.fragment.stage, ShaderStage::Fragment);
        assert_eq!(set.vertex.text, "// vertex");
        assert_eq!(set.fragment.label, frag.display().to_string());
    }
}
