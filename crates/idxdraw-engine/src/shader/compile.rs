use anyhow::Result;

use super::{ShaderSource, ShaderStage};

/// Entry point name shared by both stages.
pub const ENTRY_POINT: &str = "main";

/// A device shader module plus the stage it was compiled for.
#[derive(Debug)]
pub struct CompiledShader {
    pub module: wgpu::ShaderModule,
    pub stage: ShaderStage,
    pub entry_point: &'static str,
}

/// Compiles WGSL text into a shader module for `source.stage`.
///
/// Compilation is synchronous from the caller's view. Validation errors are
/// captured in an error scope instead of reaching the device's uncaptured-error
/// handler; the compilation report supplies the per-line detail.
pub fn compile(device: &wgpu::Device, source: &ShaderSource) -> Result<CompiledShader> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(source.label.as_str()),
        source: wgpu::ShaderSource::Wgsl(source.text.as_str().into()),
    });
    let info = pollster::block_on(module.get_compilation_info());
    let scope_error = pollster::block_on(error_scope.pop());

    for msg in &info.messages {
        if msg.message_type == wgpu::CompilationMessageType::Warning {
            log::warn!("{} shader {}: {}", source.stage, source.label, msg.message);
        }
    }

    if let Some(report) = error_report(&info.messages) {
        anyhow::bail!(
            "failed to compile {} shader {}:\n{report}",
            source.stage,
            source.label
        );
    }

    if let Some(err) = scope_error {
        anyhow::bail!(
            "failed to compile {} shader {}: {err}",
            source.stage,
            source.label
        );
    }

    log::info!("compiled {} shader {}", source.stage, source.label);

    Ok(CompiledShader {
        module,
        stage: source.stage,
        entry_point: ENTRY_POINT,
    })
}

/// Joins every error message into one report, `None` when there are none.
fn error_report(messages: &[wgpu::CompilationMessage]) -> Option<String> {
    let lines: Vec<String> = messages
        .iter()
        .filter(|m| m.message_type == wgpu::CompilationMessageType::Error)
        .map(|m| match &m.location {
            Some(loc) => format!("  {}:{}: {}", loc.line_number, loc.line_position, m.message),
            None => format!("  {}", m.message),
        })
        .collect();

    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SHADERS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../idxdraw-sample/shaders");

    fn device() -> wgpu::Device {
        let (device, _queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        device
    }

    fn msg(kind: wgpu::CompilationMessageType, text: &str) -> wgpu::CompilationMessage {
        wgpu::CompilationMessage {
            message: text.to_string(),
            message_type: kind,
            location: None,
        }
    }

    #[test]
    fn no_messages_no_report() {
        assert_eq!(error_report(&[]), None);
    }

    #[test]
    fn warnings_alone_are_not_errors() {
        let messages = [msg(wgpu::CompilationMessageType::Warning, "unused variable")];
        assert_eq!(error_report(&messages), None);
    }

    #[test]
    fn errors_are_collected_in_order() {
        let messages = [
            msg(wgpu::CompilationMessageType::Error, "first"),
            msg(wgpu::CompilationMessageType::Info, "note"),
            msg(wgpu::CompilationMessageType::Error, "second"),
        ];
        assert_eq!(error_report(&messages).as_deref(), Some("  first\n  second"));
    }

    #[test]
    fn error_location_is_reported() {
        let mut m = msg(wgpu::CompilationMessageType::Error, "expected `;`");
        m.location = Some(wgpu::SourceLocation {
            line_number: 3,
            line_position: 14,
            offset: 40,
            length: 1,
        });
        assert_eq!(error_report(&[m]).as_deref(), Some("  3:14: expected `;`"));
    }

    // ── device compilation ────────────────────────────────────────────────

    #[test]
    fn compiles_sample_shaders() {
        let device = device();
        for (file, stage) in [
            ("triangles.vert.wgsl", ShaderStage::Vertex),
            ("triangles.frag.wgsl", ShaderStage::Fragment),
        ] {
            let source = ShaderSource::load(format!("{SAMPLE_SHADERS}/{file}"), stage).unwrap();
            let compiled = compile(&device, &source).unwrap();
            assert_eq!(compiled.stage, stage);
            assert_eq!(compiled.entry_point, ENTRY_POINT);
        }
    }

    #[test]
    fn invalid_wgsl_is_an_error_not_a_panic() {
        let device = device();
        let source = ShaderSource::new("bad.wgsl", ShaderStage::Vertex, "@vertex fn main( -> {");

        let err = compile(&device, &source).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("vertex shader bad.wgsl"), "{msg}");
    }

    #[test]
    fn device_stays_usable_after_failed_compile() {
        let device = device();
        let bad = ShaderSource::new("bad.wgsl", ShaderStage::Fragment, "fn {");
        assert!(compile(&device, &bad).is_err());

        let good = ShaderSource::new(
            "good.wgsl",
            ShaderStage::Fragment,
            "@fragment fn main() -> @location(0) vec4<f32> { return vec4<f32>(1.0); }",
        );
        assert!(compile(&device, &good).is_ok());
    }
}
