use anyhow::Result;

use crate::geometry::Vertex;
use crate::shader::{CompiledShader, ShaderStage};

/// Fixed-function state of the indexed-draw pipeline.
///
/// Kept as plain data so the state can be inspected without a device.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDesc {
    /// Format of the single color target; must match the surface.
    pub color_format: wgpu::TextureFormat,
    pub topology: wgpu::PrimitiveTopology,
    pub front_face: wgpu::FrontFace,
    pub cull_mode: Option<wgpu::Face>,
}

impl PipelineDesc {
    /// Triangle list, counter-clockwise front faces, back faces culled.
    pub fn new(color_format: wgpu::TextureFormat) -> Self {
        Self {
            color_format,
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
        }
    }

    pub fn primitive(&self) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology: self.topology,
            strip_index_format: None,
            front_face: self.front_face,
            cull_mode: self.cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        }
    }

    pub fn color_target(&self) -> wgpu::ColorTargetState {
        wgpu::ColorTargetState {
            format: self.color_format,
            blend: None,
            write_mask: wgpu::ColorWrites::ALL,
        }
    }

    pub fn vertex_buffers(&self) -> [wgpu::VertexBufferLayout<'static>; 1] {
        [Vertex::layout()]
    }
}

/// Builds the immutable render pipeline from the two compiled stages.
///
/// A shader interface that disagrees with the vertex layout or color target is
/// returned as an error.
pub fn build_pipeline(
    device: &wgpu::Device,
    desc: &PipelineDesc,
    vertex: &CompiledShader,
    fragment: &CompiledShader,
) -> Result<wgpu::RenderPipeline> {
    anyhow::ensure!(
        vertex.stage == ShaderStage::Vertex,
        "vertex slot holds a {} shader",
        vertex.stage
    );
    anyhow::ensure!(
        fragment.stage == ShaderStage::Fragment,
        "fragment slot holds a {} shader",
        fragment.stage
    );

    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("idxdraw pipeline layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    let buffers = desc.vertex_buffers();
    let targets = [Some(desc.color_target())];

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("idxdraw pipeline"),
        layout: Some(&layout),

        vertex: wgpu::VertexState {
            module: &vertex.module,
            entry_point: Some(vertex.entry_point),
            compilation_options: Default::default(),
            buffers: &buffers,
        },

        fragment: Some(wgpu::FragmentState {
            module: &fragment.module,
            entry_point: Some(fragment.entry_point),
            compilation_options: Default::default(),
            targets: &targets,
        }),

        primitive: desc.primitive(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(error_scope.pop()) {
        anyhow::bail!("render pipeline rejected by the device: {err}");
    }

    log::info!(
        "render pipeline built ({:?}, cull {:?}, target {:?})",
        desc.topology,
        desc.cull_mode,
        desc.color_format
    );

    Ok(pipeline)
}
