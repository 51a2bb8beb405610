use anyhow::{Context, Result};

use crate::device::Gpu;
use crate::geometry::IndexedGeometry;
use crate::shader::{self, ShaderSet};

use super::{build_pipeline, encode, FramePlan, GeometryBuffers, PipelineDesc};

/// Counters for one submitted frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub draw_calls: u32,
    pub indices: u32,
}

/// GPU state created by setup and read by every frame.
///
/// Nothing here is mutated after construction; the resources live until the
/// session is dropped.
pub struct RendererSession {
    pipeline: wgpu::RenderPipeline,
    buffers: GeometryBuffers,
    plan: FramePlan,
}

impl RendererSession {
    /// Runs setup in order: compile both stages, upload the geometry, build the
    /// pipeline against the surface format.
    pub fn new(gpu: &Gpu<'_>, shaders: &ShaderSet, geometry: IndexedGeometry<'_>) -> Result<Self> {
        Self::with_device(gpu.device(), gpu.queue(), gpu.surface_format(), shaders, geometry)
    }

    /// Same as [`new`](Self::new) without a window surface; `color_format` is
    /// the format of the images the frames will target.
    pub fn with_device(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color_format: wgpu::TextureFormat,
        shaders: &ShaderSet,
        geometry: IndexedGeometry<'_>,
    ) -> Result<Self> {
        geometry.validate().context("invalid geometry")?;

        let vertex = shader::compile(device, &shaders.vertex)?;
        let fragment = shader::compile(device, &shaders.fragment)?;

        let buffers = GeometryBuffers::upload(device, queue, &geometry);

        let desc = PipelineDesc::new(color_format);
        let pipeline = build_pipeline(device, &desc, &vertex, &fragment)
            .context("failed to build render pipeline")?;

        let plan = FramePlan::indexed(buffers.index_count, buffers.index_format);

        Ok(Self {
            pipeline,
            buffers,
            plan,
        })
    }

    /// The commands every frame records.
    pub fn plan(&self) -> &FramePlan {
        &self.plan
    }

    /// Records and submits one frame: acquire the next image, clear it, draw
    /// the geometry once, submit and present.
    pub fn render_frame(&self, gpu: &Gpu<'_>) -> std::result::Result<FrameStats, wgpu::SurfaceError> {
        let mut frame = gpu.begin_frame()?;
        let stats = self.record(&mut frame.encoder, &frame.view);
        gpu.submit(frame);
        Ok(stats)
    }

    /// Records one render pass into `encoder` targeting `view`: clear, bind,
    /// one indexed draw.
    pub fn record(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) -> FrameStats {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("idxdraw pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.plan.clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        encode(
            &self.plan,
            &mut pass,
            &self.pipeline,
            &self.buffers.vertex,
            &self.buffers.index,
        );

        FrameStats {
            draw_calls: self.plan.draw_calls().count() as u32,
            indices: self.plan.indices_drawn(),
        }
    }
}
