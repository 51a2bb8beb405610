use std::ops::Range;

/// Background the pass clears to before drawing.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.3,
    g: 0.2,
    b: 0.1,
    a: 1.0,
};

/// One command recorded inside the render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PassCommand {
    SetPipeline,
    SetVertexBuffer {
        slot: u32,
    },
    SetIndexBuffer {
        format: wgpu::IndexFormat,
    },
    DrawIndexed {
        indices: Range<u32>,
        base_vertex: i32,
        instances: Range<u32>,
    },
}

/// Everything one frame records: the clear color and the in-pass commands.
///
/// The plan never changes between frames, so it is built once and replayed.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub clear: wgpu::Color,
    pub commands: Vec<PassCommand>,
}

impl FramePlan {
    /// Bind pipeline, vertex buffer at slot 0 and the index buffer, then one
    /// draw of every index as a single instance from offset 0.
    pub fn indexed(index_count: u32, format: wgpu::IndexFormat) -> Self {
        Self {
            clear: CLEAR_COLOR,
            commands: vec![
                PassCommand::SetPipeline,
                PassCommand::SetVertexBuffer { slot: 0 },
                PassCommand::SetIndexBuffer { format },
                PassCommand::DrawIndexed {
                    indices: 0..index_count,
                    base_vertex: 0,
                    instances: 0..1,
                },
            ],
        }
    }

    /// Draw commands in recording order.
    pub fn draw_calls(&self) -> impl Iterator<Item = &PassCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, PassCommand::DrawIndexed { .. }))
    }

    /// Total indices drawn by the plan.
    pub fn indices_drawn(&self) -> u32 {
        self.draw_calls()
            .map(|c| match c {
                PassCommand::DrawIndexed { indices, instances, .. } => {
                    indices.len() as u32 * instances.len() as u32
                }
                _ => 0,
            })
            .sum()
    }
}

/// Replays `plan` into an open render pass.
pub fn encode(
    plan: &FramePlan,
    pass: &mut wgpu::RenderPass<'_>,
    pipeline: &wgpu::RenderPipeline,
    vertex_buffer: &wgpu::Buffer,
    index_buffer: &wgpu::Buffer,
) {
    for cmd in &plan.commands {
        match cmd {
            PassCommand::SetPipeline => pass.set_pipeline(pipeline),
            PassCommand::SetVertexBuffer { slot } => {
                pass.set_vertex_buffer(*slot, vertex_buffer.slice(..));
            }
            PassCommand::SetIndexBuffer { format } => {
                pass.set_index_buffer(index_buffer.slice(..), *format);
            }
            PassCommand::DrawIndexed {
                indices,
                base_vertex,
                instances,
            } => pass.draw_indexed(indices.clone(), *base_vertex, instances.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IndexedGeometry;

    fn sample_plan() -> FramePlan {
        FramePlan::indexed(
            IndexedGeometry::sample().index_count(),
            wgpu::IndexFormat::Uint32,
        )
    }

    #[test]
    fn sample_frame_issues_exactly_one_indexed_draw() {
        let plan = sample_plan();
        let draws: Vec<_> = plan.draw_calls().collect();
        assert_eq!(
            draws,
            [&PassCommand::DrawIndexed {
                indices: 0..12,
                base_vertex: 0,
                instances: 0..1,
            }]
        );
        assert_eq!(plan.indices_drawn(), 12);
    }

    #[test]
    fn binds_precede_the_draw() {
        let plan = sample_plan();
        assert_eq!(
            &plan.commands[..3],
            &[
                PassCommand::SetPipeline,
                PassCommand::SetVertexBuffer { slot: 0 },
                PassCommand::SetIndexBuffer {
                    format: wgpu::IndexFormat::Uint32
                },
            ]
        );
        assert!(matches!(
            plan.commands.last(),
            Some(PassCommand::DrawIndexed { .. })
        ));
    }

    #[test]
    fn clear_color_is_fixed_background() {
        let plan = sample_plan();
        assert_eq!(plan.clear.r, 0.3);
        assert_eq!(plan.clear.g, 0.2);
        assert_eq!(plan.clear.b, 0.1);
        assert_eq!(plan.clear.a, 1.0);
    }

    #[test]
    fn plan_construction_is_deterministic() {
        let first = sample_plan();
        let second = sample_plan();
        assert_eq!(first, second);
        assert_eq!(second.clear, CLEAR_COLOR);
    }
}
