//! Indexed-draw rendering.
//!
//! Setup happens once ([`RendererSession::new`]): shaders are compiled, the
//! vertex and index buffers are uploaded and one immutable pipeline is built.
//! Each frame replays the same recorded [`FramePlan`] into a render pass.

mod buffers;
mod frame;
mod pipeline;
mod session;

pub use buffers::GeometryBuffers;
pub use frame::{encode, FramePlan, PassCommand, CLEAR_COLOR};
pub use pipeline::{build_pipeline, PipelineDesc};
pub use session::{FrameStats, RendererSession};
