//! GPU device + surface management.
//!
//! This module is responsible for:
//! - acquiring the wgpu Adapter/Device/Queue
//! - configuring the window Surface (swapchain) at the window's size
//! - acquiring frames and providing encoders/views for rendering

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
