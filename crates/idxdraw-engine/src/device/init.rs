/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Surface format to use when the surface supports it.
    ///
    /// `Bgra8Unorm` is the canonical presentable format on most platforms.
    pub preferred_format: Option<wgpu::TextureFormat>,

    /// Fall back to an sRGB format before taking the surface's first format.
    pub prefer_srgb: bool,

    /// Present mode. FIFO waits for vertical blank, which paces the frame loop
    /// to the display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode; ignored when unsupported by the surface.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            preferred_format: Some(wgpu::TextureFormat::Bgra8Unorm),
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
