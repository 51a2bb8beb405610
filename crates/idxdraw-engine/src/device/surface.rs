use winit::dpi::PhysicalSize;

/// Picks the surface format: explicit preference, then sRGB (if asked), then
/// whatever the surface lists first.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    preferred: Option<wgpu::TextureFormat>,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if let Some(f) = preferred.filter(|f| formats.contains(f)) {
        return Some(f);
    }

    if prefer_srgb {
        let srgb = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = srgb.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Applies a new drawable size. A zero-area size is recorded but the surface is
/// left unconfigured until a usable size arrives.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn preferred_format_wins_when_supported() {
        let formats = [F::Rgba8Unorm, F::Bgra8Unorm, F::Bgra8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats, Some(F::Bgra8Unorm), true),
            Some(F::Bgra8Unorm)
        );
    }

    #[test]
    fn unsupported_preference_falls_back_to_srgb() {
        let formats = [F::Rgba8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats, Some(F::Bgra8Unorm), true),
            Some(F::Rgba8UnormSrgb)
        );
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [F::Rgba16Float, F::Rgba8Unorm];
        assert_eq!(
            choose_surface_format(&formats, Some(F::Bgra8Unorm), false),
            Some(F::Rgba16Float)
        );
    }

    #[test]
    fn no_formats_no_choice() {
        assert_eq!(choose_surface_format(&[], Some(F::Bgra8Unorm), true), None);
    }

    #[test]
    fn alpha_mode_requested_or_first_supported() {
        use wgpu::CompositeAlphaMode as A;
        let supported = [A::Opaque, A::PreMultiplied];
        assert_eq!(choose_alpha_mode(&supported, Some(A::PreMultiplied)), A::PreMultiplied);
        assert_eq!(choose_alpha_mode(&supported, Some(A::PostMultiplied)), A::Opaque);
        assert_eq!(choose_alpha_mode(&[], None), A::Auto);
    }
}
