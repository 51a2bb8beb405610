use anyhow::Result;

use idxdraw_engine::device::GpuInit;
use idxdraw_engine::geometry::IndexedGeometry;
use idxdraw_engine::logging::{init_logging, LoggingConfig};
use idxdraw_engine::render::RendererSession;
use idxdraw_engine::shader::ShaderSet;
use idxdraw_engine::window::{RunFlag, Runtime, RuntimeConfig};

const VERTEX_SHADER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/triangles.vert.wgsl");
const FRAGMENT_SHADER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/triangles.frag.wgsl");

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let geometry = IndexedGeometry::sample();
    log::info!(
        "drawing {} triangles from {} vertices",
        geometry.triangle_count(),
        geometry.vertex_count()
    );

    Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        RunFlag::new(),
        |gpu| {
            let shaders = ShaderSet::load(VERTEX_SHADER, FRAGMENT_SHADER)?;
            RendererSession::new(gpu, &shaders, geometry)
        },
    )
}
