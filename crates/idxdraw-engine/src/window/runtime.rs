use std::time::Duration;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::render::RendererSession;
use crate::time::FrameClock;

use super::RunFlag;

/// How often the frame rate is reported at debug level.
const FPS_REPORT_PERIOD: Duration = Duration::from_secs(5);

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "indexed draw".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the frame loop.
pub struct Runtime;

impl Runtime {
    /// Opens the window, acquires the GPU, runs `setup` once and then renders
    /// one frame per display refresh while `run_flag` is set.
    ///
    /// Setup failures and fatal surface errors end the loop and are returned.
    /// Closing the window clears `run_flag`.
    pub fn run<S>(config: RuntimeConfig, gpu_init: GpuInit, run_flag: RunFlag, setup: S) -> Result<()>
    where
        S: FnMut(&Gpu<'_>) -> Result<RendererSession>,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = LoopState {
            config,
            gpu_init,
            run_flag,
            setup,
            session: None,
            entry: None,
            failure: None,
        };

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => {
                log::info!("frame loop stopped");
                Ok(())
            }
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct LoopState<S> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    run_flag: RunFlag,
    setup: S,

    // Declared before `entry` so GPU resources drop before the device.
    session: Option<RendererSession>,
    entry: Option<WindowEntry>,

    failure: Option<anyhow::Error>,
}

impl<S> LoopState<S>
where
    S: FnMut(&Gpu<'_>) -> Result<RendererSession>,
{
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.run_flag.stop();
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntry::try_new(FrameClock::new(), window, |w| {
            pollster::block_on(Gpu::new(w, gpu_init))
        })
        .context("GPU initialization failed")?;

        let setup = &mut self.setup;
        let session = entry
            .with_gpu(|gpu| setup(gpu))
            .context("renderer setup failed")?;

        entry.with_window(|w| w.request_redraw());

        self.session = Some(session);
        self.entry = Some(entry);
        Ok(())
    }

    /// Renders one frame. Returns `false` when the loop must stop.
    fn frame(&mut self) -> bool {
        let (Some(entry), Some(session)) = (self.entry.as_mut(), self.session.as_ref()) else {
            return true;
        };

        entry.with_mut(|fields| {
            fields.window.pre_present_notify();

            match session.render_frame(fields.gpu) {
                Ok(stats) => {
                    let ft = fields.clock.tick();
                    log::trace!(
                        "frame {} dt={:.4}s draws={} indices={}",
                        ft.frame_index,
                        ft.dt,
                        stats.draw_calls,
                        stats.indices
                    );
                    if let Some(fps) = fields.clock.take_fps(FPS_REPORT_PERIOD) {
                        log::debug!("{fps:.1} fps over {} frames", fields.clock.frames());
                    }
                    true
                }
                Err(err) => fields.gpu.handle_surface_error(err) != SurfaceErrorAction::Fatal,
            }
        })
    }

    fn request_redraw(&self) {
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }
}

impl<S> ApplicationHandler for LoopState<S>
where
    S: FnMut(&Gpu<'_>) -> Result<RendererSession>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.run_flag.is_running() {
            event_loop.exit();
            return;
        }

        // Frames are driven by redraw requests, paced by the FIFO present mode.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if !self.run_flag.is_running() {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.run_flag.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
                self.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let run_flag = self.run_flag.clone();
                let mut fatal = false;
                let next = run_flag.run_frame(|| {
                    fatal = !self.frame();
                    !fatal
                });

                if next {
                    self.request_redraw();
                } else if fatal {
                    self.fail(event_loop, anyhow::anyhow!("fatal surface error"));
                } else {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}
