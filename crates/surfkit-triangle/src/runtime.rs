use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use surfkit::device::{tick_device, Gpu, GpuInit, SurfaceErrorAction};

use crate::triangle::TrianglePipeline;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "surfkit triangle".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: false,
        }
    }
}

/// Entry point for the demo loop.
pub struct Runtime;

impl Runtime {
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// The window and the GPU context whose surface borrows it.
#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Viewport {
    entry: WindowEntry,
    pipeline: TrianglePipeline,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    instance: wgpu::Instance,

    viewport: Option<Viewport>,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        Self {
            config,
            gpu_init,
            instance,
            viewport: None,
            failure: None,
        }
    }

    fn create_viewport(&self, event_loop: &ActiveEventLoop) -> Result<Viewport> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let instance = &self.instance;
        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| {
                let size = w.inner_size();
                match surfkit::create_window_surface(instance, w) {
                    Some(surface) => pollster::block_on(Gpu::new(
                        instance,
                        surface,
                        size.width,
                        size.height,
                        gpu_init,
                    )),
                    None => Err(anyhow::anyhow!("no surface for this window")),
                }
            },
        }
        .try_build()?;

        let pipeline =
            entry.with_gpu(|gpu| TrianglePipeline::new(gpu.device(), gpu.surface_format()));

        Ok(Viewport { entry, pipeline })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.viewport = None;
        event_loop.exit();
    }
}

impl Viewport {
    /// Renders one frame. Returns `false` when rendering cannot continue.
    fn redraw(&mut self) -> bool {
        let pipeline = &self.pipeline;

        self.entry.with_mut(|fields| {
            let gpu = fields.gpu;

            let mut frame = match gpu.begin_frame() {
                Ok(f) => f,
                Err(err) => {
                    log::warn!("surface error: {err}");
                    return gpu.handle_surface_error(err) != SurfaceErrorAction::Fatal;
                }
            };

            pipeline.draw(&mut frame.encoder, &frame.view);

            fields.window.pre_present_notify();
            gpu.submit(frame);
            tick_device(gpu.device());
            true
        })
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewport.is_some() {
            return;
        }

        match self.create_viewport(event_loop) {
            Ok(viewport) => self.viewport = Some(viewport),
            Err(err) => self.fail(event_loop, err.context("failed to set up rendering")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw.
        if let Some(viewport) = &self.viewport {
            viewport.entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.viewport = None;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                viewport
                    .entry
                    .with_gpu_mut(|gpu| gpu.resize(size.width, size.height));
            }

            WindowEvent::RedrawRequested => {
                if !viewport.redraw() {
                    self.fail(event_loop, anyhow::anyhow!("surface lost beyond recovery"));
                }
            }

            _ => {}
        }
    }
}
