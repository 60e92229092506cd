mod bindings;

use anyhow::{Context, Result};
use clap::Parser;
use egui::Context as EguiContext;
use explorer_input::{Action, InputSource, InputState};
use explorer_kernel::{FrameClock, LookMode, Session, ViewerConfig};
use explorer_render::FramePlan;
use explorer_render_wgpu::WgpuRenderer;
use glam::Vec2;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "explorer-desktop", about = "Mini 3D Explorer desktop viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in pixels (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels (overrides config)
    #[arg(long)]
    height: Option<u32>,
}

/// Application state.
struct AppState {
    config: ViewerConfig,
    session: Session,
    input: InputState,
    clock: FrameClock,
    show_hud: bool,
}

impl AppState {
    fn new(config: ViewerConfig) -> Result<Self> {
        let session = Session::new(&config).context("building scene")?;
        Ok(Self {
            config,
            session,
            input: InputState::new(),
            clock: FrameClock::new(),
            show_hud: true,
        })
    }

    /// Advance one frame. Returns the new look mode if it changed.
    fn update(&mut self) -> Option<LookMode> {
        let dt = self.clock.tick();
        let Session {
            controller,
            context,
            ..
        } = &mut self.session;
        let events = controller.update(context, &self.input, dt);

        if self.input.was_pressed(Action::ToggleHud) {
            self.show_hud = !self.show_hud;
        }
        if events.light_toggled {
            tracing::info!(light_on = context.light_on, "light toggled");
        }
        self.input.end_frame();
        events.look_mode
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        let Some(action) = bindings::action_for(key) else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.input.press(action),
            ElementState::Released => self.input.release(action),
        }
    }

    fn frame_plan(&self) -> FramePlan {
        let ctx = &self.session.context;
        FramePlan::build(
            &self.session.scene,
            &ctx.camera,
            ctx.light_on,
            self.clock.elapsed(),
        )
    }

    fn draw_hud(&self, ctx: &EguiContext) {
        if !self.show_hud {
            return;
        }

        let frame = &self.session.context;
        let cam = &frame.camera;
        let frame_ms = self.clock.average_frame_time().as_secs_f64() * 1000.0;

        egui::Window::new("Explorer")
            .default_pos([12.0, 12.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    cam.position.x, cam.position.y, cam.position.z
                ));
                ui.label(format!("Yaw: {:.1}  Pitch: {:.1}", cam.yaw(), cam.pitch()));
                ui.label(format!(
                    "Light: {}",
                    if frame.light_on { "on" } else { "off" }
                ));
                ui.label(format!("Look: {:?}", frame.look_mode()));
                ui.label(format!("Frame: {frame_ms:.2} ms"));
                let touching: Vec<String> = self
                    .session
                    .controller
                    .world()
                    .overlapping(cam.position)
                    .map(|i| i.to_string())
                    .collect();
                if !touching.is_empty() {
                    ui.label(format!("Touching colliders: {}", touching.join(", ")));
                }
                ui.separator();
                ui.small("WASD: Move | Shift: Sprint | E: Light | Esc: Cursor | F1: HUD");
            });
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    /// Fatal error raised inside the event loop, reported after it exits.
    error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
            error: None,
        }
    }

    fn init_gpu(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.state.config.window;
        let attrs = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("find adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("explorer_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state
            .session
            .context
            .camera
            .set_viewport(size.width, size.height);

        let renderer = WgpuRenderer::new(&device, &queue, surface_format, size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        set_cursor_captured(&window, self.state.session.context.look_mode() == LookMode::Captured);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        // Frame timing starts with the first presented frame, not process start.
        self.state.clock.restart();
        Ok(())
    }

    fn redraw(&mut self) {
        if let Some(mode) = self.state.update() {
            if let Some(window) = &self.window {
                set_cursor_captured(window, mode == LookMode::Captured);
            }
        }

        let (
            Some(window),
            Some(surface),
            Some(device),
            Some(queue),
            Some(config),
            Some(renderer),
            Some(egui_winit),
            Some(egui_renderer),
        ) = (
            &self.window,
            &self.surface,
            &self.device,
            &self.queue,
            &self.config,
            &self.renderer,
            &mut self.egui_winit,
            &mut self.egui_renderer,
        )
        else {
            return;
        };

        let output = match surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                surface.configure(device, config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        renderer.render(device, queue, &view, &self.state.frame_plan());

        let raw_input = egui_winit.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.state.draw_hud(ctx);
        });
        egui_winit.handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [config.width, config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        egui_renderer.update_buffers(device, queue, &mut encoder, &paint_jobs, &screen_descriptor);
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }

        output.present();
        window.request_redraw();
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if !self
            .state
            .session
            .context
            .camera
            .set_viewport(new_size.width, new_size.height)
        {
            return;
        }
        if let (Some(surface), Some(device), Some(config)) =
            (&self.surface, &self.device, &mut self.config)
        {
            config.width = new_size.width;
            config.height = new_size.height;
            surface.configure(device, config);
            if let Some(renderer) = &mut self.renderer {
                renderer.resize(device, config.width, config.height);
            }
        }
    }
}

/// Grab and hide the cursor for mouse look, or hand it back.
fn set_cursor_captured(window: &Window, captured: bool) {
    let grab = if captured {
        window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
    } else {
        window.set_cursor_grab(CursorGrabMode::None)
    };
    if let Err(e) = grab {
        tracing::warn!("cursor grab failed: {e}");
    }
    window.set_cursor_visible(!captured);
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_gpu(event_loop) {
            tracing::error!("startup failed: {e:#}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            let response = egui_winit.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => self.resize(new_size),
            WindowEvent::Focused(false) => self.state.input.release_all(),
            WindowEvent::KeyboardInput { event, .. } => self.state.handle_key(&event),
            WindowEvent::CursorMoved { position, .. }
                if self.state.session.context.look_mode() == LookMode::Free =>
            {
                // Keep the virtual cursor near the real one while it is free.
                self.state
                    .input
                    .set_cursor(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.session.context.look_mode() == LookMode::Captured {
                self.state
                    .input
                    .move_cursor(Vec2::new(delta.0 as f32, delta.1 as f32));
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config(cli: &Cli) -> Result<ViewerConfig> {
    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(width) = cli.width {
        config.window.width = width;
    }
    if let Some(height) = cli.height {
        config.window.height = height;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("explorer-desktop starting");

    let config = load_config(&cli)?;
    let state = AppState::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(state);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
