use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use clap::Parser;

use thiserror::Error;

use winit::dpi::{PhysicalPosition, PhysicalSize, Size};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use gl_wrapper::geometry::GBError;
use gl_wrapper::program::PBError;
use gl_wrapper::renderer::GlRenderer;

use crate::args::{Args, WindowConfig};
use crate::fps::{fps_title, FpsCounter, FrameClock};
use crate::input::{Click, InputEvent, InputQueue};
use crate::logging;

/// One of the programs driven by [`App::run`].
pub trait Exercise {
    /// Whether the window title shows a live frame rate.
    fn show_fps(&self) -> bool {
        true
    }

    /// Called with every queued event except exit requests, before `render`.
    fn handle_input(&mut self, _event: &InputEvent, _renderer: &mut GlRenderer) {}

    fn render(&mut self, renderer: &mut GlRenderer);

    /// Called once, after the loop has stopped.
    fn shutdown(&mut self, _renderer: &mut GlRenderer) {}
}

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    renderer: GlRenderer,
    title: String,
}

impl App {
    pub fn new(config: &WindowConfig) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(
                config.width,
                config.height,
            )))
            .with_title(&config.title);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        // glutin only calls the picker with a non-empty set of configs
        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| {
                configs.next().expect("display offered no GL configs")
            })
            .map_err(|e| AppError::Window(e.to_string()))?;

        let window = window.ok_or_else(|| AppError::Window("no window was created".into()))?;

        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 0))))
            .build(Some(window.raw_window_handle()));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(s) => gl_display.get_proc_address(s.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        if !gl::Viewport::is_loaded() || !gl::DrawArrays::is_loaded() {
            return Err(AppError::GlLoad);
        }

        let renderer = GlRenderer::new();

        let info = renderer.info();
        log::info!("Renderer: {}", info.renderer);
        log::info!("OpenGL version supported: {}", info.version);

        let (width, height): (u32, u32) = gl_window.window.inner_size().into();
        renderer.resize(width, height);

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            renderer,
            title: config.title.clone(),
        })
    }

    pub fn renderer(&mut self) -> &mut GlRenderer {
        &mut self.renderer
    }

    /// Runs until Escape or a close request, then shuts the exercise down.
    pub fn run<E: Exercise + 'static>(self, mut exercise: E) -> ! {
        let Self {
            event_loop,
            gl_context,
            gl_window,
            mut renderer,
            title,
        } = self;

        let mut queue = InputQueue::new();
        let mut cursor = PhysicalPosition::new(0.0, 0.0);
        let mut fps = FpsCounter::new();
        let mut clock = FrameClock::new();
        let mut exiting = false;

        event_loop.run(move |event, _window_target, control_flow| {
            control_flow.set_poll();
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if let (Some(w), Some(h)) =
                            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                        {
                            gl_window.surface.resize(&gl_context, w, h);
                            renderer.resize(size.width, size.height);
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = position;
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        let size = gl_window.window.inner_size();
                        queue.push(InputEvent::Click(Click {
                            x: cursor.x,
                            y: cursor.y,
                            button: button.into(),
                            action: state.into(),
                            window_width: size.width,
                            window_height: size.height,
                        }));
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                            && input.state == ElementState::Pressed
                        {
                            queue.push(InputEvent::ExitRequested);
                        }
                    }
                    WindowEvent::CloseRequested => {
                        queue.push(InputEvent::ExitRequested);
                    }
                    _ => (),
                },
                Event::MainEventsCleared => {
                    for event in queue.drain() {
                        match event {
                            InputEvent::ExitRequested => exiting = true,
                            _ if exiting => (),
                            _ => exercise.handle_input(&event, &mut renderer),
                        }
                    }

                    if exiting {
                        control_flow.set_exit();
                        return;
                    }

                    let elapsed = clock.lap().as_secs_f64();
                    if exercise.show_fps() {
                        if let Some(fps) = fps.tick(elapsed) {
                            gl_window.window.set_title(&fps_title(&title, fps));
                        }
                    }

                    gl_window.window.request_redraw();
                }
                Event::RedrawRequested(_) => {
                    renderer.clear_color(0.0, 0.0, 0.0);
                    exercise.render(&mut renderer);

                    if let Err(e) = gl_window.surface.swap_buffers(&gl_context) {
                        log::error!("Could not swap buffers: {e}");
                    }
                }
                Event::LoopDestroyed => {
                    exercise.shutdown(&mut renderer);
                    log::debug!("exercise shut down");
                }
                _ => (),
            }
        })
    }
}

/// Parses the arguments, opens the window and runs the exercise built by
/// `build`. Window, context or setup failures end the process with status 1.
pub fn launch<E, F>(title: &str, build: F) -> !
where
    E: Exercise + 'static,
    F: FnOnce(&mut GlRenderer) -> Result<E, SetupError>,
{
    logging::init();

    let args = Args::parse();

    let mut app = match App::new(&args.window_config(title)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let exercise = match build(app.renderer()) {
        Ok(exercise) => exercise,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    app.run(exercise)
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::ZeroSize)?,
            NonZeroU32::new(height).ok_or(AppError::ZeroSize)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not create the window: {0}")]
    Window(String),
    #[error("Could not create the GL context: {0}")]
    Context(#[from] glutin::error::Error),
    #[error("Window surface has zero size")]
    ZeroSize,
    #[error("Could not load OpenGL functions")]
    GlLoad,
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Could not build shader program: {0}")]
    Program(#[from] PBError),
    #[error("Could not upload geometry: {0}")]
    Geometry(#[from] GBError),
}
