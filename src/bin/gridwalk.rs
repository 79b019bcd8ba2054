//! First-Person Grid Walk Demo
//!
//! Run with: `cargo run --bin gridwalk`
//!
//! Walks a first-person camera through the hand-authored 10x10 stage,
//! drawing one unit cube per solid cell. The cursor is grabbed for
//! mouse-look; the loop is capped at 35 logical frames per second and
//! movement is a fixed distance per tick.
//!
//! Controls:
//! - WASD: Walk / strafe (opposing keys: forward and strafe-right win)
//! - Mouse: Look (horizontal turn, vertical tilt)
//! - ESC: Exit

use std::sync::Arc;

use glam::Vec3;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use gridwalk_engine::camera::FirstPersonCamera;
use gridwalk_engine::clock::FrameClock;
use gridwalk_engine::input::InputState;
use gridwalk_engine::render::{GpuContext, GpuContextConfig, SceneOptions, SceneRenderer};
use gridwalk_engine::world::{CellLookup, Stage};

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;
const FPS: u32 = 35;
const SPAWN: Vec3 = Vec3::new(2.0, 0.0, 2.0);

/// Everything that exists once the window is up.
struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: SceneRenderer,
    stage: Stage,
    camera: FirstPersonCamera,
    input: InputState,
    clock: FrameClock,
}

impl AppState {
    fn new(window: Arc<Window>) -> Self {
        let gpu = GpuContext::new(Arc::clone(&window), GpuContextConfig::default());
        let stage = Stage::demo();
        let renderer = SceneRenderer::new(&gpu, &stage, SceneOptions::default());
        let camera = FirstPersonCamera::with_position(SPAWN);

        let mut input = InputState::new();
        input.cursor.capture();
        input.cursor.take_dirty();
        input.cursor.apply_to_window(&window);

        Self {
            window,
            gpu,
            renderer,
            stage,
            camera,
            input,
            clock: FrameClock::new(FPS),
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.gpu.resize(size.width, size.height);
        self.renderer.resize(self.gpu.aspect_ratio());
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        self.input.keyboard.handle_key(map_key(key), pressed);
    }

    /// Route raw pointer motion straight to the camera, once per event.
    fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.input.cursor.is_captured() {
            self.camera.apply_look(dx as f32, dy as f32);
        }
    }

    fn handle_focus(&mut self, focused: bool) {
        self.input.cursor.handle_focus(focused);
        if self.input.cursor.take_dirty() {
            self.input.cursor.apply_to_window(&self.window);
        }
    }

    /// One logic tick: cap the rate, then advance the camera by fixed-speed
    /// movement intents.
    fn update(&mut self) {
        self.clock.tick();
        let movement = &self.input.keyboard.movement;
        self.camera
            .apply_move(movement.forward_intent(), movement.strafe_intent());
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.gpu.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.renderer
            .render(&self.gpu, &mut encoder, &view, &self.camera, &self.stage);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Map winit key codes onto the engine's windowing-agnostic codes.
fn map_key(key: KeyCode) -> gridwalk_engine::input::KeyCode {
    use gridwalk_engine::input::KeyCode as K;
    match key {
        KeyCode::KeyW => K::W,
        KeyCode::KeyA => K::A,
        KeyCode::KeyS => K::S,
        KeyCode::KeyD => K::D,
        KeyCode::Escape => K::Escape,
        _ => K::Unknown,
    }
}

#[derive(Default)]
struct App {
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        println!("[Gridwalk] Creating window...");
        let window_attrs = WindowAttributes::default()
            .with_title("Gridwalk - WASD to move, mouse to look, ESC to exit")
            .with_inner_size(PhysicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("error: could not create window"),
        );
        let state = AppState::new(window);

        println!(
            "[Gridwalk] Ready. Stage {}x{}, {} solid cells.",
            state.stage.width(),
            state.stage.height(),
            state.stage.solid_count()
        );
        self.state = Some(state);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::Focused(focused) => {
                state.handle_focus(focused);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;

                if key == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                state.handle_key(key, pressed);
            }
            WindowEvent::RedrawRequested => {
                state.update();

                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => eprintln!("[Gridwalk] render error: {e:?}"),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event
            && let Some(state) = &mut self.state
        {
            state.handle_mouse_motion(dx, dy);
        }
    }
}

fn main() {
    println!("=== Gridwalk ===");

    let event_loop = EventLoop::new().expect("error: could not create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::default();
    event_loop
        .run_app(&mut app)
        .expect("error: event loop failed");
}
