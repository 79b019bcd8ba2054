//! Gridwalk Engine Library
//!
//! Core of a first-person grid-walking demo: a camera walks through a
//! hand-authored occupancy grid rendered as unit cubes with wgpu.
//!
//! # Modules
//!
//! - [`camera`] - First-person pose tracking and view transform
//! - [`input`] - Platform-agnostic keyboard state and cursor capture
//! - [`world`] - Stage occupancy grid and cell addressing
//! - [`render`] - wgpu GPU context, scene meshes, and the grid render pass
//! - [`clock`] - Fixed-rate frame pacing
//!
//! # Example
//!
//! ```ignore
//! use gridwalk_engine::camera::FirstPersonCamera;
//! use gridwalk_engine::input::{KeyCode, KeyboardState};
//! use gridwalk_engine::world::Stage;
//!
//! let stage = Stage::demo();
//! let mut camera = FirstPersonCamera::new();
//! let mut keyboard = KeyboardState::new();
//!
//! // In the event loop:
//! keyboard.handle_key(KeyCode::W, true);
//!
//! // Once per tick:
//! camera.apply_move(
//!     keyboard.movement.forward_intent(),
//!     keyboard.movement.strafe_intent(),
//! );
//! let view = camera.view_matrix();
//! ```

pub mod camera;
pub mod clock;
pub mod input;
pub mod render;
pub mod world;

// Re-export commonly used types at crate level for convenience
pub use camera::FirstPersonCamera;
pub use clock::FrameClock;
pub use input::{CursorCapture, InputState, KeyCode, KeyboardState, MovementKeys};
pub use render::{GpuContext, MeshKind, SceneOptions, SceneRenderer};
pub use world::{CellLookup, Stage, StageError};
