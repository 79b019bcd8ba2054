//! Render Module
//!
//! wgpu-based rendering for the grid-walking demo: GPU context ownership,
//! the unit-cube / wall-panel meshes, per-cell MVP uniforms, and the scene
//! pass that draws one mesh per solid stage cell.

pub mod binding_validator;
pub mod gpu_context;
pub mod mesh;
pub mod scene;
pub mod uniforms;

// Re-export commonly used types for convenience
pub use gpu_context::{GpuContext, GpuContextConfig};
pub use mesh::{Mesh, MeshKind, SceneVertex};
pub use scene::{SceneOptions, SceneRenderer, cell_models};
pub use uniforms::{SceneUniforms, UNIFORM_STRIDE};
