//! Scene Uniforms
//!
//! GPU-side uniform data for the scene pass. Each solid cell gets its own
//! 256-byte slot in one dynamic-offset uniform buffer, holding the combined
//! model-view-projection matrix for that cell's block.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use static_assertions::const_assert;

/// Byte stride between per-cell uniform slots.
///
/// 256 is the guaranteed `min_uniform_buffer_offset_alignment`, so dynamic
/// offsets at this stride are valid on every backend.
pub const UNIFORM_STRIDE: u64 = 256;

/// Per-draw uniform data: the combined MVP matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub mvp: [[f32; 4]; 4],
}

// Each slot must hold one SceneUniforms.
const_assert!(std::mem::size_of::<SceneUniforms>() as u64 <= UNIFORM_STRIDE);

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            mvp: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

impl SceneUniforms {
    /// Wrap an MVP matrix for upload.
    pub fn new(mvp: Mat4) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
        }
    }
}

/// Byte offset of the uniform slot for draw number `slot`.
#[inline]
pub fn slot_offset(slot: usize) -> u64 {
    slot as u64 * UNIFORM_STRIDE
}
