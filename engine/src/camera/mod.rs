//! Camera Module
//!
//! Provides first-person camera state and the world-to-view transform.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod first_person;

pub use first_person::{FirstPersonCamera, LOOK_PITCH_SCALE, LOOK_YAW_SCALE, PITCH_LIMIT_DEG};
