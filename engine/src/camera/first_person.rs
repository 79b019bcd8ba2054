//! First-Person Camera
//!
//! Tracks a walking camera's pose (position, yaw, pitch) and turns pointer
//! motion and movement intents into a rigid-body view transform.
//!
//! Key features:
//! - Yaw/pitch stored in degrees; yaw is unbounded (consumed through trig,
//!   so it wraps behaviorally mod 360), pitch is clamped to ±90
//! - Movement is yaw-relative in the XZ plane at a fixed per-tick speed
//! - Optional tilt: when disabled, vertical pointer motion is ignored
//!
//! ## Usage
//! ```rust,ignore
//! let mut camera = FirstPersonCamera::with_position(Vec3::new(2.0, 0.0, 2.0));
//!
//! // Per pointer-motion event:
//! camera.apply_look(dx, dy);
//!
//! // Per logic tick:
//! camera.apply_move(keys.forward_intent(), keys.strafe_intent());
//!
//! // Per frame:
//! let view = camera.view_matrix();
//! ```

use glam::{Mat4, Vec3};

/// Degrees of yaw per unit of horizontal pointer motion.
pub const LOOK_YAW_SCALE: f32 = 0.5;

/// Degrees of pitch per unit of vertical pointer motion.
pub const LOOK_PITCH_SCALE: f32 = 0.25;

/// Pitch is clamped to [-PITCH_LIMIT_DEG, +PITCH_LIMIT_DEG].
pub const PITCH_LIMIT_DEG: f32 = 90.0;

/// Default walking speed in world units per logic tick.
///
/// This is a per-tick constant, not units-per-second: the frame loop caps
/// the tick rate, and slow frames are not compensated.
pub const DEFAULT_MOVE_SPEED: f32 = 0.03;

/// First-person camera state.
///
/// Created once at startup, mutated every frame by input, and read once per
/// frame by the renderer through [`FirstPersonCamera::view_matrix`].
#[derive(Clone, Debug)]
pub struct FirstPersonCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Horizontal angle in degrees. Unbounded; wraps via trig.
    pub yaw: f32,
    /// Vertical angle in degrees, always within ±[`PITCH_LIMIT_DEG`].
    pub pitch: f32,
    /// Walking speed in world units per tick.
    pub move_speed: f32,
    /// Whether vertical pointer motion tilts the camera.
    pub tilt_enabled: bool,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            move_speed: DEFAULT_MOVE_SPEED,
            tilt_enabled: true,
        }
    }
}

impl FirstPersonCamera {
    /// Create a camera at the origin with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera at a custom position.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Disable tilt, ignoring vertical pointer motion.
    pub fn without_tilt(mut self) -> Self {
        self.tilt_enabled = false;
        self
    }

    /// Apply relative pointer motion to the orientation.
    ///
    /// Call once per motion event, not once per frame, so look speed tracks
    /// the device's report rate rather than the frame rate.
    ///
    /// # Arguments
    /// * `dx` - Horizontal motion since the last sample. Positive turns right.
    /// * `dy` - Vertical motion since the last sample. Positive tilts up.
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * LOOK_YAW_SCALE;
        if self.tilt_enabled {
            self.pitch =
                (self.pitch + dy * LOOK_PITCH_SCALE).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        }
    }

    /// The walking direction for a forward intent, in the XZ plane.
    ///
    /// At yaw 0 this is -Z; turning right (increasing yaw) rotates it toward +X.
    #[inline]
    pub fn forward_dir(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin(), 0.0, -yaw.cos())
    }

    /// The walking direction for a strafe-right intent, perpendicular to forward.
    #[inline]
    pub fn strafe_dir(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// Advance the position by one tick of movement.
    ///
    /// `forward` and `strafe` are movement intents in {-1, 0, +1}; the input
    /// layer resolves opposing keys before this is called (see
    /// [`MovementKeys::forward_intent`]). The two axes are independent, so a
    /// diagonal tick moves along both.
    ///
    /// [`MovementKeys::forward_intent`]: crate::input::MovementKeys::forward_intent
    pub fn apply_move(&mut self, forward: i32, strafe: i32) {
        if forward != 0 {
            self.position += self.forward_dir() * (forward as f32 * self.move_speed);
        }
        if strafe != 0 {
            self.position += self.strafe_dir() * (strafe as f32 * self.move_speed);
        }
    }

    /// The world-to-view transform.
    ///
    /// Built as `rot_x(pitch) * rot_y(yaw) * translate(-position)`: the
    /// translation is undone first, then yaw, then pitch. Pitch being the
    /// outermost rotation keeps tilt aligned with the screen's vertical axis
    /// regardless of which way the camera faces.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians())
            * Mat4::from_translation(-self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn mat_approx_eq(a: Mat4, b: Mat4, tol: f32) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_default_values() {
        let camera = FirstPersonCamera::new();
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.move_speed, DEFAULT_MOVE_SPEED);
        assert!(camera.tilt_enabled);
    }

    #[test]
    fn test_apply_look_yaw_scale() {
        let mut camera = FirstPersonCamera::new();
        camera.apply_look(10.0, 0.0);
        assert!((camera.yaw - 5.0).abs() < 1e-6);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_apply_look_pitch_scale() {
        let mut camera = FirstPersonCamera::new();
        camera.apply_look(0.0, 10.0);
        assert!((camera.pitch - 2.5).abs() < 1e-6);
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn test_pitch_clamped_up() {
        let mut camera = FirstPersonCamera::new();
        camera.apply_look(0.0, 100000.0);
        assert_eq!(camera.pitch, PITCH_LIMIT_DEG);
    }

    #[test]
    fn test_pitch_clamped_down() {
        let mut camera = FirstPersonCamera::new();
        camera.apply_look(0.0, -100000.0);
        assert_eq!(camera.pitch, -PITCH_LIMIT_DEG);
    }

    #[test]
    fn test_pitch_stays_clamped_across_sequences() {
        let mut camera = FirstPersonCamera::new();
        for i in 0..500 {
            let dy = if i % 3 == 0 { 173.0 } else { -91.5 };
            camera.apply_look(2.0, dy);
            assert!(camera.pitch >= -PITCH_LIMIT_DEG && camera.pitch <= PITCH_LIMIT_DEG);
        }
    }

    #[test]
    fn test_tilt_disabled_ignores_dy() {
        let mut camera = FirstPersonCamera::new().without_tilt();
        camera.apply_look(10.0, 500.0);
        assert_eq!(camera.pitch, 0.0);
        assert!((camera.yaw - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_unbounded() {
        let mut camera = FirstPersonCamera::new();
        camera.apply_look(10000.0, 0.0);
        assert!((camera.yaw - 5000.0).abs() < 1e-3);
    }

    #[test]
    fn test_view_matrix_yaw_periodicity() {
        let mut a = FirstPersonCamera::with_position(Vec3::new(1.0, 0.0, -3.0));
        let mut b = a.clone();
        a.yaw = 123.0;
        b.yaw = 123.0 + 360.0;
        assert!(mat_approx_eq(a.view_matrix(), b.view_matrix(), 1e-4));
    }

    #[test]
    fn test_view_matrix_identity_at_rest() {
        let camera = FirstPersonCamera::new();
        assert!(mat_approx_eq(camera.view_matrix(), Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_view_matrix_undoes_translation() {
        let camera = FirstPersonCamera::with_position(Vec3::new(2.0, 0.0, 2.0));
        let view = camera.view_matrix();
        // The camera's own position maps to the view-space origin.
        let eye = view * Vec4::new(2.0, 0.0, 2.0, 1.0);
        assert!(eye.truncate().length() < 1e-6);
    }

    #[test]
    fn test_pitch_rotation_is_outermost() {
        let mut camera = FirstPersonCamera::new();
        camera.yaw = 90.0;
        camera.pitch = 45.0;
        let expected = Mat4::from_rotation_x(45.0_f32.to_radians())
            * Mat4::from_rotation_y(90.0_f32.to_radians());
        assert!(mat_approx_eq(camera.view_matrix(), expected, 1e-6));
    }

    #[test]
    fn test_forward_at_yaw_zero_is_negative_z() {
        let camera = FirstPersonCamera::new();
        let fwd = camera.forward_dir();
        assert!(fwd.x.abs() < 1e-6);
        assert!((fwd.z - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_strafe_perpendicular_to_forward() {
        let mut camera = FirstPersonCamera::new();
        camera.yaw = 37.0;
        assert!(camera.forward_dir().dot(camera.strafe_dir()).abs() < 1e-6);
    }

    #[test]
    fn test_apply_move_forward() {
        let mut camera = FirstPersonCamera::with_position(Vec3::new(2.0, 0.0, 2.0));
        camera.apply_move(1, 0);
        assert!((camera.position.z - (2.0 - DEFAULT_MOVE_SPEED)).abs() < 1e-6);
        assert!((camera.position.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_apply_move_diagonal_applies_both_axes() {
        let mut camera = FirstPersonCamera::new();
        camera.apply_move(1, 1);
        assert!((camera.position.x - DEFAULT_MOVE_SPEED).abs() < 1e-6);
        assert!((camera.position.z - (-DEFAULT_MOVE_SPEED)).abs() < 1e-6);
    }

    #[test]
    fn test_apply_move_respects_yaw() {
        let mut camera = FirstPersonCamera::new();
        camera.yaw = 90.0;
        camera.apply_move(1, 0);
        // Facing +X after a quarter turn right.
        assert!((camera.position.x - DEFAULT_MOVE_SPEED).abs() < 1e-6);
        assert!(camera.position.z.abs() < 1e-6);
    }

    #[test]
    fn test_apply_move_zero_intents_is_noop() {
        let mut camera = FirstPersonCamera::with_position(Vec3::new(1.0, 2.0, 3.0));
        camera.apply_move(0, 0);
        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_movement_stays_in_xz_plane() {
        let mut camera = FirstPersonCamera::new();
        camera.apply_look(321.0, 77.0);
        camera.apply_move(1, -1);
        assert_eq!(camera.position.y, 0.0);
    }
}
