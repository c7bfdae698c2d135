//! Camera-related types and components
//!
//! This module contains the main camera marker and the orbit state driving it.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Keeps the pitch just short of the poles so `looking_at` stays well defined.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Zoom factor applied per wheel step.
const ZOOM_STEP: f32 = 0.95;

/// Velocities below this are dropped.
const REST_EPSILON: f32 = 1e-5;

/// Orbit controls around a target point with damped rotation
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Azimuth around +Y, measured from +Z
    pub yaw: f32,
    /// Elevation above the target's horizontal plane
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the pending rotation applied (and removed) each frame
    pub damping_factor: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    pending_scale: f32,
}

impl OrbitCamera {
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let mut orbit = Self {
            target,
            radius: 1.0,
            yaw: 0.0,
            pitch: 0.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            damping_factor: 0.05,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            pending_scale: 1.0,
        };
        orbit.set_position(position);
        orbit
    }

    /// Jump to an absolute position around the same target.
    ///
    /// Queued drag and zoom motion is dropped. The distance limits are not
    /// applied until the next zoom.
    pub fn set_position(&mut self, position: Vec3) {
        let offset = position - self.target;
        self.radius = offset.length().max(REST_EPSILON);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / self.radius)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw_velocity = 0.0;
        self.pitch_velocity = 0.0;
        self.pending_scale = 1.0;
    }

    pub fn with_limits(mut self, min_distance: f32, max_distance: f32) -> Self {
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self.radius = self.radius.clamp(min_distance, max_distance);
        self
    }

    pub fn with_damping(mut self, damping_factor: f32) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    /// Queue a rotation from a mouse drag, scaled so a drag across the full
    /// viewport height turns the camera once around.
    pub fn rotate_by_pixels(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.yaw_velocity -= TAU * delta.x / viewport_height;
        self.pitch_velocity += TAU * delta.y / viewport_height;
    }

    /// Queue a zoom from wheel steps; positive steps move closer.
    pub fn zoom_by_wheel(&mut self, steps: f32) {
        self.pending_scale *= ZOOM_STEP.powf(steps);
    }

    /// Apply one frame of queued motion. Returns true when the camera moved.
    pub fn update(&mut self) -> bool {
        let factor = if self.damping_factor > 0.0 {
            self.damping_factor.min(1.0)
        } else {
            1.0
        };

        let mut moved = false;

        if self.yaw_velocity.abs() > REST_EPSILON || self.pitch_velocity.abs() > REST_EPSILON {
            self.yaw += self.yaw_velocity * factor;
            self.pitch = (self.pitch + self.pitch_velocity * factor).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            self.yaw_velocity *= 1.0 - factor;
            self.pitch_velocity *= 1.0 - factor;
            moved = true;
        } else {
            self.yaw_velocity = 0.0;
            self.pitch_velocity = 0.0;
        }

        if self.pending_scale != 1.0 {
            self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
            self.pending_scale = 1.0;
            moved = true;
        }

        moved
    }

    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_position_round_trip() {
        let orbit = OrbitCamera::from_position(Vec3::new(-9.0, 3.0, 0.0), Vec3::ZERO);
        assert!((orbit.position() - Vec3::new(-9.0, 3.0, 0.0)).length() < 1e-4);
        assert!((orbit.radius - 90f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_transform_looks_at_target() {
        let orbit = OrbitCamera::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let forward = orbit.transform().forward();
        assert!((*forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_damped_rotation_converges_to_full_drag() {
        let mut orbit = OrbitCamera::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let start_yaw = orbit.yaw;

        orbit.rotate_by_pixels(Vec2::new(-100.0, 0.0), 1000.0);
        assert!(orbit.update());
        let first_step = orbit.yaw - start_yaw;
        assert!((first_step - TAU * 0.1 * 0.05).abs() < 1e-5);

        for _ in 0..1000 {
            orbit.update();
        }
        assert!((orbit.yaw - start_yaw - TAU * 0.1).abs() < 1e-3);
        assert!(!orbit.update());
    }

    #[test]
    fn test_pitch_never_passes_poles() {
        let mut orbit =
            OrbitCamera::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO).with_damping(1.0);

        orbit.rotate_by_pixels(Vec2::new(0.0, 10_000.0), 100.0);
        orbit.update();
        assert!(orbit.pitch <= PITCH_LIMIT);

        orbit.rotate_by_pixels(Vec2::new(0.0, -50_000.0), 100.0);
        orbit.update();
        assert!(orbit.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_respects_limits() {
        let mut orbit =
            OrbitCamera::from_position(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO).with_limits(2.0, 20.0);

        orbit.zoom_by_wheel(1.0);
        orbit.update();
        assert!((orbit.radius - 9.5).abs() < 1e-4);

        orbit.zoom_by_wheel(500.0);
        orbit.update();
        assert_eq!(orbit.radius, 2.0);

        orbit.zoom_by_wheel(-500.0);
        orbit.update();
        assert_eq!(orbit.radius, 20.0);
    }

    #[test]
    fn test_set_position_drops_pending_motion() {
        let mut orbit = OrbitCamera::from_position(Vec3::new(-9.0, 3.0, 0.0), Vec3::ZERO)
            .with_limits(2.0, 50.0);
        orbit.rotate_by_pixels(Vec2::new(300.0, 0.0), 600.0);
        orbit.zoom_by_wheel(3.0);

        orbit.set_position(Vec3::new(-8.0, 3.0, 0.0));

        assert!((orbit.position() - Vec3::new(-8.0, 3.0, 0.0)).length() < 1e-4);
        assert!(!orbit.update());
    }

    #[test]
    fn test_set_position_above_target_stays_off_pole() {
        let mut orbit = OrbitCamera::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        orbit.set_position(Vec3::new(0.0, 5.0, 0.0));
        assert!(orbit.pitch < FRAC_PI_2);
        assert!(orbit.transform().translation.is_finite());
    }

    #[test]
    fn test_zero_viewport_ignored() {
        let mut orbit = OrbitCamera::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        orbit.rotate_by_pixels(Vec2::new(50.0, 50.0), 0.0);
        assert!(!orbit.update());
    }
}
