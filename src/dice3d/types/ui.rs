//! UI-related types and components

use bevy::prelude::*;

/// Text label hanging from a point in the 3D scene.
///
/// Its screen position is recomputed every frame from the camera.
#[derive(Component, Debug, Clone, Copy)]
pub struct HintLabel {
    pub anchor: Vec3,
}

/// World axis edited by a camera panel row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAxis {
    X,
    Y,
    Z,
}

impl CameraAxis {
    pub const ALL: [CameraAxis; 3] = [CameraAxis::X, CameraAxis::Y, CameraAxis::Z];

    pub fn label(self) -> &'static str {
        match self {
            CameraAxis::X => "x",
            CameraAxis::Y => "y",
            CameraAxis::Z => "z",
        }
    }

    pub fn get(self, v: Vec3) -> f32 {
        match self {
            CameraAxis::X => v.x,
            CameraAxis::Y => v.y,
            CameraAxis::Z => v.z,
        }
    }

    pub fn with(self, mut v: Vec3, value: f32) -> Vec3 {
        match self {
            CameraAxis::X => v.x = value,
            CameraAxis::Y => v.y = value,
            CameraAxis::Z => v.z = value,
        }
        v
    }
}

/// Root of the camera position panel
#[derive(Component)]
pub struct CameraPanel;

/// `-`/`+` button moving the camera along one axis
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraNudgeButton {
    pub axis: CameraAxis,
    /// Signed number of panel steps per press
    pub steps: f32,
}

/// Text showing the camera coordinate on one axis
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraAxisReadout(pub CameraAxis);
