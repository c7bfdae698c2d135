//! Camera control systems
//!
//! Left-drag orbits the camera around its target and the mouse wheel zooms;
//! both settle smoothly through the orbit damping.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::dice3d::types::*;

use super::camera_panel::pointer_over_panel;

/// Pixels of trackpad scrolling counted as one wheel step
const PIXELS_PER_WHEEL_STEP: f32 = 50.0;

/// System to feed mouse input into the orbit camera and apply its motion
pub fn orbit_camera(
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
    panel_buttons: Query<&Interaction, With<CameraNudgeButton>>,
) {
    // Presses on the camera panel do not orbit.
    let dragging = mouse.pressed(MouseButton::Left) && !pointer_over_panel(&panel_buttons);
    let viewport_height = windows.single().map(|w| w.height()).unwrap_or(0.0);

    for (mut orbit, mut transform) in camera_query.iter_mut() {
        if dragging && motion.delta != Vec2::ZERO {
            orbit.rotate_by_pixels(motion.delta, viewport_height);
        }

        if scroll.delta.y != 0.0 {
            let steps = match scroll.unit {
                MouseScrollUnit::Line => scroll.delta.y,
                MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_WHEEL_STEP,
            };
            orbit.zoom_by_wheel(steps);
        }

        if orbit.update() {
            *transform = orbit.transform();
        }
    }
}
