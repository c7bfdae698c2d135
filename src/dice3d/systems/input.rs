//! Input handling systems
//!
//! A left click is aimed through the camera at the dice meshes; a hit starts a
//! new roll and restarts the roll sound.

use bevy::audio::AudioSink;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::dice3d::picking::pointer_ray;
use crate::dice3d::roll::{handle_dice_hit, RollState};
use crate::dice3d::types::*;

use super::audio::{roll_sound_playing, RollSoundHandle, RollSoundInstance, RollSoundPlayer};
use super::camera_panel::pointer_over_panel;

/// True when `entity` is `root` or one of its descendants.
fn is_part_of(entity: Entity, root: Entity, parents: &Query<&ChildOf>) -> bool {
    let mut current = entity;
    loop {
        if current == root {
            return true;
        }
        match parents.get(current) {
            Ok(child_of) => current = child_of.parent(),
            Err(_) => return false,
        }
    }
}

/// Roll the dice when a click lands on it
#[allow(clippy::too_many_arguments)]
pub fn handle_dice_click(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    time: Res<Time<Real>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    dice_query: Query<Entity, With<Dice>>,
    parents: Query<&ChildOf>,
    mut ray_cast: MeshRayCast,
    mut roll_state: ResMut<RollState>,
    mut sound_player: ResMut<RollSoundPlayer>,
    sinks: Query<Option<&AudioSink>, With<RollSoundInstance>>,
    panel_buttons: Query<&Interaction, With<CameraNudgeButton>>,
) {
    if !mouse.just_released(MouseButton::Left) || pointer_over_panel(&panel_buttons) {
        return;
    }

    // Model still loading (or failed): nothing to click.
    let Ok(dice) = dice_query.single() else {
        return;
    };

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_position) = window.cursor_position() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(ray) = pointer_ray(camera, camera_transform, cursor_position) else {
        return;
    };

    let filter = |entity: Entity| is_part_of(entity, dice, &parents);
    let settings = MeshRayCastSettings::default().with_filter(&filter);
    if ray_cast.cast_ray(ray, &settings).is_empty() {
        return;
    }

    let playing = roll_sound_playing(&sound_player, &sinks);
    let mut sound = RollSoundHandle::new(&mut commands, &mut sound_player, playing);
    handle_dice_hit(
        &mut roll_state,
        time.elapsed(),
        &mut rand::thread_rng(),
        &mut sound,
    );

    info!(
        "Dice rolled with angular velocity {:?}",
        roll_state.angular_velocity
    );
}
