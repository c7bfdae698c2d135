//! Hint label placement.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::dice3d::types::*;

/// Keep each hint label centred under the screen projection of its anchor.
pub fn position_hint_labels(
    camera_query: Query<(&Camera, &Transform), With<MainCamera>>,
    mut labels: Query<(&HintLabel, &ComputedNode, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    // The camera is a root entity, so its local transform is already global.
    // Using it avoids lagging a frame behind the orbit update.
    let camera_global = GlobalTransform::from(*camera_transform);

    for (label, computed, mut node, mut visibility) in labels.iter_mut() {
        let Ok(screen) = camera.world_to_viewport(&camera_global, label.anchor) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let half_width = computed.size().x * computed.inverse_scale_factor() * 0.5;
        node.left = Val::Px(screen.x - half_width);
        node.top = Val::Px(screen.y);
        *visibility = Visibility::Inherited;
    }
}

/// Swap a hint font that failed to load for the built-in one.
///
/// Text with a failed font is never laid out, so without this the label would
/// stay invisible.
pub fn fall_back_on_failed_font(
    asset_server: Res<AssetServer>,
    mut labels: Query<&mut TextFont, With<HintLabel>>,
) {
    for mut font in labels.iter_mut() {
        if font.font == Handle::default() {
            continue;
        }
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(&font.font) {
            warn!("Hint font failed to load ({}); using the built-in font", err);
            font.font = Handle::default();
        }
    }
}
