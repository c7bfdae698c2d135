//! Dice systems
//!
//! Promotes the dice scene to a clickable target once its model is loaded and
//! advances the roll animation every frame.

use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::prelude::*;

use crate::dice3d::roll::{RollState, RollStep, SpinAngles};
use crate::dice3d::types::*;

/// Watch the dice model load.
///
/// On success the scene root becomes the `Dice` target; on failure the dice
/// stays inert and the failure is reported once.
pub fn track_dice_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut roots: Query<(Entity, &mut DiceSceneRoot, &Transform)>,
) {
    for (entity, mut root, transform) in roots.iter_mut() {
        if !root.is_pending() {
            continue;
        }

        if asset_server.is_loaded_with_dependencies(&root.scene) {
            commands
                .entity(entity)
                .insert((Dice, SpinAngles::from_rotation(transform.rotation)));
            root.load = DiceLoad::Ready;
            info!("Dice model loaded");
            continue;
        }

        let failed = matches!(asset_server.get_load_state(&root.scene), Some(LoadState::Failed(_)))
            || matches!(
                asset_server.get_recursive_dependency_load_state(&root.scene),
                Some(RecursiveDependencyLoadState::Failed(_))
            );
        if failed {
            let path = asset_server
                .get_path(&root.scene)
                .map(|p| p.to_string())
                .unwrap_or_else(|| "<unknown>".to_string());
            warn!("Dice model {} failed to load; the dice will not be clickable", path);
            root.load = DiceLoad::Failed;
        }
    }
}

/// Advance the roll by one frame and write the accumulated angles back to the
/// dice transform.
pub fn advance_dice_roll(
    time: Res<Time<Real>>,
    mut roll_state: ResMut<RollState>,
    mut dice_query: Query<(&mut SpinAngles, &mut Transform), With<Dice>>,
) {
    if !roll_state.rolling {
        return;
    }

    let Ok((mut angles, mut transform)) = dice_query.single_mut() else {
        return;
    };

    match roll_state.advance(time.elapsed(), &mut angles) {
        RollStep::Spinning { .. } => {
            transform.rotation = angles.to_rotation();
        }
        RollStep::Finished => {
            debug!("Roll finished at angles {:?}", angles.0);
        }
        RollStep::Idle => {}
    }
}
