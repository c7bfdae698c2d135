pub mod picking;
pub mod roll;
pub mod systems;
pub mod types;

pub use picking::*;
pub use roll::*;
pub use systems::*;
pub use types::*;

use bevy::prelude::*;

/// Registers the dice scene: resources, startup setup and per-frame systems.
pub struct DiceScenePlugin {
    pub config: SceneConfig,
}

impl Plugin for DiceScenePlugin {
    fn build(&self, app: &mut App) {
        let dice = &self.config.dice;

        app.insert_resource(self.config.clone())
            .insert_resource(RollState::new(dice.roll_duration(), dice.max_spin_speed))
            .init_resource::<RollSoundPlayer>()
            .add_systems(Startup, (setup, load_roll_sound, spawn_camera_panel).chain())
            .add_systems(
                Update,
                (
                    track_dice_load,
                    // Clicks land before the frame's roll step.
                    handle_dice_click,
                    advance_dice_roll,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    handle_camera_nudges,
                    orbit_camera,
                    refresh_camera_readouts,
                    position_hint_labels,
                )
                    .chain(),
            )
            .add_systems(Update, fall_back_on_failed_font);
    }
}
