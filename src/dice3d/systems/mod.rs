//! Systems module for dice3d
//!
//! This module contains all the Bevy systems for the dice scene, organized
//! into submodules by functionality:
//!
//! - `setup`: Scene initialization (camera, lights, dice model, hint label)
//! - `camera`: Orbit camera controls
//! - `camera_panel`: Camera position buttons
//! - `dice`: Dice load tracking and roll animation
//! - `input`: Click-to-roll handling
//! - `audio`: Roll sound playback
//! - `hint`: Hint label placement and font fallback

mod audio;
mod camera;
mod camera_panel;
mod dice;
mod hint;
mod input;
mod setup;

// Re-export all public systems
pub use audio::{
    load_roll_sound, roll_sound_playing, RollSoundHandle, RollSoundInstance, RollSoundPlayer,
};
pub use camera::orbit_camera;
pub use camera_panel::{handle_camera_nudges, refresh_camera_readouts, spawn_camera_panel};
pub use dice::{advance_dice_roll, track_dice_load};
pub use hint::{fall_back_on_failed_font, position_hint_labels};
pub use input::handle_dice_click;
pub use setup::setup;
