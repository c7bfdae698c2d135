//! Roll sound playback.
//!
//! Each play spawns a despawn-on-finish `AudioPlayer` entity; restarting the
//! roll despawns the previous one first so rolls never layer their sounds.

use bevy::audio::{AudioPlayer, AudioSink, AudioSinkPlayback, AudioSource, PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::dice3d::roll::RollSound;
use crate::dice3d::types::SceneConfig;

/// Marker for the entity playing the roll sound
#[derive(Component)]
pub struct RollSoundInstance;

/// Resource holding the roll sound and the entity currently playing it
#[derive(Resource, Default)]
pub struct RollSoundPlayer {
    /// `None` when the sound is muted
    pub source: Option<Handle<AudioSource>>,
    pub volume: f32,
    pub speed: f32,
    pub current: Option<Entity>,
}

pub fn load_roll_sound(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let sound = &config.sound;
    let source = if sound.enabled {
        Some(asset_server.load(sound.path.clone()))
    } else {
        info!("Roll sound muted");
        None
    };

    commands.insert_resource(RollSoundPlayer {
        source,
        volume: sound.volume,
        speed: sound.playback_rate,
        current: None,
    });
}

/// Whether the tracked roll sound entity is still playing.
///
/// An entity whose sink has not been created yet counts as playing; an entity
/// that despawned after finishing does not.
pub fn roll_sound_playing(
    player: &RollSoundPlayer,
    sinks: &Query<Option<&AudioSink>, With<RollSoundInstance>>,
) -> bool {
    let Some(entity) = player.current else {
        return false;
    };

    match sinks.get(entity) {
        Ok(Some(sink)) => !sink.is_paused() && !sink.empty(),
        Ok(None) => true,
        Err(_) => false,
    }
}

/// `RollSound` over Bevy audio entities, valid for one system run
pub struct RollSoundHandle<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    player: &'a mut RollSoundPlayer,
    playing: bool,
}

impl<'a, 'w, 's> RollSoundHandle<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, player: &'a mut RollSoundPlayer, playing: bool) -> Self {
        Self {
            commands,
            player,
            playing,
        }
    }
}

impl RollSound for RollSoundHandle<'_, '_, '_> {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn stop(&mut self) {
        if let Some(entity) = self.player.current.take() {
            self.commands.entity(entity).despawn();
        }
        self.playing = false;
    }

    fn play(&mut self) {
        let Some(source) = self.player.source.clone() else {
            return;
        };

        let entity = self
            .commands
            .spawn((
                AudioPlayer(source),
                PlaybackSettings::DESPAWN
                    .with_volume(Volume::Linear(self.player.volume))
                    .with_speed(self.player.speed),
                RollSoundInstance,
            ))
            .id();

        self.player.current = Some(entity);
        self.playing = true;
    }
}
