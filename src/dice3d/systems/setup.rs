//! Scene setup system
//!
//! This module contains the setup function that initializes the 3D scene:
//! camera, lights, the dice model and the hint label.

use bevy::prelude::*;

use crate::dice3d::types::*;

/// Main setup system - initializes the entire 3D scene
pub fn setup(mut commands: Commands, asset_server: Res<AssetServer>, config: Res<SceneConfig>) {
    let cam = &config.camera;
    let lights = &config.lights;

    // Camera, orbiting the configured target
    let orbit = OrbitCamera::from_position(Vec3::from(cam.position), Vec3::from(cam.target))
        .with_limits(cam.min_distance, cam.max_distance)
        .with_damping(cam.damping_factor);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: cam.fov_degrees.to_radians(),
            near: cam.near,
            far: cam.far,
            ..default()
        }),
        orbit.transform(),
        AmbientLight {
            color: parse_color(&lights.ambient_color).unwrap_or(Color::WHITE),
            brightness: lights.ambient_brightness,
            ..default()
        },
        orbit,
        MainCamera,
    ));

    // Light
    commands.spawn((
        DirectionalLight {
            color: parse_color(&lights.directional_color).unwrap_or(Color::WHITE),
            illuminance: lights.directional_illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::from(lights.directional_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Dice model; becomes clickable once loaded (see `track_dice_load`)
    let dice_scene: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(config.dice.model_path.clone()));
    commands.spawn((
        SceneRoot(dice_scene.clone()),
        Transform::from_scale(Vec3::splat(config.dice.scale)),
        DiceSceneRoot::new(dice_scene),
        Name::new("Dice"),
    ));
    info!("Loading dice model {}", config.dice.model_path);

    // Hint label, positioned every frame by `position_hint_labels`
    let hint = &config.hint;
    let mut font = TextFont::from_font_size(hint.font_size);
    if let Some(path) = &hint.font_path {
        font.font = asset_server.load(path.clone());
    }
    commands.spawn((
        Text::new(hint.text.clone()),
        font,
        TextColor(parse_color(&hint.color).unwrap_or(Color::WHITE)),
        Node {
            position_type: PositionType::Absolute,
            ..default()
        },
        Visibility::Hidden,
        HintLabel {
            anchor: Vec3::from(hint.anchor),
        },
    ));
}
