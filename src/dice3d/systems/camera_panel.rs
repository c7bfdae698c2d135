//! Camera position panel
//!
//! A small panel in the top-right corner with `-`/`+` buttons per world axis.
//! Each press moves the camera one step; the readouts follow the camera while
//! it orbits.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::dice3d::types::*;

const PANEL_BG: Color = Color::srgba(0.08, 0.08, 0.1, 0.85);
const BUTTON_BG: Color = Color::srgb(0.2, 0.2, 0.25);
const BUTTON_HOVER_BG: Color = Color::srgb(0.3, 0.3, 0.38);
const BUTTON_PRESSED_BG: Color = Color::srgb(0.4, 0.5, 0.7);
const PANEL_FONT_SIZE: f32 = 16.0;

fn readout_text(value: f32) -> String {
    format!("{:.1}", value)
}

/// Spawn the panel, unless it is disabled in the config
pub fn spawn_camera_panel(mut commands: Commands, config: Res<SceneConfig>) {
    if !config.camera_panel.enabled {
        return;
    }

    let position = Vec3::from(config.camera.position);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                right: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            CameraPanel,
        ))
        .with_children(|panel| {
            for axis in CameraAxis::ALL {
                panel
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(6.0),
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            Text::new(axis.label()),
                            TextFont::from_font_size(PANEL_FONT_SIZE),
                            Node {
                                width: Val::Px(14.0),
                                ..default()
                            },
                        ));
                        spawn_nudge_button(row, axis, -1.0, "-");
                        row.spawn((
                            Text::new(readout_text(axis.get(position))),
                            TextFont::from_font_size(PANEL_FONT_SIZE),
                            Node {
                                width: Val::Px(56.0),
                                justify_content: JustifyContent::Center,
                                ..default()
                            },
                            CameraAxisReadout(axis),
                        ));
                        spawn_nudge_button(row, axis, 1.0, "+");
                    });
            }
        });
}

fn spawn_nudge_button(row: &mut ChildSpawnerCommands, axis: CameraAxis, steps: f32, label: &str) {
    row.spawn((
        Button,
        Node {
            width: Val::Px(24.0),
            height: Val::Px(24.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(BUTTON_BG),
        CameraNudgeButton { axis, steps },
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new(label),
            TextFont::from_font_size(PANEL_FONT_SIZE),
        ));
    });
}

/// Move the camera when a panel button is pressed
pub fn handle_camera_nudges(
    config: Res<SceneConfig>,
    mut buttons: Query<
        (&Interaction, &CameraNudgeButton, &mut BackgroundColor),
        Changed<Interaction>,
    >,
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    for (interaction, button, mut bg) in buttons.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(BUTTON_PRESSED_BG);

                for (mut orbit, mut transform) in camera_query.iter_mut() {
                    let current = orbit.position();
                    let value = config
                        .camera_panel
                        .nudge(button.axis.get(current), button.steps);
                    orbit.set_position(button.axis.with(current, value));
                    *transform = orbit.transform();
                    debug!("Camera moved to {:?}", transform.translation);
                }
            }
            Interaction::Hovered => {
                *bg = BackgroundColor(BUTTON_HOVER_BG);
            }
            Interaction::None => {
                *bg = BackgroundColor(BUTTON_BG);
            }
        }
    }
}

/// Keep the readouts in sync with the camera position
pub fn refresh_camera_readouts(
    camera_query: Query<&Transform, (With<MainCamera>, Changed<Transform>)>,
    mut readouts: Query<(&CameraAxisReadout, &mut Text)>,
) {
    let Ok(transform) = camera_query.single() else {
        return;
    };

    for (readout, mut text) in readouts.iter_mut() {
        let value = readout_text(readout.0.get(transform.translation));
        if text.0 != value {
            text.0 = value;
        }
    }
}

/// True while the pointer is over (or pressing) a panel button
pub(super) fn pointer_over_panel(buttons: &Query<&Interaction, With<CameraNudgeButton>>) -> bool {
    buttons.iter().any(|i| *i != Interaction::None)
}
