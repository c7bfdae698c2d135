//! Scene configuration types and loading
//!
//! The scene is described by a RON file. Every field has a default, so a config
//! file only needs to list what it changes.

use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dice3d::roll::{MAX_SPIN_SPEED, ROLL_DURATION};

/// Default config file looked up next to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "dicespin.ron";

/// Largest accepted spin bound; keeps the sampling range finite.
pub const SPIN_SPEED_LIMIT: f32 = 1.0e6;

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Dice Spin".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Fraction of the orbit velocity removed each frame
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [-9.0, 3.0, 0.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            damping_factor: 0.05,
            min_distance: 2.0,
            max_distance: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    pub ambient_color: String,
    pub ambient_brightness: f32,
    pub directional_color: String,
    /// Lux
    pub directional_illuminance: f32,
    pub directional_position: [f32; 3],
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            ambient_color: "#ffffff".to_string(),
            ambient_brightness: 600.0,
            directional_color: "#ffffff".to_string(),
            directional_illuminance: 8000.0,
            directional_position: [-10.0, 5.0, 3.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceSettings {
    /// glTF model path, relative to the asset folder
    pub model_path: String,
    pub scale: f32,
    pub roll_duration_ms: u64,
    /// Per-axis spin speed bound, radians per frame
    pub max_spin_speed: f32,
}

impl Default for DiceSettings {
    fn default() -> Self {
        Self {
            model_path: "models/dice_4k.glb".to_string(),
            scale: 100.0,
            roll_duration_ms: ROLL_DURATION.as_millis() as u64,
            max_spin_speed: MAX_SPIN_SPEED,
        }
    }
}

impl DiceSettings {
    pub fn roll_duration(&self) -> Duration {
        Duration::from_millis(self.roll_duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    pub enabled: bool,
    pub path: String,
    /// Linear volume, 0.0 to 1.0
    pub volume: f32,
    pub playback_rate: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "sounds/dice-roll.mp3".to_string(),
            volume: 0.7,
            playback_rate: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintSettings {
    pub text: String,
    /// Optional font file; the built-in font is used when unset
    pub font_path: Option<String>,
    pub font_size: f32,
    pub color: String,
    /// World-space point the label hangs from
    pub anchor: [f32; 3],
}

impl Default for HintSettings {
    fn default() -> Self {
        Self {
            text: "Click on dice to roll".to_string(),
            font_path: None,
            font_size: 32.0,
            color: "#ffffff".to_string(),
            anchor: [0.0, -2.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPanelSettings {
    /// Show the camera position panel
    pub enabled: bool,
    pub min: f32,
    pub max: f32,
    /// Increment of one button press
    pub step: f32,
}

impl Default for CameraPanelSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min: -10.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl CameraPanelSettings {
    /// Move `value` by `steps` increments, snapped to the step grid and kept
    /// inside the panel range.
    pub fn nudge(&self, value: f32, steps: f32) -> f32 {
        let moved = value + steps * self.step;
        ((moved / self.step).round() * self.step).clamp(self.min, self.max)
    }
}

// ============================================================================
// Scene config
// ============================================================================

/// Complete scene configuration, inserted as a resource at startup
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub lights: LightSettings,
    pub dice: DiceSettings,
    pub sound: SoundSettings,
    pub hint: HintSettings,
    pub camera_panel: CameraPanelSettings,
}

impl SceneConfig {
    /// Parse a config from RON text.
    pub fn from_ron(text: &str) -> Result<Self, String> {
        let config: Self =
            ron::from_str(text).map_err(|e| format!("Failed to parse scene config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    ///
    /// A missing file is only acceptable when `required` is false, in which case
    /// the defaults are used.
    pub fn load_from_file(path: &Path, required: bool) -> Result<Self, String> {
        if !path.exists() && !required {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene config {:?}: {}", path, e))?;
        Self::from_ron(&text).map_err(|e| format!("{} ({:?})", e, path))
    }

    pub fn to_ron(&self) -> Result<String, String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("Failed to serialize scene config: {}", e))
    }

    /// Reject values the scene cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.dice.roll_duration_ms == 0 {
            return Err("dice.roll_duration_ms must be greater than zero".to_string());
        }
        if !(0.0..=SPIN_SPEED_LIMIT).contains(&self.dice.max_spin_speed) {
            return Err(format!(
                "dice.max_spin_speed must be within 0..={}, got {}",
                SPIN_SPEED_LIMIT, self.dice.max_spin_speed
            ));
        }
        if !(self.dice.scale > 0.0) {
            return Err(format!("dice.scale must be positive, got {}", self.dice.scale));
        }

        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(format!(
                "camera.fov_degrees must be between 0 and 180, got {}",
                cam.fov_degrees
            ));
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(format!(
                "camera clipping planes must satisfy 0 < near < far, got near={} far={}",
                cam.near, cam.far
            ));
        }
        if !(cam.min_distance > 0.0 && cam.max_distance >= cam.min_distance) {
            return Err(format!(
                "camera distance limits must satisfy 0 < min <= max, got min={} max={}",
                cam.min_distance, cam.max_distance
            ));
        }
        if !(0.0..=1.0).contains(&cam.damping_factor) {
            return Err(format!(
                "camera.damping_factor must be within 0..=1, got {}",
                cam.damping_factor
            ));
        }

        if !(0.0..=1.0).contains(&self.sound.volume) {
            return Err(format!(
                "sound.volume must be within 0..=1, got {}",
                self.sound.volume
            ));
        }
        if !(self.sound.playback_rate > 0.0) {
            return Err(format!(
                "sound.playback_rate must be positive, got {}",
                self.sound.playback_rate
            ));
        }

        let panel = &self.camera_panel;
        if !(panel.step > 0.0 && panel.min <= panel.max) {
            return Err(format!(
                "camera_panel needs step > 0 and min <= max, got step={} min={} max={}",
                panel.step, panel.min, panel.max
            ));
        }

        parse_color(&self.lights.ambient_color)?;
        parse_color(&self.lights.directional_color)?;
        parse_color(&self.hint.color)?;

        Ok(())
    }
}

/// Parse a CSS color string ("#ffffff", "white", "rgb(...)").
pub fn parse_color(text: &str) -> Result<Color, String> {
    let c = csscolorparser::parse(text).map_err(|e| format!("Invalid color '{}': {}", text, e))?;
    Ok(Color::srgba(c.r, c.g, c.b, c.a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene_constants() {
        let config = SceneConfig::default();
        assert_eq!(config.camera.position, [-9.0, 3.0, 0.0]);
        assert_eq!(config.camera.fov_degrees, 75.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.lights.directional_position, [-10.0, 5.0, 3.0]);
        assert_eq!(config.dice.scale, 100.0);
        assert_eq!(config.dice.roll_duration(), Duration::from_millis(2000));
        assert_eq!(config.dice.max_spin_speed, 0.25);
        assert_eq!(config.sound.volume, 0.7);
        assert_eq!(config.hint.text, "Click on dice to roll");
        assert_eq!(config.hint.anchor, [0.0, -2.0, 0.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SceneConfig::from_ron("(dice: (roll_duration_ms: 1500))").unwrap();
        assert_eq!(config.dice.roll_duration_ms, 1500);
        assert_eq!(config.dice.scale, 100.0);
        assert_eq!(config.camera, CameraSettings::default());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = SceneConfig::from_ron("(dice: (roll_duration_ms: 0))").unwrap_err();
        assert!(err.contains("roll_duration_ms"));
    }

    #[test]
    fn test_negative_spin_rejected() {
        let err = SceneConfig::from_ron("(dice: (max_spin_speed: -1.0))").unwrap_err();
        assert!(err.contains("max_spin_speed"));
    }

    #[test]
    fn test_huge_spin_rejected() {
        let err = SceneConfig::from_ron("(dice: (max_spin_speed: 3.0e38))").unwrap_err();
        assert!(err.contains("max_spin_speed"));

        assert!(SceneConfig::from_ron("(dice: (max_spin_speed: 1.0e6))").is_ok());
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = SceneConfig::from_ron("(hint: (color: \"not-a-color\"))").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_bad_clipping_planes_rejected() {
        assert!(SceneConfig::from_ron("(camera: (near: 10.0, far: 1.0))").is_err());
    }

    #[test]
    fn test_syntax_error_reported() {
        let err = SceneConfig::from_ron("(dice: ").unwrap_err();
        assert!(err.starts_with("Failed to parse scene config"));
    }

    #[test]
    fn test_round_trip_through_ron() {
        let mut config = SceneConfig::default();
        config.hint.font_path = Some("fonts/raleway.ttf".to_string());
        let text = config.to_ron().unwrap();
        assert_eq!(SceneConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_camera_panel_nudge_snaps_and_clamps() {
        let panel = CameraPanelSettings::default();
        assert_eq!(panel.nudge(-9.0, 1.0), -8.0);
        assert_eq!(panel.nudge(3.4, -1.0), 2.0);
        assert_eq!(panel.nudge(-10.0, -1.0), -10.0);
        assert_eq!(panel.nudge(100.0, 1.0), 100.0);
        // Out-of-range start values are pulled back in.
        assert_eq!(panel.nudge(-40.0, 1.0), -10.0);
    }

    #[test]
    fn test_camera_panel_zero_step_rejected() {
        let err = SceneConfig::from_ron("(camera_panel: (step: 0.0))").unwrap_err();
        assert!(err.contains("camera_panel"));
    }

    #[test]
    fn test_parse_color_hex() {
        let color = parse_color("#ff0000").unwrap().to_srgba();
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert_eq!(color.alpha, 1.0);
    }
}
