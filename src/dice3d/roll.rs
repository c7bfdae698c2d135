//! Click-to-roll animation controller
//!
//! A roll starts when a click ray hits the dice. The dice then spins with a
//! per-axis angular velocity that decays with a quadratic ease-out until the
//! roll duration elapses. Nothing snaps the dice to a final face: it stops at
//! whatever orientation the last eased frame left it in, so the resting pose
//! depends on frame timing.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

/// Default length of one roll
pub const ROLL_DURATION: Duration = Duration::from_millis(2000);

/// Default bound for the per-axis spin speed (radians per frame)
pub const MAX_SPIN_SPEED: f32 = 0.25;

/// Quadratic ease-out multiplier: 1 at the start of a roll, 0 at its end.
pub fn easing(progress: f32) -> f32 {
    1.0 - progress * progress
}

/// Accumulated Euler angles (XYZ) of the dice.
///
/// Frame increments are added here and never wrapped, then the transform
/// rotation is rebuilt from the angles.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinAngles(pub Vec3);

impl SpinAngles {
    pub fn from_rotation(rotation: Quat) -> Self {
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        Self(Vec3::new(x, y, z))
    }

    pub fn to_rotation(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.0.x, self.0.y, self.0.z)
    }
}

/// What one `advance` call did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RollStep {
    /// No roll in progress; nothing touched.
    Idle,
    /// Rotation was incremented with this easing factor.
    Spinning { easing: f32 },
    /// The roll duration elapsed; the roll ended without a final increment.
    Finished,
}

/// Resource tracking the current roll
#[derive(Resource, Debug, Clone)]
pub struct RollState {
    pub rolling: bool,
    /// Clock reading when the current roll began
    pub started_at: Option<Duration>,
    /// Per-axis spin speed sampled at roll start
    pub angular_velocity: Vec3,
    pub duration: Duration,
    pub max_spin_speed: f32,
}

impl Default for RollState {
    fn default() -> Self {
        Self::new(ROLL_DURATION, MAX_SPIN_SPEED)
    }
}

impl RollState {
    pub fn new(duration: Duration, max_spin_speed: f32) -> Self {
        Self {
            rolling: false,
            started_at: None,
            angular_velocity: Vec3::ZERO,
            duration,
            max_spin_speed,
        }
    }

    /// Start (or restart) a roll at `now` with a freshly sampled velocity.
    ///
    /// A roll already in flight is discarded, not blended.
    pub fn start(&mut self, now: Duration, rng: &mut impl Rng) {
        let max = self.max_spin_speed;
        self.rolling = true;
        self.started_at = Some(now);
        self.angular_velocity = Vec3::new(
            rng.gen_range(-max..=max),
            rng.gen_range(-max..=max),
            rng.gen_range(-max..=max),
        );
    }

    /// Elapsed time over roll duration, `None` when no roll is in progress.
    pub fn progress(&self, now: Duration) -> Option<f32> {
        if !self.rolling {
            return None;
        }
        let started_at = self.started_at?;
        let elapsed = now.saturating_sub(started_at);
        Some(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Advance the roll by one frame, adding the eased velocity to `angles`.
    pub fn advance(&mut self, now: Duration, angles: &mut SpinAngles) -> RollStep {
        let Some(progress) = self.progress(now) else {
            return RollStep::Idle;
        };

        if progress < 1.0 {
            let easing = easing(progress);
            angles.0 += self.angular_velocity * easing;
            RollStep::Spinning { easing }
        } else {
            self.rolling = false;
            RollStep::Finished
        }
    }
}

/// Playback handle for the roll sound
pub trait RollSound {
    fn is_playing(&self) -> bool;
    fn stop(&mut self);
    fn play(&mut self);
}

/// Restart the roll sound from the beginning instead of layering a second copy.
pub fn restart_sound(sound: &mut impl RollSound) {
    if sound.is_playing() {
        sound.stop();
    }
    sound.play();
}

/// A click ray hit the dice: start a new roll and restart its sound.
pub fn handle_dice_hit(
    state: &mut RollState,
    now: Duration,
    rng: &mut impl Rng,
    sound: &mut impl RollSound,
) {
    state.start(now, rng);
    restart_sound(sound);
}
