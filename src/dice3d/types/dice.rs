//! Dice-related types and components
//!
//! This module contains the components marking the dice model and tracking
//! its asynchronous load.

use bevy::prelude::*;

/// Marker for the clickable dice.
///
/// Only inserted once the model has finished loading, so a query for `Dice`
/// finds nothing while the asset is still in flight.
#[derive(Component)]
pub struct Dice;

/// Load progress of the dice model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiceLoad {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Scene root spawned for the dice model at startup
#[derive(Component)]
pub struct DiceSceneRoot {
    pub scene: Handle<Scene>,
    pub load: DiceLoad,
}

impl DiceSceneRoot {
    pub fn new(scene: Handle<Scene>) -> Self {
        Self {
            scene,
            load: DiceLoad::Pending,
        }
    }

    /// True until the load either succeeded or failed.
    pub fn is_pending(&self) -> bool {
        self.load == DiceLoad::Pending
    }
}
