//! Type definitions for the dice scene
//!
//! This module is organized into submodules:
//! - `dice` - Dice marker and model load tracking
//! - `camera` - Main camera marker and orbit state
//! - `settings` - Scene configuration and loading
//! - `ui` - Hint label component

pub mod camera;
pub mod dice;
pub mod settings;
pub mod ui;

// Re-export all public types for convenient access
pub use camera::*;
pub use dice::*;
pub use settings::*;
pub use ui::*;
