// src/config.rs

//! Defines the configuration structures for `embers`.
//!
//! The structs are serde-deserializable so the settings could be read from a
//! configuration file, but the binary currently runs entirely on the defaults
//! below, which match the original toy: a quarter of the screen colored, and
//! an 80% chance per pass that a red ember fades.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Global configuration, initialized once with the defaults.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Represents the complete configuration for the animation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Probabilities driving the fill and fade passes.
    pub animation: AnimationConfig,
    /// Text shown to the user.
    pub ui: UiConfig,
}

/// Probabilities driving the fill and fade passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Probability that the fill pass colors a given cell at all.
    pub density: f64,
    /// Probability that one fade pass turns a given red cell yellow.
    ///
    /// Named for what it does: this is the chance to *leave* the red state
    /// in one pass, so higher values fade the screen faster.
    pub fade_chance: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            density: 0.25,
            fade_chance: 0.8,
        }
    }
}

/// Text shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Status line drawn under the grid between fade passes.
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: "Press enter to fade".to_string(),
        }
    }
}
