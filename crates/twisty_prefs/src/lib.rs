//! User preferences for the twisty cube engine.
//!
//! Defaults are embedded from `default.yaml`. A user file, if any, is layered
//! on top of them with the `config` crate, so it only needs to mention the
//! keys it changes.

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod interaction;
mod puzzle;

pub use animation::*;
pub use interaction::*;
pub use puzzle::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Preferences parsed from the embedded `default.yaml`.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).unwrap_or_default();
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Twist animation.
    pub animation: AnimationPreferences,
    /// Pointer gestures and hover feedback.
    pub interaction: InteractionPreferences,
    /// Puzzle size and cubie layout.
    pub puzzle: PuzzlePreferences,
}
impl Preferences {
    /// Loads preferences from `user_file` layered over the defaults. If
    /// loading fails, the error is logged and the default preferences are
    /// returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        let mut config = Self::default_config();
        if let Some(path) = user_file {
            log::debug!("Loading user preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        Self::build(config).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Parses preferences from a YAML string layered over the defaults.
    pub fn from_yaml_str(s: &str) -> eyre::Result<Self> {
        let config = Self::default_config().add_source(config::File::from_str(s, PREFS_FILE_FORMAT));
        Self::build(config)
    }

    /// Returns an error if any value is unusable.
    pub fn validate(&self) -> eyre::Result<()> {
        self.animation.validate()?;
        self.interaction.validate()?;
        self.puzzle.validate()?;
        Ok(())
    }

    fn default_config() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT))
    }

    fn build(config: config::ConfigBuilder<config::builder::DefaultState>) -> eyre::Result<Self> {
        let prefs: Self = config.build()?.try_deserialize()?;
        prefs.validate()?;
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs() {
        let prefs = &*DEFAULT_PREFS;
        assert_eq!(std::f32::consts::TAU, prefs.animation.twist_speed);
        assert_eq!(60.0, prefs.animation.assumed_fps);
        assert_eq!(6.0, prefs.interaction.drag_threshold);
        assert_eq!(
            DragResolverKind::CameraRelative,
            prefs.interaction.drag_resolver,
        );
        assert!(prefs.interaction.show_hover_highlight);
        assert_eq!(0.01, prefs.interaction.highlight_offset);
        assert_eq!(3, prefs.puzzle.layer_count);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_default_yaml_matches_default_impl() {
        assert_eq!(*DEFAULT_PREFS, Preferences::default());
    }

    #[test]
    fn test_partial_override() {
        let prefs = Preferences::from_yaml_str(
            "interaction:\n  drag_resolver: face_table\npuzzle:\n  layer_count: 5\n",
        )
        .unwrap();
        assert_eq!(DragResolverKind::FaceTable, prefs.interaction.drag_resolver);
        assert_eq!(5, prefs.puzzle.layer_count);
        // Untouched keys keep their defaults.
        assert_eq!(DEFAULT_PREFS.animation, prefs.animation);
        assert_eq!(DEFAULT_PREFS.puzzle.gap, prefs.puzzle.gap);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Preferences::from_yaml_str("puzzle:\n  layer_count: 12\n").is_err());
        assert!(Preferences::from_yaml_str("animation:\n  twist_speed: 0.0\n").is_err());
        assert!(Preferences::from_yaml_str("interaction:\n  drag_resolver: telepathy\n").is_err());
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let missing = std::env::temp_dir().join("twisty_prefs_missing_file.yaml");
        let _ = std::fs::remove_file(&missing);
        assert_eq!(*DEFAULT_PREFS, Preferences::load(Some(&missing)));
        assert_eq!(*DEFAULT_PREFS, Preferences::load(None));
    }

    #[test]
    fn test_load_user_file() {
        let path = std::env::temp_dir().join(format!(
            "twisty_prefs_test_{}.yaml",
            std::process::id(),
        ));
        std::fs::write(&path, "animation:\n  twist_speed: 3.0\n").unwrap();
        let prefs = Preferences::load(Some(&path));
        let _ = std::fs::remove_file(&path);
        assert_eq!(3.0, prefs.animation.twist_speed);
        assert_eq!(DEFAULT_PREFS.interaction, prefs.interaction);
    }
}
