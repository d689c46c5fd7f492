//! TOML scenario files for the headless driver.
//!
//! Every entry is optional; command-line flags win over scenario entries,
//! and built-in defaults cover whatever both leave unset.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use kaiju_core::GameMode;
use serde::Deserialize;

/// Round setup loaded from a scenario file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Scenario {
    /// Player configuration for the round.
    pub(crate) mode: Option<ScenarioMode>,
    /// Master seed for the world and AI sub-generators.
    pub(crate) seed: Option<u64>,
    /// Number of ticks to simulate.
    pub(crate) ticks: Option<u64>,
    /// Playfield bounds overriding the 800x700 default.
    pub(crate) viewport: Option<ViewportConfig>,
}

impl Scenario {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse scenario file {}", path.display()))
    }
}

/// Game mode spelled the way scenario files spell it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ScenarioMode {
    Solo,
    VersusAi,
    TwoPlayer,
}

impl From<ScenarioMode> for GameMode {
    fn from(mode: ScenarioMode) -> Self {
        match mode {
            ScenarioMode::Solo => Self::Solo,
            ScenarioMode::VersusAi => Self::VersusAi,
            ScenarioMode::TwoPlayer => Self::TwoPlayer,
        }
    }
}

/// Playfield bounds from a scenario file.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ViewportConfig {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

#[cfg(test)]
mod tests {
    use super::{Scenario, ScenarioMode, ViewportConfig};

    #[test]
    fn full_scenario_parses() {
        let scenario: Scenario = toml::from_str(
            r#"
            mode = "versus-ai"
            seed = 42
            ticks = 600

            [viewport]
            width = 1024.0
            height = 768.0
            "#,
        )
        .expect("scenario parses");

        assert_eq!(scenario.mode, Some(ScenarioMode::VersusAi));
        assert_eq!(scenario.seed, Some(42));
        assert_eq!(scenario.ticks, Some(600));
        assert_eq!(
            scenario.viewport,
            Some(ViewportConfig {
                width: 1024.0,
                height: 768.0,
            })
        );
    }

    #[test]
    fn empty_scenario_leaves_every_entry_unset() {
        let scenario: Scenario = toml::from_str("").expect("empty scenario parses");
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn unknown_entries_are_rejected() {
        let result: Result<Scenario, _> = toml::from_str("gravity = 9.8");
        assert!(result.is_err());
    }
}
