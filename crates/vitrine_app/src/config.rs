//! Vitrine configuration file handling (vitrine.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Frame loop settings.
#[derive(Debug, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Logical milliseconds between frames.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Number of frames a headless run executes.
    #[serde(default = "default_max_frames")]
    pub max_frames: u32,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_max_frames() -> u32 {
    600
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            max_frames: default_max_frames(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Deserialize, Serialize)]
pub struct LogConfig {
    /// Env-filter style directive, e.g. "info" or "vitrine_theme=debug".
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Scripted input for headless runs.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub steps: Vec<DemoStep>,
}

/// One scripted input, applied once the run reaches `at_ms`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct DemoStep {
    pub at_ms: u64,
    pub action: DemoAction,
}

/// Scriptable page actions.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemoAction {
    SelectLeft,
    SelectRight,
    Reset,
    NavInicio,
    NavSobre,
    NavTrailer,
    TrailerPrev,
    TrailerNext,
}

impl VitrineConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let config: VitrineConfig = toml::from_str(&raw)
            .with_context(|| format!("parsing config at {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: VitrineConfig = toml::from_str("").unwrap();
        assert_eq!(config.engine.tick_ms, 16);
        assert_eq!(config.engine.max_frames, 600);
        assert_eq!(config.log.filter, "info");
        assert!(config.demo.steps.is_empty());
    }

    #[test]
    fn demo_steps_parse() {
        let config: VitrineConfig = toml::from_str(
            r#"
            [engine]
            tick_ms = 10

            [[demo.steps]]
            at_ms = 500
            action = "select_left"

            [[demo.steps]]
            at_ms = 2000
            action = "reset"
            "#,
        )
        .unwrap();

        assert_eq!(config.engine.tick_ms, 10);
        assert_eq!(config.demo.steps.len(), 2);
        assert_eq!(config.demo.steps[0].action, DemoAction::SelectLeft);
        assert_eq!(config.demo.steps[1].at_ms, 2000);
    }
}
