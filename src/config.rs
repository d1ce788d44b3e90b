//! Configuration loading from pairbench.toml
//!
//! Repeat and iteration counts are configuration, not CLI flags. They live
//! in an optional `pairbench.toml` discovered by walking up from the
//! current directory; when the file is absent, built-in defaults apply
//! (5 trials of 5 invocations each).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// pairbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchConfig {
    /// Timing protocol configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Timing protocol: how many trials, and how many invocations per trial
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of independent timing trials per callable
    #[serde(default = "default_repeat")]
    pub repeat: u32,
    /// Invocations per trial; a trial's sample is the total elapsed time
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            repeat: default_repeat(),
            iterations: default_iterations(),
        }
    }
}

fn default_repeat() -> u32 {
    5
}
fn default_iterations() -> u32 {
    5
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for run artifacts, created if absent.
    ///
    /// Nothing is written to it yet; it is reserved for saved profiles.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> String {
    "profiles".to_string()
}

impl BenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("pairbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}
