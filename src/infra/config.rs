// src/infra/config.rs — Configuration (TOML)
//
// Defaults for the knobs the operations expose: equality mode for dynamic
// values, throttle edges and window, memoize cache warning size, and an
// optional shuffle seed. Parsed from a TOML string; the library itself never
// touches the filesystem.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infra::errors::{Result, UnderbarError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub equality: EqualityConfig,

    #[serde(default)]
    pub throttle: ThrottleConfig,

    #[serde(default)]
    pub memoize: MemoizeConfig,

    #[serde(default)]
    pub shuffle: ShuffleConfig,
}

/// How dynamic values are compared by `index_of_value` and `uniq_value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EqualityMode {
    /// Structural equality, no coercion.
    #[default]
    Strict,
    /// Host-style `==`: numbers, numeric strings and booleans coerce.
    Loose,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EqualityConfig {
    #[serde(default)]
    pub mode: EqualityMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrottleConfig {
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,
    #[serde(default = "default_true")]
    pub leading: bool,
    #[serde(default = "default_true")]
    pub trailing: bool,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            wait_ms: default_wait_ms(),
            leading: true,
            trailing: true,
        }
    }
}

impl ThrottleConfig {
    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoizeConfig {
    /// Log a warning once a cache grows past this many entries (0 = never).
    #[serde(default = "default_warn_entries")]
    pub warn_entries: usize,
}

impl Default for MemoizeConfig {
    fn default() -> Self {
        Self {
            warn_entries: default_warn_entries(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShuffleConfig {
    pub seed: Option<u64>,
}

fn default_wait_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_warn_entries() -> usize {
    10_000
}

impl Config {
    /// Parse and validate a TOML document. Missing sections take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.throttle.wait_ms == 0 {
            return Err(UnderbarError::Config(
                "throttle.wait_ms must be greater than zero".into(),
            ));
        }
        if !self.throttle.leading && !self.throttle.trailing {
            return Err(UnderbarError::Config(
                "throttle needs at least one of leading or trailing enabled".into(),
            ));
        }
        Ok(())
    }
}
