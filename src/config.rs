use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Playback settings, kept compatible with hand-edited files via per-field
/// defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_speed_wpm")]
    pub speed_wpm: u32,
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: u32,
    #[serde(default = "default_replay_delay_ms")]
    pub replay_delay_ms: u64,
    #[serde(default = "default_max_repeats")]
    pub max_repeats: u32,
}

fn default_speed_wpm() -> u32 {
    30
}
fn default_frequency_hz() -> u32 {
    500
}
fn default_replay_delay_ms() -> u64 {
    2000
}
fn default_max_repeats() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_wpm: default_speed_wpm(),
            frequency_hz: default_frequency_hz(),
            replay_delay_ms: default_replay_delay_ms(),
            max_repeats: default_max_repeats(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cwdr")
            .join("config.toml")
    }

    /// Clamp out-of-range values from hand-edited configs or CLI overrides.
    pub fn validate(&mut self) {
        self.speed_wpm = self.speed_wpm.clamp(5, 60);
        self.frequency_hz = self.frequency_hz.clamp(200, 1200);
        self.replay_delay_ms = self.replay_delay_ms.min(10_000);
        self.max_repeats = self.max_repeats.clamp(1, 20);
    }
}
