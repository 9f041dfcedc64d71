//! Configuration management for triaged.
//!
//! Loads settings from /etc/triage/config.toml or uses defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use triage_common::UrgencyLevel;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/triage/config.toml";

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Intake behavior
    #[serde(default)]
    pub intake: IntakeConfig,
}

/// Intake orchestration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Resolve and record a staff assignment on submission
    #[serde(default = "default_auto_assign")]
    pub auto_assign: bool,

    /// Assign only when the complaint urgency ranks above this level
    #[serde(default = "default_assign_above")]
    pub assign_above: UrgencyLevel,
}

fn default_bind_addr() -> String {
    // Localhost only; the public gateway terminates external traffic
    "127.0.0.1:7870".to_string()
}

fn default_auto_assign() -> bool {
    true
}

fn default_assign_above() -> UrgencyLevel {
    UrgencyLevel::Low
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            intake: IntakeConfig::default(),
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            auto_assign: default_auto_assign(),
            assign_above: default_assign_above(),
        }
    }
}

impl DaemonConfig {
    /// Load from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    /// Load from an explicit path. Missing file means defaults; a file that
    /// fails to parse is reported and ignored.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_file_missing() {
        let config = DaemonConfig::load_from(Path::new("/nonexistent/triage.toml"));
        assert_eq!(config.bind_addr, "127.0.0.1:7870");
        assert!(config.intake.auto_assign);
        assert_eq!(config.intake.assign_above, UrgencyLevel::Low);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"0.0.0.0:9000\"").unwrap();

        let config = DaemonConfig::load_from(file.path());
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert!(config.intake.auto_assign);
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = [not toml").unwrap();

        let config = DaemonConfig::load_from(file.path());
        assert_eq!(config.bind_addr, "127.0.0.1:7870");
    }

    #[test]
    fn intake_section_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[intake]\nauto_assign = false\nassign_above = \"medium\"").unwrap();

        let config = DaemonConfig::load_from(file.path());
        assert!(!config.intake.auto_assign);
        assert_eq!(config.intake.assign_above, UrgencyLevel::Medium);
    }
}
