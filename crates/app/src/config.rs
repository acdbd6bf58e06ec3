//! Operator settings file.

use std::fmt;
use std::path::{Path, PathBuf};

use bevy::log::{info, warn};
use rider_control::RiderControlSettings;

/// Environment variable naming the JSON settings file.
pub const SETTINGS_ENV: &str = "SMART_TRAVELER_SETTINGS";

#[derive(Debug)]
pub enum SettingsError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid settings in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Missing keys keep their defaults.
pub fn parse_settings(path: &Path, json: &str) -> Result<RiderControlSettings, SettingsError> {
    serde_json::from_str(json).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_settings(path: &Path) -> Result<RiderControlSettings, SettingsError> {
    let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(path, &json)
}

/// Settings from `SMART_TRAVELER_SETTINGS`, or the defaults when the variable
/// is unset or the file is unusable.
pub fn load_settings() -> RiderControlSettings {
    let Some(path) = std::env::var_os(SETTINGS_ENV).map(PathBuf::from) else {
        return RiderControlSettings::default();
    };
    match read_settings(&path) {
        Ok(settings) => {
            info!("Loaded rider control settings from {}", path.display());
            settings
        }
        Err(err) => {
            warn!("{err}; using default rider control settings");
            RiderControlSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = parse_settings(Path::new("s.json"), r#"{"exempt_tourists": true}"#)
            .expect("valid settings");
        assert!(settings.exempt_tourists);
        assert!(settings.enabled);
        assert!(settings.neutralize_stand_demand);
    }

    #[test]
    fn test_bad_json_names_the_file() {
        let err = parse_settings(Path::new("broken.json"), "{ enabled: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = read_settings(Path::new("/nonexistent/smart-traveler.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
