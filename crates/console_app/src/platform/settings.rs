//! Optional `prediction_console.ron` in the working directory.
//!
//! The file is only ever read. A missing file means defaults.

use std::fs;
use std::io;
use std::path::Path;

use console_engine::ClientSettings;
use serde::Deserialize;
use thiserror::Error;

pub(crate) const SETTINGS_FILENAME: &str = "prediction_console.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ConsoleSettings {
    pub base_url: String,
    pub log_level: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            base_url: ClientSettings::default().base_url.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ConsoleSettings {
    pub fn client_settings(&self) -> Result<ClientSettings, SettingsError> {
        ClientSettings::new(&self.base_url)
            .map_err(|err| SettingsError::InvalidUrl(err.message))
    }
}

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(String),
    #[error("base_url rejected: {0}")]
    InvalidUrl(String),
}

/// Reads `{dir}/prediction_console.ron`. `Ok(None)` when the file does not exist.
pub(crate) fn load(dir: &Path) -> Result<Option<ConsoleSettings>, SettingsError> {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| SettingsError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(dir: &Path, content: &str) {
        fs::write(dir.join(SETTINGS_FILENAME), content).unwrap();
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(dir.path()).unwrap(), None);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), r#"(base_url: "http://models.internal:9000/")"#);

        let settings = load(dir.path()).unwrap().expect("settings present");
        assert_eq!(settings.base_url, "http://models.internal:9000/");
        assert_eq!(settings.log_level, "info");
        assert_eq!(
            settings.client_settings().unwrap().base_url.as_str(),
            "http://models.internal:9000/"
        );
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), "(base_url: ");

        assert!(matches!(load(dir.path()), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let settings = ConsoleSettings {
            base_url: "predict".to_string(),
            ..ConsoleSettings::default()
        };

        assert!(matches!(
            settings.client_settings(),
            Err(SettingsError::InvalidUrl(_))
        ));
    }

    #[test]
    fn defaults_target_local_server() {
        let settings = ConsoleSettings::default();
        assert_eq!(settings.base_url, "http://127.0.0.1:8000/");
        assert!(settings.client_settings().is_ok());
    }
}
