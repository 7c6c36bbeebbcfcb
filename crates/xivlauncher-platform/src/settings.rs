use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::install::{self, DEFAULT_INSTALL_PATHS};
use crate::language::{ClientLanguage, LanguageSource};

/// Launcher settings relevant to install detection and the frontier pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherSettings {
    #[serde(default)]
    pub language: ClientLanguage,
    /// Install root chosen by the user (None = auto-detect).
    #[serde(default)]
    pub game_path: Option<PathBuf>,
    /// Extra locations searched before the built-in defaults.
    #[serde(default)]
    pub extra_install_paths: Vec<PathBuf>,
}

impl LauncherSettings {
    /// Load settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, PlatformError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PlatformError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The configured install root if it is valid, otherwise the first valid
    /// extra path, otherwise the first valid built-in default.
    pub fn resolve_install_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.game_path {
            if install::is_valid_install_dir(path) {
                return Some(path.clone());
            }
            tracing::warn!(path = %path.display(), "configured game path is not a valid install");
        }

        let extra = self.extra_install_paths.iter().map(PathBuf::as_path);
        let defaults = DEFAULT_INSTALL_PATHS.iter().map(|p| Path::new(*p));
        install::find_install_path_in(extra.chain(defaults))
    }
}

impl LanguageSource for LauncherSettings {
    fn language(&self) -> ClientLanguage {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn empty_object_uses_defaults() {
        let settings = LauncherSettings::from_json("{}").unwrap();
        assert_eq!(settings, LauncherSettings::default());
        assert_eq!(settings.language, ClientLanguage::English);
    }

    #[test]
    fn parses_camel_case_fields() {
        let json = r#"{
            "language": 0,
            "gamePath": "/games/ffxiv",
            "extraInstallPaths": ["/mnt/a", "/mnt/b"]
        }"#;
        let settings = LauncherSettings::from_json(json).unwrap();
        assert_eq!(settings.language(), ClientLanguage::Japanese);
        assert_eq!(settings.game_path, Some(PathBuf::from("/games/ffxiv")));
        assert_eq!(settings.extra_install_paths.len(), 2);
    }

    #[test]
    fn invalid_json_is_a_settings_error() {
        let err = LauncherSettings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, PlatformError::Settings(_)));
    }

    #[test]
    fn json_round_trip() {
        let settings = LauncherSettings {
            language: ClientLanguage::Other(12),
            game_path: Some(PathBuf::from("/x")),
            extra_install_paths: vec![PathBuf::from("/y")],
        };
        let back = LauncherSettings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn configured_path_wins_when_valid() {
        let dir = tempfile::TempDir::new().unwrap();
        let configured = dir.path().join("configured");
        let extra = dir.path().join("extra");
        for root in [&configured, &extra] {
            fs::create_dir_all(root.join("game")).unwrap();
            fs::create_dir_all(root.join("boot")).unwrap();
        }

        let settings = LauncherSettings {
            game_path: Some(configured.clone()),
            extra_install_paths: vec![extra.clone()],
            ..Default::default()
        };
        assert_eq!(settings.resolve_install_path(), Some(configured));
    }

    #[test]
    fn invalid_configured_path_falls_back_to_extra_paths() {
        let dir = tempfile::TempDir::new().unwrap();
        let extra = dir.path().join("extra");
        fs::create_dir_all(extra.join("game")).unwrap();
        fs::create_dir_all(extra.join("boot")).unwrap();

        let settings = LauncherSettings {
            game_path: Some(dir.path().join("gone")),
            extra_install_paths: vec![dir.path().join("also-gone"), extra.clone()],
            ..Default::default()
        };
        assert_eq!(settings.resolve_install_path(), Some(extra));
    }
}
