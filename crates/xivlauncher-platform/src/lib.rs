pub mod build_info;
pub mod color;
pub mod environment;
pub mod error;
pub mod error_report;
pub mod install;
pub mod language;
pub mod platform;
pub mod referer;
pub mod settings;

pub use color::ArgbColor;
pub use environment::{
    is_dark_mode_enabled, is_running_elevated, EnvironmentProbe, PreferenceStore,
};
pub use error::PlatformError;
pub use install::{
    find_install_path, find_install_path_in, is_valid_install_dir, is_valid_install_path,
};
pub use language::{locale_code, ClientLanguage, LanguageSource};
pub use referer::{
    frontier_referer, frontier_referer_at, frontier_referer_for, unix_millis_at, unix_millis_now,
};
pub use settings::LauncherSettings;
