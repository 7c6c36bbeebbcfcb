use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use xivlauncher_platform::{
    build_info, frontier_referer_for, is_running_elevated, unix_millis_now, ClientLanguage,
    EnvironmentProbe, LanguageSource, LauncherSettings,
};

/// Command-line arguments.
#[derive(Debug, Default)]
struct Args {
    settings: Option<PathBuf>,
    language: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                let path = args.next().context("--settings needs a file path")?;
                parsed.settings = Some(PathBuf::from(path));
            }
            "--language" => {
                parsed.language = Some(args.next().context("--language needs a locale code")?);
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(parsed)
}

/// What the launcher sees on this host.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvironmentReport {
    version: &'static str,
    git_hash: Option<&'static str>,
    install_path: Option<PathBuf>,
    dark_mode: bool,
    elevated: bool,
    locale: &'static str,
    referer: String,
    unix_millis: i32,
}

impl EnvironmentReport {
    fn collect(settings: &LauncherSettings) -> Self {
        let probe = EnvironmentProbe::host();
        Self {
            version: build_info::version(),
            git_hash: build_info::git_hash(),
            install_path: settings.resolve_install_path(),
            dark_mode: probe.is_dark_mode_enabled(),
            elevated: is_running_elevated(),
            locale: settings.language().locale_code(),
            referer: frontier_referer_for(settings),
            unix_millis: unix_millis_now(),
        }
    }
}

fn load_settings(args: &Args) -> anyhow::Result<LauncherSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            LauncherSettings::from_json(&json)
                .with_context(|| format!("invalid settings in {}", path.display()))?
        }
        None => LauncherSettings::default(),
    };

    if let Some(code) = &args.language {
        settings.language = ClientLanguage::from_locale_code(code)
            .with_context(|| format!("unsupported language: {code}"))?;
    }

    Ok(settings)
}

fn run() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let settings = load_settings(&args)?;
    tracing::debug!(?settings, "loaded launcher settings");

    let report = EnvironmentReport::collect(&settings);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
