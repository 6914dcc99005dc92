use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::debug;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub form_width: u16,
    pub confirmation_width: u16,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".into(),
            },
            ui: UiConfig {
                form_width: 72,
                confirmation_width: 64,
            },
        }
    }
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

impl Config {
    /// Defaults, then `config.toml` / `config.json5` from the config dir, then
    /// `APPLICANT__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load_from(&get_config_dir())
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, config::ConfigError> {
        let defaults = Config::default();
        let mut builder = config::Config::builder()
            .set_default("logging.level", defaults.logging.level)?
            .set_default("ui.form_width", i64::from(defaults.ui.form_width))?
            .set_default(
                "ui.confirmation_width",
                i64::from(defaults.ui.confirmation_width),
            )?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                debug!(path = %path.display(), "loading config file");
            }
            builder = builder.add_source(
                config::File::from(path)
                    .format(*format)
                    .required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(&PROJECT_NAME)
                .prefix_separator("__")
                .separator("__"),
        );

        builder.build()?.try_deserialize()
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "jobforms", env!("CARGO_PKG_NAME"))
}
