use color_eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use registration::catalog;
use serde::Deserialize;
use std::{env, path::PathBuf};
use tracing::error;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

/// Select-option lists an academy can override per deployment. The
/// built-in vocabularies from `registration::catalog` are the defaults.
#[derive(Clone, Debug, Deserialize)]
pub struct Catalogs {
    #[serde(default = "default_venues")]
    pub venues: Vec<String>,
    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            venues: default_venues(),
            countries: default_countries(),
        }
    }
}

fn default_venues() -> Vec<String> {
    catalog::VENUES.iter().map(|v| v.to_string()).collect()
}

fn default_countries() -> Vec<String> {
    catalog::COUNTRIES.iter().map(|c| c.to_string()).collect()
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub catalogs: Catalogs,
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
    pub fn new() -> Result<Self, config::ConfigError> {
        let data_dir = get_data_dir();
        let config_dir = get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            error!("No configuration file found. Application may not behave as expected");
        }

        let cfg: Self = builder.build()?.try_deserialize()?;

        Ok(cfg)
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
    ProjectDirs::from("com", "projectpro", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_defaults_apply_when_nothing_is_configured() {
        let cfg: Config = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.catalogs.venues.len(), catalog::VENUES.len());
        assert_eq!(cfg.catalogs.countries.len(), catalog::COUNTRIES.len());
    }

    #[test]
    fn venue_catalog_can_be_overridden() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(
                r#"{ catalogs: { venues: ["Home Ground"] } }"#,
                config::FileFormat::Json5,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.catalogs.venues, vec!["Home Ground".to_string()]);
        assert_eq!(cfg.catalogs.countries.len(), catalog::COUNTRIES.len());
    }
}
