use std::{
    env,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use confique::Config as _;

use crate::prelude::*;


/// The locations where the server will look for a configuration file (unless
/// one is given explicitly). The first existing file in this list is used.
const DEFAULT_PATHS: &[&str] = &["config.toml", "/etc/pizzeria/config.toml"];

const CONFIG_PATH_ENV: &str = "PIZZERIA_CONFIG_PATH";

/// Configuration for the server.
///
/// All relative paths are relative to the location of this configuration file.
#[derive(Debug, confique::Config)]
pub(crate) struct Config {
    #[config(nested)]
    pub(crate) http: crate::http::HttpConfig,

    #[config(nested)]
    pub(crate) log: crate::logger::LogConfig,
}

impl Config {
    /// Finds the configuration file from the environment variable or the
    /// default locations and loads it. Every option has a default value, so
    /// if no file exists at all, the default configuration is returned
    /// (`None` as path).
    pub(crate) fn from_env_or_default_locations() -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) {
            let config = Self::load_from(&path)
                .context(format!("failed to load config from '{}' ({})", path.display(), CONFIG_PATH_ENV))?;
            return Ok((config, Some(path)));
        }

        match DEFAULT_PATHS.iter().map(PathBuf::from).find(|p| p.exists()) {
            Some(path) => {
                let config = Self::load_from(&path)
                    .context(format!("failed to load config from '{}'", path.display()))?;
                Ok((config, Some(path)))
            }
            None => {
                let config = Self::builder().load()
                    .context("failed to assemble default configuration")?;
                Ok((config, None))
            }
        }
    }

    /// Loads the configuration from a specific TOML file.
    pub(crate) fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Config::from_file(path)
            .context(format!("failed to read config file '{}'", path.display()))?;
        config.fix_paths(path)?;

        Ok(config)
    }

    /// Goes through all paths in the configuration and changes relative paths
    /// to be absolute based on the path of the configuration file itself.
    fn fix_paths(&mut self, config_path: &Path) -> Result<()> {
        let absolute_config_path = config_path.canonicalize()
            .context("failed to canonicalize config path")?;
        let base = absolute_config_path.parent()
            .ok_or_else(|| anyhow!("config file path has no parent"))?;

        if let Some(p) = &mut self.log.file {
            if p.is_relative() {
                *p = base.join(&p);
            }
        }

        Ok(())
    }
}

/// Writes the generated TOML config template file to the given destination or
/// stdout.
pub(crate) fn write_template(path: Option<&PathBuf>) -> Result<()> {
    use confique::toml::FormatOptions;

    info!(
        "Writing configuration template to '{}'",
        path.map(|p| p.display().to_string()).unwrap_or("<stdout>".into()),
    );

    let template = confique::toml::template::<Config>(FormatOptions::default());
    match path {
        Some(path) => fs::write(path, template)?,
        None => io::stdout().write_all(template.as_bytes())?,
    }

    Ok(())
}
