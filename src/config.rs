use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    cli::Args,
    error::{AppError, Result},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: None,
            window_width: 900.0,
            window_height: 600.0,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("expense-viz").join("config.toml"))
}

impl Config {
    /// Reads the config file given on the command line, or the default one
    /// if it exists, then lets command line flags override it.
    pub fn load(args: &Args) -> Result<Config> {
        let config = match &args.config {
            Some(path) => Config::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Config::from_file(&path)?,
                _ => Config::default(),
            },
        };

        Ok(config.merge_args(args))
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        log::info!("Loading config from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn merge_args(mut self, args: &Args) -> Config {
        if let Some(data) = &args.data {
            self.data = Some(data.clone());
        }
        if let Some(width) = args.width {
            self.window_width = width;
        }
        if let Some(height) = args.height {
            self.window_height = height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str("window_width = 1200.0").unwrap();
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 600.0);
        assert_eq!(config.data, None);
    }

    #[test]
    fn command_line_wins() {
        let config: Config = toml::from_str(
            r#"
data = "/tmp/from-file.toml"
window_height = 700.0
"#,
        )
        .unwrap();

        let args = Args {
            data: Some(PathBuf::from("/tmp/from-cli.toml")),
            width: Some(1024.0),
            ..Args::default()
        };

        let merged = config.merge_args(&args);
        assert_eq!(merged.data, Some(PathBuf::from("/tmp/from-cli.toml")));
        assert_eq!(merged.window_width, 1024.0);
        assert_eq!(merged.window_height, 700.0);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let args = Args {
            config: Some(PathBuf::from("/definitely/not/here/config.toml")),
            ..Args::default()
        };
        assert!(matches!(Config::load(&args), Err(AppError::Io { .. })));
    }
}
