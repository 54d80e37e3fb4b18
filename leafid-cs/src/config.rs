//! Bootstrap configuration for leafid-cs
//!
//! Resolution priority for every setting:
//! 1. Command-line arguments (clap also folds in `LEAFID_CS_PORT` and
//!    `LEAFID_MODEL_PATH` here)
//! 2. Environment variables (`LEAFID_ROOT_FOLDER`)
//! 3. TOML configuration file
//! 4. Built-in defaults
//!
//! Settings cannot change while running; restart to pick up edits.

use leafid_common::config::{RootFolderInitializer, RootFolderResolver, TomlConfig};
use std::path::PathBuf;

/// Module name used for config file lookup and log prefixes
pub const MODULE_NAME: &str = "leafid-cs";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5730;

/// Model file looked up inside the root folder when no path is configured
pub const DEFAULT_MODEL_FILE: &str = "plant_identification_model.onnx";

/// Default request body limit for uploads (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub model_path: Option<PathBuf>,
    pub labels_path: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub root_folder: PathBuf,
    pub database_path: PathBuf,
    pub port: u16,
    pub model_path: PathBuf,
    /// `None` selects the built-in species table
    pub labels_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl ServiceConfig {
    /// Merge CLI overrides, environment, TOML and defaults
    ///
    /// Does not touch the filesystem; callers create the root folder.
    pub fn resolve(toml: &TomlConfig, overrides: ConfigOverrides) -> Self {
        let root_folder = RootFolderResolver::new(MODULE_NAME)
            .with_cli_arg(overrides.root_folder)
            .with_toml_config(toml)
            .resolve();
        let database_path = RootFolderInitializer::new(root_folder.clone()).database_path();

        let port = overrides.port.or(toml.port).unwrap_or(DEFAULT_PORT);

        let model_path = overrides
            .model_path
            .or_else(|| toml.model_path.clone())
            .unwrap_or_else(|| root_folder.join(DEFAULT_MODEL_FILE));

        let labels_path = overrides.labels_path.or_else(|| toml.labels_path.clone());

        let max_upload_bytes = toml.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            root_folder,
            database_path,
            port,
            model_path,
            labels_path,
            max_upload_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_root(root: &str) -> ConfigOverrides {
        ConfigOverrides {
            root_folder: Some(PathBuf::from(root)),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::resolve(&TomlConfig::default(), with_root("/srv/leafid"));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_path, PathBuf::from("/srv/leafid/leafid.db"));
        assert_eq!(
            config.model_path,
            PathBuf::from("/srv/leafid/plant_identification_model.onnx")
        );
        assert!(config.labels_path.is_none());
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_toml_values_used_when_no_override() {
        let toml: TomlConfig = toml::from_str(
            r#"
            port = 6000
            model_path = "/models/leaf.onnx"
            labels_path = "/models/labels.txt"
            max_upload_bytes = 2048
            "#,
        )
        .unwrap();

        let config = ServiceConfig::resolve(&toml, with_root("/srv/leafid"));
        assert_eq!(config.port, 6000);
        assert_eq!(config.model_path, PathBuf::from("/models/leaf.onnx"));
        assert_eq!(config.labels_path, Some(PathBuf::from("/models/labels.txt")));
        assert_eq!(config.max_upload_bytes, 2048);
    }

    #[test]
    fn test_cli_overrides_win_over_toml() {
        let toml = TomlConfig {
            port: Some(6000),
            model_path: Some(PathBuf::from("/models/toml.onnx")),
            labels_path: Some(PathBuf::from("/models/toml.txt")),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            root_folder: Some(PathBuf::from("/srv/leafid")),
            port: Some(7000),
            model_path: Some(PathBuf::from("/models/cli.onnx")),
            labels_path: Some(PathBuf::from("/models/cli.txt")),
        };

        let config = ServiceConfig::resolve(&toml, overrides);
        assert_eq!(config.port, 7000);
        assert_eq!(config.model_path, PathBuf::from("/models/cli.onnx"));
        assert_eq!(config.labels_path, Some(PathBuf::from("/models/cli.txt")));
    }
}
