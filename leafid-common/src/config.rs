//! Bootstrap configuration and root folder resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing TOML file is not an error: the service logs a warning and
//! starts with compiled defaults. A TOML file that exists but cannot be
//! parsed is a configuration error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "LEAFID_ROOT_FOLDER";

/// Database file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "leafid.db";

/// Bootstrap configuration loaded from a TOML file
///
/// Every field is optional; absent fields fall back to environment
/// variables or compiled defaults in the consuming service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Root folder holding the database and model artifacts
    pub root_folder: Option<PathBuf>,

    /// HTTP server port
    pub port: Option<u16>,

    /// Path to the ONNX classifier
    pub model_path: Option<PathBuf>,

    /// Path to a label file (one label per line)
    pub labels_path: Option<PathBuf>,

    /// Request body limit for uploads, in bytes
    pub max_upload_bytes: Option<usize>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Compiled defaults for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: get_default_root_folder(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

/// Default TOML location for a module: `<config dir>/leafid/<module>.toml`
pub fn default_config_path(module_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("leafid").join(format!("{}.toml", module_name)))
}

/// Load the TOML bootstrap configuration
///
/// Returns defaults (with a warning) when the file does not exist.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!(
            "Config file not found: {} (continuing with defaults)",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    info!("Loaded TOML configuration from {}", path.display());
    Ok(config)
}

/// Get OS-dependent default root folder path
pub fn get_default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/leafid (or /var/lib/leafid for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("leafid"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/leafid"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/leafid
        dirs::data_dir()
            .map(|d| d.join("leafid"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/leafid"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\leafid
        dirs::data_local_dir()
            .map(|d| d.join("leafid"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\leafid"))
    } else {
        PathBuf::from("./leafid_data")
    }
}

/// Resolves the root folder following CLI > ENV > TOML > default
#[derive(Debug, Clone)]
pub struct RootFolderResolver {
    module_name: String,
    cli_arg: Option<PathBuf>,
    toml_root: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            cli_arg: None,
            toml_root: None,
        }
    }

    /// Root folder given on the command line
    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    /// Root folder from the TOML configuration
    pub fn with_toml_config(mut self, config: &TomlConfig) -> Self {
        self.toml_root = config.root_folder.clone();
        self
    }

    pub fn resolve(&self) -> PathBuf {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_arg {
            info!("[{}] Root folder: {} (command line)", self.module_name, path.display());
            return path.clone();
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
            if !path.trim().is_empty() {
                info!("[{}] Root folder: {} ({})", self.module_name, path, ROOT_FOLDER_ENV);
                return PathBuf::from(path);
            }
        }

        // Priority 3: TOML config file
        if let Some(path) = &self.toml_root {
            info!("[{}] Root folder: {} (TOML)", self.module_name, path.display());
            return path.clone();
        }

        // Priority 4: OS-dependent compiled default
        let path = CompiledDefaults::for_current_platform().root_folder;
        info!("[{}] Root folder: {} (default)", self.module_name, path.display());
        path
    }
}

/// Creates the root folder and locates files inside it
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    pub fn root_folder(&self) -> &Path {
        &self.root_folder
    }

    /// Create the root folder (and parents) if missing
    pub fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_folder.exists() {
            std::fs::create_dir_all(&self.root_folder)?;
            info!("Created root folder: {}", self.root_folder.display());
        }
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE_NAME)
    }
}
