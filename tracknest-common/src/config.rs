//! Configuration loading and root folder resolution
//!
//! The library root holds everything the server persists: the library
//! document (`library.json`) and the uploaded-file directory (`data/`).

use crate::Result;
use std::path::{Path, PathBuf};

/// Port the server listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the library root folder
pub const ROOT_ENV: &str = "TRACKNEST_ROOT";

/// Resolve the library root folder, by priority:
/// 1. Command-line argument (highest priority)
/// 2. TRACKNEST_ROOT environment variable
/// 3. `root_folder` key of the TOML config file
/// 4. Current directory (fallback)
pub fn resolve_root(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_ENV) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(config) = load_config_file() {
        if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
            return PathBuf::from(root_folder);
        }
    }

    // Priority 4: Current directory
    PathBuf::from(".")
}

/// Resolve the listen port, by priority:
/// 1. Command-line argument
/// 2. PORT environment variable
/// 3. `port` key of the TOML config file
/// 4. Compiled default (3000)
pub fn resolve_port(cli_arg: Option<u16>) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Some(port) = std::env::var(PORT_ENV)
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
    {
        return port;
    }

    if let Some(config) = load_config_file() {
        if let Some(port) = config
            .get("port")
            .and_then(|v| v.as_integer())
            .and_then(|p| u16::try_from(p).ok())
        {
            return port;
        }
    }

    DEFAULT_PORT
}

/// Load the optional config file, trying the user config directory first
/// (~/.config/tracknest/config.toml or platform equivalent), then
/// /etc/tracknest/config.toml on unix.
fn load_config_file() -> Option<toml::Value> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("tracknest").join("config.toml"));
    }
    if cfg!(unix) {
        candidates.push(PathBuf::from("/etc/tracknest/config.toml"));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<toml::Value>(&content) {
                Ok(value) => return Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring unparseable config file {}: {}", path.display(), e);
                }
            },
            Err(e) => {
                tracing::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            }
        }
    }

    None
}

/// Prepares the on-disk layout under the resolved root folder
#[derive(Debug, Clone)]
pub struct RootInitializer {
    root: PathBuf,
}

impl RootInitializer {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the root and uploaded-file directories if missing
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.data_dir())?;
        Ok(())
    }

    /// Path of the library document
    pub fn library_path(&self) -> PathBuf {
        self.root.join("library.json")
    }

    /// Directory holding uploaded audio files
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_resolve_port_cli_wins() {
        std::env::set_var(PORT_ENV, "4500");
        assert_eq!(resolve_port(Some(8080)), 8080);
        std::env::remove_var(PORT_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_port_env_over_default() {
        std::env::set_var(PORT_ENV, "4500");
        assert_eq!(resolve_port(None), 4500);
        std::env::remove_var(PORT_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_port_ignores_unparseable_env() {
        std::env::set_var(PORT_ENV, "not-a-port");
        assert_eq!(resolve_port(None), DEFAULT_PORT);
        std::env::remove_var(PORT_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_root_cli_wins() {
        std::env::set_var(ROOT_ENV, "/tmp/from-env");
        let root = resolve_root(Some(Path::new("/tmp/from-cli")));
        assert_eq!(root, PathBuf::from("/tmp/from-cli"));
        std::env::remove_var(ROOT_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_root_env_over_default() {
        std::env::set_var(ROOT_ENV, "/tmp/from-env");
        let root = resolve_root(None);
        assert_eq!(root, PathBuf::from("/tmp/from-env"));
        std::env::remove_var(ROOT_ENV);
    }

    #[test]
    fn test_initializer_creates_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("library-root");

        let initializer = RootInitializer::new(root.clone());
        initializer.ensure_directories().unwrap();

        assert!(root.is_dir());
        assert!(initializer.data_dir().is_dir());
        assert_eq!(initializer.library_path(), root.join("library.json"));
        assert_eq!(initializer.data_dir(), root.join("data"));
    }
}
