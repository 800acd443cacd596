use crate::error::{BinvokeError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV: &str = "BINVOKE_HOME";
const DEFAULT_HOME_DIR: &str = ".binvoke";
const BIN_DIR: &str = "bin";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BinvokeConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Storage root override. Relative values resolve against the binvoke
    /// home directory.
    #[serde(default)]
    pub bin_dir: Option<PathBuf>,
}

/// Binvoke home directory: $BINVOKE_HOME if set, otherwise ~/.binvoke.
pub fn binvoke_home() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_HOME_DIR))
        .ok_or_else(|| {
            BinvokeError::InvalidConfig("Unable to determine the home directory".to_string())
        })
}

impl BinvokeConfig {
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: BinvokeConfig = toml::from_str(&contents)
            .map_err(|e| BinvokeError::ConfigFile(format!("Failed to parse config.toml: {e}")))?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    /// Storage root for downloaded binaries.
    pub fn bin_dir(&self, home: &Path) -> PathBuf {
        match &self.storage.bin_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => home.join(dir),
            None => home.join(BIN_DIR),
        }
    }
}

/// Resolve the storage root, honoring an explicit override before any
/// configuration is consulted.
pub fn resolve_base_path(base_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(base) = base_override {
        return Ok(base);
    }
    let home = binvoke_home()?;
    let config = BinvokeConfig::load(&home)?;
    Ok(config.bin_dir(&home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BinvokeConfig::default();
        assert_eq!(config.storage.bin_dir, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = BinvokeConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.storage.bin_dir, None);
    }

    #[test]
    fn test_bin_dir_defaults_under_home() {
        let config = BinvokeConfig::default();
        let home = Path::new("/home/user/.binvoke");
        assert_eq!(config.bin_dir(home), home.join("bin"));
    }

    #[test]
    fn test_bin_dir_relative_override() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
[storage]
bin_dir = "downloads"
"#,
        )
        .unwrap();

        let config = BinvokeConfig::load(temp_dir.path()).unwrap();
        assert_eq!(
            config.bin_dir(temp_dir.path()),
            temp_dir.path().join("downloads")
        );
    }

    #[test]
    fn test_bin_dir_absolute_override() {
        let temp_dir = TempDir::new().unwrap();
        let absolute = if cfg!(windows) {
            PathBuf::from(r"C:\binaries")
        } else {
            PathBuf::from("/srv/binaries")
        };
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            format!("[storage]\nbin_dir = {:?}\n", absolute.display().to_string()),
        )
        .unwrap();

        let config = BinvokeConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.bin_dir(temp_dir.path()), absolute);
    }

    #[test]
    fn test_invalid_config_is_a_config_file_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "storage = 42").unwrap();

        let err = BinvokeConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, BinvokeError::ConfigFile(_)));
    }

    #[test]
    fn test_explicit_base_override_wins() {
        let base = resolve_base_path(Some(PathBuf::from("/explicit/bin"))).unwrap();
        assert_eq!(base, PathBuf::from("/explicit/bin"));
    }

    #[test]
    #[serial]
    fn test_binvoke_home_env_override() {
        let temp_dir = TempDir::new().unwrap();
        let original = env::var_os(HOME_ENV);
        unsafe {
            env::set_var(HOME_ENV, temp_dir.path());
        }

        assert_eq!(binvoke_home().unwrap(), temp_dir.path());
        // No config file present, so the storage root is <home>/bin
        assert_eq!(resolve_base_path(None).unwrap(), temp_dir.path().join("bin"));

        unsafe {
            if let Some(val) = original {
                env::set_var(HOME_ENV, val);
            } else {
                env::remove_var(HOME_ENV);
            }
        }
    }

    #[test]
    #[serial]
    fn test_binvoke_home_defaults_under_home_dir() {
        let original = env::var_os(HOME_ENV);
        unsafe {
            env::remove_var(HOME_ENV);
        }

        let home = binvoke_home().unwrap();
        assert!(home.ends_with(".binvoke"));

        unsafe {
            if let Some(val) = original {
                env::set_var(HOME_ENV, val);
            }
        }
    }
}
