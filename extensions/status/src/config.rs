//! Status config
//!
//! Read from a TOML file; every key is optional.
//!
//! ```toml
//! module = "gateway"
//! override_path = "/etc/gateway/state_override.json"  # default
//! output_dir = "./dist/state"
//! pretty = true
//! ```

use crate::error::{StatusError, StatusResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODULE: &str = "statetree";
pub const DEFAULT_OUTPUT_DIR: &str = "./dist/state";
pub const OVERRIDE_FILE_NAME: &str = "state_override.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Name of the reporting module; also picks the default override location.
    pub module: String,
    pub override_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Pretty-print JSON snapshots.
    pub pretty: bool,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self::default_for(DEFAULT_MODULE)
    }
}

impl StatusConfig {
    pub fn default_for(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            override_path: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pretty: true,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> StatusResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StatusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| StatusError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), module = %config.module, "loaded status config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Explicit `override_path`, or `/etc/<module>/state_override.json`.
    pub fn override_path(&self) -> PathBuf {
        self.override_path.clone().unwrap_or_else(|| {
            Path::new("/etc")
                .join(&self.module)
                .join(OVERRIDE_FILE_NAME)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_override_path() {
        let config = StatusConfig::default_for("foo");
        assert_eq!(
            config.override_path(),
            PathBuf::from("/etc/foo/state_override.json")
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = StatusConfig::from_toml("module = \"gateway\"").unwrap();
        assert_eq!(config.module, "gateway");
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(config.pretty);
        assert!(config.override_path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("status.toml");
        std::fs::write(
            &path,
            "module = \"db\"\noverride_path = \"/tmp/o.json\"\npretty = false\n",
        )
        .unwrap();

        let config = StatusConfig::load(&path).unwrap();
        assert_eq!(config.override_path(), PathBuf::from("/tmp/o.json"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = StatusConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, StatusError::Io { .. }));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "pretty = \"yes\"").unwrap();
        let bad = StatusConfig::load(&path).unwrap_err();
        assert!(matches!(bad, StatusError::Config { .. }));
    }
}
