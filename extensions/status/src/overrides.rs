//! Override document loading
//!
//! Overrides are optional and best-effort: a missing file simply means there
//! is nothing to apply.

use crate::config::StatusConfig;
use crate::error::{StatusError, StatusResult};
use statetree_core::State;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct OverrideLoader {
    path: PathBuf,
}

impl OverrideLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StatusConfig) -> Self {
        Self::new(config.override_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when no document exists; errors when one exists but is unusable.
    pub fn load(&self) -> StatusResult<Option<State>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no override document");
                return Ok(None);
            }
            Err(source) => {
                return Err(StatusError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let state = State::from_json(&content).map_err(|source| StatusError::Parse {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            nodes = state.node_count(),
            "loaded override document"
        );
        Ok(Some(state))
    }

    /// Like [`load`](Self::load), but an unusable document is logged and skipped.
    pub fn load_lenient(&self) -> Option<State> {
        self.load().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring override document");
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let loader = OverrideLoader::new(dir.path().join("state_override.json"));
        assert!(loader.load().unwrap().is_none());
    }

    #[test]
    fn test_load_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state_override.json");
        std::fs::write(
            &path,
            r#"{"level":0,"tree":[{"source":"*","level":100,"message":"maintenance"}]}"#,
        )
        .unwrap();

        let state = OverrideLoader::new(&path).load().unwrap().unwrap();
        assert_eq!(state.find_by_source(&["*"]).unwrap().message, "maintenance");
    }

    #[test]
    fn test_malformed_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state_override.json");
        std::fs::write(&path, "{not json").unwrap();

        let loader = OverrideLoader::new(&path);
        assert!(matches!(loader.load(), Err(StatusError::Parse { .. })));
        assert!(loader.load_lenient().is_none());
    }

    #[test]
    fn test_from_config() {
        let mut config = StatusConfig::default_for("gateway");
        assert_eq!(
            OverrideLoader::from_config(&config).path(),
            Path::new("/etc/gateway/state_override.json")
        );
        config.override_path = Some(PathBuf::from("/tmp/x.json"));
        assert_eq!(
            OverrideLoader::from_config(&config).path(),
            Path::new("/tmp/x.json")
        );
    }
}
