//! Snapshot generator
//!
//! Writes the files a monitoring surface serves for one report.

use crate::report::StateReport;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const STATE_FILE: &str = "state.json";
pub const FLAT_FILE: &str = "state.flat.json";
pub const TEXT_FILE: &str = "state.txt";
pub const REPORT_FILE: &str = "report.json";

pub struct SnapshotGenerator {
    output_dir: PathBuf,
    pretty: bool,
}

impl SnapshotGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            pretty: true,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn generate(&self, report: &StateReport) -> Result<GeneratedFiles> {
        fs::create_dir_all(&self.output_dir).context("Failed to create output directory")?;

        // 1. nested tree, the `/state/` payload
        let state_json_path = self.write_json(STATE_FILE, &report.state)?;

        // 2. flat entries
        let flat_json_path = self.write_json(FLAT_FILE, &report.flatten())?;

        // 3. text rendering
        let text_path = self.output_dir.join(TEXT_FILE);
        fs::write(&text_path, report.state.render())
            .with_context(|| format!("Failed to write {}", TEXT_FILE))?;

        // 4. envelope with module and timestamp
        let report_json_path = self.write_json(REPORT_FILE, report)?;

        tracing::info!(
            output_dir = %self.output_dir.display(),
            module = %report.module,
            "state snapshot written"
        );

        Ok(GeneratedFiles {
            state_json_path,
            flat_json_path,
            text_path,
            report_json_path,
        })
    }

    fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .with_context(|| format!("Failed to serialize {}", file_name))?;

        let path = self.output_dir.join(file_name);
        fs::write(&path, json).with_context(|| format!("Failed to write {}", file_name))?;
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub state_json_path: PathBuf,
    pub flat_json_path: PathBuf,
    pub text_path: PathBuf,
    pub report_json_path: PathBuf,
}
