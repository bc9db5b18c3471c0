//! `statetree report` - run a reporting cycle and write the snapshot

use crate::render::load_state;
use anyhow::{Context, Result};
use statetree_status::{Reporter, SnapshotGenerator, StatusConfig};

pub fn run_report_command(
    state_path: &str,
    config_path: Option<&str>,
    out: Option<&str>,
    strict: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => StatusConfig::load(path).context("Failed to load status config")?,
        None => StatusConfig::default(),
    };
    if let Some(out) = out {
        config.output_dir = out.into();
    }

    let state = load_state(state_path)?;
    let reporter = Reporter::new(config);
    let report = if strict {
        reporter.report_strict(state)?
    } else {
        reporter.report(state)
    };

    let generator =
        SnapshotGenerator::new(&reporter.config().output_dir).pretty(reporter.config().pretty);
    let files = generator.generate(&report)?;

    println!("{}: {} {}", report.module, report.level, report.band);
    println!("  State:  {}", files.state_json_path.display());
    println!("  Flat:   {}", files.flat_json_path.display());
    println!("  Text:   {}", files.text_path.display());
    println!("  Report: {}", files.report_json_path.display());

    Ok(())
}
