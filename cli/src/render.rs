//! `statetree render` / `statetree find`

use anyhow::{Context, Result};
use clap::ValueEnum;
use statetree_core::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented text
    Text,
    /// Nested JSON tree
    Json,
    /// Flat JSON list, one entry per node
    Flat,
}

pub fn load_state(path: &str) -> Result<State> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read state file: {}", path))?;
    State::from_json(&content).with_context(|| format!("Failed to parse state file: {}", path))
}

pub fn format_state(state: &State, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Text => state.render(),
        OutputFormat::Json => state.to_json_pretty()?,
        OutputFormat::Flat => serde_json::to_string_pretty(&state.flatten())?,
    };
    Ok(output)
}

pub fn run_render_command(
    state_path: &str,
    override_path: Option<&str>,
    format: OutputFormat,
    aggregate: bool,
) -> Result<()> {
    let mut state = load_state(state_path)?;

    if let Some(path) = override_path {
        let overrides = load_state(path).context("Failed to load override document")?;
        tracing::debug!(
            override_path = path,
            nodes = overrides.node_count(),
            "applying override document"
        );
        state.apply(Some(&overrides));
    }
    if aggregate {
        state.aggregate_levels();
    }

    print_output(&format_state(&state, format)?);
    Ok(())
}

pub fn run_find_command(state_path: &str, path: &[String], format: OutputFormat) -> Result<()> {
    let mut state = load_state(state_path)?;
    state.aggregate_levels();

    let found = state
        .find_by_source(path)
        .with_context(|| format!("Source path not found: {}", path.join(" / ")))?;

    print_output(&format_state(found, format)?);
    Ok(())
}

fn print_output(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
