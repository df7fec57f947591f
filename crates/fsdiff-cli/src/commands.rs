use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use fsdiff_engine::{ChangeKind, ChangeRecord, ChangeSet, DiffConfig, Differ};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let changes = collect_changes(&cli)?;
    print!("{}", render(&cli.format, &changes)?);
    Ok(())
}

fn collect_changes(cli: &Cli) -> anyhow::Result<ChangeSet> {
    let config = resolve_config(cli)?;
    let mut changes = Differ::with_config(&cli.source, &cli.dest, config)
        .diff()
        .with_context(|| {
            format!(
                "cannot compare {} with {}",
                cli.source.display(),
                cli.dest.display()
            )
        })?;
    changes.sort();
    Ok(changes)
}

fn render(format: &OutputFormat, changes: &ChangeSet) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(changes)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(changes)?)),
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<DiffConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DiffConfig::default(),
    };
    if cli.parallel {
        config.parallel = true;
    }
    if cli.compare_dirs {
        config.compare_directories = true;
    }
    Ok(config)
}

fn load_config(path: &Path) -> anyhow::Result<DiffConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

fn render_text(changes: &ChangeSet) -> String {
    if changes.is_empty() {
        return "No changes.\n".to_string();
    }

    let mut out = String::new();
    for record in changes {
        out.push_str(&format!("{} {}\n", marker(record), record.path.display()));
    }
    let summary = changes.summary();
    out.push_str(&format!(
        "\n{} changes: {} added, {} modified, {} deleted\n",
        summary.total(),
        summary.added.to_string().green(),
        summary.modified.to_string().yellow(),
        summary.deleted.to_string().red(),
    ));
    out
}

fn marker(record: &ChangeRecord) -> colored::ColoredString {
    let m = record.kind.marker().to_string();
    match record.kind {
        ChangeKind::Added => m.green().bold(),
        ChangeKind::Modified => m.yellow().bold(),
        ChangeKind::Deleted => m.red().bold(),
    }
}
