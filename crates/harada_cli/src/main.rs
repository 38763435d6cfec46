//! Harada chart command-line entry point.
//!
//! # Responsibility
//! - Without a subcommand: print a deterministic smoke probe of core wiring.
//! - `grid` / `summary`: load a chart JSON file, build its grid, print it.

mod load;
mod summary;

use anyhow::Context;
use clap::{Parser, Subcommand};
use harada_core::{render_chart_grid, Chart, GridSummary, HaradaGrid, LogConfig};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "harada", version, about = "Build Harada Method 9x9 chart grids")]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "HARADA_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "HARADA_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the chart grid as JSON.
    Grid {
        chart: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Print a compact cell-kind map and completion.
    Summary { chart: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let config = match cli.log_level.as_deref() {
            Some(level) => LogConfig::new(level, log_dir),
            None => LogConfig::with_default_level(log_dir),
        }
        .context("invalid logging configuration")?;
        harada_core::init_logging(&config).context("failed to initialize logging")?;
    }

    match cli.command {
        None => {
            println!("harada_core ping={}", harada_core::ping());
            println!("harada_core version={}", harada_core::core_version());
        }
        Some(Command::Grid { chart, pretty }) => {
            let (chart, grid) = render_file(&chart)?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&grid)
            } else {
                serde_json::to_string(&grid)
            }
            .context("failed to serialize grid")?;
            println!("{rendered}");
            info!("event=cli_grid module=cli status=ok chart_id={}", chart.id);
        }
        Some(Command::Summary { chart }) => {
            let (chart, grid) = render_file(&chart)?;
            println!("{}", summary::goal_line(&chart));
            print!("{}", summary::kind_map(&grid));
            let counts = GridSummary::of(&chart, &grid);
            println!(
                "pillars={} tasks={} empty_slots={} completion={}%",
                counts.pillar_count,
                counts.task_count,
                counts.empty_slot_count,
                counts.completion_percentage
            );
            info!("event=cli_summary module=cli status=ok chart_id={}", chart.id);
        }
    }
    Ok(())
}

/// Loads a chart file and builds its grid; validation happens in the render step.
fn render_file(path: &Path) -> anyhow::Result<(Chart, HaradaGrid)> {
    let chart = load::load_chart(path)?;
    let grid = render_chart_grid(&chart)
        .with_context(|| format!("cannot build grid for `{}`", path.display()))?;
    Ok((chart, grid))
}

#[cfg(test)]
mod tests {
    use super::render_file;
    use harada_core::{Chart, Pillar, RingPosition};
    use std::io::Write;

    fn write_chart(chart: &Chart) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(chart).unwrap().as_bytes())
            .unwrap();
        file
    }

    #[test]
    fn render_file_builds_valid_chart() {
        let mut chart = Chart::new("Title", "Goal");
        chart.pillars.push(Pillar::new(RingPosition::ALL[0], "Health"));
        let file = write_chart(&chart);

        let (loaded, grid) = render_file(file.path()).unwrap();
        assert_eq!(loaded, chart);
        assert_eq!(grid.placed_count(), 1 + 2 + 8);
    }

    #[test]
    fn render_file_keeps_the_error_chain() {
        let mut chart = Chart::new("Title", "Goal");
        chart.pillars.push(Pillar::new(RingPosition::ALL[0], "A"));
        chart.pillars.push(Pillar::new(RingPosition::ALL[0], "B"));
        let file = write_chart(&chart);

        let err = render_file(file.path()).unwrap_err();
        let chain: Vec<String> = err.chain().map(|cause| cause.to_string()).collect();
        assert!(chain[0].starts_with("cannot build grid for"));
        assert!(chain
            .iter()
            .any(|cause| cause == "more than one pillar at position 1"));
    }

    #[test]
    fn render_file_reports_unreadable_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let err = render_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
        assert!(err.chain().count() >= 2);
    }
}
