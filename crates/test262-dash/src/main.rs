use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

use test262_dash::compare;
use test262_dash::config::DashboardConfig;
use test262_dash::render::{html, markdown};
use test262_dash::state::{self, DashboardState};
use test262_dash_client::{GithubClient, ReportClient};
use test262_dash_report::{ResultsHistory, SnapshotData};

#[derive(Parser)]
#[command(name = "test262-dash", version, about = "Test262 conformance report dashboard")]
struct Cli {
    /// Path to a dashboard.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the published reports and render the dashboard
    Fetch {
        /// Write the HTML dashboard to this file
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Also write a Markdown conformance document
        #[arg(long)]
        markdown: Option<PathBuf>,
    },

    /// Render the dashboard from local snapshot files, without network
    Render {
        /// Latest snapshot file (latest.json)
        #[arg(long)]
        latest: Option<PathBuf>,

        /// Historical series file (results.json)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Output HTML file
        #[arg(short, long, default_value = "dashboard.html")]
        out: PathBuf,

        /// Also write a Markdown conformance document
        #[arg(long)]
        markdown: Option<PathBuf>,
    },

    /// Compare two snapshot files and report movement
    Compare {
        /// Base snapshot file
        base: PathBuf,
        /// New snapshot file
        new: PathBuf,
    },

    /// List the project's release tags
    Releases,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = DashboardConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Fetch { out, markdown } => fetch(&config, out, markdown).await?,
        Commands::Render {
            latest,
            history,
            out,
            markdown,
        } => render_local(&config, latest, history, out, markdown)?,
        Commands::Compare { base, new } => compare::compare_files(&base, &new)?.print(),
        Commands::Releases => releases(&config).await?,
    }

    Ok(())
}

/// The page-load path: all loaders run concurrently, failures are logged
/// and ignored, and whatever loaded gets rendered.
async fn fetch(
    config: &DashboardConfig,
    out: Option<PathBuf>,
    markdown_out: Option<PathBuf>,
) -> Result<()> {
    let reports = ReportClient::new(&config.base_url);
    let github = GithubClient::new();

    let state = state::bootstrap(&reports, &github, config).await;

    for branch in &config.branches {
        print_branch_summary(&state, branch);
    }

    write_outputs(config, &state, out, markdown_out)
}

/// The offline path: named inputs, so errors propagate instead of being
/// swallowed.
fn render_local(
    config: &DashboardConfig,
    latest: Option<PathBuf>,
    history: Option<PathBuf>,
    out: PathBuf,
    markdown_out: Option<PathBuf>,
) -> Result<()> {
    if latest.is_none() && history.is_none() {
        anyhow::bail!("nothing to render: pass --latest and/or --history");
    }

    let branch = config.primary_branch().to_string();
    let mut state = DashboardState::new();

    if let Some(path) = latest {
        state.latest.insert(branch.clone(), SnapshotData::load(&path)?);
    }
    if let Some(path) = history {
        state.history.insert(branch.clone(), ResultsHistory::load(&path)?);
    }

    print_branch_summary(&state, &branch);
    write_outputs(config, &state, Some(out), markdown_out)
}

async fn releases(config: &DashboardConfig) -> Result<()> {
    let github = GithubClient::new();
    let releases = github.fetch_releases(&config.repo).await?;

    println!("{} {}", "Releases of".bold(), config.repo.bold());
    for release in &releases {
        let name = release.name.as_deref().unwrap_or("");
        if release.prerelease {
            println!("  {} {}  {}", release.tag_name, name, "(prerelease)".dimmed());
        } else {
            println!("  {} {}", release.tag_name, name);
        }
    }

    Ok(())
}

fn write_outputs(
    config: &DashboardConfig,
    state: &DashboardState,
    out: Option<PathBuf>,
    markdown_out: Option<PathBuf>,
) -> Result<()> {
    if let Some(path) = out {
        let page = html::render_page(state, config);
        std::fs::write(&path, page)?;
        eprintln!("Wrote {}", path.display());
    }

    if let Some(path) = markdown_out {
        let branch = config.primary_branch();
        let Some(snapshot) = summary_snapshot(state, branch) else {
            anyhow::bail!("no snapshot loaded for '{branch}', cannot write Markdown");
        };
        std::fs::write(&path, markdown::render_markdown(&config.repo, snapshot))?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}

/// The snapshot a branch summary is based on: the last history entry,
/// falling back to the latest snapshot.
fn summary_snapshot<'a>(state: &'a DashboardState, branch: &str) -> Option<&'a SnapshotData> {
    state
        .history_for(branch)
        .and_then(|h| h.latest())
        .or_else(|| state.snapshot_for(branch))
}

fn print_branch_summary(state: &DashboardState, branch: &str) {
    println!();
    println!("{}", format!("=== Test262 Results ({branch}) ===").bold().cyan());

    let Some(snapshot) = summary_snapshot(state, branch) else {
        println!("{}", "No data loaded.".dimmed());
        return;
    };

    println!("Commit:  {}", snapshot.commit);
    println!("Total:   {}", snapshot.total);
    println!(
        "Passed:  {} ({:.2}%)",
        snapshot.passed.to_string().green(),
        snapshot.conformance()
    );
    println!("Ignored: {}", snapshot.ignored.to_string().yellow());
    println!("Failed:  {}", snapshot.failed().to_string().red());
}
