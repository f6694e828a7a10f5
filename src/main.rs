use std::process;

use anyhow::Result;
use clap::Parser;

use git_release::cli::{run_release_workflow, ReleaseWorkflowArgs, WorkflowResult};
use git_release::config;
use git_release::git::{CommandHistory, Git2History, HistorySource, SystemCommandRunner};
use git_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-release",
    about = "Compute the next version and changelog from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        value_name = "HASH|all",
        help = "Last released commit (hash prefix), or 'all' for the whole history"
    )]
    from: Option<String>,

    #[arg(long, value_name = "VERSION", help = "Previously published version")]
    previous: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: String,

    #[arg(long, help = "Read history with the git binary instead of libgit2")]
    git_cli: bool,

    #[arg(long, help = "Print release data as JSON")]
    json: bool,

    #[arg(long, help = "Print a release-creation link")]
    link: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    // Diagnostics go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        ui::display_error(&format!("{e:#}"));
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.version {
        println!("git-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = config::load_config(args.config.as_deref())?;

    ui::display_status(&format!("Reading history from {}", args.repo));
    let source: Box<dyn HistorySource> = if args.git_cli {
        Box::new(CommandHistory::new(SystemCommandRunner::new(&args.repo)))
    } else {
        Box::new(Git2History::open(&args.repo)?)
    };

    let workflow_args = ReleaseWorkflowArgs {
        boundary: args.from,
        previous_version: args.previous,
    };
    let result = run_release_workflow(source.as_ref(), &workflow_args, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&result, args.link)
}

fn print_report(result: &WorkflowResult, with_link: bool) -> Result<()> {
    for warning in &result.warnings {
        ui::display_warning(warning);
    }

    ui::display_release_summary(&result.release);
    ui::display_pending_commits(&result.release.commits);
    ui::display_changelog(&result.changelog);

    if with_link {
        match &result.release_link {
            Some(link) => ui::display_release_link(link),
            None => anyhow::bail!("--link needs release.repository_url in the configuration"),
        }
    }

    Ok(())
}
