use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;
use svc::areas::repository::Repository;
use svc::commands::script::ScriptRunner;
use svc::config::Config;

#[derive(Parser)]
#[command(
    name = "svc",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A small single-user version control engine",
    long_about = "Tracks files per branch, freezes them into commits and restores them on \
    checkout, reset and merge. Every run starts from a fresh repository over the workspace \
    and replays a script of steps against it.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, help = "Workspace directory (defaults to the current directory)")]
    workspace: Option<PathBuf>,
    #[arg(long, global = true, help = "Log filter directive, overrides SVC_LOG")]
    log: Option<String>,
    #[arg(long, global = true, help = "Keep the snapshot directory after the run")]
    keep_snapshots: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "run",
        about = "Run a script of repository steps",
        long_about = "Runs a script with one step per line (add, rm, commit, branch, checkout, \
        branches, reset, merge, show, parents, hash, status, log). Reads the script from \
        standard input when no path is given. Failing steps are reported and skipped."
    )]
    Run {
        #[arg(index = 1, help = "The script to run")]
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_from_env();
    if let Some(log) = cli.log {
        config = config.with_log_filter(log);
    }
    svc::logging::init(&config.log_filter)?;

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let workspace = match cli.workspace {
        Some(workspace) => workspace,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Run { script } => {
            let mut repository = Repository::init(&workspace, &config)?;

            let summary = {
                let mut runner = ScriptRunner::new(&mut repository);
                let mut stdout = std::io::stdout().lock();
                let mut stderr = std::io::stderr().lock();

                match script {
                    Some(path) => {
                        let file = std::fs::File::open(&path)
                            .with_context(|| format!("Unable to open script {}", path.display()))?;
                        runner.run(BufReader::new(file), &mut stdout, &mut stderr)?
                    }
                    None => runner.run(std::io::stdin().lock(), &mut stdout, &mut stderr)?,
                }
            };

            if !cli.keep_snapshots {
                repository.teardown()?;
            }

            if summary.failures > 0 {
                anyhow::bail!("{} of {} steps failed", summary.failures, summary.steps);
            }
        }
    }

    Ok(())
}
