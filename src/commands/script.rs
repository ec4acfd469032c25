//! Line-oriented driver
//!
//! Each non-blank line of a script is one step, parsed with `clap` after
//! splitting on whitespace. A `commit` message is the raw rest of its line,
//! so repeated spaces inside it are kept. Lines starting with `#` are
//! comments. A failing
//! step reports `error: <message>` and the script carries on with the next
//! line.
//!
//! ```text
//! add a.txt
//! commit first version
//! branch feature
//! merge feature --resolve a.txt=resolved/a.txt --drop b.txt
//! ```

use crate::areas::repository::Repository;
use crate::artifacts::log::format::CommitFormatter;
use crate::artifacts::merge::resolution::Resolution;
use crate::errors::Error;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Step {
    #[command(subcommand)]
    command: StepCommand,
}

#[derive(Subcommand, Debug)]
enum StepCommand {
    /// Stage a file for tracking
    Add { file: String },
    /// Stage a tracked file for deletion
    Rm { file: String },
    /// Commit the current branch; the message is the rest of the line
    Commit {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Fork a new branch off the current one
    Branch { name: String },
    /// Switch to another branch
    Checkout { name: String },
    /// List branch names in creation order
    Branches,
    /// Move the current branch to a commit
    Reset { commit_id: String },
    /// Merge another branch into the current one
    Merge {
        branch: String,
        #[arg(long = "resolve", value_name = "FILE=PATH", value_parser = parse_resolved)]
        resolved: Vec<Resolution>,
        #[arg(long = "drop", value_name = "FILE")]
        dropped: Vec<String>,
    },
    /// Render a commit
    Show { commit_id: String },
    /// Print a commit's parent ids
    Parents { commit_id: String },
    /// Fingerprint a working file
    Hash { file: String },
    /// Print the reconciled tracked files of the current branch
    Status,
    /// Print the first-parent history of the current branch
    Log,
}

fn parse_resolved(value: &str) -> std::result::Result<Resolution, String> {
    match value.split_once('=') {
        Some((file_name, path)) if !file_name.is_empty() && !path.is_empty() => {
            Ok(Resolution::resolved(file_name, path))
        }
        _ => Err(format!("expected FILE=PATH, got {value:?}")),
    }
}

/// Outcome of a whole script run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    pub steps: usize,
    pub failures: usize,
}

pub struct ScriptRunner<'r> {
    repository: &'r mut Repository,
}

impl<'r> ScriptRunner<'r> {
    pub fn new(repository: &'r mut Repository) -> Self {
        ScriptRunner { repository }
    }

    /// Run every step of `script`, writing results to `output` and step
    /// failures to `errors`
    ///
    /// A step whose output cannot be written counts as a failed step; only a
    /// failure to write to `errors` aborts the run.
    pub fn run(
        &mut self,
        script: impl BufRead,
        output: &mut dyn Write,
        errors: &mut dyn Write,
    ) -> anyhow::Result<ScriptSummary> {
        let mut summary = ScriptSummary::default();

        for (line_number, line) in script.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            summary.steps += 1;
            let outcome = match Step::try_parse_from(line.split_whitespace()) {
                Ok(step) => self.execute(step.command, line, output),
                Err(err) => Err(StepError::Parse(first_line(&err.to_string()))),
            };

            if let Err(err) = outcome {
                summary.failures += 1;
                tracing::debug!(line = line_number + 1, step = line, "step failed: {err}");
                writeln!(errors, "{} {err}", "error:".red().bold())?;
            }
        }

        Ok(summary)
    }

    fn execute(&mut self, command: StepCommand, line: &str, output: &mut dyn Write) -> StepResult {
        let repository = &mut *self.repository;

        match command {
            StepCommand::Add { file } => {
                let fingerprint = repository.add(&file)?;
                writeln!(output, "added {file} ({fingerprint})")?;
            }
            StepCommand::Rm { file } => {
                repository.remove(&file)?;
                writeln!(output, "removed {file}")?;
            }
            StepCommand::Commit { message } => {
                let message = rest_of_line(line).unwrap_or_else(|| message.join(" "));
                let commit_id = repository.commit(&message)?;
                writeln!(output, "{commit_id}")?;
            }
            StepCommand::Branch { name } => {
                repository.branch(&name)?;
                writeln!(output, "created branch {name}")?;
            }
            StepCommand::Checkout { name } => {
                repository.checkout(&name)?;
                writeln!(output, "switched to branch {name}")?;
            }
            StepCommand::Branches => {
                for name in repository.list_branches() {
                    writeln!(output, "{name}")?;
                }
            }
            StepCommand::Reset { commit_id } => {
                repository.reset(&commit_id)?;
                writeln!(output, "reset to {commit_id}")?;
            }
            StepCommand::Merge {
                branch,
                resolved,
                dropped,
            } => {
                let resolutions = resolved
                    .into_iter()
                    .chain(dropped.into_iter().map(Resolution::dropped))
                    .collect::<Vec<_>>();
                let commit_id = repository.merge(&branch, &resolutions)?;
                writeln!(output, "{commit_id}")?;
            }
            StepCommand::Show { commit_id } => {
                write!(output, "{}", repository.show_commit(&commit_id)?)?;
            }
            StepCommand::Parents { commit_id } => {
                let commit = repository
                    .lookup_commit(&commit_id)
                    .ok_or_else(|| Error::CommitNotFound(commit_id.clone()))?;
                for parent in repository.parents_of(commit) {
                    writeln!(output, "{parent}")?;
                }
            }
            StepCommand::Hash { file } => {
                writeln!(output, "{}", repository.hash_file(&file)?)?;
            }
            StepCommand::Status => {
                for file in repository.status()? {
                    writeln!(
                        output,
                        "{} [{:>10}] {}",
                        file.state.code(),
                        file.fingerprint,
                        file.name
                    )?;
                }
            }
            StepCommand::Log => {
                for commit in repository.log() {
                    let parent = commit.parent().and_then(|parent| repository.graph().get(parent));
                    writeln!(output, "{}", CommitFormatter::new(commit, parent))?;
                }
            }
        }

        Ok(())
    }
}

type StepResult = std::result::Result<(), StepError>;

#[derive(Debug, thiserror::Error)]
enum StepError {
    #[error(transparent)]
    Repository(#[from] Error),
    #[error("{0}")]
    Parse(String),
    #[error("Unable to write step output: {0}")]
    Output(#[from] std::io::Error),
}

/// Everything after the first word of a step, inner whitespace untouched
fn rest_of_line(line: &str) -> Option<String> {
    line.split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim_start().to_string())
        .filter(|rest| !rest.is_empty())
}

fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn run(repository: &mut Repository, script: &str) -> anyhow::Result<(String, String, ScriptSummary)> {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        colored::control::set_override(false);
        let summary = ScriptRunner::new(repository).run(script.as_bytes(), &mut output, &mut errors)?;

        Ok((
            String::from_utf8(output)?,
            String::from_utf8(errors)?,
            summary,
        ))
    }

    #[test]
    fn steps_print_their_results() -> TestResult {
        let dir = TempDir::new()?;
        dir.child("a.txt").write_str("hello")?;
        let mut repository = Repository::init(dir.path(), &Config::default())?;

        let (output, errors, summary) = run(
            &mut repository,
            "# first version\nadd a.txt\n\ncommit first\nbranches\nhash a.txt\n",
        )?;

        assert_eq!(output, "added a.txt (1027)\n443094\nmaster\n1027\n");
        assert_eq!(errors, "");
        assert_eq!(summary, ScriptSummary { steps: 4, failures: 0 });

        Ok(())
    }

    #[test]
    fn failing_steps_are_reported_and_skipped() -> TestResult {
        let dir = TempDir::new()?;
        dir.child("a.txt").write_str("hello")?;
        let mut repository = Repository::init(dir.path(), &Config::default())?;

        let (output, errors, summary) = run(
            &mut repository,
            "commit nothing yet\nfrobnicate\nadd a.txt\nadd a.txt\n",
        )?;

        assert_eq!(output, "added a.txt (1027)\n");
        assert_eq!(
            errors.lines().collect::<Vec<_>>(),
            vec![
                "error: nothing to commit",
                "error: unrecognized subcommand 'frobnicate'",
                "error: file is already tracked: a.txt",
            ]
        );
        assert_eq!(summary, ScriptSummary { steps: 4, failures: 3 });

        Ok(())
    }

    #[test]
    fn commit_messages_keep_every_word() -> TestResult {
        let dir = TempDir::new()?;
        dir.child("a.txt").write_str("hello")?;
        let mut repository = Repository::init(dir.path(), &Config::default())?;

        run(&mut repository, "add a.txt\ncommit fix the --broken build")?;

        let head = repository.head().map(|commit| commit.message().to_string());
        assert_eq!(head.as_deref(), Some("fix the --broken build"));

        Ok(())
    }

    #[test]
    fn commit_messages_keep_inner_whitespace() -> TestResult {
        let dir = TempDir::new()?;
        dir.child("a.txt").write_str("hello")?;
        let mut repository = Repository::init(dir.path(), &Config::default())?;

        let (output, _, _) = run(&mut repository, "add a.txt\ncommit   fix  the   build  \n")?;

        let head = repository.head().map(|commit| commit.message().to_string());
        assert_eq!(head.as_deref(), Some("fix  the   build"));
        assert!(output.ends_with("96fa93\n"));

        Ok(())
    }

    #[test]
    fn merge_resolutions_are_parsed() {
        assert_eq!(
            parse_resolved("a.txt=resolved/a.txt"),
            Ok(Resolution::resolved("a.txt", "resolved/a.txt"))
        );
        assert!(parse_resolved("a.txt").is_err());
        assert!(parse_resolved("=path").is_err());
    }
}
