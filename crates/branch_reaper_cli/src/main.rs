use std::collections::BTreeSet;
use std::io;
use std::io::Write;

use chrono::Utc;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use secrecy::SecretString;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use branch_reaper_core::{
    execute, list_all_branches, parse_exclusions, select_eligible, RunConfiguration, RunResult,
    SweepEvent,
};
use gitlab_client::GitLabClient;

mod errors;
mod output;
use errors::Error;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// The run finished and nothing failed.
const EXIT_SUCCESS: i32 = 0;
/// The invocation input was invalid or incomplete.
const EXIT_INVALID_INPUT: i32 = 1;
/// The run failed at runtime: fetch error or at least one failed deletion.
const EXIT_RUNTIME_FAILURE: i32 = 2;

/// BranchReaper CLI: Delete stale branches in a GitLab project
#[derive(Parser, Debug)]
#[command(name = "branch-reaper")]
#[command(about = "Delete stale branches in a GitLab project", long_about = None, version)]
struct Cli {
    /// GitLab project ID or full path (e.g. 42 or group/project)
    #[arg(long)]
    project: Option<String>,

    /// Access token with api scope; falls back to GITLAB_TOKEN
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Base URL of the GitLab REST API
    #[arg(long, default_value = gitlab_client::DEFAULT_BASE_URL)]
    gitlab_url: String,

    /// Branch that is never deleted
    #[arg(long, default_value = branch_reaper_core::DEFAULT_MAIN_BRANCH)]
    main_branch: String,

    /// Days without a commit before a branch counts as stale
    #[arg(long, default_value_t = branch_reaper_core::DEFAULT_STALE_AFTER_DAYS)]
    stale_days: u32,

    /// Comma-separated branch names to keep regardless of staleness
    #[arg(long)]
    exclude: Vec<String>,

    /// Actually delete branches instead of the default dry run
    #[arg(long)]
    execute: bool,

    /// Skip the confirmation prompt when deleting
    #[arg(long)]
    yes: bool,

    /// Emit the finalized result as JSON instead of progress lines
    #[arg(long)]
    json: bool,
}

/// Validated invocation input, ready to run against.
struct Invocation {
    project: String,
    token: SecretString,
    gitlab_url: String,
    config: RunConfiguration,
    assume_yes: bool,
}

impl Invocation {
    fn from_cli(cli: Cli) -> Result<Self, Error> {
        let project = match cli.project {
            Some(project) if !project.trim().is_empty() => project,
            _ => return Err(Error::MissingProject),
        };
        let token = match cli.token {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(Error::MissingToken),
        };

        let mut exclusions = BTreeSet::new();
        for raw in &cli.exclude {
            exclusions.extend(parse_exclusions(raw));
        }

        let config =
            RunConfiguration::new(cli.main_branch, cli.stale_days, !cli.execute, exclusions)
                .map_err(|e| Error::InvalidArguments(e.to_string()))?;

        Ok(Self {
            project,
            token: SecretString::from(token),
            gitlab_url: cli.gitlab_url,
            config,
            assume_yes: cli.yes,
        })
    }
}

fn ask_user_for_value(request: &str) -> Result<String, Error> {
    print!("{}", request);

    io::stdout().flush().map_err(|_| Error::StdOutFlushFailed)?;

    let mut temp = String::new();
    io::stdin()
        .read_line(&mut temp)
        .map_err(|_| Error::StdInReadFailed)?;
    Ok(temp.trim().to_string())
}

/// Asks the user to confirm the deletion of `count` branches. Anything but an
/// explicit yes declines.
fn confirm_deletion(
    count: usize,
    ask: &dyn Fn(&str) -> Result<String, Error>,
) -> Result<bool, Error> {
    let answer = ask(&format!("Delete {} branches? [y/N] ", count))?;
    Ok(matches!(
        answer.to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("BRANCH_REAPER_LOG"))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here as well; they are not input
            // errors.
            let code = if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                EXIT_SUCCESS
            } else {
                EXIT_INVALID_INPUT
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    std::process::exit(run(cli, &ask_user_for_value).await);
}

async fn run(cli: Cli, ask: &dyn Fn(&str) -> Result<String, Error>) -> i32 {
    let json = cli.json;

    let invocation = match Invocation::from_cli(cli) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return EXIT_INVALID_INPUT;
        }
    };

    let client = match GitLabClient::new(
        &invocation.gitlab_url,
        &invocation.project,
        invocation.token,
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return EXIT_INVALID_INPUT;
        }
    };

    let branches = match list_all_branches(&client).await {
        Ok(branches) => branches,
        Err(e) => {
            error!("listing branches failed: {e}");
            eprintln!("{}", output::fatal_message(&e).red());
            if json {
                // Machine consumers still get a result record: all counts
                // zero, success false.
                if let Ok(document) = serde_json::to_string_pretty(&RunResult::default()) {
                    println!("{}", document);
                }
            }
            return EXIT_RUNTIME_FAILURE;
        }
    };

    let eligible = select_eligible(&branches, &invocation.config, Utc::now());

    if !invocation.config.dry_run() && !invocation.assume_yes && !json && !eligible.is_empty() {
        match confirm_deletion(eligible.len(), ask) {
            Ok(true) => {}
            Ok(false) => {
                println!("Aborted. No branches were deleted.");
                return EXIT_SUCCESS;
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {}", e).red());
                return EXIT_RUNTIME_FAILURE;
            }
        }
    }

    let mut on_event = |event: SweepEvent| {
        if !json {
            output::print_event(&event);
        }
    };
    let result = execute(
        &client,
        branches.len(),
        &eligible,
        &invocation.config,
        &mut on_event,
    )
    .await;

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(document) => println!("{}", document),
            Err(e) => {
                eprintln!("Error: failed to serialize the run result: {}", e);
                return EXIT_RUNTIME_FAILURE;
            }
        }
    } else {
        output::print_summary(&result, invocation.config.dry_run());
    }

    if result.success {
        EXIT_SUCCESS
    } else {
        EXIT_RUNTIME_FAILURE
    }
}
