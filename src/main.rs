//! Commenter CLI entrypoint: summarise a pull request and optionally post a
//! comment on it.

use std::io::{self, Write};
use std::process::ExitCode;

use commenter::github::{IssueCommentGateway, PullRequestGateway};
use commenter::{CommentTarget, Commenter, CommenterConfig, CommenterError, Session};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "COMMENTER_LOG";
const DEFAULT_LOG_FILTER: &str = "commenter=info";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), CommenterError> {
    let config = load_config()?;
    let target = config.comment_target()?;
    let session = Session::connect(&config.session_input()?)?;

    let mut commenter = Commenter::load(&session).await?;
    write_summary(&commenter)?;
    post(&mut commenter, target).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CommenterError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CommenterConfig, CommenterError> {
    CommenterConfig::load().map_err(|error| CommenterError::Configuration {
        message: error.to_string(),
    })
}

async fn post<Pulls, Issues>(
    commenter: &mut Commenter<'_, Pulls, Issues>,
    target: CommentTarget<'_>,
) -> Result<(), CommenterError>
where
    Pulls: PullRequestGateway,
    Issues: IssueCommentGateway,
{
    match target {
        CommentTarget::None => Ok(()),
        CommentTarget::General { body } => commenter.write_general_comment(body).await,
        CommentTarget::Review {
            body,
            file,
            start_line,
            line,
        } => {
            commenter
                .write_multi_line_comment(file, body, start_line, line)
                .await
        }
    }
}

fn write_summary<Pulls, Issues>(commenter: &Commenter<'_, Pulls, Issues>) -> Result<(), CommenterError>
where
    Pulls: PullRequestGateway,
    Issues: IssueCommentGateway,
{
    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "Changed files: {}\nExisting review comments: {}",
        commenter.changed_files().len(),
        commenter.existing_comments().len()
    )
    .map_err(|error| CommenterError::Io {
        message: error.to_string(),
    })
}
