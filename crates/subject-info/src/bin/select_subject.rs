//! Validate and submit a course, major and minor selection.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;
use ortho_config::OrthoConfig;
use subject_info::SubjectInfoSettings;
use subject_info::domain::ports::{FixtureSubjectInfoSubmitter, SubjectInfoSubmitter};
use subject_info::domain::{
    SUBMIT_SUCCESS_MESSAGE, SubjectCatalog, SubjectInfoService, SubjectSelectionValidator,
};
use subject_info::outbound::subject_info::{HttpSubjectInfoSubmitter, SubjectInfoHttpIdentity};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

/// `select-subject` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "select-subject",
    about = "Validate a course with a distinct major and minor subject and submit it",
    version
)]
struct CliArgs {
    /// Print the course catalog and exit.
    #[arg(long)]
    list: bool,
    /// Course code, e.g. `BA`.
    #[arg(long, value_name = "code", default_value = "")]
    course: String,
    /// Major subject offered for the course.
    #[arg(long, value_name = "subject", default_value = "")]
    major: String,
    /// Minor subject offered for the course.
    #[arg(long, value_name = "subject", default_value = "")]
    minor: String,
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

/// Parsed command line.
#[derive(Debug)]
enum Invocation {
    /// Arguments for a listing or submission run.
    Run(CliArgs),
    /// Rendered `--help` or `--version` text.
    Info(String),
}

/// Submitter selected from the loaded settings.
#[derive(Debug, PartialEq, Eq)]
enum SubmitterPlan {
    /// Accept locally; no endpoint configured or dry run requested.
    Fixture,
    /// POST to the configured endpoint.
    Http { endpoint: Url, timeout: Duration },
}

fn run() -> io::Result<()> {
    let args = match parse_args(env::args_os())? {
        Invocation::Run(args) => args,
        Invocation::Info(text) => return write_out(text.trim_end()),
    };
    let validator = SubjectSelectionValidator::standard().map_err(io::Error::other)?;

    if args.list {
        return write_out(&render_catalog(validator.catalog()));
    }

    let settings = SubjectInfoSettings::load_from_iter([OsString::from("select-subject")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;

    match plan_submitter(&settings)? {
        SubmitterPlan::Http { endpoint, timeout } => {
            let identity = SubjectInfoHttpIdentity {
                bearer_token: settings.bearer_token.clone(),
                ..SubjectInfoHttpIdentity::default()
            };
            let submitter = HttpSubjectInfoSubmitter::with_identity(endpoint, timeout, identity)
                .map_err(|error| io::Error::other(format!("create HTTP client: {error}")))?;
            runtime.block_on(submit(validator, submitter, &args))
        }
        SubmitterPlan::Fixture => {
            runtime.block_on(submit(validator, FixtureSubjectInfoSubmitter, &args))
        }
    }
}

/// Parse `argv`, treating help and version requests as successful output
/// rather than errors.
fn parse_args<I, T>(argv: I) -> io::Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(argv) {
        Ok(args) => Ok(Invocation::Run(args)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Info(err.to_string()))
        }
        Err(err) => Err(io::Error::other(err)),
    }
}

fn plan_submitter(settings: &SubjectInfoSettings) -> io::Result<SubmitterPlan> {
    match settings.endpoint_url().map_err(io::Error::other)? {
        Some(endpoint) => {
            let timeout = settings.timeout().map_err(io::Error::other)?;
            Ok(SubmitterPlan::Http { endpoint, timeout })
        }
        None => Ok(SubmitterPlan::Fixture),
    }
}

async fn submit<S>(validator: SubjectSelectionValidator, submitter: S, args: &CliArgs) -> io::Result<()>
where
    S: SubjectInfoSubmitter,
{
    let service = SubjectInfoService::new(validator, Arc::new(submitter));
    let selection = service
        .submit(&args.course, &args.major, &args.minor)
        .await
        .map_err(io::Error::other)?;
    write_out(&format!(
        "{SUBMIT_SUCCESS_MESSAGE} course={} major={} minor={}",
        selection.course(),
        selection.major(),
        selection.minor()
    ))
}

fn render_catalog(catalog: &SubjectCatalog) -> String {
    catalog
        .iter()
        .map(|(course, options)| {
            format!(
                "{course} ({})\n  major: {}\n  minor: {}",
                course.title(),
                options.major().join(", "),
                options.minor().join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_out(message: &str) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{message}")
}
