mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod quotation;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use adapters::outbound::network::PortalApiClient;
use application::use_cases::{
    DispatchApprovalsUseCase, DispatchContext, ListStepsUseCase, LoadQuotationUseCase,
};
use cli::{parse_selection, Args, Command, OutputFormat};
use config::ConfigFile;
use ports::outbound::{Credentials, OutputPresenter};
use quotation::domain::ApprovalStatus;
use quotation::services::{SelectionState, StepFilter};
use shared::error::{ExitCode, PortalError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load optional config from the working directory
    let config = config::discover_config(Path::new("."))?.unwrap_or_default();

    let base_url = args
        .api_url
        .clone()
        .or_else(|| config.api_base_url.clone())
        .unwrap_or_else(|| config::DEFAULT_API_BASE_URL.to_string());
    let timeout = config
        .timeout_seconds
        .unwrap_or(config::DEFAULT_TIMEOUT_SECONDS);
    let credentials = resolve_credentials(&args, &config)?;

    match args.command {
        Command::Steps {
            search,
            status,
            buyer,
            sort,
            descending,
            format,
            output,
        } => {
            let filter = StepFilter {
                search,
                status,
                buyer,
                sort,
                descending,
            };
            let use_case = ListStepsUseCase::new(
                PortalApiClient::new(&base_url, timeout)?,
                StderrProgressReporter::new(),
            );
            let steps = use_case.execute(&credentials, &filter).await?;

            let format = resolve_format(format, &config)?;
            let content = format.create_formatter().format_steps(&steps)?;
            make_presenter(output).present(&content)?;
            Ok(ExitCode::Success)
        }

        Command::Show {
            inquiry_no,
            revision,
            lines,
            all,
            format,
            output,
        } => {
            let picks = parse_picks(&lines)?;
            let use_case = LoadQuotationUseCase::new(
                PortalApiClient::new(&base_url, timeout)?,
                StderrProgressReporter::new(),
            );

            let mut selection = SelectionState::new();
            let mut view = use_case
                .execute(&credentials, inquiry_no, revision, &mut selection)
                .await?;
            apply_picks(&mut selection, all, &picks, &view.lines);
            view.selection = selection.clone();

            let format = resolve_format(format, &config)?;
            let content = format.create_formatter().format_matrix(&view)?;
            make_presenter(output).present(&content)?;
            Ok(ExitCode::Success)
        }

        Command::Approve {
            inquiry_no,
            revision,
            lines,
            all,
            note,
            format,
            output,
        } => {
            dispatch(
                &base_url,
                timeout,
                &credentials,
                &config,
                DispatchContext {
                    inquiry_no,
                    revision_no: revision,
                    note,
                    status: ApprovalStatus::Approved,
                },
                &lines,
                all,
                format,
                output,
            )
            .await
        }

        Command::Reject {
            inquiry_no,
            revision,
            lines,
            all,
            note,
            format,
            output,
        } => {
            dispatch(
                &base_url,
                timeout,
                &credentials,
                &config,
                DispatchContext {
                    inquiry_no,
                    revision_no: revision,
                    note,
                    status: ApprovalStatus::Rejected,
                },
                &lines,
                all,
                format,
                output,
            )
            .await
        }
    }
}

/// Shared approve/reject flow: load, select, dispatch, render the
/// refreshed matrix when the post-approval reload ran.
#[allow(clippy::too_many_arguments)]
async fn dispatch(
    base_url: &str,
    timeout: u64,
    credentials: &Credentials,
    config: &ConfigFile,
    context: DispatchContext,
    line_args: &[String],
    all: bool,
    format: Option<OutputFormat>,
    output: Option<String>,
) -> Result<ExitCode> {
    let picks = parse_picks(line_args)?;

    let load = LoadQuotationUseCase::new(
        PortalApiClient::new(base_url, timeout)?,
        StderrProgressReporter::new(),
    );
    let mut selection = SelectionState::new();
    let view = load
        .execute(
            credentials,
            context.inquiry_no,
            context.revision_no,
            &mut selection,
        )
        .await?;
    apply_picks(&mut selection, all, &picks, &view.lines);

    // Lines already carrying a final status cannot take another step;
    // drop them so the batch only contains submittable items.
    let locked: Vec<u32> = selection
        .entries()
        .filter(|(line_no, vendor_no)| SelectionState::is_locked(*line_no, vendor_no, &view.lines))
        .map(|(line_no, _)| line_no)
        .collect();
    for line_no in locked {
        selection.remove(line_no);
    }

    let use_case = DispatchApprovalsUseCase::new(
        PortalApiClient::new(base_url, timeout)?,
        StderrProgressReporter::new(),
    );
    let outcome = use_case
        .execute(credentials, &context, &view.lines, &mut selection)
        .await?;

    if let Some(refreshed) = &outcome.refreshed {
        let format = resolve_format(format, config)?;
        let content = format.create_formatter().format_matrix(refreshed)?;
        make_presenter(output).present(&content)?;
    }

    Ok(outcome.report.exit_code())
}

/// Parses every `LINE:VENDOR` argument, failing fast on the first bad one.
fn parse_picks(line_args: &[String]) -> Result<Vec<(u32, String)>> {
    line_args.iter().map(|arg| parse_selection(arg)).collect()
}

/// Applies `--all` and `--line` picks on top of the seeded selection.
fn apply_picks(
    selection: &mut SelectionState,
    all: bool,
    picks: &[(u32, String)],
    lines: &[quotation::domain::QuotationLine],
) {
    if all {
        selection.select_all(lines);
    }
    for (line_no, vendor_no) in picks {
        selection.toggle(*line_no, vendor_no, true, lines);
    }
}

/// CLI flag wins, then the config file, then Markdown.
fn resolve_format(cli: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = cli {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(value) => OutputFormat::from_str(value).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(OutputFormat::Markdown),
    }
}

fn resolve_credentials(args: &Args, config: &ConfigFile) -> Result<Credentials> {
    let username = args.username.clone().or_else(|| config.username.clone());
    match (username, args.password.clone()) {
        (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
        _ => Err(PortalError::MissingCredentials.into()),
    }
}

fn make_presenter(output: Option<String>) -> Box<dyn OutputPresenter> {
    if let Some(output_path) = output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    }
}
