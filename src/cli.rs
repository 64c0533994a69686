use clap::{Parser, Subcommand};

use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::ports::outbound::ReportFormatter;
use crate::quotation::services::StepSortColumn;
use crate::shared::error::PortalError;
use crate::shared::Result;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }
}

/// Parses one `LINE:VENDOR` selection argument.
///
/// # Errors
/// Returns [`PortalError::InvalidSelectionArgument`] when the separator
/// is missing, the line number does not parse, or the vendor is empty.
pub fn parse_selection(argument: &str) -> Result<(u32, String)> {
    let (line, vendor) =
        argument
            .split_once(':')
            .ok_or_else(|| PortalError::InvalidSelectionArgument {
                argument: argument.to_string(),
                reason: "missing ':' separator".to_string(),
            })?;

    let line_no: u32 = line
        .trim()
        .parse()
        .map_err(|_| PortalError::InvalidSelectionArgument {
            argument: argument.to_string(),
            reason: format!("'{}' is not a line number", line.trim()),
        })?;
    if line_no == 0 {
        return Err(PortalError::InvalidSelectionArgument {
            argument: argument.to_string(),
            reason: "line number must be at least 1".to_string(),
        }
        .into());
    }

    let vendor = vendor.trim();
    if vendor.is_empty() {
        return Err(PortalError::InvalidSelectionArgument {
            argument: argument.to_string(),
            reason: "vendor number must not be empty".to_string(),
        }
        .into());
    }

    Ok((line_no, vendor.to_string()))
}

/// Review and approve RFQ quotations from the command line
#[derive(Parser, Debug)]
#[command(name = "rfq-approve")]
#[command(version)]
#[command(about = "Review and approve RFQ vendor quotations", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Portal username
    #[arg(long, global = true, env = "RFQ_APPROVE_USERNAME")]
    pub username: Option<String>,

    /// Portal password
    #[arg(long, global = true, env = "RFQ_APPROVE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Portal API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the approval steps waiting for you
    Steps {
        /// Free-text search across all step fields
        #[arg(long)]
        search: Option<String>,

        /// Keep only steps with this approval status
        #[arg(long)]
        status: Option<String>,

        /// Keep only steps owned by this buyer
        #[arg(long)]
        buyer: Option<String>,

        /// Sort column: inquiry, step, approver, buyer, status or date
        #[arg(long)]
        sort: Option<StepSortColumn>,

        /// Reverse the sort order
        #[arg(long)]
        descending: bool,

        /// Output format: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the vendor comparison matrix for one inquiry
    Show {
        /// Inquiry number
        inquiry_no: u32,

        /// Inquiry revision
        #[arg(long, default_value_t = 1)]
        revision: u32,

        /// Preselect an offer, as LINE:VENDOR (repeatable)
        #[arg(short, long = "line", value_name = "LINE:VENDOR")]
        lines: Vec<String>,

        /// Preselect one vendor for every product
        #[arg(long)]
        all: bool,

        /// Output format: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Approve the selected vendor offers
    Approve {
        /// Inquiry number
        inquiry_no: u32,

        /// Inquiry revision
        #[arg(long, default_value_t = 1)]
        revision: u32,

        /// Select an offer to approve, as LINE:VENDOR (repeatable)
        #[arg(short, long = "line", value_name = "LINE:VENDOR")]
        lines: Vec<String>,

        /// Approve one vendor for every product still open
        #[arg(long)]
        all: bool,

        /// Note recorded on every submitted step
        #[arg(short, long, default_value = "")]
        note: String,

        /// Output format for the refreshed matrix: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Reject the selected vendor offers
    Reject {
        /// Inquiry number
        inquiry_no: u32,

        /// Inquiry revision
        #[arg(long, default_value_t = 1)]
        revision: u32,

        /// Select an offer to reject, as LINE:VENDOR (repeatable)
        #[arg(short, long = "line", value_name = "LINE:VENDOR")]
        lines: Vec<String>,

        /// Reject one vendor for every product still open
        #[arg(long)]
        all: bool,

        /// Note recorded on every submitted step
        #[arg(short, long, default_value = "")]
        note: String,

        /// Output format for the refreshed matrix: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
