use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested operation completed
    Success = 0,
    /// At least one approval step in the dispatched batch failed
    PartialFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PartialFailure => write!(f, "Partial Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the approval portal client.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Failed to load quotation lines for inquiry {inquiry_no} (revision {revision_no})\nDetails: {details}\n\n💡 Hint: Check your network connection and re-run the command to retry")]
    QuotationLoadError {
        inquiry_no: u32,
        revision_no: u32,
        details: String,
    },

    #[error("The approval service rejected the request\nDetails: {details}\n\n💡 Hint: Verify your credentials and that the inquiry is still awaiting your approval")]
    ApprovalServiceError { details: String },

    #[error("Malformed quotation line received from the backend (line {line_no}, vendor {vendor_no})\nReason: {reason}")]
    InvalidQuotationLine {
        line_no: u32,
        vendor_no: String,
        reason: String,
    },

    #[error("No items selected for {action}\n\n💡 Hint: Select at least one vendor offer with --line LINE:VENDOR or --all")]
    EmptySelection { action: String },

    #[error("Missing credentials\n\n💡 Hint: Provide --username/--password, set RFQ_APPROVE_USERNAME/RFQ_APPROVE_PASSWORD, or store a username in rfq-approve.config.yml")]
    MissingCredentials,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: std::path::PathBuf, details: String },

    /// Validation error for user-supplied selection arguments
    #[error("Invalid selection argument '{argument}': {reason}\n\n💡 Hint: Use the form LINE:VENDOR, e.g. --line 2:300005")]
    InvalidSelectionArgument { argument: String, reason: String },
}
