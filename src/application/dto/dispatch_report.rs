use crate::quotation::domain::{ApprovalStatus, QuotationLine};
use crate::shared::error::ExitCode;
use serde::Serialize;

/// Maximum characters of a product description quoted in a failure
/// detail line.
const DETAIL_DESCRIPTION_CHARS: usize = 30;

/// Failure details are listed per item only when the failure count is at
/// most this; larger batches get counts only.
const MAX_DETAILED_FAILURES: usize = 3;

/// One resolved `(line_no, vendor_no)` pair of the dispatch, with the
/// quotation line it was matched against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalItem {
    pub line_no: u32,
    pub vendor_no: String,
    pub line: QuotationLine,
}

/// Outcome of one approval request within a dispatch. Matched back to
/// its originating item by the identity carried here, never by array
/// position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalResult {
    pub item: ApprovalItem,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated outcome of one dispatch cycle: per-item results plus
/// whether the post-approval reload ran. Transient; exists only to build
/// the user-facing summary and to decide which selection entries were
/// cleared.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReport {
    pub status: ApprovalStatus,
    pub results: Vec<ApprovalResult>,
    pub reloaded: bool,
}

impl DispatchReport {
    pub fn successful(&self) -> impl Iterator<Item = &ApprovalResult> {
        self.results.iter().filter(|r| r.success)
    }

    pub fn failed(&self) -> impl Iterator<Item = &ApprovalResult> {
        self.results.iter().filter(|r| !r.success)
    }

    pub fn success_count(&self) -> usize {
        self.successful().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn any_succeeded(&self) -> bool {
        self.success_count() > 0
    }

    fn action_verb(&self) -> &'static str {
        match self.status {
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    /// The one-shot summary presented after the batch settles: success
    /// and failure counts, with a per-item detail line for small failure
    /// counts.
    pub fn summary_message(&self) -> String {
        let successes = self.success_count();
        let failures = self.failure_count();

        let mut message = format!(
            "{} item(s) {}, {} failed",
            successes,
            self.action_verb(),
            failures
        );

        if failures > 0 && failures <= MAX_DETAILED_FAILURES {
            for result in self.failed() {
                let description = truncate(&result.item.line.description, DETAIL_DESCRIPTION_CHARS);
                let error = result.error.as_deref().unwrap_or("unknown error");
                message.push_str(&format!(
                    "\n  - line {} ({}) @ {}: {}",
                    result.item.line_no, description, result.item.vendor_no, error
                ));
            }
        }
        message
    }

    /// Exit code for the CLI: partial or total failure is distinguishable
    /// from a clean batch.
    pub fn exit_code(&self) -> ExitCode {
        if self.failure_count() > 0 {
            ExitCode::PartialFailure
        } else {
            ExitCode::Success
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars).collect();
        format!("{}…", prefix)
    }
}
