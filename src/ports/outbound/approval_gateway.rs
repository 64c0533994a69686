use crate::quotation::domain::{ApprovalStatus, QuotationLine, StepRecord};
use crate::shared::Result;
use async_trait::async_trait;

/// Opaque credential pair forwarded verbatim in every request body.
///
/// The core never validates or interprets these; the backend is the sole
/// authority on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// One approval-step submission: the next workflow step for a single
/// `(line, vendor)` pair of an inquiry.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalStepRequest {
    /// Logical-unit name of the row being approved; comes from the
    /// quotation line's `row_type`.
    pub lu_name: String,
    pub inquiry_no: u32,
    pub quot_line_no: u32,
    pub revision_no: u32,
    pub vendor_no: String,
    pub status: ApprovalStatus,
    pub note: String,
}

/// Result of loading the quotation lines of one inquiry revision.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationLinesPage {
    pub lines: Vec<QuotationLine>,
    pub total_count: u32,
    pub inquiry_no: u32,
}

/// ApprovalGateway port for the procurement approval backend
///
/// This port abstracts the REST backend that stores quotations and
/// approval workflow state. All calls are independent POST requests with
/// credentials embedded in the body.
///
/// # Async Support
/// All methods are async; the dispatcher issues many
/// `submit_approval_step` calls concurrently, so implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait ApprovalGateway: Send + Sync {
    /// Fetches all quotation lines of one inquiry revision
    ///
    /// # Arguments
    /// * `credentials` - Opaque credential pair for the request body
    /// * `inquiry_no` - Inquiry identity
    /// * `revision_no` - Revision of the inquiry
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The API returns a non-success status code
    /// - The API reports `success: false` or omits the line array
    async fn fetch_quotation_lines(
        &self,
        credentials: &Credentials,
        inquiry_no: u32,
        revision_no: u32,
    ) -> Result<QuotationLinesPage>;

    /// Submits one approval (or rejection) step
    ///
    /// Application-level failure (`success: false`) is an error like any
    /// transport failure; the dispatcher captures it per item instead of
    /// aborting the batch.
    async fn submit_approval_step(
        &self,
        credentials: &Credentials,
        request: &ApprovalStepRequest,
    ) -> Result<()>;

    /// Fetches the approval steps currently pending for the caller
    async fn fetch_my_steps(&self, credentials: &Credentials) -> Result<Vec<StepRecord>>;
}
