use crate::application::dto::{ApprovalItem, ApprovalResult, DispatchReport, QuotationView};
use crate::application::use_cases::load_quotation::assemble_view;
use crate::ports::outbound::{
    ApprovalGateway, ApprovalStepRequest, Credentials, ProgressReporter,
};
use crate::quotation::domain::{ApprovalStatus, QuotationLine};
use crate::quotation::services::SelectionState;
use crate::shared::error::PortalError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};

/// Identity and intent of one dispatch cycle.
#[derive(Debug, Clone)]
pub struct DispatchContext {
    pub inquiry_no: u32,
    pub revision_no: u32,
    pub note: String,
    pub status: ApprovalStatus,
}

/// What a dispatch produced: the per-item report plus the refreshed view
/// when the post-approval reload ran and still matched the dispatched
/// inquiry.
#[derive(Debug)]
pub struct DispatchOutcome {
    pub report: DispatchReport,
    pub refreshed: Option<QuotationView>,
}

/// DispatchApprovalsUseCase - submits the selected offers as approval
/// steps
///
/// Implements the fire-all/await-all batch: one request per selected
/// `(line, vendor)` pair, all issued concurrently, with each future
/// carrying its item's identity so aggregation never depends on
/// completion order. Individual failures are captured, not thrown; the
/// batch always settles completely before the summary is built.
///
/// After the batch: selection entries are cleared for successes only,
/// and a full reload runs when at least one item succeeded. A reload
/// whose response identifies a different inquiry than the one dispatched
/// is discarded as stale.
///
/// # Type Parameters
/// * `G` - ApprovalGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct DispatchApprovalsUseCase<G, PR> {
    gateway: G,
    progress_reporter: PR,
    approving: AtomicBool,
}

impl<G, PR> DispatchApprovalsUseCase<G, PR>
where
    G: ApprovalGateway,
    PR: ProgressReporter,
{
    pub fn new(gateway: G, progress_reporter: PR) -> Self {
        Self {
            gateway,
            progress_reporter,
            approving: AtomicBool::new(false),
        }
    }

    /// Executes one dispatch cycle.
    ///
    /// # Errors
    /// Returns an error without any network activity when the selection
    /// is empty or another dispatch is already in flight. Per-item
    /// request failures are never errors; they are aggregated into the
    /// returned report.
    pub async fn execute(
        &self,
        credentials: &Credentials,
        context: &DispatchContext,
        lines: &[QuotationLine],
        selection: &mut SelectionState,
    ) -> Result<DispatchOutcome> {
        if selection.is_empty() {
            return Err(PortalError::EmptySelection {
                action: action_noun(context.status).to_string(),
            }
            .into());
        }

        if self.approving.swap(true, Ordering::SeqCst) {
            anyhow::bail!("An approval dispatch is already in flight");
        }
        let _guard = ApprovingGuard(&self.approving);

        let items = resolve_items(selection, lines);
        if items.is_empty() {
            // Every selected pair pointed at a line no longer present.
            return Ok(DispatchOutcome {
                report: DispatchReport {
                    status: context.status,
                    results: Vec::new(),
                    reloaded: false,
                },
                refreshed: None,
            });
        }

        let results = self.submit_batch(credentials, context, items).await;

        for result in results.iter().filter(|r| r.success) {
            selection.remove(result.item.line_no);
        }

        let refreshed = if results.iter().any(|r| r.success) {
            self.reload(credentials, context, selection).await
        } else {
            None
        };

        let report = DispatchReport {
            status: context.status,
            results,
            reloaded: refreshed.is_some(),
        };
        self.progress_reporter
            .report_completion(&report.summary_message());

        Ok(DispatchOutcome { report, refreshed })
    }

    /// Issues every request concurrently and waits for all of them to
    /// settle, collecting identity-carrying results in completion order.
    async fn submit_batch(
        &self,
        credentials: &Credentials,
        context: &DispatchContext,
        items: Vec<ApprovalItem>,
    ) -> Vec<ApprovalResult> {
        let total = items.len();
        self.progress_reporter.report(&format!(
            "🚀 Submitting {} {} step(s)...",
            total,
            action_noun(context.status)
        ));

        let mut pending = stream::iter(items.into_iter().map(|item| {
            let request = ApprovalStepRequest {
                lu_name: item.line.row_type.clone(),
                inquiry_no: context.inquiry_no,
                quot_line_no: item.line_no,
                revision_no: context.revision_no,
                vendor_no: item.vendor_no.clone(),
                status: context.status,
                note: context.note.clone(),
            };
            async move {
                match self
                    .gateway
                    .submit_approval_step(credentials, &request)
                    .await
                {
                    Ok(()) => ApprovalResult {
                        item,
                        success: true,
                        error: None,
                    },
                    Err(e) => ApprovalResult {
                        item,
                        success: false,
                        error: Some(e.to_string()),
                    },
                }
            }
        }))
        .buffer_unordered(total);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = pending.next().await {
            results.push(result);
            self.progress_reporter.report_progress(
                results.len(),
                total,
                Some("Submitting approval steps"),
            );
        }
        results
    }

    /// Reloads the inquiry to pick up server-side state. Failures go to
    /// the load error channel (the progress reporter), independent of
    /// the approval summary; a response for a different inquiry is
    /// dropped.
    async fn reload(
        &self,
        credentials: &Credentials,
        context: &DispatchContext,
        selection: &mut SelectionState,
    ) -> Option<QuotationView> {
        match self
            .gateway
            .fetch_quotation_lines(credentials, context.inquiry_no, context.revision_no)
            .await
        {
            Ok(page) if page.inquiry_no == context.inquiry_no => {
                match assemble_view(context.inquiry_no, context.revision_no, page, selection) {
                    Ok(view) => Some(view),
                    Err(e) => {
                        self.progress_reporter.report_error(&format!(
                            "⚠️  Warning: Reload after dispatch failed: {}",
                            e
                        ));
                        None
                    }
                }
            }
            Ok(_) => None,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Reload after dispatch failed: {}",
                    e
                ));
                None
            }
        }
    }
}

/// Resolves the selection into dispatchable items by matching each
/// `(line_no, vendor_no)` pair against the loaded lines. Pairs with no
/// matching line are dropped; the schema invariant makes that a
/// should-not-occur case rather than an error.
fn resolve_items(selection: &SelectionState, lines: &[QuotationLine]) -> Vec<ApprovalItem> {
    selection
        .entries()
        .filter_map(|(line_no, vendor_no)| {
            lines
                .iter()
                .find(|l| l.line_no == line_no && l.vendor_no == vendor_no)
                .map(|line| ApprovalItem {
                    line_no,
                    vendor_no: vendor_no.to_string(),
                    line: line.clone(),
                })
        })
        .collect()
}

fn action_noun(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Approved => "approval",
        ApprovalStatus::Rejected => "rejection",
    }
}

struct ApprovingGuard<'a>(&'a AtomicBool);

impl Drop for ApprovingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
