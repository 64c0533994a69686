use crate::ports::outbound::{ApprovalGateway, Credentials, ProgressReporter};
use crate::quotation::domain::StepRecord;
use crate::quotation::services::StepFilter;
use crate::shared::error::PortalError;
use crate::shared::Result;

/// ListStepsUseCase - lists the approval steps pending for the caller
///
/// Fetches the full pending list from the gateway and applies the
/// client-side filter and sort, matching the portal's list screen.
pub struct ListStepsUseCase<G, PR> {
    gateway: G,
    progress_reporter: PR,
}

impl<G, PR> ListStepsUseCase<G, PR>
where
    G: ApprovalGateway,
    PR: ProgressReporter,
{
    pub fn new(gateway: G, progress_reporter: PR) -> Self {
        Self {
            gateway,
            progress_reporter,
        }
    }

    pub async fn execute(
        &self,
        credentials: &Credentials,
        filter: &StepFilter,
    ) -> Result<Vec<StepRecord>> {
        self.progress_reporter
            .report("📖 Loading pending approval steps...");

        let steps = self
            .gateway
            .fetch_my_steps(credentials)
            .await
            .map_err(|e| PortalError::ApprovalServiceError {
                details: e.to_string(),
            })?;

        let visible = filter.apply(&steps);
        self.progress_reporter.report(&format!(
            "✅ {} step(s) pending, {} shown",
            steps.len(),
            visible.len()
        ));

        Ok(visible)
    }
}
