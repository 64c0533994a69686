use crate::application::dto::QuotationView;
use crate::ports::outbound::{ApprovalGateway, Credentials, ProgressReporter, QuotationLinesPage};
use crate::quotation::domain::build_matrix;
use crate::quotation::services::SelectionState;
use crate::shared::error::PortalError;
use crate::shared::Result;

/// LoadQuotationUseCase - loads one inquiry revision and prepares it for
/// rendering
///
/// Orchestrates the load pipeline: fetch the flat line list from the
/// gateway, validate every row at the boundary, build the comparison
/// matrix, and seed the selection from lines already approved
/// server-side.
///
/// On any failure the caller's selection and previously loaded data are
/// left untouched; re-running the command is the retry path.
///
/// # Type Parameters
/// * `G` - ApprovalGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadQuotationUseCase<G, PR> {
    gateway: G,
    progress_reporter: PR,
}

impl<G, PR> LoadQuotationUseCase<G, PR>
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

    /// Executes the load pipeline for one inquiry revision.
    ///
    /// Seeds `selection` with every already-approved line; manual
    /// selections for other products are preserved.
    pub async fn execute(
        &self,
        credentials: &Credentials,
        inquiry_no: u32,
        revision_no: u32,
        selection: &mut SelectionState,
    ) -> Result<QuotationView> {
        self.progress_reporter.report(&format!(
            "📖 Loading quotation lines for inquiry {} (revision {})...",
            inquiry_no, revision_no
        ));

        let page = self
            .gateway
            .fetch_quotation_lines(credentials, inquiry_no, revision_no)
            .await
            .map_err(|e| PortalError::QuotationLoadError {
                inquiry_no,
                revision_no,
                details: e.to_string(),
            })?;

        let view = assemble_view(inquiry_no, revision_no, page, selection)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} line(s): {} product(s) × {} vendor(s)",
            view.lines.len(),
            view.matrix.products.len(),
            view.matrix.vendors.len()
        ));

        Ok(view)
    }
}

/// Shared tail of the load pipeline, also run by the dispatcher's
/// post-approval reload: boundary validation, matrix build, APP seeding.
///
/// The selection is only touched after every row has validated, so a
/// malformed payload cannot leave it half-seeded.
pub(crate) fn assemble_view(
    inquiry_no: u32,
    revision_no: u32,
    page: QuotationLinesPage,
    selection: &mut SelectionState,
) -> Result<QuotationView> {
    for line in &page.lines {
        line.validate()?;
    }

    let matrix = build_matrix(&page.lines);
    selection.seed_approved(&page.lines);

    Ok(QuotationView {
        inquiry_no,
        revision_no,
        total_count: page.total_count,
        matrix,
        lines: page.lines,
        selection: selection.clone(),
    })
}
