use crate::application::dto::QuotationView;
use crate::quotation::domain::StepRecord;
use crate::shared::Result;

/// ReportFormatter port for rendering the portal's two reports
///
/// This port abstracts the rendering of the product × vendor comparison
/// matrix and of the pending-steps list into a concrete output format
/// (markdown tables, JSON, etc.). Formatters are pure consumers of the
/// view models; no selection or dispatch logic lives here.
pub trait ReportFormatter {
    /// Renders the comparison matrix with selection markers
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_matrix(&self, view: &QuotationView) -> Result<String>;

    /// Renders the pending approval steps table
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_steps(&self, steps: &[StepRecord]) -> Result<String>;
}
