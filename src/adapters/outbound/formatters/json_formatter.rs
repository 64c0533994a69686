use crate::application::dto::QuotationView;
use crate::ports::outbound::ReportFormatter;
use crate::quotation::domain::StepRecord;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable report output
///
/// This adapter implements the ReportFormatter port for JSON format.
/// Serializes the view models directly, so the JSON shape follows the
/// camelCase wire naming of the portal API.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_matrix(&self, view: &QuotationView) -> Result<String> {
        let mut output = serde_json::to_string_pretty(view)?;
        output.push('\n');
        Ok(output)
    }

    fn format_steps(&self, steps: &[StepRecord]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(steps)?;
        output.push('\n');
        Ok(output)
    }
}
