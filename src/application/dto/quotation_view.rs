use crate::quotation::domain::{ComparisonMatrix, QuotationLine};
use crate::quotation::services::SelectionState;
use serde::Serialize;

/// Everything the presentation layer needs to render one inquiry: the
/// comparison matrix, the raw lines (for lock checks), and a snapshot of
/// the current selection.
///
/// Rendering is a pure function of this view; no core logic lives in the
/// formatters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationView {
    pub inquiry_no: u32,
    pub revision_no: u32,
    pub total_count: u32,
    #[serde(flatten)]
    pub matrix: ComparisonMatrix,
    pub lines: Vec<QuotationLine>,
    pub selection: SelectionState,
}

impl QuotationView {
    /// True when the given offer cell is currently selected for approval.
    pub fn is_selected(&self, line_no: u32, vendor_no: &str) -> bool {
        self.selection.is_selected(line_no, vendor_no)
    }

    /// True when the given offer cell carries a final APP/REJ status.
    pub fn is_locked(&self, line_no: u32, vendor_no: &str) -> bool {
        SelectionState::is_locked(line_no, vendor_no, &self.lines)
    }
}
