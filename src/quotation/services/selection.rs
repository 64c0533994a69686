use crate::quotation::domain::QuotationLine;
use serde::Serialize;
use std::collections::BTreeMap;

/// The in-memory record of which vendor the approver intends to approve,
/// per product, pending submission.
///
/// Maps `line_no` to exactly one `vendor_no`; absence means unselected.
/// Two invariants hold at all times and are enforced exclusively inside
/// [`SelectionState::toggle`]:
///
/// - each product maps to at most one vendor (toggling a new vendor on
///   replaces the previous one), and
/// - a line that already carries a final status (APP or REJ) can never be
///   selected, deselected, or re-vendored by a user toggle.
///
/// Seeding, bulk select, clear, and the dispatcher's post-success removal
/// are not user toggles and bypass the lock by design of the workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SelectionState {
    chosen: BTreeMap<u32, String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force-selects every line already approved server-side.
    ///
    /// Called after every successful load, including the post-approval
    /// reload. Selections the user made for other products are kept;
    /// re-seeding with the same lines is idempotent.
    pub fn seed_approved(&mut self, lines: &[QuotationLine]) {
        for line in lines {
            if line.approval_status == Some(crate::quotation::domain::ApprovalStatus::Approved) {
                self.chosen.insert(line.line_no, line.vendor_no.clone());
            }
        }
    }

    /// Applies one checkbox toggle.
    ///
    /// Fails silently (no state change) when the matching `(line_no,
    /// vendor_no)` line is locked. Otherwise `checked` selects the vendor
    /// for the product, replacing any prior vendor, and `!checked`
    /// deselects the product.
    pub fn toggle(&mut self, line_no: u32, vendor_no: &str, checked: bool, lines: &[QuotationLine]) {
        if Self::is_locked(line_no, vendor_no, lines) {
            return;
        }
        if checked {
            self.chosen.insert(line_no, vendor_no.to_string());
        } else {
            self.chosen.remove(&line_no);
        }
    }

    /// Replaces the whole selection: for every distinct product, the
    /// lexicographically smallest `vendor_no` among its lines.
    ///
    /// The string tie-break is deliberate; it reproduces the portal's
    /// observed bulk-select behavior and keeps the result deterministic.
    pub fn select_all(&mut self, lines: &[QuotationLine]) {
        self.chosen.clear();
        for line in lines {
            match self.chosen.get(&line.line_no) {
                Some(current) if current.as_str() <= line.vendor_no.as_str() => {}
                _ => {
                    self.chosen.insert(line.line_no, line.vendor_no.clone());
                }
            }
        }
    }

    /// Empties the selection entirely.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// True iff the matching line carries a final APP or REJ status.
    pub fn is_locked(line_no: u32, vendor_no: &str, lines: &[QuotationLine]) -> bool {
        lines
            .iter()
            .find(|l| l.line_no == line_no && l.vendor_no == vendor_no)
            .is_some_and(|l| l.is_locked())
    }

    /// Removes one product's entry, whatever vendor it points at.
    ///
    /// Used by the dispatcher after a successful approval; the approved
    /// product can no longer be re-selected.
    pub fn remove(&mut self, line_no: u32) {
        self.chosen.remove(&line_no);
    }

    /// The vendor currently selected for a product, if any.
    pub fn vendor_for(&self, line_no: u32) -> Option<&str> {
        self.chosen.get(&line_no).map(String::as_str)
    }

    pub fn is_selected(&self, line_no: u32, vendor_no: &str) -> bool {
        self.vendor_for(line_no) == Some(vendor_no)
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Entries in ascending `line_no` order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &str)> {
        self.chosen.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotation::domain::line::test_fixtures::{line, line_with_status};
    use crate::quotation::domain::ApprovalStatus;

    fn sample_lines() -> Vec<crate::quotation::domain::QuotationLine> {
        vec![
            line(1, "V2", 100.0),
            line(1, "V1", 110.0),
            line(2, "V1", 200.0),
            line_with_status(3, "V1", ApprovalStatus::Approved),
            line_with_status(2, "V3", ApprovalStatus::Rejected),
        ]
    }

    #[test]
    fn test_toggle_enforces_one_vendor_per_product() {
        let lines = sample_lines();
        let mut selection = SelectionState::new();

        selection.toggle(1, "V1", true, &lines);
        selection.toggle(1, "V2", true, &lines);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.vendor_for(1), Some("V2"));
    }

    #[test]
    fn test_toggle_off_deselects() {
        let lines = sample_lines();
        let mut selection = SelectionState::new();

        selection.toggle(1, "V1", true, &lines);
        selection.toggle(1, "V1", false, &lines);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_is_noop_on_locked_lines() {
        let lines = sample_lines();
        let mut selection = SelectionState::new();

        // Approved line: selecting it is refused.
        selection.toggle(3, "V1", true, &lines);
        assert!(selection.is_empty());

        // Rejected line likewise.
        selection.toggle(2, "V3", true, &lines);
        assert!(selection.is_empty());

        // And a locked entry cannot be toggled off.
        selection.seed_approved(&lines);
        assert_eq!(selection.vendor_for(3), Some("V1"));
        selection.toggle(3, "V1", false, &lines);
        assert_eq!(selection.vendor_for(3), Some("V1"));
    }

    #[test]
    fn test_seed_approved_is_idempotent_and_preserves_manual_picks() {
        let lines = sample_lines();
        let mut selection = SelectionState::new();

        selection.toggle(2, "V1", true, &lines);
        selection.seed_approved(&lines);
        let after_first = selection.clone();
        selection.seed_approved(&lines);

        assert_eq!(selection, after_first);
        assert_eq!(selection.vendor_for(2), Some("V1"));
        assert_eq!(selection.vendor_for(3), Some("V1"));
    }

    #[test]
    fn test_select_all_picks_lexicographically_smallest_vendor() {
        let lines = sample_lines();
        let mut selection = SelectionState::new();
        selection.toggle(1, "V2", true, &lines);

        selection.select_all(&lines);

        assert_eq!(selection.vendor_for(1), Some("V1"));
        assert_eq!(selection.vendor_for(2), Some("V1"));
        assert_eq!(selection.vendor_for(3), Some("V1"));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_clear_empties_everything() {
        let lines = sample_lines();
        let mut selection = SelectionState::new();
        selection.select_all(&lines);
        assert!(!selection.is_empty());

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_is_locked_matches_exact_pair() {
        let lines = sample_lines();
        assert!(SelectionState::is_locked(3, "V1", &lines));
        assert!(SelectionState::is_locked(2, "V3", &lines));
        assert!(!SelectionState::is_locked(2, "V1", &lines));
        assert!(!SelectionState::is_locked(9, "V1", &lines));
    }

    #[test]
    fn test_exclusivity_holds_under_arbitrary_toggle_sequences() {
        let lines = sample_lines();
        let mut selection = SelectionState::new();
        let sequence = [
            (1, "V1", true),
            (2, "V1", true),
            (1, "V2", true),
            (2, "V1", false),
            (1, "V1", true),
            (2, "V1", true),
        ];
        for (line_no, vendor, checked) in sequence {
            selection.toggle(line_no, vendor, checked, &lines);
        }

        // One entry per line_no by construction of the map; check the
        // final winners are the last toggled-on vendors.
        assert_eq!(selection.vendor_for(1), Some("V1"));
        assert_eq!(selection.vendor_for(2), Some("V1"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_entries_iterate_in_line_order() {
        let lines = sample_lines();
        let mut selection = SelectionState::new();
        selection.toggle(2, "V1", true, &lines);
        selection.toggle(1, "V2", true, &lines);

        let entries: Vec<(u32, &str)> = selection.entries().collect();
        assert_eq!(entries, vec![(1, "V2"), (2, "V1")]);
    }
}
