use crate::quotation::domain::StepRecord;
use std::cmp::Ordering;
use std::str::FromStr;

/// Columns the pending-steps table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSortColumn {
    InquiryNo,
    StepNo,
    Approver,
    Buyer,
    Status,
    PrevApprovalDate,
}

impl FromStr for StepSortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inquiry" => Ok(StepSortColumn::InquiryNo),
            "step" => Ok(StepSortColumn::StepNo),
            "approver" => Ok(StepSortColumn::Approver),
            "buyer" => Ok(StepSortColumn::Buyer),
            "status" => Ok(StepSortColumn::Status),
            "date" => Ok(StepSortColumn::PrevApprovalDate),
            _ => Err(format!(
                "Invalid sort column: {}. Use one of: inquiry, step, approver, buyer, status, date",
                s
            )),
        }
    }
}

/// Client-side filtering and sorting for the pending-steps list.
///
/// Mirrors the portal's list screen: a free-text search across every
/// displayed field, exact-match status and buyer filters, and a single
/// sortable column. All filters are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct StepFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub buyer: Option<String>,
    pub sort: Option<StepSortColumn>,
    pub descending: bool,
}

impl StepFilter {
    pub fn apply(&self, steps: &[StepRecord]) -> Vec<StepRecord> {
        let mut result: Vec<StepRecord> = steps
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .collect();

        if let Some(column) = self.sort {
            result.sort_by(|a, b| {
                let ord = Self::compare(a, b, column);
                if self.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }
        result
    }

    fn matches(&self, step: &StepRecord) -> bool {
        if let Some(status) = &self.status {
            if !step.approval_status.eq_ignore_ascii_case(status) {
                return false;
            }
        }
        if let Some(buyer) = &self.buyer {
            if !step.buyer_name.eq_ignore_ascii_case(buyer) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystack = [
                step.inquiry_no.to_string(),
                step.revision_no.to_string(),
                step.step_no.to_string(),
                step.approver_name.clone(),
                step.person_id.clone(),
                step.approval_group.clone().unwrap_or_default(),
                step.approval_status.clone(),
                step.buyer_name.clone(),
                step.note.clone().unwrap_or_default(),
                step.key_ref_vendor().unwrap_or_default().to_string(),
            ];
            if !haystack
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }

    fn compare(a: &StepRecord, b: &StepRecord, column: StepSortColumn) -> Ordering {
        match column {
            StepSortColumn::InquiryNo => a
                .inquiry_no
                .cmp(&b.inquiry_no)
                .then(a.revision_no.cmp(&b.revision_no)),
            StepSortColumn::StepNo => a.step_no.cmp(&b.step_no),
            StepSortColumn::Approver => a.approver_name.cmp(&b.approver_name),
            StepSortColumn::Buyer => a.buyer_name.cmp(&b.buyer_name),
            StepSortColumn::Status => a.approval_status.cmp(&b.approval_status),
            StepSortColumn::PrevApprovalDate => a.prev_approval_date.cmp(&b.prev_approval_date),
        }
    }
}
