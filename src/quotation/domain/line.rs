use crate::shared::error::PortalError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Approval status of a quotation line as recorded by the backend.
///
/// A line with a status is final: it can no longer be selected,
/// deselected, or re-submitted by the approver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    #[serde(rename = "APP")]
    Approved,
    #[serde(rename = "REJ")]
    Rejected,
}

impl ApprovalStatus {
    /// The wire code sent to the approval-step endpoint.
    pub fn code(&self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "APP",
            ApprovalStatus::Rejected => "REJ",
        }
    }
}

/// One row of a quotation: a single vendor's offer for a single product
/// line within an inquiry.
///
/// `(line_no, vendor_no)` is unique within one backend response. Rows
/// arrive untyped from the API and are validated with [`QuotationLine::validate`]
/// before entering the matrix builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationLine {
    pub line_no: u32,
    pub vendor_no: String,
    pub vendor_name: String,
    pub part_no: String,
    pub description: String,
    pub qty: f64,
    pub unit_of_measure: String,
    pub unit_price: f64,
    pub price_incl_tax: f64,
    pub net_amount: f64,
    pub gross_amount: f64,
    pub row_type: String,
    pub currency_code: String,
    #[serde(rename = "netAmountTRY")]
    pub net_amount_try: f64,
    #[serde(rename = "grossAmountTRY")]
    pub gross_amount_try: f64,
    pub discount_price: f64,
    #[serde(default)]
    pub approval_status: Option<ApprovalStatus>,
}

impl QuotationLine {
    /// Validates a row at the API boundary.
    ///
    /// Rejects rows the matrix builder cannot place: a `line_no` of zero
    /// (offers are indexed by `line_no - 1`), an empty `vendor_no`, and
    /// non-finite numeric fields (NaN or infinity from malformed JSON
    /// round-trips).
    pub fn validate(&self) -> Result<()> {
        if self.line_no == 0 {
            return Err(self.invalid("lineNo must be at least 1").into());
        }
        if self.vendor_no.trim().is_empty() {
            return Err(self.invalid("vendorNo must not be empty").into());
        }
        for (name, value) in [
            ("qty", self.qty),
            ("unitPrice", self.unit_price),
            ("priceInclTax", self.price_incl_tax),
            ("netAmount", self.net_amount),
            ("grossAmount", self.gross_amount),
            ("netAmountTRY", self.net_amount_try),
            ("grossAmountTRY", self.gross_amount_try),
            ("discountPrice", self.discount_price),
        ] {
            if !value.is_finite() {
                return Err(self
                    .invalid(&format!("{} is not a finite number", name))
                    .into());
            }
        }
        Ok(())
    }

    /// True when the line carries a final status and is locked against
    /// further selection changes.
    pub fn is_locked(&self) -> bool {
        self.approval_status.is_some()
    }

    fn invalid(&self, reason: &str) -> PortalError {
        PortalError::InvalidQuotationLine {
            line_no: self.line_no,
            vendor_no: self.vendor_no.clone(),
            reason: reason.to_string(),
        }
    }
}
