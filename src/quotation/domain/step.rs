use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One pending approval step assigned to the current user, as returned
/// by the pending-steps endpoint.
///
/// `inquiry_no` and `revision_no` are the identity keys used to open the
/// comparison screen for the step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub inquiry_no: u32,
    pub revision_no: u32,
    pub step_no: u32,
    pub approver_name: String,
    pub person_id: String,
    #[serde(default)]
    pub approval_group: Option<String>,
    pub approval_status: String,
    pub buyer_name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub prev_approval_date: Option<NaiveDateTime>,
    /// `^`-separated compound key of the workflow subject, e.g.
    /// `"INQUIRY_NO=119^VENDOR_NO=300004^"`. Older workflow records carry
    /// their vendor only here.
    #[serde(default)]
    pub key_ref: Option<String>,
}

impl StepRecord {
    /// Position of this approver in the chain. Step numbers are assigned
    /// in increments of ten (10, 20, 30, ...), so order = step_no / 10.
    pub fn approver_order(&self) -> u32 {
        self.step_no / 10
    }

    /// Renders the previous approval date for table output, or "-" when
    /// no prior approval exists.
    pub fn prev_approval_display(&self) -> String {
        match self.prev_approval_date {
            Some(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
            None => "-".to_string(),
        }
    }

    /// The vendor the step targets, resolved from the compound key.
    pub fn key_ref_vendor(&self) -> Option<&str> {
        self.key_ref
            .as_deref()
            .and_then(|key_ref| key_ref_part(key_ref, "VENDOR_NO"))
    }
}

/// Parses one named part out of a `^`-separated compound key, e.g.
/// `INQUIRY_NO` from `"INQUIRY_NO=119^VENDOR_NO=300004^"`.
///
/// Returns `None` when the part is absent.
fn key_ref_part<'a>(key_ref: &'a str, name: &str) -> Option<&'a str> {
    key_ref.split('^').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        (key == name).then_some(value)
    })
}
