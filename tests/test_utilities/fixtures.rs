use rfq_approve::prelude::*;

/// Builds a quotation line with realistic pricing fields.
pub fn quotation_line(line_no: u32, vendor_no: &str, gross_try: f64) -> QuotationLine {
    QuotationLine {
        line_no,
        vendor_no: vendor_no.to_string(),
        vendor_name: format!("Vendor {}", vendor_no),
        part_no: format!("E1000{:02}", line_no),
        description: format!("Part {}", line_no),
        qty: 10.0,
        unit_of_measure: "kg".to_string(),
        unit_price: 25.0,
        price_incl_tax: 30.0,
        net_amount: 250.0,
        gross_amount: 300.0,
        row_type: "InquiryLineQuot".to_string(),
        currency_code: "USD".to_string(),
        net_amount_try: gross_try * 0.8,
        gross_amount_try: gross_try,
        discount_price: 0.0,
        approval_status: None,
    }
}

/// Builds a pending step record for the steps listing.
pub fn step_record(inquiry_no: u32, step_no: u32, status: &str) -> StepRecord {
    StepRecord {
        inquiry_no,
        revision_no: 1,
        step_no,
        approver_name: "Utku Gun".to_string(),
        person_id: "UGUN".to_string(),
        approval_group: None,
        approval_status: status.to_string(),
        buyer_name: "Buyer One".to_string(),
        note: None,
        prev_approval_date: None,
        key_ref: Some(format!("INQUIRY_NO={}^VENDOR_NO=300004^", inquiry_no)),
    }
}
