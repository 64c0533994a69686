pub mod line;
pub mod matrix;
pub mod step;

pub use line::{ApprovalStatus, QuotationLine};
pub use matrix::{build_matrix, ComparisonMatrix, Offer, Product, Vendor};
pub use step::StepRecord;
