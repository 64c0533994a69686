/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod dispatch_report;
mod quotation_view;

pub use dispatch_report::{ApprovalItem, ApprovalResult, DispatchReport};
pub use quotation_view::QuotationView;
