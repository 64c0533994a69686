/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (approval backend, console, file
/// system).
pub mod approval_gateway;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use approval_gateway::{ApprovalGateway, ApprovalStepRequest, Credentials, QuotationLinesPage};
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
