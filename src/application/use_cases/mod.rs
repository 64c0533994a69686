/// Use cases module containing application business logic orchestration
mod dispatch_approvals;
mod list_steps;
mod load_quotation;

pub use dispatch_approvals::{DispatchApprovalsUseCase, DispatchContext, DispatchOutcome};
pub use list_steps::ListStepsUseCase;
pub use load_quotation::LoadQuotationUseCase;
