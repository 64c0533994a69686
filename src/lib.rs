//! rfq-approve - command-line review and approval of RFQ vendor quotations
//!
//! This library loads the quotation lines of a procurement inquiry, reshapes
//! them into a product × vendor comparison matrix, tracks which vendor the
//! approver intends to approve per product, and submits the resulting
//! approval steps to the portal backend, following hexagonal architecture
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`quotation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use rfq_approve::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let gateway = PortalApiClient::new("https://portal.example.com", 30)?;
//! let progress_reporter = StderrProgressReporter::new();
//! let credentials = Credentials::new("approver", "secret");
//!
//! // Load the comparison matrix for inquiry 119, revision 1
//! let use_case = LoadQuotationUseCase::new(gateway, progress_reporter);
//! let mut selection = SelectionState::new();
//! let view = use_case.execute(&credentials, 119, 1, &mut selection).await?;
//!
//! // Render it
//! let formatter = MarkdownFormatter::new();
//! let output = formatter.format_matrix(&view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod quotation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::PortalApiClient;
    pub use crate::application::dto::{ApprovalItem, ApprovalResult, DispatchReport, QuotationView};
    pub use crate::application::use_cases::{
        DispatchApprovalsUseCase, DispatchContext, DispatchOutcome, ListStepsUseCase,
        LoadQuotationUseCase,
    };
    pub use crate::ports::outbound::{
        ApprovalGateway, ApprovalStepRequest, Credentials, OutputPresenter, ProgressReporter,
        QuotationLinesPage, ReportFormatter,
    };
    pub use crate::quotation::domain::{
        build_matrix, ApprovalStatus, ComparisonMatrix, QuotationLine, StepRecord,
    };
    pub use crate::quotation::services::{SelectionState, StepFilter, StepSortColumn};
    pub use crate::shared::Result;
}
