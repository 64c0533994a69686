/// Mock implementations for testing
mod mock_approval_gateway;
mod mock_progress_reporter;

pub use mock_approval_gateway::MockApprovalGateway;
pub use mock_progress_reporter::MockProgressReporter;
