pub mod selection;
pub mod step_filter;

pub use selection::SelectionState;
pub use step_filter::{StepFilter, StepSortColumn};
