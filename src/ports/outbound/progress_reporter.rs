/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user feedback (e.g., to stderr) during network
/// operations: the quotation load, the concurrent approval batch, and
/// the post-approval reload.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports progress through the approval batch
    ///
    /// # Arguments
    /// * `current` - Number of requests settled so far
    /// * `total` - Total requests in the batch
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
