use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted report content is presented.
pub trait OutputPresenter {
    /// Presents the formatted report content to the output destination
    ///
    /// # Arguments
    /// * `content` - The formatted content to present
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
