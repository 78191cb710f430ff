use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where plans and summaries are presented.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}

impl<T: OutputPresenter + ?Sized> OutputPresenter for Box<T> {
    fn present(&self, content: &str) -> Result<()> {
        (**self).present(content)
    }
}
