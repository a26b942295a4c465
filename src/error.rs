//! The one error kind `listdiff` reports.
use std::path::{Path, PathBuf};

/// Every failure is an input or output file we couldn't use. Nothing is
/// retried: the first `Error` ends the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source couldn't be opened or read, or the sink couldn't be created
    /// or written.
    #[error("can't {action} {}: {source}", .path.display())]
    ResourceUnavailable {
        /// What we were doing: `open`, `read`, `create` or `write`
        action: &'static str,
        /// The file we were doing it to
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// `Result` with `listdiff::Error` as the error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns a closure suitable for `map_err`, tagging an `io::Error` with
    /// the action and path that produced it.
    pub(crate) fn unavailable<'a>(
        action: &'static str,
        path: &'a Path,
    ) -> impl FnOnce(std::io::Error) -> Error + 'a {
        move |source| Error::ResourceUnavailable { action, path: path.to_owned(), source }
    }
}
