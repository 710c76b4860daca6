//! Crate error type: the fatal tier only.
//!
//! The engine has exactly two error tiers. Recoverable conditions —
//! unrecognized escape sequences, out-of-range cursor motion, an empty
//! command-buffer delete — are clamped or defaulted at the point of
//! detection and never construct an [`Error`]. What remains is fatal: a
//! terminal syscall failed or the requested file could not be opened, and
//! the process must report the failing operation and exit.

use std::io;
use thiserror::Error as ThisError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal condition.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A terminal control syscall failed. The terminal may be stuck in a
    /// broken intermediate configuration, so no recovery is attempted.
    #[error("{op}: {source}")]
    Terminal {
        /// The failing operation, named after the syscall.
        op: &'static str,
        /// The underlying OS error.
        source: io::Error,
    },

    /// The file named on the command line could not be read.
    #[error("open {path}: {source}")]
    Open {
        /// Path as given on the command line.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl Error {
    /// Build a [`Error::Terminal`] constructor for `map_err` call sites.
    pub fn terminal(op: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Terminal { op, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_error_names_the_operation() {
        let err = Error::terminal("tcsetattr")(io::Error::from_raw_os_error(9));
        assert!(err.to_string().starts_with("tcsetattr: "));
    }

    #[test]
    fn test_open_error_names_the_path() {
        let err = Error::Open {
            path: "missing.txt".into(),
            source: io::Error::from_raw_os_error(2),
        };
        assert!(err.to_string().starts_with("open missing.txt: "));
    }
}
