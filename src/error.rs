//! Crate error type. The propagation policy is deliberately blunt: every
//! failure a demonstration can hit is fatal, the entry point prints it and
//! exits. No retries, no recovery.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    /// A demonstration document that must exist does not.
    #[error("missing required file '{0}'")]
    MissingFile(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_display() {
        let err = DemoError::MissingFile("README.md".to_string());
        assert_eq!(err.to_string(), "missing required file 'README.md'");
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let err: DemoError = io_err.into();
        assert!(matches!(err, DemoError::Io(_)));
    }
}
