use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The filesystem call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileOperation {
    #[error("reading a blueprint")]
    Read,
    #[error("writing a placeholder file")]
    Write,
    #[error("creating a directory")]
    Mkdir,
}

/// An I/O failure tied to the path it happened on.
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} at '{}'", .path.display())]
#[diagnostic(
    code(ossature::io),
    help("Check file permissions, disk space, and that no file sits where a folder is expected.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: impl AsRef<Path>, error: std::io::Error) -> Self {
        Self {
            operation,
            path: path.as_ref().to_path_buf(),
            source: error,
        }
    }

    pub fn mkdir(path: impl AsRef<Path>, error: std::io::Error) -> Self {
        Self::new(FileOperation::Mkdir, path, error)
    }

    pub fn write(path: impl AsRef<Path>, error: std::io::Error) -> Self {
        Self::new(FileOperation::Write, path, error)
    }

    pub fn read(path: impl AsRef<Path>, error: std::io::Error) -> Self {
        Self::new(FileOperation::Read, path, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation_and_path() {
        let error = IoError::mkdir(
            "backend/models",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );

        assert_eq!(error.operation, FileOperation::Mkdir);
        assert_eq!(
            error.to_string(),
            "I/O error: creating a directory at 'backend/models'"
        );
    }
}
