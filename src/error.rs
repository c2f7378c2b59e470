//! Error handling for the algorithms harness

use std::io;
use thiserror::Error;

/// Custom error type for harness operations
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Is a directory: {file}")]
    IsDirectory { file: String },

    #[error("Parse error on line {line}: invalid integer '{token}'")]
    Parse { line: usize, token: String },

    #[error("Algorithm not implemented: {name}")]
    UnimplementedAlgorithm { name: String },

    #[error("Unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("Search algorithm {algorithm} requires a target value")]
    MissingTarget { algorithm: String },

    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },
}

impl HarnessError {
    /// Returns the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HarnessError::PermissionDenied { .. }
            | HarnessError::FileNotFound { .. }
            | HarnessError::IsDirectory { .. }
            | HarnessError::Io(_) => crate::ACCESS_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        HarnessError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        HarnessError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an is directory error
    pub fn is_directory(file: &str) -> Self {
        HarnessError::IsDirectory {
            file: file.to_string(),
        }
    }

    /// Create a parse error for a token on a 1-based line
    pub fn parse(line: usize, token: &str) -> Self {
        HarnessError::Parse {
            line,
            token: token.to_string(),
        }
    }

    pub fn unimplemented_algorithm(name: &str) -> Self {
        HarnessError::UnimplementedAlgorithm {
            name: name.to_string(),
        }
    }

    pub fn unknown_algorithm(name: &str) -> Self {
        HarnessError::UnknownAlgorithm {
            name: name.to_string(),
        }
    }

    pub fn missing_target(algorithm: &str) -> Self {
        HarnessError::MissingTarget {
            algorithm: algorithm.to_string(),
        }
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments(message: &str) -> Self {
        HarnessError::InvalidArguments {
            message: message.to_string(),
        }
    }

    /// True for the missing/unreadable input family of errors
    pub fn is_access_error(&self) -> bool {
        self.exit_code() == crate::ACCESS_FAILURE
    }
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Context trait for attaching a file name to I/O failures
pub trait HarnessContext<T> {
    fn with_file_context(self, filename: &str) -> HarnessResult<T>;
}

impl<T> HarnessContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> HarnessResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => HarnessError::permission_denied(filename),
            io::ErrorKind::NotFound => HarnessError::file_not_found(filename),
            _ => HarnessError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}

impl<T> HarnessContext<T> for HarnessResult<T> {
    fn with_file_context(self, filename: &str) -> HarnessResult<T> {
        self.map_err(|err| match err {
            HarnessError::Io(io_err) => match io_err.kind() {
                io::ErrorKind::PermissionDenied => HarnessError::permission_denied(filename),
                io::ErrorKind::NotFound => HarnessError::file_not_found(filename),
                _ => HarnessError::Io(io::Error::new(
                    io_err.kind(),
                    format!("{}: {}", filename, io_err),
                )),
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_context_maps_not_found() {
        let raw: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = raw.with_file_context("input.txt").unwrap_err();
        assert!(matches!(err, HarnessError::FileNotFound { ref file } if file == "input.txt"));
        assert_eq!(err.exit_code(), crate::ACCESS_FAILURE);
        assert!(err.is_access_error());
    }

    #[test]
    fn test_file_context_keeps_parse_errors() {
        let raw: HarnessResult<()> = Err(HarnessError::parse(3, "x"));
        let err = raw.with_file_context("input.txt").unwrap_err();
        assert!(matches!(err, HarnessError::Parse { line: 3, .. }));
        assert_eq!(err.exit_code(), crate::EXIT_FAILURE);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HarnessError::parse(2, "4a").to_string(),
            "Parse error on line 2: invalid integer '4a'"
        );
        assert_eq!(
            HarnessError::unimplemented_algorithm("shell_sort").to_string(),
            "Algorithm not implemented: shell_sort"
        );
    }
}
