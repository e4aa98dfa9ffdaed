// Centralized error handling module
// Provides context-rich error types for classification, mode selection, and hashing

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::intent::detect::AlgorithmName;

/// Main error type for the hashmatch utility
/// Every user-visible message names the offending input and carries a suggestion
#[derive(Debug)]
pub enum HashMatchError {
    /// Classification errors
    UnknownHashLength { token: String, length: usize },
    AlgorithmMismatch { token: String, configured: AlgorithmName, detected: AlgorithmName },
    AmbiguousHash { token: String, configured: AlgorithmName, candidates: Vec<AlgorithmName> },

    /// Mode selection errors (structurally invalid input combinations)
    MultipleFilesWithHashes { file_count: usize, hash_count: usize },
    StdinWithHashes,

    /// File system errors with context
    FileNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },

    /// Hash computation errors
    UnsupportedAlgorithm { algorithm: String },

    /// CLI errors
    InvalidArguments { message: String },
}

impl fmt::Display for HashMatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // Classification errors
            HashMatchError::UnknownHashLength { token, length } => {
                write!(f, "'{}' looks like a hash but has an unrecognized length ({} hex characters)\n", token, length)?;
                write!(f, "Suggestion: Supported digest lengths are 32 (md5), 40 (sha1), 64 (sha256), and 128 (sha512, blake2b)")
            }
            HashMatchError::AlgorithmMismatch { token, configured, detected } => {
                write!(
                    f,
                    "'{}' is a {}-character hash ({}), but the configured algorithm is {} ({} hex characters)\n",
                    token,
                    detected.hex_len(),
                    detected,
                    configured,
                    configured.hex_len()
                )?;
                write!(f, "Suggestion: Re-run with: hashmatch --algorithm {} {}", detected.cli_name(), token)
            }
            HashMatchError::AmbiguousHash { token, configured, candidates } => {
                let names: Vec<&str> = candidates.iter().map(|a| a.cli_name()).collect();
                write!(
                    f,
                    "'{}' is {} hex characters and could be any of: {} (configured algorithm is {})\n",
                    token,
                    token.len(),
                    names.join(", "),
                    configured
                )?;
                write!(
                    f,
                    "Suggestion: Disambiguate explicitly, e.g.: hashmatch --algorithm {} {}",
                    names[0], token
                )
            }

            // Mode selection errors
            HashMatchError::MultipleFilesWithHashes { file_count, hash_count } => {
                write!(
                    f,
                    "Cannot compare multiple files ({}) with hash strings ({})\n",
                    file_count, hash_count
                )?;
                write!(f, "Suggestion: Compare one file against one hash, or pass only files to find matches among them")
            }
            HashMatchError::StdinWithHashes => {
                write!(f, "Cannot use stdin ('-') together with hash comparison\n")?;
                write!(f, "Suggestion: Pipe the data and compare against a single regular file, or pass the hash alone to validate its format")
            }

            // File system errors
            HashMatchError::FileNotFound { path } => {
                write!(f, "File not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the file path is correct and the file exists")
            }
            HashMatchError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied while {} file: {}\n", operation, path.display())?;
                write!(f, "Suggestion: Check file permissions or run with appropriate privileges")
            }
            HashMatchError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "I/O error while {} file {}: {}\n", operation, p.display(), source)?;
                } else {
                    write!(f, "I/O error while {}: {}\n", operation, source)?;
                }
                write!(f, "Suggestion: Check file permissions and disk space")
            }

            // Hash computation errors
            HashMatchError::UnsupportedAlgorithm { algorithm } => {
                write!(f, "Unsupported hash algorithm: {}\n", algorithm)?;
                write!(f, "Suggestion: Use --list to see available algorithms")
            }

            // CLI errors
            HashMatchError::InvalidArguments { message } => {
                write!(f, "Invalid arguments: {}\n", message)?;
                write!(f, "Suggestion: Run with --help to see usage information")
            }
        }
    }
}

impl std::error::Error for HashMatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashMatchError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl HashMatchError {
    /// Create an IoError with context about the operation and optional path
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => {
                if let Some(p) = path {
                    HashMatchError::FileNotFound { path: p }
                } else {
                    HashMatchError::IoError {
                        path: None,
                        operation: operation.to_string(),
                        source: err,
                    }
                }
            }
            io::ErrorKind::PermissionDenied => {
                if let Some(p) = path {
                    HashMatchError::PermissionDenied {
                        path: p,
                        operation: operation.to_string(),
                    }
                } else {
                    HashMatchError::IoError {
                        path: None,
                        operation: operation.to_string(),
                        source: err,
                    }
                }
            }
            _ => HashMatchError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }

    /// True for errors that describe a structurally invalid command line
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            HashMatchError::UnknownHashLength { .. }
                | HashMatchError::AlgorithmMismatch { .. }
                | HashMatchError::AmbiguousHash { .. }
                | HashMatchError::MultipleFilesWithHashes { .. }
                | HashMatchError::StdinWithHashes
                | HashMatchError::UnsupportedAlgorithm { .. }
                | HashMatchError::InvalidArguments { .. }
        )
    }
}

impl From<io::Error> for HashMatchError {
    fn from(err: io::Error) -> Self {
        HashMatchError::from_io_error(err, "unknown operation", None)
    }
}
