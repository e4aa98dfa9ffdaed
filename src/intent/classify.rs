// Argument classification module
// Splits raw positional arguments into ordered file-path and hash-string lists

use std::path::Path;

use super::detect::{detect, AlgorithmName};
use crate::error::HashMatchError;

/// Result of classifying the positional arguments.
/// Both lists preserve original input order; `files` may contain the stdin
/// marker `-` any number of times, `hashes` are normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedInput {
    pub files: Vec<String>,
    pub hashes: Vec<String>,
}

/// Filesystem-existence seam, one stat per probed token
pub trait ExistenceProbe {
    fn exists(&self, token: &str) -> bool;
}

/// Probe backed by the real filesystem
pub struct DiskProbe;

impl ExistenceProbe for DiskProbe {
    fn exists(&self, token: &str) -> bool {
        Path::new(token).exists()
    }
}

/// Classifier for raw positional arguments
pub struct ArgumentClassifier<'a> {
    probe: &'a dyn ExistenceProbe,
}

impl<'a> ArgumentClassifier<'a> {
    pub fn new(probe: &'a dyn ExistenceProbe) -> Self {
        Self { probe }
    }

    /// Classify each argument as a file path or a hash string, in order.
    ///
    /// Precedence per token:
    /// 1. `-` is always the stdin marker, checked before anything else.
    /// 2. An existing path is always a file, even one literally named like a
    ///    valid hash.
    /// 3. Valid hex of an unrecognized digest length fails fast.
    /// 4. A detected hash must be consistent with the configured algorithm,
    ///    otherwise the error names the algorithm(s) it actually matched.
    /// 5. Anything else is treated as a (currently nonexistent) file path;
    ///    the not-found failure surfaces at hashing time.
    ///
    /// Fails fast: the first bad token aborts with no partial result.
    pub fn classify(
        &self,
        args: &[String],
        algorithm: AlgorithmName,
    ) -> Result<ClassifiedInput, HashMatchError> {
        let mut files = Vec::new();
        let mut hashes = Vec::new();

        for arg in args {
            if arg.is_empty() {
                continue;
            }

            if arg == "-" {
                files.push(arg.clone());
                continue;
            }

            if self.probe.exists(arg) {
                files.push(arg.clone());
                continue;
            }

            let candidates = detect(arg);

            if candidates.is_empty() {
                if arg.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(HashMatchError::UnknownHashLength {
                        token: arg.clone(),
                        length: arg.len(),
                    });
                }
                // Not hash-shaped: assume an intended file path that does not
                // exist yet and let the hashing stage report it
                files.push(arg.clone());
                continue;
            }

            if candidates.contains(&algorithm) {
                hashes.push(arg.to_lowercase());
            } else if candidates.len() == 1 {
                return Err(HashMatchError::AlgorithmMismatch {
                    token: arg.clone(),
                    configured: algorithm,
                    detected: candidates[0],
                });
            } else {
                return Err(HashMatchError::AmbiguousHash {
                    token: arg.clone(),
                    configured: algorithm,
                    candidates,
                });
            }
        }

        Ok(ClassifiedInput { files, hashes })
    }
}

// Tests in tests/intent/classify_tests.rs
