// Hash algorithm detection module
// Maps a candidate string to the algorithms whose canonical hex length it matches

use std::fmt;
use std::str::FromStr;

use crate::error::HashMatchError;

/// Supported hash algorithms, identified by canonical hex-digest length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum AlgorithmName {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Blake2b,
}

impl AlgorithmName {
    /// Canonical hex-encoded digest length
    pub fn hex_len(&self) -> usize {
        match self {
            AlgorithmName::Md5 => 32,
            AlgorithmName::Sha1 => 40,
            AlgorithmName::Sha256 => 64,
            AlgorithmName::Sha512 => 128,
            AlgorithmName::Blake2b => 128,
        }
    }

    /// Name as accepted by the --algorithm flag
    pub fn cli_name(&self) -> &'static str {
        match self {
            AlgorithmName::Md5 => "md5",
            AlgorithmName::Sha1 => "sha1",
            AlgorithmName::Sha256 => "sha256",
            AlgorithmName::Sha512 => "sha512",
            AlgorithmName::Blake2b => "blake2b",
        }
    }

    /// All supported algorithms, in digest-length order
    pub fn all() -> [AlgorithmName; 5] {
        [
            AlgorithmName::Md5,
            AlgorithmName::Sha1,
            AlgorithmName::Sha256,
            AlgorithmName::Sha512,
            AlgorithmName::Blake2b,
        ]
    }
}

impl fmt::Display for AlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AlgorithmName::Md5 => "MD5",
            AlgorithmName::Sha1 => "SHA-1",
            AlgorithmName::Sha256 => "SHA-256",
            AlgorithmName::Sha512 => "SHA-512",
            AlgorithmName::Blake2b => "BLAKE2b",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AlgorithmName {
    type Err = HashMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(AlgorithmName::Md5),
            "sha1" | "sha-1" => Ok(AlgorithmName::Sha1),
            "sha256" | "sha-256" => Ok(AlgorithmName::Sha256),
            "sha512" | "sha-512" => Ok(AlgorithmName::Sha512),
            "blake2b" | "blake2b-512" => Ok(AlgorithmName::Blake2b),
            _ => Err(HashMatchError::UnsupportedAlgorithm {
                algorithm: s.to_string(),
            }),
        }
    }
}

/// Detect which algorithms a candidate string could be a digest of.
///
/// Pure and total: any character outside `[0-9a-fA-F]` yields no candidates
/// regardless of length, as does a length no supported algorithm produces.
/// The 128-character case is irreducibly ambiguous (SHA-512 and BLAKE2b share
/// a digest size) and always returns both.
///
/// CRC32 (8 hex characters) is deliberately not detected; it is excluded from
/// the supported set for security reasons.
pub fn detect(candidate: &str) -> Vec<AlgorithmName> {
    if candidate.is_empty() || !candidate.chars().all(|c| c.is_ascii_hexdigit()) {
        return Vec::new();
    }

    match candidate.len() {
        32 => vec![AlgorithmName::Md5],
        40 => vec![AlgorithmName::Sha1],
        64 => vec![AlgorithmName::Sha256],
        128 => vec![AlgorithmName::Sha512, AlgorithmName::Blake2b],
        _ => Vec::new(),
    }
}

// Tests in tests/intent/detect_tests.rs
