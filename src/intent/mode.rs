// Mode selection module
// Chooses the operating mode from classified files and hashes

use crate::error::HashMatchError;

/// What the invocation will actually do
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum OperatingMode {
    /// No files: format-check every hash string, no I/O
    HashValidation,
    /// Exactly one file and one hash: compute and compare, PASS/FAIL
    Comparison,
    /// Hash every file and group equal digests into match groups
    Standard,
}

/// Select the operating mode for the classified inputs.
///
/// This is one ordered dispatch, not independent conditionals: the
/// multi-file-with-hashes rejection must fire before the stdin-with-hashes
/// rejection, and both before falling through to Standard.
pub fn select_mode(
    files: &[String],
    hashes: &[String],
) -> Result<OperatingMode, HashMatchError> {
    if files.is_empty() && !hashes.is_empty() {
        return Ok(OperatingMode::HashValidation);
    }

    if files.len() == 1 && files[0] != "-" && hashes.len() == 1 {
        return Ok(OperatingMode::Comparison);
    }

    if files.len() > 1 && !hashes.is_empty() {
        return Err(HashMatchError::MultipleFilesWithHashes {
            file_count: files.len(),
            hash_count: hashes.len(),
        });
    }

    if files.iter().any(|f| f == "-") && !hashes.is_empty() {
        return Err(HashMatchError::StdinWithHashes);
    }

    Ok(OperatingMode::Standard)
}

// Tests in tests/intent/mode_tests.rs
