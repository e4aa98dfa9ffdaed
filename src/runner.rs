// Mode execution module
// Runs the selected operating mode and summarizes the outcome

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::HashMatchError;
use crate::hash::HashComputer;
use crate::intent::classify::ClassifiedInput;
use crate::intent::detect::{detect, AlgorithmName};
use crate::intent::exit::{FailureKind, Outcome};
use crate::intent::mode::OperatingMode;

/// Format-check result for one hash string
#[derive(Debug, Clone, serde::Serialize)]
pub struct HashCheck {
    pub hash: String,
    pub valid: bool,
    pub candidates: Vec<AlgorithmName>,
}

/// Report for hash-validation mode (no I/O)
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationReport {
    pub algorithm: AlgorithmName,
    pub checks: Vec<HashCheck>,
}

/// Report for single file vs hash comparison
#[derive(Debug, Clone, serde::Serialize)]
pub struct ComparisonReport {
    pub algorithm: AlgorithmName,
    pub file: PathBuf,
    pub expected: String,
    pub actual: Option<String>,
    pub matched: bool,
    pub error: Option<String>,
}

/// Group of inputs sharing an identical digest
#[derive(Debug, Clone, serde::Serialize)]
pub struct MatchGroup {
    pub hash: String,
    pub paths: Vec<String>,
    pub count: usize,
}

/// Per-file failure recorded without aborting the batch
#[derive(Debug, Clone, serde::Serialize)]
pub struct FileFailure {
    pub path: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Report for standard mode: hash everything, group equal digests
#[derive(Debug, Clone, serde::Serialize)]
pub struct StandardReport {
    pub algorithm: AlgorithmName,
    pub digests: Vec<(String, String)>, // (path, hash), input order
    pub groups: Vec<MatchGroup>,
    pub unmatched: Vec<String>,
    pub failures: Vec<FileFailure>,
}

/// Result of running one invocation
#[derive(Debug, Clone, serde::Serialize)]
pub enum RunReport {
    Validation(ValidationReport),
    Comparison(ComparisonReport),
    Standard(StandardReport),
}

/// Executes the selected operating mode
pub struct Runner {
    computer: HashComputer,
    algorithm: AlgorithmName,
}

impl Runner {
    pub fn new(computer: HashComputer, algorithm: AlgorithmName) -> Self {
        Self { computer, algorithm }
    }

    /// Run the mode over the classified input and summarize the outcome
    pub fn run(&self, mode: OperatingMode, input: &ClassifiedInput) -> (RunReport, Outcome) {
        match mode {
            OperatingMode::HashValidation => self.run_validation(&input.hashes),
            OperatingMode::Comparison => self.run_comparison(&input.files[0], &input.hashes[0]),
            OperatingMode::Standard => self.run_standard(&input.files),
        }
    }

    /// Format-check every hash string against the configured algorithm
    fn run_validation(&self, hashes: &[String]) -> (RunReport, Outcome) {
        let mut checks = Vec::new();
        let mut failures = Vec::new();

        for hash in hashes {
            let candidates = detect(hash);
            let valid = candidates.contains(&self.algorithm);
            if !valid {
                failures.push(FailureKind::Other);
            }
            checks.push(HashCheck {
                hash: hash.clone(),
                valid,
                candidates,
            });
        }

        let outcome = Outcome {
            total_inputs: hashes.len(),
            failures,
            match_groups: 0,
        };

        (
            RunReport::Validation(ValidationReport {
                algorithm: self.algorithm,
                checks,
            }),
            outcome,
        )
    }

    /// Compute the file's digest and compare against the expected hash
    fn run_comparison(&self, file: &str, expected: &str) -> (RunReport, Outcome) {
        match self.computer.compute_hash(Path::new(file), self.algorithm) {
            Ok(result) => {
                let matched = result.hash.eq_ignore_ascii_case(expected);
                let outcome = Outcome {
                    total_inputs: 1,
                    failures: Vec::new(),
                    // A PASS counts as the one match group this mode can have
                    match_groups: if matched { 1 } else { 0 },
                };
                (
                    RunReport::Comparison(ComparisonReport {
                        algorithm: self.algorithm,
                        file: PathBuf::from(file),
                        expected: expected.to_string(),
                        actual: Some(result.hash),
                        matched,
                        error: None,
                    }),
                    outcome,
                )
            }
            Err(err) => {
                let outcome = Outcome {
                    total_inputs: 1,
                    failures: vec![failure_kind(&err)],
                    match_groups: 0,
                };
                (
                    RunReport::Comparison(ComparisonReport {
                        algorithm: self.algorithm,
                        file: PathBuf::from(file),
                        expected: expected.to_string(),
                        actual: None,
                        matched: false,
                        error: Some(err.to_string()),
                    }),
                    outcome,
                )
            }
        }
    }

    /// Hash every file, group equal digests, report matches and unmatched
    fn run_standard(&self, files: &[String]) -> (RunReport, Outcome) {
        let mut digests: Vec<(String, String)> = Vec::new();
        let mut failures_detail = Vec::new();
        let mut failures = Vec::new();

        for file in files {
            let result = if file == "-" {
                self.computer.compute_hash_stdin(self.algorithm)
            } else {
                self.computer.compute_hash(Path::new(file), self.algorithm)
            };

            match result {
                Ok(result) => digests.push((file.clone(), result.hash)),
                Err(err) => {
                    let kind = failure_kind(&err);
                    failures.push(kind);
                    failures_detail.push(FileFailure {
                        path: file.clone(),
                        kind,
                        message: err.to_string(),
                    });
                }
            }
        }

        let groups = find_match_groups(&digests);
        let grouped: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.paths.iter().map(|p| p.as_str()))
            .collect();
        let unmatched: Vec<String> = digests
            .iter()
            .filter(|(path, _)| !grouped.contains(&path.as_str()))
            .map(|(path, _)| path.clone())
            .collect();

        let outcome = Outcome {
            total_inputs: files.len(),
            failures,
            match_groups: groups.len(),
        };

        (
            RunReport::Standard(StandardReport {
                algorithm: self.algorithm,
                digests,
                groups,
                unmatched,
                failures: failures_detail,
            }),
            outcome,
        )
    }
}

/// Group processed inputs by equal digest, keeping only groups of two or more
pub fn find_match_groups(digests: &[(String, String)]) -> Vec<MatchGroup> {
    let mut hash_to_paths: HashMap<&str, Vec<&str>> = HashMap::new();

    for (path, hash) in digests {
        hash_to_paths.entry(hash).or_default().push(path);
    }

    let mut groups: Vec<MatchGroup> = hash_to_paths
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(hash, paths)| MatchGroup {
            hash: hash.to_string(),
            count: paths.len(),
            paths: paths.into_iter().map(String::from).collect(),
        })
        .collect();

    // Sort by hash for consistent output
    groups.sort_by(|a, b| a.hash.cmp(&b.hash));

    groups
}

/// Map an error to the failure kind exit resolution understands
fn failure_kind(err: &HashMatchError) -> FailureKind {
    match err {
        HashMatchError::FileNotFound { .. } => FailureKind::NotFound,
        HashMatchError::PermissionDenied { .. } => FailureKind::PermissionDenied,
        _ => FailureKind::Other,
    }
}

// Tests in tests/intent/runner_tests.rs
