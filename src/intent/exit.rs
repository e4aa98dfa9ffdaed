// Exit code resolution module
// Maps a finished operation's outcome to a stable process exit code

/// Stable exit code contract
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_MATCHES: i32 = 1;
pub const EXIT_PARTIAL_FAILURE: i32 = 2;
pub const EXIT_INVALID_ARGUMENTS: i32 = 3;
pub const EXIT_FILE_NOT_FOUND: i32 = 4;
pub const EXIT_PERMISSION_DENIED: i32 = 5;
pub const EXIT_INTERRUPTED: i32 = 130;

/// Classifiable kinds of per-input failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum FailureKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl FailureKind {
    fn exit_code(&self) -> i32 {
        match self {
            FailureKind::NotFound => EXIT_FILE_NOT_FOUND,
            FailureKind::PermissionDenied => EXIT_PERMISSION_DENIED,
            FailureKind::Other => EXIT_PARTIAL_FAILURE,
        }
    }
}

/// Summary of a finished operation, as seen by exit code resolution
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Outcome {
    /// Number of inputs the operation attempted to process
    pub total_inputs: usize,
    /// One entry per failed input
    pub failures: Vec<FailureKind>,
    /// Number of match groups (two or more inputs sharing a digest)
    pub match_groups: usize,
}

impl Outcome {
    pub fn success(total_inputs: usize) -> Self {
        Self {
            total_inputs,
            failures: Vec::new(),
            match_groups: 0,
        }
    }
}

/// Policy knobs that affect exit codes
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitPolicy {
    /// Exit non-zero unless at least one match group was found
    pub require_match: bool,
}

/// Resolve the process exit code, first-match precedence.
///
/// A homogeneous all-failed outcome of a classifiable kind reports that
/// specific code; this precision rule intentionally outranks the generic
/// partial-failure bucket even though both apply. Total: never errors.
pub fn resolve_exit_code(outcome: &Outcome, policy: &ExitPolicy) -> i32 {
    let all_failed = outcome.total_inputs > 0 && outcome.failures.len() == outcome.total_inputs;

    if all_failed {
        let first = outcome.failures[0];
        let homogeneous = outcome.failures.iter().all(|k| *k == first);
        if homogeneous && first != FailureKind::Other {
            return first.exit_code();
        }
    }

    if !outcome.failures.is_empty() {
        return EXIT_PARTIAL_FAILURE;
    }

    if policy.require_match {
        return if outcome.match_groups >= 1 {
            EXIT_SUCCESS
        } else {
            EXIT_NO_MATCHES
        };
    }

    EXIT_SUCCESS
}

// Tests in tests/intent/exit_tests.rs
