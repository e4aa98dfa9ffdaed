// Tests for exit code resolution

use hashmatch::intent::exit::{
    resolve_exit_code, ExitPolicy, FailureKind, Outcome, EXIT_FILE_NOT_FOUND,
    EXIT_INTERRUPTED, EXIT_INVALID_ARGUMENTS, EXIT_NO_MATCHES, EXIT_PARTIAL_FAILURE,
    EXIT_PERMISSION_DENIED, EXIT_SUCCESS,
};

fn outcome(total: usize, failures: Vec<FailureKind>, match_groups: usize) -> Outcome {
    Outcome { total_inputs: total, failures, match_groups }
}

#[test]
fn test_exit_code_contract_is_stable() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_NO_MATCHES, 1);
    assert_eq!(EXIT_PARTIAL_FAILURE, 2);
    assert_eq!(EXIT_INVALID_ARGUMENTS, 3);
    assert_eq!(EXIT_FILE_NOT_FOUND, 4);
    assert_eq!(EXIT_PERMISSION_DENIED, 5);
    assert_eq!(EXIT_INTERRUPTED, 130);
}

#[test]
fn test_all_not_found_yields_specific_code() {
    let out = outcome(2, vec![FailureKind::NotFound, FailureKind::NotFound], 0);
    assert_eq!(resolve_exit_code(&out, &ExitPolicy::default()), EXIT_FILE_NOT_FOUND);
}

#[test]
fn test_all_permission_denied_yields_specific_code() {
    let out = outcome(3, vec![FailureKind::PermissionDenied; 3], 0);
    assert_eq!(
        resolve_exit_code(&out, &ExitPolicy::default()),
        EXIT_PERMISSION_DENIED
    );
}

#[test]
fn test_heterogeneous_total_failure_is_generic() {
    let out = outcome(2, vec![FailureKind::NotFound, FailureKind::PermissionDenied], 0);
    assert_eq!(
        resolve_exit_code(&out, &ExitPolicy::default()),
        EXIT_PARTIAL_FAILURE
    );
}

#[test]
fn test_unclassifiable_total_failure_is_generic() {
    let out = outcome(2, vec![FailureKind::Other, FailureKind::Other], 0);
    assert_eq!(
        resolve_exit_code(&out, &ExitPolicy::default()),
        EXIT_PARTIAL_FAILURE
    );
}

#[test]
fn test_partial_failure_is_generic_even_when_homogeneous() {
    // Only one of three inputs failed: precision rule does not apply
    let out = outcome(3, vec![FailureKind::NotFound], 1);
    assert_eq!(
        resolve_exit_code(&out, &ExitPolicy::default()),
        EXIT_PARTIAL_FAILURE
    );
}

#[test]
fn test_require_match_policy() {
    let policy = ExitPolicy { require_match: true };

    let none = outcome(3, Vec::new(), 0);
    assert_eq!(resolve_exit_code(&none, &policy), EXIT_NO_MATCHES);

    let one = outcome(3, Vec::new(), 1);
    assert_eq!(resolve_exit_code(&one, &policy), EXIT_SUCCESS);
}

#[test]
fn test_failures_outrank_match_policy() {
    let policy = ExitPolicy { require_match: true };
    let out = outcome(3, vec![FailureKind::Other], 1);
    assert_eq!(resolve_exit_code(&out, &policy), EXIT_PARTIAL_FAILURE);
}

#[test]
fn test_clean_run_succeeds() {
    let out = Outcome::success(5);
    assert_eq!(resolve_exit_code(&out, &ExitPolicy::default()), EXIT_SUCCESS);
}

#[test]
fn test_empty_outcome_succeeds() {
    let out = Outcome::success(0);
    assert_eq!(resolve_exit_code(&out, &ExitPolicy::default()), EXIT_SUCCESS);
}
