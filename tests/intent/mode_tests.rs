// Tests for operating mode selection

use hashmatch::error::HashMatchError;
use hashmatch::intent::mode::{select_mode, OperatingMode};

fn v(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const HASH: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn test_hashes_only_selects_validation() {
    let mode = select_mode(&[], &v(&[HASH])).unwrap();
    assert_eq!(mode, OperatingMode::HashValidation);
}

#[test]
fn test_one_file_one_hash_selects_comparison() {
    let mode = select_mode(&v(&["a.txt"]), &v(&[HASH])).unwrap();
    assert_eq!(mode, OperatingMode::Comparison);
}

#[test]
fn test_multiple_files_with_hashes_rejected() {
    let err = select_mode(&v(&["a.txt", "b.txt"]), &v(&[HASH])).unwrap_err();
    match err {
        HashMatchError::MultipleFilesWithHashes { file_count, hash_count } => {
            assert_eq!(file_count, 2);
            assert_eq!(hash_count, 1);
        }
        other => panic!("expected MultipleFilesWithHashes, got {:?}", other),
    }
}

#[test]
fn test_stdin_with_hashes_rejected() {
    let err = select_mode(&v(&["-"]), &v(&[HASH])).unwrap_err();
    assert!(matches!(err, HashMatchError::StdinWithHashes));
}

#[test]
fn test_multi_file_rejection_outranks_stdin_rejection() {
    // Both rejections apply; the multi-file one must fire first
    let err = select_mode(&v(&["-", "a.txt"]), &v(&[HASH])).unwrap_err();
    assert!(matches!(err, HashMatchError::MultipleFilesWithHashes { .. }));
}

#[test]
fn test_files_only_selects_standard() {
    let mode = select_mode(&v(&["a.txt", "b.txt", "-"]), &[]).unwrap();
    assert_eq!(mode, OperatingMode::Standard);
}

#[test]
fn test_empty_input_falls_through_to_standard() {
    let mode = select_mode(&[], &[]).unwrap();
    assert_eq!(mode, OperatingMode::Standard);
}

#[test]
fn test_stdin_alone_selects_standard() {
    let mode = select_mode(&v(&["-"]), &[]).unwrap();
    assert_eq!(mode, OperatingMode::Standard);
}

#[test]
fn test_selection_is_total() {
    // Every combination yields exactly one outcome, never a panic
    let file_sets: [&[&str]; 5] = [&[], &["a"], &["-"], &["a", "b"], &["-", "a"]];
    let hash_sets: [&[&str]; 3] = [&[], &[HASH], &[HASH, HASH]];

    for files in &file_sets {
        for hashes in &hash_sets {
            let _ = select_mode(&v(files), &v(hashes));
        }
    }
}
