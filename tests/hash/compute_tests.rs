// Tests for digest computation

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use hashmatch::hash::HashComputer;
use hashmatch::intent::detect::AlgorithmName;
use hashmatch::HashMatchError;

fn write_temp(contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.bin");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_compute_hash_sha256() {
    let (_dir, path) = write_temp(b"hello world");

    let computer = HashComputer::new();
    let result = computer.compute_hash(&path, AlgorithmName::Sha256).unwrap();

    assert_eq!(result.algorithm, AlgorithmName::Sha256);
    assert_eq!(
        result.hash,
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
    assert_eq!(result.file_path, path);
}

#[test]
fn test_compute_hash_md5() {
    let (_dir, path) = write_temp(b"hello world");

    let computer = HashComputer::new();
    let result = computer.compute_hash(&path, AlgorithmName::Md5).unwrap();
    assert_eq!(result.hash, "5eb63bbbe01eeed093cb22bb8f5acdc3");
}

#[test]
fn test_compute_hash_sha1() {
    let (_dir, path) = write_temp(b"hello world");

    let computer = HashComputer::new();
    let result = computer.compute_hash(&path, AlgorithmName::Sha1).unwrap();
    assert_eq!(result.hash, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
}

#[test]
fn test_compute_hash_empty_file_known_digests() {
    let (_dir, path) = write_temp(b"");
    let computer = HashComputer::new();

    let sha512 = computer.compute_hash(&path, AlgorithmName::Sha512).unwrap();
    assert_eq!(
        sha512.hash,
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );

    let blake2b = computer.compute_hash(&path, AlgorithmName::Blake2b).unwrap();
    assert_eq!(
        blake2b.hash,
        "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
         d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
    );
}

#[test]
fn test_digest_lengths_match_canonical_lengths() {
    let (_dir, path) = write_temp(b"length check");
    let computer = HashComputer::new();

    for algorithm in AlgorithmName::all() {
        let result = computer.compute_hash(&path, algorithm).unwrap();
        assert_eq!(result.hash.len(), algorithm.hex_len(), "{}", algorithm);
    }
}

#[test]
fn test_streaming_large_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large.bin");
    let mut file = fs::File::create(&path).unwrap();
    let chunk = vec![b'a'; 1024];
    for _ in 0..100 {
        file.write_all(&chunk).unwrap();
    }
    drop(file);

    let computer = HashComputer::new();
    let result = computer.compute_hash(&path, AlgorithmName::Sha256).unwrap();
    assert_eq!(result.hash.len(), 64);
}

#[test]
fn test_file_not_found_error() {
    let computer = HashComputer::new();
    let result = computer.compute_hash(
        std::path::Path::new("nonexistent_file.txt"),
        AlgorithmName::Sha256,
    );

    assert!(result.is_err());
    match result {
        Err(HashMatchError::FileNotFound { .. }) => {}
        Err(HashMatchError::IoError { .. }) => {}
        _ => panic!("Expected FileNotFound or IoError"),
    }
}
