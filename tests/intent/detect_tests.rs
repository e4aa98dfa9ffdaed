// Tests for hash algorithm detection

use hashmatch::intent::detect::{detect, AlgorithmName};

#[test]
fn test_detect_md5_length() {
    let candidates = detect("d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(candidates, vec![AlgorithmName::Md5]);
}

#[test]
fn test_detect_sha1_length() {
    let candidates = detect("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    assert_eq!(candidates, vec![AlgorithmName::Sha1]);
}

#[test]
fn test_detect_sha256_length() {
    let candidates =
        detect("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
    assert_eq!(candidates, vec![AlgorithmName::Sha256]);
}

#[test]
fn test_detect_128_chars_is_irreducibly_ambiguous() {
    let candidate = "a".repeat(128);
    let candidates = detect(&candidate);
    assert_eq!(candidates, vec![AlgorithmName::Sha512, AlgorithmName::Blake2b]);
}

#[test]
fn test_detect_non_hex_always_empty() {
    // Right length for MD5, but contains a non-hex character
    let candidate = "g41d8cd98f00b204e9800998ecf8427e";
    assert_eq!(candidate.len(), 32);
    assert!(detect(candidate).is_empty());

    // Non-hex at every supported length
    for len in [32usize, 40, 64, 128] {
        let mut s = "a".repeat(len - 1);
        s.push('z');
        assert!(detect(&s).is_empty(), "length {} with non-hex char", len);
    }
}

#[test]
fn test_detect_empty_string() {
    assert!(detect("").is_empty());
}

#[test]
fn test_detect_unrecognized_lengths() {
    for len in [1usize, 8, 16, 31, 33, 63, 65, 127, 129, 256] {
        let candidate = "a".repeat(len);
        assert!(detect(&candidate).is_empty(), "length {}", len);
    }
}

#[test]
fn test_detect_crc32_length_excluded() {
    // 8 hex characters would be a CRC32 digest; CRC32 is not supported
    assert!(detect("deadbeef").is_empty());
}

#[test]
fn test_detect_accepts_mixed_case_hex() {
    let candidates = detect("D41D8CD98F00B204E9800998ECF8427E");
    assert_eq!(candidates, vec![AlgorithmName::Md5]);
}

#[test]
fn test_canonical_lengths_match_detection() {
    for algorithm in AlgorithmName::all() {
        let candidate = "0".repeat(algorithm.hex_len());
        let candidates = detect(&candidate);
        assert!(
            candidates.contains(&algorithm),
            "{} not detected at its own length",
            algorithm
        );
    }
}
