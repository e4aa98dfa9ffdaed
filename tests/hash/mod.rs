// Test module entry point for hash tests

mod compute_tests;
