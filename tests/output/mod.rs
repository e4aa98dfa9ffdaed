// Test module entry point for output rendering tests
