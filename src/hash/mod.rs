// Hash computation
// Streaming digest computation over files and stdin

pub mod compute;

pub use compute::{HashComputer, HashResult, Hasher};
