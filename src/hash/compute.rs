// Hash computation module
// Streaming and memory-mapped digest computation for the supported algorithms

use std::fs::File;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::HashMatchError;
use crate::intent::detect::AlgorithmName;

use blake2::{Blake2b512, Digest as Blake2Digest};
use md5::{Digest as Md5Digest, Md5};
use sha1::{Digest as Sha1Digest, Sha1};
use sha2::{Digest as Sha2Digest, Sha256, Sha512};

/// Trait for hash algorithm implementations
pub trait Hasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash and return the result
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Get the output size in bytes
    fn output_size(&self) -> usize;
}

// MD5 wrapper
struct Md5Wrapper(Md5);

impl Hasher for Md5Wrapper {
    fn update(&mut self, data: &[u8]) {
        Md5Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Md5Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        16 // 128 bits
    }
}

// SHA1 wrapper
struct Sha1Wrapper(Sha1);

impl Hasher for Sha1Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha1Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha1Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        20 // 160 bits
    }
}

// SHA-256 wrapper
struct Sha256Wrapper(Sha256);

impl Hasher for Sha256Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        32 // 256 bits
    }
}

// SHA-512 wrapper
struct Sha512Wrapper(Sha512);

impl Hasher for Sha512Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        64 // 512 bits
    }
}

// BLAKE2b wrapper
struct Blake2b512Wrapper(Blake2b512);

impl Hasher for Blake2b512Wrapper {
    fn update(&mut self, data: &[u8]) {
        Blake2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Blake2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        64 // 512 bits
    }
}

/// Get a hasher instance for the specified algorithm
pub fn get_hasher(algorithm: AlgorithmName) -> Box<dyn Hasher> {
    match algorithm {
        AlgorithmName::Md5 => Box::new(Md5Wrapper(Md5Digest::new())),
        AlgorithmName::Sha1 => Box::new(Sha1Wrapper(Sha1Digest::new())),
        AlgorithmName::Sha256 => Box::new(Sha256Wrapper(Sha2Digest::new())),
        AlgorithmName::Sha512 => Box::new(Sha512Wrapper(Sha2Digest::new())),
        AlgorithmName::Blake2b => Box::new(Blake2b512Wrapper(Blake2Digest::new())),
    }
}

/// Result of a hash computation
#[derive(Debug, Clone, serde::Serialize)]
pub struct HashResult {
    pub algorithm: AlgorithmName,
    pub hash: String, // hex-encoded
    pub file_path: PathBuf,
}

/// Hash computer with streaming I/O
pub struct HashComputer {
    buffer_size: usize,
    show_progress: bool,
}

// Constants for memory mapping
const MMAP_THRESHOLD: u64 = 2 * 1024 * 1024 * 1024; // 2GB

// Constants for progress bar
const PROGRESS_BAR_THRESHOLD: u64 = 1024 * 1024 * 1024; // 1GB
const PROGRESS_UPDATE_INTERVAL_MS: u64 = 100; // 10 times per second

impl HashComputer {
    /// Create a new HashComputer with default buffer size (1MB)
    pub fn new() -> Self {
        Self {
            buffer_size: 1024 * 1024,
            show_progress: false,
        }
    }

    /// Enable a progress bar for large files on a TTY
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Compute hash from stdin using streaming I/O
    pub fn compute_hash_stdin(
        &self,
        algorithm: AlgorithmName,
    ) -> Result<HashResult, HashMatchError> {
        let mut hasher = get_hasher(algorithm);
        let mut stdin = std::io::stdin();
        let mut buffer = vec![0u8; self.buffer_size];

        loop {
            let bytes_read = stdin
                .read(&mut buffer)
                .map_err(|e| HashMatchError::from_io_error(e, "reading from stdin", None))?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        let hash_hex = bytes_to_hex(&hasher.finalize());

        Ok(HashResult {
            algorithm,
            hash: hash_hex,
            file_path: PathBuf::from("-"), // Use "-" to indicate stdin
        })
    }

    /// Compute hash for a single file using streaming I/O or memory mapping
    ///
    /// For files smaller than 2GB, uses memory mapping to avoid
    /// kernel-to-userspace copy overhead. For files larger than 2GB, falls
    /// back to buffered reading.
    ///
    /// # Safety
    ///
    /// Memory mapping assumes the file will not be modified by other
    /// processes during hashing; if it is, the result may be inconsistent.
    pub fn compute_hash(
        &self,
        path: &Path,
        algorithm: AlgorithmName,
    ) -> Result<HashResult, HashMatchError> {
        let mut hasher = get_hasher(algorithm);

        let file = File::open(path)
            .map_err(|e| HashMatchError::from_io_error(e, "reading", Some(path.to_path_buf())))?;

        let file_size = file
            .metadata()
            .map_err(|e| {
                HashMatchError::from_io_error(e, "reading metadata", Some(path.to_path_buf()))
            })?
            .len();

        let should_show_progress = self.show_progress
            && file_size > PROGRESS_BAR_THRESHOLD
            && std::io::stdout().is_terminal();

        if file_size > 0 && file_size < MMAP_THRESHOLD {
            match unsafe { Mmap::map(&file) } {
                Ok(mmap) => {
                    // Progress bar not shown for mmap as it's very fast
                    hasher.update(&mmap[..]);
                }
                Err(_) => {
                    // Fall back to buffered reading if mmap fails
                    self.hash_with_buffered_io(&mut hasher, file, path, file_size, should_show_progress)?;
                }
            }
        } else {
            self.hash_with_buffered_io(&mut hasher, file, path, file_size, should_show_progress)?;
        }

        let hash_hex = bytes_to_hex(&hasher.finalize());

        Ok(HashResult {
            algorithm,
            hash: hash_hex,
            file_path: path.to_path_buf(),
        })
    }

    /// Helper method to hash a file using buffered I/O
    fn hash_with_buffered_io(
        &self,
        hasher: &mut Box<dyn Hasher>,
        mut file: File,
        path: &Path,
        file_size: u64,
        show_progress: bool,
    ) -> Result<(), HashMatchError> {
        use indicatif::{ProgressBar, ProgressStyle};
        use std::time::{Duration, Instant};

        let pb = if show_progress {
            let pb = ProgressBar::new(file_size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg}\n[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message(format!("Hashing: {}", path.display()));
            Some(pb)
        } else {
            None
        };

        let mut buffer = vec![0u8; self.buffer_size];
        let mut bytes_processed = 0u64;
        let mut last_update = Instant::now();
        let update_interval = Duration::from_millis(PROGRESS_UPDATE_INTERVAL_MS);

        loop {
            let bytes_read = file.read(&mut buffer).map_err(|e| {
                if let Some(pb) = &pb {
                    pb.finish_and_clear();
                }
                HashMatchError::from_io_error(e, "reading", Some(path.to_path_buf()))
            })?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
            bytes_processed += bytes_read as u64;

            if let Some(pb) = &pb {
                let now = Instant::now();
                if now.duration_since(last_update) >= update_interval {
                    pb.set_position(bytes_processed);
                    last_update = now;
                }
            }
        }

        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }

        Ok(())
    }
}

impl Default for HashComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert bytes to hexadecimal string
fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

// Tests in tests/hash/compute_tests.rs
