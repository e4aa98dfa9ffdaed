// Intent resolution engine
// Turns raw argv tokens and flag states into one deterministic execution plan:
// argument classification, flag conflict resolution, mode selection, exit codes

pub mod classify;
pub mod detect;
pub mod exit;
pub mod mode;
pub mod resolve;

// Re-export commonly used types for convenience
pub use classify::{ArgumentClassifier, ClassifiedInput, DiskProbe, ExistenceProbe};
pub use detect::{detect, AlgorithmName};
pub use exit::{resolve_exit_code, ExitPolicy, FailureKind, Outcome};
pub use mode::{select_mode, OperatingMode};
pub use resolve::{ConflictResolver, FlagStates, Format, Mode, RunState, Verbosity, Warning};
