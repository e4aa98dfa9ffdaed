// Conflict resolution module ("Pipeline of Intent")
// Resolves mode/format/verbosity flag conflicts into one RunState in three
// linear phases instead of a pairwise conflict matrix

use std::fmt;

/// Operating mode of the process output contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Mode {
    Standard,
    Bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Format {
    Default,
    Json,
    Plain,
    Verbose,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Verbosity {
    Normal,
    Quiet,
    Verbose,
}

/// Final, immutable execution plan for output behavior.
/// Invariant: `mode == Bool` implies `verbosity == Quiet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RunState {
    pub mode: Mode,
    pub format: Format,
    pub verbosity: Verbosity,
}

/// Non-fatal resolution notice; informational only, never alters control flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Raw boolean flag states from the upstream flag parser
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagStates {
    pub bool_mode: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub json: bool,
    pub plain: bool,
}

/// A format-changing request recovered from a specific argv position
#[derive(Debug, Clone, PartialEq, Eq)]
struct Intent {
    kind: IntentKind,
    position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum IntentKind {
    /// A shorthand like --json or --plain; the format is the token itself
    FormatShorthand(Format),
    /// --format with an attached or following value
    FormatOption(Option<String>),
}

/// Three-phase resolver for flag conflicts
pub struct ConflictResolver;

impl ConflictResolver {
    /// Resolve raw argv tokens and flag booleans into one RunState plus any
    /// non-fatal warnings.
    ///
    /// Phase 1 scans `tokens` left-to-right collecting format intents; later
    /// intents of the same class override earlier ones. Phase 2 constructs
    /// the state: `--bool` is a mode with highest precedence (it discards
    /// format intents with a warning and forces quiet silently); otherwise
    /// the last format intent applies and quiet beats verbose. Phase 3 only
    /// accumulates warnings, never errors.
    ///
    /// Identical inputs always yield an identical result; reordering flags
    /// that belong to different intent classes never changes the outcome.
    pub fn resolve(
        tokens: &[String],
        flags: &FlagStates,
        explicit_format: &str,
    ) -> (RunState, Vec<Warning>) {
        let mut warnings = Vec::new();

        // Phase 1: intent collection; later occurrences of the same intent
        // class override earlier ones by argv position
        let intents = Self::collect_format_intents(tokens);
        let last_intent = intents.iter().max_by_key(|intent| intent.position).cloned();

        // Phase 2: state construction
        let state = if flags.bool_mode {
            if let Some(intent) = &last_intent {
                warnings.push(Warning {
                    message: format!(
                        "--bool overrides {}; format flags are ignored in bool mode",
                        intent.kind.flag_name()
                    ),
                });
            }
            // Quiet is intrinsic to bool mode, not a conflict: no warning
            RunState {
                mode: Mode::Bool,
                format: Format::Default,
                verbosity: Verbosity::Quiet,
            }
        } else {
            let mut format = match &last_intent {
                Some(intent) => {
                    Self::intent_format(&intent.kind, explicit_format, &mut warnings)
                }
                None => Format::Default,
            };

            let verbosity = if flags.quiet && flags.verbose {
                warnings.push(Warning {
                    message: "--quiet and --verbose both set; --quiet wins".to_string(),
                });
                Verbosity::Quiet
            } else if flags.quiet {
                Verbosity::Quiet
            } else if flags.verbose {
                // Promote the format only when the user chose nothing
                // explicit; an explicit "--format default" stays Default
                if last_intent.is_none() {
                    format = Format::Verbose;
                }
                Verbosity::Verbose
            } else {
                Verbosity::Normal
            };

            RunState {
                mode: Mode::Standard,
                format,
                verbosity,
            }
        };

        // Phase 3: validation accumulated warnings only; nothing fatal here
        (state, warnings)
    }

    /// Scan argv left-to-right for format-changing tokens
    fn collect_format_intents(tokens: &[String]) -> Vec<Intent> {
        let mut intents = Vec::new();
        let mut skip_next = false;

        for (position, token) in tokens.iter().enumerate() {
            if skip_next {
                skip_next = false;
                continue;
            }

            match token.as_str() {
                "--json" => intents.push(Intent {
                    kind: IntentKind::FormatShorthand(Format::Json),
                    position,
                }),
                "--plain" => intents.push(Intent {
                    kind: IntentKind::FormatShorthand(Format::Plain),
                    position,
                }),
                "--format" | "-f" => {
                    // Value is the following token, if any
                    let value = tokens.get(position + 1).cloned();
                    if value.is_some() {
                        skip_next = true;
                    }
                    intents.push(Intent {
                        kind: IntentKind::FormatOption(value),
                        position,
                    });
                }
                t if t.starts_with("--format=") => {
                    let value = t["--format=".len()..].to_string();
                    intents.push(Intent {
                        kind: IntentKind::FormatOption(Some(value)),
                        position,
                    });
                }
                // Attached short forms: -f=json and -fjson
                t if t.starts_with("-f=") => {
                    let value = t["-f=".len()..].to_string();
                    intents.push(Intent {
                        kind: IntentKind::FormatOption(Some(value)),
                        position,
                    });
                }
                t if t.starts_with("-f") && t.len() > 2 => {
                    let value = t["-f".len()..].to_string();
                    intents.push(Intent {
                        kind: IntentKind::FormatOption(Some(value)),
                        position,
                    });
                }
                _ => {}
            }
        }

        intents
    }

    /// Map a winning format intent to a Format, warning on unknown values
    fn intent_format(
        kind: &IntentKind,
        explicit_format: &str,
        warnings: &mut Vec<Warning>,
    ) -> Format {
        let value = match kind {
            IntentKind::FormatShorthand(format) => return *format,
            IntentKind::FormatOption(Some(value)) => value.clone(),
            IntentKind::FormatOption(None) => explicit_format.to_string(),
        };

        match value.to_lowercase().as_str() {
            "default" | "" => Format::Default,
            "json" => Format::Json,
            "plain" => Format::Plain,
            "verbose" => Format::Verbose,
            other => {
                warnings.push(Warning {
                    message: format!("unrecognized format '{}'; using default", other),
                });
                Format::Default
            }
        }
    }
}

impl IntentKind {
    fn flag_name(&self) -> &'static str {
        match self {
            IntentKind::FormatShorthand(Format::Json) => "--json",
            IntentKind::FormatShorthand(Format::Plain) => "--plain",
            IntentKind::FormatShorthand(_) => "--format",
            IntentKind::FormatOption(_) => "--format",
        }
    }
}

// Tests in tests/intent/resolve_tests.rs
