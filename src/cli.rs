// CLI definition module
// clap parser for flags and positionals; raw argv ordering is captured
// separately in main because clap discards repeated-flag order

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hashmatch")]
#[command(about = "Compute and compare file digests and hash strings")]
#[command(version)]
pub struct Cli {
    /// File paths and/or hash strings; use '-' to read from stdin
    pub args: Vec<String>,

    /// Hash algorithm: md5, sha1, sha256, sha512, blake2b
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Boolean mode: no output, exit code answers "did everything match?"
    #[arg(long = "bool")]
    pub bool_mode: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print per-file digests in addition to match results
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON output format (shorthand for --format json)
    #[arg(long)]
    pub json: bool,

    /// Plain uncolored output format (shorthand for --format plain)
    #[arg(long)]
    pub plain: bool,

    /// Output format: default, json, plain, verbose
    #[arg(short, long)]
    pub format: Option<String>,

    /// Exit non-zero unless at least one match group is found
    #[arg(long)]
    pub require_match: bool,

    /// Show a progress bar when hashing large files
    #[arg(long)]
    pub progress: bool,

    /// List supported algorithms and exit
    #[arg(long)]
    pub list: bool,
}
