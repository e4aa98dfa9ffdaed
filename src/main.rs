use std::io::IsTerminal;

use clap::Parser;
use colored::Colorize;

use hashmatch::cli::Cli;
use hashmatch::config::Config;
use hashmatch::error::HashMatchError;
use hashmatch::hash::HashComputer;
use hashmatch::intent::classify::{ArgumentClassifier, DiskProbe};
use hashmatch::intent::detect::AlgorithmName;
use hashmatch::intent::exit::{resolve_exit_code, ExitPolicy, EXIT_INVALID_ARGUMENTS};
use hashmatch::intent::mode::{select_mode, OperatingMode};
use hashmatch::intent::resolve::{ConflictResolver, FlagStates, Mode};
use hashmatch::output::Renderer;
use hashmatch::runner::Runner;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    // Raw argv is captured before clap parses it: the conflict resolver
    // needs token order, which clap's flag bag discards
    let raw_tokens: Vec<String> = std::env::args().skip(1).collect();
    let cli = Cli::parse();
    let config = Config::load();

    let color = config.color.unwrap_or(true) && std::io::stdout().is_terminal();

    if cli.list {
        for algorithm in AlgorithmName::all() {
            println!("{:<10} {} hex characters", algorithm.cli_name(), algorithm.hex_len());
        }
        return hashmatch::intent::exit::EXIT_SUCCESS;
    }

    let algorithm = match config.effective_algorithm(cli.algorithm.as_deref()) {
        Ok(algorithm) => algorithm,
        Err(err) => return fail_usage(&err, color),
    };

    let flags = FlagStates {
        bool_mode: cli.bool_mode,
        quiet: cli.quiet,
        verbose: cli.verbose,
        json: cli.json,
        plain: cli.plain,
    };
    let (state, warnings) =
        ConflictResolver::resolve(&raw_tokens, &flags, cli.format.as_deref().unwrap_or(""));

    let renderer = Renderer::new(state, color);
    renderer.render_warnings(&warnings);

    let probe = DiskProbe;
    let classifier = ArgumentClassifier::new(&probe);
    let classified = match classifier.classify(&cli.args, algorithm) {
        Ok(classified) => classified,
        Err(err) => return fail_usage(&err, color),
    };

    let mode = match select_mode(&classified.files, &classified.hashes) {
        Ok(mode) => mode,
        Err(err) => return fail_usage(&err, color),
    };

    let computer = HashComputer::new().with_progress(cli.progress);
    let runner = Runner::new(computer, algorithm);
    let (report, outcome) = runner.run(mode, &classified);

    renderer.render(&report);

    // Comparison and bool mode both answer "did it match?", so a mismatch
    // must exit non-zero even without --require-match
    let require_match = cli.require_match
        || config.require_match.unwrap_or(false)
        || state.mode == Mode::Bool
        || mode == OperatingMode::Comparison;

    resolve_exit_code(&outcome, &ExitPolicy { require_match })
}

fn fail_usage(err: &HashMatchError, color: bool) -> i32 {
    if color {
        eprintln!("{} {}", "error:".red().bold(), err);
    } else {
        eprintln!("error: {}", err);
    }
    EXIT_INVALID_ARGUMENTS
}
