// Output rendering module
// Renders run reports according to the resolved RunState

use colored::Colorize;

use crate::intent::resolve::{Format, Mode, RunState, Verbosity, Warning};
use crate::runner::{ComparisonReport, RunReport, StandardReport, ValidationReport};

/// Renders reports and warnings for one invocation
pub struct Renderer {
    state: RunState,
    color: bool,
}

impl Renderer {
    pub fn new(state: RunState, color: bool) -> Self {
        Self { state, color }
    }

    /// Print resolution warnings to stderr, never mixed into primary output.
    /// Quiet and bool mode suppress informational stdout, not conflict
    /// diagnostics, so warnings always print.
    pub fn render_warnings(&self, warnings: &[Warning]) {
        for line in self.warning_lines(warnings) {
            eprintln!("{}", line);
        }
    }

    /// Format warnings as the lines render_warnings prints
    pub fn warning_lines(&self, warnings: &[Warning]) -> Vec<String> {
        warnings
            .iter()
            .map(|warning| {
                if self.color {
                    format!("{} {}", "warning:".yellow().bold(), warning)
                } else {
                    format!("warning: {}", warning)
                }
            })
            .collect()
    }

    /// Render the report to stdout per the resolved mode and format
    pub fn render(&self, report: &RunReport) {
        // Bool mode prints nothing at all; the exit code carries the answer
        if self.state.mode == Mode::Bool {
            return;
        }

        match self.state.format {
            Format::Json => self.render_json(report),
            Format::Plain => print!("{}", self.to_plain_text(report)),
            Format::Default | Format::Verbose => self.render_default(report),
        }
    }

    fn render_json(&self, report: &RunReport) {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("error: failed to serialize report: {}", err),
        }
    }

    /// Uncolored text, same content as the default format
    pub fn to_plain_text(&self, report: &RunReport) -> String {
        let mut output = String::new();
        match report {
            RunReport::Validation(r) => Self::plain_validation(r, &mut output),
            RunReport::Comparison(r) => Self::plain_comparison(r, &mut output),
            RunReport::Standard(r) => self.plain_standard(r, &mut output),
        }
        output
    }

    fn plain_validation(report: &ValidationReport, output: &mut String) {
        for check in &report.checks {
            let status = if check.valid { "VALID" } else { "INVALID" };
            output.push_str(&format!("{}  {} ({})\n", status, check.hash, report.algorithm));
        }
    }

    fn plain_comparison(report: &ComparisonReport, output: &mut String) {
        if let Some(error) = &report.error {
            output.push_str(&format!("ERROR  {}\n{}\n", report.file.display(), error));
            return;
        }
        let status = if report.matched { "PASS" } else { "FAIL" };
        output.push_str(&format!("{}  {} ({})\n", status, report.file.display(), report.algorithm));
        if !report.matched {
            output.push_str(&format!("  expected: {}\n", report.expected));
            if let Some(actual) = &report.actual {
                output.push_str(&format!("  actual:   {}\n", actual));
            }
        }
    }

    fn plain_standard(&self, report: &StandardReport, output: &mut String) {
        if self.state.format == Format::Verbose {
            for (path, hash) in &report.digests {
                output.push_str(&format!("{}  {}\n", hash, path));
            }
            if !report.digests.is_empty() {
                output.push('\n');
            }
        }

        for group in &report.groups {
            output.push_str(&format!("Match group ({} files, {}):\n", group.count, group.hash));
            for path in &group.paths {
                output.push_str(&format!("  {}\n", path));
            }
        }

        if !report.unmatched.is_empty() {
            output.push_str("Unmatched:\n");
            for path in &report.unmatched {
                output.push_str(&format!("  {}\n", path));
            }
        }

        for failure in &report.failures {
            output.push_str(&format!("ERROR  {}: {}\n", failure.path, failure.message));
        }
    }

    fn render_default(&self, report: &RunReport) {
        match report {
            RunReport::Validation(r) => {
                for check in &r.checks {
                    let status = if check.valid {
                        self.paint("VALID", true)
                    } else {
                        self.paint("INVALID", false)
                    };
                    if self.state.verbosity != Verbosity::Quiet {
                        println!("{}  {} ({})", status, check.hash, r.algorithm);
                    }
                }
            }
            RunReport::Comparison(r) => {
                if let Some(error) = &r.error {
                    eprintln!("{}  {}", self.paint("ERROR", false), r.file.display());
                    eprintln!("{}", error);
                    return;
                }
                let status = self.paint(if r.matched { "PASS" } else { "FAIL" }, r.matched);
                if self.state.verbosity != Verbosity::Quiet || !r.matched {
                    println!("{}  {} ({})", status, r.file.display(), r.algorithm);
                }
                if !r.matched {
                    println!("  expected: {}", r.expected);
                    if let Some(actual) = &r.actual {
                        println!("  actual:   {}", actual);
                    }
                }
            }
            RunReport::Standard(r) => {
                if self.state.verbosity == Verbosity::Quiet {
                    // Failures still surface on stderr
                    for failure in &r.failures {
                        eprintln!("{}", failure.message);
                    }
                    return;
                }

                if self.state.format == Format::Verbose {
                    for (path, hash) in &r.digests {
                        println!("{}  {}", hash, path);
                    }
                    if !r.digests.is_empty() {
                        println!();
                    }
                }

                for group in &r.groups {
                    let header = format!("Match group ({} files, {})", group.count, group.hash);
                    if self.color {
                        println!("{}:", header.green().bold());
                    } else {
                        println!("{}:", header);
                    }
                    for path in &group.paths {
                        println!("  {}", path);
                    }
                }

                if !r.unmatched.is_empty() {
                    println!("Unmatched:");
                    for path in &r.unmatched {
                        println!("  {}", path);
                    }
                }

                for failure in &r.failures {
                    eprintln!("{}", failure.message);
                }
            }
        }
    }

    fn paint(&self, text: &str, ok: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        if ok {
            text.green().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }
}
