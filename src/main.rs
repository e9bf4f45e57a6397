use accessibility_generator::error::{GenerateError, Result};
use accessibility_generator::logging::{self, LoggingConfig};
use accessibility_generator::{Generator, LineBuffer, Registry, RunReport};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "axgen")]
#[command(about = "Accessibility identifiers and UI-test page objects for UIKit sources")]
struct Cli {
    /// Log the engine's decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite .swift files in place
    Generate {
        /// Path to a .swift file or a directory
        #[arg(required_unless_present = "stdin")]
        path: Option<PathBuf>,

        /// Read from stdin and write the result to stdout
        #[arg(long)]
        stdin: bool,

        /// Generator variant
        #[arg(short, long, env = "AXGEN_SELECTOR", default_value = "fordev")]
        selector: String,

        /// Print run reports as JSON
        #[arg(long)]
        json: bool,

        /// Write nothing; exit with 1 if any file would change
        #[arg(long)]
        check: bool,
    },
    /// List the registered generator variants
    Selectors,
}

/// Settings shared by every file of one `generate` invocation.
struct Run<'a> {
    generator: &'a Generator,
    check: bool,
}

#[derive(Serialize)]
struct FileReport {
    path: String,
    #[serde(flatten)]
    report: RunReport,
}

#[derive(Serialize)]
struct StdinResult<'a> {
    source: &'a str,
    report: &'a RunReport,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(&LoggingConfig::from_env().verbose(cli.verbose))?;
    let registry = Registry::standard();

    match cli.command {
        Commands::Selectors => {
            for selector in registry.selectors() {
                println!("{selector}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate {
            path,
            stdin,
            selector,
            json,
            check,
        } => {
            let Some(generator) = registry.resolve(&selector) else {
                return Err(GenerateError::UnknownSelector {
                    selector,
                    known: registry.selectors().join(", "),
                });
            };
            let run = Run { generator, check };

            let changed = if stdin {
                generate_stdin(&run, json)?
            } else if let Some(path) = path {
                generate_path(&run, &path, json)?
            } else {
                false
            };

            Ok(if check && changed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn generate_stdin(run: &Run<'_>, json_output: bool) -> Result<bool> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source).map_err(GenerateError::Stdin)?;

    let (text, report) = dispatch(run, &source);

    if json_output {
        let result = StdinResult {
            source: &text,
            report: &report,
        };
        println!("{}", serde_json::to_string(&result)?);
    } else if !run.check {
        print!("{text}");
    }
    Ok(report.changed)
}

fn generate_path(run: &Run<'_>, path: &Path, json_output: bool) -> Result<bool> {
    let start = Instant::now();
    let reports = if path.is_file() {
        if !is_swift(path) {
            return Err(GenerateError::NotSwift(path.to_path_buf()));
        }
        vec![generate_file(run, path)?]
    } else if path.is_dir() {
        generate_directory(run, path)?
    } else {
        return Err(GenerateError::NotFound(path.to_path_buf()));
    };

    let changed = reports.iter().filter(|r| r.report.changed).count();
    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    print_summary(run.check, changed, reports.len(), start.elapsed());
    Ok(changed > 0)
}

fn generate_directory(run: &Run<'_>, dir: &Path) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_swift(e.path()))
    {
        reports.push(generate_file(run, entry.path())?);
    }

    if reports.is_empty() {
        return Err(GenerateError::NoSwiftFiles(dir.to_path_buf()));
    }
    Ok(reports)
}

fn generate_file(run: &Run<'_>, path: &Path) -> Result<FileReport> {
    let source = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, report) = dispatch(run, &source);
    debug!(path = %path.display(), changed = report.changed, "processed");

    if report.changed && !run.check {
        fs::write(path, &text).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    print_processed(&path.display().to_string(), report.changed, run.check);

    Ok(FileReport {
        path: path.display().to_string(),
        report,
    })
}

fn dispatch(run: &Run<'_>, source: &str) -> (String, RunReport) {
    let mut buffer = LineBuffer::from_text(source);
    let report = run.generator.run(&mut buffer);
    (buffer.to_text(), report)
}

fn is_swift(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "swift")
}

fn print_processed(path: &str, changed: bool, check: bool) {
    let is_tty = io::stderr().is_terminal();
    match (changed, check, is_tty) {
        (true, false, true) => eprintln!("  \x1b[32m✓\x1b[0m {path}"),
        (true, false, false) => eprintln!("  ✓ {path}"),
        (true, true, true) => eprintln!("  \x1b[33m✗\x1b[0m {path} (out of date)"),
        (true, true, false) => eprintln!("  ✗ {path} (out of date)"),
        (false, _, true) => eprintln!("  \x1b[2m· {path} (unchanged)\x1b[0m"),
        (false, _, false) => eprintln!("  · {path} (unchanged)"),
    }
}

fn print_summary(check: bool, changed: usize, total: usize, elapsed: std::time::Duration) {
    let is_tty = io::stderr().is_terminal();
    let time_str = format_duration(elapsed);
    let files_word = if total == 1 { "file" } else { "files" };

    let message = if check {
        format!("{changed} of {total} {files_word} out of date ({time_str})")
    } else {
        format!("Generated {changed} of {total} {files_word} in {time_str}")
    };
    if is_tty {
        eprintln!("\n\x1b[1m✨ {message}\x1b[0m");
    } else {
        eprintln!("\n✨ {message}");
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{micros}μs")
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
