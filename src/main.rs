//! CLI tool that scans files and prints their tokens.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use confscan::{KeywordSet, Scanner, TokenKind};
use tracing_subscriber::EnvFilter;

fn usage() {
    eprintln!("Usage: confscan [options] <files...>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict   Fail if any invalid character is found");
    eprintln!("  --summary  Print token counts instead of tokens");
    eprintln!("  -h, --help Show this message");
    eprintln!();
    eprintln!("Keywords: {}", KeywordSet::default().words().join(" "));
    eprintln!();
    eprintln!("Use - to read from standard input.");
    eprintln!("Set RUST_LOG=trace to log every scanned token.");
}

#[derive(Debug, Default)]
struct Options {
    strict: bool,
    summary: bool,
    files: Vec<String>,
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut opts = Options::default();
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return None,
            "--strict" => opts.strict = true,
            "--summary" => opts.summary = true,
            flag if flag.starts_with("--") => {
                eprintln!("Unknown option: {flag}");
                return None;
            }
            path => opts.files.push(path.to_string()),
        }
    }
    Some(opts)
}

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

/// Scan one source, printing tokens to stdout and diagnostics to stderr.
/// Returns false when the file should count as failed.
fn scan_file(path: &str, content: &str, opts: &Options) -> bool {
    let mut count = 0usize;
    let mut invalid = 0usize;

    for result in Scanner::new(content) {
        let token = match result {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(path, error = %e, "scan aborted");
                eprintln!("{path}: {e}");
                return false;
            }
        };

        if let Some(message) = token.diagnostic() {
            invalid += 1;
            eprintln!(
                "{path}:{}:{}: {message}",
                token.span.line, token.span.column
            );
        }
        if token.kind != TokenKind::EndOfInput {
            count += 1;
        }
        if !opts.summary {
            println!("{token}");
        }
    }

    if opts.summary {
        println!("{path}: {count} token(s), {invalid} invalid");
    }

    !(opts.strict && invalid > 0)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(opts) = parse_args(&args) else {
        usage();
        return ExitCode::from(2);
    };

    if opts.files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in &opts.files {
        let content = match read_source(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        tracing::debug!(path, bytes = content.len(), "scanning");
        if !scan_file(path, &content, &opts) {
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
