//! # specrun
//!
//! Runs a toy single-function program through the spec-driven pipeline and
//! prints the IR and the execution output.
//!
//! ## Usage
//!
//! - Run the built-in sample: `specrun`
//! - Run a program file: `specrun main.toy`
//! - Use a specific spec file: `specrun --spec mylang.json main.toy`
//! - Only show the IR: `specrun --ir-only main.toy`
//!
//! Without `--spec`, `langspec.json` is searched in the current directory and
//! its parents, then `~/.langspec.json`; the default spec is used otherwise.

use clap::Parser as ClapParser;
use specrun::interpreter::Interpreter;
use specrun::{LanguageSpec, ParseError, config, ir, parser, tokenizer};
use std::fs;
use std::io;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the specrun tool.
#[derive(ClapParser)]
#[command(name = "specrun")]
#[command(version = PKG_VERSION)]
#[command(about = "A spec-driven toy language toolchain", long_about = None)]
struct Cli {
    /// Program file to run (defaults to the built-in sample)
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Language spec file (JSON)
    #[arg(short, long, value_name = "PATH")]
    spec: Option<PathBuf>,

    /// Print the IR without executing it
    #[arg(long)]
    ir_only: bool,
}

/// Entry point for the CLI tool.
fn main() {
    let cli = Cli::parse();

    println!("Loading LanguageSpec...");
    let spec = load_language_spec(cli.spec);

    let (source, filename) = match cli.source {
        Some(path) => match fs::read_to_string(&path) {
            Ok(content) => (content, Some(path.display().to_string())),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => (specrun::sample_program(&spec), None),
    };

    let tokens = tokenizer::tokenize(&source);
    let function = match parser::parse(&tokens, &spec) {
        Ok(function) => function,
        Err(e) => {
            print_parse_error(&e, &tokens, filename.as_deref());
            std::process::exit(1);
        }
    };
    let ir = ir::render(&function, &spec);

    println!("\n=== IR ===\n{}", ir);
    if cli.ir_only {
        return;
    }

    println!("\n=== EXECUTION ===");
    let mut stdout = io::stdout().lock();
    if let Err(e) = Interpreter::new(&spec).execute(&ir, &mut stdout) {
        eprintln!("Execution error: {}", e);
        std::process::exit(1);
    }
}

/// Load the spec from `path`, or from a discovered spec file, or fall back to
/// the default spec.
fn load_language_spec(path: Option<PathBuf>) -> LanguageSpec {
    let Some(path) = path.or_else(config::find_spec_file) else {
        eprintln!(
            "Warning: No {} found, using the default spec.",
            config::SPEC_FILE_NAME
        );
        return LanguageSpec::default();
    };

    match config::load_spec(&path) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error loading spec '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

/// Print a parse error with the offending token underlined.
fn print_parse_error(error: &ParseError, tokens: &[&str], filename: Option<&str>) {
    let file_prefix = filename.map(|f| format!("{}: ", f)).unwrap_or_default();
    eprintln!("Parse error: {}{}", file_prefix, error);

    let index = error.index();

    // Show a few tokens on either side of the offending one.
    let from = index.saturating_sub(3);
    let to = (index + 4).min(tokens.len());
    if from >= to {
        return;
    }

    let mut line = String::new();
    let mut marker = String::new();
    for (i, token) in tokens[from..to].iter().enumerate() {
        let width = token.chars().count();
        let mark = if from + i == index { "^" } else { " " };
        line.push_str(token);
        line.push(' ');
        marker.push_str(&mark.repeat(width));
        marker.push(' ');
    }

    // End of input: point just past the last token.
    if index >= tokens.len() {
        marker.push('^');
    }

    eprintln!();
    eprintln!("  {}", line.trim_end());
    eprintln!("  {}", marker.trim_end());
}
