//! lulex token dump tool
//!
//! Prints the token stream of a source file, or checks it for input the
//! lexer cannot classify.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lulex::{check, Diagnostic, LexError, LexResult, Lexer, TokenKind, VERSION};

/// Tokenize Lua-family source files
#[derive(Parser, Debug)]
#[command(name = "lulex")]
#[command(version = VERSION)]
#[command(about = "Tokenize Lua-family source files", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Fail on the first illegal token instead of listing tokens
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long, env = "LULEX_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "LULEX_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose);

    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprint!("{}", Diagnostic::new(e));
            process::exit(1);
        }
    };

    let filename = cli.file.display().to_string();
    if cli.check {
        match check(&source, Some(&filename)) {
            Ok(tokens) => {
                println!("{} {} ({} tokens)", "ok".green().bold(), filename, tokens.len());
            }
            Err(e) => {
                eprint!("{}", Diagnostic::with_source(e, &source));
                process::exit(1);
            }
        }
    } else {
        show_tokens(&source, &filename);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn read_source(path: &Path) -> LexResult<String> {
    debug!(path = %path.display(), "reading source");
    fs::read_to_string(path).map_err(|source| LexError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Print one line per token, end-of-input included
fn show_tokens(source: &str, filename: &str) {
    let tokens = Lexer::new(source, Some(filename)).tokenize();

    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        let kind = format!("{:20}", token.kind.to_string());
        let kind = if token.kind == TokenKind::Illegal {
            kind.red().bold()
        } else {
            kind.normal()
        };
        println!(
            "{:4}: {} | {:24} | {}:{}",
            i,
            kind,
            format!("{:?}", token.literal),
            token.location.line,
            token.location.column
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());
}
