use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use idl_parser::diagnostics::render_errors;
use idl_parser::lexer::Scanner;
use idl_parser::lexer::Token;
use idl_parser::{Source, parse};

#[derive(Parser)]
#[command(name = "idlc", version, about = "Parse and inspect IDL files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse files and report syntax errors
    Check {
        /// IDL files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the token stream of a file, one token per line
    Tokens {
        /// IDL file path
        file: PathBuf,
    },
    /// Print the syntax tree of a file as JSON
    Ast {
        /// IDL file path
        file: PathBuf,
    },
}

fn read_or_exit(file: &Path) -> String {
    match Source::Path(file.to_path_buf()).read() {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { files } => {
            let mut failed = 0usize;
            for file in &files {
                let source = read_or_exit(file);
                let parsed = parse(&source);
                if parsed.errors.is_empty() {
                    continue;
                }
                failed += 1;
                render_errors(&source, &file.to_string_lossy(), &parsed.errors);
            }
            if failed > 0 {
                eprintln!("{failed} of {} file(s) had syntax errors", files.len());
                std::process::exit(1);
            }
            eprintln!("{} file(s) ok", files.len());
        }
        Commands::Tokens { file } => {
            let source = read_or_exit(&file);
            let mut scanner = Scanner::new(&source);
            loop {
                let lexeme = scanner.scan();
                println!("{}..{}\t{}\t{:?}", lexeme.span.start, lexeme.span.end, lexeme.token, lexeme.literal);
                if lexeme.token == Token::Eof {
                    break;
                }
            }
        }
        Commands::Ast { file } => {
            let source = read_or_exit(&file);
            let parsed = parse(&source);
            match serde_json::to_string_pretty(&parsed.file) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: failed to serialize AST: {err}");
                    std::process::exit(1);
                }
            }
            if !parsed.errors.is_empty() {
                render_errors(&source, &file.to_string_lossy(), &parsed.errors);
                std::process::exit(1);
            }
        }
    }
}
