use std::{process::ExitCode, rc::Rc, time::Instant};

use clap::Parser;
use mylisp::{
    ast::tree::AstTree,
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    read_into_string_if_file_exists, render_error, Source, SOURCE_EXTENSION,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Parses a mylisp program and prints its syntax tree.
#[derive(Debug, Clone, clap::Parser)]
#[clap(name = "mylisp", about = "Parses a mylisp program and prints its syntax tree.")]
struct Args {
    /// Source code, or the path of a `.mlsp` file to read it from.
    input: String,

    /// Prints the token stream before the tree.
    #[clap(long)]
    tokens: bool,

    /// Enables debug logging (overridden by `RUST_LOG`).
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = match read_into_string_if_file_exists(&args.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {}: {}", args.input, error);
            return ExitCode::FAILURE;
        }
    };

    if source.unexpected_extension {
        warn!(
            "Expected the file '{}' to have the extension '.{}'.",
            args.input, SOURCE_EXTENSION
        );
    }

    match run(&source, args.tokens) {
        Ok(tree) => {
            for id in &tree.program {
                println!("{}", tree.describe(*id));
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprint!("{}", render_error(&error, &source.code));
            ExitCode::FAILURE
        }
    }
}

fn run(source: &Source, print_tokens: bool) -> Result<AstTree, Error> {
    let start = Instant::now();
    let tokens = tokenize(source.code.clone(), Some(source.name.clone()))?;
    debug!("Tokenized in {:?}", start.elapsed());

    if print_tokens {
        tokens.iter().for_each(print_token);
    }

    let parse_start = Instant::now();
    let tree = parse(tokens, Rc::new(source.name.clone()))?;
    debug!("Parsed in {:?}", parse_start.elapsed());

    Ok(tree)
}

fn print_token(token: &Token) {
    println!("{}", token);
}
