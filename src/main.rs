//! minicc: lexes C-like toy source files.
//!
//! Usage:
//!   minicc [-v] <FILE>...

use std::{fs::read_to_string, path::Path, process, time::Instant};

use clap::Parser as ClapParser;
use minicc::{display_error, lexer::lexer::tokenize};

#[derive(ClapParser, Debug)]
#[command(name = "minicc", about = "Lexer front end for a small C-like language")]
struct Cli {
    /// Source files to lex.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<String>,

    /// Print timings and every token produced.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut failed = false;

    for file in &cli.files {
        if !lex_file(Path::new(file), cli.verbose) {
            failed = true;
        }
    }

    process::exit(if failed { 1 } else { 0 });
}

/// Lexes one file, reporting any failure. Returns whether it succeeded.
fn lex_file(path: &Path, verbose: bool) -> bool {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    let contents = match read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error in file \"{}\"", file_name);
            eprintln!("{}", err);
            return false;
        }
    };

    let start = Instant::now();

    match tokenize(contents.clone(), Some(file_name.clone())) {
        Ok(tokens) => {
            if verbose {
                println!("Lexed {}.", file_name);
                println!("Tokenized in {:?}", start.elapsed());

                for token in &tokens {
                    token.debug();
                }
            }
            true
        }
        Err(error) => {
            eprintln!("Error in file \"{}\"", file_name);
            display_error(&error, &contents, path);
            false
        }
    }
}
