use std::{fs, process::ExitCode};

use clap::Parser;
use log::info;
use nahw::check;

/// nahw checks programs written in a tiny imperative language with Arabic
/// keywords and reports the first syntax or semantic error.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells nahw to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the final symbol table after the result, whether or not the
    /// program was accepted.
    #[arg(short, long)]
    symbols: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let report = check(&source);
    info!("checked {} bytes, {} scope(s) left open",
          source.len(),
          report.scopes.depth() - 1);

    let status = match &report.outcome {
        Ok(()) => {
            println!("Syntax is correct!");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    };

    if args.symbols {
        println!("Symbol Table: {}", report.scopes);
    }

    status
}
