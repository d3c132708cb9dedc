//! Unitwise CLI entry point.

use std::env;
use std::process::ExitCode;
use unitwise_grammar::{ParseOutcome, QueryParser};
use unitwise_runtime::Repl;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    query_words: Vec<String>,
    show_help: bool,
    show_version: bool,
    no_banner: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.no_banner = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            word => config.query_words.push(word.to_string()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("unitwise {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let parser = QueryParser::standard()?;

    // Positional words form a one-shot query; otherwise start the REPL.
    if config.query_words.is_empty() {
        let mut repl = Repl::new(parser)?;
        if config.no_banner {
            repl = repl.without_banner();
        }
        repl.run()?;
        return Ok(());
    }

    let query = config.query_words.join(" ");
    match parser.parse_outcome(&query) {
        Some(ParseOutcome::Conversion(conversion)) => println!("{conversion}"),
        Some(ParseOutcome::Ambiguous(candidates)) => {
            println!("\"{}\" is ambiguous between:", candidates.typed);
            for unit in &candidates.candidates {
                println!("  {}", unit.name);
            }
        }
        None => {
            println!("no parse");
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mUnitwise\x1b[0m - Natural-language unit conversion

\x1b[1mUSAGE:\x1b[0m
    unitwise [OPTIONS] [QUERY...]

\x1b[1mARGUMENTS:\x1b[0m
    [QUERY...]    A conversion query to evaluate and exit,
                  e.g. unitwise 50 centimeters to miles

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -q, --quiet      Suppress the REPL banner

\x1b[1mEXAMPLES:\x1b[0m
    unitwise                         Start the interactive REPL
    unitwise 3 feet to meters        Evaluate one query
    unitwise ten pounds in grams     Number words work too"
    );
}
