//! Command-line driver.
//!
//! Reads a whole input from a file (or stdin) and prints its tokens, its
//! parse, or the result of evaluating it:
//!
//!   `echo "(+ 1 2)" | cargo run`             prints `3`
//!   `cargo run -- --tokens prog.sexp`        one token per line
//!   `RUST_LOG=debug cargo run -- --repl`     interactive session
//!
//! Errors are printed to stderr and the process exits non-zero.

use clap::{App, Arg, ArgMatches};
use colored::*;
use log::{info, LevelFilter};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::process;

use sexpr::environment::Environment;
use sexpr::error::Error;
use sexpr::pipeline::{self, Mode};
use sexpr::policy::SyntaxPolicy;
use sexpr::sexp::Value;
use sexpr::token::cli_stream::CliStream;


fn main() {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("sexpr")
        .version("0.1")
        .about("Tokenize, parse, or evaluate S-expressions")
        .arg(
            Arg::new("tokens")
                .short('t')
                .long("tokens")
                .conflicts_with_all(&["parse", "repl"])
                .help("Print one token per line instead of evaluating"),
        )
        .arg(
            Arg::new("parse")
                .short('p')
                .long("parse")
                .conflicts_with("repl")
                .help("Print each parsed datum instead of evaluating"),
        )
        .arg(
            Arg::new("strict")
                .short('s')
                .long("strict")
                .help("Reject malformed input rather than recovering from it"),
        )
        .arg(
            Arg::new("repl")
                .short('r')
                .long("repl")
                .help("Start an interactive session"),
        )
        .arg(
            Arg::new("INPUT")
                .help("File to read; stdin is used when absent")
                .index(1),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let policy = if matches.is_present("strict") {
        SyntaxPolicy::Strict
    } else {
        SyntaxPolicy::Lenient
    };

    if matches.is_present("repl") {
        return repl(policy);
    }

    let mode = if matches.is_present("tokens") {
        Mode::Tokens
    } else if matches.is_present("parse") {
        Mode::Parse
    } else {
        Mode::Eval
    };

    let input = match matches.value_of("INPUT") {
        Some(path) => {
            info!("Reading {}", path);
            fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::run(input, mode, policy, &mut out)
}

fn repl(policy: SyntaxPolicy) -> Result<(), Error> {
    let env = Environment::with_builtins();
    for input in CliStream::new() {
        match pipeline::evaluate_all(&input, policy, &env) {
            Ok(results) => {
                for result in &results {
                    print_result(result)?;
                }
            }
            Err(err) => println!(" {}", err),
        }
        println!();
    }
    Ok(())
}

fn print_result(value: &Value) -> io::Result<()> {
    fn paren_color(depth: usize) -> (u8, u8, u8) {
        match depth % 6 {
            0 => (0, 255, 204),
            1 => (204, 51, 0),
            2 => (153, 255, 102),
            3 => (153, 102, 255),
            4 => (255, 255, 102),
            _ => (255, 179, 179),
        }
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write!(writer, "-> ")?;
    value.write_list(
        &mut writer,
        0,
        &mut |writer, atom, _depth| write!(writer, "{}", atom),
        &mut |writer, paren, depth| {
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        },
    )?;
    writeln!(writer)?;
    writer.flush()
}
