//! Output modes over a complete input: dump tokens, print the parse, or
//! evaluate.
//!
//! Every mode computes its whole result before writing anything, so a run
//! that fails leaves no partial output behind.

use std::io::Write;

use log::{debug, info};

use crate::environment::Environment;
use crate::error::Error;
use crate::interpreter;
use crate::parser;
use crate::policy::SyntaxPolicy;
use crate::sexp::Value;
use crate::token;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// One line per token, through the final FIN.
    Tokens,
    /// Each top-level datum on its own line.
    Parse,
    /// Print the result of evaluating the first top-level list, without a
    /// trailing newline.
    Eval,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Eval
    }
}


/// Runs input through the pipeline selected by mode, writing to out.
pub fn run<S: AsRef<str>, W: Write>(
    input: S,
    mode: Mode,
    policy: SyntaxPolicy,
    out: &mut W,
) -> Result<(), Error> {
    info!("Running {:?} ({:?})", mode, policy);
    let rendered = render(input.as_ref(), mode, policy)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Like run, but returns the output as a String.
pub fn render(input: &str, mode: Mode, policy: SyntaxPolicy) -> Result<String, Error> {
    let output = match mode {
        Mode::Tokens => token::tokenize(input, policy)?
            .iter()
            .map(|t| format!("{}\n", t.token()))
            .collect(),
        Mode::Parse => parser::parse(input, policy)?
            .iter()
            .map(|v| format!("{}\n", v))
            .collect(),
        Mode::Eval => evaluate_first(input, policy, &Environment::with_builtins())?.to_string(),
    };
    Ok(output)
}

/// Evaluates the first top-level list of input. Atoms before it are skipped
/// and input holding no list evaluates ().
pub fn evaluate_first(
    input: &str,
    policy: SyntaxPolicy,
    env: &Environment,
) -> Result<Value, Error> {
    let mut parser = parser::Parser::from_str(input, policy);
    let form = loop {
        match parser.read()? {
            Some(list @ Value::List(_)) => break list,
            Some(atom) => debug!("Skipping top-level atom {}", atom),
            None => break Value::empty_list(),
        }
    };
    Ok(interpreter::eval(&form, env)?)
}

/// Evaluates every top-level datum of input in order, stopping at the first
/// error.
pub fn evaluate_all(
    input: &str,
    policy: SyntaxPolicy,
    env: &Environment,
) -> Result<Vec<Value>, Error> {
    let mut results = Vec::new();
    for form in parser::Parser::from_str(input, policy) {
        results.push(interpreter::eval(&form?, env)?);
    }
    Ok(results)
}


#[cfg(test)]
#[path = "./pipeline_test.rs"]
mod pipeline_test;
