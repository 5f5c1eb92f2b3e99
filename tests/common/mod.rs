use sexpr::environment::Environment;
use sexpr::error::Error;
use sexpr::parser::Parser;
use sexpr::policy::SyntaxPolicy;
use sexpr::sexp::Value;


pub fn setup() -> Environment {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Environment::with_builtins()
}

pub fn results<S: AsRef<str>>(env: &Environment, s: S) -> Vec<Value> {
    results_with_errors(env, s)
        .into_iter()
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

/// Evaluates every top-level datum, continuing past evaluation errors.
///
/// Parse errors end the run since the reader cannot resync after them.
pub fn results_with_errors<S: AsRef<str>>(env: &Environment, s: S) -> Vec<Result<Value, Error>> {
    let mut results = Vec::new();
    for form in Parser::from_str(s.as_ref(), SyntaxPolicy::Lenient) {
        match form {
            Ok(form) => results.push(sexpr::interpreter::eval(&form, env).map_err(Error::from)),
            Err(err) => {
                results.push(Err(err.into()));
                break;
            }
        }
    }
    results
}
