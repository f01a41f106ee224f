//! A small calculator whose evaluator is written with `hyproto` call transforms.
//!
//! ```
//! use hyproto_calc::{Env, calculate};
//!
//! let env = Env::from([("x".to_string(), 3.0)]);
//! assert_eq!(calculate("1 + x * 2", &env).unwrap().value, 7.0);
//! ```
pub mod ast;
pub mod error;
pub mod parser;
pub mod rules;

pub use error::{CalcError, CalcResult, Diagnostic};
pub use rules::{Env, Evaluation};

/// Parse and evaluate `source` in one go.
pub fn calculate(source: &str, env: &Env) -> CalcResult<Evaluation> {
    let ast = parser::parse(source)?;
    rules::evaluate_tree(&ast, env)
}

/// Parse a `name=value` binding as given on the command line.
pub fn parse_binding(binding: &str) -> CalcResult<(String, f64)> {
    let invalid = || CalcError::InvalidBinding(binding.to_string());
    let (name, value) = binding.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid());
    }
    let value = value.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok((name.to_string(), value))
}
