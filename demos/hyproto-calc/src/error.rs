use std::ops::Range;

use thiserror::Error;

/// One parser complaint, with the byte range it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Range<usize>,
}

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    /// The input is not a well-formed expression.
    #[error("failed to parse expression ({} error(s))", diagnostics.len())]
    Parse { diagnostics: Vec<Diagnostic> },

    /// A variable is referenced but no value was bound to it.
    #[error("variable `{0}` is not bound; pass it with --var {0}=<value>")]
    UnboundVariable(String),

    /// The right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A builtin was applied outside of its domain, e.g. `sqrt(-1)`.
    #[error("`{function}` is not defined for {value}")]
    Domain { function: &'static str, value: f64 },

    /// No builtin with this name accepts this many arguments.
    #[error("unknown function `{name}` with {arity} argument(s)")]
    UnknownFunction { name: String, arity: usize },

    /// A `--var` argument is not of the form `name=value`.
    #[error("invalid binding '{0}': expected name=value with a numeric value")]
    InvalidBinding(String),
}

pub type CalcResult<T> = Result<T, CalcError>;
