//! Evaluation of expression trees, written as composed transforms.
//!
//! [`Eval`] is the only hand-written recursion point: it looks at the node kind and hands the
//! node to a rule built with [`call`]. Every rule runs with the evaluation [`Stats`] as state and
//! the variable [`Env`] as data.
use std::cell::Cell;
use std::collections::HashMap;

use hyproto::prelude::*;
use hyproto::PrimitiveTransform;
use log::{debug, trace};

use crate::ast::{Ast, BinaryNode, BinaryOp, Conditional};
use crate::error::{CalcError, CalcResult};

/// Variable bindings.
pub type Env = HashMap<String, f64>;

/// Counters updated while a tree is evaluated.
#[derive(Debug, Default)]
pub struct Stats {
    visited: Cell<usize>,
    builtin_calls: Cell<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    fn visit(&self) {
        self.visited.set(self.visited.get() + 1);
    }

    fn record_builtin(&self) {
        self.builtin_calls.set(self.builtin_calls.get() + 1);
    }

    /// Nodes handed to [`Eval`] so far.
    pub fn visited(&self) -> usize {
        self.visited.get()
    }

    pub fn builtin_calls(&self) -> usize {
        self.builtin_calls.get()
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub visited: usize,
    pub builtin_calls: usize,
}

/// Evaluates any node.
#[derive(Debug, Clone, Copy, Default, PrimitiveTransform)]
pub struct Eval;

impl<'a, 's, 'd> Transform<&'a Ast, &'s Stats, &'d Env> for Eval {
    type Output = CalcResult<f64>;

    fn invoke(&self, expr: &'a Ast, stats: &'s Stats, env: &'d Env) -> CalcResult<f64> {
        stats.visit();
        trace!("eval {expr}");
        match expr {
            Ast::Number(n) => Ok(*n),
            Ast::Variable(name) => {
                call(func(lookup), (Expr, Data)).invoke(name.as_str(), stats, env)
            }
            Ast::Neg(inner) => call(func(negate), (Eval,)).invoke(inner.as_ref(), stats, env),
            Ast::Binary(node) => call(
                func(apply_binary),
                (Operator, call(Eval, (Lhs,)), call(Eval, (Rhs,))),
            )
            .invoke(node, stats, env),
            // Both branches are evaluated; only the error of the branch taken surfaces.
            Ast::If(cond) => call(
                Select,
                (
                    call(Eval, (Condition,)),
                    call(Eval, (ThenBranch,)),
                    call(Eval, (ElseBranch,)),
                ),
            )
            .invoke(cond, stats, env),
            Ast::Call { name, args } => builtin(name, args, stats, env),
        }
    }
}

/// Defines a transform returning a borrowed field of the node in expression position.
macro_rules! projection {
    ($(#[$doc:meta])* $name:ident: $node:ty => $field:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PrimitiveTransform)]
        pub struct $name;

        impl<'a, S, D> Transform<&'a $node, S, D> for $name {
            type Output = &'a Ast;

            #[inline]
            fn invoke(&self, expr: &'a $node, _state: S, _data: D) -> &'a Ast {
                &expr.$field
            }
        }
    };
}

projection!(Lhs: BinaryNode => lhs);
projection!(Rhs: BinaryNode => rhs);
projection!(Condition: Conditional => condition);
projection!(ThenBranch: Conditional => then_branch);
projection!(ElseBranch: Conditional => else_branch);

/// The operator of a binary node.
#[derive(Debug, Clone, Copy, Default, PrimitiveTransform)]
pub struct Operator;

impl<'a, S, D> Transform<&'a BinaryNode, S, D> for Operator {
    type Output = BinaryOp;

    #[inline]
    fn invoke(&self, expr: &'a BinaryNode, _state: S, _data: D) -> BinaryOp {
        expr.op
    }
}

/// First component of a pair expression.
#[derive(Debug, Clone, Copy, Default, PrimitiveTransform)]
pub struct First;

impl<A, B, S, D> Transform<(A, B), S, D> for First {
    type Output = A;

    #[inline]
    fn invoke(&self, (a, _): (A, B), _state: S, _data: D) -> A {
        a
    }
}

/// Second component of a pair expression.
#[derive(Debug, Clone, Copy, Default, PrimitiveTransform)]
pub struct Second;

impl<A, B, S, D> Transform<(A, B), S, D> for Second {
    type Output = B;

    #[inline]
    fn invoke(&self, (_, b): (A, B), _state: S, _data: D) -> B {
        b
    }
}

/// Picks the second input when the first is non-zero, the third otherwise.
#[derive(Debug, Clone, Copy, Default, PrimitiveTransform)]
pub struct Select;

impl Transform<CalcResult<f64>, CalcResult<f64>, CalcResult<f64>> for Select {
    type Output = CalcResult<f64>;

    fn invoke(
        &self,
        condition: CalcResult<f64>,
        then_value: CalcResult<f64>,
        else_value: CalcResult<f64>,
    ) -> CalcResult<f64> {
        if condition? != 0.0 { then_value } else { else_value }
    }
}

fn lookup(name: &str, env: &Env) -> CalcResult<f64> {
    env.get(name)
        .copied()
        .ok_or_else(|| CalcError::UnboundVariable(name.to_string()))
}

fn negate(value: CalcResult<f64>) -> CalcResult<f64> {
    value.map(|v| -v)
}

fn apply_binary(op: BinaryOp, lhs: CalcResult<f64>, rhs: CalcResult<f64>) -> CalcResult<f64> {
    let (lhs, rhs) = (lhs?, rhs?);
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::Div if rhs == 0.0 => Err(CalcError::DivisionByZero),
        BinaryOp::Div => Ok(lhs / rhs),
    }
}

fn sqrt(value: CalcResult<f64>) -> CalcResult<f64> {
    match value? {
        v if v < 0.0 => Err(CalcError::Domain {
            function: "sqrt",
            value: v,
        }),
        v => Ok(v.sqrt()),
    }
}

fn min(a: CalcResult<f64>, b: CalcResult<f64>) -> CalcResult<f64> {
    Ok(a?.min(b?))
}

fn max(a: CalcResult<f64>, b: CalcResult<f64>) -> CalcResult<f64> {
    Ok(a?.max(b?))
}

fn builtin(name: &str, args: &[Ast], stats: &Stats, env: &Env) -> CalcResult<f64> {
    stats.record_builtin();
    match (name, args) {
        ("abs", [x]) => {
            call(func(|v: CalcResult<f64>| v.map(f64::abs)), (Eval,)).invoke(x, stats, env)
        }
        ("sqrt", [x]) => call(func(sqrt), (Eval,)).invoke(x, stats, env),
        ("min", [a, b]) => call(func(min), (call(Eval, (First,)), call(Eval, (Second,))))
            .invoke((a, b), stats, env),
        ("max", [a, b]) => call(func(max), (call(Eval, (First,)), call(Eval, (Second,))))
            .invoke((a, b), stats, env),
        _ => Err(CalcError::UnknownFunction {
            name: name.to_string(),
            arity: args.len(),
        }),
    }
}

/// Evaluate `ast` against the bindings in `env`.
pub fn evaluate_tree(ast: &Ast, env: &Env) -> CalcResult<Evaluation> {
    let stats = Stats::new();
    let value = Eval.invoke(ast, &stats, env)?;
    debug!(
        "evaluated {ast} = {value} ({} node(s), {} builtin call(s))",
        stats.visited(),
        stats.builtin_calls()
    );
    Ok(Evaluation {
        value,
        visited: stats.visited(),
        builtin_calls: stats.builtin_calls(),
    })
}
