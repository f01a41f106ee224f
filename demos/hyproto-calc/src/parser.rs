//! Character-level parser for calculator expressions.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := unary (('*' | '/') unary)*
//! unary   := '-'* atom
//! atom    := number | 'if' sum 'then' sum 'else' sum | name '(' args ')' | name | '(' sum ')'
//! ```
use chumsky::prelude::*;
use log::debug;

use crate::ast::{Ast, BinaryOp};
use crate::error::{CalcError, CalcResult, Diagnostic};

type Extra<'src> = extra::Err<Rich<'src, char>>;

const KEYWORDS: [&str; 3] = ["if", "then", "else"];

fn word<'src>() -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_alphabetic() || *c == '_')
        .then(
            any()
                .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
                .repeated(),
        )
        .to_slice()
}

fn keyword<'src>(kw: &'static str) -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    word()
        .filter(move |s: &&str| *s == kw)
        .ignored()
        .padded()
        .labelled(kw)
}

fn identifier<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    word()
        .try_map(|s: &str, span| {
            if KEYWORDS.contains(&s) {
                Err(Rich::custom(span, format!("'{s}' is a keyword, not a name")))
            } else {
                Ok(s.to_string())
            }
        })
        .labelled("identifier")
}

fn number<'src>() -> impl Parser<'src, &'src str, f64, Extra<'src>> + Clone {
    text::int(10)
        .then(just('.').then(text::digits(10)).or_not())
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse::<f64>()
                .map_err(|e| Rich::custom(span, format!("invalid number '{s}': {e}")))
        })
        .labelled("number")
}

/// Parser for a complete expression; trailing input is an error.
pub fn parser<'src>() -> impl Parser<'src, &'src str, Ast, Extra<'src>> {
    recursive(|expr| {
        let conditional = keyword("if")
            .ignore_then(expr.clone())
            .then_ignore(keyword("then"))
            .then(expr.clone())
            .then_ignore(keyword("else"))
            .then(expr.clone())
            .map(|((condition, then_branch), else_branch)| {
                Ast::conditional(condition, then_branch, else_branch)
            })
            .labelled("conditional");

        let args = expr
            .clone()
            .separated_by(just(','))
            .collect::<Vec<_>>()
            .delimited_by(just('(').padded(), just(')'))
            .labelled("arguments");

        let name = identifier()
            .then(args.or_not())
            .map(|(name, args)| match args {
                Some(args) => Ast::Call { name, args },
                None => Ast::Variable(name),
            });

        let atom = choice((
            number().map(Ast::Number),
            conditional,
            name,
            expr.clone().delimited_by(just('('), just(')')),
        ))
        .padded()
        .labelled("atom");

        let unary = just('-')
            .padded()
            .repeated()
            .foldr(atom, |_, rhs| Ast::Neg(Box::new(rhs)));

        let product = unary.clone().foldl(
            choice((just('*').to(BinaryOp::Mul), just('/').to(BinaryOp::Div)))
                .padded()
                .then(unary)
                .repeated(),
            |lhs, (op, rhs)| Ast::binary(op, lhs, rhs),
        );

        product.clone().foldl(
            choice((just('+').to(BinaryOp::Add), just('-').to(BinaryOp::Sub)))
                .padded()
                .then(product)
                .repeated(),
            |lhs, (op, rhs)| Ast::binary(op, lhs, rhs),
        )
    })
    .then_ignore(end())
}

/// Parse `source` into an expression tree.
///
/// ```
/// use hyproto_calc::parser::parse;
/// let ast = parse("1 + x * 2").unwrap();
/// assert_eq!(ast.to_string(), "(1 + (x * 2))");
/// ```
pub fn parse(source: &str) -> CalcResult<Ast> {
    let ast = parser().parse(source).into_result().map_err(|errors| {
        CalcError::Parse {
            diagnostics: errors
                .into_iter()
                .map(|e| Diagnostic {
                    message: e.to_string(),
                    span: e.span().into_range(),
                })
                .collect(),
        }
    })?;
    debug!("parsed {} node(s): {ast}", ast.size());
    Ok(ast)
}
