use hyproto_calc::ast::{Ast, BinaryOp};
use hyproto_calc::parser::parse;
use hyproto_calc::rules::{Eval, Stats, evaluate_tree};
use hyproto_calc::{CalcError, Env, calculate, parse_binding};

use hyproto::prelude::*;

fn env(bindings: &[(&str, f64)]) -> Env {
    bindings
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[test]
fn precedence_and_variables() {
    let result = calculate("1 + x * 2", &env(&[("x", 3.0)])).unwrap();
    assert_eq!(result.value, 7.0);
    assert_eq!(result.visited, 5);
}

#[test]
fn parser_builds_left_associative_trees() {
    let ast = parse("8 - 4 - 2").unwrap();
    assert_eq!(ast.to_string(), "((8 - 4) - 2)");
    assert_eq!(
        parse("-(a)").unwrap(),
        Ast::Neg(Box::new(Ast::Variable("a".to_string())))
    );
    assert_eq!(
        parse("2.5/b").unwrap(),
        Ast::binary(BinaryOp::Div, Ast::Number(2.5), Ast::Variable("b".to_string()))
    );
}

#[test]
fn unbound_variable_is_reported() {
    let err = calculate("y + 1", &Env::new()).unwrap_err();
    assert_eq!(err, CalcError::UnboundVariable("y".to_string()));
}

#[test]
fn division_by_zero_is_reported() {
    let err = calculate("1 / (x - 3)", &env(&[("x", 3.0)])).unwrap_err();
    assert_eq!(err, CalcError::DivisionByZero);
}

#[test]
fn parse_errors_carry_spans() {
    match calculate("1 + * 2", &Env::new()) {
        Err(CalcError::Parse { diagnostics }) => {
            assert!(!diagnostics.is_empty());
            assert!(diagnostics[0].span.start <= 4);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
    assert!(matches!(
        calculate("if 1 then 2", &Env::new()),
        Err(CalcError::Parse { .. })
    ));
}

#[test]
fn conditional_selects_branch() {
    let e = env(&[("flag", 0.0)]);
    assert_eq!(calculate("if flag then 10 else 20", &e).unwrap().value, 20.0);
    assert_eq!(calculate("if 1 - flag then 10 else 20", &e).unwrap().value, 10.0);
    // An error in the branch not taken is not surfaced.
    assert_eq!(calculate("if 1 then 5 else 1 / 0", &e).unwrap().value, 5.0);
    assert_eq!(
        calculate("if 0 then 5 else 1 / 0", &e).unwrap_err(),
        CalcError::DivisionByZero
    );
}

#[test]
fn builtins() {
    let e = env(&[("x", -9.0)]);
    assert_eq!(calculate("abs(x)", &e).unwrap().value, 9.0);
    assert_eq!(calculate("sqrt(abs(x))", &e).unwrap().value, 3.0);
    assert_eq!(calculate("max(x, 2) + min(x, 2)", &e).unwrap().value, -7.0);
    assert_eq!(calculate("max(1, 2)", &e).unwrap().builtin_calls, 1);
    assert_eq!(
        calculate("sqrt(x)", &e).unwrap_err(),
        CalcError::Domain {
            function: "sqrt",
            value: -9.0
        }
    );
    assert_eq!(
        calculate("max(1)", &e).unwrap_err(),
        CalcError::UnknownFunction {
            name: "max".to_string(),
            arity: 1
        }
    );
}

#[test]
fn builtin_arguments_tolerate_whitespace() {
    let e = Env::new();
    assert_eq!(calculate("max (1, 2)", &e).unwrap().value, 2.0);
    assert_eq!(calculate("min( 4 ,3 )", &e).unwrap().value, 3.0);
    assert_eq!(calculate("abs  (-5) * 2", &e).unwrap().value, 10.0);
}

#[test]
fn eval_composes_as_a_call_target() {
    // Eval is a transform, so wrapping it in a call with a single argument replaces the
    // expression slot and keeps the state and data.
    let ast = parse("x * x").unwrap();
    let stats = Stats::new();
    let bindings = env(&[("x", 4.0)]);
    let rule = call(Eval, (Expr,));
    assert_eq!(rule.invoke(&ast, &stats, &bindings), Ok(16.0));
    assert_eq!(stats.visited(), 3);
}

#[test]
fn evaluation_counts_every_node_once() {
    let ast = parse("if a then max(a, 1) else -a").unwrap();
    let result = evaluate_tree(&ast, &env(&[("a", 2.0)])).unwrap();
    assert_eq!(result.value, 2.0);
    assert_eq!(result.visited, ast.size());
}

#[test]
fn bindings_from_the_command_line() {
    assert_eq!(parse_binding("x=3").unwrap(), ("x".to_string(), 3.0));
    assert_eq!(parse_binding(" rate = -0.5 ").unwrap(), ("rate".to_string(), -0.5));
    assert!(matches!(
        parse_binding("x"),
        Err(CalcError::InvalidBinding(_))
    ));
    assert!(matches!(
        parse_binding("=1"),
        Err(CalcError::InvalidBinding(_))
    ));
    assert!(matches!(
        parse_binding("x=abc"),
        Err(CalcError::InvalidBinding(_))
    ));
}
