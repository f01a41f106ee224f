use hyproto::prelude::*;
use hyproto_derive::{FunctionObject, PrimitiveTransform};

/// Scales the expression by the factor it carries.
#[derive(Clone, Copy, PrimitiveTransform)]
struct Scale(i64);

impl<S, D> Transform<i64, S, D> for Scale {
    type Output = i64;

    fn invoke(&self, expr: i64, _state: S, _data: D) -> i64 {
        expr * self.0
    }
}

/// Polymorphic function object: one `Apply` per accepted argument tuple.
#[derive(Clone, Copy, FunctionObject)]
struct Describe;

impl Apply<(i64,)> for Describe {
    type Output = String;

    fn apply(&self, (x,): (i64,)) -> String {
        format!("int {x}")
    }
}

impl<'a> Apply<(&'a str, i64)> for Describe {
    type Output = String;

    fn apply(&self, (name, x): (&'a str, i64)) -> String {
        format!("{name} = {x}")
    }
}

/// Generic wrapper, to exercise generics forwarding in the derive.
#[derive(Clone, Copy, PrimitiveTransform)]
struct Tagged<T: Copy> {
    tag: T,
}

impl<T: Copy, E, S, D> Transform<E, S, D> for Tagged<T> {
    type Output = (T, E);

    fn invoke(&self, expr: E, _state: S, _data: D) -> (T, E) {
        (self.tag, expr)
    }
}

#[test]
fn derived_classification() {
    assert!(is_transform::<Scale>());
    assert!(is_transform::<Tagged<u8>>());
    assert!(!is_transform::<Describe>());
}

#[test]
fn derived_transform_uses_transform_protocol() {
    let rule = call(Scale(3), (call(Scale(2), (Expr,)),));
    assert_eq!(rule.invoke(7, (), ()), 42);
}

#[test]
fn derived_function_object_is_polymorphic() {
    let unary = call(Describe, (Expr,));
    assert_eq!(unary.invoke(5i64, (), ()), "int 5");

    let binary = call(Describe, (State, Expr));
    assert_eq!(binary.invoke(5i64, "x", ()), "x = 5");
}

#[test]
fn derived_generic_transform() {
    let rule = call(Tagged { tag: 'k' }, (constant(1.5f64),));
    assert_eq!(rule.invoke((), (), ()), ('k', 1.5));
}
