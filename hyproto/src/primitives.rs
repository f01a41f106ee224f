//! Built-in primitive transforms.
//!
//! These are the leaves argument descriptors are usually made of: pass-throughs of the current
//! expression, state or data, constants, and closures adapted into transforms.
//!
//! Example
//! ```
//! use hyproto::prelude::*;
//!
//! assert_eq!(Expr.invoke(1, 2, 3), 1);
//! assert_eq!(State.invoke(1, 2, 3), 2);
//! assert_eq!(Data.invoke(1, 2, 3), 3);
//! assert_eq!(constant("k").invoke(1, 2, 3), "k");
//! assert_eq!(transform_fn(|e: i32, s: i32, d: i32| e + s + d).invoke(1, 2, 3), 6);
//! ```
use crate::transform::{Callable, Transform, ViaTransform};

/// Returns the current expression unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Expr;

impl<E, S, D> Transform<E, S, D> for Expr {
    type Output = E;

    #[inline]
    fn invoke(&self, expr: E, _state: S, _data: D) -> E {
        expr
    }
}

impl Callable for Expr {
    type Protocol = ViaTransform;
}

/// Returns the current state unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct State;

impl<E, S, D> Transform<E, S, D> for State {
    type Output = S;

    #[inline]
    fn invoke(&self, _expr: E, state: S, _data: D) -> S {
        state
    }
}

impl Callable for State {
    type Protocol = ViaTransform;
}

/// Returns the current data unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Data;

impl<E, S, D> Transform<E, S, D> for Data {
    type Output = D;

    #[inline]
    fn invoke(&self, _expr: E, _state: S, data: D) -> D {
        data
    }
}

impl Callable for Data {
    type Protocol = ViaTransform;
}

/// Ignores its inputs and yields a clone of the stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Constant<T>(pub T);

impl<T: Clone, E, S, D> Transform<E, S, D> for Constant<T> {
    type Output = T;

    #[inline]
    fn invoke(&self, _expr: E, _state: S, _data: D) -> T {
        self.0.clone()
    }
}

impl<T> Callable for Constant<T> {
    type Protocol = ViaTransform;
}

/// Shorthand for [`Constant`].
#[inline]
pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant(value)
}

/// A closure `Fn(E, S, D) -> R` used as a primitive transform.
///
/// Classified as a transform, so a call targeting it uses the transform protocol: resolved
/// arguments replace the expression, state and data slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnTransform<F>(pub F);

impl<F, R, E, S, D> Transform<E, S, D> for FnTransform<F>
where
    F: Fn(E, S, D) -> R,
{
    type Output = R;

    #[inline]
    fn invoke(&self, expr: E, state: S, data: D) -> R {
        (self.0)(expr, state, data)
    }
}

impl<F> Callable for FnTransform<F> {
    type Protocol = ViaTransform;
}

/// Shorthand for [`FnTransform`].
#[inline]
pub fn transform_fn<F>(f: F) -> FnTransform<F> {
    FnTransform(f)
}
