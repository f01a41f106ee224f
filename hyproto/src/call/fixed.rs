//! Transform-protocol dispatch for zero to three arguments.
//!
//! When the target of a call is itself a transform, the resolved arguments take the place of
//! its inputs, left to right:
//!
//! | arguments | target invoked as |
//! |-----------|-------------------------------|
//! | none      | `f(expr, state, data)`        |
//! | `a0`      | `f(a0, state, data)`          |
//! | `a0, a1`  | `f(a0, a1, data)`             |
//! | `a0..a2`  | `f(a0, a1, a2)`               |
//!
//! A transform has exactly three inputs, so there is no form beyond three arguments; only
//! function targets accept longer argument lists.
//!
//! A fourth argument to a transform target finds no impl:
//! ```compile_fail
//! use hyproto::prelude::*;
//!
//! let sum = transform_fn(|e: i32, s: i32, d: i32| e + s + d);
//! let _ = call(sum, (Expr, Expr, Expr, Expr)).invoke(1, 2, 3);
//! ```
//!
//! The same argument list is fine for a function target:
//! ```
//! use hyproto::prelude::*;
//!
//! let sum = func(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
//! assert_eq!(call(sum, (Expr, Expr, Expr, Expr)).invoke(1, 2, 3), 4);
//! ```
use crate::call::Dispatch;
use crate::eval::evaluate;
use crate::transform::{Transform, ViaTransform};

impl<F, E, S, D> Dispatch<ViaTransform, (), E, S, D> for F
where
    F: Transform<E, S, D>,
{
    type Output = F::Output;

    #[inline]
    fn dispatch(&self, _args: &(), expr: E, state: S, data: D) -> Self::Output {
        self.invoke(expr, state, data)
    }
}

impl<F, A0, E, S, D> Dispatch<ViaTransform, (A0,), E, S, D> for F
where
    S: Copy,
    D: Copy,
    A0: Transform<E, S, D>,
    F: Transform<A0::Output, S, D>,
{
    type Output = <F as Transform<A0::Output, S, D>>::Output;

    #[inline]
    fn dispatch(&self, (a0,): &(A0,), expr: E, state: S, data: D) -> Self::Output {
        let a0 = evaluate(a0, expr, state, data);
        self.invoke(a0, state, data)
    }
}

impl<F, A0, A1, E, S, D> Dispatch<ViaTransform, (A0, A1), E, S, D> for F
where
    E: Copy,
    S: Copy,
    D: Copy,
    A0: Transform<E, S, D>,
    A1: Transform<E, S, D>,
    F: Transform<A0::Output, A1::Output, D>,
{
    type Output = <F as Transform<A0::Output, A1::Output, D>>::Output;

    #[inline]
    fn dispatch(&self, (a0, a1): &(A0, A1), expr: E, state: S, data: D) -> Self::Output {
        let a0 = evaluate(a0, expr, state, data);
        let a1 = evaluate(a1, expr, state, data);
        self.invoke(a0, a1, data)
    }
}

impl<F, A0, A1, A2, E, S, D> Dispatch<ViaTransform, (A0, A1, A2), E, S, D> for F
where
    E: Copy,
    S: Copy,
    D: Copy,
    A0: Transform<E, S, D>,
    A1: Transform<E, S, D>,
    A2: Transform<E, S, D>,
    F: Transform<A0::Output, A1::Output, A2::Output>,
{
    type Output = <F as Transform<A0::Output, A1::Output, A2::Output>>::Output;

    #[inline]
    fn dispatch(&self, (a0, a1, a2): &(A0, A1, A2), expr: E, state: S, data: D) -> Self::Output {
        let a0 = evaluate(a0, expr, state, data);
        let a1 = evaluate(a1, expr, state, data);
        let a2 = evaluate(a2, expr, state, data);
        self.invoke(a0, a1, a2)
    }
}
