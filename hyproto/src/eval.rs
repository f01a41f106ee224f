//! Argument evaluation.
//!
//! An argument descriptor is nothing more than a transform applied to the same
//! `(expr, state, data)` the enclosing call received. The rule is identical for every
//! position and every nesting depth: a descriptor may be a pass-through such as
//! [`Expr`](crate::primitives::Expr), a constant, or a whole nested call.
//!
//! [`ArgList`] lifts that rule to a tuple of descriptors. Its impls for non-empty tuples are
//! generated alongside the other per-arity impls in [`call::arity`](crate::call::arity).
use crate::call::arity::Arity;
use crate::transform::Transform;

/// Resolve one argument descriptor against the current inputs.
#[inline]
pub fn evaluate<A, E, S, D>(descriptor: &A, expr: E, state: S, data: D) -> A::Output
where
    A: Transform<E, S, D> + ?Sized,
{
    descriptor.invoke(expr, state, data)
}

/// A tuple of argument descriptors resolvable against `(E, S, D)`.
///
/// Every element sees the same inputs; no element observes the result of another. Tuples of
/// one or more elements need `E`, `S` and `D` to be `Copy` since each element gets its own copy.
pub trait ArgList<E, S, D>: Arity {
    /// Tuple of the resolved values, in descriptor order.
    type Values;

    /// Resolve every descriptor.
    fn evaluate_all(&self, expr: E, state: S, data: D) -> Self::Values;
}

impl<E, S, D> ArgList<E, S, D> for () {
    type Values = ();

    #[inline]
    fn evaluate_all(&self, _expr: E, _state: S, _data: D) -> Self::Values {}
}
