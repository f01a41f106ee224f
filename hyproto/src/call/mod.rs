//! The function-call transform.
//!
//! [`Call`] pairs a target with a tuple of argument descriptors. Invoking it resolves every
//! descriptor against the current `(expr, state, data)` and hands the results to the target
//! using one of two protocols, picked by the target's [`Callable::Protocol`]:
//!
//! - [`ViaFunction`]: the target is an ordinary function value and is called with the resolved
//!   values through [`Apply`]. Any arity up to [`MAX_ARITY`](crate::MAX_ARITY).
//! - [`ViaTransform`](crate::transform::ViaTransform): the target is a transform and is
//!   re-invoked with the resolved values standing in for its inputs. With no argument the
//!   original inputs are forwarded untouched; with one, two or three arguments they replace the
//!   expression, then the state, then the data slot (see [`fixed`]).
//!
//! The choice is made by trait resolution on [`Dispatch`]; the compiled code of a call is the
//! straight-line evaluation of its arguments followed by the target call.
//!
//! Example
//! ```
//! use hyproto::prelude::*;
//!
//! // Protocol A: an ordinary function over the resolved arguments.
//! let add_one = call(func(|a: i32, b: i32| a + b), (Expr, constant(1)));
//! assert_eq!(add_one.invoke(5, (), ()), 6);
//!
//! // Protocol B: the target is a transform, its expression slot receives the argument.
//! let twice = transform_fn(|e: i32, _s: (), _d: ()| e * 2);
//! assert_eq!(call(twice, (add_one,)).invoke(5, (), ()), 12);
//! ```
pub mod arity;
pub mod fixed;

use std::any::type_name;

use log::trace;

use crate::call::arity::Arity;
use crate::eval::ArgList;
use crate::func::Apply;
use crate::transform::{Callable, Protocol, ProtocolKind, Transform, ViaFunction, ViaTransform};

/// Log target of the records emitted while invoking calls.
pub const LOG_TARGET: &str = "hyproto::call";

/// Invocation of a target under protocol `P` with descriptor tuple `Args`.
///
/// `P` is always the target's own [`Callable::Protocol`] when reached through [`Call`]; keeping
/// it as a trait parameter is what lets the two protocol families coexist without overlapping.
pub trait Dispatch<P: Protocol, Args, E, S, D> {
    /// Result of the target for the resolved arguments.
    type Output;

    /// Resolve `args` against the inputs and invoke the target with the results.
    fn dispatch(&self, args: &Args, expr: E, state: S, data: D) -> Self::Output;
}

/// Protocol A, for every arity at once: resolve the tuple, then apply the function.
impl<F, Args, E, S, D> Dispatch<ViaFunction, Args, E, S, D> for F
where
    Args: ArgList<E, S, D>,
    F: Apply<Args::Values>,
{
    type Output = <F as Apply<Args::Values>>::Output;

    #[inline]
    fn dispatch(&self, args: &Args, expr: E, state: S, data: D) -> Self::Output {
        self.apply(args.evaluate_all(expr, state, data))
    }
}

/// A function-call transform: target `F` over the argument descriptors `Args`.
///
/// `Args` is a tuple: `()`, `(A0,)`, `(A0, A1)`, ... up to [`MAX_ARITY`](crate::MAX_ARITY)
/// elements. Longer tuples do not implement [`Arity`] and are rejected when the call is built.
///
/// Every descriptor must be a [`Transform`] over the call's inputs:
/// ```compile_fail
/// use hyproto::prelude::*;
///
/// struct NotATransform;
/// let _ = call(func(|x: i32| x), (NotATransform,)).invoke(1, (), ());
/// ```
///
/// The target must declare its protocol through [`Callable`]; a `Transform` impl alone is not
/// enough:
/// ```compile_fail
/// use hyproto::prelude::*;
///
/// struct Unclassified;
///
/// impl<S, D> Transform<i32, S, D> for Unclassified {
///     type Output = i32;
///     fn invoke(&self, expr: i32, _state: S, _data: D) -> i32 {
///         expr
///     }
/// }
///
/// let _ = call(Unclassified, (Expr,)).invoke(1, (), ());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Call<F, Args = ()> {
    pub target: F,
    pub args: Args,
}

impl<F, Args: Arity> Call<F, Args> {
    #[inline]
    pub fn new(target: F, args: Args) -> Self {
        Call { target, args }
    }

    /// Number of argument descriptors.
    #[inline]
    pub const fn arity(&self) -> usize {
        Args::ARITY
    }

    /// Protocol the target is invoked with.
    #[inline]
    pub fn protocol(&self) -> ProtocolKind
    where
        F: Callable,
    {
        <F::Protocol as Protocol>::KIND
    }
}

/// Build a [`Call`] of `target` over `args`.
#[inline]
pub fn call<F, Args: Arity>(target: F, args: Args) -> Call<F, Args> {
    Call::new(target, args)
}

impl<F, Args, E, S, D> Transform<E, S, D> for Call<F, Args>
where
    F: Callable + Dispatch<<F as Callable>::Protocol, Args, E, S, D>,
    Args: Arity,
{
    type Output = <F as Dispatch<<F as Callable>::Protocol, Args, E, S, D>>::Output;

    #[inline]
    fn invoke(&self, expr: E, state: S, data: D) -> Self::Output {
        trace!(
            target: LOG_TARGET,
            "call {} with {} argument(s) via {} protocol",
            type_name::<F>(),
            Args::ARITY,
            <F::Protocol as Protocol>::KIND
        );
        self.target.dispatch(&self.args, expr, state, data)
    }
}

impl<F, Args> Callable for Call<F, Args> {
    type Protocol = ViaTransform;
}
