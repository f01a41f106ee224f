//! Ordinary function values as call targets.
//!
//! A target classified with [`ViaFunction`] receives the resolved arguments of a call through
//! [`Apply`]. Three kinds of targets ship with the crate:
//! - [`Func`]: any closure or function; resolved values are moved into the parameters.
//! - [`ByRef`]: a closure taking every parameter as `&mut`; resolved values are held in
//!   [`Slot`](crate::lvalue::Slot)s and lent for the duration of the call.
//! - bare `fn` pointers (`fn(A, B) -> R`), which behave like [`Func`].
//!
//! User types can be function objects too: derive or implement [`Callable`] with
//! `Protocol = ViaFunction` and implement [`Apply`] for each argument tuple the object accepts.
//! A single type may implement [`Apply`] for several tuples, which makes it polymorphic.
//!
//! The per-arity impls live in [`call::arity`](crate::call::arity).
use std::marker::PhantomData;

use crate::transform::{Callable, ViaFunction};

/// Invocation of a function value with a tuple of resolved arguments.
pub trait Apply<Args> {
    /// Return type for this argument tuple.
    type Output;

    /// Call the function.
    fn apply(&self, args: Args) -> Self::Output;
}

impl<T: Apply<Args> + ?Sized, Args> Apply<Args> for &T {
    type Output = T::Output;

    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        (**self).apply(args)
    }
}

/// Function value whose parameters take the resolved arguments by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Func<F>(pub F);

impl<F> Callable for Func<F> {
    type Protocol = ViaFunction;
}

/// Wrap a closure or function as a by-value call target.
#[inline]
pub fn func<F>(f: F) -> Func<F> {
    Func(f)
}

/// Function value whose parameters are all `&mut` to the resolved arguments.
///
/// `R` is the return type; it is inferred from the closure at the first use.
pub struct ByRef<F, R> {
    func: F,
    _output: PhantomData<fn() -> R>,
}

impl<F, R> ByRef<F, R> {
    #[inline]
    pub fn new(func: F) -> Self {
        ByRef {
            func,
            _output: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn inner(&self) -> &F {
        &self.func
    }
}

impl<F: Clone, R> Clone for ByRef<F, R> {
    fn clone(&self) -> Self {
        ByRef::new(self.func.clone())
    }
}

impl<F: Copy, R> Copy for ByRef<F, R> {}

impl<F, R> std::fmt::Debug for ByRef<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByRef")
            .field("func", &std::any::type_name::<F>())
            .field("output", &std::any::type_name::<R>())
            .finish()
    }
}

impl<F, R> Callable for ByRef<F, R> {
    type Protocol = ViaFunction;
}

/// Wrap a closure taking `&mut` parameters as a call target.
#[inline]
pub fn by_ref<F, R>(f: F) -> ByRef<F, R> {
    ByRef::new(f)
}
