//! The transform contract and the classifier that drives call dispatch.
//!
//! Role
//! - [`Transform`] is the single contract every rule implements: a function of the current
//!   expression, a threaded state, and an auxiliary data value.
//! - [`Callable`] marks a type as usable as the target of a [`Call`](crate::call::Call) and names,
//!   at the type level, which of the two invocation protocols applies to it.
//!
//! Classification is explicit. A type is a transform *target* because it says so through its
//! [`Callable::Protocol`], not because the compiler happens to find an `invoke` method on it.
//! This keeps the protocol choice a pure trait-resolution question: there is no runtime flag.
//!
//! Example
//! ```
//! use hyproto::prelude::*;
//!
//! assert!(is_transform::<Expr>());
//! assert!(!is_transform::<fn(i32) -> i32>());
//! assert_eq!(protocol_of::<Func<fn() -> u8>>(), ProtocolKind::Function);
//! ```
use either::Either;
use strum::{Display, EnumIs};

use crate::call::{Call, arity::Arity};

/// A rule over `(expression, state, data)`.
///
/// The output type is an associated type, so the result of any composition of transforms is
/// known to the compiler before a single value flows through it.
///
/// Inputs are taken by value. Composite transforms that feed the same inputs to several
/// sub-transforms require them to be `Copy`; pass shared references (`&Tree`, `&Env`) when the
/// underlying values are large or not copyable.
pub trait Transform<E, S, D> {
    /// Result of applying this transform to `(E, S, D)`.
    type Output;

    /// Apply the transform.
    fn invoke(&self, expr: E, state: S, data: D) -> Self::Output;
}

impl<T: Transform<E, S, D> + ?Sized, E, S, D> Transform<E, S, D> for &T {
    type Output = T::Output;

    #[inline]
    fn invoke(&self, expr: E, state: S, data: D) -> Self::Output {
        (**self).invoke(expr, state, data)
    }
}

/// A rule picked at runtime between two alternatives producing the same output type.
impl<L, R, E, S, D> Transform<E, S, D> for Either<L, R>
where
    L: Transform<E, S, D>,
    R: Transform<E, S, D, Output = L::Output>,
{
    type Output = L::Output;

    #[inline]
    fn invoke(&self, expr: E, state: S, data: D) -> Self::Output {
        match self {
            Either::Left(l) => l.invoke(expr, state, data),
            Either::Right(r) => r.invoke(expr, state, data),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ViaTransform {}
    impl Sealed for super::ViaFunction {}
}

/// Type-level protocol marker. Only [`ViaTransform`] and [`ViaFunction`] implement it.
pub trait Protocol: sealed::Sealed {
    /// `true` for [`ViaTransform`].
    const IS_TRANSFORM: bool;
    /// Runtime mirror of the marker.
    const KIND: ProtocolKind;
}

/// The target is itself a transform: it is re-invoked with resolved arguments standing in for
/// the expression, state and data slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViaTransform;

/// The target is an ordinary function value: it is called with the resolved arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViaFunction;

impl Protocol for ViaTransform {
    const IS_TRANSFORM: bool = true;
    const KIND: ProtocolKind = ProtocolKind::Transform;
}

impl Protocol for ViaFunction {
    const IS_TRANSFORM: bool = false;
    const KIND: ProtocolKind = ProtocolKind::Function;
}

/// Value-level view of a [`Protocol`] marker, used for logging and introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIs)]
pub enum ProtocolKind {
    #[strum(serialize = "transform")]
    Transform,
    #[strum(serialize = "function")]
    Function,
}

/// Types usable as the target of a [`Call`].
///
/// Implement it with `Protocol = ViaTransform` next to your [`Transform`] impls, or with
/// `Protocol = ViaFunction` next to your [`Apply`](crate::func::Apply) impls. With the `derive`
/// feature the `PrimitiveTransform` and `FunctionObject` derives write the impl for you.
///
/// Besides the classification, the trait carries builder sugar available on every target.
pub trait Callable {
    /// Protocol used when this type is the target of a call.
    type Protocol: Protocol;

    /// Protocol of this target as a value.
    #[inline]
    fn protocol(&self) -> ProtocolKind {
        <Self::Protocol as Protocol>::KIND
    }

    /// Build a call of `self` over the given tuple of argument descriptors.
    #[inline]
    fn with_args<Args: Arity>(self, args: Args) -> Call<Self, Args>
    where
        Self: Sized,
    {
        Call::new(self, args)
    }
}

impl<T: Callable + ?Sized> Callable for &T {
    type Protocol = T::Protocol;
}

impl<L, R> Callable for Either<L, R> {
    type Protocol = ViaTransform;
}

/// Whether `T` is invoked through the transform protocol when used as a call target.
///
/// Resolved entirely at compile time; the answer for a given `T` is the same at every call site.
#[inline]
pub const fn is_transform<T: Callable + ?Sized>() -> bool {
    <T::Protocol as Protocol>::IS_TRANSFORM
}

/// [`ProtocolKind`] of `T` as a call target.
#[inline]
pub const fn protocol_of<T: Callable + ?Sized>() -> ProtocolKind {
    <T::Protocol as Protocol>::KIND
}
