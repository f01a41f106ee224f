//! Per-arity impls, generated from one pattern.
//!
//! Everything that depends on the number of arguments of a call is written once, as a macro
//! over a list of `(descriptor value parameter)` identifier triples, and stamped out for every
//! prefix of that list:
//! - [`Arity`] and [`ArgList`] for descriptor tuples,
//! - [`Apply`] for [`Func`], [`ByRef`] and `fn` pointers,
//! - [`Callable`] for `fn` pointers.
//!
//! The list stops at [`MAX_ARITY`]. A call with more arguments finds no impl and fails to
//! compile. Enable the `arity-16` feature to raise the bound from 10 to 16.
//!
//! Seventeen descriptors exceed the bound in every configuration:
//! ```compile_fail
//! use hyproto::prelude::*;
//!
//! let first = |a: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8,
//!              _: u8, _: u8, _: u8, _: u8, _: u8, _: u8| a;
//! let rule = call(
//!     func(first),
//!     (
//!         Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr,
//!         Expr, Expr, Expr,
//!     ),
//! );
//! let _ = rule.invoke(1u8, (), ());
//! ```
use crate::eval::{ArgList, evaluate};
use crate::func::{Apply, ByRef, Func};
use crate::lvalue::Slot;
use crate::transform::{Callable, Transform, ViaFunction};

/// Largest number of argument descriptors a call accepts.
pub const MAX_ARITY: usize = if cfg!(feature = "arity-16") { 16 } else { 10 };

/// Tuples usable as the argument list of a call.
pub trait Arity {
    /// Number of elements.
    const ARITY: usize;
}

impl Arity for () {
    const ARITY: usize = 0;
}

// Invoke `$emit!` on every non-empty prefix of the remaining triples.
macro_rules! for_each_prefix {
    ($emit:ident; [$($done:tt)*];) => {};
    ($emit:ident; [$($done:tt)*]; $next:tt $($rest:tt)*) => {
        $emit!($($done)* $next);
        for_each_prefix!($emit; [$($done)* $next]; $($rest)*);
    };
}

macro_rules! impl_function_targets {
    ($(($A:ident $O:ident $a:ident))*) => {
        impl<F, R, $($O),*> Apply<($($O,)*)> for Func<F>
        where
            F: Fn($($O),*) -> R,
        {
            type Output = R;

            #[inline]
            fn apply(&self, ($($a,)*): ($($O,)*)) -> R {
                (self.0)($($a),*)
            }
        }

        impl<F, R, $($O),*> Apply<($($O,)*)> for ByRef<F, R>
        where
            F: Fn($(&mut $O),*) -> R,
        {
            type Output = R;

            #[inline]
            fn apply(&self, ($($a,)*): ($($O,)*)) -> R {
                $(let mut $a = Slot::new($a);)*
                (self.inner())($($a.as_addressable()),*)
            }
        }

        impl<R, $($O),*> Callable for fn($($O),*) -> R {
            type Protocol = ViaFunction;
        }

        impl<R, $($O),*> Apply<($($O,)*)> for fn($($O),*) -> R {
            type Output = R;

            #[inline]
            fn apply(&self, ($($a,)*): ($($O,)*)) -> R {
                (self)($($a),*)
            }
        }
    };
}

macro_rules! impl_tuple {
    ($(($A:ident $O:ident $a:ident))+) => {
        impl<$($A),+> Arity for ($($A,)+) {
            const ARITY: usize = [$(stringify!($A)),+].len();
        }

        impl<E, S, D, $($A),+> ArgList<E, S, D> for ($($A,)+)
        where
            E: Copy,
            S: Copy,
            D: Copy,
            $($A: Transform<E, S, D>,)+
        {
            type Values = ($(<$A as Transform<E, S, D>>::Output,)+);

            #[inline]
            fn evaluate_all(&self, expr: E, state: S, data: D) -> Self::Values {
                let ($($a,)+) = self;
                ($(evaluate($a, expr, state, data),)+)
            }
        }

        impl_function_targets!($(($A $O $a))+);
    };
}

impl_function_targets!();

for_each_prefix!(impl_tuple; [];
    (A0 O0 a0) (A1 O1 a1) (A2 O2 a2) (A3 O3 a3) (A4 O4 a4)
    (A5 O5 a5) (A6 O6 a6) (A7 O7 a7) (A8 O8 a8) (A9 O9 a9)
);

#[cfg(feature = "arity-16")]
for_each_prefix!(impl_tuple;
    [
        (A0 O0 a0) (A1 O1 a1) (A2 O2 a2) (A3 O3 a3) (A4 O4 a4)
        (A5 O5 a5) (A6 O6 a6) (A7 O7 a7) (A8 O8 a8) (A9 O9 a9)
    ];
    (A10 O10 a10) (A11 O11 a11) (A12 O12 a12) (A13 O13 a13) (A14 O14 a14) (A15 O15 a15)
);
