//! Hyproto: statically dispatched transform composition over expression trees.
//!
//! A *transform* is a rule over three inputs: the current expression, a threaded state, and an
//! auxiliary data value. This crate provides the machinery to build rules out of other rules,
//! centred on the function-call transform [`Call`](call::Call): "invoke `F` on the results of
//! applying these argument transforms to the current inputs".
//!
//! Dispatch
//!  - Every call target declares a protocol through [`Callable`](transform::Callable). Function
//!    values are called with the resolved arguments; transforms are re-invoked with the
//!    resolved arguments in place of their inputs.
//!  - The choice, the argument evaluation, and the result type are all resolved by the trait
//!    system. A composed rule compiles down to the nested calls it describes.
//!
//! What this crate is not
//!  - It does not define an expression tree; expressions, states and data are opaque type
//!    parameters and flow through untouched.
//!  - It does not walk trees or match grammars; recursion happens when a rule's arguments or
//!    target recurse.
//!
//! Example
//! ```
//! use hyproto::prelude::*;
//!
//! #[derive(Clone, Copy)]
//! struct Doubler;
//!
//! impl<S, D> Transform<i32, S, D> for Doubler {
//!     type Output = i32;
//!     fn invoke(&self, expr: i32, _state: S, _data: D) -> i32 {
//!         expr * 2
//!     }
//! }
//!
//! impl Callable for Doubler {
//!     type Protocol = ViaTransform;
//! }
//!
//! // An ordinary function: add the expression and a constant.
//! let plus_one = call(func(|a: i32, b: i32| a + b), (Expr, constant(1)));
//! assert_eq!(plus_one.invoke(5, "state", ()), 6);
//!
//! // A transform target: its expression slot receives the first argument.
//! let doubled = Doubler.with_args((Expr,));
//! assert_eq!(doubled.invoke(5, "state", ()), 10);
//!
//! // Calls nest.
//! let both = Doubler.with_args((plus_one,));
//! assert_eq!(both.invoke(5, "state", ()), 12);
//! ```

/// Function-call transform, per-arity generation and protocol dispatch.
pub mod call;
/// Argument descriptor evaluation.
pub mod eval;
/// Function values usable as call targets.
pub mod func;
/// Addressability of resolved arguments.
pub mod lvalue;
/// Built-in primitive transforms.
pub mod primitives;
/// The transform contract and the call-target classifier.
pub mod transform;

pub use call::arity::MAX_ARITY;

#[cfg(feature = "derive")]
pub use hyproto_derive::{FunctionObject, PrimitiveTransform};

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Transform` and `Callable` traits, protocol markers and classifier
    //! - `Call` and its builder
    //! - Function targets and primitive transforms
    pub use crate::call::{Call, call};
    pub use crate::eval::evaluate;
    pub use crate::func::{Apply, ByRef, Func, by_ref, func};
    pub use crate::primitives::{
        Constant, Data, Expr, FnTransform, State, constant, transform_fn,
    };
    pub use crate::transform::{
        Callable, ProtocolKind, Transform, ViaFunction, ViaTransform, is_transform, protocol_of,
    };
}
