//! Addressability of resolved arguments.
//!
//! A resolved argument is a transient value: it lives in the stack frame of the call that
//! produced it. Targets that bind their parameters by `&mut` (see [`ByRef`](crate::func::ByRef))
//! need a place to point at. [`Slot`] is that place: it owns the transient for exactly the
//! duration of one call and lends it out through [`as_addressable`].
//!
//! Nothing here copies. A value that is already a reference (for instance the expression
//! forwarded by [`Expr`](crate::primitives::Expr) when the caller passed `&Tree`) is slotted as
//! the reference itself, so the target reaches the caller's original place. The borrow checker
//! keeps the lent `&mut` from escaping the call.

use std::ops::{Deref, DerefMut};

/// Lend `place` as a mutable location. Identity on the place; never copies.
#[inline]
pub fn as_addressable<T: ?Sized>(place: &mut T) -> &mut T {
    place
}

/// Owner of one transient argument for the duration of a call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Slot<T>(T);

impl<T> Slot<T> {
    /// Move a transient value into a slot.
    #[inline]
    pub fn new(value: T) -> Self {
        Slot(value)
    }

    /// Borrow the slotted value as a mutable place.
    #[inline]
    pub fn as_addressable(&mut self) -> &mut T {
        as_addressable(&mut self.0)
    }

    /// Take the value back out, e.g. to observe what the target did with it.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Slot<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressable_is_same_place() {
        let mut value = vec![1u8, 2, 3];
        let before: *const Vec<u8> = &value;
        let lent: *const Vec<u8> = as_addressable(&mut value);
        assert!(std::ptr::eq(before, lent));
    }

    #[test]
    fn slot_lends_and_returns() {
        let mut slot = Slot::new(String::from("a"));
        slot.as_addressable().push('b');
        assert_eq!(slot.len(), 2);
        assert_eq!(slot.into_inner(), "ab");
    }

    #[test]
    fn slotted_reference_keeps_referent() {
        let original = vec![7u32; 4];
        let mut slot = Slot::new(&original);
        let lent: &mut &Vec<u32> = slot.as_addressable();
        assert!(std::ptr::eq(*lent, &original));
    }
}
