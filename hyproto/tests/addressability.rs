use std::cell::Cell;

use hyproto::lvalue::{Slot, as_addressable};
use hyproto::prelude::*;

/// Not `Clone`: a copy anywhere in the pipeline would fail to compile.
#[derive(Debug, PartialEq)]
struct Unique(Vec<u32>);

#[test]
fn by_ref_target_mutates_transient_results() {
    let build = transform_fn(|e: u32, _s: (), _d: ()| Unique(vec![e]));
    let rule = call(
        by_ref(|a: &mut Unique, b: &mut Unique| {
            a.0.append(&mut b.0);
            a.0.push(0);
            (a.0.len(), b.0.len())
        }),
        (build, build),
    );
    assert_eq!(rule.invoke(3, (), ()), (3, 0));
}

#[test]
fn by_ref_target_sees_distinct_slots() {
    let rule = call(
        by_ref(|a: &mut i32, b: &mut i32| {
            *a += 1;
            *b *= 10;
            *a + *b
        }),
        (Expr, Expr),
    );
    // Both slots start from the same expression but are separate places.
    assert_eq!(rule.invoke(2, (), ()), 3 + 20);
}

#[test]
fn non_clone_results_move_without_copy() {
    let build = transform_fn(|e: u32, _s: (), _d: ()| Unique(vec![e, e]));
    let rule = call(func(|u: Unique| u.0.into_iter().sum::<u32>()), (build,));
    assert_eq!(rule.invoke(4, (), ()), 8);
}

#[test]
fn addressable_inputs_are_not_duplicated() {
    let tree = Unique(vec![1, 2, 3]);
    let seen = Cell::new(std::ptr::null::<Unique>());

    let rule = call(
        by_ref(|t: &mut &Unique| {
            seen.set(*t as *const Unique);
            t.0.len()
        }),
        (Expr,),
    );
    assert_eq!(rule.invoke(&tree, (), ()), 3);
    assert!(std::ptr::eq(seen.get(), &tree));

    let rule = call(func(|t: &Unique| t as *const Unique), (Expr,));
    assert!(std::ptr::eq(rule.invoke(&tree, (), ()), &tree));
}

#[test]
fn slot_outlives_nothing_but_the_call() {
    let mut slot = Slot::new(vec![1u8]);
    {
        let place = slot.as_addressable();
        place.push(2);
    }
    as_addressable(&mut *slot).push(3);
    assert_eq!(slot.into_inner(), vec![1, 2, 3]);
}
