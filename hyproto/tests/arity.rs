use hyproto::MAX_ARITY;
use hyproto::call::arity::Arity;
use hyproto::eval::ArgList;
use hyproto::prelude::*;

fn offset(k: i64) -> FnTransform<impl Fn(i64, i64, i64) -> i64 + Copy> {
    transform_fn(move |e: i64, s: i64, d: i64| e * 100 + s * 10 + d + k)
}

#[test]
fn arity_constants() {
    assert_eq!(<() as Arity>::ARITY, 0);
    assert_eq!(<(Expr,) as Arity>::ARITY, 1);
    assert_eq!(<(Expr, State, Data) as Arity>::ARITY, 3);
    assert_eq!(call(func(|| ()), ()).arity(), 0);
    assert_eq!(call(Expr, (State, Data)).arity(), 2);
}

#[test]
fn max_arity_matches_configuration() {
    let expected = if cfg!(feature = "arity-16") { 16 } else { 10 };
    assert_eq!(MAX_ARITY, expected);
    type Widest = (Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr, Expr);
    assert!(<Widest as Arity>::ARITY <= MAX_ARITY);
}

#[test]
fn generated_pattern_matches_hand_written_unary() {
    let a0 = offset(1);
    let f = |x: i64| x * 3;
    let composed = call(func(f), (a0,));
    for (e, s, d) in [(1, 2, 3), (0, 0, 0), (-4, 7, 9)] {
        let by_hand = f(a0.invoke(e, s, d));
        assert_eq!(composed.invoke(e, s, d), by_hand);
    }
}

#[test]
fn generated_pattern_matches_hand_written_binary() {
    let (a0, a1) = (offset(1), offset(2));
    let f = |x: i64, y: i64| x - 2 * y;
    let composed = call(func(f), (a0, a1));
    for (e, s, d) in [(1, 2, 3), (0, 0, 0), (-4, 7, 9)] {
        let by_hand = f(a0.invoke(e, s, d), a1.invoke(e, s, d));
        assert_eq!(composed.invoke(e, s, d), by_hand);
    }
}

#[test]
fn generated_pattern_matches_hand_written_ternary() {
    let (a0, a1, a2) = (offset(1), offset(2), offset(3));
    let f = |x: i64, y: i64, z: i64| x * y - z;
    let composed = call(func(f), (a0, a1, a2));
    for (e, s, d) in [(1, 2, 3), (0, 0, 0), (-4, 7, 9)] {
        let by_hand = f(a0.invoke(e, s, d), a1.invoke(e, s, d), a2.invoke(e, s, d));
        assert_eq!(composed.invoke(e, s, d), by_hand);
    }
}

#[test]
fn generated_and_fixed_protocols_agree_up_to_three() {
    // A transform target and the equivalent function target give the same answers.
    let as_transform = transform_fn(|x: i64, y: i64, z: i64| x + 2 * y + 3 * z);
    let as_function = |x: i64, y: i64, z: i64| x + 2 * y + 3 * z;
    let args = (offset(1), offset(2), offset(3));

    let via_b = call(as_transform, args);
    let via_a = call(func(as_function), args);
    assert_eq!(via_b.invoke(1, 2, 3), via_a.invoke(1, 2, 3));
}

#[test]
fn argument_list_resolves_in_order() {
    let list = (Expr, State, Data, constant(9u8));
    assert_eq!(list.evaluate_all(1u8, 2u8, 3u8), (1, 2, 3, 9));
}

#[test]
fn widest_call_uses_every_argument() {
    let sum10 = |a: u32, b: u32, c: u32, d: u32, e: u32, f: u32, g: u32, h: u32, i: u32, j: u32| {
        a + b + c + d + e + f + g + h + i + j
    };
    let rule = call(
        func(sum10),
        (
            Expr,
            State,
            Data,
            constant(1),
            constant(2),
            constant(3),
            constant(4),
            constant(5),
            constant(6),
            constant(7),
        ),
    );
    assert_eq!(rule.arity(), 10);
    assert_eq!(rule.invoke(100, 200, 300), 100 + 200 + 300 + 28);
}

#[test]
fn function_object_with_four_arguments() {
    let f = |a: &str, b: char, c: u8, d: bool| format!("{a}{b}{c}{d}");
    let rule = call(func(f), (Expr, State, Data, constant(true)));
    assert_eq!(rule.invoke("x", 'y', 7u8), "xy7true");
}

#[cfg(feature = "arity-16")]
#[test]
fn widest_call_with_extended_arity() {
    let weigh = |a: u64, b: u64, c: u64, d: u64, e: u64, f: u64, g: u64, h: u64, i: u64, j: u64,
                 k: u64, l: u64, m: u64, n: u64, o: u64, p: u64| {
        [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p]
            .iter()
            .enumerate()
            .map(|(pos, v)| (pos as u64 + 1) * v)
            .sum::<u64>()
    };
    let rule = call(
        func(weigh),
        (
            Expr,
            State,
            Data,
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            constant(1),
            Expr,
        ),
    );
    assert_eq!(rule.arity(), 16);
    assert_eq!(MAX_ARITY, 16);
    // 10*1 + 20*2 + 30*3 + (4 + ... + 15) + 10*16
    assert_eq!(rule.invoke(10, 20, 30), 10 + 40 + 90 + 114 + 160);
}
