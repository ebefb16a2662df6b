//! Algebraic properties of the array operations.

use cursus_array::Array;
use cursus_core::Sequence;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 65536,
        ..ProptestConfig::default()
    })]

    #[test]
    fn sub_of_full_range_is_identity(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let a = Array::from(v);
        let len = a.len() as isize;
        prop_assert_eq!(a.sub(0, len), a);
    }

    #[test]
    fn sub_never_escapes_the_clamped_range(
        v in prop::collection::vec(any::<i32>(), 0..64),
        i in -80isize..80,
        j in -80isize..80,
    ) {
        let a = Array::from(v);
        let s = a.sub(i, j);
        let lo = i.max(0).min(a.len() as isize) as usize;
        for (k, val) in s.iter().enumerate() {
            prop_assert_eq!(*val, *a.get(lo + k));
        }
    }

    #[test]
    fn concat_splits_by_length(
        x in prop::collection::vec(any::<i32>(), 0..32),
        y in prop::collection::vec(any::<i32>(), 0..32),
    ) {
        let a = Array::from(x);
        let b = Array::from(y);
        let c = a.concat(&b);
        prop_assert_eq!(c.len(), a.len() + b.len());
        for i in 0..c.len() {
            let expected = if i < a.len() { a.get(i) } else { b.get(i - a.len()) };
            prop_assert_eq!(c.get(i), expected);
        }
    }

    #[test]
    fn reverse_is_an_involution(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let a = Array::from(v);
        let mut b = a.clone();
        b.reverse();
        b.reverse();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn filter_result_satisfies_the_predicate(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let a = Array::from(v);
        let kept = a.filter(|x, _| x % 3 == 0);
        prop_assert!(kept.forall(|x, _| x % 3 == 0));
        prop_assert!(kept.len() <= a.len());
    }

    #[test]
    fn foldl_matches_iterator_sum(v in prop::collection::vec(-1000i64..1000, 0..64)) {
        let a = Array::from(v);
        let mut sum = 0i64;
        a.foldl(&mut sum, |s, x, _| *s += *x);
        prop_assert_eq!(sum, a.iter().sum::<i64>());
    }

    #[test]
    fn map_then_get_agrees_pointwise(v in prop::collection::vec(any::<i16>(), 0..64)) {
        let a = Array::from(v);
        let b = a.map(|x, i| i64::from(*x) + i as i64);
        prop_assert_eq!(a.len(), b.len());
        for i in 0..a.len() {
            prop_assert_eq!(*b.get(i), i64::from(*a.get(i)) + i as i64);
        }
    }

    #[test]
    fn blit_within_matches_copy_through_a_temporary(
        v in prop::collection::vec(any::<i32>(), 1..48),
        si in 0usize..48,
        di in 0usize..48,
        count in 0usize..48,
    ) {
        let len = v.len();
        prop_assume!(si + count <= len && di + count <= len);
        let mut a = Array::from(v.clone());
        a.blit_within(si as isize, di as isize, count as isize);

        let mut expected = v.clone();
        let tmp: Vec<i32> = v[si..si + count].to_vec();
        expected[di..di + count].copy_from_slice(&tmp);
        prop_assert_eq!(a.as_slice(), expected.as_slice());
    }
}

// ── Concrete lecture scenarios ──────────────────────────────────

#[test]
fn foldr_subtraction_scenario() {
    let a = Array::from(vec![1, 2, 3, 4]);
    let mut acc = 0;
    a.foldr(&mut acc, |v, s, _| *s = *v - *s);
    assert_eq!(acc, 1 - (2 - (3 - (4 - 0))));
}

#[test]
fn blit_shift_scenario() {
    let src = Array::generate(9, |i| i as i32 + 1);
    let mut dst = Array::filled(5, 0);
    dst.blit_from(1, &src, 0, 4);
    assert_eq!(dst.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn parsed_sub_scenario() {
    let a = cursus_array::parse_ints("1 2 3 4").unwrap();
    assert_eq!(a.sub(1, 3).as_slice(), &[2, 3]);
}
