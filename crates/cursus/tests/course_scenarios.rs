//! End-to-end scenarios from the lecture material, run through the facade.

use cursus::prelude::*;

#[test]
fn parse_then_slice() {
    let a = cursus::array::parse_ints("1 2 3 4").unwrap();
    assert_eq!(a.sub(1, 3).as_slice(), &[2, 3]);
}

#[test]
fn window_shift_with_blit() {
    let src: IntArray = (1..=9).collect();
    let mut dst = IntArray::filled(5, 0);
    dst.blit_from(1, &src, 0, 4);
    assert_eq!(dst.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn choose_even_multiples_across_containers() {
    let a: IntArray = (1..=6).collect();
    assert_eq!(
        a.choose(|v, _| (v % 2 == 0).then_some(v * 3)).as_slice(),
        &[6, 12, 18]
    );
    let l: IntList = (1..=6).collect();
    assert_eq!(
        l.choose(|v, _| (v % 2 == 0).then_some(v * 3)).to_vec(),
        [6, 12, 18]
    );
}

#[test]
fn fold_conventions_agree_between_containers() {
    let a: IntArray = [1, 2, 3, 4].into_iter().collect();
    let l: IntList = [1, 2, 3, 4].into_iter().collect();

    let (mut sa, mut sl) = (0, 0);
    a.foldl(&mut sa, |s, v, _| *s += *v);
    l.foldl(&mut sl, |s, v, _| *s += *v);
    assert_eq!((sa, sl), (10, 10));

    let (mut ra, mut rl) = (0, 0);
    a.foldr(&mut ra, |v, s, _| *s = *v - *s);
    l.foldr(&mut rl, |v, s, _| *s = *v - *s);
    assert_eq!((ra, rl), (-2, -2));
}

#[test]
fn string_specializations_release_payloads_through_drop() {
    // Owned-string containers need no dual free: Drop releases payloads.
    let words: StringList = ["ad", "astra"].into_iter().map(String::from).collect();
    let upper = words.map(|w, _| w.to_uppercase());
    assert_eq!(upper.to_vec(), ["AD", "ASTRA"]);

    let arr: StringArray = words.iter().cloned().collect();
    assert!(arr.contains(&"astra".to_string()));
}

#[test]
fn pointer_list_owning_free_scenario() {
    use cursus_test_utils::DropLedger;

    let ledger = DropLedger::new();
    let payloads: Vec<_> = (0..10).map(|_| Box::new(ledger.token())).collect();
    let l = PointerList::from_owned(payloads);
    assert_eq!(l.len(), 10);
    unsafe { l.dispose_deep() };
    ledger.assert_balanced();
}

#[test]
fn sorting_course_grades() {
    let grades: DoubleList = [2.3, 1.0, 1.7, 3.0].into_iter().collect();
    let best_first = grades.sorted_by(|a, b| a.partial_cmp(b).expect("grades are finite"));
    assert_eq!(best_first.to_vec(), [1.0, 1.7, 2.3, 3.0]);
    let worst_first = grades.sorted_desc_by(|a, b| a.partial_cmp(b).expect("grades are finite"));
    assert_eq!(worst_first.to_vec(), [3.0, 2.3, 1.7, 1.0]);
    // Source list untouched by either sort.
    assert_eq!(grades.to_vec(), [2.3, 1.0, 1.7, 3.0]);
}
