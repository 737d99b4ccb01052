//! Integration tests for PersistentVector.
//!
//! Organized by operation group, from construction through composition.

use pvector::persistent::{PersistentVector, VectorError};
use pvector::pvector;
use rstest::{fixture, rstest};

#[fixture]
fn hundred() -> PersistentVector<i32> {
    (0..100).collect()
}

fn dense(range: std::ops::Range<i32>) -> Vec<Option<i32>> {
    range.map(Some).collect()
}

// =============================================================================
// Cycle 1: Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_vector() {
    let vector: PersistentVector<i32> = PersistentVector::new();
    assert!(vector.is_empty());
    assert_eq!(vector.len(), 0);
    assert_eq!(vector.get(0), None);
}

#[rstest]
fn test_empty_equals_default() {
    assert_eq!(PersistentVector::<i32>::empty(), PersistentVector::default());
}

#[rstest]
#[case(vec![])]
#[case(vec![1])]
#[case((0..31).collect())]
#[case((0..32).collect())]
#[case((0..33).collect())]
#[case((0..1100).collect())]
fn test_from_array_round_trip(#[case] values: Vec<i32>) {
    let expected: Vec<Option<i32>> = values.iter().copied().map(Some).collect();
    let vector = PersistentVector::from_array(values);
    assert_eq!(vector.to_array(), expected);
}

#[rstest]
fn test_from_slice_and_from_conversions_agree() {
    let values = [4, 5, 6];
    let from_slice = PersistentVector::from_slice(&values);
    let from_ref: PersistentVector<i32> = PersistentVector::from(&values[..]);
    let from_vec: PersistentVector<i32> = PersistentVector::from(values.to_vec());
    assert_eq!(from_slice, from_ref);
    assert_eq!(from_slice, from_vec);
}

#[rstest]
fn test_macro_matches_from_array() {
    assert_eq!(pvector![1, 2, 3], PersistentVector::from_array(vec![1, 2, 3]));
}

// =============================================================================
// Cycle 2: Reads
// =============================================================================

#[rstest]
fn test_get_reads_every_index(hundred: PersistentVector<i32>) {
    for index in 0..100 {
        assert_eq!(hundred.get(index), Some(&i32::try_from(index).unwrap()));
    }
}

#[rstest]
#[case(100)]
#[case(150)]
#[case(usize::MAX)]
fn test_get_past_end_is_a_miss(hundred: PersistentVector<i32>, #[case] index: usize) {
    assert_eq!(hundred.get(index), None);
    assert!(!hundred.exists(index));
}

#[rstest]
fn test_first_and_last(hundred: PersistentVector<i32>) {
    assert_eq!(hundred.first(), Some(&0));
    assert_eq!(hundred.last(), Some(&99));
}

#[rstest]
fn test_index_operator(hundred: PersistentVector<i32>) {
    assert_eq!(hundred[42], 42);
}

#[rstest]
#[should_panic(expected = "index out of bounds")]
fn test_index_operator_panics_on_hole() {
    let vector = pvector![1, 2, 3].remove(1);
    let _value: i32 = vector[1];
}

// =============================================================================
// Cycle 3: Set and push
// =============================================================================

#[rstest]
fn test_set_replaces_value() {
    let vector = PersistentVector::from_array(vec![1, 2, 3]).set(1, 99);
    assert_eq!(vector.to_array(), vec![Some(1), Some(99), Some(3)]);
}

#[rstest]
fn test_set_leaves_original_untouched(hundred: PersistentVector<i32>) {
    let updated = hundred.set(70, -1);
    assert_eq!(hundred.get(70), Some(&70));
    assert_eq!(updated.get(70), Some(&-1));
    for index in (0..100).filter(|index| *index != 70) {
        assert_eq!(hundred.get(index), updated.get(index));
    }
}

#[rstest]
fn test_set_at_length_appends(hundred: PersistentVector<i32>) {
    let extended = hundred.set(100, 100);
    assert_eq!(extended.len(), 101);
    assert_eq!(extended.last(), Some(&100));
}

#[rstest]
fn test_set_past_length_appends_without_gap() {
    let vector = pvector![1, 2].set(10, 3);
    assert_eq!(vector.to_array(), vec![Some(1), Some(2), Some(3)]);
}

#[rstest]
fn test_push_hundred_from_empty() {
    let vector = (0..100).fold(PersistentVector::new(), |vector, value| vector.push(value));
    assert_eq!(vector.len(), 100);
    assert_eq!(vector.get(50), Some(&50));
    assert_eq!(vector.get(150), None);
}

#[rstest]
fn test_push_does_not_modify_original() {
    let vector1 = PersistentVector::new().push(1);
    let vector2 = vector1.push(2);
    assert_eq!(vector1.len(), 1);
    assert_eq!(vector1.get(1), None);
    assert_eq!(vector2.get(1), Some(&2));
}

#[rstest]
fn test_push_branching_from_shared_prefix() {
    let base: PersistentVector<i32> = (0..64).collect();
    let left = base.push(-1);
    let right = base.push(-2);
    assert_eq!(left.last(), Some(&-1));
    assert_eq!(right.last(), Some(&-2));
    assert_eq!(base.len(), 64);
}

#[rstest]
fn test_push_many_appends_in_order() {
    let vector = pvector![1].push_many(vec![2, 3, 4]);
    assert_eq!(vector.to_array(), vec![Some(1), Some(2), Some(3), Some(4)]);
}

// =============================================================================
// Cycle 4: Pop
// =============================================================================

#[rstest]
fn test_pop_hundred_times_yields_empty(hundred: PersistentVector<i32>) {
    let emptied = (0..100).fold(hundred, |vector, _| vector.pop());
    assert_eq!(emptied, PersistentVector::empty());
    assert!(emptied.is_empty());
}

#[rstest]
fn test_pop_on_empty_is_empty() {
    let vector: PersistentVector<i32> = PersistentVector::empty();
    assert_eq!(vector.pop(), PersistentVector::empty());
}

#[rstest]
#[case(1)]
#[case(32)]
#[case(33)]
#[case(64)]
#[case(65)]
#[case(1025)]
#[case(1057)]
fn test_pop_drops_last_position(#[case] size: i32) {
    let vector: PersistentVector<i32> = (0..size).collect();
    let popped = vector.pop();
    assert_eq!(popped.to_array(), dense(0..size - 1));
}

#[rstest]
fn test_pop_then_push_reuses_slot() {
    let vector: PersistentVector<i32> = (0..40).collect();
    let replaced = vector.pop().push(-1);
    assert_eq!(replaced.len(), 40);
    assert_eq!(replaced.last(), Some(&-1));
    assert_eq!(vector.last(), Some(&39));
}

// =============================================================================
// Cycle 5: Remove and holes
// =============================================================================

#[rstest]
fn test_remove_leaves_hole() {
    let vector = PersistentVector::from_array(vec![1, 2, 3]).remove(1);
    assert!(!vector.exists(1));
    assert_eq!(vector.get(1), None);
    assert_eq!(vector.len(), 3);
    assert_eq!(vector.to_array(), vec![Some(1), None, Some(3)]);
}

#[rstest]
fn test_remove_in_trie(hundred: PersistentVector<i32>) {
    let removed = hundred.remove(10);
    assert_eq!(removed.get(10), None);
    assert_eq!(removed.get(11), Some(&11));
    assert_eq!(hundred.get(10), Some(&10));
}

#[rstest]
fn test_remove_past_end_is_noop(hundred: PersistentVector<i32>) {
    assert_eq!(hundred.remove(500), hundred);
}

#[rstest]
fn test_holes_are_skipped_by_for_each_and_index_of() {
    let vector = pvector![7, 8, 7, 9].remove(0);
    let mut visited = Vec::new();
    vector.for_each(|index, value| visited.push((index, *value)));
    assert_eq!(visited, vec![(1, 8), (2, 7), (3, 9)]);
    assert_eq!(vector.index_of(&7), Some(2));
}

#[rstest]
fn test_set_fills_hole() {
    let vector = pvector![1, 2, 3].remove(1).set(1, 5);
    assert_eq!(vector.to_array(), vec![Some(1), Some(5), Some(3)]);
}

// =============================================================================
// Cycle 6: Slice and shift
// =============================================================================

#[rstest]
#[case(0, Some(100), 0..100)]
#[case(10, Some(20), 10..20)]
#[case(30, None, 30..100)]
#[case(-5, None, 95..100)]
#[case(0, Some(-90), 0..10)]
#[case(-50, Some(-40), 50..60)]
#[case(40, Some(500), 40..100)]
#[case(-500, Some(3), 0..3)]
fn test_slice_windows(
    hundred: PersistentVector<i32>,
    #[case] begin: isize,
    #[case] end: Option<isize>,
    #[case] expected: std::ops::Range<i32>,
) {
    assert_eq!(hundred.slice(begin, end).to_array(), dense(expected));
}

#[rstest]
#[case(50, Some(50))]
#[case(60, Some(10))]
#[case(100, None)]
#[case(-10, Some(-20))]
fn test_empty_slice_is_canonical_empty(
    hundred: PersistentVector<i32>,
    #[case] begin: isize,
    #[case] end: Option<isize>,
) {
    let sliced = hundred.slice(begin, end);
    assert!(sliced.is_empty());
    assert_eq!(sliced, PersistentVector::empty());
}

#[rstest]
fn test_slice_of_slice_is_relative() {
    let vector: PersistentVector<i32> = (0..200).collect();
    let inner = vector.slice(50, Some(150)).slice(10, Some(-10));
    assert_eq!(inner.to_array(), dense(60..140));
}

#[rstest]
fn test_slice_then_push_overwrites_stale_slots() {
    let vector: PersistentVector<i32> = (0..100).collect();
    let sliced = vector.slice(0, Some(40)).push(-1).push(-2);
    assert_eq!(sliced.len(), 42);
    assert_eq!(sliced.get(40), Some(&-1));
    assert_eq!(sliced.get(41), Some(&-2));
    assert_eq!(vector.get(40), Some(&40));
}

#[rstest]
fn test_slice_then_push_across_chunks() {
    let vector: PersistentVector<i32> = (0..100).collect();
    let rebuilt = (50..130).fold(vector.slice(0, Some(50)), |vector, value| vector.push(value));
    assert_eq!(rebuilt.to_array(), dense(0..130));
}

#[rstest]
fn test_slice_then_pop() {
    let vector: PersistentVector<i32> = (0..100).collect();
    let popped = vector.slice(20, Some(65)).pop().pop();
    assert_eq!(popped.to_array(), dense(20..63));
}

#[rstest]
fn test_shift_drops_first(hundred: PersistentVector<i32>) {
    let shifted = hundred.shift();
    assert_eq!(shifted.len(), 99);
    assert_eq!(shifted.first(), Some(&1));
    assert_eq!(hundred.first(), Some(&0));
}

#[rstest]
fn test_shift_until_empty() {
    let vector = (0..3).fold(pvector![1, 2, 3], |vector, _| vector.shift());
    assert_eq!(vector, PersistentVector::empty());
}

// =============================================================================
// Cycle 7: Unshift
// =============================================================================

#[rstest]
fn test_unshift_prepends_in_order() {
    let vector = pvector![3, 4].unshift([1, 2]);
    assert_eq!(vector.to_array(), vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[rstest]
fn test_unshift_onto_empty() {
    let vector = PersistentVector::new().unshift([1, 2, 3]);
    assert_eq!(vector, pvector![1, 2, 3]);
}

#[rstest]
fn test_unshift_repeatedly(hundred: PersistentVector<i32>) {
    let vector = (1..=50).fold(hundred, |vector, value| vector.unshift([-value]));
    assert_eq!(vector.len(), 150);
    assert_eq!(vector.first(), Some(&-50));
    assert_eq!(vector.get(49), Some(&-1));
    assert_eq!(vector.get(50), Some(&0));
    assert_eq!(vector.last(), Some(&99));
}

#[rstest]
fn test_unshift_large_batch() {
    let vector = pvector![5000].unshift(0..5000);
    assert_eq!(vector.to_array(), dense(0..5001));
}

#[rstest]
fn test_unshift_after_shift_reuses_room(hundred: PersistentVector<i32>) {
    let vector = hundred.shift().shift().unshift([-2, -1]);
    assert_eq!(vector.first(), Some(&-2));
    assert_eq!(vector.get(2), Some(&2));
    assert_eq!(vector.len(), 100);
}

#[rstest]
fn test_unshift_then_pop_to_empty() {
    let vector = pvector![2, 3].unshift([1]);
    let emptied = vector.pop().pop().pop();
    assert_eq!(emptied, PersistentVector::empty());
}

// =============================================================================
// Cycle 8: Composition and unimplemented operations
// =============================================================================

#[rstest]
fn test_concat_with_empty_side(hundred: PersistentVector<i32>) {
    let empty = PersistentVector::new();
    assert_eq!(hundred.concat(&empty), Ok(hundred.clone()));
    assert_eq!(empty.concat(&hundred), Ok(hundred.clone()));
}

#[rstest]
fn test_concat_two_non_empty_fails(hundred: PersistentVector<i32>) {
    let result = hundred.concat(&pvector![1]);
    assert!(matches!(result, Err(VectorError::Unimplemented(ref error)) if error.operation == "concat"));
}

#[rstest]
fn test_splice_removing_prefix() {
    let vector = pvector![1, 2, 3, 4];
    assert_eq!(vector.splice(0, 2, vec![]), Ok(pvector![3, 4]));
}

#[rstest]
fn test_splice_replacing_everything() {
    let vector = pvector![1, 2, 3];
    assert_eq!(vector.splice(0, 3, vec![9, 8]), Ok(pvector![9, 8]));
}

#[rstest]
fn test_splice_needing_concat_fails() {
    let vector = pvector![1, 2, 3];
    assert!(vector.splice(1, 1, vec![5]).is_err());
}

#[rstest]
fn test_map_and_reverse_fail(hundred: PersistentVector<i32>) {
    let mapped = hundred.map(|value| value * 2);
    assert!(matches!(mapped, Err(VectorError::Unimplemented(ref error)) if error.operation == "map"));
    let reversed = hundred.reverse();
    assert!(matches!(reversed, Err(VectorError::Unimplemented(ref error)) if error.operation == "reverse"));
}

#[rstest]
fn test_error_propagates_with_question_mark() {
    fn join(left: &PersistentVector<i32>, right: &PersistentVector<i32>) -> Result<usize, VectorError> {
        Ok(left.concat(right)?.len())
    }
    assert_eq!(join(&pvector![1], &PersistentVector::new()), Ok(1));
    assert!(join(&pvector![1], &pvector![2]).is_err());
}

// =============================================================================
// Cycle 9: Traversal and standard traits
// =============================================================================

#[rstest]
fn test_index_of_first_match(hundred: PersistentVector<i32>) {
    assert_eq!(hundred.index_of(&42), Some(42));
    assert_eq!(hundred.index_of(&-1), None);
    assert_eq!(hundred.slice(40, None).index_of(&42), Some(2));
}

#[rstest]
fn test_for_each_visits_ascending(hundred: PersistentVector<i32>) {
    let mut visited = Vec::new();
    hundred.slice(25, Some(75)).for_each(|index, value| visited.push((index, *value)));
    let expected: Vec<(usize, i32)> = (0..50).zip(25..75).collect();
    assert_eq!(visited, expected);
}

#[rstest]
fn test_into_iterator_for_reference(hundred: PersistentVector<i32>) {
    let mut total = 0;
    for value in (&hundred).into_iter().flatten() {
        total += value;
    }
    assert_eq!(total, (0..100).sum());
}

#[rstest]
fn test_equality_ignores_layout() {
    let pushed: PersistentVector<i32> = (0..10).collect();
    let sliced = (0..50).collect::<PersistentVector<i32>>().slice(0, Some(10));
    let unshifted = (5..10).collect::<PersistentVector<i32>>().unshift(0..5);
    assert_eq!(pushed, sliced);
    assert_eq!(pushed, unshifted);
}

#[rstest]
fn test_equality_sees_holes() {
    let vector = pvector![1, 2, 3];
    assert_ne!(vector.remove(1), vector);
    assert_eq!(vector.remove(1), vector.remove(1));
}

#[rstest]
fn test_hash_matches_equality() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(vector: &PersistentVector<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        vector.hash(&mut hasher);
        hasher.finish()
    }

    let pushed: PersistentVector<i32> = (0..40).collect();
    let sliced = (0..80).collect::<PersistentVector<i32>>().slice(0, Some(40));
    assert_eq!(hash_of(&pushed), hash_of(&sliced));
}

#[rstest]
fn test_debug_lists_slots() {
    let vector = pvector![1, 2].remove(0);
    assert_eq!(format!("{vector:?}"), "[None, Some(2)]");
}
