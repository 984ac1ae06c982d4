//! Integration tests over fixed sequences.
//!
//! Each test pins one operation to the concrete inputs and outputs of the
//! demonstration program, including the clamping and adjacency edge cases.

use rstest::rstest;
use seqview::inplace;
use seqview::view::Viewable;

// =============================================================================
// Composed and single views
// =============================================================================

#[rstest]
fn filter_even_then_double_over_one_to_ten() {
    let result: Vec<i32> = (1..=10)
        .filter_view(|n| n % 2 == 0)
        .transform_view(|n| n * 2)
        .materialize();
    assert_eq!(result, vec![4, 8, 12, 16, 20]);
}

#[rstest]
fn reverse_one_to_five() {
    let result: Vec<i32> = vec![1, 2, 3, 4, 5].into_iter().reverse_view().materialize();
    assert_eq!(result, vec![5, 4, 3, 2, 1]);
}

#[rstest]
#[case(3, vec![1, 2, 3])]
#[case(0, vec![])]
#[case(7, vec![1, 2, 3, 4, 5])]
fn take_clamps_to_the_sequence(#[case] count: usize, #[case] expected: Vec<i32>) {
    let result: Vec<i32> = vec![1, 2, 3, 4, 5].into_iter().take_view(count).materialize();
    assert_eq!(result, expected);
}

#[rstest]
#[case(2, vec![3, 4, 5])]
#[case(5, vec![])]
#[case(9, vec![])]
fn drop_clamps_to_the_sequence(#[case] count: usize, #[case] expected: Vec<i32>) {
    let result: Vec<i32> = vec![1, 2, 3, 4, 5].into_iter().drop_view(count).materialize();
    assert_eq!(result, expected);
}

#[rstest]
fn concat_flattens_one_level_in_order() {
    let result: Vec<i32> = vec![vec![1, 2, 3], vec![4, 5, 6]]
        .into_iter()
        .concat_view()
        .materialize();
    assert_eq!(result, vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn transform_squares_one_to_five() {
    let result: Vec<i32> = vec![1, 2, 3, 4, 5]
        .into_iter()
        .transform_view(|n| n * n)
        .materialize();
    assert_eq!(result, vec![1, 4, 9, 16, 25]);
}

#[rstest]
fn filter_evens_from_one_to_five() {
    let result: Vec<i32> = vec![1, 2, 3, 4, 5]
        .into_iter()
        .filter_view(|n| n % 2 == 0)
        .materialize();
    assert_eq!(result, vec![2, 4]);
}

#[rstest]
fn zip_pairs_element_wise() {
    let result: Vec<(i32, i32)> = vec![1, 2, 3].into_iter().zip_view(vec![4, 5, 6]).materialize();
    assert_eq!(result, vec![(1, 4), (2, 5), (3, 6)]);
}

#[rstest]
fn zip_truncates_to_the_shorter_sequence() {
    let result: Vec<(i32, i32)> = vec![1, 2, 3, 4].into_iter().zip_view(vec![9, 8]).materialize();
    assert_eq!(result, vec![(1, 9), (2, 8)]);
}

#[rstest]
fn take_while_stops_at_the_first_failure() {
    let result: Vec<i32> = vec![1, 2, 3, 4, 5]
        .into_iter()
        .take_while_view(|n| *n < 4)
        .materialize();
    assert_eq!(result, vec![1, 2, 3]);
}

#[rstest]
fn take_while_never_resumes_after_a_failure() {
    // 2 would satisfy the predicate again, but the view stopped at 9.
    let result: Vec<i32> = vec![1, 9, 2]
        .into_iter()
        .take_while_view(|n| *n < 4)
        .materialize();
    assert_eq!(result, vec![1]);
}

#[rstest]
fn drop_while_keeps_everything_from_the_first_failure() {
    let result: Vec<i32> = vec![1, 2, 3, 4, 5]
        .into_iter()
        .drop_while_view(|n| *n < 3)
        .materialize();
    assert_eq!(result, vec![3, 4, 5]);
}

// =============================================================================
// In-place operations
// =============================================================================

#[rstest]
fn dedup_collapses_consecutive_runs_only() {
    let mut numbers = vec![1, 2, 2, 3, 4, 4, 5];
    inplace::dedup_consecutive(&mut numbers);
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn dedup_is_adjacency_based_not_set_based() {
    // A set-based deduplication would shrink this; the adjacency-based one
    // must leave it alone.
    let mut numbers = vec![1, 2, 1];
    inplace::dedup_consecutive(&mut numbers);
    assert_eq!(numbers, vec![1, 2, 1]);
}

#[rstest]
fn sort_orders_ascending_and_is_idempotent() {
    let mut numbers = vec![5, 3, 1, 4, 2];
    inplace::sort(&mut numbers);
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);

    inplace::sort(&mut numbers);
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// Laziness of composition
// =============================================================================

#[rstest]
fn a_composed_pipeline_pulls_only_what_it_needs() {
    let mut touched = Vec::new();
    let first_even_square: Vec<i32> = (1..=100)
        .transform_view(|n| {
            touched.push(n);
            n
        })
        .filter_view(|n| n % 2 == 0)
        .transform_view(|n| n * n)
        .take_view(1)
        .materialize();

    assert_eq!(first_even_square, vec![4]);
    assert_eq!(touched, vec![1, 2]);
}
