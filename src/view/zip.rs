//! Zipping views - combine two sequences element-wise.

use std::iter::FusedIterator;

/// A lazy view pairing two sequences element-wise.
///
/// Created by [`Viewable::zip_view`](super::Viewable::zip_view). Each pull
/// takes one element from each source; the view ends as soon as either
/// source does, truncating to the shorter input.
///
/// # Examples
///
/// ```rust
/// use seqview::view::Viewable;
///
/// let pairs: Vec<(i32, i32)> = vec![1, 2, 3]
///     .into_iter()
///     .zip_view(vec![4, 5, 6])
///     .materialize();
/// assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6)]);
/// ```
#[derive(Clone, Debug)]
#[must_use = "views are lazy and do nothing until iterated"]
pub struct ZipView<A, B> {
    first: A,
    second: B,
}

impl<A, B> ZipView<A, B> {
    #[inline]
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Iterator, B: Iterator> Iterator for ZipView<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let left = self.first.next()?;
        let right = self.second.next()?;
        Some((left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        min_size_hint(self.first.size_hint(), self.second.size_hint())
    }
}

impl<A: ExactSizeIterator, B: ExactSizeIterator> ExactSizeIterator for ZipView<A, B> {}

impl<A: FusedIterator, B: FusedIterator> FusedIterator for ZipView<A, B> {}

/// A lazy view combining two sequences element-wise through a function.
///
/// Created by [`Viewable::zip_with_view`](super::Viewable::zip_with_view).
/// Behaves like [`ZipView`] with the pair fed through the combining
/// function instead of being yielded as a tuple.
///
/// # Examples
///
/// ```rust
/// use seqview::view::Viewable;
///
/// let sums: Vec<i32> = vec![1, 2, 3]
///     .into_iter()
///     .zip_with_view(vec![4, 5, 6], |a, b| a + b)
///     .materialize();
/// assert_eq!(sums, vec![5, 7, 9]);
/// ```
#[derive(Clone)]
#[must_use = "views are lazy and do nothing until iterated"]
pub struct ZipWithView<A, B, F> {
    first: A,
    second: B,
    combine: F,
}

impl<A, B, F> ZipWithView<A, B, F> {
    #[inline]
    pub(crate) fn new(first: A, second: B, combine: F) -> Self {
        Self {
            first,
            second,
            combine,
        }
    }
}

impl<Combined, A, B, F> Iterator for ZipWithView<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> Combined,
{
    type Item = Combined;

    fn next(&mut self) -> Option<Self::Item> {
        let left = self.first.next()?;
        let right = self.second.next()?;
        Some((self.combine)(left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        min_size_hint(self.first.size_hint(), self.second.size_hint())
    }
}

impl<Combined, A, B, F> ExactSizeIterator for ZipWithView<A, B, F>
where
    A: ExactSizeIterator,
    B: ExactSizeIterator,
    F: FnMut(A::Item, B::Item) -> Combined,
{
}

impl<Combined, A, B, F> FusedIterator for ZipWithView<A, B, F>
where
    A: FusedIterator,
    B: FusedIterator,
    F: FnMut(A::Item, B::Item) -> Combined,
{
}

/// The hint of a zipped view is the tighter of the two source hints.
fn min_size_hint(
    left: (usize, Option<usize>),
    right: (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let lower = left.0.min(right.0);
    let upper = match (left.1, right.1) {
        (Some(first), Some(second)) => Some(first.min(second)),
        (bound @ Some(_), None) | (None, bound @ Some(_)) => bound,
        (None, None) => None,
    };
    (lower, upper)
}

#[cfg(test)]
mod tests {
    use crate::view::Viewable;
    use rstest::rstest;

    // =========================================================================
    // ZipView
    // =========================================================================

    #[rstest]
    fn pairs_elements_in_order() {
        let pairs: Vec<(i32, i32)> = vec![1, 2, 3].into_iter().zip_view(vec![4, 5, 6]).materialize();
        assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6)]);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![4, 5], vec![(1, 4), (2, 5)])]
    #[case(vec![1], vec![4, 5, 6], vec![(1, 4)])]
    #[case(vec![], vec![4, 5, 6], vec![])]
    fn truncates_to_the_shorter_input(
        #[case] first: Vec<i32>,
        #[case] second: Vec<i32>,
        #[case] expected: Vec<(i32, i32)>,
    ) {
        let pairs: Vec<(i32, i32)> = first.into_iter().zip_view(second).materialize();
        assert_eq!(pairs, expected);
    }

    #[rstest]
    fn zips_sequences_of_different_types() {
        let pairs: Vec<(i32, &str)> = vec![1, 2].into_iter().zip_view(vec!["a", "b"]).materialize();
        assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    }

    #[rstest]
    fn further_zips_nest_tuples() {
        let triples: Vec<((i32, i32), i32)> = vec![1, 2]
            .into_iter()
            .zip_view(vec![3, 4])
            .zip_view(vec![5, 6])
            .materialize();
        assert_eq!(triples, vec![((1, 3), 5), ((2, 4), 6)]);
    }

    #[rstest]
    fn reports_the_shorter_length() {
        let view = vec![1, 2, 3].into_iter().zip_view(vec![4, 5]);
        assert_eq!(view.len(), 2);
    }

    // =========================================================================
    // ZipWithView
    // =========================================================================

    #[rstest]
    fn combines_pairs_through_the_function() {
        let sums: Vec<i32> = vec![1, 2, 3]
            .into_iter()
            .zip_with_view(vec![4, 5, 6], |a, b| a + b)
            .materialize();
        assert_eq!(sums, vec![5, 7, 9]);
    }

    #[rstest]
    fn matches_zip_then_transform() {
        let first = vec![1, 2, 3];
        let second = vec![10, 20];

        let direct: Vec<i32> = first
            .clone()
            .into_iter()
            .zip_with_view(second.clone(), |a, b| a * b)
            .materialize();
        let via_pairs: Vec<i32> = first
            .into_iter()
            .zip_view(second)
            .transform_view(|(a, b)| a * b)
            .materialize();

        assert_eq!(direct, via_pairs);
    }
}
