//! Concatenating view - flatten a sequence of sequences by one level.

use std::iter::FusedIterator;

/// A lazy view flattening one level of nesting.
///
/// Created by [`Viewable::concat_view`](super::Viewable::concat_view).
/// Inner sequences are opened one at a time, in outer order, and their
/// elements are yielded in inner order. Exactly one level is flattened;
/// deeper nesting is preserved. Empty inner sequences contribute nothing.
///
/// # Examples
///
/// ```rust
/// use seqview::view::Viewable;
///
/// let flat: Vec<i32> = vec![vec![1, 2, 3], vec![4, 5, 6]]
///     .into_iter()
///     .concat_view()
///     .materialize();
/// assert_eq!(flat, vec![1, 2, 3, 4, 5, 6]);
/// ```
#[must_use = "views are lazy and do nothing until iterated"]
pub struct ConcatView<I: Iterator>
where
    I::Item: IntoIterator,
{
    outer: I,
    inner: Option<<I::Item as IntoIterator>::IntoIter>,
}

impl<I: Iterator> ConcatView<I>
where
    I::Item: IntoIterator,
{
    #[inline]
    pub(crate) fn new(outer: I) -> Self {
        Self { outer, inner: None }
    }
}

impl<I: Iterator> Iterator for ConcatView<I>
where
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(element) = inner.next() {
                    return Some(element);
                }
            }
            self.inner = Some(self.outer.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Only the currently open inner sequence is known; the rest of the
        // outer sequence may hold any number of elements.
        let lower = self.inner.as_ref().map_or(0, |inner| inner.size_hint().0);
        (lower, None)
    }
}

impl<I: FusedIterator> FusedIterator for ConcatView<I> where I::Item: IntoIterator {}
