//! The `Viewable` extension trait - constructing views over any iterator.
//!
//! This module provides the single construction seam for every view adapter
//! in the crate. `Viewable` is implemented for all iterators, so any
//! sequence reachable through `into_iter()` can be wrapped without copying.
//!
//! # Laws
//!
//! Views obey the usual transformation laws, verified by the property tests
//! in `tests/view_laws.rs`:
//!
//! ## Identity
//!
//! Transforming with the identity function yields the source:
//!
//! ```text
//! xs.transform_view(|x| x).materialize() == xs
//! ```
//!
//! ## Composition
//!
//! Transforming twice equals transforming with the composition:
//!
//! ```text
//! xs.transform_view(f).transform_view(g) == xs.transform_view(|x| g(f(x)))
//! ```
//!
//! ## Splits
//!
//! A take/drop pair partitions its source:
//!
//! ```text
//! xs.take_view(n) ++ xs.drop_view(n) == xs
//! xs.take_while_view(p) ++ xs.drop_while_view(p) == xs
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqview::view::Viewable;
//!
//! let evens: Vec<i32> = vec![1, 2, 3, 4, 5]
//!     .into_iter()
//!     .filter_view(|n| n % 2 == 0)
//!     .materialize();
//! assert_eq!(evens, vec![2, 4]);
//! ```

use super::concat::ConcatView;
use super::drop::{DropView, DropWhileView};
use super::filter::FilterView;
use super::reverse::ReverseView;
use super::take::{TakeView, TakeWhileView};
use super::transform::TransformView;
use super::zip::{ZipView, ZipWithView};

/// An extension trait that builds lazy views over any iterator.
///
/// Every method is a constructor: it wraps the receiver in an adapter
/// struct and returns immediately. No element of the source is inspected
/// until the returned view is iterated, and iterating a view never mutates
/// the sequence the source iterator was created from.
///
/// Views compose: the result of every method is itself an iterator, so it
/// can be wrapped again by any other method of this trait.
///
/// # Examples
///
/// ```rust
/// use seqview::view::Viewable;
///
/// let first_two_squares: Vec<i32> = vec![1, 2, 3, 4, 5]
///     .into_iter()
///     .transform_view(|n| n * n)
///     .take_view(2)
///     .materialize();
/// assert_eq!(first_two_squares, vec![1, 4]);
/// ```
pub trait Viewable: Iterator + Sized {
    /// Creates a view that keeps only the elements matching a predicate.
    ///
    /// Order of the surviving elements is preserved.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Returns `true` for elements the view should yield
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::Viewable;
    ///
    /// let evens: Vec<i32> = (1..=5).filter_view(|n| n % 2 == 0).materialize();
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    #[inline]
    fn filter_view<P>(self, predicate: P) -> FilterView<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        FilterView::new(self, predicate)
    }

    /// Creates a view that applies a function to each element.
    ///
    /// Order and length are preserved.
    ///
    /// # Arguments
    ///
    /// * `function` - Maps each source element to an output element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::Viewable;
    ///
    /// let squares: Vec<i32> = (1..=5).transform_view(|n| n * n).materialize();
    /// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
    /// ```
    #[inline]
    fn transform_view<Output, F>(self, function: F) -> TransformView<Self, F>
    where
        F: FnMut(Self::Item) -> Output,
    {
        TransformView::new(self, function)
    }

    /// Creates a view that yields the elements back to front.
    ///
    /// The source must be double-ended; the view walks it from the back
    /// instead of buffering elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::Viewable;
    ///
    /// let reversed: Vec<i32> = vec![1, 2, 3, 4, 5]
    ///     .into_iter()
    ///     .reverse_view()
    ///     .materialize();
    /// assert_eq!(reversed, vec![5, 4, 3, 2, 1]);
    /// ```
    #[inline]
    fn reverse_view(self) -> ReverseView<Self>
    where
        Self: DoubleEndedIterator,
    {
        ReverseView::new(self)
    }

    /// Creates a view over the first `count` elements.
    ///
    /// A `count` larger than the source length yields the whole sequence;
    /// zero yields an empty view. Out-of-range counts clamp, they never
    /// fail.
    ///
    /// # Arguments
    ///
    /// * `count` - Maximum number of elements to yield
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::Viewable;
    ///
    /// let first_three: Vec<i32> = vec![1, 2, 3, 4, 5]
    ///     .into_iter()
    ///     .take_view(3)
    ///     .materialize();
    /// assert_eq!(first_three, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn take_view(self, count: usize) -> TakeView<Self> {
        TakeView::new(self, count)
    }

    /// Creates a view that skips the first `count` elements.
    ///
    /// A `count` of at least the source length yields an empty view. The
    /// skip itself is lazy: it happens on the first call to `next`.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of leading elements to skip
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::Viewable;
    ///
    /// let rest: Vec<i32> = vec![1, 2, 3, 4, 5]
    ///     .into_iter()
    ///     .drop_view(2)
    ///     .materialize();
    /// assert_eq!(rest, vec![3, 4, 5]);
    /// ```
    #[inline]
    fn drop_view(self, count: usize) -> DropView<Self> {
        DropView::new(self, count)
    }

    /// Creates a view that yields elements until the predicate first fails.
    ///
    /// Once an element fails the predicate the view is exhausted for good,
    /// even if a later element would satisfy it again.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Keeps yielding while this returns `true`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::Viewable;
    ///
    /// let prefix: Vec<i32> = vec![1, 2, 3, 4, 5]
    ///     .into_iter()
    ///     .take_while_view(|n| *n < 4)
    ///     .materialize();
    /// assert_eq!(prefix, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn take_while_view<P>(self, predicate: P) -> TakeWhileView<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhileView::new(self, predicate)
    }

    /// Creates a view that skips elements while the predicate holds.
    ///
    /// Everything from the first failing element onward is yielded,
    /// including later elements that would satisfy the predicate again.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Keeps skipping while this returns `true`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::Viewable;
    ///
    /// let suffix: Vec<i32> = vec![1, 2, 3, 4, 5]
    ///     .into_iter()
    ///     .drop_while_view(|n| *n < 3)
    ///     .materialize();
    /// assert_eq!(suffix, vec![3, 4, 5]);
    /// ```
    #[inline]
    fn drop_while_view<P>(self, predicate: P) -> DropWhileView<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhileView::new(self, predicate)
    }

    /// Creates a view that flattens a sequence of sequences by one level.
    ///
    /// Outer order is preserved, then inner order within each inner
    /// sequence. Only one level is flattened; deeper nesting survives.
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
    #[inline]
    fn concat_view(self) -> ConcatView<Self>
    where
        Self::Item: IntoIterator,
    {
        ConcatView::new(self)
    }

    /// Creates a view that pairs this sequence with another, element-wise.
    ///
    /// The view ends with the shorter input. Zipping more than two
    /// sequences nests: a further `zip_view` pairs tuples with elements.
    ///
    /// # Arguments
    ///
    /// * `other` - The sequence to pair with
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
    #[inline]
    fn zip_view<Other>(self, other: Other) -> ZipView<Self, Other::IntoIter>
    where
        Other: IntoIterator,
    {
        ZipView::new(self, other.into_iter())
    }

    /// Creates a view that combines this sequence with another through a
    /// function, element-wise.
    ///
    /// Equivalent to zipping and then transforming each pair, without the
    /// intermediate tuple.
    ///
    /// # Arguments
    ///
    /// * `other` - The sequence to combine with
    /// * `combine` - Merges one element from each sequence into an output
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
    #[inline]
    fn zip_with_view<Other, Combined, F>(
        self,
        other: Other,
        combine: F,
    ) -> ZipWithView<Self, Other::IntoIter, F>
    where
        Other: IntoIterator,
        F: FnMut(Self::Item, Other::Item) -> Combined,
    {
        ZipWithView::new(self, other.into_iter(), combine)
    }

    /// Forces the view to completion, collecting every element into an
    /// owned sequence.
    ///
    /// This is the point where the deferred work of the whole view
    /// pipeline actually runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::view::Viewable;
    ///
    /// let materialized: Vec<i32> = (1..=3).materialize();
    /// assert_eq!(materialized, vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    fn materialize(self) -> Vec<Self::Item> {
        self.collect()
    }
}

impl<I: Iterator> Viewable for I {}
