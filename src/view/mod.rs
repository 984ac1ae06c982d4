//! Lazy, composable views over sequences.
//!
//! This module provides the view adapters of the crate. A *view* wraps a
//! source iterator together with a transformation rule (a predicate, a
//! mapping function, a count, or a combination strategy) and produces its
//! elements one at a time, only when iterated. Constructing a view performs
//! no work and allocates no element storage; nothing is materialized until
//! the view is consumed.
//!
//! Every adapter is itself an [`Iterator`], so views compose freely: a view
//! may wrap another view, and the composed pipeline still evaluates one
//! element at a time.
//!
//! The construction seam is the [`Viewable`] extension trait, implemented
//! for every iterator:
//!
//! - [`FilterView`]: keep elements matching a predicate
//! - [`TransformView`]: apply a function to each element
//! - [`ReverseView`]: yield elements back to front
//! - [`TakeView`] / [`TakeWhileView`]: yield a prefix, by count or predicate
//! - [`DropView`] / [`DropWhileView`]: skip a prefix, by count or predicate
//! - [`ConcatView`]: flatten a sequence of sequences by one level
//! - [`ZipView`] / [`ZipWithView`]: combine two sequences element-wise
//!
//! # Examples
//!
//! ```rust
//! use seqview::view::Viewable;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let even_doubled: Vec<i32> = numbers
//!     .into_iter()
//!     .filter_view(|n| n % 2 == 0)
//!     .transform_view(|n| n * 2)
//!     .materialize();
//!
//! assert_eq!(even_doubled, vec![4, 8, 12, 16, 20]);
//! ```
//!
//! Views are pull-based: no element is produced before it is demanded.
//!
//! ```rust
//! use std::cell::Cell;
//! use seqview::view::Viewable;
//!
//! let calls = Cell::new(0);
//! let view = (1..=5).transform_view(|n| {
//!     calls.set(calls.get() + 1);
//!     n * n
//! });
//!
//! // Nothing has been computed yet.
//! assert_eq!(calls.get(), 0);
//!
//! let squares = view.materialize();
//! assert_eq!(calls.get(), 5);
//! assert_eq!(squares, vec![1, 4, 9, 16, 25]);
//! ```

mod concat;
mod drop;
mod filter;
mod reverse;
mod take;
mod transform;
mod viewable;
mod zip;

pub use concat::ConcatView;
pub use drop::{DropView, DropWhileView};
pub use filter::FilterView;
pub use reverse::ReverseView;
pub use take::{TakeView, TakeWhileView};
pub use transform::TransformView;
pub use viewable::Viewable;
pub use zip::{ZipView, ZipWithView};

// The adapters over an exact-size source must keep the full iterator surface.
static_assertions::assert_impl_all!(
    TakeView<std::vec::IntoIter<i32>>: Iterator, ExactSizeIterator, std::iter::FusedIterator
);
static_assertions::assert_impl_all!(
    ReverseView<std::vec::IntoIter<i32>>: Iterator, DoubleEndedIterator, ExactSizeIterator
);
static_assertions::assert_impl_all!(
    ZipView<std::vec::IntoIter<i32>, std::vec::IntoIter<i32>>: Iterator, ExactSizeIterator
);
