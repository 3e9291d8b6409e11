//! Iterator helpers for sequences of `Either`
//!
//! [`lefts`] and [`rights`] are lazy and keep input order. Extraction goes
//! through `match_with`, so there is no unchecked unwrap after filtering.

use std::iter::FusedIterator;

use crate::either::Either;

//-----------------------------------------------------------------------------
// Adapters
//-----------------------------------------------------------------------------

/// Iterator over the `Left` payloads of an underlying iterator.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Lefts<I> {
    iter: I,
}

/// Iterator over the `Right` payloads of an underlying iterator.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Rights<I> {
    iter: I,
}

impl<A, B, I> Iterator for Lefts<I>
where
    I: Iterator<Item = Either<A, B>>,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        self.iter.find_map(Either::into_left)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<A, B, I> DoubleEndedIterator for Lefts<I>
where
    I: DoubleEndedIterator<Item = Either<A, B>>,
{
    fn next_back(&mut self) -> Option<A> {
        self.iter.by_ref().rev().find_map(Either::into_left)
    }
}

impl<A, B, I> FusedIterator for Lefts<I> where I: FusedIterator<Item = Either<A, B>> {}

impl<A, B, I> Iterator for Rights<I>
where
    I: Iterator<Item = Either<A, B>>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.iter.find_map(Either::into_right)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<A, B, I> DoubleEndedIterator for Rights<I>
where
    I: DoubleEndedIterator<Item = Either<A, B>>,
{
    fn next_back(&mut self) -> Option<B> {
        self.iter.by_ref().rev().find_map(Either::into_right)
    }
}

impl<A, B, I> FusedIterator for Rights<I> where I: FusedIterator<Item = Either<A, B>> {}

//-----------------------------------------------------------------------------
// Free Functions
//-----------------------------------------------------------------------------

/// Yields the payload of every `Left`, in order.
///
/// ```
/// use either_core::{iter::lefts, Either};
///
/// let items = vec![Either::Left("a"), Either::Right(1), Either::Left("b")];
/// assert_eq!(lefts(items).collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub fn lefts<A, B, I>(iter: I) -> Lefts<I::IntoIter>
where
    I: IntoIterator<Item = Either<A, B>>,
{
    Lefts {
        iter: iter.into_iter(),
    }
}

/// Yields the payload of every `Right`, in order.
pub fn rights<A, B, I>(iter: I) -> Rights<I::IntoIter>
where
    I: IntoIterator<Item = Either<A, B>>,
{
    Rights {
        iter: iter.into_iter(),
    }
}

/// Splits a sequence into its `Left` and `Right` payloads, each in order.
pub fn partition_eithers<A, B, I>(iter: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = Either<A, B>>,
{
    let mut ls = Vec::new();
    let mut rs = Vec::new();
    for e in iter {
        match e {
            Either::Left(a) => ls.push(a),
            Either::Right(b) => rs.push(b),
        }
    }
    (ls, rs)
}

//-----------------------------------------------------------------------------
// Extension Trait
//-----------------------------------------------------------------------------

/// Method syntax for the helpers above on any iterator of `Either`.
pub trait EitherIterExt<A, B>: Iterator<Item = Either<A, B>> + Sized {
    fn lefts(self) -> Lefts<Self> {
        lefts(self)
    }

    fn rights(self) -> Rights<Self> {
        rights(self)
    }

    fn partition_eithers(self) -> (Vec<A>, Vec<B>) {
        partition_eithers(self)
    }
}

impl<A, B, I> EitherIterExt<A, B> for I where I: Iterator<Item = Either<A, B>> {}
