//! Functor instance for `Either<E, _>`
//!
//! Laws:
//! - identity: `map(|x| x, e) == e`
//! - composition: `map(|x| g(f(x)), e) == map(g, map(f, e))`

use crate::either::{left, right, Either};

/// Applies `f` to a `Right` payload. A `Left` is rebuilt with the same payload.
///
/// ```
/// use either_core::{algebra::map, Either};
///
/// let e: Either<String, i32> = Either::right(2);
/// assert_eq!(map(|n| n * 10, e), Either::Right(20));
/// ```
pub fn map<E, A, B, F>(f: F, e: Either<E, A>) -> Either<E, B>
where
    F: FnOnce(A) -> B,
{
    e.match_with(left, |a| right(f(a)))
}

/// Curried form of [`map`], reusable across many values.
pub fn map_fn<E, A, B, F>(f: F) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    F: Fn(A) -> B,
{
    move |e| map(&f, e)
}

/// Applies `f` to a `Left` payload.
pub fn map_left<E, D, A, F>(f: F, e: Either<E, A>) -> Either<D, A>
where
    F: FnOnce(E) -> D,
{
    e.match_with(|l| left(f(l)), right)
}

/// Maps whichever side is active.
pub fn bimap<E, D, A, B, F, G>(f: F, g: G, e: Either<E, A>) -> Either<D, B>
where
    F: FnOnce(E) -> D,
    G: FnOnce(A) -> B,
{
    e.match_with(|l| left(f(l)), |a| right(g(a)))
}

/// Standalone spelling of `e.match_with(f, g)`.
pub fn either<A, B, C, F, G>(f: F, g: G, e: Either<A, B>) -> C
where
    F: FnOnce(A) -> C,
    G: FnOnce(B) -> C,
{
    e.match_with(f, g)
}

/// Turns two handlers into a function over `Either`, for use with iterator
/// adapters such as `Iterator::map`.
///
/// ```
/// use either_core::{algebra::either_fn, Either};
///
/// let describe = either_fn(|s: &str| s.len(), |n: usize| n);
/// let sizes: Vec<usize> = vec![Either::Left("abc"), Either::Right(7)]
///     .into_iter()
///     .map(describe)
///     .collect();
/// assert_eq!(sizes, vec![3, 7]);
/// ```
pub fn either_fn<A, B, C, F, G>(f: F, g: G) -> impl Fn(Either<A, B>) -> C
where
    F: Fn(A) -> C,
    G: Fn(B) -> C,
{
    move |e| e.match_with(&f, &g)
}

impl<E, A> Either<E, A> {
    /// Method form of [`map`].
    pub fn map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        map(f, self)
    }

    /// Method form of [`map_left`].
    pub fn map_left<D, F>(self, f: F) -> Either<D, A>
    where
        F: FnOnce(E) -> D,
    {
        map_left(f, self)
    }

    /// Method form of [`bimap`].
    pub fn bimap<D, B, F, G>(self, f: F, g: G) -> Either<D, B>
    where
        F: FnOnce(E) -> D,
        G: FnOnce(A) -> B,
    {
        bimap(f, g, self)
    }
}
