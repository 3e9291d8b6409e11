//! Applicative instance for `Either<E, _>`

use super::functor::map;
use crate::either::{left, right, Either};

/// Lifts a value into `Either<E, _>`. Same as [`right`].
pub fn pure<E, A>(a: A) -> Either<E, A> {
    right(a)
}

/// Sequential application.
///
/// `ef` is inspected first: if it is `Left` that value is returned and `ea`
/// is never looked at. Otherwise a `Left` in `ea` is returned, and only when
/// both are `Right` is the function applied.
///
/// ```
/// use either_core::{algebra::sequential, Either};
///
/// let ef: Either<&str, fn(i32) -> i32> = Either::right(|n| n + 1);
/// assert_eq!(sequential(ef, Either::right(1)), Either::Right(2));
/// assert_eq!(sequential(ef, Either::left("bad input")), Either::Left("bad input"));
/// ```
pub fn sequential<E, A, B, F>(ef: Either<E, F>, ea: Either<E, A>) -> Either<E, B>
where
    F: FnOnce(A) -> B,
{
    ef.match_with(left, |f| map(f, ea))
}

/// Alias of [`sequential`] under its usual name.
pub fn apply<E, A, B, F>(ef: Either<E, F>, ea: Either<E, A>) -> Either<E, B>
where
    F: FnOnce(A) -> B,
{
    sequential(ef, ea)
}

/// Curried form of [`sequential`]. The wrapped function is shared by every
/// call and a wrapped `Left` is cloned out on each call.
pub fn sequential_fn<E, A, B, F>(ef: Either<E, F>) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    E: Clone,
    F: Fn(A) -> B,
{
    move |ea| ef.as_ref().match_with(|e| left(e.clone()), |f| map(f, ea))
}

/// Lifts a binary function over two `Either` values, checking `ea` before `eb`.
///
/// ```
/// use either_core::{algebra::lift_a2, Either};
///
/// let a: Either<String, i32> = Either::right(2);
/// let b: Either<String, i32> = Either::right(3);
/// assert_eq!(lift_a2(|x, y| x * y, a, b), Either::Right(6));
/// ```
pub fn lift_a2<E, A, B, C, F>(f: F, ea: Either<E, A>, eb: Either<E, B>) -> Either<E, C>
where
    F: FnOnce(A, B) -> C,
{
    ea.match_with(left, |a| eb.match_with(left, |b| right(f(a, b))))
}

/// Curried form of [`lift_a2`].
pub fn lift_a2_fn<E, A, B, C, F>(f: F) -> impl Fn(Either<E, A>, Either<E, B>) -> Either<E, C>
where
    F: Fn(A, B) -> C,
{
    move |ea, eb| lift_a2(&f, ea, eb)
}
