//! Monad instance for `Either<E, _>`
//!
//! Laws:
//! - left identity: `bind(pure(a), f) == f(a)`
//! - right identity: `bind(e, pure) == e`
//! - associativity: `bind(bind(e, f), g) == bind(e, |a| bind(f(a), g))`

use crate::either::{left, Either};

/// Feeds a `Right` payload to `f` and returns its result as is. A `Left` is
/// returned without calling `f`.
///
/// ```
/// use either_core::{algebra::bind, Either};
///
/// fn half(n: i32) -> Either<String, i32> {
///     if n % 2 == 0 {
///         Either::right(n / 2)
///     } else {
///         Either::left(format!("{} is odd", n))
///     }
/// }
///
/// assert_eq!(bind(Either::right(8), half), Either::Right(4));
/// assert_eq!(bind(bind(Either::right(6), half), half), Either::Left("3 is odd".to_string()));
/// ```
pub fn bind<E, A, B, F>(e: Either<E, A>, f: F) -> Either<E, B>
where
    F: FnOnce(A) -> Either<E, B>,
{
    e.match_with(left, f)
}

/// Curried form of [`bind`].
pub fn bind_fn<E, A, B, F>(f: F) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    F: Fn(A) -> Either<E, B>,
{
    move |e| bind(e, &f)
}

/// Kleisli composition: runs `f`, then feeds its `Right` into `g`.
pub fn compose_kleisli<E, A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Either<E, C>
where
    F: Fn(A) -> Either<E, B>,
    G: Fn(B) -> Either<E, C>,
{
    move |a| bind(f(a), &g)
}

impl<E, A> Either<E, A> {
    /// Method form of [`bind`].
    pub fn and_then<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        bind(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::pure;
    use crate::either::right;

    fn parse(s: &str) -> Either<String, i32> {
        s.parse::<i32>()
            .map_err(|e| format!("{}: {}", s, e))
            .into()
    }

    fn positive(n: i32) -> Either<String, i32> {
        if n > 0 {
            right(n)
        } else {
            left(format!("{} is not positive", n))
        }
    }

    #[test]
    fn test_bind_left_skips_function() {
        let e: Either<String, &str> = left("already failed".to_string());
        let out = bind(e, |_| -> Either<String, i32> { panic!("must not run") });
        assert_eq!(out, left("already failed".to_string()));
    }

    #[test]
    fn test_bind_returns_function_result_unwrapped() {
        assert_eq!(bind(right("12"), parse), right(12));
        assert!(bind(right("x"), parse).is_left());
    }

    #[test]
    fn test_and_then_chain() {
        let ok = pure::<String, _>("5").and_then(parse).and_then(positive);
        assert_eq!(ok, right(5));
        let bad = pure::<String, _>("-5").and_then(parse).and_then(positive);
        assert_eq!(bad, left("-5 is not positive".to_string()));
    }

    #[test]
    fn test_bind_fn_and_kleisli() {
        let check = bind_fn(positive);
        assert_eq!(check(right(3)), right(3));
        assert_eq!(check(left("upstream".to_string())), left("upstream".to_string()));

        let parse_positive = compose_kleisli(parse, positive);
        assert_eq!(parse_positive("7"), right(7));
        assert_eq!(parse_positive("0"), left("0 is not positive".to_string()));
    }
}
