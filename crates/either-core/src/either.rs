//! The `Either` sum type (A ⊕ B)
//!
//! A value of type `Either<A, B>` holds exactly one of an `A` (the `Left`
//! alternative) or a `B` (the `Right` alternative). The variant is fixed at
//! construction. [`Either::match_with`] is the elimination primitive every
//! other operation in this crate is written against.
//!
//! The enum is covariant in both parameters, so an
//! `Either<&'static str, &'static str>` can be used where an
//! `Either<&'a str, &'a str>` is expected.

use std::fmt;

//-----------------------------------------------------------------------------
// Either Value
//-----------------------------------------------------------------------------

/// A value that is either `Left(A)` or `Right(B)`, never both and never neither.
///
/// Equality compares the variant first and the payload second, so
/// `Left(x) != Right(x)` even when `A` and `B` coincide. The derived `Hash`
/// writes the discriminant before the payload and therefore agrees with `Eq`.
///
/// With the `serde` feature the value serializes as a two-field record,
/// `{"T": "L", "O": <payload>}` or `{"T": "R", "O": <payload>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "T", content = "O"))]
pub enum Either<A, B> {
    /// Left alternative
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    Left(A),
    /// Right alternative
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Right(B),
}

/// Wraps `a` in the `Left` alternative.
pub fn left<A, B>(a: A) -> Either<A, B> {
    Either::Left(a)
}

/// Wraps `b` in the `Right` alternative.
pub fn right<A, B>(b: B) -> Either<A, B> {
    Either::Right(b)
}

//-----------------------------------------------------------------------------
// Introduction Rules
//-----------------------------------------------------------------------------

/// Introduction rules for sums
pub trait EitherIntro<A, B> {
    /// inl : A ⊸ (A ⊕ B)
    fn intro_left(value: A) -> Self;

    /// inr : B ⊸ (A ⊕ B)
    fn intro_right(value: B) -> Self;
}

impl<A, B> EitherIntro<A, B> for Either<A, B> {
    fn intro_left(value: A) -> Self {
        Either::Left(value)
    }

    fn intro_right(value: B) -> Self {
        Either::Right(value)
    }
}

//-----------------------------------------------------------------------------
// Elimination Rule
//-----------------------------------------------------------------------------

/// Elimination rule for sums
pub trait EitherElim<A, B> {
    /// Eliminate by case analysis. Exactly one of the two cases runs,
    /// exactly once.
    /// case : (A ⊕ B) ⊗ (A ⊸ C) ⊗ (B ⊸ C) ⊸ C
    fn elim<R, F, G>(self, left_case: F, right_case: G) -> R
    where
        F: FnOnce(A) -> R,
        G: FnOnce(B) -> R;
}

impl<A, B> EitherElim<A, B> for Either<A, B> {
    fn elim<R, F, G>(self, left_case: F, right_case: G) -> R
    where
        F: FnOnce(A) -> R,
        G: FnOnce(B) -> R,
    {
        match self {
            Either::Left(a) => left_case(a),
            Either::Right(b) => right_case(b),
        }
    }
}

//-----------------------------------------------------------------------------
// Matching
//-----------------------------------------------------------------------------

impl<A, B> Either<A, B> {
    /// Create a left value (convenience)
    pub fn left(value: A) -> Self {
        <Self as EitherIntro<A, B>>::intro_left(value)
    }

    /// Create a right value (convenience)
    pub fn right(value: B) -> Self {
        <Self as EitherIntro<A, B>>::intro_right(value)
    }

    /// Pattern matches on this value and returns the result of the handler
    /// for the active variant. The other handler is dropped without being
    /// called. A panic inside the handler propagates unchanged.
    ///
    /// ```
    /// use either_core::Either;
    ///
    /// let e: Either<String, i32> = Either::right(21);
    /// assert_eq!(e.match_with(|s| s.len() as i32, |n| n * 2), 42);
    /// ```
    pub fn match_with<R, F, G>(self, f: F, g: G) -> R
    where
        F: FnOnce(A) -> R,
        G: FnOnce(B) -> R,
    {
        self.elim(f, g)
    }

    /// Runs the side-effecting handler for the active variant.
    pub fn accept<F, G>(self, f: F, g: G)
    where
        F: FnOnce(A),
        G: FnOnce(B),
    {
        self.match_with(f, g)
    }

    /// Runs the handler for the active variant on a borrow of the payload
    /// and hands back `self` untouched. Meant for inspection in the middle
    /// of a combinator chain:
    ///
    /// ```
    /// use either_core::Either;
    ///
    /// let seen = std::cell::RefCell::new(Vec::new());
    /// let e: Either<&str, i32> = Either::right(3);
    /// let e = e.peek(
    ///     |a| seen.borrow_mut().push(a.to_string()),
    ///     |b| seen.borrow_mut().push(b.to_string()),
    /// );
    /// assert_eq!(e, Either::Right(3));
    /// assert_eq!(seen.into_inner(), vec!["3"]);
    /// ```
    pub fn peek<F, G>(self, f: F, g: G) -> Self
    where
        F: FnOnce(&A),
        G: FnOnce(&B),
    {
        self.as_ref().accept(f, g);
        self
    }

    /// Emits a `debug` event naming the active variant and its payload,
    /// then returns `self`.
    pub fn trace(self, label: &str) -> Self
    where
        A: fmt::Debug,
        B: fmt::Debug,
    {
        self.peek(
            |a| tracing::debug!(label = label, variant = "Left", value = ?a, "either"),
            |b| tracing::debug!(label = label, variant = "Right", value = ?b, "either"),
        )
    }

    /// Borrows the payload: `&Either<A, B>` to `Either<&A, &B>`.
    pub fn as_ref(&self) -> Either<&A, &B> {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => Either::Right(b),
        }
    }

    /// Mutably borrows the payload.
    pub fn as_mut(&mut self) -> Either<&mut A, &mut B> {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => Either::Right(b),
        }
    }

    /// Check if this is a left value
    pub fn is_left(&self) -> bool {
        self.as_ref().match_with(|_| true, |_| false)
    }

    /// Check if this is a right value
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Try to extract the left value
    pub fn left_value(&self) -> Option<&A> {
        self.as_ref().match_with(Some, |_| None)
    }

    /// Try to extract the right value
    pub fn right_value(&self) -> Option<&B> {
        self.as_ref().match_with(|_| None, Some)
    }

    /// Consumes the value, keeping the left payload
    pub fn into_left(self) -> Option<A> {
        self.match_with(Some, |_| None)
    }

    /// Consumes the value, keeping the right payload
    pub fn into_right(self) -> Option<B> {
        self.match_with(|_| None, Some)
    }

    /// Swaps the alternatives.
    pub fn flip(self) -> Either<B, A> {
        self.match_with(right, left)
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    pub fn into_result(self) -> Result<B, A> {
        self.match_with(Err, Ok)
    }
}

impl<T> Either<T, T> {
    /// Extracts the payload when both alternatives share a type.
    pub fn into_inner(self) -> T {
        self.match_with(|t| t, |t| t)
    }
}

//-----------------------------------------------------------------------------
// Conversions and Formatting
//-----------------------------------------------------------------------------

impl<A, B> From<Result<B, A>> for Either<A, B> {
    fn from(result: Result<B, A>) -> Self {
        match result {
            Ok(b) => Either::Right(b),
            Err(a) => Either::Left(a),
        }
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Either<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(a) => write!(f, "Left({})", a),
            Either::Right(b) => write!(f, "Right({})", b),
        }
    }
}
