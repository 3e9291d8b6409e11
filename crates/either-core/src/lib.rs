// Either Core Library
//
// A two-variant sum type and its combinator algebra.

// =================================================================
// Core component modules
// =================================================================

// Sum Type
// The `Either` value, its introduction and elimination rules, and the
// side-effecting inspection helpers
pub mod either;

// Combinator Algebra
// Functor, applicative and monad combinators over `Either<E, _>`
pub mod algebra;

// Iterator Helpers
// Lazy `lefts`/`rights` filtering and partitioning
pub mod iter;

// Tagged Record Codec
// JSON and binary encoding through a discriminant + payload record
#[cfg(feature = "serde")]
pub mod codec;

// Re-export important types for easier access
pub use either::{left, right, Either, EitherElim, EitherIntro};
pub use iter::{lefts, partition_eithers, rights, EitherIterExt};

pub use either_error::{CodecError, CodecResult};

/// Commonly used items in one import
pub mod prelude {
    pub use crate::algebra::{
        apply, bimap, bind, either, either_fn, lift_a2, map, map_left, pure, sequential,
    };
    pub use crate::either::{left, right, Either, EitherElim, EitherIntro};
    pub use crate::iter::EitherIterExt;
}
