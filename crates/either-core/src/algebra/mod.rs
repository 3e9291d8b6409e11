//! Combinators over `Either<E, _>`
//!
//! The left type `E` is held fixed and the combinators act on the right
//! payload, so `Either<E, _>` behaves as a functor, an applicative and a
//! monad. Every combinator is written in terms of
//! [`Either::match_with`](crate::Either::match_with) and none of them has side effects.
//!
//! Multi-argument combinators are left-biased: the first `Left` encountered,
//! scanning arguments in order, is the result.

/// Functor: `map` and friends
pub mod functor;

/// Applicative: `pure`, `sequential`, `lift_a2`
pub mod applicative;

/// Monad: `bind` and Kleisli composition
pub mod monad;

//-----------------------------------------------------------------------------
// Re-exports
//-----------------------------------------------------------------------------

pub use functor::{bimap, either, either_fn, map, map_fn, map_left};
pub use applicative::{apply, lift_a2, lift_a2_fn, pure, sequential, sequential_fn};
pub use monad::{bind, bind_fn, compose_kleisli};
