//! Control structures built on the type classes.
//!
//! - [`Maybe`]: an optional value, `Just(a)` or `Nothing`
//! - [`MaybeApplicative`]: the applicative descriptor used to traverse with
//!   `Maybe`
//!
//! # Examples
//!
//! ```rust
//! use foldwise::control::{just, nothing, Maybe, MaybeApplicative};
//! use foldwise::typeclass::sequence;
//!
//! let all: Vec<Maybe<i32>> = vec![just(1), just(2)];
//! assert_eq!(sequence(MaybeApplicative, all), just(vec![1, 2]));
//!
//! let gap: Vec<Maybe<i32>> = vec![just(1), nothing(), just(3)];
//! assert_eq!(sequence(MaybeApplicative, gap), nothing());
//! ```

mod maybe;

pub use maybe::{just, nothing, Maybe, MaybeApplicative, NothingError};
