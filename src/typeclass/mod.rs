//! Type class traits and the list operations built on them.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Applicative`]: Capability descriptor for lifting and combining wrapped values
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Traversable`]: Traversing structures with an applicative effect
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to describe
//! "the same container with a different element type", which `Traversable`
//! needs to name its result. [`Applicative`] instances are zero-sized
//! descriptor values that carry their wrapper as a GAT, so generic functions
//! receive the capability as an ordinary argument.
//!
//! ## List Operations
//!
//! | Function | Description |
//! |---|---|
//! | [`size`] | Number of elements |
//! | [`fold`] | Left-to-right reduction from a seed |
//! | [`fold_map`] | Embed each element into a monoid and combine |
//! | [`traverse`] | Map through a wrapping function, collecting inside the wrapper |
//! | [`sequence`] | Turn a list of wrapped values into a wrapped list |
//!
//! # Examples
//!
//! ```rust
//! use foldwise::typeclass::{fold, fold_map, size, Sum, Product};
//!
//! let numbers = vec![1, 2, 3, 4];
//! assert_eq!(size(&numbers), 4);
//! assert_eq!(fold_map(Sum, numbers.clone()), Sum::new(10));
//! assert_eq!(fold_map(Product, numbers.clone()), Product::new(24));
//!
//! let rebuilt = fold(|number, mut accumulator: Vec<i32>| {
//!     accumulator.push(number);
//!     accumulator
//! }, Vec::new(), numbers.clone());
//! assert_eq!(rebuilt, numbers);
//! ```
//!
//! ```rust
//! use foldwise::typeclass::{sequence, OptionApplicative};
//!
//! assert_eq!(sequence(OptionApplicative, vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! assert_eq!(sequence(OptionApplicative, vec![Some(1), None]), None);
//! ```

mod applicative;
mod foldable;
mod higher;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::{Applicative, OptionApplicative, ResultApplicative};
pub use foldable::{Foldable, fold, fold_map, size};
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::{Traversable, sequence, traverse};
pub use wrappers::{Product, Sum};
