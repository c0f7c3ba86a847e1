//! # foldwise
//!
//! Monoids, an optional `Maybe` type, and the `Foldable`/`Traversable`
//! type classes, with instances for native lists (`Vec<T>`).
//!
//! ## Overview
//!
//! - **Type Classes**: Semigroup, Monoid, Applicative, Foldable, Traversable
//! - **Monoid Wrappers**: [`Sum`](typeclass::Sum) and [`Product`](typeclass::Product)
//! - **Optional Values**: [`Maybe`](control::Maybe) with `Just` / `Nothing`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and list operations
//! - `control`: The `Maybe` type and its instances
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`, `Sum` and `Product`
//! - `tracing`: Emit `tracing` events when a traversal short-circuits
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use foldwise::prelude::*;
//!
//! assert_eq!(fold_map(Sum, vec![1, 2, 3, 4]), Sum::new(10));
//!
//! fn safe_parse_int(text: &str) -> Maybe<i32> {
//!     text.parse().map_or_else(|_| nothing(), just)
//! }
//!
//! let parsed = traverse(MaybeApplicative, safe_parse_int, vec!["1", "2", "3"]);
//! assert_eq!(parsed, just(vec![1, 2, 3]));
//!
//! let parsed = traverse(MaybeApplicative, safe_parse_int, vec!["1", "two", "3"]);
//! assert_eq!(parsed, nothing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use foldwise::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
