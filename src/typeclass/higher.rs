//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! `Traversable` has to describe its output as "this container, holding a
//! different element type". Rust cannot abstract over `Vec<_>` as a type
//! constructor directly, so [`TypeConstructor`] records the current element
//! type and a GAT that re-applies the constructor to another one.
//!
//! # Example
//!
//! ```rust
//! use foldwise::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let lengths: Vec<String> = empty_like(&vec![1, 2, 3]);
//! assert!(lengths.is_empty());
//! ```

/// A type constructor applied to its current element type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` must be `F` itself.
pub trait TypeConstructor {
    /// The element type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
