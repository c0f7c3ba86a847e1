//! Numeric wrapper types selecting a monoid for a number.
//!
//! A number can be combined by addition or by multiplication. The newtypes
//! here pick one, so the same `i32` folds to a total under [`Sum`] and to a
//! product under [`Product`].
//!
//! Both tuple-struct constructors are plain functions `A -> Wrapper<A>`, which
//! makes them usable as the monoid argument of [`fold_map`](super::fold_map):
//!
//! ```rust
//! use foldwise::typeclass::{fold_map, Product, Sum};
//!
//! assert_eq!(fold_map(Sum, vec![1, 2, 3, 4]), Sum::new(10));
//! assert_eq!(fold_map(Product, vec![1, 2, 3, 4]), Product::new(24));
//! ```

use std::fmt;

// =============================================================================
// Sum Wrapper
// =============================================================================

/// The additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`, identity `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use foldwise::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value in the additive monoid.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::typeclass::{fold_map, Sum};
    ///
    /// let total: i64 = fold_map(Sum, vec![10_i64, 20, 30]).into_inner();
    /// assert_eq!(total, 60);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped number.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Sum<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Sum({})", self.0)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// The multiplicative monoid: `Product(a).combine(Product(b)) == Product(a * b)`,
/// identity `Product(1)`.
///
/// `Default` is deliberately not derived: the default of a number is its
/// additive identity, not its multiplicative one.
///
/// # Examples
///
/// ```rust
/// use foldwise::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
/// assert_eq!(Product::<i32>::empty(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value in the multiplicative monoid.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the number.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped number.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Product<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Product({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_new_wraps_the_value() {
        assert_eq!(Sum::new(42), Sum(42));
    }

    #[rstest]
    fn sum_into_inner_unwraps() {
        assert_eq!(Sum::new(42).into_inner(), 42);
    }

    #[rstest]
    fn sum_as_inner_borrows() {
        let total = Sum::new(String::from("10"));
        assert_eq!(total.as_inner(), "10");
    }

    #[rstest]
    fn sum_default_is_zero() {
        assert_eq!(Sum::<i32>::default(), Sum(0));
        assert_eq!(Sum::<f64>::default(), Sum(0.0));
    }

    #[rstest]
    fn sum_from_value() {
        let total: Sum<u8> = 7.into();
        assert_eq!(total, Sum(7));
    }

    #[rstest]
    #[case(Sum(10), "Sum(10)")]
    #[case(Sum(-3), "Sum(-3)")]
    fn sum_display(#[case] total: Sum<i32>, #[case] expected: &str) {
        assert_eq!(total.to_string(), expected);
    }

    #[rstest]
    fn product_new_wraps_the_value() {
        assert_eq!(Product::new(6), Product(6));
        assert_eq!(Product::new(6).into_inner(), 6);
        assert_eq!(*Product::new(6).as_inner(), 6);
    }

    #[rstest]
    fn product_from_value() {
        let product: Product<i64> = 9.into();
        assert_eq!(product, Product(9));
    }

    #[rstest]
    fn product_display() {
        assert_eq!(Product(24).to_string(), "Product(24)");
    }
}
