//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` (in addition to associativity):
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use foldwise::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::<i32>::empty(), Sum::new(0));
//! assert_eq!(Sum::empty().combine(Sum::new(7)), Sum::new(7));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A type class for semigroups with an identity element.
///
/// [`fold_map`](super::fold_map) seeds its fold with [`Monoid::empty`], so an
/// empty list folds to the identity.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// `Default` of every primitive number is zero.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($number:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$number> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_empty_is_zero() {
        assert_eq!(Sum::<i32>::empty(), Sum(0));
        assert_eq!(Sum::<u64>::empty(), Sum(0));
        assert_eq!(Sum::<f32>::empty(), Sum(0.0));
    }

    #[rstest]
    fn product_empty_is_one() {
        assert_eq!(Product::<i32>::empty(), Product(1));
        assert_eq!(Product::<u8>::empty(), Product(1));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
    }

    #[rstest]
    fn string_and_vec_empty() {
        assert_eq!(String::empty(), "");
        assert!(Vec::<i32>::empty().is_empty());
    }

    #[rstest]
    fn option_empty_is_none() {
        assert_eq!(Option::<Sum<i32>>::empty(), None);
    }

    #[rstest]
    fn pair_empty_is_componentwise() {
        assert_eq!(<(Sum<i32>, String)>::empty(), (Sum(0), String::new()));
    }

    #[rstest]
    #[case(vec![], Sum(0))]
    #[case(vec![5], Sum(5))]
    #[case(vec![1, 2, 3, 4], Sum(10))]
    fn sum_combine_all(#[case] values: Vec<i32>, #[case] expected: Sum<i32>) {
        assert_eq!(Sum::combine_all(values.into_iter().map(Sum)), expected);
    }

    #[rstest]
    fn product_combine_all_of_empty_is_one() {
        assert_eq!(Product::<i64>::combine_all(Vec::new()), Product(1));
    }
}
