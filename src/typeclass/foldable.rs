//! Foldable type class - collapsing a structure into a summary value.
//!
//! [`Foldable`] is the trait; [`fold`], [`fold_map`] and [`size`] are the
//! list operations written against it. All of them visit elements in order,
//! first element first, and consume nothing but the structure passed in.
//!
//! # Properties
//!
//! ```text
//! fold(|x, mut acc| { acc.push(x); acc }, vec![], s) == s      // order preserved
//! size(&s) == fold(|_, acc| acc + 1, 0, s)
//! fold_map(M, s) == fold(|x, acc| acc.combine(M(x)), M::empty(), s)
//! fold_map(M, vec![]) == M::empty()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use foldwise::typeclass::{fold, fold_map, size, Sum};
//!
//! let numbers = vec![1, 2, 3, 4];
//!
//! assert_eq!(fold_map(Sum, numbers.clone()), Sum::new(10));
//! assert_eq!(size(&numbers), 4);
//!
//! let digits = fold(|number, accumulator: String| accumulator + &number.to_string(), String::new(), numbers);
//! assert_eq!(digits, "1234");
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: fold from the first element to the last
/// - `fold_right`: fold from the last element to the first
///
/// # Provided Methods
///
/// `fold_map`, `length`, `is_empty`, `to_list`, `find`, `exists` and
/// `for_all` are derived from `fold_left`. Instances may override `length`
/// and `is_empty` when the container already knows its size.
pub trait Foldable: TypeConstructor {
    /// Folds from left to right: `function(function(init, first), second)...`.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from right to left: `function(first, function(second, ... init))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::typeclass::Foldable;
    ///
    /// let reversed = vec![1, 2, 3].fold_right(Vec::new(), |element, mut accumulator| {
    ///     accumulator.push(element);
    ///     accumulator
    /// });
    /// assert_eq!(reversed, vec![3, 2, 1]);
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Embeds each element into a monoid and combines the results in order.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure has no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::typeclass::Foldable;
    ///
    /// assert_eq!(vec![1, 5, 8, 9].find(|number| number % 2 == 0), Some(8));
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(predicate).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`; vacuously true
    /// for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// List Operations
// =============================================================================

/// Returns the number of elements in `values`.
///
/// Agrees with `fold(|_, count| count + 1, 0, values)`.
///
/// # Examples
///
/// ```rust
/// use foldwise::typeclass::size;
///
/// assert_eq!(size(&vec![1, 2, 3, 4]), 4);
/// assert_eq!(size(&Vec::<i32>::new()), 0);
/// ```
pub fn size<S>(values: &S) -> usize
where
    S: Foldable + Clone,
{
    values.length()
}

/// Reduces `values` left to right, starting from `seed`.
///
/// `combine` receives the element first and the accumulator second. An empty
/// structure returns `seed` unchanged.
///
/// # Examples
///
/// ```rust
/// use foldwise::typeclass::fold;
///
/// let rebuilt = fold(
///     |number, mut accumulator: Vec<i32>| {
///         accumulator.push(number);
///         accumulator
///     },
///     Vec::new(),
///     vec![1, 2, 3, 4],
/// );
/// assert_eq!(rebuilt, vec![1, 2, 3, 4]);
///
/// assert_eq!(fold(|number: i32, total| total + number, 7, Vec::<i32>::new()), 7);
/// ```
pub fn fold<S, B, F>(mut combine: F, seed: B, values: S) -> B
where
    S: Foldable,
    F: FnMut(S::Inner, B) -> B,
{
    values.fold_left(seed, |accumulator, element| combine(element, accumulator))
}

/// Embeds each element with `monoid` and combines the results in order,
/// starting from the monoid's identity.
///
/// `monoid` is the embedding into the monoid's carrier, typically a wrapper
/// constructor such as [`Sum`](super::Sum) or [`Product`](super::Product).
///
/// # Examples
///
/// ```rust
/// use foldwise::typeclass::{fold_map, Product, Sum};
///
/// assert_eq!(fold_map(Sum, vec![1, 2, 3, 4]), Sum::new(10));
/// assert_eq!(fold_map(Product, vec![1, 2, 3, 4]), Product::new(24));
/// assert_eq!(fold_map(Sum, Vec::<i32>::new()), Sum::new(0));
///
/// let joined: String = fold_map(|word: &str| word.to_uppercase(), vec!["a", "b"]);
/// assert_eq!(joined, "AB");
/// ```
pub fn fold_map<S, M, F>(mut monoid: F, values: S) -> M
where
    S: Foldable,
    M: Monoid,
    F: FnMut(S::Inner) -> M,
{
    fold(
        |element, accumulator: M| accumulator.combine(monoid(element)),
        M::empty(),
        values,
    )
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}
