//! Applicative type class - lifting values and combining wrapped values.
//!
//! An [`Applicative`] here is a *capability descriptor*: a value (usually a
//! zero-sized unit struct) whose trait implementation knows how to lift a
//! plain value into a wrapper and how to combine two wrapped values. Generic
//! functions such as [`traverse`](super::traverse) take the descriptor as an
//! explicit argument, so the caller chooses the effect by value:
//!
//! ```rust
//! use foldwise::typeclass::{traverse, OptionApplicative, ResultApplicative};
//!
//! let parsed = traverse(OptionApplicative, |text: &str| text.parse::<i32>().ok(), vec!["1", "2"]);
//! assert_eq!(parsed, Some(vec![1, 2]));
//!
//! let checked = traverse(
//!     ResultApplicative::new(),
//!     |number: i32| if number > 0 { Ok(number) } else { Err("not positive") },
//!     vec![3, -1, 4],
//! );
//! assert_eq!(checked, Err("not positive"));
//! ```
//!
//! # Laws
//!
//! For a descriptor `ap`, all `x`, `y`, functions `f`, and wrapped `v`:
//!
//! ```text
//! ap.map(v, |a| a) == v                                    // identity
//! ap.map(ap.pure(x), f) == ap.pure(f(x))                   // homomorphism
//! ap.map2(ap.pure(x), ap.pure(y), f) == ap.pure(f(x, y))
//! ```
//!
//! `map2` must yield the absent case whenever either operand is absent.

use std::fmt;
use std::marker::PhantomData;

/// Capability descriptor for an applicative wrapper.
///
/// # Required Methods
///
/// - `pure`: lift a plain value
/// - `map2`: combine two wrapped values, absent if either is absent
///
/// # Provided Methods
///
/// - `map`, `product`: derived from `map2` and `pure`
/// - `is_absent`: reports a value that can never become present again,
///   letting traversals stop early; the default never reports absence
pub trait Applicative {
    /// The wrapper this descriptor operates on, applied to `A`.
    type Wrapped<A>;

    /// Lifts a plain value into the wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::typeclass::{Applicative, OptionApplicative};
    ///
    /// assert_eq!(OptionApplicative.pure(42), Some(42));
    /// ```
    fn pure<A>(&self, value: A) -> Self::Wrapped<A>;

    /// Combines two wrapped values with `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::typeclass::{Applicative, OptionApplicative};
    ///
    /// assert_eq!(OptionApplicative.map2(Some(1), Some(2), |a, b| a + b), Some(3));
    /// assert_eq!(OptionApplicative.map2(Some(1), None::<i32>, |a, b| a + b), None);
    /// ```
    fn map2<A, B, C, F>(
        &self,
        left: Self::Wrapped<A>,
        right: Self::Wrapped<B>,
        function: F,
    ) -> Self::Wrapped<C>
    where
        F: FnOnce(A, B) -> C;

    /// Applies `function` inside the wrapper.
    fn map<A, B, F>(&self, value: Self::Wrapped<A>, function: F) -> Self::Wrapped<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map2(value, self.pure(()), |inner, ()| function(inner))
    }

    /// Pairs two wrapped values.
    fn product<A, B>(&self, left: Self::Wrapped<A>, right: Self::Wrapped<B>) -> Self::Wrapped<(A, B)> {
        self.map2(left, right, |first, second| (first, second))
    }

    /// Returns `true` when `value` is the absent case.
    ///
    /// Only a value for which every later `map2` is also absent may be
    /// reported here.
    fn is_absent<A>(&self, _value: &Self::Wrapped<A>) -> bool {
        false
    }
}

// =============================================================================
// Option
// =============================================================================

/// Applicative descriptor for `Option`: `None` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionApplicative;

impl Applicative for OptionApplicative {
    type Wrapped<A> = Option<A>;

    #[inline]
    fn pure<A>(&self, value: A) -> Option<A> {
        Some(value)
    }

    fn map2<A, B, C, F>(&self, left: Option<A>, right: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (left, right) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }

    #[inline]
    fn map<A, B, F>(&self, value: Option<A>, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        value.map(function)
    }

    #[inline]
    fn is_absent<A>(&self, value: &Option<A>) -> bool {
        value.is_none()
    }
}

// =============================================================================
// Result
// =============================================================================

/// Applicative descriptor for `Result<_, E>`: an `Err` is absent and the
/// leftmost error wins.
pub struct ResultApplicative<E>(PhantomData<fn() -> E>);

impl<E> ResultApplicative<E> {
    /// Creates the descriptor for error type `E`.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for ResultApplicative<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ResultApplicative<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultApplicative<E> {}

impl<E> fmt::Debug for ResultApplicative<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResultApplicative")
    }
}

impl<E> Applicative for ResultApplicative<E> {
    type Wrapped<A> = Result<A, E>;

    #[inline]
    fn pure<A>(&self, value: A) -> Result<A, E> {
        Ok(value)
    }

    fn map2<A, B, C, F>(&self, left: Result<A, E>, right: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        match (left, right) {
            (Ok(left), Ok(right)) => Ok(function(left, right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map<A, B, F>(&self, value: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        value.map(function)
    }

    #[inline]
    fn is_absent<A>(&self, value: &Result<A, E>) -> bool {
        value.is_err()
    }
}
