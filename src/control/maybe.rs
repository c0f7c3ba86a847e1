//! Maybe type - a value that may be absent.
//!
//! `Maybe<A>` is either `Just(a)` or `Nothing`. It behaves like `Option<A>`
//! and converts to and from it freely; its purpose here is to be the
//! wrapper that [`MaybeApplicative`] traverses with.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::control::{just, nothing, Maybe};
//!
//! let present = just(20).map(|n| n + 1).filter(|n| n % 3 == 0);
//! assert_eq!(present, just(21));
//!
//! let absent: Maybe<i32> = nothing();
//! assert_eq!(absent.fold(|| String::from("none"), |n| n.to_string()), "none");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Foldable, Monoid, Semigroup, Traversable, TypeConstructor};

/// An optional value: `Just(a)` or `Nothing`.
///
/// Equality is structural, so every `Nothing` equals every other `Nothing`.
///
/// # Examples
///
/// ```rust
/// use foldwise::control::Maybe;
///
/// let value = Maybe::just(42);
/// assert!(value.is_just());
/// assert_eq!(value.into_option(), Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    Nothing,
}

/// Wraps `value` in `Just`.
#[inline]
pub const fn just<A>(value: A) -> Maybe<A> {
    Maybe::Just(value)
}

/// Returns `Nothing`.
#[inline]
pub const fn nothing<A>() -> Maybe<A> {
    Maybe::Nothing
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction and Queries
    // =========================================================================

    /// Wraps `value` in `Just`.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Returns `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to a present value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::control::{just, nothing, Maybe};
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { just(n / 2) } else { nothing() }
    /// }
    ///
    /// assert_eq!(just(8).and_then(half).and_then(half), just(2));
    /// assert_eq!(just(6).and_then(half).and_then(half), nothing());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative(),
        }
    }

    /// Keeps a present value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Pairs two present values; `Nothing` if either is absent.
    #[inline]
    pub fn zip<B>(self, other: Maybe<B>) -> Maybe<(A, B)> {
        match (self, other) {
            (Self::Just(left), Maybe::Just(right)) => Maybe::Just((left, right)),
            _ => Maybe::Nothing,
        }
    }

    /// Eliminates the `Maybe`: `on_nothing()` for `Nothing`, `on_just(a)` for
    /// `Just(a)`.
    #[inline]
    pub fn fold<B, N, J>(self, on_nothing: N, on_just: J) -> B
    where
        N: FnOnce() -> B,
        J: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the value or computes one.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Returns the value or `A::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> A
    where
        A: Default,
    {
        self.unwrap_or_else(A::default)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts to `Result`, using `error` for `Nothing`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<A, E> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(error),
        }
    }

    /// Converts to `Result`, failing with [`NothingError`] for `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns [`NothingError`] when `self` is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::control::{just, nothing, Maybe, NothingError};
    ///
    /// assert_eq!(just(1).into_result(), Ok(1));
    /// assert_eq!(nothing::<i32>().into_result(), Err(NothingError));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<A, NothingError> {
        self.ok_or(NothingError)
    }

    /// Converts to `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.into()
    }

    /// Iterates over the contained value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_ref().into_iter()
    }
}

/// Defaults to `Nothing`, whatever `A` is.
impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Error
// =============================================================================

/// Returned by [`Maybe::into_result`] when there is no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NothingError;

impl fmt::Display for NothingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("expected Just but found Nothing")
    }
}

impl std::error::Error for NothingError {}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Nothing` is neutral, as for `Option`.
impl<A: Semigroup> Semigroup for Maybe<A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

impl<A: Semigroup> Monoid for Maybe<A> {
    fn empty() -> Self {
        Self::Nothing
    }
}

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Just(value) => function(init, value),
            Self::Nothing => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Just(value) => function(value, init),
            Self::Nothing => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_nothing()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_just())
    }
}

impl<A> Traversable for Maybe<A> {
    fn traverse_with<D, B, F>(self, applicative: D, mut function: F) -> D::Wrapped<Maybe<B>>
    where
        D: Applicative,
        F: FnMut(A) -> D::Wrapped<B>,
    {
        match self {
            Self::Just(value) => applicative.map(function(value), Maybe::Just),
            Self::Nothing => applicative.pure(Maybe::Nothing),
        }
    }
}

/// Applicative descriptor for [`Maybe`]: `Nothing` is absent.
///
/// # Examples
///
/// ```rust
/// use foldwise::control::{just, nothing, Maybe, MaybeApplicative};
/// use foldwise::typeclass::Applicative;
///
/// assert_eq!(MaybeApplicative.pure(3), just(3));
/// assert_eq!(MaybeApplicative.map2(just(3), just(4), |a, b| a * b), just(12));
/// assert_eq!(MaybeApplicative.map2(just(3), nothing::<i32>(), |a, b| a * b), nothing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaybeApplicative;

impl Applicative for MaybeApplicative {
    type Wrapped<A> = Maybe<A>;

    #[inline]
    fn pure<A>(&self, value: A) -> Maybe<A> {
        Maybe::Just(value)
    }

    fn map2<A, B, C, F>(&self, left: Maybe<A>, right: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        left.zip(right).map(|(left, right)| function(left, right))
    }

    #[inline]
    fn map<A, B, F>(&self, value: Maybe<A>, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        value.map(function)
    }

    #[inline]
    fn is_absent<A>(&self, value: &Maybe<A>) -> bool {
        value.is_nothing()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(MaybeApplicative: Send, Sync, Copy, Default);
