//! Traversable type class - mapping with an effect and collecting the results.
//!
//! Consider a list of strings that should all parse as integers. The parse
//! returns a wrapped value (`Maybe<i32>`, `Option<i32>`, `Result<i32, E>`),
//! and what is wanted is one wrapped list:
//!
//! - every element present: the wrapped list of all results, in order
//! - any element absent: the absent case
//!
//! [`traverse`] does exactly that for any [`Applicative`] descriptor, and
//! [`sequence`] does it for a list whose elements are already wrapped.
//!
//! # Algorithm
//!
//! Both are a left fold whose accumulator is the wrapped output list, seeded
//! with `pure(vec![])`. Each step maps the next element and joins it onto the
//! accumulator with `map2`. Once the descriptor reports the accumulator
//! absent, the remaining elements are skipped without being mapped.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::typeclass::{sequence, traverse, OptionApplicative};
//!
//! let numbers = traverse(OptionApplicative, |text: &str| text.parse::<i32>().ok(), vec!["1", "2", "3"]);
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let numbers = traverse(OptionApplicative, |text: &str| text.parse::<i32>().ok(), vec!["1", "two", "3"]);
//! assert_eq!(numbers, None);
//!
//! assert_eq!(sequence(OptionApplicative, vec![Some('a'), Some('b')]), Some(vec!['a', 'b']));
//! ```

use super::applicative::Applicative;
use super::foldable::Foldable;

/// A type class for structures that can be traversed with an applicative.
///
/// # Laws
///
/// For a descriptor `ap`:
///
/// ```text
/// fa.traverse_with(ap, |a| ap.pure(a)) == ap.pure(fa)             // identity
/// fa.traverse_with(ap, f) keeps element order and count when present
/// ```
///
/// # Examples
///
/// ```rust
/// use foldwise::typeclass::{ResultApplicative, Traversable};
///
/// fn positive(number: i32) -> Result<i32, String> {
///     if number > 0 { Ok(number) } else { Err(format!("{number} is not positive")) }
/// }
///
/// assert_eq!(vec![1, 2].traverse_with(ResultApplicative::new(), positive), Ok(vec![1, 2]));
/// assert_eq!(
///     vec![1, -2, -3].traverse_with(ResultApplicative::new(), positive),
///     Err(String::from("-2 is not positive")),
/// );
/// ```
pub trait Traversable: Foldable {
    /// Applies `function` to every element and collects the results inside
    /// the descriptor's wrapper.
    fn traverse_with<D, B, F>(self, applicative: D, function: F) -> D::Wrapped<Self::WithType<B>>
    where
        D: Applicative,
        F: FnMut(Self::Inner) -> D::Wrapped<B>;

    /// Turns a structure of wrapped values into a wrapped structure.
    ///
    /// Elements only need to convert into the wrapper, so a list of `Maybe`
    /// values can be sequenced with an `Option` descriptor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::typeclass::{OptionApplicative, Traversable};
    ///
    /// let values = vec![Some(1), None, Some(3)];
    /// let result: Option<Vec<i32>> = values.sequence_with(OptionApplicative);
    /// assert_eq!(result, None);
    /// ```
    fn sequence_with<D, B>(self, applicative: D) -> D::Wrapped<Self::WithType<B>>
    where
        D: Applicative,
        Self::Inner: Into<D::Wrapped<B>>,
        Self: Sized,
    {
        self.traverse_with(applicative, Into::into)
    }
}

// =============================================================================
// List Operations
// =============================================================================

/// Applies `function` to every element of `values`, in order, and collects
/// the results inside the applicative's wrapper.
///
/// The result is absent as soon as any mapped element is absent; otherwise it
/// holds every mapped value in the original order.
///
/// # Examples
///
/// ```rust
/// use foldwise::typeclass::{traverse, ResultApplicative};
///
/// let lengths = traverse(
///     ResultApplicative::new(),
///     |word: &str| if word.is_empty() { Err("empty word") } else { Ok(word.len()) },
///     vec!["fold", "wise"],
/// );
/// assert_eq!(lengths, Ok(vec![4, 4]));
/// ```
pub fn traverse<D, S, U, F>(applicative: D, mut function: F, values: S) -> D::Wrapped<Vec<U>>
where
    D: Applicative,
    S: Foldable,
    F: FnMut(S::Inner) -> D::Wrapped<U>,
{
    let seed = (applicative.pure(Vec::new()), 0_usize);
    let (collected, _) = values.fold_left(seed, |(accumulator, position), element| {
        if applicative.is_absent(&accumulator) {
            return (accumulator, position + 1);
        }
        let next = applicative.map2(accumulator, function(element), |mut collected, value| {
            collected.push(value);
            collected
        });
        if applicative.is_absent(&next) {
            report_short_circuit(position);
        }
        (next, position + 1)
    });
    collected
}

/// Turns a list of wrapped values into a wrapped list.
///
/// Equivalent to `traverse(applicative, |wrapped| wrapped, values)`.
///
/// # Examples
///
/// ```rust
/// use foldwise::typeclass::{sequence, ResultApplicative};
///
/// let all_ok: Vec<Result<u8, &str>> = vec![Ok(1), Ok(2)];
/// assert_eq!(sequence(ResultApplicative::new(), all_ok), Ok(vec![1, 2]));
///
/// let first_error: Vec<Result<u8, &str>> = vec![Ok(1), Err("first"), Err("second")];
/// assert_eq!(sequence(ResultApplicative::new(), first_error), Err("first"));
/// ```
pub fn sequence<D, S, U>(applicative: D, values: S) -> D::Wrapped<Vec<U>>
where
    D: Applicative,
    S: Foldable<Inner = D::Wrapped<U>>,
{
    traverse(applicative, |wrapped| wrapped, values)
}

#[cfg(feature = "tracing")]
fn report_short_circuit(position: usize) {
    tracing::trace!(position, "traversal short-circuited on an absent element");
}

#[cfg(not(feature = "tracing"))]
#[inline]
const fn report_short_circuit(_position: usize) {}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Traversable for Vec<A> {
    fn traverse_with<D, B, F>(self, applicative: D, function: F) -> D::Wrapped<Vec<B>>
    where
        D: Applicative,
        F: FnMut(A) -> D::Wrapped<B>,
    {
        traverse(applicative, function, self)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse_with<D, B, F>(self, applicative: D, mut function: F) -> D::Wrapped<Option<B>>
    where
        D: Applicative,
        F: FnMut(A) -> D::Wrapped<B>,
    {
        match self {
            Some(element) => applicative.map(function(element), Some),
            None => applicative.pure(None),
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::typeclass::OptionApplicative;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_sequence_of_all_present_round_trips(values in prop::collection::vec(any::<i32>(), 0..50)) {
            let wrapped: Vec<Option<i32>> = values.iter().copied().map(Some).collect();
            prop_assert_eq!(sequence(OptionApplicative, wrapped), Some(values));
        }

        #[test]
        fn prop_any_absence_forces_absence(
            values in prop::collection::vec(any::<i32>(), 0..50),
            hole in any::<prop::sample::Index>(),
        ) {
            let mut wrapped: Vec<Option<i32>> = values.into_iter().map(Some).collect();
            let position = hole.index(wrapped.len() + 1);
            wrapped.insert(position, None);
            prop_assert_eq!(sequence(OptionApplicative, wrapped), None);
        }

        #[test]
        fn prop_traverse_preserves_length(values in prop::collection::vec(any::<u16>(), 0..50)) {
            let doubled = traverse(OptionApplicative, |n: u16| Some(u32::from(n) * 2), values.clone());
            prop_assert_eq!(doubled.map(|list| list.len()), Some(values.len()));
        }
    }
}
