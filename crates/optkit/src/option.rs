// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Core Container
//!
//! The two-state optional-value container [`Opt<T>`]: either `Some(T)`,
//! holding exactly one payload, or `None`, holding nothing. This module
//! provides construction, state queries, and the unwrap family; the
//! transformation, mutation, and interop surfaces live in the sibling
//! modules and attach to the same type.
//!
//! ## Motivation
//!
//! `Opt<T>` exists as a self-contained reimplementation of the optional
//! container contract: a tagged two-state value type whose combinators
//! propagate absence through every composition and whose only fault kind
//! is a panic on checked access to an empty container. Keeping the type
//! independent of [`std::option::Option`] makes the whole contract —
//! state machine, combinator laws, panic boundary — explicit and locally
//! testable, while lossless conversions in both directions keep it a
//! good citizen of the wider ecosystem.
//!
//! ## Highlights
//!
//! - `None` is declared first, so the derived total order makes an empty
//!   container strictly less than any holding one.
//! - State queries (`is_some`, `is_none`) are `const fn`.
//! - The unwrap family spans the whole checked/unchecked spectrum:
//!   panicking (`unwrap`, `expect`), defaulted (`unwrap_or`,
//!   `unwrap_or_else`, `unwrap_or_default`), and unchecked
//!   (`unwrap_unchecked`, `unsafe`).
//! - No heap allocation anywhere in the container itself.
//!
//! ## Usage
//!
//! ```rust
//! use optkit::{Opt, none, some};
//!
//! let held = some(5);
//! assert!(held.is_some());
//! assert_eq!(held.unwrap(), 5);
//!
//! let empty: Opt<i32> = none();
//! assert!(empty.is_none());
//! assert_eq!(empty.unwrap_or(7), 7);
//! ```

/// An optional value: every `Opt` is either [`Opt::Some`] and holds a
/// payload, or [`Opt::None`] and holds nothing.
///
/// The variant order is significant: `None` first makes the derived
/// `Ord` treat an empty container as the minimum, so
/// `none() < some(x)` for every `x`.
///
/// # Examples
///
/// ```rust
/// use optkit::{Opt, none, some};
///
/// let a: Opt<i32> = some(1);
/// let b: Opt<i32> = none();
///
/// assert!(a > b);
/// assert_eq!(a.map(|x| x + 1), some(2));
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Opt<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

/// Creates an `Opt` holding `value`.
///
/// This is the expression-position counterpart of `Opt::Some(value)`.
///
/// # Examples
///
/// ```rust
/// use optkit::{Opt, some};
///
/// let o = some(42);
/// assert_eq!(o, Opt::Some(42));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Opt<T> {
    Opt::Some(value)
}

/// Creates an empty `Opt`.
///
/// # Examples
///
/// ```rust
/// use optkit::{Opt, none};
///
/// let o: Opt<i32> = none();
/// assert!(o.is_none());
/// ```
#[inline]
pub const fn none<T>() -> Opt<T> {
    Opt::None
}

impl<T> Opt<T> {
    /// Returns `true` if the container holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// assert!(some(2).is_some());
    /// assert!(!none::<i32>().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    /// Returns `true` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// assert!(none::<i32>().is_none());
    /// assert!(!some(2).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Opt::None)
    }

    /// Returns `true` if the container holds a value and that value
    /// satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert!(some(42).is_some_and(|x| x > 10));
    /// assert!(!some(42).is_some_and(|x| x > 100));
    /// assert!(!none::<i32>().is_some_and(|_| true));
    /// ```
    #[inline]
    pub fn is_some_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Opt::Some(value) => predicate(value),
            Opt::None => false,
        }
    }

    /// Returns `true` if the container is empty or its value satisfies
    /// `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert!(some(42).is_none_or(|x| x > 10));
    /// assert!(!some(42).is_none_or(|x| x > 100));
    /// assert!(none::<i32>().is_none_or(|_| false));
    /// ```
    #[inline]
    pub fn is_none_or<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Opt::Some(value) => predicate(value),
            Opt::None => true,
        }
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`, aliasing the payload in
    /// place without moving or copying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// let o = some(String::from("hey"));
    /// let len = o.as_ref().map(|s| s.len());
    /// assert_eq!(len, some(3));
    /// // `o` is still intact.
    /// assert!(o.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    /// Converts from `&mut Opt<T>` to `Opt<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::some;
    ///
    /// let mut o = some(2);
    /// if let optkit::Opt::Some(v) = o.as_mut() {
    ///     *v = 42;
    /// }
    /// assert_eq!(o, some(42));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty. Every combinator in this crate
    /// degrades to `None` instead of panicking; `unwrap` and [`expect`]
    /// are the only checked operations that raise this fault.
    ///
    /// [`expect`]: Opt::expect
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::some;
    ///
    /// assert_eq!(some("air").unwrap(), "air");
    /// ```
    ///
    /// ```rust,should_panic
    /// use optkit::none;
    ///
    /// none::<i32>().unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => panic!("called `Opt::unwrap()` on a `None` value"),
        }
    }

    /// Returns the held value, panicking with `message` when empty.
    ///
    /// # Panics
    ///
    /// Panics with the caller-supplied diagnostic if the container is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use optkit::none;
    ///
    /// none::<i32>().expect("the world is out of integers");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => panic!("{}", message),
        }
    }

    /// Returns the held value without checking for presence.
    ///
    /// # Safety
    ///
    /// The caller must have already established that the container holds
    /// a value. Calling this on an empty container is undefined behavior,
    /// not a catchable fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::some;
    ///
    /// let o = some(5);
    /// // SAFETY: `o` was just constructed holding a value.
    /// assert_eq!(unsafe { o.unwrap_unchecked() }, 5);
    /// ```
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Opt::Some(value) => value,
            // SAFETY: the caller guarantees the container is non-empty.
            Opt::None => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the held value or `default` when empty.
    ///
    /// The default is evaluated eagerly; prefer [`unwrap_or_else`] when
    /// it is expensive to produce.
    ///
    /// [`unwrap_or_else`]: Opt::unwrap_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(5).unwrap_or(7), 5);
    /// assert_eq!(none::<i32>().unwrap_or(7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => default,
        }
    }

    /// Returns the held value or computes one from `default` when empty.
    ///
    /// `default` is invoked exactly once on the empty path and never on
    /// the holding path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(5).unwrap_or_else(|| 2 * 10), 5);
    /// assert_eq!(none::<i32>().unwrap_or_else(|| 2 * 10), 20);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Opt::Some(value) => value,
            Opt::None => default(),
        }
    }

    /// Returns the held value or `T::default()` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(5).unwrap_or_default(), 5);
    /// assert_eq!(none::<i32>().unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Opt::Some(value) => value,
            Opt::None => T::default(),
        }
    }
}

impl<T> Clone for Opt<T>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Opt::Some(value) => Opt::Some(value.clone()),
            Opt::None => Opt::None,
        }
    }

    // Clones into the existing payload when both sides hold one, so that
    // `T::clone_from` can reuse the destination's resources.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Opt::Some(dest), Opt::Some(src)) => dest.clone_from(src),
            (dest, src) => *dest = src.clone(),
        }
    }
}

impl<T> Copy for Opt<T> where T: Copy {}

impl<T> Default for Opt<T> {
    /// Returns an empty container, for any payload type.
    #[inline]
    fn default() -> Self {
        Opt::None
    }
}

impl<T> From<T> for Opt<T> {
    /// Wraps a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, some};
    ///
    /// let o = Opt::from(42);
    /// assert_eq!(o, some(42));
    /// ```
    #[inline]
    fn from(value: T) -> Self {
        Opt::Some(value)
    }
}

impl<T> std::fmt::Display for Opt<T>
where
    T: std::fmt::Display,
{
    /// Renders as `some(value)` or `none`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opt::Some(value) => write!(f, "some({})", value),
            Opt::None => f.write_str("none"),
        }
    }
}
