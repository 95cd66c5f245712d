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

//! # Transformation Combinators
//!
//! Non-mutating transformations over [`Opt<T>`]. Every combinator
//! produces a new container (or derived value) and propagates `None`
//! through the composition; none of them ever panics on an empty
//! receiver.
//!
//! ## Highlights
//!
//! - The monadic core: `map`, `and_then`, `filter`, `or_else`.
//! - Pairing and unpairing: `zip`, `zip_with`, `unzip`.
//! - Structure shuffling: `flatten` on `Opt<Opt<T>>`, `transpose` on
//!   `Opt<Result<T, E>>`.
//! - Widening into `Result`: `ok_or`, `ok_or_else` (lazy on the empty
//!   path only).
//! - Ordered payloads: an inherent `clamp` that, unlike [`Ord::clamp`],
//!   propagates an empty receiver instead of clamping it up to the
//!   lower bound. `cmp`, `min`, and `max` come from the derived [`Ord`],
//!   which already treats `None` as the minimum.
//!
//! ## Usage
//!
//! ```rust
//! use optkit::{none, some};
//!
//! let big_even = some(8)
//!     .map(|x| x * 2)
//!     .filter(|x| x % 2 == 0)
//!     .and_then(|x| if x > 10 { some(x) } else { none() });
//! assert_eq!(big_even, some(16));
//! ```

use crate::option::Opt;

impl<T> Opt<T> {
    /// Transforms the held value with `f`, leaving an empty container
    /// empty.
    ///
    /// A closure returning `()` degenerates the result to the valueless
    /// shape `Opt<()>`, still propagating presence correctly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(5).map(|x| x * 2), some(10));
    /// assert_eq!(none::<i32>().map(|x| x * 2), none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Opt::Some(value) => Opt::Some(f(value)),
            Opt::None => Opt::None,
        }
    }

    /// Calls `f` with a reference to the held value, then returns the
    /// container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::some;
    ///
    /// let mut seen = 0;
    /// let o = some(4).inspect(|v| seen = *v);
    /// assert_eq!(seen, 4);
    /// assert_eq!(o, some(4));
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Opt::Some(ref value) = self {
            f(value);
        }
        self
    }

    /// Returns `f(value)` when holding, else `default`.
    ///
    /// `default` is evaluated eagerly; use [`map_or_else`] for a lazy
    /// fallback.
    ///
    /// When the payload is itself a reference (`Opt<&T>`), both branches
    /// are addresses and the result is an alias to whichever branch
    /// fired, never a copy.
    ///
    /// [`map_or_else`]: Opt::map_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(3).map_or(0, |x| x * 2), 6);
    /// assert_eq!(none::<i32>().map_or(0, |x| x * 2), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => default,
        }
    }

    /// Returns `f(value)` when holding, else `default()`.
    ///
    /// Exactly one of the two closures runs, so a fallback expression
    /// whose branches both yield aliases stays an alias end to end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(3).map_or_else(|| 0, |x| x * 2), 6);
    /// assert_eq!(none::<i32>().map_or_else(|| 99, |x| x * 2), 99);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => default(),
        }
    }

    /// Returns `f(value)` when holding, else `U::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(21).map_or_default(|x| x * 2), 42);
    /// assert_eq!(none::<i32>().map_or_default(|x| x * 2), 0);
    /// assert_eq!(none::<i32>().map_or_default(|x| x.to_string()), "");
    /// ```
    #[inline]
    pub fn map_or_default<U, F>(self, f: F) -> U
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => U::default(),
        }
    }

    /// Widens into a [`Result`], mapping a held value to `Ok(value)` and
    /// an empty container to `Err(err)`.
    ///
    /// `err` is evaluated eagerly; use [`ok_or_else`] for a lazy error.
    ///
    /// [`ok_or_else`]: Opt::ok_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(5).ok_or("missing"), Ok(5));
    /// assert_eq!(none::<i32>().ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(err),
        }
    }

    /// Widens into a [`Result`], computing the error only on the empty
    /// path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(5).ok_or_else(|| "missing"), Ok(5));
    /// assert_eq!(none::<i32>().ok_or_else(|| "missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(err()),
        }
    }

    /// Returns `other` when holding, else `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(2).and(some("two")), some("two"));
    /// assert_eq!(none::<i32>().and(some("two")), none());
    /// assert_eq!(some(2).and(none::<&str>()), none());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
        match self {
            Opt::Some(_) => other,
            Opt::None => Opt::None,
        }
    }

    /// Monadic bind: maps the held value to another container and
    /// flattens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// fn checked_square(x: i32) -> Opt<i32> {
    ///     x.checked_mul(x).into()
    /// }
    ///
    /// assert_eq!(some(4).and_then(checked_square), some(16));
    /// assert_eq!(some(i32::MAX).and_then(checked_square), none());
    /// assert_eq!(none::<i32>().and_then(checked_square), none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => Opt::None,
        }
    }

    /// Keeps the held value only when `predicate` accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(4).filter(|x| x % 2 == 0), some(4));
    /// assert_eq!(some(5).filter(|x| x > &10), none());
    /// assert_eq!(none::<i32>().filter(|_| true), none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Opt::Some(value) if predicate(&value) => Opt::Some(value),
            _ => Opt::None,
        }
    }

    /// Returns the container when holding, else `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(2).or(some(100)), some(2));
    /// assert_eq!(none().or(some(100)), some(100));
    /// assert_eq!(none::<i32>().or(none()), none());
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => other,
        }
    }

    /// Returns the container when holding, else `f()`.
    ///
    /// `f` runs exactly once on the empty path and never on the holding
    /// path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(2).or_else(|| some(100)), some(2));
    /// assert_eq!(none().or_else(|| some(100)), some(100));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => f(),
        }
    }

    /// Returns whichever of the two containers holds a value, and `None`
    /// when both or neither do.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(1).xor(none()), some(1));
    /// assert_eq!(none().xor(some(2)), some(2));
    /// assert_eq!(some(1).xor(some(2)), none());
    /// assert_eq!(none::<i32>().xor(none()), none());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (held @ Opt::Some(_), Opt::None) => held,
            (Opt::None, held @ Opt::Some(_)) => held,
            _ => Opt::None,
        }
    }

    /// Pairs two held values; either side empty empties the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(1).zip(some("hi")), some((1, "hi")));
    /// assert_eq!(none::<i32>().zip(some("hi")), none());
    /// assert_eq!(some(1).zip(none::<&str>()), none());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        match (self, other) {
            (Opt::Some(a), Opt::Some(b)) => Opt::Some((a, b)),
            _ => Opt::None,
        }
    }

    /// Combines two held values with `f` instead of pairing them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(1).zip_with(some(2), |a, b| a + b), some(3));
    /// assert_eq!(none::<i32>().zip_with(some(2), |a, b| a + b), none());
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Opt<U>, f: F) -> Opt<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Opt::Some(a), Opt::Some(b)) => Opt::Some(f(a, b)),
            _ => Opt::None,
        }
    }

    /// Clamps the held value between the values held by `lo` and `hi`,
    /// propagating an empty receiver.
    ///
    /// Unlike [`Ord::clamp`] on the container type, an empty receiver
    /// stays empty rather than being raised to `lo`. Both bounds are
    /// expected to hold values; an empty bound simply does not constrain
    /// that side.
    ///
    /// # Panics
    ///
    /// Panics if `hi < lo` (inherited from [`Ord::clamp`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(5).clamp(some(1), some(10)), some(5));
    /// assert_eq!(some(0).clamp(some(1), some(10)), some(1));
    /// assert_eq!(some(20).clamp(some(1), some(10)), some(10));
    /// assert_eq!(none::<i32>().clamp(some(1), some(10)), none());
    /// ```
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self
    where
        T: Ord,
    {
        if self.is_none() {
            return Opt::None;
        }
        std::cmp::Ord::clamp(self, lo, hi)
    }
}

impl<T> Opt<Opt<T>> {
    /// Removes one level of nesting.
    ///
    /// Only one level: `some(some(some(6)))` flattens to `some(some(6))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// assert_eq!(some(some(42)).flatten(), some(42));
    /// assert_eq!(some(none::<i32>()).flatten(), none());
    /// assert_eq!(none::<Opt<i32>>().flatten(), none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Opt<T> {
        match self {
            Opt::Some(inner) => inner,
            Opt::None => Opt::None,
        }
    }
}

impl<A, B> Opt<(A, B)> {
    /// Splits a container of a pair into a pair of containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// assert_eq!(some((1, "hi")).unzip(), (some(1), some("hi")));
    ///
    /// let split: (Opt<i32>, Opt<&str>) = none::<(i32, &str)>().unzip();
    /// assert_eq!(split, (none(), none()));
    /// ```
    #[inline]
    pub fn unzip(self) -> (Opt<A>, Opt<B>) {
        match self {
            Opt::Some((a, b)) => (Opt::Some(a), Opt::Some(b)),
            Opt::None => (Opt::None, Opt::None),
        }
    }
}

impl<T, E> Opt<Result<T, E>> {
    /// Swaps the nesting of a container and a [`Result`].
    ///
    /// `some(Ok(v))` becomes `Ok(some(v))`, `some(Err(e))` becomes
    /// `Err(e)`, and `none()` becomes `Ok(none())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let held: Opt<Result<i32, &str>> = some(Ok(5));
    /// assert_eq!(held.transpose(), Ok(some(5)));
    ///
    /// let failed: Opt<Result<i32, &str>> = some(Err("boom"));
    /// assert_eq!(failed.transpose(), Err("boom"));
    ///
    /// let empty: Opt<Result<i32, &str>> = none();
    /// assert_eq!(empty.transpose(), Ok(none()));
    /// ```
    #[inline]
    pub fn transpose(self) -> Result<Opt<T>, E> {
        match self {
            Opt::Some(Ok(value)) => Ok(Opt::Some(value)),
            Opt::Some(Err(err)) => Err(err),
            Opt::None => Ok(Opt::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::option::{Opt, none, some};

    #[test]
    fn test_map_and_filter() {
        // Case 1: map doubles a held value.
        assert_eq!(some(5).map(|x| x * 2), some(10));
        // Case 2: map on none stays none.
        assert_eq!(none::<i32>().map(|x| x * 2), none());
        // Case 3: filter rejects.
        assert_eq!(some(5).filter(|x| x > &10), none());
        // Case 4: filter accepts.
        assert_eq!(some(15).filter(|x| x > &10), some(15));
    }

    #[test]
    fn test_map_to_valueless_shape() {
        // A side-effect-only transform degenerates to Opt<()>.
        let mut seen = 0;
        let flag: Opt<()> = some(7).map(|v| {
            seen = v;
        });
        assert!(flag.is_some());
        assert_eq!(seen, 7);

        let flag: Opt<()> = none::<i32>().map(|_| ());
        assert!(flag.is_none());
    }

    #[test]
    fn test_map_or_family() {
        assert_eq!(some(3).map_or(0, |x| x * 2), 6);
        assert_eq!(none::<i32>().map_or(99, |x| x * 2), 99);

        assert_eq!(some(3).map_or_else(|| 0, |x| x * 2), 6);
        assert_eq!(none::<i32>().map_or_else(|| 99, |x| x * 2), 99);

        assert_eq!(some(21).map_or_default(|x| x * 2), 42);
        assert_eq!(none::<i32>().map_or_default(|x| x * 2), 0);
        assert_eq!(some(42).map_or_default(|x| x.to_string()), "42");
    }

    #[test]
    fn test_map_or_else_runs_exactly_one_branch() {
        let mut default_calls = 0;
        let mut map_calls = 0;

        some(1).map_or_else(
            || {
                default_calls += 1;
                0
            },
            |x| {
                map_calls += 1;
                x
            },
        );
        assert_eq!((default_calls, map_calls), (0, 1));

        none::<i32>().map_or_else(
            || {
                default_calls += 1;
                0
            },
            |x| {
                map_calls += 1;
                x
            },
        );
        assert_eq!((default_calls, map_calls), (1, 1));
    }

    #[test]
    fn test_reference_category_preservation() {
        // Holding branch: the returned alias is the payload's address.
        let x = 10;
        let fallback = 20;
        let o: Opt<&i32> = some(&x);
        let result = o.map_or(&fallback, |v| v);
        assert!(std::ptr::eq(result, &x));

        // Empty branch: the returned alias is the fallback's address.
        let o: Opt<&i32> = none();
        let result = o.map_or(&fallback, |v| v);
        assert!(std::ptr::eq(result, &fallback));

        // unwrap_or on a reference payload aliases, never copies.
        let o: Opt<&i32> = some(&x);
        assert!(std::ptr::eq(o.unwrap_or(&fallback), &x));
        let o: Opt<&i32> = none();
        assert!(std::ptr::eq(o.unwrap_or(&fallback), &fallback));

        // unwrap_or_else and map_or_else behave the same way.
        let o: Opt<&i32> = some(&x);
        assert!(std::ptr::eq(o.unwrap_or_else(|| &fallback), &x));
        let o: Opt<&i32> = none();
        assert!(std::ptr::eq(
            o.map_or_else(|| &fallback, |v| v),
            &fallback
        ));
    }

    #[test]
    fn test_inspect() {
        let mut sum = 0;
        let o = some(5).inspect(|v| sum += v).inspect(|v| sum += v);
        assert_eq!(sum, 10);
        assert_eq!(o, some(5));

        let mut called = false;
        none::<i32>().inspect(|_| called = true);
        assert!(!called);
    }

    #[test]
    fn test_and_then_and_or_else() {
        let plus_one = |x: i32| some(x + 1);
        assert_eq!(some(1).and_then(plus_one), some(2));
        assert_eq!(none::<i32>().and_then(plus_one), none());
        assert_eq!(some(1).and_then(|_| none::<i32>()), none());

        assert_eq!(some(1).or_else(|| some(9)), some(1));
        assert_eq!(none::<i32>().or_else(|| some(9)), some(9));
        assert_eq!(none::<i32>().or_else(none), none());
    }

    #[test]
    fn test_or_else_laziness() {
        let mut calls = 0;
        some(1).or_else(|| {
            calls += 1;
            some(9)
        });
        assert_eq!(calls, 0);

        none::<i32>().or_else(|| {
            calls += 1;
            some(9)
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_and_or_xor() {
        assert_eq!(some(2).and(some("two")), some("two"));
        assert_eq!(none::<i32>().and(some("two")), none());
        assert_eq!(some(2).or(some(7)), some(2));
        assert_eq!(none().or(some(7)), some(7));

        let a = some(1);
        let b = some(2);
        let n: Opt<i32> = none();
        assert_eq!(a.xor(n), a);
        assert_eq!(n.xor(b), b);
        assert_eq!(a.xor(b), none());
        assert_eq!(n.xor(n), none());
    }

    #[test]
    fn test_zip_and_unzip() {
        assert_eq!(some(1).zip(some("hi")), some((1, "hi")));
        assert_eq!(none::<i32>().zip(some("hi")), none());
        assert_eq!(some(1).zip(none::<&str>()), none());

        assert_eq!(some((1, "hi")).unzip(), (some(1), some("hi")));
        let (a, b) = none::<(i32, &str)>().unzip();
        assert!(a.is_none());
        assert!(b.is_none());

        // zip then unzip round-trips component presence.
        let (a, b) = some(1).zip(some("hi")).unzip();
        assert_eq!((a, b), (some(1), some("hi")));
    }

    #[test]
    fn test_zip_with() {
        assert_eq!(some(1).zip_with(some(2), |a, b| a + b), some(3));
        assert_eq!(none::<i32>().zip_with(some(2), |a, b| a + b), none());
        assert_eq!(some(1).zip_with(none::<i32>(), |a, b| a + b), none());
    }

    #[test]
    fn test_flatten() {
        assert_eq!(some(some(42)).flatten(), some(42));
        assert_eq!(some(none::<i32>()).flatten(), none());
        assert_eq!(none::<Opt<i32>>().flatten(), none());

        // Only one level is removed.
        assert_eq!(some(some(some(6))).flatten(), some(some(6)));
    }

    #[test]
    fn test_transpose() {
        let ok: Opt<Result<i32, &str>> = some(Ok(5));
        assert_eq!(ok.transpose(), Ok(some(5)));

        let err: Opt<Result<i32, &str>> = some(Err("bad"));
        assert_eq!(err.transpose(), Err("bad"));

        let empty: Opt<Result<i32, &str>> = none();
        assert_eq!(empty.transpose(), Ok(none()));
    }

    #[test]
    fn test_ok_or_family() {
        assert_eq!(some(5).ok_or("missing"), Ok(5));
        assert_eq!(none::<i32>().ok_or("missing"), Err("missing"));

        let mut calls = 0;
        let result = some(5).ok_or_else(|| {
            calls += 1;
            "missing"
        });
        assert_eq!(result, Ok(5));
        assert_eq!(calls, 0);

        let result = none::<i32>().ok_or_else(|| {
            calls += 1;
            "missing"
        });
        assert_eq!(result, Err("missing"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_cmp_min_max() {
        let a = some(10);
        let b = some(42);
        let n: Opt<i32> = none();

        // Total order with None as the minimum.
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(b.cmp(&a), std::cmp::Ordering::Greater);
        assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
        assert_eq!(n.cmp(&a), std::cmp::Ordering::Less);
        assert_eq!(a.cmp(&n), std::cmp::Ordering::Greater);
        assert_eq!(n.cmp(&n), std::cmp::Ordering::Equal);

        // min/max fall out of the same order.
        assert_eq!(a.max(b), some(42));
        assert_eq!(a.max(n), some(10));
        assert_eq!(n.max(b), some(42));
        assert_eq!(n.max(n), none());

        assert_eq!(a.min(b), some(10));
        assert_eq!(a.min(n), none());
        assert_eq!(n.min(b), none());
    }

    #[test]
    fn test_clamp_propagates_none() {
        assert_eq!(some(5).clamp(some(1), some(10)), some(5));
        assert_eq!(some(0).clamp(some(1), some(10)), some(1));
        assert_eq!(some(20).clamp(some(1), some(10)), some(10));

        // An empty receiver stays empty instead of clamping to `lo`.
        assert_eq!(none::<i32>().clamp(some(1), some(10)), none());
    }

    #[test]
    fn test_empty_propagation_through_all_combinators() {
        let empty: Opt<i32> = none();
        assert_eq!(empty.map(|x| x + 1), none());
        assert_eq!(empty.and_then(|x| some(x + 1)), none());
        assert_eq!(empty.filter(|_| true), none());
        assert_eq!(empty.zip(some(1)), none());
        assert_eq!(empty.zip_with(some(1), |a, b| a + b), none());
        assert_eq!(empty.and(some(1)), none());
        assert_eq!(empty.xor(none()), none());
        assert_eq!(empty.inspect(|_| ()), none());
        assert!(empty.ok_or(()).is_err());
    }
}
