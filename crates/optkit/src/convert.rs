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

//! # Conversion Boundaries
//!
//! Interop between [`Opt<T>`] and the rest of the ecosystem: lossless
//! round-trips through [`std::option::Option`], contiguous slice views
//! of length zero or one, and `as_deref` projections through payloads
//! that own an indirection.
//!
//! ## Highlights
//!
//! - `From` in both directions, plus inherent `from_option` /
//!   `into_option` for expression-position use.
//! - `as_slice` / `as_mut_slice` expose the payload in place, without
//!   copying (the "span projection" of the container contract).
//! - `as_deref` / `as_deref_mut` alias the *referent* of a
//!   dereferenceable payload, e.g. `Opt<Box<T>>` to `Opt<&T>`.
//!
//! ## Usage
//!
//! ```rust
//! use optkit::{Opt, some};
//!
//! let o: Opt<i32> = Some(3).into();
//! assert_eq!(o, some(3));
//! assert_eq!(o.into_option(), Some(3));
//!
//! let boxed = some(Box::new(9));
//! assert_eq!(boxed.as_deref().copied(), some(9));
//! ```

use crate::option::Opt;

impl<T> From<Option<T>> for Opt<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Opt::Some(inner),
            None => Opt::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    #[inline]
    fn from(value: Opt<T>) -> Self {
        match value {
            Opt::Some(inner) => Some(inner),
            Opt::None => None,
        }
    }
}

impl<T> Opt<T> {
    /// Converts a [`std::option::Option`] into an `Opt`, preserving
    /// presence and payload exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// assert_eq!(Opt::from_option(Some(1)), some(1));
    /// assert_eq!(Opt::<i32>::from_option(None), none());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        value.into()
    }

    /// Converts into a [`std::option::Option`], preserving presence and
    /// payload exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// assert_eq!(some(1).into_option(), Some(1));
    /// assert_eq!(none::<i32>().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Views the payload as a slice of length zero or one, without
    /// copying.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// assert_eq!(some(42).as_slice(), &[42]);
    /// assert!(none::<i32>().as_slice().is_empty());
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        match self {
            Opt::Some(value) => std::slice::from_ref(value),
            Opt::None => &[],
        }
    }

    /// Views the payload as a mutable slice of length zero or one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::some;
    ///
    /// let mut o = some(2);
    /// for v in o.as_mut_slice() {
    ///     *v = 42;
    /// }
    /// assert_eq!(o, some(42));
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Opt::Some(value) => std::slice::from_mut(value),
            Opt::None => &mut [],
        }
    }
}

impl<T> Opt<T>
where
    T: std::ops::Deref,
{
    /// Aliases the referent of a dereferenceable payload.
    ///
    /// The result borrows *through* the payload's indirection, so
    /// `Opt<Box<T>>` projects to `Opt<&T>` and `Opt<String>` to
    /// `Opt<&str>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let o = some(String::from("hey"));
    /// assert_eq!(o.as_deref(), some("hey"));
    ///
    /// let empty: Opt<String> = none();
    /// assert_eq!(empty.as_deref(), none());
    /// ```
    #[inline]
    pub fn as_deref(&self) -> Opt<&T::Target> {
        match self {
            Opt::Some(value) => Opt::Some(&**value),
            Opt::None => Opt::None,
        }
    }
}

impl<T> Opt<T>
where
    T: std::ops::DerefMut,
{
    /// Mutably aliases the referent of a dereferenceable payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::some;
    ///
    /// let mut o = some(Box::new(42));
    /// if let optkit::Opt::Some(v) = o.as_deref_mut() {
    ///     *v = 100;
    /// }
    /// assert_eq!(*o.unwrap(), 100);
    /// ```
    #[inline]
    pub fn as_deref_mut(&mut self) -> Opt<&mut T::Target> {
        match self {
            Opt::Some(value) => Opt::Some(&mut **value),
            Opt::None => Opt::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::option::{Opt, none, some};

    #[test]
    fn test_round_trip_through_std_option() {
        // some -> Opt -> Option
        let std_held = Some(123);
        let o: Opt<i32> = std_held.into();
        assert_eq!(o, some(123));
        assert_eq!(o.into_option(), Some(123));

        // none -> Opt -> Option
        let std_empty: Option<i32> = None;
        let o: Opt<i32> = std_empty.into();
        assert!(o.is_none());
        assert_eq!(o.into_option(), None);
    }

    #[test]
    fn test_round_trip_preserves_owned_payload() {
        let o = some(String::from("abc"));
        let back = Opt::from_option(o.into_option());
        assert_eq!(back, some(String::from("abc")));
    }

    #[test]
    fn test_round_trip_randomized_parity() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(0x0717);
        for _ in 0..1000 {
            let std_side: Option<i32> = if rng.random_range(0..2) == 0 {
                Some(rng.random_range(-1000..1000))
            } else {
                None
            };
            let ours = Opt::from_option(std_side);
            assert_eq!(ours.is_some(), std_side.is_some());
            assert_eq!(ours.into_option(), std_side);
        }
    }

    #[test]
    fn test_as_slice() {
        // Holding: a one-element view into the payload.
        let o = some(42);
        let view = o.as_slice();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0], 42);

        // Empty: a zero-length view.
        let empty: Opt<i32> = none();
        assert!(empty.as_slice().is_empty());
    }

    #[test]
    fn test_as_slice_does_not_copy() {
        let o = some(42);
        let view = o.as_slice();
        let payload = match &o {
            Opt::Some(v) => v,
            Opt::None => unreachable!(),
        };
        assert!(std::ptr::eq(&view[0], payload));
    }

    #[test]
    fn test_as_mut_slice_writes_through() {
        let mut o = some(1);
        o.as_mut_slice()[0] = 99;
        assert_eq!(o, some(99));

        let mut empty: Opt<i32> = none();
        assert!(empty.as_mut_slice().is_empty());
    }

    #[test]
    fn test_as_deref() {
        // Box payload.
        let o = some(Box::new(42));
        let aliased = o.as_deref();
        assert_eq!(aliased, some(&42));

        // String payload projects to &str.
        let s = some(String::from("hello"));
        assert_eq!(s.as_deref(), some("hello"));

        // Empty propagates.
        let empty: Opt<Box<i32>> = none();
        assert!(empty.as_deref().is_none());
    }

    #[test]
    fn test_as_deref_mut() {
        let mut o = some(Box::new(42));
        if let Opt::Some(v) = o.as_deref_mut() {
            *v = 100;
        }
        assert_eq!(*o.unwrap(), 100);
    }

    #[test]
    fn test_as_deref_aliases_the_referent() {
        let boxed = Box::new(7);
        let referent: *const i32 = &*boxed;
        let o = some(boxed);
        let aliased = o.as_deref();
        assert!(std::ptr::eq(aliased.unwrap(), referent));
    }
}
