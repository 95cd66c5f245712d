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

//! # In-Place Mutation
//!
//! State transitions on an existing [`Opt<T>`]: extraction (`take`,
//! `take_if`), overwriting (`replace`, `insert`), fill-if-empty
//! (`get_or_insert` and friends), and wholesale exchange (`swap`,
//! `reset`).
//!
//! ## Highlights
//!
//! - `take` and `reset` are idempotent on an empty container.
//! - `insert`/`replace` always overwrite; `get_or_insert*` never
//!   overwrite — when the container already holds a value, the existing
//!   payload is returned unchanged and the supplied value or factory is
//!   never evaluated. The asymmetry is the defining contract, not an
//!   accident.
//! - `insert` and the `get_or_insert*` family return a direct `&mut T`
//!   alias into the container for chained mutation; `take` and `replace`
//!   return the previous state wrapped in a new container.
//!
//! ## Usage
//!
//! ```rust
//! use optkit::{Opt, none, some};
//!
//! let mut slot: Opt<i32> = none();
//! *slot.get_or_insert(5) += 1;
//! assert_eq!(slot, some(6));
//!
//! let previous = slot.replace(12);
//! assert_eq!(previous, some(6));
//! assert_eq!(slot.take(), some(12));
//! assert!(slot.is_none());
//! ```

use crate::option::Opt;

impl<T> Opt<T> {
    /// Extracts the payload, leaving the container empty.
    ///
    /// Taking from an empty container is a no-op and returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let mut o = some(2);
    /// assert_eq!(o.take(), some(2));
    /// assert!(o.is_none());
    ///
    /// let mut empty: Opt<i32> = none();
    /// assert_eq!(empty.take(), none());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Opt<T> {
        std::mem::replace(self, Opt::None)
    }

    /// Extracts the payload only when `predicate` accepts it.
    ///
    /// The predicate receives a mutable reference, so it may adjust the
    /// value before deciding. When it declines, the container keeps the
    /// (possibly adjusted) value and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{none, some};
    ///
    /// let mut o = some(42);
    /// assert_eq!(o.take_if(|v| *v > 10), some(42));
    /// assert!(o.is_none());
    ///
    /// let mut o = some(5);
    /// assert_eq!(o.take_if(|v| *v > 10), none());
    /// assert_eq!(o, some(5));
    /// ```
    #[inline]
    pub fn take_if<P>(&mut self, predicate: P) -> Opt<T>
    where
        P: FnOnce(&mut T) -> bool,
    {
        let accepted = match self.as_mut() {
            Opt::Some(value) => predicate(value),
            Opt::None => false,
        };
        if accepted { self.take() } else { Opt::None }
    }

    /// Stores `value`, returning whatever was previously held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let mut o = some(11);
    /// assert_eq!(o.replace(12), some(11));
    /// assert_eq!(o, some(12));
    ///
    /// let mut empty: Opt<i32> = none();
    /// assert_eq!(empty.replace(3), none());
    /// assert_eq!(empty, some(3));
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Opt<T> {
        std::mem::replace(self, Opt::Some(value))
    }

    /// Stores `value`, dropping any previous payload, and returns a
    /// mutable alias to the newly stored value.
    ///
    /// Unlike [`get_or_insert`], this always overwrites.
    ///
    /// [`get_or_insert`]: Opt::get_or_insert
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let mut o: Opt<i32> = none();
    /// let slot = o.insert(1);
    /// assert_eq!(*slot, 1);
    /// *slot = 2;
    /// assert_eq!(o, some(2));
    ///
    /// // Overwrites an existing value.
    /// assert_eq!(*o.insert(7), 7);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Opt::Some(value);
        match self {
            Opt::Some(stored) => stored,
            Opt::None => unreachable!(),
        }
    }

    /// Returns a mutable alias to the held value, first storing `value`
    /// when empty.
    ///
    /// When the container already holds a value, `value` is discarded
    /// and the existing payload is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let mut o: Opt<i32> = none();
    /// assert_eq!(*o.get_or_insert(42), 42);
    ///
    /// // Already holding: the existing value wins.
    /// assert_eq!(*o.get_or_insert(99), 42);
    /// assert_eq!(o, some(42));
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Returns a mutable alias to the held value, first storing `f()`
    /// when empty.
    ///
    /// `f` is invoked exactly once when the container is empty and never
    /// when it already holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none};
    ///
    /// let mut o: Opt<i32> = none();
    /// assert_eq!(*o.get_or_insert_with(|| 42), 42);
    /// assert_eq!(*o.get_or_insert_with(|| unreachable!()), 42);
    /// ```
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_none() {
            *self = Opt::Some(f());
        }
        match self {
            Opt::Some(stored) => stored,
            Opt::None => unreachable!(),
        }
    }

    /// Returns a mutable alias to the held value, first storing
    /// `T::default()` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let mut o: Opt<i32> = none();
    /// *o.get_or_insert_default() += 1;
    /// assert_eq!(o, some(1));
    /// ```
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    /// Exchanges the full state (presence and payload) with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let mut a = some(1);
    /// let mut b: Opt<i32> = none();
    /// a.swap(&mut b);
    /// assert!(a.is_none());
    /// assert_eq!(b, some(1));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Forces the container empty, dropping any owned payload.
    ///
    /// Idempotent: resetting an already-empty container is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::some;
    ///
    /// let mut o = some(String::from("gone"));
    /// o.reset();
    /// assert!(o.is_none());
    /// o.reset();
    /// assert!(o.is_none());
    /// ```
    #[inline]
    pub fn reset(&mut self) {
        *self = Opt::None;
    }
}
