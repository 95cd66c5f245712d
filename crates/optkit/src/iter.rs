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

//! # Iteration
//!
//! An [`Opt<T>`] behaves as a sequence of zero or one element: iterating
//! an empty container yields nothing, iterating a holding container
//! yields exactly the payload and then terminates. Iteration never
//! mutates the container (except through `iter_mut` references), so
//! re-iterating an unchanged container yields the same result.
//!
//! ## Highlights
//!
//! - By-value ([`IntoIter`]), shared ([`Iter`]), and mutable
//!   ([`IterMut`]) variants, each reachable through [`IntoIterator`].
//! - Exact `size_hint` (`(0, Some(0))` or `(1, Some(1))`), plus
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//!
//! ## Usage
//!
//! ```rust
//! use optkit::{Opt, none, some};
//!
//! let held = some(7);
//! assert_eq!(held.iter().count(), 1);
//! assert_eq!(held.into_iter().collect::<Vec<_>>(), vec![7]);
//!
//! let empty: Opt<i32> = none();
//! assert_eq!(empty.iter().count(), 0);
//! ```

use std::iter::FusedIterator;

use crate::option::Opt;

impl<T> Opt<T> {
    /// Returns an iterator over the zero-or-one held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, none, some};
    ///
    /// let o = some(4);
    /// assert_eq!(o.iter().next(), Some(&4));
    ///
    /// let empty: Opt<i32> = none();
    /// assert_eq!(empty.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref(),
        }
    }

    /// Returns a mutable iterator over the zero-or-one held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::some;
    ///
    /// let mut o = some(4);
    /// for v in o.iter_mut() {
    ///     *v += 38;
    /// }
    /// assert_eq!(o, some(42));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut(),
        }
    }
}

/// An iterator over a shared reference to the held value.
///
/// Created by [`Opt::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Opt<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.is_some() as usize;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.is_some() as usize
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An iterator over a mutable reference to the held value.
///
/// Created by [`Opt::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Opt<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.is_some() as usize;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.is_some() as usize
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// An iterator over the owned payload.
///
/// Created by the by-value [`IntoIterator`] impl.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Opt<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.is_some() as usize;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.is_some() as usize
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Opt<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
