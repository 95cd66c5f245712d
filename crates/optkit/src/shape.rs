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

//! # Payload-Shape Specializations
//!
//! The combinator layer is written once against the generic [`Opt<T>`];
//! this module adds the handful of operations that only make sense for
//! particular payload shapes.
//!
//! ## Shapes
//!
//! - **Reference** (`Opt<&T>` / `Opt<&mut T>`): the payload is an
//!   address into externally owned storage. Copying the container
//!   copies the address, never the referent; `copied`/`cloned` convert
//!   back to the owning Value shape by duplicating the referent. The
//!   referent must outlive every container aliasing it — enforced by
//!   lifetimes, not at runtime.
//! - **Pointer** (`Opt<*const T>` / `Opt<*mut T>`): the payload is a raw
//!   address, possibly null. Presence is orthogonal to nullness: a held
//!   null pointer is a present value distinct from `None`.
//! - **Valueless** ([`Presence`], i.e. `Opt<()>`): no payload beyond the
//!   discriminant; presence is the entire state.
//!
//! ## Usage
//!
//! ```rust
//! use optkit::{Opt, some};
//!
//! let x = 12;
//! let aliased: Opt<&i32> = some(&x);
//! let owned: Opt<i32> = aliased.copied();
//! assert_eq!(owned, some(12));
//! ```

use crate::option::Opt;

/// A presence-only container: `Opt<()>`.
///
/// Used where only "did this happen" matters, not "what value". All
/// generic operations apply; the payload is zero-sized, so the
/// discriminant is the entire state.
///
/// # Examples
///
/// ```rust
/// use optkit::{Presence, none, some};
///
/// let done: Presence = some(());
/// let pending: Presence = none();
///
/// assert!(done.is_some());
/// assert!(pending.is_none());
/// assert!(pending < done);
/// ```
pub type Presence = Opt<()>;

impl<T> Opt<&T> {
    /// Converts the Reference shape into the Value shape by copying the
    /// referent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, some};
    ///
    /// let x = 42;
    /// let aliased = some(&x);
    /// let owned: Opt<i32> = aliased.copied();
    /// assert_eq!(owned, some(42));
    /// ```
    #[inline]
    pub fn copied(self) -> Opt<T>
    where
        T: Copy,
    {
        match self {
            Opt::Some(value) => Opt::Some(*value),
            Opt::None => Opt::None,
        }
    }

    /// Converts the Reference shape into the Value shape by cloning the
    /// referent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, some};
    ///
    /// let name = String::from("berth");
    /// let aliased = some(&name);
    /// let owned: Opt<String> = aliased.cloned();
    /// assert_eq!(owned, some(String::from("berth")));
    /// // The original is untouched.
    /// assert_eq!(name, "berth");
    /// ```
    #[inline]
    pub fn cloned(self) -> Opt<T>
    where
        T: Clone,
    {
        match self {
            Opt::Some(value) => Opt::Some(value.clone()),
            Opt::None => Opt::None,
        }
    }
}

impl<T> Opt<&mut T> {
    /// Converts the mutable Reference shape into the Value shape by
    /// copying the referent.
    #[inline]
    pub fn copied(self) -> Opt<T>
    where
        T: Copy,
    {
        match self {
            Opt::Some(value) => Opt::Some(*value),
            Opt::None => Opt::None,
        }
    }

    /// Converts the mutable Reference shape into the Value shape by
    /// cloning the referent.
    #[inline]
    pub fn cloned(self) -> Opt<T>
    where
        T: Clone,
    {
        match self {
            Opt::Some(value) => Opt::Some(value.clone()),
            Opt::None => Opt::None,
        }
    }
}

impl<T> Opt<*const T> {
    /// Aliases the pointee of a held raw pointer.
    ///
    /// A held null pointer has no referent and yields `None`, as does an
    /// empty container.
    ///
    /// # Safety
    ///
    /// A held non-null pointer must point to a live, properly aligned
    /// `T`, and the pointee must remain valid (and unmutated through
    /// other channels) for the caller-chosen lifetime `'a`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optkit::{Opt, some};
    ///
    /// let x = 42;
    /// let o = some(&x as *const i32);
    /// // SAFETY: `x` is live for the duration of the borrow.
    /// let aliased: Opt<&i32> = unsafe { o.as_deref_unchecked() };
    /// assert_eq!(aliased, some(&42));
    /// ```
    #[inline]
    pub unsafe fn as_deref_unchecked<'a>(self) -> Opt<&'a T> {
        match self {
            // SAFETY: forwarded to the caller; `as_ref` maps null to None.
            Opt::Some(ptr) => unsafe { ptr.as_ref() }.into(),
            Opt::None => Opt::None,
        }
    }
}

impl<T> Opt<*mut T> {
    /// Aliases the pointee of a held raw pointer.
    ///
    /// # Safety
    ///
    /// Same contract as the `*const T` variant.
    #[inline]
    pub unsafe fn as_deref_unchecked<'a>(self) -> Opt<&'a T> {
        match self {
            // SAFETY: forwarded to the caller; `as_ref` maps null to None.
            Opt::Some(ptr) => unsafe { ptr.as_ref() }.into(),
            Opt::None => Opt::None,
        }
    }

    /// Mutably aliases the pointee of a held raw pointer.
    ///
    /// # Safety
    ///
    /// Same contract as the `*const T` variant, and the pointee must not
    /// be aliased elsewhere for the duration of `'a`.
    #[inline]
    pub unsafe fn as_deref_mut_unchecked<'a>(self) -> Opt<&'a mut T> {
        match self {
            // SAFETY: forwarded to the caller; `as_mut` maps null to None.
            Opt::Some(ptr) => unsafe { ptr.as_mut() }.into(),
            Opt::None => Opt::None,
        }
    }
}
