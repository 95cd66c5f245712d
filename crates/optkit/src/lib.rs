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

//! # Optkit
//!
//! A standalone optional-value container, `Opt<T>`, with the full
//! combinator surface of a modern option type: transformation
//! (`map`, `and_then`, `filter`, `zip`, `flatten`, `transpose`, …),
//! in-place mutation (`take`, `replace`, `insert`, `get_or_insert_with`, …),
//! and observation/interop (ordering, hashing, display, iteration,
//! lossless conversion to and from [`std::option::Option`]).
//!
//! ## Modules
//!
//! - `option`: The core container: construction, state queries, and the
//!   unwrap family (panicking, defaulted, and unchecked access).
//! - `combinator`: Non-mutating transformations producing new containers
//!   or derived values, with `None` propagated through every composition.
//! - `mutate`: In-place state transitions with defined before/after states
//!   and returned artifacts.
//! - `iter`: Iteration as a zero-or-one-element sequence, with by-value,
//!   shared, and mutable variants.
//! - `convert`: Boundaries: `std::option::Option` interop, slice views of
//!   length 0 or 1, and `as_deref` projections through indirections.
//! - `shape`: Payload-shape specializations: reference payloads
//!   (`copied`/`cloned`), raw-pointer payloads, and the valueless
//!   presence flag.
//!
//! ## Payload shapes
//!
//! One generic type serves four payload shapes without duplicating the
//! combinator layer:
//!
//! - **Value** — `Opt<T>` owns its payload.
//! - **Reference** — `Opt<&T>` / `Opt<&mut T>` alias externally owned
//!   storage; copying the container copies the address, never the referent.
//! - **Pointer** — `Opt<*const T>` / `Opt<*mut T>`: presence is orthogonal
//!   to nullness, so a held null pointer is distinct from `None`.
//! - **Valueless** — `Opt<()>` (see [`Presence`]): presence is the entire
//!   state.
//!
//! ## Usage
//!
//! ```rust
//! use optkit::{Opt, none, some};
//!
//! let doubled = some(21).map(|x| x * 2);
//! assert_eq!(doubled, some(42));
//!
//! let missing: Opt<i32> = none();
//! assert_eq!(missing.map(|x| x * 2), none());
//! assert_eq!(missing.unwrap_or(7), 7);
//! ```

pub mod combinator;
pub mod convert;
pub mod iter;
pub mod mutate;
pub mod option;
pub mod shape;

pub use crate::iter::{IntoIter, Iter, IterMut};
pub use crate::option::{Opt, none, some};
pub use crate::shape::Presence;
