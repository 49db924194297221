//! Immutable functional collections.
//!
//! [`Stream`] carries the operations that keep the element type: `map`,
//! `filter`, `sort_by`, `reduce`, predicate tests and structural edits.
//! [`Transform`] is a borrowed view of the same elements that carries the
//! operations producing a different type: `map`, `flat_map` and a seeded
//! `reduce`. A chain moves from one to the other with
//! [`Stream::as_transform`] (or [`as_transform`] through [`Stream::wrap`]).
//!
//! ```
//! use streams::stream;
//!
//! let labels = stream![10, 20, 50, 30, 70, 120]
//!     .map(|i, _| i / 10)
//!     .filter(|i, _| *i > 2)
//!     .as_transform::<String>()
//!     .map(|i, index| format!("{index}:{i}"));
//! assert_eq!(labels, stream!["0:5".to_string(), "1:3".into(), "2:7".into(), "3:12".into()]);
//! ```

pub mod error;
pub mod stream;
pub mod transform;

pub use error::{RangeBound, Result, StreamError};
pub use stream::Stream;
pub use transform::{as_transform, Transform};
