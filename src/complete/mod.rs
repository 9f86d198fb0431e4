//! Completion resolution: turn a cursor position in a partially typed SQL
//! buffer into a list of candidate object names.
//!
//! [`NameFragment`] recovers the dot-separated name under the cursor from the
//! raw text; [`Completer`] combines that fragment with the statement context
//! from [`crate::parse`] and asks a [`crate::MetadataProvider`] for matching
//! names.

pub mod fragment;
pub mod resolver;

pub use fragment::{NameFragment, Quoting};
pub use resolver::Completer;
