//! Statement-context tracking over the token stream.
//!
//! The driver in `parser` walks the streaming tokenizer and reduces what it
//! sees to a closed set of `ParseEvent`s; `ParseState` folds those events
//! into the three things completion cares about: the current statement
//! keyword, the current clause keyword, and a stack of reference scopes (one
//! per live subquery nesting level).
//!
//! This is not grammar validation. Unfinished buffers are the normal case,
//! and an unclosed subquery deliberately leaves its scope on the stack.

pub mod event;
pub mod object;
pub mod parser;
pub mod state;

pub use event::ParseEvent;
pub use object::{DatabaseObject, ObjectKind};
pub use parser::{parse, parse_with_terminator};
pub use state::{ParseState, Scope};
