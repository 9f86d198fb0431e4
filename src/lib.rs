//! Incremental SQL tokenizer, statement-context tracker, and completion
//! resolver for interactive SQL editing.
//!
//! The pipeline: a lenient streaming [`sql::Tokenizer`] feeds a small
//! recursive-descent driver ([`parse::parse`]) that tracks the statement
//! type, current clause, and a stack of table-reference scopes; the
//! [`complete::Completer`] inspects that state plus the partially typed name
//! under the cursor and asks a [`metadata::MetadataProvider`] for matching
//! catalogs, tables, columns, and procedures.
//!
//! Everything is rebuilt from the raw buffer on each completion request;
//! there is no state shared across requests.

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(testing, test);
reexport!(complete);
reexport!(metadata);
reexport!(parse);
reexport!(sql);
reexport!(config);
reexport!(error);

#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};
