use crate::parse::object::DatabaseObject;
use crate::sql::Keyword;

/// Everything the recursive-descent driver can tell the tracker.
///
/// A closed set of variants consumed by a single transition function
/// (`ParseState::apply`), so the whole transition table is checkable in one
/// `match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// A statement keyword at a statement boundary. Resets clause and
    /// collapses the scope stack.
    FoundStatement(Keyword),
    /// A clause keyword (FROM, WHERE, ORDER, ...) inside the current
    /// statement.
    FoundClause(Keyword),
    /// `(` followed by a nested SELECT.
    EnteredSubquery,
    /// The matching `)` of a subquery.
    ExitedSubquery,
    /// A table reference in a FROM/JOIN-like position.
    FoundTableReference(DatabaseObject),
    /// A procedure name after CALL/EXEC.
    FoundProcedureExecution(DatabaseObject),
}
