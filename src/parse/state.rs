use crate::parse::event::ParseEvent;
use crate::parse::object::DatabaseObject;
use crate::sql::Keyword;

/// The references visible within one nesting level (the top-level statement
/// or one subquery).
pub type Scope = Vec<DatabaseObject>;

/// Accumulated statement context: current statement keyword, current clause
/// keyword, and a stack of reference scopes, one per live nesting level.
///
/// The bottom scope is always present and is never popped. A parallel clause
/// stack restores the enclosing clause when a subquery is exited.
///
/// Rebuilt from scratch for every completion request; nothing here outlives
/// one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState {
    statement: Option<Keyword>,
    clause: Option<Keyword>,
    scopes: Vec<Scope>,
    clause_stack: Vec<Option<Keyword>>,
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseState {
    pub fn new() -> Self {
        Self {
            statement: None,
            clause: None,
            scopes: vec![Scope::new()],
            clause_stack: Vec::new(),
        }
    }

    /// Single transition function over the closed event set.
    pub fn apply(&mut self, event: ParseEvent) {
        match event {
            ParseEvent::FoundStatement(kw) => {
                // A new top-level statement discards all accumulated scope;
                // for `;`-separated buffers only the last statement matters.
                self.statement = Some(kw);
                self.clause = None;
                self.scopes.truncate(1);
                self.scopes[0].clear();
                self.clause_stack.clear();
            }
            ParseEvent::FoundClause(kw) => {
                self.clause = Some(kw);
            }
            ParseEvent::EnteredSubquery => {
                self.clause_stack.push(self.clause.take());
                self.scopes.push(Scope::new());
            }
            ParseEvent::ExitedSubquery => {
                // Inner references go out of scope with the closing paren.
                if self.scopes.len() > 1 {
                    self.scopes.pop();
                }
                self.clause = self.clause_stack.pop().flatten();
            }
            ParseEvent::FoundTableReference(obj) | ParseEvent::FoundProcedureExecution(obj) => {
                // Bottom scope is never popped, so a current scope always
                // exists.
                if let Some(scope) = self.scopes.last_mut() {
                    scope.push(obj);
                }
            }
        }
    }

    /// The statement keyword currently being tracked, if any.
    pub fn statement(&self) -> Option<Keyword> {
        self.statement
    }

    /// The clause keyword the parse is currently inside, if any.
    pub fn current_clause(&self) -> Option<Keyword> {
        self.clause
    }

    /// All references across every live nesting level, bottom-up. Inner
    /// scopes that already closed were discarded at their `)`, so they never
    /// appear here.
    pub fn object_references(&self) -> Vec<DatabaseObject> {
        self.scopes.iter().flatten().cloned().collect()
    }

    /// Number of live nesting levels; 1 means no open subquery.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// True while the buffer left an unclosed subquery behind.
    pub fn in_subquery(&self) -> bool {
        self.depth() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::object::DatabaseObject;

    #[test]
    fn statement_collapses_scope_stack() {
        let mut state = ParseState::new();
        state.apply(ParseEvent::FoundStatement(Keyword::Select));
        state.apply(ParseEvent::FoundTableReference(DatabaseObject::table("a")));
        state.apply(ParseEvent::EnteredSubquery);
        state.apply(ParseEvent::FoundTableReference(DatabaseObject::table("b")));
        assert_eq!(state.depth(), 2);

        state.apply(ParseEvent::FoundStatement(Keyword::Select));
        assert_eq!(state.depth(), 1);
        assert!(state.object_references().is_empty());
        assert_eq!(state.current_clause(), None);
    }

    #[test]
    fn subquery_exit_discards_inner_references_and_restores_clause() {
        let mut state = ParseState::new();
        state.apply(ParseEvent::FoundStatement(Keyword::Select));
        state.apply(ParseEvent::FoundClause(Keyword::Where));
        state.apply(ParseEvent::EnteredSubquery);
        assert_eq!(state.current_clause(), None);

        state.apply(ParseEvent::FoundClause(Keyword::From));
        state.apply(ParseEvent::FoundTableReference(DatabaseObject::table("b")));
        assert_eq!(state.object_references().len(), 1);

        state.apply(ParseEvent::ExitedSubquery);
        assert!(state.object_references().is_empty());
        assert_eq!(state.current_clause(), Some(Keyword::Where));
        assert!(!state.in_subquery());
    }

    #[test]
    fn bottom_scope_survives_spurious_exits() {
        let mut state = ParseState::new();
        state.apply(ParseEvent::FoundTableReference(DatabaseObject::table("a")));
        state.apply(ParseEvent::ExitedSubquery);
        state.apply(ParseEvent::ExitedSubquery);
        assert_eq!(state.depth(), 1);
        assert_eq!(state.object_references().len(), 1);
    }

    #[test]
    fn references_flatten_bottom_up() {
        let mut state = ParseState::new();
        state.apply(ParseEvent::FoundTableReference(DatabaseObject::table("a")));
        state.apply(ParseEvent::EnteredSubquery);
        state.apply(ParseEvent::FoundTableReference(DatabaseObject::table("b")));
        let names: Vec<_> = state
            .object_references()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
