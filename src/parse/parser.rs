use crate::parse::event::ParseEvent;
use crate::parse::object::{DatabaseObject, ObjectKind};
use crate::parse::state::ParseState;
use crate::sql::{Keyword, TokenKind, Tokenizer};

/// Run the statement-context tracker over a SQL buffer with the default `;`
/// terminator.
pub fn parse(sql: &str) -> ParseState {
    parse_with_terminator(sql, ';')
}

/// Run the statement-context tracker over a SQL buffer.
///
/// A small recursive-descent loop over the streaming tokenizer, using one
/// token of lookahead. It recognizes statement keywords at statement
/// boundaries, clause keywords, parenthesized subqueries, table references in
/// FROM/JOIN/INTO positions (plus UPDATE targets), and procedure names after
/// CALL/EXEC, emitting a `ParseEvent` for each into the returned state.
///
/// Truncated buffers are fine: an unclosed subquery simply leaves more than
/// one live scope behind, which is exactly the signal completion uses.
pub fn parse_with_terminator(sql: &str, terminator: char) -> ParseState {
    let mut tokens = Tokenizer::new(sql).with_terminator(terminator);
    let mut state = ParseState::new();
    // One entry per open paren; true when it opened a subquery.
    let mut parens: Vec<bool> = Vec::new();
    let mut at_statement_start = true;

    while let Some(token) = tokens.next() {
        match token.kind {
            TokenKind::Terminator(_) => {
                if parens.is_empty() {
                    at_statement_start = true;
                }
                continue;
            }
            TokenKind::Punct('(') => {
                let is_subquery = match tokens.next() {
                    Some(next) if next.is_keyword(Keyword::Select) => true,
                    Some(next) => {
                        tokens.unget(next);
                        false
                    }
                    None => false,
                };
                if is_subquery {
                    state.apply(ParseEvent::EnteredSubquery);
                }
                parens.push(is_subquery);
            }
            TokenKind::Punct(')') => {
                if parens.pop() == Some(true) {
                    state.apply(ParseEvent::ExitedSubquery);
                }
            }
            TokenKind::Keyword(kw) if kw.is_statement() && at_statement_start => {
                state.apply(ParseEvent::FoundStatement(kw));
                match kw {
                    Keyword::Update => {
                        collect_references(&mut tokens, &mut state, ObjectKind::Table);
                    }
                    Keyword::Call | Keyword::Exec | Keyword::Execute => {
                        collect_references(&mut tokens, &mut state, ObjectKind::Procedure);
                    }
                    _ => {}
                }
            }
            TokenKind::Keyword(kw) if kw.is_clause() => {
                if matches!(kw, Keyword::Group | Keyword::Order) {
                    // Fold the BY of a two-word clause into its head keyword.
                    match tokens.next() {
                        Some(by) if by.is_keyword(Keyword::By) => {}
                        Some(other) => tokens.unget(other),
                        None => {}
                    }
                }
                state.apply(ParseEvent::FoundClause(kw));
                if matches!(kw, Keyword::From | Keyword::Join | Keyword::Into) {
                    collect_references(&mut tokens, &mut state, ObjectKind::Table);
                }
            }
            _ => {}
        }
        at_statement_start = false;
    }
    state
}

/// Consume a comma-separated list of (possibly qualified, possibly aliased)
/// object names, emitting one reference event per name. Stops, ungetting the
/// offending token, as soon as the list shape breaks.
fn collect_references(tokens: &mut Tokenizer<'_>, state: &mut ParseState, kind: ObjectKind) {
    loop {
        let Some(token) = tokens.next() else { return };
        let Some(first) = token.name().map(str::to_string) else {
            tokens.unget(token);
            return;
        };

        // Dot-qualified name: catalog.schema.name at most.
        let mut parts = vec![first];
        loop {
            match tokens.next() {
                Some(dot) if dot.kind.is_punct('.') => match tokens.next() {
                    Some(part) => match part.name() {
                        Some(name) => parts.push(name.to_string()),
                        None => {
                            tokens.unget(part);
                            break;
                        }
                    },
                    None => break,
                },
                Some(other) => {
                    tokens.unget(other);
                    break;
                }
                None => break,
            }
        }
        let Some(mut obj) = DatabaseObject::from_parts(kind, &parts) else {
            return;
        };

        // Optional alias: `AS alias` or a bare trailing identifier.
        match tokens.next() {
            Some(t) if t.is_keyword(Keyword::As) => match tokens.next() {
                Some(a) => match a.name() {
                    Some(alias) => obj = obj.with_alias(alias),
                    None => tokens.unget(a),
                },
                None => {}
            },
            Some(t) => match t.ident() {
                Some(alias) => obj = obj.with_alias(alias),
                None => tokens.unget(t),
            },
            None => {}
        }

        state.apply(match kind {
            ObjectKind::Table => ParseEvent::FoundTableReference(obj),
            ObjectKind::Procedure => ParseEvent::FoundProcedureExecution(obj),
        });

        match tokens.next() {
            Some(t) if t.kind.is_punct(',') => continue,
            Some(t) => {
                tokens.unget(t);
                return;
            }
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reference_names(sql: &str) -> Vec<String> {
        parse(sql)
            .object_references()
            .into_iter()
            .map(|o| o.name)
            .collect()
    }

    #[test]
    fn statement_boundary_discards_earlier_scope() {
        assert_eq!(reference_names("SELECT * FROM a; SELECT * FROM b"), ["b"]);
    }

    #[test]
    fn open_subquery_keeps_both_scopes_visible() {
        let state = parse("SELECT * FROM a WHERE x IN (SELECT * FROM b");
        assert!(state.in_subquery());
        let names: Vec<_> = state.object_references().into_iter().map(|o| o.name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn closed_subquery_discards_inner_scope() {
        let state = parse("SELECT * FROM a WHERE x IN (SELECT * FROM b)");
        assert!(!state.in_subquery());
        assert_eq!(
            state.object_references().into_iter().map(|o| o.name).collect::<Vec<_>>(),
            ["a"]
        );
        // The enclosing clause survives the subquery round-trip.
        assert_eq!(state.current_clause(), Some(Keyword::Where));
    }

    #[test]
    fn statement_without_from_yields_no_references() {
        let state = parse("SELECT 1 + 2");
        assert_eq!(state.statement(), Some(Keyword::Select));
        assert!(state.object_references().is_empty());
    }

    #[rstest]
    #[case("SELECT * FROM t AS x", Some("x"))]
    #[case("SELECT * FROM t x", Some("x"))]
    #[case("SELECT * FROM t", None)]
    fn alias_forms(#[case] sql: &str, #[case] alias: Option<&str>) {
        let refs = parse(sql).object_references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].alias.as_deref(), alias);
    }

    #[test]
    fn qualified_reference_parts() {
        let refs = parse("SELECT * FROM prod.dbo.orders o").object_references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].catalog.as_deref(), Some("prod"));
        assert_eq!(refs[0].schema.as_deref(), Some("dbo"));
        assert_eq!(refs[0].name, "orders");
        assert_eq!(refs[0].alias.as_deref(), Some("o"));
    }

    #[test]
    fn quoted_and_bracketed_references() {
        let refs = parse(r#"SELECT * FROM "My Schema".[My Table]"#).object_references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].schema.as_deref(), Some("My Schema"));
        assert_eq!(refs[0].name, "My Table");
    }

    #[test]
    fn comma_list_and_joins() {
        assert_eq!(reference_names("SELECT * FROM a, b"), ["a", "b"]);
        assert_eq!(
            reference_names("SELECT * FROM a JOIN b ON a.id = b.id LEFT JOIN c ON b.id = c.id"),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn join_keyword_does_not_become_alias() {
        let refs = parse("SELECT * FROM a INNER JOIN b ON a.x = b.x").object_references();
        assert_eq!(refs[0].alias, None);
        assert_eq!(refs.len(), 2);
    }

    #[rstest]
    #[case("CALL my_proc", Keyword::Call)]
    #[case("EXEC dbo.sp_help", Keyword::Exec)]
    #[case("EXECUTE util.cleanup(1)", Keyword::Execute)]
    fn procedure_execution(#[case] sql: &str, #[case] statement: Keyword) {
        let state = parse(sql);
        assert_eq!(state.statement(), Some(statement));
        let refs = state.object_references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ObjectKind::Procedure);
    }

    #[rstest]
    #[case("UPDATE accounts SET balance = 0", Keyword::Update, "accounts")]
    #[case("DELETE FROM sessions WHERE stale", Keyword::Delete, "sessions")]
    #[case("INSERT INTO audit_log (id) VALUES (1)", Keyword::Insert, "audit_log")]
    fn dml_targets_are_tracked(
        #[case] sql: &str,
        #[case] statement: Keyword,
        #[case] table: &str,
    ) {
        let state = parse(sql);
        assert_eq!(state.statement(), Some(statement));
        let refs = state.object_references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, table);
        assert_eq!(refs[0].kind, ObjectKind::Table);
    }

    #[rstest]
    #[case("SELECT a FROM t ORDER BY", Keyword::Order)]
    #[case("SELECT a FROM t GROUP BY", Keyword::Group)]
    #[case("SELECT a FROM t WHERE", Keyword::Where)]
    #[case("SELECT a FROM t HAVING", Keyword::Having)]
    fn clause_tracking(#[case] sql: &str, #[case] clause: Keyword) {
        assert_eq!(parse(sql).current_clause(), Some(clause));
    }

    #[test]
    fn plain_paren_group_is_not_a_subquery() {
        let state = parse("SELECT * FROM t WHERE (a + b) > 1 AND");
        assert!(!state.in_subquery());
        assert_eq!(state.current_clause(), Some(Keyword::Where));
        assert_eq!(reference_names("SELECT (1 + 2) FROM t"), ["t"]);
    }

    #[test]
    fn union_keeps_both_arms_visible() {
        // A UNION SELECT does not reset scope; references from both arms
        // staying visible is harmless for completion.
        assert_eq!(
            reference_names("SELECT x FROM a UNION SELECT y FROM b"),
            ["a", "b"]
        );
    }

    #[test]
    fn nested_subqueries_track_depth() {
        let state = parse("SELECT * FROM a WHERE x IN (SELECT y FROM b WHERE z IN (SELECT w FROM c");
        assert_eq!(state.depth(), 3);
        assert_eq!(
            state.object_references().into_iter().map(|o| o.name).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
    }
}
