use std::fmt;
use std::marker::PhantomData;

use crate::database::entity::Relation;
use crate::database::value::SqlValue;

/// A column on the queried entity or on one of its to-one relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    pub relation: Option<Relation>,
    pub column: &'static str,
}

impl ColumnRef {
    pub const fn own(column: &'static str) -> Self {
        Self {
            relation: None,
            column,
        }
    }

    pub const fn related(relation: Relation, column: &'static str) -> Self {
        Self {
            relation: Some(relation),
            column,
        }
    }

    fn qualified(&self, owner_table: &str) -> String {
        let qualifier = self
            .relation
            .as_ref()
            .map_or(owner_table, |relation| relation.alias);
        format!("{}.{}", qualifier, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Substring containment, the only text comparison filters use.
    ///
    /// Case folding is ASCII only: SQLite's `LOWER` leaves other letters
    /// untouched, so "É" and "é" are different terms.
    Contains {
        column: ColumnRef,
        term: String,
        case_insensitive: bool,
    },
    All(Vec<Expr>),
    Any(Vec<Expr>),
}

impl Expr {
    /// Renders the expression as a SQL condition, pushing its parameters
    /// onto `binds` in placeholder order.
    pub fn to_sql(&self, owner_table: &str, binds: &mut Vec<SqlValue>) -> String {
        match self {
            Expr::Contains {
                column,
                term,
                case_insensitive: true,
            } => {
                binds.push(SqlValue::Text(term.to_ascii_lowercase()));
                format!("instr(LOWER({}), ?) > 0", column.qualified(owner_table))
            }
            Expr::Contains {
                column,
                term,
                case_insensitive: false,
            } => {
                binds.push(SqlValue::Text(term.clone()));
                format!("instr({}, ?) > 0", column.qualified(owner_table))
            }
            Expr::All(parts) => join(parts, " AND ", "1 = 1", owner_table, binds),
            Expr::Any(parts) => join(parts, " OR ", "1 = 0", owner_table, binds),
        }
    }

    /// Relations the expression reads from, first use first.
    pub fn relations(&self) -> Vec<Relation> {
        let mut found = Vec::new();
        self.collect_relations(&mut found);
        found
    }

    fn collect_relations(&self, found: &mut Vec<Relation>) {
        match self {
            Expr::Contains { column, .. } => {
                if let Some(relation) = column.relation {
                    if !found.iter().any(|seen| seen.alias == relation.alias) {
                        found.push(relation);
                    }
                }
            }
            Expr::All(parts) | Expr::Any(parts) => {
                for part in parts {
                    part.collect_relations(found);
                }
            }
        }
    }
}

fn join(
    parts: &[Expr],
    separator: &str,
    empty: &str,
    owner_table: &str,
    binds: &mut Vec<SqlValue>,
) -> String {
    match parts {
        [] => empty.to_string(),
        [single] => single.to_sql(owner_table, binds),
        _ => {
            let rendered: Vec<String> = parts
                .iter()
                .map(|part| part.to_sql(owner_table, binds))
                .collect();
            format!("({})", rendered.join(separator))
        }
    }
}

/// A boolean filter over entity `T`.
pub struct Predicate<T> {
    expr: Expr,
    _entity: PhantomData<fn(&T)>,
}

impl<T> Predicate<T> {
    pub fn contains(column: ColumnRef, term: impl Into<String>) -> Self {
        Self::from_expr(Expr::Contains {
            column,
            term: term.into(),
            case_insensitive: false,
        })
    }

    pub fn contains_ignore_case(column: ColumnRef, term: impl Into<String>) -> Self {
        Self::from_expr(Expr::Contains {
            column,
            term: term.into(),
            case_insensitive: true,
        })
    }

    pub fn from_expr(expr: Expr) -> Self {
        Self {
            expr,
            _entity: PhantomData,
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self::from_expr(self.expr.clone())
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.expr).finish()
    }
}

impl<T> PartialEq for Predicate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}

/// Composes optional clauses into one predicate.
///
/// The builder starts empty. An empty builder builds to `None`, which
/// callers treat as "match everything". Clauses combine left to right, so
/// `a.or(b).and(c)` is `(a OR b) AND c`.
pub struct PredicateBuilder<T> {
    expr: Option<Expr>,
    _entity: PhantomData<fn(&T)>,
}

impl<T> Default for PredicateBuilder<T> {
    fn default() -> Self {
        Self {
            expr: None,
            _entity: PhantomData,
        }
    }
}

impl<T> PredicateBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(self, predicate: Predicate<T>) -> Self {
        let expr = match self.expr {
            None => predicate.expr,
            Some(Expr::All(mut parts)) => {
                parts.push(predicate.expr);
                Expr::All(parts)
            }
            Some(existing) => Expr::All(vec![existing, predicate.expr]),
        };
        Self::started(expr)
    }

    pub fn or(self, predicate: Predicate<T>) -> Self {
        let expr = match self.expr {
            None => predicate.expr,
            Some(Expr::Any(mut parts)) => {
                parts.push(predicate.expr);
                Expr::Any(parts)
            }
            Some(existing) => Expr::Any(vec![existing, predicate.expr]),
        };
        Self::started(expr)
    }

    /// Whether at least one clause was added.
    pub fn is_started(&self) -> bool {
        self.expr.is_some()
    }

    pub fn build(self) -> Option<Predicate<T>> {
        self.expr.map(Predicate::from_expr)
    }

    fn started(expr: Expr) -> Self {
        Self {
            expr: Some(expr),
            _entity: PhantomData,
        }
    }
}

/// A filter term with surrounding whitespace removed, or `None` when blank.
pub fn filter_term(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|term| !term.is_empty())
}
