use crate::database::entity::{Entity, Relation};
use crate::database::value::SqlValue;
use crate::error::AppError;

use super::Specification;

/// A rendered SELECT and its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    sql: String,
    binds: Vec<SqlValue>,
}

impl SelectQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn binds(&self) -> &[SqlValue] {
        &self.binds
    }

    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.binds)
    }

    /// Wraps the query so it yields its row count.
    pub fn into_count(self) -> SelectQuery {
        SelectQuery {
            sql: format!("SELECT COUNT(*) FROM ({}) AS counted", self.sql),
            binds: self.binds,
        }
    }
}

pub struct SpecificationEvaluator;

impl SpecificationEvaluator {
    /// Renders `spec` against `T`'s table.
    ///
    /// Steps apply in a fixed order: criteria, typed includes, named
    /// includes, ordering, then the skip/take window. The output depends
    /// only on the specification.
    pub fn get_query<T: Entity>(spec: &Specification<T>) -> Result<SelectQuery, AppError> {
        let mut binds = Vec::new();
        let mut joins: Vec<Relation> = Vec::new();

        let where_clause = spec.criteria().map(|criteria| {
            for relation in criteria.expr().relations() {
                push_join(&mut joins, relation);
            }
            criteria.expr().to_sql(T::TABLE, &mut binds)
        });

        for relation in spec.includes() {
            push_join(&mut joins, *relation);
        }

        for path in spec.include_strings() {
            let relation = T::relation(path)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown relation: {}", path)))?;
            push_join(&mut joins, relation);
        }

        let mut columns = T::select_list();
        for relation in &joins {
            columns.extend(relation.select_list());
        }

        let mut sql = format!("SELECT {} FROM {}", columns.join(", "), T::TABLE);
        for relation in &joins {
            sql.push(' ');
            sql.push_str(&relation.join_sql(T::TABLE));
        }

        if let Some(condition) = where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(&condition);
        }

        sql.push_str(" ORDER BY ");
        sql.push_str(&order_clause::<T>(spec.order_by_field())?);

        if spec.is_paging_enabled() {
            match (spec.take(), spec.skip()) {
                (Some(take), Some(skip)) => {
                    sql.push_str(" LIMIT ? OFFSET ?");
                    binds.push(SqlValue::Integer(take));
                    binds.push(SqlValue::Integer(skip));
                }
                (Some(take), None) => {
                    sql.push_str(" LIMIT ?");
                    binds.push(SqlValue::Integer(take));
                }
                (None, Some(skip)) => {
                    sql.push_str(" LIMIT -1 OFFSET ?");
                    binds.push(SqlValue::Integer(skip));
                }
                (None, None) => {}
            }
        }

        Ok(SelectQuery { sql, binds })
    }

    pub fn get_count_query<T: Entity>(spec: &Specification<T>) -> Result<SelectQuery, AppError> {
        Self::get_query(spec).map(SelectQuery::into_count)
    }
}

fn push_join(joins: &mut Vec<Relation>, relation: Relation) {
    if !joins.iter().any(|joined| joined.alias == relation.alias) {
        joins.push(relation);
    }
}

/// Parses `Field [asc|desc], ...` into an ORDER BY list. The id is always
/// the last key so equal sort values page deterministically.
fn order_clause<T: Entity>(order_by: Option<&str>) -> Result<String, AppError> {
    let mut terms = Vec::new();
    let mut ordered_by_id = false;

    for term in order_by.unwrap_or_default().split(',') {
        let mut parts = term.split_whitespace();
        let Some(field) = parts.next() else {
            continue;
        };

        let column =
            T::column(field).ok_or_else(|| AppError::UnknownField(field.to_string()))?;
        let direction = match parts.next() {
            None => "ASC",
            Some(dir) if dir.eq_ignore_ascii_case("asc") => "ASC",
            Some(dir) if dir.eq_ignore_ascii_case("desc") => "DESC",
            Some(dir) => {
                return Err(AppError::BadRequest(format!(
                    "Invalid sort direction: {}",
                    dir
                )));
            }
        };
        if let Some(extra) = parts.next() {
            return Err(AppError::BadRequest(format!(
                "Invalid order by term: {}",
                extra
            )));
        }

        ordered_by_id |= column.name == "id";
        terms.push(format!("{} {}", column.sort_expr(T::TABLE), direction));
    }

    if !ordered_by_id {
        terms.push(format!("{}.id ASC", T::TABLE));
    }

    Ok(terms.join(", "))
}
