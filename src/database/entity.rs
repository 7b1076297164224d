//! Table metadata shared by the repositories and the specification evaluator.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use uuid::Uuid;

use crate::database::value::SqlValue;
use crate::shaping::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Plain,
    /// Decimal stored as TEXT; sorted numerically.
    Decimal,
}

/// A persisted column and the public field name it is exposed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn plain(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            kind: ColumnKind::Plain,
        }
    }

    pub const fn decimal(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            kind: ColumnKind::Decimal,
        }
    }

    pub fn qualified(&self, table: &str) -> String {
        format!("{}.{}", table, self.name)
    }

    pub fn sort_expr(&self, table: &str) -> String {
        match self.kind {
            ColumnKind::Plain => self.qualified(table),
            ColumnKind::Decimal => format!("CAST({} AS REAL)", self.qualified(table)),
        }
    }
}

/// A to-one relation that can be eagerly loaded through a LEFT JOIN.
///
/// Joined columns are selected as `{alias}__{column}` so the owning row
/// decoder can find them without clashing with its own columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub name: &'static str,
    pub alias: &'static str,
    pub table: &'static str,
    pub foreign_key: &'static str,
    pub columns: &'static [Column],
}

impl Relation {
    pub fn join_sql(&self, owner_table: &str) -> String {
        format!(
            "LEFT JOIN {table} AS {alias} ON {alias}.id = {owner}.{fk}",
            table = self.table,
            alias = self.alias,
            owner = owner_table,
            fk = self.foreign_key
        )
    }

    pub fn select_list(&self) -> impl Iterator<Item = String> + '_ {
        self.columns.iter().map(move |column| {
            format!(
                "{alias}.{name} AS {prefix}{name}",
                alias = self.alias,
                name = column.name,
                prefix = self.prefix()
            )
        })
    }

    pub fn prefix(&self) -> String {
        format!("{}__", self.alias)
    }
}

pub trait Entity: Shape + for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Name used in client-facing messages, e.g. "Employee Not Found."
    const NAME: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [Column];
    const DEFAULT_ORDER: &'static str;
    const RELATIONS: &'static [Relation] = &[];

    fn id(&self) -> Uuid;

    /// Column/value pairs for every persisted column, `id` included.
    fn values(&self) -> Vec<(&'static str, SqlValue)>;

    /// Refresh audit timestamps before a write.
    fn stamp(&mut self, now: DateTime<Utc>, is_new: bool);

    fn column(field: &str) -> Option<&'static Column> {
        Self::COLUMNS
            .iter()
            .find(|column| column.field.eq_ignore_ascii_case(field))
    }

    fn relation(name: &str) -> Option<Relation> {
        Self::RELATIONS
            .iter()
            .find(|relation| relation.name.eq_ignore_ascii_case(name))
            .copied()
    }

    fn select_list() -> Vec<String> {
        Self::COLUMNS
            .iter()
            .map(|column| format!("{} AS {}", column.qualified(Self::TABLE), column.name))
            .collect()
    }
}

/// Decodes a relation's joined columns, if the relation was joined and matched.
pub fn optional_relation<T>(
    row: &SqliteRow,
    relation: &Relation,
    decode: impl FnOnce(&SqliteRow, &str) -> Result<T, sqlx::Error>,
) -> Result<Option<T>, sqlx::Error> {
    let prefix = relation.prefix();
    match row.try_get::<Option<Uuid>, _>(format!("{}id", prefix).as_str()) {
        Ok(Some(_)) => decode(row, &prefix).map(Some),
        Ok(None) | Err(sqlx::Error::ColumnNotFound(_)) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Decodes a decimal stored as TEXT.
pub fn decimal_column(row: &SqliteRow, name: &str) -> Result<bigdecimal::BigDecimal, sqlx::Error> {
    let raw: String = row.try_get(name)?;
    raw.parse().map_err(|error| sqlx::Error::ColumnDecode {
        index: name.to_string(),
        source: Box::new(error),
    })
}
