use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use uuid::Uuid;

use super::macros::shape_fields;
use crate::database::entity::{Column, Entity, decimal_column};
use crate::database::value::SqlValue;

/// A named salary band. `min_salary <= max_salary` is checked by the
/// create/update commands, not by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub id: Uuid,
    pub name: String,
    pub min_salary: BigDecimal,
    pub max_salary: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SalaryRange {
    pub fn new(name: impl Into<String>, min_salary: BigDecimal, max_salary: BigDecimal) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            min_salary,
            max_salary,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn from_prefixed_row(row: &SqliteRow, prefix: &str) -> Result<Self, sqlx::Error> {
        let col = |name: &str| format!("{}{}", prefix, name);
        Ok(Self {
            id: row.try_get(col("id").as_str())?,
            name: row.try_get(col("name").as_str())?,
            min_salary: decimal_column(row, &col("min_salary"))?,
            max_salary: decimal_column(row, &col("max_salary"))?,
            created_at: row.try_get(col("created_at").as_str())?,
            updated_at: row.try_get(col("updated_at").as_str())?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for SalaryRange {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Self::from_prefixed_row(row, "")
    }
}

shape_fields!(SalaryRange {
    "Id" => id,
    "Name" => name,
    "MinSalary" => min_salary,
    "MaxSalary" => max_salary,
    "CreatedAt" => created_at,
    "UpdatedAt" => updated_at,
});

impl Entity for SalaryRange {
    const NAME: &'static str = "SalaryRange";
    const TABLE: &'static str = "salary_ranges";
    const DEFAULT_ORDER: &'static str = "Name";
    const COLUMNS: &'static [Column] = &[
        Column::plain("Id", "id"),
        Column::plain("Name", "name"),
        Column::decimal("MinSalary", "min_salary"),
        Column::decimal("MaxSalary", "max_salary"),
        Column::plain("CreatedAt", "created_at"),
        Column::plain("UpdatedAt", "updated_at"),
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("id", self.id.into()),
            ("name", self.name.clone().into()),
            ("min_salary", self.min_salary.to_string().into()),
            ("max_salary", self.max_salary.to_string().into()),
            ("created_at", self.created_at.into()),
            ("updated_at", self.updated_at.into()),
        ]
    }

    fn stamp(&mut self, now: DateTime<Utc>, is_new: bool) {
        if is_new {
            self.created_at = now;
        }
        self.updated_at = now;
    }
}
