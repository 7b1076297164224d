use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use uuid::Uuid;

use super::macros::shape_fields;
use crate::database::entity::{Column, Entity};
use crate::database::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn from_prefixed_row(row: &SqliteRow, prefix: &str) -> Result<Self, sqlx::Error> {
        let col = |name: &str| format!("{}{}", prefix, name);
        Ok(Self {
            id: row.try_get(col("id").as_str())?,
            name: row.try_get(col("name").as_str())?,
            created_at: row.try_get(col("created_at").as_str())?,
            updated_at: row.try_get(col("updated_at").as_str())?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Department {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Self::from_prefixed_row(row, "")
    }
}

shape_fields!(Department {
    "Id" => id,
    "Name" => name,
    "CreatedAt" => created_at,
    "UpdatedAt" => updated_at,
});

impl Entity for Department {
    const NAME: &'static str = "Department";
    const TABLE: &'static str = "departments";
    const DEFAULT_ORDER: &'static str = "Name";
    const COLUMNS: &'static [Column] = &[
        Column::plain("Id", "id"),
        Column::plain("Name", "name"),
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
