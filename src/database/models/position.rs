use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use uuid::Uuid;

use super::macros::shape_fields;
use super::{Department, SalaryRange};
use crate::database::entity::{Column, Entity, Relation, optional_relation};
use crate::database::value::SqlValue;

pub const DEPARTMENT: Relation = Relation {
    name: "Department",
    alias: "department",
    table: "departments",
    foreign_key: "department_id",
    columns: <Department as Entity>::COLUMNS,
};

pub const SALARY_RANGE: Relation = Relation {
    name: "SalaryRange",
    alias: "salary_range",
    table: "salary_ranges",
    foreign_key: "salary_range_id",
    columns: <SalaryRange as Entity>::COLUMNS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: Uuid,
    pub position_title: String,
    pub position_number: String,
    pub position_description: String,
    pub department_id: Uuid,
    pub salary_range_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Position {
    pub fn new(
        position_title: impl Into<String>,
        position_number: impl Into<String>,
        position_description: impl Into<String>,
        department_id: Uuid,
        salary_range_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            position_title: position_title.into(),
            position_number: position_number.into(),
            position_description: position_description.into(),
            department_id,
            salary_range_id,
            department: None,
            salary_range: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn from_prefixed_row(row: &SqliteRow, prefix: &str) -> Result<Self, sqlx::Error> {
        let col = |name: &str| format!("{}{}", prefix, name);
        // Nested relations are only joined one level deep.
        let (department, salary_range) = if prefix.is_empty() {
            (
                optional_relation(row, &DEPARTMENT, Department::from_prefixed_row)?,
                optional_relation(row, &SALARY_RANGE, SalaryRange::from_prefixed_row)?,
            )
        } else {
            (None, None)
        };

        Ok(Self {
            id: row.try_get(col("id").as_str())?,
            position_title: row.try_get(col("position_title").as_str())?,
            position_number: row.try_get(col("position_number").as_str())?,
            position_description: row.try_get(col("position_description").as_str())?,
            department_id: row.try_get(col("department_id").as_str())?,
            salary_range_id: row.try_get(col("salary_range_id").as_str())?,
            department,
            salary_range,
            created_at: row.try_get(col("created_at").as_str())?,
            updated_at: row.try_get(col("updated_at").as_str())?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Position {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Self::from_prefixed_row(row, "")
    }
}

shape_fields!(Position {
    "Id" => id,
    "PositionTitle" => position_title,
    "PositionNumber" => position_number,
    "PositionDescription" => position_description,
    "DepartmentId" => department_id,
    "SalaryRangeId" => salary_range_id,
    "Department" => department,
    "SalaryRange" => salary_range,
    "CreatedAt" => created_at,
    "UpdatedAt" => updated_at,
});

impl Entity for Position {
    const NAME: &'static str = "Position";
    const TABLE: &'static str = "positions";
    const DEFAULT_ORDER: &'static str = "PositionNumber";
    const COLUMNS: &'static [Column] = &[
        Column::plain("Id", "id"),
        Column::plain("PositionTitle", "position_title"),
        Column::plain("PositionNumber", "position_number"),
        Column::plain("PositionDescription", "position_description"),
        Column::plain("DepartmentId", "department_id"),
        Column::plain("SalaryRangeId", "salary_range_id"),
        Column::plain("CreatedAt", "created_at"),
        Column::plain("UpdatedAt", "updated_at"),
    ];
    const RELATIONS: &'static [Relation] = &[DEPARTMENT, SALARY_RANGE];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("id", self.id.into()),
            ("position_title", self.position_title.clone().into()),
            ("position_number", self.position_number.clone().into()),
            (
                "position_description",
                self.position_description.clone().into(),
            ),
            ("department_id", self.department_id.into()),
            ("salary_range_id", self.salary_range_id.into()),
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
