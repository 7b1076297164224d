use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use uuid::Uuid;

use super::Position;
use super::macros::{shape_fields, string_enum};
use crate::database::entity::{Column, Entity, Relation, decimal_column, optional_relation};
use crate::database::value::SqlValue;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub enum Gender {
        #[default]
        Male => "male",
        Female => "female",
    }
}

pub const POSITION: Relation = Relation {
    name: "Position",
    alias: "position",
    table: "positions",
    foreign_key: "position_id",
    columns: <Position as Entity>::COLUMNS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub position_id: Uuid,
    pub salary: BigDecimal,
    pub birthday: NaiveDate,
    pub email: String,
    pub gender: Gender,
    pub employee_number: String,
    pub prefix: Option<String>,
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, SqliteRow> for Employee {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            middle_name: row.try_get("middle_name")?,
            last_name: row.try_get("last_name")?,
            position_id: row.try_get("position_id")?,
            salary: decimal_column(row, "salary")?,
            birthday: row.try_get("birthday")?,
            email: row.try_get("email")?,
            gender: row.try_get("gender")?,
            employee_number: row.try_get("employee_number")?,
            prefix: row.try_get("prefix")?,
            phone: row.try_get("phone")?,
            position: optional_relation(row, &POSITION, Position::from_prefixed_row)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

shape_fields!(Employee {
    "Id" => id,
    "FirstName" => first_name,
    "MiddleName" => middle_name,
    "LastName" => last_name,
    "PositionId" => position_id,
    "Salary" => salary,
    "Birthday" => birthday,
    "Email" => email,
    "Gender" => gender,
    "EmployeeNumber" => employee_number,
    "Prefix" => prefix,
    "Phone" => phone,
    "Position" => position,
    "CreatedAt" => created_at,
    "UpdatedAt" => updated_at,
});

impl Entity for Employee {
    const NAME: &'static str = "Employee";
    const TABLE: &'static str = "employees";
    const DEFAULT_ORDER: &'static str = "LastName";
    const COLUMNS: &'static [Column] = &[
        Column::plain("Id", "id"),
        Column::plain("FirstName", "first_name"),
        Column::plain("MiddleName", "middle_name"),
        Column::plain("LastName", "last_name"),
        Column::plain("PositionId", "position_id"),
        Column::decimal("Salary", "salary"),
        Column::plain("Birthday", "birthday"),
        Column::plain("Email", "email"),
        Column::plain("Gender", "gender"),
        Column::plain("EmployeeNumber", "employee_number"),
        Column::plain("Prefix", "prefix"),
        Column::plain("Phone", "phone"),
        Column::plain("CreatedAt", "created_at"),
        Column::plain("UpdatedAt", "updated_at"),
    ];
    const RELATIONS: &'static [Relation] = &[POSITION];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("id", self.id.into()),
            ("first_name", self.first_name.clone().into()),
            ("middle_name", self.middle_name.clone().into()),
            ("last_name", self.last_name.clone().into()),
            ("position_id", self.position_id.into()),
            ("salary", self.salary.to_string().into()),
            ("birthday", self.birthday.into()),
            ("email", self.email.clone().into()),
            ("gender", self.gender.to_string().into()),
            ("employee_number", self.employee_number.clone().into()),
            ("prefix", self.prefix.clone().into()),
            ("phone", self.phone.clone().into()),
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
