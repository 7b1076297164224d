#![allow(dead_code)]

use std::str::FromStr;

use actix_web::web;
use anyhow::Result;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

use hr_api::AppState;
use hr_api::config::Config;
use hr_api::database::init_database;
use hr_api::database::models::{Department, Employee, Gender, Position, SalaryRange};
use hr_api::database::repositories::{GenericRepository, SqlRepository};

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    pub config: Config,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let mut config = Config::test_config()?;
        config.database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        config.database_max_connections = 5;

        let pool = init_database(&config).await?;

        Ok(TestDb {
            pool,
            config,
            _temp_dir: temp_dir,
        })
    }

    pub fn repository<T: hr_api::database::entity::Entity>(&self) -> SqlRepository<T> {
        SqlRepository::new(self.pool.clone())
    }

    pub fn app_state(&self) -> web::Data<AppState> {
        web::Data::new(AppState::new(self.pool.clone(), self.config.clone()))
    }
}

pub fn decimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

pub async fn seed_department(db: &TestDb, name: &str) -> Department {
    db.repository::<Department>()
        .add(Department::new(name))
        .await
        .unwrap()
}

pub async fn seed_salary_range(db: &TestDb, name: &str, min: &str, max: &str) -> SalaryRange {
    db.repository::<SalaryRange>()
        .add(SalaryRange::new(name, decimal(min), decimal(max)))
        .await
        .unwrap()
}

/// A position with its own department and salary range.
pub async fn seed_position(db: &TestDb, title: &str, number: &str, department: &str) -> Position {
    let department = seed_department(db, department).await;
    let salary_range = seed_salary_range(db, &format!("{} band", number), "1000", "9000").await;

    db.repository::<Position>()
        .add(Position::new(
            title,
            number,
            format!("{} role", title),
            department.id,
            salary_range.id,
        ))
        .await
        .unwrap()
}

pub fn new_employee(
    first_name: &str,
    last_name: &str,
    email: &str,
    employee_number: &str,
    position_id: Uuid,
    salary: &str,
) -> Employee {
    let now = Utc::now();
    Employee {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        middle_name: None,
        last_name: last_name.to_string(),
        position_id,
        salary: decimal(salary),
        birthday: NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
        email: email.to_string(),
        gender: Gender::Female,
        employee_number: employee_number.to_string(),
        prefix: None,
        phone: None,
        position: None,
        created_at: now,
        updated_at: now,
    }
}

pub async fn seed_employee(
    db: &TestDb,
    first_name: &str,
    last_name: &str,
    employee_number: &str,
    position_id: Uuid,
    salary: &str,
) -> Employee {
    let email = format!("{}@example.com", first_name.to_lowercase());
    db.repository::<Employee>()
        .add(new_employee(
            first_name,
            last_name,
            &email,
            employee_number,
            position_id,
            salary,
        ))
        .await
        .unwrap()
}
