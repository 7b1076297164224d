use bigdecimal::BigDecimal;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::datatables::DataTablesRequest;
use super::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::database::entity::Entity;
use crate::database::models::{Employee, Gender};
use crate::database::repositories::EmployeeRepository;
use crate::error::AppError;
use crate::handlers::shared::{PagedDataTableResult, PagedResult};
use crate::shaping::ShapedRow;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeCommand {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub middle_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub position_id: Uuid,
    pub salary: BigDecimal,
    pub birthday: NaiveDate,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[serde(default)]
    pub gender: Gender,
    #[validate(length(min = 1, max = 50))]
    pub employee_number: String,
    #[validate(length(max = 10))]
    pub prefix: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
}

impl CreateEmployeeCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: EmployeeRepository + ?Sized,
    {
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4(),
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            position_id: self.position_id,
            salary: self.salary,
            birthday: self.birthday,
            email: self.email,
            gender: self.gender,
            employee_number: self.employee_number,
            prefix: self.prefix,
            phone: self.phone,
            position: None,
            created_at: now,
            updated_at: now,
        };

        let employee = repository.add(employee).await?;
        log::info!("Created employee {}", employee.id);
        Ok(employee.id)
    }
}

/// Replaces every settable field of an existing employee.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeCommand {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub middle_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub position_id: Uuid,
    pub salary: BigDecimal,
    pub birthday: NaiveDate,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[serde(default)]
    pub gender: Gender,
    #[validate(length(min = 1, max = 50))]
    pub employee_number: String,
    #[validate(length(max = 10))]
    pub prefix: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
}

impl UpdateEmployeeCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: EmployeeRepository + ?Sized,
    {
        let mut employee = repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Employee::NAME))?;

        employee.first_name = self.first_name;
        employee.middle_name = self.middle_name;
        employee.last_name = self.last_name;
        employee.position_id = self.position_id;
        employee.salary = self.salary;
        employee.birthday = self.birthday;
        employee.email = self.email;
        employee.gender = self.gender;
        employee.employee_number = self.employee_number;
        employee.prefix = self.prefix;
        employee.phone = self.phone;

        let id = employee.id;
        repository.update(employee).await?;
        log::info!("Updated employee {}", id);
        Ok(id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteEmployeeByIdCommand {
    pub id: Uuid,
}

impl DeleteEmployeeByIdCommand {
    pub async fn handle<R>(self, repository: &R) -> Result<Uuid, AppError>
    where
        R: EmployeeRepository + ?Sized,
    {
        let employee = repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Employee::NAME))?;

        repository.delete(&employee).await?;
        log::info!("Deleted employee {}", employee.id);
        Ok(employee.id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GetEmployeeByIdQuery {
    pub id: Uuid,
}

impl GetEmployeeByIdQuery {
    pub async fn handle<R>(self, repository: &R) -> Result<Employee, AppError>
    where
        R: EmployeeRepository + ?Sized,
    {
        repository
            .get_by_id(self.id)
            .await?
            .ok_or_else(|| AppError::not_found(Employee::NAME))
    }
}

/// Field-filtered employee list. Supplied filters are ORed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetEmployeesQuery {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub employee_number: Option<String>,
    pub position_title: Option<String>,
    pub order_by: Option<String>,
    pub page_number: i64,
    pub page_size: i64,
    pub fields: Option<String>,
}

impl Default for GetEmployeesQuery {
    fn default() -> Self {
        Self {
            last_name: None,
            first_name: None,
            email: None,
            employee_number: None,
            position_title: None,
            order_by: None,
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            fields: None,
        }
    }
}

impl GetEmployeesQuery {
    pub async fn handle<R>(self, repository: &R) -> Result<PagedResult<ShapedRow>, AppError>
    where
        R: EmployeeRepository + ?Sized,
    {
        let (data, counts) = repository.get_employee_response(&self).await?;
        Ok(PagedResult::success(
            data,
            self.page_number,
            self.page_size,
            counts,
        ))
    }
}

/// DataTables keyword search over employees.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PagedEmployeesQuery {
    pub request: DataTablesRequest,
}

impl PagedEmployeesQuery {
    pub async fn handle<R>(
        self,
        repository: &R,
    ) -> Result<PagedDataTableResult<ShapedRow>, AppError>
    where
        R: EmployeeRepository + ?Sized,
    {
        let (data, counts) = repository.get_paged_employee_response(&self).await?;
        Ok(PagedDataTableResult::success(data, self.request.draw, counts))
    }
}
