use pretty_assertions::assert_eq;
use uuid::Uuid;

use hr_api::database::models::{Employee, Position, SalaryRange};
use hr_api::database::repositories::GenericRepository;
use hr_api::error::AppError;
use hr_api::features::departments::{CreateDepartmentCommand, GetDepartmentsQuery};
use hr_api::features::employees::{DeleteEmployeeByIdCommand, GetEmployeeByIdQuery};
use hr_api::features::positions::{CreatePositionCommand, UpdatePositionCommand};
use hr_api::features::salary_ranges::{CreateSalaryRangeCommand, UpdateSalaryRangeCommand};
use hr_api::specification::Specification;

mod common;

#[tokio::test]
async fn test_update_of_missing_salary_range_is_not_found() {
    let db = common::TestDb::new().await.unwrap();
    let repo = db.repository::<SalaryRange>();

    let command = UpdateSalaryRangeCommand {
        id: Uuid::new_v4(),
        name: "Senior".to_string(),
        min_salary: common::decimal("5000"),
        max_salary: common::decimal("9000"),
    };
    let error = command.handle(&repo).await.unwrap_err();

    assert!(matches!(error, AppError::NotFound(_)));
    assert_eq!(error.to_string(), "SalaryRange Not Found.");
    assert_eq!(repo.count(&Specification::default()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_of_missing_employee_is_not_found() {
    let db = common::TestDb::new().await.unwrap();
    let repo = db.repository::<Employee>();

    let error = DeleteEmployeeByIdCommand { id: Uuid::new_v4() }
        .handle(&repo)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Employee Not Found.");
}

#[tokio::test]
async fn test_inverted_salary_range_is_rejected() {
    let db = common::TestDb::new().await.unwrap();
    let repo = db.repository::<SalaryRange>();

    let command = CreateSalaryRangeCommand {
        name: "Backwards".to_string(),
        min_salary: common::decimal("9000"),
        max_salary: common::decimal("1000"),
    };
    match command.handle(&repo).await {
        Err(AppError::Validation(errors)) => assert_eq!(
            errors,
            vec!["max_salary: must be greater than or equal to min_salary".to_string()]
        ),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(repo.count(&Specification::default()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_salary_range_update_overwrites_fields() {
    let db = common::TestDb::new().await.unwrap();
    let repo = db.repository::<SalaryRange>();
    let existing = common::seed_salary_range(&db, "Junior", "1000", "2000").await;

    let command = UpdateSalaryRangeCommand {
        id: existing.id,
        name: "Mid".to_string(),
        min_salary: common::decimal("2500.50"),
        max_salary: common::decimal("4000"),
    };
    let id = command.handle(&repo).await.unwrap();

    let stored = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Mid");
    assert_eq!(stored.min_salary, common::decimal("2500.50"));
    assert_eq!(stored.max_salary, common::decimal("4000"));
    assert_eq!(stored.created_at, existing.created_at);
}

#[tokio::test]
async fn test_duplicate_position_number_is_rejected() {
    let db = common::TestDb::new().await.unwrap();
    let existing = common::seed_position(&db, "Developer", "DEV-1", "Engineering").await;
    let repo = db.repository::<Position>();

    let command = CreatePositionCommand {
        position_title: "Another developer".to_string(),
        position_number: "DEV-1".to_string(),
        position_description: "Duplicate".to_string(),
        department_id: existing.department_id,
        salary_range_id: existing.salary_range_id,
    };
    match command.handle(&repo).await {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors, vec!["position_number: DEV-1 already exists".to_string()])
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(repo.count(&Specification::default()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_position_update_replaces_every_field() {
    let db = common::TestDb::new().await.unwrap();
    let existing = common::seed_position(&db, "Developer", "DEV-1", "Engineering").await;
    let department = common::seed_department(&db, "Platform").await;
    let salary_range = common::seed_salary_range(&db, "Staff", "7000", "12000").await;
    let repo = db.repository::<Position>();

    let command = UpdatePositionCommand {
        id: existing.id,
        position_title: "Staff developer".to_string(),
        position_number: "DEV-9".to_string(),
        position_description: "Leads the platform".to_string(),
        department_id: department.id,
        salary_range_id: salary_range.id,
    };
    command.handle(&repo).await.unwrap();

    let stored = repo.get_by_id(existing.id).await.unwrap().unwrap();
    assert_eq!(stored.position_title, "Staff developer");
    assert_eq!(stored.position_number, "DEV-9");
    assert_eq!(stored.position_description, "Leads the platform");
    assert_eq!(stored.department_id, department.id);
    assert_eq!(stored.salary_range_id, salary_range.id);
}

#[tokio::test]
async fn test_get_employee_by_id_returns_the_entity() {
    let db = common::TestDb::new().await.unwrap();
    let position = common::seed_position(&db, "Developer", "DEV-1", "Engineering").await;
    let employee = common::seed_employee(&db, "Jane", "Doe", "E-1", position.id, "5000").await;
    let repo = db.repository::<Employee>();

    let found = GetEmployeeByIdQuery { id: employee.id }
        .handle(&repo)
        .await
        .unwrap();
    assert_eq!(found.email, "jane@example.com");

    let missing = GetEmployeeByIdQuery { id: Uuid::new_v4() }.handle(&repo).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_department_list_query_wraps_counts_in_envelope() {
    let db = common::TestDb::new().await.unwrap();
    let repo = db.repository::<hr_api::database::models::Department>();
    for name in ["Engineering", "Finance", "Legal"] {
        CreateDepartmentCommand {
            name: name.to_string(),
        }
        .handle(&repo)
        .await
        .unwrap();
    }

    let query = GetDepartmentsQuery {
        name: Some("n".to_string()),
        page_number: 1,
        page_size: 1,
        fields: Some("Name".to_string()),
        ..Default::default()
    };
    let result = query.handle(&repo).await.unwrap();

    assert!(result.is_success);
    assert_eq!(result.page_number, 1);
    assert_eq!(result.page_size, 1);
    assert_eq!(result.records_filtered, 2);
    assert_eq!(result.records_total, 3);
    assert_eq!(result.value.len(), 1);
    assert_eq!(result.value[0]["Name"], serde_json::json!("Engineering"));
}
