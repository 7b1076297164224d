use crate::database::models::{Employee, POSITION};
use crate::features::employees::{GetEmployeesQuery, PagedEmployeesQuery};

use super::{ColumnRef, Predicate, PredicateBuilder, Specification, filter_term};

pub const DEFAULT_ORDER: &str = "LastName";

/// Sortable DataTables columns, by client column index.
pub const SORT_COLUMNS: &[&str] = &["LastName", "FirstName", "Email", "EmployeeNumber", "Salary"];

const LAST_NAME: ColumnRef = ColumnRef::own("last_name");
const FIRST_NAME: ColumnRef = ColumnRef::own("first_name");
const EMAIL: ColumnRef = ColumnRef::own("email");
const EMPLOYEE_NUMBER: ColumnRef = ColumnRef::own("employee_number");
const POSITION_TITLE: ColumnRef = ColumnRef::related(POSITION, "position_title");

/// Field filters from a list query. Supplied filters are ORed together,
/// ignoring case.
pub fn by_filters(query: &GetEmployeesQuery) -> Specification<Employee> {
    let filters = [
        (LAST_NAME, query.last_name.as_deref()),
        (FIRST_NAME, query.first_name.as_deref()),
        (EMAIL, query.email.as_deref()),
        (EMPLOYEE_NUMBER, query.employee_number.as_deref()),
        (POSITION_TITLE, query.position_title.as_deref()),
    ];

    let mut predicate = PredicateBuilder::new();
    for (column, value) in filters {
        if let Some(term) = filter_term(value) {
            predicate = predicate.or(Predicate::contains_ignore_case(column, term));
        }
    }

    Specification::new(predicate.build())
        .include(POSITION)
        .order_by_or(query.order_by.as_deref(), DEFAULT_ORDER)
        .page(query.page_number, query.page_size)
}

/// Free-text keyword search across names, email, employee number and
/// position title.
pub fn by_keyword(query: &PagedEmployeesQuery) -> Specification<Employee> {
    let request = &query.request;
    let criteria = filter_term(request.keyword()).and_then(|term| {
        [LAST_NAME, FIRST_NAME, EMAIL, EMPLOYEE_NUMBER, POSITION_TITLE]
            .into_iter()
            .fold(PredicateBuilder::new(), |predicate, column| {
                predicate.or(Predicate::contains_ignore_case(column, term))
            })
            .build()
    });

    Specification::new(criteria)
        .include(POSITION)
        .order_by(request.order_by(SORT_COLUMNS, DEFAULT_ORDER))
        .page(request.page_number(), request.page_size())
}
