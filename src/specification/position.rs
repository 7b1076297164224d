use crate::database::models::{DEPARTMENT, Position, SALARY_RANGE};
use crate::features::positions::{GetPositionsQuery, PagedPositionsQuery};

use super::{ColumnRef, Predicate, PredicateBuilder, Specification, filter_term};

pub const DEFAULT_ORDER: &str = "PositionNumber";

pub const SORT_COLUMNS: &[&str] = &["PositionNumber", "PositionTitle", "PositionDescription"];

const POSITION_NUMBER: ColumnRef = ColumnRef::own("position_number");
const POSITION_TITLE: ColumnRef = ColumnRef::own("position_title");
const DEPARTMENT_NAME: ColumnRef = ColumnRef::related(DEPARTMENT, "name");

/// Number, title and department filters, ORed and ignoring case.
pub fn by_filters(query: &GetPositionsQuery) -> Specification<Position> {
    let filters = [
        (POSITION_NUMBER, query.position_number.as_deref()),
        (POSITION_TITLE, query.position_title.as_deref()),
        (DEPARTMENT_NAME, query.department.as_deref()),
    ];

    let mut predicate = PredicateBuilder::new();
    for (column, value) in filters {
        if let Some(term) = filter_term(value) {
            predicate = predicate.or(Predicate::contains_ignore_case(column, term));
        }
    }

    Specification::new(predicate.build())
        .include(DEPARTMENT)
        .include(SALARY_RANGE)
        .order_by_or(query.order_by.as_deref(), DEFAULT_ORDER)
        .page(query.page_number, query.page_size)
}

pub fn by_keyword(query: &PagedPositionsQuery) -> Specification<Position> {
    let request = &query.request;
    let criteria = filter_term(request.keyword()).and_then(|term| {
        [POSITION_NUMBER, POSITION_TITLE, DEPARTMENT_NAME]
            .into_iter()
            .fold(PredicateBuilder::new(), |predicate, column| {
                predicate.or(Predicate::contains_ignore_case(column, term))
            })
            .build()
    });

    Specification::new(criteria)
        .include(DEPARTMENT)
        .include(SALARY_RANGE)
        .order_by(request.order_by(SORT_COLUMNS, DEFAULT_ORDER))
        .page(request.page_number(), request.page_size())
}
