use crate::database::models::SalaryRange;
use crate::features::salary_ranges::GetSalaryRangesQuery;

use super::{ColumnRef, Predicate, PredicateBuilder, Specification, filter_term};

pub const DEFAULT_ORDER: &str = "Name";

pub fn by_filters(query: &GetSalaryRangesQuery) -> Specification<SalaryRange> {
    let mut predicate = PredicateBuilder::new();
    if let Some(term) = filter_term(query.name.as_deref()) {
        predicate = predicate.and(Predicate::contains_ignore_case(
            ColumnRef::own("name"),
            term,
        ));
    }

    Specification::new(predicate.build())
        .order_by_or(query.order_by.as_deref(), DEFAULT_ORDER)
        .page(query.page_number, query.page_size)
}
