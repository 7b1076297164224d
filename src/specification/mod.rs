//! Query descriptions: filter, eager loads, ordering and paging for one
//! entity type, rendered to SQL by the evaluator.

use std::fmt;

pub mod department;
pub mod employee;
mod evaluator;
pub mod position;
mod predicate;
pub mod salary_range;

pub use evaluator::{SelectQuery, SpecificationEvaluator};
pub use predicate::{ColumnRef, Expr, Predicate, PredicateBuilder, filter_term};

use crate::database::entity::Relation;

/// Offset window for a 1-based page. `None` when paging is off.
///
/// A page number below 1 is treated as the first page.
pub fn page_window(page_number: i64, page_size: i64) -> Option<(i64, i64)> {
    if page_size <= 0 {
        return None;
    }
    let skip = (page_number.max(1) - 1).saturating_mul(page_size);
    Some((skip, page_size))
}

/// An immutable query description for entity `T`.
///
/// Built once per request with the consuming builder methods below.
pub struct Specification<T> {
    criteria: Option<Predicate<T>>,
    includes: Vec<Relation>,
    include_strings: Vec<String>,
    order_by: Option<String>,
    skip: Option<i64>,
    take: Option<i64>,
    paging_enabled: bool,
}

impl<T> Specification<T> {
    pub fn new(criteria: Option<Predicate<T>>) -> Self {
        Self {
            criteria,
            includes: Vec::new(),
            include_strings: Vec::new(),
            order_by: None,
            skip: None,
            take: None,
            paging_enabled: false,
        }
    }

    pub fn include(mut self, relation: Relation) -> Self {
        self.includes.push(relation);
        self
    }

    /// Eager-loads a relation by name, resolved when the query is rendered.
    pub fn include_path(mut self, path: impl Into<String>) -> Self {
        self.include_strings.push(path.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        let order_by = order_by.into();
        self.order_by = (!order_by.trim().is_empty()).then_some(order_by);
        self
    }

    /// Orders by `order_by` when given, else by `default`.
    pub fn order_by_or(self, order_by: Option<&str>, default: &str) -> Self {
        match order_by.map(str::trim).filter(|value| !value.is_empty()) {
            Some(order_by) => self.order_by(order_by),
            None => self.order_by(default),
        }
    }

    pub fn paging(mut self, skip: i64, take: i64) -> Self {
        self.skip = Some(skip);
        self.take = Some(take);
        self.paging_enabled = true;
        self
    }

    /// Applies a 1-based page; a non-positive page size leaves paging off.
    pub fn page(self, page_number: i64, page_size: i64) -> Self {
        match page_window(page_number, page_size) {
            Some((skip, take)) => self.paging(skip, take),
            None => self,
        }
    }

    /// The same query without its skip/take window, used for counting.
    pub fn without_paging(mut self) -> Self {
        self.skip = None;
        self.take = None;
        self.paging_enabled = false;
        self
    }

    pub fn criteria(&self) -> Option<&Predicate<T>> {
        self.criteria.as_ref()
    }

    pub fn includes(&self) -> &[Relation] {
        &self.includes
    }

    pub fn include_strings(&self) -> &[String] {
        &self.include_strings
    }

    pub fn order_by_field(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn skip(&self) -> Option<i64> {
        self.skip
    }

    pub fn take(&self) -> Option<i64> {
        self.take
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging_enabled
    }
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            includes: self.includes.clone(),
            include_strings: self.include_strings.clone(),
            order_by: self.order_by.clone(),
            skip: self.skip,
            take: self.take,
            paging_enabled: self.paging_enabled,
        }
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("criteria", &self.criteria)
            .field(
                "includes",
                &self.includes.iter().map(|r| r.name).collect::<Vec<_>>(),
            )
            .field("include_strings", &self.include_strings)
            .field("order_by", &self.order_by)
            .field("skip", &self.skip)
            .field("take", &self.take)
            .field("paging_enabled", &self.paging_enabled)
            .finish()
    }
}
