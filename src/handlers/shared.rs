use serde::{Deserialize, Serialize};

use crate::database::repositories::RecordsCount;

/// The uniform success/failure envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub is_success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    pub value: Option<T>,
}

impl<T> ApiResult<T> {
    pub fn success(value: T) -> Self {
        Self {
            is_success: true,
            message: None,
            errors: Vec::new(),
            value: Some(value),
        }
    }

    pub fn success_with_message(value: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(value)
        }
    }

    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            is_success: false,
            message: Some(message.into()),
            errors,
            value: None,
        }
    }
}

/// A filtered list page with its paging metadata.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub is_success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    pub value: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub records_filtered: i64,
    pub records_total: i64,
}

impl<T> PagedResult<T> {
    pub fn success(value: Vec<T>, page_number: i64, page_size: i64, counts: RecordsCount) -> Self {
        Self {
            is_success: true,
            message: None,
            errors: Vec::new(),
            value,
            page_number,
            page_size,
            records_filtered: counts.records_filtered,
            records_total: counts.records_total,
        }
    }
}

/// A DataTables page, echoing the client's draw counter.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedDataTableResult<T> {
    pub is_success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    pub value: Vec<T>,
    pub draw: i64,
    pub records_filtered: i64,
    pub records_total: i64,
}

impl<T> PagedDataTableResult<T> {
    pub fn success(value: Vec<T>, draw: i64, counts: RecordsCount) -> Self {
        Self {
            is_success: true,
            message: None,
            errors: Vec::new(),
            value,
            draw,
            records_filtered: counts.records_filtered,
            records_total: counts.records_total,
        }
    }
}
