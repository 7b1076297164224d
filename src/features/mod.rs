//! Commands mutate, queries read. Each handler takes the repository it
//! needs and returns either an id or a response envelope.

use validator::{Validate, ValidationErrors};

use crate::error::AppError;

pub mod datatables;
pub mod departments;
pub mod employees;
pub mod positions;
pub mod salary_ranges;

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Runs the request's declared validation rules.
pub fn validate<T: Validate>(request: &T) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|errors| AppError::Validation(validation_messages(&errors)))
}

/// One `field: message` line per failure, sorted by field.
fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| {
                let message = failure
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| failure.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "is required"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn valid_request_passes() {
        let sample = Sample {
            name: "Jane".into(),
            email: "jane@example.com".into(),
        };
        assert!(validate(&sample).is_ok());
    }

    #[test]
    fn failures_are_sorted_by_field() {
        let sample = Sample {
            name: String::new(),
            email: "not-an-email".into(),
        };
        match validate(&sample) {
            Err(AppError::Validation(messages)) => {
                assert_eq!(messages, vec!["email: email", "name: is required"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
