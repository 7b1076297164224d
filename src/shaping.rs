//! Dynamic field projection.
//!
//! A caller names a comma-separated subset of an entity's public fields and
//! receives one ordered map per entity containing only those fields. The
//! rows exist for serialization only.

use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::error::AppError;

/// One shaped entity: field name to value, in request order.
pub type ShapedRow = Map<String, Value>;

/// Field access for entities that can be shaped.
///
/// Implemented with the `shape_fields!` macro next to each model.
pub trait Shape {
    /// Public field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// The value of a declared field, `None` for an undeclared name.
    fn field_value(&self, field: &str) -> Result<Option<Value>, serde_json::Error>;
}

#[derive(Debug)]
pub struct DataShaper<T> {
    _entity: PhantomData<fn(&T)>,
}

impl<T> Default for DataShaper<T> {
    fn default() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<T: Shape> DataShaper<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a comma-separated field list to canonical field names.
    ///
    /// Names match case-insensitively and duplicates collapse onto their
    /// first occurrence. A blank list selects every field. Unknown names
    /// are rejected.
    pub fn select_fields(&self, fields: &str) -> Result<Vec<&'static str>, AppError> {
        let requested: Vec<&str> = fields
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        if requested.is_empty() {
            return Ok(T::FIELDS.to_vec());
        }

        let mut selected: Vec<&'static str> = Vec::with_capacity(requested.len());
        for name in requested {
            let field = T::FIELDS
                .iter()
                .copied()
                .find(|declared| declared.eq_ignore_ascii_case(name))
                .ok_or_else(|| AppError::UnknownField(name.to_string()))?;
            if !selected.contains(&field) {
                selected.push(field);
            }
        }

        Ok(selected)
    }

    pub fn shape_entity(&self, entity: &T, fields: &str) -> Result<ShapedRow, AppError> {
        let selected = self.select_fields(fields)?;
        self.shape_with(entity, &selected)
    }

    pub fn shape_data(&self, entities: &[T], fields: &str) -> Result<Vec<ShapedRow>, AppError> {
        let selected = self.select_fields(fields)?;
        entities
            .iter()
            .map(|entity| self.shape_with(entity, &selected))
            .collect()
    }

    fn shape_with(&self, entity: &T, selected: &[&'static str]) -> Result<ShapedRow, AppError> {
        let mut row = ShapedRow::new();
        for field in selected {
            let value = entity
                .field_value(field)?
                .ok_or_else(|| AppError::UnknownField(field.to_string()))?;
            row.insert(field.to_string(), value);
        }
        Ok(row)
    }
}
