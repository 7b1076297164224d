//! DataTables-compatible paging requests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Search {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub regex: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrder {
    pub column: i64,
    #[serde(default)]
    pub dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableColumn {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub orderable: bool,
    #[serde(default)]
    pub search: Option<Search>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTablesRequest {
    #[serde(default)]
    pub draw: i64,
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub length: i64,
    #[serde(default)]
    pub order: Vec<SortOrder>,
    #[serde(default)]
    pub columns: Vec<DataTableColumn>,
    #[serde(default)]
    pub search: Option<Search>,
    /// Comma-separated projection list; blank selects every field.
    #[serde(default)]
    pub fields: Option<String>,
}

impl DataTablesRequest {
    pub fn page_size(&self) -> i64 {
        self.length.max(0)
    }

    pub fn page_number(&self) -> i64 {
        if self.length > 0 {
            (self.start.max(0) / self.length).saturating_add(1)
        } else {
            1
        }
    }

    pub fn keyword(&self) -> Option<&str> {
        self.search.as_ref().and_then(|search| search.value.as_deref())
    }

    pub fn fields(&self) -> &str {
        self.fields.as_deref().unwrap_or_default()
    }

    /// Order-by string for the first sort entry, using `columns` to map the
    /// client's column index to a field. Falls back to `default`.
    pub fn order_by(&self, columns: &[&str], default: &str) -> String {
        let Some(order) = self.order.first() else {
            return default.to_string();
        };

        let field = usize::try_from(order.column)
            .ok()
            .and_then(|index| columns.get(index));

        match field {
            Some(field) if order.dir.eq_ignore_ascii_case("desc") => format!("{} desc", field),
            Some(field) => (*field).to_string(),
            None => default.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: &[&str] = &["LastName", "FirstName", "Email"];

    fn request(start: i64, length: i64) -> DataTablesRequest {
        DataTablesRequest {
            draw: 1,
            start,
            length,
            ..Default::default()
        }
    }

    #[test]
    fn start_and_length_map_to_pages() {
        assert_eq!(request(0, 10).page_number(), 1);
        assert_eq!(request(20, 10).page_number(), 3);
        assert_eq!(request(25, 10).page_number(), 3);
        assert_eq!(request(20, 10).page_size(), 10);
    }

    #[test]
    fn huge_start_saturates_instead_of_overflowing() {
        assert_eq!(request(i64::MAX, 1).page_number(), i64::MAX);
        assert_eq!(request(i64::MAX, 10).page_number(), i64::MAX / 10 + 1);
    }

    #[test]
    fn non_positive_length_disables_paging() {
        let request = request(30, 0);
        assert_eq!(request.page_number(), 1);
        assert_eq!(request.page_size(), 0);
    }

    #[test]
    fn sort_column_is_picked_by_index() {
        let mut request = request(0, 10);
        request.order = vec![SortOrder {
            column: 2,
            dir: "asc".into(),
        }];
        assert_eq!(request.order_by(COLUMNS, "LastName"), "Email");

        request.order[0].dir = "DESC".into();
        assert_eq!(request.order_by(COLUMNS, "LastName"), "Email desc");
    }

    #[test]
    fn out_of_range_or_missing_order_falls_back() {
        let mut request = request(0, 10);
        assert_eq!(request.order_by(COLUMNS, "LastName"), "LastName");

        request.order = vec![SortOrder {
            column: 9,
            dir: "desc".into(),
        }];
        assert_eq!(request.order_by(COLUMNS, "LastName"), "LastName");

        request.order[0].column = -1;
        assert_eq!(request.order_by(COLUMNS, "LastName"), "LastName");
    }

    #[test]
    fn deserializes_a_datatables_payload() {
        let request: DataTablesRequest = serde_json::from_value(json!({
            "draw": 3,
            "start": 10,
            "length": 5,
            "order": [{ "column": 1, "dir": "desc" }],
            "columns": [{ "data": "lastName", "searchable": true, "orderable": true }],
            "search": { "value": "doe", "regex": false },
            "fields": "Id,FirstName"
        }))
        .unwrap();

        assert_eq!(request.draw, 3);
        assert_eq!(request.page_number(), 3);
        assert_eq!(request.keyword(), Some("doe"));
        assert_eq!(request.fields(), "Id,FirstName");
        assert_eq!(request.order_by(COLUMNS, "LastName"), "FirstName desc");
    }

    #[test]
    fn minimal_payload_uses_defaults() {
        let request: DataTablesRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.keyword(), None);
        assert_eq!(request.fields(), "");
        assert_eq!(request.page_size(), 0);
    }
}
