use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column definition for an import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Technical field name
    pub field_name: String,
    /// Header title expected in the file
    pub title: String,
}

impl ColumnDef {
    pub fn new(field_name: &str, title: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            title: title.to_string(),
        }
    }
}

/// Metadata of a parsed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcelMetadata {
    /// Mapped field names
    pub columns: Vec<String>,
    /// Number of data rows (header excluded)
    pub row_count: usize,
    /// Source file name
    pub file_name: String,
}

/// Mapping status of one expected column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Expected header title
    pub expected: String,
    /// Header actually found in the file, if any
    pub found: Option<String>,
    /// Column index in the file
    pub file_index: Option<usize>,
}

/// Result of parsing a spreadsheet against a set of expected columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcelData {
    pub metadata: ExcelMetadata,
    /// Data rows keyed by field_name
    pub rows: Vec<HashMap<String, String>>,
    pub column_mapping: Vec<ColumnMapping>,
    /// Raw headers from the file
    pub file_headers: Vec<String>,
}

impl ExcelData {
    /// Build ExcelData from raw cells (array of rows, first row = headers).
    ///
    /// Header matching is case-insensitive: exact title match first, then a
    /// substring match in either direction. Columns without a match import
    /// as empty values; there is no schema enforcement. Rows with no
    /// non-empty mapped value are dropped.
    pub fn from_raw(
        raw_data: Vec<Vec<String>>,
        columns: Vec<ColumnDef>,
        file_name: String,
    ) -> Result<Self, String> {
        if raw_data.is_empty() {
            return Err("The file is empty".to_string());
        }

        let headers = &raw_data[0];
        let file_headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

        let mut header_indices: HashMap<String, usize> = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            header_indices.insert(header.trim().to_lowercase(), idx);
        }

        let mut column_mapping = Vec::new();
        for col_def in &columns {
            let title_lower = col_def.title.trim().to_lowercase();

            if let Some(&col_idx) = header_indices.get(&title_lower) {
                column_mapping.push(ColumnMapping {
                    expected: col_def.title.clone(),
                    found: Some(headers[col_idx].trim().to_string()),
                    file_index: Some(col_idx),
                });
            } else {
                // No exact match, look for a similar header
                let similar = headers.iter().enumerate().find(|(_, h)| {
                    let h_lower = h.trim().to_lowercase();
                    h_lower.contains(&title_lower) || title_lower.contains(&h_lower)
                });

                if let Some((idx, h)) = similar {
                    column_mapping.push(ColumnMapping {
                        expected: col_def.title.clone(),
                        found: Some(h.trim().to_string()),
                        file_index: Some(idx),
                    });
                } else {
                    column_mapping.push(ColumnMapping {
                        expected: col_def.title.clone(),
                        found: None,
                        file_index: None,
                    });
                }
            }
        }

        let mut rows = Vec::new();
        for row in raw_data.iter().skip(1) {
            let mut row_data = HashMap::new();

            for (col_def, mapping) in columns.iter().zip(column_mapping.iter()) {
                if let Some(col_idx) = mapping.file_index {
                    let value = row.get(col_idx).cloned().unwrap_or_default();
                    row_data.insert(col_def.field_name.clone(), value.trim().to_string());
                } else {
                    row_data.insert(col_def.field_name.clone(), String::new());
                }
            }

            if row_data.values().any(|v| !v.is_empty()) {
                rows.push(row_data);
            }
        }

        let field_names: Vec<String> = columns.iter().map(|c| c.field_name.clone()).collect();

        Ok(ExcelData {
            metadata: ExcelMetadata {
                columns: field_names,
                row_count: rows.len(),
                file_name,
            },
            rows,
            column_mapping,
            file_headers,
        })
    }

    /// JSON rendering of the parsed data, for the preview pane
    pub fn to_json_pretty(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// Whether every expected column was found in the file
    pub fn has_all_columns_mapped(&self) -> bool {
        self.column_mapping.iter().all(|m| m.found.is_some())
    }

    /// Number of expected columns missing from the file
    pub fn unmapped_count(&self) -> usize {
        self.column_mapping
            .iter()
            .filter(|m| m.found.is_none())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("store", "Store"),
            ColumnDef::new("price", "Price"),
        ]
    }

    fn raw(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let data = ExcelData::from_raw(
            raw(&[&["STORE", "price"], &["Downtown", "10"]]),
            columns(),
            "test.xlsx".into(),
        )
        .unwrap();
        assert!(data.has_all_columns_mapped());
        assert_eq!(data.rows[0]["store"], "Downtown");
        assert_eq!(data.rows[0]["price"], "10");
    }

    #[test]
    fn substring_fallback_maps_similar_headers() {
        let data = ExcelData::from_raw(
            raw(&[&["Store Name", "Unit Price x"], &["Downtown", "10"]]),
            columns(),
            "test.xlsx".into(),
        )
        .unwrap();
        // "store" is contained in "store name"; "price" in "unit price x".
        assert!(data.has_all_columns_mapped());
        assert_eq!(data.rows[0]["store"], "Downtown");
    }

    #[test]
    fn unmatched_columns_import_empty() {
        let data = ExcelData::from_raw(
            raw(&[&["Something Else"], &["value"]]),
            columns(),
            "test.xlsx".into(),
        )
        .unwrap();
        assert_eq!(data.unmapped_count(), 2);
        assert!(data.rows.is_empty()); // all mapped values empty -> row dropped
    }

    #[test]
    fn blank_rows_are_dropped() {
        let data = ExcelData::from_raw(
            raw(&[&["Store", "Price"], &["", ""], &["Downtown", "10"]]),
            columns(),
            "test.xlsx".into(),
        )
        .unwrap();
        assert_eq!(data.metadata.row_count, 1);
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(ExcelData::from_raw(Vec::new(), columns(), "test.xlsx".into()).is_err());
    }
}
