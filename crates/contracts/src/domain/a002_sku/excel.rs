use super::aggregate::Sku;
use super::metrics::SalesMetrics;
use std::collections::HashMap;

/// Field names the importer maps spreadsheet headers onto.
pub const FIELD_STORE: &str = "store";
pub const FIELD_SKU: &str = "sku";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_COST: &str = "cost";
pub const FIELD_SALES_UNITS: &str = "sales_units";

/// Expected import columns as (field_name, header title) pairs. Header
/// matching is case-insensitive and tolerates partial matches; columns the
/// file does not carry simply import as empty values.
pub fn import_columns() -> Vec<(&'static str, &'static str)> {
    vec![
        (FIELD_STORE, "Store"),
        (FIELD_SKU, "SKU"),
        (FIELD_PRICE, "Price"),
        (FIELD_COST, "Cost"),
        (FIELD_SALES_UNITS, "Sales Units"),
    ]
}

/// One spreadsheet row after header mapping, still untyped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcelRow {
    pub store: String,
    pub sku: String,
    pub price: String,
    pub cost: String,
    pub sales_units: String,
}

impl ExcelRow {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |name: &str| fields.get(name).cloned().unwrap_or_default();
        Self {
            store: get(FIELD_STORE),
            sku: get(FIELD_SKU),
            price: get(FIELD_PRICE),
            cost: get(FIELD_COST),
            sales_units: get(FIELD_SALES_UNITS),
        }
    }

    /// Convert into a ledger record stamped with `date_added`.
    ///
    /// Import applies no schema validation: unmapped or non-numeric cells
    /// coerce to zero, and rows whose inputs cannot produce valid metrics
    /// (negative numbers in the source) get zeroed derived fields rather
    /// than being rejected.
    pub fn into_sku(self, id: String, date_added: &str) -> Sku {
        let price = coerce_number(&self.price);
        let cost = coerce_number(&self.cost);
        let sales_units = coerce_number(&self.sales_units);
        let metrics = SalesMetrics::derive(price, cost, sales_units).unwrap_or_default();

        let mut record = Sku {
            id,
            store: self.store,
            sku: self.sku,
            price,
            cost,
            sales_units,
            sales_dollars: 0.0,
            gm_dollars: 0.0,
            gm_percent: 0.0,
            date_added: date_added.to_string(),
        };
        record.apply_metrics(metrics);
        record
    }
}

fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Append imported rows to an existing collection (merge, not replace).
/// Ids are derived from `base_id` (a millisecond timestamp) plus the row
/// offset so rows imported in one batch stay unique.
pub fn merge_rows(
    skus: &mut Vec<Sku>,
    rows: Vec<ExcelRow>,
    base_id: i64,
    date_added: &str,
) -> ImportResult {
    let imported = rows.len();
    for (offset, row) in rows.into_iter().enumerate() {
        let id = (base_id + offset as i64).to_string();
        skus.push(row.into_sku(id, date_added));
    }
    ImportResult {
        imported,
        total_after: skus.len(),
    }
}

/// Import summary surfaced by the import widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: usize,
    pub total_after: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn row_converts_with_derived_metrics() {
        let row = ExcelRow::from_fields(&fields(&[
            (FIELD_STORE, "Downtown"),
            (FIELD_SKU, "SKU-100"),
            (FIELD_PRICE, "10"),
            (FIELD_COST, "6"),
            (FIELD_SALES_UNITS, "5"),
        ]));
        let sku = row.into_sku("1700000000000".into(), "2024-01-01");
        assert_eq!(sku.sales_dollars, 50.0);
        assert_eq!(sku.gm_dollars, 20.0);
        assert_eq!(sku.gm_percent, 40.0);
        assert_eq!(sku.date_added, "2024-01-01");
    }

    #[test]
    fn missing_columns_coerce_to_zero() {
        let row = ExcelRow::from_fields(&fields(&[(FIELD_STORE, "Downtown")]));
        let sku = row.into_sku("1".into(), "2024-01-01");
        assert_eq!(sku.price, 0.0);
        assert_eq!(sku.sales_units, 0.0);
        assert_eq!(sku.sales_dollars, 0.0);
        assert_eq!(sku.gm_percent, 0.0);
    }

    #[test]
    fn negative_source_values_zero_the_derived_fields() {
        let row = ExcelRow::from_fields(&fields(&[
            (FIELD_PRICE, "-5"),
            (FIELD_SALES_UNITS, "3"),
        ]));
        let sku = row.into_sku("1".into(), "2024-01-01");
        assert_eq!(sku.price, -5.0);
        assert_eq!(sku.sales_dollars, 0.0);
        assert_eq!(sku.gm_dollars, 0.0);
    }

    #[test]
    fn merge_appends_without_replacing() {
        let mut skus = vec![Sku::new_with_id(
            "1".into(),
            "2023-12-31".into(),
            "Downtown".into(),
            "SKU-1".into(),
            10.0,
            6.0,
            5.0,
        )
        .unwrap()];

        let rows = vec![
            ExcelRow {
                store: "Uptown".into(),
                sku: "SKU-2".into(),
                price: "4".into(),
                cost: "2".into(),
                sales_units: "10".into(),
            },
            ExcelRow {
                store: "Uptown".into(),
                sku: "SKU-3".into(),
                price: "8".into(),
                cost: "5".into(),
                sales_units: "2".into(),
            },
        ];

        let result = merge_rows(&mut skus, rows, 1700000000000, "2024-01-01");
        assert_eq!(result.imported, 2);
        assert_eq!(result.total_after, 3);
        assert_eq!(skus[0].sku, "SKU-1");
        assert_eq!(skus[1].id, "1700000000000");
        assert_eq!(skus[2].id, "1700000000001");
    }
}
