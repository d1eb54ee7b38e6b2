use super::metrics::SalesMetrics;
use chrono::Utc;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// One priced, sellable item at one store.
///
/// `store` references a Store by name. The reference is validated when the
/// record is written but is otherwise soft: deleting the store leaves SKUs
/// referencing its name untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    /// Millisecond-timestamp id, unique within a collection.
    pub id: String,

    pub store: String,
    pub sku: String,

    pub price: f64,
    pub cost: f64,
    #[serde(rename = "salesUnits")]
    pub sales_units: f64,

    #[serde(rename = "salesDollars")]
    pub sales_dollars: f64,
    #[serde(rename = "gmDollars")]
    pub gm_dollars: f64,
    #[serde(rename = "gmPercent")]
    pub gm_percent: f64,

    /// ISO date stamp (%Y-%m-%d) of the day the record entered the ledger.
    #[serde(rename = "dateAdded")]
    pub date_added: String,
}

impl Sku {
    /// Create a new record stamped with the current instant and date.
    pub fn new_for_insert(
        store: String,
        sku: String,
        price: f64,
        cost: f64,
        sales_units: f64,
    ) -> Result<Self, String> {
        let now = Utc::now();
        Self::new_with_id(
            now.timestamp_millis().to_string(),
            now.format("%Y-%m-%d").to_string(),
            store,
            sku,
            price,
            cost,
            sales_units,
        )
    }

    /// Create a record with explicit id and date stamp.
    pub fn new_with_id(
        id: String,
        date_added: String,
        store: String,
        sku: String,
        price: f64,
        cost: f64,
        sales_units: f64,
    ) -> Result<Self, String> {
        let metrics = SalesMetrics::derive(price, cost, sales_units)?;
        let mut record = Self {
            id,
            store,
            sku,
            price,
            cost,
            sales_units,
            sales_dollars: 0.0,
            gm_dollars: 0.0,
            gm_percent: 0.0,
            date_added,
        };
        record.apply_metrics(metrics);
        Ok(record)
    }

    pub fn apply_metrics(&mut self, metrics: SalesMetrics) {
        self.sales_dollars = metrics.sales_dollars;
        self.gm_dollars = metrics.gm_dollars;
        self.gm_percent = metrics.gm_percent;
    }

    /// Recompute the derived fields from the current inputs. On error the
    /// record is left unchanged.
    pub fn recompute(&mut self) -> Result<(), String> {
        let metrics = SalesMetrics::derive(self.price, self.cost, self.sales_units)?;
        self.apply_metrics(metrics);
        Ok(())
    }
}

/// Remove a SKU by id. Returns true if a record was removed.
pub fn remove_by_id(skus: &mut Vec<Sku>, id: &str) -> bool {
    let before = skus.len();
    skus.retain(|s| s.id != id);
    skus.len() != before
}

/// Distinct store names present in the ledger, in first-seen order. Used by
/// the dashboard store selectors.
pub fn store_names(skus: &[Sku]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for sku in skus {
        if !names.iter().any(|n| n == &sku.store) {
            names.push(sku.store.clone());
        }
    }
    names
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for the SKU add form. Numeric fields arrive as raw input text and are
/// coerced on submit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkuDto {
    pub store: String,
    pub sku: String,
    pub price: String,
    pub cost: String,
    pub sales_units: String,
}

impl SkuDto {
    /// Form completeness gate: submit stays disabled until every field is
    /// non-empty.
    pub fn is_complete(&self) -> bool {
        !self.store.trim().is_empty()
            && !self.sku.trim().is_empty()
            && !self.price.trim().is_empty()
            && !self.cost.trim().is_empty()
            && !self.sales_units.trim().is_empty()
    }

    /// Coerce the numeric fields. Non-numeric input is a validation failure.
    pub fn parse_inputs(&self) -> Result<(f64, f64, f64), String> {
        let parse = |raw: &str| -> Result<f64, String> {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| "Please ensure all fields are valid numbers".to_string())
        };
        Ok((
            parse(&self.price)?,
            parse(&self.cost)?,
            parse(&self.sales_units)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_store::aggregate::{remove_by_serial, Store, StoreDto};

    fn sample(id: &str, store: &str) -> Sku {
        Sku::new_with_id(
            id.into(),
            "2024-01-01".into(),
            store.into(),
            "SKU-100".into(),
            10.0,
            6.0,
            5.0,
        )
        .unwrap()
    }

    #[test]
    fn insert_derives_metrics() {
        let s = sample("1", "Downtown");
        assert_eq!(s.sales_dollars, 50.0);
        assert_eq!(s.gm_dollars, 20.0);
        assert_eq!(s.gm_percent, 40.0);
    }

    #[test]
    fn insert_rejects_negative_inputs() {
        let err = Sku::new_with_id(
            "1".into(),
            "2024-01-01".into(),
            "Downtown".into(),
            "SKU-100".into(),
            -10.0,
            6.0,
            5.0,
        );
        assert!(err.is_err());
    }

    #[test]
    fn recompute_failure_leaves_record_unchanged() {
        let mut s = sample("1", "Downtown");
        s.price = -1.0;
        let snapshot = (s.sales_dollars, s.gm_dollars, s.gm_percent);
        assert!(s.recompute().is_err());
        assert_eq!((s.sales_dollars, s.gm_dollars, s.gm_percent), snapshot);
    }

    #[test]
    fn store_deletion_does_not_cascade() {
        let mut stores = vec![Store::new_for_insert(
            &[],
            &StoreDto {
                name: "Downtown".into(),
                state: "CA".into(),
                city: "Fresno".into(),
            },
        )];
        let mut skus = vec![sample("1", "Downtown"), sample("2", "Downtown")];
        let snapshot = skus.clone();

        assert!(remove_by_serial(&mut stores, "SN-1"));
        assert!(stores.is_empty());
        assert_eq!(skus, snapshot);

        // The orphaned rows still delete individually.
        assert!(remove_by_id(&mut skus, "1"));
        assert_eq!(skus.len(), 1);
    }

    #[test]
    fn dto_parse_rejects_non_numeric() {
        let dto = SkuDto {
            store: "Downtown".into(),
            sku: "SKU-100".into(),
            price: "ten".into(),
            cost: "6".into(),
            sales_units: "5".into(),
        };
        assert!(dto.parse_inputs().is_err());
    }

    #[test]
    fn dto_completeness_gate() {
        let mut dto = SkuDto {
            store: "Downtown".into(),
            sku: "SKU-100".into(),
            price: "10".into(),
            cost: "6".into(),
            sales_units: "5".into(),
        };
        assert!(dto.is_complete());
        dto.cost.clear();
        assert!(!dto.is_complete());
    }

    #[test]
    fn store_names_deduplicate_in_first_seen_order() {
        let skus = vec![sample("1", "B"), sample("2", "A"), sample("3", "B")];
        assert_eq!(store_names(&skus), vec!["B", "A"]);
    }

    #[test]
    fn round_trip_keeps_camel_case_layout() {
        let skus = vec![sample("1", "Downtown"), sample("2", "Uptown")];
        let raw = serde_json::to_string(&skus).unwrap();
        for key in [
            "\"salesUnits\"",
            "\"salesDollars\"",
            "\"gmDollars\"",
            "\"gmPercent\"",
            "\"dateAdded\"",
        ] {
            assert!(raw.contains(key), "missing {key} in {raw}");
        }
        let back: Vec<Sku> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, skus);
    }
}
