use crate::domain::a002_sku::aggregate::Sku;
use serde::{Deserialize, Serialize};

/// One chart bucket of the weekly performance dashboard. Field names are
/// camelCase because the struct is marshalled to the JS chart surface as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    pub week: String,
    #[serde(rename = "salesPrice")]
    pub sales_price: f64,
    #[serde(rename = "costPrice")]
    pub cost_price: f64,
    pub profit: f64,
    pub loss: f64,
}

/// Most recent `dateAdded` in the ledger. ISO stamps sort lexicographically.
pub fn latest_date(skus: &[Sku]) -> Option<String> {
    skus.iter().map(|s| s.date_added.clone()).max()
}

/// Aggregate the ledger into the four fixed weekly buckets for one store.
///
/// Rows are filtered to the selected store and the most recent date present
/// in the data, then distributed positionally: row `i` of `n` lands in
/// bucket `floor(i / n × 4)`. Per bucket, profit is clamped at zero and the
/// loss series carries the magnitude of the negative remainder.
pub fn aggregate(skus: &[Sku], store: &str) -> Vec<WeeklyBucket> {
    let Some(latest) = latest_date(skus) else {
        return empty_buckets();
    };

    let filtered: Vec<&Sku> = skus
        .iter()
        .filter(|s| s.store == store && s.date_added == latest)
        .collect();

    let n = filtered.len();
    (0..4)
        .map(|bucket| {
            let members = filtered
                .iter()
                .enumerate()
                .filter(|(i, _)| n > 0 && i * 4 / n == bucket)
                .map(|(_, s)| *s);

            let mut sales_price = 0.0;
            let mut cost_price = 0.0;
            for sku in members {
                sales_price += sku.sales_units * sku.price;
                cost_price += sku.sales_units * sku.cost;
            }
            let margin = sales_price - cost_price;

            WeeklyBucket {
                week: format!("Week {}", bucket + 1),
                sales_price,
                cost_price,
                profit: margin.max(0.0),
                loss: (-margin).max(0.0),
            }
        })
        .collect()
}

fn empty_buckets() -> Vec<WeeklyBucket> {
    (0..4)
        .map(|bucket| WeeklyBucket {
            week: format!("Week {}", bucket + 1),
            sales_price: 0.0,
            cost_price: 0.0,
            profit: 0.0,
            loss: 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(store: &str, date: &str, price: f64, cost: f64, units: f64) -> Sku {
        Sku::new_with_id(
            format!("{store}-{price}"),
            date.into(),
            store.into(),
            "SKU".into(),
            price,
            cost,
            units,
        )
        .unwrap()
    }

    #[test]
    fn filters_to_the_selected_store() {
        let skus = vec![
            sku("A", "2024-01-01", 10.0, 6.0, 5.0),
            sku("B", "2024-01-01", 99.0, 1.0, 1.0),
        ];
        let buckets = aggregate(&skus, "A");
        let total: f64 = buckets.iter().map(|b| b.sales_price).sum();
        assert_eq!(total, 50.0);
    }

    #[test]
    fn filters_to_the_latest_date() {
        let skus = vec![
            sku("A", "2024-01-01", 10.0, 6.0, 5.0),
            sku("A", "2024-02-01", 20.0, 6.0, 5.0),
        ];
        let buckets = aggregate(&skus, "A");
        let total: f64 = buckets.iter().map(|b| b.sales_price).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn distributes_rows_positionally_over_four_buckets() {
        let skus: Vec<Sku> = (0..8)
            .map(|i| sku("A", "2024-01-01", (i + 1) as f64, 0.0, 1.0))
            .collect();
        let buckets = aggregate(&skus, "A");
        // 8 rows: two per bucket.
        assert_eq!(buckets[0].sales_price, 1.0 + 2.0);
        assert_eq!(buckets[1].sales_price, 3.0 + 4.0);
        assert_eq!(buckets[2].sales_price, 5.0 + 6.0);
        assert_eq!(buckets[3].sales_price, 7.0 + 8.0);
    }

    #[test]
    fn profit_clamps_and_loss_carries_magnitude() {
        let skus = vec![sku("A", "2024-01-01", 5.0, 10.0, 2.0)];
        let buckets = aggregate(&skus, "A");
        assert_eq!(buckets[0].sales_price, 10.0);
        assert_eq!(buckets[0].cost_price, 20.0);
        assert_eq!(buckets[0].profit, 0.0);
        assert_eq!(buckets[0].loss, 10.0);
    }

    #[test]
    fn always_yields_exactly_four_buckets() {
        assert_eq!(aggregate(&[], "A").len(), 4);
        let skus = vec![sku("A", "2024-01-01", 10.0, 6.0, 5.0)];
        let buckets = aggregate(&skus, "A");
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].sales_price, 50.0);
        assert_eq!(buckets[3].sales_price, 0.0);
    }

    #[test]
    fn latest_date_is_lexicographic_max() {
        let skus = vec![
            sku("A", "2024-02-01", 1.0, 0.0, 1.0),
            sku("A", "2024-01-31", 1.0, 0.0, 1.0),
        ];
        assert_eq!(latest_date(&skus).as_deref(), Some("2024-02-01"));
        assert_eq!(latest_date(&[]), None);
    }
}
