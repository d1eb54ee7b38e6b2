use crate::domain::a002_sku::aggregate::Sku;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One chart bucket of the gross-margin dashboard. camelCase for the JS
/// chart surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmBucket {
    pub week: String,
    #[serde(rename = "gmDollars")]
    pub gm_dollars: f64,
    #[serde(rename = "salesDollars")]
    pub sales_dollars: f64,
    #[serde(rename = "gmPercent")]
    pub gm_percent: f64,
}

/// Distinct date stamps in the ledger, sorted ascending.
pub fn available_dates(skus: &[Sku]) -> Vec<String> {
    let mut dates: Vec<String> = Vec::new();
    for sku in skus {
        if !dates.iter().any(|d| d == &sku.date_added) {
            dates.push(sku.date_added.clone());
        }
    }
    dates.sort();
    dates
}

/// Week-of-month bucket for a date stamp: `min((day − 1) / 7, 3)`.
/// Unparseable stamps land in the first bucket.
pub fn week_of_month(date_added: &str) -> usize {
    match NaiveDate::parse_from_str(date_added, "%Y-%m-%d") {
        Ok(date) => (((date.day() - 1) / 7) as usize).min(3),
        Err(_) => 0,
    }
}

/// Group-and-sum the ledger into the four fixed buckets for one store and
/// one date: rows filtered to `store` and `dateAdded == date`, bucketed by
/// week-of-month, with GM% derived per bucket as a ratio of the sums.
pub fn aggregate(skus: &[Sku], store: &str, date: &str) -> Vec<GmBucket> {
    let mut sums = [(0.0f64, 0.0f64); 4];
    for sku in skus
        .iter()
        .filter(|s| s.store == store && s.date_added == date)
    {
        let bucket = week_of_month(&sku.date_added);
        sums[bucket].0 += sku.gm_dollars;
        sums[bucket].1 += sku.sales_dollars;
    }

    sums.iter()
        .enumerate()
        .map(|(i, (gm_dollars, sales_dollars))| GmBucket {
            week: format!("Week {}", i + 1),
            gm_dollars: *gm_dollars,
            sales_dollars: *sales_dollars,
            gm_percent: if *sales_dollars > 0.0 {
                gm_dollars / sales_dollars * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(store: &str, date: &str, price: f64, cost: f64, units: f64) -> Sku {
        Sku::new_with_id(
            format!("{store}-{date}-{price}"),
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
    fn week_of_month_buckets() {
        assert_eq!(week_of_month("2024-01-01"), 0);
        assert_eq!(week_of_month("2024-01-07"), 0);
        assert_eq!(week_of_month("2024-01-08"), 1);
        assert_eq!(week_of_month("2024-01-22"), 3);
        // Days past the 28th clamp into the last bucket.
        assert_eq!(week_of_month("2024-01-31"), 3);
        assert_eq!(week_of_month("garbage"), 0);
    }

    #[test]
    fn filters_by_store_and_date() {
        let skus = vec![
            sku("A", "2024-01-01", 10.0, 6.0, 5.0),
            sku("A", "2024-01-02", 99.0, 1.0, 1.0),
            sku("B", "2024-01-01", 99.0, 1.0, 1.0),
        ];
        let buckets = aggregate(&skus, "A", "2024-01-01");
        assert_eq!(buckets[0].sales_dollars, 50.0);
        assert_eq!(buckets[0].gm_dollars, 20.0);
        assert_eq!(buckets[0].gm_percent, 40.0);
        let rest: f64 = buckets[1..].iter().map(|b| b.sales_dollars).sum();
        assert_eq!(rest, 0.0);
    }

    #[test]
    fn gm_percent_is_a_ratio_of_bucket_sums() {
        let skus = vec![
            sku("A", "2024-01-10", 10.0, 6.0, 5.0), // gm 20 over 50
            sku("A", "2024-01-10", 10.0, 10.0, 5.0), // gm 0 over 50
        ];
        let buckets = aggregate(&skus, "A", "2024-01-10");
        assert_eq!(buckets[1].gm_dollars, 20.0);
        assert_eq!(buckets[1].sales_dollars, 100.0);
        assert_eq!(buckets[1].gm_percent, 20.0);
    }

    #[test]
    fn empty_buckets_report_zero_percent() {
        let buckets = aggregate(&[], "A", "2024-01-01");
        assert_eq!(buckets.len(), 4);
        assert!(buckets.iter().all(|b| b.gm_percent == 0.0));
    }

    #[test]
    fn available_dates_sorted_distinct() {
        let skus = vec![
            sku("A", "2024-02-01", 1.0, 0.0, 1.0),
            sku("A", "2024-01-01", 1.0, 0.0, 1.0),
            sku("B", "2024-02-01", 1.0, 0.0, 1.0),
        ];
        assert_eq!(available_dates(&skus), vec!["2024-01-01", "2024-02-01"]);
    }
}
