use crate::domain::a002_sku::aggregate::Sku;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price movement of a grid row relative to the row immediately before it in
/// the grouped-and-flattened sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceChange {
    Increase,
    Decrease,
    NoChange,
}

impl PriceChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceChange::Increase => "Increase",
            PriceChange::Decrease => "Decrease",
            PriceChange::NoChange => "No Change",
        }
    }
}

/// GM% banding used by the grid cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GmBand {
    /// >= 40%
    Healthy,
    /// >= 10%
    Moderate,
    /// > 5%
    Thin,
    /// everything else
    Critical,
}

impl GmBand {
    pub fn for_percent(gm_percent: f64) -> Self {
        if gm_percent >= 40.0 {
            GmBand::Healthy
        } else if gm_percent >= 10.0 {
            GmBand::Moderate
        } else if gm_percent > 5.0 {
            GmBand::Thin
        } else {
            GmBand::Critical
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GmBand::Healthy => "gm-band--healthy",
            GmBand::Moderate => "gm-band--moderate",
            GmBand::Thin => "gm-band--thin",
            GmBand::Critical => "gm-band--critical",
        }
    }
}

/// Week bucket of a date stamp: day-of-year based, `ceil(dayOfYear / 7)`.
/// Unparseable stamps bucket under week 0.
pub fn week_number(date_added: &str) -> u32 {
    match NaiveDate::parse_from_str(date_added, "%Y-%m-%d") {
        Ok(date) => (date.ordinal() + 6) / 7,
        Err(_) => 0,
    }
}

/// One row of the planning grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningRow {
    pub week: u32,
    pub price_change: PriceChange,
    pub sku: Sku,
}

/// Build the grid rows: group by week number, keep insertion order within
/// each group, flatten in week order, then classify each row's price against
/// the immediately preceding row of the flattened sequence.
///
/// The comparison is positional across the whole flattened list, so it
/// crosses week boundaries at group edges; the first row overall has no
/// predecessor and is always "No Change".
pub fn build_rows(skus: &[Sku]) -> Vec<PlanningRow> {
    let mut groups: BTreeMap<u32, Vec<&Sku>> = BTreeMap::new();
    for sku in skus {
        groups.entry(week_number(&sku.date_added)).or_default().push(sku);
    }

    let mut rows = Vec::with_capacity(skus.len());
    let mut prev_price: Option<f64> = None;
    for (week, members) in groups {
        for sku in members {
            let price_change = match prev_price {
                None => PriceChange::NoChange,
                Some(prev) if sku.price > prev => PriceChange::Increase,
                Some(prev) if sku.price < prev => PriceChange::Decrease,
                Some(_) => PriceChange::NoChange,
            };
            prev_price = Some(sku.price);
            rows.push(PlanningRow {
                week,
                price_change,
                sku: sku.clone(),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(id: &str, date: &str, price: f64) -> Sku {
        Sku::new_with_id(
            id.into(),
            date.into(),
            "Downtown".into(),
            format!("SKU-{id}"),
            price,
            1.0,
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn week_number_is_day_of_year_based() {
        assert_eq!(week_number("2024-01-01"), 1);
        assert_eq!(week_number("2024-01-07"), 1);
        assert_eq!(week_number("2024-01-08"), 2);
        assert_eq!(week_number("2024-12-31"), 53);
    }

    #[test]
    fn unparseable_dates_bucket_under_week_zero() {
        assert_eq!(week_number("not-a-date"), 0);
        assert_eq!(week_number(""), 0);
    }

    #[test]
    fn classifies_the_documented_sequence() {
        // Prices [10, 12, 12, 9] inside one flattened group.
        let skus = vec![
            sku("1", "2024-01-01", 10.0),
            sku("2", "2024-01-02", 12.0),
            sku("3", "2024-01-03", 12.0),
            sku("4", "2024-01-04", 9.0),
        ];
        let rows = build_rows(&skus);
        let changes: Vec<&str> = rows.iter().map(|r| r.price_change.as_str()).collect();
        assert_eq!(changes, vec!["No Change", "Increase", "No Change", "Decrease"]);
    }

    #[test]
    fn comparison_crosses_week_boundaries() {
        let skus = vec![
            sku("1", "2024-01-01", 10.0), // week 1
            sku("2", "2024-01-10", 8.0),  // week 2
        ];
        let rows = build_rows(&skus);
        assert_eq!(rows[0].week, 1);
        assert_eq!(rows[1].week, 2);
        // First row of week 2 is compared against the last row of week 1.
        assert_eq!(rows[1].price_change, PriceChange::Decrease);
    }

    #[test]
    fn groups_order_by_week_but_keep_insertion_order_inside() {
        let skus = vec![
            sku("1", "2024-01-10", 5.0), // week 2
            sku("2", "2024-01-01", 7.0), // week 1
            sku("3", "2024-01-11", 6.0), // week 2
        ];
        let rows = build_rows(&skus);
        let ids: Vec<&str> = rows.iter().map(|r| r.sku.id.as_str()).collect();
        // Week 1 group first, then week 2 in insertion order.
        assert_eq!(ids, vec!["2", "1", "3"]);
        assert_eq!(rows[1].price_change, PriceChange::Decrease); // 5 after 7
        assert_eq!(rows[2].price_change, PriceChange::Increase); // 6 after 5
    }

    #[test]
    fn gm_banding_thresholds() {
        assert_eq!(GmBand::for_percent(40.0), GmBand::Healthy);
        assert_eq!(GmBand::for_percent(39.99), GmBand::Moderate);
        assert_eq!(GmBand::for_percent(10.0), GmBand::Moderate);
        assert_eq!(GmBand::for_percent(9.0), GmBand::Thin);
        assert_eq!(GmBand::for_percent(5.0), GmBand::Critical);
        assert_eq!(GmBand::for_percent(-20.0), GmBand::Critical);
    }
}
