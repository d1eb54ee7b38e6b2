/// Derived sales metrics. The three fields are always recomputed together
/// from price, cost and sales units; they are never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesMetrics {
    pub sales_dollars: f64,
    pub gm_dollars: f64,
    pub gm_percent: f64,
}

impl SalesMetrics {
    /// Recompute the derived fields:
    ///
    /// ```text
    /// salesDollars = salesUnits × price
    /// gmDollars    = salesDollars − salesUnits × cost
    /// gmPercent    = gmDollars / salesDollars × 100   (0 when salesDollars = 0)
    /// ```
    ///
    /// Negative or non-finite inputs are rejected; the caller reverts the
    /// edit and surfaces the message.
    pub fn derive(price: f64, cost: f64, sales_units: f64) -> Result<Self, String> {
        for (label, value) in [
            ("Price", price),
            ("Cost", cost),
            ("Sales units", sales_units),
        ] {
            if !value.is_finite() {
                return Err(format!("{label} must be a valid number"));
            }
            if value < 0.0 {
                return Err(format!("{label} cannot be negative"));
            }
        }

        let sales_dollars = sales_units * price;
        let gm_dollars = sales_dollars - sales_units * cost;
        let gm_percent = if sales_dollars > 0.0 {
            gm_dollars / sales_dollars * 100.0
        } else {
            0.0
        };

        Ok(Self {
            sales_dollars,
            gm_dollars,
            gm_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_the_documented_example() {
        let m = SalesMetrics::derive(10.0, 6.0, 5.0).unwrap();
        assert_eq!(m.sales_dollars, 50.0);
        assert_eq!(m.gm_dollars, 20.0);
        assert_eq!(m.gm_percent, 40.0);
    }

    #[test]
    fn zero_sales_dollars_yields_zero_percent() {
        let m = SalesMetrics::derive(0.0, 6.0, 5.0).unwrap();
        assert_eq!(m.sales_dollars, 0.0);
        assert_eq!(m.gm_dollars, -30.0);
        assert_eq!(m.gm_percent, 0.0);

        let empty = SalesMetrics::derive(10.0, 6.0, 0.0).unwrap();
        assert_eq!(empty.gm_percent, 0.0);
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(SalesMetrics::derive(-1.0, 6.0, 5.0).is_err());
        assert!(SalesMetrics::derive(10.0, -0.01, 5.0).is_err());
        assert!(SalesMetrics::derive(10.0, 6.0, -5.0).is_err());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(SalesMetrics::derive(f64::NAN, 6.0, 5.0).is_err());
        assert!(SalesMetrics::derive(10.0, f64::INFINITY, 5.0).is_err());
    }

    #[test]
    fn negative_margin_keeps_negative_percent() {
        let m = SalesMetrics::derive(5.0, 10.0, 2.0).unwrap();
        assert_eq!(m.sales_dollars, 10.0);
        assert_eq!(m.gm_dollars, -10.0);
        assert_eq!(m.gm_percent, -100.0);
    }
}
