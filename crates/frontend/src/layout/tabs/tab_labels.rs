/// Display title for a tab key.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_store" => "Stores",
        "a002_sku" => "SKUs",
        "p900_planning_grid" => "Planning",
        "d400_weekly_performance" => "Weekly Charts",
        "d401_gross_margin" => "Gross Margin",
        "u501_import_from_excel" => "Import from Excel",
        _ => "Unknown",
    }
}
