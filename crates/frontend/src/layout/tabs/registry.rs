//! Tab content registry - the single source of truth mapping tab.key → View.

use crate::dashboards::{GrossMarginDashboard, WeeklyPerformanceDashboard};
use crate::domain::a001_store::ui::list::StoreList;
use crate::domain::a002_sku::ui::list::SkuList;
use crate::projections::p900_planning_grid::ui::PlanningGrid;
use crate::usecases::u501_import_from_excel::ImportFromExcelPage;
use leptos::prelude::*;

/// Render the content of a tab by its key.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_store" => view! { <StoreList /> }.into_any(),
        "a002_sku" => view! { <SkuList /> }.into_any(),
        "p900_planning_grid" => view! { <PlanningGrid /> }.into_any(),
        "d400_weekly_performance" => view! { <WeeklyPerformanceDashboard /> }.into_any(),
        "d401_gross_margin" => view! { <GrossMarginDashboard /> }.into_any(),
        "u501_import_from_excel" => view! { <ImportFromExcelPage /> }.into_any(),
        unknown => {
            log::error!("unknown tab key: {unknown}");
            view! { <div class="tabs__placeholder">{"Unknown screen"}</div> }.into_any()
        }
    }
}
