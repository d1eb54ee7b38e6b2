use crate::shared::charts::{render_chart, ChartConfig, ChartSeries};
use crate::shared::data::local_store::{Collection, SKUS_KEY};
use contracts::dashboards::d400_weekly_performance::dto::aggregate;
use contracts::domain::a002_sku::aggregate::{store_names, Sku};
use leptos::prelude::*;

const CHART_CONTAINER: &str = "d400-chart";

/// Weekly sales / cost / profit / loss dashboard.
///
/// Rows are filtered to the selected store and the most recent date in the
/// ledger, then distributed positionally over four weekly buckets. The
/// aggregate is handed to the JS chart surface; nothing is retained beyond
/// the current render.
#[component]
#[allow(non_snake_case)]
pub fn WeeklyPerformanceDashboard() -> impl IntoView {
    let (selected_store, set_selected_store) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let stores = StoredValue::new(store_names(&Collection::<Sku>::load(SKUS_KEY).items));

    // Re-render the chart whenever the store selection changes.
    Effect::new(move |_| {
        let store = selected_store.get();
        if store.is_empty() {
            return;
        }

        let skus = Collection::<Sku>::load(SKUS_KEY).items;
        let buckets = aggregate(&skus, &store);

        let config = ChartConfig {
            title: "SP, CP, Profit, and Loss by Week".to_string(),
            data: buckets,
            series: vec![
                ChartSeries::bar("salesPrice", "Sales Price (SP)", "#42a5f5"),
                ChartSeries::bar("costPrice", "Cost Price (CP)", "#66bb6a"),
                ChartSeries::bar("profit", "Profit", "#ff7043"),
                ChartSeries::bar("loss", "Loss", "#f44336"),
            ],
        };

        if let Err(e) = render_chart(CHART_CONTAINER, &config) {
            log::error!("weekly performance chart: {e}");
            set_error.set(Some(e));
        }
    });

    view! {
        <div class="content dashboard">
            <div class="header">
                <h2>{"Sales, Cost, Profit, and Loss Chart"}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-group">
                <label for="d400-store">{"Select Store"}</label>
                <select
                    id="d400-store"
                    prop:value=move || selected_store.get()
                    on:change=move |ev| set_selected_store.set(event_target_value(&ev))
                >
                    <option value="" disabled=true>{"Select store"}</option>
                    {stores.get_value().into_iter().map(|name| view! {
                        <option value=name.clone()>{name.clone()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div id=CHART_CONTAINER class="chart-container"></div>
        </div>
    }
}
