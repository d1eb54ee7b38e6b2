use crate::shared::charts::{render_chart, ChartConfig, ChartSeries};
use crate::shared::data::local_store::{Collection, SKUS_KEY};
use crate::shared::date_utils::format_date;
use contracts::dashboards::d401_gross_margin::dto::{aggregate, available_dates};
use contracts::domain::a002_sku::aggregate::{store_names, Sku};
use leptos::prelude::*;

const CHART_CONTAINER: &str = "d401-chart";

/// Gross-margin dashboard: GM dollars and GM percent for one store on one
/// date, grouped-and-summed into the four weekly buckets.
#[component]
#[allow(non_snake_case)]
pub fn GrossMarginDashboard() -> impl IntoView {
    let (selected_store, set_selected_store) = signal(String::new());
    let (selected_date, set_selected_date) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let skus_snapshot = Collection::<Sku>::load(SKUS_KEY).items;
    let stores = StoredValue::new(store_names(&skus_snapshot));
    let dates = StoredValue::new(available_dates(&skus_snapshot));

    // Re-render when either selector changes.
    Effect::new(move |_| {
        let store = selected_store.get();
        let date = selected_date.get();
        if store.is_empty() || date.is_empty() {
            return;
        }

        let skus = Collection::<Sku>::load(SKUS_KEY).items;
        let buckets = aggregate(&skus, &store, &date);

        let config = ChartConfig {
            title: "Gross Margin by Week".to_string(),
            data: buckets,
            series: vec![
                ChartSeries::bar("gmDollars", "GM Dollars", "#42a5f5"),
                ChartSeries::bar("salesDollars", "Sales Dollars", "#66bb6a"),
                ChartSeries::line("gmPercent", "GM %", "#ff7043"),
            ],
        };

        if let Err(e) = render_chart(CHART_CONTAINER, &config) {
            log::error!("gross margin chart: {e}");
            set_error.set(Some(e));
        }
    });

    view! {
        <div class="content dashboard">
            <div class="header">
                <h2>{"Gross Margin Chart"}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-group">
                <label for="d401-store">{"Select Store"}</label>
                <select
                    id="d401-store"
                    prop:value=move || selected_store.get()
                    on:change=move |ev| set_selected_store.set(event_target_value(&ev))
                >
                    <option value="" disabled=true>{"Select store"}</option>
                    {stores.get_value().into_iter().map(|name| view! {
                        <option value=name.clone()>{name.clone()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="d401-date">{"Select Date"}</label>
                <select
                    id="d401-date"
                    prop:value=move || selected_date.get()
                    on:change=move |ev| set_selected_date.set(event_target_value(&ev))
                >
                    <option value="" disabled=true>{"Select date"}</option>
                    {dates.get_value().into_iter().map(|date| view! {
                        <option value=date.clone()>{format_date(&date)}</option>
                    }).collect_view()}
                </select>
            </div>

            <div id=CHART_CONTAINER class="chart-container"></div>
        </div>
    }
}
