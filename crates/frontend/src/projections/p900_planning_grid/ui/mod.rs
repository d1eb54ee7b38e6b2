use crate::shared::components::table::number_format::{format_money, format_percent};
use crate::shared::data::local_store::{Collection, SKUS_KEY};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use contracts::domain::a002_sku::aggregate::Sku;
use contracts::projections::p900_planning_grid::dto::{build_rows, GmBand, PlanningRow};
use leptos::prelude::*;

impl CsvExportable for PlanningRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Store",
            "SKU",
            "Price",
            "Cost",
            "Sales Units",
            "Sales Dollars",
            "GM Dollars",
            "GM %",
            "Week",
            "Price Change",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sku.store.clone(),
            self.sku.sku.clone(),
            self.sku.price.to_string(),
            self.sku.cost.to_string(),
            self.sku.sales_units.to_string(),
            self.sku.sales_dollars.to_string(),
            self.sku.gm_dollars.to_string(),
            self.sku.gm_percent.to_string(),
            self.week.to_string(),
            self.price_change.as_str().to_string(),
        ]
    }
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Editable planning grid over the SKU ledger.
///
/// Price, cost and sales units are editable; the derived fields recompute on
/// every accepted edit and the whole collection is rewritten. Rejected edits
/// (negative or non-numeric input) alert and revert.
#[component]
#[allow(non_snake_case)]
pub fn PlanningGrid() -> impl IntoView {
    let (rows, set_rows) = signal::<Vec<PlanningRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let reload = move || {
        let skus = Collection::<Sku>::load(SKUS_KEY).items;
        set_rows.set(build_rows(&skus));
    };

    let flash_notice = move |message: String| {
        set_notice.set(Some(message));
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2_500).await;
            set_notice.set(None);
        });
    };

    let commit_edit = move |id: String, field: &'static str, raw: String| {
        let value: f64 = match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                alert("Values must be valid numbers");
                reload();
                return;
            }
        };
        if value < 0.0 {
            alert("Values cannot be negative");
            reload();
            return;
        }

        let mut collection = Collection::<Sku>::load(SKUS_KEY);
        let Some(sku) = collection.items.iter_mut().find(|s| s.id == id) else {
            set_error.set(Some(format!("SKU {id} no longer exists")));
            reload();
            return;
        };

        match field {
            "price" => sku.price = value,
            "cost" => sku.cost = value,
            "sales_units" => sku.sales_units = value,
            _ => return,
        }

        match sku.recompute() {
            Ok(()) => match collection.save() {
                Ok(()) => flash_notice("Saved".to_string()),
                Err(e) => set_error.set(Some(e)),
            },
            Err(e) => alert(&e),
        }
        reload();
    };

    let handle_export = move |_| {
        if let Err(e) = export_to_csv(&rows.get(), "planning_data.csv") {
            set_error.set(Some(e));
        }
    };

    reload();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Planning"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_export>
                        {icon("download")}
                        {"Export to CSV"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| reload()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || notice.get().map(|n| view! { <div class="notice">{n}</div> })}

            <div class="table-container">
                <table class="table__data table--striped planning-grid">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Store"</th>
                            <th class="table__header-cell">"SKU"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Cost"</th>
                            <th class="table__header-cell">"Sales Units"</th>
                            <th class="table__header-cell">"Sales Dollars"</th>
                            <th class="table__header-cell">"GM Dollars"</th>
                            <th class="table__header-cell">"GM %"</th>
                            <th class="table__header-cell">"Week"</th>
                            <th class="table__header-cell">"Price Change"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let id_for_price = row.sku.id.clone();
                            let id_for_cost = row.sku.id.clone();
                            let id_for_units = row.sku.id.clone();
                            let gm_class = GmBand::for_percent(row.sku.gm_percent).css_class();
                            let change_class = match row.price_change.as_str() {
                                "Increase" => "price-change--increase",
                                "Decrease" => "price-change--decrease",
                                _ => "price-change--none",
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.sku.store.clone()}</td>
                                    <td class="table__cell">{row.sku.sku.clone()}</td>
                                    <td class="table__cell table__cell--editable">
                                        <input
                                            type="number"
                                            class="grid-input"
                                            prop:value=row.sku.price.to_string()
                                            on:change=move |ev| commit_edit(id_for_price.clone(), "price", event_target_value(&ev))
                                        />
                                    </td>
                                    <td class="table__cell table__cell--editable">
                                        <input
                                            type="number"
                                            class="grid-input"
                                            prop:value=row.sku.cost.to_string()
                                            on:change=move |ev| commit_edit(id_for_cost.clone(), "cost", event_target_value(&ev))
                                        />
                                    </td>
                                    <td class="table__cell table__cell--editable">
                                        <input
                                            type="number"
                                            class="grid-input"
                                            prop:value=row.sku.sales_units.to_string()
                                            on:change=move |ev| commit_edit(id_for_units.clone(), "sales_units", event_target_value(&ev))
                                        />
                                    </td>
                                    <td class="table__cell table__cell--number">{format_money(row.sku.sales_dollars)}</td>
                                    <td class="table__cell table__cell--number">{format_money(row.sku.gm_dollars)}</td>
                                    <td class=format!("table__cell table__cell--number {gm_class}")>
                                        {format_percent(row.sku.gm_percent)}
                                    </td>
                                    <td class="table__cell table__cell--number">{row.week}</td>
                                    <td class=format!("table__cell {change_class}")>
                                        {row.price_change.as_str()}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
