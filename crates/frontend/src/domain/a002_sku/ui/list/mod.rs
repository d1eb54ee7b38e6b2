pub mod state;

use self::state::create_state;
use crate::domain::a002_sku::ui::details::SkuDetails;
use crate::shared::components::table::number_format::{format_money, format_percent};
use crate::shared::data::local_store::{Collection, SKUS_KEY};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use contracts::domain::a002_sku::aggregate::{remove_by_id, Sku};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct SkuRow {
    pub id: String,
    pub store: String,
    pub sku: String,
    pub price: f64,
    pub cost: f64,
    pub sales_units: f64,
    pub sales_dollars: f64,
    pub gm_dollars: f64,
    pub gm_percent: f64,
    pub date_added: String,
}

impl From<Sku> for SkuRow {
    fn from(s: Sku) -> Self {
        Self {
            id: s.id,
            store: s.store,
            sku: s.sku,
            price: s.price,
            cost: s.cost,
            sales_units: s.sales_units,
            sales_dollars: s.sales_dollars,
            gm_dollars: s.gm_dollars,
            gm_percent: s.gm_percent,
            date_added: s.date_added,
        }
    }
}

impl Sortable for SkuRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let by_f64 = |a: f64, b: f64| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match field {
            "store" => self.store.to_lowercase().cmp(&other.store.to_lowercase()),
            "sku" => self.sku.to_lowercase().cmp(&other.sku.to_lowercase()),
            "price" => by_f64(self.price, other.price),
            "cost" => by_f64(self.cost, other.cost),
            "sales_units" => by_f64(self.sales_units, other.sales_units),
            "gm_percent" => by_f64(self.gm_percent, other.gm_percent),
            "date_added" => self.date_added.cmp(&other.date_added),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SkuList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<SkuRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);

    let fetch = move || {
        set_items.set(fetch_skus().into_iter().map(Into::into).collect());
        set_error.set(None);
    };

    let handle_delete = move |id: String, label: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete SKU {label}?"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        match delete_sku(&id) {
            Ok(()) => fetch(),
            Err(e) => set_error.set(Some(e)),
        }
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let mut items_vec = items.get();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    fetch();

    let sortable_header = move |field: &'static str, label: &'static str| {
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                {label}
                <span class={move || get_sort_class(&state.get().sort_field, field)}>
                    {move || get_sort_indicator(&state.get().sort_field, field, state.get().sort_ascending)}
                </span>
            </th>
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"SKUs"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_details.set(true)>
                        {icon("plus")}
                        {"New SKU"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || show_details.get().then(|| view! {
                <SkuDetails
                    on_saved=Callback::new(move |_| {
                        set_show_details.set(false);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| set_show_details.set(false))
                />
            })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sortable_header("store", "Store")}
                            {sortable_header("sku", "SKU")}
                            {sortable_header("price", "Price")}
                            {sortable_header("cost", "Cost")}
                            {sortable_header("sales_units", "Sales Units")}
                            <th class="table__header-cell">"Sales Dollars"</th>
                            <th class="table__header-cell">"GM Dollars"</th>
                            {sortable_header("gm_percent", "GM %")}
                            {sortable_header("date_added", "Date Added")}
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id_for_delete = row.id.clone();
                            let label_for_delete = row.sku.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.store}</td>
                                    <td class="table__cell">{row.sku}</td>
                                    <td class="table__cell table__cell--number">{format_money(row.price)}</td>
                                    <td class="table__cell table__cell--number">{format_money(row.cost)}</td>
                                    <td class="table__cell table__cell--number">{row.sales_units}</td>
                                    <td class="table__cell table__cell--number">{format_money(row.sales_dollars)}</td>
                                    <td class="table__cell table__cell--number">{format_money(row.gm_dollars)}</td>
                                    <td class="table__cell table__cell--number">{format_percent(row.gm_percent)}</td>
                                    <td class="table__cell">{format_date(&row.date_added)}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Delete"
                                            on:click=move |_| handle_delete(id_for_delete.clone(), label_for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </button>
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

fn fetch_skus() -> Vec<Sku> {
    Collection::<Sku>::load(SKUS_KEY).items
}

fn delete_sku(id: &str) -> Result<(), String> {
    let mut collection = Collection::<Sku>::load(SKUS_KEY);
    if !remove_by_id(&mut collection.items, id) {
        return Err(format!("SKU {id} not found"));
    }
    collection.save()
}
