pub mod state;

use self::state::create_state;
use crate::domain::a001_store::ui::details::StoreDetails;
use crate::shared::data::local_store::{Collection, STORES_KEY};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use contracts::domain::a001_store::aggregate::{remove_by_serial, Store};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct StoreRow {
    pub serial_no: String,
    pub name: String,
    pub state: String,
    pub city: String,
}

impl From<Store> for StoreRow {
    fn from(s: Store) -> Self {
        Self {
            serial_no: s.serial_no,
            name: s.name,
            state: s.state,
            city: s.city,
        }
    }
}

/// Numeric part of a "SN-<n>" serial, for natural ordering.
fn serial_ordinal(serial_no: &str) -> u64 {
    serial_no
        .strip_prefix("SN-")
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

impl Sortable for StoreRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "serial_no" => serial_ordinal(&self.serial_no).cmp(&serial_ordinal(&other.serial_no)),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "state" => self.state.to_lowercase().cmp(&other.state.to_lowercase()),
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn StoreList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<StoreRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);

    let fetch = move || {
        set_items.set(fetch_stores().into_iter().map(Into::into).collect());
        set_error.set(None);
    };

    let handle_delete = move |serial_no: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete store {serial_no}?"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        match delete_store(&serial_no) {
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

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Stores"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_details.set(true)>
                        {icon("plus")}
                        {"New store"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || show_details.get().then(|| view! {
                <StoreDetails
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("serial_no")>
                                "Serial Number"
                                <span class={move || get_sort_class(&state.get().sort_field, "serial_no")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "serial_no", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Store Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("state")>
                                "State"
                                <span class={move || get_sort_class(&state.get().sort_field, "state")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "state", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("city")>
                                "City"
                                <span class={move || get_sort_class(&state.get().sort_field, "city")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "city", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let serial_for_delete = row.serial_no.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.serial_no}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.state}</td>
                                    <td class="table__cell">{row.city}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Delete"
                                            on:click=move |_| handle_delete(serial_for_delete.clone())
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

fn fetch_stores() -> Vec<Store> {
    Collection::<Store>::load(STORES_KEY).items
}

fn delete_store(serial_no: &str) -> Result<(), String> {
    let mut collection = Collection::<Store>::load(STORES_KEY);
    if !remove_by_serial(&mut collection.items, serial_no) {
        return Err(format!("Store {serial_no} not found"));
    }
    collection.save()
}
