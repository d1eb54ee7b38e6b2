//! Sidebar with grouped navigation entries. Clicking an entry opens (or
//! activates) the matching screen tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str)>, // (key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "references",
            label: "References",
            items: vec![("a001_store", "store"), ("a002_sku", "package")],
        },
        MenuGroup {
            id: "planning",
            label: "Planning",
            items: vec![("p900_planning_grid", "grid")],
        },
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            items: vec![
                ("d400_weekly_performance", "bar-chart"),
                ("d401_gross_margin", "percent"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            items: vec![("u501_import_from_excel", "import")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="sidebar__group" data-group-id=group.id>
                        <div class="sidebar__group-label">{group.label}</div>
                        <ul class="sidebar__items">
                            {group.items.into_iter().map(|(key, icon_name)| {
                                let label = tab_label_for_key(key);
                                view! {
                                    <li class="sidebar__item">
                                        <button
                                            class="sidebar__link"
                                            class:sidebar__link--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
