//! Tab strip and tab pages for the center area.

use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__strip">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: Tab| {
                        let key_for_activate = tab.key.clone();
                        let key_for_close = tab.key.clone();
                        let key_for_active_check = tab.key.clone();
                        view! {
                            <div
                                class="tabs__handle"
                                class:tabs__handle--active=move || {
                                    ctx.active.get().as_ref() == Some(&key_for_active_check)
                                }
                            >
                                <button
                                    class="tabs__label"
                                    on:click=move |_| ctx.activate_tab(&key_for_activate)
                                >
                                    {tab.title.clone()}
                                </button>
                                <button
                                    class="tabs__close"
                                    title="Close"
                                    on:click=move |_| ctx.close_tab(&key_for_close)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <div class="tabs__body">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: Tab| {
                        view! { <TabPage tab=tab tabs_store=ctx /> }
                    }
                />
            </div>
        </div>
    }
}
