//! TabPage component - wrapper around one tab's content
//!
//! Responsible for:
//! - showing/hiding content depending on whether the tab is active
//! - asking the registry for the content by key

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Wrapper for a single tab.
///
/// Content is created once per open through `registry::render_tab_content`
/// and kept mounted; visibility is toggled via a CSS class so switching tabs
/// does not lose screen state.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    let content = render_tab_content(&tab.key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
