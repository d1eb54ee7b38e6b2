use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside
            class="app-left"
            class:app-left--hidden=move || !ctx.left_open.get()
        >
            {children()}
        </aside>
    }
}
