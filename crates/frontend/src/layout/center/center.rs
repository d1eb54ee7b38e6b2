use leptos::prelude::*;

#[component]
pub fn Center(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="app-center">
            {children()}
        </div>
    }
}
