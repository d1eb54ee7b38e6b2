use super::view_model::StoreDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StoreDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = StoreDetailsViewModel::new();

    view! {
        <div class="details-container store-details">
            <div class="details-header">
                <h3>{"New store"}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="store-name">{"Store Name"}</label>
                    <input
                        type="text"
                        id="store-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| {
                            vm.form.update(|f| f.name = event_target_value(&ev));
                        }
                        placeholder="Store name"
                    />
                </div>

                <div class="form-group">
                    <label for="store-state">{"State"}</label>
                    <input
                        type="text"
                        id="store-state"
                        prop:value=move || vm.form.get().state
                        on:input=move |ev| {
                            vm.form.update(|f| f.state = event_target_value(&ev));
                        }
                        placeholder="State"
                    />
                </div>

                <div class="form-group">
                    <label for="store-city">{"City"}</label>
                    <input
                        type="text"
                        id="store-city"
                        prop:value=move || vm.form.get().city
                        on:input=move |ev| {
                            vm.form.update(|f| f.city = event_target_value(&ev));
                        }
                        placeholder="City"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled={
                        let is_valid = vm.is_form_valid();
                        move || !is_valid()
                    }
                >
                    {icon("save")}
                    {"Add Store"}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
