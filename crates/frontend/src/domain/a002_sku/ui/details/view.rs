use super::model;
use super::view_model::SkuDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn SkuDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = SkuDetailsViewModel::new();
    let store_options = StoredValue::new(model::store_options());

    view! {
        <div class="details-container sku-details">
            <div class="details-header">
                <h3>{"New SKU"}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="sku-store">{"Store"}</label>
                    <select
                        id="sku-store"
                        prop:value=move || vm.form.get().store
                        on:change=move |ev| {
                            vm.form.update(|f| f.store = event_target_value(&ev));
                        }
                    >
                        <option value="" disabled=true>{"Select store"}</option>
                        {store_options.get_value().into_iter().map(|name| view! {
                            <option value=name.clone()>{name.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="sku-label">{"SKU"}</label>
                    <input
                        type="text"
                        id="sku-label"
                        prop:value=move || vm.form.get().sku
                        on:input=move |ev| {
                            vm.form.update(|f| f.sku = event_target_value(&ev));
                        }
                        placeholder="SKU"
                    />
                </div>

                <div class="form-group">
                    <label for="sku-price">{"Price"}</label>
                    <input
                        type="number"
                        id="sku-price"
                        prop:value=move || vm.form.get().price
                        on:input=move |ev| {
                            vm.form.update(|f| f.price = event_target_value(&ev));
                        }
                        placeholder="0.00"
                    />
                </div>

                <div class="form-group">
                    <label for="sku-cost">{"Cost"}</label>
                    <input
                        type="number"
                        id="sku-cost"
                        prop:value=move || vm.form.get().cost
                        on:input=move |ev| {
                            vm.form.update(|f| f.cost = event_target_value(&ev));
                        }
                        placeholder="0.00"
                    />
                </div>

                <div class="form-group">
                    <label for="sku-units">{"Sales Units"}</label>
                    <input
                        type="number"
                        id="sku-units"
                        prop:value=move || vm.form.get().sales_units
                        on:input=move |ev| {
                            vm.form.update(|f| f.sales_units = event_target_value(&ev));
                        }
                        placeholder="0"
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
                    {"Add SKU"}
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
