use super::model;
use contracts::domain::a002_sku::aggregate::SkuDto;
use leptos::prelude::*;

/// ViewModel for the SKU add form
#[derive(Clone, Copy)]
pub struct SkuDetailsViewModel {
    pub form: RwSignal<SkuDto>,
    pub error: RwSignal<Option<String>>,
}

impl SkuDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(SkuDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool {
        let form = self.form;
        move || form.get().is_complete()
    }

    /// Persist the form. A coercion or validation failure surfaces a
    /// blocking alert; the form keeps its input.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get();
        match model::insert(&dto) {
            Ok(()) => {
                self.form.set(SkuDto::default());
                self.error.set(None);
                on_saved.run(());
            }
            Err(e) => {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(&e);
                }
                self.error.set(Some(e));
            }
        }
    }
}
