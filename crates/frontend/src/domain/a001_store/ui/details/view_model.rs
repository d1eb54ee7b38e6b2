use super::model;
use contracts::domain::a001_store::aggregate::StoreDto;
use leptos::prelude::*;

/// ViewModel for the store add form
#[derive(Clone, Copy)]
pub struct StoreDetailsViewModel {
    pub form: RwSignal<StoreDto>,
    pub error: RwSignal<Option<String>>,
}

impl StoreDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(StoreDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool {
        let form = self.form;
        move || form.get().is_complete()
    }

    /// Persist the form. On success the form resets and `on_saved` runs.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get();
        match model::insert(&dto) {
            Ok(()) => {
                self.form.set(StoreDto::default());
                self.error.set(None);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}
