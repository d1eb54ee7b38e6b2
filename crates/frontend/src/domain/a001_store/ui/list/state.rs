use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct StoreListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for StoreListState {
    fn default() -> Self {
        Self {
            sort_field: "serial_no".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<StoreListState> {
    RwSignal::new(StoreListState::default())
}
