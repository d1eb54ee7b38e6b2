use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SkuListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for SkuListState {
    fn default() -> Self {
        Self {
            sort_field: "date_added".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<SkuListState> {
    RwSignal::new(SkuListState::default())
}
