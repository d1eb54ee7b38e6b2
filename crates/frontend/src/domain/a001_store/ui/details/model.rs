use crate::shared::data::local_store::{Collection, STORES_KEY};
use contracts::domain::a001_store::aggregate::{Store, StoreDto};

/// Insert a new store with the next sequential serial and rewrite the
/// collection.
pub fn insert(dto: &StoreDto) -> Result<(), String> {
    let mut collection = Collection::<Store>::load(STORES_KEY);
    let store = Store::new_for_insert(&collection.items, dto);
    store.validate()?;
    collection.items.push(store);
    collection.save()
}
