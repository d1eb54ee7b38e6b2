use crate::shared::data::local_store::{Collection, SKUS_KEY, STORES_KEY};
use contracts::domain::a001_store::aggregate::Store;
use contracts::domain::a002_sku::aggregate::{Sku, SkuDto};

/// Registered store names, offered by the store selector.
pub fn store_options() -> Vec<String> {
    Collection::<Store>::load(STORES_KEY)
        .items
        .into_iter()
        .map(|s| s.name)
        .collect()
}

/// Insert a new SKU from the form. The store reference is validated against
/// the registry at write time; the numeric fields are coerced and the
/// derived metrics computed before the collection is rewritten.
pub fn insert(dto: &SkuDto) -> Result<(), String> {
    let store = dto.store.trim();
    if !store_options().iter().any(|name| name == store) {
        return Err(format!("'{store}' is not a registered store"));
    }

    let (price, cost, sales_units) = dto.parse_inputs()?;
    let sku = Sku::new_for_insert(
        store.to_string(),
        dto.sku.trim().to_string(),
        price,
        cost,
        sales_units,
    )?;

    let mut collection = Collection::<Sku>::load(SKUS_KEY);
    collection.items.push(sku);
    collection.save()
}
