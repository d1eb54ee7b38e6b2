use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// A retail store location.
///
/// Serial numbers are human-readable identifiers assigned sequentially at
/// creation ("SN-1", "SN-2", …) and never reused within a loaded collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "serialNo")]
    pub serial_no: String,

    pub name: String,
    pub state: String,
    pub city: String,
}

impl Store {
    /// Create a new store with the next serial for `existing`.
    pub fn new_for_insert(existing: &[Store], dto: &StoreDto) -> Self {
        Self {
            serial_no: next_serial(existing),
            name: dto.name.trim().to_string(),
            state: dto.state.trim().to_string(),
            city: dto.city.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Store name is required".into());
        }
        if self.state.trim().is_empty() {
            return Err("State is required".into());
        }
        if self.city.trim().is_empty() {
            return Err("City is required".into());
        }
        Ok(())
    }
}

/// Next serial number for a collection: "SN-<len + 1>".
pub fn next_serial(existing: &[Store]) -> String {
    format!("SN-{}", existing.len() + 1)
}

/// Remove a store by serial number. Returns true if a record was removed.
///
/// SKUs referencing the store by name are deliberately left untouched;
/// the reference is soft and deletion never cascades.
pub fn remove_by_serial(stores: &mut Vec<Store>, serial_no: &str) -> bool {
    let before = stores.len();
    stores.retain(|s| s.serial_no != serial_no);
    stores.len() != before
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for the store add form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreDto {
    pub name: String,
    pub state: String,
    pub city: String,
}

impl StoreDto {
    /// Form completeness gate: the submit action stays disabled until every
    /// required field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.state.trim().is_empty()
            && !self.city.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, state: &str, city: &str) -> StoreDto {
        StoreDto {
            name: name.into(),
            state: state.into(),
            city: city.into(),
        }
    }

    #[test]
    fn serials_are_sequential() {
        let mut stores = Vec::new();
        let a = Store::new_for_insert(&stores, &dto("Downtown", "CA", "Fresno"));
        assert_eq!(a.serial_no, "SN-1");
        stores.push(a);
        let b = Store::new_for_insert(&stores, &dto("Uptown", "NY", "Albany"));
        assert_eq!(b.serial_no, "SN-2");
    }

    #[test]
    fn insert_trims_fields() {
        let s = Store::new_for_insert(&[], &dto("  Downtown ", " CA", "Fresno "));
        assert_eq!(s.name, "Downtown");
        assert_eq!(s.state, "CA");
        assert_eq!(s.city, "Fresno");
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let s = Store::new_for_insert(&[], &dto("Downtown", "  ", "Fresno"));
        assert!(s.validate().is_err());
        let ok = Store::new_for_insert(&[], &dto("Downtown", "CA", "Fresno"));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn dto_completeness_gate() {
        assert!(!dto("Downtown", "", "Fresno").is_complete());
        assert!(dto("Downtown", "CA", "Fresno").is_complete());
    }

    #[test]
    fn remove_by_serial_only_touches_match() {
        let mut stores = vec![
            Store::new_for_insert(&[], &dto("A", "CA", "Fresno")),
            Store {
                serial_no: "SN-2".into(),
                name: "B".into(),
                state: "NY".into(),
                city: "Albany".into(),
            },
        ];
        assert!(remove_by_serial(&mut stores, "SN-1"));
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].serial_no, "SN-2");
        assert!(!remove_by_serial(&mut stores, "SN-9"));
    }

    #[test]
    fn round_trip_preserves_order_and_values() {
        let stores = vec![
            Store::new_for_insert(&[], &dto("A", "CA", "Fresno")),
            Store {
                serial_no: "SN-2".into(),
                name: "B".into(),
                state: "NY".into(),
                city: "Albany".into(),
            },
        ];
        let raw = serde_json::to_string(&stores).unwrap();
        assert!(raw.contains("\"serialNo\":\"SN-1\""));
        let back: Vec<Store> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, stores);
    }
}
