// Session-lifetime city data store
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;
use crate::models::{CityData, CityPatch, CityRecord, seed_cities};
use crate::{v_debug, v_info};

/// Rejection from the untyped update boundary.
#[derive(Debug)]
pub enum PatchError {
    /// The payload was not a JSON object of known fields with the right shapes.
    Malformed(String),
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::Malformed(reason) => write!(f, "malformed city patch: {}", reason),
        }
    }
}

impl std::error::Error for PatchError {}

/// Shared handle to the city data. Clones point at the same store, so an
/// update through one handle is visible through every other.
#[derive(Clone)]
pub struct CityStore {
    cities: Arc<RwLock<CityData>>,
    version: Arc<watch::Sender<u64>>,
}

impl CityStore {
    pub fn new(initial: CityData) -> Self {
        let (sender, _) = watch::channel(0u64);
        Self {
            cities: Arc::new(RwLock::new(initial)),
            version: Arc::new(sender),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_cities())
    }

    pub fn empty() -> Self {
        Self::new(CityData::new())
    }

    /// Snapshot of every city. Callers re-read to observe later updates.
    pub fn get_all(&self) -> CityData {
        self.read().clone()
    }

    pub fn get(&self, city: &str) -> Option<CityRecord> {
        self.read().get(city).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn city_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Shallow-merges `patch` into the record for `city`, creating the
    /// record when it does not exist yet, then notifies subscribers.
    pub fn update(&self, city: &str, patch: CityPatch) {
        {
            let mut cities = self.write();
            let created = !cities.contains_key(city);
            cities.entry(city.to_string()).or_default().apply(patch);
            if created {
                v_info!("🏙️  Added new city {}", city);
            }
        }

        self.version.send_modify(|version| *version += 1);
        v_debug!("🔄 City store updated: {} (version {})", city, self.version());
    }

    /// Untyped entry point: the patch must be a JSON object with only
    /// `risk`, `disasterType`/`type` and `resources` keys of the right shape.
    /// An empty object (or all-null fields) still creates the city.
    pub fn update_json(&self, city: &str, json: &str) -> Result<(), PatchError> {
        let patch: CityPatch =
            serde_json::from_str(json).map_err(|e| PatchError::Malformed(e.to_string()))?;
        self.update(city, patch);
        Ok(())
    }

    /// Number of updates applied since the store was built.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    /// Change feed: the receiver observes the version bump of every update.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    fn read(&self) -> RwLockReadGuard<'_, CityData> {
        self.cities.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CityData> {
        self.cities.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for CityStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl fmt::Debug for CityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityStore")
            .field("cities", &self.len())
            .field("version", &self.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DisasterType, Resources};

    #[test]
    fn test_update_existing_city_keeps_untouched_fields() {
        let store = CityStore::seeded();
        store.update("Chennai", CityPatch::default().risk("85%"));

        let chennai = store.get("Chennai").unwrap();
        assert_eq!(chennai.risk.as_deref(), Some("85%"));
        assert_eq!(chennai.disaster_type, Some(DisasterType::Cyclone));
        assert_eq!(chennai.resources, Some(Resources::new(500, 200, 100)));
    }

    #[test]
    fn test_update_creates_missing_city_without_resources() {
        let store = CityStore::seeded();
        store.update("NewCity", CityPatch::default().risk("10%"));

        let record = store.get("NewCity").unwrap();
        assert_eq!(record.risk.as_deref(), Some("10%"));
        assert_eq!(record.disaster_type, None);
        assert_eq!(record.resources, None);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_clones_share_state() {
        let store = CityStore::seeded();
        let view_handle = store.clone();
        store.update("Patna", CityPatch::default().risk("60%"));
        assert_eq!(view_handle.get("Patna").unwrap().risk.as_deref(), Some("60%"));
        assert_eq!(view_handle.version(), 1);
    }

    #[test]
    fn test_snapshot_is_not_live() {
        let store = CityStore::seeded();
        let snapshot = store.get_all();
        store.update("Bhuj", CityPatch::default().risk("99%"));
        assert_eq!(snapshot["Bhuj"].risk.as_deref(), Some("40%"));
        assert_eq!(store.get_all()["Bhuj"].risk.as_deref(), Some("99%"));
    }

    #[test]
    fn test_update_json_rejects_bad_shapes() {
        let store = CityStore::seeded();

        assert!(matches!(store.update_json("Chennai", r#"{"risk": 70}"#), Err(PatchError::Malformed(_))));
        assert!(matches!(store.update_json("Chennai", r#"{"population": 7}"#), Err(PatchError::Malformed(_))));
        assert!(matches!(
            store.update_json("Chennai", r#"{"resources": {"food": "lots"}}"#),
            Err(PatchError::Malformed(_))
        ));
        assert!(matches!(store.update_json("Chennai", r#"{"resources": {"food": 1.5}}"#), Err(PatchError::Malformed(_))));
        assert!(matches!(store.update_json("Chennai", "42"), Err(PatchError::Malformed(_))));

        assert_eq!(store.version(), 0, "rejected patches must not touch the store");
        assert_eq!(store.get("Chennai").unwrap().risk.as_deref(), Some("70%"));
    }

    #[test]
    fn test_update_json_accepts_negative_counters() {
        let store = CityStore::seeded();
        store.update_json("Patna", r#"{"type": "Flood", "resources": {"food": -5}}"#).unwrap();
        assert_eq!(store.get("Patna").unwrap().resources, Some(Resources { food: Some(-5), medical: None, shelter: None }));
    }

    #[test]
    fn test_update_json_empty_object_creates_city() {
        let store = CityStore::seeded();
        store.update_json("Y", "{}").unwrap();
        assert_eq!(store.get("Y"), Some(CityRecord::default()));
        assert_eq!(store.version(), 1);

        store.update_json("Chennai", r#"{"resources": null}"#).unwrap();
        assert_eq!(store.get("Chennai").unwrap().resources, Some(Resources::new(500, 200, 100)));
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_update_json_accepts_counters_at_i64_limits() {
        let store = CityStore::empty();
        store
            .update_json("X", r#"{"resources": {"food": 9223372036854775807, "medical": 1}}"#)
            .unwrap();
        assert_eq!(store.get("X").unwrap().resource_total(), i128::from(i64::MAX) + 1);
    }
}
