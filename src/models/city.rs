// City records tracked by the shared store
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// City name -> record. Absent key means "no data".
pub type CityData = HashMap<String, CityRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisasterType {
    Cyclone,
    Flood,
    Earthquake,
    HeavyRainfall,
    Heatwave,
    Drought,
    Other(String),
}

impl DisasterType {
    pub fn label(&self) -> &str {
        match self {
            DisasterType::Cyclone => "Cyclone",
            DisasterType::Flood => "Flood",
            DisasterType::Earthquake => "Earthquake",
            DisasterType::HeavyRainfall => "Heavy Rainfall",
            DisasterType::Heatwave => "Heatwave",
            DisasterType::Drought => "Drought",
            DisasterType::Other(name) => name,
        }
    }
}

/// Known labels map to their variant; anything else, including a different
/// casing, is kept verbatim so it serializes back unchanged.
impl From<String> for DisasterType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Cyclone" => DisasterType::Cyclone,
            "Flood" => DisasterType::Flood,
            "Earthquake" => DisasterType::Earthquake,
            "Heavy Rainfall" => DisasterType::HeavyRainfall,
            "Heatwave" => DisasterType::Heatwave,
            "Drought" => DisasterType::Drought,
            _ => DisasterType::Other(value),
        }
    }
}

impl From<&str> for DisasterType {
    fn from(value: &str) -> Self {
        DisasterType::from(value.to_string())
    }
}

impl From<DisasterType> for String {
    fn from(value: DisasterType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Food, medical and shelter counters. A missing counter counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelter: Option<i64>,
}

impl Resources {
    pub fn new(food: i64, medical: i64, shelter: i64) -> Self {
        Self {
            food: Some(food),
            medical: Some(medical),
            shelter: Some(shelter),
        }
    }

    pub fn food_or_zero(&self) -> i64 {
        self.food.unwrap_or(0)
    }

    pub fn medical_or_zero(&self) -> i64 {
        self.medical.unwrap_or(0)
    }

    pub fn shelter_or_zero(&self) -> i64 {
        self.shelter.unwrap_or(0)
    }

    /// Widened so that counters near the `i64` limits still add up exactly.
    pub fn total(&self) -> i128 {
        i128::from(self.food_or_zero()) + i128::from(self.medical_or_zero()) + i128::from(self.shelter_or_zero())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    #[serde(rename = "disasterType", alias = "type", default, skip_serializing_if = "Option::is_none")]
    pub disaster_type: Option<DisasterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
}

impl CityRecord {
    pub fn new(risk: &str, disaster_type: DisasterType, resources: Resources) -> Self {
        Self {
            risk: Some(risk.to_string()),
            disaster_type: Some(disaster_type),
            resources: Some(resources),
        }
    }

    /// Shallow merge: every field present in the patch replaces the stored
    /// field wholesale, `resources` included.
    pub fn apply(&mut self, patch: CityPatch) {
        if let Some(risk) = patch.risk {
            self.risk = Some(risk);
        }
        if let Some(disaster_type) = patch.disaster_type {
            self.disaster_type = Some(disaster_type);
        }
        if let Some(resources) = patch.resources {
            self.resources = Some(resources);
        }
    }

    pub fn resource_total(&self) -> i128 {
        self.resources.as_ref().map(Resources::total).unwrap_or(0)
    }
}

/// Typed partial record accepted by the store's update path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    #[serde(rename = "disasterType", alias = "type", default, skip_serializing_if = "Option::is_none")]
    pub disaster_type: Option<DisasterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
}

impl CityPatch {
    pub fn risk(mut self, risk: &str) -> Self {
        self.risk = Some(risk.to_string());
        self
    }

    pub fn disaster_type(mut self, disaster_type: DisasterType) -> Self {
        self.disaster_type = Some(disaster_type);
        self
    }

    pub fn resources(mut self, resources: Resources) -> Self {
        self.resources = Some(resources);
        self
    }
}

/// The three cities every session starts with.
pub fn seed_cities() -> CityData {
    let mut cities = CityData::new();
    cities.insert(
        "Chennai".to_string(),
        CityRecord::new("70%", DisasterType::Cyclone, Resources::new(500, 200, 100)),
    );
    cities.insert(
        "Patna".to_string(),
        CityRecord::new("55%", DisasterType::Flood, Resources::new(700, 150, 80)),
    );
    cities.insert(
        "Bhuj".to_string(),
        CityRecord::new("40%", DisasterType::Earthquake, Resources::new(300, 100, 120)),
    );
    cities
}
