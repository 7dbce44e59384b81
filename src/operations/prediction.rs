// Rule-based risk lookup
use crate::models::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CityPrediction {
    pub city: String,
    pub disaster_type: DisasterType,
    pub message: String,
    pub trend: Vec<(&'static str, u32)>,
    pub tips: Vec<&'static str>,
}

pub struct PredictionTable {
    profiles: Vec<CityRiskProfile>,
}

impl PredictionTable {
    pub fn new() -> Self {
        Self { profiles: risk_profiles() }
    }

    pub fn cities(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.city).collect()
    }

    /// Exact, case-sensitive city match. Unknown cities have no prediction.
    pub fn predict(&self, city: &str) -> Option<CityPrediction> {
        let profile = self.profiles.iter().find(|p| p.city == city)?;

        Some(CityPrediction {
            city: profile.city.to_string(),
            disaster_type: profile.disaster_type.clone(),
            message: profile.message.to_string(),
            trend: TREND_MONTHS.iter().copied().zip(profile.trend.iter().copied()).collect(),
            tips: safety_tips(&profile.disaster_type).to_vec(),
        })
    }

    pub fn recent(&self) -> Vec<RecentPrediction> {
        recent_predictions()
    }
}

impl Default for PredictionTable {
    fn default() -> Self {
        Self::new()
    }
}
