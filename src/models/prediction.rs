// Static risk tables behind the prediction view
use crate::models::city::DisasterType;
use chrono::NaiveDate;
use serde::Serialize;

pub const TREND_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

#[derive(Debug, Clone, Serialize)]
pub struct CityRiskProfile {
    pub city: &'static str,
    pub disaster_type: DisasterType,
    pub risk: &'static str,
    pub message: &'static str,
    pub trend: [u32; 6],
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentPrediction {
    pub city: String,
    pub disaster_type: DisasterType,
    pub risk: String,
    pub date: NaiveDate,
}

pub fn risk_profiles() -> Vec<CityRiskProfile> {
    vec![
        CityRiskProfile {
            city: "Chennai",
            disaster_type: DisasterType::Cyclone,
            risk: "70%",
            message: "70% risk of cyclone next 3 days",
            trend: [60, 65, 70, 68, 72, 70],
        },
        CityRiskProfile {
            city: "Patna",
            disaster_type: DisasterType::Flood,
            risk: "55%",
            message: "55% risk of flood",
            trend: [40, 45, 50, 52, 54, 55],
        },
        CityRiskProfile {
            city: "Bhuj",
            disaster_type: DisasterType::Earthquake,
            risk: "40%",
            message: "40% risk of earthquake",
            trend: [30, 32, 35, 37, 39, 40],
        },
        CityRiskProfile {
            city: "Mumbai",
            disaster_type: DisasterType::HeavyRainfall,
            risk: "65%",
            message: "65% risk of heavy rainfall next 3 days",
            trend: [55, 58, 60, 62, 64, 65],
        },
        CityRiskProfile {
            city: "Delhi",
            disaster_type: DisasterType::Heatwave,
            risk: "50%",
            message: "50% risk of heatwave next 3 days",
            trend: [45, 47, 48, 49, 50, 50],
        },
        CityRiskProfile {
            city: "Kolkata",
            disaster_type: DisasterType::Flood,
            risk: "45%",
            message: "45% risk of flood next 3 days",
            trend: [40, 42, 43, 44, 44, 45],
        },
        CityRiskProfile {
            city: "Bangalore",
            disaster_type: DisasterType::Drought,
            risk: "60%",
            message: "60% risk of drought next 3 days",
            trend: [50, 55, 58, 60, 62, 60],
        },
        CityRiskProfile {
            city: "Hyderabad",
            disaster_type: DisasterType::Heatwave,
            risk: "50%",
            message: "50% risk of heatwave next 3 days",
            trend: [45, 48, 50, 52, 53, 50],
        },
    ]
}

/// All recent predictions share the same publication date.
pub fn recent_predictions() -> Vec<RecentPrediction> {
    let date = NaiveDate::from_ymd_opt(2025, 4, 29).unwrap_or_default();
    risk_profiles()
        .into_iter()
        .map(|profile| RecentPrediction {
            city: profile.city.to_string(),
            disaster_type: profile.disaster_type,
            risk: profile.risk.to_string(),
            date,
        })
        .collect()
}

pub fn safety_tips(disaster_type: &DisasterType) -> &'static [&'static str] {
    match disaster_type {
        DisasterType::Cyclone => &[
            "Stay indoors and away from windows.",
            "Keep emergency supplies ready.",
            "Follow official evacuation orders.",
        ],
        DisasterType::Flood => &[
            "Move to higher ground immediately.",
            "Avoid walking or driving through floodwaters.",
            "Listen to emergency alerts.",
        ],
        DisasterType::Earthquake => &[
            "Drop, Cover, and Hold On.",
            "Stay away from windows and heavy objects.",
            "Evacuate only when safe.",
        ],
        DisasterType::HeavyRainfall => &[
            "Avoid outdoor activities during heavy rain.",
            "Ensure proper drainage around your home.",
            "Stay updated with weather alerts.",
        ],
        DisasterType::Heatwave => &[
            "Stay hydrated and avoid direct sunlight.",
            "Wear light and loose clothing.",
            "Check on vulnerable people regularly.",
        ],
        DisasterType::Drought => &[
            "Conserve water and avoid wastage.",
            "Use water-efficient appliances.",
            "Stay informed about water supply updates.",
        ],
        DisasterType::Other(_) => &[],
    }
}
