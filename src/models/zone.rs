// Dashboard map zones
use crate::models::city::DisasterType;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct DisasterZone {
    pub id: &'static str,
    pub name: &'static str,
    pub zone_type: DisasterType,
    pub lat: f64,
    pub lng: f64,
    pub detail: &'static str,
}

impl DisasterZone {
    /// Volunteers deployed to this zone: a base by disaster type plus a
    /// small per-zone offset derived from the zone id.
    pub fn volunteer_count(&self) -> u32 {
        let base = match self.zone_type {
            DisasterType::Earthquake => 180,
            DisasterType::Flood => 220,
            _ => 130,
        };
        let offset = self.id.bytes().next().map(|b| u32::from(b) % 40).unwrap_or(0);
        base + offset
    }
}

pub fn india_zones() -> Vec<DisasterZone> {
    vec![
        DisasterZone {
            id: "uttarakhand",
            name: "Uttarakhand",
            zone_type: DisasterType::Earthquake,
            lat: 30.0668,
            lng: 79.0193,
            detail: "Earthquake 5.0 Richter Scale detected near Dehradun.",
        },
        DisasterZone {
            id: "westbengal",
            name: "West Bengal",
            zone_type: DisasterType::Flood,
            lat: 22.9868,
            lng: 87.8550,
            detail: "Flood warning in Kolkata – Hooghly river rising rapidly.",
        },
        DisasterZone {
            id: "jharkhand",
            name: "Jharkhand",
            zone_type: DisasterType::Flood,
            lat: 23.6102,
            lng: 85.2799,
            detail: "Flood warning in Ranchi – Heavy rainfall expected.",
        },
        DisasterZone {
            id: "tamilnadu",
            name: "Tamil Nadu",
            zone_type: DisasterType::Cyclone,
            lat: 11.1271,
            lng: 78.6569,
            detail: "Cyclone alert upgraded for Tamil Nadu coast.",
        },
        DisasterZone {
            id: "kerala",
            name: "Kerala",
            zone_type: DisasterType::Cyclone,
            lat: 10.8505,
            lng: 76.2711,
            detail: "Cyclone alert downgraded for Kerala coast.",
        },
        DisasterZone {
            id: "pakistan_muzaffarabad",
            name: "Muzaffarabad",
            zone_type: DisasterType::Flood,
            lat: 34.3748,
            lng: 73.4722,
            detail: "Flood warning in Muzaffarabad – River Jhelum rising rapidly.",
        },
        DisasterZone {
            id: "pakistan_rawalakot",
            name: "Rawalakot",
            zone_type: DisasterType::Drought,
            lat: 33.8581,
            lng: 73.7603,
            detail: "Drought conditions worsening in Rawalakot area.",
        },
    ]
}

/// Which zone types the dashboard map currently shows. Everything is
/// visible until hidden.
#[derive(Debug, Clone, Default)]
pub struct ZoneFilter {
    hidden: HashSet<DisasterType>,
}

impl ZoneFilter {
    pub fn toggle(&mut self, zone_type: DisasterType) {
        if !self.hidden.remove(&zone_type) {
            self.hidden.insert(zone_type);
        }
    }

    pub fn is_visible(&self, zone_type: &DisasterType) -> bool {
        !self.hidden.contains(zone_type)
    }

    pub fn apply<'a>(&self, zones: &'a [DisasterZone]) -> Vec<&'a DisasterZone> {
        zones.iter().filter(|zone| self.is_visible(&zone.zone_type)).collect()
    }
}

pub fn total_volunteers(zones: &[DisasterZone]) -> u32 {
    zones.iter().map(DisasterZone::volunteer_count).sum()
}
