// Disaster Watch Library
// City risk store, derived metrics and text views for disaster awareness in India

pub mod models;
pub mod storage;
pub mod operations;
pub mod client;
pub mod views;
pub mod session;
pub mod config;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    city::{CityData, CityPatch, CityRecord, DisasterType, Resources, seed_cities},
    volunteer::VolunteerForm,
};

pub use storage::{CityStore, PatchError};
pub use operations::{total_resources, resource_breakdown, PredictionTable, VolunteerRegistrar};
pub use views::{Route, ViewContext};
pub use config::DisasterWatchConfig;

// Constants
pub const APP_NAME: &str = "VigrahaRakṣhitā";
