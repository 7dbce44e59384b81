// Volunteer registration form
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SKILLS: [&str; 3] = ["Medical", "Rescue", "Logistics"];

pub const STATES: [&str; 9] = [
    "Gujarat",
    "Maharashtra",
    "Assam",
    "Odisha",
    "Andhra Pradesh",
    "Bihar",
    "Chennai",
    "Patna",
    "Bhuj",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub skill: String,
    pub state: String,
}

/// Field name -> message. Empty means the form may be submitted.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

impl VolunteerForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        if self.address.trim().is_empty() {
            errors.insert("address", "Address is required");
        }
        if !SKILLS.contains(&self.skill.as_str()) {
            errors.insert("skill", "Please select a skill");
        }
        if !STATES.contains(&self.state.as_str()) {
            errors.insert("state", "Please select a state");
        }

        errors
    }

    /// Flat field/value record handed to the email templates.
    pub fn template_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("name".to_string(), self.name.clone());
        params.insert("phone".to_string(), self.phone.clone());
        params.insert("email".to_string(), self.email.clone());
        params.insert("address".to_string(), self.address.clone());
        params.insert("skill".to_string(), self.skill.clone());
        params.insert("state".to_string(), self.state.clone());
        params
    }
}
