use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

impl EmergencyContact {
    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.number)
    }
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact { name: "National Emergency Number", number: "112", description: "All-in-one emergency helpline" },
        EmergencyContact { name: "Police", number: "100", description: "For law enforcement emergencies" },
        EmergencyContact { name: "Ambulance", number: "108", description: "For disaster response and rescue" },
        EmergencyContact { name: "Fire", number: "101", description: "For fire emergencies" },
        EmergencyContact { name: "Women's Helpline", number: "1091", description: "For women in distress" },
        EmergencyContact { name: "Child Helpline", number: "1098", description: "For child protection services" },
        EmergencyContact { name: "Senior Citizen Helpline", number: "14567", description: "For senior citizen assistance" },
        EmergencyContact { name: "VigrahaRakṣitā Team", number: "9913140919", description: "Direct contact for disaster support" },
    ]
}
