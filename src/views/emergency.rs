// Emergency contacts page
use super::heading;
use crate::models::emergency_contacts;

pub fn render() -> String {
    let mut lines = vec![
        heading("📞", "Emergency Contacts"),
        "In case of any emergency, please use the numbers below. Stay calm and provide clear information.".to_string(),
        String::new(),
    ];

    for contact in emergency_contacts() {
        lines.push(format!("  {:<28} {:>11}  {}", contact.name, contact.number, contact.tel_link()));
        lines.push(format!("  {:<28} {}", "", contact.description));
    }

    lines.join("\n")
}
