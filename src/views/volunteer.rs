// Volunteer registration page and submission receipt
use super::heading;
use crate::models::{SKILLS, STATES};
use crate::operations::RegistrationReceipt;

pub fn render() -> String {
    let lines = vec![
        heading("📝", "Volunteer Registration"),
        "Fields: name*, phone, email, address*, skill*, state*".to_string(),
        format!("Skills: {}", SKILLS.join(", ")),
        format!("States: {}", STATES.join(", ")),
        String::new(),
        "Register with: disaster_watch volunteer --name <NAME> --address <ADDRESS> --skill <SKILL> --state <STATE> [--phone ..] [--email ..]".to_string(),
    ];
    lines.join("\n")
}

pub fn render_receipt(name: &str, receipt: &RegistrationReceipt) -> String {
    let mut lines = vec![
        format!("✅ Thank you, {}! Your registration was received.", name),
        format!("   Submitted at {}", receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")),
    ];
    if !receipt.volunteer_notified {
        lines.push("   ⚠️ We could not send your confirmation email, but the team has your details.".to_string());
    }
    lines.join("\n")
}
