// Volunteer registration: validate, then notify volunteer and team
use crate::client::EmailSender;
use crate::config::EmailTemplate;
use crate::models::{FieldErrors, VolunteerForm};
use crate::{v_error, v_info};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug)]
pub enum RegistrationError {
    Invalid(FieldErrors),
    /// The operations team was not notified; the volunteer should retry.
    TeamNotificationFailed(String),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Invalid(errors) => {
                let fields: Vec<String> = errors.iter().map(|(field, msg)| format!("{}: {}", field, msg)).collect();
                write!(f, "Invalid registration ({})", fields.join(", "))
            }
            RegistrationError::TeamNotificationFailed(_) => write!(f, "Submission failed. Please try again."),
        }
    }
}

impl std::error::Error for RegistrationError {}

#[derive(Debug, Clone)]
pub struct RegistrationReceipt {
    pub volunteer_notified: bool,
    pub submitted_at: DateTime<Utc>,
}

pub struct VolunteerRegistrar<'a> {
    sender: &'a dyn EmailSender,
    volunteer_template: &'a EmailTemplate,
    team_template: &'a EmailTemplate,
}

impl<'a> VolunteerRegistrar<'a> {
    pub fn new(
        sender: &'a dyn EmailSender,
        volunteer_template: &'a EmailTemplate,
        team_template: &'a EmailTemplate,
    ) -> Self {
        Self { sender, volunteer_template, team_template }
    }

    /// Sends the volunteer confirmation and the team notification
    /// independently. Only the team send decides the outcome.
    pub async fn submit(&self, form: &VolunteerForm) -> Result<RegistrationReceipt, RegistrationError> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(RegistrationError::Invalid(errors));
        }

        let team_params = form.template_params();
        let mut volunteer_params = team_params.clone();
        volunteer_params.insert("to_email".to_string(), form.email.clone());

        let (volunteer_result, team_result) = tokio::join!(
            self.sender.send(self.volunteer_template, &volunteer_params),
            self.sender.send(self.team_template, &team_params),
        );

        let volunteer_notified = match volunteer_result {
            Ok(text) => {
                v_info!("📧 Volunteer email sent: {}", text);
                true
            }
            Err(e) => {
                v_error!("⚠️ Failed to send volunteer email: {}", e);
                false
            }
        };

        match team_result {
            Ok(text) => {
                v_info!("📧 Team email sent: {}", text);
                Ok(RegistrationReceipt { volunteer_notified, submitted_at: Utc::now() })
            }
            Err(e) => {
                v_error!("❌ Failed to send team email: {}", e);
                Err(RegistrationError::TeamNotificationFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::EmailError;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct FakeSender {
        fail_template: Option<&'static str>,
        sent: Mutex<Vec<(String, BTreeMap<String, String>)>>,
    }

    impl FakeSender {
        fn new(fail_template: Option<&'static str>) -> Self {
            Self { fail_template, sent: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl EmailSender for FakeSender {
        async fn send(&self, template: &EmailTemplate, params: &BTreeMap<String, String>) -> Result<String, EmailError> {
            self.sent.lock().unwrap().push((template.template_id.clone(), params.clone()));
            if self.fail_template == Some(template.template_id.as_str()) {
                return Err("service unavailable".into());
            }
            Ok("OK".to_string())
        }
    }

    fn template(id: &str) -> EmailTemplate {
        EmailTemplate { service_id: "svc".to_string(), template_id: id.to_string(), public_key: "pk".to_string() }
    }

    fn form() -> VolunteerForm {
        VolunteerForm {
            name: "Ravi".to_string(),
            phone: "9000000000".to_string(),
            email: "ravi@example.org".to_string(),
            address: "Gandhi Road".to_string(),
            skill: "Medical".to_string(),
            state: "Bihar".to_string(),
        }
    }

    #[tokio::test]
    async fn test_both_sends_happen_and_only_volunteer_gets_to_email() {
        let sender = FakeSender::new(None);
        let (volunteer, team) = (template("volunteer"), template("team"));
        let receipt = VolunteerRegistrar::new(&sender, &volunteer, &team).submit(&form()).await.unwrap();
        assert!(receipt.volunteer_notified);

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        let volunteer_params = &sent.iter().find(|(id, _)| id == "volunteer").unwrap().1;
        let team_params = &sent.iter().find(|(id, _)| id == "team").unwrap().1;
        assert_eq!(volunteer_params.get("to_email").map(String::as_str), Some("ravi@example.org"));
        assert!(!team_params.contains_key("to_email"));
        assert_eq!(team_params.get("skill").map(String::as_str), Some("Medical"));
    }

    #[tokio::test]
    async fn test_volunteer_send_failure_is_not_fatal() {
        let sender = FakeSender::new(Some("volunteer"));
        let (volunteer, team) = (template("volunteer"), template("team"));
        let receipt = VolunteerRegistrar::new(&sender, &volunteer, &team).submit(&form()).await.unwrap();
        assert!(!receipt.volunteer_notified);
    }

    #[tokio::test]
    async fn test_team_send_failure_surfaces() {
        let sender = FakeSender::new(Some("team"));
        let (volunteer, team) = (template("volunteer"), template("team"));
        let err = VolunteerRegistrar::new(&sender, &volunteer, &team).submit(&form()).await.unwrap_err();
        assert!(matches!(err, RegistrationError::TeamNotificationFailed(_)));
        assert_eq!(err.to_string(), "Submission failed. Please try again.");
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let sender = FakeSender::new(None);
        let (volunteer, team) = (template("volunteer"), template("team"));
        let bad = VolunteerForm { address: String::new(), ..form() };
        let err = VolunteerRegistrar::new(&sender, &volunteer, &team).submit(&bad).await.unwrap_err();
        assert!(matches!(err, RegistrationError::Invalid(ref errors) if errors.contains_key("address")));
        assert!(sender.sent.lock().unwrap().is_empty());
    }
}
