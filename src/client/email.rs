// Email delivery for volunteer registrations
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use crate::config::{EmailConfig, EmailTemplate};
use crate::{v_debug, v_info};

pub type EmailError = Box<dyn std::error::Error + Send + Sync>;

/// One templated send. Returns the service's response text on success.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        template: &EmailTemplate,
        params: &BTreeMap<String, String>,
    ) -> Result<String, EmailError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}

/// Client for an EmailJS-compatible REST endpoint.
#[derive(Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsClient {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(
        &self,
        template: &EmailTemplate,
        params: &BTreeMap<String, String>,
    ) -> Result<String, EmailError> {
        let body = SendRequest {
            service_id: &template.service_id,
            template_id: &template.template_id,
            user_id: &template.public_key,
            template_params: params,
        };

        v_debug!("📧 POST {} (template {})", self.endpoint, template.template_id);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            return Err(format!("Email send failed with status {}: {}", status, error_body).into());
        }

        Ok(response.text().await?)
    }
}

/// Used when email delivery is disabled: the send is only logged.
#[derive(Debug, Default, Clone)]
pub struct LogOnlySender;

#[async_trait]
impl EmailSender for LogOnlySender {
    async fn send(
        &self,
        template: &EmailTemplate,
        params: &BTreeMap<String, String>,
    ) -> Result<String, EmailError> {
        let recipient = params.get("to_email").map(String::as_str).unwrap_or("operations team");
        v_info!(
            "📭 Email delivery disabled - would send template '{}' to {}",
            template.template_id, recipient
        );
        Ok("logged".to_string())
    }
}

/// Picks the real client or the logging stand-in from configuration.
pub fn sender_from_config(config: &EmailConfig) -> Result<Box<dyn EmailSender>, EmailError> {
    if config.enabled {
        Ok(Box::new(EmailJsClient::new(config)?))
    } else {
        Ok(Box::new(LogOnlySender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_emailjs_field_names() {
        let template = EmailTemplate {
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "pk".to_string(),
        };
        let mut params = BTreeMap::new();
        params.insert("name".to_string(), "Asha".to_string());

        let body = SendRequest {
            service_id: &template.service_id,
            template_id: &template.template_id,
            user_id: &template.public_key,
            template_params: &params,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["user_id"], "pk");
        assert_eq!(json["template_params"]["name"], "Asha");
    }

    #[tokio::test]
    async fn test_log_only_sender_succeeds() {
        let sender = LogOnlySender;
        let result = sender.send(&EmailTemplate::default(), &BTreeMap::new()).await;
        assert_eq!(result.unwrap(), "logged");
    }
}
