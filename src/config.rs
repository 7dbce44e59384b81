use serde::{Deserialize, Serialize};
use crate::{v_info};
use crate::verbosity::MAX_VERBOSITY;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/disaster_watch.toml";
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterWatchConfig {
    pub display: DisplayConfig,
    pub store: StoreConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Console verbosity (0 = views only, 1 = store activity, 2 = full)
    pub verbosity: u8,
    /// Group large counts with commas (2,250) in rendered views
    pub thousands_separator: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Start each session with Chennai, Patna and Bhuj
    pub seed_default_cities: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// When false, volunteer submissions are only logged
    pub enabled: bool,
    /// EmailJS-compatible send endpoint
    pub endpoint: String,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
    /// Confirmation sent to the volunteer
    pub volunteer: EmailTemplate,
    /// Notification sent to the operations team
    pub team: EmailTemplate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for DisasterWatchConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                verbosity: 0,
                thousands_separator: true,
            },
            store: StoreConfig {
                seed_default_cities: true,
            },
            email: EmailConfig {
                enabled: false,
                endpoint: EMAILJS_ENDPOINT.to_string(),
                request_timeout_seconds: 10,
                volunteer: EmailTemplate::default(),
                team: EmailTemplate::default(),
            },
        }
    }
}

impl DisasterWatchConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: DisasterWatchConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            v_info!("📋 Creating default configuration at {}", config_path);
            let config = DisasterWatchConfig::default();
            config.save(config_path)?;
            v_info!("💡 Edit {} to enable volunteer email delivery", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.display.verbosity > MAX_VERBOSITY {
            return Err(format!("verbosity must be between 0 and {}", MAX_VERBOSITY));
        }

        if self.email.request_timeout_seconds == 0 {
            return Err("request_timeout_seconds must be greater than 0".to_string());
        }

        // Template ids only matter once delivery is switched on
        if self.email.enabled {
            if !(self.email.endpoint.starts_with("http://") || self.email.endpoint.starts_with("https://")) {
                return Err("email endpoint must be an http(s) URL".to_string());
            }
            for (name, template) in [("volunteer", &self.email.volunteer), ("team", &self.email.team)] {
                if template.service_id.trim().is_empty()
                    || template.template_id.trim().is_empty()
                    || template.public_key.trim().is_empty()
                {
                    return Err(format!(
                        "email.{} needs service_id, template_id and public_key when email is enabled",
                        name
                    ));
                }
            }
        }

        v_info!("✅ Configuration validation passed");
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        v_info!("📋 Configuration Summary:");
        v_info!("   📢 Verbosity: {}", self.display.verbosity);
        v_info!("   🏙️  Seed default cities: {}", self.store.seed_default_cities);
        if self.email.enabled {
            v_info!("   📧 Email delivery: {} ({}s timeout)", self.email.endpoint, self.email.request_timeout_seconds);
        } else {
            v_info!("   📧 Email delivery: disabled (submissions are logged only)");
        }
    }
}
