use std::fmt;
use std::time::Duration;

use actix_web::cookie::Key;

use crate::models::claim::StudyCenter;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub app_name: String,
    /// Raw SESSION_KEY; `None` when unset or too short.
    pub session_key: Option<String>,
    /// Stands in for a per-user profile lookup: every coordinator is bound to this center.
    pub coordinator_center: StudyCenter,
    pub seed_file: Option<String>,
    pub submit_delay: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "Invalid {key}='{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

const MIN_SESSION_KEY_LEN: usize = 64;

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: "127.0.0.1:8080".to_string(),
            app_name: "UEW Claims".to_string(),
            session_key: None,
            coordinator_center: StudyCenter::Accra,
            seed_file: None,
            submit_delay: Duration::ZERO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(addr) = lookup("BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }
        if let Some(name) = lookup("APP_NAME").filter(|v| !v.trim().is_empty()) {
            config.app_name = name.trim().to_string();
        }
        match lookup("SESSION_KEY") {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => config.session_key = Some(val),
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), ignoring it",
                    val.len()
                );
            }
            None => {}
        }
        if let Some(center) = lookup("COORDINATOR_STUDY_CENTER") {
            config.coordinator_center = center.parse().map_err(|reason| ConfigError::Invalid {
                key: "COORDINATOR_STUDY_CENTER",
                value: center.clone(),
                reason,
            })?;
        }
        config.seed_file = lookup("SEED_FILE").filter(|v| !v.trim().is_empty());
        if let Some(ms) = lookup("SUBMIT_DELAY_MS") {
            let millis = ms.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "SUBMIT_DELAY_MS",
                value: ms.clone(),
                reason: e.to_string(),
            })?;
            config.submit_delay = Duration::from_millis(millis);
        }
        Ok(config)
    }

    /// Cookie signing key. Without SESSION_KEY a random key is generated and
    /// sessions do not survive a restart.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            None => {
                log::warn!("No usable SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
