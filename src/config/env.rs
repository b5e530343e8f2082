use crate::config::ServiceConfig;
use crate::utils::error::{FortuneError, Result};

// 兩種拼法都接受 (DEDALUS_* 優先)
const API_KEY_VARS: &[&str] = &["DEDALUS_API_KEY", "DEDELUS_API_KEY"];
const BASE_URL_VARS: &[&str] = &[
    "DEDALUS_BASE_URL",
    "DEDALUS_API_URL",
    "DEDELUS_BASE_URL",
    "DEDELUS_API_URL",
];
const MODEL_VARS: &[&str] = &["DEDALUS_MODEL", "DEDELUS_MODEL"];
const HOST_VARS: &[&str] = &["HOST"];
const PORT_VARS: &[&str] = &["PORT"];

impl ServiceConfig {
    /// Overrides fields from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Overrides fields using `lookup`. Empty values count as unset.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names.iter().find_map(|name| {
                lookup(name)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            })
        };

        if let Some(api_key) = first(API_KEY_VARS) {
            self.remote.api_key = Some(api_key);
        }
        if let Some(base_url) = first(BASE_URL_VARS) {
            self.remote.base_url = base_url;
        }
        if let Some(model) = first(MODEL_VARS) {
            self.remote.model = model;
        }
        if let Some(host) = first(HOST_VARS) {
            self.server.host = host;
        }
        if let Some(port) = first(PORT_VARS) {
            self.server.port = port
                .parse()
                .map_err(|_| FortuneError::InvalidConfigValueError {
                    field: "PORT".to_string(),
                    value: port.clone(),
                    reason: "Port must be a number between 1 and 65535".to_string(),
                })?;
        }

        tracing::debug!("Configuration after environment overrides: {:?}", self);
        Ok(())
    }
}
