use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::skill::MeasurementBaseline;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub agent: AgentConfig,
    pub server: ServerConfig,
    pub audit: AuditConfig,
}

#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    /// Skill endpoints bind consecutive ports starting here.
    pub first_port: u16,
}

#[derive(Debug, Deserialize)]
pub struct AuditConfig {
    pub page_weight_kb: f64,
    pub lcp_seconds: f64,
    pub inp_millis: f64,
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("GREENSTACK_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = std::env::var("GREENSTACK_FIRST_PORT")
            && let Ok(port) = v.parse()
        {
            self.server.first_port = port;
        }
    }

    #[must_use]
    pub fn baseline(&self) -> MeasurementBaseline {
        MeasurementBaseline {
            page_weight_kb: self.audit.page_weight_kb,
            lcp_seconds: self.audit.lcp_seconds,
            inp_millis: self.audit.inp_millis,
        }
    }

    fn default() -> Self {
        Self {
            agent: AgentConfig {
                name: "Greenstack".into(),
                version: "1.0.0".into(),
            },
            server: ServerConfig {
                host: "0.0.0.0".into(),
                first_port: 9001,
            },
            audit: AuditConfig {
                page_weight_kb: 750.0,
                lcp_seconds: 2.8,
                inp_millis: 150.0,
            },
        }
    }
}
