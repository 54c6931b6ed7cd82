use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::affordance::error::{AffordanceError, invalid_config};

const CONFIG_SCHEMA: &str = include_str!("../affordance.schema.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordanceConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Prefix applied to every resolved path, e.g. `/api`.
    #[serde(default)]
    pub context_path: String,
    #[serde(default = "default_enabled_true")]
    pub strict_templates: bool,
}

fn default_enabled_true() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            context_path: String::new(),
            strict_templates: default_enabled_true(),
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), AffordanceError> {
        if self.context_path.is_empty() {
            return Ok(());
        }
        if !self.context_path.starts_with('/') {
            return Err(invalid_config(format!(
                "resolver.context_path must start with '/': {}",
                self.context_path
            )));
        }
        if self.context_path.ends_with('/') {
            return Err(invalid_config(format!(
                "resolver.context_path must not end with '/': {}",
                self.context_path
            )));
        }
        Ok(())
    }
}

impl AffordanceConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::from_json5_str(&config_content)
            .with_context(|| format!("failed to load {}", config_path.display()))
    }

    pub fn from_json5_str(config_content: &str) -> Result<Self> {
        let config_value: Value =
            json5::from_str(config_content).context("failed to parse affordance config")?;

        let schema: Value = serde_json::from_str(CONFIG_SCHEMA)
            .context("failed to parse bundled affordance config schema")?;
        let compiled = JSONSchema::compile(&schema)
            .map_err(|err| anyhow!("bundled affordance config schema is invalid: {err}"))?;
        if let Err(violations) = compiled.validate(&config_value) {
            let details = violations
                .map(|violation| format!("{} at '{}'", violation, violation.instance_path))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(anyhow!("config validation failed: {details}"));
        }

        let config: AffordanceConfig = serde_json::from_value(config_value)
            .context("failed to deserialize affordance config")?;
        config.resolver.validate()?;

        Ok(config)
    }
}
