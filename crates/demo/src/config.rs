//! Demo configuration, read from environment variables.

use satchel_core::{DomainError, DomainResult};
use satchel_inventory::OrganizationStrategy;
use satchel_observability::LogFormat;

pub const OWNER_VAR: &str = "SATCHEL_OWNER";
pub const MAX_WEIGHT_VAR: &str = "SATCHEL_MAX_WEIGHT";
pub const WAREHOUSE_VAR: &str = "SATCHEL_WAREHOUSE";
pub const STRATEGY_VAR: &str = "SATCHEL_STRATEGY";
pub const LOG_FORMAT_VAR: &str = "SATCHEL_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub owner_name: String,
    pub max_weight: f64,
    pub warehouse_mode: bool,
    pub strategy: OrganizationStrategy,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            owner_name: "Aragorn".to_string(),
            max_weight: 100.0,
            warehouse_mode: false,
            strategy: OrganizationStrategy::NoSorting,
            log_format: LogFormat::Pretty,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Unset variables
    /// keep their defaults; malformed ones are validation errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(owner) = lookup(OWNER_VAR) {
            if owner.trim().is_empty() {
                return Err(DomainError::validation(format!("{OWNER_VAR} cannot be empty")));
            }
            config.owner_name = owner;
        }

        if let Some(raw) = lookup(MAX_WEIGHT_VAR) {
            let max_weight: f64 = raw.trim().parse().map_err(|e| {
                DomainError::validation(format!("{MAX_WEIGHT_VAR}: invalid number {raw:?}: {e}"))
            })?;
            if !(max_weight.is_finite() && max_weight > 0.0) {
                return Err(DomainError::validation(format!(
                    "{MAX_WEIGHT_VAR} must be positive, got {max_weight}"
                )));
            }
            config.max_weight = max_weight;
        }

        if let Some(raw) = lookup(WAREHOUSE_VAR) {
            config.warehouse_mode = parse_flag(WAREHOUSE_VAR, &raw)?;
        }

        if let Some(raw) = lookup(STRATEGY_VAR) {
            config.strategy = raw.parse()?;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = match raw.trim().to_ascii_lowercase().as_str() {
                "pretty" | "text" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                other => {
                    return Err(DomainError::validation(format!(
                        "{LOG_FORMAT_VAR}: unknown format {other:?}"
                    )));
                }
            };
        }

        Ok(config)
    }
}

fn parse_flag(var: &str, raw: &str) -> DomainResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(DomainError::validation(format!("{var}: not a boolean: {other:?}"))),
    }
}
