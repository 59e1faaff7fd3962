//! Config schema - Configuration for propal

use serde::{Deserialize, Serialize};

/// Main configuration for propal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Tenant whose data set is in use; devis numbering is scoped to it
    #[serde(default = "default_tenant")]
    pub tenant: String,

    /// Currency label for display
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tenant() -> String {
    "default".to_string()
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            tenant: "default".to_string(),
            currency: "EUR".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.tenant, "default");
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"tenant": "acme"}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.tenant, "acme");
        // Other fields should have defaults
        assert_eq!(parsed.schema_version, 1);
        assert_eq!(parsed.currency, "EUR");
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.tenant, config.tenant);
        assert_eq!(parsed.currency, config.currency);
    }
}
