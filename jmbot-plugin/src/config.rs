//! Plugin configuration bound to the host registry.

use std::collections::BTreeMap;

use jmbot_core::{ConfigField, ConfigSchema, FieldDefault, JmBotError, Result};
use serde_yaml::Value;

/// Settings for the archive client. One knob: an HTTP proxy URL; empty string
/// means direct connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JmComicConfig {
    pub proxy_server: String,
}

impl ConfigSchema for JmComicConfig {
    fn schema() -> Vec<ConfigField> {
        vec![ConfigField {
            name: "proxy_server",
            default: FieldDefault::Value(Value::String(String::new())),
        }]
    }

    fn from_values(values: &BTreeMap<String, Value>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = values.get("proxy_server") {
            config.proxy_server = value
                .as_str()
                .ok_or_else(|| {
                    JmBotError::Config("proxy_server must be a string".to_string())
                })?
                .to_string();
        }
        Ok(config)
    }
}
