//! Plugin lifecycle: bind config, construct the archive client once.

use std::sync::Arc;

use async_trait::async_trait;
use jm_client::{build_client, JmClient, JmOptions};
use jmbot_core::{
    bind_config, CommandHandler, ConfigRegistry, JmBotError, Plugin, PluginMetadata, Result,
};
use tracing::info;

use crate::config::JmComicConfig;
use crate::handler::JmCommand;

/// The comic-archive integration plugin.
///
/// Configuration and the client handle are written once in `on_load` and
/// read-only afterwards; concurrent command invocations share the handle.
pub struct JmComicPlugin {
    config: Option<JmComicConfig>,
    client: Option<Arc<dyn JmClient>>,
}

impl JmComicPlugin {
    pub const NAME: &'static str = "jmcomic-integrate";

    pub fn new() -> Self {
        Self {
            config: None,
            client: None,
        }
    }

    /// Uses a prebuilt client instead of constructing one in `on_load`.
    pub fn with_client(client: Arc<dyn JmClient>) -> Self {
        Self {
            config: None,
            client: Some(client),
        }
    }

    /// The bound configuration; None before `on_load`.
    pub fn config(&self) -> Option<&JmComicConfig> {
        self.config.as_ref()
    }

    /// The `jm` command bound to the loaded client. Fails before `on_load`.
    pub fn jm_command(&self) -> Result<Arc<dyn CommandHandler>> {
        let client = self.client.clone().ok_or_else(|| {
            JmBotError::Config("plugin not loaded; call on_load first".to_string())
        })?;
        Ok(Arc::new(JmCommand::new(client)))
    }
}

#[async_trait]
impl Plugin for JmComicPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: Self::NAME.to_string(),
            version: "0.1.0".to_string(),
            description: "集成jmcomic功能".to_string(),
            author: "default_user".to_string(),
            dependencies: Vec::new(),
        }
    }

    async fn on_load(&mut self, registry: &mut dyn ConfigRegistry) -> Result<()> {
        let config = bind_config::<JmComicConfig>(registry)?;

        let mut options = JmOptions::default();
        if !config.proxy_server.is_empty() {
            info!(proxy_server = %config.proxy_server, "检测到已配置代理");
            options.client.proxies.http = Some(config.proxy_server.clone());
        }
        if self.client.is_none() {
            let client = build_client(&options)
                .map_err(|e| JmBotError::Config(format!("build archive client: {e}")))?;
            self.client = Some(Arc::new(client));
        }
        self.config = Some(config);
        Ok(())
    }

    async fn on_close(&mut self) -> Result<()> {
        Ok(())
    }
}
