//! Plugin lifecycle contract.

use async_trait::async_trait;

use crate::error::Result;
use crate::registry::ConfigRegistry;
use crate::types::PluginMetadata;

/// A host-loaded plugin.
///
/// `on_load` runs once at startup, before any command is dispatched, and is
/// where configuration is bound and long-lived clients are constructed.
/// `on_close` runs at teardown.
#[async_trait]
pub trait Plugin: Send + Sync {
    fn metadata(&self) -> PluginMetadata;

    async fn on_load(&mut self, registry: &mut dyn ConfigRegistry) -> Result<()>;

    /// Teardown. Default: nothing to release.
    async fn on_close(&mut self) -> Result<()> {
        Ok(())
    }
}
