//! The `jm` command: resolve an album id and post its title and tags.

use std::sync::Arc;

use async_trait::async_trait;
use jm_client::JmClient;
use jmbot_core::{ChatApi, CommandHandler, GroupMessageEvent, JmBotError, Result};
use tracing::{info, warn};

/// Handler for `jm <id>`.
///
/// Three outcomes: no usable id → ask the user to retry; search result without
/// an album → the id is unresolvable; otherwise post the title to the group
/// and reply with title and tags. Search failures propagate to the dispatch
/// error boundary untouched.
pub struct JmCommand {
    client: Arc<dyn JmClient>,
}

impl JmCommand {
    pub fn new(client: Arc<dyn JmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommandHandler for JmCommand {
    fn trigger(&self) -> &str {
        "jm"
    }

    async fn handle(
        &self,
        api: &dyn ChatApi,
        event: &GroupMessageEvent,
        args: &[&str],
    ) -> Result<()> {
        let jm_id: Option<i64> = args.first().and_then(|raw| raw.parse().ok());
        let Some(jm_id) = jm_id else {
            api.reply(event, "未设定jmid,重试").await?;
            return Ok(());
        };

        info!(jm_id, user_id = event.user_id, "step: resolving album");
        let page = self
            .client
            .search(&jm_id.to_string())
            .await
            .map_err(|e| JmBotError::Search(e.to_string()))?;

        let Some(album) = page.album else {
            warn!(jm_id, "album not found");
            api.reply(event, &format!("无法解析的JM号{jm_id}")).await?;
            return Ok(());
        };

        api.send_group_text(event.group_id, &album.title).await?;
        api.reply(
            event,
            &format!("\nalbum.title={:?}\n{:?}", album.title, album.tags),
        )
        .await?;
        Ok(())
    }
}
