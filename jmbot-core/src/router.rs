//! Command routing: maps a literal trigger token to a handler.
//!
//! The host's dispatch loop hands every group message to [`CommandRouter::dispatch`];
//! the first handler whose trigger matches the leading token runs, the rest of the
//! tokens become its positional arguments.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::api::ChatApi;
use crate::error::Result;
use crate::types::GroupMessageEvent;

/// A command bound to a literal trigger token.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// The literal first token that selects this handler.
    fn trigger(&self) -> &str;
    /// Handles the command. `args` are the whitespace-separated tokens after the trigger.
    async fn handle(
        &self,
        api: &dyn ChatApi,
        event: &GroupMessageEvent,
        args: &[&str],
    ) -> Result<()>;
}

/// Registered command handlers, matched in registration order.
pub struct CommandRouter {
    handlers: Vec<Arc<dyn CommandHandler>>,
}

impl CommandRouter {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn register(mut self, handler: Arc<dyn CommandHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Dispatches one event. Returns whether a handler ran; non-command
    /// chatter is left untouched and returns false.
    pub async fn dispatch(&self, api: &dyn ChatApi, event: &GroupMessageEvent) -> Result<bool> {
        let mut tokens = event.text.split_whitespace();
        let Some(trigger) = tokens.next() else {
            return Ok(false);
        };
        let args: Vec<&str> = tokens.collect();

        for handler in &self.handlers {
            if handler.trigger() != trigger {
                continue;
            }
            info!(
                user_id = event.user_id,
                group_id = event.group_id,
                command = trigger,
                "step: command dispatched"
            );
            handler.handle(api, event, &args).await?;
            return Ok(true);
        }

        debug!(token = trigger, "no handler for leading token");
        Ok(false)
    }
}
