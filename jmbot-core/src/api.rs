//! Chat reply surface.
//!
//! [`ChatApi`] is transport-agnostic; the host supplies the real transport,
//! tests supply recording fakes.

use crate::error::Result;
use crate::types::GroupMessageEvent;
use async_trait::async_trait;

/// Outbound chat operations the plugin uses. Both are fire-and-forget from the
/// caller's perspective; delivery acknowledgment is the transport's concern.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Replies to the triggering event with text.
    async fn reply(&self, event: &GroupMessageEvent, text: &str) -> Result<()>;
    /// Sends a text message to the given group.
    async fn send_group_text(&self, group_id: i64, text: &str) -> Result<()>;
}
