//! # jmbot-core
//!
//! Core types and traits for the bot plugin: [`ChatApi`], [`ConfigRegistry`], [`Plugin`],
//! [`CommandHandler`] and the command router, config schema binding, and tracing initialization.
//! Transport-agnostic; used by jmbot-plugin and jmbot-cli.

pub mod api;
pub mod error;
pub mod logger;
pub mod plugin;
pub mod registry;
pub mod router;
pub mod types;

pub use api::ChatApi;
pub use error::{JmBotError, Result};
pub use logger::init_tracing;
pub use plugin::Plugin;
pub use registry::{
    bind_config, ConfigField, ConfigRegistry, ConfigSchema, FieldDefault, MemoryRegistry,
    YamlRegistry,
};
pub use router::{CommandHandler, CommandRouter};
pub use types::{GroupMessageEvent, PluginMetadata};
