//! # jmbot-plugin
//!
//! Group-chat plugin integrating comic-archive lookup: binds its configuration
//! to the host registry at load, constructs the archive client once (honoring a
//! configured proxy), and answers the `jm <id>` command.

mod config;
mod format;
mod handler;
mod plugin;

pub use config::JmComicConfig;
pub use format::format_name;
pub use handler::JmCommand;
pub use plugin::JmComicPlugin;
