//! jmbot CLI: run one `jm` lookup against the configured archive, the same
//! path a chat host takes: load the plugin, bind config from the YAML
//! registry, dispatch the command, print the replies.

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use jmbot_core::{
    init_tracing, ChatApi, CommandRouter, GroupMessageEvent, Plugin, YamlRegistry,
};
use jmbot_plugin::JmComicPlugin;
use tracing::warn;

#[derive(Parser)]
#[command(name = "jmbot")]
#[command(about = "Comic-archive lookup bot plugin, driven from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an album id the way the `jm` chat command does.
    Lookup {
        /// Album id. Omit it to exercise the missing-id reply.
        id: Option<i64>,
        /// Plugin config registry (YAML); created on first run.
        #[arg(short, long, default_value = "data/jmbot.yaml")]
        config: String,
        /// Log file path.
        #[arg(long, default_value = "logs/jmbot.log")]
        log_file: String,
    },
}

/// ChatApi over stdout: replies and group sends become printed lines.
struct ConsoleApi;

#[async_trait]
impl ChatApi for ConsoleApi {
    async fn reply(&self, _event: &GroupMessageEvent, text: &str) -> jmbot_core::Result<()> {
        println!("[reply] {text}");
        Ok(())
    }

    async fn send_group_text(&self, group_id: i64, text: &str) -> jmbot_core::Result<()> {
        println!("[group {group_id}] {text}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            id,
            config,
            log_file,
        } => lookup(id, config, log_file).await,
    }
}

async fn lookup(id: Option<i64>, config_path: String, log_file: String) -> Result<()> {
    init_tracing(&log_file).context("Initialize tracing")?;

    let mut registry =
        YamlRegistry::load(&config_path).context("Load config registry (YAML mapping)")?;

    let mut plugin = JmComicPlugin::new();
    plugin
        .on_load(&mut registry)
        .await
        .context("Plugin load (config binding and client construction)")?;

    let router = CommandRouter::new().register(plugin.jm_command()?);

    let text = match id {
        Some(id) => format!("jm {id}"),
        None => "jm".to_string(),
    };
    let event = GroupMessageEvent::new(0, 0, text);

    let handled = router.dispatch(&ConsoleApi, &event).await?;
    if !handled {
        warn!("no handler matched the synthesized command");
    }

    plugin.on_close().await?;
    Ok(())
}
