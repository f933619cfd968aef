//! cotext: a handful of editor tabs sharing one text buffer.
//!
//! Every tab runs its own synchronizer on a shared in-process bus. Tabs are
//! driven from stdin with line commands (`help` lists them).

mod cli;
mod console;
mod host;

use cotext_sync::LocalBus;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::console::Command;
use crate::host::{TabCommand, TabHandle};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config first so its log level can seed the filter.
    let loaded = cotext_config::load_config(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let fallback = format!("cotext={}", config.logging.level.directive());
    let log_directive = args.log_level.clone().unwrap_or(fallback);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("cotext v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let bus = LocalBus::new(config.channel.name.clone(), config.channel.capacity as usize);
    tracing::info!(channel = bus.name(), tabs = args.tabs, "Opening tabs");

    let tabs: Vec<TabHandle> = (0..usize::from(args.tabs))
        .map(|index| host::spawn_tab(index, &bus, &config.layout))
        .collect();

    run_console(&bus, &tabs).await;

    for tab in tabs {
        tab.close().await;
    }
    tracing::info!("Shutdown complete");
}

async fn run_console(bus: &LocalBus, tabs: &[TabHandle]) {
    println!("{}", console::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                return;
            }
        };
        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                return;
            }
        };

        let command = match console::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Quit => return,
            Command::Help => println!("{}", console::HELP),
            Command::Show { tab: None } => {
                for tab in tabs {
                    show(tab).await;
                }
            }
            Command::Show { tab: Some(index) } => {
                if let Some(tab) = pick(tabs, index) {
                    show(tab).await;
                }
            }
            Command::Join { tab, nickname } => {
                dispatch(tabs, tab, TabCommand::Join(nickname)).await;
            }
            Command::Type { tab, text } => {
                dispatch(tabs, tab, TabCommand::Type(text)).await;
            }
            Command::Caret { tab, offset } => {
                dispatch(tabs, tab, TabCommand::Caret(offset)).await;
            }
            Command::Close { tab } => {
                dispatch(tabs, tab, TabCommand::Close).await;
            }
        }
        tracing::debug!(listeners = bus.listeners(), "Command handled");
    }
}

fn pick(tabs: &[TabHandle], index: usize) -> Option<&TabHandle> {
    match tabs.get(index) {
        Some(tab) if !tab.is_closed() => Some(tab),
        Some(_) => {
            println!("tab {index} is closed");
            None
        }
        None => {
            println!("no tab {index} (have {})", tabs.len());
            None
        }
    }
}

async fn dispatch(tabs: &[TabHandle], index: usize, command: TabCommand) {
    if let Some(tab) = pick(tabs, index) {
        if !tab.send(command).await {
            println!("tab {index} is closed");
        }
    }
}

async fn show(tab: &TabHandle) {
    match tab.snapshot().await {
        Some(snapshot) => print!("{}", console::format_snapshot(&snapshot)),
        None => println!("tab {} is closed", tab.index),
    }
}
