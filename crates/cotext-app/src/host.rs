//! Runs each tab as its own task.
//!
//! A tab owns a [`Synchronizer`] over a [`MemoryFrontend`] and reacts to two
//! sources: commands from the console and frames from the other tabs. Both
//! are handled one at a time, so a tab's state is never touched
//! concurrently.

use cotext_common::TabId;
use cotext_config::LayoutConfig;
use cotext_sync::{
    locate, BusInbox, BusPort, EditorSurface, LabelLayout, LocalBus, MemoryFrontend,
    Synchronizer,
};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const COMMAND_QUEUE: usize = 64;

/// What the console can ask a tab to do.
#[derive(Debug)]
pub enum TabCommand {
    Join(String),
    Type(String),
    Caret(usize),
    Snapshot(oneshot::Sender<TabSnapshot>),
    Close,
}

/// A remote cursor as currently drawn in a tab.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSnapshot {
    pub nickname: String,
    pub row: usize,
    pub column: usize,
    pub left: f64,
    pub top: f64,
}

/// Everything a tab shows, copied out for printing.
#[derive(Debug, Clone)]
pub struct TabSnapshot {
    pub index: usize,
    pub tab: TabId,
    pub nickname: Option<String>,
    pub roster: Vec<String>,
    pub notice: Option<String>,
    pub content: String,
    pub caret: usize,
    pub labels: Vec<LabelSnapshot>,
}

type TabSync = Synchronizer<BusPort, MemoryFrontend>;

/// The console's handle on a running tab.
pub struct TabHandle {
    pub index: usize,
    tx: mpsc::Sender<TabCommand>,
    task: JoinHandle<()>,
}

impl TabHandle {
    /// Queue a command. Returns `false` if the tab has already closed.
    pub async fn send(&self, command: TabCommand) -> bool {
        self.tx.send(command).await.is_ok()
    }

    pub async fn snapshot(&self) -> Option<TabSnapshot> {
        let (tx, rx) = oneshot::channel();
        if !self.send(TabCommand::Snapshot(tx)).await {
            return None;
        }
        rx.await.ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Ask the tab to leave and wait for it to finish.
    pub async fn close(self) {
        let _ = self.tx.send(TabCommand::Close).await;
        if let Err(e) = self.task.await {
            warn!(tab = self.index, error = %e, "Tab task ended abnormally");
        }
    }
}

/// Open a new tab on `bus`.
pub fn spawn_tab(index: usize, bus: &LocalBus, layout: &LayoutConfig) -> TabHandle {
    let (port, inbox) = bus.connect();
    let sync = Synchronizer::new(
        port.tab(),
        port,
        MemoryFrontend::from_layout(layout),
        LabelLayout::from(layout),
    );
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE);
    let task = tokio::spawn(run_tab(index, sync, inbox, rx));
    TabHandle { index, tx, task }
}

async fn run_tab(
    index: usize,
    mut sync: TabSync,
    mut inbox: BusInbox,
    mut rx: mpsc::Receiver<TabCommand>,
) {
    info!(tab = index, id = %sync.tab(), "Tab opened");
    if let Err(e) = sync.init() {
        warn!(tab = index, error = %e, "Initial sync request failed");
    }

    loop {
        tokio::select! {
            command = rx.recv() => match command {
                Some(TabCommand::Close) | None => break,
                Some(command) => apply_command(index, &mut sync, command),
            },
            message = inbox.recv() => match message {
                Some(message) => sync.handle(message),
                None => {
                    debug!(tab = index, "Bus closed");
                    break;
                }
            },
        }
    }

    sync.teardown();
    info!(tab = index, "Tab closed");
}

fn apply_command(index: usize, sync: &mut TabSync, command: TabCommand) {
    match command {
        TabCommand::Join(nickname) => {
            if let Err(e) = sync.join(&nickname) {
                warn!(tab = index, error = %e, "Join rejected");
            }
        }
        TabCommand::Type(text) => {
            sync.frontend_mut().type_text(&text);
            sync.on_input();
        }
        TabCommand::Caret(offset) => {
            sync.frontend_mut().set_caret(offset);
            sync.on_caret_moved();
        }
        TabCommand::Snapshot(reply) => {
            let _ = reply.send(snapshot(index, sync));
        }
        TabCommand::Close => {}
    }
}

fn snapshot(index: usize, sync: &TabSync) -> TabSnapshot {
    let frontend = sync.frontend();
    let content = sync.state().content().to_string();
    let labels = frontend
        .labels()
        .iter()
        .map(|(id, label)| {
            let offset = sync
                .state()
                .find(id)
                .map(|p| p.cursor_position)
                .unwrap_or_default();
            let cell = locate(&content, offset);
            LabelSnapshot {
                nickname: label.nickname.clone(),
                row: cell.row,
                column: cell.column,
                left: label.position.left,
                top: label.position.top,
            }
        })
        .collect();

    TabSnapshot {
        index,
        tab: sync.tab(),
        nickname: sync.local().map(|l| l.nickname.clone()),
        roster: frontend.roster().to_vec(),
        notice: frontend.notice().map(str::to_string),
        content,
        caret: frontend.caret(),
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Poll `tab` until `ready` holds, failing after a few seconds.
    async fn wait_until(tab: &TabHandle, ready: impl Fn(&TabSnapshot) -> bool) -> TabSnapshot {
        let poll = async {
            loop {
                if let Some(snapshot) = tab.snapshot().await {
                    if ready(&snapshot) {
                        return snapshot;
                    }
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };
        tokio::time::timeout(Duration::from_secs(5), poll)
            .await
            .expect("tab never reached the expected state")
    }

    fn lists(snapshot: &TabSnapshot, nickname: &str) -> bool {
        snapshot.roster.iter().any(|n| n == nickname)
    }

    #[tokio::test]
    async fn two_tabs_share_roster_and_text() {
        let bus = LocalBus::new("test", 64);
        let layout = LayoutConfig::default();
        let a = spawn_tab(0, &bus, &layout);
        let b = spawn_tab(1, &bus, &layout);

        assert!(a.send(TabCommand::Join("Alice".into())).await);
        wait_until(&b, |s| lists(s, "Alice")).await;
        // Ids are clock milliseconds; make sure Bob's differs from Alice's.
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(b.send(TabCommand::Join("Bob".into())).await);
        wait_until(&a, |s| lists(s, "Bob")).await;
        assert!(a.send(TabCommand::Type("hi\nthere".into())).await);

        let seen_by_b = wait_until(&b, |s| {
            s.content == "hi\nthere" && s.labels.iter().any(|l| l.row == 1)
        })
        .await;
        assert_eq!(seen_by_b.nickname.as_deref(), Some("Bob"));
        assert!(lists(&seen_by_b, "Alice"));
        assert!(lists(&seen_by_b, "Bob"));
        let alice = seen_by_b
            .labels
            .iter()
            .find(|l| l.nickname == "Alice")
            .unwrap();
        assert_eq!((alice.row, alice.column), (1, 5));

        a.close().await;
        let after = wait_until(&b, |s| !lists(s, "Alice")).await;
        assert_eq!(after.roster, vec!["Bob".to_string()]);
        assert_eq!(after.notice.as_deref(), Some("Alice left"));
        assert!(after.labels.is_empty());

        b.close().await;
    }

    #[tokio::test]
    async fn closed_tab_stops_answering() {
        let bus = LocalBus::new("test", 8);
        let tab = spawn_tab(0, &bus, &LayoutConfig::default());
        let tx = tab.tx.clone();
        tab.close().await;
        assert!(tx.is_closed());
    }
}
