//! Line commands typed on stdin, and how tab snapshots are printed.

use std::fmt::Write as _;

use crate::host::TabSnapshot;

pub const HELP: &str = "\
commands:
  join <tab> <nickname>   join the session from a tab
  type <tab> <text...>    replace a tab's text (\\n for newlines), caret at end
  caret <tab> <offset>    move a tab's caret
  close <tab>             close a tab
  show [tab]              print one or all tabs
  help                    this text
  quit                    close every tab and exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Join { tab: usize, nickname: String },
    Type { tab: usize, text: String },
    Caret { tab: usize, offset: usize },
    Close { tab: usize },
    Show { tab: Option<usize> },
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("not a number: {0}")]
    NotANumber(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim_start();

    let command = match word {
        "join" => {
            let (tab, nickname) = split_tab(rest, "join <tab> <nickname>")?;
            if nickname.trim().is_empty() {
                return Err(ParseError::Usage("join <tab> <nickname>"));
            }
            Command::Join {
                tab,
                nickname: nickname.to_string(),
            }
        }
        "type" => {
            let (tab, text) = split_tab(rest, "type <tab> <text...>")?;
            Command::Type {
                tab,
                text: text.replace("\\n", "\n"),
            }
        }
        "caret" => {
            let (tab, offset) = split_tab(rest, "caret <tab> <offset>")?;
            Command::Caret {
                tab,
                offset: number(offset.trim())?,
            }
        }
        "close" => Command::Close {
            tab: number(rest.trim()).map_err(|_| ParseError::Usage("close <tab>"))?,
        },
        "show" if rest.is_empty() => Command::Show { tab: None },
        "show" => Command::Show {
            tab: Some(number(rest.trim())?),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn split_tab<'a>(rest: &'a str, usage: &'static str) -> Result<(usize, &'a str), ParseError> {
    let (tab, tail) = rest.split_once(' ').unwrap_or((rest, ""));
    if tab.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok((number(tab)?, tail))
}

fn number(s: &str) -> Result<usize, ParseError> {
    s.parse().map_err(|_| ParseError::NotANumber(s.to_string()))
}

/// Multi-line human-readable view of one tab.
pub fn format_snapshot(snapshot: &TabSnapshot) -> String {
    let mut out = String::new();
    let who = snapshot.nickname.as_deref().unwrap_or("(not joined)");
    let _ = writeln!(out, "tab {} [{}] {}", snapshot.index, snapshot.tab, who);
    let _ = writeln!(out, "  roster: {}", snapshot.roster.join(", "));
    if let Some(notice) = &snapshot.notice {
        let _ = writeln!(out, "  notice: {notice}");
    }
    let _ = writeln!(out, "  caret:  {}", snapshot.caret);
    let _ = writeln!(out, "  text:");
    for line in snapshot.content.split('\n') {
        let _ = writeln!(out, "    | {line}");
    }
    for label in &snapshot.labels {
        let _ = writeln!(
            out,
            "  cursor {:<12} row {} col {} at ({:.1}, {:.1})",
            label.nickname, label.row, label.column, label.left, label.top
        );
    }
    out
}
