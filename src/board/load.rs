use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use super::entry::{Board, Category, Entry, UNAFFILIATED};

/// Wire shape of one record in a board file. Everything except the text and
/// year is optional; the loader patches the gaps instead of rejecting rows.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<Value>,
    text: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    company: Option<String>,
    year: i32,
    #[serde(default)]
    engagement: u32,
}

pub fn load_board(path: &Path) -> Result<Board> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    let board = parse_board(&raw)
        .with_context(|| format!("failed to parse board file {}", path.display()))?;

    info!(
        "loaded board: {} entries across {} companies",
        board.entry_count(),
        board.lanes.len()
    );
    Ok(board)
}

/// Parses a JSON array of entries. An empty array is a valid, empty board.
pub fn parse_board(raw: &str) -> Result<Board> {
    let raw_entries: Vec<RawEntry> =
        serde_json::from_str(raw).context("board file is not a JSON array of entries")?;

    let entries = raw_entries
        .into_iter()
        .enumerate()
        .map(|(index, raw_entry)| normalize_entry(raw_entry, index))
        .collect();

    Ok(Board::new(entries))
}

/// One malformed record must never sink the rest of the board, so every
/// missing or unknown field falls back to a fixed bucket.
fn normalize_entry(raw: RawEntry, index: usize) -> Entry {
    let id = match raw.id {
        Some(Value::String(id)) if !id.is_empty() => id,
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("entry-{index}"),
    };

    let category = match raw.category.as_deref() {
        None | Some("") => Category::Other,
        Some(tag) => Category::parse(tag).unwrap_or_else(|| {
            warn!("entry {id}: unknown category tag {tag:?}, using \"other\"");
            Category::Other
        }),
    };

    let company = match raw.company {
        Some(company) if !company.trim().is_empty() => company,
        _ => {
            warn!("entry {id}: no company, using {UNAFFILIATED:?} lane");
            UNAFFILIATED.to_owned()
        }
    };

    let author = match raw.author {
        Some(author) if !author.trim().is_empty() => author,
        _ => "anonymous".to_owned(),
    };

    Entry {
        id,
        text: raw.text,
        category,
        author,
        company,
        year: raw.year,
        engagement: raw.engagement,
    }
}
