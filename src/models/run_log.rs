use crate::models::Vibe;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-track classification decision, recorded in input order.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: String,
    pub name: String,
    pub vibe: Vibe,
}

/// Immutable summary of one run, serialized to `logs/log_<timestamp>.json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunLog {
    pub tracks_processed: usize,
    pub playlists: BTreeMap<Vibe, String>,
    pub entries: Vec<LogEntry>,
}
