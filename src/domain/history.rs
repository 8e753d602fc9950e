//! Recent-quote list semantics, independent of where the list is stored.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::entities::{ContainerType, Incoterms, QuoteComparisonResult, QuoteRequest};
use crate::util::generate_id;

/// Most entries kept; older ones fall off the end.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteHistoryEntry {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub cbm: f64,
    pub incoterms: Incoterms,
    #[serde(default)]
    pub container_type: Option<ContainerType>,
    pub result: QuoteComparisonResult,
}

impl QuoteHistoryEntry {
    /// Snapshot of a finished quote, stamped with a fresh id and the current time.
    pub fn new(request: &QuoteRequest, result: QuoteComparisonResult) -> Self {
        Self {
            id: generate_id("quote"),
            timestamp: OffsetDateTime::now_utc(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            weight_kg: request.weight_kg,
            cbm: request.cbm,
            incoterms: request.incoterms.clone(),
            container_type: request.container_type,
            result,
        }
    }

    pub fn request(&self) -> QuoteRequest {
        QuoteRequest {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            weight_kg: self.weight_kg,
            cbm: self.cbm,
            incoterms: self.incoterms.clone(),
            container_type: self.container_type,
        }
    }
}

/// Puts `entry` first, dropping any older entry with the same id and
/// anything beyond [`HISTORY_LIMIT`].
pub fn insert_entry(entries: &mut Vec<QuoteHistoryEntry>, entry: QuoteHistoryEntry) {
    entries.retain(|existing| existing.id != entry.id);
    entries.insert(0, entry);
    entries.truncate(HISTORY_LIMIT);
}

/// Returns whether an entry was removed.
pub fn remove_entry(entries: &mut Vec<QuoteHistoryEntry>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|entry| entry.id != id);
    entries.len() != before
}

/// On-disk envelope, tagged with the version that wrote it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedHistory {
    pub version: String,
    #[serde(default)]
    pub entries: Vec<QuoteHistoryEntry>,
}
