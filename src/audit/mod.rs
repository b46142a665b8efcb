use chrono::{Local, NaiveDateTime};
use serde_json::Value;

use crate::models::role::Role;
use crate::store::Store;

/// Oldest entries are dropped beyond this many.
pub const MAX_ENTRIES: usize = 500;

/// One recorded action. `details` always carries a `summary` string.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub at: NaiveDateTime,
    pub role: Role,
    pub action: String,
    pub target_type: String,
    pub target_id: String,
    pub details: Value,
}

impl AuditEntry {
    pub fn summary(&self) -> &str {
        self.details
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or(self.action.as_str())
    }

    pub fn time_label(&self) -> String {
        self.at.format("%d %b %Y, %H:%M").to_string()
    }
}

pub fn log(
    store: &Store,
    role: Role,
    action: &str,
    target_type: &str,
    target_id: &str,
    details: Value,
) {
    let entry = AuditEntry {
        at: Local::now().naive_local(),
        role,
        action: action.to_string(),
        target_type: target_type.to_string(),
        target_id: target_id.to_string(),
        details,
    };
    log::info!("audit: {} {} {} by {}", entry.action, entry.target_type, entry.target_id, role);
    let mut entries = store.audit_mut();
    entries.push(entry);
    if entries.len() > MAX_ENTRIES {
        let excess = entries.len() - MAX_ENTRIES;
        entries.drain(..excess);
    }
}

/// Most recent entries first.
pub fn find_recent(store: &Store, limit: usize) -> Vec<AuditEntry> {
    store.audit().iter().rev().take(limit).cloned().collect()
}
