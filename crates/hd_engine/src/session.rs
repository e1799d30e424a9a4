//! Per-visitor key-value storage of a computed archetype.
//!
//! The engine itself is stateless. Callers that persist a result across
//! requests implement [`SessionStore`] over whatever session mechanism they
//! own and use the helpers here to write and read the standard keys.

use std::collections::HashMap;

use tracing::debug;

use hd_base::HdType;

use crate::chart_types::QuickResult;

/// Key holding the canonical archetype name.
pub const KEY_TYPE: &str = "hd_type";
/// Key holding the strategy label.
pub const KEY_STRATEGY: &str = "hd_strategy";
/// Key set to [`CALCULATED_YES`] once a result is stored.
pub const KEY_CALCULATED: &str = "hd_calculated";
/// Key holding the Unix time the result was stored.
pub const KEY_TIMESTAMP: &str = "hd_calculated_timestamp";

pub const CALCULATED_YES: &str = "yes";

/// Minimal string key-value store.
pub trait SessionStore {
    fn set(&mut self, key: &str, value: String);
    fn get(&self, key: &str) -> Option<String>;
}

/// In-process [`SessionStore`] backed by a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemorySession {
    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Write a quick result under the standard keys.
pub fn store_quick_result<S: SessionStore + ?Sized>(
    store: &mut S,
    result: &QuickResult,
    unix_time: u64,
) {
    store.set(KEY_TYPE, result.hd_type.name().to_string());
    store.set(KEY_STRATEGY, result.strategy.to_string());
    store.set(KEY_CALCULATED, CALCULATED_YES.to_string());
    store.set(KEY_TIMESTAMP, unix_time.to_string());
    debug!(hd_type = %result.hd_type, unix_time, "stored result in session");
}

/// Whether a result has been stored.
pub fn is_calculated<S: SessionStore + ?Sized>(store: &S) -> bool {
    store.get(KEY_CALCULATED).is_some_and(|v| v == CALCULATED_YES)
}

/// The stored archetype, if present and readable.
pub fn stored_type<S: SessionStore + ?Sized>(store: &S) -> Option<HdType> {
    store.get(KEY_TYPE).and_then(|v| v.parse().ok())
}

/// Whether the stored archetype is `hd_type`.
pub fn is_type<S: SessionStore + ?Sized>(store: &S, hd_type: HdType) -> bool {
    stored_type(store) == Some(hd_type)
}
