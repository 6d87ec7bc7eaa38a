//! Per-submission-key serialization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Serializes submissions per `(client_id, form_id)` within this process.
///
/// The store's upsert is a non-atomic read-then-write; without this, two
/// concurrent submissions for the same key can both observe "absent" and
/// both append a status row. Submissions from other processes remain
/// unserialized (the store has no conditional writes over ranges), which
/// is why every status reader is first-match-wins.
#[derive(Clone, Default)]
pub struct SubmissionLocks {
    // One entry per key ever submitted through this process; never
    // reaped, which is fine at clinical-practice scale.
    inner: Arc<Mutex<HashMap<(String, String), Arc<AsyncMutex<()>>>>>,
}

impl SubmissionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, client_id: &str, form_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut inner = self.inner.lock().unwrap();
            inner
                .entry((client_id.to_string(), form_id.to_string()))
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
