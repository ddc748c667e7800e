//! Time-derived account identifiers.

use crate::error::{Result, StoreError};

/// Issues millisecond-timestamp ids that never repeat within one store.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    last: Option<i64>,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that will only issue ids above `floor`.
    pub fn after(floor: Option<i64>) -> Self {
        Self { last: floor }
    }

    /// Next id based on the current UTC time.
    pub fn next_id(&mut self) -> Result<i64> {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    /// Next id for a given clock reading in milliseconds.
    pub fn next_at(&mut self, now_millis: i64) -> Result<i64> {
        let id = match self.last {
            Some(last) if now_millis <= last => last
                .checked_add(1)
                .ok_or_else(|| StoreError::Other("id space exhausted".to_string()))?,
            _ => now_millis,
        };
        self.last = Some(id);
        Ok(id)
    }
}
