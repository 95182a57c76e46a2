use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::feedback::TrainerState;
use crate::session::round::RoundRecord;

const SCHEMA_VERSION: u32 = 1;

/// Persisted tracker state. The `repeaters`/`producers` maps serialize
/// losslessly, insertion order included, so a reloaded session enumerates
/// candidates exactly as the saved one did.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainerData {
    pub schema_version: u32,
    pub state: TrainerState,
    pub updated_at: DateTime<Utc>,
}

impl Default for TrainerData {
    fn default() -> Self {
        Self::snapshot(&TrainerState::default())
    }
}

impl TrainerData {
    pub fn snapshot(state: &TrainerState) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            state: state.clone(),
            updated_at: Utc::now(),
        }
    }

    /// Check if loaded data has a stale schema version and needs reset.
    pub fn needs_reset(&self) -> bool {
        self.schema_version != SCHEMA_VERSION
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryData {
    pub schema_version: u32,
    pub rounds: Vec<RoundRecord>,
}

impl Default for HistoryData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            rounds: Vec::new(),
        }
    }
}
