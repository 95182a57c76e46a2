use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::engine::candidates::TrackerMap;
use crate::engine::errors::TrainerError;

/// Separator between producer name and size in a pattern slot entry.
pub const SLOT_KEY_SEPARATOR: char = ':';

/// Ordered record of the choices that built a round: the repeat-count id
/// first, then one `producer:size` key per slot. This is the sole link
/// between a generated round and the feedback that updates the right
/// trackers, so it travels verbatim from scheduling to feedback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<String>);

impl Pattern {
    pub fn new(repeat_id: String) -> Self {
        Self(vec![repeat_id])
    }

    /// Rebuild a pattern from raw entries, e.g. out of persisted history.
    #[allow(dead_code)] // Used by integration tests
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self(entries)
    }

    pub fn push_slot(&mut self, slot_key: String) {
        self.0.push(slot_key);
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn repeat_id(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn slot_keys(&self) -> &[String] {
        self.0.get(1..).unwrap_or(&[])
    }
}

/// All per-item statistics for one learner session: repeat-count trackers and
/// per-producer size trackers. Owned by the scheduler; the surrounding loop
/// only ever reads it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainerState {
    pub repeaters: TrackerMap,
    pub producers: IndexMap<String, TrackerMap>,
}

impl TrainerState {
    /// Record one outcome for `id`, creating its tracker on first feedback.
    pub fn record_feedback(trackers: &mut TrackerMap, id: &str, success: bool, cost: u32) {
        trackers
            .entry(id.to_string())
            .or_default()
            .record(success, cost);
    }

    /// Route one round's outcome to the repeat tracker and every slot
    /// tracker. Repeated producer/size slots accumulate once per occurrence.
    ///
    /// The whole pattern is validated before any tracker is touched, so a
    /// malformed pattern (a caller bug) leaves the state unchanged.
    pub fn pattern_feedback(
        &mut self,
        pattern: &Pattern,
        success: bool,
        cost: u32,
    ) -> Result<(), TrainerError> {
        let Some((repeat_id, slots)) = pattern.entries().split_first() else {
            return Err(TrainerError::InvalidPatternFormat("empty pattern".into()));
        };
        let parsed: Vec<(&str, &str)> = slots
            .iter()
            .map(|entry| {
                entry
                    .split_once(SLOT_KEY_SEPARATOR)
                    .filter(|(name, size)| !name.is_empty() && !size.is_empty())
                    .ok_or_else(|| {
                        TrainerError::InvalidPatternFormat(format!(
                            "slot entry {entry:?} is not producer{SLOT_KEY_SEPARATOR}size"
                        ))
                    })
            })
            .collect::<Result<_, _>>()?;

        Self::record_feedback(&mut self.repeaters, repeat_id, success, cost);
        for (name, size) in parsed {
            let trackers = self.producers.entry(name.to_string()).or_default();
            Self::record_feedback(trackers, size, success, cost);
        }
        Ok(())
    }
}
