use thiserror::Error;

/// Scheduling and feedback failures. Every failure is deterministic for the
/// given inputs and is surfaced to the caller rather than masked with a
/// default choice.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrainerError {
    /// Every producer declined every candidate size for this slot. Skipping
    /// the slot instead would break the text/pattern correspondence.
    #[error("no feasible content for slot {slot_index} of {total_slots}")]
    EmptyCandidateSet { total_slots: u32, slot_index: u32 },

    /// A pattern that did not come out of this scheduler: empty, or a slot
    /// entry that does not split into `producer:size`.
    #[error("malformed pattern: {0}")]
    InvalidPatternFormat(String),
}
