use rand::rngs::SmallRng;

use crate::engine::candidates::{CandidateSet, build_candidates, pick_candidate, weighted_choice};
use crate::engine::errors::TrainerError;
use crate::engine::feedback::{Pattern, SLOT_KEY_SEPARATOR, TrainerState};
use crate::generator::ProducerRegistry;

/// Repeat count offered at weight 1 when no round history exists yet.
pub const REPEAT_BOOTSTRAP: &str = "2";
/// Content size offered at weight 1 for producers with no history yet.
pub const SIZE_BOOTSTRAP: &str = "1";

/// One generated round: the concatenated practice text and the verbatim
/// pattern that built it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub text: String,
    pub pattern: Pattern,
}

/// Builds rounds from per-item statistics and routes outcomes back to them.
///
/// Owns the session RNG so that a fixed seed reproduces the exact sequence of
/// rounds. One scheduler per learner session; generation and feedback are
/// invoked strictly sequentially by the surrounding loop.
pub struct TextScheduler {
    registry: ProducerRegistry,
    state: TrainerState,
    rng: SmallRng,
}

impl TextScheduler {
    pub fn new(registry: ProducerRegistry, rng: SmallRng) -> Self {
        Self::with_state(registry, TrainerState::default(), rng)
    }

    pub fn with_state(registry: ProducerRegistry, state: TrainerState, rng: SmallRng) -> Self {
        Self {
            registry,
            state,
            rng,
        }
    }

    pub fn state(&self) -> &TrainerState {
        &self.state
    }

    /// Build the next round: pick a repeat count, then fill each slot from
    /// the flat producer/size candidate pool.
    pub fn generate_round(&mut self) -> Result<Round, TrainerError> {
        let repeat_id = pick_repeater(&self.state, &mut self.rng);
        let count: u32 = repeat_id.parse().map_err(|_| {
            TrainerError::InvalidPatternFormat(format!("repeat id {repeat_id:?} is not a count"))
        })?;

        let mut text = String::new();
        let mut pattern = Pattern::new(repeat_id);
        for slot_index in 0..count {
            let (slot_key, content) =
                fill_slot(&self.registry, &self.state, &mut self.rng, count, slot_index)?;
            text.push_str(&content);
            pattern.push_slot(slot_key);
        }
        Ok(Round { text, pattern })
    }

    /// Route one round's outcome into the tracker state.
    pub fn pattern_feedback(
        &mut self,
        pattern: &Pattern,
        success: bool,
        cost: u32,
    ) -> Result<(), TrainerError> {
        self.state.pattern_feedback(pattern, success, cost)
    }
}

fn pick_repeater(state: &TrainerState, rng: &mut SmallRng) -> String {
    let candidates = build_candidates(Some(&state.repeaters), REPEAT_BOOTSTRAP);
    pick_candidate(rng, &candidates)
}

/// Enumerate every producer with every candidate size, collect the feasible
/// combinations into one flat pool, and draw from it. Content is generated
/// up front for every candidate so the drawn key can be returned with the
/// content it was offered with.
fn fill_slot(
    registry: &ProducerRegistry,
    state: &TrainerState,
    rng: &mut SmallRng,
    total_slots: u32,
    slot_index: u32,
) -> Result<(String, String), TrainerError> {
    let mut candidates: CandidateSet = Vec::new();
    let mut contents: Vec<String> = Vec::new();

    for (name, producer) in registry.iter() {
        let sizes = build_candidates(state.producers.get(name), SIZE_BOOTSTRAP);
        for (size, weight) in sizes {
            // Non-numeric size keys can only come from foreign state; treat
            // them as infeasible like any other declined parameter.
            let Ok(len) = size.parse::<u32>() else {
                continue;
            };
            if let Some(content) = producer.produce(rng, len, total_slots, slot_index) {
                candidates.push((format!("{name}{SLOT_KEY_SEPARATOR}{size}"), weight));
                contents.push(content);
            }
        }
    }

    if candidates.is_empty() {
        return Err(TrainerError::EmptyCandidateSet {
            total_slots,
            slot_index,
        });
    }

    let weights: Vec<f64> = candidates.iter().map(|(_, w)| *w).collect();
    let idx = weighted_choice(rng, &weights);
    let (slot_key, _) = candidates.swap_remove(idx);
    Ok((slot_key, contents.swap_remove(idx)))
}
