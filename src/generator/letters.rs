use rand::Rng;
use rand::rngs::SmallRng;

use crate::generator::{TextProducer, finish_slot};

/// Longest group a learner can reasonably hold in their head while copying.
const MAX_GROUP_LEN: u32 = 7;

/// A group of `size` random letters, the classic code-group drill.
pub struct LetterGroups;

impl TextProducer for LetterGroups {
    fn produce(
        &self,
        rng: &mut SmallRng,
        size: u32,
        total_slots: u32,
        slot_index: u32,
    ) -> Option<String> {
        if size == 0 || size > MAX_GROUP_LEN {
            return None;
        }
        let group: String = (0..size)
            .map(|_| (b'a' + rng.gen_range(0..26)) as char)
            .collect();
        Some(finish_slot(group, total_slots, slot_index))
    }
}
