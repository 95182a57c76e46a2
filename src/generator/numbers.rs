use rand::Rng;
use rand::rngs::SmallRng;

use crate::generator::{TextProducer, finish_slot};

/// Digit groups get hard to hold past a handful of figures.
const MAX_GROUP_LEN: u32 = 5;

/// A group of `size` random digits, for figure-copying practice.
pub struct NumberGroups;

impl TextProducer for NumberGroups {
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
            .map(|_| (b'0' + rng.gen_range(0..10)) as char)
            .collect();
        Some(finish_slot(group, total_slots, slot_index))
    }
}
