pub mod letters;
pub mod numbers;
pub mod words;

use indexmap::IndexMap;
use rand::rngs::SmallRng;

/// One named content producer. `None` means the producer cannot satisfy the
/// requested parameters and the scheduler should leave it out of the slot's
/// candidate pool. Producers never touch tracker state; all randomness comes
/// from the RNG handed in by the scheduler.
pub trait TextProducer {
    fn produce(
        &self,
        rng: &mut SmallRng,
        size: u32,
        total_slots: u32,
        slot_index: u32,
    ) -> Option<String>;
}

/// Fixed name -> producer mapping supplied at scheduler construction.
/// Registration order is enumeration order, which the weighted draw depends
/// on, so the map keeps insertion order.
#[derive(Default)]
pub struct ProducerRegistry {
    producers: IndexMap<String, Box<dyn TextProducer>>,
}

impl ProducerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, producer: impl TextProducer + 'static) {
        self.producers.insert(name.to_string(), Box::new(producer));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn TextProducer)> {
        self.producers
            .iter()
            .map(|(name, producer)| (name.as_str(), producer.as_ref()))
    }
}

/// The shipped catalogue: letter groups, dictionary words, digit groups.
pub fn default_registry() -> ProducerRegistry {
    let mut registry = ProducerRegistry::new();
    registry.register("letters", letters::LetterGroups);
    registry.register("words", words::WordProducer::new(words::Dictionary::load()));
    registry.register("numbers", numbers::NumberGroups);
    registry
}

/// Slot content is concatenated verbatim into the round text, so producers
/// append the separator themselves for every slot but the last.
pub(crate) fn finish_slot(mut content: String, total_slots: u32, slot_index: u32) -> String {
    if slot_index + 1 < total_slots {
        content.push(' ');
    }
    content
}
