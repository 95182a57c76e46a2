use rand::Rng;
use rand::rngs::SmallRng;

use crate::generator::{TextProducer, finish_slot};

const WORDS_EN: &str = include_str!("../../assets/words-en.json");

/// More than two words in one slot overruns a copy buffer at beginner speed.
const MAX_WORDS_PER_SLOT: u32 = 2;

pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn load() -> Self {
        let words: Vec<String> = serde_json::from_str(WORDS_EN).unwrap_or_default();
        let words = words
            .into_iter()
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .collect();
        Self { words }
    }

    #[allow(dead_code)] // Used by tests
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn pick(&self, rng: &mut SmallRng) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

/// `size` random dictionary words, for plain-language copy practice.
pub struct WordProducer {
    dictionary: Dictionary,
}

impl WordProducer {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}

impl TextProducer for WordProducer {
    fn produce(
        &self,
        rng: &mut SmallRng,
        size: u32,
        total_slots: u32,
        slot_index: u32,
    ) -> Option<String> {
        if size == 0 || size > MAX_WORDS_PER_SLOT || self.dictionary.is_empty() {
            return None;
        }
        let words: Vec<&str> = (0..size).map(|_| self.dictionary.pick(rng)).collect();
        Some(finish_slot(words.join(" "), total_slots, slot_index))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn embedded_dictionary_is_not_empty() {
        let dictionary = Dictionary::load();
        assert!(dictionary.len() > 100);
    }

    #[test]
    fn declines_out_of_range_sizes() {
        let producer = WordProducer::new(Dictionary::load());
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(producer.produce(&mut rng, 0, 2, 0).is_none());
        assert!(producer.produce(&mut rng, MAX_WORDS_PER_SLOT + 1, 2, 0).is_none());
    }

    #[test]
    fn declines_when_dictionary_is_empty() {
        let producer = WordProducer::new(Dictionary { words: Vec::new() });
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(producer.produce(&mut rng, 1, 2, 0).is_none());
    }

    #[test]
    fn produces_the_requested_word_count() {
        let producer = WordProducer::new(Dictionary::load());
        let mut rng = SmallRng::seed_from_u64(42);
        let content = producer.produce(&mut rng, 2, 1, 0).unwrap();
        assert_eq!(content.split(' ').count(), 2);
        assert!(content.chars().all(|ch| ch.is_ascii_lowercase() || ch == ' '));
    }

    #[test]
    fn non_final_slots_end_with_a_separator() {
        let producer = WordProducer::new(Dictionary::load());
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(producer.produce(&mut rng, 1, 2, 0).unwrap().ends_with(' '));
        assert!(!producer.produce(&mut rng, 1, 2, 1).unwrap().ends_with(' '));
    }
}
