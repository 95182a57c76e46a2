use indexmap::IndexMap;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::engine::result_tracker::ResultTracker;

/// Tracker maps keep insertion order: candidate enumeration order must be
/// stable because the weighted draw pairs keys and weights by index.
pub type TrackerMap = IndexMap<String, ResultTracker>;

/// Ephemeral key/weight pairs in enumeration order, rebuilt for every pick.
pub type CandidateSet = Vec<(String, f64)>;

/// Weighted candidates for every tracked item, plus the bootstrap at weight 1
/// when it is not already tracked. Never returns an empty set.
pub fn build_candidates(trackers: Option<&TrackerMap>, bootstrap: &str) -> CandidateSet {
    let Some(trackers) = trackers else {
        return vec![(bootstrap.to_string(), 1.0)];
    };
    let mut candidates: CandidateSet = trackers
        .iter()
        .map(|(id, tracker)| (id.clone(), tracker.selection_weight()))
        .collect();
    if !candidates.iter().any(|(id, _)| id == bootstrap) {
        candidates.push((bootstrap.to_string(), 1.0));
    }
    candidates
}

/// Reverse-cumulative weighted draw: roll an integer in `1..=ceil(sum)`, then
/// walk from the last index subtracting weights until the roll is spent.
/// Later entries are tested first. When every weight is zero the walk
/// subtracts nothing and lands on index 0, so brand-new and simultaneously
/// mastered/failed pools always favor the first candidate.
pub fn weighted_choice(rng: &mut SmallRng, weights: &[f64]) -> usize {
    debug_assert!(!weights.is_empty());
    let total: f64 = weights.iter().sum();
    let mut roll = if total > 0.0 {
        rng.gen_range(0.0..total).floor() + 1.0
    } else {
        1.0
    };
    let mut idx = weights.len() - 1;
    while roll > 0.0 && idx > 0 {
        roll -= weights[idx];
        idx -= 1;
    }
    idx
}

/// Draw one key from a candidate set, keys and weights paired by index.
pub fn pick_candidate(rng: &mut SmallRng, candidates: &CandidateSet) -> String {
    let weights: Vec<f64> = candidates.iter().map(|(_, w)| *w).collect();
    let idx = weighted_choice(rng, &weights);
    candidates[idx].0.clone()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn tracker(success: u32, total: u32) -> ResultTracker {
        ResultTracker { success, total }
    }

    #[test]
    fn bootstrap_only_when_no_trackers() {
        assert_eq!(
            build_candidates(None, "2"),
            vec![("2".to_string(), 1.0)]
        );
        assert_eq!(
            build_candidates(Some(&TrackerMap::new()), "2"),
            vec![("2".to_string(), 1.0)]
        );
    }

    #[test]
    fn tracked_items_precede_appended_bootstrap() {
        let mut trackers = TrackerMap::new();
        trackers.insert("1".to_string(), tracker(5, 10));
        let candidates = build_candidates(Some(&trackers), "2");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].0, "1");
        assert!((candidates[0].1 - 1.0).abs() < 1e-12); // ratio 0.5 peaks the sine
        assert_eq!(candidates[1], ("2".to_string(), 1.0));
    }

    #[test]
    fn bootstrap_not_duplicated_when_tracked() {
        let mut trackers = TrackerMap::new();
        trackers.insert("2".to_string(), tracker(1, 4));
        let candidates = build_candidates(Some(&trackers), "2");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].0, "2");
    }

    #[test]
    fn rebuilding_from_unchanged_trackers_is_identical() {
        let mut trackers = TrackerMap::new();
        trackers.insert("3".to_string(), tracker(2, 7));
        trackers.insert("1".to_string(), tracker(0, 0));
        let first = build_candidates(Some(&trackers), "2");
        let second = build_candidates(Some(&trackers), "2");
        assert_eq!(first, second);
    }

    #[test]
    fn all_zero_weights_always_land_on_index_zero() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(weighted_choice(&mut rng, &[0.0, 0.0, 0.0, 0.0]), 0);
        }
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(weighted_choice(&mut rng, &[0.7]), 0);
        }
    }

    #[test]
    fn lone_positive_leading_weight_is_always_chosen() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(weighted_choice(&mut rng, &[1.0, 0.0, 0.0]), 0);
        }
    }

    #[test]
    fn draw_is_reproducible_for_a_fixed_seed() {
        let weights = [0.4, 1.0, 0.9, 0.2, 1.0];
        let picks: Vec<usize> = {
            let mut rng = SmallRng::seed_from_u64(7);
            (0..20).map(|_| weighted_choice(&mut rng, &weights)).collect()
        };
        let again: Vec<usize> = {
            let mut rng = SmallRng::seed_from_u64(7);
            (0..20).map(|_| weighted_choice(&mut rng, &weights)).collect()
        };
        assert_eq!(picks, again);
    }

    #[test]
    fn draw_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(99);
        let weights = [0.3, 0.0, 2.5, 1.1];
        for _ in 0..200 {
            assert!(weighted_choice(&mut rng, &weights) < weights.len());
        }
    }

    #[test]
    fn pick_candidate_returns_bootstrap_from_fresh_state() {
        let mut rng = SmallRng::seed_from_u64(1);
        let candidates = build_candidates(None, "2");
        for _ in 0..10 {
            assert_eq!(pick_candidate(&mut rng, &candidates), "2");
        }
    }
}
