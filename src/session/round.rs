use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::feedback::Pattern;
use crate::engine::scheduler::Round;

/// Outcome of one presented round, kept in session history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundRecord {
    pub text: String,
    pub pattern: Pattern,
    pub success: bool,
    pub listen_count: u32,
    pub timestamp: DateTime<Utc>,
}

impl RoundRecord {
    pub fn new(round: &Round, success: bool, listen_count: u32) -> Self {
        Self {
            text: round.text.clone(),
            pattern: round.pattern.clone(),
            success,
            listen_count,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_serde() {
        let round = Round {
            text: "cq k".to_string(),
            pattern: Pattern::from_entries(vec![
                "2".to_string(),
                "words:1".to_string(),
                "letters:1".to_string(),
            ]),
        };
        let record = RoundRecord::new(&round, true, 3);
        let json = serde_json::to_string(&record).unwrap();
        let back: RoundRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.text, record.text);
        assert_eq!(back.pattern, record.pattern);
        assert_eq!(back.success, record.success);
        assert_eq!(back.listen_count, record.listen_count);
        assert_eq!(back.timestamp, record.timestamp);
    }
}
