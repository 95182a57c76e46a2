use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Success/attempt history for one practice item (a repeat count, or a
/// producer+size pair).
///
/// `total` grows by the attempt cost of each round while `success` grows by
/// at most 1, so the ratio drifts downward for items that take many listens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTracker {
    pub success: u32,
    pub total: u32,
}

impl ResultTracker {
    pub fn record(&mut self, success: bool, cost: u32) {
        self.total += cost;
        if success {
            self.success += 1;
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.success) / f64::from(self.total)
        }
    }

    /// sin(π·ratio): zero for never-attempted and fully-mastered items,
    /// maximal at a 50% success rate.
    pub fn selection_weight(&self) -> f64 {
        (PI * self.ratio()).sin()
    }
}
