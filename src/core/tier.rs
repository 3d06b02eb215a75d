//! Score-driven cosmetic tiers.
//!
//! Tier 0 covers the opening stretch (score below 20). From there every 20
//! points moves to the next tier, cycling through `1..tier_count`. The bucket
//! is `(score / 20) % (tier_count - 1)`; a bucket of 0 maps to the last tier
//! instead of back to tier 0.

use crate::core::constants::TIER_SCORE_STEP;

/// Tier index for `score` given `tier_count` bundles.
pub fn tier_for(score: u32, tier_count: usize) -> usize {
    if score < TIER_SCORE_STEP || tier_count < 2 {
        return 0;
    }
    let bucket = (score / TIER_SCORE_STEP) as usize % (tier_count - 1);
    if bucket == 0 {
        tier_count - 1
    } else {
        bucket
    }
}

/// Remembers the active tier of one attempt and reports transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTracker {
    active: usize,
    tier_count: usize,
}

impl TierTracker {
    pub fn new(tier_count: usize) -> Self {
        Self {
            active: 0,
            tier_count,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Record `score`; returns the new tier when it differs from the active one.
    pub fn observe(&mut self, score: u32) -> Option<usize> {
        let tier = tier_for(score, self.tier_count);
        if tier == self.active {
            return None;
        }
        self.active = tier;
        Some(tier)
    }
}
