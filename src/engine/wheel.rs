//! Wheel of luck
//!
//! Eight fixed segments with integer weights summing to 100. A spin draws a
//! uniform roll in [0, 100) and picks the first segment whose cumulative
//! weight exceeds it; a roll outside that range (negative, NaN, 100 or
//! more) lands on the last segment.

use rand::Rng;
use serde::Serialize;

use super::ProgressionEngine;
use crate::consts::WHEEL_ROLL_RANGE;
use crate::notify::NotificationKind;

/// Error surfaced when a spin cannot be paid for
pub const INSUFFICIENT_COINS_SPIN: &str = "INSUFFICIENT_COINS: SPIN_ABORTED";

/// Message carried by a refused spin
pub const SPIN_REFUSED_MESSAGE: &str = "insufficient funds";

/// Visual tier of a wheel segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Diamond,
    Gold,
    Silver,
    Bronze,
    Iron,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Diamond => "DIAMOND",
            Tier::Gold => "GOLD",
            Tier::Silver => "SILVER",
            Tier::Bronze => "BRONZE",
            Tier::Iron => "IRON",
        }
    }
}

/// One weighted outcome on the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Share of 100
    pub weight: u32,
    /// Payout as a multiple of the spin cost
    pub multiplier: u64,
    pub tier: Tier,
    pub message: &'static str,
}

impl Segment {
    pub fn reward(&self, cost: u64) -> u64 {
        cost.saturating_mul(self.multiplier)
    }
}

/// Wheel layout, in the order the segments appear on screen (45° each)
#[rustfmt::skip]
pub const SEGMENTS: [Segment; 8] = [
    Segment { weight: 2, multiplier: 20, tier: Tier::Diamond, message: "DIAMOND_REWARD: LEGENDARY_TIER" },
    Segment { weight: 8, multiplier: 5, tier: Tier::Gold, message: "GOLD_REWARD: MAGNIFICENT_GAIN" },
    Segment { weight: 12, multiplier: 2, tier: Tier::Silver, message: "SILVER_REWARD: STELLAR_FIND" },
    Segment { weight: 15, multiplier: 1, tier: Tier::Bronze, message: "BRONZE_REWARD: STABLE_ARCHIVE" },
    Segment { weight: 15, multiplier: 1, tier: Tier::Bronze, message: "BRONZE_REWARD: RESTORED_FOLIO" },
    Segment { weight: 15, multiplier: 0, tier: Tier::Iron, message: "IRON_NODE: NO_VALUE_FOUND" },
    Segment { weight: 15, multiplier: 0, tier: Tier::Iron, message: "IRON_NODE: EMPTY_SHELF" },
    Segment { weight: 18, multiplier: 0, tier: Tier::Iron, message: "IRON_NODE: DUST_AND_SILENCE" },
];

/// Segment index for a roll in [0, 100); anything else lands on the last segment
pub fn select_segment(roll: f64) -> usize {
    if !(0.0..WHEEL_ROLL_RANGE).contains(&roll) {
        return SEGMENTS.len() - 1;
    }
    let mut cumulative = 0.0;
    for (i, segment) in SEGMENTS.iter().enumerate() {
        cumulative += segment.weight as f64;
        if roll < cumulative {
            return i;
        }
    }
    SEGMENTS.len() - 1
}

/// Result of a spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinOutcome {
    pub success: bool,
    pub reward: u64,
    pub message: String,
    /// Where the wheel animation must stop (0..8)
    pub segment_index: usize,
}

impl ProgressionEngine {
    /// Pay `cost` and spin the wheel with the engine's own RNG
    pub fn spin_wheel(&mut self, cost: u64) -> SpinOutcome {
        if self.state.coins < cost {
            return self.refuse_spin(cost);
        }
        let roll = self.rng.random_range(0.0..WHEEL_ROLL_RANGE);
        self.spin_wheel_with_roll(cost, roll)
    }

    /// Same as [`spin_wheel`](Self::spin_wheel) for a roll drawn elsewhere
    /// (replays, scripted demos)
    pub fn spin_wheel_with_roll(&mut self, cost: u64, roll: f64) -> SpinOutcome {
        if self.state.coins < cost {
            return self.refuse_spin(cost);
        }

        let segment_index = select_segment(roll);
        let segment = SEGMENTS[segment_index];
        let reward = segment.reward(cost);

        self.transact(|s| s.coins = (s.coins - cost).saturating_add(reward));
        log::info!(
            "Spin for {} landed on segment {} ({}), reward {}",
            cost,
            segment_index,
            segment.tier.label(),
            reward
        );

        if reward > cost {
            self.notifier()
                .notify("Wheel of Luck", segment.message, NotificationKind::Reward);
        }

        SpinOutcome {
            success: true,
            reward,
            message: segment.message.to_string(),
            segment_index,
        }
    }

    fn refuse_spin(&mut self, cost: u64) -> SpinOutcome {
        log::debug!(
            "Refused spin costing {} (balance {})",
            cost,
            self.state.coins
        );
        self.notifier().error(INSUFFICIENT_COINS_SPIN);
        SpinOutcome {
            success: false,
            reward: 0,
            message: SPIN_REFUSED_MESSAGE.to_string(),
            segment_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::*;

    #[test]
    fn test_weights_sum_to_roll_range() {
        let total: u32 = SEGMENTS.iter().map(|s| s.weight).sum();
        assert_eq!(total as f64, WHEEL_ROLL_RANGE);
    }

    #[test]
    fn test_messages_distinct() {
        for (i, a) in SEGMENTS.iter().enumerate() {
            for b in &SEGMENTS[i + 1..] {
                assert_ne!(a.message, b.message);
            }
        }
    }

    #[test]
    fn test_select_segment_boundaries() {
        assert_eq!(select_segment(0.0), 0);
        assert_eq!(select_segment(1.999), 0);
        assert_eq!(select_segment(2.0), 1);
        assert_eq!(select_segment(9.999), 1);
        assert_eq!(select_segment(10.0), 2);
        assert_eq!(select_segment(22.0), 3);
        assert_eq!(select_segment(37.0), 4);
        assert_eq!(select_segment(52.0), 5);
        assert_eq!(select_segment(67.0), 6);
        assert_eq!(select_segment(82.0), 7);
        assert_eq!(select_segment(99.999), 7);
    }

    #[test]
    fn test_select_segment_out_of_range_falls_to_last() {
        assert_eq!(select_segment(100.0), 7);
        assert_eq!(select_segment(f64::NAN), 7);
        assert_eq!(select_segment(f64::INFINITY), 7);
        assert_eq!(select_segment(-3.0), 7);
        assert_eq!(select_segment(-0.001), 7);
        assert_eq!(select_segment(f64::NEG_INFINITY), 7);
    }

    #[test]
    fn test_negative_roll_pays_nothing() {
        let mut h = harness();
        let outcome = h.engine.spin_wheel_with_roll(25, -3.0);
        assert!(outcome.success);
        assert_eq!(outcome.segment_index, 7);
        assert_eq!(outcome.reward, 0);
        assert_eq!(h.engine.coins(), 1420 - 25);
    }

    #[test]
    fn test_spin_refused_without_funds() {
        let mut h = harness();
        let before = h.engine.state().clone();

        let outcome = h.engine.spin_wheel(1421);
        assert_eq!(
            outcome,
            SpinOutcome {
                success: false,
                reward: 0,
                message: "insufficient funds".to_string(),
                segment_index: 0,
            }
        );
        assert_eq!(h.engine.state(), &before);
        assert_eq!(h.notifier.errors(), vec![INSUFFICIENT_COINS_SPIN.to_string()]);
    }

    #[test]
    fn test_diamond_spin_announced() {
        let mut h = harness();
        let outcome = h.engine.spin_wheel_with_roll(25, 1.0);

        assert!(outcome.success);
        assert_eq!(outcome.segment_index, 0);
        assert_eq!(outcome.reward, 500);
        assert_eq!(h.engine.coins(), 1420 - 25 + 500);

        let notes = h.notifier.notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Wheel of Luck");
        assert_eq!(notes[0].description, "DIAMOND_REWARD: LEGENDARY_TIER");
    }

    #[test]
    fn test_break_even_spin_not_announced() {
        let mut h = harness();
        let outcome = h.engine.spin_wheel_with_roll(25, 30.0);
        assert_eq!(outcome.segment_index, 3);
        assert_eq!(outcome.reward, 25);
        assert_eq!(h.engine.coins(), 1420);
        assert!(h.notifier.notifications().is_empty());
    }

    #[test]
    fn test_losing_spin() {
        let mut h = harness();
        let outcome = h.engine.spin_wheel_with_roll(100, 90.0);
        assert_eq!(outcome.segment_index, 7);
        assert_eq!(outcome.reward, 0);
        assert_eq!(h.engine.coins(), 1320);
        assert_eq!(saved(&h.store).coins, 1320);
    }

    #[test]
    fn test_spin_entire_balance() {
        let mut h = harness();
        let outcome = h.engine.spin_wheel_with_roll(1420, 60.0);
        assert!(outcome.success);
        assert_eq!(h.engine.coins(), 0);
    }

    #[test]
    fn test_seeded_spins_reproducible() {
        let mut a = harness();
        let mut b = harness();
        for _ in 0..20 {
            let x = a.engine.spin_wheel(1);
            let y = b.engine.spin_wheel(1);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_segment_distribution() {
        let mut h = harness();
        let trials = 200_000;
        let mut counts = [0u32; 8];
        for _ in 0..trials {
            let outcome = h.engine.spin_wheel(0);
            assert!(outcome.success);
            counts[outcome.segment_index] += 1;
        }

        for (i, segment) in SEGMENTS.iter().enumerate() {
            let observed = counts[i] as f64 / trials as f64;
            let expected = segment.weight as f64 / 100.0;
            assert!(
                (observed - expected).abs() < 0.005,
                "segment {}: observed {:.4}, expected {:.4}",
                i,
                observed,
                expected
            );
        }
    }
}
