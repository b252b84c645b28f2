//! Daily gift
//!
//! A sliding cooldown anchored to the last successful claim, not a
//! calendar-day boundary. A clock that runs backwards keeps the gift locked.

use super::ProgressionEngine;
use crate::notify::NotificationKind;

/// Error surfaced while the gift is still on cooldown
pub const GIFT_LOCKED: &str = "GIFT_LOCKED: COME_BACK_LATER";

impl ProgressionEngine {
    /// Credit the daily gift if the cooldown has elapsed
    pub fn claim_daily_gift(&mut self) -> bool {
        let now = self.io.clock.now_ms();

        if !self.gift_ready_at(now) {
            log::debug!("Daily gift still locked");
            self.notifier().error(GIFT_LOCKED);
            return false;
        }

        let reward = self.settings.daily_gift_reward;
        self.transact(|s| {
            s.coins = s.coins.saturating_add(reward);
            s.last_daily_claim = Some(now);
        });
        log::info!("Daily gift claimed: +{} coins", reward);
        self.notifier().notify(
            "Sanctuary Gift",
            &format!("+{} Coins received!", reward),
            NotificationKind::Reward,
        );
        true
    }

    /// Whether a claim made now would succeed
    pub fn daily_gift_ready(&self) -> bool {
        self.gift_ready_at(self.io.clock.now_ms())
    }

    /// When the gift unlocks again (None if it has never been claimed)
    pub fn daily_gift_unlocks_at(&self) -> Option<u64> {
        self.state
            .last_daily_claim
            .map(|last| last.saturating_add(self.settings.daily_gift_cooldown_ms))
    }

    fn gift_ready_at(&self, now: u64) -> bool {
        match self.state.last_daily_claim {
            None => true,
            Some(last) => {
                now >= last && now - last >= self.settings.daily_gift_cooldown_ms
            }
        }
    }
}
