//! Coin credit and debit

use super::ProgressionEngine;
use crate::notify::NotificationKind;

/// Error surfaced when a purchase cannot be paid for
pub const INSUFFICIENT_COINS_PURCHASE: &str = "INSUFFICIENT_COINS: TRANSACTION_ABORTED";

impl ProgressionEngine {
    /// Credit coins. Announced as a reward unless `silent`.
    pub fn add_coins(&mut self, amount: u64, silent: bool) {
        self.transact(|s| s.coins = s.coins.saturating_add(amount));
        log::debug!("+{} coins (balance {})", amount, self.state.coins);

        if !silent {
            self.notifier().notify(
                "Scholar Reward",
                &format!("+{} Coins gained from archives", amount),
                NotificationKind::Reward,
            );
        }
    }

    /// Debit coins if the balance covers it. Returns false (and changes
    /// nothing) on insufficient funds.
    pub fn spend_coins(&mut self, amount: u64) -> bool {
        let Some(remaining) = self.state.coins.checked_sub(amount) else {
            log::debug!(
                "Refused to spend {} coins (balance {})",
                amount,
                self.state.coins
            );
            self.notifier().error(INSUFFICIENT_COINS_PURCHASE);
            return false;
        };

        self.transact(|s| s.coins = remaining);
        log::debug!("-{} coins (balance {})", amount, remaining);
        true
    }
}
