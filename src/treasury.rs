//! Treasury coin bundles
//!
//! Purchases are simulated: no payment is taken, the bundle's coins are
//! credited unconditionally. Hosts wait [`PURCHASE_DELAY_MS`] before
//! calling [`purchase_bundle`] so the checkout feels real.

use serde::Serialize;

use crate::engine::ProgressionEngine;

/// Fake checkout delay before coins are credited (ms)
pub const PURCHASE_DELAY_MS: u64 = 800;

/// A coin pack offered in the treasury
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinBundle {
    pub id: &'static str,
    pub name: &'static str,
    pub amount: u64,
    /// Display price, never charged
    pub price_label: &'static str,
    pub popular: bool,
}

#[rustfmt::skip]
pub const BUNDLES: [CoinBundle; 3] = [
    CoinBundle { id: "penny", name: "SCRIBE'S PENNY", amount: 100, price_label: "$0.99", popular: false },
    CoinBundle { id: "purse", name: "SCHOLAR'S PURSE", amount: 600, price_label: "$4.99", popular: true },
    CoinBundle { id: "vault", name: "IMPERIAL VAULT", amount: 2500, price_label: "$19.99", popular: false },
];

pub fn find_bundle(id: &str) -> Option<&'static CoinBundle> {
    BUNDLES.iter().find(|b| b.id == id)
}

/// Credit a bundle's coins (announced as a reward)
pub fn purchase_bundle(engine: &mut ProgressionEngine, bundle: &CoinBundle) {
    log::info!("Simulated purchase: {} (+{} coins)", bundle.name, bundle.amount);
    engine.add_coins(bundle.amount, false);
}
