//! Book ownership

use super::{BookId, ProgressionEngine};
use crate::notify::NotificationKind;

/// Outcome of buying a book from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseResult {
    Purchased,
    AlreadyOwned,
    InsufficientFunds,
}

impl ProgressionEngine {
    /// Add a book to the shelf. Adding an owned book does nothing.
    pub fn add_book(&mut self, id: BookId) {
        if self.state.owns(&id) {
            return;
        }

        log::info!("Book {} added to shelf", id);
        self.transact(|s| s.owned_books.push(id));
        self.notifier().notify(
            "Book Archived",
            "A new tome has been added to your shelf",
            NotificationKind::Info,
        );
    }

    pub fn is_book_owned(&self, id: &BookId) -> bool {
        self.state.owns(id)
    }

    /// Pay `price` and shelve the book, unless it is already owned
    pub fn purchase_book(&mut self, id: BookId, price: u64) -> PurchaseResult {
        if self.is_book_owned(&id) {
            return PurchaseResult::AlreadyOwned;
        }
        if !self.spend_coins(price) {
            return PurchaseResult::InsufficientFunds;
        }
        self.add_book(id);
        PurchaseResult::Purchased
    }
}
