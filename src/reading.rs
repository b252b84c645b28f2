//! Reading rewards
//!
//! While a book is open, every Nth page (page 1 excluded) pays out XP and a
//! silent coin bonus, once per page per session. Paging back and forth
//! over a rewarded page does not pay again; reopening the book starts a
//! new session.

use std::collections::BTreeSet;

use crate::catalog;
use crate::engine::{BookId, ProgressionEngine};

/// Page tracking for one open book
#[derive(Debug, Clone)]
pub struct ReadingSession {
    book: BookId,
    page: u32,
    rewarded_pages: BTreeSet<u32>,
}

impl ReadingSession {
    /// Open a book at page 1
    pub fn open(book: BookId) -> Self {
        Self {
            book,
            page: 1,
            rewarded_pages: BTreeSet::new(),
        }
    }

    /// Open a catalog book by id; None if the catalog has no such book
    pub fn open_listed(id: &str) -> Option<Self> {
        match catalog::find_book(id) {
            Some(book) => Some(Self::open(book.book_id())),
            None => {
                log::warn!("Refusing to open unknown book {:?}", id);
                None
            }
        }
    }

    pub fn book(&self) -> &BookId {
        &self.book
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn rewarded_pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.rewarded_pages.iter().copied()
    }

    /// Jump to `page` (clamped to >= 1). Returns true if it paid a reward.
    pub fn turn_to(&mut self, engine: &mut ProgressionEngine, page: u32) -> bool {
        self.page = page.max(1);

        let rewards = engine.settings().reading;
        let qualifies = self.page > 1 && self.page % rewards.every_pages == 0;
        if !qualifies || !self.rewarded_pages.insert(self.page) {
            return false;
        }

        log::debug!("Reading reward for {} page {}", self.book, self.page);
        engine.add_xp(rewards.xp);
        engine.add_coins(rewards.coins, true);
        true
    }

    pub fn next_page(&mut self, engine: &mut ProgressionEngine) -> bool {
        self.turn_to(engine, self.page.saturating_add(1))
    }

    pub fn previous_page(&mut self, engine: &mut ProgressionEngine) -> bool {
        self.turn_to(engine, self.page.saturating_sub(1))
    }
}
