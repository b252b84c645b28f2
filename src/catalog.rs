//! Static book catalog
//!
//! Display metadata for the books on sale. The engine itself only ever
//! stores ids; hosts look prices and titles up here.

use serde::Serialize;

use crate::engine::{BookId, ProgressionEngine, PurchaseResult};

/// Collector rarity shown on the book card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Mythic,
}

/// A book as listed in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub genre: &'static str,
    /// Price in coins
    pub price: u64,
    pub rarity: Rarity,
}

impl Book {
    pub fn book_id(&self) -> BookId {
        BookId::from(self.id)
    }
}

/// Sort order of a catalog listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[default]
    Title,
    PriceAsc,
    PriceDesc,
}

/// What a catalog listing shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseFilter<'a> {
    /// Case-insensitive match on title or author; empty matches all
    pub text: &'a str,
    /// Exact genre, or every genre when None
    pub genre: Option<&'a str>,
    pub sort: SortOrder,
}

/// Genres on sale, in shelf order
pub const GENRES: [&str; 8] = [
    "FANTASY", "MYSTERY", "ROMANCE", "SCI-FI", "THRILLER", "HISTORY", "TECH", "POETRY",
];

#[rustfmt::skip]
pub const CATALOG: [Book; 8] = [
    Book { id: "1", title: "DRAGON'S GRIMOIRE", author: "ELARA", genre: "FANTASY", price: 120, rarity: Rarity::Legendary },
    Book { id: "2", title: "SHADOWS OF NOIR", author: "THORNE", genre: "MYSTERY", price: 95, rarity: Rarity::Rare },
    Book { id: "3", title: "MOONLIT BLOSSOMS", author: "FERN", genre: "ROMANCE", price: 110, rarity: Rarity::Uncommon },
    Book { id: "4", title: "NEBULA HUNTER", author: "COSMO", genre: "SCI-FI", price: 150, rarity: Rarity::Mythic },
    Book { id: "5", title: "SILENT ECHO", author: "GHOST", genre: "THRILLER", price: 80, rarity: Rarity::Common },
    Book { id: "6", title: "VALLEY OF KINGS", author: "SCRIBE", genre: "HISTORY", price: 200, rarity: Rarity::Rare },
    Book { id: "7", title: "FORBIDDEN LOGIC", author: "CYBER", genre: "TECH", price: 300, rarity: Rarity::Legendary },
    Book { id: "8", title: "PETAL DRIFT", author: "MUSE", genre: "POETRY", price: 40, rarity: Rarity::Common },
];

pub fn find_book(id: &str) -> Option<&'static Book> {
    CATALOG.iter().find(|b| b.id == id)
}

/// Books whose title or author contains `query` (case-insensitive), by title
pub fn search(query: &str) -> Vec<&'static Book> {
    browse(&BrowseFilter {
        text: query,
        ..BrowseFilter::default()
    })
}

/// Catalog listing filtered by text and genre, in the requested order
pub fn browse(filter: &BrowseFilter) -> Vec<&'static Book> {
    let text = filter.text.to_lowercase();
    let mut books: Vec<&'static Book> = CATALOG
        .iter()
        .filter(|b| filter.genre.is_none_or(|g| b.genre.eq_ignore_ascii_case(g)))
        .filter(|b| {
            b.title.to_lowercase().contains(&text) || b.author.to_lowercase().contains(&text)
        })
        .collect();

    match filter.sort {
        SortOrder::Title => books.sort_by(|a, b| a.title.cmp(b.title)),
        SortOrder::PriceAsc => books.sort_by_key(|b| b.price),
        SortOrder::PriceDesc => books.sort_by_key(|b| std::cmp::Reverse(b.price)),
    }
    books
}

/// Buy a catalog book at its listed price
pub fn purchase(engine: &mut ProgressionEngine, book: &Book) -> PurchaseResult {
    let result = engine.purchase_book(book.book_id(), book.price);
    log::debug!("Purchase of {:?}: {:?}", book.title, result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::*;

    #[test]
    fn test_ids_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            assert!(CATALOG[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_find_book() {
        assert_eq!(find_book("7").map(|b| b.price), Some(300));
        assert!(find_book("99").is_none());
    }

    #[test]
    fn test_genres_cover_catalog() {
        assert!(CATALOG.iter().all(|b| GENRES.contains(&b.genre)));
    }

    #[test]
    fn test_search_case_insensitive() {
        let hits = search("noir");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
        assert_eq!(search("").len(), CATALOG.len());
    }

    #[test]
    fn test_search_matches_author() {
        let hits = search("elara");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "DRAGON'S GRIMOIRE");

        // "SCRIBE" is an author, "VALLEY OF KINGS" never mentions it
        let ids: Vec<&str> = search("scribe").iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["6"]);
    }

    #[test]
    fn test_browse_by_genre() {
        let filter = BrowseFilter {
            genre: Some("mystery"),
            ..BrowseFilter::default()
        };
        let ids: Vec<&str> = browse(&filter).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["2"]);

        let none = BrowseFilter {
            text: "elara",
            genre: Some("TECH"),
            ..BrowseFilter::default()
        };
        assert!(browse(&none).is_empty());
    }

    #[test]
    fn test_browse_sorted_by_title() {
        let listing = browse(&BrowseFilter::default());
        let titles: Vec<&str> = listing.iter().map(|b| b.title).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
        assert_eq!(titles[0], "DRAGON'S GRIMOIRE");
        assert_eq!(titles[7], "VALLEY OF KINGS");
    }

    #[test]
    fn test_browse_sorted_by_price() {
        let asc = BrowseFilter {
            sort: SortOrder::PriceAsc,
            ..BrowseFilter::default()
        };
        let prices: Vec<u64> = browse(&asc).iter().map(|b| b.price).collect();
        assert_eq!(prices, vec![40, 80, 95, 110, 120, 150, 200, 300]);

        let desc = BrowseFilter {
            sort: SortOrder::PriceDesc,
            ..BrowseFilter::default()
        };
        let ids: Vec<&str> = browse(&desc).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["7", "6", "4", "1", "3", "2", "5", "8"]);
    }

    #[test]
    fn test_purchase_at_list_price() {
        let mut h = harness();
        let book = find_book("8").unwrap();
        assert_eq!(purchase(&mut h.engine, book), PurchaseResult::Purchased);
        assert_eq!(h.engine.coins(), 1380);
        assert!(h.engine.is_book_owned(&BookId::from("8")));
    }
}
