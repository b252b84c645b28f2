//! Lexora native entry point
//!
//! A small terminal host around the progression engine: each invocation
//! loads the save file, performs one action and writes the result back.
//! The browser build is driven from JS through `platform::web` instead.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand, ValueEnum};

    use lexora::catalog::{self, BrowseFilter, SortOrder};
    use lexora::engine::{PurchaseResult, SEGMENTS};
    use lexora::reading::ReadingSession;
    use lexora::treasury::{self, BUNDLES};
    use lexora::{
        Clock, Collaborators, FileStore, LogNotifier, PersistentStore, ProgressionEngine, Settings,
        SystemClock,
    };

    #[derive(Parser)]
    #[command(name = "lexora")]
    #[command(about = "Lexora progression engine: coins, levels, books and the wheel of luck")]
    #[command(version)]
    struct Cli {
        /// Save file (defaults to $LEXORA_SAVE or ./lexora_game_state.json)
        #[arg(short, long, global = true)]
        save: Option<PathBuf>,

        /// Settings JSON file (defaults to $LEXORA_SETTINGS)
        #[arg(long, global = true)]
        settings: Option<PathBuf>,

        /// Seed for the wheel of luck (random if omitted)
        #[arg(long, global = true)]
        seed: Option<u64>,

        /// Enable verbose logging
        #[arg(short, long, global = true)]
        verbose: bool,

        #[command(subcommand)]
        command: Option<Commands>,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Show coins, level, title and shelf
        Status,
        /// List the books on sale
        Catalog {
            /// Match titles or authors
            #[arg(long, default_value = "")]
            search: String,
            /// Only show one genre (FANTASY, MYSTERY, ...)
            #[arg(long)]
            genre: Option<String>,
            #[arg(long, value_enum, default_value_t = Sort::Title)]
            sort: Sort,
        },
        /// Buy a book from the catalog
        Buy { book: String },
        /// Buy a treasury coin bundle (simulated)
        Bundle { id: String },
        /// Read a book up to the given page, collecting page rewards
        Read { book: String, pages: u32 },
        /// Claim the daily gift
        Daily,
        /// Spin the wheel of luck
        Spin {
            #[arg(default_value_t = 25)]
            cost: u64,
        },
    }

    #[derive(Clone, Copy, ValueEnum)]
    enum Sort {
        Title,
        PriceAsc,
        PriceDesc,
    }

    impl From<Sort> for SortOrder {
        fn from(sort: Sort) -> Self {
            match sort {
                Sort::Title => SortOrder::Title,
                Sort::PriceAsc => SortOrder::PriceAsc,
                Sort::PriceDesc => SortOrder::PriceDesc,
            }
        }
    }

    pub fn run() {
        let cli = Cli::parse();

        let log_level = if cli.verbose { "debug" } else { "info" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        let settings = match &cli.settings {
            Some(path) => Settings::load_from_path(path),
            None => Settings::load(),
        };
        let store: Box<dyn PersistentStore> = match cli.save {
            Some(path) => Box::new(FileStore::new(path)),
            None => lexora::platform::default_store(&settings.storage_key),
        };
        let io = Collaborators {
            store,
            notifier: Box::new(LogNotifier),
            clock: Box::new(SystemClock),
        };
        let seed = cli.seed.unwrap_or_else(lexora::entropy_seed);
        let mut engine = ProgressionEngine::initialize(io, settings, seed);

        match cli.command.unwrap_or(Commands::Status) {
            Commands::Status => print_status(&engine),
            Commands::Catalog {
                search,
                genre,
                sort,
            } => {
                let filter = BrowseFilter {
                    text: &search,
                    genre: genre.as_deref(),
                    sort: sort.into(),
                };
                let listing = catalog::browse(&filter);
                if listing.is_empty() {
                    println!("No books match");
                }
                for book in listing {
                    let owned = engine.is_book_owned(&book.book_id());
                    println!(
                        "{:>2}  {:<20} {:<8} {:>4} coins  {:?}{}",
                        book.id,
                        book.title,
                        book.genre,
                        book.price,
                        book.rarity,
                        if owned { "  (owned)" } else { "" }
                    );
                }
            }
            Commands::Buy { book } => match catalog::find_book(&book) {
                Some(book) => match catalog::purchase(&mut engine, book) {
                    PurchaseResult::Purchased => {
                        println!("{} added to your shelf", book.title)
                    }
                    PurchaseResult::AlreadyOwned => println!("{} is already yours", book.title),
                    PurchaseResult::InsufficientFunds => {
                        println!("Not enough coins for {} ({})", book.title, book.price)
                    }
                },
                None => println!("No book with id {}", book),
            },
            Commands::Bundle { id } => match treasury::find_bundle(&id) {
                Some(bundle) => {
                    std::thread::sleep(std::time::Duration::from_millis(
                        treasury::PURCHASE_DELAY_MS,
                    ));
                    treasury::purchase_bundle(&mut engine, bundle);
                    println!("{}: +{} coins", bundle.name, bundle.amount);
                }
                None => {
                    let ids: Vec<&str> = BUNDLES.iter().map(|b| b.id).collect();
                    println!("Unknown bundle {}, choose one of: {}", id, ids.join(", "));
                }
            },
            Commands::Read { book, pages } => match ReadingSession::open_listed(&book) {
                Some(mut session) => {
                    let rewarded = (2..=pages)
                        .filter(|page| session.turn_to(&mut engine, *page))
                        .count();
                    println!(
                        "Read {} to page {}: {} page rewards",
                        session.book(),
                        session.page(),
                        rewarded
                    );
                }
                None => println!("No book with id {}", book),
            },
            Commands::Daily => {
                if engine.claim_daily_gift() {
                    println!("DAILY_GIFT_CLAIMED: +{} Coins", engine.settings().daily_gift_reward);
                } else if let Some(at) = engine.daily_gift_unlocks_at() {
                    let wait_ms = at.saturating_sub(SystemClock.now_ms());
                    println!("Gift locked for another {} min", wait_ms.div_ceil(60_000));
                }
            }
            Commands::Spin { cost } => {
                let outcome = engine.spin_wheel(cost);
                if outcome.success {
                    let tier = SEGMENTS[outcome.segment_index].tier.label();
                    println!(
                        "SPIN_COMPLETE: {} [{}] reward {}",
                        outcome.message, tier, outcome.reward
                    );
                } else {
                    println!("SPIN_FAILED: {}", outcome.message);
                }
            }
        }

        print_balance(&engine);
        engine.teardown();
    }

    fn print_status(engine: &ProgressionEngine) {
        println!("Title:  {}", engine.title());
        println!(
            "Level:  {} ({} xp, {} to next)",
            engine.level(),
            engine.xp(),
            engine.xp_to_next_level()
        );
        let shelf: Vec<&str> = engine
            .owned_books()
            .iter()
            .map(|id| catalog::find_book(id.as_str()).map_or(id.as_str(), |b| b.title))
            .collect();
        println!("Shelf:  {}", if shelf.is_empty() { "-".to_string() } else { shelf.join(", ") });
        println!(
            "Gift:   {}",
            if engine.daily_gift_ready() { "ready" } else { "locked" }
        );
    }

    fn print_balance(engine: &ProgressionEngine) {
        println!("Coins:  {}", engine.coins());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
