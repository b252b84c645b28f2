//! Browser bindings
//!
//! The JS shell creates a [`WebEngine`], hands it two callbacks (toast and
//! error toast) and then forwards every user interaction to it.

use wasm_bindgen::prelude::*;

use crate::clock::Clock;
use crate::engine::{BookId, Collaborators};
use crate::notify::{NotificationKind, Notifier};
use crate::persistence::{PersistentStore, StoreError};
use crate::session::Session;
use crate::settings::Settings;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Game state slot in LocalStorage
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl PersistentStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok()?
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(&self.key, payload)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}

/// `Date.now()`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Forwards notifications to JS callbacks
///
/// `on_notify(title, description, kind)` and `on_error(message)`.
pub struct JsNotifier {
    on_notify: js_sys::Function,
    on_error: js_sys::Function,
}

impl JsNotifier {
    pub fn new(on_notify: js_sys::Function, on_error: js_sys::Function) -> Self {
        Self {
            on_notify,
            on_error,
        }
    }
}

impl Notifier for JsNotifier {
    fn notify(&mut self, title: &str, description: &str, kind: NotificationKind) {
        let result = self.on_notify.call3(
            &JsValue::NULL,
            &JsValue::from_str(title),
            &JsValue::from_str(description),
            &JsValue::from_str(kind.as_str()),
        );
        if let Err(e) = result {
            log::warn!("Notification callback threw: {:?}", e);
        }
    }

    fn error(&mut self, message: &str) {
        if let Err(e) = self.on_error.call1(&JsValue::NULL, &JsValue::from_str(message)) {
            log::warn!("Error callback threw: {:?}", e);
        }
    }
}

fn amount_arg(value: f64) -> Result<u64, JsError> {
    super::whole_amount(value).ok_or_else(|| {
        JsError::new(&format!("expected a whole non-negative amount, got {}", value))
    })
}

/// Spin result as seen from JS
#[wasm_bindgen(getter_with_clone)]
pub struct WebSpin {
    pub success: bool,
    pub reward: f64,
    pub message: String,
    #[wasm_bindgen(js_name = segmentIndex)]
    pub segment_index: u32,
}

/// Engine handle exported to the JS shell
#[wasm_bindgen]
pub struct WebEngine {
    session: Session,
}

#[wasm_bindgen]
impl WebEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebEngine {
        WebEngine {
            session: Session::new(),
        }
    }

    /// Load progress from LocalStorage and start the engine
    pub fn initialize(&mut self, on_notify: js_sys::Function, on_error: js_sys::Function) {
        let settings = Settings::load();
        let io = Collaborators {
            store: super::default_store(&settings.storage_key),
            notifier: Box::new(JsNotifier::new(on_notify, on_error)),
            clock: super::default_clock(),
        };
        self.session.initialize(io, settings, crate::entropy_seed());
    }

    pub fn teardown(&mut self) {
        self.session.teardown();
    }

    pub fn coins(&self) -> f64 {
        self.session.engine().coins() as f64
    }

    pub fn xp(&self) -> f64 {
        self.session.engine().xp() as f64
    }

    pub fn level(&self) -> u32 {
        self.session.engine().level()
    }

    #[wasm_bindgen(js_name = xpToNextLevel)]
    pub fn xp_to_next_level(&self) -> f64 {
        self.session.engine().xp_to_next_level() as f64
    }

    #[wasm_bindgen(js_name = scholarTitle)]
    pub fn scholar_title(&self) -> String {
        self.session.engine().title().to_string()
    }

    #[wasm_bindgen(js_name = ownedBooks)]
    pub fn owned_books(&self) -> Vec<String> {
        self.session
            .engine()
            .owned_books()
            .iter()
            .map(|b| b.as_str().to_string())
            .collect()
    }

    /// Unix ms of the last claim, or undefined
    #[wasm_bindgen(js_name = lastDailyClaim)]
    pub fn last_daily_claim(&self) -> Option<f64> {
        self.session.engine().last_daily_claim().map(|t| t as f64)
    }

    #[wasm_bindgen(js_name = addCoins)]
    pub fn add_coins(&mut self, amount: f64, silent: bool) -> Result<(), JsError> {
        let amount = amount_arg(amount)?;
        self.session.engine_mut().add_coins(amount, silent);
        Ok(())
    }

    #[wasm_bindgen(js_name = spendCoins)]
    pub fn spend_coins(&mut self, amount: f64) -> Result<bool, JsError> {
        let amount = amount_arg(amount)?;
        Ok(self.session.engine_mut().spend_coins(amount))
    }

    #[wasm_bindgen(js_name = addXP)]
    pub fn add_xp(&mut self, amount: f64) -> Result<(), JsError> {
        let amount = amount_arg(amount)?;
        self.session.engine_mut().add_xp(amount);
        Ok(())
    }

    #[wasm_bindgen(js_name = addBook)]
    pub fn add_book(&mut self, id: &str) {
        self.session.engine_mut().add_book(BookId::from(id));
    }

    #[wasm_bindgen(js_name = isBookOwned)]
    pub fn is_book_owned(&self, id: &str) -> bool {
        self.session.engine().is_book_owned(&BookId::from(id))
    }

    #[wasm_bindgen(js_name = claimDailyGift)]
    pub fn claim_daily_gift(&mut self) -> bool {
        self.session.engine_mut().claim_daily_gift()
    }

    #[wasm_bindgen(js_name = dailyGiftReady)]
    pub fn daily_gift_ready(&self) -> bool {
        self.session.engine().daily_gift_ready()
    }

    #[wasm_bindgen(js_name = spinWheel)]
    pub fn spin_wheel(&mut self, cost: f64) -> Result<WebSpin, JsError> {
        let cost = amount_arg(cost)?;
        let outcome = self.session.engine_mut().spin_wheel(cost);
        Ok(WebSpin {
            success: outcome.success,
            reward: outcome.reward as f64,
            message: outcome.message,
            segment_index: outcome.segment_index as u32,
        })
    }

    /// Store economy settings for the next `initialize`
    #[wasm_bindgen(js_name = saveSettings)]
    pub fn save_settings(&self, json: &str) -> Result<(), JsError> {
        Settings::from_json(json)?.save()?;
        Ok(())
    }

    /// Current state as the JSON the web client has always stored
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsError> {
        Ok(self.session.engine().state().to_json()?)
    }
}

impl Default for WebEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Lexora: logger already initialized".into());
    }
    log::info!("Lexora progression engine loaded");
}
