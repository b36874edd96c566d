//! Zoom & Doom core crate.
//!
//! A single-screen guessing game: the player sees a heavily zoomed crop of a
//! crust or fruit-interior photo, picks one of three answers (or skips), and
//! gets the full image revealed. `round` holds the state reducer, `view`
//! renders it to HTML, and the private `app` module wires both to the DOM.
//! `start_game()` is the JS entrypoint.

use wasm_bindgen::prelude::*;

mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod rng;
pub mod round;
pub mod view;

pub use catalog::{CATALOG, CatalogItem, SpecimenKind, answer_label, options_for};
pub use config::GameConfig;
pub use error::GameError;
pub use rng::{BrowserRng, RandomSource, SeededRng};
pub use round::{Game, Outcome, Phase, Round};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    app::mount(GameConfig::default())?;
    Ok(())
}

/// Same as `start_game` with a JSON override of `GameConfig` fields.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    app::mount(GameConfig::from_json(json)?)?;
    Ok(())
}

/// `"guessing"` / `"revealed"`, or `undefined` before `start_game()`.
#[wasm_bindgen]
pub fn current_phase() -> Option<String> {
    app::phase().map(str::to_string)
}

#[wasm_bindgen]
pub fn current_doom_level() -> Option<u32> {
    app::doom_level()
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
