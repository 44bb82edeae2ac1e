//! Browser bindings
//!
//! The page owns the canvas, the key/touch listeners and the
//! requestAnimationFrame loop. It forwards input here, calls `tick` once per
//! frame and draws from `snapshot_json`.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialized by an earlier module instance
        return;
    }
    log::info!("Brickfall starting...");
}

/// A game instance owned by the page
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// New game for a canvas of the given size, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let config = GameConfig {
            playfield_width: width,
            playfield_height: height,
            seed: js_sys::Date::now() as u64,
            ..GameConfig::default()
        };
        let config = config.validate().unwrap_or_else(|err| {
            log::warn!("Bad canvas size, using defaults: {}", err);
            GameConfig::with_seed(js_sys::Date::now() as u64)
        });
        WebGame {
            game: Game::new(config),
        }
    }

    /// New game from a JSON `GameConfig`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> WebGame {
        WebGame {
            game: Game::new(GameConfig::load_or_default(json)),
        }
    }

    pub fn tick(&mut self) {
        self.game.tick();
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    #[wasm_bindgen(js_name = setInput)]
    pub fn set_input(&mut self, left: bool, right: bool) {
        self.game.set_input(left, right);
    }

    /// Touch/pointer x in canvas coordinates
    #[wasm_bindgen(js_name = setPaddleTargetX)]
    pub fn set_paddle_target_x(&mut self, x: f32) {
        self.game.set_paddle_target_x(x);
    }

    /// Call from the paddle image's onload with naturalHeight / naturalWidth
    #[wasm_bindgen(js_name = setPaddleAspectRatio)]
    pub fn set_paddle_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.game.set_paddle_aspect_ratio(aspect_ratio);
    }

    #[wasm_bindgen(js_name = setAutopilot)]
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.game.set_autopilot(enabled);
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    /// "playing", "won" or "lost"
    pub fn phase(&self) -> String {
        self.game.phase().as_str().to_string()
    }

    /// Overlay title once the game is over
    pub fn banner(&self) -> Option<String> {
        self.game.phase().banner().map(str::to_string)
    }

    #[wasm_bindgen(js_name = shakeTicks)]
    pub fn shake_ticks(&self) -> u32 {
        self.game.shake_ticks()
    }

    /// Everything needed to draw a frame, as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.snapshot())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}
