//! `#[wasm_bindgen]` exports for the ledgehop platformer.
//!
//! ```text
//! game_init(levelText, configJson?)   // once
//! game_key_down / game_key_up         // from keyboard listeners
//! game_tick(dt)                       // every requestAnimationFrame
//! new Float32Array(memory.buffer, get_frame_ptr(), get_frame_len())
//! ```
//!
//! Every export other than `game_init` is a no-op (or returns a zero value) until
//! `game_init` has succeeded.

use std::cell::RefCell;

use ledgehop::{GameConfig, InputEvent, Session};
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::GameRunner;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let message = format!("{}: {}", context, err);
    log::error!("{}", message);
    JsValue::from_str(&message)
}

/// Build a session from level text and an optional JSON config override.
/// Replaces any previous session.
#[wasm_bindgen]
pub fn game_init(level_text: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref() {
        Some(json) => GameConfig::from_json(json).map_err(|e| js_error("invalid config", e))?,
        None => GameConfig::default(),
    };
    let session = Session::from_text(level_text, config).map_err(|e| js_error("cannot start session", e))?;
    let runner = GameRunner::new(session);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("ledgehop: initialized");
    Ok(())
}

/// Advance by `dt` seconds of wall-clock time. Returns the simulation steps run.
#[wasm_bindgen]
pub fn game_tick(dt: f32) -> u32 {
    with_runner(|r| r.tick(dt)).unwrap_or(0)
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

/// Menu and touch buttons: 1 = start, 2 = restart, 3 = quit.
#[wasm_bindgen]
pub fn game_custom_event(kind: u32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind }));
}

/// Forget held keys, for `blur` / `visibilitychange`.
#[wasm_bindgen]
pub fn game_blur() {
    with_runner(|r| r.release_all());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_state() -> u8 {
    with_runner(|r| r.state()).unwrap_or(0)
}

/// True once the player has quit or the session halted on an error.
#[wasm_bindgen]
pub fn is_terminated() -> bool {
    with_runner(|r| r.terminated() || r.halted()).unwrap_or(false)
}

/// Full frame snapshot as JSON, for debugging overlays.
#[wasm_bindgen]
pub fn get_snapshot_json() -> Option<String> {
    with_runner(|r| match r.snapshot_json() {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("snapshot serialization failed: {}", e);
            None
        }
    })
    .flatten()
}
