//! `wasm-bindgen` exports for the Contact terminal.

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;

use crate::runner_core::RunnerCore;

fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let global = js_sys::global();
            if let Ok(console) = Reflect::get(&global, &"console".into()) {
                if let Ok(error) = Reflect::get(&console, &"error".into()) {
                    if let Ok(f) = error.dyn_into::<js_sys::Function>() {
                        let _ = f.call1(&console, &JsValue::from_str(&format!("{info}")));
                    }
                }
            }
        }));
    });
}

fn to_js_array<S: AsRef<str>>(items: &[S]) -> Array {
    let arr = Array::new_with_length(items.len() as u32);
    for (i, item) in items.iter().enumerate() {
        arr.set(i as u32, JsValue::from_str(item.as_ref()));
    }
    arr
}

/// Contact terminal for the browser.
///
/// Host-driven: JavaScript forwards keystrokes and frame time, then reads
/// the transcript and cursor state back to render the window.
#[wasm_bindgen]
pub struct ContactTerminal {
    inner: RunnerCore,
}

#[wasm_bindgen]
impl ContactTerminal {
    /// Create a terminal, optionally from a JSON site config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        install_panic_hook();
        Self {
            inner: RunnerCore::new(config_json.as_deref()),
        }
    }

    /// Submit a line. Returns `"replied"`, `"cleared"` or `"not_found"`.
    pub fn submit(&mut self, line: &str) -> String {
        self.inner.submit(line).to_owned()
    }

    /// Submit the current input line and clear it.
    #[wasm_bindgen(js_name = submitPending)]
    pub fn submit_pending(&mut self) -> String {
        self.inner.submit_pending().to_owned()
    }

    /// Append one typed character to the input line.
    #[wasm_bindgen(js_name = pushChar)]
    pub fn push_char(&mut self, c: char) {
        self.inner.push_char(c);
    }

    pub fn backspace(&mut self) -> bool {
        self.inner.backspace()
    }

    #[wasm_bindgen(js_name = setInput)]
    pub fn set_input(&mut self, input: &str) {
        self.inner.set_input(input);
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self) {
        self.inner.key_down();
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self) {
        self.inner.key_up();
    }

    /// Advance the blink clock by `dt_ms` milliseconds.
    #[wasm_bindgen(js_name = advanceTime)]
    pub fn advance_time(&mut self, dt_ms: f64) {
        self.inner.advance_time_ms(dt_ms);
    }

    #[wasm_bindgen(js_name = cursorVisible)]
    pub fn cursor_visible(&self) -> bool {
        self.inner.cursor_visible()
    }

    /// Transcript lines, oldest first.
    pub fn transcript(&self) -> Array {
        to_js_array(self.inner.transcript())
    }

    pub fn input(&self) -> String {
        self.inner.input().to_owned()
    }

    pub fn prompt(&self) -> String {
        self.inner.prompt().to_owned()
    }

    #[wasm_bindgen(js_name = windowTitle)]
    pub fn window_title(&self) -> String {
        self.inner.window_title().to_owned()
    }

    #[wasm_bindgen(js_name = profilesJson)]
    pub fn profiles_json(&self) -> String {
        self.inner.profiles_json()
    }

    #[wasm_bindgen(js_name = contestsJson)]
    pub fn contests_json(&self) -> String {
        self.inner.contests_json()
    }

    /// Drain accumulated log lines.
    #[wasm_bindgen(js_name = takeLogs)]
    pub fn take_logs(&mut self) -> Array {
        to_js_array(&self.inner.take_logs())
    }
}
