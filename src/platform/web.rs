//! Browser collaborators (wasm32 only)

use std::time::Duration;

use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::clock::TickDriver;
use crate::highscore::KeyValueStore;
use crate::renderer::{ElementKind, VisualSurface};

/// Board, score and high-score elements looked up in the page
pub struct DomSurface {
    window: Window,
    document: Document,
    board: Element,
    score: Element,
    high_score: Element,
}

impl DomSurface {
    /// Expects `#board`, `#score` and `#highScore` in the page
    pub fn from_window(window: &Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let find = |selector: &str| -> Result<Element, JsValue> {
            document
                .query_selector(selector)?
                .ok_or_else(|| JsValue::from_str(&format!("missing element {}", selector)))
        };
        let board = find("#board")?;
        let score = find("#score")?;
        let high_score = find("#highScore")?;

        Ok(Self {
            window: window.clone(),
            document,
            board,
            score,
            high_score,
        })
    }
}

impl VisualSurface for DomSurface {
    type Handle = Element;

    fn board(&self) -> Element {
        self.board.clone()
    }

    fn score_label(&self) -> Element {
        self.score.clone()
    }

    fn high_score_label(&self) -> Element {
        self.high_score.clone()
    }

    fn create_element(&mut self, kind: ElementKind) -> Option<Element> {
        let element = match self.document.create_element("div") {
            Ok(element) => element,
            Err(e) => {
                log::error!("createElement failed: {:?}", e);
                return None;
            }
        };
        match kind {
            ElementKind::SnakeHead => {
                let _ = element.set_attribute("class", "snakeSquare");
                element.set_id("snake-head");
            }
            ElementKind::SnakeSegment => {
                let _ = element.set_attribute("class", "snakeSquare");
            }
            ElementKind::Reward => element.set_id("apple"),
        }
        Some(element)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn remove_all_children(&mut self, parent: &Element) {
        while let Some(child) = parent.first_child() {
            if parent.remove_child(&child).is_err() {
                break;
            }
        }
    }

    fn set_position(&mut self, handle: &Element, x_percent: f32, y_percent: f32) {
        if let Some(element) = handle.dyn_ref::<HtmlElement>() {
            let style = element.style();
            let _ = style.set_property("left", &format!("{}%", x_percent));
            let _ = style.set_property("top", &format!("{}%", y_percent));
        }
    }

    fn set_text(&mut self, handle: &Element, text: &str) {
        handle.set_text_content(Some(text));
    }

    fn notify(&mut self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

/// `sessionStorage`, or nothing when the browser refuses access
pub struct SessionStore {
    storage: Option<Storage>,
}

impl SessionStore {
    pub fn from_window(window: &Window) -> Self {
        let storage = window.session_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("sessionStorage unavailable, high score will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to store {}: {:?}", key, e);
            }
        }
    }
}

/// `setInterval` / `setTimeout` driver
///
/// Callbacks are attached after construction because they close over the
/// session that in turn drives this clock.
pub struct BrowserClock {
    window: Window,
    on_tick: Option<Function>,
    on_restart: Option<Function>,
    interval: Option<i32>,
}

impl BrowserClock {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            on_tick: None,
            on_restart: None,
            interval: None,
        }
    }

    pub fn set_callbacks(&mut self, on_tick: Function, on_restart: Function) {
        self.on_tick = Some(on_tick);
        self.on_restart = Some(on_restart);
    }
}

impl TickDriver for BrowserClock {
    fn start_ticking(&mut self, period: Duration) {
        // Never leave a second interval running
        self.stop_ticking();
        let Some(callback) = &self.on_tick else {
            log::warn!("Tick callback not attached");
            return;
        };
        let millis = period.as_millis() as i32;
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(callback, millis)
        {
            Ok(id) => self.interval = Some(id),
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
    }

    fn stop_ticking(&mut self) {
        if let Some(id) = self.interval.take() {
            self.window.clear_interval_with_handle(id);
        }
    }

    fn schedule_restart(&mut self, delay: Duration) {
        let Some(callback) = &self.on_restart else {
            log::warn!("Restart callback not attached");
            return;
        };
        let millis = delay.as_millis() as i32;
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, millis)
        {
            log::error!("setTimeout failed: {:?}", e);
        }
    }
}
