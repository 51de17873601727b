//! Grid Snake entry point
//!
//! Handles platform-specific initialization and wires the session to its
//! tick driver and input sources.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, TouchEvent};

    use grid_snake::platform::web::{BrowserClock, DomSurface, SessionStore};
    use grid_snake::{GameSession, Settings};

    type Session = GameSession<DomSurface, SessionStore>;

    const INTRO_MESSAGE: &str = "Use your keyboard or swipe to control the snake.";

    /// First touch point of an event, in client coordinates
    fn first_touch(event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Grid Snake starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let surface = DomSurface::from_window(&window)?;
        let store = SessionStore::from_window(&window);
        let seed = js_sys::Date::now() as u64;

        let session = Rc::new(RefCell::new(Session::new(
            Settings::default(),
            surface,
            store,
            seed,
        )));
        let clock = Rc::new(RefCell::new(BrowserClock::new(window.clone())));

        setup_clock(&session, &clock);
        setup_input_handlers(&document, &session)?;

        session.borrow_mut().start(&mut *clock.borrow_mut());

        // Blocks until dismissed
        let _ = window.alert_with_message(INTRO_MESSAGE);

        log::info!("Grid Snake running (seed {})", seed);
        Ok(())
    }

    fn setup_clock(session: &Rc<RefCell<Session>>, clock: &Rc<RefCell<BrowserClock>>) {
        let on_tick = {
            let session = session.clone();
            let clock = clock.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut clock = clock.borrow_mut();
                session.borrow_mut().on_tick(&mut *clock);
            })
        };

        let on_restart = {
            let session = session.clone();
            let clock = clock.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut clock = clock.borrow_mut();
                session.borrow_mut().on_restart(&mut *clock);
            })
        };

        clock.borrow_mut().set_callbacks(
            on_tick.as_ref().unchecked_ref::<js_sys::Function>().clone(),
            on_restart.as_ref().unchecked_ref::<js_sys::Function>().clone(),
        );
        // Registered for the lifetime of the page
        on_tick.forget();
        on_restart.forget();
    }

    fn setup_input_handlers(
        document: &web_sys::Document,
        session: &Rc<RefCell<Session>>,
    ) -> Result<(), JsValue> {
        // Keyboard (arrow keys)
        {
            let session = session.clone();
            let body = document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.key_code();
                if session.borrow_mut().on_key(code) {
                    log::debug!("Turn queued from key {}", code);
                }
            });
            body.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                session.borrow_mut().on_touch_start(first_touch(&event));
            });
            document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if session.borrow_mut().on_touch_move(first_touch(&event)) {
                    log::debug!("Turn queued from swipe");
                }
            });
            document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode runs a headless demo - use `trunk serve` for the web version");

    demo::run(3);
}

/// Headless sessions steered by a greedy autopilot
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use grid_snake::clock::{ClockEvent, ManualClock};
    use grid_snake::consts::*;
    use grid_snake::renderer::HeadlessSurface;
    use grid_snake::sim::{Direction, GameState};
    use grid_snake::{GameSession, MemoryStore, SessionPhase, Settings};

    /// Upper bound on ticks per session so a looping autopilot still ends
    const MAX_TICKS_PER_SESSION: u64 = 5_000;

    fn key_for(direction: Direction) -> u32 {
        match direction {
            Direction::Left => KEY_LEFT,
            Direction::Up => KEY_UP,
            Direction::Right => KEY_RIGHT,
            Direction::Down => KEY_DOWN,
        }
    }

    /// Head for the reward, avoiding walls and the body when possible
    fn steer(state: &GameState) -> Direction {
        let head = state.snake.head().cell;
        let target = state.reward.unwrap_or(head);
        let toward = [
            (target.column > head.column, Direction::Right),
            (target.column < head.column, Direction::Left),
            (target.row > head.row, Direction::Down),
            (target.row < head.row, Direction::Up),
        ];
        let preferred = toward.iter().filter(|(want, _)| *want).map(|(_, d)| *d);

        preferred
            .chain(Direction::ALL)
            .find(|&d| {
                let next = d.step(head);
                let allowed = state.snake.heading() == Some(d) || state.snake.can_turn(d);
                allowed && state.grid.in_bounds(next) && !state.snake.occupies(next)
            })
            .unwrap_or(state.snake.intended)
    }

    pub fn run(sessions: u32) {
        let mut clock = ManualClock::new();
        let mut session = GameSession::new(
            Settings::default(),
            HeadlessSurface::new(),
            MemoryStore::new(),
            0x5eed,
        );
        session.start(&mut clock);

        while let Some(event) = clock.next_event() {
            match event {
                ClockEvent::Tick => {
                    let direction = steer(session.state());
                    session.on_key(key_for(direction));
                    session.on_tick(&mut clock);

                    if session.phase() == SessionPhase::Running
                        && session.state().ticks >= MAX_TICKS_PER_SESSION
                    {
                        log::warn!("Session {} hit the tick cap", session.sessions_started());
                        break;
                    }
                }
                ClockEvent::Restart => {
                    if session.sessions_started() >= sessions {
                        break;
                    }
                    session.on_restart(&mut clock);
                }
            }
        }

        log::info!(
            "Demo finished: {} sessions, best score {}, {:?} simulated",
            session.sessions_started(),
            session.high_score().stored(),
            clock.elapsed
        );
    }
}
