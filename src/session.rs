//! Game session controller
//!
//! Owns everything for one play-through and drives the
//! `Initializing → Running → Ending → Initializing` cycle. There is no pause.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::clock::TickDriver;
use crate::highscore::{HighScore, KeyValueStore};
use crate::input::InputMapper;
use crate::renderer::{BoardView, VisualSurface};
use crate::settings::Settings;
use crate::sim::{GameState, Terminal, TickOutcome, tick};

/// Announcement shown when a session beat the stored best
pub const NEW_HIGH_SCORE_MESSAGE: &str = "New High Score!";

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Building a fresh snake and reward
    Initializing,
    /// Tick driver active
    Running,
    /// Collision happened; waiting for the restart timer
    Ending,
}

pub struct GameSession<V: VisualSurface, S: KeyValueStore> {
    settings: Settings,
    state: GameState,
    phase: SessionPhase,
    view: BoardView<V>,
    high_score: HighScore<S>,
    input: InputMapper,
    /// Seeds each new session's RNG
    seeds: Pcg32,
    /// A reward in this session pushed the stored best up
    set_record: bool,
    sessions_started: u32,
}

impl<V: VisualSurface, S: KeyValueStore> GameSession<V, S> {
    pub fn new(settings: Settings, surface: V, store: S, seed: u64) -> Self {
        let mut seeds = Pcg32::seed_from_u64(seed);
        let state = Self::fresh_state(&settings, seeds.next_u64());
        let input = InputMapper::new(settings.keys);
        Self {
            settings,
            state,
            phase: SessionPhase::Initializing,
            view: BoardView::new(surface),
            high_score: HighScore::new(store),
            input,
            seeds,
            set_record: false,
            sessions_started: 0,
        }
    }

    fn fresh_state(settings: &Settings, seed: u64) -> GameState {
        GameState::new(settings.grid(), settings.spawn, settings.initial_direction, seed)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> &BoardView<V> {
        &self.view
    }

    pub fn high_score(&self) -> &HighScore<S> {
        &self.high_score
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Begin a brand-new session and start ticking
    pub fn start(&mut self, driver: &mut impl TickDriver) {
        self.phase = SessionPhase::Initializing;
        if self.sessions_started > 0 {
            self.state = Self::fresh_state(&self.settings, self.seeds.next_u64());
        }
        self.sessions_started += 1;
        self.set_record = false;

        self.view.sync(&self.state);
        self.view.show_score(self.state.score);
        self.refresh_high_score();

        driver.start_ticking(self.settings.tick_period());
        self.phase = SessionPhase::Running;
        log::info!(
            "Session {} started (seed {}, reward at {:?})",
            self.sessions_started,
            self.state.seed,
            self.state.reward
        );
    }

    /// One tick of the driver. Returns None when no session is running.
    pub fn on_tick(&mut self, driver: &mut impl TickDriver) -> Option<TickOutcome> {
        if self.phase != SessionPhase::Running {
            log::debug!("Tick ignored in {:?}", self.phase);
            return None;
        }

        let outcome = tick(&mut self.state);
        self.view.sync(&self.state);

        if outcome.ate_reward {
            self.view.show_score(self.state.score);
            self.refresh_high_score();
        }

        if let Some(terminal) = outcome.terminal {
            self.end(driver, terminal);
        }

        Some(outcome)
    }

    /// Stop ticking, clear the board and schedule the next session
    fn end(&mut self, driver: &mut impl TickDriver, terminal: Terminal) {
        self.phase = SessionPhase::Ending;
        // Cancel before scheduling so only one tick driver ever exists
        driver.stop_ticking();
        self.view.clear();
        self.refresh_high_score();
        if self.set_record {
            self.view.notify(NEW_HIGH_SCORE_MESSAGE);
        }
        driver.schedule_restart(self.settings.restart_delay());

        log::info!(
            "Session {} ended by {:?} after {} ticks with score {}",
            self.sessions_started,
            terminal,
            self.state.ticks,
            self.state.score
        );
    }

    /// Restart timer fired
    pub fn on_restart(&mut self, driver: &mut impl TickDriver) {
        if self.phase != SessionPhase::Ending {
            log::debug!("Restart ignored in {:?}", self.phase);
            return;
        }
        self.start(driver);
    }

    pub fn on_key(&mut self, key_code: u32) -> bool {
        self.input.on_key(key_code, &mut self.state.snake)
    }

    pub fn on_touch_start(&mut self, point: Option<Vec2>) {
        self.input.on_touch_start(point);
    }

    pub fn on_touch_move(&mut self, point: Option<Vec2>) -> bool {
        self.input.on_touch_move(point, &mut self.state.snake)
    }

    fn refresh_high_score(&mut self) {
        let update = self.high_score.reconcile(self.state.score);
        self.set_record |= update.new_record;
        self.view.show_high_score(update.best);
    }
}
