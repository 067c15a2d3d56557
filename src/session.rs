//! One play session: state, input and the frame clock
//!
//! The host calls [`Session::frame`] once per displayed frame. Ticks run at a
//! fixed rate from an accumulator, so per-tick speeds mean the same thing at
//! any display refresh rate.

use crate::autopilot::Autopilot;
use crate::consts::*;
use crate::hud::HudSnapshot;
use crate::input::InputState;
use crate::renderer::{Scene, build_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

pub struct Session {
    state: GameState,
    input: InputState,
    settings: Settings,
    accumulator: f32,
}

impl Session {
    /// Start a session with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        let mut state = GameState::new(seed);
        state.controller = settings.controller();
        Self {
            state,
            input: InputState::new(),
            settings,
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Where the windowing layer writes key and pointer events
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Let the demo bot write this frame's input
    pub fn autopilot(&mut self, pilot: &mut Autopilot) {
        pilot.drive(&self.state, &mut self.input, &self.settings.bindings);
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Advance by one displayed frame of `dt` seconds. Returns ticks run.
    pub fn frame(&mut self, dt: f32) -> u32 {
        if !self.state.is_running() {
            return 0;
        }
        if !dt.is_finite() {
            log::warn!("Ignoring non-finite frame time {}", dt);
            return 0;
        }

        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
            if !self.state.is_running() {
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    /// Sample input and run exactly one tick
    pub fn step(&mut self) {
        if !self.state.is_running() {
            return;
        }
        let input = self.input.sample(&self.settings.bindings);
        tick(&mut self.state, &input);

        for event in &self.state.events {
            if let GameEvent::SessionEnded { score, ticks } = event {
                log::info!("Session over: score {} after {} ticks", score, ticks);
            }
        }
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::from_state(&self.state)
    }

    pub fn scene(&self) -> Scene {
        build_scene(&self.state)
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    /// Tear the session down, returning the final HUD numbers
    pub fn end(self) -> HudSnapshot {
        let hud = self.hud();
        log::info!(
            "Session closed (score {}, {} ticks)",
            hud.score,
            self.state.time_ticks
        );
        hud
    }
}
