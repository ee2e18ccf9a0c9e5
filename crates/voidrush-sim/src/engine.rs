//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the game state, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use voidrush_core::commands::{FrameInput, PlayerCommand};
use voidrush_core::constants::COMBO_DECAY_INTERVAL;
use voidrush_core::enums::Intermission;
use voidrush_core::state::GameStateSnapshot;
use voidrush_core::types::SimTime;

use crate::config::SimConfig;
use crate::game_state::{GameState, RunFlags};
use crate::systems;
use crate::systems::upgrades::UpgradeError;
use crate::systems::wave_director;

/// Most decay ticks the combo clock may owe after a long frame.
const COMBO_CLOCK_CAP: f64 = COMBO_DECAY_INTERVAL * 4.0;

/// The simulation engine. Owns the game state and all sim bookkeeping.
pub struct SimulationEngine {
    state: GameState,
    config: SimConfig,
    command_queue: VecDeque<PlayerCommand>,
    combo_clock: f64,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: GameState::new(&config),
            config,
            command_queue: VecDeque::new(),
            combo_clock: 0.0,
        }
    }

    /// Queue a player command for processing at the start of the next frame.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one rendered frame of `raw_dt` seconds and return the
    /// resulting snapshot. The step is clamped to the configured maximum;
    /// negative or non-finite deltas count as zero.
    pub fn frame(&mut self, raw_dt: f64, input: &FrameInput) -> GameStateSnapshot {
        let raw_dt = if raw_dt.is_finite() { raw_dt.max(0.0) } else { 0.0 };
        let dt = raw_dt.min(self.config.max_frame_dt);

        self.process_commands();
        self.state.time.frame += 1;

        let frozen = self.state.flags.frozen();
        if !frozen {
            self.run_systems(input, dt);
            self.state.time.advance(dt);
        }

        // Presentation keeps running behind pause and intermission screens.
        systems::effects::run(&mut self.state, dt);
        let follow = self.state.flags.started && !self.state.flags.game_over;
        let target = follow.then_some(self.state.ship.position);
        self.state.camera.update(dt, target, &mut self.state.rng);

        if !frozen {
            self.tick_combo_clock(raw_dt);
        }

        let events = std::mem::take(&mut self.state.events);
        systems::snapshot::build_snapshot(&self.state, events)
    }

    /// Get the run flags.
    pub fn flags(&self) -> RunFlags {
        self.state.flags
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.state.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for tests and scripted tools that stage scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let result: Result<(), UpgradeError> = match command {
            PlayerCommand::Start => {
                if !self.state.flags.started {
                    self.start_run();
                }
                Ok(())
            }
            PlayerCommand::TogglePause => {
                let flags = &mut self.state.flags;
                if flags.started && !flags.game_over && flags.intermission == Intermission::None {
                    flags.paused = !flags.paused;
                }
                Ok(())
            }
            PlayerCommand::Reset => {
                self.start_run();
                Ok(())
            }
            PlayerCommand::SelectUpgrade { index } => {
                systems::upgrades::select_draft(&mut self.state, index)
                    .map(|_| wave_director::begin_next_wave(&mut self.state))
            }
            PlayerCommand::PurchaseShopItem { index } => {
                systems::upgrades::purchase(&mut self.state, index).map(|_| ())
            }
            PlayerCommand::RerollShop => systems::upgrades::reroll(&mut self.state).map(|_| ()),
            PlayerCommand::LeaveHangar => systems::upgrades::leave_hangar(&mut self.state)
                .map(|_| wave_director::begin_next_wave(&mut self.state)),
        };
        if let Err(err) = result {
            log::debug!("command rejected: {err}");
        }
    }

    /// Fresh run from wave 1. Currency carries over.
    fn start_run(&mut self) {
        self.state.reset_run();
        self.state.flags.started = true;
        self.combo_clock = 0.0;
        log::info!("run started (seed {})", self.config.seed);
        wave_director::spawn_wave(&mut self.state);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &FrameInput, dt: f64) {
        let state = &mut self.state;
        // 1. Ship steering and thrust
        systems::ship::steer(state, input, dt);
        // 2. Drone orbit and cued shots
        systems::drones::run(state, dt);
        // 3. Primary gun
        systems::ship::fire_control(state, input, dt);
        // 4. Integration (bullets, asteroids, enemy pursuit)
        systems::movement::run(state, dt);
        // 5. Edge bounces, then wrap whatever did not bounce
        systems::collision::ricochet(state);
        systems::movement::wrap_bullets(state);
        // 6. Pickup drift, attraction and collection
        systems::economy::update_pickups(state, dt);
        // 7. Scheduled tasks (enemy arrival, intermission)
        wave_director::run_scheduled(state, dt);
        // 8. Collision passes
        systems::collision::run(state, dt);
        // 9. Wave completion
        wave_director::check_completion(state);
    }

    /// Fixed-interval combo decay driven by unclamped frame time.
    fn tick_combo_clock(&mut self, raw_dt: f64) {
        self.combo_clock = (self.combo_clock + raw_dt).min(COMBO_CLOCK_CAP);
        while self.combo_clock >= COMBO_DECAY_INTERVAL {
            self.combo_clock -= COMBO_DECAY_INTERVAL;
            systems::economy::decay_combo(&mut self.state.combo);
        }
    }
}
