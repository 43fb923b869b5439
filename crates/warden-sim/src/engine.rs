//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, applies character commands,
//! runs all systems, and produces `WorldSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use warden_core::commands::CharacterCommand;
use warden_core::constants::{GENERATED_ROUTE_POINTS, GENERATED_ROUTE_RADIUS};
use warden_core::enums::{SimPhase, StateKind};
use warden_core::events::CharacterEvent;
use warden_core::state::WorldSnapshot;
use warden_core::types::{Position, SimTime};
use warden_fsm::{Blackboard, StateContext};

use crate::agent::SteeringAgent;
use crate::animator::CrossFadeAnimator;
use crate::components::{Behavior, Character};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    next_character_id: u32,
    command_queue: VecDeque<CharacterCommand>,
    events: Vec<CharacterEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_character_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Spawn a character running `initial`. Returns its character id.
    ///
    /// A patrol without waypoints fails here and nothing is spawned.
    pub fn spawn_character(
        &mut self,
        name: impl Into<String>,
        position: Position,
        blackboard: Blackboard,
        initial: StateKind,
    ) -> Result<u32, SimError> {
        let character_id = self.next_character_id;
        let character = Character {
            character_id,
            name: name.into(),
        };
        let entity = world_setup::spawn_character(
            &mut self.world,
            &self.config,
            character,
            position,
            blackboard,
            initial,
        )?;
        self.next_character_id += 1;

        info!(character_id, ?initial, "spawned character");
        self.events.push(CharacterEvent::Spawned { character_id });
        if let Ok(mut query) = self
            .world
            .query_one::<(&SteeringAgent, &CrossFadeAnimator)>(entity)
        {
            if let Some((agent, animator)) = query.get() {
                systems::behavior::collect_events(
                    character_id,
                    agent,
                    animator,
                    0,
                    0,
                    &mut self.events,
                );
            }
        }
        Ok(character_id)
    }

    /// Spawn a character that patrols the blackboard's route, starting at
    /// the first waypoint.
    pub fn spawn_patroller(
        &mut self,
        name: impl Into<String>,
        blackboard: Blackboard,
    ) -> Result<u32, SimError> {
        let start = blackboard
            .waypoints
            .as_ref()
            .and_then(|w| w.first().copied())
            .unwrap_or_default();
        self.spawn_character(name, start, blackboard, StateKind::Patrol)
    }

    /// Spawn a patroller on a randomly generated loop around `center`.
    pub fn spawn_random_patroller(
        &mut self,
        name: impl Into<String>,
        center: Position,
    ) -> Result<u32, SimError> {
        let route = world_setup::random_route(
            &mut self.rng,
            center,
            GENERATED_ROUTE_RADIUS,
            GENERATED_ROUTE_POINTS,
        );
        self.spawn_patroller(name, Blackboard::with_waypoints(route))
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: CharacterCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = CharacterCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Snapshot of the current state without advancing time.
    /// Drains pending events like [`tick`](Self::tick) does.
    pub fn snapshot(&mut self) -> WorldSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Apply a command immediately.
    pub fn apply(&mut self, command: CharacterCommand) -> Result<(), SimError> {
        match command {
            CharacterCommand::Patrol { character_id } => {
                self.transition(character_id, StateKind::Patrol)
            }
            CharacterCommand::Halt { character_id } => {
                self.transition(character_id, StateKind::Idle)
            }
            CharacterCommand::Pause => {
                self.phase = SimPhase::Paused;
                Ok(())
            }
            CharacterCommand::Resume => {
                self.phase = SimPhase::Running;
                Ok(())
            }
        }
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn character_count(&self) -> usize {
        self.world.query::<&Character>().iter().count()
    }

    /// Process all queued commands. Failures are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply(command.clone()) {
                warn!(?command, %err, "command rejected");
            }
        }
    }

    /// Swap a character's state for a freshly built one of `kind`.
    ///
    /// The new state is built before the old one is exited, so a failed
    /// patrol request leaves the character doing what it was doing.
    fn transition(&mut self, character_id: u32, kind: StateKind) -> Result<(), SimError> {
        let config = &self.config;
        let events = &mut self.events;
        let (_entity, (character, behavior, agent, animator)) = self
            .world
            .query_mut::<(
                &Character,
                &mut Behavior,
                &mut SteeringAgent,
                &mut CrossFadeAnimator,
            )>()
            .into_iter()
            .find(|(_, (character, ..))| character.character_id == character_id)
            .ok_or(SimError::UnknownCharacter(character_id))?;

        let next = world_setup::build_state(kind, &behavior.blackboard, config)?;
        let issued = agent.issued();
        let fades = animator.fades();

        let from = behavior
            .machine
            .transition_to(next, &mut StateContext::new(&mut *agent, &mut *animator));

        events.push(CharacterEvent::StateChanged {
            character_id,
            from,
            to: kind,
        });
        systems::behavior::collect_events(
            character.character_id,
            agent,
            animator,
            issued,
            fades,
            events,
        );
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. State machines decide
        systems::behavior::run(&mut self.world, &mut self.events);
        // 2. Agents move
        systems::navigation::run(&mut self.world);
        // 3. Blends progress
        systems::animation::run(&mut self.world);
    }
}
