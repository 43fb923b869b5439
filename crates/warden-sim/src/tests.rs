//! Tests for the simulation engine, agent, animator and behavior systems.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warden_core::commands::CharacterCommand;
use warden_core::enums::{SimPhase, StateKind};
use warden_core::events::CharacterEvent;
use warden_core::state::{CharacterView, WorldSnapshot};
use warden_core::types::Position;
use warden_core::ConfigError;
use warden_fsm::{AnimationTrigger, Blackboard, NavigationAgent};

use crate::agent::SteeringAgent;
use crate::animator::CrossFadeAnimator;
use crate::config::{AgentConfig, SimConfig};
use crate::engine::SimulationEngine;
use crate::error::SimError;
use crate::world_setup::random_route;

fn square_route() -> Vec<Position> {
    vec![
        Position::new(0.0, 0.0, 0.0),
        Position::new(2.0, 0.0, 0.0),
        Position::new(2.0, 2.0, 0.0),
        Position::new(0.0, 2.0, 0.0),
    ]
}

fn character(snap: &WorldSnapshot, id: u32) -> &CharacterView {
    snap.characters
        .iter()
        .find(|c| c.character_id == id)
        .expect("character in snapshot")
}

// ---- Agent ----

#[test]
fn test_agent_pending_then_moves() {
    let config = AgentConfig {
        speed: 1.0,
        stopping_distance: 0.1,
        path_latency_ticks: 2,
    };
    let mut agent = SteeringAgent::new(config, Position::default()).unwrap();
    agent.set_destination(Position::new(10.0, 0.0, 0.0));
    assert!(agent.path_pending(), "pending right after a new destination");

    agent.step(1.0);
    agent.step(1.0);
    assert!(!agent.path_pending());
    assert_eq!(agent.position(), Position::default(), "no motion while pending");

    agent.step(1.0);
    assert!((agent.position().x - 1.0).abs() < 1e-9);
    assert!((agent.remaining_distance() - 9.0).abs() < 1e-9);
}

#[test]
fn test_agent_reset_path_stops() {
    let mut agent = SteeringAgent::new(AgentConfig::default(), Position::default()).unwrap();
    agent.set_destination(Position::new(5.0, 0.0, 0.0));
    agent.reset_path();
    assert_eq!(agent.destination(), None);
    assert!(!agent.path_pending());
    assert_eq!(agent.remaining_distance(), 0.0);
    agent.step(1.0);
    assert_eq!(agent.position(), Position::default());
}

#[test]
fn test_agent_rejects_bad_config() {
    let config = AgentConfig {
        speed: 0.0,
        ..Default::default()
    };
    let err = SteeringAgent::new(config, Position::default()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { field: "speed", .. }));

    let config = AgentConfig {
        stopping_distance: -1.0,
        ..Default::default()
    };
    let err = SteeringAgent::new(config, Position::default()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "stopping_distance",
            ..
        }
    ));
}

// ---- Animator ----

#[test]
fn test_animator_cross_fade_progress() {
    let mut anim = CrossFadeAnimator::default();
    anim.cross_fade("Idle", 0.0);
    assert_eq!(anim.blend(), 1.0, "zero-length blend is instant");
    assert_eq!(anim.previous(), None);

    anim.cross_fade("Walk_N", 0.2);
    assert_eq!(anim.clip(), "Walk_N");
    assert_eq!(anim.previous(), Some("Idle"));
    assert_eq!(anim.blend(), 0.0);

    anim.advance(0.1);
    assert!((anim.blend() - 0.5).abs() < 1e-9);
    anim.advance(0.15);
    assert_eq!(anim.blend(), 1.0);
    assert_eq!(anim.previous(), None, "outgoing clip dropped once blended");
    assert_eq!(anim.fades(), 2);
}

// ---- Spawning ----

#[test]
fn test_spawn_patroller_without_route_fails() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let err = engine
        .spawn_patroller("ghost", Blackboard::default())
        .unwrap_err();
    assert_eq!(err, SimError::Config(ConfigError::NoWaypoints));
    assert_eq!(engine.character_count(), 0, "nothing spawned on failure");

    let err = engine
        .spawn_patroller("ghost", Blackboard::with_waypoints(Vec::new()))
        .unwrap_err();
    assert_eq!(err, SimError::Config(ConfigError::NoWaypoints));
    assert_eq!(engine.character_count(), 0);
}

#[test]
fn test_spawn_with_bad_agent_config_fails() {
    let mut engine = SimulationEngine::new(SimConfig {
        agent: AgentConfig {
            speed: -3.0,
            ..Default::default()
        },
        ..Default::default()
    });
    let err = engine
        .spawn_patroller("slow", Blackboard::with_waypoints(square_route()))
        .unwrap_err();
    assert!(matches!(err, SimError::Config(ConfigError::InvalidValue { .. })));
    assert_eq!(engine.character_count(), 0);
}

#[test]
fn test_spawn_emits_entry_events() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let id = engine
        .spawn_patroller("guard", Blackboard::with_waypoints(square_route()))
        .unwrap();
    assert_eq!(id, 0);

    let snap = engine.tick();
    assert!(snap
        .events
        .contains(&CharacterEvent::Spawned { character_id: 0 }));
    assert!(snap.events.contains(&CharacterEvent::CrossFade {
        character_id: 0,
        clip: "Walk_N".into(),
        blend_secs: 0.1,
    }));
    assert!(snap.events.contains(&CharacterEvent::DestinationSet {
        character_id: 0,
        destination: square_route()[0],
    }));

    let view = character(&snap, 0);
    assert_eq!(view.state, StateKind::Patrol);
    assert_eq!(view.waypoint_index, Some(0));
    assert_eq!(view.clip, "Walk_N");

    // Events are drained each tick
    let snap = engine.tick();
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, CharacterEvent::Spawned { .. })));
}

#[test]
fn test_snapshot_without_tick() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine
        .spawn_patroller("guard", Blackboard::with_waypoints(square_route()))
        .unwrap();

    let snap = engine.snapshot();
    assert_eq!(snap.time.tick, 0);
    assert!(snap
        .events
        .contains(&CharacterEvent::Spawned { character_id: 0 }));
    assert_eq!(character(&snap, 0).position, square_route()[0]);
    assert_eq!(character(&snap, 0).blend, 0.0);

    // Events were drained, time still stands
    let snap = engine.snapshot();
    assert!(snap.events.is_empty());
    assert_eq!(snap.time.tick, 0);
}

#[test]
fn test_character_ids_increment() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let route = Blackboard::with_waypoints(square_route());
    assert_eq!(engine.spawn_patroller("a", route.clone()).unwrap(), 0);
    // A failed spawn does not consume an id
    assert!(engine.spawn_patroller("x", Blackboard::default()).is_err());
    assert_eq!(engine.spawn_patroller("b", route).unwrap(), 1);
    assert_eq!(engine.character_count(), 2);
}

// ---- Patrol in the world ----

#[test]
fn test_patrol_visits_waypoints_in_order_and_wraps() {
    let route = square_route();
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine
        .spawn_patroller("guard", Blackboard::with_waypoints(route.clone()))
        .unwrap();

    let stopping = engine.config().agent.stopping_distance;
    let mut visited = vec![0usize];
    for _ in 0..400 {
        let snap = engine.tick();
        let view = character(&snap, 0);
        let index = view.waypoint_index.unwrap();
        let last = *visited.last().unwrap();
        if index != last {
            // Advanced only after reaching the previous waypoint
            assert!(view.position.distance_to(&route[last]) <= stopping + 1e-9);
            assert_eq!(view.destination, Some(route[index]));
            visited.push(index);
        }
    }

    assert!(visited.len() >= 6, "visited {visited:?}");
    assert_eq!(&visited[..6], &[0, 1, 2, 3, 0, 1]);
}

#[test]
fn test_no_advance_while_path_pending() {
    let mut engine = SimulationEngine::new(SimConfig {
        agent: AgentConfig {
            path_latency_ticks: 5,
            ..Default::default()
        },
        ..Default::default()
    });
    engine
        .spawn_patroller("guard", Blackboard::with_waypoints(square_route()))
        .unwrap();

    // Spawned on waypoint 0, but the path is still being computed
    for _ in 0..5 {
        let snap = engine.tick();
        assert_eq!(character(&snap, 0).waypoint_index, Some(0));
    }
    let snap = engine.tick();
    assert_eq!(character(&snap, 0).waypoint_index, Some(1));
}

#[test]
fn test_walk_blend_completes() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine
        .spawn_patroller("guard", Blackboard::with_waypoints(square_route()))
        .unwrap();
    let snap = engine.tick();
    assert!(character(&snap, 0).blend < 1.0);
    for _ in 0..4 {
        engine.tick();
    }
    let snap = engine.tick();
    assert_eq!(character(&snap, 0).blend, 1.0);
}

// ---- Commands ----

#[test]
fn test_halt_then_patrol_restarts_route() {
    let route = square_route();
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine
        .spawn_patroller("guard", Blackboard::with_waypoints(route.clone()))
        .unwrap();
    for _ in 0..40 {
        engine.tick();
    }

    engine.queue_command(CharacterCommand::Halt { character_id: 0 });
    let snap = engine.tick();
    let view = character(&snap, 0);
    assert_eq!(view.state, StateKind::Idle);
    assert_eq!(view.destination, None);
    assert_eq!(view.waypoint_index, None);
    assert_eq!(view.clip, "Idle");
    assert!(snap.events.contains(&CharacterEvent::StateChanged {
        character_id: 0,
        from: StateKind::Patrol,
        to: StateKind::Idle,
    }));

    let parked = view.position;
    for _ in 0..20 {
        let snap = engine.tick();
        assert_eq!(character(&snap, 0).position, parked, "idle characters stay put");
    }

    engine.queue_command(CharacterCommand::Patrol { character_id: 0 });
    let snap = engine.tick();
    let view = character(&snap, 0);
    assert_eq!(view.state, StateKind::Patrol);
    assert_eq!(view.waypoint_index, Some(0), "fresh patrol starts over");
    assert_eq!(view.destination, Some(route[0]));
}

#[test]
fn test_patrol_command_without_route_keeps_state() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let id = engine
        .spawn_character("sentry", Position::default(), Blackboard::default(), StateKind::Idle)
        .unwrap();

    let err = engine
        .apply(CharacterCommand::Patrol { character_id: id })
        .unwrap_err();
    assert_eq!(err, SimError::Config(ConfigError::NoWaypoints));

    // Same request through the queue is logged and dropped
    engine.queue_command(CharacterCommand::Patrol { character_id: id });
    let snap = engine.tick();
    assert_eq!(character(&snap, id).state, StateKind::Idle);
}

#[test]
fn test_unknown_character() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let err = engine
        .apply(CharacterCommand::Halt { character_id: 99 })
        .unwrap_err();
    assert_eq!(err, SimError::UnknownCharacter(99));
}

#[test]
fn test_pause_and_resume() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine
        .spawn_patroller("guard", Blackboard::with_waypoints(square_route()))
        .unwrap();
    engine.tick();
    engine.tick();

    engine.queue_command(CharacterCommand::Pause);
    let snap = engine.tick();
    assert_eq!(snap.phase, SimPhase::Paused);
    assert_eq!(snap.time.tick, 2);
    let frozen = character(&snap, 0).position;
    let snap = engine.tick();
    assert_eq!(character(&snap, 0).position, frozen);

    engine.queue_command(CharacterCommand::Resume);
    let snap = engine.tick();
    assert_eq!(snap.phase, SimPhase::Running);
    assert_eq!(snap.time.tick, 3);
}

// ---- Determinism ----

fn run_random(seed: u64, ticks: usize) -> Vec<String> {
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    for i in 0..3 {
        engine
            .spawn_random_patroller(format!("guard-{i}"), Position::new(i as f64 * 50.0, 0.0, 0.0))
            .unwrap();
    }
    (0..ticks)
        .map(|_| serde_json::to_string(&engine.tick()).unwrap())
        .collect()
}

#[test]
fn test_determinism_same_seed() {
    assert_eq!(run_random(12345, 300), run_random(12345, 300));
}

#[test]
fn test_determinism_different_seeds() {
    assert_ne!(run_random(111, 1), run_random(222, 1));
}

#[test]
fn test_random_route_shape() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let center = Position::new(100.0, -50.0, 3.0);
    let route = random_route(&mut rng, center, 20.0, 6);
    assert_eq!(route.len(), 6);
    for p in &route {
        let r = center.horizontal_distance_to(p);
        assert!((12.0 - 1e-9..=20.0 + 1e-9).contains(&r), "radius {r}");
        assert_eq!(p.z, center.z);
    }
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine
        .spawn_patroller("guard", Blackboard::with_waypoints(square_route()))
        .unwrap();
    let snap = engine.tick();
    let json = serde_json::to_string(&snap).unwrap();
    let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.characters.len(), 1);
    assert_eq!(back.characters[0].name, "guard");
}

#[test]
fn test_sim_config_from_partial_json() {
    let config: SimConfig =
        serde_json::from_str(r#"{"seed":7,"agent":{"speed":1.5}}"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.agent.speed, 1.5);
    assert_eq!(config.agent.stopping_distance, AgentConfig::default().stopping_distance);
    assert_eq!(config.patrol.walk_clip, "Walk_N");
}
