use hole_swallow::core::{
    ContactConfig, GameConfig, GameSession, RemovalReason, SpawnConfig, SwallowEventKind,
};
use hole_swallow::error::GameError;
use hole_swallow::math::Vector3;
use approx::assert_relative_eq;

const DT: f32 = 1.0 / 60.0;

fn seeded(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

/// A handful of objects spawned straight above the zone's start position
fn objects_over_zone(count: usize) -> GameConfig {
    GameConfig {
        spawn: SpawnConfig {
            pool_capacity: 10,
            object_count: count,
            spawn_half_width: 0.0,
            ..SpawnConfig::default()
        },
        contact: ContactConfig {
            max_contacts: 64,
            ..ContactConfig::default()
        },
        ..seeded(3)
    }
}

#[test]
fn test_new_session() {
    let session = GameSession::new(seeded(1)).unwrap();

    assert!(!session.is_running());
    assert_eq!(session.live_count(), 100);
    assert_eq!(session.score().get(), 0);
    assert_eq!(session.elapsed(), 0.0);
    assert_relative_eq!(session.zone().get_radius(), 7.0);
    assert!(!session.is_cleared());
}

#[test]
fn test_invalid_configs_rejected() {
    let mut config = seeded(1);
    config.swallow.remove_threshold = 0.9;
    assert!(matches!(GameSession::new(config), Err(GameError::InvalidConfig(_))));

    let mut config = seeded(1);
    config.contact.max_contacts = 50;
    assert!(matches!(GameSession::new(config), Err(GameError::InvalidConfig(_))));

    let mut config = seeded(1);
    config.max_time_step = 0.0;
    assert!(matches!(GameSession::new(config), Err(GameError::InvalidConfig(_))));

    let mut config = seeded(1);
    config.spawn.object_count = 101;
    assert_eq!(
        GameSession::new(config).unwrap_err(),
        GameError::CapacityExceeded { requested: 101, capacity: 100 }
    );
}

#[test]
fn test_paused_tick_only_moves_zone() {
    let mut session = GameSession::new(seeded(2)).unwrap();
    let before: Vec<Vector3> = session.pool().iter().map(|(_, o)| o.position()).collect();

    session.set_movement(false, false, false, true);
    let report = session.tick(0.5);

    assert!(!report.simulated);
    assert_eq!(session.elapsed(), 0.0);
    assert_relative_eq!(session.zone().get_position().x, 5.0, epsilon = 1e-5);

    let after: Vec<Vector3> = session.pool().iter().map(|(_, o)| o.position()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_running_tick_advances_timer() {
    let mut session = GameSession::new(seeded(2)).unwrap();
    session.start();
    assert!(session.is_running());

    for _ in 0..30 {
        let report = session.tick(DT);
        assert!(report.simulated);
    }
    assert_relative_eq!(session.elapsed(), 0.5, epsilon = 1e-4);

    // Spawned objects fall under gravity
    assert!(session.pool().iter().any(|(_, o)| o.body().get_linear_velocity().y < 0.0));

    session.pause();
    session.tick(DT);
    assert_relative_eq!(session.elapsed(), 0.5, epsilon = 1e-4);
}

#[test]
fn test_long_frames_are_clamped() {
    let mut session = GameSession::new(seeded(4)).unwrap();
    session.start();

    let report = session.tick(5.0);
    assert_relative_eq!(report.dt, 1.0);
    assert_relative_eq!(session.elapsed(), 1.0);

    let report = session.tick(-1.0);
    assert_eq!(report.dt, 0.0);
}

#[test]
fn test_zone_swallows_everything_above_it() {
    let config = objects_over_zone(5);
    let start_radius = config.zone.start_radius;
    let growth = config.swallow.radius_growth;

    let mut session = GameSession::new(config).unwrap();
    session.start();

    let mut removed_events = 0;
    let mut radius = session.zone().get_radius();
    for _ in 0..600 {
        let report = session.tick(DT);

        // Radius never shrinks, and grows exactly when something was removed
        let new_radius = session.zone().get_radius();
        assert!(new_radius >= radius);
        assert_eq!(new_radius > radius, report.removed > 0);
        radius = new_radius;

        for event in session.drain_events() {
            if let SwallowEventKind::Removed(reason) = event.kind {
                assert_eq!(reason, RemovalReason::Swallowed);
                removed_events += 1;
            }
        }

        if session.is_cleared() {
            break;
        }
    }

    assert!(session.is_cleared());
    assert_eq!(removed_events, 5);
    assert_eq!(session.score().get(), 5);
    assert_relative_eq!(session.zone().get_radius(), start_radius + 5.0 * growth);
}

#[test]
fn test_distant_objects_left_alone() {
    let mut config = objects_over_zone(3);
    config.zone.start_position = Vector3::new(50.0, 0.0, 50.0);
    let mut session = GameSession::new(config).unwrap();
    session.start();

    for _ in 0..120 {
        let report = session.tick(DT);
        assert_eq!(report.pulled, 0);
        assert_eq!(report.removed, 0);
    }
    assert_eq!(session.live_count(), 3);
    assert_eq!(session.score().get(), 0);
}

#[test]
fn test_reset_restores_start_state() {
    let mut session = GameSession::new(objects_over_zone(4)).unwrap();
    session.start();
    session.set_movement(true, false, false, false);
    for _ in 0..300 {
        session.tick(DT);
    }
    assert!(session.score().get() > 0);

    session.reset().unwrap();
    assert!(!session.is_running());
    assert_eq!(session.score().get(), 0);
    assert_eq!(session.elapsed(), 0.0);
    assert_eq!(session.live_count(), 4);
    assert_relative_eq!(session.zone().get_radius(), 7.0);
    assert_relative_eq!(session.zone().get_position(), Vector3::new(0.0, 0.1, 0.0));
    assert!(session.zone().movement().is_empty());
    assert!(session.events().is_empty());
}
