use hole_swallow::core::{GameConfig, GameSession, SwallowEventKind};
use hole_swallow::math::Vector3;
use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Our crate is debug, everything else is warn
const DEFAULT_FILTER: &str = "warn,hole_swallow=debug";

fn init_logging() {
    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let subscriber = Registry::default()
        .with(EnvFilter::new(filter))
        .with(fmt::layer().compact());
    tracing::subscriber::set_global_default(subscriber)
        .expect("unable to install log subscriber");
}

/// Steers the zone towards the nearest live object, like a player holding the keys
fn steer(session: &mut GameSession) {
    let zone = session.zone().get_position();
    let nearest = session
        .pool()
        .iter()
        .map(|(_, object)| object.position() - zone)
        .min_by(|a, b| a.horizontal().length().total_cmp(&b.horizontal().length()));

    let Some(offset) = nearest else {
        session.set_movement(false, false, false, false);
        return;
    };

    let dead_zone = 0.5;
    session.set_movement(
        offset.z > dead_zone,
        offset.z < -dead_zone,
        offset.x < -dead_zone,
        offset.x > dead_zone,
    );
}

fn main() {
    init_logging();

    let mut config = GameConfig::default();
    config.seed = Some(2024);
    config.spawn.object_count = 40;
    config.spawn.spawn_half_width = 40.0;

    let mut session = GameSession::new(config).expect("default configuration is valid");
    session.start();

    let time_step = 1.0 / 60.0;
    let total_frames = 60 * 120; // two minutes of game time

    for frame in 0..total_frames {
        steer(&mut session);
        let report = session.tick(time_step);

        for event in session.drain_events() {
            if let SwallowEventKind::Removed(reason) = event.kind {
                println!(
                    "[{:7.2}s] swallowed {} at {} ({:?}), score {}",
                    session.elapsed(),
                    event.object,
                    event.position,
                    reason,
                    session.score()
                );
            }
        }

        if report.contacts_exhausted {
            println!("frame {frame}: contact buffer full");
        }

        if session.is_cleared() {
            break;
        }
    }

    let zone = session.zone();
    println!();
    println!("Time:      {:.2}s", session.elapsed());
    println!("Score:     {}", session.score());
    println!("Radius:    {:.2}", zone.get_radius());
    println!("Zone at:   {}", zone.get_position());
    println!("Remaining: {}", session.live_count());
    println!(
        "Distance travelled from start: {:.2}",
        zone.get_position().distance(&Vector3::new(0.0, zone.get_position().y, 0.0))
    );
}
