use hole_swallow::collision::{
    CollisionBox, CollisionData, CollisionDetector, Contact, ContactResolver, SequentialImpulseResolver,
};
use hole_swallow::core::{
    ContactConfig, ContactPipeline, DynamicObject, GameConfig, GameSession, ObjectHandle, ObjectPool,
    SpawnConfig,
};
use hole_swallow::error::GameError;
use hole_swallow::math::{Quaternion, Vector3};
use hole_swallow::shapes::Plane;
use hole_swallow::RigidBody;
use approx::assert_relative_eq;

fn unit_box(pool: &mut ObjectPool, position: Vector3) -> ObjectHandle {
    let object = DynamicObject::new(
        position,
        Quaternion::identity(),
        Vector3::new(0.5, 0.5, 0.5),
        &SpawnConfig::default(),
    );
    pool.insert(object).unwrap()
}

#[test]
fn test_box_on_ground_contacts() {
    let mut pool = ObjectPool::new(4);
    let handle = unit_box(&mut pool, Vector3::new(3.0, 0.5, -2.0));
    let object = pool.get(handle).unwrap();

    let mut data = CollisionData::new(16, 0.3, 0.2, 0.1);
    let added = CollisionDetector::box_and_half_space(handle, object.collision_box(), &Plane::ground(0.0), &mut data);

    // The four bottom corners touch the ground
    assert_eq!(added, 4);
    for contact in data.contacts() {
        assert_eq!(contact.object, handle);
        assert_eq!(contact.normal, Vector3::UP);
        assert_relative_eq!(contact.penetration, 0.0);
        assert_relative_eq!(contact.point.y, 0.0);
        assert_relative_eq!(contact.friction, 0.3);
        assert_relative_eq!(contact.restitution, 0.2);
    }
}

#[test]
fn test_box_near_ground_filter() {
    let plane = Plane::ground(0.0);
    let mut body = RigidBody::new_dynamic(Vector3::new(0.0, 0.55, 0.0));
    let mut collision_box = CollisionBox::new(Vector3::new(0.5, 0.5, 0.5));
    collision_box.calculate_internals(&body);

    // Lowest corner 0.05 above the ground: near, but not touching
    assert_relative_eq!(collision_box.lowest_point(), 0.05, epsilon = 1e-6);
    assert!(CollisionDetector::box_near_half_space(&collision_box, &plane, 0.1));
    assert!(!CollisionDetector::box_near_half_space(&collision_box, &plane, 0.01));

    body.set_position(Vector3::new(0.0, 3.0, 0.0));
    collision_box.calculate_internals(&body);
    assert!(!CollisionDetector::box_near_half_space(&collision_box, &plane, 0.1));
}

#[test]
fn test_tilted_box_contacts_only_sunk_corners() {
    let mut pool = ObjectPool::new(1);
    let tilted = DynamicObject::new(
        Vector3::new(0.0, 0.6, 0.0),
        Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_4),
        Vector3::new(0.5, 0.5, 0.5),
        &SpawnConfig::default(),
    );
    let handle = pool.insert(tilted).unwrap();
    let object = pool.get(handle).unwrap();

    // Standing on an edge: the two lowest corners sit ~0.107 below the ground
    let mut data = CollisionData::new(16, 0.1, 0.1, 0.1);
    let added = CollisionDetector::box_and_half_space(handle, object.collision_box(), &Plane::ground(0.0), &mut data);
    assert_eq!(added, 2);
    let depth = std::f32::consts::FRAC_1_SQRT_2 - 0.6;
    for contact in data.contacts() {
        assert_relative_eq!(contact.penetration, depth, epsilon = 1e-5);
        assert_relative_eq!(contact.point.y, 0.0, epsilon = 1e-5);
    }
}

#[test]
fn test_collision_data_stops_when_full() {
    let mut pool = ObjectPool::new(4);
    let handle = unit_box(&mut pool, Vector3::new(0.0, 0.4, 0.0));
    let object = pool.get(handle).unwrap();

    let mut data = CollisionData::new(3, 0.1, 0.1, 0.1);
    let added = CollisionDetector::box_and_half_space(handle, object.collision_box(), &Plane::ground(0.0), &mut data);
    assert_eq!(added, 3);
    assert!(!data.has_more_contacts());
    assert!(!data.add_contact(handle, Vector3::zero(), Vector3::UP, 0.1));

    data.reset(8);
    assert_eq!(data.contact_count(), 0);
    assert_eq!(data.contacts_left(), 8);
}

#[test]
fn test_captured_objects_skip_contacts() {
    let mut pool = ObjectPool::new(4);
    let grounded = unit_box(&mut pool, Vector3::new(0.0, 0.5, 0.0));
    let captured = unit_box(&mut pool, Vector3::new(5.0, 0.5, 0.0));
    pool.set_captured(captured, true);

    let mut pipeline = ContactPipeline::new(&ContactConfig::default()).unwrap();
    assert!(!pipeline.generate_contacts(&pool));
    assert_eq!(pipeline.contacts().len(), 4);
    assert!(pipeline.contacts().iter().all(|c| c.object == grounded));

    // Removed objects produce nothing either
    pool.invalidate(grounded);
    pipeline.generate_contacts(&pool);
    assert!(pipeline.contacts().is_empty());
}

#[test]
fn test_contact_buffer_exhaustion() {
    let mut pool = ObjectPool::new(4);
    for x in 0..3 {
        unit_box(&mut pool, Vector3::new(x as f32 * 3.0, 0.5, 0.0));
    }

    let config = ContactConfig {
        max_contacts: 4,
        ..ContactConfig::default()
    };
    let mut pipeline = ContactPipeline::new(&config).unwrap();
    let report = pipeline.step(&mut pool, 1.0 / 60.0);

    assert!(report.exhausted);
    assert_eq!(report.contacts, 4);

    // Fresh buffer every tick
    let report = pipeline.step(&mut pool, 1.0 / 60.0);
    assert_eq!(report.contacts, 4);
}

#[test]
fn test_step_integrates_free_fall() {
    let mut pool = ObjectPool::new(1);
    let handle = unit_box(&mut pool, Vector3::new(0.0, 10.0, 0.0));
    let mut pipeline = ContactPipeline::new(&ContactConfig::default()).unwrap();

    let dt = 0.1;
    let report = pipeline.step(&mut pool, dt);
    assert_eq!(report.contacts, 0);

    let body = pool.get(handle).unwrap().body();
    let expected_vy = -9.81 * dt * 0.95f32.powf(dt);
    assert_relative_eq!(body.get_linear_velocity().y, expected_vy, epsilon = 1e-5);
    assert_relative_eq!(body.get_position().y, 10.0 + expected_vy * dt, epsilon = 1e-5);
    assert!(body.get_accumulated_force().is_zero());
}

#[test]
fn test_resting_box_stays_on_ground() {
    let mut pool = ObjectPool::new(1);
    let handle = unit_box(&mut pool, Vector3::new(0.0, 0.5, 0.0));
    let mut pipeline = ContactPipeline::new(&ContactConfig::default()).unwrap();

    for _ in 0..120 {
        pipeline.step(&mut pool, 1.0 / 60.0);
    }

    let position = pool.get(handle).unwrap().position();
    assert!(position.y > 0.4 && position.y < 0.6, "box drifted to {position}");
    assert_relative_eq!(position.x, 0.0, epsilon = 0.05);
    assert_relative_eq!(position.z, 0.0, epsilon = 0.05);
}

#[test]
fn test_falling_box_does_not_sink() {
    let mut pool = ObjectPool::new(1);
    let handle = unit_box(&mut pool, Vector3::new(0.0, 3.0, 0.0));
    let mut pipeline = ContactPipeline::new(&ContactConfig::default()).unwrap();

    for _ in 0..300 {
        pipeline.step(&mut pool, 1.0 / 60.0);
        let lowest = pool.get(handle).unwrap().collision_box().lowest_point();
        assert!(lowest > -0.2, "box sank to {lowest}");
    }

    // Landed after five seconds
    assert!(pool.get(handle).unwrap().position().y < 1.0);
}

#[test]
fn test_custom_resolver() {
    struct Counting(usize);

    impl ContactResolver for Counting {
        fn resolve_contacts(&mut self, contacts: &mut [Contact], _pool: &mut ObjectPool, _dt: f32) {
            self.0 += contacts.len();
            assert!(self.0 <= 4);
        }
    }

    let mut pool = ObjectPool::new(1);
    unit_box(&mut pool, Vector3::new(0.0, 0.5, 0.0));

    let mut pipeline = ContactPipeline::with_resolver(&ContactConfig::default(), Box::new(Counting(0))).unwrap();
    let report = pipeline.step(&mut pool, 1.0 / 60.0);
    assert_eq!(report.contacts, 4);
}

#[test]
fn test_position_pass_lifts_every_sunk_box() {
    // More sunk boxes than configured position iterations
    let mut pool = ObjectPool::new(20);
    let handles: Vec<_> = (0..20)
        .map(|i| unit_box(&mut pool, Vector3::new(i as f32 * 2.0, 0.45, 0.0)))
        .collect();

    let mut data = CollisionData::new(80, 0.1, 0.1, 0.1);
    for &handle in &handles {
        let object = pool.get(handle).unwrap();
        CollisionDetector::box_and_half_space(handle, object.collision_box(), &Plane::ground(0.0), &mut data);
    }
    assert_eq!(data.contact_count(), 80);

    let mut resolver = SequentialImpulseResolver::new(8, 8, 0.5);
    resolver.resolve_contacts(data.contacts_mut(), &mut pool, 1.0 / 60.0);

    for handle in handles {
        let position = pool.get(handle).unwrap().position();
        assert_relative_eq!(position.y, 0.5, epsilon = 1e-4);
    }
}

#[test]
fn test_contact_buffer_must_fit_resting_pool() {
    let mut config = GameConfig::default();
    assert!(config.validate().is_ok());

    // Four corners per box resting on the ground
    config.contact.max_contacts = 4 * config.spawn.pool_capacity - 1;
    assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

    config.contact.max_contacts = 4 * config.spawn.pool_capacity;
    assert!(config.validate().is_ok());
}

#[test]
fn test_full_pool_rests_without_losing_objects() {
    // Hole disabled: only the floor fallback could remove anything
    let mut config = GameConfig {
        seed: Some(7),
        ..GameConfig::default()
    };
    config.swallow.force_scale = 0.0;
    config.swallow.capture_threshold = 0.0;
    config.swallow.remove_threshold = 0.0;

    let objects = config.spawn.object_count;
    let mut session = GameSession::new(config).unwrap();
    session.start();

    for _ in 0..600 {
        let report = session.tick(1.0 / 60.0);
        assert!(!report.contacts_exhausted);
        assert_eq!(report.removed, 0);
    }

    assert_eq!(session.live_count(), objects);
    assert_eq!(session.score().get(), 0);
}
