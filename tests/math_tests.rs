use hole_swallow::math::{self, Matrix3, Quaternion, Transform, Vector3};
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
    assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
    assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * v1, v1 * 2.0);
    assert_eq!(-v1, Vector3::new(-1.0, -2.0, -3.0));

    assert_eq!(v1.dot(&v2), 32.0);
    assert_eq!(v1.cross(&v2), Vector3::new(-3.0, 6.0, -3.0));

    let length = v1.length();
    assert_relative_eq!(length, 14.0f32.sqrt());

    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized, v1 / length);

    // Zero vectors stay zero instead of producing NaN
    assert!(Vector3::zero().normalize().is_zero());

    assert_relative_eq!(Vector3::new(3.0, 0.0, 4.0).distance(&Vector3::zero()), 5.0);
    assert_eq!(Vector3::new(1.0, 5.0, -2.0).horizontal(), Vector3::new(1.0, 0.0, -2.0));
}

#[test]
fn test_quaternion_operations() {
    let q = Quaternion::from_axis_angle(Vector3::UP, PI / 2.0);
    assert_relative_eq!(q.length(), 1.0, epsilon = 1e-6);

    // 90 degrees about +y takes +x to -z
    let rotated = q.rotate_vector(Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(rotated, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-5);

    let q_conj = q.conjugate();
    assert_eq!(q_conj.w, q.w);
    assert_eq!(q_conj.y, -q.y);

    // Composition applies the right-hand rotation first
    let q1 = Quaternion::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), PI / 4.0);
    let q2 = Quaternion::from_axis_angle(Vector3::UP, PI / 4.0);
    let v = Vector3::new(0.0, 0.0, 1.0);
    assert_relative_eq!(
        (q2 * q1).rotate_vector(v),
        q2.rotate_vector(q1.rotate_vector(v)),
        epsilon = 1e-5
    );

    // Degenerate quaternions normalize to the identity
    assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize(), Quaternion::identity());
}

#[test]
fn test_quaternion_integration() {
    // Spinning at pi/2 rad/s about y for one second in small steps
    let mut q = Quaternion::identity();
    let omega = Vector3::new(0.0, PI / 2.0, 0.0);
    for _ in 0..1000 {
        q.add_scaled_vector(omega, 0.001);
        q = q.normalize();
    }

    let rotated = q.rotate_vector(Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(rotated, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-2);
}

#[test]
fn test_matrix3_operations() {
    let m = Matrix3::new([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);

    assert_eq!(m.multiply_matrix(&Matrix3::identity()).data, m.data);

    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(m.multiply_vector(v), Vector3::new(14.0, 32.0, 50.0));

    let t = m.transpose();
    assert_eq!(t.data[0][1], m.data[1][0]);
    assert_eq!(t.data[2][0], m.data[0][2]);

    // This one is singular
    assert!(m.inverse().is_none());

    let d = Matrix3::from_diagonal(Vector3::new(2.0, 4.0, 8.0));
    let inv = d.inverse().unwrap();
    assert_relative_eq!(inv.data[0][0], 0.5);
    assert_relative_eq!(inv.data[1][1], 0.25);
    assert_relative_eq!(inv.data[2][2], 0.125);
}

#[test]
fn test_rotation_matrix_matches_quaternion() {
    let q = Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 0.7);
    let v = Vector3::new(0.3, -1.2, 2.0);

    let by_matrix = q.to_rotation_matrix().multiply_vector(v);
    assert_relative_eq!(by_matrix, q.rotate_vector(v), epsilon = 1e-5);
}

#[test]
fn test_transform_operations() {
    let position = Vector3::new(1.0, 2.0, 3.0);
    let rotation = Quaternion::from_axis_angle(Vector3::UP, PI / 2.0);
    let transform = Transform::new(position, rotation);

    // Rotate (1, 0, 0) to (0, 0, -1), then translate
    let point = transform.transform_point(Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(point, Vector3::new(1.0, 2.0, 2.0), epsilon = 1e-5);

    // Directions ignore the translation
    let direction = transform.transform_direction(Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(direction, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-5);

    let gl = Transform::from_position(position).to_gl_matrix();
    assert_eq!(&gl[12..15], &[1.0, 2.0, 3.0]);
    assert_eq!(gl[0], 1.0);
    assert_eq!(gl[15], 1.0);
}

#[test]
fn test_clamp_helpers() {
    assert_eq!(math::clamp(5.0, -1.0, 1.0), 1.0);
    assert_eq!(math::clamp(-5.0, -1.0, 1.0), -1.0);
    assert_eq!(math::clamp(0.5, -1.0, 1.0), 0.5);

    // An inverted range collapses to its midpoint
    assert_eq!(math::clamp(3.0, 2.0, -2.0), 0.0);

    assert!(math::approx_eq(1.0, 1.0 + 1e-8));
    assert!(math::approx_zero(1e-8));
}
