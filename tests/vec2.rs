use approx::assert_relative_eq;
use vml::{vec2, Vec2, VectorError};

#[test]
fn construct_from_components() {
    let v = Vec2::new(0.0, 0.0);
    assert_eq!(v.x(), 0.0);
    assert_eq!(v.y(), 0.0);
}

#[test]
fn construct_from_slice() {
    let v = Vec2::try_from_slice(&[1.0, 2.0]).unwrap();
    assert_eq!(v, vec2(1.0, 2.0));

    assert_eq!(
        Vec2::try_from_slice(&[1.0]),
        Err(VectorError::DimensionMismatch {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn update_components() {
    let mut v = Vec2::new(0.0, 0.0);
    v.set_x(1.0);
    v.set_y(2.0);
    assert_eq!(v.x(), 1.0);
    assert_eq!(v.y(), 2.0);

    // components are also assignable through the array view
    v[0] = 5.0;
    assert_eq!(v, vec2(5.0, 2.0));
}

#[test]
fn compare_vectors() {
    let v1 = vec2(0.0, 0.0);
    let v2 = vec2(0.0, 0.0);
    let v3 = vec2(1.0, 1.0);

    assert_eq!(v1, v1);
    assert_eq!(v3, v3);
    assert_eq!(v1, v2);
    assert_ne!(v2, v3);
    assert_ne!(v1, v3);
}

#[test]
fn common_initializers() {
    assert_eq!(Vec2::zero(), vec2(0.0, 0.0));
    assert_eq!(Vec2::one(), vec2(1.0, 1.0));
    assert_eq!(Vec2::unit_x(), vec2(1.0, 0.0));
    assert_eq!(Vec2::unit_y(), vec2(0.0, 1.0));
}

#[test]
fn negate() {
    let v = Vec2::one();
    assert_eq!(-v, vec2(-1.0, -1.0));
}

#[test]
fn add_and_additive_inverse() {
    let v1 = vec2(1.0, 2.0);
    let v2 = vec2(3.0, 2.0);
    assert_eq!(v1 + v2, vec2(4.0, 4.0));
    assert_eq!(v1 + -v1, Vec2::zero());

    let mut v = v1;
    v += v2;
    assert_eq!(v, vec2(4.0, 4.0));
}

#[test]
fn compound_assignment() {
    let mut v = vec2(1.0, 2.0);
    v -= vec2(3.0, 2.0);
    assert_eq!(v, vec2(-2.0, 0.0));

    v *= -2.0;
    assert_eq!(v, vec2(4.0, 0.0));
}

#[test]
fn subtract() {
    let v1 = vec2(1.0, 2.0);
    let v2 = vec2(3.0, 2.0);
    assert_eq!(v1 - v2, vec2(-2.0, 0.0));
}

#[test]
fn multiply_by_scalar_commutes() {
    let v = vec2(1.0, 2.0);
    assert_eq!(v * 3.0, vec2(3.0, 6.0));
    assert_eq!(3.0 * v, vec2(3.0, 6.0));
}

#[test]
fn divide_by_scalar() {
    let v = vec2(1.0, 2.0);
    assert_eq!(v / 3.0, vec2(1.0 / 3.0, 2.0 / 3.0));
}

#[test]
fn divide_by_zero_follows_ieee() {
    let v = vec2(1.0, -1.0) / 0.0;
    assert_eq!(v.x(), f64::INFINITY);
    assert_eq!(v.y(), f64::NEG_INFINITY);
}

#[test]
fn catmull_rom_expected_values() {
    let expected = [
        (0.0, vec2(0.0, 10.0)),
        (0.25, vec2(2.03125, 10.9375)),
        (0.5, vec2(5.0, 11.25)),
        (0.75, vec2(7.96875, 10.9375)),
        (1.0, vec2(10.0, 10.0)),
    ];
    for &(t, exp) in &expected {
        let v = Vec2::catmull_rom(
            vec2(0.0, 0.0),
            vec2(0.0, 10.0),
            vec2(10.0, 10.0),
            vec2(10.0, 0.0),
            t,
        )
        .unwrap();
        assert_eq!(v, exp, "failed for t={}", t);
    }

    for &t in &[-1.0, 2.0] {
        assert_eq!(
            Vec2::catmull_rom(
                vec2(0.0, 0.0),
                vec2(0.0, 10.0),
                vec2(10.0, 10.0),
                vec2(10.0, 0.0),
                t,
            ),
            Err(VectorError::OutOfRange { amount: t })
        );
    }
}

#[test]
fn clamp_componentwise() {
    assert_eq!(
        Vec2::clamp(vec2(1.0, 8.0), vec2(3.0, 3.0), vec2(5.0, 5.0)),
        vec2(3.0, 5.0)
    );
}

#[test]
fn distance_between_points() {
    let p1 = vec2(1.0, 3.0);
    let p2 = vec2(3.0, 1.0);
    assert_eq!(Vec2::distance(p1, p2), 8.0_f64.sqrt());
    assert_eq!(Vec2::distance_squared(p1, p2), 8.0);
}

#[test]
fn dot_product() {
    assert_eq!(Vec2::dot(vec2(1.0, 2.0), vec2(1.0, 5.0)), 11.0);
}

#[test]
fn hermite_expected_values() {
    let expected = [
        (0.0, vec2(0.2, 0.2)),
        (0.25, vec2(0.3671875, 0.353125)),
        (0.5, vec2(0.5125, 0.625)),
        (0.75, vec2(0.7015625, 0.884375)),
        (1.0, vec2(1.0, 1.0)),
    ];
    for &(t, exp) in &expected {
        let v = Vec2::hermite(
            vec2(0.2, 0.2),
            vec2(0.8, 0.2),
            vec2(1.0, 1.0),
            vec2(1.5, 0.0),
            t,
        )
        .unwrap();
        assert_eq!(v, exp, "failed for t={}", t);
    }

    for &t in &[-1.0, 2.0] {
        assert_eq!(
            Vec2::hermite(
                vec2(0.0, 0.0),
                vec2(0.0, 10.0),
                vec2(10.0, 10.0),
                vec2(10.0, 0.0),
                t,
            ),
            Err(VectorError::OutOfRange { amount: t })
        );
    }
}

#[test]
fn lerp_expected_values() {
    let a = vec2(0.0, 0.0);
    let b = vec2(1.0, 1.0);
    for &t in &[0.0, 0.25, 0.5, 0.75, 1.0] {
        assert_eq!(Vec2::lerp(a, b, t).unwrap(), vec2(t, t), "failed for t={}", t);
    }
    assert_eq!(Vec2::lerp(a, b, 0.0).unwrap(), a);
    assert_eq!(Vec2::lerp(a, b, 1.0).unwrap(), b);

    for &t in &[-1.0, 2.0] {
        assert_eq!(
            Vec2::lerp(a, b, t),
            Err(VectorError::OutOfRange { amount: t })
        );
    }
}

#[test]
fn componentwise_min_max() {
    let v1 = vec2(1.0, 2.0);
    let v2 = vec2(3.0, 2.0);
    assert_eq!(Vec2::max(v1, v2), vec2(3.0, 2.0));
    assert_eq!(Vec2::min(v1, v2), vec2(1.0, 2.0));
}

#[test]
fn normalize_yields_unit_length() {
    assert_relative_eq!(
        Vec2::normalize(vec2(1.0, 2.0)).length(),
        1.0,
        epsilon = 1e-9
    );
}

#[test]
fn reflect_about_normal() {
    let v = vec2(1.0, 1.0);
    let n = -Vec2::unit_x();
    assert_eq!(Vec2::reflect(v, n), vec2(-1.0, 1.0));
}

#[test]
fn length_squared() {
    assert_eq!(Vec2::zero().length_squared(), 0.0);
    assert_eq!(Vec2::unit_x().length_squared(), 1.0);
    assert_eq!(Vec2::unit_y().length_squared(), 1.0);
    assert_eq!(Vec2::one().length_squared(), 2.0);
    assert_eq!(vec2(1.0, 2.0).length_squared(), 5.0);
}

#[test]
fn length() {
    assert_eq!(Vec2::zero().length(), 0.0);
    assert_eq!(Vec2::unit_x().length(), 1.0);
    assert_eq!(Vec2::unit_y().length(), 1.0);
    assert_eq!(Vec2::one().length(), 2.0_f64.sqrt());
    assert_eq!(vec2(1.0, 2.0).length(), 5.0_f64.sqrt());
}

#[test]
fn normalize_in_place_mutates() {
    let mut v = vec2(1.0, 2.0);
    v.normalize_in_place();
    assert_relative_eq!(v.length(), 1.0, epsilon = 1e-9);
    assert_ne!(v.x(), 1.0);
    assert_ne!(v.y(), 2.0);
}

#[test]
fn unimplemented_operations_fail() {
    let v = vec2(1.0, 2.0);
    assert_eq!(
        Vec2::barycentric(v, v, v),
        Err(VectorError::NotImplemented("barycentric"))
    );
    assert_eq!(
        Vec2::smooth_step(v, v, 0.5),
        Err(VectorError::NotImplemented("smooth_step"))
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let v = vec2(1.5, -2.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[1.5,-2.0]");
    let back: Vec2 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
