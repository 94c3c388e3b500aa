//! Transform tests
//!
//! Tests for:
//! - Transform defaults and dirty checking
//! - Local-Z rotation increments
//! - Uniform scale
//! - Euler angle round-trip

use glam::{Affine3A, Quat, Vec3};
use ornament::scene::transform::Transform;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(*t.local_matrix(), Affine3A::IDENTITY);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // First call always recomputes
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.set_uniform_scale(2.0);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.mark_dirty();
    assert!(t.update_local_matrix());
}

#[test]
fn rotate_local_z_accumulates() {
    let mut t = Transform::new();
    t.rotate_local_z(FRAC_PI_4);
    t.rotate_local_z(FRAC_PI_4);

    let expected = Quat::from_rotation_z(FRAC_PI_2);
    assert!(t.rotation.dot(expected).abs() > 1.0 - EPSILON);
}

#[test]
fn rotate_local_z_is_applied_in_local_frame() {
    let mut t = Transform::new();
    t.rotation = Quat::from_rotation_x(FRAC_PI_2);
    t.rotate_local_z(FRAC_PI_2);

    // Local Z was mapped to world -Y by the parent rotation
    let expected = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_z(FRAC_PI_2);
    assert!(t.rotation.dot(expected).abs() > 1.0 - EPSILON);
}

#[test]
fn full_turns_wrap() {
    let mut t = Transform::new();
    for _ in 0..8 {
        t.rotate_local_z(PI / 2.0);
    }
    assert!(t.rotation.dot(Quat::IDENTITY).abs() > 1.0 - EPSILON);
    assert!(t.rotation.is_normalized());
}

#[test]
fn uniform_scale_sets_all_axes() {
    let mut t = Transform::new();
    t.set_uniform_scale(0.75);
    assert_eq!(t.scale, Vec3::splat(0.75));

    t.update_local_matrix();
    let p = t.local_matrix().transform_point3(Vec3::new(1.0, 2.0, 3.0));
    assert!(vec3_approx(p, Vec3::new(0.75, 1.5, 2.25)));
}

#[test]
fn euler_round_trip() {
    let mut t = Transform::new();
    t.set_rotation_euler(0.1, 0.2, 0.3);
    assert!(vec3_approx(t.rotation_euler(), Vec3::new(0.1, 0.2, 0.3)));
}
