//! Debug-only assertions for checking invariants of values passed around the engine.
//!
//! All of these compile to nothing when `debug_assertions` are disabled.

use crate::core::types::{Number, Point3, Vector3};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use approx::*;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn normal3(n: impl Borrow<Vector3>) {
    debug_assert_only!();
    let n = n.borrow();
    vector3(n);
    assert!(
        n.is_normalized(),
        "should be normalised; vec: {n:?}, len: {:?}",
        n.length()
    );
}

#[inline(always)]
#[track_caller]
pub fn point3(v: impl Borrow<Point3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn ray(r: impl Borrow<Ray>) {
    debug_assert_only!();
    let r = r.borrow();
    point3(r.pos());
    normal3(r.dir());
}

/// Asserts that an intersection was valid
#[inline(always)]
#[track_caller]
pub fn intersection(ray: impl Borrow<Ray>, intersect: impl Borrow<Intersection>, interval: impl Borrow<Interval<Number>>) {
    debug_assert_only!();

    let intersect = intersect.borrow();
    let interval = interval.borrow();
    let ray = ray.borrow();

    point3(intersect.pos_w);
    number(intersect.dist);

    assert!(
        interval.contains(&intersect.dist),
        "intersect dist {} not in interval {}",
        intersect.dist,
        interval
    );

    // Dist between start and end should match `.dist` field
    let ray_len = (ray.pos() - intersect.pos_w).length();
    assert_relative_eq!(ray_len, intersect.dist.abs(), epsilon = EPSILON, max_relative = RELATIVE);

    assert!(
        intersect.pos_w.relative_eq(&ray.at(intersect.dist), EPSILON, RELATIVE),
        "intersect position doesn't match ray at intersection dist; intersect_pos: {i_pos:?}, dist: {dist}, ray: {ray:?}, ray_pos: {r_pos:?}",
        i_pos = intersect.pos_w,
        dist = intersect.dist,
        ray = ray,
        r_pos = ray.at(intersect.dist)
    );

    normal3(intersect.normal);
}
