use getset::CopyGetters;
use std::borrow::Borrow;

use crate::core::types::{Number, Point3, Vector3};

use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// An **Axis-Aligned Bounding Box** (AABB)
///
/// The box spans between the two corners `min` and `max`
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq, Default)]
#[getset(get_copy = "pub")]
pub struct Aabb {
    /// The lower corner of the [Aabb]; the corner with the smallest coordinates
    min: Point3,
    /// The upper corner of the [Aabb]; the corner with the largest coordinates
    max: Point3,
    /// The difference between [min](fn@Self::min) and [max](fn@Self::max); how large the [Aabb] is
    size: Vector3,
}

// region Constructors

impl Aabb {
    /// Creates a new [Aabb] from two points, which do *not* have to be sorted by min/max
    pub fn new(a: impl Into<Point3>, b: impl Into<Point3>) -> Self {
        let (a, b) = (a.into(), b.into());
        let min = Point3::min(a, b);
        let max = Point3::max(a, b);
        Self { min, max, size: max - min }
    }

    pub fn new_centred(centre: impl Into<Point3>, size: impl Into<Vector3>) -> Self {
        let (centre, size) = (centre.into(), size.into());
        Self::new(centre - size / 2., centre + size / 2.)
    }

    /// Creates an [Aabb] that encloses all the given points
    ///
    /// Returns [None] if there were no points
    pub fn encompass_points<B: Borrow<Point3>>(iter: impl IntoIterator<Item = B>) -> Option<Self> {
        let mut iter = iter.into_iter().map(|p| *p.borrow());
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::new(min, max))
    }

    /// Ensures that an AABB has all sides of at least `thresh` thickness.
    /// If any side widths between corners are less than this threshold, the [Aabb] will
    /// be expanded (away from the centre) to fit.
    pub fn min_padded(&self, thresh: Number) -> Self {
        Self::new_centred(self.centre(), self.size.max(Vector3::splat(thresh)))
    }
}

// endregion Constructors

// region Helper

impl Aabb {
    pub fn centre(&self) -> Point3 { self.min + self.size / 2. }

    /// Returns the corners of the AABB
    ///
    /// Corner `i` takes the `max` coordinate on axis `x` if bit `2` is set, `y` for bit `1`, and `z` for bit `0`
    pub fn corners(&self) -> [Point3; 8] {
        let (l, h) = (self.min, self.max);
        [
            Point3::new(l.x, l.y, l.z),
            Point3::new(l.x, l.y, h.z),
            Point3::new(l.x, h.y, l.z),
            Point3::new(l.x, h.y, h.z),
            Point3::new(h.x, l.y, l.z),
            Point3::new(h.x, l.y, h.z),
            Point3::new(h.x, h.y, l.z),
            Point3::new(h.x, h.y, h.z),
        ]
    }

    /// Pairs of indices into [Self::corners] that make up the 12 edges of the box
    pub const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (2, 3),
        (4, 5),
        (6, 7),
        (0, 2),
        (1, 3),
        (4, 6),
        (5, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
}

// endregion Helper

// region Impl

impl Aabb {
    /// Checks whether the given ray intersects with the AABB at any point within the given distance interval
    pub fn hit(&self, ray: &Ray, interval: &Interval<Number>) -> bool {
        /*
        CREDITS:

        Author: Tavianator
        URL:
            - <https://tavianator.com/cgit/dimension.git/tree/libdimension/bvh/bvh.c#n196>
            - <https://tavianator.com/2011/ray_box.html>
        */

        // This is actually correct, even though it appears not to handle edge cases
        // (ray.n.{x,y,z} == 0). It works because the infinities that result from
        // dividing by zero will still behave correctly in the comparisons. Rays
        // which are parallel to an axis and outside the box will have tmin == inf
        // or tmax == -inf, while rays inside the box will have tmin and tmax
        // unchanged.

        let t1 = (self.min - ray.pos()) * ray.inv_dir();
        let t2 = (self.max - ray.pos()) * ray.inv_dir();

        let tmin = t1.min(t2).max_element();
        let tmax = t1.max(t2).min_element();

        interval.range_overlaps(&tmin, &tmax)
    }
}

// endregion Impl
