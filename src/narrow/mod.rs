//! Narrowphase rectangle-rectangle collision cascade.

use crate::{
    geom::{transformed_bounding_rect, Rect},
    Affine2, Fp, ParseLevelError, Vec2,
};
use std::{fmt, str::FromStr};

// ---------- Collidable ---------- //

/// Anything with a local rectangular extent placed into the world by an affine transform.
///
/// Objects of unrelated types can be tested against each other as long as both implement this.
/// `inverse_transform` must exactly invert `transform`; the default computes it on demand, types
/// that already keep an inverse around should return that instead. A non-invertible transform
/// (a zero scale component) is a caller error and yields an unspecified result.
pub trait Collidable {
    /// Local space to world space.
    fn transform(&self) -> Affine2;
    /// World space to local space.
    fn inverse_transform(&self) -> Affine2 {
        self.transform().inverse()
    }
    /// The untransformed rectangular extent.
    fn local_bounds(&self) -> Rect;
}

impl<T: Collidable + ?Sized> Collidable for &T {
    #[inline]
    fn transform(&self) -> Affine2 {
        (**self).transform()
    }
    #[inline]
    fn inverse_transform(&self) -> Affine2 {
        (**self).inverse_transform()
    }
    #[inline]
    fn local_bounds(&self) -> Rect {
        (**self).local_bounds()
    }
}

// ---------- CollisionLevel ---------- //

/// How far the collision cascade may go before it must answer.
///
/// Lower levels are cheaper. A negative answer from any level is exact; a positive answer from
/// [`Aabb`](CollisionLevel::Aabb) and a negative one from
/// [`CornerContainment`](CollisionLevel::CornerContainment) are approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionLevel {
    /// Level 0: world-space bounding boxes overlap.
    Aabb,
    /// Level 1: a corner of either rectangle lies inside the other.
    CornerContainment,
    /// Level 2: no edge normal of either rectangle separates them.
    SeparatingAxis,
    /// Run every level; equivalent to `SeparatingAxis`.
    #[default]
    Maximum,
}

impl CollisionLevel {
    #[inline]
    fn permits(self, level: CollisionLevel) -> bool {
        self >= level
    }
}

impl From<i32> for CollisionLevel {
    fn from(level: i32) -> Self {
        //! 0, 1 and 2 select a level; anything else (negative values in particular) runs them all.
        match level {
            0 => CollisionLevel::Aabb,
            1 => CollisionLevel::CornerContainment,
            2 => CollisionLevel::SeparatingAxis,
            _ => CollisionLevel::Maximum,
        }
    }
}

impl FromStr for CollisionLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aabb" => Ok(CollisionLevel::Aabb),
            "corners" | "corner" | "corner-containment" => Ok(CollisionLevel::CornerContainment),
            "sat" | "separating-axis" => Ok(CollisionLevel::SeparatingAxis),
            "max" | "maximum" => Ok(CollisionLevel::Maximum),
            other => other
                .parse::<i32>()
                .map(CollisionLevel::from)
                .map_err(|_| ParseLevelError(s.to_owned())),
        }
    }
}

impl fmt::Display for CollisionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollisionLevel::Aabb => "aabb",
            CollisionLevel::CornerContainment => "corners",
            CollisionLevel::SeparatingAxis => "sat",
            CollisionLevel::Maximum => "max",
        })
    }
}

// ---------- Cascade ---------- //

/// The answer of a collision query and the level that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub colliding: bool,
    /// Never `Maximum`.
    pub level: CollisionLevel,
}

#[inline]
fn settle(colliding: bool, level: CollisionLevel) -> Decision {
    log::trace!("rectangle collision settled by {}: {}", level, colliding);
    Decision { colliding, level }
}

/// Runs the collision cascade up to `max_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionTester {
    pub max_level: CollisionLevel,
}

impl CollisionTester {
    #[inline]
    pub const fn new(max_level: CollisionLevel) -> CollisionTester {
        CollisionTester { max_level }
    }

    #[inline]
    pub fn test<A: Collidable + ?Sized, B: Collidable + ?Sized>(&self, a: &A, b: &B) -> bool {
        self.query(a, b).colliding
    }

    pub fn query<A: Collidable + ?Sized, B: Collidable + ?Sized>(&self, a: &A, b: &B) -> Decision {
        let (ta, tb) = (a.transform(), b.transform());
        let (ra, rb) = (a.local_bounds(), b.local_bounds());

        // world bounding boxes apart: exact negative whatever was asked for
        if !transformed_bounding_rect(&ta, &ra).intersects(&transformed_bounding_rect(&tb, &rb)) {
            return settle(false, CollisionLevel::Aabb);
        }
        if !self.max_level.permits(CollisionLevel::CornerContainment) {
            return settle(true, CollisionLevel::Aabb);
        }

        // each rectangle's corners expressed in the other's local frame
        let (ia, ib) = (a.inverse_transform(), b.inverse_transform());
        let a_in_b = ra.corners().map(|c| ib.transform_point2(ta.transform_point2(c)));
        let b_in_a = rb.corners().map(|c| ia.transform_point2(tb.transform_point2(c)));

        if a_in_b.iter().any(|&c| interior_contains(&rb, c))
            || b_in_a.iter().any(|&c| interior_contains(&ra, c))
        {
            return settle(true, CollisionLevel::CornerContainment);
        }
        if !self.max_level.permits(CollisionLevel::SeparatingAxis) {
            return settle(false, CollisionLevel::CornerContainment);
        }

        settle(
            rect_points_test(&rb, &a_in_b) && rect_points_test(&ra, &b_in_a),
            CollisionLevel::SeparatingAxis,
        )
    }
}

// ---------- Contact ---------- //

/// Overlap up to this fraction of a rectangle's longer side counts as contact. Rectangles in
/// contact do not collide, whatever their rotation.
pub const CONTACT_TOLERANCE: Fp = 1e-4;

#[inline]
fn contact_interior(rect: &Rect) -> (Vec2, Vec2) {
    //! Returns `rect` shrunk by the contact tolerance on every side, as (min, max).
    let tol = CONTACT_TOLERANCE * rect.size.abs().max_element().max(1.0);
    (rect.pos + tol, rect.max() - tol)
}

#[inline]
pub fn interior_contains(rect: &Rect, point: Vec2) -> bool {
    //! Returns whether `point` lies strictly inside `rect`, beyond contact distance of every edge.
    let (min, max) = contact_interior(rect);
    point.x > min.x && point.x < max.x && point.y > min.y && point.y < max.y
}

pub fn rect_points_test(rect: &Rect, points: &[Vec2; 4]) -> bool {
    //! Returns whether neither of `rect`'s axes separates it from the quad `points`, given in
    //! `rect`'s frame. Two rectangles are disjoint iff this fails for one of them against the
    //! other's corners.
    //! Points at contact distance of an edge line are on its outer side.
    let (min, max) = contact_interior(rect);
    !(points.iter().all(|p| p.x <= min.x)
        || points.iter().all(|p| p.x >= max.x)
        || points.iter().all(|p| p.y <= min.y)
        || points.iter().all(|p| p.y >= max.y))
}

/// Returns whether the rectangular boundaries of `a` and `b` overlap, running every level.
#[inline]
pub fn are_colliding<A: Collidable + ?Sized, B: Collidable + ?Sized>(a: &A, b: &B) -> bool {
    CollisionTester::new(CollisionLevel::Maximum).test(a, b)
}

/// Returns whether the rectangular boundaries of `a` and `b` overlap, stopping at `level`.
#[inline]
pub fn are_colliding_at<A, B>(a: &A, b: &B, level: CollisionLevel) -> bool
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    CollisionTester::new(level).test(a, b)
}
