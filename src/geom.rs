//! Rectangles and affine helpers.
//!
//! Conventions: [`Rect::contains`] is half-open (left/top inclusive, right/bottom exclusive),
//! and [`Rect::intersects`] is strict, so rectangles that only share an edge do not intersect.
//! The narrow phase treats contact the same way at any rotation, see
//! [`CONTACT_TOLERANCE`](crate::narrow::CONTACT_TOLERANCE).

use crate::{Affine2, Fp, GeometryError, Vec2};
use approx::AbsDiffEq;

// ---------- Affine ---------- //

#[inline]
pub fn transform_point(transform: &Affine2, point: Vec2) -> Vec2 {
    transform.transform_point2(point)
}

#[inline]
pub fn transformed_bounding_rect(transform: &Affine2, rect: &Rect) -> Rect {
    //! Returns the axis-aligned rectangle enclosing `rect`'s corners after `transform`.
    //! The transformed rectangle itself is generally not axis-aligned.
    bounding_rect(&rect.corners().map(|c| transform.transform_point2(c)))
}

#[inline]
pub fn bounding_rect(points: &[Vec2; 4]) -> Rect {
    let min = points[0].min(points[1]).min(points[2]).min(points[3]);
    let max = points[0].max(points[1]).max(points[2]).max(points[3]);
    Rect::from_min_max(min, max)
}

pub fn try_inverse(transform: &Affine2) -> Result<Affine2, GeometryError> {
    //! Inverts `transform`, refusing singular or non-finite matrices.
    if !transform.is_finite() {
        log::debug!("refusing to invert non-finite transform {:?}", transform);
        return Err(GeometryError::NonFinite);
    }
    let det = transform.matrix2.determinant();
    if det == 0.0 || !det.is_finite() {
        log::debug!("refusing to invert singular transform {:?}", transform);
        return Err(GeometryError::Singular(det));
    }
    Ok(transform.inverse())
}

// ---------- Rect ---------- //

/// An axis-aligned rectangle: top-left `pos` and non-negative `size`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: Fp, y: Fp, width: Fp, height: Fp) -> Rect {
        Rect { pos: Vec2::new(x, y), size: Vec2::new(width, height) }
    }
    pub fn try_new(x: Fp, y: Fp, width: Fp, height: Fp) -> Result<Rect, GeometryError> {
        //! Validating constructor: rejects non-finite components and negative sizes.
        let rect = Rect::new(x, y, width, height);
        if !rect.pos.is_finite() || !rect.size.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeSize { width, height });
        }
        Ok(rect)
    }
    #[inline]
    pub const fn from_size(size: Vec2) -> Rect {
        Rect { pos: Vec2::ZERO, size }
    }
    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Rect {
        Rect { pos: min, size: max - min }
    }

    pub fn from_points(points: &[Vec2]) -> Option<Rect> {
        //! Returns the smallest rectangle enclosing `points`, or `None` if there are none.
        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Rect::from_min_max(min, max))
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        //! Returns the corners as top-left, top-right, bottom-right, bottom-left.
        let max = self.max();
        [self.pos, Vec2::new(max.x, self.pos.y), max, Vec2::new(self.pos.x, max.y)]
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.pos.x && point.x < max.x && point.y >= self.pos.y && point.y < max.y
    }
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        let (amax, bmax) = (self.max(), other.max());
        self.pos.x < bmax.x && other.pos.x < amax.x && self.pos.y < bmax.y && other.pos.y < amax.y
    }
}

impl AbsDiffEq for Rect {
    type Epsilon = Fp;

    fn default_epsilon() -> Fp {
        Fp::EPSILON
    }
    fn abs_diff_eq(&self, other: &Rect, epsilon: Fp) -> bool {
        self.pos.abs_diff_eq(other.pos, epsilon) && self.size.abs_diff_eq(other.size, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn half_open_contains() {
        let r = Rect::new(0.0, 0.0, 2.0, 4.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(1.0, 3.9)));
        assert!(!r.contains(Vec2::new(2.0, 1.0)));
        assert!(!r.contains(Vec2::new(1.0, 4.0)));
        assert!(!r.contains(Vec2::new(-0.1, 1.0)));
    }

    #[test]
    fn strict_intersects() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.intersects(&Rect::new(0.5, 0.5, 1.0, 1.0)));
        assert!(a.intersects(&Rect::new(-1.0, -1.0, 3.0, 3.0)));
        assert!(!a.intersects(&Rect::new(1.0, 0.0, 1.0, 1.0))); // shared edge
        assert!(!a.intersects(&Rect::new(1.0, 1.0, 1.0, 1.0))); // shared corner
        assert!(!a.intersects(&Rect::new(2.0, 2.0, 1.0, 1.0)));
    }

    #[test]
    fn rotated_bounding_rect() {
        let quarter_turn = std::f64::consts::FRAC_PI_2 as Fp;
        let quarter = Affine2::from_angle_translation(quarter_turn, Vec2::new(10.0, 0.0));
        let r = transformed_bounding_rect(&quarter, &Rect::new(0.0, 0.0, 2.0, 1.0));
        assert_abs_diff_eq!(r, Rect::new(9.0, 0.0, 1.0, 2.0), epsilon = 1e-5);

        let eighth = Affine2::from_angle(std::f64::consts::FRAC_PI_4 as Fp);
        let r = transformed_bounding_rect(&eighth, &Rect::new(0.0, 0.0, 1.0, 1.0));
        let half_diag = (0.5 as Fp).sqrt();
        let expected = Rect::new(-half_diag, 0.0, 2.0 * half_diag, 2.0 * half_diag);
        assert_abs_diff_eq!(r, expected, epsilon = 1e-5);
    }

    #[test]
    fn enclosing_points() {
        assert_eq!(Rect::from_points(&[]), None);
        let single = Rect::from_points(&[Vec2::new(3.0, -2.0)]);
        assert_eq!(single, Some(Rect::new(3.0, -2.0, 0.0, 0.0)));
        let scattered = [
            Vec2::new(1.0, 5.0),
            Vec2::new(-2.0, 3.0),
            Vec2::new(4.0, -1.0),
            Vec2::new(0.0, 0.0),
        ];
        assert_eq!(Rect::from_points(&scattered), Some(Rect::new(-2.0, -1.0, 6.0, 6.0)));
        assert_eq!(Rect::from_points(&scattered), Some(bounding_rect(&scattered)));
    }

    #[test]
    fn point_round_trip() {
        let t = Affine2::from_scale_angle_translation(Vec2::new(2.0, 0.5), 0.3, Vec2::new(-4.0, 7.0));
        let inv = try_inverse(&t).unwrap();
        let p = Vec2::new(3.0, -1.0);
        assert!(transform_point(&inv, transform_point(&t, p)).abs_diff_eq(p, 1e-5));
    }

    #[test]
    fn validation() {
        assert_eq!(
            Rect::try_new(0.0, 0.0, -1.0, 2.0),
            Err(GeometryError::NegativeSize { width: -1.0, height: 2.0 })
        );
        assert_eq!(Rect::try_new(Fp::NAN, 0.0, 1.0, 2.0), Err(GeometryError::NonFinite));
        assert!(Rect::try_new(0.0, 0.0, 0.0, 0.0).is_ok());

        let flat = Affine2::from_scale(Vec2::new(1.0, 0.0));
        assert_eq!(try_inverse(&flat), Err(GeometryError::Singular(0.0)));
    }
}
