//! Errors reported by the upstream geometry validators.
//!
//! The collision cascade itself never fails: feeding it a degenerate transform or a rectangle
//! with a negative size produces an unspecified answer. Callers that cannot guarantee
//! well-formed geometry run it through [`Rect::try_new`](crate::Rect::try_new),
//! [`Transformable::validate`](crate::body::Transformable::validate) or
//! [`try_inverse`](crate::geom::try_inverse) first.

use crate::Fp;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// The rectangle has a negative width or height.
    #[error("rectangle size must be non-negative, got {width}x{height}")]
    NegativeSize { width: Fp, height: Fp },

    /// A coordinate, size or scale component is NaN or infinite.
    #[error("geometry contains a non-finite component")]
    NonFinite,

    /// A scale component is zero, collapsing the object onto a line or point.
    #[error("scale ({x}, {y}) has a zero component")]
    ZeroScale { x: Fp, y: Fp },

    /// The affine transform cannot be inverted.
    #[error("transform is not invertible (determinant {0})")]
    Singular(Fp),
}

/// Failure to parse a [`CollisionLevel`](crate::CollisionLevel) from a string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown collision level `{0}`, expected aabb, corners, sat, max or an integer")]
pub struct ParseLevelError(pub String);
