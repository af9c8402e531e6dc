//! Rectangular boundary collision for transformed 2D objects.
//!
//! Two objects collide when their transformed local rectangles overlap. The test runs as a
//! cascade of increasingly precise levels (see [`CollisionLevel`]), stopping as soon as one of
//! them is certain of the result:
//!
//! ```
//! use rectlap::{are_colliding, body::RectangleShape, Vec2};
//!
//! let a = RectangleShape::new(Vec2::new(100.0, 100.0));
//! let mut b = RectangleShape::new(Vec2::new(100.0, 100.0));
//! b.transformable.set_position(Vec2::new(50.0, 50.0));
//!
//! assert!(are_colliding(&a, &b));
//! ```

pub mod batch;
pub mod body;
pub mod error;
pub mod geom;
pub mod narrow;
pub mod text;
pub mod triangles;

pub use error::{GeometryError, ParseLevelError};
pub use geom::Rect;
pub use narrow::{are_colliding, are_colliding_at, Collidable, CollisionLevel, CollisionTester, Decision};

#[cfg(not(feature = "f64"))]
pub type Fp = f32;
#[cfg(not(feature = "f64"))]
pub use glam::{Affine2, Vec2};

#[cfg(feature = "f64")]
pub type Fp = f64;
#[cfg(feature = "f64")]
pub use glam::{DAffine2 as Affine2, DVec2 as Vec2};
