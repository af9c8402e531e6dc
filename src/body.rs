use crate::{
    batch::{Color, Quad},
    error::GeometryError,
    geom::{self, Rect},
    narrow::Collidable,
    Affine2, Fp, Vec2,
};

/// Position, rotation, scale and origin of a 2D object.
///
/// The transform maps local space to world space as: shift by `-origin`, scale, rotate by
/// `rotation` degrees (clockwise on a y-down screen), then translate to `position`. It is rebuilt
/// on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transformable {
    pub position: Vec2,
    /// Degrees, kept in `[0, 360)` by the setters.
    pub rotation: Fp,
    pub scale: Vec2,
    pub origin: Vec2,
}

impl Default for Transformable {
    fn default() -> Self {
        Transformable { position: Vec2::ZERO, rotation: 0.0, scale: Vec2::ONE, origin: Vec2::ZERO }
    }
}

impl Transformable {
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
    #[inline]
    pub fn move_by(&mut self, offset: Vec2) {
        self.position += offset;
    }
    #[inline]
    pub fn set_rotation(&mut self, degrees: Fp) {
        self.rotation = degrees.rem_euclid(360.0);
    }
    #[inline]
    pub fn rotate(&mut self, degrees: Fp) {
        self.set_rotation(self.rotation + degrees);
    }
    #[inline]
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }
    #[inline]
    pub fn scale_by(&mut self, factor: Vec2) {
        self.scale *= factor;
    }
    #[inline]
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn transform(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.scale, self.rotation.to_radians(), self.position)
            * Affine2::from_translation(-self.origin)
    }
    pub fn inverse_transform(&self) -> Affine2 {
        self.transform().inverse()
    }
    pub fn try_inverse_transform(&self) -> Result<Affine2, GeometryError> {
        self.validate()?;
        geom::try_inverse(&self.transform())
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        //! Checks the preconditions of the collision cascade: finite components and a non-zero scale.
        let finite = self.position.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
            && self.origin.is_finite();
        if !finite {
            return Err(GeometryError::NonFinite);
        }
        if self.scale.x == 0.0 || self.scale.y == 0.0 {
            log::debug!("degenerate scale {:?}", self.scale);
            return Err(GeometryError::ZeroScale { x: self.scale.x, y: self.scale.y });
        }
        Ok(())
    }
}

/// A textured quad: a `texture_rect` region drawn at its own size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sprite {
    pub transformable: Transformable,
    /// Region of the texture, in texels. A negative size flips the image.
    pub texture_rect: Rect,
    pub color: Color,
}

impl Sprite {
    pub fn new(texture_rect: Rect) -> Sprite {
        Sprite { transformable: Transformable::default(), texture_rect, color: Color::WHITE }
    }
}

impl Collidable for Sprite {
    #[inline]
    fn transform(&self) -> Affine2 {
        self.transformable.transform()
    }
    #[inline]
    fn local_bounds(&self) -> Rect {
        Rect::from_size(self.texture_rect.size.abs())
    }
}

impl Quad for Sprite {
    #[inline]
    fn texture_rect(&self) -> Rect {
        self.texture_rect
    }
    #[inline]
    fn color(&self) -> Color {
        self.color
    }
}

/// An untextured rectangle of the given size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleShape {
    pub transformable: Transformable,
    pub size: Vec2,
}

impl RectangleShape {
    pub fn new(size: Vec2) -> RectangleShape {
        RectangleShape { transformable: Transformable::default(), size }
    }
}

impl Collidable for RectangleShape {
    #[inline]
    fn transform(&self) -> Affine2 {
        self.transformable.transform()
    }
    #[inline]
    fn local_bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }
}
