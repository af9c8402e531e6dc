//! Merging many textured quads into a single triangle list.

use crate::{geom::Rect, narrow::Collidable, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub position: Vec2,
    pub tex_coords: Vec2,
    pub color: Color,
}

/// A collidable object drawn as one textured quad covering its local bounds.
pub trait Quad: Collidable {
    /// Texture region mapped onto the local bounds; a negative size flips it.
    fn texture_rect(&self) -> Rect;
    fn color(&self) -> Color {
        Color::WHITE
    }
}

/// Accumulates quads as a `Triangles` vertex list, six vertices per quad.
#[derive(Debug, Clone, Default)]
pub struct SpriteBatcher {
    vertices: Vec<Vertex>,
}

impl SpriteBatcher {
    pub const VERTICES_PER_QUAD: usize = 6;

    pub fn new() -> SpriteBatcher {
        SpriteBatcher::default()
    }

    pub fn batch<'a, Q: Quad + ?Sized + 'a>(&mut self, quads: impl IntoIterator<Item = &'a Q>) {
        //! Replaces the batch contents with `quads`, in iteration order.
        self.vertices.clear();
        for quad in quads {
            self.push(quad);
        }
    }

    pub fn push<Q: Quad + ?Sized>(&mut self, quad: &Q) {
        //! Appends one quad as two triangles: top-left, bottom-left, bottom-right, then
        //! top-left, bottom-right, top-right.
        let transform = quad.transform();
        let color = quad.color();
        let [tl, tr, br, bl] = quad.local_bounds().corners().map(|c| transform.transform_point2(c));
        let [ttl, ttr, tbr, tbl] = quad.texture_rect().corners();

        let vertex = |position, tex_coords| Vertex { position, tex_coords, color };
        self.vertices.extend_from_slice(&[
            vertex(tl, ttl),
            vertex(bl, tbl),
            vertex(br, tbr),
            vertex(tl, ttl),
            vertex(br, tbr),
            vertex(tr, ttr),
        ]);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        //! Number of quads in the batch.
        self.vertices.len() / Self::VERTICES_PER_QUAD
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}
