//! Re-triangulation of strip, fan and quad primitives into a plain triangle list.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    Triangles,
    /// Each vertex after the second closes a triangle with the two before it.
    TriangleStrip,
    /// Each vertex after the second closes a triangle with the one before it and the first.
    TriangleFan,
    /// Independent groups of four vertices, wound around the quad.
    Quads,
}

pub fn triangulate<V: Clone>(vertices: &[V], primitive: PrimitiveType) -> Vec<V> {
    //! Returns the same surface as `vertices` drawn with `primitive`, as independent triangles.
    //! `Triangles` input is returned as is. Strip winding alternates and is not corrected.
    //! An incomplete trailing quad is dropped.
    match primitive {
        PrimitiveType::Triangles => vertices.to_vec(),
        _ if vertices.len() < 3 => Vec::new(),
        PrimitiveType::TriangleStrip => vertices.windows(3).flatten().cloned().collect(),
        PrimitiveType::TriangleFan => {
            let mut out = Vec::with_capacity((vertices.len() - 2) * 3);
            for pair in vertices[1..].windows(2) {
                out.push(vertices[0].clone());
                out.extend_from_slice(pair);
            }
            out
        }
        PrimitiveType::Quads => {
            let mut out = Vec::with_capacity(vertices.len() / 4 * 6);
            for q in vertices.chunks_exact(4) {
                out.extend_from_slice(&q[..3]);
                out.extend([q[0].clone(), q[2].clone(), q[3].clone()]);
            }
            out
        }
    }
}
