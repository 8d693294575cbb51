use crate::{
    foundation::core::{FlipOptions, Point, Rgba8},
    mesh::buffer::MeshSink,
};

/// Append one axis-aligned quad to `sink`.
///
/// Vertices are emitted in fan order — min corner, top-left, max corner,
/// bottom-right — followed by the two triangles `(s, s+1, s+2)` and
/// `(s+2, s+3, s)`, where `s` is the sink's vertex count at call time.
///
/// `flip` mirrors the UV box on the corresponding axis before emission;
/// positions are never altered.
pub fn add_quad(
    sink: &mut dyn MeshSink,
    pos_min: Point,
    pos_max: Point,
    color: Rgba8,
    mut uv_min: Point,
    mut uv_max: Point,
    flip: FlipOptions,
) {
    if flip.horizontal {
        std::mem::swap(&mut uv_min.x, &mut uv_max.x);
    }
    if flip.vertical {
        std::mem::swap(&mut uv_min.y, &mut uv_max.y);
    }

    let start = sink.vertex_count() as u32;
    sink.add_vertex(pos_min, color, uv_min);
    sink.add_vertex(
        Point::new(pos_min.x, pos_max.y),
        color,
        Point::new(uv_min.x, uv_max.y),
    );
    sink.add_vertex(pos_max, color, uv_max);
    sink.add_vertex(
        Point::new(pos_max.x, pos_min.y),
        color,
        Point::new(uv_max.x, uv_min.y),
    );

    sink.add_triangle(start, start + 1, start + 2);
    sink.add_triangle(start + 2, start + 3, start);
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/quad.rs"]
mod tests;
