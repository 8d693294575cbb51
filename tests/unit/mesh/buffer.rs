use super::*;

#[test]
fn add_vertex_converts_to_f32_with_zero_z() {
    let mut buffer = MeshBuffer::new();
    buffer.add_vertex(Point::new(1.5, -2.0), Rgba8::WHITE, Point::new(0.25, 0.75));
    assert_eq!(buffer.vertex_count(), 1);
    assert_eq!(
        buffer.vertices()[0],
        Vertex {
            position: [1.5, -2.0, 0.0],
            color: Rgba8::WHITE,
            uv: [0.25, 0.75],
        }
    );
}

#[test]
fn add_triangle_appends_indices_in_order() {
    let mut buffer = MeshBuffer::new();
    buffer.add_triangle(0, 1, 2);
    buffer.add_triangle(2, 3, 0);
    assert_eq!(buffer.indices(), &[0, 1, 2, 2, 3, 0]);
    assert_eq!(buffer.triangle_count(), 2);
}

#[test]
fn clear_resets_both_streams() {
    let mut buffer = MeshBuffer::new();
    buffer.add_vertex(Point::ZERO, Rgba8::WHITE, Point::ZERO);
    buffer.add_triangle(0, 0, 0);
    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.vertex_count(), 0);
    assert_eq!(buffer.triangle_count(), 0);
}
