use crate::{
    foundation::core::{FlipOptions, Point, Rect, Rgba8, Vec2},
    foundation::error::TilemeshResult,
    mesh::buffer::MeshSink,
    mesh::quad::add_quad,
    sprite::model::{DrawMode, SlicedSprite, TiledImage},
    tiling::border::adjusted_borders,
    tiling::planner::{TilePlan, plan_tiles},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Summary of one generation pass.
pub struct MeshStats {
    /// Vertices appended to the sink.
    pub vertices: usize,
    /// Triangles appended to the sink (every quad contributes exactly two).
    pub triangles: usize,
    /// True when the tile grid was coarsened to fit the vertex budget.
    pub budget_clamped: bool,
}

/// Rebuild the mesh for `image` into `sink`.
///
/// The sink is cleared at entry and fully populated before return. Two
/// paths exist, selected once per pass:
///
/// - [`DrawMode::Simple`], or any image without a sprite, emits a single
///   quad covering the draw rect.
/// - [`DrawMode::Tiled`] with a sprite runs the full pipeline: border
///   adjustment, tile planning under the vertex ceiling, then quad
///   emission for the center fill and border regions as enabled.
///
/// Generation is deterministic: identical inputs produce identical
/// vertex/index streams. The only error path is input validation;
/// degenerate geometry is handled by policy (see [`plan_tiles`]).
#[tracing::instrument(skip_all)]
pub fn generate_mesh(image: &TiledImage, sink: &mut dyn MeshSink) -> TilemeshResult<MeshStats> {
    image.validate()?;
    sink.clear();

    let budget_clamped = match (&image.mode, image.sprite.as_ref()) {
        (DrawMode::Tiled, Some(sprite)) => generate_tiled(image, sprite, sink),
        _ => {
            generate_simple(image, sink);
            false
        }
    };

    let vertices = sink.vertex_count();
    Ok(MeshStats {
        vertices,
        triangles: vertices / 2,
        budget_clamped,
    })
}

/// The host-default path: one quad over the rect, outer UV, no flip.
fn generate_simple(image: &TiledImage, sink: &mut dyn MeshSink) {
    let uv = image
        .sprite
        .as_ref()
        .map_or(Rect::new(0.0, 0.0, 1.0, 1.0), |s| s.outer_uv);
    add_quad(
        sink,
        Point::new(image.rect.x0, image.rect.y0),
        Point::new(image.rect.x1, image.rect.y1),
        image.color,
        Point::new(uv.x0, uv.y0),
        Point::new(uv.x1, uv.y1),
        FlipOptions::default(),
    );
}

fn generate_tiled(image: &TiledImage, sprite: &SlicedSprite, sink: &mut dyn MeshSink) -> bool {
    let rect = image.rect;
    let ppu = image.pixels_per_unit;

    // Tile dimensions come from the sprite's center patch, in local units.
    let tile_width = (sprite.size.width - sprite.border.left - sprite.border.right) / ppu;
    let tile_height = (sprite.size.height - sprite.border.bottom - sprite.border.top) / ppu;

    let border = adjusted_borders(
        sprite.border.scaled(ppu.recip()),
        image.original_size,
        rect.size(),
    );

    let outer = sprite.outer_uv;
    let uv_min = Point::new(sprite.inner_uv.x0, sprite.inner_uv.y0);
    let uv_max = Point::new(sprite.inner_uv.x1, sprite.inner_uv.y1);

    // Fillable span in coordinates relative to the rect's min corner.
    let span = Rect::new(
        border.left,
        border.bottom,
        rect.width() - border.right,
        rect.height() - border.top,
    );

    let has_border = sprite.has_border();
    let plan = plan_tiles(span, tile_width, tile_height, has_border, image.fill_center);

    if image.fill_center {
        emit_center_fill(
            sink,
            &plan,
            span,
            rect.origin(),
            image.color,
            uv_min,
            uv_max,
            image.flip,
        );
    }
    if has_border {
        emit_border_strips(sink, &plan, span, rect, image.color, outer, uv_min, uv_max);
        emit_corners(sink, span, rect, image.color, outer, uv_min, uv_max);
    }

    plan.budget_clamped
}

/// Tile the center region row-major, clipping partial tiles at the far
/// edge and alternating UV flips by row/column parity.
#[allow(clippy::too_many_arguments)]
fn emit_center_fill(
    sink: &mut dyn MeshSink,
    plan: &TilePlan,
    span: Rect,
    origin: Point,
    color: Rgba8,
    uv_min: Point,
    uv_max: Point,
    flip: FlipOptions,
) {
    let mut clipped = uv_max;
    for j in 0..plan.tiles_h {
        let y1 = span.y0 + j as f64 * plan.tile_height;
        let mut y2 = span.y0 + (j + 1) as f64 * plan.tile_height;
        if y2 > span.y1 {
            clipped.y = uv_min.y + (uv_max.y - uv_min.y) * (span.y1 - y1) / (y2 - y1);
            y2 = span.y1;
        }

        clipped.x = uv_max.x;
        for i in 0..plan.tiles_w {
            let x1 = span.x0 + i as f64 * plan.tile_width;
            let mut x2 = span.x0 + (i + 1) as f64 * plan.tile_width;
            if x2 > span.x1 {
                clipped.x = uv_min.x + (uv_max.x - uv_min.x) * (span.x1 - x1) / (x2 - x1);
                x2 = span.x1;
            }

            let tile_flip = FlipOptions {
                horizontal: flip.horizontal && j % 2 == 1,
                vertical: flip.vertical && i % 2 == 1,
            };
            add_quad(
                sink,
                origin + Vec2::new(x1, y1),
                origin + Vec2::new(x2, y2),
                color,
                uv_min,
                clipped,
                tile_flip,
            );
        }
    }
}

/// Tile the four edge strips: left/right repeat vertically, bottom/top
/// horizontally. The outer UV maps the far (rect) edge, the inner UV the
/// near (span) edge; the repeating axis clips like the center fill.
#[allow(clippy::too_many_arguments)]
fn emit_border_strips(
    sink: &mut dyn MeshSink,
    plan: &TilePlan,
    span: Rect,
    rect: Rect,
    color: Rgba8,
    outer: Rect,
    uv_min: Point,
    uv_max: Point,
) {
    let origin = rect.origin();
    let no_flip = FlipOptions::default();

    let mut clipped = uv_max;
    for j in 0..plan.tiles_h {
        let y1 = span.y0 + j as f64 * plan.tile_height;
        let mut y2 = span.y0 + (j + 1) as f64 * plan.tile_height;
        if y2 > span.y1 {
            clipped.y = uv_min.y + (uv_max.y - uv_min.y) * (span.y1 - y1) / (y2 - y1);
            y2 = span.y1;
        }

        add_quad(
            sink,
            origin + Vec2::new(0.0, y1),
            origin + Vec2::new(span.x0, y2),
            color,
            Point::new(outer.x0, uv_min.y),
            Point::new(uv_min.x, clipped.y),
            no_flip,
        );
        add_quad(
            sink,
            origin + Vec2::new(span.x1, y1),
            origin + Vec2::new(rect.width(), y2),
            color,
            Point::new(uv_max.x, uv_min.y),
            Point::new(outer.x1, clipped.y),
            no_flip,
        );
    }

    let mut clipped = uv_max;
    for i in 0..plan.tiles_w {
        let x1 = span.x0 + i as f64 * plan.tile_width;
        let mut x2 = span.x0 + (i + 1) as f64 * plan.tile_width;
        if x2 > span.x1 {
            clipped.x = uv_min.x + (uv_max.x - uv_min.x) * (span.x1 - x1) / (x2 - x1);
            x2 = span.x1;
        }

        add_quad(
            sink,
            origin + Vec2::new(x1, 0.0),
            origin + Vec2::new(x2, span.y0),
            color,
            Point::new(uv_min.x, outer.y0),
            Point::new(clipped.x, uv_min.y),
            no_flip,
        );
        add_quad(
            sink,
            origin + Vec2::new(x1, span.y1),
            origin + Vec2::new(x2, rect.height()),
            color,
            Point::new(uv_min.x, uv_max.y),
            Point::new(clipped.x, outer.y1),
            no_flip,
        );
    }
}

/// The four corner quads: exactly one each, never tiled or clipped.
fn emit_corners(
    sink: &mut dyn MeshSink,
    span: Rect,
    rect: Rect,
    color: Rgba8,
    outer: Rect,
    uv_min: Point,
    uv_max: Point,
) {
    let origin = rect.origin();
    let no_flip = FlipOptions::default();

    add_quad(
        sink,
        origin + Vec2::new(0.0, 0.0),
        origin + Vec2::new(span.x0, span.y0),
        color,
        Point::new(outer.x0, outer.y0),
        Point::new(uv_min.x, uv_min.y),
        no_flip,
    );
    add_quad(
        sink,
        origin + Vec2::new(span.x1, 0.0),
        origin + Vec2::new(rect.width(), span.y0),
        color,
        Point::new(uv_max.x, outer.y0),
        Point::new(outer.x1, uv_min.y),
        no_flip,
    );
    add_quad(
        sink,
        origin + Vec2::new(0.0, span.y1),
        origin + Vec2::new(span.x0, rect.height()),
        color,
        Point::new(outer.x0, uv_max.y),
        Point::new(uv_min.x, outer.y1),
        no_flip,
    );
    add_quad(
        sink,
        origin + Vec2::new(span.x1, span.y1),
        origin + Vec2::new(rect.width(), rect.height()),
        color,
        Point::new(uv_max.x, uv_max.y),
        Point::new(outer.x1, outer.y1),
        no_flip,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/tiling/generator.rs"]
mod tests;
