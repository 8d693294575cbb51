use crate::foundation::core::Rect;

/// Hard ceiling on vertices in one generated mesh.
pub const MAX_MESH_VERTICES: u64 = 65_000;

const VERTICES_PER_QUAD: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Tile counts and dimensions for one generation pass.
///
/// Produced by [`plan_tiles`]; the planner itself emits nothing. When the
/// requested grid would exceed [`MAX_MESH_VERTICES`], counts are reduced
/// (preserving their ratio) and tile dimensions grow to still cover the
/// span, with `budget_clamped` set.
pub struct TilePlan {
    /// Tile columns across the fillable span.
    pub tiles_w: i64,
    /// Tile rows across the fillable span.
    pub tiles_h: i64,
    /// Final tile width in local units.
    pub tile_width: f64,
    /// Final tile height in local units.
    pub tile_height: f64,
    /// True when the grid was coarsened to fit the vertex budget.
    pub budget_clamped: bool,
}

/// Compute tile counts and dimensions for the fillable `span`.
///
/// A non-positive `tile_width`/`tile_height` collapses that axis to a
/// single tile covering the whole span. The vertex estimate depends on
/// which regions tile:
///
/// - center only: `w * h * 4`
/// - center plus border strips: `(w + 2) * (h + 2) * 4`
/// - border strips only: `(w + h + 2) * 2 * 4`
/// - neither: zero tiles
///
/// When the estimate exceeds [`MAX_MESH_VERTICES`], new counts are derived
/// by inverting the same formula at the ceiling while preserving the
/// width:height count ratio, and a non-fatal warning is logged.
pub fn plan_tiles(
    span: Rect,
    tile_width: f64,
    tile_height: f64,
    has_border: bool,
    fill_center: bool,
) -> TilePlan {
    let span_w = span.width();
    let span_h = span.height();

    let mut tile_w = if tile_width <= 0.0 { span_w } else { tile_width };
    let mut tile_h = if tile_height <= 0.0 {
        span_h
    } else {
        tile_height
    };

    let mut tiles_w: i64 = 0;
    let mut tiles_h: i64 = 0;
    let mut budget_clamped = false;

    if fill_center {
        tiles_w = count_tiles(span_w, tile_w);
        tiles_h = count_tiles(span_h, tile_h);

        let estimate = if has_border {
            (tiles_w as f64 + 2.0) * (tiles_h as f64 + 2.0) * VERTICES_PER_QUAD
        } else {
            tiles_w as f64 * tiles_h as f64 * VERTICES_PER_QUAD
        };

        if estimate > MAX_MESH_VERTICES as f64 {
            tracing::warn!(
                estimated_vertices = estimate as u64,
                limit = MAX_MESH_VERTICES,
                "tile grid exceeds the vertex budget; tile size will be increased"
            );
            budget_clamped = true;

            let max_tiles = MAX_MESH_VERTICES as f64 / VERTICES_PER_QUAD;
            let grid_ratio = if has_border {
                (tiles_w as f64 + 2.0) / (tiles_h as f64 + 2.0)
            } else {
                tiles_w as f64 / tiles_h as f64
            };

            let mut target_w = (max_tiles / grid_ratio).sqrt();
            let mut target_h = target_w * grid_ratio;
            if has_border {
                target_w -= 2.0;
                target_h -= 2.0;
            }

            tiles_w = (target_w.floor() as i64).max(1);
            tiles_h = (target_h.floor() as i64).max(1);
            tile_w = span_w / tiles_w as f64;
            tile_h = span_h / tiles_h as f64;
        }
    } else if has_border {
        // Border strips repeat along one axis each; no center grid.
        tiles_w = count_tiles(span_w, tile_w);
        tiles_h = count_tiles(span_h, tile_h);

        let estimate =
            (tiles_h as f64 + tiles_w as f64 + 2.0) * 2.0 * VERTICES_PER_QUAD;
        if estimate > MAX_MESH_VERTICES as f64 {
            tracing::warn!(
                estimated_vertices = estimate as u64,
                limit = MAX_MESH_VERTICES,
                "border strips exceed the vertex budget; tile size will be increased"
            );
            budget_clamped = true;

            let max_tiles = MAX_MESH_VERTICES as f64 / VERTICES_PER_QUAD;
            let grid_ratio = tiles_w as f64 / tiles_h as f64;
            let target_w = (max_tiles - 4.0) / (2.0 * (1.0 + grid_ratio));
            let target_h = target_w * grid_ratio;

            tiles_w = (target_w.floor() as i64).max(1);
            tiles_h = (target_h.floor() as i64).max(1);
            tile_w = span_w / tiles_w as f64;
            tile_h = span_h / tiles_h as f64;
        }
    }

    TilePlan {
        tiles_w,
        tiles_h,
        tile_width: tile_w,
        tile_height: tile_h,
        budget_clamped,
    }
}

fn count_tiles(span: f64, tile: f64) -> i64 {
    if span <= 0.0 || tile <= 0.0 {
        return 0;
    }
    (span / tile).ceil() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/tiling/planner.rs"]
mod tests;
