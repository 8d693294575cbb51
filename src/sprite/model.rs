use crate::{
    foundation::core::{BorderInsets, FlipOptions, Rect, Rgba8, Size},
    foundation::error::{TilemeshError, TilemeshResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Wrap mode of the texture backing a sprite.
pub enum WrapMode {
    /// Coordinates outside [0,1] sample the edge texel.
    #[default]
    Clamp,
    /// The texture repeats outside [0,1].
    Repeat,
    /// The texture mirror-repeats outside [0,1].
    Mirror,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Resolved metrics of a sliced sprite, as supplied by the host.
///
/// All UV boxes are in normalized [0,1]² texture space. `border` is in
/// source pixels, pre pixels-per-unit scaling; a sprite with a zero border
/// tiles its full extent.
pub struct SlicedSprite {
    /// Source sprite rect size in pixels.
    pub size: Size,
    /// Declared border insets in pixels.
    #[serde(default)]
    pub border: BorderInsets,
    /// Full texture UV extents of the sprite.
    pub outer_uv: Rect,
    /// UV box excluding the sliced border.
    pub inner_uv: Rect,
    /// Whether the sprite is packed into a texture atlas.
    #[serde(default)]
    pub packed: bool,
    /// Wrap mode of the backing texture.
    #[serde(default)]
    pub wrap_mode: WrapMode,
}

impl SlicedSprite {
    /// A sprite covering its whole texture with no border.
    pub fn full_texture(size: Size) -> Self {
        let uv = Rect::new(0.0, 0.0, 1.0, 1.0);
        Self {
            size,
            border: BorderInsets::default(),
            outer_uv: uv,
            inner_uv: uv,
            packed: false,
            wrap_mode: WrapMode::default(),
        }
    }

    /// True when any border component is nonzero.
    pub fn has_border(&self) -> bool {
        !self.border.is_zero()
    }

    /// Check sprite metrics for use in mesh generation.
    pub fn validate(&self) -> TilemeshResult<()> {
        if !(self.size.width >= 0.0
            && self.size.height >= 0.0
            && self.size.width.is_finite()
            && self.size.height.is_finite())
        {
            return Err(TilemeshError::validation(
                "sprite size must be finite and >= 0",
            ));
        }
        for (name, value) in [
            ("left", self.border.left),
            ("bottom", self.border.bottom),
            ("right", self.border.right),
            ("top", self.border.top),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(TilemeshError::validation(format!(
                    "sprite border {name} must be finite and >= 0"
                )));
            }
        }
        validate_uv_box("outer_uv", self.outer_uv)?;
        validate_uv_box("inner_uv", self.inner_uv)?;
        Ok(())
    }
}

fn validate_uv_box(name: &str, uv: Rect) -> TilemeshResult<()> {
    let in_unit = |v: f64| (0.0..=1.0).contains(&v);
    if !(in_unit(uv.x0) && in_unit(uv.y0) && in_unit(uv.x1) && in_unit(uv.y1)) {
        return Err(TilemeshError::validation(format!(
            "sprite {name} must lie in [0,1]x[0,1]"
        )));
    }
    if uv.x1 < uv.x0 || uv.y1 < uv.y0 {
        return Err(TilemeshError::validation(format!(
            "sprite {name} must have min <= max on both axes"
        )));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which mesh path [`crate::generate_mesh`] takes for an image.
pub enum DrawMode {
    /// One quad covering the draw rect, UV-mapped to the sprite's outer box.
    #[default]
    Simple,
    /// Tiled center fill plus tiled border strips and fixed corners.
    Tiled,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Complete input descriptor for one mesh rebuild.
///
/// The descriptor is a pure data model: the host resolves sprite metrics
/// and pixel-adjusts the draw rect, then hands this to
/// [`crate::generate_mesh`] together with an output [`crate::MeshSink`].
/// It can also be serialized/deserialized via Serde (JSON).
pub struct TiledImage {
    /// Sprite metrics, or `None` to draw an untextured default quad.
    pub sprite: Option<SlicedSprite>,
    /// Pixel-adjusted draw rect in local units.
    pub rect: Rect,
    /// Un-adjusted rect size, used to rescale borders after pixel snapping.
    pub original_size: Size,
    /// Tint applied to every emitted vertex.
    #[serde(default)]
    pub color: Rgba8,
    /// Mesh path selection.
    #[serde(default)]
    pub mode: DrawMode,
    /// Render the tiled center region (border strips/corners only when false).
    #[serde(default = "default_fill_center")]
    pub fill_center: bool,
    /// Pixels-per-unit scale applied to sprite metrics.
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f64,
    /// Alternating per-row/column UV flips for the tiled center fill.
    #[serde(default)]
    pub flip: FlipOptions,
}

fn default_fill_center() -> bool {
    true
}

fn default_pixels_per_unit() -> f64 {
    1.0
}

impl TiledImage {
    /// Check the descriptor before generation.
    pub fn validate(&self) -> TilemeshResult<()> {
        if !(self.rect.x0.is_finite()
            && self.rect.y0.is_finite()
            && self.rect.x1.is_finite()
            && self.rect.y1.is_finite())
        {
            return Err(TilemeshError::validation("rect must be finite"));
        }
        if self.rect.x1 < self.rect.x0 || self.rect.y1 < self.rect.y0 {
            return Err(TilemeshError::validation(
                "rect width/height must be >= 0",
            ));
        }
        if !(self.original_size.width >= 0.0
            && self.original_size.height >= 0.0
            && self.original_size.width.is_finite()
            && self.original_size.height.is_finite())
        {
            return Err(TilemeshError::validation(
                "original_size must be finite and >= 0",
            ));
        }
        if !(self.pixels_per_unit > 0.0 && self.pixels_per_unit.is_finite()) {
            return Err(TilemeshError::validation("pixels_per_unit must be > 0"));
        }
        if let Some(sprite) = &self.sprite {
            sprite.validate()?;
        }
        Ok(())
    }

    /// Deserialize a descriptor from JSON.
    pub fn from_json(json: &str) -> TilemeshResult<Self> {
        serde_json::from_str(json).map_err(|e| TilemeshError::serde(e.to_string()))
    }

    /// Serialize the descriptor to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> TilemeshResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TilemeshError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/model.rs"]
mod tests;
