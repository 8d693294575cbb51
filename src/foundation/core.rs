pub use kurbo::{Point, Rect, Size, Vec2};

/// Straight (non-premultiplied) RGBA8 vertex color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the neutral tint for textured quads.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Build a color from its four channels.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Border insets around a sliced sprite's center patch, in the same unit
/// as the rect they apply to.
///
/// Component order matches the sliced-sprite convention: `left` and
/// `bottom` are the near edges, `right` and `top` the far edges.
pub struct BorderInsets {
    /// Left inset.
    #[serde(default)]
    pub left: f64,
    /// Bottom inset.
    #[serde(default)]
    pub bottom: f64,
    /// Right inset.
    #[serde(default)]
    pub right: f64,
    /// Top inset.
    #[serde(default)]
    pub top: f64,
}

impl BorderInsets {
    /// Build insets from the four components.
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Uniform insets on all four edges.
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// True when every component is zero.
    pub fn is_zero(self) -> bool {
        self.left == 0.0 && self.bottom == 0.0 && self.right == 0.0 && self.top == 0.0
    }

    /// Scale every component by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            left: self.left * factor,
            bottom: self.bottom * factor,
            right: self.right * factor,
            top: self.top * factor,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Per-axis UV flip options for tiled fills.
///
/// When enabled, the flip alternates across the grid: horizontal flips
/// apply to odd tile rows, vertical flips to odd tile columns. Flipping
/// swaps the quad's UV extents on that axis; positions are unaffected.
pub struct FlipOptions {
    /// Mirror the U coordinates of odd tile rows.
    #[serde(default)]
    pub horizontal: bool,
    /// Mirror the V coordinates of odd tile columns.
    #[serde(default)]
    pub vertical: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
