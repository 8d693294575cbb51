use crate::foundation::core::{BorderInsets, Size};

/// Rescale declared border insets to a pixel-adjusted rect.
///
/// The adjusted rect (snapped for pixel correctness) may be slightly
/// larger or smaller than the original rect; scaling the borders by the
/// same ratio avoids hairline gaps between border and center geometry.
/// If the rect is then still smaller than the combined borders on an
/// axis, both insets are scaled down proportionally so they exactly fill
/// it, leaving no center region on that axis.
///
/// Degenerates gracefully: a zero original size skips the first rescale,
/// and zero borders pass through unchanged.
pub fn adjusted_borders(
    border: BorderInsets,
    original_size: Size,
    adjusted_size: Size,
) -> BorderInsets {
    let mut out = border;
    adjust_axis(
        &mut out.left,
        &mut out.right,
        original_size.width,
        adjusted_size.width,
    );
    adjust_axis(
        &mut out.bottom,
        &mut out.top,
        original_size.height,
        adjusted_size.height,
    );
    out
}

fn adjust_axis(near: &mut f64, far: &mut f64, original: f64, adjusted: f64) {
    if original != 0.0 {
        let ratio = adjusted / original;
        *near *= ratio;
        *far *= ratio;
    }

    let combined = *near + *far;
    if adjusted < combined && combined != 0.0 {
        let ratio = adjusted / combined;
        *near *= ratio;
        *far *= ratio;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tiling/border.rs"]
mod tests;
