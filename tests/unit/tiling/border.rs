use super::*;

#[test]
fn borders_scale_with_pixel_adjusted_size() {
    let border = BorderInsets::new(10.0, 10.0, 10.0, 10.0);
    let adjusted = adjusted_borders(border, Size::new(200.0, 100.0), Size::new(100.0, 100.0));
    assert_eq!(adjusted, BorderInsets::new(5.0, 10.0, 5.0, 10.0));
}

#[test]
fn proportional_rescale_keeps_component_ratio() {
    let border = BorderInsets::new(30.0, 0.0, 50.0, 0.0);
    let adjusted = adjusted_borders(border, Size::new(100.0, 100.0), Size::new(40.0, 100.0));
    assert_eq!(adjusted.left, 12.0);
    assert_eq!(adjusted.right, 20.0);
}

#[test]
fn unscaled_overflow_still_clamps() {
    // Same original and adjusted size, so only the overflow clamp runs.
    let border = BorderInsets::new(30.0, 0.0, 50.0, 0.0);
    let adjusted = adjusted_borders(border, Size::new(40.0, 100.0), Size::new(40.0, 100.0));
    assert_eq!(adjusted.left, 15.0);
    assert_eq!(adjusted.right, 25.0);
}

#[test]
fn combined_borders_never_exceed_adjusted_size() {
    let border = BorderInsets::new(60.0, 45.0, 60.0, 45.0);
    let adjusted = adjusted_borders(border, Size::new(100.0, 100.0), Size::new(80.0, 60.0));
    assert!(adjusted.left + adjusted.right <= 80.0 + 1e-9);
    assert!(adjusted.bottom + adjusted.top <= 60.0 + 1e-9);
    // The x axis scales to 48+48=96 > 80, so the overflow clamp fires and
    // the borders exactly fill the axis with no center left.
    assert!((adjusted.left + adjusted.right - 80.0).abs() < 1e-9);
}

#[test]
fn zero_original_size_skips_rescale() {
    let border = BorderInsets::uniform(10.0);
    let adjusted = adjusted_borders(border, Size::new(0.0, 0.0), Size::new(100.0, 100.0));
    assert_eq!(adjusted, border);
}

#[test]
fn zero_borders_pass_through() {
    let adjusted = adjusted_borders(
        BorderInsets::default(),
        Size::new(50.0, 50.0),
        Size::new(100.0, 100.0),
    );
    assert!(adjusted.is_zero());
}
