use super::*;

fn double_width() -> Viewport {
    Viewport {
        width: 750.0,
        height: 812.0,
    }
}

// =============================================================
// Linear scaling
// =============================================================

#[test]
fn scale_width_doubles_on_double_width_viewport() {
    assert_eq!(double_width().scale_width(375.0), 750.0);
}

#[test]
fn scale_height_follows_viewport_height() {
    let vp = Viewport {
        width: 375.0,
        height: 406.0,
    };
    assert_eq!(vp.scale_height(812.0), 406.0);
}

#[test]
fn reference_viewport_scales_to_identity() {
    let vp = Viewport::default();
    assert_eq!(vp.scale_width(10.0), 10.0);
    assert_eq!(vp.scale_height(10.0), 10.0);
    assert_eq!(vp.moderate_scale(10.0), 10.0);
}

// =============================================================
// Moderate scaling
// =============================================================

#[test]
fn moderate_scale_dampens_by_half() {
    // 100 + (200 - 100) * 0.5
    assert_eq!(double_width().moderate_scale(100.0), 150.0);
}

#[test]
fn moderate_scale_factor_zero_keeps_reference_size() {
    assert_eq!(double_width().moderate_scale_by(100.0, 0.0), 100.0);
}

#[test]
fn moderate_scale_factor_one_is_linear_scaling() {
    let vp = double_width();
    assert_eq!(vp.moderate_scale_by(100.0, 1.0), vp.scale_width(100.0));
}

// =============================================================
// Environment lookups and formatting
// =============================================================

#[test]
fn environment_insets_fall_back_to_zero() {
    assert_eq!(status_bar_height(), 0.0);
    assert_eq!(bottom_inset(), 0.0);
}

#[test]
fn px_formats_css_lengths() {
    assert_eq!(px(16.0), "16px");
    assert_eq!(px(22.5), "22.5px");
}
