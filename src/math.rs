//! Slider geometry shared by painting and hit testing.
//! Coordinates are view-local logical pixels.

use floem::kurbo::{Point, Rect, Vec2};

use crate::constants;

/// X offset of a tick placed at `percent` (0–100) on a track `width` wide.
pub fn tick_x(percent: f64, width: f64) -> f64 {
    percent * width / 100.0
}

/// The rect the track strips are drawn into.
pub fn track_rect(bounds: Rect) -> Rect {
    bounds.inset((-constants::TRACK_INSET_X, -constants::TRACK_INSET_Y))
}

/// Position of `value` within `min..=max` as 0.0–1.0.
///
/// A degenerate range pins the value to the left edge.
pub fn value_to_fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !(span > 0.0) || !value.is_finite() {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

pub fn fraction_to_value(fraction: f64, min: f64, max: f64) -> f64 {
    if !(max > min) {
        return min;
    }
    min + fraction.clamp(0.0, 1.0) * (max - min)
}

/// Thumb center x for a value fraction; the thumb travels inside the bounds.
pub fn thumb_center_x(fraction: f64, bounds_width: f64) -> f64 {
    let half = constants::THUMB_SIZE / 2.0;
    let usable = (bounds_width - constants::THUMB_SIZE).max(0.0);
    half + fraction.clamp(0.0, 1.0) * usable
}

/// Inverse of [`thumb_center_x`], clamped to 0.0–1.0.
pub fn pointer_to_fraction(x: f64, bounds_width: f64) -> f64 {
    let half = constants::THUMB_SIZE / 2.0;
    let usable = bounds_width - constants::THUMB_SIZE;
    if usable > 0.0 {
        ((x - half) / usable).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Thumb bounding rect, vertically centered in the view.
pub fn thumb_rect(fraction: f64, bounds: Rect) -> Rect {
    let cx = bounds.x0 + thumb_center_x(fraction, bounds.width());
    let cy = bounds.center().y;
    Rect::from_center_size(
        Point::new(cx, cy),
        (constants::THUMB_SIZE, constants::THUMB_SIZE),
    )
}

/// Tooltip frame: the thumb rect lifted by 1.5 thumb heights and grown
/// by 20 horizontally and 10 vertically on each side.
pub fn tooltip_frame(thumb: Rect) -> Rect {
    let lifted = thumb + Vec2::new(0.0, -constants::TOOLTIP_LIFT * thumb.height());
    lifted.inset((constants::TOOLTIP_GROW_X, constants::TOOLTIP_GROW_Y))
}

/// Format a value the way the tooltip displays it (two decimals).
///
/// The value is narrowed to `f32` first, so `12.345` reads as `12.35`
/// rather than exposing the binary expansion of the `f64`.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value as f32)
}

/// Read a displayed value back. Absent or unparsable text is zero.
pub fn parse_value(text: Option<&str>) -> f64 {
    text.and_then(|t| t.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tick_edges_map_to_track_edges() {
        assert_eq!(tick_x(0.0, 300.0), 0.0);
        assert_eq!(tick_x(100.0, 300.0), 300.0);
        assert_eq!(tick_x(50.0, 300.0), 150.0);
    }

    #[test]
    fn track_rect_is_inset() {
        let r = track_rect(Rect::new(0.0, 0.0, 200.0, 34.0));
        assert_eq!(r, Rect::new(1.0, 10.0, 199.0, 24.0));
    }

    #[test]
    fn degenerate_range_pins_left() {
        assert_eq!(value_to_fraction(5.0, 3.0, 3.0), 0.0);
        assert_eq!(value_to_fraction(f64::NAN, 0.0, 1.0), 0.0);
        assert_eq!(fraction_to_value(0.7, 3.0, 3.0), 3.0);
    }

    #[test]
    fn thumb_stays_inside_bounds() {
        let b = Rect::new(0.0, 0.0, 200.0, 34.0);
        assert_eq!(thumb_rect(0.0, b).x0, 0.0);
        assert_eq!(thumb_rect(1.0, b).x1, 200.0);
    }

    #[test]
    fn tooltip_is_lifted_and_grown() {
        let thumb = Rect::new(10.0, 100.0, 38.0, 128.0);
        let frame = tooltip_frame(thumb);
        assert_eq!(frame, Rect::new(-10.0, 48.0, 58.0, 96.0));
        assert_eq!(frame.width(), thumb.width() + 40.0);
        assert_eq!(frame.height(), thumb.height() + 20.0);
        assert_eq!(frame.center().x, thumb.center().x);
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_value(37.0), "37.00");
        assert_eq!(format_value(12.345), "12.35");
        assert_eq!(format_value(-0.5), "-0.50");
        assert_eq!(format_value(0.0), "0.00");
    }

    #[test]
    fn parse_falls_back_to_zero() {
        assert_eq!(parse_value(None), 0.0);
        assert_eq!(parse_value(Some("abc")), 0.0);
        assert_eq!(parse_value(Some("42.50")), 42.5);
    }

    proptest! {
        #[test]
        fn tick_mapping_is_linear(p in 0.0f64..=100.0, w in 1.0f64..4000.0) {
            let x = tick_x(p, w);
            prop_assert!(x >= 0.0 && x <= w * (1.0 + 1e-12));
            prop_assert!((x - p / 100.0 * w).abs() < 1e-9 * w.max(1.0));
        }

        #[test]
        fn pointer_inverts_thumb_position(f in 0.0f64..=1.0, w in 40.0f64..2000.0) {
            let x = thumb_center_x(f, w);
            prop_assert!((pointer_to_fraction(x, w) - f).abs() < 1e-9);
        }

        #[test]
        fn formatted_value_has_two_decimals(v in -1.0e4f64..1.0e4) {
            let text = format_value(v);
            let (_, frac) = text.split_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
            prop_assert!((parse_value(Some(&text)) - v).abs() <= 0.006);
        }
    }
}
