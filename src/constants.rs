//! Sizing, timing, and default styling constants for the slider.

use std::time::Duration;

/// Horizontal inset of the track rect inside the view bounds
pub const TRACK_INSET_X: f64 = 1.0;

/// Vertical inset of the track rect inside the view bounds
pub const TRACK_INSET_Y: f64 = 10.0;

/// Side length of the square thumb
pub const THUMB_SIZE: f64 = 28.0;

/// Preferred view height (track inset plus room for the thumb)
pub const SLIDER_HEIGHT: f32 = 34.0;

/// Tooltip sits this many thumb heights above the thumb
pub const TOOLTIP_LIFT: f64 = 1.5;

/// Tooltip frame grows by this much on each horizontal side of the thumb rect
pub const TOOLTIP_GROW_X: f64 = 20.0;

/// Tooltip frame grows by this much on each vertical side of the thumb rect
pub const TOOLTIP_GROW_Y: f64 = 10.0;

/// Fraction of the tooltip height taken by the rounded bubble
pub const BUBBLE_RATIO: f64 = 0.8;

/// Bubble corner radius
pub const BUBBLE_RADIUS: f64 = 6.0;

/// Half width of the arrow base under the bubble
pub const ARROW_HALF_WIDTH: f64 = 6.0;

/// Gap between the arrow tip and the bottom of the tooltip frame
pub const ARROW_TIP_GAP: f64 = 2.0;

/// Tooltip fade in/out duration
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Tooltip font size
pub const TOOLTIP_FONT: f32 = 18.0;

/// Default tick stroke width
pub const MARK_WIDTH: f64 = 2.0;

/// Default track thickness
pub const BAR_HEIGHT: f64 = 12.0;

/// Supersampling grid per axis used by the strip rasterizer
pub const SUPERSAMPLE: u32 = 4;
