//! Toolkit-independent slider state.
//!
//! `MarkSliderCore` owns everything the view needs to paint and react to
//! pointer input: the numeric range, the track style, the thumb, the
//! tooltip and its fade, the drag phase, and a weak delegate handle. The
//! floem view in [`crate::slider`] feeds it events and reads it back when
//! painting.

use std::rc::{Rc, Weak};
use std::time::Instant;

use floem::kurbo::{Point, Rect};
use floem::peniko;

use crate::color::SolidColor;
use crate::delegate::MarkSliderDelegate;
use crate::math;
use crate::style::{non_negative, LineCap, TrackStyle};
use crate::tooltip::{TooltipStyle, TooltipView};
use crate::tracking::{DragPhase, Fade};

pub struct MarkSliderCore {
    min: f64,
    max: f64,
    value: f64,
    style: TrackStyle,
    thumb_image: Option<peniko::Image>,
    tooltip: TooltipView,
    tooltip_frame: Rect,
    fade: Fade,
    phase: DragPhase,
    delegate: Option<Weak<dyn MarkSliderDelegate>>,
    /// Bumped once per visual mutation.
    redraw_requests: u64,
    /// Bumped only when the track strips change; keys the strip cache.
    strip_generation: u64,
}

impl Default for MarkSliderCore {
    fn default() -> Self {
        Self::new(TrackStyle::default())
    }
}

impl MarkSliderCore {
    pub fn new(mut style: TrackStyle) -> Self {
        style.sanitize();
        Self {
            min: 0.0,
            max: 1.0,
            value: 0.0,
            style,
            thumb_image: None,
            tooltip: TooltipView::default(),
            tooltip_frame: Rect::ZERO,
            fade: Fade::default(),
            phase: DragPhase::Idle,
            delegate: None,
            redraw_requests: 0,
            strip_generation: 0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Value position within the range, 0.0–1.0.
    pub fn fraction(&self) -> f64 {
        math::value_to_fraction(self.value, self.min, self.max)
    }

    pub fn style(&self) -> &TrackStyle {
        &self.style
    }

    pub fn thumb_image(&self) -> Option<&peniko::Image> {
        self.thumb_image.as_ref()
    }

    pub fn tooltip(&self) -> &TooltipView {
        &self.tooltip
    }

    pub fn tooltip_frame(&self) -> Rect {
        self.tooltip_frame
    }

    pub fn tooltip_opacity(&self, now: Instant) -> f64 {
        self.fade.opacity_at(now)
    }

    pub fn is_fading(&self, now: Instant) -> bool {
        self.fade.is_running(now)
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    /// Changes whenever the track strips need rasterizing again.
    pub fn strip_generation(&self) -> u64 {
        self.strip_generation
    }

    pub fn delegate(&self) -> Option<Rc<dyn MarkSliderDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Attach a delegate without taking ownership of it.
    pub fn set_delegate(&mut self, delegate: Weak<dyn MarkSliderDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Set the value, clamped into the range. Returns whether it changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let clamped = if self.max > self.min {
            value.clamp(self.min, self.max)
        } else {
            self.min
        };
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    /// Set the bounds. Inverted bounds are swapped; non-finite ones ignored.
    pub fn set_range(&mut self, min: f64, max: f64) {
        if !min.is_finite() || !max.is_finite() {
            log::warn!("ignoring non-finite slider range {min}..{max}");
            return;
        }
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.min = lo;
        self.max = hi;
        self.set_value(self.value);
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
        log::trace!("slider redraw requested ({})", self.redraw_requests);
    }

    fn restyle_track(&mut self) {
        self.strip_generation += 1;
        self.request_redraw();
    }

    pub fn set_style(&mut self, mut style: TrackStyle) {
        style.sanitize();
        self.style = style;
        self.restyle_track();
    }

    pub fn set_marks(&mut self, marks: Vec<f64>) {
        self.style.marks = marks;
        self.style.sanitize();
        self.restyle_track();
    }

    pub fn set_mark_width(&mut self, width: f64) {
        self.style.mark_width = non_negative(width);
        self.restyle_track();
    }

    pub fn set_mark_color(&mut self, color: SolidColor) {
        self.style.mark_color = color;
        self.restyle_track();
    }

    pub fn set_selected_bar_color(&mut self, color: SolidColor) {
        self.style.selected_bar_color = color;
        self.restyle_track();
    }

    pub fn set_unselected_bar_color(&mut self, color: SolidColor) {
        self.style.unselected_bar_color = color;
        self.restyle_track();
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.style.line_cap = cap;
        self.restyle_track();
    }

    pub fn set_bar_height(&mut self, height: f64) {
        self.style.height = non_negative(height);
        self.restyle_track();
    }

    pub fn set_thumb_image(&mut self, image: Option<peniko::Image>) {
        self.thumb_image = image;
        self.request_redraw();
    }

    pub fn set_thumb_color(&mut self, color: SolidColor) {
        self.style.thumb_color = color;
        self.request_redraw();
    }

    pub fn set_tooltip_style(&mut self, style: TooltipStyle) {
        self.tooltip.set_style(style);
        self.request_redraw();
    }

    pub fn thumb_rect(&self, bounds: Rect) -> Rect {
        math::thumb_rect(self.fraction(), bounds)
    }

    fn move_to_pointer(&mut self, pos: Point, bounds: Rect) -> bool {
        let fraction = math::pointer_to_fraction(pos.x - bounds.x0, bounds.width());
        self.set_value(math::fraction_to_value(fraction, self.min, self.max))
    }

    fn follow_thumb(&mut self, bounds: Rect) {
        self.tooltip_frame = math::tooltip_frame(self.thumb_rect(bounds));
        self.tooltip.set_value(self.value);
    }

    /// Pointer went down at `pos`. Returns whether the value changed.
    ///
    /// The tooltip only appears when the press lands on the thumb. The
    /// value then jumps to the pointer either way.
    pub fn begin_tracking(&mut self, pos: Point, bounds: Rect, now: Instant) -> bool {
        self.phase = DragPhase::Tracking;
        if let Some(delegate) = self.delegate() {
            delegate.drag_started(self);
        }

        let on_thumb = self.thumb_rect(bounds).contains(pos);
        if on_thumb {
            self.follow_thumb(bounds);
            self.fade.retarget(1.0, now);
        }
        log::debug!(
            "slider drag began at ({:.1}, {:.1}), on thumb: {}",
            pos.x,
            pos.y,
            on_thumb
        );

        let changed = self.move_to_pointer(pos, bounds);
        if on_thumb {
            self.follow_thumb(bounds);
        }
        changed
    }

    /// Pointer moved while tracking. Returns whether the value changed.
    pub fn continue_tracking(&mut self, pos: Point, bounds: Rect) -> bool {
        if self.phase != DragPhase::Tracking {
            return false;
        }
        let changed = self.move_to_pointer(pos, bounds);
        self.follow_thumb(bounds);
        log::trace!("slider tooltip at {}", self.value);
        changed
    }

    /// Pointer released. Returns false if no drag was in progress.
    pub fn end_tracking(&mut self, now: Instant) -> bool {
        if self.phase != DragPhase::Tracking {
            return false;
        }
        self.phase = DragPhase::Idle;
        if let Some(delegate) = self.delegate() {
            delegate.drag_ended(self);
            delegate.dragged(self, self.value);
        }
        self.fade.retarget(0.0, now);
        log::debug!("slider drag ended at {}", self.value);
        true
    }

    /// Drag interrupted (focus loss or similar). The delegate hears the end
    /// of the drag but no final value, and the tooltip fades out.
    pub fn cancel_tracking(&mut self, now: Instant) -> bool {
        if self.phase != DragPhase::Tracking {
            return false;
        }
        self.phase = DragPhase::Idle;
        if let Some(delegate) = self.delegate() {
            delegate.drag_ended(self);
        }
        self.fade.retarget(0.0, now);
        log::debug!("slider drag cancelled at {}", self.value);
        true
    }
}
