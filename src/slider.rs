//! Horizontal mark slider view.
//!
//! Paints two cached track strips (filled side up to the thumb, remaining
//! side after it) with tick marks baked in, then the thumb, then the value
//! tooltip while it is visible. The tooltip floats above the view's own
//! bounds, so leave some room over the slider in the layout.

use std::rc::{Rc, Weak};
use std::time::Instant;

use floem::kurbo::{Circle, Rect};
use floem::peniko::{self, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::SolidColor;
use crate::constants;
use crate::control::MarkSliderCore;
use crate::delegate::MarkSliderDelegate;
use crate::math;
use crate::style::{LineCap, TrackStyle};
use crate::tooltip::TooltipStyle;
use crate::track::TrackCache;
use crate::tracking::DragPhase;

/// Property changes for a mounted slider, sent with
/// `slider_id.update_state(MarkSliderUpdate::..)`.
pub enum MarkSliderUpdate {
    Value(f64),
    Range(f64, f64),
    Style(TrackStyle),
    Marks(Vec<f64>),
    MarkWidth(f64),
    MarkColor(SolidColor),
    SelectedBarColor(SolidColor),
    UnselectedBarColor(SolidColor),
    LineCap(LineCap),
    BarHeight(f64),
    ThumbImage(Option<peniko::Image>),
    ThumbColor(SolidColor),
    TooltipStyle(TooltipStyle),
}

pub struct MarkSlider {
    id: ViewId,
    core: MarkSliderCore,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    track: TrackCache,
}

/// Creates a mark slider bound to `value`.
///
/// Dragging writes the new value into the signal; external writes to the
/// signal move the thumb. The default range is 0.0–1.0, see
/// [`MarkSlider::range`].
pub fn mark_slider(value: RwSignal<f64>) -> MarkSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(MarkSliderUpdate::Value(v));
    });

    let mut core = MarkSliderCore::default();
    core.set_value(value.get_untracked());

    MarkSlider {
        id,
        core,
        size: Default::default(),
        on_change: Some(Box::new(move |v| {
            value.set(v);
        })),
        track: TrackCache::default(),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .min_width(constants::THUMB_SIZE as f32 * 2.0)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl MarkSlider {
    /// Numeric bounds of the slider; the value is clamped into them.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.core.set_range(min, max);
        self
    }

    /// Tick positions as percentages (0–100) of the track width.
    pub fn marks(mut self, marks: impl Into<Vec<f64>>) -> Self {
        self.core.set_marks(marks.into());
        self
    }

    /// Stroke width of the tick marks.
    pub fn mark_width(mut self, width: f64) -> Self {
        self.core.set_mark_width(width);
        self
    }

    /// Color of the tick marks.
    pub fn mark_color(mut self, color: SolidColor) -> Self {
        self.core.set_mark_color(color);
        self
    }

    /// Track color before the thumb.
    pub fn selected_bar_color(mut self, color: SolidColor) -> Self {
        self.core.set_selected_bar_color(color);
        self
    }

    /// Track color after the thumb.
    pub fn unselected_bar_color(mut self, color: SolidColor) -> Self {
        self.core.set_unselected_bar_color(color);
        self
    }

    /// End style of the track line.
    pub fn line_cap(mut self, cap: LineCap) -> Self {
        self.core.set_line_cap(cap);
        self
    }

    /// Track thickness.
    pub fn bar_height(mut self, height: f64) -> Self {
        self.core.set_bar_height(height);
        self
    }

    /// Draw `image` as the thumb instead of a tinted circle.
    pub fn thumb_image(mut self, image: peniko::Image) -> Self {
        self.core.set_thumb_image(Some(image));
        self
    }

    /// Thumb fill used when no thumb image is set.
    pub fn thumb_color(mut self, color: SolidColor) -> Self {
        self.core.set_thumb_color(color);
        self
    }

    /// Replace every track property at once.
    pub fn track_style(mut self, style: TrackStyle) -> Self {
        self.core.set_style(style);
        self
    }

    /// Font and colors of the value tooltip.
    pub fn tooltip_style(mut self, style: TooltipStyle) -> Self {
        self.core.set_tooltip_style(style);
        self
    }

    /// Replace the model wholesale, e.g. with one built from a
    /// [`SliderConfig`](crate::SliderConfig).
    pub fn with_core(mut self, core: MarkSliderCore) -> Self {
        let delegate = self.core.delegate();
        self.core = core;
        if let Some(delegate) = delegate {
            self.core.set_delegate(Rc::downgrade(&delegate));
        }
        self.track.invalidate();
        self
    }

    /// Notify `delegate` about drags. Only a weak handle is kept.
    pub fn delegate<D: MarkSliderDelegate + 'static>(mut self, delegate: &Rc<D>) -> Self {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.core.set_delegate(weak);
        self
    }

    pub fn core(&self) -> &MarkSliderCore {
        &self.core
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width as f64, self.size.height as f64)
    }

    fn notify_change(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.core.value());
        }
    }

    fn apply(&mut self, update: MarkSliderUpdate) {
        match update {
            MarkSliderUpdate::Value(v) => {
                self.core.set_value(v);
            }
            MarkSliderUpdate::Range(min, max) => self.core.set_range(min, max),
            MarkSliderUpdate::Style(style) => self.core.set_style(style),
            MarkSliderUpdate::Marks(marks) => self.core.set_marks(marks),
            MarkSliderUpdate::MarkWidth(w) => self.core.set_mark_width(w),
            MarkSliderUpdate::MarkColor(c) => self.core.set_mark_color(c),
            MarkSliderUpdate::SelectedBarColor(c) => self.core.set_selected_bar_color(c),
            MarkSliderUpdate::UnselectedBarColor(c) => self.core.set_unselected_bar_color(c),
            MarkSliderUpdate::LineCap(cap) => self.core.set_line_cap(cap),
            MarkSliderUpdate::BarHeight(h) => self.core.set_bar_height(h),
            MarkSliderUpdate::ThumbImage(img) => self.core.set_thumb_image(img),
            MarkSliderUpdate::ThumbColor(c) => self.core.set_thumb_color(c),
            MarkSliderUpdate::TooltipStyle(style) => self.core.set_tooltip_style(style),
        }
    }

    fn paint_thumb(&self, cx: &mut PaintCx, thumb: Rect) {
        if let Some(img) = self.core.thumb_image() {
            let hash = img.data.id().to_le_bytes();
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &hash,
                },
                thumb,
            );
            return;
        }
        let circle = Circle::new(thumb.center(), constants::THUMB_SIZE / 2.0 - 1.0);
        cx.fill(&circle, self.core.style().thumb_color.to_peniko(), 0.0);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

impl View for MarkSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<MarkSliderUpdate>() {
            self.apply(*update);
            self.id.request_paint();
        }
    }

    fn event_before_children(
        &mut self,
        cx: &mut EventCx,
        event: &Event,
    ) -> EventPropagation {
        let bounds = self.bounds();
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                if self.core.begin_tracking(e.pos, bounds, Instant::now()) {
                    self.notify_change();
                }
                self.id.request_paint();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.core.phase() == DragPhase::Tracking {
                    if self.core.continue_tracking(e.pos, bounds) {
                        self.notify_change();
                    }
                    self.id.request_paint();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                if self.core.end_tracking(Instant::now()) {
                    self.id.request_paint();
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                if self.core.cancel_tracking(Instant::now()) {
                    self.id.request_paint();
                }
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let bounds = self.bounds();
        if bounds.width() == 0.0 || bounds.height() == 0.0 {
            return;
        }
        let track = math::track_rect(bounds);
        let thumb = self.core.thumb_rect(bounds);
        let split = thumb.center().x;

        let scale = cx.scale();
        if let Some(strips) = self.track.ensure(
            self.core.style(),
            self.core.strip_generation(),
            track.width(),
            track.height(),
            scale,
        ) {
            let sides = [
                (&strips.selected, Rect::new(track.x0, track.y0, split, track.y1)),
                (&strips.unselected, Rect::new(split, track.y0, track.x1, track.y1)),
            ];
            for (strip, clip) in sides {
                cx.save();
                cx.clip(&clip);
                cx.draw_img(
                    floem_renderer::Img {
                        img: strip.img.clone(),
                        hash: &strip.hash,
                    },
                    track,
                );
                cx.restore();
            }
        }

        self.paint_thumb(cx, thumb);

        let now = Instant::now();
        let opacity = self.core.tooltip_opacity(now);
        self.core
            .tooltip()
            .paint(cx, self.core.tooltip_frame(), opacity);
        if self.core.is_fading(now) {
            self.id.request_paint();
        }
    }
}
