//! Value tooltip: a rounded bubble with a downward arrow and centered text.
//!
//! The tooltip has no event handling of its own. Its owner decides where the
//! frame goes and how opaque it is, then calls [`TooltipView::paint`].

use floem::context::PaintCx;
use floem::kurbo::{BezPath, Point, Rect, Shape};
use floem::text::{Attrs, AttrsList, TextLayout, Weight};
use floem_renderer::Renderer;
use serde::{Deserialize, Serialize};

use crate::color::SolidColor;
use crate::constants;
use crate::math;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub font_size: f32,
    pub bold: bool,
    pub fill_color: SolidColor,
    pub text_color: SolidColor,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            font_size: constants::TOOLTIP_FONT,
            bold: true,
            fill_color: SolidColor::from_white(0.0, 0.8),
            text_color: SolidColor::from_white(1.0, 0.8),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipView {
    text: Option<String>,
    style: TooltipStyle,
}

impl TooltipView {
    /// Show `value` with two decimals.
    pub fn set_value(&mut self, value: f64) {
        self.text = Some(math::format_value(value));
    }

    /// The displayed text read back as a number; zero if there is none.
    pub fn value(&self) -> f64 {
        math::parse_value(self.text.as_deref())
    }

    /// Show preformatted text as-is.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn style(&self) -> &TooltipStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TooltipStyle) {
        self.style = style;
    }

    /// Top 80% of the frame, where the text sits.
    pub fn bubble_rect(frame: Rect) -> Rect {
        Rect::new(
            frame.x0,
            frame.y0,
            frame.x1,
            frame.y0 + frame.height() * constants::BUBBLE_RATIO,
        )
    }

    /// Bubble and arrow as a single fill path.
    pub fn bubble_path(frame: Rect) -> BezPath {
        let bubble = Self::bubble_rect(frame);
        let mut path = bubble
            .to_rounded_rect(constants::BUBBLE_RADIUS)
            .to_path(0.1);

        let mid = frame.center().x;
        path.move_to(Point::new(mid, frame.y1 - constants::ARROW_TIP_GAP));
        path.line_to(Point::new(mid - constants::ARROW_HALF_WIDTH, bubble.y1));
        path.line_to(Point::new(mid + constants::ARROW_HALF_WIDTH, bubble.y1));
        path.close_path();
        path
    }

    pub fn paint(&self, cx: &mut PaintCx, frame: Rect, opacity: f64) {
        if opacity <= 0.0 || frame.width() <= 0.0 || frame.height() <= 0.0 {
            return;
        }

        let fill = self.style.fill_color.with_opacity(opacity);
        cx.fill(&Self::bubble_path(frame), fill.to_peniko(), 0.0);

        let Some(text) = self.text.as_deref() else {
            return;
        };
        let weight = if self.style.bold {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new()
            .font_size(self.style.font_size)
            .weight(weight)
            .color(self.style.text_color.with_opacity(opacity).to_peniko());
        let mut layout = TextLayout::new();
        layout.set_text(text, AttrsList::new(attrs));

        let size = layout.size();
        let bubble = Self::bubble_rect(frame);
        let origin = Point::new(
            bubble.x0 + (bubble.width() - size.width) / 2.0,
            bubble.y0 + (bubble.height() - size.height) / 2.0,
        );
        cx.draw_text(&layout, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_shown_with_two_decimals() {
        let mut t = TooltipView::default();
        t.set_value(37.0);
        assert_eq!(t.text(), Some("37.00"));
        t.set_value(12.345);
        assert_eq!(t.text(), Some("12.35"));
        assert_eq!(t.value(), 12.35);
    }

    #[test]
    fn missing_or_custom_text_reads_as_zero() {
        let mut t = TooltipView::default();
        assert_eq!(t.value(), 0.0);
        t.set_text(Some("n/a".into()));
        assert_eq!(t.text(), Some("n/a"));
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn default_style_is_translucent_black_with_white_text() {
        let s = TooltipStyle::default();
        assert_eq!(s.fill_color.to_rgba8(), [0, 0, 0, 204]);
        assert_eq!(s.text_color.to_rgba8(), [255, 255, 255, 204]);
        assert!(s.bold);
        assert_eq!(s.font_size, 18.0);
    }

    #[test]
    fn bubble_takes_top_eighty_percent() {
        let frame = Rect::new(0.0, 0.0, 68.0, 50.0);
        assert_eq!(TooltipView::bubble_rect(frame), Rect::new(0.0, 0.0, 68.0, 40.0));
    }

    #[test]
    fn arrow_points_down_from_bubble_center() {
        let frame = Rect::new(0.0, 0.0, 68.0, 50.0);
        let path = TooltipView::bubble_path(frame);
        let bounds = path.bounding_box();
        assert_eq!(bounds.y1, 48.0);
        assert!(path.contains(Point::new(34.0, 45.0)));
        assert!(!path.contains(Point::new(10.0, 45.0)));
        assert!(path.contains(Point::new(34.0, 20.0)));
    }
}
