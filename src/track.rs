//! Track strips: the bar line plus tick overlay, rendered once per side.
//!
//! The filled (before-thumb) and remaining (after-thumb) sides are two
//! separate images with identical geometry that differ only in bar color.
//! At paint time each is clipped to its side of the thumb, so ticks stay
//! put while the color boundary follows the value.

use floem::peniko;

use crate::color::SolidColor;
use crate::math;
use crate::raster::Surface;
use crate::style::TrackStyle;

/// Render one strip `width` x `height` logical pixels at `scale`.
///
/// Returns `None` when the surface would be empty.
pub fn render_strip(
    style: &TrackStyle,
    bar: SolidColor,
    width: f64,
    height: f64,
    scale: f64,
) -> Option<Surface> {
    let s = scale.max(1.0);
    let pw = (width * s).round().max(0.0) as u32;
    let ph = (height * s).round().max(0.0) as u32;
    let mut surface = Surface::new(pw, ph)?;

    let mid = height / 2.0;
    let cap = style.line_cap.extent(style.height);
    surface.stroke_hline(
        cap * s,
        (width - cap) * s,
        mid * s,
        style.height * s,
        style.line_cap,
        bar,
    );

    let span = style.mark_half_span();
    for &percent in &style.marks {
        let x = math::tick_x(percent, width);
        surface.stroke_vline(
            x * s,
            (mid - span) * s,
            (mid + span) * s,
            style.mark_width * s,
            style.mark_color,
        );
    }

    Some(surface)
}

/// Render the (selected, unselected) pair.
pub fn render_strips(
    style: &TrackStyle,
    width: f64,
    height: f64,
    scale: f64,
) -> Option<(Surface, Surface)> {
    let selected = render_strip(style, style.selected_bar_color, width, height, scale)?;
    let unselected = render_strip(style, style.unselected_bar_color, width, height, scale)?;
    Some((selected, unselected))
}

pub struct StripImage {
    pub img: peniko::Image,
    pub hash: Vec<u8>,
}

impl StripImage {
    fn new(surface: Surface) -> Self {
        let img = surface.into_image();
        let hash = img.data.id().to_le_bytes().to_vec();
        Self { img, hash }
    }
}

pub struct TrackImages {
    pub selected: StripImage,
    pub unselected: StripImage,
}

/// Caches the strip pair until the style generation or pixel size changes.
#[derive(Default)]
pub struct TrackCache {
    images: Option<TrackImages>,
    key: Option<(u64, u32, u32)>,
}

impl TrackCache {
    pub fn ensure(
        &mut self,
        style: &TrackStyle,
        generation: u64,
        width: f64,
        height: f64,
        scale: f64,
    ) -> Option<&TrackImages> {
        let s = scale.max(1.0);
        let key = (
            generation,
            (width * s).round().max(0.0) as u32,
            (height * s).round().max(0.0) as u32,
        );
        if self.key != Some(key) {
            self.images = render_strips(style, width, height, scale).map(|(sel, unsel)| {
                TrackImages {
                    selected: StripImage::new(sel),
                    unselected: StripImage::new(unsel),
                }
            });
            self.key = Some(key);
            log::debug!(
                "regenerated track strips {}x{} px (generation {}, {} ticks)",
                key.1,
                key.2,
                generation,
                style.marks.len()
            );
        }
        self.images.as_ref()
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.images = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LineCap;

    fn marked_style() -> TrackStyle {
        TrackStyle {
            marks: vec![50.0],
            mark_color: SolidColor::RED,
            height: 8.0,
            ..TrackStyle::default()
        }
    }

    #[test]
    fn repeated_renders_are_pixel_identical() {
        let style = marked_style();
        let (a_sel, a_unsel) = render_strips(&style, 100.0, 14.0, 2.0).unwrap();
        let (b_sel, b_unsel) = render_strips(&style, 100.0, 14.0, 2.0).unwrap();
        assert_eq!(a_sel.pixels(), b_sel.pixels());
        assert_eq!(a_unsel.pixels(), b_unsel.pixels());
    }

    #[test]
    fn ticks_overlay_both_sides() {
        let (sel, unsel) = render_strips(&marked_style(), 100.0, 14.0, 1.0).unwrap();
        assert_eq!(sel.pixel(49, 7), [255, 0, 0, 255]);
        assert_eq!(unsel.pixel(49, 7), [255, 0, 0, 255]);
        assert_eq!(sel.pixel(30, 7), [85, 85, 85, 255]);
        assert_eq!(unsel.pixel(30, 7), [170, 170, 170, 255]);
    }

    #[test]
    fn tick_lands_at_percentage_of_width() {
        let style = TrackStyle {
            marks: vec![25.0],
            ..marked_style()
        };
        let (sel, _) = render_strips(&style, 200.0, 14.0, 1.0).unwrap();
        assert_eq!(sel.pixel(49, 7), [255, 0, 0, 255]);
        assert_eq!(sel.pixel(50, 7), [255, 0, 0, 255]);
        assert_eq!(sel.pixel(52, 7), [85, 85, 85, 255]);
    }

    #[test]
    fn no_ticks_leaves_plain_bar() {
        let style = TrackStyle {
            marks: Vec::new(),
            ..marked_style()
        };
        let strip = render_strip(&style, SolidColor::DARK_GRAY, 100.0, 14.0, 1.0).unwrap();

        let mut plain = Surface::new(100, 14).unwrap();
        plain.stroke_hline(4.0, 96.0, 7.0, 8.0, LineCap::Round, SolidColor::DARK_GRAY);
        assert_eq!(strip.pixels(), plain.pixels());
    }

    #[test]
    fn zero_sized_track_skips_rendering() {
        assert!(render_strips(&marked_style(), 0.0, 14.0, 1.0).is_none());
        let mut cache = TrackCache::default();
        assert!(cache.ensure(&marked_style(), 0, 0.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn cache_rebuilds_only_on_new_generation() {
        let style = marked_style();
        let mut cache = TrackCache::default();
        let first = cache.ensure(&style, 1, 100.0, 14.0, 1.0).unwrap().selected.hash.clone();
        let again = cache.ensure(&style, 1, 100.0, 14.0, 1.0).unwrap().selected.hash.clone();
        assert_eq!(first, again);
        let next = cache.ensure(&style, 2, 100.0, 14.0, 1.0).unwrap().selected.hash.clone();
        assert_ne!(first, next);
    }
}
