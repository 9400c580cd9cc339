//! Track appearance: tick marks, bar colors, thickness, and line caps.

use serde::{Deserialize, Serialize};

use crate::color::SolidColor;
use crate::constants;

/// How the ends of the track line are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Half-disc past each end
    #[default]
    Round,
    /// Half-square past each end
    Square,
    /// Flat, ends exactly at the endpoints
    Butt,
}

impl LineCap {
    /// How far the cap reaches past an endpoint for a line `thickness` wide.
    pub fn extent(self, thickness: f64) -> f64 {
        match self {
            LineCap::Round | LineCap::Square => thickness / 2.0,
            LineCap::Butt => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackStyle {
    /// Tick positions as percentages (0–100) along the track.
    pub marks: Vec<f64>,
    pub mark_width: f64,
    pub mark_color: SolidColor,
    /// Track color before the thumb.
    pub selected_bar_color: SolidColor,
    /// Track color after the thumb.
    pub unselected_bar_color: SolidColor,
    pub line_cap: LineCap,
    /// Track thickness.
    pub height: f64,
    /// Fill used for the thumb when no thumb image is set.
    pub thumb_color: SolidColor,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            marks: Vec::new(),
            mark_width: constants::MARK_WIDTH,
            mark_color: SolidColor::CLEAR,
            selected_bar_color: SolidColor::DARK_GRAY,
            unselected_bar_color: SolidColor::LIGHT_GRAY,
            line_cap: LineCap::Round,
            height: constants::BAR_HEIGHT,
            thumb_color: SolidColor::WHITE,
        }
    }
}

impl TrackStyle {
    /// Drop ticks that can't be placed and clamp negative sizes to zero.
    pub fn sanitize(&mut self) {
        let before = self.marks.len();
        self.marks.retain(|p| p.is_finite());
        if self.marks.len() != before {
            log::warn!(
                "dropped {} non-finite tick position(s)",
                before - self.marks.len()
            );
        }
        self.mark_width = non_negative(self.mark_width);
        self.height = non_negative(self.height);
    }

    /// Half length of a tick segment above and below the track centerline.
    pub fn mark_half_span(&self) -> f64 {
        (self.height / 2.0 - 1.0).max(0.0)
    }
}

pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
