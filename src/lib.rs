//! # floem-mark-slider
//!
//! A horizontal range slider for [Floem](https://github.com/lapce/floem)
//! with tick marks along the track, custom track and thumb colors, and a
//! floating tooltip that shows the current value while dragging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_mark_slider::{mark_slider, LineCap, SolidColor};
//!
//! let value = RwSignal::new(40.0);
//! let slider = mark_slider(value)
//!     .range(0.0, 100.0)
//!     .marks([30.0, 50.0, 80.0])
//!     .mark_color(SolidColor::RED)
//!     .line_cap(LineCap::Square)
//!     .bar_height(8.0);
//! // Use `slider` in your Floem view tree.
//! ```
//!
//! Drag notifications go to a [`MarkSliderDelegate`], held weakly. The
//! widget-independent model is [`MarkSliderCore`], which can also be built
//! from a TOML [`SliderConfig`].

mod color;
mod config;
mod constants;
mod control;
mod delegate;
mod error;
mod math;
mod raster;
mod slider;
mod style;
mod tooltip;
mod track;
mod tracking;

pub use color::SolidColor;
pub use config::{RangeConfig, SliderConfig};
pub use control::MarkSliderCore;
pub use delegate::MarkSliderDelegate;
pub use error::ConfigError;
pub use math::{format_value, tick_x};
pub use slider::{mark_slider, MarkSlider, MarkSliderUpdate};
pub use style::{LineCap, TrackStyle};
pub use tooltip::{TooltipStyle, TooltipView};
pub use tracking::DragPhase;
