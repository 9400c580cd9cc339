//! Standalone demo: opens a window with a mark slider.

use std::rc::Rc;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_mark_slider::{mark_slider, LineCap, MarkSliderCore, MarkSliderDelegate, SolidColor};

struct LogDelegate;

impl MarkSliderDelegate for LogDelegate {
    fn drag_started(&self, slider: &MarkSliderCore) {
        log::info!("drag started at {:.2}", slider.value());
    }

    fn drag_ended(&self, _slider: &MarkSliderCore) {
        log::info!("drag ended");
    }

    fn dragged(&self, _slider: &MarkSliderCore, value: f64) {
        log::info!("dragged to {:.2}", value);
    }
}

fn main() {
    env_logger::init();

    let value = RwSignal::new(40.0);
    let delegate = Rc::new(LogDelegate);

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    mark_slider(value)
                        .range(0.0, 100.0)
                        .marks([30.0, 50.0, 80.0])
                        .mark_width(2.0)
                        .mark_color(SolidColor::RED)
                        .line_cap(LineCap::Square)
                        .bar_height(8.0)
                        .delegate(&delegate)
                        .style(|s| s.width_full()),
                    label(move || format!("{:.2}", value.get())),
                ))
                .style(|s| s.padding(24.0).padding_top(72.0).gap(12.0).size_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 180.0))
                    .title("floem-mark-slider"),
            ),
        )
        .run();
}
