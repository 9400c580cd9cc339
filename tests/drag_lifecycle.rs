use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use floem::kurbo::{Point, Rect};
use floem_mark_slider::{DragPhase, MarkSliderCore, MarkSliderDelegate, SliderConfig};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Started,
    Ended,
    Dragged(f64),
}

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<Call>>,
}

impl MarkSliderDelegate for Recorder {
    fn drag_started(&self, _slider: &MarkSliderCore) {
        self.calls.borrow_mut().push(Call::Started);
    }

    fn drag_ended(&self, _slider: &MarkSliderCore) {
        self.calls.borrow_mut().push(Call::Ended);
    }

    fn dragged(&self, _slider: &MarkSliderCore, value: f64) {
        self.calls.borrow_mut().push(Call::Dragged(value));
    }
}

const FADE: Duration = Duration::from_millis(500);

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 228.0, 34.0)
}

fn slider_with(recorder: &Rc<Recorder>) -> MarkSliderCore {
    let mut core = SliderConfig::from_toml_str(
        r#"
        [range]
        max = 100.0
        value = 50.0

        [track]
        marks = [30.0, 50.0, 80.0]
        "#,
    )
    .unwrap()
    .to_core()
    .unwrap();
    let weak: Weak<Recorder> = Rc::downgrade(recorder);
    core.set_delegate(weak);
    core
}

#[test]
fn full_drag_reports_start_end_and_final_value() {
    let recorder = Rc::new(Recorder::default());
    let mut core = slider_with(&recorder);
    let t0 = Instant::now();

    let thumb = core.thumb_rect(bounds());
    core.begin_tracking(thumb.center(), bounds(), t0);
    assert!(core.tooltip_opacity(t0 + FADE) > 0.99);

    let mut x = thumb.center().x;
    for _ in 0..5 {
        x += 10.0;
        core.continue_tracking(Point::new(x, 17.0), bounds());
        assert_eq!(
            core.tooltip().text(),
            Some(floem_mark_slider::format_value(core.value()).as_str())
        );
    }
    let final_value = core.value();
    assert!((final_value - 75.0).abs() < 1e-9);

    let t1 = t0 + FADE;
    assert!(core.end_tracking(t1));
    assert_eq!(core.phase(), DragPhase::Idle);
    assert_eq!(
        *recorder.calls.borrow(),
        vec![Call::Started, Call::Ended, Call::Dragged(final_value)]
    );
    assert_eq!(core.tooltip_opacity(t1 + FADE), 0.0);
}

#[test]
fn cancelled_drag_reports_end_without_value() {
    let recorder = Rc::new(Recorder::default());
    let mut core = slider_with(&recorder);
    let t0 = Instant::now();

    let thumb = core.thumb_rect(bounds());
    core.begin_tracking(thumb.center(), bounds(), t0);
    core.continue_tracking(Point::new(thumb.center().x + 20.0, 17.0), bounds());
    assert!(core.cancel_tracking(t0 + FADE));

    assert_eq!(*recorder.calls.borrow(), vec![Call::Started, Call::Ended]);
    assert_eq!(core.tooltip_opacity(t0 + FADE * 2), 0.0);
}

#[test]
fn press_off_thumb_never_shows_tooltip() {
    let recorder = Rc::new(Recorder::default());
    let mut core = slider_with(&recorder);
    let t0 = Instant::now();

    core.begin_tracking(Point::new(5.0, 17.0), bounds(), t0);
    for step in 1..=4 {
        let now = t0 + Duration::from_millis(100 * step);
        core.continue_tracking(Point::new(5.0 + 10.0 * step as f64, 17.0), bounds());
        assert_eq!(core.tooltip_opacity(now), 0.0);
    }
    core.end_tracking(t0 + FADE);

    assert_eq!(recorder.calls.borrow().len(), 3);
    assert_eq!(recorder.calls.borrow()[0], Call::Started);
}

#[test]
fn dropped_delegate_is_not_kept_alive() {
    let recorder = Rc::new(Recorder::default());
    let mut core = slider_with(&recorder);
    assert_eq!(Rc::strong_count(&recorder), 1);
    drop(recorder);

    assert!(core.delegate().is_none());
    let thumb = core.thumb_rect(bounds());
    core.begin_tracking(thumb.center(), bounds(), Instant::now());
    assert!(core.end_tracking(Instant::now()));
}

#[test]
fn style_mutations_each_count_once() {
    let recorder = Rc::new(Recorder::default());
    let mut core = slider_with(&recorder);
    let before = core.redraw_requests();
    core.set_marks(Vec::new());
    core.set_mark_width(4.0);
    core.set_bar_height(6.0);
    assert_eq!(core.redraw_requests(), before + 3);
    assert!(core.style().marks.is_empty());
}
