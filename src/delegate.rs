use crate::control::MarkSliderCore;

/// Drag notifications from a mark slider.
///
/// The slider only keeps a `Weak` handle to its delegate. Whoever creates
/// the delegate keeps it alive; once it is dropped the notifications stop.
pub trait MarkSliderDelegate {
    /// The pointer went down on the slider.
    fn drag_started(&self, _slider: &MarkSliderCore) {}

    /// The drag finished, either by release or by cancellation.
    fn drag_ended(&self, _slider: &MarkSliderCore) {}

    /// The drag was released at `value`. Not sent for cancelled drags.
    fn dragged(&self, _slider: &MarkSliderCore, _value: f64) {}
}
