//! Drag phase and the tooltip fade animation.

use std::time::{Duration, Instant};

use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Tracking,
}

/// Linear opacity animation toward a target.
///
/// Retargeting mid-flight starts from the opacity reached so far.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    from: f64,
    to: f64,
    started: Option<Instant>,
    duration: Duration,
}

impl Default for Fade {
    fn default() -> Self {
        Self::settled(0.0)
    }
}

impl Fade {
    pub fn settled(opacity: f64) -> Self {
        Self {
            from: opacity,
            to: opacity,
            started: None,
            duration: constants::FADE_DURATION,
        }
    }

    /// Begin animating toward `target` at `now`.
    pub fn retarget(&mut self, target: f64, now: Instant) {
        self.from = self.opacity_at(now);
        self.to = target.clamp(0.0, 1.0);
        self.started = Some(now);
    }

    pub fn opacity_at(&self, now: Instant) -> f64 {
        let Some(started) = self.started else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * t
    }

    pub fn is_running(&self, now: Instant) -> bool {
        match self.started {
            Some(started) => now.saturating_duration_since(started) < self.duration,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_in_over_half_a_second() {
        let t0 = Instant::now();
        let mut fade = Fade::default();
        fade.retarget(1.0, t0);
        assert_eq!(fade.opacity_at(t0), 0.0);
        assert!((fade.opacity_at(t0 + Duration::from_millis(250)) - 0.5).abs() < 1e-9);
        assert_eq!(fade.opacity_at(t0 + Duration::from_millis(500)), 1.0);
        assert!(fade.is_running(t0 + Duration::from_millis(499)));
        assert!(!fade.is_running(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn retarget_starts_from_current_opacity() {
        let t0 = Instant::now();
        let mut fade = Fade::default();
        fade.retarget(1.0, t0);
        let mid = t0 + Duration::from_millis(250);
        fade.retarget(0.0, mid);
        assert!((fade.opacity_at(mid) - 0.5).abs() < 1e-9);
        assert_eq!(fade.opacity_at(mid + Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn settled_fade_is_static() {
        let fade = Fade::settled(1.0);
        let now = Instant::now();
        assert_eq!(fade.opacity_at(now), 1.0);
        assert!(!fade.is_running(now));
    }
}
