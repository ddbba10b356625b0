use std::time::{Duration, Instant};

pub const TWEEN_DURATION: Duration = Duration::from_millis(800);

/// Ease-out cubic count from the last shown temperature to a new one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TempTween {
    from: i32,
    to: i32,
    started: Option<Instant>,
}

impl TempTween {
    /// Starts counting from whatever is on screen at `now`.
    pub fn retarget(&mut self, target: i32, now: Instant) {
        self.from = self.value_at(now);
        self.to = target;
        self.started = Some(now);
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> i32 {
        let Some(started) = self.started else {
            return self.to;
        };
        let progress = now.saturating_duration_since(started).as_secs_f32()
            / TWEEN_DURATION.as_secs_f32();
        let eased = ease_out_cubic(progress.min(1.0));
        (self.from as f32 + (self.to - self.from) as f32 * eased).round() as i32
    }

    #[must_use]
    pub fn target(&self) -> i32 {
        self.to
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_from_zero_and_settles() {
        let start = Instant::now();
        let mut tween = TempTween::default();
        tween.retarget(20, start);
        assert_eq!(tween.value_at(start), 0);
        assert_eq!(tween.value_at(start + Duration::from_millis(400)), 18);
        assert_eq!(tween.value_at(start + TWEEN_DURATION), 20);
        assert_eq!(tween.value_at(start + Duration::from_secs(5)), 20);
    }

    #[test]
    fn retarget_mid_flight_starts_from_shown_value() {
        let start = Instant::now();
        let mut tween = TempTween::default();
        tween.retarget(20, start);
        let midway = start + Duration::from_millis(400);
        tween.retarget(68, midway);
        assert_eq!(tween.value_at(midway), 18);
        assert_eq!(tween.value_at(midway + TWEEN_DURATION), 68);
    }
}
