use rand::Rng;

use super::{
    renderer::STEPS_PER_SEC,
    surface::{Paint, Point, Rgb, Surface},
};

pub const BOLT_SEGMENTS: usize = 8;
pub const BOLT_JITTER: f32 = 30.0;
pub const MIN_INTERVAL_SECS: f32 = 1.0;
pub const MAX_INTERVAL_SECS: f32 = 5.0;
/// Strike chance per 1/60 s step once the idle interval has passed.
pub const STRIKE_CHANCE: f64 = 0.03;
pub const FLASH_SECS: f32 = 0.25;

const OVERLAY_ALPHA: f32 = 0.3;
const BOLT_COLOR: Rgb = Rgb::new(240, 240, 240);
const BOLT_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub enum LightningState {
    Idle {
        elapsed: f32,
        interval: f32,
    },
    Flashing {
        remaining: f32,
        since_strike: f32,
        bolt: Vec<Point>,
    },
}

/// Thunderstorm flash timer.
///
/// Strikes only once the idle time exceeds a freshly drawn interval *and* a
/// strike trial succeeds, so flashes are never periodic and never overlap.
#[derive(Debug, Clone)]
pub struct Lightning {
    state: LightningState,
    strikes: u64,
}

impl Lightning {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            state: LightningState::Idle {
                elapsed: 0.0,
                interval: draw_interval(rng),
            },
            strikes: 0,
        }
    }

    pub fn advance<R: Rng>(&mut self, dt: f32, width: f32, height: f32, rng: &mut R) {
        let next = match &mut self.state {
            LightningState::Idle { elapsed, interval } => {
                *elapsed += dt;
                if *elapsed > *interval && rng.random_bool(strike_probability(dt)) {
                    Some(LightningState::Flashing {
                        remaining: FLASH_SECS,
                        since_strike: 0.0,
                        bolt: build_bolt(width, height, rng),
                    })
                } else {
                    None
                }
            }
            LightningState::Flashing {
                remaining,
                since_strike,
                ..
            } => {
                *remaining -= dt;
                *since_strike += dt;
                (*remaining <= 0.0).then(|| LightningState::Idle {
                    elapsed: *since_strike,
                    interval: draw_interval(rng),
                })
            }
        };

        if let Some(state) = next {
            if matches!(state, LightningState::Flashing { .. }) {
                self.strikes += 1;
                tracing::trace!(strikes = self.strikes, "lightning strike");
            }
            self.state = state;
        }
    }

    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        let LightningState::Flashing { bolt, .. } = &self.state else {
            return;
        };
        let fade = self.fade();
        surface.fill_overlay(Paint::new(Rgb::WHITE, fade * OVERLAY_ALPHA));
        surface.stroke_polyline(bolt, BOLT_WIDTH, Paint::new(BOLT_COLOR, fade));
    }

    /// Remaining flash intensity, `0.0` while idle.
    #[must_use]
    pub fn fade(&self) -> f32 {
        match &self.state {
            LightningState::Flashing { remaining, .. } => (remaining / FLASH_SECS).clamp(0.0, 1.0),
            LightningState::Idle { .. } => 0.0,
        }
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        matches!(self.state, LightningState::Flashing { .. })
    }

    #[must_use]
    pub fn strikes(&self) -> u64 {
        self.strikes
    }

    #[must_use]
    pub fn state(&self) -> &LightningState {
        &self.state
    }
}

/// Chance of a strike somewhere within `dt`. Compounds [`STRIKE_CHANCE`] over
/// the 60 Hz steps `dt` covers, so the frame rate does not change the odds.
#[must_use]
pub fn strike_probability(dt: f32) -> f64 {
    let steps = f64::from(dt.max(0.0) * STEPS_PER_SEC);
    (1.0 - (1.0 - STRIKE_CHANCE).powf(steps)).clamp(0.0, 1.0)
}

fn draw_interval<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS)
}

/// Jagged polyline from a random point on the top edge down to the bottom edge.
pub fn build_bolt<R: Rng>(width: f32, height: f32, rng: &mut R) -> Vec<Point> {
    let start_x = if width > 0.0 {
        rng.random_range(0.0..width)
    } else {
        0.0
    };
    let step = height / BOLT_SEGMENTS as f32;
    let mut current = Point::new(start_x, 0.0);
    let mut points = Vec::with_capacity(BOLT_SEGMENTS + 1);
    points.push(current);
    for _ in 0..BOLT_SEGMENTS {
        current.x += rng.random_range(-BOLT_JITTER..BOLT_JITTER);
        current.y += step;
        points.push(current);
    }
    points
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::animation::surface::{DrawCommand, RecordingSurface};

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn bolt_spans_top_to_bottom_in_fixed_steps() {
        let mut rng = StdRng::seed_from_u64(99);
        let bolt = build_bolt(800.0, 640.0, &mut rng);
        assert_eq!(bolt.len(), BOLT_SEGMENTS + 1);
        assert!(bolt[0].y.abs() < f32::EPSILON);
        assert!((bolt[BOLT_SEGMENTS].y - 640.0).abs() < 0.01);
        for pair in bolt.windows(2) {
            assert!((pair[1].y - pair[0].y - 80.0).abs() < 0.01);
            assert!((pair[1].x - pair[0].x).abs() <= BOLT_JITTER);
        }
    }

    #[test]
    fn never_strikes_before_minimum_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut lightning = Lightning::new(&mut rng);
        let frames = (MIN_INTERVAL_SECS / FRAME) as usize - 1;
        for _ in 0..frames {
            lightning.advance(FRAME, 800.0, 600.0, &mut rng);
        }
        assert_eq!(lightning.strikes(), 0);
    }

    #[test]
    fn strike_odds_compound_over_the_frame() {
        assert!((strike_probability(FRAME) - STRIKE_CHANCE).abs() < 1e-6);
        let quarter_rate = strike_probability(4.0 * FRAME);
        let four_frames = 1.0 - (1.0 - STRIKE_CHANCE).powi(4);
        assert!((quarter_rate - four_frames).abs() < 1e-6);
        assert!(strike_probability(0.0).abs() < f64::EPSILON);
        assert!(strike_probability(100.0) <= 1.0);
    }

    /// Mean idle-to-strike wait past the interval, in seconds.
    fn mean_wait_after_interval(dt: f32) -> f32 {
        let runs = 200;
        let mut total = 0.0;
        for seed in 0..runs {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut lightning = Lightning::new(&mut rng);
            let LightningState::Idle { interval, .. } = *lightning.state() else {
                unreachable!("starts idle");
            };
            let mut waited = 0.0;
            while !lightning.is_flashing() {
                lightning.advance(dt, 800.0, 600.0, &mut rng);
                waited += dt;
            }
            total += waited - interval;
        }
        total / runs as f32
    }

    #[test]
    fn strike_timing_does_not_depend_on_frame_rate() {
        let at_60 = mean_wait_after_interval(1.0 / 60.0);
        let at_15 = mean_wait_after_interval(1.0 / 15.0);
        // Expected wait is about 0.55 s either way; per-frame odds would make 15 fps 4x slower.
        assert!((at_60 - at_15).abs() < 0.25, "60 fps {at_60}s vs 15 fps {at_15}s");
    }

    #[test]
    fn flash_fades_out_and_returns_to_idle() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut lightning = Lightning::new(&mut rng);
        while !lightning.is_flashing() {
            lightning.advance(FRAME, 800.0, 600.0, &mut rng);
        }
        assert!((lightning.fade() - 1.0).abs() < f32::EPSILON);

        let mut surface = RecordingSurface::new(800.0, 600.0);
        lightning.paint(&mut surface);
        let commands = surface.take_commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::Overlay { .. }));
        assert!(matches!(commands[1], DrawCommand::Polyline { .. }));

        let fade_frames = (FLASH_SECS / FRAME).ceil() as usize + 1;
        for _ in 0..fade_frames {
            lightning.advance(FRAME, 800.0, 600.0, &mut rng);
        }
        assert!(!lightning.is_flashing());
        assert_eq!(lightning.strikes(), 1);

        lightning.paint(&mut surface);
        assert_eq!(surface.draw_calls(), 0);
    }
}
