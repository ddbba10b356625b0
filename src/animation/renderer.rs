use std::time::Duration;

use rand::Rng;

use super::{
    particle::{CloudPuff, LensFlareSpot, Particle, RainDrop, Snowflake, SunRay},
    store::ParticleStore,
    surface::{Paint, Point, Rgb, Surface},
};

/// Motion constants are tuned per 1/60 s step.
pub(crate) const STEPS_PER_SEC: f32 = 60.0;
const MAX_FRAME_SECS: f32 = 0.25;
const FLARE_PULSE_STEP: f32 = 0.02;

const RAIN_COLOR: Rgb = Rgb::new(31, 184, 205);
const STORM_RAIN_COLOR: Rgb = Rgb::new(116, 185, 255);
const CLOUD_ALPHA: f32 = 0.8;
const RAY_THICKNESS: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Frame delta in seconds, clamped so a stalled terminal does not teleport particles.
#[must_use]
pub fn frame_secs(dt: Duration) -> f32 {
    dt.as_secs_f32().clamp(0.0, MAX_FRAME_SECS)
}

/// Number of 60 Hz motion steps covered by `dt`.
#[must_use]
pub fn motion_steps(dt: Duration) -> f32 {
    frame_secs(dt) * STEPS_PER_SEC
}

/// Advances, wraps and paints every particle in `store` onto `surface`.
pub fn render_frame<S: Surface + ?Sized, R: Rng>(
    store: &mut ParticleStore,
    surface: &mut S,
    dt: Duration,
    rng: &mut R,
) {
    let bounds = Bounds {
        width: surface.width(),
        height: surface.height(),
    };
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return;
    }
    let steps = motion_steps(dt);
    store.for_each_mut(|particle| {
        advance(particle, steps, bounds, rng);
        paint(particle, surface);
    });
}

pub fn advance<R: Rng>(particle: &mut Particle, steps: f32, bounds: Bounds, rng: &mut R) {
    match particle {
        Particle::RainDrop(drop) => advance_rain(drop, steps, bounds, rng),
        Particle::Snowflake(flake) => advance_snow(flake, steps, bounds, rng),
        Particle::CloudPuff(cloud) => advance_cloud(cloud, steps, bounds),
        Particle::SunRay(ray) => ray.angle += ray.rotation_speed * steps,
        Particle::LensFlareSpot(spot) => spot.phase += FLARE_PULSE_STEP * steps,
    }
}

fn advance_rain<R: Rng>(drop: &mut RainDrop, steps: f32, bounds: Bounds, rng: &mut R) {
    drop.y += drop.speed * steps;
    drop.x -= drop.speed * drop.drift * steps;
    if drop.y > bounds.height {
        drop.y = -drop.length;
        drop.x = rng.random_range(0.0..bounds.width);
    }
}

fn advance_snow<R: Rng>(flake: &mut Snowflake, steps: f32, bounds: Bounds, rng: &mut R) {
    flake.y += flake.speed * steps;
    flake.x += flake.drift * steps;
    flake.rotation += flake.rotation_speed * steps;
    if flake.y > bounds.height {
        flake.y = -flake.radius;
        flake.x = rng.random_range(0.0..bounds.width);
    }
    if flake.x < 0.0 {
        flake.x += bounds.width;
    } else if flake.x > bounds.width {
        flake.x -= bounds.width;
    }
}

fn advance_cloud(cloud: &mut CloudPuff, steps: f32, bounds: Bounds) {
    cloud.x += cloud.speed * steps;
    if cloud.x > bounds.width + cloud.radius {
        cloud.x = -cloud.radius;
    }
}

pub fn paint<S: Surface + ?Sized>(particle: &Particle, surface: &mut S) {
    match particle {
        Particle::RainDrop(drop) => paint_rain(drop, surface),
        Particle::Snowflake(flake) => paint_snow(flake, surface),
        Particle::CloudPuff(cloud) => paint_cloud(cloud, surface),
        Particle::SunRay(ray) => paint_ray(ray, surface),
        Particle::LensFlareSpot(spot) => paint_flare(spot, surface),
    }
}

fn paint_rain<S: Surface + ?Sized>(drop: &RainDrop, surface: &mut S) {
    let (color, slant, width) = if drop.storm {
        (STORM_RAIN_COLOR, 3.0, 2.0)
    } else {
        (RAIN_COLOR, 2.0, 1.0)
    };
    surface.stroke_line(
        Point::new(drop.x, drop.y),
        Point::new(drop.x - slant, drop.y - drop.length),
        width,
        Paint::new(color, drop.opacity),
    );
}

fn paint_snow<S: Surface + ?Sized>(flake: &Snowflake, surface: &mut S) {
    surface.fill_circle(
        Point::new(flake.x, flake.y),
        flake.radius,
        flake.rotation,
        Paint::new(Rgb::WHITE, flake.opacity.min(1.0)),
    );
}

fn paint_cloud<S: Surface + ?Sized>(cloud: &CloudPuff, surface: &mut S) {
    surface.fill_circle(
        Point::new(cloud.x, cloud.y),
        cloud.radius,
        0.0,
        Paint::new(Rgb::WHITE, cloud.opacity * CLOUD_ALPHA),
    );
}

fn paint_ray<S: Surface + ?Sized>(ray: &SunRay, surface: &mut S) {
    surface.fill_ray(
        ray.anchor,
        ray.angle,
        ray.length,
        RAY_THICKNESS,
        Paint::new(Rgb::WHITE, ray.opacity),
    );
}

fn paint_flare<S: Surface + ?Sized>(spot: &LensFlareSpot, surface: &mut S) {
    let pulse = spot.phase.sin();
    let alpha = (spot.opacity * (0.7 + 0.3 * pulse)).clamp(0.0, 1.0);
    let radius = spot.radius * (0.85 + 0.15 * pulse);
    surface.fill_glow(
        Point::new(spot.x, spot.y),
        radius,
        Paint::new(Rgb::from_hsl(spot.hue, 1.0, 0.7), alpha),
    );
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::animation::surface::{DrawCommand, RecordingSurface};

    const FRAME: Duration = Duration::from_millis(16);
    const BOUNDS: Bounds = Bounds {
        width: 400.0,
        height: 300.0,
    };

    fn drop_at(y: f32) -> RainDrop {
        RainDrop {
            x: 200.0,
            y,
            speed: 5.0,
            length: 12.0,
            drift: 0.1,
            opacity: 0.5,
            storm: false,
        }
    }

    #[test]
    fn rain_falls_diagonally() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut particle = Particle::RainDrop(drop_at(10.0));
        advance(&mut particle, 1.0, BOUNDS, &mut rng);
        let Particle::RainDrop(drop) = particle else {
            unreachable!()
        };
        assert!((drop.y - 15.0).abs() < f32::EPSILON);
        assert!((drop.x - 199.5).abs() < f32::EPSILON);
    }

    #[test]
    fn rain_wraps_above_top_edge() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut particle = Particle::RainDrop(drop_at(298.0));
        advance(&mut particle, 1.0, BOUNDS, &mut rng);
        let Particle::RainDrop(drop) = particle else {
            unreachable!()
        };
        assert!((drop.y + 12.0).abs() < f32::EPSILON);
        assert!((0.0..400.0).contains(&drop.x));
    }

    #[test]
    fn snow_wraps_horizontally() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut particle = Particle::Snowflake(Snowflake {
            x: 399.9,
            y: 50.0,
            speed: 1.0,
            radius: 3.0,
            drift: 0.25,
            rotation: 0.0,
            rotation_speed: 0.01,
            opacity: 0.8,
        });
        advance(&mut particle, 1.0, BOUNDS, &mut rng);
        let Particle::Snowflake(flake) = particle else {
            unreachable!()
        };
        assert!(flake.x < 1.0);
        assert!((flake.rotation - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn cloud_reenters_from_left_edge() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut particle = Particle::CloudPuff(CloudPuff {
            x: 499.9,
            y: 40.0,
            speed: 0.5,
            radius: 100.0,
            opacity: 0.2,
        });
        advance(&mut particle, 1.0, BOUNDS, &mut rng);
        assert!((particle.position().x + 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rain_paints_slanted_streak() {
        let mut surface = RecordingSurface::new(400.0, 300.0);
        paint(&Particle::RainDrop(drop_at(100.0)), &mut surface);
        let DrawCommand::Line { from, to, paint, .. } = &surface.commands()[0] else {
            panic!("expected a line");
        };
        assert_eq!(*from, Point::new(200.0, 100.0));
        assert_eq!(*to, Point::new(198.0, 88.0));
        assert_eq!(paint.color, RAIN_COLOR);
    }

    #[test]
    fn frame_on_empty_surface_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut store = ParticleStore::new();
        store.seed(
            crate::animation::store::SessionId(1),
            crate::domain::weather::WeatherCategory::Rain,
            400.0,
            300.0,
            &mut rng,
        );
        let mut surface = RecordingSurface::new(0.0, 0.0);
        render_frame(&mut store, &mut surface, FRAME, &mut rng);
        assert_eq!(surface.draw_calls(), 0);
    }

    #[test]
    fn long_stalls_are_clamped() {
        assert!((motion_steps(Duration::from_secs(3)) - 15.0).abs() < f32::EPSILON);
        assert!((motion_steps(Duration::ZERO)).abs() < f32::EPSILON);
    }
}
