use std::f32::consts::TAU;

use rand::Rng;

use super::{
    particle::{CloudPuff, LensFlareSpot, Particle, RainDrop, Snowflake, SunRay},
    surface::Point,
};
use crate::domain::weather::WeatherCategory;

pub const RAIN_DROPS: usize = 100;
pub const STORM_DROPS: usize = 160;
pub const SNOWFLAKES: usize = 70;
pub const CLOUD_PUFFS: usize = 6;
pub const SUN_RAYS: usize = 6;
pub const LENS_FLARE_SPOTS: usize = 4;

#[must_use]
pub fn particle_count(category: WeatherCategory) -> usize {
    match category {
        WeatherCategory::Clear => SUN_RAYS + LENS_FLARE_SPOTS,
        WeatherCategory::Cloudy => CLOUD_PUFFS,
        WeatherCategory::Rain => RAIN_DROPS,
        WeatherCategory::Snow => SNOWFLAKES,
        WeatherCategory::Thunderstorm => STORM_DROPS,
    }
}

/// Builds the particle set for `category` on a `width` x `height` surface.
///
/// Counts are fixed per category; field values are uniform random. A surface
/// without area yields no particles.
pub fn generate<R: Rng>(
    category: WeatherCategory,
    width: f32,
    height: f32,
    rng: &mut R,
) -> Vec<Particle> {
    if !(width > 0.0 && height > 0.0) {
        return Vec::new();
    }
    match category {
        WeatherCategory::Clear => sunny(width, height, rng),
        WeatherCategory::Cloudy => clouds(width, height, rng),
        WeatherCategory::Rain => rain(width, height, rng),
        WeatherCategory::Snow => snow(width, height, rng),
        WeatherCategory::Thunderstorm => storm_rain(width, height, rng),
    }
}

fn rain<R: Rng>(width: f32, height: f32, rng: &mut R) -> Vec<Particle> {
    (0..RAIN_DROPS)
        .map(|_| {
            Particle::RainDrop(RainDrop {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                speed: rng.random_range(4.0..10.0),
                length: rng.random_range(10.0..30.0),
                drift: 0.1,
                opacity: rng.random_range(0.3..0.9),
                storm: false,
            })
        })
        .collect()
}

fn storm_rain<R: Rng>(width: f32, height: f32, rng: &mut R) -> Vec<Particle> {
    (0..STORM_DROPS)
        .map(|_| {
            Particle::RainDrop(RainDrop {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                speed: rng.random_range(6.0..14.0),
                length: rng.random_range(15.0..40.0),
                drift: 0.15,
                opacity: rng.random_range(0.4..1.0),
                storm: true,
            })
        })
        .collect()
}

fn snow<R: Rng>(width: f32, height: f32, rng: &mut R) -> Vec<Particle> {
    (0..SNOWFLAKES)
        .map(|_| {
            Particle::Snowflake(Snowflake {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                speed: rng.random_range(1.0..3.0),
                radius: rng.random_range(2.0..6.0),
                drift: rng.random_range(-0.25..0.25),
                rotation: 0.0,
                rotation_speed: rng.random_range(-0.01..0.01),
                opacity: rng.random_range(0.3..1.0),
            })
        })
        .collect()
}

fn clouds<R: Rng>(width: f32, height: f32, rng: &mut R) -> Vec<Particle> {
    (0..CLOUD_PUFFS)
        .map(|_| {
            Particle::CloudPuff(CloudPuff {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height * 0.6),
                speed: rng.random_range(0.2..0.7),
                radius: rng.random_range(80.0..180.0),
                opacity: rng.random_range(0.1..0.3),
            })
        })
        .collect()
}

fn sunny<R: Rng>(width: f32, height: f32, rng: &mut R) -> Vec<Particle> {
    let rays = (0..SUN_RAYS).map(|_| {
        Particle::SunRay(SunRay {
            anchor: Point::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
            angle: rng.random_range(0.0..TAU),
            length: rng.random_range(100.0..300.0),
            rotation_speed: rng.random_range(0.01..0.03),
            opacity: rng.random_range(0.1..0.4),
        })
    });
    let mut particles: Vec<Particle> = rays.collect();
    particles.extend((0..LENS_FLARE_SPOTS).map(|_| {
        Particle::LensFlareSpot(LensFlareSpot {
            x: rng.random_range(0.0..width),
            y: rng.random_range(0.0..height),
            radius: rng.random_range(20.0..60.0),
            phase: rng.random_range(0.0..TAU),
            hue: rng.random_range(30.0..60.0),
            opacity: rng.random_range(0.15..0.35),
        })
    }));
    particles
}
