use super::surface::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    RainDrop,
    Snowflake,
    CloudPuff,
    SunRay,
    LensFlareSpot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub length: f32,
    /// Horizontal travel per unit of fall.
    pub drift: f32,
    pub opacity: f32,
    /// Storm drops are heavier and painted thicker.
    pub storm: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub radius: f32,
    pub drift: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudPuff {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunRay {
    pub anchor: Point,
    pub angle: f32,
    pub length: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LensFlareSpot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub phase: f32,
    /// Degrees.
    pub hue: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Particle {
    RainDrop(RainDrop),
    Snowflake(Snowflake),
    CloudPuff(CloudPuff),
    SunRay(SunRay),
    LensFlareSpot(LensFlareSpot),
}

impl Particle {
    #[must_use]
    pub fn kind(&self) -> ParticleKind {
        match self {
            Self::RainDrop(_) => ParticleKind::RainDrop,
            Self::Snowflake(_) => ParticleKind::Snowflake,
            Self::CloudPuff(_) => ParticleKind::CloudPuff,
            Self::SunRay(_) => ParticleKind::SunRay,
            Self::LensFlareSpot(_) => ParticleKind::LensFlareSpot,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        match self {
            Self::RainDrop(p) => Point::new(p.x, p.y),
            Self::Snowflake(p) => Point::new(p.x, p.y),
            Self::CloudPuff(p) => Point::new(p.x, p.y),
            Self::SunRay(p) => p.anchor,
            Self::LensFlareSpot(p) => Point::new(p.x, p.y),
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        match self {
            Self::RainDrop(p) => p.opacity,
            Self::Snowflake(p) => p.opacity,
            Self::CloudPuff(p) => p.opacity,
            Self::SunRay(p) => p.opacity,
            Self::LensFlareSpot(p) => p.opacity,
        }
    }
}
