use rand::Rng;

use super::{generate::generate, particle::Particle};
use crate::domain::weather::WeatherCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// Particle set for the current frame, tagged with the session that seeded it.
#[derive(Debug, Default)]
pub struct ParticleStore {
    session: Option<SessionId>,
    particles: Vec<Particle>,
}

impl ParticleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.session = None;
        self.particles.clear();
    }

    /// Replaces the whole particle set with a fresh one for `category`.
    pub fn seed<R: Rng>(
        &mut self,
        session: SessionId,
        category: WeatherCategory,
        width: f32,
        height: f32,
        rng: &mut R,
    ) {
        self.particles = generate(category, width, height, rng);
        self.session = Some(session);
    }

    pub fn for_each(&self, mut visitor: impl FnMut(&Particle)) {
        for particle in &self.particles {
            visitor(particle);
        }
    }

    pub fn for_each_mut(&mut self, mut visitor: impl FnMut(&mut Particle)) {
        for particle in &mut self.particles {
            visitor(particle);
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
