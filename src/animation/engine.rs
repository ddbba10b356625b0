use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    lightning::Lightning,
    renderer::{frame_secs, render_frame},
    scheduler::{FrameHandle, FrameScheduler},
    store::{ParticleStore, SessionId},
    surface::Surface,
};
use crate::domain::weather::{WeatherCategory, weather_code_to_category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// When false no particles are seeded; the presentation category still tracks
    /// weather updates.
    pub enabled: bool,
    pub lightning: bool,
    /// Fixed seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            lightning: true,
            seed: None,
        }
    }
}

#[derive(Debug)]
struct AnimationSession {
    id: SessionId,
    category: WeatherCategory,
    frame: FrameHandle,
    lightning: Option<Lightning>,
    rng: StdRng,
}

/// Owns the drawing surface and the single live animation session.
///
/// Every entry point that changes what is shown (weather update, resize,
/// attach) retires the running session before a new one is seeded.
#[derive(Debug)]
pub struct AnimationEngine<S> {
    options: EngineOptions,
    surface: Option<S>,
    store: ParticleStore,
    scheduler: FrameScheduler,
    session: Option<AnimationSession>,
    category: Option<WeatherCategory>,
    seeds: StdRng,
    next_session: u64,
    frames_drawn: u64,
}

impl<S: Surface> AnimationEngine<S> {
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        Self {
            options,
            surface: None,
            store: ParticleStore::new(),
            scheduler: FrameScheduler::new(),
            session: None,
            category: None,
            seeds: StdRng::seed_from_u64(seed),
            next_session: 0,
            frames_drawn: 0,
        }
    }

    /// Attaches the drawing surface and starts a session for the last requested
    /// category (Clear before any weather arrived).
    pub fn attach_surface(&mut self, surface: S) {
        self.retire();
        self.surface = Some(surface);
        self.start_session(self.category.unwrap_or(WeatherCategory::Clear));
    }

    pub fn on_weather_updated(&mut self, weather_code: Option<u8>) {
        let category = weather_code.map_or(WeatherCategory::Clear, weather_code_to_category);
        tracing::debug!(?weather_code, ?category, "weather update for animation");
        self.start_session(category);
    }

    /// Resizes the surface and reseeds; particles are never rescaled.
    pub fn on_surface_resized(&mut self, width: f32, height: f32) {
        if self.surface.is_none() {
            return;
        }
        self.retire();
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
        if let Some(category) = self.category {
            self.start_session(category);
        }
    }

    /// Stops the frame loop, releases every particle and blanks the surface.
    pub fn teardown(&mut self) {
        self.retire();
        self.category = None;
        tracing::debug!("animation engine torn down");
    }

    /// Retires the running session but keeps the requested category.
    pub fn retire(&mut self) {
        if let Some(session) = self.session.take() {
            self.scheduler.cancel(session.frame);
            tracing::debug!(session = session.id.0, "animation session retired");
        }
        self.store.clear();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
    }

    /// Handle of the frame loop that may currently draw.
    #[must_use]
    pub fn current_frame(&self) -> Option<FrameHandle> {
        self.session.as_ref().map(|session| session.frame)
    }

    /// Runs one frame of the live session. Returns whether anything was drawn.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.current_frame() {
            Some(handle) => self.run_frame(handle, dt),
            None => false,
        }
    }

    /// Runs one frame on behalf of `handle`; stale or cancelled handles are
    /// rejected before anything is touched.
    pub fn run_frame(&mut self, handle: FrameHandle, dt: Duration) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if self.store.session() != Some(session.id) {
            return false;
        }
        let store = &mut self.store;
        let drawn = self
            .scheduler
            .dispatch(handle, || {
                surface.clear();
                render_frame(store, surface, dt, &mut session.rng);
                if let Some(lightning) = session.lightning.as_mut() {
                    let (width, height) = (surface.width(), surface.height());
                    lightning.advance(frame_secs(dt), width, height, &mut session.rng);
                    lightning.paint(surface);
                }
            })
            .is_some();
        if drawn {
            self.frames_drawn += 1;
        }
        drawn
    }

    fn start_session(&mut self, category: WeatherCategory) {
        self.retire();
        self.category = Some(category);
        if !self.options.enabled {
            return;
        }
        let Some(surface) = self.surface.as_ref() else {
            tracing::debug!(?category, "no surface attached; animation deferred");
            return;
        };
        let (width, height) = (surface.width(), surface.height());

        self.next_session += 1;
        let id = SessionId(self.next_session);
        let mut rng = StdRng::seed_from_u64(self.seeds.random());
        self.store.seed(id, category, width, height, &mut rng);
        let lightning = (category == WeatherCategory::Thunderstorm && self.options.lightning)
            .then(|| Lightning::new(&mut rng));
        let frame = self.scheduler.start();
        self.session = Some(AnimationSession {
            id,
            category,
            frame,
            lightning,
            rng,
        });
        tracing::debug!(
            session = id.0,
            ?category,
            particles = self.store.len(),
            width,
            height,
            "animation session started"
        );
    }

    /// Category currently driving the backdrop, if any weather was requested.
    #[must_use]
    pub fn presentation(&self) -> Option<WeatherCategory> {
        self.category
    }

    /// Category of the live session.
    #[must_use]
    pub fn active_category(&self) -> Option<WeatherCategory> {
        self.session.as_ref().map(|session| session.category)
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|session| session.id)
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    #[must_use]
    pub fn lightning(&self) -> Option<&Lightning> {
        self.session
            .as_ref()
            .and_then(|session| session.lightning.as_ref())
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.lightning().is_some_and(Lightning::is_flashing)
    }
}
