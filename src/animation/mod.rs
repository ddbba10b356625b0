//! Weather particle animation.
//!
//! [`AnimationEngine`] owns one [`Surface`] and at most one live session. A
//! session seeds a [`ParticleStore`] for the current weather category and
//! holds the [`FrameHandle`] that gates every frame it draws.

pub mod engine;
pub mod generate;
pub mod lightning;
pub mod particle;
pub mod raster;
pub mod renderer;
pub mod scheduler;
pub mod store;
pub mod surface;

pub use engine::{AnimationEngine, EngineOptions};
pub use particle::{Particle, ParticleKind};
pub use raster::{Cell, CellSurface};
pub use scheduler::{FrameHandle, FrameScheduler};
pub use store::{ParticleStore, SessionId};
pub use surface::{DrawCommand, Paint, Point, RecordingSurface, Rgb, Surface};
