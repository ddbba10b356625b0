pub mod events;
pub mod reveal;
pub mod search;
pub mod state;
pub mod tween;
